//! Diagnostics using miette
//!
//! Nothing in the geometry path fails hard. Every shape issue below is
//! recorded on the render context and the shape degrades to an empty or
//! partial outline. Formula problems carry the formula text so a report can
//! point at the offending token. Only writing markup returns an error.

use miette::{Diagnostic, NamedSource, SourceSpan};
use thiserror::Error;

/// Source for a guide formula, named after the guide.
pub fn formula_source(guide: &str, formula: &str) -> NamedSource<String> {
    NamedSource::new(format!("guide `{guide}`"), formula.to_string())
}

// ============================================================================
// Formula Errors
// ============================================================================

/// Problems evaluating one custom geometry formula
#[derive(Error, Diagnostic, Debug)]
pub enum FormulaError {
    #[error("malformed formula: {message}")]
    #[diagnostic(code(drawingml_geom::formula::syntax))]
    Syntax {
        message: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("cannot parse this")]
        span: SourceSpan,
    },

    #[error("unknown operator: {op}")]
    #[diagnostic(
        code(drawingml_geom::formula::unknown_operator),
        help("operators are */ +- +/ ?: abs at2 cat2 cos max min mod pin sat2 sin sqrt tan val")
    )]
    UnknownOperator {
        op: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not an operator")]
        span: SourceSpan,
    },

    #[error("`{op}` takes {expected} arguments, got {got}")]
    #[diagnostic(code(drawingml_geom::formula::arity))]
    Arity {
        op: String,
        expected: usize,
        got: usize,
        #[source_code]
        src: NamedSource<String>,
        #[label("here")]
        span: SourceSpan,
    },

    #[error("undefined guide: {name}")]
    #[diagnostic(code(drawingml_geom::formula::undefined_guide))]
    UndefinedGuide {
        name: String,
        #[source_code]
        src: NamedSource<String>,
        #[label("not defined before this point")]
        span: SourceSpan,
        #[help]
        suggestion: Option<String>,
    },

    #[error("formula result is not finite")]
    #[diagnostic(
        code(drawingml_geom::formula::non_finite),
        help("the result was replaced by 0")
    )]
    NonFinite {
        #[source_code]
        src: NamedSource<String>,
        #[label("this evaluates to NaN or infinity")]
        span: SourceSpan,
    },
}

// ============================================================================
// Shape Issues
// ============================================================================

/// Problems found while rendering one shape
#[derive(Error, Diagnostic, Debug)]
pub enum GeometryIssue {
    #[error("shape {shape}: unknown shape kind `{kind}`")]
    #[diagnostic(
        code(drawingml_geom::shape::unknown_kind),
        help("the shape renders as an empty container")
    )]
    UnknownShapeKind { shape: String, kind: String },

    #[error("shape {shape}: adjustable `{name}` has malformed formula `{formula}`")]
    #[diagnostic(
        code(drawingml_geom::shape::malformed_adjustable),
        help("expected `val <number>`; the shape default is used")
    )]
    MalformedAdjustable {
        shape: String,
        name: String,
        formula: String,
    },

    #[error("shape {shape}: guide `{guide}` could not be evaluated")]
    #[diagnostic(code(drawingml_geom::shape::malformed_formula))]
    MalformedFormula {
        shape: String,
        guide: String,
        #[source]
        #[diagnostic_source]
        source: FormulaError,
    },

    #[error("shape {shape}: degenerate box {width}x{height}")]
    #[diagnostic(code(drawingml_geom::shape::degenerate_box))]
    DegenerateBox { shape: String, width: f64, height: f64 },

    #[error("shape {shape}: contour {contour} has non-finite coordinates")]
    #[diagnostic(
        code(drawingml_geom::shape::non_finite),
        help("the contour was dropped")
    )]
    NonFiniteGeometry { shape: String, contour: usize },

    #[error("shape {shape}: {path} sweeps {degrees} degrees")]
    #[diagnostic(
        code(drawingml_geom::shape::excessive_sweep),
        help("an arc turns at most once; the sweep was cut to a full turn")
    )]
    ExcessiveSweep { shape: String, path: String, degrees: f64 },
}

// ============================================================================
// Markup Errors
// ============================================================================

/// Problems writing a rendered shape as markup
#[derive(Error, Diagnostic, Debug)]
pub enum MarkupError {
    #[error("shape {shape}: cannot serialize markup: {message}")]
    #[diagnostic(code(drawingml_geom::markup::serialize))]
    Serialize { shape: String, message: String },
}

impl GeometryIssue {
    /// Id of the shape the issue was recorded for.
    pub fn shape(&self) -> &str {
        match self {
            GeometryIssue::UnknownShapeKind { shape, .. }
            | GeometryIssue::MalformedAdjustable { shape, .. }
            | GeometryIssue::MalformedFormula { shape, .. }
            | GeometryIssue::DegenerateBox { shape, .. }
            | GeometryIssue::NonFiniteGeometry { shape, .. }
            | GeometryIssue::ExcessiveSweep { shape, .. } => shape,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn issue_reports_its_shape() {
        let issue = GeometryIssue::UnknownShapeKind {
            shape: "sp7".into(),
            kind: "chartX".into(),
        };
        assert_eq!(issue.shape(), "sp7");
        assert_eq!(issue.to_string(), "shape sp7: unknown shape kind `chartX`");
        let code = issue.code().map(|c| c.to_string());
        assert_eq!(code.as_deref(), Some("drawingml_geom::shape::unknown_kind"));
    }

    #[test]
    fn formula_error_is_the_diagnostic_source() {
        let src = "*/ w q 2";
        let issue = GeometryIssue::MalformedFormula {
            shape: "sp1".into(),
            guide: "g1".into(),
            source: FormulaError::UndefinedGuide {
                name: "q".into(),
                src: formula_source("g1", src),
                span: (5, 1).into(),
                suggestion: None,
            },
        };
        assert!(issue.diagnostic_source().is_some());
        assert!(std::error::Error::source(&issue).is_some());
    }
}
