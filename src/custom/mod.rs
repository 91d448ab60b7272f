//! Custom geometry: shapes that carry their own guide list and paths.
//!
//! Guides are evaluated in declaration order in a guide space the size of
//! the shape box in document units; each path is then rescaled from its own
//! path space into the render box.

mod eval;
mod formula;

pub use eval::{CustomOutcome, evaluate};
pub use formula::{Arg, Formula, FormulaParser, GuideScope, Op, Rule};

use crate::render::types::ContourFill;

/// A named formula (`<gd name=".." fmla=".."/>`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GuideDef {
    pub name: String,
    pub formula: String,
}

impl GuideDef {
    pub fn new(name: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
        }
    }
}

/// A point whose coordinates are literals or guide names.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PointRef {
    pub x: String,
    pub y: String,
}

impl PointRef {
    pub fn new(x: impl Into<String>, y: impl Into<String>) -> Self {
        Self { x: x.into(), y: y.into() }
    }
}

/// One path command of a custom path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PathStep {
    MoveTo(PointRef),
    LineTo(PointRef),
    CubicTo(PointRef, PointRef, PointRef),
    QuadTo(PointRef, PointRef),
    /// Radii in path space, angles in 60000ths of a degree.
    ArcTo {
        wr: String,
        hr: String,
        start: String,
        sweep: String,
    },
    Close,
}

/// One path of a custom geometry with its own path space.
#[derive(Debug, Clone, PartialEq)]
pub struct CustomPath {
    /// Path space width; `None` means the guide space
    pub width: Option<f64>,
    pub height: Option<f64>,
    pub fill: ContourFill,
    pub stroke: bool,
    pub steps: Vec<PathStep>,
}

impl CustomPath {
    pub fn new(steps: Vec<PathStep>) -> Self {
        Self {
            width: None,
            height: None,
            fill: ContourFill::Normal,
            stroke: true,
            steps,
        }
    }

    /// Set the path space, e.g. `21600` by `21600`.
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = Some(width);
        self.height = Some(height);
        self
    }

    pub fn with_fill(mut self, fill: ContourFill) -> Self {
        self.fill = fill;
        self
    }

    pub fn with_stroke(mut self, stroke: bool) -> Self {
        self.stroke = stroke;
        self
    }
}

/// Guide lists and paths of a custom shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct CustomGeometry {
    /// Adjust-value guides, overridable by the shape's adjustables
    pub adjust_values: Vec<GuideDef>,
    pub guides: Vec<GuideDef>,
    pub paths: Vec<CustomPath>,
}

impl CustomGeometry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_adjust_value(mut self, name: &str, formula: &str) -> Self {
        self.adjust_values.push(GuideDef::new(name, formula));
        self
    }

    pub fn with_guide(mut self, name: &str, formula: &str) -> Self {
        self.guides.push(GuideDef::new(name, formula));
        self
    }

    pub fn with_path(mut self, path: CustomPath) -> Self {
        self.paths.push(path);
        self
    }
}
