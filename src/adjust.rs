//! Adjustable values.
//!
//! Shapes carry an ordered list of `(name, formula)` pairs taken from the
//! document, where the formula is almost always `val <integer>` in
//! hundred-thousandths (or sixty-thousandths of a degree for angles).
//! Missing values fall back to each shape's own default; that lookup lives
//! with the formulas, this module only parses what the document supplied.

use std::collections::HashMap;

/// One adjustable as it appears in the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustValue {
    pub name: String,
    pub formula: String,
}

impl AdjustValue {
    pub fn new(name: impl Into<String>, formula: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            formula: formula.into(),
        }
    }
}

/// Ordered adjustable list of a shape.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Adjustables {
    values: Vec<AdjustValue>,
}

impl Adjustables {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder: append `name` with raw `formula` text.
    pub fn with(mut self, name: impl Into<String>, formula: impl Into<String>) -> Self {
        self.push(AdjustValue::new(name, formula));
        self
    }

    /// Builder: append `name` as `val <v>`.
    pub fn with_val(self, name: impl Into<String>, v: i64) -> Self {
        self.with(name, format!("val {v}"))
    }

    pub fn push(&mut self, value: AdjustValue) {
        self.values.push(value);
    }

    pub fn iter(&self) -> impl Iterator<Item = &AdjustValue> {
        self.values.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Raw formula text of `name`; the last entry wins on duplicates.
    pub fn formula(&self, name: &str) -> Option<&str> {
        self.values.iter().rev().find(|v| v.name == name).map(|v| v.formula.as_str())
    }

    /// Parse every `val` formula. Entries that do not parse are returned
    /// separately and left out of the resolved table.
    pub fn resolve(&self) -> (Resolved, Vec<&AdjustValue>) {
        let mut table = HashMap::new();
        let mut malformed = Vec::new();
        for value in &self.values {
            match parse_val(&value.formula) {
                Some(v) => {
                    table.insert(value.name.clone(), v);
                }
                None => malformed.push(value),
            }
        }
        (Resolved(table), malformed)
    }
}

/// Adjustables after parsing, in raw document units.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Resolved(HashMap<String, f64>);

impl Resolved {
    pub fn get(&self, name: &str) -> Option<f64> {
        self.0.get(name).copied()
    }

    /// Value of `name`, or `default` when absent.
    pub fn or(&self, name: &str, default: f64) -> f64 {
        self.get(name).unwrap_or(default)
    }
}

/// Parse `val <number>`. Surrounding whitespace is ignored.
pub fn parse_val(formula: &str) -> Option<f64> {
    let rest = formula.trim().strip_prefix("val")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let v: f64 = rest.trim().parse().ok()?;
    v.is_finite().then_some(v)
}

/// Clamp `v` into `[lo, hi]` with the source format's `pin` semantics: the
/// lower bound is checked first, so an inverted range yields `lo`.
#[inline]
pub fn pin(lo: f64, v: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_val_formulas() {
        assert_eq!(parse_val("val 50000"), Some(50000.0));
        assert_eq!(parse_val("  val   -20833 "), Some(-20833.0));
        assert_eq!(parse_val("val"), None);
        assert_eq!(parse_val("val50000"), None);
        assert_eq!(parse_val("*/ w 1 2"), None);
        assert_eq!(parse_val("val abc"), None);
    }

    #[test]
    fn resolve_splits_malformed() {
        let adj = Adjustables::new()
            .with_val("adj1", 25000)
            .with("adj2", "garbage")
            .with_val("adj1", 30000);
        let (resolved, malformed) = adj.resolve();
        assert_eq!(resolved.get("adj1"), Some(30000.0));
        assert_eq!(resolved.or("adj2", 7.0), 7.0);
        assert_eq!(malformed.len(), 1);
        assert_eq!(malformed[0].name, "adj2");
        assert_eq!(adj.formula("adj1"), Some("val 30000"));
    }

    #[test]
    fn pin_checks_lower_bound_first() {
        assert_eq!(pin(0.0, -5.0, 10.0), 0.0);
        assert_eq!(pin(0.0, 50.0, 10.0), 10.0);
        assert_eq!(pin(0.0, 5.0, 10.0), 5.0);
        assert_eq!(pin(10.0, 5.0, 0.0), 10.0);
    }
}
