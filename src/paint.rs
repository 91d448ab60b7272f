//! Resolved paint.
//!
//! Fill and border resolution happen upstream; these are the tokens that
//! come out of it. Geometry never inspects them beyond deciding which
//! definitions and markers a shape needs.

/// Fill and border of one shape.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PaintToken {
    pub fill: Fill,
    pub border: Option<Border>,
}

impl PaintToken {
    pub fn new(fill: Fill, border: Option<Border>) -> Self {
        Self { fill, border }
    }

    /// Flat fill with no border.
    pub fn solid(color: impl Into<String>) -> Self {
        Self::new(Fill::Solid(color.into()), None)
    }

    pub fn with_border(mut self, border: Border) -> Self {
        self.border = Some(border);
        self
    }
}

#[derive(Debug, Clone, PartialEq, Default)]
pub enum Fill {
    #[default]
    None,
    Solid(String),
    Gradient(GradientFill),
    Pattern(PatternFill),
    Picture(PictureFill),
}

/// Linear gradient along `angle` degrees (clockwise, 0 = left to right).
#[derive(Debug, Clone, PartialEq)]
pub struct GradientFill {
    pub angle: f64,
    pub stops: Vec<GradientStop>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient, `0.0..=1.0`
    pub offset: f64,
    pub color: String,
    pub opacity: Option<f64>,
}

impl GradientStop {
    pub fn new(offset: f64, color: impl Into<String>) -> Self {
        Self {
            offset,
            color: color.into(),
            opacity: None,
        }
    }
}

/// Two-color preset hatch, e.g. `dnDiag` or `pct25`.
#[derive(Debug, Clone, PartialEq)]
pub struct PatternFill {
    pub preset: String,
    pub foreground: String,
    pub background: String,
}

/// Image fill; `href` is whatever the pipeline embeds (usually a data URI).
#[derive(Debug, Clone, PartialEq)]
pub struct PictureFill {
    pub href: String,
    pub stretch: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Border {
    pub color: String,
    pub width: f64,
    pub dash: DashStyle,
    pub head: Option<LineEnd>,
    pub tail: Option<LineEnd>,
}

impl Border {
    pub fn solid(color: impl Into<String>, width: f64) -> Self {
        Self {
            color: color.into(),
            width,
            dash: DashStyle::Solid,
            head: None,
            tail: None,
        }
    }

    pub fn with_dash(mut self, dash: DashStyle) -> Self {
        self.dash = dash;
        self
    }

    pub fn with_head(mut self, end: LineEnd) -> Self {
        self.head = Some(end);
        self
    }

    pub fn with_tail(mut self, end: LineEnd) -> Self {
        self.tail = Some(end);
        self
    }

    pub fn has_line_ends(&self) -> bool {
        self.head.is_some() || self.tail.is_some()
    }
}

/// Preset dash patterns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DashStyle {
    #[default]
    Solid,
    Dot,
    Dash,
    LgDash,
    DashDot,
    LgDashDot,
    LgDashDotDot,
    SysDash,
    SysDot,
    SysDashDot,
    SysDashDotDot,
}

impl DashStyle {
    /// Parse a document dash token; unknown tokens are solid.
    pub fn from_token(token: &str) -> DashStyle {
        match token {
            "dot" => DashStyle::Dot,
            "dash" => DashStyle::Dash,
            "lgDash" => DashStyle::LgDash,
            "dashDot" => DashStyle::DashDot,
            "lgDashDot" => DashStyle::LgDashDot,
            "lgDashDotDot" => DashStyle::LgDashDotDot,
            "sysDash" => DashStyle::SysDash,
            "sysDot" => DashStyle::SysDot,
            "sysDashDot" => DashStyle::SysDashDot,
            "sysDashDotDot" => DashStyle::SysDashDotDot,
            _ => DashStyle::Solid,
        }
    }

    /// Dash and gap lengths in multiples of the stroke width.
    fn pattern(self) -> &'static [f64] {
        match self {
            DashStyle::Solid => &[],
            DashStyle::Dot => &[1.0, 3.0],
            DashStyle::Dash => &[4.0, 3.0],
            DashStyle::LgDash => &[8.0, 3.0],
            DashStyle::DashDot => &[4.0, 3.0, 1.0, 3.0],
            DashStyle::LgDashDot => &[8.0, 3.0, 1.0, 3.0],
            DashStyle::LgDashDotDot => &[8.0, 3.0, 1.0, 3.0, 1.0, 3.0],
            DashStyle::SysDash => &[3.0, 1.0],
            DashStyle::SysDot => &[1.0, 1.0],
            DashStyle::SysDashDot => &[3.0, 1.0, 1.0, 1.0],
            DashStyle::SysDashDotDot => &[3.0, 1.0, 1.0, 1.0, 1.0, 1.0],
        }
    }

    /// `stroke-dasharray` lengths for a stroke of `width`, or `None` when solid.
    pub fn dash_array(self, width: f64) -> Option<Vec<f64>> {
        let pattern = self.pattern();
        if pattern.is_empty() {
            return None;
        }
        let width = if width > 0.0 && width.is_finite() { width } else { 1.0 };
        Some(pattern.iter().map(|v| v * width).collect())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LineEndKind {
    Triangle,
    Stealth,
    Diamond,
    Oval,
    Arrow,
}

impl LineEndKind {
    /// Parse a document line-end token; `none` and unknown tokens give `None`.
    pub fn from_token(token: &str) -> Option<LineEndKind> {
        match token {
            "triangle" => Some(LineEndKind::Triangle),
            "stealth" => Some(LineEndKind::Stealth),
            "diamond" => Some(LineEndKind::Diamond),
            "oval" => Some(LineEndKind::Oval),
            "arrow" => Some(LineEndKind::Arrow),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum LineEndSize {
    Small,
    #[default]
    Medium,
    Large,
}

impl LineEndSize {
    pub fn from_token(token: &str) -> LineEndSize {
        match token {
            "sm" => LineEndSize::Small,
            "lg" => LineEndSize::Large,
            _ => LineEndSize::Medium,
        }
    }

    pub fn index(self) -> usize {
        match self {
            LineEndSize::Small => 0,
            LineEndSize::Medium => 1,
            LineEndSize::Large => 2,
        }
    }
}

/// Decoration at one end of an open outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LineEnd {
    pub kind: LineEndKind,
    pub width: LineEndSize,
    pub length: LineEndSize,
}

impl LineEnd {
    pub fn new(kind: LineEndKind) -> Self {
        Self {
            kind,
            width: LineEndSize::Medium,
            length: LineEndSize::Medium,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_arrays_scale_with_width() {
        assert_eq!(DashStyle::Solid.dash_array(2.0), None);
        assert_eq!(DashStyle::from_token("dashDot").dash_array(2.0), Some(vec![8.0, 6.0, 2.0, 6.0]));
        assert_eq!(DashStyle::SysDot.dash_array(0.0), Some(vec![1.0, 1.0]));
        assert_eq!(DashStyle::from_token("nonsense"), DashStyle::Solid);
    }

    #[test]
    fn line_end_tokens() {
        assert_eq!(LineEndKind::from_token("stealth"), Some(LineEndKind::Stealth));
        assert_eq!(LineEndKind::from_token("none"), None);
        assert_eq!(LineEndSize::from_token("lg").index(), 2);
    }
}
