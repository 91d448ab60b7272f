//! Shape descriptors in, outlines and rendered shapes out.

use facet_svg::SvgNode;

use crate::adjust::Adjustables;
use crate::custom::CustomGeometry;
use crate::kind::PresetKind;
use crate::paint::PaintToken;
use crate::types::{Bounds, Point, pt};

use super::path_data::{PathData, fmt_num};
use super::svg::ShapeStyle;

// ============================================================================
// Input
// ============================================================================

/// Which outline a shape uses.
#[derive(Debug, Clone, PartialEq)]
pub enum Geometry {
    Preset(PresetKind),
    /// A preset name the catalog does not know. Kept so the diagnostic can
    /// name it.
    Unrecognized(String),
    Custom(Box<CustomGeometry>),
}

impl Geometry {
    /// Preset by document name, falling back to [`Geometry::Unrecognized`].
    pub fn preset(name: &str) -> Geometry {
        match PresetKind::from_name(name) {
            Some(kind) => Geometry::Preset(kind),
            None => Geometry::Unrecognized(name.to_string()),
        }
    }

    pub fn label(&self) -> &str {
        match self {
            Geometry::Preset(kind) => kind.name(),
            Geometry::Unrecognized(name) => name,
            Geometry::Custom(_) => "custom",
        }
    }
}

/// One shape as handed over by the document model.
///
/// `width`/`height` are in device units (already scaled), rotation in
/// degrees clockwise.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeDescriptor {
    pub id: String,
    pub geometry: Geometry,
    pub width: f64,
    pub height: f64,
    pub rotation: f64,
    pub flip_h: bool,
    pub flip_v: bool,
    pub adjustables: Adjustables,
    pub paint: PaintToken,
}

impl ShapeDescriptor {
    pub fn new(id: impl Into<String>, geometry: Geometry, width: f64, height: f64) -> Self {
        Self {
            id: id.into(),
            geometry,
            width,
            height,
            rotation: 0.0,
            flip_h: false,
            flip_v: false,
            adjustables: Adjustables::new(),
            paint: PaintToken::default(),
        }
    }

    pub fn preset(id: impl Into<String>, kind: PresetKind, width: f64, height: f64) -> Self {
        Self::new(id, Geometry::Preset(kind), width, height)
    }

    pub fn with_rotation(mut self, degrees: f64) -> Self {
        self.rotation = degrees;
        self
    }

    pub fn with_flip(mut self, flip_h: bool, flip_v: bool) -> Self {
        self.flip_h = flip_h;
        self.flip_v = flip_v;
        self
    }

    pub fn with_adjustables(mut self, adjustables: Adjustables) -> Self {
        self.adjustables = adjustables;
        self
    }

    pub fn with_paint(mut self, paint: PaintToken) -> Self {
        self.paint = paint;
        self
    }
}

// ============================================================================
// Outline
// ============================================================================

/// How a contour is filled relative to the shape's fill.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ContourFill {
    #[default]
    Normal,
    None,
    Lighten,
    LightenLess,
    Darken,
    DarkenLess,
}

impl ContourFill {
    /// Parse a document fill-mode token; unknown tokens are `Normal`.
    pub fn from_token(token: &str) -> ContourFill {
        match token {
            "none" => ContourFill::None,
            "lighten" => ContourFill::Lighten,
            "lightenLess" => ContourFill::LightenLess,
            "darken" => ContourFill::Darken,
            "darkenLess" => ContourFill::DarkenLess,
            _ => ContourFill::Normal,
        }
    }

    pub fn is_filled(self) -> bool {
        self != ContourFill::None
    }
}

/// One path of an outline with its fill mode and stroke flag.
#[derive(Debug, Clone, PartialEq)]
pub struct Contour {
    pub path: PathData,
    pub fill: ContourFill,
    pub stroke: bool,
}

impl Contour {
    /// Filled and stroked.
    pub fn new(path: PathData) -> Self {
        Self {
            path,
            fill: ContourFill::Normal,
            stroke: true,
        }
    }

    /// Stroke only, e.g. the open strokes of brackets and callout leaders.
    pub fn stroke_only(path: PathData) -> Self {
        Self {
            path,
            fill: ContourFill::None,
            stroke: true,
        }
    }

    /// Filled without a stroke, e.g. shading layers drawn under the outline.
    pub fn fill_only(path: PathData, fill: ContourFill) -> Self {
        Self {
            path,
            fill,
            stroke: false,
        }
    }

    pub fn with_fill(mut self, fill: ContourFill) -> Self {
        self.fill = fill;
        self
    }
}

/// Shapes that are cheaper to express without path data.
#[derive(Debug, Clone, PartialEq)]
pub enum Primitive {
    Rect { x: f64, y: f64, width: f64, height: f64 },
    Ellipse { cx: f64, cy: f64, rx: f64, ry: f64 },
    Polygon(Vec<Point>),
    Polyline(Vec<Point>),
    Line { from: Point, to: Point },
}

impl Primitive {
    pub fn bounds(&self) -> Bounds {
        match self {
            Primitive::Rect { x, y, width, height } => Bounds::from_rect(*x, *y, *width, *height),
            Primitive::Ellipse { cx, cy, rx, ry } => {
                Bounds::from_rect(cx - rx.abs(), cy - ry.abs(), 2.0 * rx.abs(), 2.0 * ry.abs())
            }
            Primitive::Polygon(points) | Primitive::Polyline(points) => {
                let mut b = Bounds::new();
                for p in points {
                    b.include(*p);
                }
                b
            }
            Primitive::Line { from, to } => {
                let mut b = Bounds::new();
                b.include(*from);
                b.include(*to);
                b
            }
        }
    }

    pub fn is_open(&self) -> bool {
        matches!(self, Primitive::Polyline(_) | Primitive::Line { .. })
    }

    pub fn is_finite(&self) -> bool {
        match self {
            Primitive::Rect { x, y, width, height } => {
                x.is_finite() && y.is_finite() && width.is_finite() && height.is_finite()
            }
            Primitive::Ellipse { cx, cy, rx, ry } => {
                cx.is_finite() && cy.is_finite() && rx.is_finite() && ry.is_finite()
            }
            Primitive::Polygon(points) | Primitive::Polyline(points) => points.iter().all(|p| p.is_finite()),
            Primitive::Line { from, to } => from.is_finite() && to.is_finite(),
        }
    }
}

/// Geometry of one shape in its local box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Outline {
    pub contours: Vec<Contour>,
    pub primitives: Vec<Primitive>,
}

impl Outline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn path(path: PathData) -> Self {
        Self::new().with(Contour::new(path))
    }

    pub fn primitive(primitive: Primitive) -> Self {
        Self::new().with_primitive(primitive)
    }

    pub fn with(mut self, contour: Contour) -> Self {
        self.contours.push(contour);
        self
    }

    pub fn with_primitive(mut self, primitive: Primitive) -> Self {
        self.primitives.push(primitive);
        self
    }

    pub fn is_empty(&self) -> bool {
        self.contours.iter().all(|c| c.path.is_empty()) && self.primitives.is_empty()
    }

    pub fn bounds(&self) -> Bounds {
        let mut b = Bounds::new();
        for c in &self.contours {
            b.union(&c.path.bounds());
        }
        for p in &self.primitives {
            b.union(&p.bounds());
        }
        b
    }

    /// True when some stroke has free ends for line-end markers.
    pub fn has_open_stroke(&self) -> bool {
        self.contours.iter().any(|c| c.stroke && c.path.has_open_subpath())
            || self.primitives.iter().any(Primitive::is_open)
    }
}

// ============================================================================
// Output
// ============================================================================

/// Placement applied by the caller: rotation about `center`, then a flip.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub rotation: f64,
    pub scale_x: f64,
    pub scale_y: f64,
    pub center: Point,
}

impl Transform {
    pub fn for_shape(width: f64, height: f64, rotation: f64, flip_h: bool, flip_v: bool) -> Self {
        let rotation = if rotation.is_finite() { rotation } else { 0.0 };
        let center = pt(width / 2.0, height / 2.0);
        Self {
            rotation,
            scale_x: if flip_h { -1.0 } else { 1.0 },
            scale_y: if flip_v { -1.0 } else { 1.0 },
            center: if center.is_finite() { center } else { Point::ZERO },
        }
    }

    pub fn is_identity(&self) -> bool {
        self.rotation == 0.0 && self.scale_x == 1.0 && self.scale_y == 1.0
    }

    /// SVG `transform` attribute value, or `None` for the identity.
    ///
    /// The flip happens about the center, inside the rotation.
    pub fn to_svg_attr(&self) -> Option<String> {
        if self.is_identity() {
            return None;
        }
        let n = |v: f64| fmt_num(v, 3);
        let (cx, cy) = (self.center.x, self.center.y);
        let mut parts = Vec::new();
        if self.rotation != 0.0 {
            parts.push(format!("rotate({},{},{})", n(self.rotation), n(cx), n(cy)));
        }
        if self.scale_x != 1.0 || self.scale_y != 1.0 {
            parts.push(format!(
                "translate({},{}) scale({},{}) translate({},{})",
                n(cx),
                n(cy),
                n(self.scale_x),
                n(self.scale_y),
                n(-cx),
                n(-cy)
            ));
        }
        Some(parts.join(" "))
    }
}

/// A definition element (`<linearGradient>`, `<pattern>`, `<marker>`).
#[derive(Debug, Clone, PartialEq)]
pub struct Def {
    pub id: String,
    pub node: SvgNode,
}

/// Everything the pipeline needs to draw one shape.
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedShape {
    pub id: String,
    pub outline: Outline,
    /// Definitions first referenced by this shape
    pub defs: Vec<Def>,
    pub transform: Transform,
    pub paint: PaintToken,
    /// Resolved presentation attributes for the markup writer
    pub(crate) style: ShapeStyle,
}

impl RenderedShape {
    /// Serialized path data of every contour.
    pub fn paths(&self) -> Vec<String> {
        self.outline.contours.iter().map(|c| c.path.to_string()).collect()
    }

    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }

    /// Bounds in the local (untransformed) box.
    pub fn bounds(&self) -> Bounds {
        self.outline.bounds()
    }

    /// Local `(x, y)` mapped through the transform, for callers placing
    /// text or connectors.
    pub fn to_page(&self, p: Point) -> Point {
        let t = &self.transform;
        let flipped = t.center + (p - t.center) * glam::DVec2::new(t.scale_x, t.scale_y);
        let (s, c) = t.rotation.to_radians().sin_cos();
        let d = flipped - t.center;
        t.center + pt(d.x * c - d.y * s, d.x * s + d.y * c)
    }
}

/// External text layout: supplies the shape's text nodes, placed last
/// inside its container.
pub trait TextLayout {
    fn text_nodes(&self, shape: &RenderedShape) -> Vec<SvgNode>;
}

/// A text layout with no text.
impl TextLayout for () {
    fn text_nodes(&self, _shape: &RenderedShape) -> Vec<SvgNode> {
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_transform_has_no_attribute() {
        let t = Transform::for_shape(100.0, 80.0, 0.0, false, false);
        assert!(t.to_svg_attr().is_none());
    }

    #[test]
    fn rotation_and_flip_attribute() {
        let t = Transform::for_shape(100.0, 80.0, 90.0, true, false);
        assert_eq!(
            t.to_svg_attr().as_deref(),
            Some("rotate(90,50,40) translate(50,40) scale(-1,1) translate(-50,-40)")
        );
    }

    #[test]
    fn outline_open_stroke() {
        let closed = Outline::path(PathData::new().m(0.0, 0.0).l(1.0, 0.0).l(0.0, 1.0).z());
        assert!(!closed.has_open_stroke());
        let line = Outline::primitive(Primitive::Line {
            from: pt(0.0, 0.0),
            to: pt(1.0, 1.0),
        });
        assert!(line.has_open_stroke());
        let unstroked = Outline::new().with(Contour::fill_only(PathData::new().m(0.0, 0.0).l(5.0, 5.0), ContourFill::Darken));
        assert!(!unstroked.has_open_stroke());
    }

    #[test]
    fn geometry_preset_lookup() {
        assert_eq!(Geometry::preset("cloud"), Geometry::Preset(PresetKind::Cloud));
        assert_eq!(Geometry::preset("chartZ"), Geometry::Unrecognized("chartZ".into()));
        assert_eq!(Geometry::preset("chartZ").label(), "chartZ");
    }
}
