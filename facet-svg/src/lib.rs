//! Facet-derived SVG element types for shape markup.
//!
//! Only the elements a shape container needs are modelled: groups,
//! definitions (gradients, patterns, markers), the drawable primitives and
//! text. Every attribute is an optional string so values keep the
//! precision their producer chose.
//!
//! # Example
//!
//! ```rust
//! use facet_svg::{Group, Path, Presentation, PresentationAttrs, SvgNode, facet_xml};
//!
//! let path = Path {
//!     d: Some("M0,0 L10,0 L10,10 Z".into()),
//!     ..Path::default()
//! }
//! .with_presentation(Presentation::filled("#c00"));
//! let group = Group {
//!     id: Some("sp1".into()),
//!     children: vec![SvgNode::Path(path)],
//!     ..Group::default()
//! };
//! let markup = facet_xml::to_string(&group).unwrap();
//! assert!(markup.contains("fill=\"#c00\""));
//! ```

use facet::Facet;
use facet_xml as xml;

/// SVG namespace URI
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

/// Root SVG element, used to read a sequence of containers back.
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Svg {
    #[facet(xml::attribute)]
    pub xmlns: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Any element a shape container can hold
#[derive(Facet, Debug, Clone, PartialEq)]
#[repr(u8)]
pub enum SvgNode {
    #[facet(rename = "g")]
    G(Group),
    #[facet(rename = "defs")]
    Defs(Defs),
    #[facet(rename = "linearGradient")]
    LinearGradient(LinearGradient),
    #[facet(rename = "stop")]
    Stop(Stop),
    #[facet(rename = "pattern")]
    Pattern(Pattern),
    #[facet(rename = "image")]
    Image(Image),
    #[facet(rename = "marker")]
    Marker(Marker),
    #[facet(rename = "rect")]
    Rect(Rect),
    #[facet(rename = "ellipse")]
    Ellipse(Ellipse),
    #[facet(rename = "line")]
    Line(Line),
    #[facet(rename = "path")]
    Path(Path),
    #[facet(rename = "polygon")]
    Polygon(Polygon),
    #[facet(rename = "polyline")]
    Polyline(Polyline),
    #[facet(rename = "text")]
    Text(Text),
}

impl SvgNode {
    /// Paint attributes of a drawable element.
    pub fn presentation(&self) -> Option<Presentation> {
        match self {
            SvgNode::Rect(e) => Some(e.presentation()),
            SvgNode::Ellipse(e) => Some(e.presentation()),
            SvgNode::Line(e) => Some(e.presentation()),
            SvgNode::Path(e) => Some(e.presentation()),
            SvgNode::Polygon(e) => Some(e.presentation()),
            SvgNode::Polyline(e) => Some(e.presentation()),
            _ => None,
        }
    }

    /// `id` of a group or definition.
    pub fn id(&self) -> Option<&str> {
        match self {
            SvgNode::G(g) => g.id.as_deref(),
            SvgNode::LinearGradient(g) => g.id.as_deref(),
            SvgNode::Pattern(p) => p.id.as_deref(),
            SvgNode::Marker(m) => m.id.as_deref(),
            _ => None,
        }
    }

    /// Set the `id` of a definition; other elements are left alone.
    pub fn set_id(&mut self, id: Option<String>) {
        match self {
            SvgNode::LinearGradient(g) => g.id = id,
            SvgNode::Pattern(p) => p.id = id,
            SvgNode::Marker(m) => m.id = id,
            _ => {}
        }
    }
}

/// SVG group element (`<g>`)
#[derive(Facet, Debug, Clone, Default, PartialEq)]
#[facet(rename = "g")]
pub struct Group {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::attribute)]
    pub transform: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// SVG defs element (`<defs>`)
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Defs {
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// SVG linear gradient (`<linearGradient>`), in bounding-box units
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct LinearGradient {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::attribute)]
    pub x1: Option<String>,
    #[facet(xml::attribute)]
    pub y1: Option<String>,
    #[facet(xml::attribute)]
    pub x2: Option<String>,
    #[facet(xml::attribute)]
    pub y2: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Gradient stop (`<stop>`)
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Stop {
    #[facet(xml::attribute)]
    pub offset: Option<String>,
    #[facet(xml::attribute, rename = "stop-color")]
    pub stop_color: Option<String>,
    #[facet(xml::attribute, rename = "stop-opacity")]
    pub stop_opacity: Option<String>,
}

/// SVG pattern tile (`<pattern>`)
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Pattern {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::attribute, rename = "patternUnits")]
    pub pattern_units: Option<String>,
    #[facet(xml::attribute, rename = "patternContentUnits")]
    pub pattern_content_units: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// SVG image element (`<image>`)
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Image {
    #[facet(xml::attribute)]
    pub href: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute, rename = "preserveAspectRatio")]
    pub preserve_aspect_ratio: Option<String>,
}

/// Line-end marker (`<marker>`)
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Marker {
    #[facet(xml::attribute)]
    pub id: Option<String>,
    #[facet(xml::attribute, rename = "viewBox")]
    pub view_box: Option<String>,
    #[facet(xml::attribute, rename = "refX")]
    pub ref_x: Option<String>,
    #[facet(xml::attribute, rename = "refY")]
    pub ref_y: Option<String>,
    #[facet(xml::attribute, rename = "markerWidth")]
    pub marker_width: Option<String>,
    #[facet(xml::attribute, rename = "markerHeight")]
    pub marker_height: Option<String>,
    #[facet(xml::attribute)]
    pub orient: Option<String>,
    #[facet(xml::elements)]
    pub children: Vec<SvgNode>,
}

/// Paint attributes shared by the drawable elements.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Presentation {
    pub fill: Option<String>,
    pub fill_opacity: Option<String>,
    pub stroke: Option<String>,
    pub stroke_width: Option<String>,
    pub stroke_dasharray: Option<String>,
    pub marker_start: Option<String>,
    pub marker_end: Option<String>,
}

impl Presentation {
    /// Filled, unstroked.
    pub fn filled(fill: impl Into<String>) -> Self {
        Self {
            fill: Some(fill.into()),
            stroke: Some("none".into()),
            ..Self::default()
        }
    }
}

/// Read and replace the paint attributes of an element
pub trait PresentationAttrs {
    fn presentation(&self) -> Presentation;
    fn set_presentation(&mut self, p: Presentation);

    fn with_presentation(mut self, p: Presentation) -> Self
    where
        Self: Sized,
    {
        self.set_presentation(p);
        self
    }
}

macro_rules! impl_presentation_attrs {
    ($($ty:ty),*) => {
        $(
            impl PresentationAttrs for $ty {
                fn presentation(&self) -> Presentation {
                    Presentation {
                        fill: self.fill.clone(),
                        fill_opacity: self.fill_opacity.clone(),
                        stroke: self.stroke.clone(),
                        stroke_width: self.stroke_width.clone(),
                        stroke_dasharray: self.stroke_dasharray.clone(),
                        marker_start: self.marker_start.clone(),
                        marker_end: self.marker_end.clone(),
                    }
                }

                fn set_presentation(&mut self, p: Presentation) {
                    self.fill = p.fill;
                    self.fill_opacity = p.fill_opacity;
                    self.stroke = p.stroke;
                    self.stroke_width = p.stroke_width;
                    self.stroke_dasharray = p.stroke_dasharray;
                    self.marker_start = p.marker_start;
                    self.marker_end = p.marker_end;
                }
            }
        )*
    };
}

/// SVG rect element (`<rect>`)
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Rect {
    #[facet(xml::attribute)]
    pub x: Option<String>,
    #[facet(xml::attribute)]
    pub y: Option<String>,
    #[facet(xml::attribute)]
    pub width: Option<String>,
    #[facet(xml::attribute)]
    pub height: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
    #[facet(xml::attribute, rename = "marker-start")]
    pub marker_start: Option<String>,
    #[facet(xml::attribute, rename = "marker-end")]
    pub marker_end: Option<String>,
}

/// SVG ellipse element (`<ellipse>`)
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Ellipse {
    #[facet(xml::attribute)]
    pub cx: Option<String>,
    #[facet(xml::attribute)]
    pub cy: Option<String>,
    #[facet(xml::attribute)]
    pub rx: Option<String>,
    #[facet(xml::attribute)]
    pub ry: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
    #[facet(xml::attribute, rename = "marker-start")]
    pub marker_start: Option<String>,
    #[facet(xml::attribute, rename = "marker-end")]
    pub marker_end: Option<String>,
}

/// SVG line element (`<line>`)
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Line {
    #[facet(xml::attribute)]
    pub x1: Option<String>,
    #[facet(xml::attribute)]
    pub y1: Option<String>,
    #[facet(xml::attribute)]
    pub x2: Option<String>,
    #[facet(xml::attribute)]
    pub y2: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
    #[facet(xml::attribute, rename = "marker-start")]
    pub marker_start: Option<String>,
    #[facet(xml::attribute, rename = "marker-end")]
    pub marker_end: Option<String>,
}

/// SVG path element (`<path>`)
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Path {
    #[facet(xml::attribute)]
    pub d: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
    #[facet(xml::attribute, rename = "marker-start")]
    pub marker_start: Option<String>,
    #[facet(xml::attribute, rename = "marker-end")]
    pub marker_end: Option<String>,
}

/// SVG polygon element (`<polygon>`)
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Polygon {
    #[facet(xml::attribute)]
    pub points: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
    #[facet(xml::attribute, rename = "marker-start")]
    pub marker_start: Option<String>,
    #[facet(xml::attribute, rename = "marker-end")]
    pub marker_end: Option<String>,
}

/// SVG polyline element (`<polyline>`)
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Polyline {
    #[facet(xml::attribute)]
    pub points: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute, rename = "fill-opacity")]
    pub fill_opacity: Option<String>,
    #[facet(xml::attribute)]
    pub stroke: Option<String>,
    #[facet(xml::attribute, rename = "stroke-width")]
    pub stroke_width: Option<String>,
    #[facet(xml::attribute, rename = "stroke-dasharray")]
    pub stroke_dasharray: Option<String>,
    #[facet(xml::attribute, rename = "marker-start")]
    pub marker_start: Option<String>,
    #[facet(xml::attribute, rename = "marker-end")]
    pub marker_end: Option<String>,
}

/// SVG text element (`<text>`), filled in by an external text layout
#[derive(Facet, Debug, Clone, Default, PartialEq)]
pub struct Text {
    #[facet(xml::attribute)]
    pub x: Option<String>,
    #[facet(xml::attribute)]
    pub y: Option<String>,
    #[facet(xml::attribute)]
    pub fill: Option<String>,
    #[facet(xml::attribute)]
    pub style: Option<String>,
    #[facet(xml::attribute, rename = "text-anchor")]
    pub text_anchor: Option<String>,
    #[facet(xml::attribute, rename = "dominant-baseline")]
    pub dominant_baseline: Option<String>,
    #[facet(xml::text)]
    pub content: String,
}

impl_presentation_attrs!(Rect, Ellipse, Line, Path, Polygon, Polyline);

// Re-export facet_xml for convenience
pub use facet_xml;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presentation_round_trips_through_an_element() {
        let p = Presentation {
            fill: Some("url(#grad-1)".into()),
            stroke: Some("#000".into()),
            stroke_width: Some("2".into()),
            marker_end: Some("url(#s-tail)".into()),
            ..Presentation::default()
        };
        let line = Line::default().with_presentation(p.clone());
        assert_eq!(line.presentation(), p);
        assert_eq!(SvgNode::Line(line).presentation(), Some(p));
        assert_eq!(SvgNode::Defs(Defs::default()).presentation(), None);
    }

    #[test]
    fn ids_only_land_on_definitions() {
        let mut marker = SvgNode::Marker(Marker::default());
        marker.set_id(Some("m".into()));
        assert_eq!(marker.id(), Some("m"));
        let mut stop = SvgNode::Stop(Stop::default());
        stop.set_id(Some("s".into()));
        assert_eq!(stop.id(), None);
    }
}
