//! SVG markup: fill definitions, line-end markers, and the shape container,
//! built as `facet-svg` nodes and serialized with `facet-xml`.

use facet_svg::{
    Defs, Ellipse, Group, Image, Line, LinearGradient, Marker, Path, Pattern, Polygon, Polyline, Presentation,
    PresentationAttrs, Rect, Stop, SvgNode, facet_xml,
};

use crate::errors::MarkupError;
use crate::paint::{Fill, GradientFill, LineEnd, LineEndKind, PaintToken, PatternFill, PictureFill};
use crate::types::Point;

use super::context::{RenderOptions, StyleTable};
use super::defaults::{PATTERN_TILE, STROKE_WIDTH};
use super::path_data::fmt_num;
use super::types::{Contour, ContourFill, Def, Outline, Primitive, RenderedShape, TextLayout};

/// Presentation attributes resolved when the shape is rendered.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct ShapeStyle {
    /// `fill` value of the base contours
    pub fill_ref: String,
    pub stroke: Option<StrokeStyle>,
    pub marker_head: Option<String>,
    pub marker_tail: Option<String>,
    pub precision: usize,
    /// Overlay opacities: lighten, lightenLess, darken, darkenLess
    pub shades: [f64; 4],
}

#[derive(Debug, Clone, PartialEq)]
pub(crate) struct StrokeStyle {
    pub color: String,
    pub width: f64,
    pub dash: Option<Vec<f64>>,
}

impl ShapeStyle {
    /// Overlay color and opacity for a shaded contour.
    fn shade(&self, fill: ContourFill) -> Option<(&'static str, f64)> {
        if self.fill_ref == "none" {
            return None;
        }
        match fill {
            ContourFill::Lighten => Some(("#ffffff", self.shades[0])),
            ContourFill::LightenLess => Some(("#ffffff", self.shades[1])),
            ContourFill::Darken => Some(("#000000", self.shades[2])),
            ContourFill::DarkenLess => Some(("#000000", self.shades[3])),
            ContourFill::Normal | ContourFill::None => None,
        }
    }

    fn num(&self, v: f64) -> String {
        fmt_num(v, self.precision)
    }

    /// Fill and stroke attributes, with markers when the stroke has free
    /// ends.
    fn paint(&self, fill: &str, stroked: bool, open: bool) -> Presentation {
        let mut p = Presentation::filled(fill);
        let Some(stroke) = self.stroke.as_ref().filter(|_| stroked) else {
            return p;
        };
        p.stroke = Some(stroke.color.clone());
        p.stroke_width = Some(self.num(stroke.width));
        p.stroke_dasharray = stroke.dash.as_ref().map(|dash| {
            let values: Vec<String> = dash.iter().map(|v| self.num(*v)).collect();
            values.join(",")
        });
        if open {
            p.marker_start = self.marker_head.as_ref().map(|id| format!("url(#{id})"));
            p.marker_end = self.marker_tail.as_ref().map(|id| format!("url(#{id})"));
        }
        p
    }
}

// ============================================================================
// Definitions
// ============================================================================

/// Intern `node` in the style table and return its id. The table keys on
/// the node's field dump taken before the id is set; the definition is
/// added to `defs` only the first time the table sees it.
fn intern(styles: &mut StyleTable, prefix: &str, mut node: SvgNode, defs: &mut Vec<Def>) -> String {
    let (id, newly) = styles.intern(prefix, &format!("{node:?}"));
    if newly {
        node.set_id(Some(id.clone()));
        defs.push(Def { id: id.clone(), node });
    }
    id
}

fn gradient(g: &GradientFill) -> SvgNode {
    let angle = if g.angle.is_finite() { g.angle } else { 0.0 };
    let (s, c) = angle.to_radians().sin_cos();
    let n = |v: f64| Some(fmt_num(v, 4));
    let stops = g
        .stops
        .iter()
        .map(|stop| {
            let offset = if stop.offset.is_finite() { stop.offset.clamp(0.0, 1.0) } else { 0.0 };
            SvgNode::Stop(Stop {
                offset: n(offset),
                stop_color: Some(stop.color.clone()),
                stop_opacity: stop.opacity.and_then(|o| n(o.clamp(0.0, 1.0))),
            })
        })
        .collect();
    SvgNode::LinearGradient(LinearGradient {
        id: None,
        x1: n(0.5 - c / 2.0),
        y1: n(0.5 - s / 2.0),
        x2: n(0.5 + c / 2.0),
        y2: n(0.5 + s / 2.0),
        children: stops,
    })
}

/// Hatch strokes of a preset pattern on one tile, or `None` when the
/// preset is not a line hatch.
fn hatch(preset: &str) -> Option<&'static str> {
    Some(match preset {
        "horz" => "M0,4 L8,4",
        "vert" => "M4,0 L4,8",
        "dnDiag" => "M-1,-1 L9,9 M-1,7 L1,9 M7,-1 L9,1",
        "upDiag" => "M-1,9 L9,-1 M-1,1 L1,-1 M7,9 L9,7",
        "cross" => "M0,4 L8,4 M4,0 L4,8",
        "diagCross" => "M-1,-1 L9,9 M-1,7 L1,9 M7,-1 L9,1 M-1,9 L9,-1 M-1,1 L1,-1 M7,9 L9,7",
        _ => return None,
    })
}

/// Stroke weight prefix of a hatch preset (`ltHorz`, `dkUpDiag`) and the
/// base preset name.
fn hatch_weight(preset: &str) -> (f64, String) {
    let (weight, rest) = if let Some(rest) = preset.strip_prefix("lt") {
        (0.5, rest)
    } else if let Some(rest) = preset.strip_prefix("dk") {
        (2.0, rest)
    } else {
        return (1.0, preset.to_string());
    };
    let mut chars = rest.chars();
    let base = match chars.next() {
        Some(first) => first.to_ascii_lowercase().to_string() + chars.as_str(),
        None => String::new(),
    };
    (weight, base)
}

fn tile_rect(at: f64, size: f64, fill: &str) -> SvgNode {
    let offset = (at != 0.0).then(|| fmt_num(at, 3));
    SvgNode::Rect(Rect {
        x: offset.clone(),
        y: offset,
        width: Some(fmt_num(size, 3)),
        height: Some(fmt_num(size, 3)),
        fill: Some(fill.to_string()),
        ..Rect::default()
    })
}

fn pattern(p: &PatternFill) -> SvgNode {
    let tile = fmt_num(PATTERN_TILE, 3);
    let mut children = vec![tile_rect(0.0, PATTERN_TILE, &p.background)];
    let (weight, base) = hatch_weight(&p.preset);
    let percent = p.preset.strip_prefix("pct").and_then(|n| n.parse::<u32>().ok());
    if let Some(d) = hatch(&base) {
        children.push(SvgNode::Path(Path {
            d: Some(d.to_string()),
            fill: Some("none".into()),
            stroke: Some(p.foreground.clone()),
            stroke_width: Some(fmt_num(weight, 3)),
            ..Path::default()
        }));
    } else if let Some(pct) = percent {
        let mut cover = tile_rect(0.0, PATTERN_TILE, &p.foreground);
        if let SvgNode::Rect(rect) = &mut cover {
            rect.fill_opacity = Some(fmt_num(f64::from(pct.min(100)) / 100.0, 3));
        }
        children.push(cover);
    } else {
        let half = PATTERN_TILE / 2.0;
        children.push(tile_rect(0.0, half, &p.foreground));
        children.push(tile_rect(half, half, &p.foreground));
    }
    SvgNode::Pattern(Pattern {
        id: None,
        pattern_units: Some("userSpaceOnUse".into()),
        pattern_content_units: None,
        width: Some(tile.clone()),
        height: Some(tile),
        children,
    })
}

fn picture(p: &PictureFill) -> SvgNode {
    let aspect = if p.stretch { "none" } else { "xMidYMid slice" };
    SvgNode::Pattern(Pattern {
        id: None,
        pattern_units: None,
        pattern_content_units: Some("objectBoundingBox".into()),
        width: Some("1".into()),
        height: Some("1".into()),
        children: vec![SvgNode::Image(Image {
            href: Some(p.href.clone()),
            width: Some("1".into()),
            height: Some("1".into()),
            preserve_aspect_ratio: Some(aspect.into()),
        })],
    })
}

/// Line-end marker drawn in a 10 by 10 box pointing along +x.
fn marker(id: &str, end: &LineEnd, color: &str, options: &RenderOptions, head: bool) -> Def {
    let solid = |d: &str| {
        SvgNode::Path(Path {
            d: Some(d.to_string()),
            fill: Some(color.to_string()),
            ..Path::default()
        })
    };
    let (ref_x, shape) = match end.kind {
        LineEndKind::Triangle => ("10", solid("M0,0 L10,5 L0,10 Z")),
        LineEndKind::Stealth => ("10", solid("M0,0 L10,5 L0,10 L3,5 Z")),
        LineEndKind::Diamond => ("5", solid("M0,5 L5,0 L10,5 L5,10 Z")),
        LineEndKind::Oval => (
            "5",
            SvgNode::Ellipse(Ellipse {
                cx: Some("5".into()),
                cy: Some("5".into()),
                rx: Some("5".into()),
                ry: Some("5".into()),
                fill: Some(color.to_string()),
                ..Ellipse::default()
            }),
        ),
        LineEndKind::Arrow => (
            "9",
            SvgNode::Path(Path {
                d: Some("M0,0 L10,5 L0,10".into()),
                fill: Some("none".into()),
                stroke: Some(color.to_string()),
                stroke_width: Some("1.5".into()),
                ..Path::default()
            }),
        ),
    };
    let size = |i: usize| Some(fmt_num(options.marker_sizes[i], 3));
    let orient = if head { "auto-start-reverse" } else { "auto" };
    Def {
        id: id.to_string(),
        node: SvgNode::Marker(Marker {
            id: Some(id.to_string()),
            view_box: Some("0 0 10 10".into()),
            ref_x: Some(ref_x.into()),
            ref_y: Some("5".into()),
            marker_width: size(end.length.index()),
            marker_height: size(end.width.index()),
            orient: Some(orient.into()),
            children: vec![shape],
        }),
    }
}

/// Resolve a shape's paint into presentation attributes and the
/// definitions it introduces.
///
/// Fill definitions go through the style table and are returned only when
/// new to it. Markers are per shape and only appear when the border asks
/// for line ends and the outline has an open stroke to put them on.
pub(crate) fn resolve_style(
    shape_id: &str,
    paint: &PaintToken,
    outline: &Outline,
    options: &RenderOptions,
    styles: &mut StyleTable,
) -> (ShapeStyle, Vec<Def>) {
    let mut defs = Vec::new();
    let fill_ref = match &paint.fill {
        Fill::None => "none".to_string(),
        Fill::Solid(color) => color.clone(),
        Fill::Gradient(g) if g.stops.is_empty() => "none".to_string(),
        Fill::Gradient(g) => format!("url(#{})", intern(styles, "grad", gradient(g), &mut defs)),
        Fill::Pattern(p) => format!("url(#{})", intern(styles, "pat", pattern(p), &mut defs)),
        Fill::Picture(p) => format!("url(#{})", intern(styles, "img", picture(p), &mut defs)),
    };

    let stroke = paint.border.as_ref().map(|border| {
        let width = if border.width > 0.0 && border.width.is_finite() {
            border.width
        } else {
            STROKE_WIDTH
        };
        StrokeStyle {
            color: border.color.clone(),
            width,
            dash: border.dash.dash_array(width),
        }
    });

    let (mut marker_head, mut marker_tail) = (None, None);
    if let Some(border) = paint.border.as_ref().filter(|b| b.has_line_ends()) {
        if outline.has_open_stroke() {
            if let Some(end) = &border.head {
                let id = format!("{shape_id}-head");
                defs.push(marker(&id, end, &border.color, options, true));
                marker_head = Some(id);
            }
            if let Some(end) = &border.tail {
                let id = format!("{shape_id}-tail");
                defs.push(marker(&id, end, &border.color, options, false));
                marker_tail = Some(id);
            }
        }
    }

    let style = ShapeStyle {
        fill_ref,
        stroke,
        marker_head,
        marker_tail,
        precision: options.precision,
        shades: [
            options.lighten_opacity,
            options.lighten_less_opacity,
            options.darken_opacity,
            options.darken_less_opacity,
        ],
    };
    (style, defs)
}

// ============================================================================
// Container
// ============================================================================

fn points_attr(style: &ShapeStyle, points: &[Point]) -> Option<String> {
    let pairs: Vec<String> = points
        .iter()
        .map(|p| format!("{},{}", style.num(p.x), style.num(p.y)))
        .collect();
    Some(pairs.join(" "))
}

fn primitive_node(style: &ShapeStyle, primitive: &Primitive) -> SvgNode {
    let n = |v: f64| Some(style.num(v));
    let open = primitive.is_open();
    let fill = if open { "none" } else { style.fill_ref.as_str() };
    let paint = style.paint(fill, true, open);
    match primitive {
        Primitive::Rect { x, y, width, height } => SvgNode::Rect(
            Rect {
                x: n(*x),
                y: n(*y),
                width: n(*width),
                height: n(*height),
                ..Rect::default()
            }
            .with_presentation(paint),
        ),
        Primitive::Ellipse { cx, cy, rx, ry } => SvgNode::Ellipse(
            Ellipse {
                cx: n(*cx),
                cy: n(*cy),
                rx: n(rx.abs()),
                ry: n(ry.abs()),
                ..Ellipse::default()
            }
            .with_presentation(paint),
        ),
        Primitive::Polygon(points) => SvgNode::Polygon(
            Polygon {
                points: points_attr(style, points),
                ..Polygon::default()
            }
            .with_presentation(paint),
        ),
        Primitive::Polyline(points) => SvgNode::Polyline(
            Polyline {
                points: points_attr(style, points),
                ..Polyline::default()
            }
            .with_presentation(paint),
        ),
        Primitive::Line { from, to } => SvgNode::Line(
            Line {
                x1: n(from.x),
                y1: n(from.y),
                x2: n(to.x),
                y2: n(to.y),
                ..Line::default()
            }
            .with_presentation(paint),
        ),
    }
}

/// A contour is one `<path>`; a shaded contour is the base fill, a
/// translucent overlay, and the stroke on top.
fn contour_nodes(style: &ShapeStyle, contour: &Contour) -> Vec<SvgNode> {
    if contour.path.is_empty() {
        return Vec::new();
    }
    let d = contour.path.to_string_with_precision(style.precision);
    let path = |paint: Presentation| {
        SvgNode::Path(
            Path {
                d: Some(d.clone()),
                ..Path::default()
            }
            .with_presentation(paint),
        )
    };
    let open = contour.path.has_open_subpath();
    let fill = if contour.fill.is_filled() {
        style.fill_ref.as_str()
    } else {
        "none"
    };
    let Some((color, opacity)) = style.shade(contour.fill) else {
        return vec![path(style.paint(fill, contour.stroke, open))];
    };
    let mut overlay = Presentation::filled(color);
    overlay.fill_opacity = Some(fmt_num(opacity, 3));
    let mut nodes = vec![path(Presentation::filled(fill)), path(overlay)];
    if contour.stroke {
        nodes.push(path(style.paint("none", true, open)));
    }
    nodes
}

impl RenderedShape {
    /// The shape container: `<g id=… transform=…>` holding the
    /// definitions, the primitives and contours, then the text layout's
    /// nodes.
    ///
    /// The container is built even when the outline is empty so the
    /// surrounding layout keeps its slot.
    pub fn to_node(&self, text: &dyn TextLayout) -> Group {
        let mut children = Vec::new();
        if !self.defs.is_empty() {
            children.push(SvgNode::Defs(Defs {
                children: self.defs.iter().map(|def| def.node.clone()).collect(),
            }));
        }
        for primitive in &self.outline.primitives {
            children.push(primitive_node(&self.style, primitive));
        }
        for contour in &self.outline.contours {
            children.extend(contour_nodes(&self.style, contour));
        }
        children.extend(text.text_nodes(self));
        Group {
            id: Some(self.id.clone()),
            transform: self.transform.to_svg_attr(),
            children,
        }
    }

    /// Markup of the shape container without text.
    pub fn to_svg(&self) -> Result<String, MarkupError> {
        self.to_svg_with(&())
    }

    /// Markup of the shape container with `text` laid out inside it.
    pub fn to_svg_with(&self, text: &dyn TextLayout) -> Result<String, MarkupError> {
        facet_xml::to_string(&self.to_node(text)).map_err(|e| MarkupError::Serialize {
            shape: self.id.clone(),
            message: e.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::paint::{Border, DashStyle, GradientStop};
    use crate::render::path_data::PathData;
    use crate::types::pt;

    fn some(s: &str) -> Option<String> {
        Some(s.to_string())
    }

    #[test]
    fn gradient_runs_along_its_angle() {
        let g = GradientFill {
            angle: 0.0,
            stops: vec![GradientStop::new(0.0, "#ff0000"), GradientStop::new(1.0, "#0000ff")],
        };
        let SvgNode::LinearGradient(across) = gradient(&g) else {
            panic!("expected a linear gradient");
        };
        assert_eq!((across.x1, across.y1, across.x2, across.y2), (some("0"), some("0.5"), some("1"), some("0.5")));
        assert_eq!(
            across.children,
            [
                SvgNode::Stop(Stop {
                    offset: some("0"),
                    stop_color: some("#ff0000"),
                    stop_opacity: None,
                }),
                SvgNode::Stop(Stop {
                    offset: some("1"),
                    stop_color: some("#0000ff"),
                    stop_opacity: None,
                }),
            ]
        );
        let SvgNode::LinearGradient(down) = gradient(&GradientFill { angle: 90.0, stops: vec![] }) else {
            panic!("expected a linear gradient");
        };
        assert_eq!((down.x1, down.y1, down.x2, down.y2), (some("0.5"), some("0"), some("0.5"), some("1")));
    }

    #[test]
    fn identical_fills_share_one_definition() {
        let mut styles = StyleTable::new();
        let mut defs = Vec::new();
        let p = PatternFill {
            preset: "dkHorz".into(),
            foreground: "#000".into(),
            background: "#fff".into(),
        };
        let a = intern(&mut styles, "pat", pattern(&p), &mut defs);
        let b = intern(&mut styles, "pat", pattern(&p), &mut defs);
        assert_eq!(a, b);
        assert_eq!(defs.len(), 1);
        assert_eq!(defs[0].node.id(), Some(a.as_str()));
        let SvgNode::Pattern(tile) = &defs[0].node else {
            panic!("expected a pattern");
        };
        let hatch = tile.children[1].presentation();
        assert_eq!(hatch.and_then(|p| p.stroke_width), some("2"));
    }

    #[test]
    fn pattern_presets() {
        let children = |preset: &str| match pattern(&PatternFill {
            preset: preset.into(),
            foreground: "#111".into(),
            background: "#eee".into(),
        }) {
            SvgNode::Pattern(p) => p.children,
            other => panic!("expected a pattern, got {other:?}"),
        };
        let vert = children("vert");
        assert!(matches!(&vert[1], SvgNode::Path(p) if p.d.as_deref() == Some("M4,0 L4,8")));
        let light = children("ltVert");
        assert_eq!(light[1].presentation().and_then(|p| p.stroke_width), some("0.5"));
        let pct = children("pct25");
        assert_eq!(pct[1].presentation().and_then(|p| p.fill_opacity), some("0.25"));
        let shingle = children("shingle");
        assert!(matches!(&shingle[2], SvgNode::Rect(r) if r.x == some("4") && r.y == some("4")));
    }

    #[test]
    fn picture_fill_keeps_aspect_unless_stretched() {
        let image = |stretch: bool| match picture(&PictureFill {
            href: "a&b.png".into(),
            stretch,
        }) {
            SvgNode::Pattern(p) => p.children[0].clone(),
            other => panic!("expected a pattern, got {other:?}"),
        };
        let SvgNode::Image(tiled) = image(false) else {
            panic!("expected an image");
        };
        assert_eq!(tiled.preserve_aspect_ratio, some("xMidYMid slice"));
        let SvgNode::Image(stretched) = image(true) else {
            panic!("expected an image");
        };
        assert_eq!(stretched.href, some("a&b.png"));
        assert_eq!(stretched.preserve_aspect_ratio, some("none"));
    }

    #[test]
    fn markers_need_an_open_stroke() {
        let border = Border::solid("#333", 2.0)
            .with_head(LineEnd::new(LineEndKind::Oval))
            .with_tail(LineEnd::new(LineEndKind::Triangle));
        let paint = PaintToken::new(Fill::None, Some(border));
        let options = RenderOptions::default();
        let mut styles = StyleTable::new();

        let line = Outline::primitive(Primitive::Line {
            from: pt(0.0, 0.0),
            to: pt(10.0, 0.0),
        });
        let (style, defs) = resolve_style("s7", &paint, &line, &options, &mut styles);
        assert_eq!(style.marker_head.as_deref(), Some("s7-head"));
        assert_eq!(style.marker_tail.as_deref(), Some("s7-tail"));
        assert_eq!(defs.len(), 2);
        assert!(matches!(&defs[0].node, SvgNode::Marker(m) if m.orient == some("auto-start-reverse")));
        assert!(matches!(&defs[1].node, SvgNode::Marker(m) if m.ref_x == some("10")));
        let SvgNode::Line(drawn) = primitive_node(&style, &line.primitives[0]) else {
            panic!("expected a line");
        };
        assert_eq!(drawn.marker_start, some("url(#s7-head)"));
        assert_eq!(drawn.marker_end, some("url(#s7-tail)"));

        let closed = Outline::path(PathData::new().m(0.0, 0.0).l(5.0, 0.0).l(0.0, 5.0).z());
        let (style, defs) = resolve_style("s8", &paint, &closed, &options, &mut styles);
        assert!(style.marker_head.is_none());
        assert!(defs.is_empty());
    }

    #[test]
    fn dashed_stroke_attributes() {
        let paint = PaintToken::solid("#abc").with_border(Border::solid("#123", 2.0).with_dash(DashStyle::Dash));
        let outline = Outline::path(PathData::new().m(0.0, 0.0).l(5.0, 5.0));
        let (style, _) = resolve_style("d", &paint, &outline, &RenderOptions::default(), &mut StyleTable::new());
        assert_eq!(
            contour_nodes(&style, &outline.contours[0]),
            [SvgNode::Path(Path {
                d: some("M0,0 L5,5"),
                fill: some("#abc"),
                stroke: some("#123"),
                stroke_width: some("2"),
                stroke_dasharray: some("8,6"),
                ..Path::default()
            })]
        );
    }

    #[test]
    fn shaded_contour_is_fill_overlay_then_stroke() {
        let paint = PaintToken::solid("#4472c4").with_border(Border::solid("#000", 1.0));
        let mut outline = Outline::path(PathData::new().m(0.0, 0.0).l(4.0, 0.0).l(0.0, 4.0).z());
        outline.contours[0].fill = ContourFill::Darken;
        let (style, _) = resolve_style("s", &paint, &outline, &RenderOptions::default(), &mut StyleTable::new());
        let nodes = contour_nodes(&style, &outline.contours[0]);
        let fills: Vec<_> = nodes
            .iter()
            .filter_map(|n| n.presentation())
            .map(|p| (p.fill, p.fill_opacity, p.stroke))
            .collect();
        assert_eq!(
            fills,
            [
                (some("#4472c4"), None, some("none")),
                (some("#000000"), some("0.4"), some("none")),
                (some("none"), None, some("#000")),
            ]
        );
    }
}
