//! Markup assembly: containers, shared definitions, markers and text.

use drawingml_geom::facet_svg::{Svg, SvgNode, Text, facet_xml};
use drawingml_geom::{
    Border, DashStyle, Fill, GradientFill, GradientStop, LineEnd, LineEndKind, LineEndSize, PaintToken, PatternFill,
    PictureFill, PresetKind, RenderContext, RenderedShape, ShapeDescriptor, TextLayout, render_shape, render_svg,
};

fn gradient_paint() -> PaintToken {
    PaintToken::new(
        Fill::Gradient(GradientFill {
            angle: 45.0,
            stops: vec![GradientStop::new(0.0, "#fff"), GradientStop::new(1.0, "#036")],
        }),
        None,
    )
}

#[test]
fn shared_gradient_is_defined_once() {
    let mut ctx = RenderContext::new();
    let first = render_shape(
        &mut ctx,
        &ShapeDescriptor::preset("a", PresetKind::Rect, 50.0, 50.0).with_paint(gradient_paint()),
    );
    let second = render_shape(
        &mut ctx,
        &ShapeDescriptor::preset("b", PresetKind::Ellipse, 80.0, 40.0).with_paint(gradient_paint()),
    );
    assert_eq!(first.defs.len(), 1);
    assert!(second.defs.is_empty());
    let id = &first.defs[0].id;
    assert!(id.starts_with("grad-"));
    assert!(second.to_svg().unwrap().contains(&format!("fill=\"url(#{id})\"")));
    assert_eq!(ctx.styles.len(), 1);
}

#[test]
fn parallel_contexts_agree_on_ids() {
    let pattern = PaintToken::new(
        Fill::Pattern(PatternFill {
            preset: "diagCross".into(),
            foreground: "#000".into(),
            background: "#ff0".into(),
        }),
        None,
    );
    let mut left = RenderContext::new();
    let mut right = RenderContext::new();
    let a = render_shape(
        &mut left,
        &ShapeDescriptor::preset("l", PresetKind::Hexagon, 60.0, 40.0).with_paint(pattern.clone()),
    );
    render_shape(
        &mut left,
        &ShapeDescriptor::preset("g", PresetKind::Rect, 10.0, 10.0).with_paint(gradient_paint()),
    );
    let b = render_shape(
        &mut right,
        &ShapeDescriptor::preset("r", PresetKind::Octagon, 60.0, 40.0).with_paint(pattern),
    );
    assert_eq!(a.defs[0].id, b.defs[0].id);

    let mut ab = left.styles.clone();
    ab.merge(right.styles.clone());
    let mut ba = right.styles.clone();
    ba.merge(left.styles.clone());
    assert_eq!(ab, ba);
    assert_eq!(ab.len(), 2);

    left.merge(right);
    assert_eq!(left.styles, ab);
}

#[test]
fn connector_line_end_marker() {
    let border = Border::solid("#000", 1.0).with_tail(LineEnd::new(LineEndKind::Triangle));
    let shape = ShapeDescriptor::preset("ln", PresetKind::Line, 80.0, 40.0)
        .with_paint(PaintToken::new(Fill::None, Some(border)));
    let rendered = render_shape(&mut RenderContext::new(), &shape);
    let group = rendered.to_node(&());
    let [SvgNode::Defs(defs), SvgNode::Path(line)] = group.children.as_slice() else {
        panic!("expected defs and one path: {:?}", group.children);
    };
    let [SvgNode::Marker(marker)] = defs.children.as_slice() else {
        panic!("expected one marker: {:?}", defs.children);
    };
    assert_eq!(marker.id.as_deref(), Some("ln-tail"));
    assert_eq!(marker.ref_x.as_deref(), Some("10"));
    assert_eq!(marker.marker_width.as_deref(), Some("3"));
    assert_eq!(marker.orient.as_deref(), Some("auto"));
    assert_eq!(line.d.as_deref(), Some("M0,0 L80,40"));
    assert_eq!(line.fill.as_deref(), Some("none"));
    assert_eq!(line.marker_start, None);
    assert_eq!(line.marker_end.as_deref(), Some("url(#ln-tail)"));
}

#[test]
fn markup_reads_back_as_the_same_container() {
    let shape = ShapeDescriptor::preset("rt", PresetKind::Triangle, 60.0, 40.0)
        .with_paint(PaintToken::solid("#9dc3e6").with_border(Border::solid("#1f3864", 1.5)));
    let rendered = render_shape(&mut RenderContext::new(), &shape);
    let markup = rendered.to_svg().unwrap();
    let start = markup.find("<g").unwrap();
    let doc: Svg = facet_xml::from_str(&format!("<svg>{}</svg>", &markup[start..])).unwrap();
    let [SvgNode::G(group)] = doc.children.as_slice() else {
        panic!("expected one container: {:?}", doc.children);
    };
    assert_eq!(group.id.as_deref(), Some("rt"));
    let [SvgNode::Path(path)] = group.children.as_slice() else {
        panic!("expected one path: {:?}", group.children);
    };
    assert_eq!(path.d.as_deref(), Some("M30,0 L60,40 L0,40 Z"));
    assert_eq!(path.stroke_width.as_deref(), Some("1.5"));
}

#[test]
fn attribute_values_are_escaped() {
    let paint = PaintToken::new(
        Fill::Picture(PictureFill {
            href: "a&b.png".into(),
            stretch: true,
        }),
        None,
    );
    let shape = ShapeDescriptor::preset("pic", PresetKind::Rect, 10.0, 10.0).with_paint(paint);
    let markup = render_shape(&mut RenderContext::new(), &shape).to_svg().unwrap();
    assert!(markup.contains("a&amp;b.png"));
    assert!(!markup.contains("a&b.png"));
}

#[test]
fn closed_shapes_get_no_markers() {
    let border = Border::solid("#000", 1.0)
        .with_head(LineEnd {
            kind: LineEndKind::Stealth,
            width: LineEndSize::Large,
            length: LineEndSize::Small,
        })
        .with_dash(DashStyle::SysDot);
    let shape = ShapeDescriptor::preset("box", PresetKind::Rect, 20.0, 20.0)
        .with_paint(PaintToken::solid("#eee").with_border(border));
    let rendered = render_shape(&mut RenderContext::new(), &shape);
    assert!(rendered.defs.is_empty());
    let svg = rendered.to_svg().unwrap();
    assert!(!svg.contains("marker"));
    assert!(svg.contains("stroke-dasharray=\"1,1\""));
}

#[test]
fn bracket_markers_sit_on_the_open_stroke() {
    let border = Border::solid("#222", 2.0)
        .with_head(LineEnd::new(LineEndKind::Oval))
        .with_tail(LineEnd::new(LineEndKind::Arrow));
    let shape = ShapeDescriptor::preset("br", PresetKind::LeftBracket, 20.0, 100.0)
        .with_paint(PaintToken::solid("#fafafa").with_border(border));
    let rendered = render_shape(&mut RenderContext::new(), &shape);
    let ids: Vec<_> = rendered.defs.iter().map(|d| d.id.as_str()).collect();
    assert_eq!(ids, ["br-head", "br-tail"]);
    let svg = rendered.to_svg().unwrap();
    assert_eq!(svg.matches("marker-start=\"url(#br-head)\"").count(), 1);
    assert_eq!(svg.matches("marker-end=\"url(#br-tail)\"").count(), 1);
}

struct Caption<'a>(&'a str);

impl TextLayout for Caption<'_> {
    fn text_nodes(&self, shape: &RenderedShape) -> Vec<SvgNode> {
        let c = shape.to_page(drawingml_geom::types::pt(0.0, 0.0));
        vec![SvgNode::Text(Text {
            x: Some(c.x.to_string()),
            y: Some(c.y.to_string()),
            content: self.0.to_string(),
            ..Text::default()
        })]
    }
}

#[test]
fn text_goes_inside_the_container() {
    let shape = ShapeDescriptor::preset("t", PresetKind::Rect, 40.0, 20.0).with_flip(true, false);
    let rendered = render_shape(&mut RenderContext::new(), &shape);
    let group = rendered.to_node(&Caption("hi"));
    assert_eq!(
        group.transform.as_deref(),
        Some("translate(20,10) scale(-1,1) translate(-20,-10)")
    );
    let Some(SvgNode::Text(text)) = group.children.last() else {
        panic!("text should come last: {:?}", group.children);
    };
    assert_eq!((text.x.as_deref(), text.y.as_deref()), (Some("40"), Some("0")));
    assert_eq!(text.content, "hi");

    let mut ctx = RenderContext::new();
    let svg = render_svg(&mut ctx, &[shape], &Caption("hi")).unwrap();
    let path = svg.find("<path").unwrap();
    let text = svg.find("<text").unwrap();
    assert!(path < text);
    assert!(svg[text..].contains("</g>"));
}
