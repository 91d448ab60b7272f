//! Properties every rendered shape must have, checked through the public API.

use drawingml_geom::render::geometry::arc_to_path;
use drawingml_geom::render::path_data::{ArcCenter, PathCommand};
use drawingml_geom::render::registry;
use drawingml_geom::{
    Adjustables, Border, CustomGeometry, CustomPath, Geometry, GeometryIssue, PaintToken, PathStep, PointRef,
    PresetKind, RenderContext, ShapeDescriptor, render_shape,
};

fn init_logging() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn render(kind: PresetKind, w: f64, h: f64) -> drawingml_geom::RenderedShape {
    render_shape(&mut RenderContext::new(), &ShapeDescriptor::preset("s", kind, w, h))
}

#[test]
fn box_filling_kinds_touch_every_edge() {
    use PresetKind::*;
    for kind in [
        Rect, RoundRect, Snip1Rect, Diamond, Ellipse, Triangle, Parallelogram, Trapezoid, Hexagon, Octagon, Plus,
        RightArrow, LeftRightArrow, QuadArrow, Chevron, HomePlate, Star5, Star8, Can, Cube, FlowChartProcess,
        FlowChartDecision, FlowChartInputOutput, ActionButtonBackPrevious, Pie, Donut, Sun, Moon,
    ] {
        let b = render(kind, 160.0, 90.0).bounds();
        let eps = 1e-3;
        assert!(b.min.x.abs() < eps && b.min.y.abs() < eps, "{kind}: {b:?}");
        assert!((b.max.x - 160.0).abs() < eps && (b.max.y - 90.0).abs() < eps, "{kind}: {b:?}");
    }
}

#[test]
fn every_tabled_kind_renders_finite_geometry() {
    for &kind in PresetKind::ALL {
        if !registry::is_supported(kind) {
            continue;
        }
        let mut ctx = RenderContext::new();
        let rendered = render_shape(&mut ctx, &ShapeDescriptor::preset("s", kind, 120.0, 80.0));
        assert!(!rendered.is_empty(), "{kind} rendered nothing");
        assert!(ctx.diagnostics().is_empty(), "{kind}: {:?}", ctx.diagnostics());
    }
}

#[test]
fn rendering_is_deterministic() {
    for &kind in PresetKind::ALL {
        let shape = ShapeDescriptor::preset("d", kind, 97.0, 61.0)
            .with_rotation(15.0)
            .with_paint(PaintToken::solid("#808080").with_border(Border::solid("#000", 1.5)));
        let a = render_shape(&mut RenderContext::new(), &shape).to_svg().unwrap();
        let b = render_shape(&mut RenderContext::new(), &shape).to_svg().unwrap();
        assert_eq!(a, b, "{kind}");
    }
}

#[test]
fn out_of_range_adjustables_render_like_the_bound() {
    let cases = [
        (PresetKind::RightArrow, "adj1", 150_000, 100_000),
        (PresetKind::RoundRect, "adj", 80_000, 50_000),
        (PresetKind::Pie, "adj1", -60_000, 0),
        (PresetKind::Donut, "adj", 99_000, 50_000),
        (PresetKind::CircularArrow, "adj3", 25_200_000, 21_599_999),
        (PresetKind::CircularArrow, "adj2", -1_000_000, 0),
        (PresetKind::CircularArrow, "adj4", -600_000, 0),
        (PresetKind::LeftCircularArrow, "adj2", 1_000_000, 0),
        (PresetKind::LeftRightCircularArrow, "adj4", 43_200_000, 21_599_999),
        (PresetKind::BlockArc, "adj2", 30_000_000, 21_599_999),
        (PresetKind::BlockArc, "adj1", -5, 0),
    ];
    for (kind, name, outside, bound) in cases {
        let at = |v: i64| {
            let shape =
                ShapeDescriptor::preset("c", kind, 120.0, 70.0).with_adjustables(Adjustables::new().with_val(name, v));
            render_shape(&mut RenderContext::new(), &shape).paths()
        };
        assert_eq!(at(outside), at(bound), "{kind} {name}");
    }
}

#[test]
fn full_circle_arc_stays_on_the_circle() {
    let (cx, cy, r) = (40.0, 30.0, 25.0);
    let path = arc_to_path(cx, cy, r, r, 0.0, 360.0, false);
    let mut from = None;
    let mut swept = 0.0;
    for cmd in path.commands() {
        match *cmd {
            PathCommand::MoveTo(p) => from = Some(p),
            PathCommand::ArcTo {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                to,
            } => {
                let start = from.expect("arc after a move");
                let arc = ArcCenter::from_endpoints(start, to, rx, ry, rotation, large_arc, sweep)
                    .expect("arc has a center");
                for i in 0..=10 {
                    let p = arc.point_at(arc.start + arc.sweep * f64::from(i) / 10.0);
                    assert!(((p.x - cx).hypot(p.y - cy) - r).abs() < 1e-9, "{p:?}");
                }
                swept += arc.sweep;
                from = Some(to);
            }
            _ => panic!("unexpected command {cmd:?}"),
        }
    }
    assert!((swept - std::f64::consts::TAU).abs() < 1e-9);
    // every 10 degrees lands on (cx + r cos, cy + r sin)
    for deg in (0..360).step_by(10) {
        let t = f64::from(deg).to_radians();
        let expected = (cx + r * t.cos(), cy + r * t.sin());
        let step = arc_to_path(cx, cy, r, r, f64::from(deg), f64::from(deg) + 10.0, false);
        let Some(PathCommand::MoveTo(p)) = step.commands().first().copied() else {
            panic!("arc starts with a move");
        };
        assert!((p.x - expected.0).abs() < 1e-9 && (p.y - expected.1).abs() < 1e-9);
    }
}

#[test]
fn custom_reference_space_maps_to_the_box() {
    init_logging();
    let geometry = CustomGeometry::new()
        .with_guide("qx", "*/ 21600 1 4")
        .with_guide("ty", "+- 10800 5400 0")
        .with_path(
            CustomPath::new(vec![
                PathStep::MoveTo(PointRef::new("0", "0")),
                PathStep::LineTo(PointRef::new("21600", "10800")),
                PathStep::LineTo(PointRef::new("qx", "ty")),
                PathStep::Close,
            ])
            .with_size(21600.0, 21600.0),
        );
    let shape = ShapeDescriptor::new("c", Geometry::Custom(Box::new(geometry)), 100.0, 50.0);
    let mut ctx = RenderContext::new();
    let rendered = render_shape(&mut ctx, &shape);
    assert!(ctx.diagnostics().is_empty());
    insta::assert_snapshot!(rendered.paths().join("|"), @"M0,0 L100,25 L25,37.5 Z");
}

fn custom_arc(sweep: &str) -> ShapeDescriptor {
    let geometry = CustomGeometry::new().with_path(
        CustomPath::new(vec![
            PathStep::MoveTo(PointRef::new("0", "50")),
            PathStep::ArcTo {
                wr: "50".into(),
                hr: "50".into(),
                start: "10800000".into(),
                sweep: sweep.into(),
            },
            PathStep::Close,
        ])
        .with_size(100.0, 100.0),
    );
    ShapeDescriptor::new("loop", Geometry::Custom(Box::new(geometry)), 100.0, 100.0)
}

#[test]
fn huge_custom_sweeps_are_cut_to_one_turn() {
    init_logging();
    let mut ctx = RenderContext::new();
    let huge = render_shape(&mut ctx, &custom_arc("2160000000000000"));
    let issues = ctx.take_diagnostics();
    assert_eq!(issues.len(), 1, "{issues:?}");
    assert!(matches!(issues[0], GeometryIssue::ExcessiveSweep { .. }), "{issues:?}");

    let turn = render_shape(&mut ctx, &custom_arc("21600000"));
    assert!(ctx.diagnostics().is_empty());
    assert_eq!(huge.paths(), turn.paths());
    assert!(huge.paths()[0].matches('A').count() <= 4, "{:?}", huge.paths());

    let backwards = render_shape(&mut ctx, &custom_arc("-2160000000000000"));
    assert_eq!(backwards.paths(), render_shape(&mut ctx, &custom_arc("-21600000")).paths());
}

#[test]
fn custom_formula_problems_degrade_to_zero() {
    init_logging();
    let geometry = CustomGeometry::new()
        .with_guide("bad", "*/ nowhere 1 1")
        .with_guide("div", "*/ 1 1 0")
        .with_path(CustomPath::new(vec![
            PathStep::MoveTo(PointRef::new("bad", "0")),
            PathStep::LineTo(PointRef::new("w", "h")),
        ]));
    let shape = ShapeDescriptor::new("broken", Geometry::Custom(Box::new(geometry)), 40.0, 20.0);
    let mut ctx = RenderContext::new();
    let rendered = render_shape(&mut ctx, &shape);
    assert_eq!(rendered.paths(), vec!["M0,0 L40,20".to_string()]);
    let issues = ctx.take_diagnostics();
    assert_eq!(issues.len(), 2);
    assert!(issues.iter().all(|i| matches!(i, GeometryIssue::MalformedFormula { .. })));
}

#[test]
fn unknown_kinds_are_safe() {
    init_logging();
    let mut ctx = RenderContext::new();
    for shape in [
        ShapeDescriptor::new("u1", Geometry::preset("fancyBlob"), 30.0, 30.0),
        ShapeDescriptor::preset("u2", PresetKind::ChartPlus, 30.0, 30.0),
    ] {
        let rendered = render_shape(&mut ctx, &shape);
        assert!(rendered.is_empty());
        assert_eq!(rendered.to_node(&()).id.as_deref(), Some(shape.id.as_str()));
        assert!(rendered.to_svg().unwrap().contains(&format!("<g id=\"{}\"", shape.id)));
    }
    assert_eq!(ctx.diagnostics().len(), 2);
    assert!(
        ctx.diagnostics()
            .iter()
            .all(|i| matches!(i, GeometryIssue::UnknownShapeKind { .. }))
    );
}

#[test]
fn back_button_outline() {
    let shape = ShapeDescriptor::preset("btn", PresetKind::ActionButtonBackPrevious, 100.0, 80.0)
        .with_paint(PaintToken::solid("#4472c4").with_border(Border::solid("#000", 1.0)));
    let rendered = render_shape(&mut RenderContext::new(), &shape);
    let paths = rendered.paths();
    assert_eq!(paths[0], "M0,0 L100,0 L100,80 L0,80 Z");
    assert_eq!(paths[1], "M20,40 L80,10 L80,70 Z");
    let layers: Vec<String> = rendered
        .to_node(&())
        .children
        .iter()
        .filter_map(|node| node.presentation())
        .map(|p| {
            let field = |v: Option<String>| v.unwrap_or_else(|| "-".into());
            format!(
                "fill={} opacity={} stroke={} width={}",
                field(p.fill),
                field(p.fill_opacity),
                field(p.stroke),
                field(p.stroke_width)
            )
        })
        .collect();
    insta::assert_snapshot!(layers.join("\n"), @r"
    fill=#4472c4 opacity=- stroke=none width=-
    fill=#4472c4 opacity=- stroke=none width=-
    fill=#000000 opacity=0.4 stroke=none width=-
    fill=none opacity=- stroke=#000 width=1
    ");
}
