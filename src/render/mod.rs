//! Shape rendering
//!
//! This module is organized into submodules:
//! - `defaults`: Default sizes and settings
//! - `types`: Shape descriptors, outlines and rendered shapes
//! - `context`: RenderContext carrying options, the style table and diagnostics
//! - `path_data`: Path commands and their serialization
//! - `geometry`: Arc, ellipse, gear and corner primitives
//! - `path_builder`: Relative path construction in a placed design box
//! - `presets`: Preset formulas grouped into families
//! - `registry`: Kind to family lookup
//! - `svg`: Definitions, markers and markup

pub mod context;
pub mod defaults;
pub mod geometry;
pub mod path_builder;
pub mod path_data;
pub mod presets;
pub mod registry;
pub mod svg;
pub mod types;

// Re-export commonly used items
pub use context::{RenderContext, RenderOptions, StyleTable};
pub use path_data::{PathCommand, PathData};
pub use types::*;

use crate::custom;
use crate::errors::GeometryIssue;
use crate::log::debug;
use crate::types::finite;

use presets::ShapeInput;

/// Render one shape.
///
/// Never fails: problems are reported on `ctx` and the shape degrades to
/// a partial or empty outline inside a valid container.
pub fn render_shape(ctx: &mut RenderContext, shape: &ShapeDescriptor) -> RenderedShape {
    let (adjust, malformed) = shape.adjustables.resolve();
    for av in malformed {
        ctx.report(GeometryIssue::MalformedAdjustable {
            shape: shape.id.clone(),
            name: av.name.clone(),
            formula: av.formula.clone(),
        });
    }

    let (w, h) = (shape.width, shape.height);
    if !(w > 0.0 && h > 0.0 && w.is_finite() && h.is_finite()) {
        ctx.report(GeometryIssue::DegenerateBox {
            shape: shape.id.clone(),
            width: w,
            height: h,
        });
    }
    let w = finite(w).map_or(0.0, |v| v.max(0.0));
    let h = finite(h).map_or(0.0, |v| v.max(0.0));

    let outline = match &shape.geometry {
        Geometry::Preset(kind) => {
            let input = ShapeInput::new(*kind, w, h, &adjust);
            match registry::render_preset(&input) {
                Some(outline) => outline,
                None => {
                    ctx.report(GeometryIssue::UnknownShapeKind {
                        shape: shape.id.clone(),
                        kind: kind.name().to_string(),
                    });
                    Outline::new()
                }
            }
        }
        Geometry::Unrecognized(name) => {
            ctx.report(GeometryIssue::UnknownShapeKind {
                shape: shape.id.clone(),
                kind: name.clone(),
            });
            Outline::new()
        }
        Geometry::Custom(geometry) => {
            debug!(shape = %shape.id, paths = geometry.paths.len(), "evaluating custom geometry");
            let outcome = custom::evaluate(geometry, w, h, ctx.options.scale, &shape.adjustables);
            for (guide, source) in outcome.issues {
                ctx.report(GeometryIssue::MalformedFormula {
                    shape: shape.id.clone(),
                    guide,
                    source,
                });
            }
            for (path, degrees) in outcome.excess_sweeps {
                ctx.report(GeometryIssue::ExcessiveSweep {
                    shape: shape.id.clone(),
                    path,
                    degrees,
                });
            }
            outcome.outline
        }
    };
    let outline = drop_non_finite(ctx, &shape.id, outline);
    debug!(
        shape = %shape.id,
        geometry = shape.geometry.label(),
        contours = outline.contours.len(),
        "rendered outline"
    );

    let (style, defs) = svg::resolve_style(&shape.id, &shape.paint, &outline, &ctx.options, &mut ctx.styles);
    RenderedShape {
        id: shape.id.clone(),
        outline,
        defs,
        transform: Transform::for_shape(w, h, shape.rotation, shape.flip_h, shape.flip_v),
        paint: shape.paint.clone(),
        style,
    }
}

/// Remove contours and primitives with non-finite coordinates. Primitives
/// are numbered after the contours in the report.
fn drop_non_finite(ctx: &mut RenderContext, shape: &str, outline: Outline) -> Outline {
    let Outline { contours, primitives } = outline;
    let count = contours.len();
    let mut kept = Outline::new();
    for (i, contour) in contours.into_iter().enumerate() {
        if contour.path.is_finite() {
            kept.contours.push(contour);
        } else {
            ctx.report(GeometryIssue::NonFiniteGeometry {
                shape: shape.to_string(),
                contour: i,
            });
        }
    }
    for (i, primitive) in primitives.into_iter().enumerate() {
        if primitive.is_finite() {
            kept.primitives.push(primitive);
        } else {
            ctx.report(GeometryIssue::NonFiniteGeometry {
                shape: shape.to_string(),
                contour: count + i,
            });
        }
    }
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust::Adjustables;
    use crate::kind::PresetKind;
    use crate::paint::{Border, PaintToken};

    #[test]
    fn unknown_kind_is_an_empty_container() {
        let mut ctx = RenderContext::new();
        let shape = ShapeDescriptor::new("sp1", Geometry::preset("notAShape"), 40.0, 40.0);
        let rendered = render_shape(&mut ctx, &shape);
        assert!(rendered.is_empty());
        let group = rendered.to_node(&());
        assert_eq!(group.id.as_deref(), Some("sp1"));
        assert!(group.children.is_empty());
        assert!(matches!(
            ctx.diagnostics(),
            [GeometryIssue::UnknownShapeKind { kind, .. }] if kind == "notAShape"
        ));
    }

    #[test]
    fn tab_placeholders_report_unknown() {
        let mut ctx = RenderContext::new();
        let shape = ShapeDescriptor::preset("t", PresetKind::SquareTabs, 40.0, 40.0);
        assert!(render_shape(&mut ctx, &shape).is_empty());
        assert_eq!(ctx.diagnostics().len(), 1);
    }

    #[test]
    fn malformed_adjustable_falls_back_to_default() {
        let mut ctx = RenderContext::new();
        let bad = ShapeDescriptor::preset("r", PresetKind::RoundRect, 100.0, 50.0)
            .with_adjustables(Adjustables::new().with("adj", "pin 0 x 1"));
        let plain = ShapeDescriptor::preset("r", PresetKind::RoundRect, 100.0, 50.0);
        let a = render_shape(&mut ctx, &bad);
        assert_eq!(ctx.take_diagnostics().len(), 1);
        let b = render_shape(&mut ctx, &plain);
        assert_eq!(a.paths(), b.paths());
        assert!(ctx.diagnostics().is_empty());
    }

    #[test]
    fn degenerate_box_is_reported_but_rendered() {
        let mut ctx = RenderContext::new();
        let shape = ShapeDescriptor::preset("z", PresetKind::Rect, 0.0, 20.0);
        let rendered = render_shape(&mut ctx, &shape);
        assert!(matches!(ctx.diagnostics(), [GeometryIssue::DegenerateBox { .. }]));
        assert_eq!(rendered.bounds().width(), 0.0);
    }

    #[test]
    fn transform_is_not_baked_in() {
        let mut ctx = RenderContext::new();
        let shape = ShapeDescriptor::preset("rot", PresetKind::Rect, 100.0, 50.0)
            .with_rotation(30.0)
            .with_flip(false, true)
            .with_paint(PaintToken::solid("#c00").with_border(Border::solid("#000", 1.0)));
        let rendered = render_shape(&mut ctx, &shape);
        assert_eq!(rendered.paths(), vec!["M0,0 L100,0 L100,50 L0,50 Z".to_string()]);
        let group = rendered.to_node(&());
        let transform = group.transform.unwrap_or_default();
        assert!(transform.starts_with("rotate(30,50,25) translate(50,25) scale(1,-1)"));
        let paint = group.children[0].presentation().unwrap();
        assert_eq!(paint.fill.as_deref(), Some("#c00"));
        assert_eq!(paint.stroke.as_deref(), Some("#000"));
        assert_eq!(paint.stroke_width.as_deref(), Some("1"));
    }

    #[test]
    fn precision_option_applies_to_markup() {
        let options = RenderOptions::default().with_precision(1).with_scale(1.0);
        let mut ctx = RenderContext::with_options(options);
        let shape = ShapeDescriptor::preset("p", PresetKind::Rect, 10.25, 3.0);
        let rendered = render_shape(&mut ctx, &shape);
        assert_eq!(rendered.paths()[0], "M0,0 L10.25,0 L10.25,3 L0,3 Z");
        assert!(rendered.to_svg().unwrap().contains("d=\"M0,0 L10.3,0 L10.3,3 L0,3 Z\""));
    }
}
