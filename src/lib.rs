//! DrawingML shape geometry to SVG.
//!
//! A [`ShapeDescriptor`] names a preset kind (or carries custom geometry),
//! a box, rotation, flips, adjustables and resolved paint.
//! [`render_shape`] turns it into an [`Outline`] of path contours in the
//! shape's local box, the definitions its paint needs, and a
//! [`Transform`] for the caller to apply.

pub mod adjust;
pub mod custom;
pub mod errors;
pub mod kind;
pub mod log;
pub mod paint;
pub mod render;
pub mod types;

pub use adjust::{AdjustValue, Adjustables};
pub use custom::{CustomGeometry, CustomPath, GuideDef, PathStep, PointRef};
pub use errors::{FormulaError, GeometryIssue, MarkupError};
pub use facet_svg;
pub use kind::PresetKind;
pub use paint::{
    Border, DashStyle, Fill, GradientFill, GradientStop, LineEnd, LineEndKind, LineEndSize, PaintToken, PatternFill,
    PictureFill,
};
pub use render::{
    Contour, ContourFill, Def, Geometry, Outline, PathData, Primitive, RenderContext, RenderOptions, RenderedShape,
    ShapeDescriptor, StyleTable, TextLayout, Transform, render_shape,
};
pub use types::{Bounds, Point};

/// Render `shapes` in order and return their markup, one container per
/// shape.
pub fn render_svg(
    ctx: &mut RenderContext,
    shapes: &[ShapeDescriptor],
    text: &dyn TextLayout,
) -> Result<String, MarkupError> {
    let mut out = String::new();
    for shape in shapes {
        out.push_str(&render_shape(ctx, shape).to_svg_with(text)?);
    }
    Ok(out)
}
