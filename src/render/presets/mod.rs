//! Preset shape formulas, grouped into families.
//!
//! Every family turns a [`ShapeInput`] into an [`Outline`] in the shape's
//! local box. Formulas are written against the design box of their
//! [`Placement`], so mirrored and transposed siblings (left/right,
//! up/down) share one function.
//!
//! Adjustables are read in raw document units (hundred-thousandths of a
//! length, sixty-thousandths of a degree) and pinned to each formula's
//! range before use, so out-of-range values render exactly like the
//! nearest bound.

pub mod action_buttons;
pub mod arrows;
pub mod basic;
pub mod brackets;
pub mod callouts;
pub mod connectors;
pub mod flowchart;
pub mod math;
pub mod misc;
pub mod pies;
pub mod stars;

use crate::adjust::{Resolved, pin};
use crate::kind::PresetKind;
use crate::types::{Angle, Point, pt, ratio};

use super::defaults::{ADJ_UNIT, ANGLE_UNIT};
use super::geometry::{ellipse_point, visual_to_parametric};
use super::path_builder::{PathBuilder, Placement, arc_params};
use super::path_data::PathData;
use super::types::Outline;

/// What a family needs to draw one shape.
#[derive(Debug, Clone, Copy)]
pub struct ShapeInput<'a> {
    pub kind: PresetKind,
    pub w: f64,
    pub h: f64,
    pub adjust: &'a Resolved,
}

impl<'a> ShapeInput<'a> {
    pub fn new(kind: PresetKind, w: f64, h: f64, adjust: &'a Resolved) -> Self {
        Self { kind, w, h, adjust }
    }

    /// The same input seen through `placement`'s design box.
    pub fn design(self, placement: &Placement) -> Self {
        let (w, h) = placement.design_size();
        Self { w, h, ..self }
    }

    /// Short side.
    pub fn ss(&self) -> f64 {
        self.w.min(self.h)
    }

    /// Long side.
    pub fn ls(&self) -> f64 {
        self.w.max(self.h)
    }

    pub fn hc(&self) -> f64 {
        self.w / 2.0
    }

    pub fn vc(&self) -> f64 {
        self.h / 2.0
    }

    pub fn wd(&self, n: f64) -> f64 {
        self.w / n
    }

    pub fn hd(&self, n: f64) -> f64 {
        self.h / n
    }

    /// Raw adjustable value or its default.
    pub fn adj(&self, name: &str, default: f64) -> f64 {
        self.adjust.or(name, default)
    }

    /// Raw adjustable value pinned to `[lo, hi]`.
    pub fn pinned(&self, name: &str, default: f64, lo: f64, hi: f64) -> f64 {
        pin(lo, self.adj(name, default), hi)
    }

    /// Angle adjustable in degrees.
    pub fn angle(&self, name: &str, default: f64) -> f64 {
        Angle::from_sixty_thousandths(self.adj(name, default)).to_degrees()
    }

    /// Angle adjustable pinned in raw units to `[lo, hi]`, in degrees.
    pub fn pinned_angle(&self, name: &str, default: f64, lo: f64, hi: f64) -> f64 {
        Angle::from_sixty_thousandths(self.pinned(name, default, lo, hi)).to_degrees()
    }

    /// `100000 * len / ss`, the usual upper bound of a length adjustment
    /// measured along a side of length `len`.
    pub fn max_adj(&self, len: f64) -> f64 {
        ratio(ADJ_UNIT * len, self.ss())
    }

    pub fn placement(&self) -> Placement {
        Placement::identity(self.w, self.h)
    }
}

/// `len * a / 100000`.
#[inline]
pub fn of(len: f64, a: f64) -> f64 {
    len * a / ADJ_UNIT
}

/// Point where the ray at visual angle `deg` from `(cx, cy)` meets the
/// ellipse with radii `rx`, `ry`.
pub fn visual_point(cx: f64, cy: f64, rx: f64, ry: f64, deg: f64) -> Point {
    ellipse_point(pt(cx, cy), rx, ry, visual_to_parametric(rx, ry, deg.to_radians()))
}

/// Direction of the offset `(dx, dy)` as a visual angle in `[0, 360)`.
pub fn at2(dx: f64, dy: f64) -> f64 {
    dy.atan2(dx).to_degrees().rem_euclid(360.0)
}

/// Degrees to raw sixty-thousandths, for pinning against a computed angle.
pub fn raw_angle(deg: f64) -> f64 {
    deg * ANGLE_UNIT
}

/// Sweep from `start` to `end` (degrees), always positive, wrapping
/// through 360 when `end` is not past `start`.
pub fn positive_sweep(start: f64, end: f64) -> f64 {
    let sw = end - start;
    if sw > 0.0 { sw } else { sw + 360.0 }
}

/// A fixed path coordinate space stretched over the shape box, used by
/// presets whose outline is given in absolute units (21600 by 21600 for
/// the legacy shapes, small integer grids for most flowchart symbols).
#[derive(Debug, Clone, Copy)]
pub struct Space {
    fx: f64,
    fy: f64,
}

impl Space {
    pub fn new(w: f64, h: f64, pw: f64, ph: f64) -> Self {
        Self {
            fx: ratio(w, pw),
            fy: ratio(h, ph),
        }
    }

    pub fn x(&self, v: f64) -> f64 {
        v * self.fx
    }

    pub fn y(&self, v: f64) -> f64 {
        v * self.fy
    }

    pub fn move_to(&self, b: &mut PathBuilder, x: f64, y: f64) {
        b.move_to(self.x(x), self.y(y));
    }

    pub fn line_to(&self, b: &mut PathBuilder, x: f64, y: f64) {
        b.line_to(self.x(x), self.y(y));
    }

    pub fn cubic_to(&self, b: &mut PathBuilder, c: [(f64, f64); 3]) {
        let [(x1, y1), (x2, y2), (x, y)] = c;
        b.cubic_to(self.x(x1), self.y(y1), self.x(x2), self.y(y2), self.x(x), self.y(y));
    }

    /// Arc with radii and visual angles in path space.
    pub fn arc_to(&self, b: &mut PathBuilder, wr: f64, hr: f64, start: f64, sweep: f64) {
        let (t0, dt) = arc_params(wr, hr, start, sweep);
        b.arc_param(wr * self.fx, hr * self.fy, t0, dt);
    }

    pub fn polygon(&self, b: &mut PathBuilder, points: &[(f64, f64)]) {
        let mapped: Vec<(f64, f64)> = points.iter().map(|&(x, y)| (self.x(x), self.y(y))).collect();
        b.polyline(&mapped, true);
    }
}

/// Closed polygon through `points` in `placement`.
pub fn polygon(placement: Placement, points: &[(f64, f64)]) -> PathData {
    let mut b = PathBuilder::new(placement);
    b.polyline(points, true);
    b.finish()
}

/// Outline made of a single filled and stroked polygon.
pub fn polygon_outline(placement: Placement, points: &[(f64, f64)]) -> Outline {
    Outline::path(polygon(placement, points))
}

#[cfg(test)]
pub(crate) mod test_support {
    use super::*;
    use crate::types::Bounds;

    /// Render `kind` with default adjustables.
    pub fn outline(kind: PresetKind, w: f64, h: f64) -> Outline {
        outline_with(kind, w, h, &Resolved::default())
    }

    pub fn outline_with(kind: PresetKind, w: f64, h: f64, adjust: &Resolved) -> Outline {
        crate::render::registry::render_preset(&ShapeInput::new(kind, w, h, adjust))
            .unwrap_or_else(|| panic!("{kind} has no family"))
    }

    pub fn assert_fills_box(bounds: Bounds, w: f64, h: f64) {
        let eps = 1e-3;
        assert!(bounds.min.x.abs() < eps, "min x {bounds:?}");
        assert!(bounds.min.y.abs() < eps, "min y {bounds:?}");
        assert!((bounds.max.x - w).abs() < eps, "max x {bounds:?}");
        assert!((bounds.max.y - h).abs() < eps, "max y {bounds:?}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn space_scales_each_axis() {
        let s = Space::new(100.0, 50.0, 21600.0, 21600.0);
        assert!((s.x(10800.0) - 50.0).abs() < 1e-12);
        assert!((s.y(21600.0) - 50.0).abs() < 1e-12);
    }

    #[test]
    fn zero_path_space_collapses() {
        let s = Space::new(100.0, 50.0, 0.0, 10.0);
        assert_eq!(s.x(5.0), 0.0);
    }

    #[test]
    fn sweeps_wrap_forward() {
        assert_eq!(positive_sweep(0.0, 270.0), 270.0);
        assert_eq!(positive_sweep(270.0, 0.0), 90.0);
        assert_eq!(positive_sweep(90.0, 90.0), 360.0);
    }

    #[test]
    fn at2_measures_clockwise_from_east() {
        assert_eq!(at2(1.0, 0.0), 0.0);
        assert!((at2(0.0, 1.0) - 90.0).abs() < 1e-12);
        assert!((at2(0.0, -1.0) - 270.0).abs() < 1e-12);
    }

    #[test]
    fn design_box_follows_transpose() {
        let adjust = Resolved::default();
        let input = ShapeInput::new(PresetKind::DownArrow, 30.0, 80.0, &adjust);
        let d = input.design(&input.placement().transposed());
        assert_eq!((d.w, d.h), (80.0, 30.0));
        assert_eq!(d.ss(), 30.0);
    }
}
