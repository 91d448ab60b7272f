//! Pen-tracking path builder.
//!
//! Shape formulas are written in the source format's path vocabulary:
//! `moveTo`, `lnTo`, `cubicBezTo`, `quadBezTo`, `arcTo` and `close`, where
//! `arcTo` continues from the current pen position with a radius pair, a
//! start angle and a sweep. The builder tracks the pen, turns each arc into
//! SVG endpoint form, and runs every emitted point through a [`Placement`],
//! so one formula can serve mirrored and rotated siblings (a left arrow is a
//! mirrored right arrow, a down arrow a transposed right arrow).
//!
//! # Arc angles
//!
//! `arcTo` angles are visual angles: the direction of the ray from the
//! ellipse center, not the ellipse parameter. They are converted with
//! [`visual_to_parametric`] before the end point is computed.

use std::f64::consts::TAU;

use glam::DVec2;

use super::geometry::{append_ellipse_arc, ellipse_point, visual_to_parametric};
use super::path_data::{PathCommand, PathData};
use crate::types::{Point, pt};

/// Affine map from a formula's design box into the shape box.
///
/// Transposition is applied first, then the mirrors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    /// Width of the target box
    pub w: f64,
    /// Height of the target box
    pub h: f64,
    pub mirror_x: bool,
    pub mirror_y: bool,
    pub transpose: bool,
}

impl Placement {
    pub fn identity(w: f64, h: f64) -> Self {
        Self {
            w,
            h,
            mirror_x: false,
            mirror_y: false,
            transpose: false,
        }
    }

    pub fn mirrored_x(mut self) -> Self {
        self.mirror_x = !self.mirror_x;
        self
    }

    pub fn mirrored_y(mut self) -> Self {
        self.mirror_y = !self.mirror_y;
        self
    }

    pub fn transposed(mut self) -> Self {
        self.transpose = !self.transpose;
        self
    }

    /// Size of the box the formula should be evaluated in.
    pub fn design_size(&self) -> (f64, f64) {
        if self.transpose { (self.h, self.w) } else { (self.w, self.h) }
    }

    pub fn is_identity(&self) -> bool {
        !self.mirror_x && !self.mirror_y && !self.transpose
    }

    /// True when the map reverses orientation, which flips arc sweeps.
    pub fn reverses(&self) -> bool {
        self.mirror_x ^ self.mirror_y ^ self.transpose
    }

    pub fn apply(&self, p: Point) -> Point {
        let mut p = if self.transpose { pt(p.y, p.x) } else { p };
        if self.mirror_x {
            p.x = self.w - p.x;
        }
        if self.mirror_y {
            p.y = self.h - p.y;
        }
        p
    }

    /// Map a whole command list.
    pub fn map_path(&self, path: &PathData) -> PathData {
        if self.is_identity() {
            return path.clone();
        }
        let mut out = PathData::new();
        for cmd in path.commands() {
            out.push(self.map_command(*cmd));
        }
        out
    }

    fn map_command(&self, cmd: PathCommand) -> PathCommand {
        match cmd {
            PathCommand::MoveTo(p) => PathCommand::MoveTo(self.apply(p)),
            PathCommand::LineTo(p) => PathCommand::LineTo(self.apply(p)),
            PathCommand::CubicTo(a, b, c) => PathCommand::CubicTo(self.apply(a), self.apply(b), self.apply(c)),
            PathCommand::QuadTo(a, b) => PathCommand::QuadTo(self.apply(a), self.apply(b)),
            PathCommand::ArcTo {
                rx,
                ry,
                rotation,
                large_arc,
                sweep,
                to,
            } => {
                let (rx, ry) = if self.transpose { (ry, rx) } else { (rx, ry) };
                PathCommand::ArcTo {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep: sweep ^ self.reverses(),
                    to: self.apply(to),
                }
            }
            PathCommand::Close => PathCommand::Close,
        }
    }
}

/// Builds one path in design coordinates.
#[derive(Debug, Clone)]
pub struct PathBuilder {
    placement: Placement,
    local: PathData,
    pen: Point,
    start: Point,
}

impl PathBuilder {
    pub fn new(placement: Placement) -> Self {
        Self {
            placement,
            local: PathData::new(),
            pen: DVec2::ZERO,
            start: DVec2::ZERO,
        }
    }

    /// Builder for an untransformed `w` by `h` box.
    pub fn plain(w: f64, h: f64) -> Self {
        Self::new(Placement::identity(w, h))
    }

    pub fn pen(&self) -> Point {
        self.pen
    }

    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        let p = pt(x, y);
        self.local.push(PathCommand::MoveTo(p));
        self.pen = p;
        self.start = p;
        self
    }

    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        let p = pt(x, y);
        self.local.push(PathCommand::LineTo(p));
        self.pen = p;
        self
    }

    pub fn cubic_to(&mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> &mut Self {
        let p = pt(x, y);
        self.local.push(PathCommand::CubicTo(pt(x1, y1), pt(x2, y2), p));
        self.pen = p;
        self
    }

    pub fn quad_to(&mut self, x1: f64, y1: f64, x: f64, y: f64) -> &mut Self {
        let p = pt(x, y);
        self.local.push(PathCommand::QuadTo(pt(x1, y1), p));
        self.pen = p;
        self
    }

    /// Continue along an ellipse with radii `wr`/`hr`, starting at visual
    /// angle `start_deg` (where the pen currently sits) and turning through
    /// `sweep_deg`.
    pub fn arc_to(&mut self, wr: f64, hr: f64, start_deg: f64, sweep_deg: f64) -> &mut Self {
        let (wr, hr) = (wr.abs(), hr.abs());
        if sweep_deg == 0.0 || !sweep_deg.is_finite() || !start_deg.is_finite() {
            return self;
        }
        let (start, sweep) = arc_params(wr, hr, start_deg, sweep_deg);
        self.arc_param(wr, hr, start, sweep)
    }

    /// Continue along an ellipse from parameter `start` through `sweep`
    /// (both radians, ellipse parameters rather than visual angles).
    pub fn arc_param(&mut self, rx: f64, ry: f64, start: f64, sweep: f64) -> &mut Self {
        let (rx, ry) = (rx.abs(), ry.abs());
        if sweep == 0.0 || !sweep.is_finite() || !start.is_finite() || !rx.is_finite() || !ry.is_finite() {
            return self;
        }
        if rx == 0.0 && ry == 0.0 {
            return self;
        }
        let sweep = sweep.clamp(-TAU, TAU);
        let center = self.pen - pt(rx * start.cos(), ry * start.sin());
        let end = ellipse_point(center, rx, ry, start + sweep);
        if rx == 0.0 || ry == 0.0 {
            // a flat ellipse degenerates to its chord
            return self.line_to(end.x, end.y);
        }
        append_ellipse_arc(&mut self.local, center, rx, ry, start, sweep);
        self.pen = end;
        self
    }

    /// Closed axis-aligned ellipse as its own sub-path.
    pub fn ellipse(&mut self, cx: f64, cy: f64, rx: f64, ry: f64) -> &mut Self {
        self.move_to(cx - rx, cy).arc_to(rx, ry, 180.0, 360.0).close()
    }

    /// Polyline through `points` as its own sub-path.
    pub fn polyline(&mut self, points: &[(f64, f64)], close: bool) -> &mut Self {
        for (i, &(x, y)) in points.iter().enumerate() {
            if i == 0 {
                self.move_to(x, y);
            } else {
                self.line_to(x, y);
            }
        }
        if close && !points.is_empty() {
            self.close();
        }
        self
    }

    /// Straight segments from the pen through `points`.
    pub fn lines_to(&mut self, points: &[(f64, f64)]) -> &mut Self {
        for &(x, y) in points {
            self.line_to(x, y);
        }
        self
    }

    pub fn close(&mut self) -> &mut Self {
        self.local.push(PathCommand::Close);
        self.pen = self.start;
        self
    }

    pub fn is_empty(&self) -> bool {
        self.local.is_empty()
    }

    /// Take the commands built so far, leaving the builder empty with the
    /// same placement.
    pub fn take(&mut self) -> PathData {
        let local = std::mem::take(&mut self.local);
        self.placement.map_path(&local)
    }

    pub fn finish(mut self) -> PathData {
        self.take()
    }
}

/// Ellipse parameters for an arc given in visual angles: returns the start
/// parameter and the signed parameter sweep, both in radians. The sweep keeps
/// the sign of `sweep_deg`; a full turn stays a full turn and anything
/// beyond it is cut to one.
pub fn arc_params(wr: f64, hr: f64, start_deg: f64, sweep_deg: f64) -> (f64, f64) {
    let start_deg = if start_deg.is_finite() { start_deg % 360.0 } else { 0.0 };
    let sweep_deg = sweep_deg.clamp(-360.0, 360.0);
    if wr == 0.0 || hr == 0.0 {
        return (start_deg.to_radians(), sweep_deg.to_radians());
    }
    let start = visual_to_parametric(wr, hr, start_deg.to_radians());
    let end = visual_to_parametric(wr, hr, (start_deg + sweep_deg).to_radians());
    let mut sweep = end - start;
    if sweep_deg.abs() >= 360.0 {
        sweep = sweep_deg.to_radians();
    } else if sweep_deg > 0.0 {
        while sweep <= 0.0 {
            sweep += TAU;
        }
        while sweep > TAU {
            sweep -= TAU;
        }
    } else {
        while sweep >= 0.0 {
            sweep -= TAU;
        }
        while sweep < -TAU {
            sweep += TAU;
        }
    }
    (start, sweep)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quarter_arc_from_pen() {
        let mut b = PathBuilder::plain(20.0, 20.0);
        b.move_to(0.0, 10.0).arc_to(10.0, 10.0, 180.0, 90.0);
        assert!((b.pen() - pt(10.0, 0.0)).length() < 1e-9);
        assert_eq!(b.finish().to_string(), "M0,10 A10,10 0 0,1 10,0");
    }

    #[test]
    fn elliptic_arc_uses_visual_angles() {
        // 45 degrees on a 20 by 10 ellipse lands on the diagonal ray
        let mut b = PathBuilder::plain(40.0, 20.0);
        b.move_to(40.0, 10.0).arc_to(20.0, 10.0, 0.0, 45.0);
        let pen = b.pen() - pt(20.0, 10.0);
        assert!((pen.x - pen.y).abs() < 1e-9, "{pen}");
        assert!(((pen.x / 20.0).powi(2) + (pen.y / 10.0).powi(2) - 1.0).abs() < 1e-9);
    }

    #[test]
    fn full_ellipse_returns_to_start() {
        let mut b = PathBuilder::plain(10.0, 10.0);
        b.ellipse(5.0, 5.0, 5.0, 3.0);
        let path = b.finish();
        let bounds = path.bounds();
        assert!((bounds.min.y - 2.0).abs() < 1e-9);
        assert!((bounds.max.x - 10.0).abs() < 1e-9);
    }

    #[test]
    fn mirrored_placement_flips_sweep() {
        let placement = Placement::identity(20.0, 20.0).mirrored_x();
        let mut b = PathBuilder::new(placement);
        b.move_to(0.0, 10.0).arc_to(10.0, 10.0, 180.0, 90.0);
        assert_eq!(b.finish().to_string(), "M20,10 A10,10 0 0,0 10,0");
    }

    #[test]
    fn transposed_placement_swaps_axes() {
        let placement = Placement::identity(10.0, 30.0).transposed();
        assert_eq!(placement.design_size(), (30.0, 10.0));
        let mut b = PathBuilder::new(placement);
        b.move_to(0.0, 0.0).line_to(30.0, 5.0);
        assert_eq!(b.finish().to_string(), "M0,0 L5,30");
    }

    #[test]
    fn degenerate_arc_becomes_line() {
        let mut b = PathBuilder::plain(10.0, 10.0);
        b.move_to(0.0, 5.0).arc_to(5.0, 0.0, 180.0, 180.0);
        let path = b.finish();
        assert!(path.is_finite());
        assert_eq!(path.len(), 2);
    }

    #[test]
    fn point_arc_is_dropped() {
        let mut b = PathBuilder::plain(10.0, 10.0);
        b.move_to(0.0, 0.0).arc_to(0.0, 0.0, 180.0, 90.0).line_to(10.0, 0.0);
        assert_eq!(b.finish().to_string(), "M0,0 L10,0");
    }
}
