//! Numeric geometry primitives.
//!
//! Pure functions over the shape's local box. Angles are in degrees,
//! measured clockwise from the positive x axis (y points down), so a
//! positive sweep is a clockwise turn on screen and maps to SVG
//! `sweep-flag = 1`.

use std::f64::consts::{PI, TAU};

use super::defaults;
use super::path_data::PathData;
use crate::types::{Point, pt};

/// Largest sweep a single arc command is allowed to carry.
pub const MAX_ARC_SEGMENT_DEG: f64 = 359.999;

/// Point on a circle of radius `r` around `(cx, cy)`.
pub fn polar_to_cartesian(cx: f64, cy: f64, r: f64, angle_deg: f64) -> Point {
    ellipse_point(pt(cx, cy), r, r, angle_deg.to_radians())
}

/// Point on an axis-aligned ellipse at parameter `t` (radians).
#[inline]
pub fn ellipse_point(center: Point, rx: f64, ry: f64, t: f64) -> Point {
    let (s, c) = t.sin_cos();
    center + pt(rx * c, ry * s)
}

/// Arc fragment: a move to the start point followed by arc commands.
///
/// Angles are ellipse parameters in degrees. Sweeps of a full turn or more
/// are split so no single arc command spans 360 degrees. With
/// `close_to_center` the fragment returns to the center and closes, which
/// gives a pie slice.
pub fn arc_to_path(
    cx: f64,
    cy: f64,
    rx: f64,
    ry: f64,
    start_deg: f64,
    end_deg: f64,
    close_to_center: bool,
) -> PathData {
    let center = pt(cx, cy);
    let start = start_deg.to_radians();
    let first = ellipse_point(center, rx, ry, start);
    let mut path = PathData::new().m(first.x, first.y);
    append_ellipse_arc(&mut path, center, rx, ry, start, (end_deg - start_deg).to_radians());
    if close_to_center {
        path = path.l(cx, cy).z();
    }
    path
}

/// Append arc commands tracing the ellipse from parameter `start` through
/// `sweep` (radians). The caller is responsible for the current point
/// already sitting at the start of the arc.
///
/// Sweeps beyond a full turn retrace the same ellipse and are cut to one
/// turn, so at most a handful of commands are pushed.
pub fn append_ellipse_arc(path: &mut PathData, center: Point, rx: f64, ry: f64, start: f64, sweep: f64) {
    if sweep == 0.0 || !sweep.is_finite() || !start.is_finite() {
        return;
    }
    let sweep = sweep.clamp(-TAU, TAU);
    let limit = MAX_ARC_SEGMENT_DEG.to_radians();
    let segments = if sweep.abs() >= limit {
        // halves keep the large-arc flag unambiguous
        ((sweep.abs() / PI).ceil() as usize).max(2)
    } else {
        1
    };
    let step = sweep / segments as f64;
    for i in 1..=segments {
        let t = start + step * i as f64;
        let p = ellipse_point(center, rx, ry, t);
        let large = step.abs() > PI;
        let cw = step > 0.0;
        path.push(super::path_data::PathCommand::ArcTo {
            rx: rx.abs(),
            ry: ry.abs(),
            rotation: 0.0,
            large_arc: large,
            sweep: cw,
            to: p,
        });
    }
}

/// Ellipse parameter at which the ray from the center at visual angle
/// `visual` (radians) meets the ellipse.
#[inline]
pub fn visual_to_parametric(rx: f64, ry: f64, visual: f64) -> f64 {
    if rx == ry {
        return visual;
    }
    let (s, c) = visual.sin_cos();
    let t = (rx * s).atan2(ry * c);
    // keep the same turn as the input so sweeps stay monotonic
    t + TAU * ((visual - t) / TAU).round()
}

/// Closed gear outline with `teeth` teeth inscribed in the `w` by `h` box.
///
/// Each tooth is a trapezoid: inner, outer, outer, inner, evenly spaced
/// around the ellipse. Fewer than three teeth are raised to three.
pub fn gear_path(w: f64, h: f64, teeth: usize) -> PathData {
    let teeth = teeth.max(3);
    let center = pt(w / 2.0, h / 2.0);
    let (orx, ory) = (w / 2.0, h / 2.0);
    let (irx, iry) = (orx * defaults::GEAR_INNER_RATIO, ory * defaults::GEAR_INNER_RATIO);
    let quarter = TAU / (teeth as f64 * 4.0);
    let mut points = Vec::with_capacity(teeth * 4);
    for i in 0..teeth {
        let base = -PI / 2.0 + i as f64 * quarter * 4.0 - quarter * 1.5;
        points.push(ellipse_point(center, irx, iry, base));
        points.push(ellipse_point(center, orx, ory, base + quarter));
        points.push(ellipse_point(center, orx, ory, base + quarter * 2.0));
        points.push(ellipse_point(center, irx, iry, base + quarter * 3.0));
    }
    PathData::polygon(&points, true)
}

/// Corner treatment for [`corner_rect_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CornerStyle {
    /// Quarter-circle fillet
    #[default]
    Round,
    /// Straight chamfer
    Snip,
}

/// Which corners take the adjustments in [`snip_round_rect_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CornerMode {
    /// All four corners use the first adjustment.
    All,
    /// Only the top-right corner, first adjustment.
    One,
    /// Top-left and bottom-right use the first adjustment, the other
    /// diagonal the second.
    TwoDiagonal,
    /// Top corners use the first adjustment, bottom corners the second.
    TwoSame,
}

/// A single corner cut: its size along each edge and its style.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CornerCut {
    pub size: f64,
    pub style: CornerStyle,
}

impl CornerCut {
    pub fn round(size: f64) -> Self {
        Self {
            size,
            style: CornerStyle::Round,
        }
    }

    pub fn snip(size: f64) -> Self {
        Self {
            size,
            style: CornerStyle::Snip,
        }
    }
}

/// Rectangle with per-corner fillets or chamfers, corners ordered
/// top-left, top-right, bottom-right, bottom-left.
pub fn corner_rect_path(w: f64, h: f64, corners: [CornerCut; 4]) -> PathData {
    let [tl, tr, br, bl] = corners;
    let mut path = PathData::new().m(tl.size, 0.0).l(w - tr.size, 0.0);
    path = corner(path, tr, w, tr.size);
    path = path.l(w, h - br.size);
    path = corner(path, br, w - br.size, h);
    path = path.l(bl.size, h);
    path = corner(path, bl, 0.0, h - bl.size);
    path = path.l(0.0, tl.size);
    path = corner(path, tl, tl.size, 0.0);
    path.z()
}

fn corner(path: PathData, cut: CornerCut, x: f64, y: f64) -> PathData {
    if cut.size <= 0.0 {
        return path;
    }
    match cut.style {
        CornerStyle::Round => path.a(cut.size, cut.size, 0.0, false, true, x, y),
        CornerStyle::Snip => path.l(x, y),
    }
}

/// Rectangle with one, two, or four rounded or snipped corners.
///
/// `adj1`/`adj2` are fractions of the short side, each clamped to
/// `[0, 0.5]` independently.
pub fn snip_round_rect_path(w: f64, h: f64, adj1: f64, adj2: f64, style: CornerStyle, mode: CornerMode) -> PathData {
    let ss = w.min(h).max(0.0);
    let a = ss * clamp_unit_half(adj1);
    let b = ss * clamp_unit_half(adj2);
    let cut = |size| CornerCut { size, style };
    let none = CornerCut::default();
    let corners = match mode {
        CornerMode::All => [cut(a), cut(a), cut(a), cut(a)],
        CornerMode::One => [none, cut(a), none, none],
        CornerMode::TwoDiagonal => [cut(a), cut(b), cut(a), cut(b)],
        CornerMode::TwoSame => [cut(a), cut(a), cut(b), cut(b)],
    };
    corner_rect_path(w, h, corners)
}

fn clamp_unit_half(v: f64) -> f64 {
    if v.is_finite() { v.clamp(0.0, 0.5) } else { 0.0 }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::path_data::{ArcCenter, PathCommand};

    #[test]
    fn polar_points() {
        let p = polar_to_cartesian(10.0, 10.0, 5.0, 90.0);
        assert!((p - pt(10.0, 15.0)).length() < 1e-12);
        let p = polar_to_cartesian(0.0, 0.0, 2.0, 180.0);
        assert!((p - pt(-2.0, 0.0)).length() < 1e-12);
    }

    /// Walk the arc commands of `path` and check sampled points against the
    /// circle.
    fn assert_traces_circle(path: &PathData, c: Point, r: f64) {
        let mut current = None;
        let mut total = 0.0;
        for cmd in path.commands() {
            match *cmd {
                PathCommand::MoveTo(p) => current = Some(p),
                PathCommand::ArcTo {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    to,
                } => {
                    let from = current.expect("arc before move");
                    let arc = ArcCenter::from_endpoints(from, to, rx, ry, rotation, large_arc, sweep)
                        .expect("arc is drawable");
                    assert!((arc.center - c).length() < 1e-6);
                    let steps = (arc.sweep.abs().to_degrees() / 10.0).round() as usize;
                    for i in 0..=steps {
                        let t = arc.start + arc.sweep * i as f64 / steps as f64;
                        let p = arc.point_at(t);
                        let expected = c + pt(r * t.cos(), r * t.sin());
                        assert!((p - expected).length() < 1e-6, "{p} vs {expected}");
                    }
                    total += arc.sweep;
                    current = Some(to);
                }
                _ => panic!("unexpected command {cmd:?}"),
            }
        }
        assert!((total.to_degrees() - 360.0).abs() < 1e-6, "total sweep {}", total.to_degrees());
    }

    #[test]
    fn full_turn_is_split() {
        let path = arc_to_path(50.0, 40.0, 30.0, 30.0, 0.0, 360.0, false);
        let arcs = path.commands().iter().filter(|c| matches!(c, PathCommand::ArcTo { .. })).count();
        assert!(arcs >= 2);
        assert_traces_circle(&path, pt(50.0, 40.0), 30.0);
    }

    #[test]
    fn runaway_sweep_stops_after_one_turn() {
        let path = arc_to_path(50.0, 40.0, 30.0, 30.0, 0.0, 36_000_000.0, false);
        let arcs = path.commands().iter().filter(|c| matches!(c, PathCommand::ArcTo { .. })).count();
        assert_eq!(arcs, 2);
        assert_traces_circle(&path, pt(50.0, 40.0), 30.0);
    }

    #[test]
    fn pie_closes_to_center() {
        let path = arc_to_path(10.0, 10.0, 10.0, 10.0, 0.0, 90.0, true);
        assert_eq!(path.to_string(), "M20,10 A10,10 0 0,1 10,20 L10,10 Z");
    }

    #[test]
    fn negative_sweep_uses_counter_clockwise_flag() {
        let path = arc_to_path(0.0, 0.0, 1.0, 1.0, 0.0, -90.0, false);
        assert_eq!(path.to_string(), "M1,0 A1,1 0 0,0 0,-1");
    }

    #[test]
    fn gear_alternates_radii() {
        let path = gear_path(100.0, 100.0, 6);
        assert_eq!(path.len(), 6 * 4 + 1);
        let b = path.bounds();
        assert!(b.width() <= 100.0 + 1e-9);
        assert!(b.min.x >= -1e-9);
    }

    #[test]
    fn gear_raises_tooth_count() {
        assert_eq!(gear_path(10.0, 10.0, 0).len(), 3 * 4 + 1);
    }

    #[test]
    fn round_rect_all_corners() {
        let path = snip_round_rect_path(100.0, 50.0, 0.2, 0.0, CornerStyle::Round, CornerMode::All);
        assert_eq!(
            path.to_string(),
            "M10,0 L90,0 A10,10 0 0,1 100,10 L100,40 A10,10 0 0,1 90,50 L10,50 A10,10 0 0,1 0,40 L0,10 A10,10 0 0,1 10,0 Z"
        );
    }

    #[test]
    fn snip_adjustment_is_clamped() {
        let over = snip_round_rect_path(100.0, 50.0, 3.0, 0.0, CornerStyle::Snip, CornerMode::One);
        let edge = snip_round_rect_path(100.0, 50.0, 0.5, 0.0, CornerStyle::Snip, CornerMode::One);
        assert_eq!(over, edge);
        assert_eq!(edge.to_string(), "M0,0 L75,0 L100,25 L100,50 L0,50 L0,0 Z");
    }

    #[test]
    fn degenerate_box_stays_finite() {
        let path = snip_round_rect_path(0.0, 0.0, 0.2, 0.2, CornerStyle::Round, CornerMode::TwoSame);
        assert!(path.is_finite());
    }

    #[test]
    fn visual_angle_conversion() {
        // 45 degrees on a 2:1 ellipse hits the parameter atan(2)
        let t = visual_to_parametric(2.0, 1.0, PI / 4.0);
        assert!((t - 2f64.atan()).abs() < 1e-12);
        let t = visual_to_parametric(2.0, 1.0, 3.0 * PI);
        assert!((t - 3.0 * PI).abs() < 1e-12);
    }
}
