//! Callouts: line callouts, wedge callouts and clouds.

use crate::kind::PresetKind::{self, *};
use crate::types::ratio;

use super::super::defaults::LEGACY_SPACE;
use super::super::path_builder::PathBuilder;
use super::super::types::{Contour, ContourFill, Outline};
use super::{ShapeInput, Space, at2, of, positive_sweep, visual_point};
use crate::render::registry::PresetFamily;

#[derive(Debug, Clone, Copy)]
pub struct Callouts;

const KINDS: &[PresetKind] = &[
    Callout1,
    Callout2,
    Callout3,
    AccentCallout1,
    AccentCallout2,
    AccentCallout3,
    BorderCallout1,
    BorderCallout2,
    BorderCallout3,
    AccentBorderCallout1,
    AccentBorderCallout2,
    AccentBorderCallout3,
    WedgeRectCallout,
    WedgeRoundRectCallout,
    WedgeEllipseCallout,
    CloudCallout,
    Cloud,
];

impl PresetFamily for Callouts {
    fn name(&self) -> &'static str {
        "callouts"
    }

    fn kinds(&self) -> &'static [PresetKind] {
        KINDS
    }

    fn render(&self, s: &ShapeInput) -> Outline {
        match s.kind {
            Callout1 => line_callout(s, 1, false, false),
            Callout2 => line_callout(s, 2, false, false),
            Callout3 => line_callout(s, 3, false, false),
            AccentCallout1 => line_callout(s, 1, true, false),
            AccentCallout2 => line_callout(s, 2, true, false),
            AccentCallout3 => line_callout(s, 3, true, false),
            BorderCallout1 => line_callout(s, 1, false, true),
            BorderCallout2 => line_callout(s, 2, false, true),
            BorderCallout3 => line_callout(s, 3, false, true),
            AccentBorderCallout1 => line_callout(s, 1, true, true),
            AccentBorderCallout2 => line_callout(s, 2, true, true),
            AccentBorderCallout3 => line_callout(s, 3, true, true),
            WedgeRectCallout => wedge_rect(s, false),
            WedgeRoundRectCallout => wedge_rect(s, true),
            WedgeEllipseCallout => wedge_ellipse(s),
            CloudCallout => cloud_callout(s),
            Cloud => Outline::path(cloud(s)),
            _ => Outline::new(),
        }
    }
}

/// Leader defaults as `(y, x)` pairs in hundred-thousandths of the box.
fn leader_defaults(segments: usize) -> &'static [(f64, f64)] {
    match segments {
        1 => &[(18750.0, -8333.0), (112500.0, -38333.0)],
        2 => &[(18750.0, -8333.0), (18750.0, -16667.0), (112500.0, -46667.0)],
        _ => &[
            (18750.0, -8333.0),
            (18750.0, -16667.0),
            (100000.0, -16667.0),
            (112963.0, -8333.0),
        ],
    }
}

/// Rectangle with a leader line of `segments` segments. Leader points are
/// read from `adj1`/`adj2` (first point, y then x), `adj3`/`adj4` and so
/// on; they are free to leave the box.
fn line_callout(s: &ShapeInput, segments: usize, accent: bool, border: bool) -> Outline {
    let points: Vec<(f64, f64)> = leader_defaults(segments)
        .iter()
        .enumerate()
        .map(|(i, &(dy, dx))| {
            let y = s.adj(&format!("adj{}", 2 * i + 1), dy);
            let x = s.adj(&format!("adj{}", 2 * i + 2), dx);
            (of(s.w, x), of(s.h, y))
        })
        .collect();

    let mut frame = PathBuilder::new(s.placement());
    frame.polyline(&[(0.0, 0.0), (s.w, 0.0), (s.w, s.h), (0.0, s.h)], true);
    let frame = if border {
        Contour::new(frame.finish())
    } else {
        Contour::fill_only(frame.finish(), ContourFill::Normal)
    };
    let mut outline = Outline::new().with(frame);

    if accent {
        let x = points[0].0;
        let mut bar = PathBuilder::new(s.placement());
        bar.move_to(x, 0.0).line_to(x, s.h);
        outline = outline.with(Contour::stroke_only(bar.finish()));
    }

    let mut leader = PathBuilder::new(s.placement());
    leader.polyline(&points, false);
    outline.with(Contour::stroke_only(leader.finish()))
}

/// `cond > 0 ? a : b`, the source format's conditional.
fn pick(cond: f64, a: f64, b: f64) -> f64 {
    if cond > 0.0 { a } else { b }
}

/// Rectangle (optionally rounded) with a wedge reaching out to the point
/// given by `adj1`/`adj2`, offsets from the center in hundred-thousandths
/// of the box. The wedge leaves from whichever side faces the point.
fn wedge_rect(s: &ShapeInput, rounded: bool) -> Outline {
    let (w, h) = (s.w, s.h);
    let dx_pos = of(w, s.adj("adj1", -20833.0));
    let dy_pos = of(h, s.adj("adj2", 62500.0));
    let x_pos = s.hc() + dx_pos;
    let y_pos = s.vc() + dy_pos;
    let dq = ratio(dx_pos * h, w);
    let dz = dy_pos.abs() - dq.abs();
    let x1 = w * pick(dx_pos, 7.0, 2.0) / 12.0;
    let x2 = w * pick(dx_pos, 10.0, 5.0) / 12.0;
    let y1 = h * pick(dy_pos, 7.0, 2.0) / 12.0;
    let y2 = h * pick(dy_pos, 10.0, 5.0) / 12.0;
    let xl = pick(dz, 0.0, pick(dx_pos, 0.0, x_pos));
    let yl = pick(dz, y1, pick(dx_pos, y1, y_pos));
    let xt = pick(dz, pick(dy_pos, x1, x_pos), x1);
    let yt = pick(dz, pick(dy_pos, 0.0, y_pos), 0.0);
    let xr = pick(dz, w, pick(dx_pos, x_pos, w));
    let yr = pick(dz, y1, pick(dx_pos, y_pos, y1));
    let xb = pick(dz, pick(dy_pos, x_pos, x1), x1);
    let yb = pick(dz, pick(dy_pos, y_pos, h), h);

    let u1 = if rounded {
        of(s.ss(), s.pinned("adj3", 16667.0, 0.0, 50000.0))
    } else {
        0.0
    };
    let (u2, v2) = (w - u1, h - u1);
    let mut b = PathBuilder::new(s.placement());
    b.move_to(0.0, u1)
        .arc_to(u1, u1, 180.0, 90.0)
        .line_to(x1, 0.0)
        .line_to(xt, yt)
        .line_to(x2, 0.0)
        .line_to(u2, 0.0)
        .arc_to(u1, u1, 270.0, 90.0)
        .line_to(w, y1)
        .line_to(xr, yr)
        .line_to(w, y2)
        .line_to(w, v2)
        .arc_to(u1, u1, 0.0, 90.0)
        .line_to(x2, h)
        .line_to(xb, yb)
        .line_to(x1, h)
        .line_to(u1, h)
        .arc_to(u1, u1, 90.0, 90.0)
        .line_to(0.0, y2)
        .line_to(xl, yl)
        .line_to(0.0, y1)
        .close();
    Outline::path(b.finish())
}

/// Half-angle of the wedge where it meets the ellipse, degrees.
const WEDGE_HALF_ANGLE: f64 = 11.0;

fn wedge_ellipse(s: &ShapeInput) -> Outline {
    let (w, h) = (s.w, s.h);
    let (hc, vc, wd2, hd2) = (s.hc(), s.vc(), s.wd(2.0), s.hd(2.0));
    let dx_pos = of(w, s.adj("adj1", -20833.0));
    let dy_pos = of(h, s.adj("adj2", 62500.0));
    let pang = (dy_pos * w).atan2(dx_pos * h).to_degrees();
    let st = (pang + WEDGE_HALF_ANGLE).to_radians();
    let en = (pang - WEDGE_HALF_ANGLE).to_radians();
    let (dx1, dy1) = (wd2 * st.cos(), hd2 * st.sin());
    let (dx2, dy2) = (wd2 * en.cos(), hd2 * en.sin());
    let st1 = dy1.atan2(dx1).to_degrees();
    let en1 = dy2.atan2(dx2).to_degrees();
    let mut b = PathBuilder::new(s.placement());
    b.move_to(hc + dx_pos, vc + dy_pos)
        .line_to(hc + dx1, vc + dy1)
        .arc_to(wd2, hd2, st1, positive_sweep(st1, en1))
        .close();
    Outline::path(b.finish())
}

/// Cloud outline: eleven arcs in a 43200 by 43200 space.
const CLOUD_START: (f64, f64) = (3900.0, 14370.0);
const CLOUD_ARCS: [(f64, f64, f64, f64); 11] = [
    (6753.0, 9190.0, -11429249.0, 7426832.0),
    (5333.0, 7267.0, -8646143.0, 5396714.0),
    (4365.0, 5945.0, -8748475.0, 5983381.0),
    (4857.0, 6595.0, -7859164.0, 7034504.0),
    (5333.0, 7273.0, -4722533.0, 6541615.0),
    (6775.0, 9220.0, -2776035.0, 7816140.0),
    (5785.0, 7867.0, 37501.0, 6842000.0),
    (6752.0, 9215.0, 1347096.0, 6910353.0),
    (7720.0, 10543.0, 3974558.0, 4542661.0),
    (4360.0, 5918.0, -16496525.0, 8804134.0),
    (4345.0, 5945.0, -14809710.0, 9151131.0),
];

fn cloud(s: &ShapeInput) -> super::super::path_data::PathData {
    let space = Space::new(s.w, s.h, 43200.0, 43200.0);
    let mut b = PathBuilder::new(s.placement());
    space.move_to(&mut b, CLOUD_START.0, CLOUD_START.1);
    for (wr, hr, st, sw) in CLOUD_ARCS {
        space.arc_to(&mut b, wr, hr, st / 60000.0, sw / 60000.0);
    }
    b.close();
    b.finish()
}

/// Cloud plus three bubbles growing from the point toward the cloud's
/// edge. Bubble radii and spacing are fixed shares of the short side in
/// 21600ths.
fn cloud_callout(s: &ShapeInput) -> Outline {
    let (hc, vc, wd2, hd2) = (s.hc(), s.vc(), s.wd(2.0), s.hd(2.0));
    let ss = s.ss();
    let u = |v: f64| ss * v / LEGACY_SPACE;
    let dx_pos = of(s.w, s.adj("adj1", -20833.0));
    let dy_pos = of(s.h, s.adj("adj2", 62500.0));
    let (px, py) = (hc + dx_pos, vc + dy_pos);
    let edge = visual_point(hc, vc, wd2, hd2, at2(dx_pos, dy_pos));
    let (dx, dy) = (edge.x - px, edge.y - py);
    let dist = dx.hypot(dy);
    let g11 = (dist - u(6600.0)) / 3.0;
    let along = |d: f64| (px + ratio(d * dx, dist), py + ratio(d * dy, dist));
    let mut bubbles = PathBuilder::new(s.placement());
    for (d, r) in [(0.0, u(600.0)), (g11 + u(1800.0), u(1200.0)), (u(4800.0) + g11 * 2.0, u(1800.0))] {
        let (cx, cy) = along(d);
        bubbles.ellipse(cx, cy, r, r);
    }
    Outline::path(cloud(s)).with(Contour::new(bubbles.finish()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust::Adjustables;
    use crate::render::presets::test_support::{outline, outline_with};

    #[test]
    fn wedge_points_down_by_default() {
        let o = outline(WedgeRectCallout, 120.0, 120.0);
        let path = o.contours[0].path.to_string();
        // pointer at (35, 135), leaving the bottom edge between 20 and 50
        assert!(path.contains("L50,120 L35,135 L20,120"), "{path}");
    }

    #[test]
    fn wedge_follows_the_point() {
        let adjust = Adjustables::new()
            .with_val("adj1", 80000)
            .with_val("adj2", 0)
            .resolve()
            .0;
        let o = outline_with(WedgeRectCallout, 100.0, 100.0, &adjust);
        let b = o.bounds();
        assert!((b.max.x - 130.0).abs() < 1e-9, "{b:?}");
        assert!((b.max.y - 100.0).abs() < 1e-9);
    }

    #[test]
    fn ellipse_wedge_reaches_the_point() {
        let o = outline(WedgeEllipseCallout, 100.0, 100.0);
        let path = o.contours[0].path.to_string();
        assert!(path.starts_with("M29.167,112.5 L"), "{path}");
        assert!(path.ends_with('Z'));
    }

    #[test]
    fn line_callouts_have_open_leaders() {
        let o = outline(AccentBorderCallout2, 100.0, 50.0);
        assert_eq!(o.contours.len(), 3);
        assert!(o.contours[0].stroke);
        assert_eq!(o.contours[2].path.to_string(), "M-8.333,9.375 L-16.667,9.375 L-46.667,56.25");
        assert!(o.has_open_stroke());
        let plain = outline(Callout1, 100.0, 50.0);
        assert!(!plain.contours[0].stroke);
    }

    #[test]
    fn cloud_is_closed_and_roughly_fills_the_box() {
        let o = outline(Cloud, 432.0, 216.0);
        let b = o.bounds();
        assert!(b.min.x.abs() < 2.0 && (b.max.x - 432.0).abs() < 2.0, "{b:?}");
        assert!(b.min.y.abs() < 2.0 && (b.max.y - 216.0).abs() < 2.0, "{b:?}");
        assert!(!o.contours[0].path.has_open_subpath());
    }

    #[test]
    fn cloud_callout_has_bubbles() {
        let o = outline(CloudCallout, 100.0, 100.0);
        assert_eq!(o.contours.len(), 2);
        assert!(o.bounds().max.y > 100.0);
        let bubbles = o.contours[1].path.to_string();
        assert_eq!(bubbles.matches('M').count(), 3, "{bubbles}");
        // the smallest bubble is centered on the point at (29.167, 112.5)
        assert!(bubbles.starts_with("M26.389,112.5 A2.778,2.778"), "{bubbles}");
    }
}
