//! Arithmetic symbols. Bar lengths are a fixed 73490 hundred-thousandths
//! of the box; only their thickness and spacing are adjustable.

use crate::kind::PresetKind::{self, *};
use crate::types::ratio;

use super::super::path_builder::PathBuilder;
use super::super::types::Outline;
use super::{ShapeInput, of, polygon_outline};
use crate::render::registry::PresetFamily;

#[derive(Debug, Clone, Copy)]
pub struct MathSymbols;

const KINDS: &[PresetKind] = &[MathPlus, MathMinus, MathMultiply, MathDivide, MathEqual, MathNotEqual];

const BAR: f64 = 73490.0;

impl PresetFamily for MathSymbols {
    fn name(&self) -> &'static str {
        "math"
    }

    fn kinds(&self) -> &'static [PresetKind] {
        KINDS
    }

    fn render(&self, s: &ShapeInput) -> Outline {
        match s.kind {
            MathPlus => plus(s),
            MathMinus => minus(s),
            MathMultiply => multiply(s),
            MathDivide => divide(s),
            MathEqual => equal(s),
            MathNotEqual => not_equal(s),
            _ => Outline::new(),
        }
    }
}

/// Half the bar length along each axis.
fn half_bar(s: &ShapeInput) -> (f64, f64) {
    (s.w * BAR / 200000.0, s.h * BAR / 200000.0)
}

fn plus(s: &ShapeInput) -> Outline {
    let a1 = s.pinned("adj1", 23520.0, 0.0, BAR);
    let (dx1, dy1) = half_bar(s);
    let dx2 = s.ss() * a1 / 200000.0;
    let (hc, vc) = (s.hc(), s.vc());
    let (x1, x2, x3, x4) = (hc - dx1, hc - dx2, hc + dx2, hc + dx1);
    let (y1, y2, y3, y4) = (vc - dy1, vc - dx2, vc + dx2, vc + dy1);
    polygon_outline(
        s.placement(),
        &[
            (x1, y2),
            (x2, y2),
            (x2, y1),
            (x3, y1),
            (x3, y2),
            (x4, y2),
            (x4, y3),
            (x3, y3),
            (x3, y4),
            (x2, y4),
            (x2, y3),
            (x1, y3),
        ],
    )
}

fn minus(s: &ShapeInput) -> Outline {
    let a1 = s.pinned("adj1", 23520.0, 0.0, 100000.0);
    let dy1 = s.h * a1 / 200000.0;
    let (dx1, _) = half_bar(s);
    let (x1, x2) = (s.hc() - dx1, s.hc() + dx1);
    let (y1, y2) = (s.vc() - dy1, s.vc() + dy1);
    polygon_outline(s.placement(), &[(x1, y1), (x2, y1), (x2, y2), (x1, y2)])
}

/// Two bars of thickness `adj1` along the box diagonals, drawn as the
/// twelve-sided outline of their union.
fn multiply(s: &ShapeInput) -> Outline {
    let a1 = s.pinned("adj1", 23520.0, 0.0, 51965.0);
    let (w, h, hc, vc) = (s.w, s.h, s.hc(), s.vc());
    let th = of(s.ss(), a1);
    let a = h.atan2(w);
    let (sa, ca, ta) = (a.sin(), a.cos(), a.tan());
    let dl = w.hypot(h);
    let lm = dl - dl * 51965.0 / 100000.0;
    let (xm, ym) = (ca * lm / 2.0, sa * lm / 2.0);
    let (dxam, dyam) = (sa * th / 2.0, ca * th / 2.0);
    let (xa, ya) = (xm - dxam, ym + dyam);
    let (xb, yb) = (xm + dxam, ym - dyam);
    let yc = (hc - xb) * ta + yb;
    let (xd, xe) = (w - xb, w - xa);
    let xfe = ratio(vc - ya, ta);
    let (xf, xl) = (xe - xfe, xa + xfe);
    let (yg, yh, yi) = (h - ya, h - yb, h - yc);
    polygon_outline(
        s.placement(),
        &[
            (xa, ya),
            (xb, yb),
            (hc, yc),
            (xd, yb),
            (xe, ya),
            (xf, vc),
            (xe, yg),
            (xd, yh),
            (hc, yi),
            (xb, yh),
            (xa, yg),
            (xl, vc),
        ],
    )
}

fn divide(s: &ShapeInput) -> Outline {
    let (w, h) = (s.w, s.h);
    let a1 = s.pinned("adj1", 23520.0, 1000.0, 36745.0);
    let max_adj3 = ((BAR - a1) / 4.0).min(ratio(36745.0 * w, h));
    let a3 = s.pinned("adj3", 11760.0, 1000.0, max_adj3);
    let a2 = s.pinned("adj2", 5880.0, 0.0, BAR - 4.0 * a3 - a1);
    let dy1 = h * a1 / 200000.0;
    let yg = of(h, a2);
    let rad = of(h, a3);
    let (dx1, _) = half_bar(s);
    let (hc, vc) = (s.hc(), s.vc());
    let (y3, y4) = (vc - dy1, vc + dy1);
    let y2 = y3 - (yg + rad);
    let y1 = y2 - rad;
    let y5 = h - y1;
    let (x1, x3) = (hc - dx1, hc + dx1);
    let mut b = PathBuilder::new(s.placement());
    b.move_to(hc, y1)
        .arc_to(rad, rad, 270.0, 360.0)
        .close()
        .move_to(hc, y5)
        .arc_to(rad, rad, 90.0, 360.0)
        .close()
        .polyline(&[(x1, y3), (x3, y3), (x3, y4), (x1, y4)], true);
    Outline::path(b.finish())
}

fn equal(s: &ShapeInput) -> Outline {
    let a1 = s.pinned("adj1", 23520.0, 0.0, 36745.0);
    let a2 = s.pinned("adj2", 11760.0, 0.0, 100000.0 - 2.0 * a1);
    let dy1 = of(s.h, a1);
    let dy2 = s.h * a2 / 200000.0;
    let (dx1, _) = half_bar(s);
    let (x1, x2) = (s.hc() - dx1, s.hc() + dx1);
    let (y2, y3) = (s.vc() - dy2, s.vc() + dy2);
    let (y1, y4) = (y2 - dy1, y3 + dy1);
    let mut b = PathBuilder::new(s.placement());
    b.polyline(&[(x1, y1), (x2, y1), (x2, y2), (x1, y2)], true)
        .polyline(&[(x1, y3), (x2, y3), (x2, y4), (x1, y4)], true);
    Outline::path(b.finish())
}

/// Equals sign crossed by a slash at `adj2` (angle from the horizontal,
/// pinned to 70..110 degrees).
fn not_equal(s: &ShapeInput) -> Outline {
    let (w, h) = (s.w, s.h);
    let a1 = s.pinned("adj1", 23520.0, 0.0, 50000.0);
    let cr_ang = s.pinned("adj2", 6600000.0, 4200000.0, 6600000.0);
    let a3 = s.pinned("adj3", 11760.0, 0.0, 100000.0 - 2.0 * a1);
    let dy1 = of(h, a1);
    let dy2 = h * a3 / 200000.0;
    let (dx1, _) = half_bar(s);
    let (hc, vc, hd2) = (s.hc(), s.vc(), s.hd(2.0));
    let (x1, x8) = (hc - dx1, hc + dx1);
    let (y2, y3) = (vc - dy2, vc + dy2);
    let (y1, y4) = (y2 - dy1, y3 + dy1);

    let cadj2 = (cr_ang - 5400000.0) / 60000.0;
    let xadj2 = hd2 * cadj2.to_radians().tan();
    let len = xadj2.hypot(hd2);
    let bhw = ratio(len * dy1, hd2);
    let x7 = hc + xadj2 - bhw / 2.0;
    let slant = |y: f64| x7 - ratio(xadj2 * y, hd2);
    let (x6, x5, x4, x3) = (slant(y1), slant(y2), slant(y3), slant(y4));
    let (rx7, rx6, rx5, rx4, rx3) = (x7 + bhw, x6 + bhw, x5 + bhw, x4 + bhw, x3 + bhw);
    let dx7 = ratio(dy1 * hd2, len);
    let dy3 = ratio(dy1 * xadj2, len);
    let (rx, ry, lx, ly) = if cadj2 > 0.0 {
        (x7 + dx7, dy3, x6, 0.0)
    } else {
        (rx7, 0.0, rx6 - dx7, -dy3)
    };
    let (dlx, drx, dly, dry) = (w - rx, w - lx, h - ry, h - ly);
    polygon_outline(
        s.placement(),
        &[
            (x1, y1),
            (x6, y1),
            (lx, ly),
            (rx, ry),
            (rx6, y1),
            (x8, y1),
            (x8, y2),
            (rx5, y2),
            (rx4, y3),
            (x8, y3),
            (x8, y4),
            (rx3, y4),
            (drx, dry),
            (dlx, dly),
            (x3, y4),
            (x1, y4),
            (x1, y3),
            (x4, y3),
            (x5, y2),
            (x1, y2),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::presets::test_support::outline;

    #[test]
    fn minus_is_a_centered_bar() {
        let o = outline(MathMinus, 100.0, 100.0);
        assert_eq!(
            o.contours[0].path.to_string(),
            "M13.255,38.24 L86.745,38.24 L86.745,61.76 L13.255,61.76 Z"
        );
    }

    #[test]
    fn symbols_are_centered() {
        for &kind in KINDS {
            let b = outline(kind, 120.0, 90.0).bounds();
            assert!((b.min.x + b.max.x - 120.0).abs() < 1e-6, "{kind} {b:?}");
            assert!((b.min.y + b.max.y - 90.0).abs() < 1e-6, "{kind} {b:?}");
            assert!(b.min.x >= -1e-9 && b.max.x <= 120.0 + 1e-9, "{kind} {b:?}");
            assert!(b.min.y >= -1e-9 && b.max.y <= 90.0 + 1e-9, "{kind} {b:?}");
        }
    }

    #[test]
    fn equal_has_two_bars() {
        let path = outline(MathEqual, 100.0, 100.0).contours[0].path.to_string();
        assert_eq!(path.matches('M').count(), 2);
        assert_eq!(path.matches('Z').count(), 2);
    }

    #[test]
    fn divide_has_two_dots() {
        let path = outline(MathDivide, 100.0, 100.0).contours[0].path.to_string();
        assert_eq!(path.matches('M').count(), 3);
        assert!(path.contains('A'));
    }
}
