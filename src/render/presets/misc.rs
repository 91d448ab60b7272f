//! Everything else: solids with shaded faces, symbols, banners and scrolls.

use std::f64::consts::{FRAC_1_SQRT_2, SQRT_2};

use crate::kind::PresetKind::{self, *};
use crate::types::{pt, ratio};

use super::super::defaults::{ADJ_UNIT, LEGACY_SPACE};
use super::super::path_builder::{PathBuilder, Placement};
use super::super::path_data::PathData;
use super::super::types::{Contour, ContourFill, Outline};
use super::{ShapeInput, Space, at2, of, polygon, visual_point};
use crate::render::registry::PresetFamily;

#[derive(Debug, Clone, Copy)]
pub struct Misc;

const KINDS: &[PresetKind] = &[
    Cube,
    Can,
    Bevel,
    FoldedCorner,
    Teardrop,
    Heart,
    LightningBolt,
    Sun,
    Moon,
    SmileyFace,
    Donut,
    NoSmoking,
    Ribbon,
    Ribbon2,
    EllipseRibbon,
    EllipseRibbon2,
    LeftRightRibbon,
    VerticalScroll,
    HorizontalScroll,
    Wave,
    DoubleWave,
    Gear6,
    Gear9,
    Funnel,
];

impl PresetFamily for Misc {
    fn name(&self) -> &'static str {
        "misc"
    }

    fn kinds(&self) -> &'static [PresetKind] {
        KINDS
    }

    fn render(&self, s: &ShapeInput) -> Outline {
        let p = s.placement();
        match s.kind {
            Cube => cube(s),
            Can => can(s),
            Bevel => bevel(s),
            FoldedCorner => folded_corner(s),
            Teardrop => teardrop(s),
            Heart => heart(s),
            LightningBolt => lightning_bolt(s),
            Sun => sun(s),
            Moon => moon(s),
            SmileyFace => smiley(s),
            Donut => donut(s),
            NoSmoking => no_smoking(s),
            Ribbon => ribbon(s, p),
            Ribbon2 => ribbon(s, p.mirrored_y()),
            EllipseRibbon => ellipse_ribbon(s, p),
            EllipseRibbon2 => ellipse_ribbon(s, p.mirrored_y()),
            LeftRightRibbon => left_right_ribbon(s),
            HorizontalScroll => scroll(s, p),
            VerticalScroll => scroll(s, p.transposed()),
            Wave => wave(s),
            DoubleWave => double_wave(s),
            Gear6 => gear(s, 6, 330.0, 3526.0, 5358.0),
            Gear9 => gear(s, 9, 270.0, 1763.0, 2679.0),
            Funnel => funnel(s),
            _ => Outline::new(),
        }
    }
}

fn shade(path: PathData, fill: ContourFill) -> Contour {
    Contour::fill_only(path, fill)
}

/// Front face, lighter top and darker side, then the wire outline.
fn cube(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 25000.0, 0.0, 100000.0);
    let (w, h) = (s.w, s.h);
    let y1 = of(s.ss(), a);
    let (y4, x4) = (h - y1, w - y1);
    let p = s.placement();
    let mut wire = PathBuilder::new(p);
    wire.polyline(&[(0.0, y1), (y1, 0.0), (w, 0.0), (w, y4), (x4, h), (0.0, h)], true)
        .polyline(&[(0.0, y1), (x4, y1), (w, 0.0)], false)
        .move_to(x4, y1)
        .line_to(x4, h);
    Outline::new()
        .with(shade(polygon(p, &[(0.0, y1), (x4, y1), (x4, h), (0.0, h)]), ContourFill::Normal))
        .with(shade(polygon(p, &[(0.0, y1), (y1, 0.0), (w, 0.0), (x4, y1)]), ContourFill::LightenLess))
        .with(shade(polygon(p, &[(x4, h), (x4, y1), (w, 0.0), (w, y4)]), ContourFill::DarkenLess))
        .with(Contour::stroke_only(wire.finish()))
}

/// Upright cylinder with a lightened top ellipse.
fn can(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 25000.0, 0.0, ratio(50000.0 * s.h, s.ss()));
    let (w, h, wd2) = (s.w, s.h, s.wd(2.0));
    let y1 = s.ss() * a / 200000.0;
    let y3 = h - y1;
    let p = s.placement();
    let mut body = PathBuilder::new(p);
    body.move_to(0.0, y1)
        .arc_to(wd2, y1, 180.0, -180.0)
        .line_to(w, y3)
        .arc_to(wd2, y1, 0.0, 180.0)
        .close();
    let mut top = PathBuilder::new(p);
    top.ellipse(wd2, y1, wd2, y1);
    let mut wire = PathBuilder::new(p);
    wire.move_to(w, y1)
        .arc_to(wd2, y1, 0.0, 180.0)
        .arc_to(wd2, y1, 180.0, 180.0)
        .line_to(w, y3)
        .arc_to(wd2, y1, 0.0, 180.0)
        .line_to(0.0, y1);
    Outline::new()
        .with(shade(body.finish(), ContourFill::Normal))
        .with(shade(top.finish(), ContourFill::Lighten))
        .with(Contour::stroke_only(wire.finish()))
}

/// Raised button: a flat center and four shaded bevels.
fn bevel(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 12500.0, 0.0, 50000.0);
    let (w, h) = (s.w, s.h);
    let x1 = of(s.ss(), a);
    let (x2, y2) = (w - x1, h - x1);
    let p = s.placement();
    let mut wire = PathBuilder::new(p);
    wire.polyline(&[(0.0, 0.0), (w, 0.0), (w, h), (0.0, h)], true)
        .polyline(&[(x1, x1), (x2, x1), (x2, y2), (x1, y2)], true)
        .move_to(0.0, 0.0)
        .line_to(x1, x1)
        .move_to(0.0, h)
        .line_to(x1, y2)
        .move_to(w, 0.0)
        .line_to(x2, x1)
        .move_to(w, h)
        .line_to(x2, y2);
    Outline::new()
        .with(shade(polygon(p, &[(x1, x1), (x2, x1), (x2, y2), (x1, y2)]), ContourFill::Normal))
        .with(shade(polygon(p, &[(0.0, 0.0), (w, 0.0), (x2, x1), (x1, x1)]), ContourFill::LightenLess))
        .with(shade(polygon(p, &[(0.0, h), (x1, y2), (x2, y2), (w, h)]), ContourFill::DarkenLess))
        .with(shade(polygon(p, &[(0.0, 0.0), (x1, x1), (x1, y2), (0.0, h)]), ContourFill::Lighten))
        .with(shade(polygon(p, &[(w, 0.0), (w, h), (x2, y2), (x2, x1)]), ContourFill::Darken))
        .with(Contour::stroke_only(wire.finish()))
}

fn folded_corner(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 16667.0, 0.0, 50000.0);
    let (w, h) = (s.w, s.h);
    let dy2 = of(s.ss(), a);
    let dy1 = dy2 / 5.0;
    let (x1, y2) = (w - dy2, h - dy2);
    let (x2, y1) = (x1 + dy1, y2 + dy1);
    let p = s.placement();
    let mut wire = PathBuilder::new(p);
    wire.polyline(&[(x1, h), (x2, y1), (w, y2)], false)
        .polyline(&[(x1, h), (0.0, h), (0.0, 0.0), (w, 0.0), (w, y2)], false);
    Outline::new()
        .with(shade(polygon(p, &[(0.0, 0.0), (w, 0.0), (w, y2), (x1, h), (0.0, h)]), ContourFill::Normal))
        .with(shade(polygon(p, &[(x1, h), (x2, y1), (w, y2)]), ContourFill::DarkenLess))
        .with(Contour::stroke_only(wire.finish()))
}

fn teardrop(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 100000.0, 0.0, 200000.0);
    let (hc, vc, wd2, hd2) = (s.hc(), s.vc(), s.wd(2.0), s.hd(2.0));
    let sw = of(SQRT_2 * wd2, a);
    let sh = of(SQRT_2 * hd2, a);
    let x1 = hc + sw * FRAC_1_SQRT_2;
    let y1 = vc - sh * FRAC_1_SQRT_2;
    let (x2, y2) = ((hc + x1) / 2.0, (vc + y1) / 2.0);
    let mut b = PathBuilder::new(s.placement());
    b.move_to(0.0, vc)
        .arc_to(wd2, hd2, 180.0, 90.0)
        .quad_to(x2, 0.0, x1, y1)
        .quad_to(s.w, y2, s.w, vc)
        .arc_to(wd2, hd2, 0.0, 90.0)
        .arc_to(wd2, hd2, 90.0, 90.0)
        .close();
    Outline::path(b.finish())
}

fn heart(s: &ShapeInput) -> Outline {
    let (w, hc) = (s.w, s.hc());
    let (dx1, dx2) = (w * 49.0 / 48.0, w * 10.0 / 48.0);
    let (x1, x2, x3, x4) = (hc - dx1, hc - dx2, hc + dx2, hc + dx1);
    let y1 = -s.hd(3.0);
    let hd4 = s.hd(4.0);
    let mut b = PathBuilder::new(s.placement());
    b.move_to(hc, hd4)
        .cubic_to(x3, y1, x4, hd4, hc, s.h)
        .cubic_to(x1, hd4, x2, y1, hc, hd4)
        .close();
    Outline::path(b.finish())
}

const LIGHTNING: &[(f64, f64)] = &[
    (8472.0, 0.0),
    (12860.0, 6080.0),
    (11050.0, 6797.0),
    (16577.0, 12007.0),
    (14767.0, 12877.0),
    (21600.0, 21600.0),
    (10012.0, 14915.0),
    (12222.0, 13987.0),
    (5022.0, 9705.0),
    (7602.0, 8382.0),
    (0.0, 3890.0),
];

fn lightning_bolt(s: &ShapeInput) -> Outline {
    let space = Space::new(s.w, s.h, LEGACY_SPACE, LEGACY_SPACE);
    let mut b = PathBuilder::new(s.placement());
    space.polygon(&mut b, LIGHTNING);
    Outline::path(b.finish())
}

/// Sun: eight triangular rays around a disc. `adj` is the gap from the
/// box edge to the disc as a share of the width.
///
/// Ray bases come from the sines of 22.5 and 67.5 degrees in 32768ths.
fn sun(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 25000.0, 12500.0, 46875.0);
    let (w, h, hc, vc) = (s.w, s.h, s.hc(), s.vc());
    let g0 = 50000.0 - a;
    let g1 = g0 * 30274.0 / 32768.0;
    let g2 = g0 * 12540.0 / 32768.0;
    let g10 = (50000.0 - g1) * 3.0 / 4.0;
    let g11 = (50000.0 - g2) * 3.0 / 4.0;
    let g12 = g10 + 3662.0;
    let g13 = g11 + 3662.0;
    let g14 = g11 + 12500.0;
    let (g15, g16, g17, g18) = (ADJ_UNIT - g10, ADJ_UNIT - g12, ADJ_UNIT - g13, ADJ_UNIT - g14);
    let x = |g: f64| of(w, g);
    let y = |g: f64| of(h, g);
    let (ox1, ox2) = (w * 18436.0 / LEGACY_SPACE, w * 3163.0 / LEGACY_SPACE);
    let (oy1, oy2) = (h * 3163.0 / LEGACY_SPACE, h * 18436.0 / LEGACY_SPACE);
    let rays = [
        [(w, vc), (x(g15), y(g18)), (x(g15), y(g14))],
        [(ox1, oy1), (x(g16), y(g13)), (x(g17), y(g12))],
        [(hc, 0.0), (x(g18), y(g10)), (x(g14), y(g10))],
        [(ox2, oy1), (x(g13), y(g12)), (x(g12), y(g13))],
        [(0.0, vc), (x(g10), y(g14)), (x(g10), y(g18))],
        [(ox2, oy2), (x(g12), y(g17)), (x(g13), y(g16))],
        [(hc, h), (x(g14), y(g15)), (x(g18), y(g15))],
        [(ox1, oy2), (x(g17), y(g16)), (x(g16), y(g17))],
    ];
    let mut b = PathBuilder::new(s.placement());
    for ray in &rays {
        b.polyline(ray, true);
    }
    let (wr, hr) = (x(g0), y(g0));
    b.move_to(x(a), vc).arc_to(wr, hr, 180.0, 360.0).close();
    Outline::path(b.finish())
}

/// Crescent opening to the right; `adj` is its thickness at the middle.
///
/// The inner edge is the circle, in a box squared to `ss`, through both
/// horns and the point `adj` in from the left edge.
fn moon(s: &ShapeInput) -> Outline {
    let ss = s.ss();
    let a = s.pinned("adj", 50000.0, 0.0, 87500.0);
    let (w, h, hd2) = (s.w, s.h, s.hd(2.0));
    let g0 = of(ss, a);
    let g1 = ss - g0;
    let g5 = ratio(ss * ss * 2.0 - g0 * g0, g1);
    let g8 = g5 / 2.0 - g0;
    let (rx, ry) = (ratio(g8 * w, ss), ratio(g8 * hd2, ss));
    let cx = ratio(g0 * w, ss) + rx;
    let st = at2(w - cx, -hd2);
    let en = at2(w - cx, hd2);
    let mut b = PathBuilder::new(s.placement());
    b.move_to(w, h)
        .arc_to(w, hd2, 90.0, 180.0)
        .arc_to(rx, ry, st, en - st)
        .close();
    Outline::path(b.finish())
}

fn smiley(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 4653.0, -4653.0, 4653.0);
    let (w, h) = (s.w, s.h);
    let (hc, vc, wd2, hd2) = (s.hc(), s.vc(), s.wd(2.0), s.hd(2.0));
    let u = |v: f64, len: f64| len * v / LEGACY_SPACE;
    let (x1, x2, x3, x4) = (u(4969.0, w), u(6215.0, w), u(13135.0, w), u(16640.0, w));
    let (y1, y3) = (u(7570.0, h), u(16515.0, h));
    let dy2 = of(h, a);
    let y2 = y3 - dy2;
    let y5 = y3 + dy2 + h * a / 50000.0;
    let (wr, hr) = (u(1125.0, w), u(1125.0, h));
    let p = s.placement();
    let mut face = PathBuilder::new(p);
    face.ellipse(hc, vc, wd2, hd2);
    let face = face.finish();
    let mut eyes = PathBuilder::new(p);
    eyes.ellipse(x2 + wr, y1, wr, hr).ellipse(x3 + wr, y1, wr, hr);
    let mut smile = PathBuilder::new(p);
    smile.move_to(x1, y2).quad_to(hc, y5, x4, y2);
    Outline::new()
        .with(shade(face.clone(), ContourFill::Normal))
        .with(Contour::new(eyes.finish()).with_fill(ContourFill::DarkenLess))
        .with(Contour::stroke_only(smile.finish()))
        .with(Contour::stroke_only(face))
}

/// Ellipse with a concentric hole of width `adj`.
fn donut(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 25000.0, 0.0, 50000.0);
    let (vc, wd2, hd2) = (s.vc(), s.wd(2.0), s.hd(2.0));
    let dr = of(s.ss(), a);
    let mut b = PathBuilder::new(s.placement());
    b.move_to(0.0, vc)
        .arc_to(wd2, hd2, 180.0, 360.0)
        .close()
        .move_to(dr, vc)
        .arc_to(wd2 - dr, hd2 - dr, 180.0, -360.0)
        .close();
    Outline::path(b.finish())
}

/// Ring with a diagonal bar; the hole is two half discs cut along the bar.
fn no_smoking(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 18750.0, 0.0, 50000.0);
    let (hc, vc, wd2, hd2) = (s.hc(), s.vc(), s.wd(2.0), s.hd(2.0));
    let dr = of(s.ss(), a);
    let (iwd2, ihd2) = (wd2 - dr, hd2 - dr);
    // polar radius of the inner ellipse at `ang` (radians)
    let radius = |ang: f64| ratio(iwd2 * ihd2, (ihd2 * ang.cos()).hypot(iwd2 * ang.sin()));
    let diag = s.h.atan2(s.w);
    let dang = (dr / 2.0).atan2(radius(diag));
    let sw = -180.0 + 2.0 * dang.to_degrees();
    let st1 = diag - dang;
    let n1 = radius(st1);
    let (dx1, dy1) = (n1 * st1.cos(), n1 * st1.sin());
    let st1 = st1.to_degrees();
    let mut b = PathBuilder::new(s.placement());
    b.move_to(0.0, vc)
        .arc_to(wd2, hd2, 180.0, 360.0)
        .close()
        .move_to(hc + dx1, vc + dy1)
        .arc_to(iwd2, ihd2, st1, sw)
        .close()
        .move_to(hc - dx1, vc - dy1)
        .arc_to(iwd2, ihd2, st1 - 180.0, sw)
        .close();
    Outline::path(b.finish())
}

/// Banner whose ends sit level with the top and tuck behind a center
/// band hanging `adj1` lower; `adj2` is the band width. The `2` variant is
/// the same shape upside down.
fn ribbon(s: &ShapeInput, p: Placement) -> Outline {
    let d = s.design(&p);
    let a1 = d.pinned("adj1", 16667.0, 0.0, 33333.0);
    let a2 = d.pinned("adj2", 50000.0, 25000.0, 75000.0);
    let (w, h, hc) = (d.w, d.h, d.hc());
    let (wd8, wd32) = (d.wd(8.0), d.wd(32.0));
    let dx2 = w * a2 / 200000.0;
    let (x2, x9) = (hc - dx2, hc + dx2);
    let (x3, x8) = (x2 + wd32, x9 - wd32);
    let (x5, x6) = (x2 + wd8, x9 - wd8);
    let (x4, x7) = (x5 - wd32, x6 + wd32);
    let x10 = w - wd8;
    let y1 = h * a1 / 200000.0;
    let y2 = of(h, a1);
    let y4 = h - y2;
    let y3 = y4 / 2.0;
    let hr = h * a1 / 400000.0;
    let (y5, y6) = (h - hr, y2 - hr);
    let outline = |b: &mut PathBuilder| {
        b.move_to(0.0, 0.0)
            .line_to(x4, 0.0)
            .arc_to(wd32, hr, 270.0, 180.0)
            .line_to(x3, y1)
            .arc_to(wd32, hr, 270.0, -180.0)
            .line_to(x8, y2)
            .arc_to(wd32, hr, 90.0, -180.0)
            .line_to(x7, y1)
            .arc_to(wd32, hr, 90.0, 180.0)
            .lines_to(&[(w, 0.0), (x10, y3), (w, y4), (x9, y4), (x9, y5)])
            .arc_to(wd32, hr, 0.0, 90.0)
            .line_to(x3, h)
            .arc_to(wd32, hr, 90.0, 90.0)
            .lines_to(&[(x2, y4), (0.0, y4), (wd8, y3)])
            .close();
    };
    let mut body = PathBuilder::new(p);
    outline(&mut body);
    let mut folds = PathBuilder::new(p);
    folds
        .move_to(x5, hr)
        .arc_to(wd32, hr, 0.0, 90.0)
        .line_to(x3, y1)
        .arc_to(wd32, hr, 270.0, -180.0)
        .line_to(x5, y2)
        .close()
        .move_to(x6, hr)
        .arc_to(wd32, hr, 180.0, -90.0)
        .line_to(x8, y1)
        .arc_to(wd32, hr, 270.0, 180.0)
        .line_to(x6, y2)
        .close();
    let mut wire = PathBuilder::new(p);
    outline(&mut wire);
    wire.move_to(x5, hr)
        .line_to(x5, y2)
        .move_to(x6, y2)
        .line_to(x6, hr)
        .move_to(x2, y4)
        .line_to(x2, y6)
        .move_to(x9, y6)
        .line_to(x9, y4);
    Outline::new()
        .with(shade(body.finish(), ContourFill::Normal))
        .with(shade(folds.finish(), ContourFill::DarkenLess))
        .with(Contour::stroke_only(wire.finish()))
}

/// Ribbon whose edges bow along parabolas through the box corners.
/// `adj1` is the band's drop, `adj2` its width and `adj3` the bow.
fn ellipse_ribbon(s: &ShapeInput, p: Placement) -> Outline {
    let d = s.design(&p);
    let a1 = d.pinned("adj1", 25000.0, 0.0, 100000.0);
    let a2 = d.pinned("adj2", 50000.0, 25000.0, 75000.0);
    let min3 = (a1 - (ADJ_UNIT - a1) / 2.0).max(0.0);
    let a3 = d.pinned("adj3", 12500.0, min3, a1);
    let (w, h, hc) = (d.w, d.h, d.hc());
    let wd8 = d.wd(8.0);
    let x2 = hc - w * a2 / 200000.0;
    let x3 = x2 + wd8;
    let (x4, x5, x6) = (w - x3, w - x2, w - wd8);
    let dy1 = of(h, a3);
    let f1 = ratio(4.0 * dy1, w);
    // every edge is y = f1 * (x - x * x / w) shifted down by `off`
    let bow = |x: f64| f1 * (x - ratio(x * x, w));
    let ctrl = |from: f64, to: f64, off: f64| {
        let slope = f1 * (1.0 - ratio(2.0 * from, w));
        ((from + to) / 2.0, bow(from) + off + slope * (to - from) / 2.0)
    };
    let q1 = of(h, a1);
    let dy3 = q1 - dy1;
    let rh = h - q1;
    let y1 = bow(x3);
    let y3 = bow(x2) + dy3;
    let (y5, y6, y7) = (bow(x2) + rh, y3 + rh, y1 + dy3);
    let y2 = (dy1 * 14.0 / 16.0 + rh) / 2.0;
    let quad = |b: &mut PathBuilder, from: f64, to: (f64, f64), off: f64| {
        let (cx, cy) = ctrl(from, to.0, off);
        b.quad_to(cx, cy, to.0, to.1);
    };
    let outline = |b: &mut PathBuilder| {
        b.move_to(0.0, 0.0);
        quad(b, 0.0, (x3, y1), 0.0);
        b.line_to(x2, y3);
        quad(b, x2, (x5, y3), dy3);
        b.line_to(x4, y1);
        quad(b, x4, (w, 0.0), 0.0);
        b.lines_to(&[(x6, y2), (w, rh)]);
        quad(b, w, (x5, y5), rh);
        b.line_to(x5, y6);
        quad(b, x5, (x2, y6), dy3 + rh);
        b.line_to(x2, y5);
        quad(b, x2, (0.0, rh), rh);
        b.line_to(wd8, y2).close();
    };
    let mut body = PathBuilder::new(p);
    outline(&mut body);
    let mut folds = PathBuilder::new(p);
    folds.move_to(x3, y7).lines_to(&[(x3, y1), (x2, y3)]);
    quad(&mut folds, x2, (x3, y7), dy3);
    folds.close().move_to(x4, y7).lines_to(&[(x4, y1), (x5, y3)]);
    quad(&mut folds, x5, (x4, y7), dy3);
    folds.close();
    let mut wire = PathBuilder::new(p);
    outline(&mut wire);
    wire.move_to(x3, y7)
        .line_to(x3, y1)
        .move_to(x4, y1)
        .line_to(x4, y7)
        .move_to(x2, y3)
        .line_to(x2, y5)
        .move_to(x5, y5)
        .line_to(x5, y3);
    Outline::new()
        .with(shade(body.finish(), ContourFill::Normal))
        .with(shade(folds.finish(), ContourFill::DarkenLess))
        .with(Contour::stroke_only(wire.finish()))
}

/// Two arrow-ended bands joined by an S-shaped twist at the middle: the
/// left one points left and sits higher, the right one points right.
/// `adj1` is the band height, `adj2` the head length and `adj3` the drop
/// between the bands.
fn left_right_ribbon(s: &ShapeInput) -> Outline {
    let ss = s.ss();
    let a3 = s.pinned("adj3", 16667.0, 0.0, 33333.0);
    let a1 = s.pinned("adj1", 50000.0, 0.0, ADJ_UNIT - a3);
    let (w, h, hc, vc) = (s.w, s.h, s.hc(), s.vc());
    let wd32 = s.wd(32.0);
    let a2 = s.pinned("adj2", 50000.0, 0.0, ratio(ADJ_UNIT * (s.wd(2.0) - wd32), ss));
    let x1 = of(ss, a2);
    let x4 = w - x1;
    let dy1 = h * a1 / 200000.0;
    let dy2 = h * a3 / 200000.0;
    let ly1 = vc - dy2 - dy1;
    let ly2 = ly1 + dy1;
    let ly4 = ly2 * 2.0;
    let ly3 = ly4 - ly1;
    let (ry1, ry2, ry3, ry4) = (h - ly4, h - ly3, h - ly2, h - ly1);
    let hr = a3 * ss / 400000.0;
    let (x2, x3) = (hc - wd32, hc + wd32);
    let (y1, y2) = (ly1 + hr, ry2 - hr);
    let outline = |b: &mut PathBuilder| {
        b.move_to(0.0, ly2)
            .lines_to(&[(x1, 0.0), (x1, ly1), (hc, ly1)])
            .arc_to(wd32, hr, 270.0, 180.0)
            .arc_to(wd32, hr, 270.0, -180.0)
            .lines_to(&[(x4, ry2), (x4, ry1), (w, ry3), (x4, h), (x4, ry4), (hc, ry4)])
            .arc_to(wd32, hr, 90.0, 90.0)
            .lines_to(&[(x2, ly3), (x1, ly3), (x1, ly4)])
            .close();
    };
    let mut body = PathBuilder::new(s.placement());
    outline(&mut body);
    let mut twist = PathBuilder::new(s.placement());
    twist
        .move_to(x3, y1)
        .arc_to(wd32, hr, 0.0, 90.0)
        .arc_to(wd32, hr, 270.0, -180.0)
        .line_to(x3, y2)
        .close();
    let mut wire = PathBuilder::new(s.placement());
    outline(&mut wire);
    wire.move_to(x3, y1).line_to(x3, y2);
    Outline::new()
        .with(shade(body.finish(), ContourFill::Normal))
        .with(shade(twist.finish(), ContourFill::DarkenLess))
        .with(Contour::stroke_only(wire.finish()))
}

/// Sheet rolled along the top and bottom edges; the top roll ends in a
/// curl at the right, the bottom one at the left. The vertical scroll is
/// the horizontal one drawn transposed.
fn scroll(s: &ShapeInput, p: Placement) -> Outline {
    let d = s.design(&p);
    let a = d.pinned("adj", 12500.0, 0.0, 25000.0);
    let (w, h) = (d.w, d.h);
    let ch = of(d.ss(), a);
    let (ch2, ch4) = (ch / 2.0, ch / 4.0);
    let (y3, y4) = (ch + ch2, ch * 2.0);
    let (y6, y7) = (h - ch, h - ch2);
    let y5 = y6 - ch2;
    let (x3, x4) = (w - ch, w - ch2);
    let outline = |b: &mut PathBuilder| {
        b.move_to(0.0, y3)
            .arc_to(ch2, ch2, 180.0, 90.0)
            .lines_to(&[(x3, ch), (x3, ch2)])
            .arc_to(ch2, ch2, 180.0, 180.0)
            .line_to(w, y5)
            .arc_to(ch2, ch2, 0.0, 90.0)
            .lines_to(&[(ch, y6), (ch, y7)])
            .arc_to(ch2, ch2, 0.0, 180.0)
            .close();
    };
    let mut sheet = PathBuilder::new(p);
    outline(&mut sheet);
    let mut backs = PathBuilder::new(p);
    backs
        .move_to(ch2, y4)
        .arc_to(ch2, ch2, 90.0, -90.0)
        .arc_to(ch4, ch4, 0.0, -180.0)
        .close()
        .move_to(ch, y7)
        .arc_to(ch2, ch2, 0.0, -180.0)
        .close();
    let mut wire = PathBuilder::new(p);
    outline(&mut wire);
    wire.move_to(x3, ch)
        .line_to(x4, ch)
        .arc_to(ch2, ch2, 90.0, -90.0)
        .move_to(x4, ch)
        .line_to(x4, ch2)
        .arc_to(ch4, ch4, 0.0, 180.0)
        .move_to(ch2, y4)
        .line_to(ch2, y3)
        .arc_to(ch4, ch4, 180.0, 180.0)
        .arc_to(ch2, ch2, 0.0, 180.0)
        .move_to(ch, y3)
        .line_to(ch, y6)
        .move_to(ch, y7)
        .arc_to(ch2, ch2, 0.0, -180.0);
    Outline::new()
        .with(shade(sheet.finish(), ContourFill::Normal))
        .with(shade(backs.finish(), ContourFill::DarkenLess))
        .with(Contour::stroke_only(wire.finish()))
}

/// Parameter angle, degrees, where the funnel body leaves the rim.
const FUNNEL_RIM_ANGLE: f64 = 8.0;

/// Horizontal offsets shared by the wave shapes: the wave's left and right
/// ends on the top and bottom edges, skewed by `adj2`.
fn wave_ends(s: &ShapeInput) -> (f64, f64, f64, f64) {
    let a2 = s.pinned("adj2", 0.0, -10000.0, 10000.0);
    let of2 = s.w * a2 / 50000.0;
    let (dx2, dx5) = if of2 > 0.0 { (0.0, of2) } else { (of2, 0.0) };
    (-dx2, s.w - dx5, dx5, s.w + dx2)
}

fn wave(s: &ShapeInput) -> Outline {
    let a1 = s.pinned("adj1", 12500.0, 0.0, 20000.0);
    let y1 = of(s.h, a1);
    let dy2 = y1 * 10.0 / 3.0;
    let y4 = s.h - y1;
    let (x2, x5, x6, x10) = wave_ends(s);
    let dx3 = (x5 - x2) / 3.0;
    let mut b = PathBuilder::new(s.placement());
    b.move_to(x2, y1)
        .cubic_to(x2 + dx3, y1 - dy2, x2 + 2.0 * dx3, y1 + dy2, x5, y1)
        .line_to(x10, y4)
        .cubic_to(x6 + 2.0 * dx3, y4 + dy2, x6 + dx3, y4 - dy2, x6, y4)
        .close();
    Outline::path(b.finish())
}

fn double_wave(s: &ShapeInput) -> Outline {
    let a1 = s.pinned("adj1", 6250.0, 0.0, 12500.0);
    let y1 = of(s.h, a1);
    let dy2 = y1 * 10.0 / 3.0;
    let y4 = s.h - y1;
    let (x2, x8, x9, x15) = wave_ends(s);
    let dx3 = (x8 - x2) / 6.0;
    let x5 = (x2 + x8) / 2.0;
    let x12 = (x9 + x15) / 2.0;
    let (up, down) = (y1 - dy2, y1 + dy2);
    let (bup, bdown) = (y4 - dy2, y4 + dy2);
    let mut b = PathBuilder::new(s.placement());
    b.move_to(x2, y1)
        .cubic_to(x2 + dx3, up, x2 + 2.0 * dx3, down, x5, y1)
        .cubic_to(x5 + dx3, up, x5 + 2.0 * dx3, down, x8, y1)
        .line_to(x15, y4)
        .cubic_to(x12 + 2.0 * dx3, bdown, x12 + dx3, bup, x12, y4)
        .cubic_to(x9 + 2.0 * dx3, bdown, x9 + dx3, bup, x9, y4)
        .close();
    Outline::path(b.finish())
}

/// Gear with `teeth` trapezoid teeth, the first centered at `first`
/// degrees. `adj1` is the tooth height and `adj2` the width of its flat
/// top, both against the short side.
fn gear(s: &ShapeInput, teeth: usize, first: f64, top_default: f64, top_max: f64) -> Outline {
    let ss = s.ss();
    let a1 = s.pinned("adj1", if teeth == 6 { 15000.0 } else { 10000.0 }, 0.0, 20000.0);
    let a2 = s.pinned("adj2", top_default, 0.0, top_max);
    let th = of(ss, a1);
    let top2 = of(ss, a2) / 2.0;
    let (rw, rh) = (s.wd(2.0) - th, s.hd(2.0) - th);
    // half the angle a tooth base covers on the inner ellipse
    let ha = at2(rw.min(rh), th / 2.0 + top2);
    let step = 360.0 / teeth as f64;
    let (hc, vc) = (s.hc(), s.vc());
    let mut b = PathBuilder::new(s.placement());
    for k in 0..teeth {
        let c = first + step * k as f64;
        let base_in = visual_point(hc, vc, rw, rh, c - ha);
        let base_out = visual_point(hc, vc, rw, rh, c + ha);
        let tip = visual_point(hc, vc, rw + th, rh + th, c);
        let (sin, cos) = c.to_radians().sin_cos();
        let across = pt(-sin, cos) * top2;
        let (lead, trail) = (tip - across, tip + across);
        if k == 0 {
            b.move_to(base_in.x, base_in.y);
        }
        b.lines_to(&[(lead.x, lead.y), (trail.x, trail.y), (base_out.x, base_out.y)])
            .arc_to(rw, rh, c + ha, step - 2.0 * ha);
    }
    b.close();
    Outline::path(b.finish())
}

/// Funnel seen from slightly above: an elliptic rim with its opening cut
/// out, tapering to a small spout.
fn funnel(s: &ShapeInput) -> Outline {
    let (h, hc) = (s.h, s.hc());
    let (wd2, hd4) = (s.wd(2.0), s.hd(4.0));
    let d = s.ss() / 20.0;
    let tilt = FUNNEL_RIM_ANGLE.to_radians();
    let da = at2(wd2 * tilt.cos(), hd4 * tilt.sin());
    let st = 180.0 - da;
    let (rw3, rh3) = (wd2 / 4.0, hd4 / 4.0);
    let start = visual_point(hc, hd4, wd2, hd4, st);
    let spout = visual_point(hc, h - rh3, rw3, rh3, da);
    let mut b = PathBuilder::new(s.placement());
    b.move_to(start.x, start.y)
        .arc_to(wd2, hd4, st, 180.0 + 2.0 * da)
        .line_to(spout.x, spout.y)
        .arc_to(rw3, rh3, da, 180.0 - 2.0 * da)
        .close()
        .move_to(d, hd4)
        .arc_to(wd2 - d, hd4 - d, 180.0, -360.0)
        .close();
    Outline::path(b.finish())
}
