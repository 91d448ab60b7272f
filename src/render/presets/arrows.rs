//! Block arrows.
//!
//! Directional siblings share a formula: the right-pointing version is
//! written once and placed mirrored or transposed for the other
//! directions.

use crate::kind::PresetKind::{self, *};
use crate::types::{Point, pt, ratio};

use super::super::path_builder::{PathBuilder, Placement};
use super::super::defaults::ADJ_UNIT;
use super::super::types::{Contour, ContourFill, Outline};
use super::{ShapeInput, at2, of, polygon_outline, positive_sweep, raw_angle, visual_point};
use crate::render::registry::PresetFamily;

#[derive(Debug, Clone, Copy)]
pub struct Arrows;

const KINDS: &[PresetKind] = &[
    RightArrow,
    LeftArrow,
    UpArrow,
    DownArrow,
    StripedRightArrow,
    NotchedRightArrow,
    BentUpArrow,
    LeftRightArrow,
    UpDownArrow,
    LeftUpArrow,
    LeftRightUpArrow,
    QuadArrow,
    RightArrowCallout,
    LeftArrowCallout,
    UpArrowCallout,
    DownArrowCallout,
    LeftRightArrowCallout,
    UpDownArrowCallout,
    QuadArrowCallout,
    BentArrow,
    UturnArrow,
    CircularArrow,
    LeftCircularArrow,
    LeftRightCircularArrow,
    CurvedRightArrow,
    CurvedLeftArrow,
    CurvedUpArrow,
    CurvedDownArrow,
    SwooshArrow,
    HomePlate,
    Chevron,
];

impl PresetFamily for Arrows {
    fn name(&self) -> &'static str {
        "arrows"
    }

    fn kinds(&self) -> &'static [PresetKind] {
        KINDS
    }

    fn render(&self, s: &ShapeInput) -> Outline {
        let right = s.placement();
        let left = right.mirrored_x();
        let down = right.transposed();
        let up = down.mirrored_y();
        match s.kind {
            RightArrow => arrow(s, right),
            LeftArrow => arrow(s, left),
            DownArrow => arrow(s, down),
            UpArrow => arrow(s, up),
            StripedRightArrow => striped_arrow(s),
            NotchedRightArrow => notched_arrow(s),
            LeftRightArrow => double_arrow(s, right),
            UpDownArrow => double_arrow(s, down),
            BentUpArrow => bent_up_arrow(s),
            LeftUpArrow => left_up_arrow(s),
            LeftRightUpArrow => left_right_up_arrow(s),
            QuadArrow => quad_arrow(s),
            RightArrowCallout => arrow_callout(s, right),
            LeftArrowCallout => arrow_callout(s, left),
            DownArrowCallout => arrow_callout(s, down),
            UpArrowCallout => arrow_callout(s, up),
            LeftRightArrowCallout => double_arrow_callout(s, right),
            UpDownArrowCallout => double_arrow_callout(s, down),
            QuadArrowCallout => quad_arrow_callout(s),
            BentArrow => bent_arrow(s),
            UturnArrow => uturn_arrow(s),
            CircularArrow => ring_arrow(s, RingHeads::End, 1.0),
            LeftCircularArrow => ring_arrow(s, RingHeads::End, -1.0),
            LeftRightCircularArrow => ring_arrow(s, RingHeads::Both, 1.0),
            CurvedRightArrow => curved_arrow(s, right),
            CurvedLeftArrow => curved_arrow(s, left),
            CurvedDownArrow => curved_arrow(s, down),
            CurvedUpArrow => curved_arrow(s, up),
            SwooshArrow => swoosh_arrow(s),
            HomePlate => home_plate(s),
            Chevron => chevron(s),
            _ => Outline::new(),
        }
    }
}

fn arrow(s: &ShapeInput, p: Placement) -> Outline {
    let d = s.design(&p);
    let a1 = d.pinned("adj1", 50000.0, 0.0, 100000.0);
    let a2 = d.pinned("adj2", 50000.0, 0.0, d.max_adj(d.w));
    let dy1 = d.h * a1 / 200000.0;
    let (y1, y2) = (d.vc() - dy1, d.vc() + dy1);
    let x1 = d.w - of(d.ss(), a2);
    polygon_outline(
        p,
        &[
            (0.0, y1),
            (x1, y1),
            (x1, 0.0),
            (d.w, d.vc()),
            (x1, d.h),
            (x1, y2),
            (0.0, y2),
        ],
    )
}

fn striped_arrow(s: &ShapeInput) -> Outline {
    let a1 = s.pinned("adj1", 50000.0, 0.0, 100000.0);
    let a2 = s.pinned("adj2", 50000.0, 0.0, ratio(84375.0 * s.w, s.ss()));
    let ss = s.ss();
    let (ssd32, ssd16, ssd8) = (ss / 32.0, ss / 16.0, ss / 8.0);
    let x4 = ss * 5.0 / 32.0;
    let x5 = s.w - of(ss, a2);
    let dy1 = s.h * a1 / 200000.0;
    let (y1, y2) = (s.vc() - dy1, s.vc() + dy1);
    let mut b = PathBuilder::new(s.placement());
    b.polyline(&[(0.0, y1), (ssd32, y1), (ssd32, y2), (0.0, y2)], true);
    b.polyline(&[(ssd16, y1), (ssd8, y1), (ssd8, y2), (ssd16, y2)], true);
    b.polyline(
        &[
            (x4, y1),
            (x5, y1),
            (x5, 0.0),
            (s.w, s.vc()),
            (x5, s.h),
            (x5, y2),
            (x4, y2),
        ],
        true,
    );
    Outline::path(b.finish())
}

fn notched_arrow(s: &ShapeInput) -> Outline {
    let a1 = s.pinned("adj1", 50000.0, 0.0, 100000.0);
    let a2 = s.pinned("adj2", 50000.0, 0.0, s.max_adj(s.w));
    let dx2 = of(s.ss(), a2);
    let x2 = s.w - dx2;
    let dy1 = s.h * a1 / 200000.0;
    let (y1, y2) = (s.vc() - dy1, s.vc() + dy1);
    let x1 = ratio(dy1 * dx2, s.hd(2.0));
    polygon_outline(
        s.placement(),
        &[
            (0.0, y1),
            (x2, y1),
            (x2, 0.0),
            (s.w, s.vc()),
            (x2, s.h),
            (x2, y2),
            (0.0, y2),
            (x1, s.vc()),
        ],
    )
}

fn double_arrow(s: &ShapeInput, p: Placement) -> Outline {
    let d = s.design(&p);
    let a1 = d.pinned("adj1", 50000.0, 0.0, 100000.0);
    let a2 = d.pinned("adj2", 50000.0, 0.0, d.max_adj(d.w) / 2.0);
    let dy = d.h * a1 / 200000.0;
    let x1 = of(d.ss(), a2);
    let x4 = d.w - x1;
    let (y1, y2) = (d.vc() - dy, d.vc() + dy);
    polygon_outline(
        p,
        &[
            (0.0, d.vc()),
            (x1, 0.0),
            (x1, y1),
            (x4, y1),
            (x4, 0.0),
            (d.w, d.vc()),
            (x4, d.h),
            (x4, y2),
            (x1, y2),
            (x1, d.h),
        ],
    )
}

fn bent_up_arrow(s: &ShapeInput) -> Outline {
    let a1 = s.pinned("adj1", 25000.0, 0.0, 50000.0);
    let a2 = s.pinned("adj2", 25000.0, 0.0, 50000.0);
    let a3 = s.pinned("adj3", 25000.0, 0.0, 50000.0);
    let ss = s.ss();
    let y1 = of(ss, a3);
    let x1 = s.w - ss * a2 / 50000.0;
    let x3 = s.w - of(ss, a2);
    let dx2 = ss * a1 / 200000.0;
    let (x2, x4) = (x3 - dx2, x3 + dx2);
    let y2 = s.h - of(ss, a1);
    polygon_outline(
        s.placement(),
        &[
            (0.0, y2),
            (x2, y2),
            (x2, y1),
            (x1, y1),
            (x3, 0.0),
            (s.w, y1),
            (x4, y1),
            (x4, s.h),
            (0.0, s.h),
        ],
    )
}

/// Shared pins of the three-way and four-way arrows.
fn branch_adjust(s: &ShapeInput, default: f64, third_max: impl Fn(f64) -> f64) -> (f64, f64, f64) {
    let a2 = s.pinned("adj2", default, 0.0, 50000.0);
    let a1 = s.pinned("adj1", default, 0.0, a2 * 2.0);
    let a3 = s.pinned("adj3", default, 0.0, third_max(a2 * 2.0));
    (a1, a2, a3)
}

fn left_up_arrow(s: &ShapeInput) -> Outline {
    let (a1, a2, a3) = branch_adjust(s, 25000.0, |max1| 100000.0 - max1);
    let ss = s.ss();
    let x1 = of(ss, a3);
    let x2 = s.w - ss * a2 / 50000.0;
    let y2 = s.h - ss * a2 / 50000.0;
    let dx4 = of(ss, a2);
    let (x4, y4) = (s.w - dx4, s.h - dx4);
    let dx3 = ss * a1 / 200000.0;
    let (x3, x5) = (x4 - dx3, x4 + dx3);
    let (y3, y5) = (y4 - dx3, y4 + dx3);
    polygon_outline(
        s.placement(),
        &[
            (0.0, y4),
            (x1, y2),
            (x1, y3),
            (x3, y3),
            (x3, x1),
            (x2, x1),
            (x4, 0.0),
            (s.w, x1),
            (x5, x1),
            (x5, y5),
            (x1, y5),
            (x1, s.h),
        ],
    )
}

fn left_right_up_arrow(s: &ShapeInput) -> Outline {
    let (a1, a2, a3) = branch_adjust(s, 25000.0, |max1| (100000.0 - max1) / 2.0);
    let ss = s.ss();
    let x1 = of(ss, a3);
    let dx2 = of(ss, a2);
    let (x2, x5) = (s.hc() - dx2, s.hc() + dx2);
    let dx3 = ss * a1 / 200000.0;
    let (x3, x4) = (s.hc() - dx3, s.hc() + dx3);
    let x6 = s.w - x1;
    let y2 = s.h - ss * a2 / 50000.0;
    let y4 = s.h - dx2;
    let (y3, y5) = (y4 - dx3, y4 + dx3);
    polygon_outline(
        s.placement(),
        &[
            (0.0, y4),
            (x1, y2),
            (x1, y3),
            (x3, y3),
            (x3, x1),
            (x2, x1),
            (s.hc(), 0.0),
            (x5, x1),
            (x4, x1),
            (x4, y3),
            (x6, y3),
            (x6, y2),
            (s.w, y4),
            (x6, s.h),
            (x6, y5),
            (x1, y5),
            (x1, s.h),
        ],
    )
}

fn quad_arrow(s: &ShapeInput) -> Outline {
    let (a1, a2, a3) = branch_adjust(s, 22500.0, |max1| (100000.0 - max1) / 2.0);
    let ss = s.ss();
    let (hc, vc) = (s.hc(), s.vc());
    let x1 = of(ss, a3);
    let dx2 = of(ss, a2);
    let (x2, x5) = (hc - dx2, hc + dx2);
    let dx3 = ss * a1 / 200000.0;
    let (x3, x4) = (hc - dx3, hc + dx3);
    let x6 = s.w - x1;
    let (y2, y5) = (vc - dx2, vc + dx2);
    let (y3, y4) = (vc - dx3, vc + dx3);
    let y6 = s.h - x1;
    polygon_outline(
        s.placement(),
        &[
            (0.0, vc),
            (x1, y2),
            (x1, y3),
            (x3, y3),
            (x3, x1),
            (x2, x1),
            (hc, 0.0),
            (x5, x1),
            (x4, x1),
            (x4, y3),
            (x6, y3),
            (x6, y2),
            (s.w, vc),
            (x6, y5),
            (x6, y4),
            (x4, y4),
            (x4, y6),
            (x5, y6),
            (hc, s.h),
            (x2, y6),
            (x3, y6),
            (x3, y4),
            (x1, y4),
            (x1, y5),
        ],
    )
}

fn arrow_callout(s: &ShapeInput, p: Placement) -> Outline {
    let d = s.design(&p);
    let ss = d.ss();
    let a2 = d.pinned("adj2", 25000.0, 0.0, d.max_adj(d.h) / 2.0);
    let a1 = d.pinned("adj1", 25000.0, 0.0, a2 * 2.0);
    let a3 = d.pinned("adj3", 25000.0, 0.0, d.max_adj(d.w));
    let q2 = ratio(a3 * ss, d.w);
    let a4 = d.pinned("adj4", 64977.0, 0.0, 100000.0 - q2);
    let dy1 = of(ss, a2);
    let dy2 = ss * a1 / 200000.0;
    let vc = d.vc();
    let (y1, y2, y3, y4) = (vc - dy1, vc - dy2, vc + dy2, vc + dy1);
    let x3 = d.w - of(ss, a3);
    let x2 = of(d.w, a4);
    polygon_outline(
        p,
        &[
            (0.0, 0.0),
            (x2, 0.0),
            (x2, y2),
            (x3, y2),
            (x3, y1),
            (d.w, vc),
            (x3, y4),
            (x3, y3),
            (x2, y3),
            (x2, d.h),
            (0.0, d.h),
        ],
    )
}

fn double_arrow_callout(s: &ShapeInput, p: Placement) -> Outline {
    let d = s.design(&p);
    let ss = d.ss();
    let a2 = d.pinned("adj2", 25000.0, 0.0, d.max_adj(d.h) / 2.0);
    let a1 = d.pinned("adj1", 25000.0, 0.0, a2 * 2.0);
    let a3 = d.pinned("adj3", 25000.0, 0.0, d.max_adj(d.w) / 2.0);
    let q2 = ratio(a3 * ss, d.wd(2.0));
    let a4 = d.pinned("adj4", 48123.0, 0.0, 100000.0 - q2);
    let dy1 = of(ss, a2);
    let dy2 = ss * a1 / 200000.0;
    let vc = d.vc();
    let (y1, y2, y3, y4) = (vc - dy1, vc - dy2, vc + dy2, vc + dy1);
    let x1 = of(ss, a3);
    let x4 = d.w - x1;
    let dx2 = d.w * a4 / 200000.0;
    let (x2, x3) = (d.hc() - dx2, d.hc() + dx2);
    polygon_outline(
        p,
        &[
            (0.0, vc),
            (x1, y1),
            (x1, y2),
            (x2, y2),
            (x2, 0.0),
            (x3, 0.0),
            (x3, y2),
            (x4, y2),
            (x4, y1),
            (d.w, vc),
            (x4, y4),
            (x4, y3),
            (x3, y3),
            (x3, d.h),
            (x2, d.h),
            (x2, y3),
            (x1, y3),
            (x1, y4),
        ],
    )
}

fn quad_arrow_callout(s: &ShapeInput) -> Outline {
    let ss = s.ss();
    let a2 = s.pinned("adj2", 18515.0, 0.0, 50000.0);
    let a1 = s.pinned("adj1", 18515.0, 0.0, a2 * 2.0);
    let a3 = s.pinned("adj3", 18515.0, 0.0, 50000.0 - a2);
    let a4 = s.pinned("adj4", 48123.0, a1, 100000.0 - a3 * 2.0);
    let (hc, vc) = (s.hc(), s.vc());
    let dx2 = of(ss, a2);
    let dx3 = ss * a1 / 200000.0;
    let ah = of(ss, a3);
    let dx1 = s.w * a4 / 200000.0;
    let dy1 = s.h * a4 / 200000.0;
    let (x8, y8) = (s.w - ah, s.h - ah);
    let (x2, x7) = (hc - dx1, hc + dx1);
    let (x3, x6) = (hc - dx2, hc + dx2);
    let (x4, x5) = (hc - dx3, hc + dx3);
    let (y2, y7) = (vc - dy1, vc + dy1);
    let (y3, y6) = (vc - dx2, vc + dx2);
    let (y4, y5) = (vc - dx3, vc + dx3);
    polygon_outline(
        s.placement(),
        &[
            (0.0, vc),
            (ah, y3),
            (ah, y4),
            (x2, y4),
            (x2, y2),
            (x4, y2),
            (x4, ah),
            (x3, ah),
            (hc, 0.0),
            (x6, ah),
            (x5, ah),
            (x5, y2),
            (x7, y2),
            (x7, y4),
            (x8, y4),
            (x8, y3),
            (s.w, vc),
            (x8, y6),
            (x8, y5),
            (x7, y5),
            (x7, y7),
            (x5, y7),
            (x5, y8),
            (x6, y8),
            (hc, s.h),
            (x3, y8),
            (x4, y8),
            (x4, y7),
            (x2, y7),
            (x2, y5),
            (ah, y5),
            (ah, y6),
        ],
    )
}

fn bent_arrow(s: &ShapeInput) -> Outline {
    let ss = s.ss();
    let a2 = s.pinned("adj2", 25000.0, 0.0, 50000.0);
    let a1 = s.pinned("adj1", 25000.0, 0.0, a2 * 2.0);
    let a3 = s.pinned("adj3", 25000.0, 0.0, 50000.0);
    let th = of(ss, a1);
    let aw2 = of(ss, a2);
    let dh2 = aw2 - th / 2.0;
    let ah = of(ss, a3);
    let bs = (s.w - ah).min(s.h - dh2);
    let a4 = s.pinned("adj4", 43750.0, 0.0, s.max_adj(bs));
    let bd = of(ss, a4);
    let bd2 = (bd - th).max(0.0);
    let x3 = th + bd2;
    let x4 = s.w - ah;
    let y3 = dh2 + th;
    let y4 = y3 + dh2;
    let y5 = dh2 + bd;
    let mut b = PathBuilder::new(s.placement());
    b.move_to(0.0, s.h)
        .line_to(0.0, y5)
        .arc_to(bd, bd, 180.0, 90.0)
        .line_to(x4, dh2)
        .line_to(x4, 0.0)
        .line_to(s.w, aw2)
        .line_to(x4, y4)
        .line_to(x4, y3)
        .line_to(x3, y3)
        .arc_to(bd2, bd2, 270.0, -90.0)
        .line_to(th, s.h)
        .close();
    Outline::path(b.finish())
}

fn uturn_arrow(s: &ShapeInput) -> Outline {
    let ss = s.ss();
    let a2 = s.pinned("adj2", 25000.0, 0.0, 25000.0);
    let a1 = s.pinned("adj1", 25000.0, 0.0, a2 * 2.0);
    let q2 = ratio(a1 * ss, s.h);
    let a3 = s.pinned("adj3", 25000.0, 0.0, ratio((100000.0 - q2) * s.h, ss));
    let min5 = ratio((a3 + a1) * ss, s.h);
    let a5 = s.pinned("adj5", 75000.0, min5, 100000.0);
    let th = of(ss, a1);
    let aw2 = of(ss, a2);
    let dh2 = aw2 - th / 2.0;
    let y5 = of(s.h, a5);
    let ah = of(ss, a3);
    let y4 = y5 - ah;
    let x9 = s.w - dh2;
    let bs = (x9 / 2.0).min(y4);
    let a4 = s.pinned("adj4", 43750.0, 0.0, s.max_adj(bs));
    let bd = of(ss, a4);
    let bd2 = (bd - th).max(0.0);
    let x3 = th + bd2;
    let x8 = s.w - aw2;
    let x6 = x8 - aw2;
    let x7 = x6 + dh2;
    let x4 = x9 - bd;
    let mut b = PathBuilder::new(s.placement());
    b.move_to(0.0, s.h)
        .line_to(0.0, bd)
        .arc_to(bd, bd, 180.0, 90.0)
        .line_to(x4, 0.0)
        .arc_to(bd, bd, 270.0, 90.0)
        .line_to(x9, y4)
        .line_to(s.w, y4)
        .line_to(x8, y5)
        .line_to(x6, y4)
        .line_to(x7, y4)
        .line_to(x7, x3)
        .arc_to(bd2, bd2, 0.0, -90.0)
        .line_to(x3, th)
        .arc_to(bd2, bd2, 270.0, -90.0)
        .line_to(th, s.h)
        .close();
    Outline::path(b.finish())
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RingHeads {
    End,
    Both,
}

/// Radii of the band a circular arrow runs along, offsets from the center.
#[derive(Debug, Clone, Copy)]
struct Ring {
    hc: f64,
    vc: f64,
    /// Half the head width.
    thh: f64,
    outer: (f64, f64),
    inner: (f64, f64),
    mid: (f64, f64),
}

/// One arrow head on the ring: where it leaves the outer edge, its two
/// wings, the tip and where it rejoins the inner edge.
#[derive(Debug, Clone, Copy)]
struct RingHead {
    outer: Point,
    wing_out: Point,
    tip: Point,
    wing_in: Point,
    inner: Point,
}

impl Ring {
    fn new(s: &ShapeInput) -> Self {
        let a5 = s.pinned("adj5", 12500.0, 0.0, 25000.0);
        let a1 = s.pinned("adj1", 12500.0, 0.0, a5 * 2.0);
        let th = of(s.ss(), a1);
        let thh = of(s.ss(), a5);
        let th2 = th / 2.0;
        let outer = (s.wd(2.0) + th2 - thh, s.hd(2.0) + th2 - thh);
        let inner = (outer.0 - th, outer.1 - th);
        let mid = (inner.0 + th2, inner.1 + th2);
        Self {
            hc: s.hc(),
            vc: s.vc(),
            thh,
            outer,
            inner,
            mid,
        }
    }

    fn on(&self, (rx, ry): (f64, f64), deg: f64) -> Point {
        visual_point(0.0, 0.0, rx, ry, deg)
    }

    /// Widest head, in degrees, whose tip chord from the base at `base`
    /// stays clear of the inner edge.
    fn max_head_angle(&self, base: f64) -> f64 {
        let h = self.on(self.mid, base);
        let r = self.inner.0.min(self.inner.1);
        let (u1, u2, u3) = (h.x * h.x, h.y * h.y, r * r);
        let (u4, u5) = (u1 - u3, u2 - u3);
        let u7 = ratio(ratio(u4 * u5, u1), u2);
        let u9 = (1.0 - u7).max(0.0).sqrt();
        let u11 = ratio(ratio(u4, h.x), h.y);
        let tangent = at2(1.0, ratio(1.0 + u9, u11));
        let span = positive_sweep(base, tangent);
        if span > 180.0 { (span - 360.0).abs() } else { span }
    }

    /// Head whose base sits across the band at `base` and whose tip lies
    /// on the middle line at `tip`.
    fn head(&self, base: f64, tip: f64) -> RingHead {
        let h = self.on(self.mid, base);
        let a = self.on(self.mid, tip);
        let d = pt(self.thh * tip.to_radians().cos(), self.thh * tip.to_radians().sin());
        let (g, b) = (h + d, h - d);
        let r_out = self.outer.0.min(self.outer.1);
        let r_in = self.inner.0.min(self.inner.1);
        let f = line_meets_ellipse(b, g, self.outer, r_out, g);
        let c = line_meets_ellipse(b, g, self.inner, r_in, b);
        let roomy = f.distance(c) / 2.0 > self.thh;
        let center = pt(self.hc, self.vc);
        RingHead {
            outer: center + f,
            wing_out: center + if roomy { f } else { g },
            tip: center + a,
            wing_in: center + if roomy { c } else { b },
            inner: center + c,
        }
    }
}

/// Where the line through `a` and `b` crosses the ellipse with radii `r`,
/// taking the crossing nearer `near`. The ellipse is scaled to the circle
/// of radius `rc` first and the result scaled back.
fn line_meets_ellipse(a: Point, b: Point, r: (f64, f64), rc: f64, near: Point) -> Point {
    let squash = pt(ratio(rc, r.0), ratio(rc, r.1));
    let (a, b, near) = (a * squash, b * squash, near * squash);
    let d = b - a;
    let dd = d.length_squared();
    let det = a.x * b.y - b.x * a.y;
    let del = (rc * rc * dd - det * det).max(0.0).sqrt();
    let sign = if d.y < 0.0 { -1.0 } else { 1.0 };
    let first = pt(ratio(det * d.y + sign * d.x * del, dd), ratio(-det * d.x + d.y.abs() * del, dd));
    let second = pt(ratio(det * d.y - sign * d.x * del, dd), ratio(-det * d.x - d.y.abs() * del, dd));
    let hit = if near.distance(first) < near.distance(second) { first } else { second };
    hit * pt(ratio(r.0, rc), ratio(r.1, rc))
}

/// Arrow bent along the ellipse inscribed in the box.
///
/// The band starts at `adj4` and its head is based at `adj3`; `adj2` is
/// the angle from the head base to its tip, `adj1` the band thickness and
/// `adj5` half the head width. With `dir` negative the band turns
/// counterclockwise and `adj2` is negative.
fn ring_arrow(s: &ShapeInput, heads: RingHeads, dir: f64) -> Outline {
    let ring = Ring::new(s);
    let (adj2, adj3, adj4) = match (heads, dir > 0.0) {
        (RingHeads::Both, _) => (1142319.0, 20457681.0, 11942319.0),
        (RingHeads::End, true) => (1142319.0, 20457681.0, 10800000.0),
        (RingHeads::End, false) => (-1142319.0, 1142319.0, 10800000.0),
    };
    let en = s.pinned_angle("adj3", adj3, 1.0, 21599999.0);
    let st = s.pinned_angle("adj4", adj4, 0.0, 21599999.0);
    let max = raw_angle(ring.max_head_angle(en));
    let head_angle = if dir > 0.0 {
        s.pinned_angle("adj2", adj2, 0.0, max)
    } else {
        s.pinned_angle("adj2", adj2, -max, 0.0)
    };
    // signed sweep from `from` to `to` in the direction of travel
    let travel = |from: f64, to: f64| {
        if dir > 0.0 { positive_sweep(from, to) } else { -positive_sweep(to, from) }
    };
    let center = pt(ring.hc, ring.vc);
    let angle_of = |p: Point| at2(p.x - center.x, p.y - center.y);

    let end = ring.head(en, en + head_angle);
    let start = (heads == RingHeads::Both).then(|| ring.head(st, st - head_angle));
    let (first, from) = match &start {
        Some(h) => (h.outer, angle_of(h.outer)),
        None => (center + ring.on(ring.outer, st), st),
    };
    let back_to = match &start {
        Some(h) => angle_of(h.inner),
        None => st,
    };
    let to = angle_of(end.outer);
    let inner_from = angle_of(end.inner);

    let mut b = PathBuilder::new(s.placement());
    b.move_to(first.x, first.y)
        .arc_to(ring.outer.0, ring.outer.1, from, travel(from, to));
    for p in [end.wing_out, end.tip, end.wing_in, end.inner] {
        b.line_to(p.x, p.y);
    }
    b.arc_to(ring.inner.0, ring.inner.1, inner_from, -travel(back_to, inner_from));
    if let Some(h) = start {
        for p in [h.wing_in, h.tip, h.wing_out] {
            b.line_to(p.x, p.y);
        }
    }
    b.close();
    Outline::path(b.finish())
}

/// Band curling from the near edge of the design box down to a head at
/// the far edge, pointing along +x. The part of the curl behind the band
/// is shaded darker.
///
/// Both band edges are quarter ellipses `w` wide and `hr` high; the back
/// edge is the same ellipse lowered by the band thickness.
fn curved_arrow(s: &ShapeInput, p: Placement) -> Outline {
    let d = s.design(&p);
    let (w, ss) = (d.w, d.ss());
    let a2 = d.pinned("adj2", 50000.0, 0.0, ratio(50000.0 * d.h, ss));
    let a1 = d.pinned("adj1", 25000.0, 0.0, a2);
    let th = of(ss, a1);
    let aw = of(ss, a2);
    let hr = d.hd(2.0) - (th + aw) / 4.0;
    let q7 = hr * 2.0;
    let idx = ratio((q7 * q7 - th * th).max(0.0).sqrt() * w, q7);
    let a3 = d.pinned("adj3", 25000.0, 0.0, ratio(ADJ_UNIT * idx, ss));
    let ah = of(ss, a3);
    let y3 = hr + th;
    let dy = ratio((w * w - ah * ah).max(0.0).sqrt() * hr, w);
    let (y5, y7) = (hr + dy, y3 + dy);
    let dh = (aw - th) / 2.0;
    let (y4, y8) = (y5 - dh, y7 + dh);
    let y6 = d.h - aw / 2.0;
    let x1 = w - ah;
    let sw = at2(ah, dy);
    let st = 180.0 - sw;
    let dang = at2(idx, th / 2.0);

    let front = |b: &mut PathBuilder| {
        b.move_to(0.0, hr)
            .arc_to(w, hr, 180.0, -sw)
            .lines_to(&[(x1, y4), (w, y6), (x1, y8), (x1, y7)])
            .arc_to(w, hr, st, sw);
    };
    let mut band = PathBuilder::new(p);
    front(&mut band);
    band.close();
    let mut back = PathBuilder::new(p);
    back.move_to(w, th)
        .arc_to(w, hr, 270.0, dang - 90.0)
        .arc_to(w, hr, 180.0 - dang, 90.0 + dang)
        .close();
    let mut wire = PathBuilder::new(p);
    front(&mut wire);
    wire.line_to(0.0, hr)
        .arc_to(w, hr, 180.0, 90.0)
        .line_to(w, th)
        .arc_to(w, hr, 270.0, dang - 90.0);
    Outline::new()
        .with(Contour::fill_only(band.finish(), ContourFill::Normal))
        .with(Contour::fill_only(back.finish(), ContourFill::DarkenLess))
        .with(Contour::stroke_only(wire.finish()))
}

/// Tilt of the swoosh head's back edge, degrees.
const SWOOSH_TILT: f64 = 90.0 / 14.0;

/// Tapering stroke sweeping up from the bottom left to a head at the top
/// right. `adj1` is the band height where it meets the head, `adj2` the
/// head length.
fn swoosh_arrow(s: &ShapeInput) -> Outline {
    let (w, h, ss) = (s.w, s.h, s.ss());
    let a1 = s.pinned("adj1", 25000.0, 1.0, 75000.0);
    let a2 = s.pinned("adj2", 16667.0, 0.0, ratio(70000.0 * w, ss));
    let ad1 = of(h, a1);
    let ss8 = ss / 8.0;
    let tilt = SWOOSH_TILT.to_radians().tan();
    let xb = w - of(ss, a2);
    let yb = ss8;
    let xc = xb - ss8 * tilt;
    let (xf, yf) = (xb + ad1 * tilt, yb + ad1);
    let (xe, ye) = (xf + ss8 * tilt, yf + ss8);
    let yd = ye / 2.0 + h / 20.0;
    let mut b = PathBuilder::new(s.placement());
    b.move_to(0.0, h)
        .quad_to(s.wd(6.0), s.hd(3.0), xb, yb)
        .lines_to(&[(xc, 0.0), (w, yd), (xe, ye), (xf, yf)])
        .quad_to(s.wd(4.0), yf + s.hd(12.0), 0.0, h)
        .close();
    Outline::path(b.finish())
}

fn home_plate(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 50000.0, 0.0, s.max_adj(s.w));
    let x1 = s.w - of(s.ss(), a);
    polygon_outline(
        s.placement(),
        &[(0.0, 0.0), (x1, 0.0), (s.w, s.vc()), (x1, s.h), (0.0, s.h)],
    )
}

fn chevron(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 50000.0, 0.0, s.max_adj(s.w));
    let x1 = of(s.ss(), a);
    let x2 = s.w - x1;
    polygon_outline(
        s.placement(),
        &[
            (0.0, 0.0),
            (x2, 0.0),
            (s.w, s.vc()),
            (x2, s.h),
            (0.0, s.h),
            (x1, s.vc()),
        ],
    )
}
