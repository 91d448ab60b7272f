//! Rectangles, corner variants, polygons and other plain outlines.

use crate::kind::PresetKind::{self, *};
use crate::types::ratio;

use super::super::defaults::ADJ_UNIT;
use super::super::geometry::{CornerCut, CornerMode, CornerStyle, corner_rect_path, snip_round_rect_path};
use super::super::path_builder::PathBuilder;
use super::super::types::{Outline, Primitive};
use super::{ShapeInput, of, polygon_outline};
use crate::render::registry::PresetFamily;

#[derive(Debug, Clone, Copy)]
pub struct Basic;

const KINDS: &[PresetKind] = &[
    Rect,
    RoundRect,
    Round1Rect,
    Round2SameRect,
    Round2DiagRect,
    SnipRoundRect,
    Snip1Rect,
    Snip2SameRect,
    Snip2DiagRect,
    Ellipse,
    Triangle,
    RtTriangle,
    Diamond,
    Parallelogram,
    Trapezoid,
    NonIsoscelesTrapezoid,
    Pentagon,
    Hexagon,
    Heptagon,
    Octagon,
    Decagon,
    Dodecagon,
    Plaque,
    Plus,
    Frame,
    HalfFrame,
    Corner,
    DiagStripe,
];

impl PresetFamily for Basic {
    fn name(&self) -> &'static str {
        "basic"
    }

    fn kinds(&self) -> &'static [PresetKind] {
        KINDS
    }

    fn render(&self, s: &ShapeInput) -> Outline {
        match s.kind {
            Rect => rect(s),
            RoundRect => corners(s, CornerStyle::Round, CornerMode::All, 16667.0, 0.0),
            Round1Rect => corners(s, CornerStyle::Round, CornerMode::One, 16667.0, 0.0),
            Round2SameRect => corners(s, CornerStyle::Round, CornerMode::TwoSame, 16667.0, 0.0),
            Round2DiagRect => corners(s, CornerStyle::Round, CornerMode::TwoDiagonal, 16667.0, 0.0),
            Snip1Rect => corners(s, CornerStyle::Snip, CornerMode::One, 16667.0, 0.0),
            Snip2SameRect => corners(s, CornerStyle::Snip, CornerMode::TwoSame, 16667.0, 0.0),
            Snip2DiagRect => corners(s, CornerStyle::Snip, CornerMode::TwoDiagonal, 0.0, 16667.0),
            SnipRoundRect => snip_round(s),
            Ellipse => ellipse(s),
            Triangle => triangle(s),
            RtTriangle => polygon_outline(s.placement(), &[(0.0, 0.0), (0.0, s.h), (s.w, s.h)]),
            Diamond => diamond(s),
            Parallelogram => parallelogram(s),
            Trapezoid => trapezoid(s),
            NonIsoscelesTrapezoid => non_isosceles_trapezoid(s),
            Pentagon => pentagon(s),
            Hexagon => hexagon(s),
            Heptagon => heptagon(s),
            Octagon => octagon(s),
            Decagon => decagon(s),
            Dodecagon => dodecagon(s),
            Plaque => plaque(s),
            Plus => plus(s),
            Frame => frame(s),
            HalfFrame => half_frame(s),
            Corner => corner(s),
            DiagStripe => diag_stripe(s),
            _ => Outline::new(),
        }
    }
}

pub fn rect(s: &ShapeInput) -> Outline {
    polygon_outline(s.placement(), &[(0.0, 0.0), (s.w, 0.0), (s.w, s.h), (0.0, s.h)])
}

pub fn ellipse(s: &ShapeInput) -> Outline {
    Outline::primitive(Primitive::Ellipse {
        cx: s.hc(),
        cy: s.vc(),
        rx: s.hc(),
        ry: s.vc(),
    })
}

pub fn diamond(s: &ShapeInput) -> Outline {
    polygon_outline(
        s.placement(),
        &[(0.0, s.vc()), (s.hc(), 0.0), (s.w, s.vc()), (s.hc(), s.h)],
    )
}

pub fn triangle(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 50000.0, 0.0, ADJ_UNIT);
    let x1 = of(s.w, a);
    polygon_outline(s.placement(), &[(x1, 0.0), (s.w, s.h), (0.0, s.h)])
}

/// Rectangle with rounded or snipped corners; `alt` is the default of the
/// second adjustable where the mode has one.
fn corners(s: &ShapeInput, style: CornerStyle, mode: CornerMode, first: f64, alt: f64) -> Outline {
    let single = matches!(mode, CornerMode::All | CornerMode::One);
    let a1 = s.pinned(if single { "adj" } else { "adj1" }, first, 0.0, 50000.0);
    let a2 = s.pinned("adj2", alt, 0.0, 50000.0);
    Outline::path(snip_round_rect_path(s.w, s.h, a1 / ADJ_UNIT, a2 / ADJ_UNIT, style, mode))
}

/// Rectangle with every corner rounded by `fraction` of the short side.
pub fn rounded_rect(s: &ShapeInput, fraction: f64) -> Outline {
    Outline::path(snip_round_rect_path(s.w, s.h, fraction, 0.0, CornerStyle::Round, CornerMode::All))
}

fn snip_round(s: &ShapeInput) -> Outline {
    let a1 = s.pinned("adj1", 16667.0, 0.0, 50000.0);
    let a2 = s.pinned("adj2", 16667.0, 0.0, 50000.0);
    let none = CornerCut::default();
    Outline::path(corner_rect_path(
        s.w,
        s.h,
        [CornerCut::round(of(s.ss(), a1)), CornerCut::snip(of(s.ss(), a2)), none, none],
    ))
}

fn parallelogram(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 25000.0, 0.0, s.max_adj(s.w));
    let x2 = of(s.ss(), a);
    polygon_outline(s.placement(), &[(0.0, s.h), (x2, 0.0), (s.w, 0.0), (s.w - x2, s.h)])
}

fn trapezoid(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 25000.0, 0.0, s.max_adj(s.w) / 2.0);
    let x2 = of(s.ss(), a);
    polygon_outline(s.placement(), &[(0.0, s.h), (x2, 0.0), (s.w - x2, 0.0), (s.w, s.h)])
}

fn non_isosceles_trapezoid(s: &ShapeInput) -> Outline {
    let max = s.max_adj(s.w) / 2.0;
    let a1 = s.pinned("adj1", 25000.0, 0.0, max);
    let a2 = s.pinned("adj2", 25000.0, 0.0, max);
    let x2 = of(s.ss(), a1);
    let x3 = s.w - of(s.ss(), a2);
    polygon_outline(s.placement(), &[(0.0, s.h), (x2, 0.0), (x3, 0.0), (s.w, s.h)])
}

/// Points of a regular polygon or star inscribed so that its extreme
/// vertices touch the box: vertex `k` sits at visual angle
/// `-90 + k * 360 / n` around `(cx, cy)` on the ellipse `(rx, ry)`.
pub fn ring_points(cx: f64, cy: f64, rx: f64, ry: f64, n: usize, offset_deg: f64) -> Vec<(f64, f64)> {
    (0..n)
        .map(|k| {
            let a = (-90.0 + offset_deg + k as f64 * 360.0 / n as f64).to_radians();
            (cx + rx * a.cos(), cy + ry * a.sin())
        })
        .collect()
}

fn pentagon(s: &ShapeInput) -> Outline {
    let hf = s.adj("hf", 105146.0);
    let vf = s.adj("vf", 110557.0);
    let swd2 = of(s.wd(2.0), hf);
    let shd2 = of(s.hd(2.0), vf);
    let svc = of(s.vc(), vf);
    polygon_outline(s.placement(), &ring_points(s.hc(), svc, swd2, shd2, 5, 0.0))
}

fn hexagon(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 25000.0, 0.0, s.max_adj(s.w) / 2.0);
    let vf = s.adj("vf", 115470.0);
    let shd2 = of(s.hd(2.0), vf);
    let x1 = of(s.ss(), a);
    let x2 = s.w - x1;
    let dy1 = shd2 * 60f64.to_radians().sin();
    let (y1, y2) = (s.vc() - dy1, s.vc() + dy1);
    polygon_outline(
        s.placement(),
        &[(0.0, s.vc()), (x1, y1), (x2, y1), (s.w, s.vc()), (x2, y2), (x1, y2)],
    )
}

fn heptagon(s: &ShapeInput) -> Outline {
    let hf = s.adj("hf", 102572.0);
    let vf = s.adj("vf", 105210.0);
    let swd2 = of(s.wd(2.0), hf);
    let shd2 = of(s.hd(2.0), vf);
    let svc = of(s.vc(), vf);
    let (dx1, dx2, dx3) = (of(swd2, 97493.0), of(swd2, 78183.0), of(swd2, 43388.0));
    let (dy1, dy2, dy3) = (of(shd2, 62349.0), of(shd2, 22252.0), of(shd2, 90097.0));
    let hc = s.hc();
    let (y1, y2, y3) = (svc - dy1, svc + dy2, svc + dy3);
    polygon_outline(
        s.placement(),
        &[
            (hc - dx1, y2),
            (hc - dx2, y1),
            (hc, 0.0),
            (hc + dx2, y1),
            (hc + dx1, y2),
            (hc + dx3, y3),
            (hc - dx3, y3),
        ],
    )
}

fn octagon(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 29289.0, 0.0, 50000.0);
    let x1 = of(s.ss(), a);
    let (x2, y2) = (s.w - x1, s.h - x1);
    polygon_outline(
        s.placement(),
        &[
            (0.0, x1),
            (x1, 0.0),
            (x2, 0.0),
            (s.w, x1),
            (s.w, y2),
            (x2, s.h),
            (x1, s.h),
            (0.0, y2),
        ],
    )
}

fn decagon(s: &ShapeInput) -> Outline {
    let vf = s.adj("vf", 105146.0);
    let shd2 = of(s.hd(2.0), vf);
    let mut points = ring_points(s.hc(), s.vc(), s.wd(2.0), shd2, 10, 90.0);
    // the first vertex is the left one at 180 degrees
    points.rotate_left(5);
    polygon_outline(s.placement(), &points)
}

fn dodecagon(s: &ShapeInput) -> Outline {
    let fx = |v: f64| s.w * v / 21600.0;
    let fy = |v: f64| s.h * v / 21600.0;
    let (x1, x2, x3, x4) = (fx(2894.0), fx(7906.0), fx(13694.0), fx(18706.0));
    let (y1, y2, y3, y4) = (fy(2894.0), fy(7906.0), fy(13694.0), fy(18706.0));
    polygon_outline(
        s.placement(),
        &[
            (0.0, y2),
            (x1, y1),
            (x2, 0.0),
            (x3, 0.0),
            (x4, y1),
            (s.w, y2),
            (s.w, y3),
            (x4, y4),
            (x3, s.h),
            (x2, s.h),
            (x1, y4),
            (0.0, y3),
        ],
    )
}

fn plaque(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 16667.0, 0.0, 50000.0);
    let x1 = of(s.ss(), a);
    let (x2, y2) = (s.w - x1, s.h - x1);
    let mut b = PathBuilder::new(s.placement());
    b.move_to(0.0, x1)
        .arc_to(x1, x1, 90.0, -90.0)
        .line_to(x2, 0.0)
        .arc_to(x1, x1, 180.0, -90.0)
        .line_to(s.w, y2)
        .arc_to(x1, x1, 270.0, -90.0)
        .line_to(x1, s.h)
        .arc_to(x1, x1, 0.0, -90.0)
        .close();
    Outline::path(b.finish())
}

fn plus(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 25000.0, 0.0, 50000.0);
    let x1 = of(s.ss(), a);
    let (x2, y2) = (s.w - x1, s.h - x1);
    polygon_outline(
        s.placement(),
        &[
            (0.0, x1),
            (x1, x1),
            (x1, 0.0),
            (x2, 0.0),
            (x2, x1),
            (s.w, x1),
            (s.w, y2),
            (x2, y2),
            (x2, s.h),
            (x1, s.h),
            (x1, y2),
            (0.0, y2),
        ],
    )
}

fn frame(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj1", 12500.0, 0.0, 50000.0);
    let x1 = of(s.ss(), a);
    let (x4, y4) = (s.w - x1, s.h - x1);
    let mut b = PathBuilder::new(s.placement());
    b.polyline(&[(0.0, 0.0), (s.w, 0.0), (s.w, s.h), (0.0, s.h)], true);
    // inner edge runs the other way so the hole stays open
    b.polyline(&[(x1, x1), (x1, y4), (x4, y4), (x4, x1)], true);
    Outline::path(b.finish())
}

fn half_frame(s: &ShapeInput) -> Outline {
    let a2 = s.pinned("adj2", 33333.0, 0.0, s.max_adj(s.w));
    let x1 = of(s.ss(), a2);
    let g1 = ratio(s.h * x1, s.w);
    let a1 = s.pinned("adj1", 33333.0, 0.0, s.max_adj(s.h - g1));
    let y1 = of(s.ss(), a1);
    let x2 = s.w - ratio(y1 * s.w, s.h);
    let y2 = s.h - ratio(x1 * s.h, s.w);
    polygon_outline(
        s.placement(),
        &[(0.0, 0.0), (s.w, 0.0), (x2, y1), (x1, y1), (x1, y2), (0.0, s.h)],
    )
}

fn corner(s: &ShapeInput) -> Outline {
    let a1 = s.pinned("adj1", 50000.0, 0.0, s.max_adj(s.h));
    let a2 = s.pinned("adj2", 50000.0, 0.0, s.max_adj(s.w));
    let x1 = of(s.ss(), a2);
    let y1 = s.h - of(s.ss(), a1);
    polygon_outline(
        s.placement(),
        &[(0.0, 0.0), (x1, 0.0), (x1, y1), (s.w, y1), (s.w, s.h), (0.0, s.h)],
    )
}

fn diag_stripe(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 50000.0, 0.0, ADJ_UNIT);
    let x2 = of(s.w, a);
    let y2 = of(s.h, a);
    polygon_outline(s.placement(), &[(0.0, y2), (x2, 0.0), (s.w, 0.0), (0.0, s.h)])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust::Adjustables;
    use crate::render::presets::test_support::{assert_fills_box, outline, outline_with};

    #[test]
    fn rect_is_the_box() {
        let o = outline(Rect, 100.0, 80.0);
        assert_eq!(o.contours[0].path.to_string(), "M0,0 L100,0 L100,80 L0,80 Z");
    }

    #[test]
    fn polygons_touch_every_edge() {
        for kind in [
            Triangle, Diamond, Parallelogram, Trapezoid, Pentagon, Hexagon, Heptagon, Octagon, Decagon, Dodecagon,
            Plus, Frame, Plaque, RoundRect, Snip2DiagRect, Ellipse,
        ] {
            let o = outline(kind, 120.0, 90.0);
            assert_fills_box(o.bounds(), 120.0, 90.0);
        }
    }

    #[test]
    fn triangle_apex_follows_adjustment() {
        let adjust = Adjustables::new().with_val("adj", 25000).resolve().0;
        let o = outline_with(Triangle, 100.0, 50.0, &adjust);
        assert_eq!(o.contours[0].path.to_string(), "M25,0 L100,50 L0,50 Z");
    }

    #[test]
    fn out_of_range_adjustment_matches_bound() {
        let over = Adjustables::new().with_val("adj", 90000).resolve().0;
        let at = Adjustables::new().with_val("adj", 50000).resolve().0;
        assert_eq!(outline_with(Octagon, 100.0, 60.0, &over), outline_with(Octagon, 100.0, 60.0, &at));
        let under = Adjustables::new().with_val("adj", -5).resolve().0;
        let zero = Adjustables::new().with_val("adj", 0).resolve().0;
        assert_eq!(outline_with(Plaque, 100.0, 60.0, &under), outline_with(Plaque, 100.0, 60.0, &zero));
    }

    #[test]
    fn diamond_vertices() {
        let o = outline(Diamond, 40.0, 20.0);
        assert_eq!(o.contours[0].path.to_string(), "M0,10 L20,0 L40,10 L20,20 Z");
    }

    #[test]
    fn corner_is_an_l() {
        let o = outline(Corner, 100.0, 100.0);
        assert_eq!(o.contours[0].path.to_string(), "M0,0 L50,0 L50,50 L100,50 L100,100 L0,100 Z");
    }
}
