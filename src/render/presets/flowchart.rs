//! Flowchart symbols.
//!
//! Most symbols are fixed outlines on a small integer grid stretched over
//! the box; none of them takes adjustables.

use std::f64::consts::FRAC_1_SQRT_2;

use crate::kind::PresetKind::{self, *};

use super::super::defaults::LEGACY_SPACE;
use super::super::path_builder::PathBuilder;
use super::super::types::{Contour, ContourFill, Outline};
use super::basic::{diamond, ellipse, rect, rounded_rect};
use super::{ShapeInput, Space};
use crate::render::registry::PresetFamily;

#[derive(Debug, Clone, Copy)]
pub struct Flowchart;

const KINDS: &[PresetKind] = &[
    FlowChartProcess,
    FlowChartAlternateProcess,
    FlowChartDecision,
    FlowChartInputOutput,
    FlowChartPredefinedProcess,
    FlowChartInternalStorage,
    FlowChartDocument,
    FlowChartMultidocument,
    FlowChartTerminator,
    FlowChartPreparation,
    FlowChartManualInput,
    FlowChartManualOperation,
    FlowChartConnector,
    FlowChartOffpageConnector,
    FlowChartPunchedCard,
    FlowChartPunchedTape,
    FlowChartSummingJunction,
    FlowChartOr,
    FlowChartCollate,
    FlowChartSort,
    FlowChartExtract,
    FlowChartMerge,
    FlowChartOnlineStorage,
    FlowChartOfflineStorage,
    FlowChartMagneticTape,
    FlowChartMagneticDisk,
    FlowChartMagneticDrum,
    FlowChartDisplay,
    FlowChartDelay,
];

/// Alternate process corner radius as a fraction of the short side.
const ALTERNATE_CORNER: f64 = 1.0 / 6.0;

impl PresetFamily for Flowchart {
    fn name(&self) -> &'static str {
        "flowchart"
    }

    fn kinds(&self) -> &'static [PresetKind] {
        KINDS
    }

    fn render(&self, s: &ShapeInput) -> Outline {
        match s.kind {
            FlowChartProcess => rect(s),
            FlowChartAlternateProcess => rounded_rect(s, ALTERNATE_CORNER),
            FlowChartDecision => diamond(s),
            FlowChartConnector => ellipse(s),
            FlowChartInputOutput => grid(s, 5.0, &[(0.0, 5.0), (1.0, 0.0), (5.0, 0.0), (4.0, 5.0)]),
            FlowChartPreparation => grid(
                s,
                10.0,
                &[(0.0, 5.0), (2.0, 0.0), (8.0, 0.0), (10.0, 5.0), (8.0, 10.0), (2.0, 10.0)],
            ),
            FlowChartManualInput => grid(s, 5.0, &[(0.0, 1.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)]),
            FlowChartManualOperation => grid(s, 5.0, &[(0.0, 0.0), (5.0, 0.0), (4.0, 5.0), (1.0, 5.0)]),
            FlowChartOffpageConnector => grid(
                s,
                10.0,
                &[(0.0, 0.0), (10.0, 0.0), (10.0, 8.0), (5.0, 10.0), (0.0, 8.0)],
            ),
            FlowChartPunchedCard => grid(s, 5.0, &[(0.0, 1.0), (1.0, 0.0), (5.0, 0.0), (5.0, 5.0), (0.0, 5.0)]),
            FlowChartCollate => grid(
                s,
                2.0,
                &[(0.0, 0.0), (2.0, 0.0), (1.0, 1.0), (2.0, 2.0), (0.0, 2.0), (1.0, 1.0)],
            ),
            FlowChartExtract => grid(s, 2.0, &[(0.0, 2.0), (1.0, 0.0), (2.0, 2.0)]),
            FlowChartMerge => grid(s, 2.0, &[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]),
            FlowChartSort => sort(s),
            FlowChartOfflineStorage => offline_storage(s),
            FlowChartPredefinedProcess => predefined_process(s),
            FlowChartInternalStorage => internal_storage(s),
            FlowChartDocument => document(s),
            FlowChartMultidocument => multidocument(s),
            FlowChartTerminator => terminator(s),
            FlowChartPunchedTape => punched_tape(s),
            FlowChartSummingJunction => crossed_circle(s, true),
            FlowChartOr => crossed_circle(s, false),
            FlowChartOnlineStorage => online_storage(s),
            FlowChartMagneticTape => magnetic_tape(s),
            FlowChartMagneticDisk => magnetic_disk(s),
            FlowChartMagneticDrum => magnetic_drum(s),
            FlowChartDisplay => display(s),
            FlowChartDelay => delay(s),
            _ => Outline::new(),
        }
    }
}

/// Closed polygon on an `n` by `n` grid.
fn grid(s: &ShapeInput, n: f64, points: &[(f64, f64)]) -> Outline {
    let space = Space::new(s.w, s.h, n, n);
    let mut b = PathBuilder::new(s.placement());
    space.polygon(&mut b, points);
    Outline::path(b.finish())
}

/// Filled and stroked body plus unfilled interior lines.
fn with_lines(body: Outline, s: &ShapeInput, lines: &[[(f64, f64); 2]]) -> Outline {
    let mut b = PathBuilder::new(s.placement());
    for &[(x1, y1), (x2, y2)] in lines {
        b.move_to(x1, y1).line_to(x2, y2);
    }
    body.with(Contour::stroke_only(b.finish()))
}

fn sort(s: &ShapeInput) -> Outline {
    let body = grid(s, 2.0, &[(0.0, 1.0), (1.0, 0.0), (2.0, 1.0), (1.0, 2.0)]);
    with_lines(body, s, &[[(0.0, s.vc()), (s.w, s.vc())]])
}

fn offline_storage(s: &ShapeInput) -> Outline {
    let body = grid(s, 2.0, &[(0.0, 0.0), (2.0, 0.0), (1.0, 2.0)]);
    let y = s.h * 4.0 / 5.0;
    with_lines(body, s, &[[(s.w * 2.0 / 5.0, y), (s.w * 3.0 / 5.0, y)]])
}

fn predefined_process(s: &ShapeInput) -> Outline {
    let (x1, x2) = (s.w / 8.0, s.w * 7.0 / 8.0);
    with_lines(rect(s), s, &[[(x1, 0.0), (x1, s.h)], [(x2, 0.0), (x2, s.h)]])
}

fn internal_storage(s: &ShapeInput) -> Outline {
    let (x1, y1) = (s.w / 8.0, s.h / 8.0);
    with_lines(rect(s), s, &[[(x1, 0.0), (x1, s.h)], [(0.0, y1), (s.w, y1)]])
}

fn document(s: &ShapeInput) -> Outline {
    let space = Space::new(s.w, s.h, LEGACY_SPACE, LEGACY_SPACE);
    let mut b = PathBuilder::new(s.placement());
    space.move_to(&mut b, 0.0, 0.0);
    space.line_to(&mut b, 21600.0, 0.0);
    space.line_to(&mut b, 21600.0, 17322.0);
    space.cubic_to(&mut b, [(10800.0, 17322.0), (10800.0, 23922.0), (0.0, 20172.0)]);
    b.close();
    Outline::path(b.finish())
}

/// Three stacked pages. The fill is the union of the pages; the stroke
/// leaves out the edges hidden behind the front page.
fn multidocument(s: &ShapeInput) -> Outline {
    let space = Space::new(s.w, s.h, LEGACY_SPACE, LEGACY_SPACE);
    let back_pages = |b: &mut PathBuilder, close: bool| {
        space.move_to(b, 1532.0, 3675.0);
        space.line_to(b, 1532.0, 1815.0);
        space.line_to(b, 20000.0, 1815.0);
        space.line_to(b, 20000.0, 16252.0);
        space.cubic_to(b, [(19298.0, 16252.0), (18595.0, 16352.0), (18595.0, 16352.0)]);
        if close {
            space.line_to(b, 18595.0, 3675.0);
            b.close();
        }
        space.move_to(b, 2972.0, 1815.0);
        space.line_to(b, 2972.0, 0.0);
        space.line_to(b, 21600.0, 0.0);
        space.line_to(b, 21600.0, 14392.0);
        space.cubic_to(b, [(20800.0, 14392.0), (20000.0, 14467.0), (20000.0, 14467.0)]);
        if close {
            space.line_to(b, 20000.0, 1815.0);
            b.close();
        }
    };
    let front = |b: &mut PathBuilder| {
        space.move_to(b, 0.0, 3675.0);
        space.line_to(b, 18595.0, 3675.0);
        space.line_to(b, 18595.0, 18022.0);
        space.cubic_to(b, [(9298.0, 18022.0), (9298.0, 23542.0), (0.0, 20782.0)]);
        b.close();
    };
    let mut fill = PathBuilder::new(s.placement());
    front(&mut fill);
    back_pages(&mut fill, true);
    let mut stroke = PathBuilder::new(s.placement());
    front(&mut stroke);
    back_pages(&mut stroke, false);
    Outline::new()
        .with(Contour::fill_only(fill.finish(), ContourFill::Normal))
        .with(Contour::stroke_only(stroke.finish()))
}

fn terminator(s: &ShapeInput) -> Outline {
    let space = Space::new(s.w, s.h, LEGACY_SPACE, LEGACY_SPACE);
    let mut b = PathBuilder::new(s.placement());
    space.move_to(&mut b, 3475.0, 0.0);
    space.line_to(&mut b, 18125.0, 0.0);
    space.arc_to(&mut b, 3475.0, 10800.0, 270.0, 180.0);
    space.line_to(&mut b, 3475.0, 21600.0);
    space.arc_to(&mut b, 3475.0, 10800.0, 90.0, 180.0);
    b.close();
    Outline::path(b.finish())
}

fn punched_tape(s: &ShapeInput) -> Outline {
    let space = Space::new(s.w, s.h, 20.0, 20.0);
    let mut b = PathBuilder::new(s.placement());
    space.move_to(&mut b, 0.0, 2.0);
    space.arc_to(&mut b, 5.0, 2.0, 180.0, -180.0);
    space.arc_to(&mut b, 5.0, 2.0, 180.0, 180.0);
    space.line_to(&mut b, 20.0, 18.0);
    space.arc_to(&mut b, 5.0, 2.0, 0.0, -180.0);
    space.arc_to(&mut b, 5.0, 2.0, 0.0, 180.0);
    b.close();
    Outline::path(b.finish())
}

/// Circle crossed by its diagonals (`diagonal`) or by its axes.
fn crossed_circle(s: &ShapeInput, diagonal: bool) -> Outline {
    let (hc, vc) = (s.hc(), s.vc());
    let mut body = PathBuilder::new(s.placement());
    body.ellipse(hc, vc, hc, vc);
    let body = Outline::path(body.finish());
    if diagonal {
        let (dx, dy) = (hc * FRAC_1_SQRT_2, vc * FRAC_1_SQRT_2);
        let (il, ir, it, ib) = (hc - dx, hc + dx, vc - dy, vc + dy);
        with_lines(body, s, &[[(il, it), (ir, ib)], [(ir, it), (il, ib)]])
    } else {
        with_lines(body, s, &[[(hc, 0.0), (hc, s.h)], [(0.0, vc), (s.w, vc)]])
    }
}

fn online_storage(s: &ShapeInput) -> Outline {
    let space = Space::new(s.w, s.h, 6.0, 6.0);
    let mut b = PathBuilder::new(s.placement());
    space.move_to(&mut b, 1.0, 0.0);
    space.line_to(&mut b, 6.0, 0.0);
    space.arc_to(&mut b, 1.0, 3.0, 270.0, -180.0);
    space.line_to(&mut b, 1.0, 6.0);
    space.arc_to(&mut b, 1.0, 3.0, 90.0, 180.0);
    b.close();
    Outline::path(b.finish())
}

/// Circle whose lower right quarter runs out into a tape tail.
fn magnetic_tape(s: &ShapeInput) -> Outline {
    let (hc, vc, wd2, hd2) = (s.hc(), s.vc(), s.wd(2.0), s.hd(2.0));
    let ib = vc + hd2 * FRAC_1_SQRT_2;
    let ang1 = s.h.atan2(s.w).to_degrees();
    let mut b = PathBuilder::new(s.placement());
    b.move_to(hc, s.h)
        .arc_to(wd2, hd2, 90.0, 90.0)
        .arc_to(wd2, hd2, 180.0, 90.0)
        .arc_to(wd2, hd2, 270.0, 90.0)
        .arc_to(wd2, hd2, 0.0, ang1)
        .line_to(s.w, ib)
        .line_to(s.w, s.h)
        .close();
    Outline::path(b.finish())
}

/// Cylinder standing upright; the top rim is stroked over the body.
fn magnetic_disk(s: &ShapeInput) -> Outline {
    let space = Space::new(s.w, s.h, 6.0, 6.0);
    let mut body = PathBuilder::new(s.placement());
    space.move_to(&mut body, 0.0, 1.0);
    space.arc_to(&mut body, 3.0, 1.0, 180.0, 180.0);
    space.line_to(&mut body, 6.0, 5.0);
    space.arc_to(&mut body, 3.0, 1.0, 0.0, 180.0);
    body.close();
    let mut rim = PathBuilder::new(s.placement());
    space.move_to(&mut rim, 6.0, 1.0);
    space.arc_to(&mut rim, 3.0, 1.0, 0.0, 180.0);
    Outline::path(body.finish()).with(Contour::stroke_only(rim.finish()))
}

/// Cylinder lying on its side.
fn magnetic_drum(s: &ShapeInput) -> Outline {
    let space = Space::new(s.w, s.h, 6.0, 6.0);
    let mut body = PathBuilder::new(s.placement());
    space.move_to(&mut body, 1.0, 0.0);
    space.line_to(&mut body, 5.0, 0.0);
    space.arc_to(&mut body, 1.0, 3.0, 270.0, 180.0);
    space.line_to(&mut body, 1.0, 6.0);
    space.arc_to(&mut body, 1.0, 3.0, 90.0, 180.0);
    body.close();
    let mut rim = PathBuilder::new(s.placement());
    space.move_to(&mut rim, 5.0, 6.0);
    space.arc_to(&mut rim, 1.0, 3.0, 90.0, 180.0);
    Outline::path(body.finish()).with(Contour::stroke_only(rim.finish()))
}

fn display(s: &ShapeInput) -> Outline {
    let space = Space::new(s.w, s.h, 6.0, 6.0);
    let mut b = PathBuilder::new(s.placement());
    space.move_to(&mut b, 0.0, 3.0);
    space.line_to(&mut b, 1.0, 0.0);
    space.line_to(&mut b, 5.0, 0.0);
    space.arc_to(&mut b, 1.0, 3.0, 270.0, 180.0);
    space.line_to(&mut b, 1.0, 6.0);
    b.close();
    Outline::path(b.finish())
}

fn delay(s: &ShapeInput) -> Outline {
    let mut b = PathBuilder::new(s.placement());
    b.move_to(0.0, 0.0)
        .line_to(s.hc(), 0.0)
        .arc_to(s.wd(2.0), s.hd(2.0), 270.0, 180.0)
        .line_to(0.0, s.h)
        .close();
    Outline::path(b.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::presets::test_support::{assert_fills_box, outline};

    #[test]
    fn symbols_fill_their_box() {
        for &kind in KINDS {
            if matches!(kind, FlowChartDocument | FlowChartMultidocument | FlowChartPunchedTape) {
                continue;
            }
            assert_fills_box(outline(kind, 120.0, 80.0).bounds(), 120.0, 80.0);
        }
    }

    #[test]
    fn wavy_edges_stay_near_the_box() {
        for kind in [FlowChartDocument, FlowChartMultidocument, FlowChartPunchedTape] {
            let b = outline(kind, 120.0, 80.0).bounds();
            assert!(b.min.x.abs() < 1e-9 && (b.max.x - 120.0).abs() < 1e-9, "{kind} {b:?}");
            assert!(b.min.y > -1.0 && b.max.y < 81.0, "{kind} {b:?}");
        }
    }

    #[test]
    fn input_output_is_a_parallelogram() {
        let o = outline(FlowChartInputOutput, 100.0, 50.0);
        assert_eq!(o.contours[0].path.to_string(), "M0,50 L20,0 L100,0 L80,50 Z");
    }

    #[test]
    fn delay_is_half_a_stadium() {
        let o = outline(FlowChartDelay, 100.0, 50.0);
        assert_eq!(o.contours[0].path.to_string(), "M0,0 L50,0 A50,25 0 0,1 50,50 L0,50 Z");
    }

    #[test]
    fn interior_lines_are_not_filled() {
        let o = outline(FlowChartPredefinedProcess, 80.0, 40.0);
        assert_eq!(o.contours.len(), 2);
        assert!(!o.contours[1].fill.is_filled());
        assert_eq!(o.contours[1].path.to_string(), "M10,0 L10,40 M70,0 L70,40");
    }
}
