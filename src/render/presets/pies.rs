//! Elliptical segments: pie, chord, arc and block arc.

use crate::kind::PresetKind::{self, *};

use super::super::path_builder::PathBuilder;
use super::super::types::{Contour, ContourFill, Outline};
use super::{ShapeInput, of, positive_sweep, visual_point};
use crate::render::registry::PresetFamily;

#[derive(Debug, Clone, Copy)]
pub struct Pies;

const KINDS: &[PresetKind] = &[Pie, PieWedge, Arc, Chord, BlockArc];

/// Largest angle adjustable, just short of a full turn.
const MAX_ANGLE: f64 = 21599999.0;

impl PresetFamily for Pies {
    fn name(&self) -> &'static str {
        "pies"
    }

    fn kinds(&self) -> &'static [PresetKind] {
        KINDS
    }

    fn render(&self, s: &ShapeInput) -> Outline {
        match s.kind {
            Pie => pie(s),
            PieWedge => pie_wedge(s),
            Arc => arc(s),
            Chord => chord(s),
            BlockArc => block_arc(s),
            _ => Outline::new(),
        }
    }
}

/// Start angle and positive sweep in degrees from `adj1`/`adj2`.
fn sweep_between(s: &ShapeInput, st_default: f64, en_default: f64) -> (f64, f64) {
    let st = s.pinned("adj1", st_default, 0.0, MAX_ANGLE) / 60000.0;
    let en = s.pinned("adj2", en_default, 0.0, MAX_ANGLE) / 60000.0;
    (st, positive_sweep(st, en))
}

/// Move to the point at visual angle `st` on the inscribed ellipse and
/// trace `sw` degrees along it.
fn trace_arc(s: &ShapeInput, b: &mut PathBuilder, st: f64, sw: f64) {
    let (wd2, hd2) = (s.wd(2.0), s.hd(2.0));
    let p = visual_point(s.hc(), s.vc(), wd2, hd2, st);
    b.move_to(p.x, p.y).arc_to(wd2, hd2, st, sw);
}

fn pie(s: &ShapeInput) -> Outline {
    let (st, sw) = sweep_between(s, 0.0, 16200000.0);
    let mut b = PathBuilder::new(s.placement());
    trace_arc(s, &mut b, st, sw);
    b.line_to(s.hc(), s.vc()).close();
    Outline::path(b.finish())
}

fn chord(s: &ShapeInput) -> Outline {
    let (st, sw) = sweep_between(s, 2700000.0, 16200000.0);
    let mut b = PathBuilder::new(s.placement());
    trace_arc(s, &mut b, st, sw);
    b.close();
    Outline::path(b.finish())
}

/// Open arc: the pie segment is filled without a stroke and the curve
/// alone is stroked.
fn arc(s: &ShapeInput) -> Outline {
    let (st, sw) = sweep_between(s, 16200000.0, 0.0);
    let mut fill = PathBuilder::new(s.placement());
    trace_arc(s, &mut fill, st, sw);
    fill.line_to(s.hc(), s.vc()).close();
    let mut stroke = PathBuilder::new(s.placement());
    trace_arc(s, &mut stroke, st, sw);
    Outline::new()
        .with(Contour::fill_only(fill.finish(), ContourFill::Normal))
        .with(Contour::stroke_only(stroke.finish()))
}

/// Quarter ellipse centered on the bottom-right corner.
fn pie_wedge(s: &ShapeInput) -> Outline {
    let mut b = PathBuilder::new(s.placement());
    b.move_to(0.0, s.h).arc_to(s.w, s.h, 180.0, 90.0).line_to(s.w, s.h).close();
    Outline::path(b.finish())
}

fn block_arc(s: &ShapeInput) -> Outline {
    let st = s.pinned("adj1", 10800000.0, 0.0, MAX_ANGLE) / 60000.0;
    let ist = s.pinned("adj2", 0.0, 0.0, MAX_ANGLE) / 60000.0;
    let a3 = s.pinned("adj3", 25000.0, 0.0, 50000.0);
    let sw = positive_sweep(st, ist);
    let dr = of(s.ss(), a3);
    let (iwd2, ihd2) = (s.wd(2.0) - dr, s.hd(2.0) - dr);
    let inner = visual_point(s.hc(), s.vc(), iwd2, ihd2, ist);
    let mut b = PathBuilder::new(s.placement());
    trace_arc(s, &mut b, st, sw);
    b.line_to(inner.x, inner.y).arc_to(iwd2, ihd2, ist, -sw).close();
    Outline::path(b.finish())
}
