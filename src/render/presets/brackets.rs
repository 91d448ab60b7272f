//! Brackets and braces.
//!
//! Each bracket has a filled contour without stroke and a separate open
//! stroke, so the fill closes the shape but the drawn line stays open.

use crate::kind::PresetKind::{self, *};
use crate::types::ratio;

use super::super::geometry::{CornerMode, CornerStyle, snip_round_rect_path};
use super::super::path_builder::{PathBuilder, Placement};
use super::super::types::{Contour, ContourFill, Outline};
use super::{ShapeInput, of};
use crate::render::registry::PresetFamily;

#[derive(Debug, Clone, Copy)]
pub struct Brackets;

const KINDS: &[PresetKind] = &[LeftBracket, RightBracket, LeftBrace, RightBrace, BracketPair, BracePair];

impl PresetFamily for Brackets {
    fn name(&self) -> &'static str {
        "brackets"
    }

    fn kinds(&self) -> &'static [PresetKind] {
        KINDS
    }

    fn render(&self, s: &ShapeInput) -> Outline {
        let left = s.placement();
        match s.kind {
            LeftBracket => bracket(s, left),
            RightBracket => bracket(s, left.mirrored_x()),
            LeftBrace => brace(s, left),
            RightBrace => brace(s, left.mirrored_x()),
            BracketPair => bracket_pair(s),
            BracePair => brace_pair(s),
            _ => Outline::new(),
        }
    }
}

/// The same steps drawn twice: closed for the fill, open for the stroke.
fn fill_and_stroke(p: Placement, draw: impl Fn(&mut PathBuilder)) -> Outline {
    let mut fill = PathBuilder::new(p);
    draw(&mut fill);
    fill.close();
    let mut stroke = PathBuilder::new(p);
    draw(&mut stroke);
    Outline::new()
        .with(Contour::fill_only(fill.finish(), ContourFill::Normal))
        .with(Contour::stroke_only(stroke.finish()))
}

fn bracket(s: &ShapeInput, p: Placement) -> Outline {
    let a = s.pinned("adj", 8333.0, 0.0, s.max_adj(s.h) / 2.0);
    let y1 = of(s.ss(), a);
    let (w, h) = (s.w, s.h);
    fill_and_stroke(p, |b| {
        b.move_to(w, h).arc_to(w, y1, 90.0, 90.0).line_to(0.0, y1).arc_to(w, y1, 180.0, 90.0);
    })
}

fn brace(s: &ShapeInput, p: Placement) -> Outline {
    let a2 = s.pinned("adj2", 50000.0, 0.0, 100000.0);
    let q3 = (100000.0 - a2).min(a2) / 2.0;
    let a1 = s.pinned("adj1", 8333.0, 0.0, ratio(q3 * s.h, s.ss()));
    let y1 = of(s.ss(), a1);
    let y3 = of(s.h, a2);
    let y4 = y3 + y1;
    let (w, h, hc, wd2) = (s.w, s.h, s.hc(), s.wd(2.0));
    fill_and_stroke(p, |b| {
        b.move_to(w, h)
            .arc_to(wd2, y1, 90.0, 90.0)
            .line_to(hc, y4)
            .arc_to(wd2, y1, 0.0, -90.0)
            .arc_to(wd2, y1, 90.0, -90.0)
            .line_to(hc, y1)
            .arc_to(wd2, y1, 180.0, 90.0);
    })
}

fn bracket_pair(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 16667.0, 0.0, 50000.0);
    let x1 = of(s.ss(), a);
    let (x2, y2) = (s.w - x1, s.h - x1);
    let fill = snip_round_rect_path(s.w, s.h, a / 100000.0, 0.0, CornerStyle::Round, CornerMode::All);
    let mut stroke = PathBuilder::new(s.placement());
    stroke
        .move_to(x1, s.h)
        .arc_to(x1, x1, 90.0, 90.0)
        .line_to(0.0, x1)
        .arc_to(x1, x1, 180.0, 90.0)
        .move_to(x2, 0.0)
        .arc_to(x1, x1, 270.0, 90.0)
        .line_to(s.w, y2)
        .arc_to(x1, x1, 0.0, 90.0);
    Outline::new()
        .with(Contour::fill_only(fill, ContourFill::Normal))
        .with(Contour::stroke_only(stroke.finish()))
}

fn brace_pair(s: &ShapeInput) -> Outline {
    let a = s.pinned("adj", 8333.0, 0.0, 25000.0);
    let ss = s.ss();
    let x1 = of(ss, a);
    let x2 = ss * a / 50000.0;
    let (x3, x4) = (s.w - x2, s.w - x1);
    let (vc, h) = (s.vc(), s.h);
    let (y2, y3, y4) = (vc - x1, vc + x1, h - x1);
    let left = |b: &mut PathBuilder| {
        b.move_to(x2, h)
            .arc_to(x1, x1, 90.0, 90.0)
            .line_to(x1, y3)
            .arc_to(x1, x1, 0.0, -90.0)
            .arc_to(x1, x1, 90.0, -90.0)
            .line_to(x1, x1)
            .arc_to(x1, x1, 180.0, 90.0);
    };
    let right = |b: &mut PathBuilder, connect: bool| {
        if connect {
            b.line_to(x3, 0.0);
        } else {
            b.move_to(x3, 0.0);
        }
        b.arc_to(x1, x1, 270.0, 90.0)
            .line_to(x4, y2)
            .arc_to(x1, x1, 180.0, -90.0)
            .arc_to(x1, x1, 270.0, -90.0)
            .line_to(x4, y4)
            .arc_to(x1, x1, 0.0, 90.0);
    };
    let mut fill = PathBuilder::new(s.placement());
    left(&mut fill);
    right(&mut fill, true);
    fill.close();
    let mut stroke = PathBuilder::new(s.placement());
    left(&mut stroke);
    right(&mut stroke, false);
    Outline::new()
        .with(Contour::fill_only(fill.finish(), ContourFill::Normal))
        .with(Contour::stroke_only(stroke.finish()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::presets::test_support::{assert_fills_box, outline};

    #[test]
    fn bracket_stroke_is_open() {
        let o = outline(LeftBracket, 20.0, 100.0);
        assert_eq!(o.contours.len(), 2);
        assert!(!o.contours[0].stroke);
        assert!(o.contours[1].stroke);
        assert!(o.contours[1].path.has_open_subpath());
        assert!(!o.contours[0].path.has_open_subpath());
        assert!(o.has_open_stroke());
    }

    #[test]
    fn left_bracket_path() {
        let o = outline(LeftBracket, 20.0, 100.0);
        // adj 8333 of the 20 unit short side
        assert_eq!(
            o.contours[1].path.to_string(),
            "M20,100 A20,1.667 0 0,1 0,98.333 L0,1.667 A20,1.667 0 0,1 20,0"
        );
    }

    #[test]
    fn brackets_fill_their_box() {
        for kind in [LeftBracket, RightBracket, LeftBrace, RightBrace, BracketPair, BracePair] {
            assert_fills_box(outline(kind, 60.0, 120.0).bounds(), 60.0, 120.0);
        }
    }

    #[test]
    fn right_brace_mirrors_left() {
        assert_fills_box(outline(RightBrace, 30.0, 90.0).bounds(), 30.0, 90.0);
        let path = outline(RightBrace, 30.0, 90.0).contours[1].path.to_string();
        assert!(path.starts_with("M0,90"), "{path}");
    }
}
