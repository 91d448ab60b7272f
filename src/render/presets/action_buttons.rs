//! Action buttons: a plain rectangle with an icon in a centered square
//! three quarters of the short side across.
//!
//! The rectangle is filled without a stroke, each icon part is shaded,
//! and a final unfilled contour strokes the rectangle and the icon
//! together.

use crate::kind::PresetKind::{self, *};

use super::super::defaults::LEGACY_SPACE;
use super::super::path_builder::{PathBuilder, Placement};
use super::super::path_data::PathData;
use super::super::types::{Contour, ContourFill, Outline};
use super::{ShapeInput, polygon};
use crate::render::registry::PresetFamily;

#[derive(Debug, Clone, Copy)]
pub struct ActionButtons;

const KINDS: &[PresetKind] = &[
    ActionButtonBlank,
    ActionButtonHome,
    ActionButtonHelp,
    ActionButtonInformation,
    ActionButtonForwardNext,
    ActionButtonBackPrevious,
    ActionButtonEnd,
    ActionButtonBeginning,
    ActionButtonReturn,
    ActionButtonDocument,
    ActionButtonSound,
    ActionButtonMovie,
];

impl PresetFamily for ActionButtons {
    fn name(&self) -> &'static str {
        "action_buttons"
    }

    fn kinds(&self) -> &'static [PresetKind] {
        KINDS
    }

    fn render(&self, s: &ShapeInput) -> Outline {
        let icon = IconBox::new(s);
        let parts = match s.kind {
            ActionButtonBlank => Vec::new(),
            ActionButtonForwardNext => vec![dark(icon.polygon(&[(1.0, 0.5), (0.0, 0.0), (0.0, 1.0)]))],
            ActionButtonBackPrevious => vec![dark(icon.polygon(&[(0.0, 0.5), (1.0, 0.0), (1.0, 1.0)]))],
            ActionButtonEnd => vec![dark(icon.skip(false))],
            ActionButtonBeginning => vec![dark(icon.skip(true))],
            ActionButtonHome => icon.house(),
            ActionButtonHelp => vec![dark(icon.question_mark())],
            ActionButtonInformation => icon.information(),
            ActionButtonReturn => vec![dark(icon.return_arrow())],
            ActionButtonDocument => icon.document(),
            ActionButtonSound => {
                return button(s, vec![dark(icon.speaker())], Some(icon.sound_waves()));
            }
            ActionButtonMovie => vec![dark(icon.camera())],
            _ => return Outline::new(),
        };
        button(s, parts, None)
    }
}

fn dark(path: PathData) -> (PathData, ContourFill) {
    (path, ContourFill::Darken)
}

/// Rectangle, shaded icon parts, then one stroke over all of them plus
/// any stroke-only icon lines.
fn button(s: &ShapeInput, parts: Vec<(PathData, ContourFill)>, lines: Option<PathData>) -> Outline {
    let frame = polygon(s.placement(), &[(0.0, 0.0), (s.w, 0.0), (s.w, s.h), (0.0, s.h)]);
    let mut stroke = frame.clone();
    let mut outline = Outline::new().with(Contour::fill_only(frame, ContourFill::Normal));
    for (path, fill) in parts {
        stroke.extend(path.clone());
        outline = outline.with(Contour::fill_only(path, fill));
    }
    if let Some(lines) = lines {
        stroke.extend(lines);
    }
    outline.with(Contour::stroke_only(stroke))
}

/// The icon square, addressed in fractions of its side.
struct IconBox {
    x0: f64,
    y0: f64,
    side: f64,
    placement: Placement,
}

impl IconBox {
    fn new(s: &ShapeInput) -> Self {
        let dx2 = s.ss() * 3.0 / 8.0;
        Self {
            x0: s.hc() - dx2,
            y0: s.vc() - dx2,
            side: 2.0 * dx2,
            placement: s.placement(),
        }
    }

    fn at(&self, fx: f64, fy: f64) -> (f64, f64) {
        (self.x0 + fx * self.side, self.y0 + fy * self.side)
    }

    fn builder(&self) -> PathBuilder {
        PathBuilder::new(self.placement)
    }

    fn polygon(&self, points: &[(f64, f64)]) -> PathData {
        let mapped: Vec<_> = points.iter().map(|&(fx, fy)| self.at(fx, fy)).collect();
        polygon(self.placement, &mapped)
    }

    /// Triangle and bar; the bar sits on the left for `beginning`.
    fn skip(&self, beginning: bool) -> PathData {
        let (bar, tri): (&[(f64, f64)], &[(f64, f64)]) = if beginning {
            (
                &[(0.0, 0.0), (0.125, 0.0), (0.125, 1.0), (0.0, 1.0)],
                &[(0.25, 0.5), (1.0, 0.0), (1.0, 1.0)],
            )
        } else {
            (
                &[(0.875, 0.0), (1.0, 0.0), (1.0, 1.0), (0.875, 1.0)],
                &[(0.75, 0.5), (0.0, 1.0), (0.0, 0.0)],
            )
        };
        self.polygon(tri).then(self.polygon(bar))
    }

    /// House with a chimney. The roof and door stay lighter than the
    /// walls and chimney.
    fn house(&self) -> Vec<(PathData, ContourFill)> {
        let sixteenths = |x: f64, y: f64| (x / 16.0, y / 16.0);
        let outline = self.polygon(&[
            (0.5, 0.0),
            (0.0, 0.5),
            (0.125, 0.5),
            (0.125, 1.0),
            (0.875, 1.0),
            (0.875, 0.5),
            (1.0, 0.5),
            sixteenths(13.0, 5.0),
            sixteenths(13.0, 1.0),
            sixteenths(11.0, 1.0),
            sixteenths(11.0, 3.0),
        ]);
        let chimney = self.polygon(&[
            sixteenths(13.0, 5.0),
            sixteenths(13.0, 1.0),
            sixteenths(11.0, 1.0),
            sixteenths(11.0, 3.0),
        ]);
        let walls = self.polygon(&[
            (0.125, 0.5),
            (0.125, 1.0),
            sixteenths(7.0, 16.0),
            sixteenths(7.0, 12.0),
            sixteenths(9.0, 12.0),
            sixteenths(9.0, 16.0),
            (0.875, 1.0),
            (0.875, 0.5),
        ]);
        vec![(outline, ContourFill::DarkenLess), (chimney.then(walls), ContourFill::Darken)]
    }

    /// Hook of a question mark with its stem, then the dot. Widths are in
    /// sevenths and fourteenths of the icon.
    fn question_mark(&self) -> PathData {
        let u = self.side;
        let (r_out, r_in) = (u * 2.0 / 7.0, u / 7.0);
        let (bend_w, bend_h) = (u / 7.0, u * 3.0 / 14.0);
        let (knee_w, knee_h) = (u / 14.0, u * 3.0 / 28.0);
        let (left, top) = self.at(3.0 / 14.0, 2.0 / 7.0);
        let (stem_r, stem_b) = self.at(4.0 / 7.0, 0.75);
        let (stem_l, stem_t) = self.at(3.0 / 7.0, 17.0 / 28.0);
        let (dot_x, dot_y) = self.at(0.5, 11.0 / 14.0);
        let mut b = self.builder();
        b.move_to(left, top)
            .arc_to(r_out, r_out, 180.0, 180.0)
            .arc_to(bend_w, bend_h, 0.0, 90.0)
            .arc_to(knee_w, knee_h, 270.0, -90.0)
            .lines_to(&[(stem_r, stem_b), (stem_l, stem_b), (stem_l, stem_t)])
            .arc_to(bend_w, bend_h, 180.0, 90.0)
            .arc_to(knee_w, knee_h, 90.0, -90.0)
            .arc_to(r_in, r_in, 0.0, -180.0)
            .close()
            .move_to(dot_x, dot_y)
            .arc_to(knee_h, knee_h, 270.0, 360.0)
            .close();
        b.finish()
    }

    /// Disc with a lightened letter i.
    fn information(&self) -> Vec<(PathData, ContourFill)> {
        let half = self.side / 2.0;
        let (cx, cy) = self.at(0.5, 0.5);
        let mut disc = self.builder();
        disc.ellipse(cx, cy, half, half);
        let r = self.side * 3.0 / 32.0;
        let (dx, dy) = self.at(0.5, 1.0 / 32.0);
        let mut letter = self.builder();
        letter.move_to(dx, dy).arc_to(r, r, 270.0, 360.0).close();
        let th = |n: f64| n / 32.0;
        let letter = letter.finish().then(self.polygon(&[
            (th(10.0), th(10.0)),
            (th(19.0), th(10.0)),
            (th(19.0), th(26.0)),
            (th(22.0), th(26.0)),
            (th(22.0), th(28.0)),
            (th(10.0), th(28.0)),
            (th(10.0), th(26.0)),
            (th(13.0), th(26.0)),
            (th(13.0), th(12.0)),
            (th(10.0), th(12.0)),
        ]));
        vec![(disc.finish(), ContourFill::Darken), (letter, ContourFill::Lighten)]
    }

    /// Arrow rising on the right from a U-turn that starts on the left.
    fn return_arrow(&self) -> PathData {
        let e = |n: f64| n / 8.0;
        let (small, big) = (self.side / 8.0, self.side * 3.0 / 8.0);
        let p = |x: f64, y: f64| self.at(x, y);
        let mut b = self.builder();
        let start = p(1.0, e(2.0));
        b.move_to(start.0, start.1)
            .lines_to(&[p(0.75, 0.0), p(0.5, e(2.0)), p(e(5.0), e(2.0)), p(e(5.0), e(5.0))])
            .arc_to(small, small, 0.0, 90.0)
            .lines_to(&[p(e(3.0), e(6.0))])
            .arc_to(small, small, 90.0, 90.0)
            .lines_to(&[p(e(2.0), e(2.0)), p(0.0, e(2.0)), p(0.0, e(5.0))])
            .arc_to(big, big, 180.0, -90.0)
            .lines_to(&[p(0.5, 1.0)])
            .arc_to(big, big, 90.0, -90.0)
            .lines_to(&[p(e(7.0), e(2.0))])
            .close();
        b.finish()
    }

    /// Page with a dog-eared corner, the fold darker than the page.
    fn document(&self) -> Vec<(PathData, ContourFill)> {
        // page spans 3/4 of the icon width
        let (l, r, fold) = (0.125, 0.875, 0.25);
        let page = self.polygon(&[(l, 0.0), (r - fold, 0.0), (r, fold), (r, 1.0), (l, 1.0)]);
        let ear = self.polygon(&[(r - fold, 0.0), (r - fold, fold), (r, fold)]);
        vec![(page, ContourFill::DarkenLess), (ear, ContourFill::Darken)]
    }

    fn speaker(&self) -> PathData {
        let s = |n: f64| n / 16.0;
        self.polygon(&[
            (0.0, s(5.0)),
            (s(5.0), s(5.0)),
            (s(10.0), 0.0),
            (s(10.0), 1.0),
            (s(5.0), s(11.0)),
            (0.0, s(11.0)),
        ])
    }

    fn sound_waves(&self) -> PathData {
        let mut b = self.builder();
        for (from, to) in [(5.0 / 16.0, 0.125), (0.5, 0.5), (11.0 / 16.0, 0.875)] {
            let (x0, y0) = self.at(0.75, from);
            let (x1, y1) = self.at(1.0, to);
            b.move_to(x0, y0).line_to(x1, y1);
        }
        b.finish()
    }

    /// Film camera side on: reel stub, body and lens hood, in 21600ths.
    fn camera(&self) -> PathData {
        let points: Vec<(f64, f64)> = MOVIE_CAMERA
            .iter()
            .map(|&(x, y)| (x / LEGACY_SPACE, y / LEGACY_SPACE))
            .collect();
        self.polygon(&points)
    }
}

const MOVIE_CAMERA: &[(f64, f64)] = &[
    (0.0, 5280.0),
    (0.0, 9555.0),
    (1455.0, 9555.0),
    (1905.0, 9067.0),
    (2325.0, 9067.0),
    (2325.0, 15592.0),
    (17010.0, 15592.0),
    (17010.0, 13342.0),
    (19335.0, 13342.0),
    (20595.0, 14580.0),
    (21600.0, 14580.0),
    (21600.0, 6630.0),
    (20595.0, 6630.0),
    (19725.0, 7492.0),
    (17010.0, 7492.0),
    (17010.0, 6630.0),
    (16155.0, 5730.0),
    (1905.0, 5730.0),
    (1455.0, 5280.0),
];

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::presets::test_support::{assert_fills_box, outline};

    #[test]
    fn back_button_layers() {
        let o = outline(ActionButtonBackPrevious, 100.0, 80.0);
        assert_eq!(o.contours.len(), 3);
        assert_eq!(o.contours[0].path.to_string(), "M0,0 L100,0 L100,80 L0,80 Z");
        assert!(!o.contours[0].stroke);
        assert_eq!(o.contours[1].path.to_string(), "M20,40 L80,10 L80,70 Z");
        assert_eq!(o.contours[1].fill, ContourFill::Darken);
        assert_eq!(
            o.contours[2].path.to_string(),
            "M0,0 L100,0 L100,80 L0,80 Z M20,40 L80,10 L80,70 Z"
        );
        assert_eq!(o.contours[2].fill, ContourFill::None);
    }

    #[test]
    fn icons_stay_inside_the_button() {
        for &kind in KINDS {
            let o = outline(kind, 120.0, 90.0);
            assert_fills_box(o.bounds(), 120.0, 90.0);
            assert!(o.contours.last().is_some_and(|c| c.stroke), "{kind}");
        }
    }

    #[test]
    fn question_mark_spans_the_icon_height() {
        let o = outline(ActionButtonHelp, 100.0, 100.0);
        let b = o.contours[1].path.bounds();
        assert!((b.min.y - 12.5).abs() < 1e-6, "{b:?}");
        assert!((b.max.y - 87.5).abs() < 1e-6, "{b:?}");
        assert!((b.min.x - (12.5 + 75.0 * 3.0 / 14.0)).abs() < 1e-6, "{b:?}");
        assert!((b.max.x - (12.5 + 75.0 * 11.0 / 14.0)).abs() < 1e-6, "{b:?}");
    }

    #[test]
    fn house_walls_are_darker_than_the_roof() {
        let o = outline(ActionButtonHome, 100.0, 100.0);
        let fills: Vec<_> = o.contours.iter().map(|c| c.fill).collect();
        assert_eq!(
            fills,
            [ContourFill::Normal, ContourFill::DarkenLess, ContourFill::Darken, ContourFill::None]
        );
        assert!(o.contours[1].path.to_string().starts_with("M50,12.5 L12.5,50"));
    }

    #[test]
    fn information_letter_is_lightened() {
        let o = outline(ActionButtonInformation, 100.0, 100.0);
        assert_eq!(o.contours[2].fill, ContourFill::Lighten);
        assert!(o.contours[2].path.to_string().starts_with("M50,14.844 A7.031,7.031"));
    }

    #[test]
    fn sound_lines_are_stroked_only() {
        let o = outline(ActionButtonSound, 80.0, 80.0);
        assert_eq!(o.contours.len(), 3);
        assert!(o.contours[2].path.has_open_subpath());
    }
}
