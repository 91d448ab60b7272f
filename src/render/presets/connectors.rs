//! Lines and connectors. Every outline here is a single open stroke, so
//! line-end markers attach to its two ends.

use crate::kind::PresetKind::{self, *};

use super::super::path_builder::PathBuilder;
use super::super::types::{Contour, Outline};
use super::{ShapeInput, of};
use crate::render::registry::PresetFamily;

#[derive(Debug, Clone, Copy)]
pub struct Connectors;

const KINDS: &[PresetKind] = &[
    Line,
    LineInv,
    StraightConnector1,
    BentConnector2,
    BentConnector3,
    BentConnector4,
    BentConnector5,
    CurvedConnector2,
    CurvedConnector3,
    CurvedConnector4,
    CurvedConnector5,
];

impl PresetFamily for Connectors {
    fn name(&self) -> &'static str {
        "connectors"
    }

    fn kinds(&self) -> &'static [PresetKind] {
        KINDS
    }

    fn render(&self, s: &ShapeInput) -> Outline {
        let mut b = PathBuilder::new(s.placement());
        let (w, h) = (s.w, s.h);
        match s.kind {
            Line | StraightConnector1 => {
                b.move_to(0.0, 0.0).line_to(w, h);
            }
            LineInv => {
                b.move_to(0.0, h).line_to(w, 0.0);
            }
            BentConnector2 => {
                b.polyline(&[(0.0, 0.0), (w, 0.0), (w, h)], false);
            }
            BentConnector3 => {
                let x1 = of(w, s.adj("adj1", 50000.0));
                b.polyline(&[(0.0, 0.0), (x1, 0.0), (x1, h), (w, h)], false);
            }
            BentConnector4 => {
                let x1 = of(w, s.adj("adj1", 50000.0));
                let y2 = of(h, s.adj("adj2", 50000.0));
                b.polyline(&[(0.0, 0.0), (x1, 0.0), (x1, y2), (w, y2), (w, h)], false);
            }
            BentConnector5 => {
                let x1 = of(w, s.adj("adj1", 50000.0));
                let y2 = of(h, s.adj("adj2", 50000.0));
                let x3 = of(w, s.adj("adj3", 50000.0));
                b.polyline(&[(0.0, 0.0), (x1, 0.0), (x1, y2), (x3, y2), (x3, h), (w, h)], false);
            }
            CurvedConnector2 => {
                b.move_to(0.0, 0.0).cubic_to(s.hc(), 0.0, w, s.vc(), w, h);
            }
            CurvedConnector3 => curved3(s, &mut b),
            CurvedConnector4 => curved4(s, &mut b),
            CurvedConnector5 => curved5(s, &mut b),
            _ => return Outline::new(),
        }
        Outline::new().with(Contour::stroke_only(b.finish()))
    }
}

fn curved3(s: &ShapeInput, b: &mut PathBuilder) {
    let (w, h) = (s.w, s.h);
    let x2 = of(w, s.adj("adj1", 50000.0));
    let x1 = x2 / 2.0;
    let x3 = (w + x2) / 2.0;
    b.move_to(0.0, 0.0)
        .cubic_to(x1, 0.0, x2, s.hd(4.0), x2, s.vc())
        .cubic_to(x2, h * 3.0 / 4.0, x3, h, w, h);
}

fn curved4(s: &ShapeInput, b: &mut PathBuilder) {
    let (w, h) = (s.w, s.h);
    let x2 = of(w, s.adj("adj1", 50000.0));
    let y4 = of(h, s.adj("adj2", 50000.0));
    let x1 = x2 / 2.0;
    let x3 = (w + x2) / 2.0;
    let x4 = (x2 + x3) / 2.0;
    let x5 = (x3 + w) / 2.0;
    let y1 = y4 / 2.0;
    let y2 = y1 / 2.0;
    let y3 = (y1 + y4) / 2.0;
    let y5 = (h + y4) / 2.0;
    b.move_to(0.0, 0.0)
        .cubic_to(x1, 0.0, x2, y2, x2, y1)
        .cubic_to(x2, y3, x4, y4, x3, y4)
        .cubic_to(x5, y4, w, y5, w, h);
}

fn curved5(s: &ShapeInput, b: &mut PathBuilder) {
    let (w, h) = (s.w, s.h);
    let x3 = of(w, s.adj("adj1", 50000.0));
    let y4 = of(h, s.adj("adj2", 50000.0));
    let x6 = of(w, s.adj("adj3", 50000.0));
    let x1 = (x3 + x6) / 2.0;
    let x2 = x3 / 2.0;
    let x4 = (x3 + x1) / 2.0;
    let x5 = (x6 + x1) / 2.0;
    let x7 = (x6 + w) / 2.0;
    let y1 = y4 / 2.0;
    let y2 = y1 / 2.0;
    let y3 = (y1 + y4) / 2.0;
    let y5 = (h + y4) / 2.0;
    let y6 = (y5 + y4) / 2.0;
    let y7 = (y5 + h) / 2.0;
    b.move_to(0.0, 0.0)
        .cubic_to(x2, 0.0, x3, y2, x3, y1)
        .cubic_to(x3, y3, x4, y4, x1, y4)
        .cubic_to(x5, y4, x6, y6, x6, y5)
        .cubic_to(x6, y7, x7, h, w, h);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adjust::Adjustables;
    use crate::render::presets::test_support::{outline, outline_with};

    #[test]
    fn connectors_are_open_strokes() {
        for &kind in KINDS {
            let o = outline(kind, 80.0, 40.0);
            assert_eq!(o.contours.len(), 1, "{kind}");
            assert!(o.has_open_stroke(), "{kind}");
            assert!(!o.contours[0].fill.is_filled(), "{kind}");
        }
    }

    #[test]
    fn line_and_inverse() {
        assert_eq!(outline(Line, 80.0, 40.0).contours[0].path.to_string(), "M0,0 L80,40");
        assert_eq!(outline(LineInv, 80.0, 40.0).contours[0].path.to_string(), "M0,40 L80,0");
    }

    #[test]
    fn elbow_follows_adjust() {
        let adjust = Adjustables::new().with_val("adj1", 25000).resolve().0;
        let o = outline_with(BentConnector3, 80.0, 40.0, &adjust);
        assert_eq!(o.contours[0].path.to_string(), "M0,0 L20,0 L20,40 L80,40");
        // negative values route the elbow outside the box
        let adjust = Adjustables::new().with_val("adj1", -50000).resolve().0;
        let o = outline_with(BentConnector3, 80.0, 40.0, &adjust);
        assert_eq!(o.bounds().min.x, -40.0);
    }

    #[test]
    fn curved_connectors_end_at_the_corner() {
        for kind in [CurvedConnector2, CurvedConnector3, CurvedConnector4, CurvedConnector5] {
            let path = outline(kind, 80.0, 40.0).contours[0].path.to_string();
            assert!(path.starts_with("M0,0 C"), "{path}");
            assert!(path.ends_with(" 80,40"), "{path}");
        }
    }
}
