//! Stars and seals.

use crate::kind::PresetKind::{self, *};

use super::super::defaults::LEGACY_SPACE;
use super::super::path_builder::PathBuilder;
use super::super::types::Outline;
use super::basic::ring_points;
use super::{ShapeInput, Space, of, polygon_outline};
use crate::render::registry::PresetFamily;

#[derive(Debug, Clone, Copy)]
pub struct Stars;

const KINDS: &[PresetKind] = &[
    Star4,
    Star5,
    Star6,
    Star7,
    Star8,
    Star10,
    Star12,
    Star16,
    Star24,
    Star32,
    IrregularSeal1,
    IrregularSeal2,
];

/// Points, default inner radius, horizontal and vertical stretch factors
/// and whether the center is stretched with the vertical factor.
struct StarSpec {
    points: usize,
    adj: f64,
    hf: f64,
    vf: f64,
    stretch_center: bool,
}

const fn star(points: usize, adj: f64, hf: f64, vf: f64, stretch_center: bool) -> StarSpec {
    StarSpec {
        points,
        adj,
        hf,
        vf,
        stretch_center,
    }
}

impl PresetFamily for Stars {
    fn name(&self) -> &'static str {
        "stars"
    }

    fn kinds(&self) -> &'static [PresetKind] {
        KINDS
    }

    fn render(&self, s: &ShapeInput) -> Outline {
        let spec = match s.kind {
            Star4 => star(4, 12500.0, 100000.0, 100000.0, false),
            Star5 => star(5, 19098.0, 105146.0, 110557.0, true),
            Star6 => star(6, 28868.0, 115470.0, 100000.0, false),
            Star7 => star(7, 34601.0, 102572.0, 105210.0, true),
            Star8 => star(8, 38250.0, 100000.0, 100000.0, false),
            Star10 => star(10, 42533.0, 105146.0, 100000.0, false),
            Star12 => star(12, 37500.0, 100000.0, 100000.0, false),
            Star16 => star(16, 37500.0, 100000.0, 100000.0, false),
            Star24 => star(24, 37500.0, 100000.0, 100000.0, false),
            Star32 => star(32, 37500.0, 100000.0, 100000.0, false),
            IrregularSeal1 => return seal(s, SEAL1),
            IrregularSeal2 => return seal(s, SEAL2),
            _ => return Outline::new(),
        };
        star_outline(s, &spec)
    }
}

fn star_outline(s: &ShapeInput, spec: &StarSpec) -> Outline {
    let a = s.pinned("adj", spec.adj, 0.0, 50000.0);
    let hf = s.adj("hf", spec.hf);
    let vf = s.adj("vf", spec.vf);
    let swd2 = of(s.wd(2.0), hf);
    let shd2 = of(s.hd(2.0), vf);
    let cy = if spec.stretch_center { of(s.vc(), vf) } else { s.vc() };
    // the inner ring is the outer one scaled by adj / 50000
    let (iwd2, ihd2) = (swd2 * a / 50000.0, shd2 * a / 50000.0);
    let n = spec.points;
    let outer = ring_points(s.hc(), cy, swd2, shd2, n, 0.0);
    let inner = ring_points(s.hc(), cy, iwd2, ihd2, n, 180.0 / n as f64);
    let points: Vec<(f64, f64)> = outer.into_iter().zip(inner).flat_map(|(o, i)| [o, i]).collect();
    polygon_outline(s.placement(), &points)
}

/// Seal outline in 21600 by 21600 units.
const SEAL1: &[(f64, f64)] = &[
    (10800.0, 5800.0),
    (14522.0, 0.0),
    (14155.0, 5325.0),
    (18380.0, 4457.0),
    (16702.0, 7315.0),
    (21097.0, 8137.0),
    (17607.0, 10475.0),
    (21600.0, 13290.0),
    (16837.0, 12942.0),
    (18145.0, 18095.0),
    (14020.0, 14457.0),
    (13247.0, 19737.0),
    (10532.0, 14935.0),
    (8485.0, 21600.0),
    (7715.0, 15627.0),
    (4762.0, 17617.0),
    (5667.0, 13937.0),
    (135.0, 14587.0),
    (3722.0, 11775.0),
    (0.0, 8615.0),
    (4627.0, 7617.0),
    (370.0, 2295.0),
    (7312.0, 6320.0),
    (8352.0, 2295.0),
];

const SEAL2: &[(f64, f64)] = &[
    (11462.0, 4342.0),
    (14790.0, 0.0),
    (14525.0, 5777.0),
    (18007.0, 3172.0),
    (16380.0, 6532.0),
    (21600.0, 6645.0),
    (16985.0, 9402.0),
    (18270.0, 11290.0),
    (16380.0, 12310.0),
    (18877.0, 15632.0),
    (14640.0, 14350.0),
    (14942.0, 17370.0),
    (12180.0, 15935.0),
    (11612.0, 18842.0),
    (9872.0, 17370.0),
    (8700.0, 19712.0),
    (7527.0, 18125.0),
    (4917.0, 21600.0),
    (4805.0, 18240.0),
    (1285.0, 17825.0),
    (3330.0, 15370.0),
    (0.0, 12877.0),
    (3935.0, 11592.0),
    (1172.0, 8270.0),
    (5372.0, 7817.0),
    (4502.0, 3625.0),
    (8550.0, 6382.0),
    (9722.0, 1887.0),
];

fn seal(s: &ShapeInput, points: &[(f64, f64)]) -> Outline {
    let space = Space::new(s.w, s.h, LEGACY_SPACE, LEGACY_SPACE);
    let mut b = PathBuilder::new(s.placement());
    space.polygon(&mut b, points);
    Outline::path(b.finish())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::path_data::PathCommand;
    use crate::render::presets::test_support::{assert_fills_box, outline};

    #[test]
    fn stars_touch_every_edge() {
        for kind in [Star4, Star5, Star6, Star7, Star8, Star10, Star12, Star16, Star24, Star32] {
            assert_fills_box(outline(kind, 200.0, 150.0).bounds(), 200.0, 150.0);
        }
    }

    #[test]
    fn vertex_count_is_twice_the_points() {
        let o = outline(Star5, 100.0, 100.0);
        let lines = o.contours[0]
            .path
            .commands()
            .iter()
            .filter(|c| matches!(c, PathCommand::MoveTo(_) | PathCommand::LineTo(_)))
            .count();
        assert_eq!(lines, 10);
    }

    #[test]
    fn four_point_star_default() {
        let o = outline(Star4, 100.0, 100.0);
        let path = o.contours[0].path.to_string();
        assert!(path.starts_with("M50,0 L"), "{path}");
        assert!(path.contains("L100,50"), "{path}");
    }

    #[test]
    fn seals_span_the_box() {
        assert_fills_box(outline(IrregularSeal1, 216.0, 108.0).bounds(), 216.0, 108.0);
        assert_fills_box(outline(IrregularSeal2, 216.0, 108.0).bounds(), 216.0, 108.0);
    }
}
