//! Custom geometry evaluation.

use std::collections::HashSet;

use super::formula::{Formula, GuideScope};
use super::{CustomGeometry, CustomPath, PathStep, PointRef};
use crate::adjust::Adjustables;
use crate::errors::{FormulaError, formula_source};
use crate::log::{debug, trace};
use crate::render::path_builder::{PathBuilder, arc_params};
use crate::render::types::{Contour, Outline};
use crate::types::{Angle, ratio};

/// Result of evaluating one custom shape.
#[derive(Debug, Default)]
pub struct CustomOutcome {
    pub outline: Outline,
    /// Problems found, labelled with the guide or path position they came from
    pub issues: Vec<(String, FormulaError)>,
    /// Arcs sweeping more than a full turn, by path label, in degrees
    pub excess_sweeps: Vec<(String, f64)>,
}

/// Evaluate `geometry` for a `w` by `h` render box.
///
/// `scale` is device units per document unit; the guide space is the box
/// divided by it. Adjust-value guides named in `adjust` take the shape's
/// formula instead of the declared default.
pub fn evaluate(geometry: &CustomGeometry, w: f64, h: f64, scale: f64, adjust: &Adjustables) -> CustomOutcome {
    let scale = if scale > 0.0 && scale.is_finite() { scale } else { 1.0 };
    let (gw, gh) = (w / scale, h / scale);
    let mut scope = GuideScope::new(gw, gh);
    let mut outcome = CustomOutcome::default();

    let declared: Vec<(&str, &str)> = geometry
        .adjust_values
        .iter()
        .map(|av| (av.name.as_str(), adjust.formula(&av.name).unwrap_or(av.formula.as_str())))
        .chain(geometry.guides.iter().map(|gd| (gd.name.as_str(), gd.formula.as_str())))
        .collect();

    for (i, (name, text)) in declared.iter().enumerate() {
        let value = match Formula::parse(name, text) {
            Ok(formula) => {
                let mut errors = Vec::new();
                let v = formula.evaluate(&scope, &mut errors);
                let later: HashSet<&str> = declared[i..].iter().map(|(n, _)| *n).collect();
                for mut err in errors {
                    if let FormulaError::UndefinedGuide {
                        name: missing,
                        suggestion,
                        ..
                    } = &mut err
                    {
                        if later.contains(missing.as_str()) {
                            *suggestion =
                                Some(format!("`{missing}` is declared later; guides may only use earlier guides"));
                        }
                    }
                    outcome.issues.push((name.to_string(), err));
                }
                v
            }
            Err(err) => {
                outcome.issues.push((name.to_string(), err));
                0.0
            }
        };
        trace!(guide = %name, value, "guide");
        scope.set(*name, value);
    }

    for (index, path) in geometry.paths.iter().enumerate() {
        let contour = build_path(path, index, w, h, gw, gh, &scope, &mut outcome);
        outcome.outline.contours.push(contour);
    }

    debug!(
        guides = declared.len(),
        paths = geometry.paths.len(),
        issues = outcome.issues.len(),
        "evaluated custom geometry"
    );
    outcome
}

/// Resolves path tokens, recording undefined names.
struct Resolver<'a> {
    scope: &'a GuideScope,
    label: String,
    issues: &'a mut Vec<(String, FormulaError)>,
}

impl Resolver<'_> {
    fn value(&mut self, token: &str) -> f64 {
        match self.scope.resolve(token) {
            Some(v) => v,
            None => {
                self.issues.push((
                    self.label.clone(),
                    FormulaError::UndefinedGuide {
                        name: token.to_string(),
                        src: formula_source(&self.label, token),
                        span: (0, token.len()).into(),
                        suggestion: None,
                    },
                ));
                0.0
            }
        }
    }

    fn point(&mut self, p: &PointRef) -> (f64, f64) {
        (self.value(&p.x), self.value(&p.y))
    }
}

#[allow(clippy::too_many_arguments)]
fn build_path(
    path: &CustomPath,
    index: usize,
    w: f64,
    h: f64,
    gw: f64,
    gh: f64,
    scope: &GuideScope,
    outcome: &mut CustomOutcome,
) -> Contour {
    let pw = path.width.filter(|v| *v > 0.0).unwrap_or(gw);
    let ph = path.height.filter(|v| *v > 0.0).unwrap_or(gh);
    let fx = ratio(w, pw);
    let fy = ratio(h, ph);

    let mut builder = PathBuilder::plain(w, h);
    let label = format!("path {index}");
    let mut resolver = Resolver {
        scope,
        label: label.clone(),
        issues: &mut outcome.issues,
    };
    let mut excess = Vec::new();

    for step in &path.steps {
        match step {
            PathStep::MoveTo(p) => {
                let (x, y) = resolver.point(p);
                builder.move_to(x * fx, y * fy);
            }
            PathStep::LineTo(p) => {
                let (x, y) = resolver.point(p);
                builder.line_to(x * fx, y * fy);
            }
            PathStep::CubicTo(a, b, c) => {
                let (x1, y1) = resolver.point(a);
                let (x2, y2) = resolver.point(b);
                let (x, y) = resolver.point(c);
                builder.cubic_to(x1 * fx, y1 * fy, x2 * fx, y2 * fy, x * fx, y * fy);
            }
            PathStep::QuadTo(a, b) => {
                let (x1, y1) = resolver.point(a);
                let (x, y) = resolver.point(b);
                builder.quad_to(x1 * fx, y1 * fy, x * fx, y * fy);
            }
            PathStep::ArcTo { wr, hr, start, sweep } => {
                let wr = resolver.value(wr).abs();
                let hr = resolver.value(hr).abs();
                let st = Angle::from_sixty_thousandths(resolver.value(start)).to_degrees();
                let sw = Angle::from_sixty_thousandths(resolver.value(sweep)).to_degrees();
                if sw.abs() > 360.0 {
                    excess.push((label.clone(), sw));
                }
                if sw != 0.0 {
                    // angles are visual in path space; the parameters carry
                    // over to the rescaled ellipse unchanged
                    let (t0, dt) = arc_params(wr, hr, st, sw);
                    builder.arc_param(wr * fx, hr * fy, t0, dt);
                }
            }
            PathStep::Close => {
                builder.close();
            }
        }
    }

    outcome.excess_sweeps.extend(excess);
    Contour {
        path: builder.finish(),
        fill: path.fill,
        stroke: path.stroke,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::custom::{CustomGeometry, CustomPath, PathStep, PointRef};
    use crate::render::path_data::PathCommand;
    use crate::types::pt;

    fn mv(x: &str, y: &str) -> PathStep {
        PathStep::MoveTo(PointRef::new(x, y))
    }

    fn ln(x: &str, y: &str) -> PathStep {
        PathStep::LineTo(PointRef::new(x, y))
    }

    #[test]
    fn rescales_reference_space() {
        let geom = CustomGeometry::new()
            .with_guide("x1", "*/ 21600 1 4")
            .with_guide("y1", "+- 0 0 0")
            .with_path(
                CustomPath::new(vec![mv("x1", "y1"), ln("21600", "10800"), ln("0", "21600"), PathStep::Close])
                    .with_size(21600.0, 21600.0),
            );
        let out = evaluate(&geom, 100.0, 50.0, 1.0, &Adjustables::new());
        assert!(out.issues.is_empty());
        assert_eq!(out.outline.contours[0].path.to_string(), "M25,0 L100,25 L0,50 Z");
    }

    #[test]
    fn guides_see_only_earlier_guides() {
        let geom = CustomGeometry::new()
            .with_guide("a", "+- b 0 0")
            .with_guide("b", "val 10")
            .with_path(CustomPath::new(vec![mv("a", "b")]));
        let out = evaluate(&geom, 100.0, 100.0, 1.0, &Adjustables::new());
        assert_eq!(out.issues.len(), 1);
        let (guide, err) = &out.issues[0];
        assert_eq!(guide, "a");
        match err {
            FormulaError::UndefinedGuide { name, suggestion, .. } => {
                assert_eq!(name, "b");
                assert!(suggestion.is_some());
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(out.outline.contours[0].path.to_string(), "M0,10");
    }

    #[test]
    fn adjustables_override_adjust_value_guides() {
        let geom = CustomGeometry::new()
            .with_adjust_value("adj", "val 25000")
            .with_guide("x", "*/ w adj 100000")
            .with_path(CustomPath::new(vec![mv("x", "0")]));
        let default = evaluate(&geom, 200.0, 100.0, 1.0, &Adjustables::new());
        assert_eq!(default.outline.contours[0].path.to_string(), "M50,0");
        let adjusted = evaluate(&geom, 200.0, 100.0, 1.0, &Adjustables::new().with_val("adj", 50000));
        assert_eq!(adjusted.outline.contours[0].path.to_string(), "M100,0");
    }

    #[test]
    fn guide_space_follows_scale() {
        // with scale 0.5 the guide space is twice the render box
        let geom = CustomGeometry::new().with_path(CustomPath::new(vec![mv("r", "b")]));
        let out = evaluate(&geom, 100.0, 40.0, 0.5, &Adjustables::new());
        assert_eq!(out.outline.contours[0].path.to_string(), "M100,40");
    }

    #[test]
    fn bad_guides_become_zero() {
        let geom = CustomGeometry::new()
            .with_guide("g1", "frob 1 2")
            .with_guide("g2", "*/ 1 2")
            .with_guide("g3", "*/ w 1 0")
            .with_path(CustomPath::new(vec![mv("g1", "g2"), ln("g3", "nowhere")]));
        let out = evaluate(&geom, 10.0, 10.0, 1.0, &Adjustables::new());
        assert_eq!(out.outline.contours[0].path.to_string(), "M0,0 L0,0");
        assert_eq!(out.issues.len(), 4);
        assert!(matches!(out.issues[2], (ref g, FormulaError::NonFinite { .. }) if g == "g3"));
        assert_eq!(out.issues[3].0, "path 0");
    }

    #[test]
    fn arcs_rescale_per_axis() {
        // a half circle in a 200x200 path space drawn into a 100x50 box
        let geom = CustomGeometry::new().with_path(
            CustomPath::new(vec![
                mv("0", "100"),
                PathStep::ArcTo {
                    wr: "100".into(),
                    hr: "100".into(),
                    start: "cd2".into(),
                    sweep: "cd2".into(),
                },
            ])
            .with_size(200.0, 200.0),
        );
        let out = evaluate(&geom, 100.0, 50.0, 1.0, &Adjustables::new());
        let path = &out.outline.contours[0].path;
        match path.commands()[1] {
            PathCommand::ArcTo { rx, ry, sweep, to, .. } => {
                assert_eq!((rx, ry), (50.0, 25.0));
                assert!(sweep);
                assert!((to - pt(100.0, 25.0)).length() < 1e-9);
            }
            other => panic!("unexpected {other:?}"),
        }
        let b = path.bounds();
        assert!((b.min.y - 0.0).abs() < 1e-9);
    }

    #[test]
    fn path_flags_carry_over() {
        use crate::render::types::ContourFill;
        let geom = CustomGeometry::new().with_path(
            CustomPath::new(vec![mv("0", "0"), ln("w", "h")])
                .with_fill(ContourFill::None)
                .with_stroke(true),
        );
        let out = evaluate(&geom, 10.0, 10.0, 1.0, &Adjustables::new());
        assert_eq!(out.outline.contours[0].fill, ContourFill::None);
        assert!(out.outline.contours[0].stroke);
    }
}
