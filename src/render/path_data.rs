//! SVG path data.
//!
//! A small owned command list with a fluent builder (`m`, `l`, `c`, `q`, `a`,
//! `z`) and a deterministic serializer. All coordinates are absolute.

use std::f64::consts::{PI, TAU};
use std::fmt::{self, Write as _};

use glam::DVec2;

use crate::types::{Bounds, Point, pt};

use super::defaults::PRECISION;

/// One absolute path command.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo(Point, Point, Point),
    QuadTo(Point, Point),
    ArcTo {
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        to: Point,
    },
    Close,
}

/// An ordered list of path commands.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PathData {
    commands: Vec<PathCommand>,
}

impl PathData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn m(mut self, x: f64, y: f64) -> Self {
        self.push(PathCommand::MoveTo(pt(x, y)));
        self
    }

    pub fn l(mut self, x: f64, y: f64) -> Self {
        self.push(PathCommand::LineTo(pt(x, y)));
        self
    }

    pub fn c(mut self, x1: f64, y1: f64, x2: f64, y2: f64, x: f64, y: f64) -> Self {
        self.push(PathCommand::CubicTo(pt(x1, y1), pt(x2, y2), pt(x, y)));
        self
    }

    pub fn q(mut self, x1: f64, y1: f64, x: f64, y: f64) -> Self {
        self.push(PathCommand::QuadTo(pt(x1, y1), pt(x, y)));
        self
    }

    #[allow(clippy::too_many_arguments)]
    pub fn a(
        mut self,
        rx: f64,
        ry: f64,
        rotation: f64,
        large_arc: bool,
        sweep: bool,
        x: f64,
        y: f64,
    ) -> Self {
        self.push(PathCommand::ArcTo {
            rx,
            ry,
            rotation,
            large_arc,
            sweep,
            to: pt(x, y),
        });
        self
    }

    pub fn z(mut self) -> Self {
        self.push(PathCommand::Close);
        self
    }

    /// Polyline through `points`, closed when `close` is set.
    pub fn polygon(points: &[Point], close: bool) -> Self {
        let mut path = PathData::new();
        for (i, p) in points.iter().enumerate() {
            if i == 0 {
                path.push(PathCommand::MoveTo(*p));
            } else {
                path.push(PathCommand::LineTo(*p));
            }
        }
        if close && !points.is_empty() {
            path.push(PathCommand::Close);
        }
        path
    }

    pub fn push(&mut self, cmd: PathCommand) {
        self.commands.push(cmd);
    }

    /// Append every command of `other`.
    pub fn extend(&mut self, other: PathData) {
        self.commands.extend(other.commands);
    }

    /// Builder form of [`PathData::extend`].
    pub fn then(mut self, other: PathData) -> Self {
        self.extend(other);
        self
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True when every coordinate and radius is finite.
    pub fn is_finite(&self) -> bool {
        self.commands.iter().all(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => p.is_finite(),
            PathCommand::CubicTo(a, b, c) => a.is_finite() && b.is_finite() && c.is_finite(),
            PathCommand::QuadTo(a, b) => a.is_finite() && b.is_finite(),
            PathCommand::ArcTo {
                rx, ry, rotation, to, ..
            } => rx.is_finite() && ry.is_finite() && rotation.is_finite() && to.is_finite(),
            PathCommand::Close => true,
        })
    }

    /// True when some sub-path is not terminated by a close command.
    pub fn has_open_subpath(&self) -> bool {
        let mut open = false;
        for cmd in &self.commands {
            match cmd {
                PathCommand::MoveTo(_) => {
                    if open {
                        return true;
                    }
                    open = false;
                }
                PathCommand::Close => open = false,
                _ => open = true,
            }
        }
        open
    }

    /// Exact axis-aligned bounds, including curve and arc extrema.
    pub fn bounds(&self) -> Bounds {
        let mut bounds = Bounds::new();
        let mut current = DVec2::ZERO;
        let mut start = DVec2::ZERO;
        for cmd in &self.commands {
            match *cmd {
                PathCommand::MoveTo(p) => {
                    bounds.include(p);
                    current = p;
                    start = p;
                }
                PathCommand::LineTo(p) => {
                    bounds.include(p);
                    current = p;
                }
                PathCommand::CubicTo(c1, c2, p) => {
                    bounds.include(p);
                    for t in cubic_extrema(current, c1, c2, p) {
                        bounds.include(cubic_point(current, c1, c2, p, t));
                    }
                    current = p;
                }
                PathCommand::QuadTo(c, p) => {
                    bounds.include(p);
                    for t in quad_extrema(current, c, p) {
                        bounds.include(quad_point(current, c, p, t));
                    }
                    current = p;
                }
                PathCommand::ArcTo {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    to,
                } => {
                    bounds.include(to);
                    if let Some(arc) = ArcCenter::from_endpoints(current, to, rx, ry, rotation, large_arc, sweep) {
                        arc.include_in(&mut bounds);
                    }
                    current = to;
                }
                PathCommand::Close => current = start,
            }
        }
        bounds
    }

    /// Serialize with `precision` decimal places.
    pub fn to_string_with_precision(&self, precision: usize) -> String {
        let mut out = String::new();
        for (i, cmd) in self.commands.iter().enumerate() {
            if i > 0 {
                out.push(' ');
            }
            let n = |v: f64| fmt_num(v, precision);
            // Writing to a String cannot fail.
            let _ = match *cmd {
                PathCommand::MoveTo(p) => write!(out, "M{},{}", n(p.x), n(p.y)),
                PathCommand::LineTo(p) => write!(out, "L{},{}", n(p.x), n(p.y)),
                PathCommand::CubicTo(a, b, p) => write!(
                    out,
                    "C{},{} {},{} {},{}",
                    n(a.x),
                    n(a.y),
                    n(b.x),
                    n(b.y),
                    n(p.x),
                    n(p.y)
                ),
                PathCommand::QuadTo(a, p) => {
                    write!(out, "Q{},{} {},{}", n(a.x), n(a.y), n(p.x), n(p.y))
                }
                PathCommand::ArcTo {
                    rx,
                    ry,
                    rotation,
                    large_arc,
                    sweep,
                    to,
                } => write!(
                    out,
                    "A{},{} {} {},{} {},{}",
                    n(rx),
                    n(ry),
                    n(rotation),
                    large_arc as u8,
                    sweep as u8,
                    n(to.x),
                    n(to.y)
                ),
                PathCommand::Close => write!(out, "Z"),
            };
        }
        out
    }
}

impl fmt::Display for PathData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_string_with_precision(PRECISION))
    }
}

/// Round to `precision` decimals, printing the shortest form (`100`, `0.5`).
pub fn fmt_num(v: f64, precision: usize) -> String {
    if !v.is_finite() {
        return "0".to_string();
    }
    let scale = 10f64.powi(precision as i32);
    let mut r = (v * scale).round() / scale;
    if r == 0.0 {
        // drop the sign of -0
        r = 0.0;
    }
    format!("{r}")
}

/// An elliptical arc in center parameterization.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ArcCenter {
    pub center: Point,
    pub rx: f64,
    pub ry: f64,
    /// x-axis rotation in radians
    pub phi: f64,
    /// start parameter in radians
    pub start: f64,
    /// signed parameter sweep in radians
    pub sweep: f64,
}

impl ArcCenter {
    /// Endpoint to center conversion (SVG 1.1 appendix F.6.5).
    ///
    /// Returns `None` for arcs SVG renders as a straight line or not at all.
    pub fn from_endpoints(
        from: Point,
        to: Point,
        rx: f64,
        ry: f64,
        rotation_deg: f64,
        large_arc: bool,
        sweep: bool,
    ) -> Option<ArcCenter> {
        if from == to {
            return None;
        }
        let mut rx = rx.abs();
        let mut ry = ry.abs();
        if rx == 0.0 || ry == 0.0 || !rx.is_finite() || !ry.is_finite() {
            return None;
        }
        let phi = rotation_deg.to_radians();
        let (sin_phi, cos_phi) = phi.sin_cos();
        let half = (from - to) / 2.0;
        let x1 = cos_phi * half.x + sin_phi * half.y;
        let y1 = -sin_phi * half.x + cos_phi * half.y;

        let lambda = (x1 * x1) / (rx * rx) + (y1 * y1) / (ry * ry);
        if lambda > 1.0 {
            let s = lambda.sqrt();
            rx *= s;
            ry *= s;
        }

        let num = rx * rx * ry * ry - rx * rx * y1 * y1 - ry * ry * x1 * x1;
        let den = rx * rx * y1 * y1 + ry * ry * x1 * x1;
        let mut coef = if den == 0.0 { 0.0 } else { (num / den).max(0.0).sqrt() };
        if large_arc == sweep {
            coef = -coef;
        }
        let cxp = coef * rx * y1 / ry;
        let cyp = -coef * ry * x1 / rx;

        let mid = (from + to) / 2.0;
        let center = pt(
            cos_phi * cxp - sin_phi * cyp + mid.x,
            sin_phi * cxp + cos_phi * cyp + mid.y,
        );

        let u = pt((x1 - cxp) / rx, (y1 - cyp) / ry);
        let v = pt((-x1 - cxp) / rx, (-y1 - cyp) / ry);
        let start = u.y.atan2(u.x);
        let mut delta = vector_angle(u, v);
        if !sweep && delta > 0.0 {
            delta -= TAU;
        } else if sweep && delta < 0.0 {
            delta += TAU;
        }

        Some(ArcCenter {
            center,
            rx,
            ry,
            phi,
            start,
            sweep: delta,
        })
    }

    /// Point at ellipse parameter `t` (radians).
    pub fn point_at(&self, t: f64) -> Point {
        let (sin_phi, cos_phi) = self.phi.sin_cos();
        let (s, c) = t.sin_cos();
        let x = self.rx * c;
        let y = self.ry * s;
        self.center + pt(cos_phi * x - sin_phi * y, sin_phi * x + cos_phi * y)
    }

    fn include_in(&self, bounds: &mut Bounds) {
        bounds.include(self.point_at(self.start));
        bounds.include(self.point_at(self.start + self.sweep));
        if self.phi == 0.0 {
            // axis extrema sit at multiples of a quarter turn
            let (lo, hi) = if self.sweep >= 0.0 {
                (self.start, self.start + self.sweep)
            } else {
                (self.start + self.sweep, self.start)
            };
            let mut k = (lo / (PI / 2.0)).ceil();
            while k * (PI / 2.0) <= hi {
                bounds.include(self.point_at(k * (PI / 2.0)));
                k += 1.0;
            }
        } else {
            const STEPS: usize = 64;
            for i in 1..STEPS {
                let t = self.start + self.sweep * (i as f64 / STEPS as f64);
                bounds.include(self.point_at(t));
            }
        }
    }
}

fn vector_angle(u: DVec2, v: DVec2) -> f64 {
    let cross = u.x * v.y - u.y * v.x;
    let dot = u.dot(v);
    cross.atan2(dot)
}

fn cubic_point(p0: Point, p1: Point, p2: Point, p3: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    p0 * (mt * mt * mt) + p1 * (3.0 * mt * mt * t) + p2 * (3.0 * mt * t * t) + p3 * (t * t * t)
}

fn quad_point(p0: Point, p1: Point, p2: Point, t: f64) -> Point {
    let mt = 1.0 - t;
    p0 * (mt * mt) + p1 * (2.0 * mt * t) + p2 * (t * t)
}

fn cubic_extrema(p0: Point, p1: Point, p2: Point, p3: Point) -> Vec<f64> {
    let mut ts = Vec::new();
    for axis in 0..2 {
        let (a0, a1, a2, a3) = (p0[axis], p1[axis], p2[axis], p3[axis]);
        // derivative: a t^2 + b t + c
        let a = 3.0 * (-a0 + 3.0 * a1 - 3.0 * a2 + a3);
        let b = 6.0 * (a0 - 2.0 * a1 + a2);
        let c = 3.0 * (a1 - a0);
        if a.abs() < 1e-12 {
            if b.abs() > 1e-12 {
                ts.push(-c / b);
            }
            continue;
        }
        let disc = b * b - 4.0 * a * c;
        if disc < 0.0 {
            continue;
        }
        let sq = disc.sqrt();
        ts.push((-b + sq) / (2.0 * a));
        ts.push((-b - sq) / (2.0 * a));
    }
    ts.retain(|t| *t > 0.0 && *t < 1.0);
    ts
}

fn quad_extrema(p0: Point, p1: Point, p2: Point) -> Vec<f64> {
    let mut ts = Vec::new();
    for axis in 0..2 {
        let den = p0[axis] - 2.0 * p1[axis] + p2[axis];
        if den.abs() > 1e-12 {
            let t = (p0[axis] - p1[axis]) / den;
            if t > 0.0 && t < 1.0 {
                ts.push(t);
            }
        }
    }
    ts
}
