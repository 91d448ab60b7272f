//! Guide formula parsing and evaluation.

use std::collections::HashMap;

use pest::Parser;
use pest_derive::Parser;

use crate::adjust::pin;
use crate::errors::{FormulaError, formula_source};
use crate::render::defaults::ANGLE_UNIT;

#[derive(Parser)]
#[grammar = "custom/formula.pest"]
pub struct FormulaParser;

/// Guide operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Op {
    /// `*/ x y z` = x * y / z
    MulDiv,
    /// `+- x y z` = x + y - z
    AddSub,
    /// `+/ x y z` = (x + y) / z
    AddDiv,
    /// `?: x y z` = y if x > 0, else z
    IfElse,
    Abs,
    /// `at2 x y` = atan2(y, x) in 60000ths of a degree
    At2,
    /// `cat2 x y z` = x * cos(atan2(z, y))
    Cat2,
    /// `cos x y` = x * cos(y)
    Cos,
    Max,
    Min,
    /// `mod x y z` = sqrt(x² + y² + z²)
    Mod,
    Pin,
    /// `sat2 x y z` = x * sin(atan2(z, y))
    Sat2,
    /// `sin x y` = x * sin(y)
    Sin,
    Sqrt,
    /// `tan x y` = x * tan(y)
    Tan,
    Val,
}

impl Op {
    pub fn from_token(token: &str) -> Option<Op> {
        Some(match token {
            "*/" => Op::MulDiv,
            "+-" => Op::AddSub,
            "+/" => Op::AddDiv,
            "?:" => Op::IfElse,
            "abs" => Op::Abs,
            "at2" => Op::At2,
            "cat2" => Op::Cat2,
            "cos" => Op::Cos,
            "max" => Op::Max,
            "min" => Op::Min,
            "mod" => Op::Mod,
            "pin" => Op::Pin,
            "sat2" => Op::Sat2,
            "sin" => Op::Sin,
            "sqrt" => Op::Sqrt,
            "tan" => Op::Tan,
            "val" => Op::Val,
            _ => return None,
        })
    }

    pub fn arity(self) -> usize {
        match self {
            Op::Abs | Op::Sqrt | Op::Val => 1,
            Op::At2 | Op::Cos | Op::Max | Op::Min | Op::Sin | Op::Tan => 2,
            Op::MulDiv | Op::AddSub | Op::AddDiv | Op::IfElse | Op::Cat2 | Op::Mod | Op::Pin | Op::Sat2 => 3,
        }
    }

    /// Apply to exactly `arity()` arguments.
    fn apply(self, a: &[f64]) -> f64 {
        let rad = |v: f64| (v / ANGLE_UNIT).to_radians();
        match self {
            Op::MulDiv => a[0] * a[1] / a[2],
            Op::AddSub => a[0] + a[1] - a[2],
            Op::AddDiv => (a[0] + a[1]) / a[2],
            Op::IfElse => {
                if a[0] > 0.0 {
                    a[1]
                } else {
                    a[2]
                }
            }
            Op::Abs => a[0].abs(),
            Op::At2 => a[1].atan2(a[0]).to_degrees() * ANGLE_UNIT,
            Op::Cat2 => a[0] * a[2].atan2(a[1]).cos(),
            Op::Cos => a[0] * rad(a[1]).cos(),
            Op::Max => a[0].max(a[1]),
            Op::Min => a[0].min(a[1]),
            Op::Mod => (a[0] * a[0] + a[1] * a[1] + a[2] * a[2]).sqrt(),
            Op::Pin => pin(a[0], a[1], a[2]),
            Op::Sat2 => a[0] * a[2].atan2(a[1]).sin(),
            Op::Sin => a[0] * rad(a[1]).sin(),
            Op::Sqrt => a[0].sqrt(),
            Op::Tan => a[0] * rad(a[1]).tan(),
            Op::Val => a[0],
        }
    }
}

/// One formula argument with its byte span in the formula text.
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Literal(f64, (usize, usize)),
    Guide(String, (usize, usize)),
}

/// A parsed guide formula.
#[derive(Debug, Clone, PartialEq)]
pub struct Formula {
    pub guide: String,
    pub text: String,
    pub op: Op,
    pub args: Vec<Arg>,
}

impl Formula {
    /// Parse `text`, the formula of guide `guide`.
    pub fn parse(guide: &str, text: &str) -> Result<Formula, FormulaError> {
        let src = || formula_source(guide, text);
        let mut pairs = FormulaParser::parse(Rule::formula, text).map_err(|e| {
            let (offset, len) = match e.location {
                pest::error::InputLocation::Pos(p) => (p, 0),
                pest::error::InputLocation::Span((a, b)) => (a, b - a),
            };
            FormulaError::Syntax {
                message: e.variant.message().into_owned(),
                src: src(),
                span: (offset, len).into(),
            }
        })?;

        let formula = pairs.next().ok_or_else(|| FormulaError::Syntax {
            message: "empty formula".into(),
            src: src(),
            span: (0, text.len()).into(),
        })?;

        let mut op = None;
        let mut args = Vec::new();
        for pair in formula.into_inner() {
            let span = pair.as_span();
            let at = (span.start(), span.end() - span.start());
            match pair.as_rule() {
                Rule::operator => {
                    let token = pair.as_str();
                    op = Some(Op::from_token(token).ok_or_else(|| FormulaError::UnknownOperator {
                        op: token.to_string(),
                        src: src(),
                        span: at.into(),
                    })?);
                }
                Rule::number => {
                    let v: f64 = pair.as_str().parse().map_err(|_| FormulaError::Syntax {
                        message: "invalid number".into(),
                        src: src(),
                        span: at.into(),
                    })?;
                    args.push(Arg::Literal(v, at));
                }
                Rule::name => args.push(Arg::Guide(pair.as_str().to_string(), at)),
                _ => {}
            }
        }

        let op = op.ok_or_else(|| FormulaError::Syntax {
            message: "missing operator".into(),
            src: src(),
            span: (0, text.len()).into(),
        })?;
        if args.len() != op.arity() {
            let op_len = text.trim_start().split_whitespace().next().map_or(0, str::len);
            let op_start = text.len() - text.trim_start().len();
            return Err(FormulaError::Arity {
                op: text[op_start..op_start + op_len].to_string(),
                expected: op.arity(),
                got: args.len(),
                src: src(),
                span: (op_start, op_len).into(),
            });
        }

        Ok(Formula {
            guide: guide.to_string(),
            text: text.to_string(),
            op,
            args,
        })
    }

    /// Evaluate against `scope`. Undefined references count as `0` and a
    /// non-finite result becomes `0`; each such problem is pushed onto
    /// `errors`.
    pub fn evaluate(&self, scope: &GuideScope, errors: &mut Vec<FormulaError>) -> f64 {
        let mut values = [0.0; 3];
        for (slot, arg) in values.iter_mut().zip(&self.args) {
            *slot = match arg {
                Arg::Literal(v, _) => *v,
                Arg::Guide(name, span) => match scope.get(name) {
                    Some(v) => v,
                    None => {
                        errors.push(FormulaError::UndefinedGuide {
                            name: name.clone(),
                            src: formula_source(&self.guide, &self.text),
                            span: (*span).into(),
                            suggestion: None,
                        });
                        0.0
                    }
                },
            };
        }
        let v = self.op.apply(&values[..self.args.len()]);
        if v.is_finite() {
            v
        } else {
            errors.push(FormulaError::NonFinite {
                src: formula_source(&self.guide, &self.text),
                span: (0, self.text.len()).into(),
            });
            0.0
        }
    }
}

/// Names visible to a formula: built-ins derived from the box plus every
/// guide evaluated so far.
#[derive(Debug, Clone, Default)]
pub struct GuideScope {
    values: HashMap<String, f64>,
}

impl GuideScope {
    /// Scope with the built-in names for a `w` by `h` guide space.
    pub fn new(w: f64, h: f64) -> Self {
        let mut scope = Self::default();
        scope.init_builtins(w, h);
        scope
    }

    fn init_builtins(&mut self, w: f64, h: f64) {
        let ss = w.min(h);
        let ls = w.max(h);
        macro_rules! builtin_guides {
            ($($name:literal => $value:expr),* $(,)?) => {
                $(
                    self.values.insert($name.to_string(), $value);
                )*
            };
        }

        builtin_guides! {
            // box
            "w" => w,
            "h" => h,
            "l" => 0.0,
            "t" => 0.0,
            "r" => w,
            "b" => h,
            "hc" => w / 2.0,
            "vc" => h / 2.0,
            "ss" => ss,
            "ls" => ls,
            // width fractions
            "wd2" => w / 2.0,
            "wd3" => w / 3.0,
            "wd4" => w / 4.0,
            "wd5" => w / 5.0,
            "wd6" => w / 6.0,
            "wd8" => w / 8.0,
            "wd10" => w / 10.0,
            "wd12" => w / 12.0,
            "wd32" => w / 32.0,
            // height fractions
            "hd2" => h / 2.0,
            "hd3" => h / 3.0,
            "hd4" => h / 4.0,
            "hd5" => h / 5.0,
            "hd6" => h / 6.0,
            "hd8" => h / 8.0,
            "hd10" => h / 10.0,
            "hd12" => h / 12.0,
            // short side fractions
            "ssd2" => ss / 2.0,
            "ssd4" => ss / 4.0,
            "ssd6" => ss / 6.0,
            "ssd8" => ss / 8.0,
            "ssd16" => ss / 16.0,
            "ssd32" => ss / 32.0,
            // angles, 60000ths of a degree
            "cd2" => 10_800_000.0,
            "cd4" => 5_400_000.0,
            "cd8" => 2_700_000.0,
            "3cd4" => 16_200_000.0,
            "3cd8" => 8_100_000.0,
            "5cd8" => 13_500_000.0,
            "7cd8" => 18_900_000.0,
        }
    }

    pub fn get(&self, name: &str) -> Option<f64> {
        self.values.get(name).copied()
    }

    pub fn set(&mut self, name: impl Into<String>, value: f64) {
        self.values.insert(name.into(), value);
    }

    /// A path coordinate or angle: a literal or a guide name.
    pub fn resolve(&self, token: &str) -> Option<f64> {
        let token = token.trim();
        if let Ok(v) = token.parse::<f64>() {
            return v.is_finite().then_some(v);
        }
        self.get(token)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eval(text: &str, scope: &GuideScope) -> f64 {
        let f = Formula::parse("g", text).expect("parses");
        let mut errors = Vec::new();
        let v = f.evaluate(scope, &mut errors);
        assert!(errors.is_empty(), "{errors:?}");
        v
    }

    #[test]
    fn parses_operator_and_arguments() {
        let f = Formula::parse("g1", "*/ w adj1 100000").expect("parses");
        assert_eq!(f.op, Op::MulDiv);
        assert_eq!(f.args.len(), 3);
        assert_eq!(f.args[0], Arg::Guide("w".into(), (3, 1)));
        assert_eq!(f.args[2], Arg::Literal(100000.0, (10, 6)));
    }

    #[test]
    fn digit_led_names_are_guides() {
        let f = Formula::parse("g", "+- 3cd4 -5 0").expect("parses");
        assert_eq!(f.args[0], Arg::Guide("3cd4".into(), (3, 4)));
        assert_eq!(f.args[1], Arg::Literal(-5.0, (8, 2)));
    }

    #[test]
    fn arithmetic_operators() {
        let scope = GuideScope::new(21600.0, 10800.0);
        assert_eq!(eval("*/ w 1 2", &scope), 10800.0);
        assert_eq!(eval("+- w h 600", &scope), 31800.0);
        assert_eq!(eval("+/ w h 2", &scope), 16200.0);
        assert_eq!(eval("?: -1 4 5", &scope), 5.0);
        assert_eq!(eval("?: 1 4 5", &scope), 4.0);
        assert_eq!(eval("abs -7", &scope), 7.0);
        assert_eq!(eval("max w h", &scope), 21600.0);
        assert_eq!(eval("min w h", &scope), 10800.0);
        assert_eq!(eval("mod 3 4 0", &scope), 5.0);
        assert_eq!(eval("pin 0 50 10", &scope), 10.0);
        assert_eq!(eval("sqrt 16", &scope), 4.0);
        assert_eq!(eval("val ss", &scope), 10800.0);
    }

    #[test]
    fn trigonometry_uses_sixty_thousandths() {
        let scope = GuideScope::new(100.0, 100.0);
        assert!((eval("cos 10 cd2", &scope) + 10.0).abs() < 1e-9);
        assert!((eval("sin 10 cd4", &scope) - 10.0).abs() < 1e-9);
        assert!((eval("tan 10 2700000", &scope) - 10.0).abs() < 1e-9);
        assert!((eval("at2 0 5", &scope) - 5_400_000.0).abs() < 1e-6);
        assert!((eval("cat2 10 1 0", &scope) - 10.0).abs() < 1e-9);
        assert!((eval("sat2 10 0 1", &scope) - 10.0).abs() < 1e-9);
    }

    #[test]
    fn division_by_zero_is_reported() {
        let scope = GuideScope::new(0.0, 0.0);
        for text in ["*/ 5 1 w", "+/ 0 0 h"] {
            let f = Formula::parse("g", text).expect("parses");
            let mut errors = Vec::new();
            assert_eq!(f.evaluate(&scope, &mut errors), 0.0);
            assert!(matches!(errors[..], [FormulaError::NonFinite { .. }]), "{text}");
        }
    }

    #[test]
    fn undefined_reference_counts_as_zero() {
        let scope = GuideScope::new(100.0, 50.0);
        let f = Formula::parse("g", "+- w nope 0").expect("parses");
        let mut errors = Vec::new();
        assert_eq!(f.evaluate(&scope, &mut errors), 100.0);
        assert!(matches!(&errors[..], [FormulaError::UndefinedGuide { name, .. }] if name == "nope"));
    }

    #[test]
    fn non_finite_result_becomes_zero() {
        let scope = GuideScope::new(100.0, 50.0);
        let f = Formula::parse("g", "sqrt -4").expect("parses");
        let mut errors = Vec::new();
        assert_eq!(f.evaluate(&scope, &mut errors), 0.0);
        assert!(matches!(errors[..], [FormulaError::NonFinite { .. }]));
    }

    #[test]
    fn rejects_bad_formulas() {
        assert!(matches!(Formula::parse("g", "frob 1 2"), Err(FormulaError::UnknownOperator { .. })));
        assert!(matches!(Formula::parse("g", "*/ 1 2"), Err(FormulaError::Arity { expected: 3, got: 2, .. })));
        assert!(matches!(Formula::parse("g", ""), Err(FormulaError::Syntax { .. })));
        assert!(matches!(Formula::parse("g", "+- 1 $ 2"), Err(FormulaError::Syntax { .. })));
    }

    #[test]
    fn resolves_literals_and_names() {
        let scope = GuideScope::new(400.0, 200.0);
        assert_eq!(scope.resolve("hc"), Some(200.0));
        assert_eq!(scope.resolve("-12.5"), Some(-12.5));
        assert_eq!(scope.resolve("missing"), None);
    }
}
