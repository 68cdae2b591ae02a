use std::fmt;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::debug;

use super::{compute_all, compute_all_host, steps, Step};

/// Sign policy applied before the loop runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, EnumIter)]
#[strum(serialize_all = "lowercase")]
pub enum Convention {
    /// Reduce `|a|` and `|b|`. The result is never negative.
    #[default]
    Absolute,
    /// Reduce the signed inputs with Rust's `%`. The result may be negative.
    Host,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Value {
    Unsigned(u64),
    Signed(i64),
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Unsigned(n) => write!(f, "{}", n),
            Value::Signed(n) => write!(f, "{}", n),
        }
    }
}

/// Steps of one pairwise reduction inside a fold.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Trace {
    pub steps: Vec<Step<Value>>,
}

impl Convention {
    pub fn evaluate(&self, operands: &[i64]) -> Value {
        let result = match self {
            Convention::Absolute => Value::Unsigned(compute_all(operands)),
            Convention::Host => Value::Signed(compute_all_host(operands)),
        };
        debug!(convention = %self, %result, "evaluated");
        result
    }

    /// Per-pair steps of the fold, starting from the first operand. Fewer than
    /// two operands produce no traces.
    pub fn trace(&self, operands: &[i64]) -> Vec<Trace> {
        let Some((&first, rest)) = operands.split_first() else {
            return Vec::new();
        };
        match self {
            Convention::Absolute => {
                let mut acc = first.unsigned_abs();
                rest.iter()
                    .map(|x| {
                        let run: Vec<_> = steps(acc, x.unsigned_abs()).collect();
                        acc = run.last().map_or(acc, |s| s.a);
                        let steps = run
                            .into_iter()
                            .map(|s| Step {
                                a: Value::Unsigned(s.a),
                                b: Value::Unsigned(s.b),
                            })
                            .collect();
                        Trace { steps }
                    })
                    .collect()
            }
            Convention::Host => {
                let mut acc = first;
                rest.iter()
                    .map(|&x| {
                        let run: Vec<_> = steps(acc, x).collect();
                        acc = run.last().map_or(acc, |s| s.a);
                        let steps = run
                            .into_iter()
                            .map(|s| Step {
                                a: Value::Signed(s.a),
                                b: Value::Signed(s.b),
                            })
                            .collect();
                        Trace { steps }
                    })
                    .collect()
            }
        }
    }
}
