//! The Euclidean reducer: `(a, b) -> (b, a mod b)` until `b` is zero.

pub mod convention;

pub use convention::{Convention, Trace, Value};

use std::fmt;
use std::iter::FusedIterator;

/// Integer representation the reduction loop runs on.
pub trait Operand: Copy + Eq + fmt::Display + fmt::Debug {
    const ZERO: Self;

    /// `self mod rhs`. Only called with `rhs != ZERO`, and must not overflow.
    fn remainder(self, rhs: Self) -> Self;
}

impl Operand for u64 {
    const ZERO: Self = 0;

    fn remainder(self, rhs: Self) -> Self {
        self % rhs
    }
}

/// Truncated remainder, sign of the dividend. `i64::MIN % -1` is `0`.
impl Operand for i64 {
    const ZERO: Self = 0;

    fn remainder(self, rhs: Self) -> Self {
        self.wrapping_rem(rhs)
    }
}

/// The pair at one iteration boundary of the loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Step<T> {
    pub a: T,
    pub b: T,
}

impl<T: fmt::Display> fmt::Display for Step<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "a = {}, b = {}", self.a, self.b)
    }
}

/// Runs the loop to completion and returns the final `a`.
pub fn reduce<T: Operand>(a0: T, b0: T) -> T {
    let mut a = a0;
    let mut b = b0;
    while b != T::ZERO {
        let temp = b;
        b = a.remainder(b);
        a = temp;
    }
    a
}

/// Same loop as [`reduce`], yielding every `(a, b)` pair from `(a0, b0)` down to
/// `(result, 0)`.
pub fn steps<T: Operand>(a0: T, b0: T) -> Steps<T> {
    Steps {
        state: Some(Step { a: a0, b: b0 }),
    }
}

#[derive(Debug, Clone)]
pub struct Steps<T> {
    state: Option<Step<T>>,
}

impl<T: Operand> Iterator for Steps<T> {
    type Item = Step<T>;

    fn next(&mut self) -> Option<Step<T>> {
        let current = self.state.take()?;
        if current.b != T::ZERO {
            let temp = current.b;
            self.state = Some(Step {
                a: temp,
                b: current.a.remainder(current.b),
            });
        }
        tracing::trace!(a = %current.a, b = %current.b, "step");
        Some(current)
    }
}

impl<T: Operand> FusedIterator for Steps<T> {}

/// GCD on absolute values. Always non-negative; `compute(0, 0) == 0`.
pub fn compute(a0: i64, b0: i64) -> u64 {
    reduce(a0.unsigned_abs(), b0.unsigned_abs())
}

/// GCD on the raw signed values with Rust's remainder. The sign of the result
/// follows the inputs, e.g. `compute_host(48, -18) == -6`.
pub fn compute_host(a0: i64, b0: i64) -> i64 {
    reduce(a0, b0)
}

/// Left fold of [`compute`]. Empty input yields `0`.
pub fn compute_all(operands: &[i64]) -> u64 {
    operands.iter().enumerate().fold(0, |acc, (i, x)| {
        let next = reduce(acc, x.unsigned_abs());
        tracing::debug!(pair = i, lhs = acc, rhs = x.unsigned_abs(), gcd = next, "reduced");
        next
    })
}

/// Left fold of [`compute_host`]. Empty input yields `0`.
pub fn compute_all_host(operands: &[i64]) -> i64 {
    operands.iter().enumerate().fold(0, |acc, (i, &x)| {
        let next = reduce(acc, x);
        tracing::debug!(pair = i, lhs = acc, rhs = x, gcd = next, "reduced");
        next
    })
}
