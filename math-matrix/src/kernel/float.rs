use super::{decimal, Arith};
use crate::number::Number;
use num_traits::Float;

/// IEEE-754 arithmetic, always in `f64`.
///
/// An integer meeting a finite float is computed in decimal instead when `f64` would round it:
/// 64-bit integers always take the decimal route, narrower ones only when the float is integral
/// and the sum, difference or product came out inexact.
pub(crate) fn binary(op: Arith, x: Number, y: Number) -> Number {
    let (a, b) = (x.to_f64(), y.to_f64());
    let result = arith(op, a, b);
    if let Some((integer, float)) = mixed(x, y) {
        let ieee_zero = matches!(op, Arith::Div | Arith::Rem) && y.kind().is_float() && b == 0.0;
        let exact = match op {
            _ if integer.kind().bits() == 64 => false,
            Arith::Add | Arith::Sub | Arith::Mul if float.fract() == 0.0 => exact(op, a, b, result),
            _ => true,
        };
        if float.is_finite() && !ieee_zero && !exact {
            tracing::debug!(?op, %x, %y, "inexact in f64, computing in decimal");
            return decimal::binary(op, x, y);
        }
    }
    Number::F64(result)
}

pub(crate) fn arith<T: Float>(op: Arith, x: T, y: T) -> T {
    match op {
        Arith::Add => x + y,
        Arith::Sub => x - y,
        Arith::Mul => x * y,
        Arith::Div => x / y,
        Arith::Rem => x % y,
    }
}

/// The integer operand and the float value of the other one, if the pair mixes the two.
fn mixed(x: Number, y: Number) -> Option<(Number, f64)> {
    match (x.kind().is_integer(), y.kind().is_integer()) {
        (true, false) => Some((x, y.to_f64())),
        (false, true) => Some((y, x.to_f64())),
        _ => None,
    }
}

/// Whether `result` is `a op b` without rounding. Overflow counts as exact since no wider
/// representation would help.
fn exact(op: Arith, a: f64, b: f64, result: f64) -> bool {
    if !result.is_finite() {
        return true;
    }
    match op {
        Arith::Add => sum_error(a, b, result) == 0.0,
        Arith::Sub => sum_error(a, -b, result) == 0.0,
        Arith::Mul => a.mul_add(b, -result) == 0.0,
        Arith::Div | Arith::Rem => true,
    }
}

/// Rounding error of `s = a + b` (Knuth's two-sum).
fn sum_error(a: f64, b: f64, s: f64) -> f64 {
    let bb = s - a;
    (a - (s - bb)) + (b - bb)
}
