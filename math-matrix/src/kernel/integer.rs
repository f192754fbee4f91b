use super::{divide_by_zero, float, Arith};
use crate::{
    kind::{Class, NumericKind},
    number::Number,
};
use rust_decimal::Decimal;

/// The kind an integer result is stored in when it fits: the wider operand width, unsigned only
/// when both operands are unsigned.
pub(crate) fn home(x: NumericKind, y: NumericKind) -> NumericKind {
    let signed = x.class() == Class::Signed || y.class() == Class::Signed;
    NumericKind::integer(x.bits().max(y.bits()), signed).unwrap_or(NumericKind::I64)
}

/// Store an exact integer result, starting at `home` and climbing the widening ladder until a kind
/// holds it. Negative results skip the unsigned rungs; a signed home gives `u64` a chance before
/// moving to decimal.
pub(crate) fn place(value: i128, home: NumericKind) -> Number {
    let mut kind = if value < 0 { home.signed() } else { home };
    loop {
        if let Some(number) = Number::from_integer(value, kind) {
            if kind != home {
                tracing::debug!(value = %value, %home, %kind, "widened integer result");
            }
            return number;
        }
        if kind == NumericKind::I64 && value > 0 {
            if let Some(number) = Number::from_integer(value, NumericKind::U64) {
                return number;
            }
        }
        kind = match kind.wider() {
            Some(next) => next,
            None => return Number::F64(value as f64),
        };
    }
}

pub(crate) fn binary(op: Arith, x: Number, y: Number) -> Number {
    let (a, b) = match (x.integer(), y.integer()) {
        (Some(a), Some(b)) => (a, b),
        _ => return float::binary(op, x, y),
    };
    let home = home(x.kind(), y.kind());
    match op {
        Arith::Add => place(a + b, home),
        Arith::Sub => place(a - b, home),
        Arith::Mul => mul(a, b, home),
        Arith::Div => div(a, b, x, y, home),
        Arith::Rem if b == 0 => Number::nan(),
        // the remainder never exceeds the dividend in magnitude and keeps its sign
        Arith::Rem => place(a % b, x.kind()),
    }
}

fn mul(a: i128, b: i128, home: NumericKind) -> Number {
    if let Some(product) = a.checked_mul(b) {
        return place(product, home);
    }
    // the magnitude is exact in u128 and rounds once on the way to f64
    let magnitude = a
        .unsigned_abs()
        .checked_mul(b.unsigned_abs())
        .map(|m| m as f64)
        .unwrap_or_else(|| (a as f64 * b as f64).abs());
    Number::F64(if (a < 0) != (b < 0) { -magnitude } else { magnitude })
}

fn div(a: i128, b: i128, x: Number, y: Number, home: NumericKind) -> Number {
    if b == 0 {
        return divide_by_zero(x);
    }
    if a % b == 0 {
        return place(a / b, home);
    }
    if x.kind().bits().max(y.kind().bits()) < 64 {
        // both operands are exact in f64, so the quotient is rounded once
        return Number::F64(a as f64 / b as f64);
    }
    match (
        Decimal::try_from_i128_with_scale(a, 0),
        Decimal::try_from_i128_with_scale(b, 0),
    ) {
        (Ok(a), Ok(b)) => match a.checked_div(b) {
            Some(q) => Number::Dec128(q),
            None => Number::F64(Number::Dec128(a).to_f64() / Number::Dec128(b).to_f64()),
        },
        _ => Number::F64(a as f64 / b as f64),
    }
}
