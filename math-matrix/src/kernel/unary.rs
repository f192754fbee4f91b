use crate::{number::Number, op::UnaryOp};
use rust_decimal::Decimal;

pub fn unary(op: UnaryOp, x: Number) -> Number {
    let result = match op {
        UnaryOp::Abs => abs(x),
        UnaryOp::Floor => integral(x, f32::floor, f64::floor, |d| d.floor()),
        UnaryOp::Ceiling => integral(x, f32::ceil, f64::ceil, |d| d.ceil()),
        UnaryOp::Round => integral(x, f32::round_ties_even, f64::round_ties_even, |d| d.round()),
        UnaryOp::Sqrt => match x {
            Number::F32(v) => Number::F32(v.sqrt()),
            other => Number::F64(other.to_f64().sqrt()),
        },
    };
    tracing::trace!(%op, %x, %result, "unary");
    result
}

/// Magnitude; signed integers move to the unsigned kind of the same width so that the minimum
/// value has a representable result.
fn abs(x: Number) -> Number {
    match x {
        Number::I8(v) => Number::U8(v.unsigned_abs()),
        Number::I16(v) => Number::U16(v.unsigned_abs()),
        Number::I32(v) => Number::U32(v.unsigned_abs()),
        Number::I64(v) => Number::U64(v.unsigned_abs()),
        Number::F32(v) => Number::F32(v.abs()),
        Number::F64(v) => Number::F64(v.abs()),
        Number::Dec128(d) => Number::Dec128(d.abs()),
        unsigned => unsigned,
    }
}

/// Integers are already integral and pass through unchanged.
fn integral(
    x: Number,
    single: impl Fn(f32) -> f32,
    double: impl Fn(f64) -> f64,
    decimal: impl Fn(Decimal) -> Decimal,
) -> Number {
    match x {
        Number::F32(v) => Number::F32(single(v)),
        Number::F64(v) => Number::F64(double(v)),
        Number::Dec128(d) => Number::Dec128(decimal(d)),
        integer => integer,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn magnitude() {
        assert_eq!(unary(UnaryOp::Abs, Number::I8(i8::MIN)), Number::U8(128));
        assert_eq!(unary(UnaryOp::Abs, Number::I64(-5)), Number::U64(5));
        assert_eq!(unary(UnaryOp::Abs, Number::U16(5)), Number::U16(5));
        assert_eq!(unary(UnaryOp::Abs, Number::F32(-1.5)), Number::F32(1.5));
    }

    #[test]
    fn rounding() {
        assert_eq!(unary(UnaryOp::Round, Number::F64(2.5)), Number::F64(2.0));
        assert_eq!(unary(UnaryOp::Round, Number::F32(3.5)), Number::F32(4.0));
        assert_eq!(
            unary(UnaryOp::Round, Number::Dec128(Decimal::from_str("-2.5").unwrap())),
            Number::Dec128(Decimal::from(-2))
        );
        assert_eq!(unary(UnaryOp::Floor, Number::F64(-0.5)), Number::F64(-1.0));
        assert_eq!(
            unary(UnaryOp::Ceiling, Number::Dec128(Decimal::from_str("1.01").unwrap())),
            Number::Dec128(Decimal::from(2))
        );
        assert_eq!(unary(UnaryOp::Floor, Number::I32(-7)), Number::I32(-7));
    }

    #[test]
    fn roots() {
        assert_eq!(unary(UnaryOp::Sqrt, Number::U8(16)), Number::F64(4.0));
        assert_eq!(unary(UnaryOp::Sqrt, Number::F32(2.25)), Number::F32(1.5));
        assert!(unary(UnaryOp::Sqrt, Number::I32(-1)).is_nan());
    }
}
