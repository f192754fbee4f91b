//! Arithmetic over two concrete numbers.
//!
//! The kernel is chosen by the operands' classes: any decimal operand selects the decimal kernel,
//! otherwise any float operand selects the float kernel, otherwise both are integers. Every kernel
//! is total; overflow widens the result and division by zero yields NaN or a signed infinity.
mod compare;
mod decimal;
mod float;
mod integer;
mod unary;

pub use self::{
    compare::{compare, equals},
    unary::unary,
};

use crate::{kind::Class, number::Number, op::BinaryOp};

/// The five operations that select a kernel by operand class.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Arith {
    Add,
    Sub,
    Mul,
    Div,
    Rem,
}

pub fn binary(op: BinaryOp, x: Number, y: Number) -> Number {
    let arith = match op {
        BinaryOp::Add => Arith::Add,
        BinaryOp::Sub => Arith::Sub,
        BinaryOp::Mul => Arith::Mul,
        BinaryOp::Div => Arith::Div,
        BinaryOp::Mod => Arith::Rem,
        BinaryOp::Pow => return Number::F64(x.to_f64().powf(y.to_f64())),
        BinaryOp::Min => return compare::min(x, y),
        BinaryOp::Max => return compare::max(x, y),
    };
    let result = match (x.kind().class(), y.kind().class()) {
        (Class::Decimal, _) | (_, Class::Decimal) => decimal::binary(arith, x, y),
        (Class::Float, _) | (_, Class::Float) => float::binary(arith, x, y),
        _ => integer::binary(arith, x, y),
    };
    tracing::trace!(%op, %x, %y, %result, "binary");
    result
}

/// Result of dividing by an exact zero: NaN for `0 / 0`, otherwise infinity carrying the dividend's sign.
pub(crate) fn divide_by_zero(dividend: Number) -> Number {
    if dividend.is_zero() || dividend.is_nan() {
        Number::nan()
    } else if dividend.is_negative() {
        Number::F64(f64::NEG_INFINITY)
    } else {
        Number::F64(f64::INFINITY)
    }
}

#[allow(clippy::should_implement_trait)]
impl Number {
    pub fn add(self, other: Number) -> Number {
        binary(BinaryOp::Add, self, other)
    }

    pub fn sub(self, other: Number) -> Number {
        binary(BinaryOp::Sub, self, other)
    }

    pub fn mul(self, other: Number) -> Number {
        binary(BinaryOp::Mul, self, other)
    }

    pub fn div(self, other: Number) -> Number {
        binary(BinaryOp::Div, self, other)
    }

    pub fn modulo(self, other: Number) -> Number {
        binary(BinaryOp::Mod, self, other)
    }

    pub fn pow(self, other: Number) -> Number {
        binary(BinaryOp::Pow, self, other)
    }

    pub fn min(self, other: Number) -> Number {
        binary(BinaryOp::Min, self, other)
    }

    pub fn max(self, other: Number) -> Number {
        binary(BinaryOp::Max, self, other)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    fn dec(s: &str) -> Number {
        Number::Dec128(Decimal::from_str(s).unwrap())
    }

    #[test]
    fn dispatch() {
        assert_eq!(Number::I32(2).add(Number::F32(0.5)), Number::F64(2.5));
        assert_eq!(Number::I16(2).add(Number::F32(0.5)), Number::F64(2.5));
        assert_eq!(Number::I64(i64::MAX).add(Number::F64(3.0)), dec("9223372036854775810"));
        assert_eq!(Number::F64(0.5).add(dec("1.25")), dec("1.75"));
        assert_eq!(Number::U8(200).add(Number::U8(100)), Number::U16(300));
        assert_eq!(Number::I8(2).pow(Number::I8(10)), Number::F64(1024.0));
        assert_eq!(Number::U8(3).min(Number::I64(-1)), Number::I64(-1));
        assert_eq!(Number::U8(3).max(Number::F32(2.5)), Number::U8(3));
    }

    #[test]
    fn zero_divisors() {
        assert!(Number::I32(0).div(Number::I32(0)).is_nan());
        assert_eq!(Number::I32(-4).div(Number::U8(0)), Number::F64(f64::NEG_INFINITY));
        assert_eq!(dec("1.5").div(dec("0")), Number::F64(f64::INFINITY));
        assert!(dec("1.5").modulo(Number::I8(0)).is_nan());
        assert_eq!(Number::F32(1.0).div(Number::F32(-0.0)), Number::F64(f64::NEG_INFINITY));
    }
}
