use super::{divide_by_zero, float, Arith};
use crate::number::Number;
use rust_decimal::Decimal;

/// 128-bit decimal arithmetic. Operands that have no decimal value (non-finite or out-of-range
/// floats) and results that overflow the decimal range fall back to `f64`.
pub(crate) fn binary(op: Arith, x: Number, y: Number) -> Number {
    let (a, b) = match (x.to_decimal(), y.to_decimal()) {
        (Some(a), Some(b)) => (a, b),
        _ => return Number::F64(float::arith(op, x.to_f64(), y.to_f64())),
    };
    let exact = match op {
        Arith::Add => a.checked_add(b),
        Arith::Sub => a.checked_sub(b),
        Arith::Mul => a.checked_mul(b),
        Arith::Div if b.is_zero() => return divide_by_zero(x),
        Arith::Div => a.checked_div(b),
        Arith::Rem if b.is_zero() => return Number::nan(),
        Arith::Rem => a.checked_rem(b),
    };
    match exact {
        Some(d) => Number::Dec128(d),
        None => {
            tracing::debug!(?op, %x, %y, "decimal overflow, falling back to f64");
            integral(op, a, b).unwrap_or_else(|| Number::F64(float::arith(op, x.to_f64(), y.to_f64())))
        }
    }
}

/// Overflowing integral operands still round only once, when their exact result fits `i128`.
fn integral(op: Arith, a: Decimal, b: Decimal) -> Option<Number> {
    let whole = |d: Decimal| {
        let d = d.normalize();
        (d.scale() == 0).then(|| d.mantissa())
    };
    let (a, b) = (whole(a)?, whole(b)?);
    let exact = match op {
        Arith::Add => a.checked_add(b),
        Arith::Sub => a.checked_sub(b),
        Arith::Mul => a.checked_mul(b),
        Arith::Div | Arith::Rem => None,
    }?;
    Some(Number::F64(exact as f64))
}
