use crate::number::Number;
use num_traits::FromPrimitive;
use rust_decimal::Decimal;
use std::cmp::Ordering;

/// 2^64, the first magnitude no integer kind can hold.
const TWO_POW_64: f64 = 18_446_744_073_709_551_616.0;

/// Total order across kinds. NaN sorts below every other number and equal to itself.
///
/// Integer pairs and integer/float pairs are compared exactly; comparisons involving a decimal and
/// a float are made at decimal precision.
pub fn compare(x: Number, y: Number) -> Ordering {
    match (x.is_nan(), y.is_nan()) {
        (true, true) => Ordering::Equal,
        (true, false) => Ordering::Less,
        (false, true) => Ordering::Greater,
        (false, false) => ordered(x, y),
    }
}

/// Numeric equality across kinds; NaN is not equal to anything, itself included.
pub fn equals(x: Number, y: Number) -> bool {
    !x.is_nan() && !y.is_nan() && compare(x, y) == Ordering::Equal
}

/// The lesser operand, keeping its kind; ties go to `x` and NaN wins.
pub(crate) fn min(x: Number, y: Number) -> Number {
    if x.is_nan() {
        x
    } else if y.is_nan() || compare(y, x) == Ordering::Less {
        y
    } else {
        x
    }
}

pub(crate) fn max(x: Number, y: Number) -> Number {
    if x.is_nan() {
        x
    } else if y.is_nan() || compare(y, x) == Ordering::Greater {
        y
    } else {
        x
    }
}

fn ordered(x: Number, y: Number) -> Ordering {
    match (x, y) {
        (Number::F32(_) | Number::F64(_), Number::F32(_) | Number::F64(_)) => {
            x.to_f64().partial_cmp(&y.to_f64()).unwrap_or(Ordering::Equal)
        }
        (Number::F32(_) | Number::F64(_), other) => float_to_exact(x.to_f64(), other),
        (other, Number::F32(_) | Number::F64(_)) => float_to_exact(y.to_f64(), other).reverse(),
        _ => match (x.integer(), y.integer()) {
            (Some(a), Some(b)) => a.cmp(&b),
            _ => match (x.to_decimal(), y.to_decimal()) {
                (Some(a), Some(b)) => a.cmp(&b),
                _ => Ordering::Equal,
            },
        },
    }
}

/// Compare a non-NaN float with an integer or decimal.
fn float_to_exact(f: f64, exact: Number) -> Ordering {
    if f.is_infinite() {
        return if f > 0.0 { Ordering::Greater } else { Ordering::Less };
    }
    match exact {
        Number::Dec128(d) => match Decimal::from_f64(f) {
            Some(df) => df.cmp(&d),
            // beyond the decimal range
            None if f > 0.0 => Ordering::Greater,
            None => Ordering::Less,
        },
        other => match other.integer() {
            Some(i) => {
                let whole = f.trunc();
                if whole >= TWO_POW_64 {
                    Ordering::Greater
                } else if whole <= -TWO_POW_64 {
                    Ordering::Less
                } else {
                    (whole as i128)
                        .cmp(&i)
                        .then_with(|| (f - whole).partial_cmp(&0.0).unwrap_or(Ordering::Equal))
                }
            }
            None => Ordering::Equal,
        },
    }
}
