use crate::kind::NumericKind;
use num_traits::{FromPrimitive, ToPrimitive};
use rust_decimal::Decimal;
use std::{convert::TryFrom, fmt};

/// A concrete numeric value tagged with its representation.
///
/// Equality is structural: `U8(1)` and `I32(1)` are different values, and `F64(NaN)` is not equal
/// to itself. Use [`crate::kernel::compare`] for value comparison across kinds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Number {
    U8(u8),
    U16(u16),
    U32(u32),
    U64(u64),
    I8(i8),
    I16(i16),
    I32(i32),
    I64(i64),
    F32(f32),
    F64(f64),
    Dec128(Decimal),
}

macro_rules! number_from {
    ($($kind:ident: $t:ty,)+) => {
        $(
            impl From<$t> for Number {
                fn from(value: $t) -> Self {
                    Number::$kind(value)
                }
            }
        )*

        impl Number {
            pub fn kind(&self) -> NumericKind {
                match self {
                    $(Number::$kind(_) => NumericKind::$kind,)*
                }
            }
        }
    };
}

number_from! {
    U8: u8,
    U16: u16,
    U32: u32,
    U64: u64,
    I8: i8,
    I16: i16,
    I32: i32,
    I64: i64,
    F32: f32,
    F64: f64,
    Dec128: Decimal,
}

impl Number {
    pub fn nan() -> Self {
        Number::F64(f64::NAN)
    }

    /// The exact value of an integer-kind number.
    pub fn integer(&self) -> Option<i128> {
        match *self {
            Number::U8(v) => Some(v.into()),
            Number::U16(v) => Some(v.into()),
            Number::U32(v) => Some(v.into()),
            Number::U64(v) => Some(v.into()),
            Number::I8(v) => Some(v.into()),
            Number::I16(v) => Some(v.into()),
            Number::I32(v) => Some(v.into()),
            Number::I64(v) => Some(v.into()),
            Number::F32(_) | Number::F64(_) | Number::Dec128(_) => None,
        }
    }

    /// Store an exact value in the given kind, if the kind can hold it exactly.
    ///
    /// Float kinds accept the value only when the conversion does not round.
    pub fn from_integer(value: i128, kind: NumericKind) -> Option<Self> {
        match kind {
            NumericKind::U8 => u8::try_from(value).ok().map(Number::U8),
            NumericKind::U16 => u16::try_from(value).ok().map(Number::U16),
            NumericKind::U32 => u32::try_from(value).ok().map(Number::U32),
            NumericKind::U64 => u64::try_from(value).ok().map(Number::U64),
            NumericKind::I8 => i8::try_from(value).ok().map(Number::I8),
            NumericKind::I16 => i16::try_from(value).ok().map(Number::I16),
            NumericKind::I32 => i32::try_from(value).ok().map(Number::I32),
            NumericKind::I64 => i64::try_from(value).ok().map(Number::I64),
            NumericKind::Dec128 => Decimal::try_from_i128_with_scale(value, 0).ok().map(Number::Dec128),
            NumericKind::F32 => {
                let v = value as f32;
                (v.is_finite() && v as i128 == value).then(|| Number::F32(v))
            }
            NumericKind::F64 => {
                let v = value as f64;
                (v.is_finite() && v as i128 == value).then(|| Number::F64(v))
            }
        }
    }

    /// Nearest `f64`; exact for every integer kind up to 53 bits and for `f32`.
    pub fn to_f64(&self) -> f64 {
        match *self {
            Number::F32(v) => v.into(),
            Number::F64(v) => v,
            Number::Dec128(d) => d.to_f64().unwrap_or(f64::NAN),
            other => other.integer().map(|v| v as f64).unwrap_or(f64::NAN),
        }
    }

    pub fn to_f32(&self) -> f32 {
        match *self {
            Number::F32(v) => v,
            other => other.to_f64() as f32,
        }
    }

    /// The decimal value of this number; `None` for non-finite floats and floats beyond decimal range.
    pub fn to_decimal(&self) -> Option<Decimal> {
        match *self {
            Number::Dec128(d) => Some(d),
            Number::F32(v) => Decimal::from_f32(v),
            Number::F64(v) => Decimal::from_f64(v),
            other => other.integer().and_then(|v| Decimal::try_from_i128_with_scale(v, 0).ok()),
        }
    }

    pub fn is_nan(&self) -> bool {
        match self {
            Number::F32(v) => v.is_nan(),
            Number::F64(v) => v.is_nan(),
            _ => false,
        }
    }

    pub fn is_zero(&self) -> bool {
        match *self {
            Number::F32(v) => v == 0.0,
            Number::F64(v) => v == 0.0,
            Number::Dec128(d) => d.is_zero(),
            other => other.integer() == Some(0),
        }
    }

    /// Strictly below zero; `-0.0` and NaN are not negative.
    pub fn is_negative(&self) -> bool {
        match *self {
            Number::F32(v) => v < 0.0,
            Number::F64(v) => v < 0.0,
            Number::Dec128(d) => d.is_sign_negative() && !d.is_zero(),
            other => other.integer().map(|v| v < 0).unwrap_or(false),
        }
    }
}

/// Rendering that [`crate::coerce::coerce`] reads back into the same value when hinted with its kind.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::U8(v) => write!(f, "{}", v),
            Number::U16(v) => write!(f, "{}", v),
            Number::U32(v) => write!(f, "{}", v),
            Number::U64(v) => write!(f, "{}", v),
            Number::I8(v) => write!(f, "{}", v),
            Number::I16(v) => write!(f, "{}", v),
            Number::I32(v) => write!(f, "{}", v),
            Number::I64(v) => write!(f, "{}", v),
            Number::F32(v) => write_float(f, f64::from(*v), &v.to_string()),
            Number::F64(v) => write_float(f, *v, &v.to_string()),
            Number::Dec128(d) => write!(f, "{}", d),
        }
    }
}

fn write_float(f: &mut fmt::Formatter<'_>, value: f64, digits: &str) -> fmt::Result {
    if value.is_nan() {
        f.write_str("NaN")
    } else if value == f64::INFINITY {
        f.write_str("Infinity")
    } else if value == f64::NEG_INFINITY {
        f.write_str("-Infinity")
    } else {
        f.write_str(digits)
    }
}

#[cfg(any(test, feature = "arb"))]
impl quickcheck::Arbitrary for Number {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        use quickcheck::Arbitrary;
        match NumericKind::arbitrary(g) {
            NumericKind::U8 => Number::U8(u8::arbitrary(g)),
            NumericKind::U16 => Number::U16(u16::arbitrary(g)),
            NumericKind::U32 => Number::U32(u32::arbitrary(g)),
            NumericKind::U64 => Number::U64(u64::arbitrary(g)),
            NumericKind::I8 => Number::I8(i8::arbitrary(g)),
            NumericKind::I16 => Number::I16(i16::arbitrary(g)),
            NumericKind::I32 => Number::I32(i32::arbitrary(g)),
            NumericKind::I64 => Number::I64(i64::arbitrary(g)),
            NumericKind::F32 => Number::F32(f32::arbitrary(g)),
            NumericKind::F64 => Number::F64(f64::arbitrary(g)),
            NumericKind::Dec128 => Number::Dec128(Decimal::new(i64::arbitrary(g), u32::arbitrary(g) % 29)),
        }
    }
}
