//! Operands as they arrive from the caller, before any arithmetic is chosen.
use crate::{
    coerce::{coerce, Coerced},
    error::MathError,
    kind::{NumericKind, OperandKind},
    number::Number,
};
use rust_decimal::Decimal;

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Operand<'a> {
    Number(Number),
    Text(&'a str),
    Null,
}

impl<'a> Operand<'a> {
    pub fn kind(&self) -> OperandKind {
        resolve(self)
    }

    pub fn numeric_kind(&self) -> Option<NumericKind> {
        self.kind().numeric()
    }

    /// Turn this operand into a number, reading text with the given hint. `None` means null.
    pub fn to_number(&self, hint: Option<NumericKind>) -> Result<Option<Number>, MathError> {
        match self {
            Operand::Number(n) => Ok(Some(*n)),
            Operand::Null => Ok(None),
            Operand::Text(text) => match coerce(text, hint)? {
                Coerced::Number(n) => Ok(Some(n)),
                Coerced::Null => Ok(None),
            },
        }
    }
}

/// Tag an operand with its kind.
pub fn resolve(operand: &Operand<'_>) -> OperandKind {
    match operand {
        Operand::Number(n) => OperandKind::Number(n.kind()),
        Operand::Text(_) => OperandKind::Text,
        Operand::Null => OperandKind::Null,
    }
}

macro_rules! operand_from {
    ($($t:ty),*) => {
        $(
            impl<'a> From<$t> for Operand<'a> {
                fn from(value: $t) -> Self {
                    Operand::Number(value.into())
                }
            }
        )*
    };
}

operand_from!(Number, u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, Decimal);

impl<'a> From<&'a str> for Operand<'a> {
    fn from(text: &'a str) -> Self {
        Operand::Text(text)
    }
}

/// Host values that can take part in arithmetic.
pub trait Reduce {
    fn reduce(&self) -> Result<Operand<'_>, MathError>;
}

macro_rules! reduce_number {
    ($($t:ty),*) => {
        $(
            impl Reduce for $t {
                fn reduce(&self) -> Result<Operand<'_>, MathError> {
                    Ok(Operand::Number(Number::from(*self)))
                }
            }
        )*
    };
}

reduce_number!(u8, u16, u32, u64, i8, i16, i32, i64, f32, f64, Decimal);

impl Reduce for Number {
    fn reduce(&self) -> Result<Operand<'_>, MathError> {
        Ok(Operand::Number(*self))
    }
}

impl Reduce for usize {
    fn reduce(&self) -> Result<Operand<'_>, MathError> {
        Ok(Operand::Number(Number::U64(*self as u64)))
    }
}

impl Reduce for isize {
    fn reduce(&self) -> Result<Operand<'_>, MathError> {
        Ok(Operand::Number(Number::I64(*self as i64)))
    }
}

impl Reduce for bool {
    fn reduce(&self) -> Result<Operand<'_>, MathError> {
        Ok(Operand::Number(Number::U8(u8::from(*self))))
    }
}

impl Reduce for char {
    fn reduce(&self) -> Result<Operand<'_>, MathError> {
        match self.to_digit(10) {
            Some(digit) => Ok(Operand::Number(Number::U8(digit as u8))),
            None => Err(MathError::Unsupported(format!("char `{}`", self))),
        }
    }
}

impl Reduce for str {
    fn reduce(&self) -> Result<Operand<'_>, MathError> {
        Ok(Operand::Text(self))
    }
}

impl Reduce for String {
    fn reduce(&self) -> Result<Operand<'_>, MathError> {
        Ok(Operand::Text(self.as_str()))
    }
}

impl<T: Reduce> Reduce for Option<T> {
    fn reduce(&self) -> Result<Operand<'_>, MathError> {
        match self {
            Some(value) => value.reduce(),
            None => Ok(Operand::Null),
        }
    }
}

impl<T: Reduce + ?Sized> Reduce for &T {
    fn reduce(&self) -> Result<Operand<'_>, MathError> {
        (**self).reduce()
    }
}

#[cfg(feature = "json")]
impl Reduce for serde_json::Value {
    fn reduce(&self) -> Result<Operand<'_>, MathError> {
        use serde_json::Value;
        match self {
            Value::Null => Ok(Operand::Null),
            Value::Bool(b) => b.reduce(),
            Value::Number(n) => {
                if let Some(v) = n.as_i64() {
                    Ok(Operand::Number(Number::I64(v)))
                } else if let Some(v) = n.as_u64() {
                    Ok(Operand::Number(Number::U64(v)))
                } else {
                    Ok(Operand::Number(Number::F64(n.as_f64().unwrap_or(f64::NAN))))
                }
            }
            Value::String(s) => Ok(Operand::Text(s.as_str())),
            Value::Array(_) => Err(MathError::Unsupported("array".to_owned())),
            Value::Object(_) => Err(MathError::Unsupported("object".to_owned())),
        }
    }
}
