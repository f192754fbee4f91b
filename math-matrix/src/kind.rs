//! The closed set of numeric representations an arithmetic kernel can see.
//!
//! Every kind knows its width and class; the widening ladder used when an exact result does not fit
//! its home kind is expressed through [`NumericKind::wider`].
use crate::error::MathError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Class {
    Unsigned,
    Signed,
    Float,
    Decimal,
}

macro_rules! numeric_kinds {
    ($($kind:ident: $name:literal, $bits:literal, $class:ident [$($alias:literal)*],)+) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum NumericKind {
            $($(#[serde(alias = $alias)])* #[serde(rename = $name)] $kind,)*
        }

        impl NumericKind {
            pub const ALL: &'static [NumericKind] = &[$(NumericKind::$kind,)*];

            pub fn as_str(self) -> &'static str {
                match self {
                    $(NumericKind::$kind => $name,)*
                }
            }

            pub fn bits(self) -> u32 {
                match self {
                    $(NumericKind::$kind => $bits,)*
                }
            }

            pub fn class(self) -> Class {
                match self {
                    $(NumericKind::$kind => Class::$class,)*
                }
            }
        }

        impl FromStr for NumericKind {
            type Err = MathError;
            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s.trim().to_ascii_lowercase().as_str() {
                    $($name $(| $alias)* => Ok(NumericKind::$kind),)*
                    _ => Err(MathError::UnknownKind(s.to_owned())),
                }
            }
        }
    };
}

numeric_kinds! {
    U8: "u8", 8, Unsigned ["byte"],
    U16: "u16", 16, Unsigned ["ushort"],
    U32: "u32", 32, Unsigned ["uint"],
    U64: "u64", 64, Unsigned ["ulong"],
    I8: "i8", 8, Signed ["sbyte"],
    I16: "i16", 16, Signed ["short"],
    I32: "i32", 32, Signed ["int"],
    I64: "i64", 64, Signed ["long"],
    F32: "f32", 32, Float ["float" "single"],
    F64: "f64", 64, Float ["double"],
    Dec128: "dec128", 128, Decimal ["decimal"],
}

impl NumericKind {
    pub fn is_integer(self) -> bool {
        matches!(self.class(), Class::Unsigned | Class::Signed)
    }

    pub fn is_float(self) -> bool {
        self.class() == Class::Float
    }

    /// The integer kind of the given width and signedness, if there is one.
    pub fn integer(bits: u32, signed: bool) -> Option<Self> {
        use NumericKind::*;
        match (bits, signed) {
            (8, false) => Some(U8),
            (16, false) => Some(U16),
            (32, false) => Some(U32),
            (64, false) => Some(U64),
            (8, true) => Some(I8),
            (16, true) => Some(I16),
            (32, true) => Some(I32),
            (64, true) => Some(I64),
            _ => None,
        }
    }

    /// The signed integer kind of the same width; non-integer kinds are returned unchanged.
    pub fn signed(self) -> Self {
        match self.class() {
            Class::Unsigned => Self::integer(self.bits(), true).unwrap_or(self),
            _ => self,
        }
    }

    /// The unsigned integer kind of the same width; non-integer kinds are returned unchanged.
    pub fn unsigned(self) -> Self {
        match self.class() {
            Class::Signed => Self::integer(self.bits(), false).unwrap_or(self),
            _ => self,
        }
    }

    /// Next rung of the widening ladder.
    ///
    /// ```text
    /// u8 → u16 → u32 → u64 → dec128 → f64
    /// i8 → i16 → i32 → i64 → dec128 → f64
    /// f32 → f64
    /// ```
    pub fn wider(self) -> Option<Self> {
        use NumericKind::*;
        match self {
            U8 => Some(U16),
            U16 => Some(U32),
            U32 => Some(U64),
            I8 => Some(I16),
            I16 => Some(I32),
            I32 => Some(I64),
            U64 | I64 => Some(Dec128),
            Dec128 | F32 => Some(F64),
            F64 => None,
        }
    }

    /// Inclusive value range of an integer kind.
    pub fn range(self) -> Option<(i128, i128)> {
        use NumericKind::*;
        match self {
            U8 => Some((0, u8::MAX.into())),
            U16 => Some((0, u16::MAX.into())),
            U32 => Some((0, u32::MAX.into())),
            U64 => Some((0, u64::MAX.into())),
            I8 => Some((i8::MIN.into(), i8::MAX.into())),
            I16 => Some((i16::MIN.into(), i16::MAX.into())),
            I32 => Some((i32::MIN.into(), i32::MAX.into())),
            I64 => Some((i64::MIN.into(), i64::MAX.into())),
            F32 | F64 | Dec128 => None,
        }
    }
}

impl fmt::Display for NumericKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(any(test, feature = "arb"))]
impl quickcheck::Arbitrary for NumericKind {
    fn arbitrary(g: &mut quickcheck::Gen) -> Self {
        *g.choose(Self::ALL).unwrap()
    }
}

/// What an operand turned out to be at the operand boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, derive_more::Display)]
pub enum OperandKind {
    #[display(fmt = "{}", _0)]
    Number(NumericKind),
    #[display(fmt = "text")]
    Text,
    #[display(fmt = "null")]
    Null,
}

impl OperandKind {
    pub fn numeric(self) -> Option<NumericKind> {
        match self {
            OperandKind::Number(kind) => Some(kind),
            _ => None,
        }
    }
}
