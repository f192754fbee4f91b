//! Reading numbers out of text.
//!
//! Text is read with a fixed, culture-independent numeral grammar:
//!
//! ```text
//! numeral  := ws* sign? digits ("." fraction)? sign? ws*
//! digits   := digit (digit | ",")*
//! fraction := digit*
//! ```
//!
//! At most one sign is allowed, leading or trailing. A hinted kind is tried first; failing that,
//! text without a `.` walks `i32 → u32 → i64 → u64` and then the float symbols `Infinity`,
//! `-Infinity` and `NaN`, while text with a `.` walks `f64 → dec128` and then `true`/`false`.
use crate::{error::MathError, kind::NumericKind, number::Number};
use rust_decimal::Decimal;
use std::str::FromStr;

/// Outcome of coercing a textual operand.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Coerced {
    Number(Number),
    Null,
}

const INTEGER_LADDER: [NumericKind; 4] = [NumericKind::I32, NumericKind::U32, NumericKind::I64, NumericKind::U64];
const FRACTION_LADDER: [NumericKind; 2] = [NumericKind::F64, NumericKind::Dec128];

pub fn coerce(text: &str, hint: Option<NumericKind>) -> Result<Coerced, MathError> {
    if text.trim().eq_ignore_ascii_case("null") {
        return Ok(Coerced::Null);
    }
    let numeral = Numeral::parse(text);

    if let Some(kind) = hint {
        if let Some(number) = read_as(text, numeral.as_ref(), kind) {
            return Ok(Coerced::Number(number));
        }
    }

    let found = if text.contains('.') {
        FRACTION_LADDER
            .iter()
            .find_map(|kind| read_as(text, numeral.as_ref(), *kind))
            .or_else(|| boolean(text))
    } else {
        INTEGER_LADDER
            .iter()
            .find_map(|kind| read_as(text, numeral.as_ref(), *kind))
            .or_else(|| special(text, hint.filter(|k| *k == NumericKind::F32).unwrap_or(NumericKind::F64)))
    };

    match found {
        Some(number) => {
            tracing::trace!(text, kind = %number.kind(), "coerced");
            Ok(Coerced::Number(number))
        }
        None => {
            tracing::debug!(text, hint = ?hint, "text does not denote a number");
            Err(MathError::NotANumber(text.to_owned()))
        }
    }
}

/// Read `text` as exactly the given kind.
fn read_as(text: &str, numeral: Option<&Numeral<'_>>, kind: NumericKind) -> Option<Number> {
    if kind.is_float() {
        if let Some(number) = special(text, kind) {
            return Some(number);
        }
    }
    let numeral = numeral?;
    match kind {
        NumericKind::F32 => f32::from_str(&numeral.canonical()).ok().map(Number::F32),
        NumericKind::F64 => f64::from_str(&numeral.canonical()).ok().map(Number::F64),
        NumericKind::Dec128 => Decimal::from_str(&numeral.canonical()).ok().map(Number::Dec128),
        kind => Number::from_integer(numeral.integer()?, kind),
    }
}

fn special(text: &str, kind: NumericKind) -> Option<Number> {
    let text = text.trim();
    let value = if text.eq_ignore_ascii_case("infinity") {
        f64::INFINITY
    } else if text.eq_ignore_ascii_case("-infinity") {
        f64::NEG_INFINITY
    } else if text.eq_ignore_ascii_case("nan") {
        f64::NAN
    } else {
        return None;
    };
    match kind {
        NumericKind::F32 => Some(Number::F32(value as f32)),
        _ => Some(Number::F64(value)),
    }
}

fn boolean(text: &str) -> Option<Number> {
    let text = text.trim();
    if text.eq_ignore_ascii_case("true") {
        Some(Number::U32(1))
    } else if text.eq_ignore_ascii_case("false") {
        Some(Number::U32(0))
    } else {
        None
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Numeral<'a> {
    negative: bool,
    /// integral digits with group separators removed
    digits: String,
    fraction: &'a str,
}

impl<'a> Numeral<'a> {
    fn parse(text: &'a str) -> Option<Self> {
        let s = text.trim();
        let (negative, s) = if let Some(rest) = s.strip_prefix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_prefix('+') {
            (false, rest)
        } else if let Some(rest) = s.strip_suffix('-') {
            (true, rest)
        } else if let Some(rest) = s.strip_suffix('+') {
            (false, rest)
        } else {
            (false, s)
        };
        let (integral, fraction) = s.split_once('.').unwrap_or((s, ""));

        if !fraction.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        if integral.starts_with(',') || !integral.bytes().all(|b| b.is_ascii_digit() || b == b',') {
            return None;
        }
        let digits: String = integral.chars().filter(|c| *c != ',').collect();
        if digits.is_empty() && fraction.is_empty() {
            return None;
        }
        Some(Self {
            negative,
            digits,
            fraction,
        })
    }

    /// The exact integer value, if the fraction is absent or all zeros.
    fn integer(&self) -> Option<i128> {
        if self.fraction.bytes().any(|b| b != b'0') {
            return None;
        }
        let magnitude = if self.digits.is_empty() {
            0
        } else {
            i128::from_str(&self.digits).ok()?
        };
        Some(if self.negative { -magnitude } else { magnitude })
    }

    /// Plain `-?d+(.d+)?` rendering understood by the standard float and decimal parsers.
    fn canonical(&self) -> String {
        let mut s = String::with_capacity(self.digits.len() + self.fraction.len() + 3);
        if self.negative {
            s.push('-');
        }
        s.push_str(if self.digits.is_empty() { "0" } else { &self.digits });
        if !self.fraction.is_empty() {
            s.push('.');
            s.push_str(self.fraction);
        }
        s
    }
}
