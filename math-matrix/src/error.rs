use derive_more::{Display, Error};

#[derive(Debug, Display, Error, Clone, PartialEq, Eq)]
pub enum MathError {
    #[display(fmt = "`{}` is not a number", _0)]
    NotANumber(#[error(ignore)] String),
    #[display(fmt = "values of type {} cannot take part in arithmetic", _0)]
    Unsupported(#[error(ignore)] String),
    #[display(fmt = "unknown numeric kind `{}`", _0)]
    UnknownKind(#[error(ignore)] String),
    #[display(fmt = "unknown operator `{}`", _0)]
    UnknownOperator(#[error(ignore)] String),
}
