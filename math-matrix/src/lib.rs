//! Overflow-safe arithmetic over dynamically typed numeric operands.
//!
//! Operands of any of the eleven numeric kinds (or text, or null) are combined so that no result
//! is ever silently truncated: integer results that outgrow their kind move up a widening ladder
//! through 128-bit decimal to `f64`, and division by zero yields NaN or a signed infinity.
//!
//! ```
//! use math_matrix::{evaluate, BinaryOp, Number, Operand, Output};
//!
//! let sum = evaluate(BinaryOp::Add, Operand::from(u64::MAX), Operand::from(1u64), None).unwrap();
//! assert_eq!(sum.to_string(), "18446744073709551616");
//!
//! let diff = evaluate(BinaryOp::Sub, Operand::Text("5"), Operand::from(10u32), None).unwrap();
//! assert_eq!(diff, Output::Number(Number::I32(-5)));
//! ```
pub mod coerce;
pub mod error;
pub mod kernel;
pub mod kind;
pub mod matrix;
pub mod number;
pub mod op;
pub mod operand;
pub mod sink;

pub use self::{
    coerce::{coerce, Coerced},
    error::MathError,
    kind::{Class, NumericKind, OperandKind},
    matrix::{
        apply, apply_operands, apply_unary, apply_values, compare, equals, evaluate, evaluate_unary,
        evaluate_values,
    },
    number::Number,
    op::{BinaryOp, UnaryOp},
    operand::{resolve, Operand, Reduce},
    sink::{from_fn, Output, Sink},
};
pub use rust_decimal::Decimal;
