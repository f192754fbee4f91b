//! Entry points that take caller operands through coercion and into the kernels.
//!
//! Every operation exists in two shapes: `evaluate*` returns the result or the reason there is none,
//! while `apply*` hands the result to a [`Sink`] and reports success as a `bool`.
use crate::{
    error::MathError,
    kernel,
    kind::NumericKind,
    number::Number,
    op::{BinaryOp, UnaryOp},
    operand::{Operand, Reduce},
    sink::{Output, Sink},
};
use std::cmp::Ordering;

/// Combine two concrete numbers. Always succeeds.
pub fn apply<S: Sink + ?Sized>(op: BinaryOp, x: Number, y: Number, sink: &mut S) -> bool {
    sink.accept(Output::Number(kernel::binary(op, x, y)));
    true
}

/// Combine two operands, reading textual ones with `hint` or, lacking that, the other operand's kind.
pub fn apply_operands<S: Sink + ?Sized>(
    op: BinaryOp,
    x: Operand<'_>,
    y: Operand<'_>,
    hint: Option<NumericKind>,
    sink: &mut S,
) -> bool {
    deliver(evaluate(op, x, y, hint), sink)
}

/// Combine two host values; values that do not reduce to an operand make the call fail.
pub fn apply_values<X, Y, S>(op: BinaryOp, x: &X, y: &Y, hint: Option<NumericKind>, sink: &mut S) -> bool
where
    X: Reduce + ?Sized,
    Y: Reduce + ?Sized,
    S: Sink + ?Sized,
{
    deliver(evaluate_values(op, x, y, hint), sink)
}

pub fn apply_unary<S: Sink + ?Sized>(op: UnaryOp, x: Operand<'_>, hint: Option<NumericKind>, sink: &mut S) -> bool {
    deliver(evaluate_unary(op, x, hint), sink)
}

fn deliver<S: Sink + ?Sized>(result: Result<Output, MathError>, sink: &mut S) -> bool {
    match result {
        Ok(output) => {
            sink.accept(output);
            true
        }
        Err(_) => false,
    }
}

pub fn evaluate(op: BinaryOp, x: Operand<'_>, y: Operand<'_>, hint: Option<NumericKind>) -> Result<Output, MathError> {
    if x == Operand::Null || y == Operand::Null {
        return Ok(Output::Null);
    }
    // the implicit hint is the other side's kind as given, so two texts are read independently
    let x_hint = hint.or_else(|| y.numeric_kind());
    let y_hint = hint.or_else(|| x.numeric_kind());
    // read both sides first: a null on either side wins over unreadable text on the other
    match (x.to_number(x_hint), y.to_number(y_hint)) {
        (Ok(None), _) | (_, Ok(None)) => Ok(Output::Null),
        (Ok(Some(a)), Ok(Some(b))) => Ok(Output::Number(kernel::binary(op, a, b))),
        (Err(e), _) | (_, Err(e)) => {
            tracing::debug!(%op, error = %e, "no kernel for operands");
            Err(e)
        }
    }
}

pub fn evaluate_values<X, Y>(op: BinaryOp, x: &X, y: &Y, hint: Option<NumericKind>) -> Result<Output, MathError>
where
    X: Reduce + ?Sized,
    Y: Reduce + ?Sized,
{
    let reduced = x.reduce().and_then(|x| Ok((x, y.reduce()?)));
    match reduced {
        Ok((x, y)) => evaluate(op, x, y, hint),
        Err(e) => {
            tracing::debug!(%op, error = %e, "operand does not reduce");
            Err(e)
        }
    }
}

pub fn evaluate_unary(op: UnaryOp, x: Operand<'_>, hint: Option<NumericKind>) -> Result<Output, MathError> {
    Ok(match x.to_number(hint)? {
        Some(n) => Output::Number(kernel::unary(op, n)),
        None => Output::Null,
    })
}

/// Three-way comparison. Two texts compare as strings; any other pair compares numerically with
/// null sorting first.
pub fn compare(x: Operand<'_>, y: Operand<'_>, case_insensitive: bool) -> Result<Ordering, MathError> {
    if let (Operand::Text(a), Operand::Text(b)) = (x, y) {
        return Ok(compare_text(a, b, case_insensitive));
    }
    Ok(match (x.to_number(None)?, y.to_number(None)?) {
        (Some(a), Some(b)) => kernel::compare(a, b),
        (None, None) => Ordering::Equal,
        (None, Some(_)) => Ordering::Less,
        (Some(_), None) => Ordering::Greater,
    })
}

pub fn equals(x: Operand<'_>, y: Operand<'_>) -> Result<bool, MathError> {
    if let (Operand::Text(a), Operand::Text(b)) = (x, y) {
        return Ok(a == b);
    }
    Ok(match (x.to_number(None)?, y.to_number(None)?) {
        (Some(a), Some(b)) => kernel::equals(a, b),
        (a, b) => a.is_none() && b.is_none(),
    })
}

fn compare_text(a: &str, b: &str, case_insensitive: bool) -> Ordering {
    if case_insensitive {
        a.chars()
            .flat_map(char::to_uppercase)
            .cmp(b.chars().flat_map(char::to_uppercase))
    } else {
        a.cmp(b)
    }
}
