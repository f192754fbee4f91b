use crate::number::Number;
use std::fmt;

/// The single result of one pipeline call.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Output {
    Number(Number),
    Null,
}

impl Output {
    pub fn number(self) -> Option<Number> {
        match self {
            Output::Number(n) => Some(n),
            Output::Null => None,
        }
    }
}

impl From<Number> for Output {
    fn from(n: Number) -> Self {
        Output::Number(n)
    }
}

impl fmt::Display for Output {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Output::Number(n) => n.fmt(f),
            Output::Null => f.write_str("null"),
        }
    }
}

/// Receives the result of a successful call, exactly once; failed calls never reach the sink.
pub trait Sink {
    fn accept(&mut self, value: Output);
}

impl Sink for Option<Output> {
    fn accept(&mut self, value: Output) {
        *self = Some(value);
    }
}

impl Sink for Vec<Output> {
    fn accept(&mut self, value: Output) {
        self.push(value);
    }
}

impl<S: Sink + ?Sized> Sink for &mut S {
    fn accept(&mut self, value: Output) {
        (**self).accept(value)
    }
}

pub struct FromFn<F>(F);

/// A sink that hands each result to a closure.
pub fn from_fn<F: FnMut(Output)>(f: F) -> FromFn<F> {
    FromFn(f)
}

impl<F: FnMut(Output)> Sink for FromFn<F> {
    fn accept(&mut self, value: Output) {
        (self.0)(value)
    }
}
