use math_matrix::{
    apply, coerce, kernel, BinaryOp, Coerced, Decimal, Number, NumericKind, Operand, Output, UnaryOp,
};
use num_bigint::BigInt;
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};
use quickcheck::{quickcheck, Arbitrary, Gen, TestResult};
use std::str::FromStr;

/// An arbitrary number of one of the eight integer kinds.
#[derive(Debug, Clone, Copy)]
struct Int(Number);

impl Arbitrary for Int {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = match g.choose(&[0u8, 1, 2, 3, 4, 5, 6, 7]).copied().unwrap_or(0) {
            0 => Number::U8(u8::arbitrary(g)),
            1 => Number::U16(u16::arbitrary(g)),
            2 => Number::U32(u32::arbitrary(g)),
            3 => Number::U64(u64::arbitrary(g)),
            4 => Number::I8(i8::arbitrary(g)),
            5 => Number::I16(i16::arbitrary(g)),
            6 => Number::I32(i32::arbitrary(g)),
            _ => Number::I64(i64::arbitrary(g)),
        };
        Int(n)
    }
}

/// An integral value of a non-integer kind: a finite `f32`, an `f64` or a `dec128`.
#[derive(Debug, Clone, Copy)]
struct Integral(Number);

impl Arbitrary for Integral {
    fn arbitrary(g: &mut Gen) -> Self {
        let n = match g.choose(&[0u8, 1, 2]).copied().unwrap_or(0) {
            0 => Number::F32(i32::arbitrary(g) as f32),
            1 => Number::F64((i64::arbitrary(g) >> 11) as f64),
            _ => Number::Dec128(Decimal::from(i64::arbitrary(g))),
        };
        Integral(n)
    }
}

fn big(n: Number) -> Option<BigInt> {
    match n {
        Number::F32(v) => (v.fract() == 0.0).then(|| BigInt::from_f32(v)).flatten(),
        Number::F64(v) => (v.fract() == 0.0).then(|| BigInt::from_f64(v)).flatten(),
        Number::Dec128(d) => {
            let d = d.normalize();
            (d.scale() == 0).then(|| BigInt::from(d.mantissa()))
        }
        n => n.integer().map(BigInt::from),
    }
}

fn run(op: BinaryOp, x: Number, y: Number) -> Number {
    let mut out = None;
    assert!(apply(op, x, y, &mut out));
    match out {
        Some(Output::Number(n)) => n,
        other => panic!("{:?} {} {:?} produced {:?}", x, op, y, other),
    }
}

/// The result equals the exact value when that fits a decimal, and is the nearest f64 otherwise.
fn exact_or_nearest(result: Number, exact: &BigInt) -> bool {
    let decimal_max = BigInt::from(Decimal::MAX.mantissa());
    if exact.abs() <= decimal_max {
        big(result).as_ref() == Some(exact)
    } else {
        matches!(result, Number::F64(v) if Some(v) == exact.to_f64())
    }
}

#[test]
fn no_silent_truncation() {
    fn prop(x: Int, y: Int) -> bool {
        let (a, b) = (big(x.0).unwrap(), big(y.0).unwrap());
        exact_or_nearest(run(BinaryOp::Add, x.0, y.0), &(&a + &b))
            && exact_or_nearest(run(BinaryOp::Sub, x.0, y.0), &(&a - &b))
            && exact_or_nearest(run(BinaryOp::Mul, x.0, y.0), &(&a * &b))
    }
    quickcheck(prop as fn(Int, Int) -> bool);
}

#[test]
fn no_silent_truncation_across_classes() {
    fn prop(x: Int, y: Integral) -> bool {
        let (a, b) = (big(x.0).unwrap(), big(y.0).unwrap());
        exact_or_nearest(run(BinaryOp::Add, x.0, y.0), &(&a + &b))
            && exact_or_nearest(run(BinaryOp::Add, y.0, x.0), &(&b + &a))
            && exact_or_nearest(run(BinaryOp::Sub, x.0, y.0), &(&a - &b))
            && exact_or_nearest(run(BinaryOp::Sub, y.0, x.0), &(&b - &a))
            && exact_or_nearest(run(BinaryOp::Mul, x.0, y.0), &(&a * &b))
    }
    quickcheck(prop as fn(Int, Integral) -> bool);
}

#[test]
fn floats_compute_in_f64() {
    let sum = run(BinaryOp::Add, Number::F32(16_777_216.0), Number::F32(1.0));
    assert_eq!(sum, Number::F64(16_777_217.0));
    let sum = run(BinaryOp::Add, Number::F32(f32::MAX), Number::F32(f32::MAX));
    assert!(sum.to_f64().is_finite());
    let sum = run(BinaryOp::Add, Number::I64(i64::MAX), Number::F64(3.0));
    assert_eq!(big(sum), Some(BigInt::from(i64::MAX) + 3));
}

#[test]
fn narrowest_home() {
    fn prop(x: Int, y: Int) -> bool {
        let sum = run(BinaryOp::Add, x.0, y.0);
        // never narrower than the wider operand, and integral results stay integral kinds up to 64 bits
        let wide = x.0.kind().bits().max(y.0.kind().bits());
        match sum.integer() {
            Some(_) => sum.kind().bits() >= wide,
            None => sum.kind() == NumericKind::Dec128,
        }
    }
    quickcheck(prop as fn(Int, Int) -> bool);
}

#[test]
fn quotients() {
    fn prop(x: Int, y: Int) -> TestResult {
        let (a, b) = (big(x.0).unwrap(), big(y.0).unwrap());
        if b.is_zero() {
            return TestResult::discard();
        }
        let q = run(BinaryOp::Div, x.0, y.0);
        if (&a % &b).is_zero() {
            TestResult::from_bool(big(q) == Some(&a / &b))
        } else if x.0.kind().bits() < 64 && y.0.kind().bits() < 64 {
            TestResult::from_bool(q == Number::F64(a.to_f64().unwrap() / b.to_f64().unwrap()))
        } else {
            TestResult::from_bool(q.kind() == NumericKind::Dec128)
        }
    }
    quickcheck(prop as fn(Int, Int) -> TestResult);
}

#[test]
fn modulo_sign() {
    fn prop(x: Int, y: Int) -> TestResult {
        let (a, b) = (big(x.0).unwrap(), big(y.0).unwrap());
        if a.is_zero() || b.is_zero() {
            return TestResult::discard();
        }
        let r = run(BinaryOp::Mod, x.0, y.0);
        let value = big(r).unwrap();
        TestResult::from_bool(
            r.kind() == x.0.kind() && value == &a % &b && (value.is_zero() || value.sign() == a.sign()),
        )
    }
    quickcheck(prop as fn(Int, Int) -> TestResult);
}

#[test]
fn zero_division() {
    fn prop(x: Number, zero: NumericKind) -> TestResult {
        if zero.is_float() {
            return TestResult::discard();
        }
        let zero = match Number::from_integer(0, zero) {
            Some(z) => z,
            None => return TestResult::discard(),
        };
        let q = run(BinaryOp::Div, x, zero);
        let r = run(BinaryOp::Mod, x, zero);
        let expected = if x.is_zero() || x.is_nan() {
            q.is_nan()
        } else if x.is_negative() {
            q.to_f64() == f64::NEG_INFINITY
        } else {
            q.to_f64() == f64::INFINITY
        };
        TestResult::from_bool(expected && r.is_nan())
    }
    quickcheck(prop as fn(Number, NumericKind) -> TestResult);
}

#[test]
fn text_round_trip() {
    fn prop(op: BinaryOp, x: Number, y: Number) -> bool {
        let text = x.to_string();
        let parsed = match coerce(&text, Some(x.kind())) {
            Ok(Coerced::Number(n)) => n,
            _ => return false,
        };
        let direct = run(op, x, y);
        let via_text = run(op, parsed, y);
        parsed.kind() == x.kind() && ((direct.is_nan() && via_text.is_nan()) || direct == via_text)
    }
    quickcheck(prop as fn(BinaryOp, Number, Number) -> bool);
}

#[test]
fn boundary_literals() {
    for kind in NumericKind::ALL.iter().copied().filter(|k| k.is_integer()) {
        let (min, max) = kind.range().unwrap();
        for value in [0, min, max] {
            let n = Number::from_integer(value, kind).unwrap();
            assert_eq!(coerce(&n.to_string(), Some(kind)), Ok(Coerced::Number(n)));
        }
    }
    let max = Number::Dec128(Decimal::MAX);
    assert_eq!(coerce(&max.to_string(), Some(NumericKind::Dec128)), Ok(Coerced::Number(max)));
    let tiny = Number::F32(f32::MIN_POSITIVE);
    assert_eq!(coerce(&tiny.to_string(), Some(NumericKind::F32)), Ok(Coerced::Number(tiny)));
}

#[test]
fn documented_scenarios() {
    let dec = |s: &str| Number::Dec128(Decimal::from_str(s).unwrap());
    assert_eq!(run(BinaryOp::Add, Number::U64(u64::MAX), Number::U64(1)), dec("18446744073709551616"));
    assert_eq!(run(BinaryOp::Sub, Number::U32(5), Number::U32(10)), Number::I32(-5));
    assert_eq!(run(BinaryOp::Div, Number::I32(7), Number::I32(2)), Number::F64(3.5));
    assert_eq!(run(BinaryOp::Div, Number::I32(6), Number::I32(3)), Number::I32(2));
    assert_eq!(run(BinaryOp::Mod, Number::I32(-7), Number::I32(3)), Number::I32(-1));
    assert_eq!(run(BinaryOp::Div, Number::U32(5), Number::U32(0)), Number::F64(f64::INFINITY));
    assert!(run(BinaryOp::Div, Number::I32(0), Number::I32(0)).is_nan());
    // unhinted text one past u32::MAX lands in i64
    assert_eq!(coerce("4294967296", None), Ok(Coerced::Number(Number::I64(4_294_967_296))));
}

#[test]
fn unary_functions_are_total() {
    fn prop(op: UnaryOp, x: Number) -> bool {
        let out = math_matrix::evaluate_unary(op, Operand::Number(x), None);
        match (op, out) {
            (UnaryOp::Abs, Ok(Output::Number(n))) => n.is_nan() || !n.is_negative(),
            (_, Ok(Output::Number(_))) => true,
            _ => false,
        }
    }
    quickcheck(prop as fn(UnaryOp, Number) -> bool);
}

#[test]
fn ordering_is_consistent() {
    fn prop(x: Number, y: Number) -> bool {
        kernel::compare(x, y) == kernel::compare(y, x).reverse()
            && kernel::equals(x, y) == kernel::equals(y, x)
    }
    quickcheck(prop as fn(Number, Number) -> bool);
}
