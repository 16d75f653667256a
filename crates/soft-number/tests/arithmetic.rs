use soft_core::{ErrorKind, Mutable};
use soft_number::SoftLong;

#[test]
fn unary_operations() {
    let five = SoftLong::of(5);
    assert_eq!(five.invert().to_native(), -5);
    assert_eq!(five.increment().to_native(), 6);
    assert_eq!(five.decrement().to_native(), 4);
    assert_eq!(SoftLong::of(i64::MAX).increment().to_native(), i64::MIN);
}

#[test]
fn binary_operations_accept_any_soft_number() {
    let ten = SoftLong::of(10);
    assert_eq!(ten.add(SoftLong::of(5)).to_native(), 15);
    assert_eq!(ten.subtract(3i32).to_native(), 7);
    assert_eq!(ten.multiply(4i64).to_native(), 40);
    assert_eq!(ten.divide(3).unwrap().to_native(), 3);
    assert_eq!(ten.divide_by_module(3).unwrap().to_native(), 1);
    assert_eq!(SoftLong::of(-7).divide_by_module(2).unwrap().to_native(), -1);
}

#[test]
fn divide_without_remainder_subtracts_the_remainder() {
    assert_eq!(SoftLong::of(10).divide_without_remainder(3).unwrap().to_native(), 2);
    assert_eq!(SoftLong::of(12).divide_without_remainder(4).unwrap().to_native(), 3);
}

#[test]
fn zero_divisor_is_an_arithmetic_failure() {
    for result in [
        SoftLong::of(1).divide(0),
        SoftLong::of(1).divide_without_remainder(0),
        SoftLong::of(1).divide_by_module(0),
    ] {
        let err = result.unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Arithmetic);
        assert!(err.is(ErrorKind::Soft));
        assert_eq!(err.info().context.get("divisor").map(String::as_str), Some("0"));
    }
    assert_eq!(
        SoftLong::of(1).divide(0).unwrap_err().message(),
        Some("Failed to divide")
    );
}

#[test]
fn minimum_divided_by_minus_one_wraps() {
    assert_eq!(SoftLong::of(i64::MIN).divide(-1).unwrap().to_native(), i64::MIN);
}

#[test]
fn values_are_immutable() {
    assert!(!SoftLong::of(0).mutable());
}

#[test]
fn serializes_as_a_bare_integer() {
    let json = serde_json::to_string(&SoftLong::of(-42)).expect("serialize");
    assert_eq!(json, "-42");
    let decoded: SoftLong = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, SoftLong::of(-42));
}
