//! Soft abstractions over [`SoftLong`] values.

use soft_core::SoftResult;
use soft_function::{function, predicate, Function, Predicate};

use crate::SoftLong;

/// Function mapping a value to its successor.
pub fn incrementer() -> impl Function<SoftLong, Output = SoftLong> + Clone {
    function::from_fn(|value: &SoftLong| -> SoftResult<SoftLong> { Ok(value.increment()) })
}

/// Function adding a fixed `operand`.
pub fn adder(operand: SoftLong) -> impl Function<SoftLong, Output = SoftLong> + Clone {
    function::from_fn(move |value: &SoftLong| -> SoftResult<SoftLong> { Ok(value.add(operand)) })
}

/// Function dividing by a fixed `divisor`; fails when the divisor is zero.
pub fn divider(divisor: SoftLong) -> impl Function<SoftLong, Output = SoftLong> + Clone {
    function::from_fn(move |value: &SoftLong| value.divide(divisor))
}

/// Predicate holding for strictly positive values.
pub fn is_positive() -> impl Predicate<SoftLong> + Clone {
    predicate::from_fn(|value: &SoftLong| Ok(value.to_native() > 0))
}

/// Predicate holding for values divisible by `divisor`.
pub fn is_multiple_of(divisor: SoftLong) -> impl Predicate<SoftLong> + Clone {
    predicate::from_fn(move |value: &SoftLong| {
        Ok(value.divide_by_module(divisor)?.to_native() == 0)
    })
}
