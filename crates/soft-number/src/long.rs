use std::fmt;

use serde::{Deserialize, Serialize};
use soft_core::{ErrorKind, Mutable, SoftError, SoftResult};
use soft_function::{getter, supplier};

/// Numeric value usable as an operand of [`SoftLong`] arithmetic.
pub trait SoftNumber {
    /// Returns the value widened or truncated to 64 bits.
    fn to_long(&self) -> i64;
}

impl SoftNumber for i64 {
    fn to_long(&self) -> i64 {
        *self
    }
}

impl SoftNumber for i32 {
    fn to_long(&self) -> i64 {
        i64::from(*self)
    }
}

/// Immutable 64-bit integer.
///
/// Additive and multiplicative operations wrap on overflow. The dividing
/// operations fail with [`SoftError::Arithmetic`] on a zero divisor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SoftLong(i64);

impl SoftLong {
    /// Wraps `value`.
    pub const fn of(value: i64) -> Self {
        Self(value)
    }

    /// Returns the wrapped integer.
    pub const fn to_native(self) -> i64 {
        self.0
    }

    /// Returns the negated value.
    pub fn invert(self) -> Self {
        Self(self.0.wrapping_neg())
    }

    /// Returns the value plus one.
    pub fn increment(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Returns the value minus one.
    pub fn decrement(self) -> Self {
        Self(self.0.wrapping_sub(1))
    }

    /// Returns the sum with `operand`.
    pub fn add(self, operand: impl SoftNumber) -> Self {
        Self(self.0.wrapping_add(operand.to_long()))
    }

    /// Returns the difference with `operand`.
    pub fn subtract(self, operand: impl SoftNumber) -> Self {
        Self(self.0.wrapping_sub(operand.to_long()))
    }

    /// Returns the product with `operand`.
    pub fn multiply(self, operand: impl SoftNumber) -> Self {
        Self(self.0.wrapping_mul(operand.to_long()))
    }

    /// Returns the quotient truncated towards zero.
    pub fn divide(self, operand: impl SoftNumber) -> SoftResult<Self> {
        let divisor = nonzero(operand.to_long(), "divide")?;
        Ok(Self(self.0.wrapping_div(divisor)))
    }

    /// Returns the quotient minus the remainder.
    pub fn divide_without_remainder(self, operand: impl SoftNumber) -> SoftResult<Self> {
        let divisor = nonzero(operand.to_long(), "divide without remainder")?;
        let quotient = self.0.wrapping_div(divisor);
        let remainder = self.0.wrapping_rem(divisor);
        Ok(Self(quotient.wrapping_sub(remainder)))
    }

    /// Returns the remainder, carrying the sign of the dividend.
    pub fn divide_by_module(self, operand: impl SoftNumber) -> SoftResult<Self> {
        let divisor = nonzero(operand.to_long(), "divide by module")?;
        Ok(Self(self.0.wrapping_rem(divisor)))
    }

    /// Returns a supplier yielding this value.
    pub fn supplier(self) -> supplier::Constant<SoftLong> {
        supplier::constant(self)
    }

    /// Returns a getter yielding this value.
    pub fn getter(self) -> getter::Strict<SoftLong> {
        getter::strict(self)
    }
}

fn nonzero(divisor: i64, operation: &str) -> SoftResult<i64> {
    if divisor == 0 {
        return Err(SoftError::templated(ErrorKind::Arithmetic, operation)
            .with_context("divisor", divisor.to_string()));
    }
    Ok(divisor)
}

impl SoftNumber for SoftLong {
    fn to_long(&self) -> i64 {
        self.0
    }
}

impl Mutable for SoftLong {
    fn mutable(&self) -> bool {
        false
    }
}

impl From<i64> for SoftLong {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<SoftLong> for i64 {
    fn from(value: SoftLong) -> Self {
        value.0
    }
}

impl fmt::Display for SoftLong {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
