//! Adapter types produced by the combinator methods.
//!
//! Every adapter owns its operands and evaluates them again on each
//! invocation. The trait implementations live next to the abstraction they
//! belong to, so a single adapter may serve several abstractions (for example
//! [`And`] is both a [`Condition`](crate::Condition) and a
//! [`Predicate`](crate::Predicate)).

use soft_core::{Cause, ErrorKind, SoftError};

use crate::supplier::Supplier;

/// Negation of a boolean abstraction.
#[derive(Debug, Clone)]
pub struct Invert<A> {
    pub(crate) inner: A,
}

/// Short-circuiting conjunction.
#[derive(Debug, Clone)]
pub struct And<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

/// Conjunction that evaluates both operands when `both` is set.
#[derive(Debug, Clone)]
pub struct AndBoth<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
    pub(crate) both: bool,
}

/// Short-circuiting disjunction.
#[derive(Debug, Clone)]
pub struct Or<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

/// Disjunction that evaluates both operands when `both` is set.
#[derive(Debug, Clone)]
pub struct OrBoth<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
    pub(crate) both: bool,
}

/// Exclusive disjunction; both operands are always evaluated.
#[derive(Debug, Clone)]
pub struct Xor<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

/// Runs a callback when the boolean result is `true`.
#[derive(Debug, Clone)]
pub struct Then<A, K> {
    pub(crate) inner: A,
    pub(crate) callback: K,
}

/// Consumes the evaluated input when the predicate holds.
#[derive(Debug, Clone)]
pub struct ThenConsume<A, K> {
    pub(crate) inner: A,
    pub(crate) consumer: K,
}

/// Turns a `true` result into a failure caused by the supplied value.
#[derive(Debug, Clone)]
pub struct ThenFail<A, S> {
    pub(crate) inner: A,
    pub(crate) supplier: S,
}

/// Runs a callback when the boolean result is `false`.
#[derive(Debug, Clone)]
pub struct Otherwise<A, K> {
    pub(crate) inner: A,
    pub(crate) callback: K,
}

/// Consumes the evaluated input when the predicate does not hold.
#[derive(Debug, Clone)]
pub struct OtherwiseConsume<A, K> {
    pub(crate) inner: A,
    pub(crate) consumer: K,
}

/// Turns a `false` result into a failure caused by the supplied value.
#[derive(Debug, Clone)]
pub struct OtherwiseFail<A, S> {
    pub(crate) inner: A,
    pub(crate) supplier: S,
}

/// Runs two operations in order; value forms return the second result.
#[derive(Debug, Clone)]
pub struct With<A, B> {
    pub(crate) first: A,
    pub(crate) second: B,
}

/// Ignores the input and runs the wrapped operation with a fixed value.
#[derive(Debug, Clone)]
pub struct Suppress<A, V> {
    pub(crate) inner: A,
    pub(crate) value: V,
}

/// Builds the failure raised by the `*_fail` combinators.
///
/// A failure of the supplier itself is returned unchanged.
pub(crate) fn raise<S>(kind: ErrorKind, supplier: &S) -> SoftError
where
    S: Supplier,
    S::Output: Into<Cause>,
{
    match supplier.supply() {
        Ok(cause) => {
            let cause = cause.into();
            tracing::debug!(?kind, %cause, "boolean outcome converted into a failure");
            SoftError::caused(kind, cause)
        }
        Err(err) => err,
    }
}
