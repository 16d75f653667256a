//! Deferred boolean computations without input.

use std::fmt;
use std::sync::Arc;

use soft_core::{not_null, Cause, ErrorKind, SoftResult};

use crate::callback::Callback;
use crate::combinator::{
    raise, And, AndBoth, Invert, Or, OrBoth, Otherwise, OtherwiseFail, Then, ThenFail, Xor,
};
use crate::supplier::Supplier;

/// A deferred boolean computation.
///
/// Combinators never evaluate anything at composition time; the composed
/// chain runs each time [`Condition::compute`] is invoked. A failure of a
/// compute operation is conventionally a [`SoftError::Compute`](soft_core::SoftError::Compute).
pub trait Condition {
    /// Computes the boolean result.
    fn compute(&self) -> SoftResult<bool>;

    /// Negates the result.
    fn invert(self) -> Invert<Self>
    where
        Self: Sized,
    {
        Invert { inner: self }
    }

    /// Conjunction; `condition` is not computed when `self` is `false`.
    fn and<C>(self, condition: C) -> And<Self, C>
    where
        Self: Sized,
        C: Condition,
    {
        And {
            first: self,
            second: condition,
        }
    }

    /// Conjunction that computes both operands when `both` is `true` and
    /// short-circuits like [`Condition::and`] otherwise.
    fn and_both<C>(self, condition: C, both: bool) -> AndBoth<Self, C>
    where
        Self: Sized,
        C: Condition,
    {
        AndBoth {
            first: self,
            second: condition,
            both,
        }
    }

    /// Disjunction; `condition` is not computed when `self` is `true`.
    fn or<C>(self, condition: C) -> Or<Self, C>
    where
        Self: Sized,
        C: Condition,
    {
        Or {
            first: self,
            second: condition,
        }
    }

    /// Disjunction that computes both operands when `both` is `true` and
    /// short-circuits like [`Condition::or`] otherwise.
    fn or_both<C>(self, condition: C, both: bool) -> OrBoth<Self, C>
    where
        Self: Sized,
        C: Condition,
    {
        OrBoth {
            first: self,
            second: condition,
            both,
        }
    }

    /// Exclusive disjunction; both operands are always computed.
    fn xor<C>(self, condition: C) -> Xor<Self, C>
    where
        Self: Sized,
        C: Condition,
    {
        Xor {
            first: self,
            second: condition,
        }
    }

    /// Calls `callback` when the result is `true` and returns the result.
    fn then<K>(self, callback: K) -> Then<Self, K>
    where
        Self: Sized,
        K: Callback,
    {
        Then {
            inner: self,
            callback,
        }
    }

    /// Fails with [`ErrorKind::Compute`] caused by the supplied value when the
    /// result is `true`; returns `false` otherwise without touching `supplier`.
    fn then_fail<S>(self, supplier: S) -> ThenFail<Self, S>
    where
        Self: Sized,
        S: Supplier,
        S::Output: Into<Cause>,
    {
        ThenFail {
            inner: self,
            supplier,
        }
    }

    /// Calls `callback` when the result is `false` and returns the result.
    fn otherwise<K>(self, callback: K) -> Otherwise<Self, K>
    where
        Self: Sized,
        K: Callback,
    {
        Otherwise {
            inner: self,
            callback,
        }
    }

    /// Fails with [`ErrorKind::Compute`] caused by the supplied value when the
    /// result is `false`; returns `true` otherwise without touching `supplier`.
    fn otherwise_fail<S>(self, supplier: S) -> OtherwiseFail<Self, S>
    where
        Self: Sized,
        S: Supplier,
        S::Output: Into<Cause>,
    {
        OtherwiseFail {
            inner: self,
            supplier,
        }
    }
}

/// Condition with a fixed result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant {
    result: bool,
}

/// Condition backed by a closure.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Returns a condition that always computes `result`.
pub fn constant(result: bool) -> Constant {
    Constant { result }
}

/// Adapts a closure into a condition.
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn() -> SoftResult<bool>,
{
    FromFn { f }
}

/// Returns the condition unchanged, absent or not.
pub fn lambda<C: Condition>(condition: Option<C>) -> Option<C> {
    condition
}

/// Returns the condition, or a validation failure when it is absent.
pub fn of<C: Condition>(condition: Option<C>) -> SoftResult<C> {
    not_null(condition, "condition")
}

impl Condition for Constant {
    fn compute(&self) -> SoftResult<bool> {
        Ok(self.result)
    }
}

impl<F> Condition for FromFn<F>
where
    F: Fn() -> SoftResult<bool>,
{
    fn compute(&self) -> SoftResult<bool> {
        (self.f)()
    }
}

impl<C: Condition + ?Sized> Condition for &C {
    fn compute(&self) -> SoftResult<bool> {
        (**self).compute()
    }
}

impl<C: Condition + ?Sized> Condition for Box<C> {
    fn compute(&self) -> SoftResult<bool> {
        (**self).compute()
    }
}

impl<C: Condition + ?Sized> Condition for Arc<C> {
    fn compute(&self) -> SoftResult<bool> {
        (**self).compute()
    }
}

impl<A: Condition> Condition for Invert<A> {
    fn compute(&self) -> SoftResult<bool> {
        Ok(!self.inner.compute()?)
    }
}

impl<A: Condition, B: Condition> Condition for And<A, B> {
    fn compute(&self) -> SoftResult<bool> {
        Ok(self.first.compute()? && self.second.compute()?)
    }
}

impl<A: Condition, B: Condition> Condition for AndBoth<A, B> {
    fn compute(&self) -> SoftResult<bool> {
        if self.both {
            let first = self.first.compute()?;
            Ok(first & self.second.compute()?)
        } else {
            Ok(self.first.compute()? && self.second.compute()?)
        }
    }
}

impl<A: Condition, B: Condition> Condition for Or<A, B> {
    fn compute(&self) -> SoftResult<bool> {
        Ok(self.first.compute()? || self.second.compute()?)
    }
}

impl<A: Condition, B: Condition> Condition for OrBoth<A, B> {
    fn compute(&self) -> SoftResult<bool> {
        if self.both {
            let first = self.first.compute()?;
            Ok(first | self.second.compute()?)
        } else {
            Ok(self.first.compute()? || self.second.compute()?)
        }
    }
}

impl<A: Condition, B: Condition> Condition for Xor<A, B> {
    fn compute(&self) -> SoftResult<bool> {
        let first = self.first.compute()?;
        Ok(first ^ self.second.compute()?)
    }
}

impl<A: Condition, K: Callback> Condition for Then<A, K> {
    fn compute(&self) -> SoftResult<bool> {
        let result = self.inner.compute()?;
        if result {
            self.callback.call()?;
        }
        Ok(result)
    }
}

impl<A, S> Condition for ThenFail<A, S>
where
    A: Condition,
    S: Supplier,
    S::Output: Into<Cause>,
{
    fn compute(&self) -> SoftResult<bool> {
        if self.inner.compute()? {
            return Err(raise(ErrorKind::Compute, &self.supplier));
        }
        Ok(false)
    }
}

impl<A: Condition, K: Callback> Condition for Otherwise<A, K> {
    fn compute(&self) -> SoftResult<bool> {
        let result = self.inner.compute()?;
        if !result {
            self.callback.call()?;
        }
        Ok(result)
    }
}

impl<A, S> Condition for OtherwiseFail<A, S>
where
    A: Condition,
    S: Supplier,
    S::Output: Into<Cause>,
{
    fn compute(&self) -> SoftResult<bool> {
        if !self.inner.compute()? {
            return Err(raise(ErrorKind::Compute, &self.supplier));
        }
        Ok(true)
    }
}
