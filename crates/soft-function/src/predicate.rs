//! Deferred boolean evaluations of one input.

use std::fmt;
use std::sync::Arc;

use soft_core::{not_null, Cause, ErrorKind, SoftResult};

use crate::callback::Callback;
use crate::combinator::{
    raise, And, AndBoth, Invert, Or, OrBoth, Otherwise, OtherwiseConsume, OtherwiseFail, Then,
    ThenConsume, ThenFail, Xor,
};
use crate::consumer::Consumer;
use crate::supplier::Supplier;

/// A deferred boolean evaluation of a borrowed input.
///
/// Composed predicates pass the same input to every operand.
pub trait Predicate<T: ?Sized> {
    /// Evaluates the predicate against `value`.
    fn evaluate(&self, value: &T) -> SoftResult<bool>;

    /// Negates the result.
    fn invert(self) -> Invert<Self>
    where
        Self: Sized,
    {
        Invert { inner: self }
    }

    /// Conjunction; `predicate` is not evaluated when `self` is `false`.
    fn and<P>(self, predicate: P) -> And<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        And {
            first: self,
            second: predicate,
        }
    }

    /// Conjunction evaluating both operands when `both` is `true`.
    fn and_both<P>(self, predicate: P, both: bool) -> AndBoth<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        AndBoth {
            first: self,
            second: predicate,
            both,
        }
    }

    /// Disjunction; `predicate` is not evaluated when `self` is `true`.
    fn or<P>(self, predicate: P) -> Or<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        Or {
            first: self,
            second: predicate,
        }
    }

    /// Disjunction evaluating both operands when `both` is `true`.
    fn or_both<P>(self, predicate: P, both: bool) -> OrBoth<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        OrBoth {
            first: self,
            second: predicate,
            both,
        }
    }

    /// Exclusive disjunction; both operands are always evaluated.
    fn xor<P>(self, predicate: P) -> Xor<Self, P>
    where
        Self: Sized,
        P: Predicate<T>,
    {
        Xor {
            first: self,
            second: predicate,
        }
    }

    /// Calls `callback` when the predicate holds.
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

    /// Hands the evaluated input to `consumer` when the predicate holds.
    fn then_consume<K>(self, consumer: K) -> ThenConsume<Self, K>
    where
        Self: Sized,
        K: Consumer<T>,
    {
        ThenConsume {
            inner: self,
            consumer,
        }
    }

    /// Fails with [`ErrorKind::Evaluate`] caused by the supplied value when the
    /// predicate holds; returns `false` otherwise.
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

    /// Calls `callback` when the predicate does not hold.
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

    /// Hands the evaluated input to `consumer` when the predicate does not hold.
    fn otherwise_consume<K>(self, consumer: K) -> OtherwiseConsume<Self, K>
    where
        Self: Sized,
        K: Consumer<T>,
    {
        OtherwiseConsume {
            inner: self,
            consumer,
        }
    }

    /// Fails with [`ErrorKind::Evaluate`] caused by the supplied value when the
    /// predicate does not hold; returns `true` otherwise.
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

/// Predicate with a fixed result that ignores its input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constant {
    result: bool,
}

/// Predicate backed by a closure.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Returns a predicate that evaluates to `result` for every input.
pub fn constant(result: bool) -> Constant {
    Constant { result }
}

/// Adapts a closure into a predicate.
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    T: ?Sized,
    F: Fn(&T) -> SoftResult<bool>,
{
    FromFn { f }
}

/// Returns the predicate, or a validation failure when it is absent.
pub fn of<T: ?Sized, P: Predicate<T>>(predicate: Option<P>) -> SoftResult<P> {
    not_null(predicate, "predicate")
}

impl<T: ?Sized> Predicate<T> for Constant {
    fn evaluate(&self, _value: &T) -> SoftResult<bool> {
        Ok(self.result)
    }
}

impl<T: ?Sized, F> Predicate<T> for FromFn<F>
where
    F: Fn(&T) -> SoftResult<bool>,
{
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        (self.f)(value)
    }
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for &P {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        (**self).evaluate(value)
    }
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for Box<P> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        (**self).evaluate(value)
    }
}

impl<T: ?Sized, P: Predicate<T> + ?Sized> Predicate<T> for Arc<P> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        (**self).evaluate(value)
    }
}

impl<T: ?Sized, A: Predicate<T>> Predicate<T> for Invert<A> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        Ok(!self.inner.evaluate(value)?)
    }
}

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for And<A, B> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        Ok(self.first.evaluate(value)? && self.second.evaluate(value)?)
    }
}

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for AndBoth<A, B> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        if self.both {
            let first = self.first.evaluate(value)?;
            Ok(first & self.second.evaluate(value)?)
        } else {
            Ok(self.first.evaluate(value)? && self.second.evaluate(value)?)
        }
    }
}

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for Or<A, B> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        Ok(self.first.evaluate(value)? || self.second.evaluate(value)?)
    }
}

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for OrBoth<A, B> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        if self.both {
            let first = self.first.evaluate(value)?;
            Ok(first | self.second.evaluate(value)?)
        } else {
            Ok(self.first.evaluate(value)? || self.second.evaluate(value)?)
        }
    }
}

impl<T: ?Sized, A: Predicate<T>, B: Predicate<T>> Predicate<T> for Xor<A, B> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        let first = self.first.evaluate(value)?;
        Ok(first ^ self.second.evaluate(value)?)
    }
}

impl<T: ?Sized, A: Predicate<T>, K: Callback> Predicate<T> for Then<A, K> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        let result = self.inner.evaluate(value)?;
        if result {
            self.callback.call()?;
        }
        Ok(result)
    }
}

impl<T: ?Sized, A: Predicate<T>, K: Consumer<T>> Predicate<T> for ThenConsume<A, K> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        let result = self.inner.evaluate(value)?;
        if result {
            self.consumer.consume(value)?;
        }
        Ok(result)
    }
}

impl<T, A, S> Predicate<T> for ThenFail<A, S>
where
    T: ?Sized,
    A: Predicate<T>,
    S: Supplier,
    S::Output: Into<Cause>,
{
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        if self.inner.evaluate(value)? {
            return Err(raise(ErrorKind::Evaluate, &self.supplier));
        }
        Ok(false)
    }
}

impl<T: ?Sized, A: Predicate<T>, K: Callback> Predicate<T> for Otherwise<A, K> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        let result = self.inner.evaluate(value)?;
        if !result {
            self.callback.call()?;
        }
        Ok(result)
    }
}

impl<T: ?Sized, A: Predicate<T>, K: Consumer<T>> Predicate<T> for OtherwiseConsume<A, K> {
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        let result = self.inner.evaluate(value)?;
        if !result {
            self.consumer.consume(value)?;
        }
        Ok(result)
    }
}

impl<T, A, S> Predicate<T> for OtherwiseFail<A, S>
where
    T: ?Sized,
    A: Predicate<T>,
    S: Supplier,
    S::Output: Into<Cause>,
{
    fn evaluate(&self, value: &T) -> SoftResult<bool> {
        if !self.inner.evaluate(value)? {
            return Err(raise(ErrorKind::Evaluate, &self.supplier));
        }
        Ok(true)
    }
}
