//! Deferred transformations of one input.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use soft_core::SoftResult;

use crate::combinator::{Suppress, With};

/// A deferred mapping from a borrowed input to an output.
pub trait Function<T: ?Sized> {
    /// Type of the produced value.
    type Output;

    /// Maps `value` to the output.
    fn execute(&self, value: &T) -> SoftResult<Self::Output>;

    /// Executes `self`, discards its output, then executes `function` on the
    /// same input.
    fn with<G>(self, function: G) -> With<Self, G>
    where
        Self: Sized,
        G: Function<T>,
    {
        With {
            first: self,
            second: function,
        }
    }

    /// Ignores the input of every call and executes on `value` instead.
    fn suppress(self, value: T) -> Suppress<Self, T>
    where
        Self: Sized,
        T: Sized,
    {
        Suppress { inner: self, value }
    }
}

/// Function that always produces `None`.
pub struct Nullable<R> {
    marker: PhantomData<fn() -> R>,
}

impl<R> fmt::Debug for Nullable<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nullable").finish()
    }
}

impl<R> Clone for Nullable<R> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<R> Copy for Nullable<R> {}

/// Function returning clones of a fixed result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strict<R> {
    result: R,
}

/// Function backed by a closure.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Returns a function whose output is always `None`.
pub fn nullable<R>() -> Nullable<R> {
    Nullable {
        marker: PhantomData,
    }
}

/// Returns a function that ignores its input and produces `result`.
pub fn strict<R: Clone>(result: R) -> Strict<R> {
    Strict { result }
}

/// Adapts a closure into a function.
pub fn from_fn<T, R, F>(f: F) -> FromFn<F>
where
    T: ?Sized,
    F: Fn(&T) -> SoftResult<R>,
{
    FromFn { f }
}

/// Returns the function unchanged, absent or not.
pub fn cast<T: ?Sized, G: Function<T>>(function: Option<G>) -> Option<G> {
    function
}

impl<T: ?Sized, R> Function<T> for Nullable<R> {
    type Output = Option<R>;

    fn execute(&self, _value: &T) -> SoftResult<Option<R>> {
        Ok(None)
    }
}

impl<T: ?Sized, R: Clone> Function<T> for Strict<R> {
    type Output = R;

    fn execute(&self, _value: &T) -> SoftResult<R> {
        Ok(self.result.clone())
    }
}

impl<T: ?Sized, R, F> Function<T> for FromFn<F>
where
    F: Fn(&T) -> SoftResult<R>,
{
    type Output = R;

    fn execute(&self, value: &T) -> SoftResult<R> {
        (self.f)(value)
    }
}

impl<T: ?Sized, G: Function<T> + ?Sized> Function<T> for &G {
    type Output = G::Output;

    fn execute(&self, value: &T) -> SoftResult<G::Output> {
        (**self).execute(value)
    }
}

impl<T: ?Sized, G: Function<T> + ?Sized> Function<T> for Box<G> {
    type Output = G::Output;

    fn execute(&self, value: &T) -> SoftResult<G::Output> {
        (**self).execute(value)
    }
}

impl<T: ?Sized, G: Function<T> + ?Sized> Function<T> for Arc<G> {
    type Output = G::Output;

    fn execute(&self, value: &T) -> SoftResult<G::Output> {
        (**self).execute(value)
    }
}

impl<T: ?Sized, A: Function<T>, B: Function<T>> Function<T> for With<A, B> {
    type Output = B::Output;

    fn execute(&self, value: &T) -> SoftResult<B::Output> {
        self.first.execute(value)?;
        self.second.execute(value)
    }
}

impl<T: ?Sized, V, A: Function<V>> Function<T> for Suppress<A, V> {
    type Output = A::Output;

    fn execute(&self, _value: &T) -> SoftResult<A::Output> {
        self.inner.execute(&self.value)
    }
}
