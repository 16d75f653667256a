//! Deferred access to values that may be absent.

use std::fmt;
use std::marker::PhantomData;
use std::sync::Arc;

use soft_core::{not_null, SoftResult};

use crate::combinator::With;

/// A deferred access to a value.
///
/// Unlike a [`Supplier`](crate::Supplier), a getter may be built to yield
/// nothing, see [`nullable`].
pub trait Getter {
    /// Type of the returned value.
    type Output;

    /// Returns the value.
    fn get(&self) -> SoftResult<Self::Output>;

    /// Gets from `self`, discards the value, then gets from `getter`.
    fn with<G>(self, getter: G) -> With<Self, G>
    where
        Self: Sized,
        G: Getter,
    {
        With {
            first: self,
            second: getter,
        }
    }

    /// Replaces `self` with a getter of the fixed `value`.
    fn suppress(self, value: Self::Output) -> Strict<Self::Output>
    where
        Self: Sized,
        Self::Output: Clone,
    {
        strict(value)
    }
}

/// Getter that always returns `None`.
pub struct Nullable<T> {
    marker: PhantomData<fn() -> T>,
}

impl<T> fmt::Debug for Nullable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Nullable").finish()
    }
}

impl<T> Clone for Nullable<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Nullable<T> {}

/// Getter returning clones of a fixed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Strict<T> {
    value: T,
}

/// Getter backed by a closure.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Returns a getter whose value is always `None`.
pub fn nullable<T>() -> Nullable<T> {
    Nullable {
        marker: PhantomData,
    }
}

/// Returns a getter that always yields `value`.
pub fn strict<T: Clone>(value: T) -> Strict<T> {
    Strict { value }
}

/// Adapts a closure into a getter.
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: Fn() -> SoftResult<T>,
{
    FromFn { f }
}

/// Returns the getter, or a validation failure when it is absent.
pub fn of<G: Getter>(getter: Option<G>) -> SoftResult<G> {
    not_null(getter, "getter")
}

impl<T> Getter for Nullable<T> {
    type Output = Option<T>;

    fn get(&self) -> SoftResult<Option<T>> {
        Ok(None)
    }
}

impl<T: Clone> Getter for Strict<T> {
    type Output = T;

    fn get(&self) -> SoftResult<T> {
        Ok(self.value.clone())
    }
}

impl<T, F> Getter for FromFn<F>
where
    F: Fn() -> SoftResult<T>,
{
    type Output = T;

    fn get(&self) -> SoftResult<T> {
        (self.f)()
    }
}

impl<G: Getter + ?Sized> Getter for &G {
    type Output = G::Output;

    fn get(&self) -> SoftResult<G::Output> {
        (**self).get()
    }
}

impl<G: Getter + ?Sized> Getter for Box<G> {
    type Output = G::Output;

    fn get(&self) -> SoftResult<G::Output> {
        (**self).get()
    }
}

impl<G: Getter + ?Sized> Getter for Arc<G> {
    type Output = G::Output;

    fn get(&self) -> SoftResult<G::Output> {
        (**self).get()
    }
}

impl<A: Getter, B: Getter> Getter for With<A, B> {
    type Output = B::Output;

    fn get(&self) -> SoftResult<B::Output> {
        self.first.get()?;
        self.second.get()
    }
}
