//! Deferred production of values.

use std::fmt;
use std::sync::Arc;

use soft_core::{not_null, SoftResult};

use crate::combinator::With;

/// A deferred production of a value.
///
/// A successful supply always yields a value; absence is not part of the
/// contract. Use a [`Getter`](crate::Getter) when the value is optional.
pub trait Supplier {
    /// Type of the supplied value.
    type Output;

    /// Produces the value.
    fn supply(&self) -> SoftResult<Self::Output>;

    /// Supplies from `self`, discards the value, then supplies from `supplier`.
    fn with<S>(self, supplier: S) -> With<Self, S>
    where
        Self: Sized,
        S: Supplier,
    {
        With {
            first: self,
            second: supplier,
        }
    }
}

/// Supplier returning clones of a fixed value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Constant<T> {
    value: T,
}

/// Supplier backed by a closure.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Returns a supplier that always yields `value`.
pub fn constant<T: Clone>(value: T) -> Constant<T> {
    Constant { value }
}

/// Adapts a closure into a supplier.
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    F: Fn() -> SoftResult<T>,
{
    FromFn { f }
}

/// Returns the supplier, or a validation failure when it is absent.
pub fn of<S: Supplier>(supplier: Option<S>) -> SoftResult<S> {
    not_null(supplier, "supplier")
}

/// Returns the supplier unchanged, absent or not.
pub fn cast<S: Supplier>(supplier: Option<S>) -> Option<S> {
    supplier
}

impl<T: Clone> Supplier for Constant<T> {
    type Output = T;

    fn supply(&self) -> SoftResult<T> {
        Ok(self.value.clone())
    }
}

impl<T, F> Supplier for FromFn<F>
where
    F: Fn() -> SoftResult<T>,
{
    type Output = T;

    fn supply(&self) -> SoftResult<T> {
        (self.f)()
    }
}

impl<S: Supplier + ?Sized> Supplier for &S {
    type Output = S::Output;

    fn supply(&self) -> SoftResult<S::Output> {
        (**self).supply()
    }
}

impl<S: Supplier + ?Sized> Supplier for Box<S> {
    type Output = S::Output;

    fn supply(&self) -> SoftResult<S::Output> {
        (**self).supply()
    }
}

impl<S: Supplier + ?Sized> Supplier for Arc<S> {
    type Output = S::Output;

    fn supply(&self) -> SoftResult<S::Output> {
        (**self).supply()
    }
}

impl<A: Supplier, B: Supplier> Supplier for With<A, B> {
    type Output = B::Output;

    fn supply(&self) -> SoftResult<B::Output> {
        self.first.supply()?;
        self.second.supply()
    }
}
