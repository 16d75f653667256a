//! Deferred side effects consuming one input.

use std::fmt;
use std::sync::Arc;

use soft_core::SoftResult;

use crate::combinator::{Suppress, With};

/// A deferred side effect on a borrowed input.
pub trait Consumer<T: ?Sized> {
    /// Consumes `value`.
    fn consume(&self, value: &T) -> SoftResult<()>;

    /// Consumes with `self`, then with `consumer`. A failure of `self` skips
    /// `consumer`.
    fn with<K>(self, consumer: K) -> With<Self, K>
    where
        Self: Sized,
        K: Consumer<T>,
    {
        With {
            first: self,
            second: consumer,
        }
    }

    /// Ignores the input of every call and consumes `value` instead.
    fn suppress(self, value: T) -> Suppress<Self, T>
    where
        Self: Sized,
        T: Sized,
    {
        Suppress { inner: self, value }
    }
}

/// Consumer that ignores its input.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

/// Consumer backed by a closure.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Returns a consumer that does nothing.
pub fn empty() -> Empty {
    Empty
}

/// Adapts a closure into a consumer.
pub fn from_fn<T, F>(f: F) -> FromFn<F>
where
    T: ?Sized,
    F: Fn(&T) -> SoftResult<()>,
{
    FromFn { f }
}

/// Returns the consumer unchanged, absent or not.
pub fn cast<T: ?Sized, K: Consumer<T>>(consumer: Option<K>) -> Option<K> {
    consumer
}

impl<T: ?Sized> Consumer<T> for Empty {
    fn consume(&self, _value: &T) -> SoftResult<()> {
        Ok(())
    }
}

impl<T: ?Sized, F> Consumer<T> for FromFn<F>
where
    F: Fn(&T) -> SoftResult<()>,
{
    fn consume(&self, value: &T) -> SoftResult<()> {
        (self.f)(value)
    }
}

impl<T: ?Sized, K: Consumer<T> + ?Sized> Consumer<T> for &K {
    fn consume(&self, value: &T) -> SoftResult<()> {
        (**self).consume(value)
    }
}

impl<T: ?Sized, K: Consumer<T> + ?Sized> Consumer<T> for Box<K> {
    fn consume(&self, value: &T) -> SoftResult<()> {
        (**self).consume(value)
    }
}

impl<T: ?Sized, K: Consumer<T> + ?Sized> Consumer<T> for Arc<K> {
    fn consume(&self, value: &T) -> SoftResult<()> {
        (**self).consume(value)
    }
}

impl<T: ?Sized, A: Consumer<T>, B: Consumer<T>> Consumer<T> for With<A, B> {
    fn consume(&self, value: &T) -> SoftResult<()> {
        self.first.consume(value)?;
        self.second.consume(value)
    }
}

impl<T: ?Sized, V, A: Consumer<V>> Consumer<T> for Suppress<A, V> {
    fn consume(&self, _value: &T) -> SoftResult<()> {
        self.inner.consume(&self.value)
    }
}
