//! Deferred side effects without input or output.

use std::fmt;
use std::sync::Arc;

use soft_core::{not_null, SoftResult};

use crate::combinator::With;

/// A deferred side effect.
pub trait Callback {
    /// Performs the side effect.
    fn call(&self) -> SoftResult<()>;

    /// Calls `self`, then `callback`. A failure of `self` skips `callback`.
    fn with<K>(self, callback: K) -> With<Self, K>
    where
        Self: Sized,
        K: Callback,
    {
        With {
            first: self,
            second: callback,
        }
    }
}

/// Callback that does nothing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Empty;

/// Callback backed by a closure.
#[derive(Clone)]
pub struct FromFn<F> {
    f: F,
}

impl<F> fmt::Debug for FromFn<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FromFn").finish_non_exhaustive()
    }
}

/// Callback standing in for an optional one; absent callbacks do nothing.
#[derive(Debug, Clone)]
pub struct Auto<K> {
    callback: Option<K>,
}

/// Returns a callback that does nothing.
pub fn empty() -> Empty {
    Empty
}

/// Adapts a closure into a callback.
pub fn from_fn<F>(f: F) -> FromFn<F>
where
    F: Fn() -> SoftResult<()>,
{
    FromFn { f }
}

/// Returns the callback, or a validation failure when it is absent.
pub fn check<K: Callback>(callback: Option<K>) -> SoftResult<K> {
    not_null(callback, "callback")
}

/// Returns the callback unchanged, absent or not.
pub fn cast<K: Callback>(callback: Option<K>) -> Option<K> {
    callback
}

/// Wraps an optional callback; the result does nothing when it is absent.
pub fn auto<K: Callback>(callback: Option<K>) -> Auto<K> {
    Auto { callback }
}

impl Callback for Empty {
    fn call(&self) -> SoftResult<()> {
        Ok(())
    }
}

impl<F> Callback for FromFn<F>
where
    F: Fn() -> SoftResult<()>,
{
    fn call(&self) -> SoftResult<()> {
        (self.f)()
    }
}

impl<K: Callback> Callback for Auto<K> {
    fn call(&self) -> SoftResult<()> {
        match &self.callback {
            Some(callback) => callback.call(),
            None => Ok(()),
        }
    }
}

impl<K: Callback + ?Sized> Callback for &K {
    fn call(&self) -> SoftResult<()> {
        (**self).call()
    }
}

impl<K: Callback + ?Sized> Callback for Box<K> {
    fn call(&self) -> SoftResult<()> {
        (**self).call()
    }
}

impl<K: Callback + ?Sized> Callback for Arc<K> {
    fn call(&self) -> SoftResult<()> {
        (**self).call()
    }
}

impl<A: Callback, B: Callback> Callback for With<A, B> {
    fn call(&self) -> SoftResult<()> {
        self.first.call()?;
        self.second.call()
    }
}
