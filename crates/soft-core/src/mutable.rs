//! Mutability marker capability.

/// Marks entities that can report whether their state may change.
pub trait Mutable {
    /// Returns `true` unless the implementor states otherwise.
    fn mutable(&self) -> bool {
        true
    }
}
