#![deny(missing_docs)]
#![doc = "Immutable numeric wrappers with arithmetic convenience methods."]

mod long;
pub mod ops;

pub use long::{SoftLong, SoftNumber};
