#![deny(missing_docs)]

//! Single-operation behavioural abstractions and the combinators composing them.
//!
//! Each abstraction is a trait with one required operation returning a
//! [`SoftResult`](soft_core::SoftResult). Combinators are provided methods that
//! wrap their operands into adapter types from [`combinator`]; nothing is
//! evaluated until the composed operation is invoked. Closures are adapted
//! through the `from_fn` factory of each module.

pub mod callback;
pub mod combinator;
pub mod condition;
pub mod consumer;
pub mod function;
pub mod getter;
pub mod predicate;
pub mod supplier;

pub use callback::Callback;
pub use condition::Condition;
pub use consumer::Consumer;
pub use function::Function;
pub use getter::Getter;
pub use predicate::Predicate;
pub use supplier::Supplier;

/// Re-exports the abstraction traits for glob import.
pub mod prelude {
    pub use crate::{Callback, Condition, Consumer, Function, Getter, Predicate, Supplier};
}
