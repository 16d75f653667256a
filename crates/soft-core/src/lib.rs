#![deny(missing_docs)]
#![doc = "Failure taxonomy, message constants and validation primitives shared by the soft crates."]

pub mod errors;
pub mod messages;
pub mod mutable;
pub mod validator;

pub use errors::{Cause, ErrorInfo, ErrorKind, SoftError, SoftResult};
pub use mutable::Mutable;
pub use validator::not_null;
