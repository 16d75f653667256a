//! Nullness validation used at every composition and factory boundary.

use crate::errors::{ErrorInfo, ErrorKind, SoftError, SoftResult};

/// Returns the referenced value unchanged, or a [`SoftError::Null`] naming the
/// absent argument.
///
/// The message is the [`ErrorKind::Null`] template rendered with `name`, and
/// the payload context records `argument = name`. The success path performs no
/// allocation.
pub fn not_null<T>(reference: Option<T>, name: &str) -> SoftResult<T> {
    match reference {
        Some(value) => Ok(value),
        None => {
            tracing::debug!(argument = name, "rejected absent reference");
            Err(SoftError::Null(
                ErrorInfo::new()
                    .with_message(ErrorKind::Null.render(name))
                    .with_context("argument", name),
            ))
        }
    }
}
