//! Default and template diagnostics for every failure kind.
//!
//! Every template contains exactly one `{}` placeholder that is substituted
//! with the name of the failing operation or argument, see
//! [`ErrorKind::render`](crate::ErrorKind::render).

/// Messages of the recoverable root kind.
pub mod soft {
    /// The root kind carries no message unless one is supplied.
    pub const DEFAULT_MESSAGE: Option<&str> = None;
    /// Template used when the root kind is raised for a named operation.
    pub const TEMPLATE_MESSAGE: &str = "{}";
}

/// Messages of the generic function failure kind.
pub mod function {
    /// Message used when no other message is supplied.
    pub const DEFAULT_MESSAGE: &str = "Failed to call the function";
    /// Template taking the name of the failing function.
    pub const TEMPLATE_MESSAGE: &str = "Failed to call {}";
}

/// Messages of the predicate evaluation failure kind.
pub mod evaluate {
    /// Message used when no other message is supplied.
    pub const DEFAULT_MESSAGE: &str = "Failed to evaluate the predicate";
    /// Template taking the name of the failing predicate.
    pub const TEMPLATE_MESSAGE: &str = "Failed to evaluate {}";
}

/// Messages of the condition computation failure kind.
pub mod compute {
    /// Message used when no other message is supplied.
    pub const DEFAULT_MESSAGE: &str = "Failed to compute the condition";
    /// Template taking the name of the failing condition.
    pub const TEMPLATE_MESSAGE: &str = "Failed to compute {}";
}

/// Messages of the callback call failure kind.
pub mod call {
    /// Message used when no other message is supplied.
    pub const DEFAULT_MESSAGE: &str = "Failed to call the callback";
    /// Template taking the name of the failing callback.
    pub const TEMPLATE_MESSAGE: &str = "Failed to call {}";
}

/// Messages of the supply failure kind.
pub mod supply {
    /// Message used when no other message is supplied.
    pub const DEFAULT_MESSAGE: &str = "Failed to supply the object";
    /// Template taking the name of the object that could not be supplied.
    pub const TEMPLATE_MESSAGE: &str = "Failed to supply {}";
}

/// Messages of the consumption failure kind.
pub mod consume {
    /// Message used when no other message is supplied.
    pub const DEFAULT_MESSAGE: &str = "Failed to consume the object";
    /// Template taking the name of the object that could not be consumed.
    pub const TEMPLATE_MESSAGE: &str = "Failed to consume {}";
}

/// Messages of the function execution failure kind.
pub mod execute {
    /// Message used when no other message is supplied.
    pub const DEFAULT_MESSAGE: &str = "Failed to execute the function";
    /// Template taking the name of the failing function.
    pub const TEMPLATE_MESSAGE: &str = "Failed to execute {}";
}

/// Messages of the validation failure kind.
pub mod null {
    /// Message used when no argument name is known.
    pub const DEFAULT_MESSAGE: &str = "The reference must not be null";
    /// Template taking the logical name of the rejected argument.
    pub const TEMPLATE_MESSAGE: &str = "{} must not be null";
}

/// Messages of the arithmetic failure kind.
pub mod arithmetic {
    /// Message used when no other message is supplied.
    pub const DEFAULT_MESSAGE: &str = "Failed to perform the arithmetic operation";
    /// Template taking the name of the failing operation.
    pub const TEMPLATE_MESSAGE: &str = "Failed to {}";
}
