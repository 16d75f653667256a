//! Structured failure taxonomy shared across the soft crates.

use std::collections::BTreeMap;
use std::error::Error as StdError;
use std::fmt::{self, Debug, Display};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::messages;

/// Result type returned by every soft operation.
pub type SoftResult<T> = Result<T, SoftError>;

/// Shared handle to the failure that triggered a [`SoftError`].
///
/// Two causes compare equal only when they point at the same allocation, so a
/// cause handed to a combinator can be recognised unchanged on the other side.
#[derive(Clone)]
pub struct Cause(Arc<dyn StdError + Send + Sync + 'static>);

impl Cause {
    /// Wraps an error into a new shared cause.
    pub fn new<E>(error: E) -> Self
    where
        E: StdError + Send + Sync + 'static,
    {
        Self(Arc::new(error))
    }

    /// Returns the wrapped error.
    pub fn get(&self) -> &(dyn StdError + Send + Sync + 'static) {
        &*self.0
    }

    /// Attempts to view the wrapped error as a concrete type.
    pub fn downcast_ref<E>(&self) -> Option<&E>
    where
        E: StdError + 'static,
    {
        self.0.downcast_ref::<E>()
    }

    /// Returns `true` when both handles share the same underlying error.
    pub fn ptr_eq(&self, other: &Cause) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<E> From<E> for Cause
where
    E: StdError + Send + Sync + 'static,
{
    fn from(error: E) -> Self {
        Self::new(error)
    }
}

impl Debug for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Debug::fmt(&*self.0, f)
    }
}

impl Display for Cause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        Display::fmt(&*self.0, f)
    }
}

impl PartialEq for Cause {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other)
    }
}

impl Eq for Cause {}

/// Structured payload attached to every [`SoftError`] variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorInfo {
    /// Human readable diagnostic message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Failure that triggered this one. Not serialized.
    #[serde(skip)]
    pub cause: Option<Cause>,
    /// Whether secondary failures may be recorded through [`ErrorInfo::add_suppressed`].
    #[serde(default)]
    pub suppression: bool,
    /// Whether a stack trace may be captured for this failure.
    #[serde(default = "writable_trace_default")]
    pub writable_trace: bool,
    /// Contextual key value pairs (argument names, operations, etc.).
    #[serde(default)]
    pub context: BTreeMap<String, String>,
    /// Secondary failures recorded while this one was being handled.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub suppressed: Vec<SoftError>,
}

fn writable_trace_default() -> bool {
    true
}

impl Default for ErrorInfo {
    fn default() -> Self {
        Self {
            message: None,
            cause: None,
            suppression: false,
            writable_trace: writable_trace_default(),
            context: BTreeMap::new(),
            suppressed: Vec::new(),
        }
    }
}

impl ErrorInfo {
    /// Creates an empty payload: no message, no cause, suppression disabled,
    /// trace capture enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the diagnostic message.
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    /// Sets the triggering cause.
    pub fn with_cause(mut self, cause: impl Into<Cause>) -> Self {
        self.cause = Some(cause.into());
        self
    }

    /// Enables or disables the recording of suppressed failures.
    pub fn with_suppression(mut self, suppression: bool) -> Self {
        self.suppression = suppression;
        self
    }

    /// Enables or disables stack trace capture.
    pub fn with_writable_trace(mut self, writable_trace: bool) -> Self {
        self.writable_trace = writable_trace;
        self
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.context.insert(key.into(), value.into());
        self
    }

    /// Records a secondary failure. Returns `false` and drops the failure when
    /// suppression is disabled.
    pub fn add_suppressed(&mut self, error: SoftError) -> bool {
        if !self.suppression {
            return false;
        }
        self.suppressed.push(error);
        true
    }

    /// Returns the diagnostic message, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl Display for ErrorInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.message {
            Some(message) => write!(f, "{message}")?,
            None => write!(f, "no message")?,
        }
        if !self.context.is_empty() {
            write!(f, " | context: [")?;
            for (idx, (key, value)) in self.context.iter().enumerate() {
                if idx > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{key}={value}")?;
            }
            write!(f, "]")?;
        }
        Ok(())
    }
}

/// The cause is reported through `source()` and is not part of `Display`.
impl StdError for ErrorInfo {
    fn source(&self) -> Option<&(dyn StdError + 'static)> {
        self.cause
            .as_ref()
            .map(|cause| cause.get() as &(dyn StdError + 'static))
    }
}

/// Payload-free discriminant of a [`SoftError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Recoverable root of the taxonomy.
    Soft,
    /// Generic function failure, parent of the per-abstraction kinds.
    Function,
    /// Predicate evaluation failure.
    Evaluate,
    /// Condition computation failure.
    Compute,
    /// Callback call failure.
    Call,
    /// Supplier or getter failure.
    Supply,
    /// Consumer failure.
    Consume,
    /// Function execution failure.
    Execute,
    /// Validation failure raised for an absent reference.
    Null,
    /// Arithmetic failure raised by numeric wrappers.
    Arithmetic,
}

impl ErrorKind {
    /// Every kind, root first.
    pub const ALL: [ErrorKind; 10] = [
        ErrorKind::Soft,
        ErrorKind::Function,
        ErrorKind::Evaluate,
        ErrorKind::Compute,
        ErrorKind::Call,
        ErrorKind::Supply,
        ErrorKind::Consume,
        ErrorKind::Execute,
        ErrorKind::Null,
        ErrorKind::Arithmetic,
    ];

    /// Returns the direct parent of the kind, `None` for the root.
    pub const fn parent(self) -> Option<ErrorKind> {
        match self {
            ErrorKind::Soft => None,
            ErrorKind::Function | ErrorKind::Null | ErrorKind::Arithmetic => Some(ErrorKind::Soft),
            ErrorKind::Evaluate
            | ErrorKind::Compute
            | ErrorKind::Call
            | ErrorKind::Supply
            | ErrorKind::Consume
            | ErrorKind::Execute => Some(ErrorKind::Function),
        }
    }

    /// Returns `true` when `ancestor` is this kind or one of its ancestors.
    pub fn is_a(self, ancestor: ErrorKind) -> bool {
        let mut current = Some(self);
        while let Some(kind) = current {
            if kind == ancestor {
                return true;
            }
            current = kind.parent();
        }
        false
    }

    /// Returns the message used when a failure of this kind carries no other.
    pub const fn default_message(self) -> Option<&'static str> {
        match self {
            ErrorKind::Soft => messages::soft::DEFAULT_MESSAGE,
            ErrorKind::Function => Some(messages::function::DEFAULT_MESSAGE),
            ErrorKind::Evaluate => Some(messages::evaluate::DEFAULT_MESSAGE),
            ErrorKind::Compute => Some(messages::compute::DEFAULT_MESSAGE),
            ErrorKind::Call => Some(messages::call::DEFAULT_MESSAGE),
            ErrorKind::Supply => Some(messages::supply::DEFAULT_MESSAGE),
            ErrorKind::Consume => Some(messages::consume::DEFAULT_MESSAGE),
            ErrorKind::Execute => Some(messages::execute::DEFAULT_MESSAGE),
            ErrorKind::Null => Some(messages::null::DEFAULT_MESSAGE),
            ErrorKind::Arithmetic => Some(messages::arithmetic::DEFAULT_MESSAGE),
        }
    }

    /// Returns the template of this kind.
    pub const fn template_message(self) -> &'static str {
        match self {
            ErrorKind::Soft => messages::soft::TEMPLATE_MESSAGE,
            ErrorKind::Function => messages::function::TEMPLATE_MESSAGE,
            ErrorKind::Evaluate => messages::evaluate::TEMPLATE_MESSAGE,
            ErrorKind::Compute => messages::compute::TEMPLATE_MESSAGE,
            ErrorKind::Call => messages::call::TEMPLATE_MESSAGE,
            ErrorKind::Supply => messages::supply::TEMPLATE_MESSAGE,
            ErrorKind::Consume => messages::consume::TEMPLATE_MESSAGE,
            ErrorKind::Execute => messages::execute::TEMPLATE_MESSAGE,
            ErrorKind::Null => messages::null::TEMPLATE_MESSAGE,
            ErrorKind::Arithmetic => messages::arithmetic::TEMPLATE_MESSAGE,
        }
    }

    /// Substitutes `name` into the template of this kind.
    pub fn render(self, name: &str) -> String {
        self.template_message().replacen("{}", name, 1)
    }
}

/// Canonical failure type of the soft abstractions.
///
/// `Display` renders the payload and `source()` yields the payload's cause, so
/// a chained report names every failure once. Match the variant or call
/// [`SoftError::kind`] to tell kinds apart.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Error)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum SoftError {
    /// Recoverable failure without a more specific kind.
    #[error(transparent)]
    Soft(ErrorInfo),
    /// Generic function failure.
    #[error(transparent)]
    Function(ErrorInfo),
    /// Predicate evaluation failure.
    #[error(transparent)]
    Evaluate(ErrorInfo),
    /// Condition computation failure.
    #[error(transparent)]
    Compute(ErrorInfo),
    /// Callback call failure.
    #[error(transparent)]
    Call(ErrorInfo),
    /// Supplier or getter failure.
    #[error(transparent)]
    Supply(ErrorInfo),
    /// Consumer failure.
    #[error(transparent)]
    Consume(ErrorInfo),
    /// Function execution failure.
    #[error(transparent)]
    Execute(ErrorInfo),
    /// Absent reference rejected by the validator.
    #[error(transparent)]
    Null(ErrorInfo),
    /// Arithmetic failure.
    #[error(transparent)]
    Arithmetic(ErrorInfo),
}

impl SoftError {
    /// Creates a failure of the given kind around an explicit payload.
    ///
    /// A [`ErrorKind::Null`] payload without a message receives the kind's
    /// default message.
    pub fn new(kind: ErrorKind, mut info: ErrorInfo) -> Self {
        if kind == ErrorKind::Null && info.message.is_none() {
            info.message = kind.default_message().map(str::to_owned);
        }
        match kind {
            ErrorKind::Soft => SoftError::Soft(info),
            ErrorKind::Function => SoftError::Function(info),
            ErrorKind::Evaluate => SoftError::Evaluate(info),
            ErrorKind::Compute => SoftError::Compute(info),
            ErrorKind::Call => SoftError::Call(info),
            ErrorKind::Supply => SoftError::Supply(info),
            ErrorKind::Consume => SoftError::Consume(info),
            ErrorKind::Execute => SoftError::Execute(info),
            ErrorKind::Null => SoftError::Null(info),
            ErrorKind::Arithmetic => SoftError::Arithmetic(info),
        }
    }

    /// Creates a failure of the given kind carrying its default message.
    pub fn of(kind: ErrorKind) -> Self {
        let info = match kind.default_message() {
            Some(message) => ErrorInfo::new().with_message(message),
            None => ErrorInfo::new(),
        };
        Self::new(kind, info)
    }

    /// Creates a failure of the given kind whose message renders the template with `name`.
    pub fn templated(kind: ErrorKind, name: &str) -> Self {
        Self::new(kind, ErrorInfo::new().with_message(kind.render(name)))
    }

    /// Creates a failure of the given kind carrying its default message and `cause`.
    pub fn caused(kind: ErrorKind, cause: impl Into<Cause>) -> Self {
        let mut error = Self::of(kind);
        error.info_mut().cause = Some(cause.into());
        error
    }

    /// Returns the discriminant of the failure.
    pub fn kind(&self) -> ErrorKind {
        match self {
            SoftError::Soft(_) => ErrorKind::Soft,
            SoftError::Function(_) => ErrorKind::Function,
            SoftError::Evaluate(_) => ErrorKind::Evaluate,
            SoftError::Compute(_) => ErrorKind::Compute,
            SoftError::Call(_) => ErrorKind::Call,
            SoftError::Supply(_) => ErrorKind::Supply,
            SoftError::Consume(_) => ErrorKind::Consume,
            SoftError::Execute(_) => ErrorKind::Execute,
            SoftError::Null(_) => ErrorKind::Null,
            SoftError::Arithmetic(_) => ErrorKind::Arithmetic,
        }
    }

    /// Returns `true` when the failure is of `kind` or one of its descendants.
    pub fn is(&self, kind: ErrorKind) -> bool {
        self.kind().is_a(kind)
    }

    /// Returns a reference to the payload describing the failure.
    pub fn info(&self) -> &ErrorInfo {
        match self {
            SoftError::Soft(info)
            | SoftError::Function(info)
            | SoftError::Evaluate(info)
            | SoftError::Compute(info)
            | SoftError::Call(info)
            | SoftError::Supply(info)
            | SoftError::Consume(info)
            | SoftError::Execute(info)
            | SoftError::Null(info)
            | SoftError::Arithmetic(info) => info,
        }
    }

    /// Returns a mutable reference to the payload describing the failure.
    pub fn info_mut(&mut self) -> &mut ErrorInfo {
        match self {
            SoftError::Soft(info)
            | SoftError::Function(info)
            | SoftError::Evaluate(info)
            | SoftError::Compute(info)
            | SoftError::Call(info)
            | SoftError::Supply(info)
            | SoftError::Consume(info)
            | SoftError::Execute(info)
            | SoftError::Null(info)
            | SoftError::Arithmetic(info) => info,
        }
    }

    /// Returns the diagnostic message, if any.
    pub fn message(&self) -> Option<&str> {
        self.info().message()
    }

    /// Returns the triggering cause, if any.
    pub fn cause(&self) -> Option<&Cause> {
        self.info().cause.as_ref()
    }

    /// Adds a context entry to the payload.
    pub fn with_context(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.info_mut().context.insert(key.into(), value.into());
        self
    }
}
