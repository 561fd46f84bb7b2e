//! Error types for underbar.
//!
//! Absence is never an error in this crate: lookups that may miss return
//! `Option`. The variants here cover the few operations that can genuinely
//! fail: dispatching a method by name, and scheduling deferred work.

/// Represents errors that can occur in underbar operations.
///
/// # Examples
///
/// ```rust
/// use underbar::UnderbarError;
///
/// let error = UnderbarError::UnknownMethod {
///     receiver: "String",
///     method: "explode".to_string(),
/// };
/// assert_eq!(format!("{error}"), "String has no method named `explode`");
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum UnderbarError {
    /// `invoke_named` was asked for a method the element does not provide.
    UnknownMethod {
        /// The receiver type name.
        receiver: &'static str,
        /// The method name that was requested.
        method: String,
    },
    /// `delay` was called outside of a runtime that can schedule it.
    NoScheduler,
    /// A delayed invocation was cancelled before it ran.
    Cancelled,
}

impl std::fmt::Display for UnderbarError {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownMethod { receiver, method } => {
                write!(formatter, "{receiver} has no method named `{method}`")
            }
            Self::NoScheduler => write!(
                formatter,
                "delay: no scheduler available. Call it from within a tokio runtime or use delay_on."
            ),
            Self::Cancelled => write!(formatter, "delay: the scheduled invocation was cancelled"),
        }
    }
}

impl std::error::Error for UnderbarError {}
