//! Error carrier returned by [`Validator::validate`](crate::Validator::validate).

/// Aggregate failure produced when one or more checks fail.
///
/// Carries a human-readable summary in `message` and the individual check
/// messages, in registration order, in `errors`. A fail-fast validator always
/// produces exactly one entry in `errors`.
///
/// # Example
///
/// ```rust
/// use fluentcheck::ValidationError;
///
/// let err = ValidationError::new(
///     "Validation failed: Name must not be blank",
///     vec!["Name must not be blank".to_string()],
/// );
/// assert_eq!(err.to_string(), "Validation failed: Name must not be blank");
/// assert_eq!(err.errors(), ["Name must not be blank"]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[error("{message}")]
pub struct ValidationError {
    message: String,
    errors: Vec<String>,
}

impl ValidationError {
    /// Create a new error from a summary message and its individual failures.
    pub fn new(message: impl Into<String>, errors: Vec<String>) -> Self {
        Self {
            message: message.into(),
            errors,
        }
    }

    /// Build the error a validator reports for the given failures.
    pub(crate) fn from_failures(errors: Vec<String>) -> Self {
        let message = format!("Validation failed: {}", errors.join(", "));
        Self::new(message, errors)
    }

    /// The summary message.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// The individual check messages, in registration order.
    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Consume the error, keeping only the individual check messages.
    pub fn into_errors(self) -> Vec<String> {
        self.errors
    }
}
