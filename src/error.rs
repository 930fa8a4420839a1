//! Error types for generator execution.

use thiserror::Error;

/// Any failure a generator may report.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Wrapping error used by every executor.
///
/// A leaf error carries only a message. A wrapping error also carries the
/// failure that caused it and renders as `"<message>\ncaused by <cause>"`.
/// Causes are rendered with their own `Display`, so nested execution errors
/// print the whole chain.
#[derive(Debug, Error)]
#[error("{message}{}", render_cause(.cause))]
pub struct ExecutionError {
    message: String,
    #[source]
    cause: Option<BoxError>,
}

fn render_cause(cause: &Option<BoxError>) -> String {
    match cause {
        Some(cause) => format!("\ncaused by {}", cause),
        None => String::new(),
    }
}

impl ExecutionError {
    /// Leaf failure with no underlying cause.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            cause: None,
        }
    }

    /// Failure wrapping a lower-level error.
    pub fn with_cause(message: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self {
            message: message.into(),
            cause: Some(cause.into()),
        }
    }

    /// Local context message, without the cause.
    pub fn message(&self) -> &str {
        &self.message
    }

    /// Underlying failure, if this error wraps one.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }
}

/// Configuration and logging setup errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to load configuration: {0}")]
    Load(#[from] config::ConfigError),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Messages of `err` and every error in its `source()` chain, outermost first.
pub fn error_chain(err: &(dyn std::error::Error + 'static)) -> Vec<String> {
    let mut messages = vec![err.to_string()];
    let mut current = err.source();
    while let Some(cause) = current {
        messages.push(cause.to_string());
        current = cause.source();
    }
    messages
}
