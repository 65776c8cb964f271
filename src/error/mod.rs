//! Error module for the Trie Toolkit.
//!
//! Library operations report [`TrieError`](crate::data_structures::TrieError)
//! on their own. This module wraps those together with configuration, I/O and
//! serialization failures into a single application error, and provides the
//! context and reporting types the binary uses to surface them.

use std::fmt::{Display, Formatter};
use thiserror::Error;
use tracing_error::SpanTrace;

use crate::data_structures::TrieError;

pub mod config;

/// Result type alias used throughout the Trie Toolkit.
pub type ToolkitResult<T> = Result<T, ToolkitError>;

/// Core error enum for the Trie Toolkit.
#[derive(Error, Debug)]
pub enum ToolkitError {
    /// Errors occurring during configuration loading or validation.
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    /// Errors raised by trie operations.
    #[error("Trie error: {0}")]
    Trie(#[from] TrieError),

    /// IO errors that may occur during file operations.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON deserialization errors for untyped command-line arguments.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Custom error with message for cases where specific error types are not defined.
    #[error("{0}")]
    Custom(String),
}

/// Error reporting structure to provide context and debugging information.
#[derive(Debug)]
pub struct ErrorContext {
    /// The original error that occurred.
    pub error: ToolkitError,

    /// The component where the error occurred.
    pub component: String,

    /// Additional context information to help with debugging.
    pub details: Option<String>,

    /// Span trace captured where the error was reported.
    pub trace: Option<String>,
}

impl ErrorContext {
    /// Creates a new error context with the given error and component.
    ///
    /// # Arguments
    ///
    /// * `error` - The error that occurred
    /// * `component` - The component where the error occurred
    pub fn new<S: Into<String>>(error: ToolkitError, component: S) -> Self {
        Self {
            error,
            component: component.into(),
            details: None,
            trace: None,
        }
    }

    /// Adds detail information to the error context.
    pub fn with_details<S: Into<String>>(mut self, details: S) -> Self {
        self.details = Some(details.into());
        self
    }

    /// Attaches the span trace of the current tracing context.
    ///
    /// Spans are only recorded when a `tracing_error::ErrorLayer` is installed;
    /// otherwise the trace is empty and left unset.
    pub fn with_span_trace(mut self) -> Self {
        let trace = SpanTrace::capture().to_string();
        if !trace.is_empty() {
            self.trace = Some(trace);
        }
        self
    }
}

impl Display for ErrorContext {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "Error in {}: {}", self.component, self.error)?;
        if let Some(details) = &self.details {
            write!(f, "\nDetails: {details}")?;
        }
        Ok(())
    }
}

/// Error reporter trait for reporting errors to various sinks.
pub trait ErrorReporter: Send + Sync + std::fmt::Debug {
    /// Report an error with context.
    fn report(&self, context: ErrorContext);
}

/// Error reporter that logs errors using the tracing framework.
#[derive(Default, Debug)]
pub struct TracingErrorReporter;

impl ErrorReporter for TracingErrorReporter {
    fn report(&self, context: ErrorContext) {
        tracing::error!(
            error = %context.error,
            component = %context.component,
            details = context.details.as_deref().unwrap_or("None"),
            trace = context.trace.as_deref().unwrap_or("None"),
            "Error reported"
        );
    }
}
