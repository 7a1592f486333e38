//! Error types for the Primer system.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

use crate::types::Type;

/// The main error type for Primer operations.
#[derive(Debug, Error)]
#[error("{kind}")]
pub struct Error {
    /// The kind of error that occurred.
    pub kind: ErrorKind,
    /// Optional context about where the error occurred.
    pub context: Option<ErrorContext>,
}

impl Error {
    /// Creates a new error with the given kind.
    #[must_use]
    pub fn new(kind: ErrorKind) -> Self {
        Self {
            kind,
            context: None,
        }
    }

    /// Pushes a stack frame onto this error's context, creating it if needed.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_frame(frame));
        self
    }

    /// Sets the source on this error's context, keeping any recorded frames.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        let context = self.context.take().unwrap_or_default();
        self.context = Some(context.with_source(source));
        self
    }

    /// Creates a type mismatch error.
    #[must_use]
    pub fn type_mismatch(expected: Type, actual: Type) -> Self {
        Self::new(ErrorKind::TypeMismatch { expected, actual })
    }

    /// Creates an arity mismatch error.
    #[must_use]
    pub fn arity_mismatch(expected: String, actual: usize) -> Self {
        Self::new(ErrorKind::ArityMismatch { expected, actual })
    }

    /// Creates an integer overflow error for the named operation.
    #[must_use]
    pub fn overflow(operation: impl Into<String>) -> Self {
        Self::new(ErrorKind::Overflow {
            operation: operation.into(),
        })
    }

    /// Creates an invalid range error.
    #[must_use]
    pub fn invalid_range(low: i64, high: i64) -> Self {
        Self::new(ErrorKind::InvalidRange { low, high })
    }

    /// Creates an out-of-range argument error.
    #[must_use]
    pub fn out_of_range(value: i64, min: i64, max: i64) -> Self {
        Self::new(ErrorKind::OutOfRange { value, min, max })
    }

    /// Creates an undefined function error.
    #[must_use]
    pub fn undefined_function(name: impl Into<String>) -> Self {
        Self::new(ErrorKind::UndefinedFunction(name.into()))
    }
}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io(err))
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// Type mismatch during runtime type checking.
    #[error("type mismatch: expected {expected}, got {actual}")]
    TypeMismatch {
        /// The expected type.
        expected: Type,
        /// The actual type encountered.
        actual: Type,
    },

    /// Wrong number of arguments to function.
    #[error("arity mismatch: expected {expected}, got {actual}")]
    ArityMismatch {
        /// Description of expected arity.
        expected: String,
        /// Actual number of arguments.
        actual: usize,
    },

    /// Integer arithmetic left the `i64` range.
    #[error("integer overflow in {operation}")]
    Overflow {
        /// The operation that overflowed.
        operation: String,
    },

    /// Empty inclusive range (low greater than high).
    #[error("invalid range: {low}..={high}")]
    InvalidRange {
        /// Lower bound.
        low: i64,
        /// Upper bound.
        high: i64,
    },

    /// Argument outside the domain an operation accepts.
    #[error("value {value} out of range {min}..={max}")]
    OutOfRange {
        /// The rejected value.
        value: i64,
        /// Smallest accepted value.
        min: i64,
        /// Largest accepted value.
        max: i64,
    },

    /// No native function with this name.
    #[error("undefined function: {0}")]
    UndefinedFunction(String),

    /// Writing output failed.
    #[error("i/o error: {0}")]
    Io(std::io::Error),
}

/// Context about where an error occurred.
#[derive(Debug, Clone)]
pub struct ErrorContext {
    /// Driver step or function name.
    pub source: Option<String>,
    /// Stack of calls leading to the error.
    pub stack: Vec<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self {
            source: None,
            stack: Vec::new(),
        }
    }

    /// Sets the source.
    #[must_use]
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = Some(source.into());
        self
    }

    /// Adds a stack frame.
    #[must_use]
    pub fn with_frame(mut self, frame: impl Into<String>) -> Self {
        self.stack.push(frame.into());
        self
    }
}

impl Default for ErrorContext {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(source) = &self.source {
            write!(f, "at {source}")?;
        }
        if !self.stack.is_empty() {
            writeln!(f)?;
            for frame in &self.stack {
                writeln!(f, "  in {frame}")?;
            }
        }
        Ok(())
    }
}
