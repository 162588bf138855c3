//! Error types for the SLP world interpreter.
//!
//! Uses `thiserror` for ergonomic error definition with rich context.

use std::fmt;

use thiserror::Error;

/// Result alias used by every pipeline stage.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for pipeline operations.
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

    /// Adds context to this error.
    #[must_use]
    pub fn with_context(mut self, context: ErrorContext) -> Self {
        self.context = Some(context);
        self
    }

    /// Creates an empty-name error for a raw name that canonicalized to nothing.
    #[must_use]
    pub fn empty_name(raw: impl Into<String>) -> Self {
        Self::new(ErrorKind::EmptyName { raw: raw.into() })
    }

    /// Creates a syntax error at the given 1-indexed line.
    #[must_use]
    pub fn syntax(line: usize, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax {
            line,
            message: message.into(),
        })
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Internal(message.into()))
    }
}

impl From<fmt::Error> for Error {
    fn from(_: fmt::Error) -> Self {
        Self::new(ErrorKind::Format)
    }
}

/// Categorized error kinds for pattern matching.
#[derive(Debug, Error)]
pub enum ErrorKind {
    /// A non-empty raw name canonicalized to the empty string.
    #[error("name {raw:?} canonicalizes to an empty name")]
    EmptyName {
        /// The raw name as it reached the stage.
        raw: String,
    },

    /// SLP text did not have the shape the emitter produces.
    #[error("syntax error at line {line}: {message}")]
    Syntax {
        /// Line number (1-indexed).
        line: usize,
        /// Description of the problem.
        message: String,
    },

    /// Writing formatted output failed.
    #[error("formatting failed")]
    Format,

    /// Internal error (should not happen).
    #[error("internal error: {0}")]
    Internal(String),
}

/// Context about where an error occurred.
#[derive(Debug, Clone, Default)]
pub struct ErrorContext {
    /// Pipeline stage that raised the error.
    pub stage: Option<String>,
    /// Sentence index (parser) or line number (reader).
    pub position: Option<usize>,
    /// The input fragment being processed.
    pub fragment: Option<String>,
}

impl ErrorContext {
    /// Creates a new empty context.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the stage name.
    #[must_use]
    pub fn with_stage(mut self, stage: impl Into<String>) -> Self {
        self.stage = Some(stage.into());
        self
    }

    /// Sets the position within the stage input.
    #[must_use]
    pub fn with_position(mut self, position: usize) -> Self {
        self.position = Some(position);
        self
    }

    /// Sets the input fragment.
    #[must_use]
    pub fn with_fragment(mut self, fragment: impl Into<String>) -> Self {
        self.fragment = Some(fragment.into());
        self
    }
}

impl fmt::Display for ErrorContext {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(stage) = &self.stage {
            write!(f, "in {stage}")?;
            if let Some(position) = self.position {
                write!(f, " at #{position}")?;
            }
        }
        if let Some(fragment) = &self.fragment {
            write!(f, " ({fragment:?})")?;
        }
        Ok(())
    }
}
