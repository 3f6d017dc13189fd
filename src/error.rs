//! Centralized error handling for the editing core.
//!
//! `Status` is what the `Document`/dispatcher boundary returns for every
//! mutation (spec.md §7): out-of-range input is a silent `NoOp`, never an
//! allocated error, so typing on the hot path never pays for error-object
//! construction. `EditorError` is the structured error used at the CLI/IO
//! boundary and for the rare `Fatal` status.

use std::fmt;

/// How serious an error is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Info,
    Warning,
    Error,
    Critical,
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Info => write!(f, "INFO"),
            Self::Warning => write!(f, "WARN"),
            Self::Error => write!(f, "ERROR"),
            Self::Critical => write!(f, "CRITICAL"),
        }
    }
}

/// Category of the error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Io,
    Internal,
    Clipboard,
    Other,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io => write!(f, "IO"),
            Self::Internal => write!(f, "Internal"),
            Self::Clipboard => write!(f, "Clipboard"),
            Self::Other => write!(f, "Other"),
        }
    }
}

/// A structured error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EditorError {
    pub severity: ErrorSeverity,
    pub kind: ErrorKind,
    pub code: String,
    pub message: String,
}

impl EditorError {
    pub fn new(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Error,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }

    pub fn critical(kind: ErrorKind, code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            severity: ErrorSeverity::Critical,
            kind,
            code: code.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for EditorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{}] {}({}): {}",
            self.severity, self.kind, self.code, self.message
        )
    }
}

impl std::error::Error for EditorError {}

impl From<std::io::Error> for EditorError {
    fn from(err: std::io::Error) -> Self {
        Self::new(ErrorKind::Io, "IO_ERROR", err.to_string())
    }
}

/// Result of an operation at the Document boundary (spec.md §7).
///
/// An edit either succeeds end-to-end or is reported as a no-op; there is
/// no partially-applied state observable by callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Status {
    /// The mutation was applied.
    Ok,
    /// Clamped/invalid input; document unchanged.
    NoOp,
    /// Unrecoverable failure (e.g. the ADD region could not grow).
    Fatal(EditorError),
}

impl Status {
    pub fn is_ok(&self) -> bool {
        matches!(self, Status::Ok)
    }

    pub fn is_noop(&self) -> bool {
        matches!(self, Status::NoOp)
    }
}

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
