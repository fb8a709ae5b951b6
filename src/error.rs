//! Unified error types for murmur3-digest.
//!
//! Every error here is a caller contract violation. Nothing is retried and
//! nothing is silently clamped or defaulted: an out-of-range window or an
//! unparsable seed is reported back to the caller before any hashing starts.

use std::path::PathBuf;
use thiserror::Error;

use crate::config::{ConfigError, ConfigFileError};

/// Main error type for murmur3-digest operations.
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Murmur3Error {
    /// The input buffer was absent
    #[error("Input buffer is missing: {param} ({context})")]
    NullInput {
        param: &'static str,
        context: String,
    },

    /// Offset/length arguments that do not describe a window of the buffer
    #[error("Invalid argument: {context}")]
    InvalidArgument {
        context: String,
        #[source]
        source: ArgumentErrorKind,
    },

    /// A digest string that is not 32 hex characters
    #[error("Invalid digest: {0}")]
    InvalidDigest(String),

    /// Configuration errors
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// IO errors with context
    #[error("IO error at {path:?}: {message}")]
    Io {
        path: Option<PathBuf>,
        message: String,
        #[source]
        source: std::io::Error,
    },
}

/// Specific argument error kinds
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum ArgumentErrorKind {
    /// Negative, or too large for the platform's address space
    #[error("offset is not a valid index: {0}")]
    OffsetOutOfRange(String),

    #[error("length is not a valid byte count: {0}")]
    LengthOutOfRange(String),

    #[error("offset ({offset}) + length ({length}) exceeds buffer length ({buffer_len})")]
    WindowOutOfBounds {
        offset: usize,
        length: usize,
        buffer_len: usize,
    },
}

// ============================================================================
// Result type alias
// ============================================================================

/// Convenient Result type for murmur3-digest operations
pub type Result<T> = std::result::Result<T, Murmur3Error>;

// ============================================================================
// Error construction helpers
// ============================================================================

impl Murmur3Error {
    /// Create a missing-buffer error for the named parameter
    pub fn null_input(param: &'static str, context: impl Into<String>) -> Self {
        Self::NullInput {
            param,
            context: context.into(),
        }
    }

    /// Create an argument error with context
    pub fn invalid_argument(context: impl Into<String>, source: ArgumentErrorKind) -> Self {
        Self::InvalidArgument {
            context: context.into(),
            source,
        }
    }

    /// Create a digest parse error
    pub fn invalid_digest(message: impl Into<String>) -> Self {
        Self::InvalidDigest(message.into())
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config(message.into())
    }

    /// Create an IO error with path context
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        let message = format!("{source}");
        Self::Io {
            path: Some(path.into()),
            message,
            source,
        }
    }

    /// The argument error kind, if this is an argument error.
    #[must_use]
    pub const fn argument_kind(&self) -> Option<&ArgumentErrorKind> {
        match self {
            Self::InvalidArgument { source, .. } => Some(source),
            _ => None,
        }
    }
}

// ============================================================================
// Conversions from existing error types
// ============================================================================

impl From<std::io::Error> for Murmur3Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io {
            path: None,
            message: format!("{err}"),
            source: err,
        }
    }
}

impl From<ConfigError> for Murmur3Error {
    fn from(err: ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}

impl From<ConfigFileError> for Murmur3Error {
    fn from(err: ConfigFileError) -> Self {
        match err {
            ConfigFileError::Io { path, source } => Self::io(path, source),
            other => Self::Config(other.to_string()),
        }
    }
}

// ============================================================================
// Error context extension trait
// ============================================================================

/// Extension trait for adding context to errors.
///
/// The context string is prepended to any context the error already carries,
/// so the final message reads outermost-first.
///
/// # Example
///
/// ```
/// use murmur3_digest::{ErrorContext, Hasher, Result};
///
/// fn hash_record(record: &[u8], header_len: usize) -> Result<String> {
///     let digest = Hasher::new()
///         .compute_hash_window(record, header_len, record.len().saturating_sub(header_len))
///         .with_context(|| format!("hashing record body after {header_len}-byte header"))?;
///     Ok(digest.to_hex())
/// }
///
/// assert!(hash_record(b"HDRpayload", 3).is_ok());
/// assert!(hash_record(b"HD", 3).is_err());
/// ```
pub trait ErrorContext<T> {
    /// Add context to an error.
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context from a closure, evaluated only on error.
    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>;
}

impl<T, E: Into<Murmur3Error>> ErrorContext<T> for std::result::Result<T, E> {
    fn context(self, context: impl Into<String>) -> Result<T> {
        let ctx: String = context.into();
        self.map_err(|e| add_context_to_error(e.into(), &ctx))
    }

    fn with_context<F, C>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> C,
        C: Into<String>,
    {
        self.map_err(|e| {
            let ctx: String = f().into();
            add_context_to_error(e.into(), &ctx)
        })
    }
}

/// Add context to an error, chaining with any existing context.
fn add_context_to_error(err: Murmur3Error, new_ctx: &str) -> Murmur3Error {
    match err {
        Murmur3Error::InvalidArgument {
            context: existing,
            source,
        } => Murmur3Error::InvalidArgument {
            context: chain_context(new_ctx, &existing),
            source,
        },
        Murmur3Error::Io {
            path,
            message,
            source,
        } => Murmur3Error::Io {
            path,
            message: chain_context(new_ctx, &message),
            source,
        },
        Murmur3Error::InvalidDigest(msg) => {
            Murmur3Error::InvalidDigest(chain_context(new_ctx, &msg))
        }
        Murmur3Error::Config(msg) => Murmur3Error::Config(chain_context(new_ctx, &msg)),
        Murmur3Error::NullInput {
            param,
            context: existing,
        } => Murmur3Error::NullInput {
            param,
            context: chain_context(new_ctx, &existing),
        },
    }
}

/// Chain two context strings together.
///
/// If the existing context is empty, returns just the new context.
/// Otherwise, returns "`new_context`: `existing_context`".
fn chain_context(new: &str, existing: &str) -> String {
    if existing.is_empty() {
        new.to_string()
    } else {
        format!("{new}: {existing}")
    }
}
