//! Custom error types with exit codes

use thiserror::Error;

/// Main error type for bpinit operations
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum InitError {
    /// Validation Error - malformed domain, title, or repository value
    #[error("Validation error: {message}")]
    Validation { message: String },

    /// Conflict Error - the requested domain is already taken in a registry
    #[error("Conflict error: {message}")]
    Conflict { message: String },

    /// Git Error - Git inspection failed
    #[error("Git error: {message}")]
    Git { message: String },

    /// Filesystem Error - file operation failed
    #[error("Filesystem error: {message}")]
    Filesystem { message: String },

    /// Merge Error - structured-config merge failed
    #[error("Merge error: {message}")]
    Merge { message: String },

    /// Cancelled - the operator declined to continue
    #[error("Cancelled: {message}")]
    Cancelled { message: String },
}

impl InitError {
    /// Get the appropriate exit code for this error type
    #[must_use]
    #[inline]
    pub const fn exit_code(&self) -> i32 {
        match *self {
            Self::Validation { .. } => 1,
            Self::Conflict { .. } => 2,
            Self::Git { .. } => 3,
            Self::Filesystem { .. } => 4,
            Self::Merge { .. } => 5,
            Self::Cancelled { .. } => 6,
        }
    }

    /// Create a validation error
    #[inline]
    pub fn validation<S: Into<String>>(message: S) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    /// Create a conflict error
    #[inline]
    pub fn conflict<S: Into<String>>(message: S) -> Self {
        Self::Conflict {
            message: message.into(),
        }
    }

    /// Create a git error
    #[inline]
    pub fn git<S: Into<String>>(message: S) -> Self {
        Self::Git {
            message: message.into(),
        }
    }

    /// Create a filesystem error
    #[inline]
    pub fn filesystem<S: Into<String>>(message: S) -> Self {
        Self::Filesystem {
            message: message.into(),
        }
    }

    /// Create a merge error
    #[inline]
    pub fn merge<S: Into<String>>(message: S) -> Self {
        Self::Merge {
            message: message.into(),
        }
    }

    /// Create a cancellation error
    #[inline]
    pub fn cancelled<S: Into<String>>(message: S) -> Self {
        Self::Cancelled {
            message: message.into(),
        }
    }
}
