//! Common error infrastructure for pasture-core.
//!
//! Domain-specific errors (`FieldError`, `ElementError`, `ListenerError`) are
//! defined next to the operations that produce them. Ordinary simulation
//! setbacks such as a blocked move or a missing calf are not errors at all;
//! they surface as a [`crate::Message`] on the element.

/// Severity level of an error, used for categorization and logging.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ErrorSeverity {
    /// Invalid input or call sequence; retrying unchanged will fail again.
    ///
    /// Examples: zero-sized field, operating an element that was never placed
    Validation,

    /// Unexpected condition outside the caller's direct control.
    ///
    /// Examples: a listener failed, the owning field was dropped
    Internal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Validation => "validation",
            Self::Internal => "internal",
        }
    }

    /// Returns true if this error indicates something other than bad input.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal)
    }
}

/// Common trait for all pasture-core errors.
pub trait PastureError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    fn error_code(&self) -> &'static str;
}
