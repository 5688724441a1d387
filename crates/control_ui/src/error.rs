//! Error type for the non-statically-checked control boundary.

use thiserror::Error;

/// Failures raised when control parameters arrive from untyped input.
///
/// Typed Rust callers never observe these: the resolvers are total over [`ButtonVariant`] and
/// [`ButtonSize`]. They only surface when a name or payload is parsed from strings or JSON.
///
/// [`ButtonVariant`]: crate::ButtonVariant
/// [`ButtonSize`]: crate::ButtonSize
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ControlError {
    /// A variant name outside the closed variant set.
    #[error("invalid variant `{value}` (expected one of: primary, secondary, destructive, outline, ghost)")]
    InvalidVariant {
        /// Rejected input.
        value: String,
    },
    /// A size name outside the closed size set.
    #[error("invalid size `{value}` (expected one of: small, medium, large)")]
    InvalidSize {
        /// Rejected input.
        value: String,
    },
    /// The construction parameter payload could not be decoded.
    #[error("invalid control props: {0}")]
    InvalidProps(String),
}
