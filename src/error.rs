//! Error types for the waitlist relay.

/// Validation failures for a submission.
///
/// The `Display` strings are the exact messages returned to the caller,
/// so they must stay stable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Invalid name")]
    InvalidName,

    #[error("Invalid email")]
    InvalidEmail,

    #[error("Invalid phone")]
    InvalidPhone,
}
