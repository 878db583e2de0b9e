//! Authentication error types.

use thiserror::Error;

/// Errors that can occur during login.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AuthError {
    /// Username and password did not match any profile.
    #[error("invalid username or password")]
    InvalidCredentials,
}
