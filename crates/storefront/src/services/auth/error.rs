//! Login error types.

use thiserror::Error;

/// Errors from the demo login endpoint.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    /// Email or password left blank.
    #[error("Email and password are required")]
    MissingCredentials,

    /// The directory holds no accounts to fall back on.
    #[error("no directory accounts configured")]
    EmptyDirectory,
}
