//! Authentication error types.

use thiserror::Error;

/// Text of the blocking alert shown when sign-in fails.
pub const LOGIN_FAILED_MESSAGE: &str = "Microsoft login failed. Please try again.";

/// Errors that can occur during authentication operations.
#[derive(Debug, Error)]
pub enum AuthError {
    /// The identity provider reported a failure.
    #[error("identity provider error: {0}")]
    Provider(String),

    /// Sign-in through the identity provider failed.
    ///
    /// The message is shown to the user as-is.
    #[error("Microsoft login failed. Please try again.")]
    LoginFailed,
}
