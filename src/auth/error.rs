//! Authentication error types.

use thiserror::Error;

/// Errors raised while obtaining a bearer token.
///
/// # Example
///
/// ```rust
/// use commercetools_customer::auth::AuthError;
///
/// let error = AuthError::TokenRequestFailed {
///     status: 400,
///     message: "invalid_customer_account_credentials".to_string(),
/// };
/// assert!(error.to_string().contains("400"));
/// ```
#[derive(Debug, Error)]
pub enum AuthError {
    /// The existing-token flow was requested but no session token is set.
    #[error("No session token available for the existing token flow")]
    MissingSessionToken,

    /// The token endpoint rejected the request, could not be reached, or
    /// returned an unreadable body. A network failure is reported as status 0.
    #[error("Token request failed with status {status}: {message}")]
    TokenRequestFailed {
        /// HTTP status code, or 0 for a network failure.
        status: u16,
        /// Error body or description.
        message: String,
    },
}

// Verify AuthError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AuthError>();
};
