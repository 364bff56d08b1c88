//! Customer account error types.

use std::fmt;

use thiserror::Error;

use crate::auth::AuthError;
use crate::clients::{ApiError, HttpError, InvalidHttpRequestError};

/// The request step an account operation was in when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountStep {
    /// `GET me` with the caller's session.
    FetchProfile,
    /// `POST customers/{id}`.
    UpdateProfile,
    /// `GET customers?where=...`.
    CountByEmail,
    /// `GET me` with the password-flow session of a password change.
    PasswordProfile,
    /// `POST customers/password`.
    ChangePassword,
}

impl AccountStep {
    /// Message used when this step receives a response without a body.
    #[must_use]
    pub const fn empty_response_message(self) -> &'static str {
        match self {
            Self::FetchProfile => "Empty profile response",
            Self::UpdateProfile => "Empty update response",
            Self::CountByEmail => "Empty customer query response",
            Self::PasswordProfile => "Cannot fetch profile",
            Self::ChangePassword => "Password change failed",
        }
    }
}

impl fmt::Display for AccountStep {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::FetchProfile => "profile fetch",
            Self::UpdateProfile => "profile update",
            Self::CountByEmail => "customer count",
            Self::PasswordProfile => "password profile fetch",
            Self::ChangePassword => "password change",
        };
        f.write_str(name)
    }
}

/// Errors returned by [`crate::CustomerAccountService`].
///
/// ```rust
/// use commercetools_customer::customers::{AccountError, AccountStep};
///
/// let error = AccountError::EmptyResponse { step: AccountStep::FetchProfile, status: 204 };
/// assert_eq!(error.to_string(), "Empty profile response (status 204)");
/// ```
#[derive(Debug, Error)]
pub enum AccountError {
    /// The platform answered with a 2xx status but no body.
    #[error("{} (status {status})", .step.empty_response_message())]
    EmptyResponse {
        /// The step that received the empty response.
        step: AccountStep,
        /// The HTTP status observed.
        status: u16,
    },

    /// A request or response payload did not match the expected shape.
    #[error("Invalid {step} payload: {source}")]
    Payload {
        /// The step whose payload was malformed.
        step: AccountStep,
        /// The decoding error.
        #[source]
        source: serde_json::Error,
    },

    /// No bearer token could be obtained.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// Transport, validation or non-2xx failure, passed through unchanged.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl AccountError {
    /// Returns the step for errors raised by this crate's own checks.
    #[must_use]
    pub const fn step(&self) -> Option<AccountStep> {
        match self {
            Self::EmptyResponse { step, .. } | Self::Payload { step, .. } => Some(*step),
            Self::Auth(_) | Self::Http(_) => None,
        }
    }
}

impl From<ApiError> for AccountError {
    fn from(error: ApiError) -> Self {
        match error {
            ApiError::Auth(e) => Self::Auth(e),
            ApiError::Http(e) => Self::Http(e),
        }
    }
}

impl From<InvalidHttpRequestError> for AccountError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

// Verify AccountError is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AccountError>();
};
