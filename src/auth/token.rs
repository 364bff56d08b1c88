//! Bearer access tokens.

use crate::auth::AuthScopes;
use serde::Deserialize;
use std::fmt;

/// Token endpoint response body.
///
/// Only the fields this crate reads are kept; `expires_in`, `refresh_token`
/// and `token_type` are ignored since tokens are never refreshed here.
#[derive(Clone, Debug, Deserialize)]
pub struct TokenResponse {
    /// The bearer token.
    pub access_token: String,
    /// Space separated scopes granted to the token.
    #[serde(default)]
    pub scope: Option<String>,
}

/// An access token used as `Authorization: Bearer <token>`.
///
/// `Debug` output masks the token.
///
/// # Example
///
/// ```rust
/// use commercetools_customer::AccessToken;
///
/// let token = AccessToken::new("abc123");
/// assert_eq!(token.authorization_header(), "Bearer abc123");
/// ```
#[derive(Clone)]
pub struct AccessToken {
    /// The raw token value.
    pub token: String,
    /// Scopes granted to the token, when the auth service reported them.
    pub scopes: AuthScopes,
}

impl AccessToken {
    /// Wraps an existing token with unknown scopes.
    #[must_use]
    pub fn new(token: impl Into<String>) -> Self {
        Self {
            token: token.into(),
            scopes: AuthScopes::new(),
        }
    }

    /// Builds a token from a token endpoint response.
    ///
    /// Scopes that fail to parse are dropped rather than failing the exchange.
    #[must_use]
    pub fn from_token_response(response: &TokenResponse) -> Self {
        let scopes = response
            .scope
            .as_deref()
            .and_then(|s| s.parse().ok())
            .unwrap_or_default();

        Self {
            token: response.access_token.clone(),
            scopes,
        }
    }

    /// Returns `true` if the token value is blank.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.token.trim().is_empty()
    }

    /// Returns the `Authorization` header value.
    #[must_use]
    pub fn authorization_header(&self) -> String {
        format!("Bearer {}", self.token)
    }
}

impl fmt::Debug for AccessToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AccessToken")
            .field("token", &"*****")
            .field("scopes", &self.scopes)
            .finish()
    }
}

// Verify AccessToken is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<AccessToken>();
};
