//! Authenticated API handles and the factory that builds them.
//!
//! An [`ApiRoot`] is bound to one authentication flow:
//!
//! - **existing token**: requests carry the caller's session token;
//! - **password flow**: requests carry a token obtained from the customer's
//!   email and password. The token is fetched on the first request and
//!   reused by every later request on the same handle.
//!
//! Handles are built synchronously; only [`ApiRoot::execute`] is async.
//!
//! # Example
//!
//! ```rust,ignore
//! use commercetools_customer::clients::{ApiRoot, ApiRootFactory, ClientBuilder};
//!
//! let builder = ClientBuilder::new(config).session_token(AccessToken::new(token));
//! let api = builder.with_existing_token_flow()?;
//! let me = api.execute(ApiRoot::me()).await?;
//! ```

use std::fmt;

use tokio::sync::OnceCell;

use crate::auth::{exchange_customer_password, AccessToken, AuthError};
use crate::clients::errors::{ApiError, InvalidHttpRequestError};
use crate::clients::http_client::HttpClient;
use crate::clients::http_request::{encode_path_segment, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::CommercetoolsConfig;

enum AuthFlow {
    ExistingToken(AccessToken),
    Password {
        email: String,
        password: String,
        token: OnceCell<AccessToken>,
    },
}

impl fmt::Debug for AuthFlow {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::ExistingToken(token) => f.debug_tuple("ExistingToken").field(token).finish(),
            Self::Password { email, token, .. } => f
                .debug_struct("Password")
                .field("email", email)
                .field("password", &"*****")
                .field("token", &token.get())
                .finish(),
        }
    }
}

/// An authenticated handle to the platform API.
#[derive(Debug)]
pub struct ApiRoot {
    config: CommercetoolsConfig,
    client: reqwest::Client,
    flow: AuthFlow,
}

// Verify ApiRoot is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiRoot>();
};

impl ApiRoot {
    /// Creates a handle that sends the given session token.
    #[must_use]
    pub fn with_existing_token(
        config: CommercetoolsConfig,
        client: reqwest::Client,
        token: AccessToken,
    ) -> Self {
        Self {
            config,
            client,
            flow: AuthFlow::ExistingToken(token),
        }
    }

    /// Creates a handle that authenticates with customer credentials.
    ///
    /// No request is made until the first [`execute`](Self::execute).
    #[must_use]
    pub fn with_password_flow(
        config: CommercetoolsConfig,
        client: reqwest::Client,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            config,
            client,
            flow: AuthFlow::Password {
                email: email.into(),
                password: password.into(),
                token: OnceCell::new(),
            },
        }
    }

    /// Returns `true` if this handle uses the password flow.
    #[must_use]
    pub const fn is_password_flow(&self) -> bool {
        matches!(self.flow, AuthFlow::Password { .. })
    }

    /// Returns the configuration this handle was built with.
    #[must_use]
    pub const fn config(&self) -> &CommercetoolsConfig {
        &self.config
    }

    /// Returns the bearer token, exchanging credentials on first use.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError`] if the password exchange fails. A failed
    /// exchange is not cached, so the next call tries again.
    pub async fn access_token(&self) -> Result<&AccessToken, AuthError> {
        match &self.flow {
            AuthFlow::ExistingToken(token) => Ok(token),
            AuthFlow::Password {
                email,
                password,
                token,
            } => {
                token
                    .get_or_try_init(|| {
                        exchange_customer_password(&self.client, &self.config, email, password)
                    })
                    .await
            }
        }
    }

    /// Sends a request with this handle's token.
    ///
    /// # Errors
    ///
    /// Returns [`ApiError::Auth`] if a token cannot be obtained and
    /// [`ApiError::Http`] for transport, validation or non-2xx failures.
    pub async fn execute(&self, request: HttpRequest) -> Result<HttpResponse, ApiError> {
        let token = self.access_token().await?;
        let http = HttpClient::with_client(self.client.clone(), &self.config, token);
        Ok(http.request(request).await?)
    }

    /// `GET me`: the profile of the customer the token belongs to.
    #[must_use]
    pub fn me() -> HttpRequest {
        HttpRequest::get("me")
    }

    /// `POST customers/{id}` with an update body.
    ///
    /// The id is encoded as a single path segment, so it cannot address
    /// another resource.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidHttpRequestError::InvalidPathSegment`] for an empty,
    /// `.` or `..` id.
    pub fn update_customer(
        customer_id: &str,
        body: serde_json::Value,
    ) -> Result<HttpRequest, InvalidHttpRequestError> {
        let id = encode_path_segment(customer_id)?;
        Ok(HttpRequest::post(format!("customers/{id}"), body))
    }

    /// `GET customers?where=<predicate>`.
    #[must_use]
    pub fn query_customers(predicate: &str) -> HttpRequest {
        HttpRequest::get("customers").with_query_param("where", predicate)
    }

    /// `POST customers/password` with a change-password body.
    #[must_use]
    pub fn change_customer_password(body: serde_json::Value) -> HttpRequest {
        HttpRequest::post("customers/password", body)
    }
}

/// Produces [`ApiRoot`] handles for the two authentication flows.
///
/// Implement this to plug in a different token source; the customer
/// account service only talks to the platform through it.
pub trait ApiRootFactory: Send + Sync {
    /// Returns a handle bound to the caller's current session token.
    ///
    /// # Errors
    ///
    /// Returns [`AuthError::MissingSessionToken`] when no session is available.
    fn with_existing_token_flow(&self) -> Result<ApiRoot, AuthError>;

    /// Returns a handle bound to the given customer credentials.
    fn with_password_flow(&self, email: &str, password: &str) -> ApiRoot;
}

/// Default [`ApiRootFactory`]: one config, one connection pool, and an
/// optional session token for the existing-token flow.
#[derive(Clone, Debug)]
pub struct ClientBuilder {
    config: CommercetoolsConfig,
    client: reqwest::Client,
    session_token: Option<AccessToken>,
}

impl ClientBuilder {
    /// Creates a builder without a session token.
    #[must_use]
    pub fn new(config: CommercetoolsConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
            session_token: None,
        }
    }

    /// Sets the session token used by the existing-token flow.
    #[must_use]
    pub fn session_token(mut self, token: AccessToken) -> Self {
        self.session_token = Some(token);
        self
    }

    /// Returns the configuration.
    #[must_use]
    pub const fn config(&self) -> &CommercetoolsConfig {
        &self.config
    }
}

impl ApiRootFactory for ClientBuilder {
    fn with_existing_token_flow(&self) -> Result<ApiRoot, AuthError> {
        let token = self
            .session_token
            .clone()
            .filter(|token| !token.is_empty())
            .ok_or(AuthError::MissingSessionToken)?;

        Ok(ApiRoot::with_existing_token(
            self.config.clone(),
            self.client.clone(),
            token,
        ))
    }

    fn with_password_flow(&self, email: &str, password: &str) -> ApiRoot {
        ApiRoot::with_password_flow(
            self.config.clone(),
            self.client.clone(),
            email,
            password,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clients::http_request::HttpMethod;
    use crate::config::{ClientId, ClientSecret, ProjectKey};
    use serde_json::json;

    fn create_test_config() -> CommercetoolsConfig {
        CommercetoolsConfig::builder()
            .project_key(ProjectKey::new("test-project").unwrap())
            .client_id(ClientId::new("client").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .build()
            .unwrap()
    }

    #[test]
    fn test_existing_token_flow_requires_session_token() {
        let builder = ClientBuilder::new(create_test_config());
        assert!(matches!(
            builder.with_existing_token_flow(),
            Err(AuthError::MissingSessionToken)
        ));

        let builder = builder.session_token(AccessToken::new(""));
        assert!(matches!(
            builder.with_existing_token_flow(),
            Err(AuthError::MissingSessionToken)
        ));
    }

    #[test]
    fn test_factory_selects_flow() {
        let builder = ClientBuilder::new(create_test_config())
            .session_token(AccessToken::new("session"));

        assert!(!builder.with_existing_token_flow().unwrap().is_password_flow());
        assert!(builder
            .with_password_flow("jen@example.com", "pw")
            .is_password_flow());
    }

    #[test]
    fn test_existing_token_is_returned_without_exchange() {
        let builder = ClientBuilder::new(create_test_config())
            .session_token(AccessToken::new("session"));
        let api = builder.with_existing_token_flow().unwrap();

        let token = tokio_test::block_on(api.access_token()).unwrap();
        assert_eq!(token.token, "session");
    }

    #[test]
    fn test_debug_masks_password() {
        let api = ClientBuilder::new(create_test_config())
            .with_password_flow("jen@example.com", "hunter2");
        let debug = format!("{api:?}");
        assert!(debug.contains("jen@example.com"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_request_helpers_build_expected_paths() {
        let me = ApiRoot::me();
        assert_eq!(me.http_method, HttpMethod::Get);
        assert_eq!(me.path, "me");

        let update = ApiRoot::update_customer("cust-1", json!({"version": 1, "actions": []})).unwrap();
        assert_eq!(update.http_method, HttpMethod::Post);
        assert_eq!(update.path, "customers/cust-1");

        let query = ApiRoot::query_customers(r#"email="a@b.com""#);
        assert_eq!(query.path, "customers");
        assert_eq!(
            query.query,
            vec![("where".to_string(), r#"email="a@b.com""#.to_string())]
        );

        let password = ApiRoot::change_customer_password(json!({}));
        assert_eq!(password.http_method, HttpMethod::Post);
        assert_eq!(password.path, "customers/password");
    }

    #[test]
    fn test_update_customer_keeps_id_in_one_segment() {
        let update = ApiRoot::update_customer("../other?x=1", json!({})).unwrap();
        assert_eq!(update.path, "customers/..%2Fother%3Fx%3D1");

        assert!(matches!(
            ApiRoot::update_customer("..", json!({})),
            Err(InvalidHttpRequestError::InvalidPathSegment { .. })
        ));
    }
}
