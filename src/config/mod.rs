//! Configuration types for the customer account client.
//!
//! # Overview
//!
//! - [`CommercetoolsConfig`]: project key, API client credentials, service URLs
//! - [`CommercetoolsConfigBuilder`]: builder for [`CommercetoolsConfig`]
//! - [`ProjectKey`], [`ClientId`], [`ClientSecret`], [`ServiceUrl`]: validated newtypes
//!
//! # Example
//!
//! ```rust
//! use commercetools_customer::{CommercetoolsConfig, ProjectKey, ClientId, ClientSecret};
//!
//! let config = CommercetoolsConfig::builder()
//!     .project_key(ProjectKey::new("my-shop").unwrap())
//!     .client_id(ClientId::new("client-id").unwrap())
//!     .client_secret(ClientSecret::new("client-secret").unwrap())
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(config.project_key().as_ref(), "my-shop");
//! ```

mod newtypes;

pub use newtypes::{ClientId, ClientSecret, ProjectKey, ServiceUrl};

use crate::auth::AuthScopes;
use crate::error::ConfigError;

/// Default HTTP API host (Europe, Google Cloud).
pub const DEFAULT_API_URL: &str = "https://api.europe-west1.gcp.commercetools.com";

/// Default auth host (Europe, Google Cloud).
pub const DEFAULT_AUTH_URL: &str = "https://auth.europe-west1.gcp.commercetools.com";

/// Configuration for talking to one commercetools project.
///
/// `CommercetoolsConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct CommercetoolsConfig {
    project_key: ProjectKey,
    client_id: ClientId,
    client_secret: ClientSecret,
    api_url: ServiceUrl,
    auth_url: ServiceUrl,
    scopes: AuthScopes,
    user_agent_prefix: Option<String>,
}

impl CommercetoolsConfig {
    /// Creates a new builder.
    #[must_use]
    pub fn builder() -> CommercetoolsConfigBuilder {
        CommercetoolsConfigBuilder::new()
    }

    /// Loads the configuration from the process environment.
    ///
    /// Reads `CTP_PROJECT_KEY`, `CTP_CLIENT_ID`, `CTP_CLIENT_SECRET` (required)
    /// and `CTP_API_URL`, `CTP_AUTH_URL`, `CTP_SCOPES` (optional).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingEnvVar`] for a missing required variable,
    /// or the validation error of the offending value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Loads the configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// See [`CommercetoolsConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| {
            lookup(name)
                .filter(|value| !value.trim().is_empty())
                .ok_or(ConfigError::MissingEnvVar { name })
        };

        let mut builder = Self::builder()
            .project_key(ProjectKey::new(required("CTP_PROJECT_KEY")?)?)
            .client_id(ClientId::new(required("CTP_CLIENT_ID")?)?)
            .client_secret(ClientSecret::new(required("CTP_CLIENT_SECRET")?)?);

        if let Some(url) = lookup("CTP_API_URL") {
            builder = builder.api_url(ServiceUrl::new(url)?);
        }
        if let Some(url) = lookup("CTP_AUTH_URL") {
            builder = builder.auth_url(ServiceUrl::new(url)?);
        }
        if let Some(scopes) = lookup("CTP_SCOPES") {
            builder = builder.scopes(scopes.parse()?);
        }

        builder.build()
    }

    /// Returns the project key.
    #[must_use]
    pub const fn project_key(&self) -> &ProjectKey {
        &self.project_key
    }

    /// Returns the API client id.
    #[must_use]
    pub const fn client_id(&self) -> &ClientId {
        &self.client_id
    }

    /// Returns the API client secret.
    #[must_use]
    pub const fn client_secret(&self) -> &ClientSecret {
        &self.client_secret
    }

    /// Returns the HTTP API base URL.
    #[must_use]
    pub const fn api_url(&self) -> &ServiceUrl {
        &self.api_url
    }

    /// Returns the auth service base URL.
    #[must_use]
    pub const fn auth_url(&self) -> &ServiceUrl {
        &self.auth_url
    }

    /// Returns the scopes requested when exchanging tokens.
    #[must_use]
    pub const fn scopes(&self) -> &AuthScopes {
        &self.scopes
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

// Verify CommercetoolsConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CommercetoolsConfig>();
};

/// Builder for [`CommercetoolsConfig`].
///
/// `project_key`, `client_id` and `client_secret` are required.
///
/// # Defaults
///
/// - `api_url`: [`DEFAULT_API_URL`]
/// - `auth_url`: [`DEFAULT_AUTH_URL`]
/// - `scopes`: empty (the platform grants the API client's scopes)
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct CommercetoolsConfigBuilder {
    project_key: Option<ProjectKey>,
    client_id: Option<ClientId>,
    client_secret: Option<ClientSecret>,
    api_url: Option<ServiceUrl>,
    auth_url: Option<ServiceUrl>,
    scopes: Option<AuthScopes>,
    user_agent_prefix: Option<String>,
}

impl CommercetoolsConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the project key (required).
    #[must_use]
    pub fn project_key(mut self, key: ProjectKey) -> Self {
        self.project_key = Some(key);
        self
    }

    /// Sets the API client id (required).
    #[must_use]
    pub fn client_id(mut self, id: ClientId) -> Self {
        self.client_id = Some(id);
        self
    }

    /// Sets the API client secret (required).
    #[must_use]
    pub fn client_secret(mut self, secret: ClientSecret) -> Self {
        self.client_secret = Some(secret);
        self
    }

    /// Sets the HTTP API base URL.
    #[must_use]
    pub fn api_url(mut self, url: ServiceUrl) -> Self {
        self.api_url = Some(url);
        self
    }

    /// Sets the auth service base URL.
    #[must_use]
    pub fn auth_url(mut self, url: ServiceUrl) -> Self {
        self.auth_url = Some(url);
        self
    }

    /// Sets the scopes requested on token exchange.
    #[must_use]
    pub fn scopes(mut self, scopes: AuthScopes) -> Self {
        self.scopes = Some(scopes);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`CommercetoolsConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `project_key`,
    /// `client_id` or `client_secret` is not set.
    pub fn build(self) -> Result<CommercetoolsConfig, ConfigError> {
        let project_key = self.project_key.ok_or(ConfigError::MissingRequiredField {
            field: "project_key",
        })?;
        let client_id = self
            .client_id
            .ok_or(ConfigError::MissingRequiredField { field: "client_id" })?;
        let client_secret = self.client_secret.ok_or(ConfigError::MissingRequiredField {
            field: "client_secret",
        })?;

        let api_url = match self.api_url {
            Some(url) => url,
            None => ServiceUrl::new(DEFAULT_API_URL)?,
        };
        let auth_url = match self.auth_url {
            Some(url) => url,
            None => ServiceUrl::new(DEFAULT_AUTH_URL)?,
        };

        Ok(CommercetoolsConfig {
            project_key,
            client_id,
            client_secret,
            api_url,
            auth_url,
            scopes: self.scopes.unwrap_or_default(),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn required_builder() -> CommercetoolsConfigBuilder {
        CommercetoolsConfig::builder()
            .project_key(ProjectKey::new("test-project").unwrap())
            .client_id(ClientId::new("test-client").unwrap())
            .client_secret(ClientSecret::new("test-secret").unwrap())
    }

    #[test]
    fn test_builder_requires_project_key() {
        let result = CommercetoolsConfigBuilder::new()
            .client_id(ClientId::new("id").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "project_key"
            })
        ));
    }

    #[test]
    fn test_builder_requires_client_secret() {
        let result = CommercetoolsConfigBuilder::new()
            .project_key(ProjectKey::new("test-project").unwrap())
            .client_id(ClientId::new("id").unwrap())
            .build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField {
                field: "client_secret"
            })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = required_builder().build().unwrap();

        assert_eq!(config.api_url().as_ref(), DEFAULT_API_URL);
        assert_eq!(config.auth_url().as_ref(), DEFAULT_AUTH_URL);
        assert!(config.scopes().is_empty());
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = required_builder()
            .api_url(ServiceUrl::new("http://localhost:8080").unwrap())
            .auth_url(ServiceUrl::new("http://localhost:8081").unwrap())
            .scopes("manage_my_profile:test-project".parse().unwrap())
            .user_agent_prefix("Storefront/2.1")
            .build()
            .unwrap();

        assert_eq!(config.api_url().as_ref(), "http://localhost:8080");
        assert_eq!(config.auth_url().as_ref(), "http://localhost:8081");
        assert!(!config.scopes().is_empty());
        assert_eq!(config.user_agent_prefix(), Some("Storefront/2.1"));
    }

    #[test]
    fn test_config_debug_does_not_leak_secret() {
        let config = required_builder().build().unwrap();
        let debug_str = format!("{config:?}");
        assert!(debug_str.contains("CommercetoolsConfig"));
        assert!(!debug_str.contains("test-secret"));
    }

    #[test]
    fn test_from_lookup_reads_all_variables() {
        let vars: HashMap<&str, &str> = [
            ("CTP_PROJECT_KEY", "env-project"),
            ("CTP_CLIENT_ID", "env-client"),
            ("CTP_CLIENT_SECRET", "env-secret"),
            ("CTP_API_URL", "https://api.us-central1.gcp.commercetools.com"),
            ("CTP_AUTH_URL", "https://auth.us-central1.gcp.commercetools.com"),
            ("CTP_SCOPES", "view_customers:env-project"),
        ]
        .into_iter()
        .collect();

        let config =
            CommercetoolsConfig::from_lookup(|name| vars.get(name).map(ToString::to_string))
                .unwrap();

        assert_eq!(config.project_key().as_ref(), "env-project");
        assert_eq!(config.client_id().as_ref(), "env-client");
        assert_eq!(
            config.api_url().host_name(),
            "api.us-central1.gcp.commercetools.com"
        );
        assert!(config
            .scopes()
            .iter()
            .any(|s| s == "view_customers:env-project"));
    }

    #[test]
    fn test_from_lookup_reports_missing_variable() {
        let result = CommercetoolsConfig::from_lookup(|name| match name {
            "CTP_PROJECT_KEY" => Some("env-project".to_string()),
            _ => None,
        });

        assert!(matches!(
            result,
            Err(ConfigError::MissingEnvVar {
                name: "CTP_CLIENT_ID"
            })
        ));
    }
}
