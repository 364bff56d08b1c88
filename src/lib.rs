//! # commercetools customer accounts
//!
//! Customer account operations over the commercetools HTTP API: read the
//! signed-in customer's profile, update it with update actions, count
//! customers by email, and change a password.
//!
//! ## Overview
//!
//! - Typed configuration via [`CommercetoolsConfig`] and validated newtypes
//! - Two authentication flows behind [`ApiRootFactory`]: an existing
//!   session token, or the customer password flow
//! - A single-shot HTTP client: no retries, no caching
//! - [`CustomerAccountService`] for the four account operations
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use commercetools_customer::{
//!     AccessToken, ClientBuilder, CommercetoolsConfig, CustomerAccountService,
//!     CustomerUpdateAction,
//! };
//!
//! let config = CommercetoolsConfig::from_env()?;
//! let factory = ClientBuilder::new(config).session_token(AccessToken::new(session_token));
//! let service = CustomerAccountService::new(factory);
//!
//! let me = service.fetch_profile().await?;
//! let updated = service
//!     .patch_profile(me.id(), me.version(), vec![CustomerUpdateAction::SetFirstName {
//!         first_name: Some("Jen".to_string()),
//!     }])
//!     .await?;
//!
//! service.change_password("jen@example.com", "old", "new").await?;
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events (requests at `debug`, failures at
//! `warn`). Install a subscriber in the application to see them.

pub mod auth;
pub mod clients;
pub mod config;
pub mod customers;
pub mod error;

pub use auth::{AccessToken, AuthError, AuthScopes};
pub use config::{
    ClientId, ClientSecret, CommercetoolsConfig, CommercetoolsConfigBuilder, ProjectKey,
    ServiceUrl,
};
pub use error::ConfigError;

pub use clients::{
    ApiError, ApiRoot, ApiRootFactory, ClientBuilder, HttpClient, HttpError, HttpMethod,
    HttpRequest, HttpResponse, HttpResponseError, InvalidHttpRequestError,
};

pub use customers::{
    AccountError, AccountStep, Customer, CustomerAccountService, CustomerChangePassword,
    CustomerProfile, CustomerUpdate, CustomerUpdateAction,
};
