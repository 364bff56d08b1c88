//! Configuration error types.
//!
//! All configuration constructors return `Result<T, ConfigError>` so invalid
//! values are rejected as soon as they are built.
//!
//! # Example
//!
//! ```rust
//! use commercetools_customer::{ProjectKey, ConfigError};
//!
//! let result = ProjectKey::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidProjectKey { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building a [`crate::CommercetoolsConfig`].
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// Project key is empty or contains characters the platform rejects.
    #[error("Invalid project key '{key}'. Expected 2-256 characters of lowercase letters, digits, '-' or '_'.")]
    InvalidProjectKey {
        /// The key that was provided.
        key: String,
    },

    /// Client id cannot be empty.
    #[error("Client id cannot be empty. Please provide the id of an API client.")]
    EmptyClientId,

    /// Client secret cannot be empty.
    #[error("Client secret cannot be empty. Please provide the secret of an API client.")]
    EmptyClientSecret,

    /// Service URL is invalid.
    #[error("Invalid service URL '{url}'. Expected an http(s) URL such as 'https://api.europe-west1.gcp.commercetools.com'.")]
    InvalidServiceUrl {
        /// The URL that was provided.
        url: String,
    },

    /// Scopes are invalid.
    #[error("Invalid scopes: {reason}")]
    InvalidScopes {
        /// The reason the scopes are invalid.
        reason: String,
    },

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },

    /// A required environment variable is not set.
    #[error("Environment variable '{name}' is not set.")]
    MissingEnvVar {
        /// The variable name.
        name: &'static str,
    },
}
