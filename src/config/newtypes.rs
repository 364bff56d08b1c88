//! Validated newtype wrappers for configuration values.
//!
//! These wrap raw strings and validate them on construction, so an invalid
//! project key or URL is rejected before any request is built.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A validated commercetools project key.
///
/// Project keys are 2-256 characters of lowercase ASCII letters, digits,
/// `-` and `_`. The key appears in every API path (`/{projectKey}/...`).
///
/// # Example
///
/// ```rust
/// use commercetools_customer::ProjectKey;
///
/// let key = ProjectKey::new("my-shop").unwrap();
/// assert_eq!(key.as_ref(), "my-shop");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ProjectKey(String);

impl ProjectKey {
    const MIN_LEN: usize = 2;
    const MAX_LEN: usize = 256;

    /// Creates a new validated project key.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidProjectKey`] if the key is too short,
    /// too long, or contains invalid characters.
    pub fn new(key: impl Into<String>) -> Result<Self, ConfigError> {
        let key = key.into().trim().to_string();

        let valid_len = (Self::MIN_LEN..=Self::MAX_LEN).contains(&key.len());
        let valid_chars = key
            .chars()
            .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '-' || c == '_');

        if !valid_len || !valid_chars {
            return Err(ConfigError::InvalidProjectKey { key });
        }
        Ok(Self(key))
    }
}

impl AsRef<str> for ProjectKey {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ProjectKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Serialize for ProjectKey {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.0)
    }
}

impl<'de> Deserialize<'de> for ProjectKey {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Self::new(s).map_err(de::Error::custom)
    }
}

/// A validated API client id.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientId(String);

impl ClientId {
    /// Creates a new validated client id.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientId`] if the id is empty.
    pub fn new(id: impl Into<String>) -> Result<Self, ConfigError> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(ConfigError::EmptyClientId);
        }
        Ok(Self(id))
    }
}

impl AsRef<str> for ClientId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// A validated API client secret.
///
/// The `Debug` implementation masks the value so it never ends up in logs.
///
/// ```rust
/// use commercetools_customer::ClientSecret;
///
/// let secret = ClientSecret::new("s3cr3t").unwrap();
/// assert_eq!(format!("{:?}", secret), "ClientSecret(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct ClientSecret(String);

impl ClientSecret {
    /// Creates a new validated client secret.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyClientSecret`] if the secret is empty.
    pub fn new(secret: impl Into<String>) -> Result<Self, ConfigError> {
        let secret = secret.into();
        if secret.is_empty() {
            return Err(ConfigError::EmptyClientSecret);
        }
        Ok(Self(secret))
    }
}

impl AsRef<str> for ClientSecret {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for ClientSecret {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("ClientSecret(*****)")
    }
}

/// A validated base URL of a platform service (API or auth).
///
/// Only `http` and `https` schemes are accepted. A trailing slash is
/// stripped so paths can be appended directly.
///
/// # Example
///
/// ```rust
/// use commercetools_customer::ServiceUrl;
///
/// let url = ServiceUrl::new("https://auth.europe-west1.gcp.commercetools.com/").unwrap();
/// assert_eq!(url.as_ref(), "https://auth.europe-west1.gcp.commercetools.com");
/// assert_eq!(url.host_name(), "auth.europe-west1.gcp.commercetools.com");
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ServiceUrl {
    url: String,
    host_start: usize,
    host_end: usize,
}

impl ServiceUrl {
    /// Creates a new validated service URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidServiceUrl`] if the scheme is not
    /// http(s) or the host is empty.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into().trim().trim_end_matches('/').to_string();

        let host_start = if url.starts_with("https://") {
            "https://".len()
        } else if url.starts_with("http://") {
            "http://".len()
        } else {
            return Err(ConfigError::InvalidServiceUrl { url });
        };

        let remainder = &url[host_start..];
        let host_end = remainder
            .find([':', '/', '?', '#'])
            .map_or(url.len(), |i| host_start + i);

        if host_end == host_start {
            return Err(ConfigError::InvalidServiceUrl { url });
        }

        Ok(Self {
            url,
            host_start,
            host_end,
        })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> &str {
        &self.url[self.host_start..self.host_end]
    }
}

impl AsRef<str> for ServiceUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for ServiceUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}
