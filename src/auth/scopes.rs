//! OAuth scope handling.
//!
//! Scopes take the form `permission:project-key`, for example
//! `manage_my_profile:my-shop`, and travel as a space separated list.

use crate::error::ConfigError;
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;

/// An ordered list of OAuth scopes.
///
/// Scopes are kept as configured, in their original order with duplicates
/// removed. Nothing is added: the auth service rejects scopes the API client
/// was not granted.
///
/// # Example
///
/// ```rust
/// use commercetools_customer::AuthScopes;
///
/// let scopes: AuthScopes = "manage_my_profile:my-shop  view_orders:my-shop".parse().unwrap();
/// assert_eq!(scopes.to_string(), "manage_my_profile:my-shop view_orders:my-shop");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub struct AuthScopes {
    scopes: Vec<String>,
}

impl AuthScopes {
    /// Creates an empty scope list.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if no scope is set.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.scopes.is_empty()
    }

    /// Returns an iterator over the scopes, in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.scopes.iter().map(String::as_str)
    }

    fn is_valid_scope(scope: &str) -> bool {
        scope
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | ':' | '-'))
    }
}

impl FromStr for AuthScopes {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut scopes: Vec<String> = Vec::new();

        for scope in s.split_whitespace() {
            if !Self::is_valid_scope(scope) {
                return Err(ConfigError::InvalidScopes {
                    reason: format!("Invalid characters in scope: '{scope}'"),
                });
            }
            if !scopes.iter().any(|existing| existing == scope) {
                scopes.push(scope.to_string());
            }
        }

        Ok(Self { scopes })
    }
}

impl fmt::Display for AuthScopes {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.scopes.join(" "))
    }
}

impl Serialize for AuthScopes {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for AuthScopes {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(de::Error::custom)
    }
}
