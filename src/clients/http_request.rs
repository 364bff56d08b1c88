//! HTTP request types.
//!
//! An [`HttpRequest`] is one call to the platform API, addressed relative to
//! the project base path. Caller-supplied identifiers are placed in the path
//! through [`encode_path_segment`], so each one stays a single segment.

use std::fmt;

use crate::clients::errors::InvalidHttpRequestError;

/// HTTP methods used by the customer endpoints.
///
/// The platform updates resources with `POST`, so there is no `PUT`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HttpMethod {
    /// Reads a resource or runs a query.
    Get,
    /// Creates or updates a resource; always carries a JSON body.
    Post,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Get => write!(f, "get"),
            Self::Post => write!(f, "post"),
        }
    }
}

/// A request to the platform API.
///
/// Bodies are always JSON.
///
/// # Example
///
/// ```rust
/// use commercetools_customer::clients::{HttpMethod, HttpRequest};
/// use serde_json::json;
///
/// let query = HttpRequest::get("customers").with_query_param("where", r#"email="a@b.com""#);
/// assert_eq!(query.http_method, HttpMethod::Get);
///
/// let update = HttpRequest::post("customers/abc", json!({"version": 3, "actions": []}));
/// assert!(update.verify().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct HttpRequest {
    /// The HTTP method for this request.
    pub http_method: HttpMethod,
    /// The path relative to the project base path, already encoded.
    pub path: String,
    /// The JSON body, if any.
    pub body: Option<serde_json::Value>,
    /// Query parameters, in insertion order. Values are encoded on send.
    pub query: Vec<(String, String)>,
}

impl HttpRequest {
    /// A `GET` request for `path`.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self {
            http_method: HttpMethod::Get,
            path: path.into(),
            body: None,
            query: Vec::new(),
        }
    }

    /// A `POST` request for `path` with a JSON body.
    #[must_use]
    pub fn post(path: impl Into<String>, body: serde_json::Value) -> Self {
        Self {
            http_method: HttpMethod::Post,
            path: path.into(),
            body: Some(body),
            query: Vec::new(),
        }
    }

    /// Appends a query parameter.
    #[must_use]
    pub fn with_query_param(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.query.push((key.into(), value.into()));
        self
    }

    /// Checks that the body matches the method.
    ///
    /// # Errors
    ///
    /// [`InvalidHttpRequestError::MissingBody`] for a `POST` without a body,
    /// [`InvalidHttpRequestError::UnexpectedBody`] for a `GET` with one.
    pub fn verify(&self) -> Result<(), InvalidHttpRequestError> {
        match (self.http_method, &self.body) {
            (HttpMethod::Post, None) => Err(InvalidHttpRequestError::MissingBody {
                method: self.http_method.to_string(),
            }),
            (HttpMethod::Get, Some(_)) => Err(InvalidHttpRequestError::UnexpectedBody {
                method: self.http_method.to_string(),
            }),
            _ => Ok(()),
        }
    }
}

/// Percent-encodes `segment` so it occupies exactly one path segment.
///
/// Everything except unreserved characters is encoded, including `/`, `?`,
/// `#` and `%`. Segments the URL parser would treat as empty or as dot
/// segments (`.`, `..`) cannot be encoded and are rejected.
///
/// ```rust
/// use commercetools_customer::clients::encode_path_segment;
///
/// assert_eq!(encode_path_segment("a/b?c").unwrap(), "a%2Fb%3Fc");
/// assert!(encode_path_segment("..").is_err());
/// ```
///
/// # Errors
///
/// Returns [`InvalidHttpRequestError::InvalidPathSegment`] for an empty or
/// dot-only segment.
pub fn encode_path_segment(segment: &str) -> Result<String, InvalidHttpRequestError> {
    if matches!(segment, "" | "." | "..") {
        return Err(InvalidHttpRequestError::InvalidPathSegment {
            segment: segment.to_string(),
        });
    }
    Ok(urlencoding::encode(segment).into_owned())
}
