//! HTTP error types.
//!
//! - [`HttpResponseError`]: a non-2xx response from the platform
//! - [`InvalidHttpRequestError`]: a request that failed validation before sending
//! - [`HttpError`]: the unified error for the HTTP layer
//! - [`ApiError`]: an [`HttpError`] or a failure to obtain a token
//!
//! # Example
//!
//! ```rust,ignore
//! use commercetools_customer::clients::HttpError;
//!
//! match client.request(request).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.message),
//!     Err(HttpError::InvalidRequest(e)) => println!("Invalid request: {e}"),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//! }
//! ```

use thiserror::Error;

use crate::auth::AuthError;

/// Error returned when a request receives a non-successful response.
///
/// `message` is a JSON object holding the platform's `message` and `errors`
/// fields, plus an `error_reference` naming the correlation id when the
/// response carried one.
#[derive(Debug, Error)]
#[error("{message}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Serialized error message in JSON format.
    pub message: String,
    /// The `X-Correlation-ID` of the failed request.
    pub correlation_id: Option<String>,
}

/// Error returned when a request fails validation.
///
/// ```rust
/// use commercetools_customer::clients::InvalidHttpRequestError;
///
/// let error = InvalidHttpRequestError::MissingBody { method: "post".to_string() };
/// assert_eq!(error.to_string(), "Cannot use post without specifying data.");
/// ```
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// A POST request was made without a body.
    #[error("Cannot use {method} without specifying data.")]
    MissingBody {
        /// The HTTP method that requires a body.
        method: String,
    },

    /// A GET request was given a body.
    #[error("Cannot send data with {method}.")]
    UnexpectedBody {
        /// The HTTP method that takes no body.
        method: String,
    },

    /// A path segment was empty or a dot segment.
    #[error("Invalid path segment {segment:?}")]
    InvalidPathSegment {
        /// The rejected segment.
        segment: String,
    },
}

/// Unified error type for the HTTP layer.
#[derive(Debug, Error)]
pub enum HttpError {
    /// A non-2xx response.
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

/// Error returned by [`crate::clients::ApiRoot::execute`].
#[derive(Debug, Error)]
pub enum ApiError {
    /// No bearer token could be obtained.
    #[error(transparent)]
    Auth(#[from] AuthError),

    /// The request itself failed.
    #[error(transparent)]
    Http(#[from] HttpError),
}

impl From<InvalidHttpRequestError> for ApiError {
    fn from(error: InvalidHttpRequestError) -> Self {
        Self::Http(HttpError::InvalidRequest(error))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_response_error_displays_message() {
        let error = HttpResponseError {
            code: 404,
            message: r#"{"message":"The Resource with ID 'abc' was not found."}"#.to_string(),
            correlation_id: None,
        };
        assert_eq!(
            error.to_string(),
            r#"{"message":"The Resource with ID 'abc' was not found."}"#
        );
    }

    #[test]
    fn test_invalid_path_segment_quotes_segment() {
        let error = InvalidHttpRequestError::InvalidPathSegment {
            segment: "..".to_string(),
        };
        assert_eq!(error.to_string(), r#"Invalid path segment "..""#);
    }

    #[test]
    fn test_http_error_wraps_response_error_transparently() {
        let error: HttpError = HttpResponseError {
            code: 409,
            message: "conflict".to_string(),
            correlation_id: Some("corr-1".to_string()),
        }
        .into();
        assert_eq!(error.to_string(), "conflict");
    }
}
