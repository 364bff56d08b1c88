//! HTTP response types.

use std::collections::HashMap;

/// An HTTP response from the platform API.
///
/// A response without a body (empty payload or `204 No Content`) carries
/// `serde_json::Value::Null` so callers can tell "no body" apart from an
/// empty JSON object.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// The HTTP status code.
    pub code: u16,
    /// Response headers, keyed by lowercase name.
    pub headers: HashMap<String, Vec<String>>,
    /// The parsed response body.
    pub body: serde_json::Value,
}

impl HttpResponse {
    /// Creates a new `HttpResponse`.
    #[must_use]
    pub fn new(
        code: u16,
        headers: HashMap<String, Vec<String>>,
        body: serde_json::Value,
    ) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` if the response status code is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code <= 299
    }

    /// Returns `true` if the response carried no body.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.body.is_null()
    }

    /// Returns the `X-Correlation-ID` header value, if present.
    ///
    /// Include it when reporting a failed request to platform support.
    #[must_use]
    pub fn correlation_id(&self) -> Option<&str> {
        self.headers
            .get("x-correlation-id")
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
