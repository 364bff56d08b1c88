//! HTTP client for the platform API.
//!
//! [`HttpClient`] sends one authenticated request and parses the response.
//! It never retries: a transport failure or non-2xx status is returned to
//! the caller as is.

use std::collections::HashMap;

use crate::auth::AccessToken;
use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::HttpResponse;
use crate::config::CommercetoolsConfig;

/// Crate version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client bound to one project and one bearer token.
///
/// The client handles:
/// - URL construction from the configured API URL and project key
/// - Default headers: `User-Agent`, `Accept` and `Authorization`
/// - Error body serialization for non-2xx responses
///
/// # Example
///
/// ```rust,ignore
/// use commercetools_customer::{AccessToken, HttpClient, HttpRequest};
///
/// let client = HttpClient::with_client(reqwest::Client::new(), &config, &AccessToken::new("token"));
/// let response = client.request(HttpRequest::get("me")).await?;
/// ```
#[derive(Debug)]
pub struct HttpClient {
    client: reqwest::Client,
    /// Base URI (e.g., `https://api.europe-west1.gcp.commercetools.com`).
    base_uri: String,
    /// Base path (e.g., `/my-shop`).
    base_path: String,
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new client reusing an existing `reqwest` connection pool.
    #[must_use]
    pub fn with_client(
        client: reqwest::Client,
        config: &CommercetoolsConfig,
        token: &AccessToken,
    ) -> Self {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}commercetools-customer-rust/{SDK_VERSION}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        if !token.is_empty() {
            default_headers.insert("Authorization".to_string(), token.authorization_header());
        }

        Self {
            client,
            base_uri: config.api_url().to_string(),
            base_path: format!("/{}", config.project_key()),
            default_headers,
        }
    }

    /// Returns the base URI for this client.
    #[must_use]
    pub fn base_uri(&self) -> &str {
        &self.base_uri
    }

    /// Returns the base path for this client.
    #[must_use]
    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Returns the default headers for this client.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Sends a request to the platform API.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error occurs (`Network`)
    /// - A non-2xx response is received (`Response`)
    pub async fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = format!("{}{}/{}", self.base_uri, self.base_path, request.path);

        let mut req_builder = match request.http_method {
            HttpMethod::Get => self.client.get(&url),
            HttpMethod::Post => self.client.post(&url),
        };

        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }
        if let Some(body) = &request.body {
            req_builder = req_builder
                .header("Content-Type", "application/json")
                .body(body.to_string());
        }

        tracing::debug!(method = %request.http_method, path = %request.path, "sending request");

        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let res_headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let body = Self::parse_body(code, &body_text);

        let response = HttpResponse::new(code, res_headers, body);

        if response.is_ok() {
            return Ok(response);
        }

        let message = Self::serialize_error(&response);
        tracing::warn!(
            status = code,
            path = %request.path,
            correlation_id = response.correlation_id().unwrap_or_default(),
            "request failed"
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            message,
            correlation_id: response.correlation_id().map(String::from),
        }))
    }

    /// Parses the response text; no body becomes `Value::Null`.
    fn parse_body(code: u16, body_text: &str) -> serde_json::Value {
        if code == 204 || body_text.trim().is_empty() {
            return serde_json::Value::Null;
        }

        serde_json::from_str(body_text).unwrap_or_else(|_| {
            if code >= 500 {
                serde_json::json!({ "raw_body": body_text })
            } else {
                tracing::warn!(status = code, "response body is not valid JSON");
                serde_json::Value::Null
            }
        })
    }

    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }

    /// Serializes the platform's error fields to a JSON string.
    fn serialize_error(response: &HttpResponse) -> String {
        let mut error_body = serde_json::Map::new();

        for field in ["message", "errors", "error", "error_description", "raw_body"] {
            if let Some(value) = response.body.get(field) {
                error_body.insert(field.to_string(), value.clone());
            }
        }

        if let Some(correlation_id) = response.correlation_id() {
            error_body.insert(
                "error_reference".to_string(),
                serde_json::json!(format!(
                    "If you report this error, please include this id: {correlation_id}."
                )),
            );
        }

        serde_json::to_string(&error_body).unwrap_or_else(|_| "{}".to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{ClientId, ClientSecret, ProjectKey, ServiceUrl};
    use serde_json::json;

    fn create_test_config(prefix: Option<&str>) -> CommercetoolsConfig {
        let mut builder = CommercetoolsConfig::builder()
            .project_key(ProjectKey::new("test-project").unwrap())
            .client_id(ClientId::new("client").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap());
        if let Some(prefix) = prefix {
            builder = builder.user_agent_prefix(prefix);
        }
        builder.build().unwrap()
    }

    fn client_for(config: &CommercetoolsConfig, token: &str) -> HttpClient {
        HttpClient::with_client(reqwest::Client::new(), config, &AccessToken::new(token))
    }

    #[test]
    fn test_client_construction() {
        let client = client_for(&create_test_config(None), "tok");

        assert_eq!(
            client.base_uri(),
            "https://api.europe-west1.gcp.commercetools.com"
        );
        assert_eq!(client.base_path(), "/test-project");
    }

    #[test]
    fn test_authorization_header_injection() {
        let client = client_for(&create_test_config(None), "tok");

        assert_eq!(
            client.default_headers().get("Authorization"),
            Some(&"Bearer tok".to_string())
        );
    }

    #[test]
    fn test_no_authorization_header_when_token_empty() {
        let client = client_for(&create_test_config(None), "");
        assert!(client.default_headers().get("Authorization").is_none());
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let client = client_for(&create_test_config(Some("Storefront/2.1")), "tok");

        let user_agent = client.default_headers().get("User-Agent").unwrap();
        assert!(user_agent.starts_with("Storefront/2.1 | "));
        assert!(user_agent.contains("commercetools-customer-rust/"));
    }

    #[test]
    fn test_parse_body_maps_empty_to_null() {
        assert!(HttpClient::parse_body(200, "").is_null());
        assert!(HttpClient::parse_body(200, "  \n").is_null());
        assert!(HttpClient::parse_body(204, "{}").is_null());
        assert_eq!(HttpClient::parse_body(200, r#"{"id":"a"}"#), json!({"id": "a"}));
        assert_eq!(
            HttpClient::parse_body(502, "Bad Gateway"),
            json!({"raw_body": "Bad Gateway"})
        );
    }

    #[test]
    fn test_serialize_error_includes_message_and_reference() {
        let mut headers = HashMap::new();
        headers.insert("x-correlation-id".to_string(), vec!["corr-9".to_string()]);
        let response = HttpResponse::new(
            409,
            headers,
            json!({
                "statusCode": 409,
                "message": "Object has a different version than expected.",
                "errors": [{"code": "ConcurrentModification", "currentVersion": 4}]
            }),
        );

        let message = HttpClient::serialize_error(&response);
        assert!(message.contains("different version"));
        assert!(message.contains("ConcurrentModification"));
        assert!(message.contains("corr-9"));
        assert!(!message.contains("statusCode"));
    }

    /// Serves one response whose body is cut short of its `Content-Length`.
    fn serve_truncated_body() -> String {
        use std::io::{Read, Write};

        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = listener.local_addr().unwrap();
        std::thread::spawn(move || {
            let (mut stream, _) = listener.accept().unwrap();
            let mut request = Vec::new();
            let mut buf = [0_u8; 1024];
            while !request.windows(4).any(|w| w == b"\r\n\r\n") {
                let n = stream.read(&mut buf).unwrap();
                if n == 0 {
                    break;
                }
                request.extend_from_slice(&buf[..n]);
            }
            stream
                .write_all(
                    b"HTTP/1.1 200 OK\r\nContent-Type: application/json\r\nContent-Length: 100\r\n\r\n{\"id\"",
                )
                .unwrap();
        });
        format!("http://{addr}")
    }

    #[tokio::test]
    async fn test_broken_body_stream_is_network_error() {
        let base = serve_truncated_body();
        let config = CommercetoolsConfig::builder()
            .project_key(ProjectKey::new("test-project").unwrap())
            .client_id(ClientId::new("client").unwrap())
            .client_secret(ClientSecret::new("secret").unwrap())
            .api_url(ServiceUrl::new(base).unwrap())
            .build()
            .unwrap();

        let result = client_for(&config, "tok").request(HttpRequest::get("me")).await;

        assert!(matches!(result, Err(HttpError::Network(_))));
    }
}
