//! HTTP client layer for the platform API.
//!
//! # Overview
//!
//! - [`ApiRootFactory`] / [`ClientBuilder`]: build authenticated [`ApiRoot`] handles
//! - [`ApiRoot`]: one authentication flow plus request helpers for customer endpoints
//! - [`HttpClient`]: sends a single request with bearer auth
//! - [`HttpRequest`], [`HttpResponse`], [`HttpMethod`]
//! - [`encode_path_segment`]: single-segment encoding for caller-supplied ids
//! - [`HttpError`], [`ApiError`]: failures of this layer
//!
//! # Example
//!
//! ```rust,ignore
//! use commercetools_customer::clients::{ApiRoot, ApiRootFactory, ClientBuilder};
//!
//! let factory = ClientBuilder::new(config).session_token(token);
//! let api = factory.with_existing_token_flow()?;
//! let response = api.execute(ApiRoot::me()).await?;
//! println!("{}", response.body);
//! ```
//!
//! There is no retry logic: every failure is returned to the caller.

mod api_root;
mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use api_root::{ApiRoot, ApiRootFactory, ClientBuilder};
pub use errors::{ApiError, HttpError, HttpResponseError, InvalidHttpRequestError};
pub use http_client::{HttpClient, SDK_VERSION};
pub use http_request::{encode_path_segment, HttpMethod, HttpRequest};
pub use http_response::HttpResponse;
