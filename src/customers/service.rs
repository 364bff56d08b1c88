//! Customer account operations.

use serde::de::DeserializeOwned;

use crate::clients::{ApiRoot, ApiRootFactory, ClientBuilder, HttpResponse};
use crate::customers::errors::{AccountError, AccountStep};
use crate::customers::predicate::email_predicate;
use crate::customers::types::{
    CustomerChangePassword, CustomerPagedQueryResponse, CustomerProfile, CustomerUpdate,
};
use crate::customers::update_action::CustomerUpdateAction;

/// Customer account operations over the platform API.
///
/// Every call builds a fresh [`ApiRoot`] from the factory, sends one request
/// (two for [`change_password`](Self::change_password)) and maps the
/// response. Nothing is retried or cached between calls. Customer records
/// come back as [`CustomerProfile`], carrying the platform's body unchanged.
///
/// # Example
///
/// ```rust,ignore
/// use commercetools_customer::{AccessToken, ClientBuilder, CustomerAccountService};
///
/// let factory = ClientBuilder::new(config).session_token(AccessToken::new(token));
/// let service = CustomerAccountService::new(factory);
///
/// let me = service.fetch_profile().await?;
/// let taken = service.count_by_email("jen@example.com").await? > 0;
/// ```
#[derive(Debug, Clone)]
pub struct CustomerAccountService<F = ClientBuilder> {
    factory: F,
}

// Verify CustomerAccountService is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<CustomerAccountService>();
};

impl<F: ApiRootFactory> CustomerAccountService<F> {
    /// Creates a service over the given client factory.
    #[must_use]
    pub const fn new(factory: F) -> Self {
        Self { factory }
    }

    /// Returns the client factory.
    #[must_use]
    pub const fn factory(&self) -> &F {
        &self.factory
    }

    /// Fetches the signed-in customer's profile.
    ///
    /// # Errors
    ///
    /// [`AccountError::EmptyResponse`] if the platform returns no body;
    /// auth and HTTP failures are passed through.
    pub async fn fetch_profile(&self) -> Result<CustomerProfile, AccountError> {
        let api = self.factory.with_existing_token_flow()?;
        let response = api.execute(ApiRoot::me()).await?;
        decode_profile(response, AccountStep::FetchProfile)
    }

    /// Applies `actions`, in order, to the customer at `version`.
    ///
    /// Actions are forwarded without local validation; the platform rejects
    /// stale versions and malformed actions with an HTTP error. The id is
    /// sent as a single path segment.
    ///
    /// # Errors
    ///
    /// [`AccountError::EmptyResponse`] if the platform returns no body;
    /// [`AccountError::Http`] wrapping `InvalidPathSegment` for an empty,
    /// `.` or `..` id; auth and HTTP failures are passed through.
    pub async fn patch_profile(
        &self,
        customer_id: &str,
        version: i64,
        actions: Vec<CustomerUpdateAction>,
    ) -> Result<CustomerProfile, AccountError> {
        let api = self.factory.with_existing_token_flow()?;
        let update = CustomerUpdate { version, actions };

        tracing::debug!(
            customer_id,
            version,
            actions = update.actions.len(),
            "updating customer"
        );

        let body = to_body(&update, AccountStep::UpdateProfile)?;
        let response = api
            .execute(ApiRoot::update_customer(customer_id, body)?)
            .await?;
        decode_profile(response, AccountStep::UpdateProfile)
    }

    /// Counts customers whose email equals `email` exactly.
    ///
    /// Returns 0 when the response has no body or no `count` field.
    ///
    /// # Errors
    ///
    /// Auth and HTTP failures are passed through.
    pub async fn count_by_email(&self, email: &str) -> Result<u64, AccountError> {
        let api = self.factory.with_existing_token_flow()?;
        let response = api
            .execute(ApiRoot::query_customers(&email_predicate(email)))
            .await?;

        if response.is_empty() {
            return Ok(0);
        }
        let page: CustomerPagedQueryResponse = decode_body(response, AccountStep::CountByEmail)?;
        Ok(page.count.unwrap_or(0))
    }

    /// Changes a customer's password.
    ///
    /// Authenticates with `email` and `current_password` (not the caller's
    /// session), reads the profile to learn its id and version, then posts
    /// the change on the same session. Stops at the first empty response.
    ///
    /// # Errors
    ///
    /// [`AccountError::EmptyResponse`] naming the failing step;
    /// [`AccountError::Auth`] if the credentials are rejected; HTTP failures
    /// are passed through.
    pub async fn change_password(
        &self,
        email: &str,
        current_password: &str,
        new_password: &str,
    ) -> Result<CustomerProfile, AccountError> {
        let api = self.factory.with_password_flow(email, current_password);

        let response = api.execute(ApiRoot::me()).await?;
        let profile = decode_profile(response, AccountStep::PasswordProfile)?;

        tracing::debug!(
            customer_id = profile.id(),
            version = profile.version(),
            "changing customer password"
        );

        let change = CustomerChangePassword {
            id: profile.id().to_string(),
            version: profile.version(),
            current_password: current_password.to_string(),
            new_password: new_password.to_string(),
        };
        let body = to_body(&change, AccountStep::ChangePassword)?;

        let response = api.execute(ApiRoot::change_customer_password(body)).await?;
        decode_profile(response, AccountStep::ChangePassword)
    }
}

/// Fails on a response without a body.
fn require_body(
    response: HttpResponse,
    step: AccountStep,
) -> Result<serde_json::Value, AccountError> {
    if response.is_empty() {
        tracing::warn!(%step, status = response.code, "empty response body");
        return Err(AccountError::EmptyResponse {
            step,
            status: response.code,
        });
    }
    Ok(response.body)
}

fn decode_profile(
    response: HttpResponse,
    step: AccountStep,
) -> Result<CustomerProfile, AccountError> {
    let body = require_body(response, step)?;
    CustomerProfile::from_body(body).map_err(|source| AccountError::Payload { step, source })
}

fn decode_body<T: DeserializeOwned>(
    response: HttpResponse,
    step: AccountStep,
) -> Result<T, AccountError> {
    let body = require_body(response, step)?;
    serde_json::from_value(body).map_err(|source| AccountError::Payload { step, source })
}

fn to_body<T: serde::Serialize>(
    payload: &T,
    step: AccountStep,
) -> Result<serde_json::Value, AccountError> {
    serde_json::to_value(payload).map_err(|source| AccountError::Payload { step, source })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use std::collections::HashMap;

    #[test]
    fn test_decode_profile_rejects_empty() {
        let response = HttpResponse::new(200, HashMap::new(), serde_json::Value::Null);
        let result = decode_profile(response, AccountStep::FetchProfile);

        match result {
            Err(AccountError::EmptyResponse { step, status }) => {
                assert_eq!(step, AccountStep::FetchProfile);
                assert_eq!(status, 200);
            }
            other => panic!("Expected EmptyResponse, got {other:?}"),
        }
    }

    #[test]
    fn test_decode_profile_reports_malformed_payload() {
        let response = HttpResponse::new(200, HashMap::new(), json!({"id": 42}));
        let result = decode_profile(response, AccountStep::UpdateProfile);

        assert!(matches!(
            result,
            Err(AccountError::Payload {
                step: AccountStep::UpdateProfile,
                ..
            })
        ));
    }

    #[test]
    fn test_decode_profile_returns_body() {
        let body = json!({"id": "c-1", "version": 4, "key": null});
        let response = HttpResponse::new(200, HashMap::new(), body.clone());

        let profile = decode_profile(response, AccountStep::FetchProfile).unwrap();

        assert_eq!(profile.id(), "c-1");
        assert_eq!(profile.version(), 4);
        assert_eq!(profile.into_body(), body);
    }

    #[test]
    fn test_decode_body_reads_page() {
        let response = HttpResponse::new(200, HashMap::new(), json!({"count": 3, "results": []}));
        let page: CustomerPagedQueryResponse =
            decode_body(response, AccountStep::CountByEmail).unwrap();
        assert_eq!(page.count, Some(3));
    }
}
