//! Customer payloads exchanged with the platform.
//!
//! Field names follow the platform's camelCase JSON. [`Customer`] is a typed
//! view; [`CustomerProfile`] pairs it with the response body as received, so
//! callers get the platform's JSON back untouched.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{de, Deserialize, Deserializer, Serialize, Serializer};

use super::update_action::CustomerUpdateAction;

/// How a customer authenticates.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub enum AuthenticationMode {
    /// Email and password.
    #[default]
    Password,
    /// An external identity provider; the customer has no password.
    ExternalAuth,
    /// A mode this crate does not know yet.
    #[serde(other)]
    Unknown,
}

/// A postal address.
///
/// Every field is optional so partial addresses can be sent in update
/// actions.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BaseAddress {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub street_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_street_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub postal_code: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub city: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub region: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub state: Option<String>,
    /// Two-letter country code (ISO 3166-1 alpha-2).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub department: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub building: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub apartment: Option<String>,
    #[serde(rename = "pOBox", skip_serializing_if = "Option::is_none")]
    pub po_box: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_address_info: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
}

/// A customer record as returned by the platform.
///
/// `id` and `version` are always present on stored customers; `version` is
/// the optimistic-concurrency token every update must echo back.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub id: String,
    pub version: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub middle_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub salutation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub date_of_birth: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_id: Option<String>,
    #[serde(default)]
    pub addresses: Vec<BaseAddress>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_shipping_address_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub default_billing_address_id: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub shipping_address_ids: Vec<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub billing_address_ids: Vec<String>,
    #[serde(default)]
    pub is_email_verified: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locale: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub authentication_mode: Option<AuthenticationMode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_modified_at: Option<DateTime<Utc>>,
    /// Fields not modelled above (custom fields, stores, audit info, ...).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// A customer record exactly as the platform returned it.
///
/// [`body`](Self::body) is the response JSON as received: timestamps,
/// explicit `null`s and unmodelled fields are kept as sent.
/// [`customer`](Self::customer) is a typed view decoded from it.
///
/// Serializes as the original body.
///
/// ```rust
/// use commercetools_customer::customers::CustomerProfile;
/// use serde_json::json;
///
/// let body = json!({"id": "c-1", "version": 7, "middleName": null});
/// let profile = CustomerProfile::from_body(body.clone()).unwrap();
///
/// assert_eq!(profile.id(), "c-1");
/// assert_eq!(profile.body(), &body);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CustomerProfile {
    body: serde_json::Value,
    customer: Customer,
}

impl CustomerProfile {
    /// Decodes the typed view and keeps `body` as is.
    ///
    /// # Errors
    ///
    /// Returns the decoding error if `body` is not a customer record.
    pub fn from_body(body: serde_json::Value) -> Result<Self, serde_json::Error> {
        let customer = Customer::deserialize(&body)?;
        Ok(Self { body, customer })
    }

    /// The response body as received.
    #[must_use]
    pub const fn body(&self) -> &serde_json::Value {
        &self.body
    }

    /// Consumes the profile, returning the response body.
    #[must_use]
    pub fn into_body(self) -> serde_json::Value {
        self.body
    }

    /// The typed view of the body.
    #[must_use]
    pub const fn customer(&self) -> &Customer {
        &self.customer
    }

    #[must_use]
    pub fn id(&self) -> &str {
        &self.customer.id
    }

    #[must_use]
    pub const fn version(&self) -> i64 {
        self.customer.version
    }
}

impl From<CustomerProfile> for serde_json::Value {
    fn from(profile: CustomerProfile) -> Self {
        profile.body
    }
}

impl Serialize for CustomerProfile {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.body.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for CustomerProfile {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let body = serde_json::Value::deserialize(deserializer)?;
        Self::from_body(body).map_err(de::Error::custom)
    }
}

/// Body of `POST customers/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CustomerUpdate {
    pub version: i64,
    pub actions: Vec<CustomerUpdateAction>,
}

/// Body of `POST customers/password`.
///
/// `Debug` masks both passwords.
#[derive(Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerChangePassword {
    pub id: String,
    pub version: i64,
    pub current_password: String,
    pub new_password: String,
}

impl std::fmt::Debug for CustomerChangePassword {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CustomerChangePassword")
            .field("id", &self.id)
            .field("version", &self.version)
            .field("current_password", &"*****")
            .field("new_password", &"*****")
            .finish()
    }
}

/// Result page of `GET customers`.
///
/// `count` is optional on the wire; callers treat a missing count as zero.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CustomerPagedQueryResponse {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub limit: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub offset: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub count: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    #[serde(default)]
    pub results: Vec<Customer>,
}
