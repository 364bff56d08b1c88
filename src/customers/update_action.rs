//! Customer update actions.
//!
//! Each action is one named mutation, serialized with its name in the
//! `action` field:
//!
//! ```rust
//! use commercetools_customer::CustomerUpdateAction;
//!
//! let action = CustomerUpdateAction::SetFirstName {
//!     first_name: Some("Jen".to_string()),
//! };
//! let json = serde_json::to_value(&action).unwrap();
//! assert_eq!(json["action"], "setFirstName");
//! assert_eq!(json["firstName"], "Jen");
//! ```
//!
//! For the `set*` actions, `None` removes the field on the platform side.
//! Actions are not validated locally. The platform defines more actions than
//! are modelled here; send those as [`CustomerUpdateAction::Other`]:
//!
//! ```rust
//! use commercetools_customer::CustomerUpdateAction;
//! use serde_json::json;
//!
//! let action = CustomerUpdateAction::Other(json!({"action": "setKey", "key": "vip-1"}));
//! assert_eq!(action.name(), "setKey");
//! ```

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::types::BaseAddress;

/// One mutation applied to a customer by `POST customers/{id}`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "action", rename_all = "camelCase")]
pub enum CustomerUpdateAction {
    ChangeEmail {
        email: String,
    },
    #[serde(rename_all = "camelCase")]
    SetFirstName {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        first_name: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    SetLastName {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        last_name: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    SetMiddleName {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        middle_name: Option<String>,
    },
    SetTitle {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        title: Option<String>,
    },
    SetSalutation {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        salutation: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    SetDateOfBirth {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        date_of_birth: Option<NaiveDate>,
    },
    #[serde(rename_all = "camelCase")]
    SetCompanyName {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        company_name: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    SetVatId {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        vat_id: Option<String>,
    },
    SetLocale {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        locale: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    SetCustomerNumber {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        customer_number: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    SetExternalId {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        external_id: Option<String>,
    },
    AddAddress {
        address: BaseAddress,
    },
    /// Replaces the address identified by `address_id` or `address_key`.
    #[serde(rename_all = "camelCase")]
    ChangeAddress {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_key: Option<String>,
        address: BaseAddress,
    },
    #[serde(rename_all = "camelCase")]
    RemoveAddress {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_key: Option<String>,
    },
    /// Both id and key absent unsets the default.
    #[serde(rename_all = "camelCase")]
    SetDefaultShippingAddress {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_key: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    SetDefaultBillingAddress {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_key: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    AddShippingAddressId {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_key: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    RemoveShippingAddressId {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_key: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    AddBillingAddressId {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_key: Option<String>,
    },
    #[serde(rename_all = "camelCase")]
    RemoveBillingAddressId {
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_id: Option<String>,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        address_key: Option<String>,
    },
    /// Any other action, sent as given. Must carry its own `action` field.
    #[serde(untagged)]
    Other(serde_json::Value),
}

impl CustomerUpdateAction {
    /// Returns the wire name of the action, e.g. `"setFirstName"`.
    ///
    /// Empty for an [`Other`](Self::Other) value without a string `action`.
    #[must_use]
    pub fn name(&self) -> &str {
        match self {
            Self::ChangeEmail { .. } => "changeEmail",
            Self::SetFirstName { .. } => "setFirstName",
            Self::SetLastName { .. } => "setLastName",
            Self::SetMiddleName { .. } => "setMiddleName",
            Self::SetTitle { .. } => "setTitle",
            Self::SetSalutation { .. } => "setSalutation",
            Self::SetDateOfBirth { .. } => "setDateOfBirth",
            Self::SetCompanyName { .. } => "setCompanyName",
            Self::SetVatId { .. } => "setVatId",
            Self::SetLocale { .. } => "setLocale",
            Self::SetCustomerNumber { .. } => "setCustomerNumber",
            Self::SetExternalId { .. } => "setExternalId",
            Self::AddAddress { .. } => "addAddress",
            Self::ChangeAddress { .. } => "changeAddress",
            Self::RemoveAddress { .. } => "removeAddress",
            Self::SetDefaultShippingAddress { .. } => "setDefaultShippingAddress",
            Self::SetDefaultBillingAddress { .. } => "setDefaultBillingAddress",
            Self::AddShippingAddressId { .. } => "addShippingAddressId",
            Self::RemoveShippingAddressId { .. } => "removeShippingAddressId",
            Self::AddBillingAddressId { .. } => "addBillingAddressId",
            Self::RemoveBillingAddressId { .. } => "removeBillingAddressId",
            Self::Other(value) => value
                .get("action")
                .and_then(serde_json::Value::as_str)
                .unwrap_or_default(),
        }
    }
}
