//! Customer account operations and payloads.
//!
//! - [`CustomerAccountService`]: fetch profile, patch profile, count by
//!   email, change password
//! - [`CustomerProfile`]: a customer record as returned, with a typed view
//! - [`Customer`], [`CustomerUpdateAction`], [`CustomerUpdate`],
//!   [`CustomerChangePassword`], [`CustomerPagedQueryResponse`]: wire types
//! - [`email_predicate`]: escaped `where` predicate for email lookups
//! - [`AccountError`], [`AccountStep`]: failures of the operations

mod errors;
mod predicate;
mod service;
mod types;
mod update_action;

pub use errors::{AccountError, AccountStep};
pub use predicate::{email_predicate, escape_literal};
pub use service::CustomerAccountService;
pub use types::{
    AuthenticationMode, BaseAddress, Customer, CustomerChangePassword,
    CustomerPagedQueryResponse, CustomerProfile, CustomerUpdate,
};
pub use update_action::CustomerUpdateAction;
