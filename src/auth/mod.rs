//! Authentication types.
//!
//! - [`AuthScopes`]: a set of OAuth scopes with implied scope handling
//! - [`AccessToken`]: a bearer token and its metadata
//! - [`exchange_customer_password`]: the customer password flow
//! - [`AuthError`]: failures while obtaining a token
//!
//! Two authentication modes are used by the customer account operations:
//!
//! - **Existing token flow**: the caller already holds a token for a signed-in
//!   customer and passes it in as an [`AccessToken`].
//! - **Password flow**: an email/password pair is exchanged for a fresh token
//!   with [`exchange_customer_password`].
//!
//! Token refresh is not handled here.

mod error;
pub mod password_flow;
mod scopes;
pub mod token;

pub use error::AuthError;
pub use password_flow::exchange_customer_password;
pub use scopes::AuthScopes;
pub use token::AccessToken;
