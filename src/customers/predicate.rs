//! Query predicate construction.
//!
//! Values are placed inside double-quoted string literals with `\` and `"`
//! escaped, so caller input cannot terminate the literal and append its own
//! predicate clauses.

/// Escapes a value for use inside a double-quoted predicate literal.
#[must_use]
pub fn escape_literal(value: &str) -> String {
    let mut escaped = String::with_capacity(value.len() + 2);
    for c in value.chars() {
        if matches!(c, '\\' | '"') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Returns the `where` predicate matching customers by exact email.
///
/// ```rust
/// use commercetools_customer::customers::email_predicate;
///
/// assert_eq!(email_predicate("a@b.com"), r#"email="a@b.com""#);
/// ```
#[must_use]
pub fn email_predicate(email: &str) -> String {
    format!("email=\"{}\"", escape_literal(email))
}
