//! Email address format check.

use once_cell::sync::Lazy;
use regex::Regex;

/// Basic `local@domain.tld` shape: no whitespace, exactly one `@`, and a dot
/// somewhere after it.
static EMAIL_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("Failed to compile email regex"));

/// Returns true if `email` has the basic `local@domain.tld` shape.
///
/// The check is intentionally loose; it only rejects input that is clearly
/// not an address.
///
/// # Example
///
/// ```
/// use contact_manager::domain::is_valid_email;
///
/// assert!(is_valid_email("z@z.com"));
/// assert!(!is_valid_email("bob"));
/// ```
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
