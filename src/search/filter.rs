//! Case-insensitive substring search over contacts.

use crate::models::Contact;

/// Returns the contacts matching `query`, in their original order.
///
/// A blank (empty or whitespace-only) query matches everything. Otherwise a
/// contact matches if its name, email or company contains the query,
/// ignoring case. The query itself is not trimmed.
pub fn filter<'a>(contacts: &'a [Contact], query: &str) -> Vec<&'a Contact> {
    if query.trim().is_empty() {
        return contacts.iter().collect();
    }

    let query = query.to_lowercase();
    contacts
        .iter()
        .filter(|contact| matches(contact, &query))
        .collect()
}

/// `query` must already be lowercased.
fn matches(contact: &Contact, query: &str) -> bool {
    [
        contact.name.as_str(),
        contact.email.as_str(),
        contact.company_or_empty(),
    ]
    .iter()
    .any(|field| field.to_lowercase().contains(query))
}

/// The result count line shown under the search box, e.g. "Found 1 contact".
pub fn result_summary(count: usize) -> String {
    format!(
        "Found {} contact{}",
        count,
        if count == 1 { "" } else { "s" }
    )
}
