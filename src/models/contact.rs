//! Contact model.

use crate::domain::ContactId;
use crate::models::ContactDraft;
use serde::{Deserialize, Serialize};

/// A contact held by the store.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Contact {
    /// Unique identifier, assigned by the store
    pub id: ContactId,

    /// Full name
    pub name: String,

    /// Email address
    pub email: String,

    /// Phone number, free-form
    pub phone: String,

    /// Company/organization
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
}

impl Contact {
    /// Create a contact from a draft, taking its field values as-is.
    ///
    /// A blank company becomes `None`.
    pub fn from_draft(id: ContactId, draft: ContactDraft) -> Self {
        let mut contact = Self {
            id,
            name: String::new(),
            email: String::new(),
            phone: String::new(),
            company: None,
        };
        contact.apply_draft(draft);
        contact
    }

    /// Replace every field except `id` with the draft's values.
    pub fn apply_draft(&mut self, draft: ContactDraft) {
        self.name = draft.name;
        self.email = draft.email;
        self.phone = draft.phone;
        self.company = if draft.company.trim().is_empty() {
            None
        } else {
            Some(draft.company)
        };
    }

    /// Company name, or an empty string if none.
    pub fn company_or_empty(&self) -> &str {
        self.company.as_deref().unwrap_or("")
    }

    /// Uppercased first character of the name, used as the card avatar.
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}
