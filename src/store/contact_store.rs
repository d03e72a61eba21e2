//! Contact store: the authoritative, in-memory contact list.

use crate::domain::ContactId;
use crate::error::{StoreError, StoreResult};
use crate::models::{Contact, ContactDraft};

/// Owns every contact in the application.
///
/// Contacts are kept newest-first: `add` prepends, `update` edits in place.
/// Drafts are expected to be validated before they reach the store.
#[derive(Debug, Clone, Default)]
pub struct ContactStore {
    contacts: Vec<Contact>,
}

impl ContactStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store holding `contacts` in the given order.
    pub fn with_contacts(contacts: Vec<Contact>) -> Self {
        Self { contacts }
    }

    /// All contacts, newest-added first.
    pub fn list(&self) -> &[Contact] {
        &self.contacts
    }

    pub fn get(&self, id: ContactId) -> Option<&Contact> {
        self.contacts.iter().find(|c| c.id == id)
    }

    pub fn len(&self) -> usize {
        self.contacts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.contacts.is_empty()
    }

    /// The ID the next `add` will assign: one past the current maximum, or 1.
    pub fn next_id(&self) -> ContactId {
        self.contacts
            .iter()
            .map(|c| c.id)
            .max()
            .map(ContactId::next)
            .unwrap_or(ContactId::new(1))
    }

    /// Replace the whole list, e.g. with freshly loaded contacts.
    pub fn replace_all(&mut self, contacts: Vec<Contact>) {
        tracing::debug!(count = contacts.len(), "Contact store replaced");
        self.contacts = contacts;
    }

    /// Add a contact built from `draft` with a fresh ID and put it first.
    pub fn add(&mut self, draft: ContactDraft) -> Contact {
        let contact = Contact::from_draft(self.next_id(), draft);
        self.contacts.insert(0, contact.clone());
        tracing::debug!(id = %contact.id, "Contact added");
        contact
    }

    /// Replace every field except the ID of the contact with `id`.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NotFound` if no such contact exists; the store is
    /// left untouched.
    pub fn update(&mut self, id: ContactId, draft: ContactDraft) -> StoreResult<Contact> {
        let contact = self
            .contacts
            .iter_mut()
            .find(|c| c.id == id)
            .ok_or(StoreError::NotFound(id))?;

        contact.apply_draft(draft);
        tracing::debug!(id = %id, "Contact updated");
        Ok(contact.clone())
    }

    /// Remove the contact with `id`, returning it if it existed.
    ///
    /// Removing an unknown ID is a no-op.
    pub fn remove(&mut self, id: ContactId) -> Option<Contact> {
        let index = self.contacts.iter().position(|c| c.id == id)?;
        let removed = self.contacts.remove(index);
        tracing::debug!(id = %id, "Contact removed");
        Some(removed)
    }
}
