//! Form controller: the add/edit modal's state machine.

use super::validation::validate;
use crate::domain::{ContactId, Field, FieldErrors};
use crate::error::{FormError, FormResult, StoreError};
use crate::models::{Contact, ContactDraft};
use crate::store::ContactStore;

/// Whether the form is showing, and for what.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum FormState {
    #[default]
    Closed,
    OpenForAdd,
    /// Editing the given contact, as it was when the form opened
    OpenForEdit(Contact),
}

/// What a successful submit did to the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitOutcome {
    Added(Contact),
    Updated(Contact),
    /// The contact being edited no longer exists; nothing was changed
    Missing(ContactId),
}

/// Owns the form's draft and field errors while it is open.
///
/// Every transition out of an open state discards the draft.
#[derive(Debug, Clone, Default)]
pub struct FormController {
    state: FormState,
    draft: ContactDraft,
    errors: FieldErrors,
}

impl FormController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        !matches!(self.state, FormState::Closed)
    }

    pub fn draft(&self) -> &ContactDraft {
        &self.draft
    }

    /// Field errors from the last failed submit.
    pub fn errors(&self) -> &FieldErrors {
        &self.errors
    }

    /// Open an empty form for a new contact.
    pub fn open_add(&mut self) {
        self.state = FormState::OpenForAdd;
        self.draft = ContactDraft::default();
        self.errors = FieldErrors::new();
    }

    /// Open the form pre-filled with `contact`'s fields.
    pub fn open_edit(&mut self, contact: &Contact) {
        self.draft = ContactDraft::from_contact(contact);
        self.state = FormState::OpenForEdit(contact.clone());
        self.errors = FieldErrors::new();
    }

    /// Close the form, discarding the draft.
    pub fn close(&mut self) {
        self.state = FormState::Closed;
        self.draft = ContactDraft::default();
        self.errors = FieldErrors::new();
    }

    /// Same as `close`.
    pub fn cancel(&mut self) {
        self.close();
    }

    /// Set one draft field. Returns false if the form is closed.
    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        if !self.is_open() {
            return false;
        }
        self.draft.set(field, value);
        true
    }

    /// Replace the whole draft. Returns false if the form is closed.
    pub fn set_draft(&mut self, draft: ContactDraft) -> bool {
        if !self.is_open() {
            return false;
        }
        self.draft = draft;
        true
    }

    /// Validate the draft and, if valid, commit it to `store` and close.
    ///
    /// # Errors
    ///
    /// - `FormError::NotOpen` if the form is closed.
    /// - `FormError::Invalid` if any field fails validation. The form stays
    ///   open with the errors recorded and the store is not touched.
    pub fn submit(&mut self, store: &mut ContactStore) -> FormResult<SubmitOutcome> {
        if !self.is_open() {
            return Err(FormError::NotOpen);
        }

        if let Err(errors) = validate(&self.draft) {
            tracing::debug!(error_count = errors.len(), "Contact form failed validation");
            self.errors = errors.clone();
            return Err(FormError::Invalid(errors));
        }

        let draft = std::mem::take(&mut self.draft);
        let outcome = match &self.state {
            FormState::OpenForAdd => SubmitOutcome::Added(store.add(draft)),
            FormState::OpenForEdit(original) => match store.update(original.id, draft) {
                Ok(contact) => SubmitOutcome::Updated(contact),
                Err(StoreError::NotFound(id)) => {
                    tracing::warn!(id = %id, "Edited contact no longer exists");
                    SubmitOutcome::Missing(id)
                }
            },
            FormState::Closed => return Err(FormError::NotOpen),
        };

        self.close();
        Ok(outcome)
    }

    /// Modal heading, or `None` when closed.
    pub fn title(&self) -> Option<&'static str> {
        match self.state {
            FormState::Closed => None,
            FormState::OpenForAdd => Some("Add New Contact"),
            FormState::OpenForEdit(_) => Some("Edit Contact"),
        }
    }

    /// Label for the submit button, or `None` when closed.
    pub fn submit_label(&self) -> Option<&'static str> {
        match self.state {
            FormState::Closed => None,
            FormState::OpenForAdd => Some("Add Contact"),
            FormState::OpenForEdit(_) => Some("Update Contact"),
        }
    }
}
