//! Confirmed deletion.

use crate::domain::ContactId;
use crate::models::Contact;
use crate::store::ContactStore;
use async_trait::async_trait;

/// Question asked before a contact is deleted.
pub const DELETE_CONFIRMATION: &str = "Are you sure you want to delete this contact?";

/// A yes/no question put to the user.
#[async_trait(?Send)]
pub trait ConfirmPrompt {
    /// Ask `message`; true means yes.
    async fn confirm(&mut self, message: &str) -> bool;
}

/// Result of a delete request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome {
    Deleted(Contact),
    /// The user said no; the store is unchanged
    Declined,
    /// No such contact; the user was not asked
    NotFound(ContactId),
}

/// Ask `prompt` for confirmation, then remove `id` from `store` on yes.
pub async fn confirm_and_remove(
    store: &mut ContactStore,
    id: ContactId,
    prompt: &mut dyn ConfirmPrompt,
) -> DeleteOutcome {
    if store.get(id).is_none() {
        tracing::warn!(id = %id, "Delete requested for unknown contact");
        return DeleteOutcome::NotFound(id);
    }

    if !prompt.confirm(DELETE_CONFIRMATION).await {
        tracing::debug!(id = %id, "Delete declined");
        return DeleteOutcome::Declined;
    }

    match store.remove(id) {
        Some(contact) => DeleteOutcome::Deleted(contact),
        None => DeleteOutcome::NotFound(id),
    }
}
