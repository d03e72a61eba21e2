//! The contact manager's application state.

use super::delete_flow::{confirm_and_remove, ConfirmPrompt, DeleteOutcome};
use crate::domain::{ContactId, Field};
use crate::error::FormResult;
use crate::form::{FormController, SubmitOutcome};
use crate::models::Contact;
use crate::repositories::ContactSource;
use crate::search::filter;
use crate::store::ContactStore;
use std::time::Instant;

/// Progress of the initial contact load.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadState {
    #[default]
    Loading,
    Ready,
}

/// What to show when the visible list is empty.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmptyState {
    /// The store has no contacts at all (or no search is active)
    NoContacts,
    /// A search is active and nothing matches
    NoMatches,
}

impl EmptyState {
    pub fn title(self) -> &'static str {
        match self {
            Self::NoContacts => "No contacts yet",
            Self::NoMatches => "No contacts found",
        }
    }

    pub fn subtitle(self) -> &'static str {
        match self {
            Self::NoContacts => "Get started by adding your first contact",
            Self::NoMatches => "Try adjusting your search terms",
        }
    }
}

/// Owns the store, the search query and the form for the lifetime of the
/// process. Front ends drive it through these methods only.
#[derive(Debug, Default)]
pub struct ContactApp {
    store: ContactStore,
    search_query: String,
    form: FormController,
    load_state: LoadState,
}

impl ContactApp {
    /// A new app with an empty store, waiting for `load`.
    pub fn new() -> Self {
        Self::default()
    }

    /// A ready app over an existing store, skipping the load.
    pub fn with_store(store: ContactStore) -> Self {
        Self {
            store,
            load_state: LoadState::Ready,
            ..Self::default()
        }
    }

    /// Fetch contacts from `source` into the store and mark the app ready.
    pub async fn load(&mut self, source: &dyn ContactSource) {
        self.load_state = LoadState::Loading;
        tracing::info!("Loading contacts");
        let started = Instant::now();

        let contacts = source.fetch_all().await;
        let count = contacts.len();
        self.store.replace_all(contacts);
        self.load_state = LoadState::Ready;

        tracing::info!(
            count = count,
            duration_ms = started.elapsed().as_millis() as u64,
            "Contacts loaded"
        );
    }

    pub fn load_state(&self) -> LoadState {
        self.load_state
    }

    pub fn is_loading(&self) -> bool {
        self.load_state == LoadState::Loading
    }

    pub fn store(&self) -> &ContactStore {
        &self.store
    }

    pub fn form(&self) -> &FormController {
        &self.form
    }

    pub fn search_query(&self) -> &str {
        &self.search_query
    }

    pub fn set_search_query(&mut self, query: impl Into<String>) {
        self.search_query = query.into();
    }

    pub fn clear_search(&mut self) {
        self.search_query.clear();
    }

    /// True if the query has any non-whitespace content.
    pub fn has_search(&self) -> bool {
        !self.search_query.trim().is_empty()
    }

    /// Contacts matching the current query, in store order.
    pub fn visible_contacts(&self) -> Vec<&Contact> {
        filter(self.store.list(), &self.search_query)
    }

    pub fn result_count(&self) -> usize {
        self.visible_contacts().len()
    }

    /// The empty-state message for the current view, if the view is empty.
    pub fn empty_state(&self) -> Option<EmptyState> {
        if self.result_count() > 0 {
            return None;
        }
        if self.has_search() {
            Some(EmptyState::NoMatches)
        } else {
            Some(EmptyState::NoContacts)
        }
    }

    pub fn open_add(&mut self) {
        self.form.open_add();
    }

    /// Open the edit form for `id`. Returns false if no such contact exists.
    pub fn open_edit(&mut self, id: ContactId) -> bool {
        match self.store.get(id) {
            Some(contact) => {
                self.form.open_edit(contact);
                true
            }
            None => false,
        }
    }

    pub fn set_field(&mut self, field: Field, value: impl Into<String>) -> bool {
        self.form.set_field(field, value)
    }

    pub fn cancel(&mut self) {
        self.form.cancel();
    }

    /// Submit the open form against the store.
    pub fn submit(&mut self) -> FormResult<SubmitOutcome> {
        self.form.submit(&mut self.store)
    }

    /// Delete `id` after `prompt` confirms.
    pub async fn delete(&mut self, id: ContactId, prompt: &mut dyn ConfirmPrompt) -> DeleteOutcome {
        confirm_and_remove(&mut self.store, id, prompt).await
    }
}
