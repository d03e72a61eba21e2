use async_trait::async_trait;
use contact_manager::models::Contact;
use contact_manager::repositories::ContactSource;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// In-memory contact source that counts fetches.
#[allow(dead_code)]
#[derive(Clone, Default)]
pub struct MockContactSource {
    contacts: Vec<Contact>,
    fetch_count: Arc<AtomicUsize>,
}

#[allow(dead_code)]
impl MockContactSource {
    pub fn new(contacts: Vec<Contact>) -> Self {
        Self {
            contacts,
            fetch_count: Arc::new(AtomicUsize::new(0)),
        }
    }

    pub fn fetch_count(&self) -> usize {
        self.fetch_count.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ContactSource for MockContactSource {
    async fn fetch_all(&self) -> Vec<Contact> {
        self.fetch_count.fetch_add(1, Ordering::SeqCst);
        self.contacts.clone()
    }
}
