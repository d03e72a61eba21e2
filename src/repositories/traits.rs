use crate::models::Contact;
use async_trait::async_trait;

/// Source of the initial contact list.
///
/// Stands in for a backend fetch. Implementations always succeed; there is
/// no cancellation, retry or timeout.
#[async_trait]
pub trait ContactSource: Send + Sync {
    /// Fetch every contact, newest first.
    async fn fetch_all(&self) -> Vec<Contact>;
}
