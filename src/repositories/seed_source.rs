//! Seed-backed contact source with a simulated network delay.

use super::seed::seed_contacts;
use super::traits::ContactSource;
use crate::models::Contact;
use async_trait::async_trait;
use std::time::Duration;

/// Serves the hardcoded seed contacts after a fixed delay.
#[derive(Debug, Clone)]
pub struct SeedContactSource {
    delay: Duration,
}

impl SeedContactSource {
    /// Create a source that waits `delay` before returning.
    pub fn new(delay: Duration) -> Self {
        Self { delay }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }
}

#[async_trait]
impl ContactSource for SeedContactSource {
    async fn fetch_all(&self) -> Vec<Contact> {
        tracing::debug!(delay_ms = self.delay.as_millis() as u64, "Fetching seed contacts");
        if !self.delay.is_zero() {
            tokio::time::sleep(self.delay).await;
        }
        seed_contacts()
    }
}
