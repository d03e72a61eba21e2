//! Contact Manager - an in-memory contact list with search and a validated
//! add/edit form.
//!
//! Contacts are seeded from a hardcoded dataset after a simulated network
//! delay and live only for the lifetime of the process.
//!
//! # Architecture
//!
//! - **models**: `Contact` and the form's `ContactDraft`
//! - **domain**: Contact IDs, email format check, field validation errors
//! - **error**: Custom error types for precise error handling
//! - **config**: Configuration management from environment variables
//! - **store**: The authoritative contact list
//! - **search**: Case-insensitive filtering of the list
//! - **form**: Add/edit form state machine and validation
//! - **repositories**: The async contact source and seed data
//! - **services**: Application state and the confirmed delete flow
//! - **cli**: Interactive terminal front end

pub mod cli;
pub mod config;
pub mod domain;
pub mod error;
pub mod form;
pub mod models;
pub mod repositories;
pub mod search;
pub mod services;
pub mod store;

pub use config::Config;
pub use domain::{ContactId, Field, FieldErrors, ValidationError};
pub use error::{CommandError, ConfigError, FormError, StoreError};
pub use form::{FormController, FormState, SubmitOutcome};
pub use models::{Contact, ContactDraft};
pub use repositories::{seed_contacts, ContactSource, SeedContactSource};
pub use search::filter;
pub use services::{ConfirmPrompt, ContactApp, DeleteOutcome, EmptyState, LoadState};
pub use store::ContactStore;
