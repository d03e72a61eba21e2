//! Application service layer.
//!
//! `ContactApp` ties the store, the search query and the form together and
//! is the only thing the front end talks to. Deletion goes through a
//! confirmation prompt supplied by the caller.

mod contact_app;
mod delete_flow;

pub use contact_app::{ContactApp, EmptyState, LoadState};
pub use delete_flow::{confirm_and_remove, ConfirmPrompt, DeleteOutcome, DELETE_CONFIRMATION};
