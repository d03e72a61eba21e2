//! Data models for the contact manager.
//!
//! `Contact` is the committed record owned by the store; `ContactDraft` is the
//! unvalidated form input that becomes a contact on save.

pub mod contact;
pub mod draft;

pub use contact::Contact;
pub use draft::ContactDraft;
