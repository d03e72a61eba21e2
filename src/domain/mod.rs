//! Domain value objects and validation types.
//!
//! This module contains the type-safe contact ID, the email format check and
//! the per-field validation errors surfaced by the contact form.

pub mod contact_id;
pub mod email;
pub mod errors;

pub use contact_id::ContactId;
pub use email::is_valid_email;
pub use errors::{Field, FieldErrors, UnknownField, ValidationError};
