//! Draft validation rules.

use crate::domain::{is_valid_email, Field, FieldErrors, ValidationError};
use crate::models::ContactDraft;

/// Validate every field of `draft`, collecting all failures.
///
/// - name, phone: `Required` if blank
/// - email: `Required` if blank, else `InvalidFormat` if not `local@domain.tld`
/// - company: optional, never fails
pub fn validate(draft: &ContactDraft) -> Result<(), FieldErrors> {
    let mut errors = FieldErrors::new();

    if draft.name.trim().is_empty() {
        errors.insert(Field::Name, ValidationError::Required);
    }

    if draft.email.trim().is_empty() {
        errors.insert(Field::Email, ValidationError::Required);
    } else if !is_valid_email(&draft.email) {
        errors.insert(Field::Email, ValidationError::InvalidFormat);
    }

    if draft.phone.trim().is_empty() {
        errors.insert(Field::Phone, ValidationError::Required);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
