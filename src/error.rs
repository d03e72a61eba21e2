//! Error types for the contact manager.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::{ContactId, FieldErrors, UnknownField};
use thiserror::Error;

/// Errors returned by the contact store.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No contact with this ID exists
    #[error("Contact not found: {0}")]
    NotFound(ContactId),
}

/// Errors returned when submitting the contact form.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Submit was called with no form open
    #[error("No contact form is open")]
    NotOpen,

    /// One or more fields failed validation; the form stays open
    #[error("Invalid contact: {0}")]
    Invalid(FieldErrors),
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Errors from parsing a terminal command line.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// The command word is not recognized
    #[error("Unknown command: {0} (type 'help' for a list of commands)")]
    Unknown(String),

    /// A required argument is missing
    #[error("Missing argument for '{command}': expected {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    /// The contact ID is not a number
    #[error("Invalid contact ID: {0}")]
    InvalidId(String),

    /// The field name is not one of the form fields
    #[error(transparent)]
    UnknownField(#[from] UnknownField),
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with FormError
pub type FormResult<T> = Result<T, FormError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
