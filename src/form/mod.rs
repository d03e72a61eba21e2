//! Add/edit contact form.
//!
//! The controller owns the transient draft and its field errors while the
//! form is open, and commits to the store on a valid submit.

pub mod controller;
pub mod validation;

pub use controller::{FormController, FormState, SubmitOutcome};
pub use validation::validate;
