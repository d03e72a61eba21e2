//! Contact search.
//!
//! The filtered view is recomputed from the store on every call; there is no
//! index to keep in sync.

pub mod filter;

pub use filter::{filter, result_summary};
