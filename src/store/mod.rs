//! In-memory contact storage.
//!
//! The store is the single owner of the authoritative contact list.

pub mod contact_store;

pub use contact_store::ContactStore;
