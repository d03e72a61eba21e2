//! Interactive terminal front end.
//!
//! A line-oriented stand-in for the contact list UI: each input line is one
//! user event, and the current view is re-rendered after anything changes.

pub mod command;
pub mod render;
pub mod session;

pub use command::Command;
pub use session::{run_session, LinePrompt};
