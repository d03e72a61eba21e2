pub mod mock_confirm_prompt;
pub mod mock_contact_source;

#[allow(unused_imports)]
pub use mock_confirm_prompt::MockConfirmPrompt;
#[allow(unused_imports)]
pub use mock_contact_source::MockContactSource;
