use async_trait::async_trait;
use contact_manager::services::ConfirmPrompt;
use std::collections::VecDeque;

/// Scripted confirmation prompt for testing.
///
/// Answers are consumed in order; once they run out every question is
/// answered "no". Every question asked is recorded for verification.
#[allow(dead_code)]
#[derive(Debug, Default)]
pub struct MockConfirmPrompt {
    answers: VecDeque<bool>,
    questions: Vec<String>,
}

#[allow(dead_code)]
impl MockConfirmPrompt {
    /// Create a prompt that gives `answers` in order.
    pub fn new(answers: impl IntoIterator<Item = bool>) -> Self {
        Self {
            answers: answers.into_iter().collect(),
            questions: Vec::new(),
        }
    }

    pub fn always_yes() -> Self {
        Self::new(std::iter::repeat(true).take(64))
    }

    /// Questions asked so far.
    pub fn questions(&self) -> &[String] {
        &self.questions
    }
}

#[async_trait(?Send)]
impl ConfirmPrompt for MockConfirmPrompt {
    async fn confirm(&mut self, message: &str) -> bool {
        self.questions.push(message.to_string());
        self.answers.pop_front().unwrap_or(false)
    }
}
