use super::{
    encode::{encode, AnswerKind, Selection},
    error::QuizError,
    variant::{Attempt, QuestionContext},
};
use crate::api::ApiClient;

/// Free-text question. Any entry is accepted, including an empty one.
#[derive(Debug)]
pub struct TextQuestion {
    context: QuestionContext,
    entry: String,
    pub(crate) attempt: Attempt,
}

impl TextQuestion {
    pub fn new(context: QuestionContext) -> Self {
        Self {
            context,
            entry: String::new(),
            attempt: Attempt::default(),
        }
    }

    pub fn context(&self) -> &QuestionContext {
        &self.context
    }

    pub fn entry(&self) -> &str {
        &self.entry
    }

    pub fn enter(&mut self, text: impl Into<String>) -> Result<(), QuizError> {
        self.attempt.edit()?;
        self.entry = text.into();
        Ok(())
    }

    pub fn submit(&mut self, client: &ApiClient) -> Result<bool, QuizError> {
        self.attempt.ensure_selecting()?;
        let answer = encode(AnswerKind::Text, Selection::Text(&self.entry))?;
        self.attempt.grade(client, &self.context, answer)
    }

    pub(crate) fn reset(&mut self) {
        self.entry.clear();
        self.attempt.reset();
    }
}
