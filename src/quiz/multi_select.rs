use super::{
    encode::{encode, AnswerKind, Selection},
    error::{QuizError, ValidationError},
    variant::{Attempt, QuestionContext},
};
use crate::api::ApiClient;

/// Any number of options, at least one. Picks are kept in the order made.
#[derive(Debug)]
pub struct MultiSelectQuestion {
    context: QuestionContext,
    options: Vec<String>,
    selected: Vec<usize>,
    pub(crate) attempt: Attempt,
}

impl MultiSelectQuestion {
    pub fn new(context: QuestionContext) -> Self {
        let options = context.question.options();
        Self {
            context,
            options,
            selected: Vec::new(),
            attempt: Attempt::default(),
        }
    }

    pub fn context(&self) -> &QuestionContext {
        &self.context
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> &[usize] {
        &self.selected
    }

    /// Picks the option, or drops it if it was already picked.
    pub fn toggle(&mut self, idx: usize) -> Result<(), QuizError> {
        self.attempt.edit()?;
        if idx >= self.options.len() {
            return Err(ValidationError::UnknownOption(idx).into());
        }
        match self.selected.iter().position(|&i| i == idx) {
            Some(pos) => {
                self.selected.remove(pos);
            }
            None => self.selected.push(idx),
        }
        Ok(())
    }

    pub fn submit(&mut self, client: &ApiClient) -> Result<bool, QuizError> {
        self.attempt.ensure_selecting()?;
        if self.selected.is_empty() {
            return Err(self.attempt.reject(ValidationError::EmptySelection));
        }

        let answer = encode(AnswerKind::MultiSelect, Selection::Indices(&self.selected))?;
        self.attempt.grade(client, &self.context, answer)
    }

    pub(crate) fn reset(&mut self) {
        self.selected.clear();
        self.attempt.reset();
    }
}
