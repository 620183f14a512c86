use super::{
    encode::{encode, AnswerKind, Selection},
    error::{QuizError, ValidationError},
    variant::{Attempt, QuestionContext},
};
use crate::api::ApiClient;

/// Single pick out of the question's options, by index or by label.
#[derive(Debug)]
pub struct ChoiceQuestion {
    context: QuestionContext,
    options: Vec<String>,
    selected: Option<usize>,
    pub(crate) attempt: Attempt,
}

impl ChoiceQuestion {
    pub fn new(context: QuestionContext) -> Self {
        let options = context.question.options();
        Self {
            context,
            options,
            selected: None,
            attempt: Attempt::default(),
        }
    }

    pub fn context(&self) -> &QuestionContext {
        &self.context
    }

    pub fn options(&self) -> &[String] {
        &self.options
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn select(&mut self, idx: usize) -> Result<(), QuizError> {
        self.attempt.edit()?;
        if idx >= self.options.len() {
            return Err(ValidationError::UnknownOption(idx).into());
        }
        self.selected = Some(idx);
        Ok(())
    }

    pub fn submit(&mut self, client: &ApiClient) -> Result<bool, QuizError> {
        self.attempt.ensure_selecting()?;
        if self.selected.is_none() {
            return Err(self.attempt.reject(ValidationError::NoChoice));
        }

        let kind = AnswerKind::for_choice(&self.context.question.answer, &self.options);
        let answer = encode(kind, Selection::Choice(self.selected))?;
        self.attempt.grade(client, &self.context, answer)
    }

    pub(crate) fn reset(&mut self) {
        self.selected = None;
        self.attempt.reset();
    }
}
