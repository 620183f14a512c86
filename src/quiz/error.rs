use thiserror::Error;

use super::customization::CustomizationError;
use crate::{api::RequestError, storage::StorageError};

/// Problems caught locally, before anything is sent.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please select an option before submitting.")]
    NoChoice,

    #[error("Please select at least one option before submitting.")]
    EmptySelection,

    #[error("Option {0} does not exist.")]
    UnknownOption(usize),

    #[error("This kind of answer does not fit the question.")]
    ShapeMismatch,
}

#[derive(Error, Debug)]
pub enum SessionError {
    #[error("No quiz found in storage.")]
    Missing,

    #[error("Stored quiz is malformed: {0}")]
    Malformed(String),

    #[error("Quiz has no questions.")]
    Empty,

    #[error("Quiz is already completed.")]
    Completed,

    #[error("Quiz is not completed yet.")]
    NotCompleted,

    #[error(transparent)]
    Storage(#[from] StorageError),
}

/// The step the current question allows once it has been graded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextAction {
    Next,
    Finish,
}

#[derive(Error, Debug)]
pub enum QuizError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Request(#[from] RequestError),

    #[error(transparent)]
    Session(#[from] SessionError),

    #[error(transparent)]
    Storage(#[from] StorageError),

    #[error(transparent)]
    Customization(#[from] CustomizationError),

    #[error("This question has already been submitted.")]
    Inert,

    #[error("Submit an answer first.")]
    NotSubmitted,

    #[error("Question {index} cannot be displayed.")]
    UnknownQuestion { index: usize },

    #[error("Expected {expected:?} on question {index}.")]
    WrongAction { expected: NextAction, index: usize },

    #[error("There is no evaluation report to regenerate from.")]
    NoReport,
}

impl QuizError {
    /// Text shown to the student; request failures use the classified wording.
    pub fn message(&self) -> String {
        match self {
            QuizError::Request(e) => e.message(),
            other => other.to_string(),
        }
    }
}
