use log::{debug, error, warn};

use super::{
    choice::ChoiceQuestion,
    classify::{classify, Variant},
    encode::StudentAnswer,
    error::{NextAction, QuizError, ValidationError},
    multi_select::MultiSelectQuestion,
    question::Question,
    text::TextQuestion,
};
use crate::api::{ApiClient, GradeRequest, QuestionAndAnswer};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    #[default]
    Selecting,
    Submitted { correct: bool },
}

/// The question being shown plus where it sits in the quiz (1-based).
#[derive(Debug, Clone)]
pub struct QuestionContext {
    pub question: Question,
    pub index: usize,
    pub total: usize,
}

impl QuestionContext {
    pub fn is_last(&self) -> bool {
        self.index == self.total
    }
}

/// What is revealed once an answer has been graded.
#[derive(Debug, Clone, PartialEq)]
pub struct Feedback {
    pub correct: bool,
    pub verdict: &'static str,
    pub answer: String,
    pub explanation: Option<String>,
}

/// Grading state shared by every variant: phase and last visible error.
#[derive(Debug, Default)]
pub(crate) struct Attempt {
    phase: Phase,
    error: Option<String>,
}

impl Attempt {
    /// Called before any change to the selection.
    pub(crate) fn edit(&mut self) -> Result<(), QuizError> {
        if matches!(self.phase, Phase::Submitted { .. }) {
            return Err(QuizError::Inert);
        }
        self.error = None;
        Ok(())
    }

    pub(crate) fn ensure_selecting(&self) -> Result<(), QuizError> {
        match self.phase {
            Phase::Selecting => Ok(()),
            Phase::Submitted { .. } => Err(QuizError::Inert),
        }
    }

    pub(crate) fn reject(&mut self, err: ValidationError) -> QuizError {
        warn!("submission rejected: {}", err);
        self.error = Some(err.to_string());
        QuizError::Validation(err)
    }

    pub(crate) fn grade(
        &mut self,
        client: &ApiClient,
        context: &QuestionContext,
        student_answer: StudentAnswer,
    ) -> Result<bool, QuizError> {
        let request = GradeRequest {
            question_and_answer: QuestionAndAnswer::from_question(&context.question),
            student_answer,
        };

        match client.evaluate_student_answer(&request) {
            Ok(correct) => {
                debug!("question {} graded, correct: {}", context.index, correct);
                self.phase = Phase::Submitted { correct };
                self.error = None;
                Ok(correct)
            }
            Err(e) => {
                self.error = Some(e.message());
                Err(QuizError::Request(e))
            }
        }
    }

    pub(crate) fn next_action(&self, context: &QuestionContext) -> Option<NextAction> {
        match self.phase {
            Phase::Selecting => None,
            Phase::Submitted { .. } if context.is_last() => Some(NextAction::Finish),
            Phase::Submitted { .. } => Some(NextAction::Next),
        }
    }

    pub(crate) fn feedback(&self, context: &QuestionContext) -> Option<Feedback> {
        let Phase::Submitted { correct } = self.phase else {
            return None;
        };
        Some(Feedback {
            correct,
            verdict: if correct { "Correct!" } else { "Wrong!" },
            answer: context.question.answer_text(),
            explanation: context.question.explanation().map(str::to_string),
        })
    }

    pub(crate) fn phase(&self) -> Phase {
        self.phase
    }

    pub(crate) fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    pub(crate) fn reset(&mut self) {
        *self = Attempt::default();
    }
}

/// The variant currently on screen, chosen by [`classify`].
#[derive(Debug)]
pub enum Interaction {
    Text(TextQuestion),
    Choice(ChoiceQuestion),
    MultiSelect(MultiSelectQuestion),
}

impl Interaction {
    /// `None` for questions whose answer shape is unknown.
    pub fn for_question(question: &Question, index: usize, total: usize) -> Option<Self> {
        let context = QuestionContext {
            question: question.clone(),
            index,
            total,
        };
        match classify(question) {
            Variant::Text => Some(Interaction::Text(TextQuestion::new(context))),
            Variant::Choice => Some(Interaction::Choice(ChoiceQuestion::new(context))),
            Variant::MultiSelect => {
                Some(Interaction::MultiSelect(MultiSelectQuestion::new(context)))
            }
            Variant::Unknown => {
                error!("nothing to render for question {} of {}", index, total);
                None
            }
        }
    }

    pub fn variant(&self) -> Variant {
        match self {
            Interaction::Text(_) => Variant::Text,
            Interaction::Choice(_) => Variant::Choice,
            Interaction::MultiSelect(_) => Variant::MultiSelect,
        }
    }

    pub fn submit(&mut self, client: &ApiClient) -> Result<bool, QuizError> {
        match self {
            Interaction::Text(q) => q.submit(client),
            Interaction::Choice(q) => q.submit(client),
            Interaction::MultiSelect(q) => q.submit(client),
        }
    }

    /// Clears the selection and grading state before moving on.
    pub fn next(&mut self) -> Result<(), QuizError> {
        match self.next_action() {
            Some(NextAction::Next) => {
                match self {
                    Interaction::Text(q) => q.reset(),
                    Interaction::Choice(q) => q.reset(),
                    Interaction::MultiSelect(q) => q.reset(),
                }
                Ok(())
            }
            Some(NextAction::Finish) => Err(QuizError::WrongAction {
                expected: NextAction::Finish,
                index: self.context().index,
            }),
            None => Err(QuizError::NotSubmitted),
        }
    }

    pub fn context(&self) -> &QuestionContext {
        match self {
            Interaction::Text(q) => q.context(),
            Interaction::Choice(q) => q.context(),
            Interaction::MultiSelect(q) => q.context(),
        }
    }

    fn attempt(&self) -> &Attempt {
        match self {
            Interaction::Text(q) => &q.attempt,
            Interaction::Choice(q) => &q.attempt,
            Interaction::MultiSelect(q) => &q.attempt,
        }
    }

    pub fn phase(&self) -> Phase {
        self.attempt().phase()
    }

    pub fn error(&self) -> Option<&str> {
        self.attempt().error()
    }

    pub fn next_action(&self) -> Option<NextAction> {
        self.attempt().next_action(self.context())
    }

    pub fn feedback(&self) -> Option<Feedback> {
        self.attempt().feedback(self.context())
    }
}
