use log::error;

use super::question::{AnswerShape, Question};

/// How a question is presented and answered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Variant {
    Text,
    Choice,
    MultiSelect,
    /// the answer has a shape no variant can grade; a data fault upstream
    Unknown,
}

/// Picks the interaction variant from the answer's shape.
///
/// "True" and "False" are the only strings treated as choices, the grader
/// expects the picked label back for those rather than free text. Index
/// answers must point into `choices`, otherwise the question is unknown.
pub fn classify(question: &Question) -> Variant {
    match &question.answer {
        answer if answer.is_boolean_label() => Variant::Choice,
        AnswerShape::Text(_) => Variant::Text,
        AnswerShape::Index(idx) => match choice_count(question) {
            n if *idx < n => Variant::Choice,
            n => broken_index(question, n),
        },
        AnswerShape::Indices(indices) => match choice_count(question) {
            0 => broken_index(question, 0),
            n if indices.iter().all(|idx| *idx < n) => Variant::MultiSelect,
            n => broken_index(question, n),
        },
        AnswerShape::Other(raw) => {
            error!(
                "question '{}' has an answer of unknown shape: {}",
                question.question, raw
            );
            Variant::Unknown
        }
    }
}

fn choice_count(question: &Question) -> usize {
    question.choices.as_ref().map_or(0, Vec::len)
}

fn broken_index(question: &Question, choices: usize) -> Variant {
    error!(
        "question '{}' answers {:?} but has {} choices",
        question.question, question.answer, choices
    );
    Variant::Unknown
}
