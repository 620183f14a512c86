mod choice;
mod classify;
mod customization;
mod encode;
mod error;
mod flow;
mod multi_select;
mod question;
mod repository;
mod run;
mod session;
mod text;
mod variant;

pub use choice::ChoiceQuestion;
pub use classify::{classify, Variant};
pub use customization::{
    CustomizationError, DifficultyLevel, Emphasis, Language, QuestionTypeTag, QuizCustomization,
};
pub use encode::{encode, AnswerKind, Selection, StudentAnswer};
pub use error::{NextAction, QuizError, SessionError, ValidationError};
pub use flow::{generate_quiz, EvaluationFlow};
pub use multi_select::MultiSelectQuestion;
pub use question::{AnswerShape, Question, FALSE_LABEL, TRUE_LABEL};
pub use repository::QuizRepository;
pub use run::QuizRun;
pub use session::{Progress, QuizSession, SessionController};
pub use text::TextQuestion;
pub use variant::{Feedback, Interaction, Phase, QuestionContext};
