mod auth;
mod client;
mod error;
mod models;

pub use auth::{Authenticator, StaticToken};
pub use client::{ApiClient, Transport, UreqTransport};
pub use error::{classify, ErrorCategory, RequestError, MAX_PROCESSING_SECS};
pub use models::{
    EvaluationReport, GradeRequest, GradeResponse, QuestionAndAnswer, QuizPayload,
};
