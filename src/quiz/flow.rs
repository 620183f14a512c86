use log::{info, warn};

use super::{
    customization::QuizCustomization,
    error::{QuizError, SessionError},
    repository::QuizRepository,
};
use crate::api::{ApiClient, EvaluationReport, QuizPayload, RequestError};

/// Report fetching and regeneration after a quiz is finished.
///
/// Both requests block and take `&mut self`, so at most one of them can be in
/// flight for a flow.
#[derive(Debug, Default)]
pub struct EvaluationFlow {
    report: Option<EvaluationReport>,
    error: Option<String>,
}

impl EvaluationFlow {
    pub fn report(&self) -> Option<&EvaluationReport> {
        self.report.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Asks for the strength/weakness report of a quiz with `num_of_qns`
    /// questions. On failure the error is kept for display and the call can
    /// simply be repeated.
    pub fn request_report(
        &mut self,
        client: &ApiClient,
        num_of_qns: usize,
    ) -> Result<&EvaluationReport, QuizError> {
        let result = self.guarded(|| client.get_student_strength_weakness(num_of_qns))?;
        info!("evaluation report received, score {}", result.score);
        Ok(self.report.insert(result))
    }

    /// Requests a new quiz seeded with the last report. Storing it and
    /// restarting the session is left to the caller.
    pub fn regenerate(
        &mut self,
        client: &ApiClient,
        customization: &QuizCustomization,
    ) -> Result<QuizPayload, QuizError> {
        customization.validate()?;
        let report = self.report.clone().ok_or(QuizError::NoReport)?;

        let payload = self.guarded(|| client.regenerate_quiz(customization, &report))?;
        if payload.questions_and_answers.is_empty() {
            let err = SessionError::Empty;
            self.error = Some(err.to_string());
            return Err(err.into());
        }
        Ok(payload)
    }

    pub fn reset(&mut self) {
        *self = EvaluationFlow::default();
    }

    fn guarded<T>(
        &mut self,
        request: impl FnOnce() -> Result<T, RequestError>,
    ) -> Result<T, QuizError> {
        self.error = None;
        request().map_err(|e| {
            warn!("{}", e);
            self.error = Some(e.message());
            QuizError::Request(e)
        })
    }
}

/// Generates a quiz from the uploaded notes and stores it as the quiz to take.
pub fn generate_quiz(
    client: &ApiClient,
    repository: &mut QuizRepository,
    customization: &QuizCustomization,
) -> Result<QuizPayload, QuizError> {
    customization.validate()?;
    let payload = client.get_quiz_from_uploaded_notes(customization)?;
    if payload.questions_and_answers.is_empty() {
        return Err(SessionError::Empty.into());
    }
    repository.save(&payload)?;
    info!(
        "stored generated quiz with {} questions",
        payload.questions_and_answers.len()
    );
    Ok(payload)
}
