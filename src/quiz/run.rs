use log::{debug, info, warn};

use super::{
    customization::QuizCustomization,
    error::{NextAction, QuizError, SessionError},
    flow::EvaluationFlow,
    repository::QuizRepository,
    session::{QuizSession, SessionController},
    variant::Interaction,
};
use crate::api::{ApiClient, EvaluationReport};

/// One quiz screen: the session, the question on display and what happens
/// after the last question is finished.
pub struct QuizRun {
    client: ApiClient,
    repository: QuizRepository,
    controller: SessionController,
    interaction: Option<Interaction>,
    evaluation: EvaluationFlow,
    customization: QuizCustomization,
}

impl QuizRun {
    /// Starts from the stored quiz; fails closed when there is none to take.
    pub fn start(
        client: ApiClient,
        repository: QuizRepository,
        customization: QuizCustomization,
    ) -> Result<Self, SessionError> {
        let controller = SessionController::init(&repository)?;
        let mut run = Self {
            client,
            repository,
            controller,
            interaction: None,
            evaluation: EvaluationFlow::default(),
            customization,
        };
        run.show_current();
        Ok(run)
    }

    pub fn client(&self) -> &ApiClient {
        &self.client
    }

    pub fn controller(&self) -> &SessionController {
        &self.controller
    }

    pub fn repository(&self) -> &QuizRepository {
        &self.repository
    }

    /// `None` once the quiz is complete, or when the current question cannot
    /// be displayed.
    pub fn interaction(&self) -> Option<&Interaction> {
        self.interaction.as_ref()
    }

    pub fn interaction_mut(&mut self) -> Option<&mut Interaction> {
        self.interaction.as_mut()
    }

    pub fn evaluation(&self) -> &EvaluationFlow {
        &self.evaluation
    }

    pub fn customization(&self) -> &QuizCustomization {
        &self.customization
    }

    pub fn customization_mut(&mut self) -> &mut QuizCustomization {
        &mut self.customization
    }

    pub fn submit(&mut self) -> Result<bool, QuizError> {
        if self.controller.is_completed() {
            return Err(SessionError::Completed.into());
        }
        let index = self.controller.index();
        let interaction = self
            .interaction
            .as_mut()
            .ok_or(QuizError::UnknownQuestion { index })?;
        interaction.submit(&self.client)
    }

    /// What the student can do next on the current question. A question that
    /// cannot be displayed can always be skipped past.
    pub fn next_action(&self) -> Option<NextAction> {
        if self.controller.is_completed() {
            return None;
        }
        match &self.interaction {
            Some(interaction) => interaction.next_action(),
            None if self.controller.is_last() => Some(NextAction::Finish),
            None => Some(NextAction::Next),
        }
    }

    pub fn next(&mut self) -> Result<(), QuizError> {
        self.expect_action(NextAction::Next)?;
        if let Some(interaction) = self.interaction.as_mut() {
            interaction.next()?;
        }
        self.controller.advance();
        self.show_current();
        Ok(())
    }

    /// Completes the session and fetches its evaluation report.
    pub fn finish(&mut self) -> Result<&EvaluationReport, QuizError> {
        self.expect_action(NextAction::Finish)?;
        if !self.controller.complete() {
            return Err(SessionError::Completed.into());
        }
        self.interaction = None;
        self.evaluation
            .request_report(&self.client, self.controller.total())
    }

    /// Fetches the report again after a failed attempt.
    pub fn retry_evaluation(&mut self) -> Result<&EvaluationReport, QuizError> {
        if !self.controller.is_completed() {
            return Err(SessionError::NotCompleted.into());
        }
        self.evaluation
            .request_report(&self.client, self.controller.total())
    }

    /// Replaces the finished quiz with one tailored to the last report and
    /// starts over at the first question. On failure the finished quiz and
    /// its report stay as they were.
    pub fn regenerate(&mut self) -> Result<(), QuizError> {
        if !self.controller.is_completed() {
            return Err(SessionError::NotCompleted.into());
        }
        let payload = self
            .evaluation
            .regenerate(&self.client, &self.customization)?;
        self.repository.save(&payload)?;

        let session = QuizSession::new(payload.questions_and_answers)?;
        self.controller.restart(session);
        self.evaluation.reset();
        self.show_current();
        info!("regenerated quiz, {} questions", self.controller.total());
        Ok(())
    }

    fn expect_action(&self, expected: NextAction) -> Result<(), QuizError> {
        match self.next_action() {
            Some(action) if action == expected => Ok(()),
            Some(allowed) => Err(QuizError::WrongAction {
                expected: allowed,
                index: self.controller.index(),
            }),
            None if self.controller.is_completed() => Err(SessionError::Completed.into()),
            None => Err(QuizError::NotSubmitted),
        }
    }

    fn show_current(&mut self) {
        let question = self.controller.current_question();
        self.interaction =
            Interaction::for_question(question, self.controller.index(), self.controller.total());
        match &self.interaction {
            Some(interaction) => debug!(
                "showing question {} as {:?}",
                self.controller.index(),
                interaction.variant()
            ),
            None => warn!(
                "question {} skipped in display, its answer shape is unknown",
                self.controller.index()
            ),
        }
    }
}
