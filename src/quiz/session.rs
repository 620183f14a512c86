use log::{debug, info};

use super::{error::SessionError, question::Question, repository::QuizRepository};

/// Ordered questions, a cursor that only moves forward, and a completion flag.
#[derive(Debug, Clone)]
pub struct QuizSession {
    questions: Vec<Question>,
    position: usize,
    completed: bool,
}

impl QuizSession {
    pub fn new(questions: Vec<Question>) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::Empty);
        }
        Ok(Self {
            questions,
            position: 0,
            completed: false,
        })
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Progress {
    pub current: usize,
    pub total: usize,
    pub percent: f64,
}

/// Sole owner of the running [`QuizSession`].
#[derive(Debug)]
pub struct SessionController {
    session: QuizSession,
}

impl SessionController {
    pub fn new(session: QuizSession) -> Self {
        Self { session }
    }

    /// Builds a session from the stored quiz; nothing is created when the
    /// stored payload is missing, malformed or empty.
    pub fn init(repository: &QuizRepository) -> Result<Self, SessionError> {
        let payload = repository.load()?;
        let session = QuizSession::new(payload.questions_and_answers)?;
        info!("quiz session started with {} questions", session.questions.len());
        Ok(Self::new(session))
    }

    pub fn session(&self) -> &QuizSession {
        &self.session
    }

    pub fn current_question(&self) -> &Question {
        &self.session.questions[self.session.position]
    }

    /// 1-based number of the current question.
    pub fn index(&self) -> usize {
        self.session.position + 1
    }

    pub fn total(&self) -> usize {
        self.session.questions.len()
    }

    pub fn is_last(&self) -> bool {
        self.index() == self.total()
    }

    pub fn is_completed(&self) -> bool {
        self.session.completed
    }

    /// Moves to the next question. A no-op on the last question and once the
    /// session is complete; returns whether the cursor moved.
    pub fn advance(&mut self) -> bool {
        if self.session.completed || self.is_last() {
            return false;
        }
        self.session.position += 1;
        debug!("advanced to question {} of {}", self.index(), self.total());
        true
    }

    /// Marks the session complete. Returns `true` only for the call that
    /// actually completed it.
    pub fn complete(&mut self) -> bool {
        if self.session.completed {
            return false;
        }
        self.session.completed = true;
        info!("quiz session completed ({} questions)", self.total());
        true
    }

    /// Swaps in a freshly generated session, back at the first question.
    pub fn restart(&mut self, session: QuizSession) {
        info!("quiz session restarted with {} questions", session.questions.len());
        self.session = session;
    }

    pub fn progress(&self) -> Progress {
        let current = self.index();
        let total = self.total();
        Progress {
            current,
            total,
            percent: current as f64 / total as f64 * 100.0,
        }
    }
}
