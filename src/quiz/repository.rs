use log::{debug, error};
use serde_json::Value;

use super::{error::SessionError, question::Question};
use crate::{
    api::QuizPayload,
    storage::{Storage, StorageError, QUIZ_KEY},
};

/// Reads and replaces the stored quiz; the only way the session touches storage.
pub struct QuizRepository {
    storage: Box<dyn Storage>,
}

impl QuizRepository {
    pub fn new(storage: impl Storage + 'static) -> Self {
        Self {
            storage: Box::new(storage),
        }
    }

    pub fn storage(&self) -> &dyn Storage {
        self.storage.as_ref()
    }

    /// Fails closed: a missing key, bad JSON or a payload without a
    /// `questions_and_answers` array all yield an error, never a session.
    pub fn load(&self) -> Result<QuizPayload, SessionError> {
        let raw = self.storage.get(QUIZ_KEY)?.ok_or_else(|| {
            error!("No quiz found in storage.");
            SessionError::Missing
        })?;

        let payload = parse_payload(&raw).map_err(|reason| {
            error!("stored quiz rejected: {}", reason);
            SessionError::Malformed(reason)
        })?;
        debug!(
            "loaded stored quiz with {} questions",
            payload.questions_and_answers.len()
        );
        Ok(payload)
    }

    pub fn save(&mut self, payload: &QuizPayload) -> Result<(), StorageError> {
        let raw = serde_json::to_string(payload)
            .map_err(|e| StorageError::Encode(QUIZ_KEY.to_string(), e))?;
        self.storage.set(QUIZ_KEY, raw)
    }

    pub fn clear(&mut self) -> Result<(), StorageError> {
        self.storage.remove(QUIZ_KEY)
    }
}

fn parse_payload(raw: &str) -> Result<QuizPayload, String> {
    let value: Value = serde_json::from_str(raw).map_err(|e| format!("not JSON: {}", e))?;
    let questions = value
        .get("questions_and_answers")
        .ok_or("\"questions_and_answers\" is missing")?;
    if !questions.is_array() {
        return Err("\"questions_and_answers\" is not an array".to_string());
    }

    let questions: Vec<Question> = serde_json::from_value(questions.clone())
        .map_err(|e| format!("invalid question: {}", e))?;
    Ok(QuizPayload {
        questions_and_answers: questions,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn repo_with(raw: &str) -> QuizRepository {
        QuizRepository::new(MemoryStorage::new().with(QUIZ_KEY, raw))
    }

    #[test]
    fn missing_key_fails_closed() {
        let repo = QuizRepository::new(MemoryStorage::new());
        assert!(matches!(repo.load(), Err(SessionError::Missing)));
    }

    #[test]
    fn malformed_payloads_fail_closed() {
        for raw in [
            "{}",
            "not json",
            r#"{"questions_and_answers": {"question": "q"}}"#,
            r#"{"questions_and_answers": [{"answer": 1}]}"#,
        ] {
            assert!(
                matches!(repo_with(raw).load(), Err(SessionError::Malformed(_))),
                "{}",
                raw
            );
        }
    }

    #[test]
    fn save_replaces_the_stored_quiz() {
        let mut repo = repo_with(r#"{"questions_and_answers": []}"#);
        let payload: QuizPayload = serde_json::from_str(
            r#"{"questions_and_answers": [{"question": "2+2?", "answer": "4", "explanation": ""}]}"#,
        )
        .unwrap();

        repo.save(&payload).unwrap();
        assert_eq!(repo.load().unwrap(), payload);

        repo.clear().unwrap();
        assert!(matches!(repo.load(), Err(SessionError::Missing)));
    }
}
