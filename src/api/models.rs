use serde::{Deserialize, Serialize};

use crate::quiz::{AnswerShape, Question, QuizCustomization, StudentAnswer};

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct QuestionAndAnswer {
    pub answer: AnswerShape,
    pub question: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}

impl QuestionAndAnswer {
    pub fn from_question(question: &Question) -> Self {
        Self {
            answer: question.answer.clone(),
            question: question.question.clone(),
            choices: question.choices.clone(),
        }
    }
}

/// Body of `evaluate-student-answer`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeRequest {
    pub question_and_answer: QuestionAndAnswer,
    pub student_answer: StudentAnswer,
}

#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
pub struct GradeResponse {
    pub correctness: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct StrengthWeaknessRequest {
    pub num_of_qns: usize,
}

/// Score (0-100) plus free-text strengths and weaknesses for a finished quiz.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationReport {
    pub score: f64,
    pub strength: String,
    pub weakness: String,
}

#[derive(Debug, Serialize)]
pub(crate) struct RegenerateRequest<'a> {
    pub quiz_customisation: &'a QuizCustomization,
    pub strength_and_weakness: &'a EvaluationReport,
}

/// The quiz as the backend returns it and as it is stored under `quiz`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct QuizPayload {
    pub questions_and_answers: Vec<Question>,
}

#[derive(Debug, Serialize)]
pub(crate) struct QueryRequest<'a> {
    pub query: &'a str,
}

#[derive(Debug, Deserialize)]
pub(crate) struct QueryResponse {
    pub answer: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn text_question_omits_choices() {
        let question: Question = serde_json::from_value(json!({
            "question": "Capital of France?",
            "answer": "Paris",
            "explanation": ""
        }))
        .unwrap();

        let body = serde_json::to_value(GradeRequest {
            question_and_answer: QuestionAndAnswer::from_question(&question),
            student_answer: StudentAnswer::Text("paris".into()),
        })
        .unwrap();

        assert_eq!(
            body,
            json!({
                "question_and_answer": {"answer": "Paris", "question": "Capital of France?"},
                "student_answer": "paris"
            })
        );
    }

    #[test]
    fn report_accepts_integer_scores() {
        let report: EvaluationReport = serde_json::from_value(json!({
            "score": 80,
            "strength": "definitions",
            "weakness": "dates"
        }))
        .unwrap();
        assert_eq!(report.score, 80.0);
    }
}
