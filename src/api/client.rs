use log::{debug, warn};
use serde::{de::DeserializeOwned, Serialize};
use serde_json::Value;

use super::{
    auth::{Authenticator, StaticToken},
    error::RequestError,
    models::{
        EvaluationReport, GradeRequest, GradeResponse, QueryRequest, QueryResponse, QuizPayload,
        RegenerateRequest, StrengthWeaknessRequest,
    },
};
use crate::{config::Config, quiz::QuizCustomization};

const EVALUATE_ANSWER: &str = "/v1/api/evaluate-student-answer";
const STRENGTH_WEAKNESS: &str = "/v1/api/get-student-strength-weakness";
const REGENERATE_QUIZ: &str = "/v1/api/regenerate-quiz";
const QUIZ_FROM_NOTES: &str = "/v1/api/get-quiz-from-uploaded-notes";
const QUERY_BOT: &str = "/v1/api/query-bot";

/// Sends one authenticated JSON POST and hands back the decoded body.
///
/// Implementations report a non-2xx answer as [`RequestError::Status`] and a
/// request that got no answer at all as [`RequestError::Unreachable`].
pub trait Transport {
    fn post_json(&self, url: &str, token: &str, body: &Value) -> Result<Value, RequestError>;
}

pub struct UreqTransport {
    agent: ureq::Agent,
}

impl UreqTransport {
    pub fn new() -> Self {
        Self {
            agent: ureq::AgentBuilder::new().build(),
        }
    }
}

impl Default for UreqTransport {
    fn default() -> Self {
        Self::new()
    }
}

impl Transport for UreqTransport {
    fn post_json(&self, url: &str, token: &str, body: &Value) -> Result<Value, RequestError> {
        let response = self
            .agent
            .post(url)
            .set("Authorization", &format!("Bearer {}", token))
            .set("Content-Type", "application/json")
            .send_json(body)
            .map_err(|e| match e {
                ureq::Error::Status(code, _) => RequestError::Status { status: code },
                other => RequestError::Unreachable(other.to_string()),
            })?;

        let body: Value = response.into_json()?;
        Ok(body)
    }
}

pub struct ApiClient {
    base_url: String,
    transport: Box<dyn Transport>,
    auth: Box<dyn Authenticator>,
}

impl ApiClient {
    pub fn new(
        base_url: impl Into<String>,
        transport: impl Transport + 'static,
        auth: impl Authenticator + 'static,
    ) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            transport: Box::new(transport),
            auth: Box::new(auth),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            config.api_url.as_str(),
            UreqTransport::new(),
            StaticToken::new(config.token.clone()),
        )
    }

    pub fn evaluate_student_answer(&self, request: &GradeRequest) -> Result<bool, RequestError> {
        let response: GradeResponse = self.post(EVALUATE_ANSWER, request)?;
        Ok(response.correctness)
    }

    pub fn get_student_strength_weakness(
        &self,
        num_of_qns: usize,
    ) -> Result<EvaluationReport, RequestError> {
        self.post(STRENGTH_WEAKNESS, &StrengthWeaknessRequest { num_of_qns })
    }

    pub fn regenerate_quiz(
        &self,
        customization: &QuizCustomization,
        report: &EvaluationReport,
    ) -> Result<QuizPayload, RequestError> {
        self.post(
            REGENERATE_QUIZ,
            &RegenerateRequest {
                quiz_customisation: customization,
                strength_and_weakness: report,
            },
        )
    }

    pub fn get_quiz_from_uploaded_notes(
        &self,
        customization: &QuizCustomization,
    ) -> Result<QuizPayload, RequestError> {
        self.post(QUIZ_FROM_NOTES, customization)
    }

    pub fn query_bot(&self, query: &str) -> Result<String, RequestError> {
        let response: QueryResponse = self.post(QUERY_BOT, &QueryRequest { query })?;
        Ok(response.answer)
    }

    // identity first, then the request; nothing goes out without a token
    fn post<B, R>(&self, endpoint: &str, body: &B) -> Result<R, RequestError>
    where
        B: Serialize,
        R: DeserializeOwned,
    {
        let token = self
            .auth
            .bearer_token()
            .ok_or(RequestError::Unauthenticated)?;
        let url = format!("{}{}", self.base_url, endpoint);
        let body = serde_json::to_value(body)?;

        debug!("POST {}", url);
        let response = self
            .transport
            .post_json(&url, &token, &body)
            .map_err(|e| {
                warn!("{} failed: {}", endpoint, e);
                e
            })?;

        Ok(serde_json::from_value(response)?)
    }
}
