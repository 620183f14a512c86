#![allow(dead_code)]

use std::{
    cell::RefCell,
    collections::{HashMap, VecDeque},
    rc::Rc,
};

use serde_json::{json, Value};
use studyquiz::{
    api::{ApiClient, Authenticator, RequestError, Transport},
    quiz::{QuizCustomization, QuizRepository, QuizRun},
    storage::{MemoryStorage, QUIZ_KEY},
};

pub enum Reply {
    Body(Value),
    Status(u16),
    NoResponse,
}

#[derive(Debug, Clone)]
pub struct Call {
    pub endpoint: String,
    pub token: String,
    pub body: Value,
}

#[derive(Default)]
struct Script {
    replies: HashMap<String, VecDeque<Reply>>,
    calls: Vec<Call>,
}

/// Scripted stand-in for the backend. Replies are queued per endpoint name;
/// the last queued reply keeps being served.
#[derive(Clone, Default)]
pub struct FakeBackend {
    script: Rc<RefCell<Script>>,
    token: Rc<RefCell<Option<String>>>,
}

impl FakeBackend {
    pub fn new() -> Self {
        let backend = Self::default();
        backend.sign_in("test-token");
        backend
    }

    pub fn reply(&self, endpoint: &str, reply: Reply) -> &Self {
        self.script
            .borrow_mut()
            .replies
            .entry(endpoint.to_string())
            .or_default()
            .push_back(reply);
        self
    }

    pub fn grade(&self, correct: bool) -> &Self {
        self.reply(
            "evaluate-student-answer",
            Reply::Body(json!({ "correctness": correct })),
        )
    }

    pub fn report(&self, score: u32) -> &Self {
        self.reply(
            "get-student-strength-weakness",
            Reply::Body(json!({"score": score, "strength": "recall", "weakness": "dates"})),
        )
    }

    pub fn sign_in(&self, token: &str) {
        *self.token.borrow_mut() = Some(token.to_string());
    }

    pub fn sign_out(&self) {
        *self.token.borrow_mut() = None;
    }

    pub fn calls(&self) -> Vec<Call> {
        self.script.borrow().calls.clone()
    }

    pub fn calls_to(&self, endpoint: &str) -> Vec<Call> {
        self.calls()
            .into_iter()
            .filter(|c| c.endpoint == endpoint)
            .collect()
    }

    pub fn client(&self) -> ApiClient {
        ApiClient::new(
            "http://backend.test",
            FakeTransport(self.clone()),
            FakeAuth(self.clone()),
        )
    }
}

pub struct FakeTransport(FakeBackend);

impl Transport for FakeTransport {
    fn post_json(&self, url: &str, token: &str, body: &Value) -> Result<Value, RequestError> {
        let endpoint = url.rsplit('/').next().unwrap_or_default().to_string();
        let mut script = self.0.script.borrow_mut();
        script.calls.push(Call {
            endpoint: endpoint.clone(),
            token: token.to_string(),
            body: body.clone(),
        });

        let queue = script
            .replies
            .get_mut(&endpoint)
            .unwrap_or_else(|| panic!("no reply scripted for {}", endpoint));
        let reply = if queue.len() > 1 {
            queue.pop_front().unwrap()
        } else {
            match queue.front().unwrap() {
                Reply::Body(v) => Reply::Body(v.clone()),
                Reply::Status(s) => Reply::Status(*s),
                Reply::NoResponse => Reply::NoResponse,
            }
        };

        match reply {
            Reply::Body(v) => Ok(v),
            Reply::Status(status) => Err(RequestError::Status { status }),
            Reply::NoResponse => Err(RequestError::Unreachable("connection timed out".into())),
        }
    }
}

pub struct FakeAuth(FakeBackend);

impl Authenticator for FakeAuth {
    fn bearer_token(&self) -> Option<String> {
        self.0.token.borrow().clone()
    }
}

pub fn stored_quiz(questions: Value) -> QuizRepository {
    let payload = json!({ "questions_and_answers": questions });
    QuizRepository::new(MemoryStorage::new().with(QUIZ_KEY, payload.to_string()))
}

pub fn start(backend: &FakeBackend, questions: Value) -> QuizRun {
    QuizRun::start(
        backend.client(),
        stored_quiz(questions),
        QuizCustomization::default(),
    )
    .expect("stored quiz should start a session")
}

pub fn text_questions(n: usize) -> Value {
    Value::Array(
        (0..n)
            .map(|i| {
                json!({
                    "question": format!("Q{}", i + 1),
                    "answer": format!("A{}", i + 1),
                    "explanation": ""
                })
            })
            .collect(),
    )
}
