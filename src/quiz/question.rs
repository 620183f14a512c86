use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const TRUE_LABEL: &str = "True";
pub const FALSE_LABEL: &str = "False";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    pub question: String,
    pub answer: AnswerShape,
    #[serde(default)]
    pub explanation: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choices: Option<Vec<String>>,
}

/// The canonical answer exactly as the generator produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerShape {
    /// index into `choices`; floats and negative numbers cannot index and
    /// land in `Other` instead
    Index(usize),
    /// free text, or one of the literal labels "True"/"False"
    Text(String),
    /// every correct index into `choices`
    Indices(Vec<usize>),
    /// anything else the generator emitted; never valid
    Other(Value),
}

impl AnswerShape {
    pub fn is_boolean_label(&self) -> bool {
        matches!(self, AnswerShape::Text(t) if t == TRUE_LABEL || t == FALSE_LABEL)
    }
}

impl Question {
    /// Options a student can pick from. True/False questions fall back to the
    /// two labels when the generator left `choices` out.
    pub fn options(&self) -> Vec<String> {
        match &self.choices {
            Some(choices) => choices.clone(),
            None if self.answer.is_boolean_label() => {
                vec![TRUE_LABEL.to_string(), FALSE_LABEL.to_string()]
            }
            None => Vec::new(),
        }
    }

    /// The correct answer as it is revealed after submission.
    pub fn answer_text(&self) -> String {
        let options = self.options();
        let label = |idx: &usize| options.get(*idx).map_or("?", String::as_str).to_string();

        match &self.answer {
            AnswerShape::Index(idx) => label(idx),
            AnswerShape::Text(text) => text.clone(),
            AnswerShape::Indices(indices) => {
                indices.iter().map(label).collect::<Vec<_>>().join(", ")
            }
            AnswerShape::Other(raw) => raw.to_string(),
        }
    }

    pub fn explanation(&self) -> Option<&str> {
        let explanation = self.explanation.trim();
        (!explanation.is_empty()).then_some(explanation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn parse(value: Value) -> Question {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn answer_shapes_follow_json_type() {
        let q = parse(json!({"question": "q", "answer": 2, "choices": ["a", "b", "c"]}));
        assert_eq!(q.answer, AnswerShape::Index(2));

        let q = parse(json!({"question": "q", "answer": "True"}));
        assert!(q.answer.is_boolean_label());

        let q = parse(json!({"question": "q", "answer": [0, 2]}));
        assert_eq!(q.answer, AnswerShape::Indices(vec![0, 2]));

        let q = parse(json!({"question": "q", "answer": [0, "x"]}));
        assert!(matches!(q.answer, AnswerShape::Other(_)));

        let q = parse(json!({"question": "q", "answer": -1}));
        assert!(matches!(q.answer, AnswerShape::Other(_)));
    }

    #[test]
    fn reveals_labels_for_index_answers() {
        let q = parse(json!({
            "question": "Cities in the south of France?",
            "answer": [0, 2],
            "choices": ["Paris", "Lyon", "Nice"]
        }));
        assert_eq!(q.answer_text(), "Paris, Nice");

        let q = parse(json!({"question": "q", "answer": 5, "choices": ["a"]}));
        assert_eq!(q.answer_text(), "?");
    }

    #[test]
    fn true_false_without_choices_offers_both_labels() {
        let q = parse(json!({"question": "Sky is blue", "answer": "True"}));
        assert_eq!(q.options(), vec!["True", "False"]);

        let q = parse(json!({"question": "Capital?", "answer": "Paris"}));
        assert!(q.options().is_empty());
    }

    #[test]
    fn blank_explanation_is_hidden() {
        let q = parse(json!({"question": "q", "answer": "a", "explanation": "  "}));
        assert_eq!(q.explanation(), None);
    }
}
