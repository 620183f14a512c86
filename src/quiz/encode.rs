use serde::Serialize;

use super::{error::ValidationError, question::AnswerShape};

/// How a selection has to be put on the wire for a given answer shape.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnswerKind<'q> {
    /// answer is a choice index, send the picked index
    ChoiceByIndex,
    /// answer is a label, send the picked option's text
    ChoiceByLabel(&'q [String]),
    Text,
    MultiSelect,
}

impl<'q> AnswerKind<'q> {
    /// Kind of a choice question; `options` is what the student picks from.
    pub fn for_choice(answer: &AnswerShape, options: &'q [String]) -> Self {
        match answer {
            AnswerShape::Index(_) => AnswerKind::ChoiceByIndex,
            _ => AnswerKind::ChoiceByLabel(options),
        }
    }
}

/// What the student has picked or typed so far.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Selection<'a> {
    Choice(Option<usize>),
    Text(&'a str),
    /// in the order the options were picked
    Indices(&'a [usize]),
}

/// `student_answer` as the grading service expects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum StudentAnswer {
    Index(usize),
    /// `null` when nothing was picked
    Label(Option<String>),
    Text(String),
    Indices(Vec<usize>),
}

/// Encodes a selection for the grader.
///
/// Multi-select indices keep the order they were picked in. Emptiness is the
/// caller's concern: the variants reject an empty pick before getting here.
pub fn encode(
    kind: AnswerKind<'_>,
    selection: Selection<'_>,
) -> Result<StudentAnswer, ValidationError> {
    match (kind, selection) {
        (AnswerKind::ChoiceByIndex, Selection::Choice(Some(idx))) => Ok(StudentAnswer::Index(idx)),
        (AnswerKind::ChoiceByIndex, Selection::Choice(None)) => Err(ValidationError::NoChoice),
        (AnswerKind::ChoiceByLabel(options), Selection::Choice(picked)) => Ok(StudentAnswer::Label(
            picked.and_then(|idx| options.get(idx)).cloned(),
        )),
        (AnswerKind::Text, Selection::Text(text)) => Ok(StudentAnswer::Text(text.to_string())),
        (AnswerKind::MultiSelect, Selection::Indices(indices)) => {
            Ok(StudentAnswer::Indices(indices.to_vec()))
        }
        _ => Err(ValidationError::ShapeMismatch),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn index_answers_send_the_index() {
        let encoded = encode(AnswerKind::ChoiceByIndex, Selection::Choice(Some(2))).unwrap();
        assert_eq!(serde_json::to_value(encoded).unwrap(), json!(2));
    }

    #[test]
    fn label_answers_send_the_label() {
        let options = vec!["True".to_string(), "False".to_string()];
        let kind = AnswerKind::for_choice(&AnswerShape::Text("False".into()), &options);

        let encoded = encode(kind, Selection::Choice(Some(1))).unwrap();
        assert_eq!(serde_json::to_value(encoded).unwrap(), json!("False"));

        let encoded = encode(kind, Selection::Choice(None)).unwrap();
        assert_eq!(serde_json::to_value(encoded).unwrap(), json!(null));
    }

    #[test]
    fn text_is_sent_verbatim() {
        let encoded = encode(AnswerKind::Text, Selection::Text("")).unwrap();
        assert_eq!(serde_json::to_value(encoded).unwrap(), json!(""));
    }

    #[test]
    fn multi_select_keeps_pick_order() {
        let encoded = encode(AnswerKind::MultiSelect, Selection::Indices(&[3, 1])).unwrap();
        assert_eq!(serde_json::to_value(encoded).unwrap(), json!([3, 1]));

        let encoded = encode(AnswerKind::MultiSelect, Selection::Indices(&[1, 3])).unwrap();
        assert_eq!(encoded, StudentAnswer::Indices(vec![1, 3]));
    }

    #[test]
    fn mismatched_selection_is_rejected() {
        assert_eq!(
            encode(AnswerKind::Text, Selection::Choice(Some(0))),
            Err(ValidationError::ShapeMismatch)
        );
    }
}
