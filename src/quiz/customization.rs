use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CustomizationError {
    #[error("Number of questions must be at least 1.")]
    NoQuestions,

    #[error("Select at least one question type.")]
    NoQuestionTypes,

    #[error("Please specify what to emphasize.")]
    MissingEmphasis,

    #[error("Failed to read quiz options: {0}")]
    Io(#[from] std::io::Error),

    #[error("Quiz options are not valid YAML: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QuestionTypeTag {
    MultipleChoice,
    MultiSelect,
    TrueFalse,
    FillInTheBlank,
    ShortAnswer,
    LongAnswer,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DifficultyLevel {
    Easy,
    Medium,
    Hard,
    #[default]
    Mix,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Emphasis {
    #[default]
    KeyPoints,
    Details,
    Definitions,
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Language {
    Arabic,
    Bengali,
    Bulgarian,
    #[serde(rename = "Chinese simplified and traditional")]
    Chinese,
    Croatian,
    Czech,
    Danish,
    Dutch,
    #[default]
    English,
    Estonian,
    Finnish,
    French,
    German,
    Greek,
    Hebrew,
    Hindi,
    Hungarian,
    Indonesian,
    Italian,
    Japanese,
    Korean,
    Latvian,
    Lithuanian,
    Norwegian,
    Polish,
    Portuguese,
    Romanian,
    Russian,
    Serbian,
    Slovak,
    Slovenian,
    Spanish,
    Swahili,
    Swedish,
    Thai,
    Turkish,
    Ukrainian,
    Vietnamese,
}

/// Options for generating or regenerating a quiz; sent to the backend as-is.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct QuizCustomization {
    pub number_of_questions: u32,
    pub question_types: Vec<QuestionTypeTag>,
    pub difficulty_level: DifficultyLevel,
    pub include_explanations: bool,
    pub emphasis: Emphasis,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub emphasis_custom: Option<String>,
    pub language: Language,
}

impl Default for QuizCustomization {
    fn default() -> Self {
        Self {
            number_of_questions: 10,
            question_types: vec![QuestionTypeTag::MultipleChoice],
            difficulty_level: DifficultyLevel::default(),
            include_explanations: false,
            emphasis: Emphasis::default(),
            emphasis_custom: None,
            language: Language::default(),
        }
    }
}

impl QuizCustomization {
    pub fn from_yaml(content: &str) -> Result<Self, CustomizationError> {
        let customization: QuizCustomization = serde_yaml_ng::from_str(content)?;
        customization.normalized()
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, CustomizationError> {
        Self::from_yaml(&std::fs::read_to_string(path)?)
    }

    /// Collapses repeated question types (first occurrence wins) and validates.
    pub fn normalized(mut self) -> Result<Self, CustomizationError> {
        let mut seen = Vec::with_capacity(self.question_types.len());
        self.question_types.retain(|t| {
            if seen.contains(t) {
                false
            } else {
                seen.push(*t);
                true
            }
        });
        self.validate()?;
        Ok(self)
    }

    pub fn validate(&self) -> Result<(), CustomizationError> {
        if self.number_of_questions < 1 {
            return Err(CustomizationError::NoQuestions);
        }
        if self.question_types.is_empty() {
            return Err(CustomizationError::NoQuestionTypes);
        }
        let custom_missing = self
            .emphasis_custom
            .as_deref()
            .map_or(true, |c| c.trim().is_empty());
        if self.emphasis == Emphasis::Other && custom_missing {
            return Err(CustomizationError::MissingEmphasis);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn defaults_match_the_form() {
        let body = serde_json::to_value(QuizCustomization::default()).unwrap();
        assert_eq!(
            body,
            json!({
                "number_of_questions": 10,
                "question_types": ["multiple_choice"],
                "difficulty_level": "mix",
                "include_explanations": false,
                "emphasis": "key_points",
                "language": "English"
            })
        );
    }

    #[test]
    fn yaml_fills_missing_fields_and_dedupes_types() {
        let customization = QuizCustomization::from_yaml(
            "number_of_questions: 3\nquestion_types: [true_false, multi_select, true_false]\nlanguage: Chinese simplified and traditional\n",
        )
        .unwrap();

        assert_eq!(customization.number_of_questions, 3);
        assert_eq!(
            customization.question_types,
            vec![QuestionTypeTag::TrueFalse, QuestionTypeTag::MultiSelect]
        );
        assert_eq!(customization.language, Language::Chinese);
        assert_eq!(customization.difficulty_level, DifficultyLevel::Mix);
    }

    #[test]
    fn rejects_zero_questions() {
        let err = QuizCustomization::from_yaml("number_of_questions: 0\n").unwrap_err();
        assert!(matches!(err, CustomizationError::NoQuestions));
    }

    #[test]
    fn other_emphasis_needs_free_text() {
        let mut customization = QuizCustomization {
            emphasis: Emphasis::Other,
            ..Default::default()
        };
        assert!(matches!(
            customization.validate(),
            Err(CustomizationError::MissingEmphasis)
        ));

        customization.emphasis_custom = Some("formulas".into());
        assert!(customization.validate().is_ok());
    }
}
