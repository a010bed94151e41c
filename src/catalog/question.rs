//! Question definitions.
//!
//! A question's option list is ordered: for Likert questions the position of
//! a label *is* its scale value, so options are never re-sorted after load.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Neutral value for a Likert answer (midpoint of 1..=5).
pub const LIKERT_NEUTRAL: f64 = 3.0;

/// Neutral value for a yes/no answer, and for any unrecognized type.
pub const YES_NO_NEUTRAL: f64 = 0.5;

// ============================================================================
// QuestionType
// ============================================================================

/// How a question's answers map onto the numeric scale.
///
/// Serialized as a plain string. `"likert"` and `"si/no"` are the canonical
/// names; any other string is preserved in [`QuestionType::Unrecognized`] so
/// that catalogs with unknown types still load.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum QuestionType {
    /// Ordered agreement scale, most-positive option first.
    Likert,
    /// Three-way categorical question (`Sí` / `No` / `Indiferente`).
    YesNo,
    /// A type name the engine does not know how to score.
    Unrecognized(String),
}

impl QuestionType {
    /// Value used when an answer to this kind of question cannot be mapped.
    pub fn neutral_value(&self) -> f64 {
        match self {
            Self::Likert => LIKERT_NEUTRAL,
            Self::YesNo | Self::Unrecognized(_) => YES_NO_NEUTRAL,
        }
    }

    /// Canonical wire name.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Likert => "likert",
            Self::YesNo => "si/no",
            Self::Unrecognized(name) => name,
        }
    }
}

impl From<String> for QuestionType {
    fn from(name: String) -> Self {
        match name.trim().to_lowercase().as_str() {
            "likert" => Self::Likert,
            "si/no" | "sí/no" | "yes_no" | "yesno" | "yes/no" => Self::YesNo,
            _ => Self::Unrecognized(name),
        }
    }
}

impl From<&str> for QuestionType {
    fn from(name: &str) -> Self {
        Self::from(name.to_string())
    }
}

impl From<QuestionType> for String {
    fn from(kind: QuestionType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for QuestionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ============================================================================
// Question
// ============================================================================

/// A survey question from the reference catalog.
///
/// Field names accept English keys as well as the Spanish keys the catalog
/// files ship with (`texto`, `categoria`, `tipo`, `opciones`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Question {
    /// Unique identifier, referenced by answers and party profiles.
    pub id: String,
    /// Display text.
    #[serde(alias = "texto")]
    pub text: String,
    /// Category label (e.g. `"Economía"`).
    #[serde(alias = "categoria", default)]
    pub category: String,
    /// Scoring type.
    #[serde(rename = "type", alias = "tipo")]
    pub question_type: QuestionType,
    /// Ordered option labels.
    #[serde(alias = "opciones")]
    pub options: Vec<String>,
}

impl Question {
    pub fn new(
        id: impl Into<String>,
        text: impl Into<String>,
        category: impl Into<String>,
        question_type: QuestionType,
        options: Vec<String>,
    ) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category: category.into(),
            question_type,
            options,
        }
    }

    /// Shorthand for a Likert question.
    pub fn likert<S: Into<String>>(
        id: impl Into<String>,
        text: impl Into<String>,
        options: Vec<S>,
    ) -> Self {
        Self::new(
            id,
            text,
            String::new(),
            QuestionType::Likert,
            options.into_iter().map(Into::into).collect(),
        )
    }

    /// Shorthand for a yes/no question.
    pub fn yes_no<S: Into<String>>(
        id: impl Into<String>,
        text: impl Into<String>,
        options: Vec<S>,
    ) -> Self {
        Self::new(
            id,
            text,
            String::new(),
            QuestionType::YesNo,
            options.into_iter().map(Into::into).collect(),
        )
    }

    /// Builder: set the category label.
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    /// Zero-based position of `label` in the option list (exact match).
    pub fn position_of(&self, label: &str) -> Option<usize> {
        self.options.iter().position(|o| o == label)
    }

    /// Whether `label` is one of this question's options.
    pub fn has_option(&self, label: &str) -> bool {
        self.position_of(label).is_some()
    }
}

// ============================================================================
// Tests
// ============================================================================
