//! Answer value mapping.
//!
//! Turns one selected option label into a number on the common scale.
//! [`resolve_value`] is the strict mapping; [`value_or_neutral`] is the one
//! place where a mapping failure is turned into a neutral default.

use thiserror::Error;

use crate::catalog::{Question, QuestionType, SCALE_MAX};

/// Yes/no option meaning agreement.
pub const YES: &str = "Sí";
/// Yes/no option meaning disagreement.
pub const NO: &str = "No";
/// Yes/no option meaning no preference.
pub const INDIFFERENT: &str = "Indiferente";

/// Why an answer could not be mapped to a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MappingIssue {
    #[error("answer {label:?} is not an option of question {question_id}")]
    LabelNotInOptions { question_id: String, label: String },

    #[error("yes/no answer {label:?} for question {question_id} has no defined value")]
    UnmappedYesNoLabel { question_id: String, label: String },

    #[error("question {question_id} has unrecognized type {type_name:?}")]
    UnrecognizedType {
        question_id: String,
        type_name: String,
    },
}

/// Strictly map `label` to a value for `question`.
///
/// - Likert: `5 - index`, so the first option scores 5 and the N-th `6 - N`.
/// - Yes/no: `Sí` → 1, `No` → 0, `Indiferente` → 0.5, independent of the
///   order the options are listed in.
pub fn resolve_value(question: &Question, label: &str) -> Result<f64, MappingIssue> {
    let index = question
        .position_of(label)
        .ok_or_else(|| MappingIssue::LabelNotInOptions {
            question_id: question.id.clone(),
            label: label.to_string(),
        })?;

    match &question.question_type {
        QuestionType::Likert => Ok(SCALE_MAX - index as f64),
        QuestionType::YesNo => match label {
            YES => Ok(1.0),
            NO => Ok(0.0),
            INDIFFERENT => Ok(0.5),
            _ => Err(MappingIssue::UnmappedYesNoLabel {
                question_id: question.id.clone(),
                label: label.to_string(),
            }),
        },
        QuestionType::Unrecognized(name) => Err(MappingIssue::UnrecognizedType {
            question_id: question.id.clone(),
            type_name: name.clone(),
        }),
    }
}

/// Fallback policy: keep a resolved value, or log the issue and substitute
/// the question type's neutral value.
pub fn value_or_neutral(question: &Question, resolved: Result<f64, MappingIssue>) -> f64 {
    match resolved {
        Ok(value) => value,
        Err(issue) => {
            let neutral = question.question_type.neutral_value();
            log::warn!("{}; using neutral value {}", issue, neutral);
            neutral
        }
    }
}

/// Map an answer to a value. Never fails.
pub fn answer_value(question: &Question, label: &str) -> f64 {
    value_or_neutral(question, resolve_value(question, label))
}

// ============================================================================
// Tests
// ============================================================================
