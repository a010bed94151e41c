//! Reference data — the immutable question and party catalog.
//!
//! [`ReferenceData`] is built once per session from a question list and a
//! party list, validated, indexed, and then only read. Scoring borrows it.
//!
//! Loading:
//! 1. Parse the question and party lists (JSON or YAML)
//! 2. Reject hard errors (duplicate ids, questions without options)
//! 3. Log soft issues (out-of-range party values, dangling party references)
//! 4. Index questions by id

use std::collections::{HashMap, HashSet};
use std::path::Path;

use serde::de::DeserializeOwned;

use super::error::CatalogError;
use super::party::PartyProfile;
use super::question::{Question, QuestionType};

/// Lowest value on the common scale.
pub const SCALE_MIN: f64 = 0.0;

/// Highest value on the common scale.
pub const SCALE_MAX: f64 = 5.0;

/// Immutable catalog of questions and party profiles.
///
/// Catalog order is preserved for both lists; it is the order questions are
/// presented in and the tie-break order for equally ranked parties.
#[derive(Debug, Clone, Default)]
pub struct ReferenceData {
    questions: Vec<Question>,
    parties: Vec<PartyProfile>,
    /// Question id → index into `questions`.
    question_index: HashMap<String, usize>,
}

impl ReferenceData {
    /// Validate and index a catalog.
    pub fn new(
        questions: Vec<Question>,
        parties: Vec<PartyProfile>,
    ) -> Result<Self, CatalogError> {
        let mut question_index = HashMap::with_capacity(questions.len());
        for (i, question) in questions.iter().enumerate() {
            if question.options.is_empty() {
                return Err(CatalogError::EmptyOptions(question.id.clone()));
            }
            if question_index.insert(question.id.clone(), i).is_some() {
                return Err(CatalogError::DuplicateQuestion(question.id.clone()));
            }
            if let QuestionType::Unrecognized(name) = &question.question_type {
                log::warn!(
                    "Question {} has unrecognized type {:?}; answers will score as neutral",
                    question.id,
                    name
                );
            }
        }

        let mut party_ids = HashSet::with_capacity(parties.len());
        for party in &parties {
            if !party_ids.insert(party.id.as_str()) {
                return Err(CatalogError::DuplicateParty(party.id.clone()));
            }
            for (question_id, value) in &party.values {
                if !question_index.contains_key(question_id) {
                    log::warn!(
                        "Party {} declares a value for unknown question {}",
                        party.id,
                        question_id
                    );
                }
                if !(SCALE_MIN..=SCALE_MAX).contains(value) {
                    log::warn!(
                        "Party {} value {} for question {} is outside {}..={}",
                        party.id,
                        value,
                        question_id,
                        SCALE_MIN,
                        SCALE_MAX
                    );
                }
            }
        }

        log::debug!(
            "Loaded reference data: {} questions, {} parties",
            questions.len(),
            parties.len()
        );

        Ok(Self {
            questions,
            parties,
            question_index,
        })
    }

    // -----------------------------------------------------------------------
    // Loading
    // -----------------------------------------------------------------------

    /// Build from two JSON documents (question array, party array).
    pub fn from_json(questions: &str, parties: &str) -> Result<Self, CatalogError> {
        let questions: Vec<Question> = serde_json::from_str(questions)?;
        let parties: Vec<PartyProfile> = serde_json::from_str(parties)?;
        Self::new(questions, parties)
    }

    /// Build from two YAML documents (question sequence, party sequence).
    pub fn from_yaml(questions: &str, parties: &str) -> Result<Self, CatalogError> {
        let questions: Vec<Question> = serde_yaml::from_str(questions)?;
        let parties: Vec<PartyProfile> = serde_yaml::from_str(parties)?;
        Self::new(questions, parties)
    }

    /// Build from two files; the format follows each file's extension.
    pub fn from_files(
        questions_path: impl AsRef<Path>,
        parties_path: impl AsRef<Path>,
    ) -> Result<Self, CatalogError> {
        let questions: Vec<Question> = read_list(questions_path.as_ref())?;
        let parties: Vec<PartyProfile> = read_list(parties_path.as_ref())?;
        Self::new(questions, parties)
    }

    // -----------------------------------------------------------------------
    // Access
    // -----------------------------------------------------------------------

    /// All questions, in catalog order.
    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    /// All parties, in catalog order.
    pub fn parties(&self) -> &[PartyProfile] {
        &self.parties
    }

    /// Look up a question by id.
    pub fn question(&self, id: &str) -> Option<&Question> {
        self.question_index.get(id).map(|&i| &self.questions[i])
    }

    /// Catalog position of a question.
    pub fn question_position(&self, id: &str) -> Option<usize> {
        self.question_index.get(id).copied()
    }

    /// Look up a party by id.
    pub fn party(&self, id: &str) -> Option<&PartyProfile> {
        self.parties.iter().find(|p| p.id == id)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn party_count(&self) -> usize {
        self.parties.len()
    }
}

/// Read a JSON or YAML list from disk, dispatching on the file extension.
fn read_list<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>, CatalogError> {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_lowercase())
        .unwrap_or_default();
    match ext.as_str() {
        "json" => {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_json::from_str(&content)?)
        }
        "yaml" | "yml" => {
            let content = std::fs::read_to_string(path)?;
            Ok(serde_yaml::from_str(&content)?)
        }
        _ => Err(CatalogError::UnsupportedFormat(path.display().to_string())),
    }
}

// ============================================================================
// Tests
// ============================================================================
