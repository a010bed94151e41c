//! Party reference profiles.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A party's declared positions on the common 0..=5 scale.
///
/// `values` is sparse: a party need not take a position on every question.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PartyProfile {
    pub id: String,
    /// Display name.
    #[serde(alias = "nombre")]
    pub name: String,
    /// Question id → reference value.
    #[serde(alias = "respuestas", default)]
    pub values: HashMap<String, f64>,
}

impl PartyProfile {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            values: HashMap::new(),
        }
    }

    /// Builder: set the party's value for one question.
    pub fn with_value(mut self, question_id: impl Into<String>, value: f64) -> Self {
        self.values.insert(question_id.into(), value);
        self
    }

    /// The party's reference value for `question_id`, if it declares one.
    pub fn value_for(&self, question_id: &str) -> Option<f64> {
        self.values.get(question_id).copied()
    }
}
