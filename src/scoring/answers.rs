//! A user's answers, keyed by question id.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Selected option label per question id.
///
/// Grows as the user progresses through the survey. Ordered by question id so
/// aggregation visits answers in a stable order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserAnswers {
    answers: BTreeMap<String, String>,
}

impl UserAnswers {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record (or replace) the answer for a question. Returns the previous label.
    pub fn answer(
        &mut self,
        question_id: impl Into<String>,
        label: impl Into<String>,
    ) -> Option<String> {
        self.answers.insert(question_id.into(), label.into())
    }

    /// Builder form of [`answer`](Self::answer).
    pub fn with(mut self, question_id: impl Into<String>, label: impl Into<String>) -> Self {
        self.answer(question_id, label);
        self
    }

    /// Forget the answer for a question.
    pub fn clear(&mut self, question_id: &str) -> Option<String> {
        self.answers.remove(question_id)
    }

    pub fn get(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id).map(String::as_str)
    }

    pub fn contains(&self, question_id: &str) -> bool {
        self.answers.contains_key(question_id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// `(question_id, label)` pairs ordered by question id.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.answers.iter().map(|(q, a)| (q.as_str(), a.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for UserAnswers {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            answers: iter
                .into_iter()
                .map(|(q, a)| (q.into(), a.into()))
                .collect(),
        }
    }
}
