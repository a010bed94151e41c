//! Affinity calculation.
//!
//! For each party, the calculator averages the absolute distance between the
//! user's value and the party's value over every answered question the party
//! takes a position on, and converts that mean distance into a percentage:
//!
//! ```text
//! affinity = clamp(100 - mean_diff * 20, 0, 100)     (20 = 100 / SCALE_MAX)
//! ```
//!
//! A party with no overlapping questions scores 0. Results are ranked by
//! descending affinity with a stable sort, so tied parties keep catalog order.

use std::fmt;

use serde::{Deserialize, Serialize};

use super::answers::UserAnswers;
use super::mapper::answer_value;
use crate::catalog::{PartyProfile, Question, ReferenceData, SCALE_MAX};

/// Percentage points lost per unit of mean distance.
pub const AFFINITY_SCALE: f64 = 100.0 / SCALE_MAX;

// ============================================================================
// AffinityResult
// ============================================================================

/// One party's affinity with the user. Derived; recomputed on every call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AffinityResult {
    /// Party id.
    pub id: String,
    /// Party display name.
    pub name: String,
    /// Percentage in `[0, 100]`, rounded to two decimals.
    pub affinity: f64,
}

impl fmt::Display for AffinityResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {:.2}%", self.name, self.affinity)
    }
}

/// A mapped answer: the user's value for one catalog question.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position<'a> {
    pub question_id: &'a str,
    pub value: f64,
}

// ============================================================================
// AffinityCalculator
// ============================================================================

/// Scores answers against every party in a [`ReferenceData`].
///
/// Holds only a shared borrow of the catalog, so one calculator can be used
/// from several threads with independent answer sets.
#[derive(Debug, Clone, Copy)]
pub struct AffinityCalculator<'a> {
    data: &'a ReferenceData,
}

impl<'a> AffinityCalculator<'a> {
    pub fn new(data: &'a ReferenceData) -> Self {
        Self { data }
    }

    /// Affinity for every party, best match first.
    pub fn calculate(&self, answers: &UserAnswers) -> Vec<AffinityResult> {
        let positions = user_positions(answers, |id| self.data.question(id));
        rank(
            self.data
                .parties()
                .iter()
                .map(|party| party_affinity(&positions, party))
                .collect(),
        )
    }
}

/// Same as [`AffinityCalculator::calculate`] for callers holding plain slices.
pub fn calculate_affinity(
    answers: &UserAnswers,
    questions: &[Question],
    parties: &[PartyProfile],
) -> Vec<AffinityResult> {
    let positions = user_positions(answers, |id| questions.iter().find(|q| q.id == id));
    rank(
        parties
            .iter()
            .map(|party| party_affinity(&positions, party))
            .collect(),
    )
}

/// Map every answer whose question exists in the catalog.
///
/// Answers referencing unknown questions are logged and skipped.
pub fn user_positions<'a, 'q, F>(answers: &'a UserAnswers, lookup: F) -> Vec<Position<'a>>
where
    F: Fn(&str) -> Option<&'q Question>,
{
    answers
        .iter()
        .filter_map(|(question_id, label)| match lookup(question_id) {
            Some(question) => Some(Position {
                question_id,
                value: answer_value(question, label),
            }),
            None => {
                log::warn!("Answer for unknown question {} ignored", question_id);
                None
            }
        })
        .collect()
}

/// Affinity of one party against already-mapped user positions.
pub fn party_affinity(positions: &[Position<'_>], party: &PartyProfile) -> AffinityResult {
    let mut sum = 0.0;
    let mut count = 0usize;

    for position in positions {
        match party.value_for(position.question_id) {
            Some(party_value) => {
                sum += (position.value - party_value).abs();
                count += 1;
            }
            None => log::debug!(
                "Party {} has no position on question {}",
                party.id,
                position.question_id
            ),
        }
    }

    let affinity = if count > 0 {
        let mean_diff = sum / count as f64;
        round2(clamp_percent(100.0 - mean_diff * AFFINITY_SCALE))
    } else {
        0.0
    };

    AffinityResult {
        id: party.id.clone(),
        name: party.name.clone(),
        affinity,
    }
}

/// Stable descending sort by affinity.
pub fn rank(mut results: Vec<AffinityResult>) -> Vec<AffinityResult> {
    results.sort_by(|a, b| b.affinity.total_cmp(&a.affinity));
    results
}

/// The highest-affinity result; the earliest one wins a tie.
pub fn best_match(results: &[AffinityResult]) -> Option<&AffinityResult> {
    results
        .iter()
        .reduce(|best, r| if r.affinity > best.affinity { r } else { best })
}

/// Round half away from zero to two decimals.
pub fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

fn clamp_percent(value: f64) -> f64 {
    // NaN only arises from NaN party values (YAML `.nan`)
    if value.is_nan() {
        0.0
    } else {
        value.clamp(0.0, 100.0)
    }
}

// ============================================================================
// Tests
// ============================================================================
