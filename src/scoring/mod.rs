//! Scoring — maps answers onto the common scale and ranks parties by affinity.
//!
//! ```text
//! UserAnswers (question id → label)
//!   ↓  mapper::answer_value()        one number per answered question
//! Vec<Position>
//!   ↓  calculator::party_affinity()  mean distance → percentage, per party
//! Vec<AffinityResult>                ranked, best match first
//! ```
//!
//! Scoring never fails: bad labels, unknown questions, and uncovered
//! questions all resolve to documented defaults and a log line.
//!
//! # Example
//!
//! ```rust
//! use affinity::catalog::{PartyProfile, Question, ReferenceData};
//! use affinity::scoring::{AffinityCalculator, UserAnswers};
//!
//! let questions = vec![Question::likert(
//!     "1",
//!     "El Estado debería aumentar el gasto en salud.",
//!     vec!["Muy de acuerdo", "De acuerdo", "Neutral", "En desacuerdo", "Muy en desacuerdo"],
//! )];
//! let parties = vec![PartyProfile::new("a", "Partido A").with_value("1", 4.0)];
//! let data = ReferenceData::new(questions, parties).unwrap();
//!
//! let answers = UserAnswers::new().with("1", "De acuerdo");
//! let results = AffinityCalculator::new(&data).calculate(&answers);
//! assert_eq!(results[0].affinity, 100.0);
//! ```

pub mod answers;
pub mod calculator;
pub mod mapper;

// Re-exports
pub use answers::UserAnswers;
pub use calculator::{
    best_match, calculate_affinity, AffinityCalculator, AffinityResult, AFFINITY_SCALE,
};
pub use mapper::{answer_value, resolve_value, value_or_neutral, MappingIssue};
