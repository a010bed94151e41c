//! # Affinity
//!
//! Scores a user's survey answers against a catalog of political-party
//! reference profiles and ranks the parties by alignment.
//!
//! The reference catalog ([`ReferenceData`]) is loaded once and read-only
//! thereafter. Answers ([`UserAnswers`]) grow as the user progresses; every
//! call to [`AffinityCalculator::calculate`] recomputes the ranking from
//! scratch. Scoring is synchronous, pure, and never fails: malformed input
//! degrades to neutral or zero defaults with a `log` warning.

pub mod catalog;
pub mod config;
pub mod scoring;
pub mod session;

// Re-exports
pub use catalog::{CatalogError, PartyProfile, Question, QuestionType, ReferenceData};
pub use config::EngineConfig;
pub use scoring::{
    answer_value, best_match, calculate_affinity, AffinityCalculator, AffinityResult,
    UserAnswers,
};
pub use session::{Progress, SessionError, SurveySession};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
