//! Reference catalog — the questions and party profiles scoring runs against.
//!
//! The catalog is static for a session: it is loaded once into a
//! [`ReferenceData`], validated, and never mutated afterwards.
//!
//! # Example
//!
//! ```rust
//! use affinity::catalog::{PartyProfile, Question, ReferenceData};
//!
//! let questions = vec![Question::yes_no("1", "¿Reforma?", vec!["Sí", "No", "Indiferente"])];
//! let parties = vec![PartyProfile::new("a", "Partido A").with_value("1", 1.0)];
//! let data = ReferenceData::new(questions, parties).unwrap();
//! assert_eq!(data.party_count(), 1);
//! ```

pub mod error;
pub mod party;
pub mod question;
pub mod reference;

// Re-exports
pub use error::CatalogError;
pub use party::PartyProfile;
pub use question::{Question, QuestionType, LIKERT_NEUTRAL, YES_NO_NEUTRAL};
pub use reference::{ReferenceData, SCALE_MAX, SCALE_MIN};
