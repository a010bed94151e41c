//! Survey session — in-memory answer state for one user walking the catalog.
//!
//! A session keeps a cursor over the catalog's questions and the answers
//! given so far. Unlike the scoring engine, it validates input: selecting an
//! option that does not belong to a question is an error here, so the answers
//! it hands to the calculator are always in range.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::catalog::{Question, ReferenceData};
use crate::scoring::{AffinityCalculator, AffinityResult, UserAnswers};

/// Errors raised when recording an answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SessionError {
    #[error("Unknown question: {0}")]
    UnknownQuestion(String),

    #[error("{label:?} is not an option of question {question_id}")]
    InvalidOption { question_id: String, label: String },

    #[error("Question {question_id} has no option #{index} (it has {len})")]
    OptionOutOfRange {
        question_id: String,
        index: usize,
        len: usize,
    },
}

/// Answer and cursor counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Progress {
    /// Questions answered so far.
    pub answered: usize,
    /// Questions in the catalog.
    pub total: usize,
    /// Zero-based cursor position.
    pub position: usize,
}

impl Progress {
    /// Share of the catalog answered, in `[0, 1]`.
    pub fn fraction_answered(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.answered as f64 / self.total as f64
        }
    }

    pub fn is_complete(&self) -> bool {
        self.answered >= self.total
    }
}

/// One user's pass through the survey.
#[derive(Debug, Clone)]
pub struct SurveySession<'a> {
    data: &'a ReferenceData,
    answers: UserAnswers,
    current: usize,
}

impl<'a> SurveySession<'a> {
    pub fn new(data: &'a ReferenceData) -> Self {
        Self {
            data,
            answers: UserAnswers::new(),
            current: 0,
        }
    }

    // -----------------------------------------------------------------------
    // Navigation
    // -----------------------------------------------------------------------

    /// The question under the cursor, or `None` for an empty catalog.
    pub fn current_question(&self) -> Option<&'a Question> {
        self.data.questions().get(self.current)
    }

    pub fn position(&self) -> usize {
        self.current
    }

    /// Advance the cursor. Returns `false` when already on the last question.
    pub fn next_question(&mut self) -> bool {
        if self.current + 1 < self.data.question_count() {
            self.current += 1;
            true
        } else {
            false
        }
    }

    /// Step the cursor back. Returns `false` when already on the first question.
    pub fn previous_question(&mut self) -> bool {
        if self.current > 0 {
            self.current -= 1;
            true
        } else {
            false
        }
    }

    /// Jump to a question by catalog position. Out-of-range positions are ignored.
    pub fn go_to(&mut self, position: usize) -> bool {
        if position < self.data.question_count() {
            self.current = position;
            true
        } else {
            false
        }
    }

    // -----------------------------------------------------------------------
    // Answering
    // -----------------------------------------------------------------------

    /// Record `label` as the answer to `question_id`.
    pub fn select(&mut self, question_id: &str, label: &str) -> Result<(), SessionError> {
        let question = self.lookup(question_id)?;
        if !question.has_option(label) {
            return Err(SessionError::InvalidOption {
                question_id: question_id.to_string(),
                label: label.to_string(),
            });
        }
        self.answers.answer(question_id, label);
        Ok(())
    }

    /// Record the option at zero-based `index` as the answer to `question_id`.
    pub fn select_index(&mut self, question_id: &str, index: usize) -> Result<(), SessionError> {
        let question = self.lookup(question_id)?;
        let label = question
            .options
            .get(index)
            .ok_or_else(|| SessionError::OptionOutOfRange {
                question_id: question_id.to_string(),
                index,
                len: question.options.len(),
            })?;
        self.answers.answer(question_id, label.as_str());
        Ok(())
    }

    /// Remove the answer to `question_id`, if any.
    pub fn clear(&mut self, question_id: &str) -> Option<String> {
        self.answers.clear(question_id)
    }

    /// The label currently selected for `question_id`.
    pub fn selected(&self, question_id: &str) -> Option<&str> {
        self.answers.get(question_id)
    }

    pub fn answers(&self) -> &UserAnswers {
        &self.answers
    }

    pub fn progress(&self) -> Progress {
        Progress {
            answered: self.answers.len(),
            total: self.data.question_count(),
            position: self.current,
        }
    }

    /// Rank parties against the current answers. Computed fresh on every call.
    pub fn results(&self) -> Vec<AffinityResult> {
        AffinityCalculator::new(self.data).calculate(&self.answers)
    }

    /// Drop every answer and rewind to the first question.
    pub fn restart(&mut self) {
        log::debug!("Restarting session ({} answers discarded)", self.answers.len());
        self.answers = UserAnswers::new();
        self.current = 0;
    }

    fn lookup(&self, question_id: &str) -> Result<&'a Question, SessionError> {
        self.data
            .question(question_id)
            .ok_or_else(|| SessionError::UnknownQuestion(question_id.to_string()))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReferenceData {
        ReferenceData::from_json(
            include_str!("../data/questions.json"),
            include_str!("../data/parties.json"),
        )
        .unwrap()
    }

    #[test]
    fn test_navigation_is_clamped() {
        let data = sample();
        let mut session = SurveySession::new(&data);
        assert_eq!(session.current_question().unwrap().id, "1");
        assert!(!session.previous_question());

        while session.next_question() {}
        assert_eq!(session.position(), 5);
        assert_eq!(session.current_question().unwrap().id, "6");
        assert!(!session.next_question());

        assert!(session.previous_question());
        assert_eq!(session.position(), 4);
        assert!(session.go_to(0));
        assert!(!session.go_to(6));
        assert_eq!(session.position(), 0);
    }

    #[test]
    fn test_empty_catalog() {
        let data = ReferenceData::default();
        let mut session = SurveySession::new(&data);
        assert!(session.current_question().is_none());
        assert!(!session.next_question());
        assert_eq!(session.progress().fraction_answered(), 0.0);
        assert!(session.results().is_empty());
    }

    #[test]
    fn test_select_validates_input() {
        let data = sample();
        let mut session = SurveySession::new(&data);

        session.select("1", "De acuerdo").unwrap();
        assert_eq!(session.selected("1"), Some("De acuerdo"));

        assert_eq!(
            session.select("99", "Sí"),
            Err(SessionError::UnknownQuestion("99".into()))
        );
        assert!(matches!(
            session.select("5", "Tal vez"),
            Err(SessionError::InvalidOption { .. })
        ));
        assert_eq!(session.answers().len(), 1);
    }

    #[test]
    fn test_select_index() {
        let data = sample();
        let mut session = SurveySession::new(&data);
        session.select_index("5", 2).unwrap();
        assert_eq!(session.selected("5"), Some("Indiferente"));
        assert_eq!(
            session.select_index("5", 3),
            Err(SessionError::OptionOutOfRange {
                question_id: "5".into(),
                index: 3,
                len: 3,
            })
        );
    }

    #[test]
    fn test_progress_and_fresh_results() {
        let data = sample();
        let mut session = SurveySession::new(&data);
        session.select("3", "De acuerdo").unwrap();

        let progress = session.progress();
        assert_eq!(progress.answered, 1);
        assert_eq!(progress.total, 6);
        assert!(!progress.is_complete());

        let first = session.results();
        assert_eq!(first.len(), 4);
        assert_eq!(first[0].id, "movimiento-verde");
        assert_eq!(first[0].affinity, 100.0);

        session.select("3", "Muy en desacuerdo").unwrap();
        let second = session.results();
        assert_ne!(first, second);
    }

    #[test]
    fn test_clear_and_restart() {
        let data = sample();
        let mut session = SurveySession::new(&data);
        session.select("1", "Neutral").unwrap();
        session.select("2", "Neutral").unwrap();
        session.next_question();

        assert_eq!(session.clear("1"), Some("Neutral".into()));
        assert_eq!(session.progress().answered, 1);

        session.restart();
        assert!(session.answers().is_empty());
        assert_eq!(session.position(), 0);
        assert!(session.results().iter().all(|r| r.affinity == 0.0));
    }

    #[test]
    fn test_complete_session() {
        let data = sample();
        let mut session = SurveySession::new(&data);
        for question in data.questions() {
            session.select_index(&question.id, 0).unwrap();
        }
        let progress = session.progress();
        assert!(progress.is_complete());
        assert_eq!(progress.fraction_answered(), 1.0);
    }
}
