//! Quiz error types.
//!
//! Only strict parsing and invariant checks produce these. The normal request
//! paths (serving questions, analyzing answers, computing progress) normalize
//! bad input to safe defaults instead of failing.

use thiserror::Error;

/// Errors raised by strict parsing and question validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum QuizError {
    /// The label does not name one of the three age bands.
    #[error("unknown age band: {0}")]
    UnknownAgeBand(String),

    /// Difficulty outside the 1..=4 scale.
    #[error("difficulty must be between 1 and 4, got {0}")]
    InvalidDifficulty(u8),

    /// The type tag does not name a known question generator.
    #[error("unknown question kind: {0}")]
    UnknownQuestionKind(String),

    /// A question violates the option-set invariants.
    #[error("malformed question {id}: {reason}")]
    MalformedQuestion { id: String, reason: String },
}

impl QuizError {
    /// Returns `true` for invariant violations, which indicate a generator
    /// bug or a corrupted question file rather than bad user input.
    pub fn is_invariant_violation(&self) -> bool {
        matches!(self, QuizError::MalformedQuestion { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_the_offending_value() {
        assert_eq!(
            QuizError::UnknownAgeBand("3-5".into()).to_string(),
            "unknown age band: 3-5"
        );
        assert_eq!(
            QuizError::InvalidDifficulty(7).to_string(),
            "difficulty must be between 1 and 4, got 7"
        );
    }

    #[test]
    fn only_malformed_questions_are_invariant_violations() {
        let malformed = QuizError::MalformedQuestion {
            id: "6-8-1".into(),
            reason: "correct answer missing from options".into(),
        };
        assert!(malformed.is_invariant_violation());
        assert!(!QuizError::UnknownAgeBand("x".into()).is_invariant_violation());
    }
}
