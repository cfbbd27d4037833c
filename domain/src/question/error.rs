//! Question domain error types

use thiserror::Error;

use super::value_objects::ChoiceId;

/// Errors raised by [`Question`](super::entities::Question) operations.
///
/// Two kinds of failure exist: validation errors (input out of allowed shape
/// or range) and lookup errors (a referenced choice id is not present). Every
/// failure aborts the requested operation and leaves the question unchanged.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum QuestionError {
    /// Title empty or longer than 200 characters.
    #[error("question title must be 1-200 characters, got {0}")]
    InvalidTitle(usize),

    /// Points outside the 1-100 range.
    #[error("question points must be 1-100, got {0}")]
    InvalidPoints(u32),

    /// Choice text empty or longer than 100 characters.
    #[error("choice text must be 1-100 characters, got {0}")]
    InvalidChoiceText(usize),

    /// More distinct choices selected than the question allows.
    #[error("cannot select {got} choices, at most {max} allowed")]
    TooManySelections { got: usize, max: usize },

    /// Removal requested for a choice id that does not exist.
    #[error("no choice with id {0}")]
    ChoiceNotFound(ChoiceId),
}

impl QuestionError {
    /// Check if this error is a validation failure
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            QuestionError::InvalidTitle(_)
                | QuestionError::InvalidPoints(_)
                | QuestionError::InvalidChoiceText(_)
                | QuestionError::TooManySelections { .. }
        )
    }

    /// Check if this error is a failed choice lookup
    pub fn is_not_found(&self) -> bool {
        matches!(self, QuestionError::ChoiceNotFound(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let error = QuestionError::InvalidTitle(0);
        assert_eq!(
            error.to_string(),
            "question title must be 1-200 characters, got 0"
        );

        let error = QuestionError::ChoiceNotFound(ChoiceId::new(999));
        assert_eq!(error.to_string(), "no choice with id 999");

        let error = QuestionError::TooManySelections { got: 3, max: 1 };
        assert_eq!(error.to_string(), "cannot select 3 choices, at most 1 allowed");
    }

    #[test]
    fn test_error_kinds() {
        assert!(QuestionError::InvalidTitle(201).is_validation());
        assert!(QuestionError::InvalidPoints(0).is_validation());
        assert!(QuestionError::InvalidChoiceText(101).is_validation());
        assert!(QuestionError::TooManySelections { got: 2, max: 1 }.is_validation());
        assert!(!QuestionError::ChoiceNotFound(ChoiceId::new(1)).is_validation());

        assert!(QuestionError::ChoiceNotFound(ChoiceId::new(1)).is_not_found());
        assert!(!QuestionError::InvalidPoints(101).is_not_found());
    }
}
