//! Question domain value objects - identifiers and validation bounds.
//!
//! # Identifiers
//! - [`QuestionId`] - Unique identifier for a question
//! - [`ChoiceId`] - Sequential identifier for a choice within a question
//!
//! # Bounds
//! - [`TITLE_MAX_LEN`], [`POINTS_MIN`], [`POINTS_MAX`], [`CHOICE_TEXT_MAX_LEN`]

use serde::{Deserialize, Serialize};

/// Maximum question title length, in characters.
pub const TITLE_MAX_LEN: usize = 200;

/// Minimum points a question can be worth.
pub const POINTS_MIN: u32 = 1;

/// Maximum points a question can be worth.
pub const POINTS_MAX: u32 = 100;

/// Maximum choice text length, in characters.
pub const CHOICE_TEXT_MAX_LEN: usize = 100;

/// Unique identifier for a question.
///
/// Each constructed question gets a fresh id; distinctness across
/// constructions is the only guaranteed property.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct QuestionId(String);

impl QuestionId {
    /// Creates a QuestionId from an existing string.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Generates a new unique QuestionId using a UUID-like format.
    pub fn generate() -> Self {
        Self(uuid_v4())
    }

    /// Returns the ID as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl<T: Into<String>> From<T> for QuestionId {
    fn from(s: T) -> Self {
        Self::new(s)
    }
}

impl std::fmt::Display for QuestionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier for a choice within its owning question.
///
/// Choices are numbered sequentially from 1 in creation order. Ids are never
/// reused, so an id stays valid as a reference even after other choices are
/// removed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct ChoiceId(u32);

impl ChoiceId {
    /// Creates a ChoiceId from a raw number.
    pub fn new(id: u32) -> Self {
        Self(id)
    }

    /// Returns the raw numeric id.
    pub fn value(&self) -> u32 {
        self.0
    }
}

impl From<u32> for ChoiceId {
    fn from(id: u32) -> Self {
        Self::new(id)
    }
}

impl std::fmt::Display for ChoiceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Generate a simple UUID v4 (without external dependency)
fn uuid_v4() -> String {
    use std::sync::atomic::{AtomicU64, Ordering};
    use std::time::{SystemTime, UNIX_EPOCH};

    // Process-local sequence keeps back-to-back ids distinct even when the
    // clock reading does not move between calls.
    static SEQ: AtomicU64 = AtomicU64::new(0);

    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_nanos();
    let seq = SEQ.fetch_add(1, Ordering::Relaxed);

    format!(
        "{:08x}-{:04x}-4{:03x}-{:04x}-{:012x}",
        (nanos >> 96) as u32,
        (nanos >> 80) as u16,
        (nanos >> 64) as u16 & 0x0fff,
        ((nanos >> 48) as u16 & 0x3fff) | 0x8000,
        ((nanos as u64) ^ seq) & 0xffff_ffff_ffff,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_question_id() {
        let id = QuestionId::new("test-question");
        assert_eq!(id.as_str(), "test-question");

        let generated = QuestionId::generate();
        assert!(!generated.as_str().is_empty());
    }

    #[test]
    fn test_generated_ids_are_distinct() {
        let a = QuestionId::generate();
        let b = QuestionId::generate();
        assert_ne!(a, b);
    }

    #[test]
    fn test_choice_id() {
        let id: ChoiceId = 3.into();
        assert_eq!(id.value(), 3);
        assert_eq!(id.to_string(), "3");
    }

    #[test]
    fn test_choice_id_ordering() {
        assert!(ChoiceId::new(1) < ChoiceId::new(2));
        assert_eq!(ChoiceId::new(5), ChoiceId::new(5));
    }
}
