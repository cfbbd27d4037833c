//! Quiz question subdomain.
//!
//! - [`entities::Question`] — a validated quiz question owning its choices
//! - [`entities::Choice`] — one answer option with text and a correctness flag
//! - [`value_objects::QuestionId`] / [`value_objects::ChoiceId`] — identifiers
//! - [`error::QuestionError`] — validation and lookup errors

pub mod entities;
pub mod error;
pub mod value_objects;
