//! Domain layer for the quiz question model
//!
//! This crate contains the core business logic for multiple-choice quiz
//! questions: a [`Question`] aggregate that owns an ordered collection of
//! [`Choice`] entities, the validation rules for titles, points and choice
//! text, and the bounded-selection logic used to answer a question.
//! It has no dependencies on storage or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Question
//!
//! A question is constructed with a validated title, a points value and a
//! selection limit. Choices are added one at a time and receive sequential
//! ids that are stable for the lifetime of the question, even across
//! removals.
//!
//! ## Selection
//!
//! Answering a question is modelled by [`Question::select_choices`], which
//! checks the number of distinct selected ids against the question's
//! `max_selections` and otherwise passes the selection through unchanged.

pub mod question;

// Re-export commonly used types
pub use question::{
    entities::{Choice, Question},
    error::QuestionError,
    value_objects::{ChoiceId, QuestionId},
};
