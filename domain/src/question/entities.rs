//! Question domain entities

use serde::{Deserialize, Serialize};

use super::error::QuestionError;
use super::value_objects::{
    CHOICE_TEXT_MAX_LEN, ChoiceId, POINTS_MAX, POINTS_MIN, QuestionId, TITLE_MAX_LEN,
};

/// One answer option belonging to a question (Entity)
///
/// Choices are created only through [`Question::add_choice`], which validates
/// the text and assigns the id.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Choice {
    id: ChoiceId,
    text: String,
    is_correct: bool,
}

impl Choice {
    fn new(id: ChoiceId, text: String, is_correct: bool) -> Self {
        Self {
            id,
            text,
            is_correct,
        }
    }

    pub fn id(&self) -> ChoiceId {
        self.id
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_correct(&self) -> bool {
        self.is_correct
    }
}

impl std::fmt::Display for Choice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.text)
    }
}

/// A multiple-choice quiz question (Aggregate Root)
///
/// Owns an insertion-ordered collection of [`Choice`]s and the counter that
/// hands out their sequential ids. All mutation goes through the methods on
/// this type, so a constructed question never holds an invalid title, points
/// value or choice.
///
/// # Example
///
/// ```
/// use quiz_domain::Question;
///
/// let mut question = Question::new("What is the capital of France?").unwrap();
/// let paris = question.add_choice("Paris", true).unwrap();
/// question.add_choice("London", false).unwrap();
///
/// let selected = question.select_choices(&[paris.id()]).unwrap();
/// assert_eq!(selected, vec![paris.id()]);
/// ```
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Question {
    id: QuestionId,
    title: String,
    points: u32,
    max_selections: usize,
    choices: Vec<Choice>,
    next_choice_id: u32,
}

impl Question {
    /// Create a question worth 1 point allowing a single selection.
    pub fn new(title: impl Into<String>) -> Result<Self, QuestionError> {
        Self::with_settings(title, 1, 1)
    }

    /// Create a question with explicit points and selection limit.
    ///
    /// Fails if the title is empty or longer than 200 characters, or if
    /// points fall outside 1-100. On failure no question exists at all;
    /// there is no partially-valid state.
    pub fn with_settings(
        title: impl Into<String>,
        points: u32,
        max_selections: usize,
    ) -> Result<Self, QuestionError> {
        let title = title.into();
        let title_len = title.chars().count();
        if title_len == 0 || title_len > TITLE_MAX_LEN {
            return Err(QuestionError::InvalidTitle(title_len));
        }
        if !(POINTS_MIN..=POINTS_MAX).contains(&points) {
            return Err(QuestionError::InvalidPoints(points));
        }
        Ok(Self {
            id: QuestionId::generate(),
            title,
            points,
            max_selections,
            choices: Vec::new(),
            next_choice_id: 1,
        })
    }

    pub fn id(&self) -> &QuestionId {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn points(&self) -> u32 {
        self.points
    }

    pub fn max_selections(&self) -> usize {
        self.max_selections
    }

    /// All choices, in insertion order.
    pub fn choices(&self) -> &[Choice] {
        &self.choices
    }

    /// Look up a choice by id.
    pub fn choice(&self, id: ChoiceId) -> Option<&Choice> {
        self.choices.iter().find(|choice| choice.id == id)
    }

    /// Ids of the choices currently marked correct, in insertion order.
    pub fn correct_choice_ids(&self) -> Vec<ChoiceId> {
        self.choices
            .iter()
            .filter(|choice| choice.is_correct)
            .map(|choice| choice.id)
            .collect()
    }

    /// Add a choice to the end of the collection.
    ///
    /// The new choice receives the next sequential id, starting at 1 for the
    /// first choice. The counter never moves backwards, so ids stay unique
    /// for the lifetime of the question even after removals. Returns the
    /// stored choice.
    ///
    /// Fails if the text is empty or longer than 100 characters.
    pub fn add_choice(
        &mut self,
        text: impl Into<String>,
        is_correct: bool,
    ) -> Result<Choice, QuestionError> {
        let text = text.into();
        let text_len = text.chars().count();
        if text_len == 0 || text_len > CHOICE_TEXT_MAX_LEN {
            return Err(QuestionError::InvalidChoiceText(text_len));
        }
        let choice = Choice::new(ChoiceId::new(self.next_choice_id), text, is_correct);
        self.next_choice_id += 1;
        self.choices.push(choice.clone());
        Ok(choice)
    }

    /// Remove the choice with the given id.
    ///
    /// Remaining choices keep their ids and relative order. Fails with
    /// [`QuestionError::ChoiceNotFound`] if no such choice exists, leaving
    /// the collection untouched.
    pub fn remove_choice_by_id(&mut self, id: ChoiceId) -> Result<(), QuestionError> {
        let index = self
            .choices
            .iter()
            .position(|choice| choice.id == id)
            .ok_or(QuestionError::ChoiceNotFound(id))?;
        self.choices.remove(index);
        Ok(())
    }

    /// Remove every choice. Never fails.
    ///
    /// The id counter keeps running; a choice added afterwards continues the
    /// sequence rather than restarting at 1.
    pub fn remove_all_choices(&mut self) {
        self.choices.clear();
    }

    /// Overwrite the correctness flag of every choice.
    ///
    /// A choice becomes correct exactly when its id appears in `ids`; all
    /// others become incorrect. Ids that match no choice are ignored.
    pub fn set_correct_choices(&mut self, ids: &[ChoiceId]) {
        for choice in &mut self.choices {
            choice.is_correct = ids.contains(&choice.id);
        }
    }

    /// Validate a selection against `max_selections` and return it.
    ///
    /// Fails when the number of *distinct* ids exceeds the limit; otherwise
    /// the ids come back in the caller's order. The selection is not checked
    /// against existence or correctness, and the question itself is not
    /// mutated.
    pub fn select_choices(&self, ids: &[ChoiceId]) -> Result<Vec<ChoiceId>, QuestionError> {
        let mut distinct: Vec<ChoiceId> = Vec::with_capacity(ids.len());
        for id in ids {
            if !distinct.contains(id) {
                distinct.push(*id);
            }
        }
        if distinct.len() > self.max_selections {
            return Err(QuestionError::TooManySelections {
                got: distinct.len(),
                max: self.max_selections,
            });
        }
        Ok(ids.to_vec())
    }
}

impl std::fmt::Display for Question {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.title)
    }
}
