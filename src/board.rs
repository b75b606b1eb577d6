//! Board model and clue-reveal state machine.
//! A board is NUM_CATEGORIES columns of CLUES_PER_CATEGORY clues, addressed
//! by (row, column) where row is the clue index within a category and column
//! is the category index. Each clue's `showing` field only moves forward:
//! None -> Question -> Answer, never backward, never skipping a step.

use crate::error::TriviaError;

pub const NUM_CATEGORIES: usize = 6;
pub const CLUES_PER_CATEGORY: usize = 5;

/// How much of a clue is currently visible.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Showing {
    #[default]
    None,
    Question,
    Answer,
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Clue {
    pub question: String,
    pub answer: String,
    pub showing: Showing,
}

impl Clue {
    pub fn new(question: String, answer: String) -> Self {
        Self {
            question,
            answer,
            showing: Showing::None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Category {
    pub title: String,
    pub clues: Vec<Clue>,
}

/// What a click on a cell produced.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    /// First click: the question text is now showing.
    Question(String),
    /// Second click: the answer text is now showing.
    Answer(String),
    /// The answer was already showing; nothing changed.
    AlreadyRevealed,
}

/// The full grid for one game round. The board is the single source of truth
/// for what is displayed; `reveal` is the only thing that mutates it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    categories: Vec<Category>,
}

impl Board {
    /// Builds a board from loaded categories, checking the grid shape.
    /// Every category must carry exactly CLUES_PER_CATEGORY clues.
    pub fn new(categories: Vec<Category>) -> Result<Self, TriviaError> {
        for category in &categories {
            if category.clues.len() != CLUES_PER_CATEGORY {
                return Err(TriviaError::MalformedCategory {
                    title: category.title.clone(),
                    got: category.clues.len(),
                    expected: CLUES_PER_CATEGORY,
                });
            }
        }
        Ok(Self { categories })
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn rows(&self) -> usize {
        CLUES_PER_CATEGORY
    }

    pub fn columns(&self) -> usize {
        self.categories.len()
    }

    /// Advances the clue at (row, column) by one reveal step and returns the
    /// text that should now be displayed. Idempotent once the answer is
    /// showing: further calls change nothing and report AlreadyRevealed.
    pub fn reveal(&mut self, row: usize, column: usize) -> Result<RevealOutcome, TriviaError> {
        if row >= self.rows() || column >= self.columns() {
            return Err(TriviaError::InvalidCellAddress {
                row,
                column,
                rows: self.rows(),
                columns: self.columns(),
            });
        }

        let clue = &mut self.categories[column].clues[row];
        let outcome = match clue.showing {
            Showing::None => {
                clue.showing = Showing::Question;
                RevealOutcome::Question(clue.question.clone())
            }
            Showing::Question => {
                clue.showing = Showing::Answer;
                RevealOutcome::Answer(clue.answer.clone())
            }
            Showing::Answer => RevealOutcome::AlreadyRevealed,
        };
        Ok(outcome)
    }
}

// *************** Tests ***************
