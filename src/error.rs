//! Error taxonomy for the trivia client.
//! Three failure classes: the remote source being unreachable (fatal to an
//! in-flight assembly), a category coming back with too few clues, and a
//! cell address that falls outside the board (a view/model desync).

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TriviaError {
    #[error("trivia source unavailable: {0}")]
    SourceUnavailable(String),

    #[error("category {title:?} has {got} clues, expected {expected}")]
    MalformedCategory {
        title: String,
        got: usize,
        expected: usize,
    },

    #[error("cell ({row}, {column}) is outside the {rows}x{columns} board")]
    InvalidCellAddress {
        row: usize,
        column: usize,
        rows: usize,
        columns: usize,
    },
}

impl From<reqwest::Error> for TriviaError {
    fn from(err: reqwest::Error) -> Self {
        TriviaError::SourceUnavailable(err.to_string())
    }
}
