//! Errors raised while accepting input into the automaton.

use thiserror::Error;

/// Malformed input rejected before any state is allocated or touched.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A pattern in the dictionary could not be turned into a symbol sequence.
    #[error("invalid pattern at index {index}: {reason}")]
    InvalidPattern { index: usize, reason: String },

    /// The text to scan is not a well-formed symbol sequence.
    #[error("invalid text at byte offset {offset}: {reason}")]
    InvalidText { offset: usize, reason: String },
}

pub type Result<T> = std::result::Result<T, Error>;
