//! Multi-pattern matching with an Aho-Corasick automaton.
//!
//! Patterns are inserted into a [`Trie`], which is then frozen into an
//! [`Automaton`] by annotating every state with a failure link and an output
//! link. Scanning walks the text once and reports every pattern ending at every
//! position, overlapping matches included.
//!
//! ```
//! use dictlink::Automaton;
//!
//! let automaton = Automaton::build(["a", "ab", "bc", "c"]);
//! let found: Vec<(&str, usize)> = automaton
//!     .scan("abc".chars())
//!     .iter()
//!     .map(|m| (*automaton.pattern(m.pattern()), m.end()))
//!     .collect();
//!
//! assert_eq!(found, [("a", 0), ("ab", 1), ("bc", 2), ("c", 2)]);
//! ```

use std::hash::Hash;

mod automaton;
mod builder;
pub mod dump;
mod error;
mod search;
mod trie;

pub use automaton::Automaton;
pub use dump::AutomatonDump;
pub use error::{Error, Result};
pub use search::{FindOverlappingIter, Match, Outputs, Searcher};
pub use trie::Trie;

/// Index of a state inside an automaton.
pub type StateId = usize;

/// Index of a distinct pattern, in first-insertion order.
pub type PatternId = usize;

/// The root state, representing the empty prefix.
pub const ROOT: StateId = 0;

/// A sequence of symbols that can be inserted into a [`Trie`].
pub trait Pattern {
    type Char: Eq + Hash;

    fn iter(&self) -> impl Iterator<Item = Self::Char>;
}

impl Pattern for String {
    type Char = char;

    fn iter(&self) -> impl Iterator<Item = Self::Char> {
        self.chars()
    }
}

impl Pattern for &str {
    type Char = char;

    fn iter(&self) -> impl Iterator<Item = Self::Char> {
        self.chars()
    }
}

impl<T: Eq + Hash + Clone> Pattern for Vec<T> {
    type Char = T;

    fn iter(&self) -> impl Iterator<Item = Self::Char> {
        self.as_slice().iter().cloned()
    }
}

impl<T: Eq + Hash + Clone> Pattern for &[T] {
    type Char = T;

    fn iter(&self) -> impl Iterator<Item = Self::Char> {
        <[T]>::iter(self).cloned()
    }
}
