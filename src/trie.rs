use std::collections::HashMap;

use crate::{Automaton, Pattern, PatternId, StateId, ROOT};

/// One prefix of some pattern. The root state is the empty prefix.
pub(crate) struct State<C> {
    pub(crate) goto: HashMap<C, StateId>,
    pub(crate) parent: StateId,
    pub(crate) depth: usize,
    /// Pattern spelled by this prefix, if it is a complete pattern.
    pub(crate) terminal: Option<PatternId>,
}

impl<C: Eq + std::hash::Hash> State<C> {
    fn new(parent: StateId, depth: usize) -> Self {
        Self {
            goto: HashMap::new(),
            parent,
            depth,
            terminal: None,
        }
    }

    pub(crate) fn enter_child(&self, c: &C) -> Option<StateId> {
        self.goto.get(c).copied()
    }

    fn add_child(&mut self, c: C, state: StateId) {
        self.goto.insert(c, state);
    }
}

/// Mutable insertion phase of the automaton.
///
/// A trie carries no failure or output links; those only exist on the
/// [`Automaton`] returned by [`Trie::build`], which consumes the trie so that
/// nothing can be inserted once links are computed.
pub struct Trie<P: Pattern> {
    pub(crate) states: Vec<State<P::Char>>,
    pub(crate) patterns: Vec<P>,
}

impl<P: Pattern> Trie<P> {
    pub fn new() -> Self {
        Self::with_capacity(0)
    }

    /// Creates a trie with room for `patterns` patterns.
    pub fn with_capacity(patterns: usize) -> Self {
        let mut states = Vec::with_capacity(patterns + 1);
        states.push(State::new(ROOT, 0));

        Self {
            states,
            patterns: Vec::with_capacity(patterns),
        }
    }

    /// Inserts `pattern` and returns its id.
    ///
    /// Inserting a pattern that is already present creates no states and
    /// returns the id it was first given. The empty pattern marks the root
    /// terminal, which never surfaces as a match.
    pub fn insert(&mut self, pattern: P) -> PatternId {
        let mut state = ROOT;

        for c in Pattern::iter(&pattern) {
            state = match self.states[state].enter_child(&c) {
                Some(next) => next,
                None => {
                    let next = self.states.len();
                    let depth = self.states[state].depth + 1;
                    self.states.push(State::new(state, depth));
                    self.states[state].add_child(c, next);
                    next
                }
            };
        }

        match self.states[state].terminal {
            Some(id) => id,
            None => {
                let id = self.patterns.len();
                self.states[state].terminal = Some(id);
                self.patterns.push(pattern);
                id
            }
        }
    }

    /// Whether `pattern` was inserted, following trie edges only.
    pub fn contains(&self, pattern: &P) -> bool {
        lookup(&self.states, pattern).is_some()
    }

    /// Number of distinct patterns.
    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }

    /// Number of states, the root included.
    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Computes failure and output links, freezing the trie.
    pub fn build(self) -> Automaton<P> {
        Automaton::from_trie(self)
    }
}

impl<P: Pattern> Default for Trie<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: Pattern> Extend<P> for Trie<P> {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        for pattern in iter {
            self.insert(pattern);
        }
    }
}

/// Id of the pattern spelled exactly by `pattern`, walking goto edges from the root.
pub(crate) fn lookup<P: Pattern>(states: &[State<P::Char>], pattern: &P) -> Option<PatternId> {
    let mut state = ROOT;
    for c in Pattern::iter(pattern) {
        state = states[state].enter_child(&c)?;
    }
    states[state].terminal
}
