use std::fmt::Display;

use log::debug;

use crate::{
    builder::{compute_links, Links},
    dump::AutomatonDump,
    search::{FindOverlappingIter, Match, Searcher},
    trie::{lookup, State},
    Error, Pattern, PatternId, Result, StateId, Trie, ROOT,
};

/// A frozen Aho-Corasick automaton.
///
/// Built once from a dictionary and never modified afterwards, so a single
/// automaton can be shared by any number of concurrent [`Searcher`]s.
pub struct Automaton<P: Pattern> {
    states: Vec<State<P::Char>>,
    links: Vec<Links>,
    patterns: Vec<P>,
}

impl<P: Pattern> Automaton<P> {
    /// Builds an automaton from `items`. An empty dictionary yields a root-only
    /// automaton that never matches.
    pub fn build(items: impl IntoIterator<Item = P>) -> Self {
        let mut trie = Trie::new();
        trie.extend(items);
        trie.build()
    }

    /// Builds an automaton from fallible items, such as patterns read from a
    /// source that can fail.
    ///
    /// Every item is checked before the first state is allocated, so an error
    /// leaves nothing half-built behind.
    pub fn try_build<E: Display>(
        items: impl IntoIterator<Item = std::result::Result<P, E>>,
    ) -> Result<Self> {
        let patterns = items
            .into_iter()
            .enumerate()
            .map(|(index, item)| {
                item.map_err(|e| Error::InvalidPattern {
                    index,
                    reason: e.to_string(),
                })
            })
            .collect::<Result<Vec<P>>>()?;

        Ok(Self::build(patterns))
    }

    pub(crate) fn from_trie(trie: Trie<P>) -> Self {
        let links = compute_links(&trie.states);
        debug!(
            "built automaton: {} patterns, {} states",
            trie.patterns.len(),
            trie.states.len()
        );

        Self {
            states: trie.states,
            links,
            patterns: trie.patterns,
        }
    }

    /// Scans `text` and returns every match, ordered by end position.
    pub fn scan(&self, text: impl IntoIterator<Item = P::Char>) -> Vec<Match> {
        self.find_overlapping_iter(text).collect()
    }

    /// Lazily yields every match in `text`, in the same order as [`scan`](Self::scan).
    pub fn find_overlapping_iter<I>(&self, text: I) -> FindOverlappingIter<'_, P, I::IntoIter>
    where
        I: IntoIterator<Item = P::Char>,
    {
        FindOverlappingIter::new(self, text.into_iter())
    }

    /// A fresh cursor for feeding text one symbol at a time.
    pub fn searcher(&self) -> Searcher<'_, P> {
        Searcher::new(self)
    }

    /// Whether `pattern` is in the dictionary, by exact lookup.
    pub fn contains(&self, pattern: &P) -> bool {
        lookup(&self.states, pattern).is_some()
    }

    /// Distinct patterns, indexed by [`PatternId`].
    pub fn patterns(&self) -> &[P] {
        &self.patterns
    }

    pub fn pattern(&self, id: PatternId) -> &P {
        &self.patterns[id]
    }

    pub fn state_count(&self) -> usize {
        self.states.len()
    }

    /// Failure link of `state`. The root fails to itself.
    pub fn failure(&self, state: StateId) -> StateId {
        self.links[state].failure
    }

    /// Output (dictionary) link of `state`.
    pub fn output(&self, state: StateId) -> Option<StateId> {
        self.links[state].output
    }

    /// Pattern completed at `state`, if it is terminal.
    pub fn terminal(&self, state: StateId) -> Option<PatternId> {
        self.states[state].terminal
    }

    /// Number of symbols from the root to `state`.
    pub fn depth(&self, state: StateId) -> usize {
        self.states[state].depth
    }

    /// Symbols spelling the prefix that `state` represents.
    pub fn label(&self, state: StateId) -> Vec<&P::Char> {
        let mut label = Vec::with_capacity(self.states[state].depth);
        let mut current = state;

        while current != ROOT {
            let parent = self.states[current].parent;
            let symbol = self.states[parent]
                .goto
                .iter()
                .find_map(|(c, &child)| (child == current).then_some(c));
            label.extend(symbol);
            current = parent;
        }

        label.reverse();
        label
    }

    /// Goto function: direct edge, or the first edge found along the failure chain.
    pub(crate) fn next_state(&self, mut state: StateId, c: &P::Char) -> StateId {
        loop {
            if let Some(next) = self.states[state].enter_child(c) {
                return next;
            }
            if state == ROOT {
                return ROOT;
            }
            state = self.links[state].failure;
        }
    }

    pub(crate) fn goto_edges(&self, state: StateId) -> impl Iterator<Item = (&P::Char, StateId)> {
        self.states[state].goto.iter().map(|(c, &s)| (c, s))
    }

    pub fn dump(&self) -> AutomatonDump
    where
        P: ToString,
        P::Char: ToString,
    {
        AutomatonDump::create(self)
    }
}

impl Automaton<String> {
    /// Builds from raw byte patterns, rejecting any that is not valid UTF-8.
    pub fn from_utf8<B: AsRef<[u8]>>(patterns: impl IntoIterator<Item = B>) -> Result<Self> {
        Self::try_build(
            patterns
                .into_iter()
                .map(|bytes| std::str::from_utf8(bytes.as_ref()).map(str::to_owned)),
        )
    }

    /// Scans raw bytes, rejecting malformed UTF-8 before scanning begins.
    ///
    /// Match positions are in `char`s, as with [`scan`](Self::scan).
    pub fn scan_utf8(&self, text: &[u8]) -> Result<Vec<Match>> {
        let text = std::str::from_utf8(text).map_err(|e| Error::InvalidText {
            offset: e.valid_up_to(),
            reason: e.to_string(),
        })?;

        Ok(self.scan(text.chars()))
    }
}
