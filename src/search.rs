use crate::{Automaton, Pattern, PatternId, StateId, ROOT};

/// An occurrence of a pattern in the scanned text.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Match {
    pattern: PatternId,
    len: usize,
    end: usize,
}

impl Match {
    pub fn pattern(&self) -> PatternId {
        self.pattern
    }

    /// Length of the matched pattern, in symbols.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Position of the last symbol of the occurrence.
    pub fn end(&self) -> usize {
        self.end
    }

    /// Position of the first symbol of the occurrence.
    pub fn start(&self) -> usize {
        self.end + 1 - self.len
    }
}

/// Cursor over an automaton, fed one symbol at a time.
///
/// Each searcher owns its state, so several may scan the same automaton
/// concurrently.
pub struct Searcher<'a, P: Pattern> {
    automaton: &'a Automaton<P>,
    current: StateId,
    position: usize,
}

impl<'a, P: Pattern> Searcher<'a, P> {
    pub fn new(automaton: &'a Automaton<P>) -> Self {
        Self {
            automaton,
            current: ROOT,
            position: 0,
        }
    }

    /// Consumes `c` and returns the matches ending at it.
    pub fn next(&mut self, c: &P::Char) -> Outputs<'a, P> {
        self.current = self.automaton.next_state(self.current, c);
        let end = self.position;
        self.position += 1;

        Outputs::new(self.automaton, self.current, end)
    }

    /// Current state of the cursor.
    pub fn state(&self) -> StateId {
        self.current
    }

    /// Number of symbols consumed so far.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Returns to the root, as if no symbol had been fed.
    pub fn reset(&mut self) {
        self.current = ROOT;
        self.position = 0;
    }
}

/// Matches ending at one position: the state reached first, then its output
/// chain from the longest suffix to the shortest.
pub struct Outputs<'a, P: Pattern> {
    automaton: &'a Automaton<P>,
    next: Option<StateId>,
    end: usize,
}

impl<'a, P: Pattern> Outputs<'a, P> {
    fn new(automaton: &'a Automaton<P>, state: StateId, end: usize) -> Self {
        let next = if state != ROOT && automaton.terminal(state).is_some() {
            Some(state)
        } else {
            automaton.output(state)
        };

        Self {
            automaton,
            next,
            end,
        }
    }
}

impl<P: Pattern> Iterator for Outputs<'_, P> {
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        let state = self.next?;
        self.next = self.automaton.output(state);

        // Output links only ever target terminal states.
        let pattern = self.automaton.terminal(state)?;
        Some(Match {
            pattern,
            len: self.automaton.depth(state),
            end: self.end,
        })
    }
}

/// Lazy scan over a whole text. See [`Automaton::find_overlapping_iter`].
pub struct FindOverlappingIter<'a, P: Pattern, I> {
    searcher: Searcher<'a, P>,
    text: I,
    pending: Option<Outputs<'a, P>>,
}

impl<'a, P: Pattern, I> FindOverlappingIter<'a, P, I> {
    pub(crate) fn new(automaton: &'a Automaton<P>, text: I) -> Self {
        Self {
            searcher: Searcher::new(automaton),
            text,
            pending: None,
        }
    }
}

impl<P, I> Iterator for FindOverlappingIter<'_, P, I>
where
    P: Pattern,
    I: Iterator<Item = P::Char>,
{
    type Item = Match;

    fn next(&mut self) -> Option<Match> {
        loop {
            if let Some(m) = self.pending.as_mut().and_then(|outputs| outputs.next()) {
                return Some(m);
            }

            let c = self.text.next()?;
            self.pending = Some(self.searcher.next(&c));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn scan(patterns: &[&'static str], text: &str) -> Vec<(&'static str, usize)> {
        let automaton = Automaton::build(patterns.iter().copied());
        automaton
            .scan(text.chars())
            .into_iter()
            .map(|m| (*automaton.pattern(m.pattern()), m.end()))
            .collect()
    }

    #[test]
    fn reports_overlapping_matches() {
        assert_eq!(
            scan(&["he", "she", "his", "hers"], "ushers"),
            [("she", 3), ("he", 3), ("hers", 5)]
        );
    }

    #[test]
    fn ties_are_longest_first() {
        assert_eq!(
            scan(&["a", "aa", "aaa"], "aaa"),
            [("a", 0), ("aa", 1), ("a", 1), ("aaa", 2), ("aa", 2), ("a", 2)]
        );
    }

    #[test]
    fn output_chain_fires_on_non_terminal_state() {
        // "bc" is not a pattern, but its suffix "c" is.
        assert_eq!(scan(&["bcd", "c"], "bc"), [("c", 1)]);
    }

    #[test]
    fn empty_pattern_never_matches() {
        assert_eq!(scan(&["", "b"], "abc"), [("b", 1)]);
        assert!(scan(&[""], "abc").is_empty());
    }

    #[test]
    fn match_bounds() {
        let automaton = Automaton::build(["needle"]);
        let m = automaton.scan("haystack needle".chars())[0];

        assert_eq!(m.start(), 9);
        assert_eq!(m.end(), 14);
        assert_eq!(m.len(), 6);
    }

    #[test]
    fn searcher_reports_per_position() {
        let automaton = Automaton::build(["ab", "b"]);
        let mut searcher = automaton.searcher();

        assert_eq!(searcher.next(&'a').count(), 0);
        let at_b: Vec<_> = searcher.next(&'b').map(|m| m.pattern()).collect();
        assert_eq!(at_b, [0, 1]);
        assert_eq!(searcher.position(), 2);

        searcher.reset();
        assert_eq!(searcher.state(), ROOT);
        assert_eq!(searcher.next(&'b').next().map(|m| m.end()), Some(0));
    }

    #[test]
    fn works_on_arbitrary_symbols() {
        let automaton = Automaton::build([vec![1u32, 2], vec![2, 3, 4]]);
        let found: Vec<_> = automaton
            .scan([0, 1, 2, 3, 4])
            .into_iter()
            .map(|m| (m.pattern(), m.start(), m.end()))
            .collect();

        assert_eq!(found, [(0, 1, 2), (1, 2, 4)]);
    }
}
