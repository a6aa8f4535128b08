use std::collections::VecDeque;

use log::trace;

use crate::{trie::State, StateId, ROOT};

/// Links attached to a state once the trie is frozen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Links {
    /// State of the longest proper suffix of this state's label present in the trie.
    pub(crate) failure: StateId,
    /// Nearest terminal state along the failure chain, never the root.
    pub(crate) output: Option<StateId>,
}

/// Computes failure and output links for every state.
///
/// States are visited breadth-first, so every state strictly shallower than
/// the one being linked already has final links.
pub(crate) fn compute_links<C: Eq + std::hash::Hash>(states: &[State<C>]) -> Vec<Links> {
    let mut links = vec![
        Links {
            failure: ROOT,
            output: None,
        };
        states.len()
    ];

    let mut queue = VecDeque::with_capacity(states.len());
    queue.push_back(ROOT);

    while let Some(state) = queue.pop_front() {
        for (c, &child) in states[state].goto.iter() {
            let failure = if state == ROOT {
                // Depth-one states have no proper non-empty suffix.
                ROOT
            } else {
                let mut candidate = links[state].failure;
                loop {
                    if let Some(next) = states[candidate].enter_child(c) {
                        break next;
                    }
                    if candidate == ROOT {
                        break ROOT;
                    }
                    candidate = links[candidate].failure;
                }
            };
            debug_assert_ne!(failure, child);
            debug_assert!(states[failure].depth < states[child].depth);

            let output = if failure != ROOT && states[failure].terminal.is_some() {
                Some(failure)
            } else {
                links[failure].output
            };

            trace!("state {child}: failure={failure} output={output:?}");
            links[child] = Links { failure, output };
            queue.push_back(child);
        }
    }

    links
}
