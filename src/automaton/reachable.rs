use std::collections::VecDeque;

use bit_set::BitSet;

use super::{StateIndex, DFA};

/// Type alias for a minimal representative of a state which is its length-lexicographically minimal
/// access sequence and its state index.
pub type MinimalRepresentative = (Vec<char>, StateIndex);

/// Struct that can return the minimal representatives of a [`DFA`]. A minimal representative
/// for a state `q` is the length-lexicographically minimal string with which `q` can be reached
/// from a given state. As states are explored breadth-first and symbols in canonical order, the
/// iterator visits precisely the reachable states.
#[derive(Debug, Clone)]
pub struct MinimalRepresentatives<'a> {
    dfa: &'a DFA,
    seen: BitSet,
    queue: VecDeque<MinimalRepresentative>,
}

impl<'a> MinimalRepresentatives<'a> {
    /// Creates a new iterator over the minimal representatives of all states reachable from `origin`.
    pub fn new(dfa: &'a DFA, origin: StateIndex) -> Self {
        let mut seen = BitSet::new();
        seen.insert(origin);
        let queue = [(vec![], origin)].into_iter().collect();
        Self { dfa, seen, queue }
    }
}

impl Iterator for MinimalRepresentatives<'_> {
    type Item = MinimalRepresentative;

    fn next(&mut self) -> Option<Self::Item> {
        let (access, q) = self.queue.pop_front()?;
        if let Some(it) = self.dfa.edges_from(q) {
            for (sym, p) in it {
                if self.seen.insert(p) {
                    let mut new_access = access.clone();
                    new_access.push(sym);
                    self.queue.push_back((new_access, p))
                }
            }
        }
        Some((access, q))
    }
}

#[cfg(test)]
mod tests {
    use itertools::Itertools;

    use crate::{automaton::MinimalRepresentatives, prelude::*};

    #[test]
    fn reachable_states() {
        let dfa = DFA::builder()
            .with_state_colors([false, false, true, false])
            .with_edges([
                (0, 'a', 1),
                (0, 'b', 0),
                (1, 'a', 2),
                (1, 'b', 0),
                (2, 'a', 2),
                (2, 'b', 2),
                (3, 'a', 0),
                (3, 'b', 3),
            ])
            .into_dfa(0)
            .unwrap();

        assert_eq!(
            dfa.minimal_representatives().collect_vec(),
            vec![(vec![], 0), (vec!['a'], 1), (vec!['a', 'a'], 2)]
        );
        assert_eq!(dfa.reachable_states().iter().collect_vec(), vec![0, 1, 2]);
        assert_eq!(
            MinimalRepresentatives::new(&dfa, 3)
                .map(|(_, q)| q)
                .collect_vec(),
            vec![3, 0, 1, 2]
        );
    }
}
