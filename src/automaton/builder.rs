use std::collections::{btree_map::Entry, BTreeMap, BTreeSet};

use tracing::trace;

use super::{AutomatonError, StateIndex, DFA};
use crate::alphabet::CharAlphabet;

/// Helper struct for the construction of a [`DFA`]. It stores a list of edges, the accepting states and
/// optionally additional alphabet symbols. Upon calling [`DFABuilder::into_dfa`], the transition table is
/// assembled and checked for being total and deterministic.
///
/// # Example
///
/// We want to create a DFA with two states 0 and 1 over the alphabet `['a', 'b']`, where state 0 is
/// initial and accepting, reading `a` keeps the state and reading `b` switches to the other state.
/// ```
/// use dfa_minimizer::prelude::*;
///
/// let dfa = DFA::builder()
///     .with_state_colors([true, false]) // colors given in the order of the states
///     .with_edges([(0, 'a', 0), (0, 'b', 1), (1, 'a', 1), (1, 'b', 0)])
///     .into_dfa(0) // 0 is the initial state
///     .unwrap();
/// assert!(dfa.accepts("abab"));
/// assert!(!dfa.accepts("ab"));
/// ```
#[derive(Debug, Clone, Default)]
pub struct DFABuilder {
    symbols: Vec<char>,
    states: usize,
    accepting: BTreeSet<StateIndex>,
    edges: Vec<(StateIndex, char, StateIndex)>,
}

impl DFABuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensures that the built automaton has at least `states` states, namely `0..states`.
    pub fn with_states(mut self, states: usize) -> Self {
        self.states = self.states.max(states);
        self
    }

    /// Adds a list of colors to `self`. The colors are assigned to the states in the order in which they
    /// are given, so `[true, false]` makes state `0` accepting and state `1` rejecting.
    pub fn with_state_colors<I: IntoIterator<Item = bool>>(mut self, iter: I) -> Self {
        for (q, accepting) in iter.into_iter().enumerate() {
            self.states = self.states.max(q + 1);
            if accepting {
                self.accepting.insert(q);
            }
        }
        self
    }

    /// Marks the given states as accepting.
    pub fn with_accepting<I: IntoIterator<Item = StateIndex>>(mut self, iter: I) -> Self {
        self.accepting.extend(iter);
        self
    }

    /// By default, the only alphabet symbols in the automaton that is built are the ones that
    /// appear on at least one transition. This method can be used to force additional alphabet
    /// symbols to appear. Note that every symbol needs a transition from every state.
    pub fn with_alphabet_symbols<I: IntoIterator<Item = char>>(mut self, symbols: I) -> Self {
        self.symbols.extend(symbols);
        self
    }

    /// Adds the given transitions, each given as a triple of source, symbol and target.
    pub fn with_edges<I: IntoIterator<Item = (StateIndex, char, StateIndex)>>(
        mut self,
        iter: I,
    ) -> Self {
        self.edges.extend(iter);
        self
    }

    /// Adds a single transition from `source` on `symbol` to `target`.
    pub fn add_edge(&mut self, source: StateIndex, symbol: char, target: StateIndex) {
        self.edges.push((source, symbol, target));
    }

    /// The number of states, which is one more than the largest state that is mentioned anywhere, or
    /// `None` if that does not fit into a [`StateIndex`].
    fn size(&self) -> Option<usize> {
        self.edges
            .iter()
            .map(|(q, _, p)| q.max(p).checked_add(1))
            .chain(self.accepting.last().map(|q| q.checked_add(1)))
            .try_fold(self.states, |size, q| q.map(|q| size.max(q)))
    }

    /// Assembles the [`DFA`] with the given `initial` state. Fails if there are no states, if `initial`
    /// does not exist, if two transitions leave the same state on the same symbol towards different
    /// targets or if some state lacks a transition for some symbol.
    pub fn into_dfa(self, initial: StateIndex) -> Result<DFA, AutomatonError> {
        let size = self.size().ok_or(AutomatonError::TooManyStates)?;
        if size == 0 {
            return Err(AutomatonError::NoStates);
        }
        if initial >= size {
            return Err(AutomatonError::UnknownInitial { initial, size });
        }

        let alphabet: CharAlphabet = self
            .symbols
            .iter()
            .copied()
            .chain(self.edges.iter().map(|(_, sym, _)| *sym))
            .collect();

        // keyed by source and symbol position, so memory is bounded by the number of edges
        let mut table: BTreeMap<(StateIndex, usize), StateIndex> = BTreeMap::new();
        for (source, symbol, target) in self.edges {
            let Some(position) = alphabet.position(symbol) else {
                unreachable!("alphabet contains every symbol on an edge")
            };
            match table.entry((source, position)) {
                Entry::Occupied(existing) if *existing.get() != target => {
                    return Err(AutomatonError::ConflictingTransition {
                        state: source,
                        symbol,
                        first: *existing.get(),
                        second: target,
                    });
                }
                Entry::Occupied(_) => {}
                Entry::Vacant(slot) => {
                    slot.insert(target);
                }
            }
        }

        // the table is total iff it has an entry for every pair, otherwise the first pair without
        // one is found after at most `table.len() + 1` steps
        if size.checked_mul(alphabet.size()) != Some(table.len()) {
            let (state, position) = (0..size)
                .flat_map(|q| (0..alphabet.size()).map(move |a| (q, a)))
                .find(|pair| !table.contains_key(pair))
                .ok_or(AutomatonError::TooManyStates)?;
            return Err(AutomatonError::MissingTransition {
                state,
                symbol: alphabet[position],
            });
        }

        let mut transitions: Vec<(StateIndex, Vec<StateIndex>)> = Vec::new();
        transitions
            .try_reserve_exact(size)
            .map_err(|_| AutomatonError::TooManyStates)?;
        let mut targets = table.into_values();
        for state in 0..size {
            transitions.push((state, targets.by_ref().take(alphabet.size()).collect()));
        }

        trace!(
            "built DFA with {size} states over alphabet {alphabet} with initial state {initial}"
        );
        Ok(DFA::from_parts(
            alphabet,
            initial,
            self.accepting,
            transitions.into_iter().collect::<BTreeMap<_, Vec<_>>>(),
        ))
    }
}
