use std::collections::{BTreeMap, BTreeSet, VecDeque};

use bit_set::BitSet;
use itertools::Itertools;
use owo_colors::OwoColorize;

use super::{DFABuilder, MinimalRepresentatives, StateIndex};
use crate::{
    alphabet::CharAlphabet,
    math::{Bijection, Set},
    word::FiniteWord,
};

/// A deterministic finite automaton (DFA) over a [`CharAlphabet`]. It accepts a finite word if the
/// unique run on the word from the initial state ends in an accepting state.
///
/// The transition function is total, meaning for every state and every symbol of the alphabet there is
/// precisely one transition. Transitions of a state are stored as a row that is indexed by the position
/// of the symbol in the canonical order of the alphabet. States are identified by a [`StateIndex`], they
/// need not be contiguous, for example after unreachable states have been removed through [`DFA::trim`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DFA {
    alphabet: CharAlphabet,
    initial: StateIndex,
    accepting: BTreeSet<StateIndex>,
    transitions: BTreeMap<StateIndex, Vec<StateIndex>>,
}

impl DFA {
    /// Returns a [`DFABuilder`], which is the way to construct a [`DFA`].
    pub fn builder() -> DFABuilder {
        DFABuilder::default()
    }

    /// Assembles a DFA from its components. The caller guarantees that every row has one entry per
    /// alphabet symbol, that all targets as well as `initial` are keys of `transitions` and that
    /// `accepting` is a subset of the keys.
    pub(crate) fn from_parts(
        alphabet: CharAlphabet,
        initial: StateIndex,
        accepting: BTreeSet<StateIndex>,
        transitions: BTreeMap<StateIndex, Vec<StateIndex>>,
    ) -> Self {
        debug_assert!(transitions.contains_key(&initial));
        debug_assert!(transitions
            .values()
            .all(|row| row.len() == alphabet.size()
                && row.iter().all(|p| transitions.contains_key(p))));
        debug_assert!(accepting.iter().all(|q| transitions.contains_key(q)));
        Self {
            alphabet,
            initial,
            accepting,
            transitions,
        }
    }

    /// Returns the alphabet of the automaton.
    pub fn alphabet(&self) -> &CharAlphabet {
        &self.alphabet
    }

    /// Returns the initial state.
    pub fn initial(&self) -> StateIndex {
        self.initial
    }

    /// Makes `initial` the initial state. Gives `None` if `initial` is not a state of `self`.
    pub fn with_initial(mut self, initial: StateIndex) -> Option<DFA> {
        if !self.contains_state(initial) {
            return None;
        }
        self.initial = initial;
        Some(self)
    }

    /// Returns the number of states.
    pub fn size(&self) -> usize {
        self.transitions.len()
    }

    /// Returns an iterator over the indices of all states in ascending order.
    pub fn state_indices(&self) -> impl Iterator<Item = StateIndex> + '_ {
        self.transitions.keys().copied()
    }

    /// Returns true if `state` is a state of the automaton.
    pub fn contains_state(&self, state: StateIndex) -> bool {
        self.transitions.contains_key(&state)
    }

    /// Returns true if and only if `state` is accepting.
    pub fn is_accepting(&self, state: StateIndex) -> bool {
        self.accepting.contains(&state)
    }

    /// Returns the indices of all states that are accepting, in ascending order.
    pub fn accepting_states(&self) -> impl Iterator<Item = StateIndex> + '_ {
        self.accepting.iter().copied()
    }

    /// Returns the indices of all states that are rejecting, in ascending order.
    pub fn rejecting_states(&self) -> impl Iterator<Item = StateIndex> + '_ {
        self.state_indices().filter(|q| !self.is_accepting(*q))
    }

    /// Returns the state that is reached from `state` on `symbol`. If `state` does not exist or
    /// `symbol` is not part of the alphabet, `None` is returned.
    pub fn successor(&self, state: StateIndex, symbol: char) -> Option<StateIndex> {
        let position = self.alphabet.position(symbol)?;
        self.transitions.get(&state).map(|row| row[position])
    }

    /// Returns an iterator over the outgoing transitions of `state` as pairs of symbol and target, in
    /// the canonical order of the alphabet. If `state` does not exist, `None` is returned.
    pub fn edges_from(
        &self,
        state: StateIndex,
    ) -> Option<impl Iterator<Item = (char, StateIndex)> + '_> {
        self.transitions
            .get(&state)
            .map(|row| self.alphabet.universe().zip(row.iter().copied()))
    }

    /// Runs `word` from `origin` and returns the reached state. Gives `None` if `origin` does not
    /// exist or the word contains a symbol that is not part of the alphabet.
    pub fn reached_state_from<W: FiniteWord>(
        &self,
        origin: StateIndex,
        word: W,
    ) -> Option<StateIndex> {
        if !self.contains_state(origin) {
            return None;
        }
        word.symbols()
            .try_fold(origin, |state, symbol| self.successor(state, symbol))
    }

    /// Runs `word` from the initial state and returns the reached state.
    pub fn reached_state<W: FiniteWord>(&self, word: W) -> Option<StateIndex> {
        self.reached_state_from(self.initial, word)
    }

    /// Returns true if and only if the run of `word` from the initial state ends in an accepting
    /// state. Words containing symbols outside of the alphabet are rejected.
    pub fn accepts<W: FiniteWord>(&self, word: W) -> bool {
        self.reached_state(word)
            .map(|q| self.is_accepting(q))
            .unwrap_or(false)
    }

    /// Returns an iterator over the minimal representatives of all states that are reachable from the
    /// initial state, i.e. pairs of the length-lexicographically least word reaching a state and
    /// the state itself.
    pub fn minimal_representatives(&self) -> MinimalRepresentatives<'_> {
        MinimalRepresentatives::new(self, self.initial)
    }

    /// Computes the set of states that are reachable from the initial state through a breadth-first
    /// search. The initial state is always contained.
    pub fn reachable_states(&self) -> BitSet {
        let mut reachable =
            BitSet::with_capacity(self.transitions.last_key_value().map_or(0, |(q, _)| q + 1));
        for (_, q) in self.minimal_representatives() {
            reachable.insert(q);
        }
        reachable
    }

    /// Returns true if every state is reachable from the initial state.
    pub fn is_accessible(&self) -> bool {
        self.reachable_states().len() == self.size()
    }

    /// Restricts `self` to the states in `states`, all other states, their transitions and their
    /// accepting status are dropped. State indices are not changed. The given set must contain the
    /// initial state and be closed under transitions, which is the case for [`DFA::reachable_states`].
    pub fn restrict_to(&self, states: &BitSet) -> DFA {
        debug_assert!(states.contains(self.initial));
        let transitions = self
            .transitions
            .iter()
            .filter(|(q, _)| states.contains(**q))
            .map(|(q, row)| (*q, row.clone()))
            .collect();
        let accepting = self
            .accepting
            .iter()
            .copied()
            .filter(|q| states.contains(*q))
            .collect();
        DFA::from_parts(self.alphabet.clone(), self.initial, accepting, transitions)
    }

    /// Removes all states that are not reachable from the initial state.
    pub fn trim(&self) -> DFA {
        let reachable = self.reachable_states();
        let trimmed = self.restrict_to(&reachable);
        if trimmed.size() < self.size() {
            tracing::trace!(
                "removed {} unreachable states",
                self.size() - trimmed.size()
            );
        }
        trimmed
    }

    /// Attempts to separate `self` from `other` by finding a word that is accepted by precisely
    /// one of them. The search is breadth-first over pairs of states in the product of both
    /// automata, which means the returned word is the length-lexicographically least one
    /// in the symmetric difference of the accepted languages. If no such word exists, the two
    /// automata are equivalent and `None` is returned.
    ///
    /// Panics if the two automata are not over the same alphabet.
    pub fn separate(&self, other: &DFA) -> Option<Vec<char>> {
        assert_eq!(
            self.alphabet, other.alphabet,
            "can only separate automata over the same alphabet"
        );

        let origin = (self.initial, other.initial);
        let mut seen: Set<(StateIndex, StateIndex)> = Set::from_iter([origin]);
        let mut queue: VecDeque<(Vec<char>, (StateIndex, StateIndex))> =
            [(vec![], origin)].into_iter().collect();

        while let Some((word, (l, r))) = queue.pop_front() {
            if self.is_accepting(l) != other.is_accepting(r) {
                return Some(word);
            }
            for symbol in self.alphabet.universe() {
                let successors = (
                    self.successor(l, symbol).expect("transition function is total"),
                    other
                        .successor(r, symbol)
                        .expect("transition function is total"),
                );
                if seen.insert(successors) {
                    let mut extended = word.clone();
                    extended.push(symbol);
                    queue.push_back((extended, successors));
                }
            }
        }
        None
    }

    /// Checks whether `self` is equivalent to `other`, i.e. whether the two DFAs accept
    /// the same language. Panics if the alphabets differ.
    pub fn equivalent(&self, other: &DFA) -> bool {
        self.separate(other).is_none()
    }

    /// Checks whether `self` and `other` are identical up to a renaming of states. This is the case
    /// if there is a bijection between the states that maps the initial state of `self` to the
    /// initial state of `other`, preserves the accepting status and commutes with transitions.
    ///
    /// The bijection is found by exploring both automata from their initial states, so it only
    /// exists if every state is reachable. A DFA with unreachable states is not isomorphic to any
    /// DFA, not even to itself; compare the results of [`DFA::trim`] instead.
    pub fn is_isomorphic(&self, other: &DFA) -> bool {
        self.isomorphism(other).is_some()
    }

    /// Computes the bijection that witnesses that `self` and `other` are isomorphic (see
    /// [`DFA::is_isomorphic`]), or returns `None` if there is no such bijection.
    pub fn isomorphism(&self, other: &DFA) -> Option<Bijection<StateIndex, StateIndex>> {
        if self.alphabet != other.alphabet || self.size() != other.size() {
            return None;
        }

        let mut bijection = Bijection::new();
        bijection.insert(self.initial, other.initial);
        let mut queue = VecDeque::from([(self.initial, other.initial)]);

        while let Some((l, r)) = queue.pop_front() {
            if self.is_accepting(l) != other.is_accepting(r) {
                return None;
            }
            for ((_, p), (_, q)) in self.edges_from(l)?.zip(other.edges_from(r)?) {
                match (bijection.get_by_left(&p), bijection.get_by_right(&q)) {
                    (None, None) => {
                        bijection.insert(p, q);
                        queue.push_back((p, q));
                    }
                    (Some(mapped), Some(_)) if *mapped == q => {}
                    _ => return None,
                }
            }
        }

        (bijection.len() == self.size()).then_some(bijection)
    }

    /// Returns a string representation of the transition table of the automaton. The initial state
    /// is marked with an arrow and accepting states are highlighted.
    pub fn build_transition_table(&self) -> String {
        let mut builder = tabled::builder::Builder::default();
        builder.push_record(
            std::iter::once("State".to_string()).chain(self.alphabet.universe().map(|s| s.to_string())),
        );
        for (q, row) in &self.transitions {
            let marker = if *q == self.initial { "→ " } else { "" };
            let name = if self.is_accepting(*q) {
                format!("{marker}{}", q.green().bold())
            } else {
                format!("{marker}{q}")
            };
            builder.push_record(std::iter::once(name).chain(row.iter().map(|p| p.to_string())));
        }

        builder
            .build()
            .with(tabled::settings::Style::rounded())
            .to_string()
    }
}

impl std::fmt::Display for DFA {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(
            f,
            "DFA with {} states over {}, accepting {{{}}}",
            self.size(),
            self.alphabet,
            self.accepting.iter().join(", ")
        )?;
        write!(f, "{}", self.build_transition_table())
    }
}
