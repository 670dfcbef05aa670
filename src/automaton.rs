use thiserror::Error;

mod builder;
pub use builder::DFABuilder;

mod dfa;
pub use dfa::DFA;

mod reachable;
pub use reachable::{MinimalRepresentative, MinimalRepresentatives};

/// The type that is used to identify states of a [`DFA`].
pub type StateIndex = usize;

/// Abstracts the ways in which the construction of a [`DFA`] can fail. Each variant corresponds to a
/// violation of the requirement that the transition function of a DFA is total and deterministic.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum AutomatonError {
    /// A DFA must have at least one state, which is its initial state.
    #[error("automaton has no states")]
    NoStates,
    /// The designated initial state is not a state of the automaton.
    #[error("initial state {initial} does not exist, the automaton has {size} states")]
    UnknownInitial {
        /// The state that was supposed to be initial.
        initial: StateIndex,
        /// The number of states.
        size: usize,
    },
    /// Two transitions leave the same state on the same symbol but lead to different targets.
    #[error("state {state} has conflicting transitions on `{symbol}` to {first} and {second}")]
    ConflictingTransition {
        /// The source state.
        state: StateIndex,
        /// The symbol on which the transitions are taken.
        symbol: char,
        /// Target of the transition that was given first.
        first: StateIndex,
        /// Target of the transition that was given second.
        second: StateIndex,
    },
    /// Some state lacks a transition for some symbol of the alphabet.
    #[error("state {state} has no transition on `{symbol}`")]
    MissingTransition {
        /// The state that lacks the transition.
        state: StateIndex,
        /// The symbol on which no transition exists.
        symbol: char,
    },
    /// The states that are referenced do not fit into memory, which happens for example if a
    /// transition leads to [`usize::MAX`].
    #[error("automaton has too many states to be represented")]
    TooManyStates,
}
