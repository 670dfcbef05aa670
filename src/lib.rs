//! Library for minimizing deterministic finite automata in Rust.
//!
//! A [`DFA`] consists of a finite set of states, a [`CharAlphabet`], a designated initial state, a set of
//! accepting states and a total transition function, meaning every state has precisely one outgoing
//! transition for every symbol of the alphabet. The only way of obtaining a [`DFA`] is through the
//! [`DFABuilder`] (or the textual reader in [`text`], which uses the builder), so every [`DFA`] in existence
//! is guaranteed to be total and closed over its states.
//!
//! The main operation is [`DFA::minimize`], which computes the unique (up to renaming) DFA with the
//! fewest states that accepts the same language. It works in three stages:
//! - unreachable states are removed, see [`DFA::trim`],
//! - the remaining states are grouped into classes of language-equivalent states through Moore's
//!   partition refinement, see [`minimization::moore_partition_refinement`],
//! - every class is collapsed into a single state, see [`minimization::quotient`].
//!
//! Further, the crate provides some operations that are useful for working with and testing DFAs, for
//! example [`DFA::separate`] which finds a shortest word on which two DFAs disagree, or
//! [`DFA::is_isomorphic`] which checks whether two DFAs coincide up to renaming of states.
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

/// The prelude is supposed to make using this package easier. Including everything, i.e.
/// `use dfa_minimizer::prelude::*;` should be enough to use the package.
pub mod prelude {
    pub use super::{
        alphabet::CharAlphabet,
        automaton::{AutomatonError, DFABuilder, StateIndex, DFA},
        math::{self, Partition},
        minimization,
        text::{Error, FormatError},
        word::FiniteWord,
    };
}

/// This module contains some definitions of mathematical objects which are used throughout the crate and
/// do not really fit to the top level.
pub mod math;

/// Module that contains definitions for dealing with alphabets.
pub mod alphabet;
pub use alphabet::CharAlphabet;

/// Module that contains definitions for dealing with finite words.
pub mod word;

/// Defines deterministic finite automata, how they are built and how they can be queried.
#[allow(clippy::upper_case_acronyms)]
pub mod automaton;
pub use automaton::{DFABuilder, StateIndex, DFA};

/// Contains the partition refinement algorithm that computes the minimal DFA.
pub mod minimization;

/// Reading and writing DFAs in a simple line based textual format.
pub mod text;

/// Implements the generation of random DFAs and words.
#[cfg(feature = "random")]
pub mod random;

#[cfg(test)]
mod tests {
    use crate::prelude::*;

    /// The DFA from the worked example, state 0 is initial and state 4 is the only accepting one.
    pub fn five_state_dfa() -> DFA {
        DFA::builder()
            .with_state_colors([false, false, false, false, true])
            .with_edges([
                (0, 'a', 1),
                (0, 'b', 3),
                (1, 'a', 2),
                (1, 'b', 4),
                (2, 'a', 1),
                (2, 'b', 4),
                (3, 'a', 2),
                (3, 'b', 4),
                (4, 'a', 4),
                (4, 'b', 4),
            ])
            .into_dfa(0)
            .unwrap()
    }

    /// The classic six state example that can be found on the wikipedia page on DFA minimization.
    pub fn wiki_dfa() -> DFA {
        DFA::builder()
            .with_state_colors([false, false, true, true, true, false])
            .with_edges([
                (0, 'a', 1),
                (0, 'b', 2),
                (1, 'a', 0),
                (1, 'b', 3),
                (2, 'a', 4),
                (2, 'b', 5),
                (3, 'a', 4),
                (3, 'b', 5),
                (4, 'a', 4),
                (4, 'b', 5),
                (5, 'a', 5),
                (5, 'b', 5),
            ])
            .into_dfa(0)
            .unwrap()
    }

    #[test]
    fn end_to_end_text_minimization() {
        let input = "5\na b\n0\n4\n0 a 1\n0 b 3\n1 a 2\n1 b 4\n2 a 1\n2 b 4\n3 a 2\n3 b 4\n4 a 4\n4 b 4\n";
        let dfa: DFA = input.parse().unwrap();
        assert_eq!(dfa, five_state_dfa());

        let minimized = dfa.minimize();
        assert_eq!(
            minimized.to_text(),
            "States: 0,1,2\nAlphabet: a,b\nStartState: 0\nFinalStates: 2\nTransitions:\n0 a 1\n0 b 1\n1 a 1\n1 b 2\n2 a 2\n2 b 2\n"
        );
    }
}
