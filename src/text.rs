//! The textual format is line based. The input consists of
//! 1. the number `n` of states, which are then `0..n`,
//! 2. the whitespace separated symbols of the alphabet, each a single character,
//! 3. the initial state,
//! 4. the whitespace separated accepting states (this line may be empty),
//! 5. any number of transitions `<source> <symbol> <target>`, one per line.
//!
//! The output format lists the states, alphabet, initial state and accepting states, each in a
//! line of its own, followed by the transitions. See [`output::TextFormat`] for an example.
use std::path::Path;

use thiserror::Error;

use crate::automaton::{AutomatonError, StateIndex, DFA};

mod input;
pub use input::read_dfa;

mod output;
pub use output::{write_dfa, TextFormat};

/// Abstracts the types of errors that can occur when parsing a [`DFA`] from its textual representation.
/// Line numbers start at 1.
#[derive(Debug, Clone, Eq, PartialEq, Error)]
pub enum FormatError {
    /// The input is not valid UTF-8.
    #[error("line {line}: input is not valid UTF-8")]
    InvalidEncoding {
        /// The line containing the first invalid byte.
        line: usize,
    },
    /// The input ended before the given part was read.
    #[error("input ended before the {0} was given")]
    MissingLine(&'static str),
    /// A token that should be a number could not be parsed as such.
    #[error("line {line}: could not parse `{token}` as a number")]
    InvalidNumber {
        /// The line on which the token occurs.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// A symbol token did not consist of precisely one character.
    #[error("line {line}: symbol `{token}` is not a single character")]
    MalformedSymbol {
        /// The line on which the token occurs.
        line: usize,
        /// The offending token.
        token: String,
    },
    /// The line containing the initial state did not consist of exactly one token.
    #[error("line {line}: expected a single initial state, found {found} tokens")]
    MalformedInitial {
        /// The line of the initial state.
        line: usize,
        /// The number of tokens found.
        found: usize,
    },
    /// A transition did not consist of exactly three tokens.
    #[error("line {line}: expected a transition `<source> <symbol> <target>`, found {found} tokens")]
    MalformedTransition {
        /// The line of the transition.
        line: usize,
        /// The number of tokens found.
        found: usize,
    },
    /// A state was referenced that is not among the declared states.
    #[error("line {line}: state {state} does not exist, there are {states} states")]
    UnknownState {
        /// The line on which the state is referenced.
        line: usize,
        /// The referenced state.
        state: StateIndex,
        /// The declared number of states.
        states: usize,
    },
    /// A transition used a symbol that is not part of the alphabet.
    #[error("line {line}: symbol `{symbol}` is not part of the alphabet")]
    UnknownSymbol {
        /// The line of the transition.
        line: usize,
        /// The offending symbol.
        symbol: char,
    },
    /// The described automaton is not a valid DFA, for example since a transition is missing.
    #[error(transparent)]
    Automaton(#[from] AutomatonError),
}

/// The errors that can occur when reading or writing a [`DFA`] from or to a file or stream.
#[derive(Debug, Error)]
pub enum Error {
    /// Reading or writing failed.
    #[error(transparent)]
    Io(#[from] std::io::Error),
    /// The input is not a well-formed DFA.
    #[error(transparent)]
    Format(#[from] FormatError),
}

impl DFA {
    /// Parses a DFA from its textual representation.
    pub fn from_text(text: &str) -> Result<DFA, FormatError> {
        input::parse_dfa(text)
    }

    /// Returns the textual representation of `self`.
    pub fn to_text(&self) -> String {
        TextFormat(self).to_string()
    }

    /// Reads a DFA from the file at `path`.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<DFA, Error> {
        let file = std::fs::File::open(path)?;
        read_dfa(std::io::BufReader::new(file))
    }

    /// Writes the textual representation of `self` to the file at `path`, which is created or
    /// truncated.
    pub fn write_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), Error> {
        let file = std::fs::File::create(path)?;
        let mut writer = std::io::BufWriter::new(file);
        write_dfa(self, &mut writer)?;
        std::io::Write::flush(&mut writer)?;
        Ok(())
    }
}

impl std::str::FromStr for DFA {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        DFA::from_text(s)
    }
}
