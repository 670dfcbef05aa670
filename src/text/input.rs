use std::io::{BufRead, Read};

use tracing::trace;

use super::{Error, FormatError};
use crate::automaton::{StateIndex, DFA};

/// Reads the textual representation of a [`DFA`] from `read`. Input that is not valid UTF-8 is
/// reported as [`FormatError::InvalidEncoding`].
pub fn read_dfa<R: BufRead>(mut read: R) -> Result<DFA, Error> {
    let mut bytes = Vec::new();
    read.read_to_end(&mut bytes)?;
    let text = String::from_utf8(bytes).map_err(|e| {
        let valid = &e.as_bytes()[..e.utf8_error().valid_up_to()];
        FormatError::InvalidEncoding {
            line: valid.iter().filter(|b| **b == b'\n').count() + 1,
        }
    })?;
    Ok(parse_dfa(&text)?)
}

/// Iterates over numbered lines and fails with [`FormatError::MissingLine`] if a required line is absent.
struct Lines<'a> {
    it: std::iter::Enumerate<std::str::Lines<'a>>,
}

impl<'a> Lines<'a> {
    fn next_required(&mut self, what: &'static str) -> Result<(usize, &'a str), FormatError> {
        self.it
            .next()
            .map(|(i, line)| (i + 1, line))
            .ok_or(FormatError::MissingLine(what))
    }
}

fn parse_number(line: usize, token: &str) -> Result<usize, FormatError> {
    token.parse().map_err(|_| FormatError::InvalidNumber {
        line,
        token: token.to_string(),
    })
}

fn parse_state(line: usize, token: &str, states: usize) -> Result<StateIndex, FormatError> {
    let state = parse_number(line, token)?;
    if state >= states {
        return Err(FormatError::UnknownState {
            line,
            state,
            states,
        });
    }
    Ok(state)
}

fn parse_symbol(line: usize, token: &str) -> Result<char, FormatError> {
    let mut chars = token.chars();
    match (chars.next(), chars.next()) {
        (Some(symbol), None) => Ok(symbol),
        _ => Err(FormatError::MalformedSymbol {
            line,
            token: token.to_string(),
        }),
    }
}

/// Parses the textual representation of a [`DFA`], the format is described in [`crate::text`].
/// Besides malformed lines, this rejects transitions between undeclared states or on symbols that
/// are not in the alphabet, conflicting transitions and transition tables that are not total.
pub(crate) fn parse_dfa(text: &str) -> Result<DFA, FormatError> {
    let mut lines = Lines {
        it: text.lines().enumerate(),
    };

    let (line, count) = lines.next_required("number of states")?;
    let states = parse_number(line, count.trim())?;
    trace!("parsing DFA with {states} states");

    let (line, alphabet) = lines.next_required("alphabet")?;
    let symbols = alphabet
        .split_whitespace()
        .map(|token| parse_symbol(line, token))
        .collect::<Result<Vec<_>, _>>()?;

    let (line, initial) = lines.next_required("initial state")?;
    let initial = match initial.split_whitespace().collect::<Vec<_>>().as_slice() {
        [token] => parse_state(line, token, states)?,
        tokens => {
            return Err(FormatError::MalformedInitial {
                line,
                found: tokens.len(),
            })
        }
    };

    let (line, accepting) = lines.next_required("accepting states")?;
    let accepting = accepting
        .split_whitespace()
        .map(|token| parse_state(line, token, states))
        .collect::<Result<Vec<_>, _>>()?;

    let mut builder = DFA::builder()
        .with_states(states)
        .with_alphabet_symbols(symbols.iter().copied())
        .with_accepting(accepting);

    for (i, transition) in lines.it {
        let line = i + 1;
        let tokens: Vec<_> = transition.split_whitespace().collect();
        match tokens.as_slice() {
            [] => continue,
            [source, symbol, target] => {
                let source = parse_state(line, source, states)?;
                let symbol = parse_symbol(line, symbol)?;
                if !symbols.contains(&symbol) {
                    return Err(FormatError::UnknownSymbol { line, symbol });
                }
                let target = parse_state(line, target, states)?;
                builder.add_edge(source, symbol, target);
            }
            _ => {
                return Err(FormatError::MalformedTransition {
                    line,
                    found: tokens.len(),
                })
            }
        }
    }

    Ok(builder.into_dfa(initial)?)
}
