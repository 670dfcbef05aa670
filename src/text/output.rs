use std::io::Write;

use itertools::Itertools;
use tracing::trace;

use crate::automaton::DFA;

/// Wrapper that displays a [`DFA`] in the textual output format. For a DFA with states `0` and `1` over
/// the alphabet `{a, b}`, where `0` is initial and `1` is accepting, this could look as follows.
/// ```text
/// States: 0,1
/// Alphabet: a,b
/// StartState: 0
/// FinalStates: 1
/// Transitions:
/// 0 a 1
/// 0 b 0
/// 1 a 1
/// 1 b 1
/// ```
/// States are given in ascending order and symbols in the canonical order of the alphabet.
#[derive(Debug, Clone, Copy)]
pub struct TextFormat<'a>(pub &'a DFA);

impl std::fmt::Display for TextFormat<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dfa = self.0;
        writeln!(f, "States: {}", dfa.state_indices().join(","))?;
        writeln!(f, "Alphabet: {}", dfa.alphabet().universe().join(","))?;
        writeln!(f, "StartState: {}", dfa.initial())?;
        writeln!(f, "FinalStates: {}", dfa.accepting_states().join(","))?;
        writeln!(f, "Transitions:")?;
        for q in dfa.state_indices() {
            for (symbol, p) in dfa.edges_from(q).into_iter().flatten() {
                writeln!(f, "{q} {symbol} {p}")?;
            }
        }
        Ok(())
    }
}

/// Writes the textual representation of `dfa` to `write`.
pub fn write_dfa<W: Write>(dfa: &DFA, mut write: W) -> std::io::Result<()> {
    trace!("writing DFA with {} states", dfa.size());
    write!(write, "{}", TextFormat(dfa))
}
