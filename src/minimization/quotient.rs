use std::collections::{BTreeMap, BTreeSet};

use itertools::Itertools;

use crate::{math::Map, prelude::*};

/// Builds the quotient of `dfa` with respect to `partition`, which merges all states of a class into a
/// single state. We assume that `partition` is a congruence that refines the split into accepting and
/// rejecting states, meaning all states of a class agree on their accepting status and for every
/// symbol their successors lie in the same class. This is guaranteed for the result of
/// [`super::moore_partition_refinement`].
///
/// Each class is represented by its least state, which determines the outgoing transitions and the
/// accepting status of the class. Classes are numbered `0..n` in ascending order of their
/// representatives, the initial state of the quotient is the class of the initial state of `dfa` and
/// the alphabet is unchanged.
pub fn quotient(dfa: &DFA, partition: &Partition<StateIndex>) -> DFA {
    let representatives: Vec<(usize, StateIndex)> = (0..partition.size())
        .map(|class| {
            (
                class,
                partition
                    .representative(class)
                    .expect("classes of a partition are not empty"),
            )
        })
        .sorted_by_key(|(_, rep)| *rep)
        .collect();

    let renaming: Map<usize, StateIndex> = representatives
        .iter()
        .enumerate()
        .map(|(new, (class, _))| (*class, new))
        .collect();
    let class_state = |q: StateIndex| {
        renaming[&partition
            .class_of(q)
            .expect("partition must cover every state of the DFA")]
    };

    let mut accepting = BTreeSet::new();
    let mut transitions = BTreeMap::new();
    for (new, (class, rep)) in representatives.iter().enumerate() {
        debug_assert!(partition[*class]
            .iter()
            .all(|q| dfa.is_accepting(*q) == dfa.is_accepting(*rep)));
        if dfa.is_accepting(*rep) {
            accepting.insert(new);
        }
        let row = dfa
            .edges_from(*rep)
            .expect("representative must be a state of the DFA")
            .map(|(_, target)| class_state(target))
            .collect();
        transitions.insert(new, row);
    }

    DFA::from_parts(
        dfa.alphabet().clone(),
        class_state(dfa.initial()),
        accepting,
        transitions,
    )
}
