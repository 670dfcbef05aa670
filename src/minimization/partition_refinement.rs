use std::collections::BTreeSet;

use tracing::trace;

use crate::{math::Map, prelude::*};

/// The signature of a state with respect to some [`Partition`]. It contains, for each symbol of the
/// alphabet in canonical order, the index of the class that the successor on the symbol belongs to.
pub type Signature = Vec<usize>;

fn signature(dfa: &DFA, partition: &Partition<StateIndex>, state: StateIndex) -> Signature {
    dfa.edges_from(state)
        .expect("state must exist in the DFA")
        .map(|(_, target)| {
            partition
                .class_of(target)
                .expect("partition must cover every successor")
        })
        .collect()
}

/// Splits `class` into subclasses of states that have the same [`Signature`] with respect to
/// `partition`. States are treated in ascending order and the subclasses are returned in the order
/// in which their least element was encountered.
fn split_class(
    dfa: &DFA,
    partition: &Partition<StateIndex>,
    class: &BTreeSet<StateIndex>,
) -> Vec<BTreeSet<StateIndex>> {
    let mut positions: Map<Signature, usize> = Map::default();
    let mut splits: Vec<BTreeSet<StateIndex>> = Vec::new();

    for &q in class {
        let position = *positions
            .entry(signature(dfa, partition, q))
            .or_insert_with(|| {
                splits.push(BTreeSet::new());
                splits.len() - 1
            });
        splits[position].insert(q);
    }

    splits
}

/// Computes the coarsest partition of the states of `dfa` such that accepting and rejecting states
/// are never in the same class and any two states of the same class reach the same class on every
/// symbol. In other words, this computes the language equivalence on the states of `dfa`.
///
/// This is Moore's algorithm, which starts from the partition into accepting and rejecting states
/// and refines it in rounds. In each round, every class is split according to the [`Signature`]s of
/// its members, which are computed with respect to the partition from the beginning of the round.
/// Once a round does not split any class, the partition is stable. As the number of classes grows
/// with each round that is not the last one, there are at most as many rounds as there are states.
///
/// The result only depends on which states are grouped together, never on the way classes are
/// labeled or maps are iterated. If `dfa` has unreachable states, they are partitioned as well, so
/// for minimization the DFA should be trimmed first.
pub fn moore_partition_refinement(dfa: &DFA) -> Partition<StateIndex> {
    let (accepting, rejecting): (Vec<_>, Vec<_>) =
        dfa.state_indices().partition(|q| dfa.is_accepting(*q));
    let mut partition = Partition::new([rejecting, accepting]);
    trace!(
        "starting partition refinement with {} classes for {} states",
        partition.size(),
        dfa.size()
    );

    let mut round = 0;
    // a partition into singletons can not be refined any further
    while partition.size() < dfa.size() {
        round += 1;
        let mut progress = false;
        let mut refined = Vec::with_capacity(partition.size());

        for class in &partition {
            let splits = split_class(dfa, &partition, class);
            progress |= splits.len() > 1;
            refined.extend(splits);
        }

        trace!("round {round} produced {} classes", refined.len());
        if !progress {
            break;
        }
        partition = refined.into();
    }

    partition
}
