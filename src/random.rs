use std::collections::{BTreeMap, BTreeSet};

use tracing::trace;

use crate::prelude::*;

/// Generates a random DFA with `size` states over the alphabet consisting of the first `symbols`
/// letters. The target of every transition is drawn uniformly and every state is accepting with
/// probability one half. State 0 is initial. Note that depending on the drawn transitions, there may
/// be states that are not reachable from the initial state.
pub fn generate_random_dfa(symbols: usize, size: usize) -> DFA {
    generate_random_dfa_with(&mut fastrand::Rng::new(), symbols, size)
}

/// Works as [`generate_random_dfa`], but draws from the given random number generator, so results
/// are reproducible when the generator is seeded.
pub fn generate_random_dfa_with(rng: &mut fastrand::Rng, symbols: usize, size: usize) -> DFA {
    assert!(size > 0, "a DFA needs at least one state");
    let alphabet = CharAlphabet::of_size(symbols);

    let transitions: BTreeMap<StateIndex, Vec<StateIndex>> = (0..size)
        .map(|q| (q, (0..symbols).map(|_| rng.usize(..size)).collect()))
        .collect();
    let accepting: BTreeSet<StateIndex> = (0..size).filter(|_| rng.bool()).collect();

    trace!(
        "generated random DFA with {size} states, {} of which are accepting",
        accepting.len()
    );
    DFA::from_parts(alphabet, 0, accepting, transitions)
}

/// Generates `count` random words over `alphabet`, each of a length that is drawn uniformly from
/// `min_len..=max_len`.
pub fn generate_random_words(
    rng: &mut fastrand::Rng,
    alphabet: &CharAlphabet,
    min_len: usize,
    max_len: usize,
    count: usize,
) -> Vec<Vec<char>> {
    if alphabet.is_empty() {
        return vec![vec![]; count];
    }
    (0..count)
        .map(|_| {
            let len = rng.usize(min_len..=max_len);
            (0..len)
                .map(|_| alphabet[rng.usize(..alphabet.size())])
                .collect()
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{generate_random_dfa, generate_random_dfa_with, generate_random_words};
    use crate::prelude::*;

    #[test]
    fn random_dfa_sized() {
        let dfa = generate_random_dfa(3, 10);
        assert_eq!(dfa.size(), 10);
        assert_eq!(dfa.alphabet().size(), 3);
        assert!(dfa.minimize().size() <= 10);
    }

    #[test]
    fn seeded_generation_is_reproducible() {
        let left = generate_random_dfa_with(&mut fastrand::Rng::with_seed(7), 2, 8);
        let right = generate_random_dfa_with(&mut fastrand::Rng::with_seed(7), 2, 8);
        assert_eq!(left, right);
    }

    #[test]
    fn random_words() {
        let mut rng = fastrand::Rng::with_seed(1);
        let words = generate_random_words(&mut rng, &CharAlphabet::of_size(2), 1, 10, 20);
        assert_eq!(words.len(), 20);
        assert!(words.iter().all(|w| (1..=10).contains(&w.len())));
        assert!(words.iter().flatten().all(|c| *c == 'a' || *c == 'b'));
    }

    #[test_log::test]
    fn minimization_preserves_the_language() {
        let mut rng = fastrand::Rng::with_seed(42);
        for _ in 0..50 {
            let size = rng.usize(1..=12);
            let dfa = generate_random_dfa_with(&mut rng, 2, size);
            let minimized = dfa.minimize();

            assert!(minimized.equivalent(&dfa));
            for word in generate_random_words(&mut rng, dfa.alphabet(), 0, 12, 30) {
                assert_eq!(dfa.accepts(&word), minimized.accepts(&word));
            }

            assert!(minimized.size() <= dfa.reachable_states().len());
            assert!(minimized.is_accessible());
            assert!(minimized.is_minimal());
            assert!(minimized.minimize().is_isomorphic(&minimized));
        }
    }

    #[test]
    fn minimal_dfas_have_no_equivalent_states() {
        let mut rng = fastrand::Rng::with_seed(3);
        for _ in 0..20 {
            let size = rng.usize(1..=8);
            let minimized = generate_random_dfa_with(&mut rng, 3, size).minimize();
            let states: Vec<_> = minimized.state_indices().collect();
            for &p in &states {
                for &q in &states {
                    if p < q {
                        let left = minimized.clone().with_initial(p).unwrap();
                        let right = minimized.clone().with_initial(q).unwrap();
                        assert!(left.separate(&right).is_some());
                    }
                }
            }
        }
    }

    #[test]
    fn classes_agree_on_acceptance() {
        let mut rng = fastrand::Rng::with_seed(11);
        for _ in 0..20 {
            let size = rng.usize(1..=10);
            let dfa = generate_random_dfa_with(&mut rng, 2, size);
            let classes = dfa.minimization_classes();
            assert_eq!(classes, dfa.minimization_classes());
            for class in &classes {
                let first = *class.first().unwrap();
                assert!(class
                    .iter()
                    .all(|q| dfa.is_accepting(*q) == dfa.is_accepting(first)));
            }
        }
    }
}
