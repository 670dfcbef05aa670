mod partition_refinement;
pub use partition_refinement::{moore_partition_refinement, Signature};

mod quotient;
pub use quotient::quotient;

use tracing::debug;

use crate::prelude::*;

impl DFA {
    /// Returns the unique minimal DFA that accepts the same language as `self`. Unreachable states are
    /// removed first, then the remaining states are grouped into classes of equivalent states using
    /// Moore's partition refinement algorithm and finally each class is collapsed into a single state.
    ///
    /// The states of the resulting DFA are `0..n`, numbered in ascending order of the least original
    /// state in the corresponding class. In particular, minimizing the same DFA twice yields the same
    /// result.
    ///
    /// # Example
    /// ```
    /// use dfa_minimizer::prelude::*;
    ///
    /// let dfa = DFA::builder()
    ///     .with_state_colors([false, true, true])
    ///     .with_edges([(0, 'a', 1), (1, 'a', 2), (2, 'a', 1)])
    ///     .into_dfa(0)
    ///     .unwrap();
    /// let minimized = dfa.minimize();
    /// assert_eq!(minimized.size(), 2);
    /// assert!(minimized.equivalent(&dfa));
    /// ```
    pub fn minimize(&self) -> DFA {
        let trimmed = self.trim();
        let partition = moore_partition_refinement(&trimmed);
        let minimized = quotient(&trimmed, &partition);
        debug!(
            "minimized DFA from {} states ({} reachable) to {} states",
            self.size(),
            trimmed.size(),
            minimized.size()
        );
        minimized
    }

    /// Computes the classes of language-equivalent states among the states that are reachable from
    /// the initial state. These are precisely the states of the minimal DFA, see [`DFA::minimize`].
    pub fn minimization_classes(&self) -> Partition<StateIndex> {
        moore_partition_refinement(&self.trim())
    }

    /// Returns true if `self` is minimal, meaning no state is unreachable and no two states
    /// are equivalent.
    pub fn is_minimal(&self) -> bool {
        self.minimization_classes().size() == self.size()
    }
}

#[cfg(test)]
mod tests {
    use crate::{
        prelude::*,
        tests::{five_state_dfa, wiki_dfa},
    };

    #[test_log::test]
    fn minimize_five_state_example() {
        let dfa = five_state_dfa();
        assert_eq!(
            dfa.minimization_classes(),
            Partition::new([vec![0], vec![1, 2, 3], vec![4]])
        );

        let minimized = dfa.minimize();
        assert_eq!(minimized.size(), 3);
        assert_eq!(minimized.initial(), 0);
        assert_eq!(minimized.accepting_states().collect::<Vec<_>>(), vec![2]);
        assert!(minimized.equivalent(&dfa));
        assert!(minimized.is_minimal());
        assert!(!dfa.is_minimal());
    }

    #[test_log::test]
    fn minimize_wiki_dfa() {
        let dfa = wiki_dfa();
        assert_eq!(
            dfa.minimization_classes(),
            Partition::new([vec![0, 1], vec![2, 3, 4], vec![5]])
        );
        let minimized = dfa.minimize();
        assert_eq!(minimized.size(), 3);
        assert!(minimized.equivalent(&dfa));
    }

    #[test]
    fn minimize_drops_unreachable_states() {
        // state 2 can not be reached from the initial state
        let dfa = DFA::builder()
            .with_state_colors([false, true, false])
            .with_edges([
                (0, 'a', 1),
                (0, 'b', 0),
                (1, 'a', 1),
                (1, 'b', 0),
                (2, 'a', 2),
                (2, 'b', 1),
            ])
            .into_dfa(0)
            .unwrap();
        let minimized = dfa.minimize();
        assert_eq!(minimized.size(), 2);
        assert!(minimized.is_accessible());
        assert_eq!(minimized.minimization_classes().elements().count(), 2);
    }

    #[test]
    fn single_state_is_unchanged() {
        let dfa = DFA::builder()
            .with_state_colors([true])
            .with_edges([(0, 'a', 0), (0, 'b', 0)])
            .into_dfa(0)
            .unwrap();
        let minimized = dfa.minimize();
        assert_eq!(minimized, dfa);
    }

    #[test]
    fn all_final_collapses_to_one_state() {
        let dfa = DFA::builder()
            .with_state_colors([true, true, true])
            .with_edges([
                (0, 'a', 1),
                (0, 'b', 2),
                (1, 'a', 2),
                (1, 'b', 0),
                (2, 'a', 0),
                (2, 'b', 2),
            ])
            .into_dfa(0)
            .unwrap();
        assert_eq!(
            dfa.minimization_classes(),
            Partition::new([vec![0, 1, 2]])
        );
        let minimized = dfa.minimize();
        assert_eq!(minimized.size(), 1);
        assert!(minimized.accepts("abba"));
    }

    #[test]
    fn no_final_collapses_to_one_state() {
        let dfa = DFA::builder()
            .with_edges([(0, 'a', 1), (1, 'a', 2), (2, 'a', 0)])
            .into_dfa(0)
            .unwrap();
        let minimized = dfa.minimize();
        assert_eq!(minimized.size(), 1);
        assert_eq!(minimized.accepting_states().count(), 0);
        assert!(minimized.equivalent(&dfa));
    }

    #[test]
    fn minimization_is_idempotent() {
        for dfa in [five_state_dfa(), wiki_dfa()] {
            let once = dfa.minimize();
            let twice = once.minimize();
            assert!(once.is_isomorphic(&twice));
            assert_eq!(once, twice);
        }
    }

    #[test]
    fn minimization_is_deterministic() {
        let dfa = wiki_dfa();
        assert_eq!(dfa.minimization_classes(), dfa.minimization_classes());
        assert_eq!(dfa.minimize(), dfa.clone().minimize());
    }

    #[test]
    fn minimization_is_invariant_under_renaming() {
        // the wiki DFA with states 0..6 renamed through q -> 5 - q
        let renamed = DFA::builder()
            .with_state_colors([false, true, true, true, false, false])
            .with_edges([
                (5, 'a', 4),
                (5, 'b', 3),
                (4, 'a', 5),
                (4, 'b', 2),
                (3, 'a', 1),
                (3, 'b', 0),
                (2, 'a', 1),
                (2, 'b', 0),
                (1, 'a', 1),
                (1, 'b', 0),
                (0, 'a', 0),
                (0, 'b', 0),
            ])
            .into_dfa(5)
            .unwrap();
        assert!(renamed.minimize().is_isomorphic(&wiki_dfa().minimize()));
    }
}
