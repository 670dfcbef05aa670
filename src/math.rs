use std::{collections::BTreeSet, hash::Hash};

/// Type alias for sets, we use this to hide which type of `HashSet` we are actually using.
pub type Set<S> = fxhash::FxHashSet<S>;
/// Type alias for maps, we use this to hide which type of `HashMap` we are actually using.
pub type Map<K, V> = fxhash::FxHashMap<K, V>;

/// Represents a bijective mapping between `L` and `R`, that is a mapping which associates
/// each `L` with precisely one `R` and vice versa.
pub type Bijection<L, R> = bimap::BiBTreeMap<L, R>;

/// A partition is a different view on an equivalence relation, by grouping elements of
/// type `I` into their respective classes under the relation. Classes are never empty and
/// every element belongs to precisely one class.
///
/// Next to the classes themselves, a partition keeps track of the index of the class that
/// each element belongs to, so looking up the class of an element does not require scanning
/// all classes.
#[derive(Debug, Clone)]
pub struct Partition<I: Hash + Eq> {
    classes: Vec<BTreeSet<I>>,
    index: Map<I, usize>,
}

impl<I: Hash + Eq> std::ops::Deref for Partition<I> {
    type Target = [BTreeSet<I>];
    fn deref(&self) -> &Self::Target {
        &self.classes
    }
}

impl<'a, I: Hash + Eq> IntoIterator for &'a Partition<I> {
    type Item = &'a BTreeSet<I>;
    type IntoIter = std::slice::Iter<'a, BTreeSet<I>>;

    fn into_iter(self) -> Self::IntoIter {
        self.classes.iter()
    }
}

/// Two partitions are equal if they consist of the same classes, the order in which the
/// classes are stored is irrelevant.
impl<I: Hash + Eq> PartialEq for Partition<I> {
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.iter().all(|o| other.classes.contains(o))
    }
}
impl<I: Hash + Eq> Eq for Partition<I> {}

impl<I: Hash + Eq + Ord + Copy> Partition<I> {
    /// Returns the size of the partition, i.e. the number of classes.
    pub fn size(&self) -> usize {
        self.classes.len()
    }

    /// Builds a new partition from an iterator that yields iterators which yield elements of
    /// type `I`. Empty classes are dropped. Panics if an element occurs in more than one class.
    pub fn new<X: IntoIterator<Item = I>, Y: IntoIterator<Item = X>>(iter: Y) -> Self {
        iter.into_iter()
            .map(|it| it.into_iter().collect::<BTreeSet<_>>())
            .collect::<Vec<_>>()
            .into()
    }

    /// Returns the index of the class that contains `element`, or `None` if `element` is not
    /// part of any class.
    pub fn class_of(&self, element: I) -> Option<usize> {
        self.index.get(&element).copied()
    }

    /// Returns the representative of the class with index `class`, which is its least element.
    pub fn representative(&self, class: usize) -> Option<I> {
        self.classes.get(class)?.first().copied()
    }

    /// Returns true if and only if `left` and `right` are both contained in the same class.
    pub fn same_class(&self, left: I, right: I) -> bool {
        match (self.class_of(left), self.class_of(right)) {
            (Some(l), Some(r)) => l == r,
            _ => false,
        }
    }

    /// Returns an iterator over all elements of all classes.
    pub fn elements(&self) -> impl Iterator<Item = I> + '_ {
        self.classes.iter().flat_map(|class| class.iter().copied())
    }
}

impl<I: Hash + Eq + Ord + Copy> From<Vec<BTreeSet<I>>> for Partition<I> {
    fn from(value: Vec<BTreeSet<I>>) -> Self {
        let classes: Vec<_> = value.into_iter().filter(|c| !c.is_empty()).collect();
        let mut index = Map::default();
        for (i, class) in classes.iter().enumerate() {
            for &element in class {
                let previous = index.insert(element, i);
                assert!(previous.is_none(), "classes of a partition must be disjoint");
            }
        }
        Self { classes, index }
    }
}
