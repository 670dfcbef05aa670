use itertools::Itertools;

/// A simple alphabet consisting of a finite collection of `char` symbols. The symbols are
/// always kept sorted and free of duplicates, which gives a canonical order in which the
/// symbols are enumerated. The position of a symbol in this order is used to index the
/// transitions of a [`crate::DFA`].
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub struct CharAlphabet(Vec<char>);

impl CharAlphabet {
    /// Creates a new [`CharAlphabet`] alphabet of the given size. The symbols are just the first `size` letters
    /// of the alphabet, i.e. 'a' to 'z'.
    pub fn of_size(size: usize) -> Self {
        assert!(size <= 26, "Alphabet is too large");
        Self((0..size).map(|i| (b'a' + i as u8) as char).collect())
    }

    /// Creates a new [`CharAlphabet`] from the given symbols, which are sorted and deduplicated.
    pub fn new<I: IntoIterator<Item = char>>(symbols: I) -> Self {
        symbols.into_iter().collect()
    }

    /// Returns the number of symbols in the alphabet.
    pub fn size(&self) -> usize {
        self.0.len()
    }

    /// Returns true if the alphabet has no symbols.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns an iterator over all symbols in canonical order.
    pub fn universe(&self) -> impl Iterator<Item = char> + '_ {
        self.0.iter().copied()
    }

    /// Returns true if `symbol` is part of the alphabet.
    pub fn contains(&self, symbol: char) -> bool {
        self.position(symbol).is_some()
    }

    /// Gives the position of `symbol` in the canonical order, if it is part of the alphabet.
    pub fn position(&self, symbol: char) -> Option<usize> {
        self.0.binary_search(&symbol).ok()
    }
}

impl std::ops::Index<usize> for CharAlphabet {
    type Output = char;

    fn index(&self, index: usize) -> &Self::Output {
        &self.0[index]
    }
}

impl FromIterator<char> for CharAlphabet {
    fn from_iter<T: IntoIterator<Item = char>>(iter: T) -> Self {
        Self(iter.into_iter().unique().sorted().collect())
    }
}

impl std::fmt::Display for CharAlphabet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{{{}}}", self.0.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::CharAlphabet;

    #[test]
    fn canonical_order() {
        let alphabet = CharAlphabet::new(['c', 'a', 'b', 'a']);
        assert_eq!(alphabet.size(), 3);
        assert_eq!(alphabet.universe().collect::<String>(), "abc");
        assert_eq!(alphabet.position('c'), Some(2));
        assert_eq!(alphabet.position('d'), None);
        assert_eq!(alphabet, CharAlphabet::of_size(3));
        assert_eq!(alphabet[1], 'b');
        assert_eq!(alphabet.to_string(), "{a, b, c}");
    }
}
