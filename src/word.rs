/// A finite word is a finite sequence of symbols, this trait abstracts over the different
/// ways such a sequence can be given. That way, a word can be passed to for example
/// [`crate::DFA::accepts`] as a string slice, a slice of chars or a vector of chars.
pub trait FiniteWord {
    /// Returns an iterator over the symbols of the word, from left to right.
    fn symbols(&self) -> impl Iterator<Item = char> + '_;

    /// Returns the word as a vector of symbols.
    fn as_symbols(&self) -> Vec<char> {
        self.symbols().collect()
    }
}

impl FiniteWord for str {
    fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl FiniteWord for String {
    fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.chars()
    }
}

impl FiniteWord for [char] {
    fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().copied()
    }
}

impl<const N: usize> FiniteWord for [char; N] {
    fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().copied()
    }
}

impl FiniteWord for Vec<char> {
    fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        self.iter().copied()
    }
}

impl<W: FiniteWord + ?Sized> FiniteWord for &W {
    fn symbols(&self) -> impl Iterator<Item = char> + '_ {
        (**self).symbols()
    }
}
