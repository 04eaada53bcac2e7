// Symbol sets: delimiters and allowed symbols

use std::fmt;

/// A small set of runes, kept sorted for binary search.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct SymbolSet {
    runes: Vec<char>,
}

impl SymbolSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, c: char) -> bool {
        self.runes.binary_search(&c).is_ok()
    }

    /// Add a rune. Returns `false` if it was already present.
    pub fn insert(&mut self, c: char) -> bool {
        match self.runes.binary_search(&c) {
            Ok(_) => false,
            Err(pos) => {
                self.runes.insert(pos, c);
                true
            }
        }
    }

    /// Add every rune of `s`.
    pub fn extend_from_str(&mut self, s: &str) {
        for c in s.chars() {
            self.insert(c);
        }
    }

    pub fn len(&self) -> usize {
        self.runes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.runes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = char> + '_ {
        self.runes.iter().copied()
    }
}

impl From<&str> for SymbolSet {
    fn from(s: &str) -> Self {
        let mut runes: Vec<char> = s.chars().collect();
        runes.sort_unstable();
        runes.dedup();
        Self { runes }
    }
}

impl FromIterator<char> for SymbolSet {
    fn from_iter<I: IntoIterator<Item = char>>(iter: I) -> Self {
        let mut runes: Vec<char> = iter.into_iter().collect();
        runes.sort_unstable();
        runes.dedup();
        Self { runes }
    }
}

impl fmt::Display for SymbolSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in &self.runes {
            fmt::Write::write_char(f, *c)?;
        }
        Ok(())
    }
}
