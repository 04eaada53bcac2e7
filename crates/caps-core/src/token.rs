// Token: an immutable run of runes produced by the tokenizer

use std::fmt;
use std::ops::Deref;

/// A word token.
///
/// Tokens compare, order and hash by their rune sequence. They are created by
/// the tokenizer and consumed by the converter within a single call.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Token(Box<[char]>);

impl Token {
    /// Create a token from a rune slice.
    pub fn new(runes: &[char]) -> Self {
        Self(runes.into())
    }

    /// Whether the first rune is a Unicode number rune.
    pub fn starts_with_number(&self) -> bool {
        self.0.first().is_some_and(|c| c.is_numeric())
    }
}

impl Deref for Token {
    type Target = [char];

    fn deref(&self) -> &[char] {
        &self.0
    }
}

impl From<Vec<char>> for Token {
    fn from(runes: Vec<char>) -> Self {
        Self(runes.into_boxed_slice())
    }
}

impl From<&[char]> for Token {
    fn from(runes: &[char]) -> Self {
        Self::new(runes)
    }
}

impl From<&str> for Token {
    fn from(s: &str) -> Self {
        Self(s.chars().collect())
    }
}

impl From<char> for Token {
    fn from(c: char) -> Self {
        Self(Box::new([c]))
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for c in self.0.iter() {
            fmt::Write::write_char(f, *c)?;
        }
        Ok(())
    }
}
