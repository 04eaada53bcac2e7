// Numeric-literal classification with per-rune override rules

use std::fmt;
use std::sync::Arc;

use hashbrown::HashMap;

/// Override predicate for one rune: `(index, rune, candidate) -> accept`.
///
/// `index` is the rune index of `rune` within `candidate`.
pub type NumberRule = Arc<dyn Fn(usize, char, &[char]) -> bool + Send + Sync>;

/// A set of per-rune number rules.
///
/// A rule overrides the built-in acceptance for its rune wherever the rune
/// appears in a candidate, digits included.
#[derive(Clone, Default)]
pub struct NumberRules {
    rules: HashMap<char, NumberRule>,
}

impl NumberRules {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`insert`](Self::insert).
    pub fn with<F>(mut self, rune: char, rule: F) -> Self
    where
        F: Fn(usize, char, &[char]) -> bool + Send + Sync + 'static,
    {
        self.insert(rune, rule);
        self
    }

    /// Add or replace the rule for `rune`.
    pub fn insert<F>(&mut self, rune: char, rule: F)
    where
        F: Fn(usize, char, &[char]) -> bool + Send + Sync + 'static,
    {
        self.rules.insert(rune, Arc::new(rule));
    }

    pub fn get(&self, rune: char) -> Option<&NumberRule> {
        self.rules.get(&rune)
    }

    pub fn remove(&mut self, rune: char) -> bool {
        self.rules.remove(&rune).is_some()
    }

    /// Merge `other` into `self`; rules in `other` win on conflict.
    pub fn extend(&mut self, other: &NumberRules) {
        for (rune, rule) in &other.rules {
            self.rules.insert(*rune, Arc::clone(rule));
        }
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl fmt::Debug for NumberRules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut runes: Vec<char> = self.rules.keys().copied().collect();
        runes.sort_unstable();
        f.debug_struct("NumberRules").field("runes", &runes).finish()
    }
}

/// Report whether `candidate` is a numeric literal.
///
/// Accepted forms: runs of number runes with an optional `v`, `V`, `#`, `+`
/// or `-` prefix, at most one `.` (preceded by a number rune or sign and
/// never last), and an `e`/`E` exponent after the decimal point, optionally
/// signed. Override rules in `rules` decide for their runes instead.
///
/// The empty candidate is never a number.
pub fn is_number(candidate: &[char], rules: &NumberRules) -> bool {
    if candidate.is_empty() {
        return false;
    }

    let last = candidate.len() - 1;
    let mut decimal_seen = false;
    let mut exponent: Option<usize> = None;
    let mut prev: Option<char> = None;

    for (i, &c) in candidate.iter().enumerate() {
        if let Some(rule) = rules.get(c) {
            if !rule(i, c, candidate) {
                return false;
            }
            prev = Some(c);
            continue;
        }

        if !c.is_numeric() {
            match c {
                'v' | 'V' | '#' => {
                    if i > 0 {
                        return false;
                    }
                }
                '+' | '-' => {
                    if i > 0 && !(exponent.is_some() && exponent == i.checked_sub(1)) {
                        return false;
                    }
                }
                '.' => {
                    if candidate.len() == 1 || i == last || decimal_seen {
                        return false;
                    }
                    if let Some(p) = prev {
                        if !p.is_numeric() && p != '-' && p != '+' {
                            return false;
                        }
                    }
                    decimal_seen = true;
                }
                'e' | 'E' => {
                    if !decimal_seen || exponent.is_some() || i == last {
                        return false;
                    }
                    exponent = Some(i);
                }
                _ => return false,
            }
        }
        prev = Some(c);
    }

    true
}
