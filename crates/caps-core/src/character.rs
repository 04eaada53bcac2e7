// Rune classification and pluggable case mapping
//
// Case mapping goes through the `CaseMapper` trait so that callers can swap
// in locale-specific rules. The standard mapper uses Unicode simple
// (one-to-one) mappings. The standard library only exposes full mappings,
// which may expand one rune into several, so the handful of runes whose
// simple mapping differs are listed here explicitly.

use std::fmt;
use std::str::FromStr;

use crate::enums::ParseError;

// ---------------------------------------------------------------------------
// Rune classification
// ---------------------------------------------------------------------------

/// Classification of a single rune as seen by the tokenizer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RuneClass {
    /// Uppercase letter: "A", "Ä", "Σ".
    Upper,
    /// Titlecase letter (Latin digraphs and Greek letters with
    /// prosgegrammeni): "ǅ", "ᾈ".
    Title,
    /// Lowercase letter with an uppercase form: "a", "ä", "σ".
    Lower,
    /// Any Unicode number rune: digits, roman numerals, fractions.
    Number,
    /// A letter without distinct cases: CJK ideographs, Hebrew, Arabic, and
    /// lowercase letters with no simple uppercase such as "ß".
    Caseless,
    /// Unicode whitespace.
    Whitespace,
    /// Punctuation, symbols, controls.
    Other,
}

/// Returns the class of a rune.
///
/// Letters are checked before numbers so that letter-like numerals such as
/// "Ⅻ" (which are also uppercase) are treated as letters. A lowercase letter
/// that uppercases to itself stays lowercase in screaming output, so it is
/// caseless here and never decides the casing of a word.
pub fn classify(c: char) -> RuneClass {
    if is_upper(c) {
        RuneClass::Upper
    } else if is_lower(c) {
        if simple_upper(c) == c {
            RuneClass::Caseless
        } else {
            RuneClass::Lower
        }
    } else if is_title(c) {
        RuneClass::Title
    } else if c.is_numeric() {
        RuneClass::Number
    } else if c.is_whitespace() {
        RuneClass::Whitespace
    } else if c.is_alphabetic() {
        RuneClass::Caseless
    } else {
        RuneClass::Other
    }
}

/// Check whether a rune is an uppercase letter.
pub fn is_upper(c: char) -> bool {
    c.is_uppercase()
}

/// Check whether a rune is a lowercase letter.
pub fn is_lower(c: char) -> bool {
    c.is_lowercase()
}

/// Check whether a rune is a titlecase letter (general category Lt).
pub fn is_title(c: char) -> bool {
    matches!(
        c,
        '\u{01C5}' // ǅ
            | '\u{01C8}' // ǈ
            | '\u{01CB}' // ǋ
            | '\u{01F2}' // ǲ
            | '\u{1F88}'..='\u{1F8F}'
            | '\u{1F98}'..='\u{1F9F}'
            | '\u{1FA8}'..='\u{1FAF}'
            | '\u{1FBC}'
            | '\u{1FCC}'
            | '\u{1FFC}'
    )
}

// ---------------------------------------------------------------------------
// Simple case conversion
// ---------------------------------------------------------------------------

/// Convert a rune to its simple lowercase equivalent.
///
/// Runes whose full lowercase mapping expands to several runes keep their
/// simple mapping: only U+0130 (İ) is affected, and it maps to "i".
pub fn simple_lower(c: char) -> char {
    let mut iter = c.to_lowercase();
    match (iter.next(), iter.next()) {
        (Some(lower), None) => lower,
        (Some(lower), Some(_)) if c == '\u{0130}' => lower,
        _ => c,
    }
}

/// Convert a rune to its simple uppercase equivalent.
///
/// Runes whose full uppercase mapping expands (e.g. "ß" → "SS") map to
/// themselves, except the Greek letters with ypogegrammeni whose simple
/// mapping is the matching capital with prosgegrammeni.
pub fn simple_upper(c: char) -> char {
    if let Some(upper) = iota_subscript_capital(c) {
        return upper;
    }
    let mut iter = c.to_uppercase();
    match (iter.next(), iter.next()) {
        (Some(upper), None) => upper,
        _ => c,
    }
}

/// Convert a rune to its simple titlecase equivalent.
///
/// Title case equals upper case except for the Latin digraphs, the Greek
/// letters with ypogegrammeni, and Georgian Mkhedruli (which has no distinct
/// title form).
pub fn simple_title(c: char) -> char {
    match c {
        '\u{01C4}'..='\u{01C6}' => '\u{01C5}',
        '\u{01C7}'..='\u{01C9}' => '\u{01C8}',
        '\u{01CA}'..='\u{01CC}' => '\u{01CB}',
        '\u{01F1}'..='\u{01F3}' => '\u{01F2}',
        '\u{10D0}'..='\u{10FA}' | '\u{10FD}'..='\u{10FF}' => c,
        _ if is_title(c) => c,
        _ => simple_upper(c),
    }
}

/// Simple uppercase of the Greek letters written with ypogegrammeni.
fn iota_subscript_capital(c: char) -> Option<char> {
    let cp = c as u32;
    match cp {
        0x1F80..=0x1F87 | 0x1F90..=0x1F97 | 0x1FA0..=0x1FA7 => char::from_u32(cp + 8),
        0x1FB3 => Some('\u{1FBC}'),
        0x1FC3 => Some('\u{1FCC}'),
        0x1FF3 => Some('\u{1FFC}'),
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// CaseMapper
// ---------------------------------------------------------------------------

/// Per-rune case mapping strategy.
///
/// Every component that changes or compares case goes through a mapper, so
/// the locale rules are chosen in one place.
pub trait CaseMapper {
    /// Map the rune to lower case.
    fn to_lower(&self, c: char) -> char;
    /// Map the rune to upper case.
    fn to_upper(&self, c: char) -> char;
    /// Map the rune to title case.
    fn to_title(&self, c: char) -> char;

    /// Lowercase every rune of `s`.
    fn lower_str(&self, s: &str) -> String {
        s.chars().map(|c| self.to_lower(c)).collect()
    }
}

impl<M: CaseMapper + ?Sized> CaseMapper for &M {
    fn to_lower(&self, c: char) -> char {
        (**self).to_lower(c)
    }

    fn to_upper(&self, c: char) -> char {
        (**self).to_upper(c)
    }

    fn to_title(&self, c: char) -> char {
        (**self).to_title(c)
    }
}

/// The built-in case mappers.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Caser {
    /// Unicode simple case mapping.
    #[default]
    Unicode,
    /// Turkish: dotted and dotless i are distinct letters.
    Turkish,
    /// Azeri: same i rules as Turkish.
    Azeri,
}

impl Caser {
    fn dotted_i(self) -> bool {
        matches!(self, Caser::Turkish | Caser::Azeri)
    }
}

impl CaseMapper for Caser {
    fn to_lower(&self, c: char) -> char {
        if self.dotted_i() {
            match c {
                'I' => return '\u{0131}', // ı
                '\u{0130}' => return 'i', // İ
                _ => {}
            }
        }
        simple_lower(c)
    }

    fn to_upper(&self, c: char) -> char {
        if self.dotted_i() && c == 'i' {
            return '\u{0130}';
        }
        simple_upper(c)
    }

    fn to_title(&self, c: char) -> char {
        if self.dotted_i() && c == 'i' {
            return '\u{0130}';
        }
        simple_title(c)
    }
}

impl fmt::Display for Caser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Caser::Unicode => "unicode",
            Caser::Turkish => "turkish",
            Caser::Azeri => "azeri",
        })
    }
}

impl FromStr for Caser {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "unicode" | "default" => Ok(Caser::Unicode),
            "turkish" | "tr" => Ok(Caser::Turkish),
            "azeri" | "az" => Ok(Caser::Azeri),
            _ => Err(ParseError::UnknownCaser(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -- classify tests --

    #[test]
    fn classify_letters() {
        assert_eq!(classify('A'), RuneClass::Upper);
        assert_eq!(classify('\u{00C4}'), RuneClass::Upper); // Ä
        assert_eq!(classify('z'), RuneClass::Lower);
        assert_eq!(classify('\u{03C3}'), RuneClass::Lower); // σ
        assert_eq!(classify('\u{01C5}'), RuneClass::Title); // ǅ
        assert_eq!(classify('\u{65E5}'), RuneClass::Caseless); // 日
    }

    #[test]
    fn lowercase_without_uppercase_is_caseless() {
        assert_eq!(classify('\u{00DF}'), RuneClass::Caseless); // ß
        assert_eq!(classify('\u{0138}'), RuneClass::Caseless); // ĸ
        assert_eq!(classify('\u{00E4}'), RuneClass::Lower); // ä
        assert_eq!(classify('\u{1F80}'), RuneClass::Lower); // ᾀ
    }

    #[test]
    fn classify_numbers() {
        assert_eq!(classify('0'), RuneClass::Number);
        assert_eq!(classify('\u{0663}'), RuneClass::Number); // Arabic-Indic three
        assert_eq!(classify('\u{00BD}'), RuneClass::Number); // ½
    }

    #[test]
    fn classify_other() {
        assert_eq!(classify(' '), RuneClass::Whitespace);
        assert_eq!(classify('\u{3000}'), RuneClass::Whitespace);
        assert_eq!(classify('_'), RuneClass::Other);
        assert_eq!(classify('$'), RuneClass::Other);
    }

    // -- simple mapping tests --

    #[test]
    fn simple_mappings_ascii() {
        assert_eq!(simple_lower('A'), 'a');
        assert_eq!(simple_upper('a'), 'A');
        assert_eq!(simple_title('a'), 'A');
        assert_eq!(simple_upper('1'), '1');
    }

    #[test]
    fn simple_upper_keeps_expanding_runes() {
        assert_eq!(simple_upper('\u{00DF}'), '\u{00DF}'); // ß
        assert_eq!(simple_upper('\u{0149}'), '\u{0149}'); // ŉ
    }

    #[test]
    fn simple_lower_dotted_capital_i() {
        assert_eq!(simple_lower('\u{0130}'), 'i');
    }

    #[test]
    fn simple_title_digraphs() {
        assert_eq!(simple_title('\u{01C6}'), '\u{01C5}'); // ǆ -> ǅ
        assert_eq!(simple_title('\u{01C4}'), '\u{01C5}'); // Ǆ -> ǅ
        assert_eq!(simple_upper('\u{01C6}'), '\u{01C4}'); // ǆ -> Ǆ
        assert_eq!(simple_lower('\u{01C5}'), '\u{01C6}'); // ǅ -> ǆ
        assert_eq!(simple_title('\u{01F3}'), '\u{01F2}'); // ǳ -> ǲ
    }

    #[test]
    fn simple_title_greek_iota_subscript() {
        assert_eq!(simple_upper('\u{1F80}'), '\u{1F88}');
        assert_eq!(simple_title('\u{1FB3}'), '\u{1FBC}');
        assert_eq!(simple_title('\u{1F88}'), '\u{1F88}');
    }

    #[test]
    fn simple_title_georgian_is_identity() {
        assert_eq!(simple_title('\u{10D0}'), '\u{10D0}');
    }

    // -- Caser tests --

    #[test]
    fn unicode_caser() {
        let c = Caser::Unicode;
        assert_eq!(c.to_upper('i'), 'I');
        assert_eq!(c.to_lower('I'), 'i');
        assert_eq!(c.lower_str("HeLLo"), "hello");
    }

    #[test]
    fn turkish_caser() {
        let c = Caser::Turkish;
        assert_eq!(c.to_upper('i'), '\u{0130}');
        assert_eq!(c.to_title('i'), '\u{0130}');
        assert_eq!(c.to_lower('I'), '\u{0131}');
        assert_eq!(c.to_lower('\u{0130}'), 'i');
        assert_eq!(c.to_upper('\u{0131}'), 'I');
        assert_eq!(c.to_upper('a'), 'A');
    }

    #[test]
    fn azeri_matches_turkish() {
        for ch in ['i', 'I', '\u{0130}', '\u{0131}', 'q'] {
            assert_eq!(Caser::Azeri.to_lower(ch), Caser::Turkish.to_lower(ch));
            assert_eq!(Caser::Azeri.to_upper(ch), Caser::Turkish.to_upper(ch));
        }
    }

    #[test]
    fn caser_parse_and_display() {
        assert_eq!("Turkish".parse::<Caser>().unwrap(), Caser::Turkish);
        assert_eq!("az".parse::<Caser>().unwrap(), Caser::Azeri);
        assert_eq!(Caser::Unicode.to_string(), "unicode");
        assert!("klingon".parse::<Caser>().is_err());
    }

    #[test]
    fn mapper_by_reference() {
        fn upper_all<M: CaseMapper>(m: M, s: &str) -> String {
            s.chars().map(|c| m.to_upper(c)).collect()
        }
        let caser = Caser::Unicode;
        assert_eq!(upper_all(&caser, "abc"), "ABC");
    }
}
