// Tokenizer: splits identifiers and free text into word tokens
//
// Word boundaries come from case transitions, numeric literals, delimiters
// and whitespace. An input that starts with uppercase runs is ambiguous
// until the first lowercase rune: "HTTPServer" and "HTTP_SERVER" both begin
// with an uppercase run, but only the former splits that run into letters.
// Tokens found while ambiguous are held in a pending list and resolved once
// the input's casing is known.

use caps_core::character::{RuneClass, classify, is_title};
use caps_core::number::{NumberRules, is_number};
use caps_core::{CaseMapper, Caser, SymbolSet, Token};

/// Runes that separate words unless the caller allows them.
pub const DEFAULT_DELIMITERS: &str = " _.!?:;$-(){}[]#@&+~";

/// Splits text into word tokens.
#[derive(Debug, Clone)]
pub struct Tokenizer<M = Caser> {
    delimiters: SymbolSet,
    mapper: M,
}

impl Default for Tokenizer<Caser> {
    fn default() -> Self {
        Self::new(DEFAULT_DELIMITERS, Caser::Unicode)
    }
}

impl<M: CaseMapper> Tokenizer<M> {
    pub fn new(delimiters: &str, mapper: M) -> Self {
        Self {
            delimiters: SymbolSet::from(delimiters),
            mapper,
        }
    }

    pub fn delimiters(&self) -> &SymbolSet {
        &self.delimiters
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// Split `input` into tokens.
    ///
    /// Runes in `allowed_symbols` are kept inside tokens even when they are
    /// delimiters. `rules` override numeric-literal detection per rune.
    ///
    /// ```text
    /// "ASnakecaseVariable"            -> ["A", "Snakecase", "Variable"]
    /// "A_SCREAMING_SNAKECASE"         -> ["A", "SCREAMING", "SNAKECASE"]
    /// "A_SCREAMING_SNAKECASE" ("_")   -> ["A_SCREAMING_SNAKECASE"]
    /// "MarshalJSON"                   -> ["Marshal", "J", "S", "O", "N"]
    /// ```
    pub fn tokenize(&self, input: &str, allowed_symbols: &str, rules: &NumberRules) -> Vec<Token> {
        if input.is_empty() {
            return Vec::new();
        }

        let runes: Vec<char> = input.chars().collect();
        let allowed = SymbolSet::from(allowed_symbols);
        let mut scan = Scan::new(&self.mapper, rules, runes.len());

        for (i, &c) in runes.iter().enumerate() {
            match classify(c) {
                RuneClass::Upper | RuneClass::Title => scan.upper(c),
                RuneClass::Lower => scan.lower(c),
                RuneClass::Number => scan.number(c),
                class => {
                    if allowed.contains(c) {
                        scan.allowed(c, runes.get(i + 1).copied(), &allowed);
                    } else if class == RuneClass::Whitespace || self.delimiters.contains(c) {
                        scan.delimiter();
                    } else if class == RuneClass::Caseless {
                        scan.current.push(c);
                    }
                    // anything else is dropped without breaking the word
                }
            }
        }

        let tokens = scan.finish();
        log::trace!("tokenized {input:?} into {} tokens", tokens.len());
        tokens
    }
}

// ============================================================================
// Scan state
// ============================================================================

/// Whether the input's casing is known yet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ScanState {
    /// No lowercase rune seen: uppercase runs may be words or acronyms.
    Ambiguous,
    /// A lowercase rune has been seen.
    Resolved,
}

/// Kind of the most recent cased or numeric rune.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RunKind {
    Letters,
    Number,
}

struct Scan<'a, M> {
    mapper: &'a M,
    rules: &'a NumberRules,
    tokens: Vec<Token>,
    pending: Vec<Vec<char>>,
    current: Vec<char>,
    state: ScanState,
    run: RunKind,
}

impl<'a, M: CaseMapper> Scan<'a, M> {
    fn new(mapper: &'a M, rules: &'a NumberRules, len: usize) -> Self {
        Self {
            mapper,
            rules,
            tokens: Vec::with_capacity(if len < 6 { 4 } else { 8 }),
            pending: Vec::new(),
            current: Vec::new(),
            state: ScanState::Ambiguous,
            run: RunKind::Letters,
        }
    }

    fn resolved(&self) -> bool {
        self.state == ScanState::Resolved
    }

    fn is_number(&self, candidate: &[char]) -> bool {
        is_number(candidate, self.rules)
    }

    /// Move `current` to the tokens (resolved) or the pending list.
    fn commit_current(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let run = std::mem::take(&mut self.current);
        if self.resolved() {
            self.tokens.push(Token::from(run));
        } else {
            self.pending.push(run);
        }
    }

    /// Move pending runs to the tokens: numbers whole, anything else split
    /// into single-rune tokens.
    fn split_pending(&mut self) {
        for run in std::mem::take(&mut self.pending) {
            if self.is_number(&run) {
                self.tokens.push(Token::from(run));
            } else {
                self.tokens.extend(run.into_iter().map(Token::from));
            }
        }
    }

    fn upper(&mut self, c: char) {
        if self.resolved() && !self.current.is_empty() {
            let run = std::mem::take(&mut self.current);
            self.tokens.push(Token::from(run));
        }
        let c = if self.current.is_empty() || !is_title(c) {
            c
        } else {
            self.mapper.to_upper(c)
        };
        self.current.push(c);
        self.run = RunKind::Letters;
    }

    fn lower(&mut self, c: char) {
        if !self.resolved() {
            if self.current.is_empty() {
                self.tokens
                    .extend(std::mem::take(&mut self.pending).into_iter().map(Token::from));
            } else {
                self.split_pending();
                if self.run == RunKind::Number {
                    let run = std::mem::take(&mut self.current);
                    self.tokens.push(Token::from(run));
                } else if let Some(seed) = self.current.pop() {
                    // the last uppercase rune starts the lowercase word
                    let run = std::mem::replace(&mut self.current, vec![seed]);
                    self.tokens.extend(run.into_iter().map(Token::from));
                }
            }
        }
        self.current.push(c);
        self.pending.clear();
        self.state = ScanState::Resolved;
    }

    fn number(&mut self, c: char) {
        self.current.push(c);
        if !self.is_number(&self.current) {
            self.current.pop();
            self.commit_current();
            self.current.push(c);
        }
        self.run = RunKind::Number;
    }

    fn allowed(&mut self, c: char, next: Option<char>, allowed: &SymbolSet) {
        if self.current.is_empty() || !self.is_number(&self.current) {
            self.current.push(c);
            return;
        }

        self.current.push(c);
        if self.is_number(&self.current) {
            return;
        }

        // a symbol inside a number usually needs the following rune to
        // complete it ("1." + "5"), so look one rune ahead
        let extends = match next {
            Some(n) if n.is_numeric() || n.is_alphabetic() || allowed.contains(n) => {
                self.current.push(n);
                let ok = self.is_number(&self.current);
                self.current.pop();
                ok
            }
            _ => false,
        };
        if !extends {
            self.current.pop();
            self.commit_current();
            self.current.push(c);
        }
    }

    fn delimiter(&mut self) {
        if self.current.is_empty() {
            return;
        }
        if self.resolved() {
            self.tokens
                .extend(std::mem::take(&mut self.pending).into_iter().map(Token::from));
        }
        self.commit_current();
    }

    fn finish(mut self) -> Vec<Token> {
        self.commit_current();
        if self.resolved() {
            self.split_pending();
            self.tokens
        } else {
            self.pending.into_iter().map(Token::from).collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tokenize(input: &str, allowed: &str) -> Vec<String> {
        Tokenizer::default()
            .tokenize(input, allowed, &NumberRules::default())
            .iter()
            .map(|t| t.to_string())
            .collect()
    }

    // -- casing --

    #[test]
    fn all_digits() {
        assert_eq!(tokenize("123", ""), ["123"]);
    }

    #[test]
    fn empty_input() {
        assert!(tokenize("", "").is_empty());
        assert!(tokenize("  __ ", "").is_empty());
    }

    #[test]
    fn lower_camel() {
        assert_eq!(
            tokenize("aLowerCamelcaseString", ""),
            ["a", "Lower", "Camelcase", "String"]
        );
    }

    #[test]
    fn screaming_snake() {
        assert_eq!(
            tokenize("A_SCREAMING_SNAKE_STRING", ""),
            ["A", "SCREAMING", "SNAKE", "STRING"]
        );
    }

    #[test]
    fn allowed_symbol_joins_words() {
        assert_eq!(
            tokenize("A_SCREAMING_SNAKE_STRING", "_"),
            ["A_SCREAMING_SNAKE_STRING"]
        );
    }

    #[test]
    fn leading_single_letter_word() {
        assert_eq!(tokenize("ACamelCaseString", ""), ["A", "Camel", "Case", "String"]);
        assert_eq!(tokenize("A_CamelCaseString", ""), ["A", "Camel", "Case", "String"]);
    }

    #[test]
    fn uppercase_run_after_lowercase_splits_into_letters() {
        assert_eq!(tokenize("MarshalJSON", ""), ["Marshal", "J", "S", "O", "N"]);
    }

    #[test]
    fn kebab_and_snake() {
        assert_eq!(tokenize("a-kebab-string", ""), ["a", "kebab", "string"]);
        assert_eq!(tokenize("a_snake_string", ""), ["a", "snake", "string"]);
    }

    #[test]
    fn pending_uppercase_words_split_once_resolved() {
        assert_eq!(tokenize("AB_cd", ""), ["AB", "cd"]);
        assert_eq!(tokenize("AB_Cd", ""), ["A", "B", "Cd"]);
    }

    // -- numbers --

    #[test]
    fn decimal_needs_allowed_dot() {
        assert_eq!(tokenize("123.456", ""), ["123", "456"]);
        assert_eq!(tokenize("123.456", "."), ["123.456"]);
    }

    #[test]
    fn scientific_notation() {
        assert_eq!(
            tokenize("a_scientific_n_-123.456e7", "-."),
            ["a", "scientific", "n", "-123.456e7"]
        );
    }

    #[test]
    fn version_numbers() {
        assert_eq!(tokenize("my_software_v1.3.3", ""), ["my", "software", "v1", "3", "3"]);
        assert_eq!(tokenize("my_software_v1.3.3", "."), ["my", "software", "v1.3", ".3"]);
    }

    #[test]
    fn hash_prefix_is_a_delimiter() {
        assert_eq!(tokenize("#123", ""), ["123"]);
        assert_eq!(tokenize("#123.456", "."), ["123.456"]);
    }

    #[test]
    fn letters_then_digits() {
        assert_eq!(tokenize("UTF8", ""), ["UTF", "8"]);
        assert_eq!(tokenize("id32", ""), ["id", "32"]);
    }

    #[test]
    fn number_then_lowercase_keeps_number_whole() {
        assert_eq!(tokenize("12abc", ""), ["12", "abc"]);
    }

    #[test]
    fn trailing_allowed_symbol_is_not_numeric() {
        assert_eq!(tokenize("a 12.", "."), ["a", "12", "."]);
    }

    #[test]
    fn number_rules_extend_literals() {
        let rules = NumberRules::new().with('$', |i, _, _| i == 0);
        let tokens: Vec<String> = Tokenizer::default()
            .tokenize("price $9.99 now", "$.", &rules)
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(tokens, ["price", "$9.99", "now"]);
    }

    // -- other runes --

    #[test]
    fn unlisted_punctuation_is_dropped_in_place() {
        assert_eq!(tokenize("don't", ""), ["dont"]);
        assert_eq!(tokenize("a,b", ""), ["ab"]);
    }

    #[test]
    fn caseless_letters_join_current_word() {
        assert_eq!(tokenize("hello 世界", ""), ["hello", "世界"]);
        assert_eq!(tokenize("dataΣύνολο", ""), ["data", "Σύνολο"]);
    }

    #[test]
    fn titlecase_digraph_starts_word() {
        assert_eq!(tokenize("fooǅungla", ""), ["foo", "ǅungla"]);
    }

    #[test]
    fn unicode_whitespace_breaks_words() {
        assert_eq!(tokenize("one\u{3000}two\tthree", ""), ["one", "two", "three"]);
    }

    #[test]
    fn custom_delimiters() {
        let tokenizer = Tokenizer::new("|", Caser::Unicode);
        let tokens: Vec<String> = tokenizer
            .tokenize("a|b_c", "", &NumberRules::default())
            .iter()
            .map(|t| t.to_string())
            .collect();
        assert_eq!(tokens, ["a", "bc"]);
        assert!(tokenizer.delimiters().contains('|'));
    }
}
