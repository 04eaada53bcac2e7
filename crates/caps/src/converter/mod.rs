// Converter: tokenizes, matches acronyms, and renders the output style
//
// Tokens are fed through a forward cursor on the acronym index. Single-rune
// tokens ("J", "S", "O", "N") extend the current walk, so spelled-out
// acronyms are recognized. Multi-rune tokens are looked up whole, except a
// token followed by a number, which may continue into it ("UTF" + "8").

use caps_core::{CaseMapper, Caser, NumberRules, ReplaceStyle, Style, Token};
use caps_index::{AcronymIndex, MatchCursor, ReplacementEntry};

use crate::replacements::{DEFAULT_REPLACEMENTS, Replacement};
use crate::tokenizer::Tokenizer;

/// Parameters of a single conversion.
#[derive(Debug, Clone, Copy)]
pub struct ConvertRequest<'a> {
    /// Casing of ordinary tokens.
    pub style: Style,
    /// Spelling of tokens found in the replacement table.
    pub replace_style: ReplaceStyle,
    pub input: &'a str,
    /// Written between segments. Empty for camel styles.
    pub join: &'a str,
    /// Runes kept inside tokens instead of splitting them.
    pub allowed_symbols: &'a str,
    pub number_rules: &'a NumberRules,
}

/// A case converter.
///
/// [`StdConverter`] is the standard implementation. Wrap it to special-case
/// particular outputs:
///
/// ```
/// use caps::{Convert, ConvertRequest, StdConverter};
///
/// struct Underscored(StdConverter);
///
/// impl Convert for Underscored {
///     fn convert(&self, request: &ConvertRequest<'_>) -> String {
///         let out = self.0.convert(request);
///         if out == "id" { "_id".to_string() } else { out }
///     }
/// }
/// ```
pub trait Convert {
    fn convert(&self, request: &ConvertRequest<'_>) -> String;
}

impl<C: Convert + ?Sized> Convert for &C {
    fn convert(&self, request: &ConvertRequest<'_>) -> String {
        (**self).convert(request)
    }
}

impl<C: Convert + ?Sized> Convert for Box<C> {
    fn convert(&self, request: &ConvertRequest<'_>) -> String {
        (**self).convert(request)
    }
}

// ============================================================================
// StdConverter
// ============================================================================

/// Converter backed by a [`Tokenizer`] and an [`AcronymIndex`].
#[derive(Debug, Clone)]
pub struct StdConverter<M = Caser> {
    tokenizer: Tokenizer<M>,
    index: AcronymIndex<M>,
}

impl Default for StdConverter<Caser> {
    fn default() -> Self {
        let replacements = DEFAULT_REPLACEMENTS
            .iter()
            .map(|&(camel, screaming)| Replacement::new(camel, screaming));
        Self::new(replacements, Tokenizer::default(), Caser::Unicode)
    }
}

impl<M: CaseMapper> StdConverter<M> {
    /// Create a converter from a replacement table.
    pub fn new<I>(replacements: I, tokenizer: Tokenizer<M>, mapper: M) -> Self
    where
        I: IntoIterator<Item = Replacement>,
    {
        let index = AcronymIndex::with_mapper(
            mapper,
            replacements.into_iter().map(|r| (r.camel, r.screaming)),
        );
        Self { tokenizer, index }
    }

    pub fn index(&self) -> &AcronymIndex<M> {
        &self.index
    }

    pub fn tokenizer(&self) -> &Tokenizer<M> {
        &self.tokenizer
    }

    /// Add a pair to the replacement table, replacing any entry that shares
    /// either spelling. The pair is swapped if it was given as
    /// (SCREAMING, Camel).
    pub fn set(&mut self, camel: &str, screaming: &str) {
        self.index.delete(camel);
        self.index.delete(screaming);
        if !has_lower(camel) && has_lower(screaming) {
            self.index.add(screaming, camel);
        } else {
            self.index.add(camel, screaming);
        }
    }

    /// Remove the entry owning `key`. Either spelling works.
    pub fn delete(&mut self, key: &str) -> bool {
        self.index.delete(key)
    }

    pub fn contains(&self, key: &str) -> bool {
        self.index.contains(key)
    }

    /// The current replacement table.
    pub fn replacements(&self) -> Vec<Replacement> {
        self.index
            .values()
            .map(|e| Replacement::new(e.camel.as_str(), e.screaming.as_str()))
            .collect()
    }
}

impl<M: CaseMapper> Convert for StdConverter<M> {
    fn convert(&self, request: &ConvertRequest<'_>) -> String {
        convert(request, &self.tokenizer, &self.index)
    }
}

fn has_lower(s: &str) -> bool {
    s.chars().any(char::is_lowercase)
}

// ============================================================================
// Conversion
// ============================================================================

/// Convert `request.input` with the given tokenizer and acronym index.
pub fn convert<M: CaseMapper>(
    request: &ConvertRequest<'_>,
    tokenizer: &Tokenizer<M>,
    index: &AcronymIndex<M>,
) -> String {
    let tokens = tokenizer.tokenize(request.input, request.allowed_symbols, request.number_rules);
    if tokens.is_empty() {
        return String::new();
    }

    let capacity = request.input.len() + request.join.len() * (tokens.len() - 1);
    let mut out = Output::new(request, index.mapper(), capacity);
    let mut cursor = index.forward_cursor();

    for (i, token) in tokens.iter().enumerate() {
        match token.len() {
            0 => continue,
            1 => {
                if !index.match_forward(&mut cursor, token) {
                    out.flush(&mut cursor);
                    out.write_token(token);
                }
            }
            _ => {
                out.flush(&mut cursor);
                if let Some(entry) = index.get_forward(token) {
                    out.write_entry(entry);
                } else if next_starts_with_number(&tokens, i) {
                    if !index.match_forward(&mut cursor, token) {
                        out.write_token(token);
                    }
                } else {
                    out.write_token(token);
                }
            }
        }
    }
    out.flush(&mut cursor);

    let out = out.finish();
    log::trace!("converted {:?} to {out:?} ({})", request.input, request.style);
    out
}

fn next_starts_with_number(tokens: &[Token], i: usize) -> bool {
    tokens.get(i + 1).is_some_and(Token::starts_with_number)
}

/// Output buffer for one conversion.
struct Output<'r, M> {
    buf: String,
    mapper: &'r M,
    style: Style,
    replace_style: ReplaceStyle,
    join: &'r str,
}

impl<'r, M: CaseMapper> Output<'r, M> {
    fn new(request: &ConvertRequest<'r>, mapper: &'r M, capacity: usize) -> Self {
        Self {
            buf: String::with_capacity(capacity),
            mapper,
            style: request.style,
            replace_style: request.replace_style,
            join: request.join,
        }
    }

    fn begin_segment(&mut self) {
        if !self.buf.is_empty() {
            self.buf.push_str(self.join);
        }
    }

    /// Write a replacement entry in the request's replace style.
    fn write_entry(&mut self, entry: &ReplacementEntry) {
        let first = self.buf.is_empty();
        self.begin_segment();
        match self.replace_style {
            ReplaceStyle::Camel if first && self.style == Style::LowerCamel => {
                let lower = self.mapper.lower_str(&entry.camel);
                self.buf.push_str(&lower);
            }
            ReplaceStyle::Camel => self.buf.push_str(&entry.camel),
            ReplaceStyle::Screaming => self.buf.push_str(&entry.screaming),
            ReplaceStyle::Lower => self.buf.push_str(&entry.lower),
        }
    }

    /// Write an ordinary token in the request's style.
    fn write_token(&mut self, token: &[char]) {
        let first = self.buf.is_empty();
        self.begin_segment();
        let m = self.mapper;
        match self.style {
            Style::Lower => self.buf.extend(token.iter().map(|&c| m.to_lower(c))),
            Style::LowerCamel if first => self.buf.extend(token.iter().map(|&c| m.to_lower(c))),
            Style::Camel | Style::LowerCamel => {
                self.buf.extend(token.iter().enumerate().map(|(i, &c)| {
                    if i == 0 { m.to_title(c) } else { m.to_lower(c) }
                }));
            }
            Style::Screaming => {
                self.buf.extend(token.iter().enumerate().map(|(i, &c)| {
                    if i == 0 { m.to_title(c) } else { m.to_upper(c) }
                }));
            }
        }
    }

    /// Write out the cursor's match state and reset it: the last match as a
    /// replacement, then every rune of the partial matches as a single-letter
    /// token.
    fn flush(&mut self, cursor: &mut MatchCursor<'_>) {
        if !cursor.is_active() {
            return;
        }
        let (last, partials) = cursor.take();
        if let Some(entry) = last {
            self.write_entry(entry);
        }
        for &c in partials.iter().flat_map(|t| t.iter()) {
            self.write_token(&[c]);
        }
    }

    fn finish(self) -> String {
        self.buf
    }
}
