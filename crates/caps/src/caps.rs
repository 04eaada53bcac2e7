// Caps: configured entry point for the style conversions

use std::sync::LazyLock;

use caps_core::{CaseMapper, Caser, NumberRules, ReplaceStyle, Style};

use crate::converter::{Convert, ConvertRequest, StdConverter};
use crate::replacements::{Replacement, default_replacements};
use crate::tokenizer::{DEFAULT_DELIMITERS, Tokenizer};

/// Builder for [`Caps`].
///
/// ```
/// use caps::{CapsConfig, ReplaceStyle};
///
/// let caps = CapsConfig::new()
///     .allowed_symbols("-.")
///     .replace_style(ReplaceStyle::Camel)
///     .build();
/// assert_eq!(caps.to_camel("json value -1.5"), "JsonValue-1.5");
/// ```
#[derive(Debug, Clone, Default)]
pub struct CapsConfig {
    allowed_symbols: String,
    number_rules: NumberRules,
    replace_style: ReplaceStyle,
    replacements: Vec<Replacement>,
    caser: Caser,
    delimiters: Option<String>,
}

impl CapsConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep these runes inside tokens. Appends to any symbols set before.
    pub fn allowed_symbols(mut self, symbols: &str) -> Self {
        self.allowed_symbols.push_str(symbols);
        self
    }

    /// Add or override the number rule for one rune.
    ///
    /// A rune only appears in the output if it is also an allowed symbol.
    pub fn number_rule<F>(mut self, rune: char, rule: F) -> Self
    where
        F: Fn(usize, char, &[char]) -> bool + Send + Sync + 'static,
    {
        self.number_rules.insert(rune, rule);
        self
    }

    /// Merge a set of number rules.
    pub fn number_rules(mut self, rules: &NumberRules) -> Self {
        self.number_rules.extend(rules);
        self
    }

    pub fn replace_style(mut self, style: ReplaceStyle) -> Self {
        self.replace_style = style;
        self
    }

    /// Append replacement pairs. When none are given the default table is
    /// used.
    pub fn replacements<I, R>(mut self, replacements: I) -> Self
    where
        I: IntoIterator<Item = R>,
        R: Into<Replacement>,
    {
        self.replacements
            .extend(replacements.into_iter().map(Into::into));
        self
    }

    pub fn caser(mut self, caser: Caser) -> Self {
        self.caser = caser;
        self
    }

    /// Replace the delimiter set (default [`DEFAULT_DELIMITERS`]).
    pub fn delimiters(mut self, delimiters: &str) -> Self {
        self.delimiters = Some(delimiters.to_string());
        self
    }

    /// Build a [`Caps`] with a [`StdConverter`] made from this configuration.
    pub fn build(mut self) -> Caps {
        let delimiters = self.delimiters.as_deref().unwrap_or(DEFAULT_DELIMITERS);
        let tokenizer = Tokenizer::new(delimiters, self.caser);
        let replacements = if self.replacements.is_empty() {
            default_replacements()
        } else {
            std::mem::take(&mut self.replacements)
        };
        let converter = StdConverter::new(replacements, tokenizer, self.caser);
        Caps::with_converter(self, converter)
    }
}

/// Converts text between casing styles.
///
/// ```
/// let caps = caps::Caps::default();
/// assert_eq!(caps.to_camel("This is [an] {example}${id32}."), "ThisIsAnExampleID32");
/// assert_eq!(caps.to_snake("This is [an] {example}${id32}."), "this_is_an_example_id_32");
/// ```
#[derive(Debug, Clone)]
pub struct Caps<C = StdConverter> {
    converter: C,
    allowed_symbols: String,
    number_rules: NumberRules,
    replace_style: ReplaceStyle,
    caser: Caser,
}

impl Default for Caps {
    fn default() -> Self {
        CapsConfig::default().build()
    }
}

impl Caps {
    pub fn new(config: CapsConfig) -> Self {
        config.build()
    }
}

impl<C: Convert> Caps<C> {
    /// Use `converter` for every conversion. The replacement table and
    /// delimiters of `config` are ignored; the converter owns its own.
    pub fn with_converter(config: CapsConfig, converter: C) -> Self {
        Self {
            converter,
            allowed_symbols: config.allowed_symbols,
            number_rules: config.number_rules,
            replace_style: config.replace_style,
            caser: config.caser,
        }
    }

    pub fn converter(&self) -> &C {
        &self.converter
    }

    /// Mutable access to the converter, e.g. to edit its replacement table.
    pub fn converter_mut(&mut self) -> &mut C {
        &mut self.converter
    }

    pub fn allowed_symbols(&self) -> &str {
        &self.allowed_symbols
    }

    pub fn number_rules(&self) -> &NumberRules {
        &self.number_rules
    }

    pub fn replace_style(&self) -> ReplaceStyle {
        self.replace_style
    }

    pub fn caser(&self) -> Caser {
        self.caser
    }

    fn run(&self, input: &str, style: Style, replace_style: ReplaceStyle, join: &str) -> String {
        self.converter.convert(&ConvertRequest {
            style,
            replace_style,
            input,
            join,
            allowed_symbols: &self.allowed_symbols,
            number_rules: &self.number_rules,
        })
    }

    /// `"This is [an] {example}${id32}."` → `"ThisIsAnExampleID32"`
    pub fn to_camel(&self, s: &str) -> String {
        self.run(s, Style::Camel, self.replace_style, "")
    }

    /// `"This is [an] {example}${id32}."` → `"thisIsAnExampleID32"`
    pub fn to_lower_camel(&self, s: &str) -> String {
        self.run(s, Style::LowerCamel, self.replace_style, "")
    }

    /// `"This is [an] {example}${id32}."` → `"This Is An Example ID 32"`
    pub fn to_title(&self, s: &str) -> String {
        self.run(s, Style::Camel, self.replace_style, " ")
    }

    pub fn to_snake(&self, s: &str) -> String {
        self.to_delimited(s, "_", true)
    }

    pub fn to_screaming_snake(&self, s: &str) -> String {
        self.to_delimited(s, "_", false)
    }

    pub fn to_kebab(&self, s: &str) -> String {
        self.to_delimited(s, "-", true)
    }

    pub fn to_screaming_kebab(&self, s: &str) -> String {
        self.to_delimited(s, "-", false)
    }

    pub fn to_dot_notation(&self, s: &str) -> String {
        self.to_delimited(s, ".", true)
    }

    pub fn to_screaming_dot_notation(&self, s: &str) -> String {
        self.to_delimited(s, ".", false)
    }

    /// Join the words of `s` with `delimiter`, all lowercase or all
    /// uppercase. The configured replace style is not used here: replaced
    /// acronyms follow the case of the output.
    pub fn to_delimited(&self, s: &str, delimiter: &str, lowercase: bool) -> String {
        if lowercase {
            self.run(s, Style::Lower, ReplaceStyle::Lower, delimiter)
        } else {
            self.run(s, Style::Screaming, ReplaceStyle::Screaming, delimiter)
        }
    }

    /// Title-case the first rune of `s`.
    pub fn upper_first(&self, s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => {
                let mut out = String::with_capacity(s.len());
                out.push(self.caser.to_title(first));
                out.extend(chars);
                out
            }
            None => String::new(),
        }
    }

    /// Lowercase the first rune of `s`.
    pub fn lower_first(&self, s: &str) -> String {
        let mut chars = s.chars();
        match chars.next() {
            Some(first) => {
                let mut out = String::with_capacity(s.len());
                out.push(self.caser.to_lower(first));
                out.extend(chars);
                out
            }
            None => String::new(),
        }
    }

    /// Remove every number rune. Signs and decimal points are kept.
    pub fn without_numbers(&self, s: &str) -> String {
        s.chars().filter(|c| !c.is_numeric()).collect()
    }
}

// ============================================================================
// Free functions over a shared default instance
// ============================================================================

static DEFAULT_CAPS: LazyLock<Caps> = LazyLock::new(Caps::default);

/// The shared default instance used by the free functions.
pub fn default_caps() -> &'static Caps {
    &DEFAULT_CAPS
}

pub fn to_camel(s: &str) -> String {
    DEFAULT_CAPS.to_camel(s)
}

pub fn to_lower_camel(s: &str) -> String {
    DEFAULT_CAPS.to_lower_camel(s)
}

pub fn to_title(s: &str) -> String {
    DEFAULT_CAPS.to_title(s)
}

pub fn to_snake(s: &str) -> String {
    DEFAULT_CAPS.to_snake(s)
}

pub fn to_screaming_snake(s: &str) -> String {
    DEFAULT_CAPS.to_screaming_snake(s)
}

pub fn to_kebab(s: &str) -> String {
    DEFAULT_CAPS.to_kebab(s)
}

pub fn to_screaming_kebab(s: &str) -> String {
    DEFAULT_CAPS.to_screaming_kebab(s)
}

pub fn to_dot_notation(s: &str) -> String {
    DEFAULT_CAPS.to_dot_notation(s)
}

pub fn to_screaming_dot_notation(s: &str) -> String {
    DEFAULT_CAPS.to_screaming_dot_notation(s)
}

pub fn to_delimited(s: &str, delimiter: &str, lowercase: bool) -> String {
    DEFAULT_CAPS.to_delimited(s, delimiter, lowercase)
}

pub fn upper_first(s: &str) -> String {
    DEFAULT_CAPS.upper_first(s)
}

pub fn lower_first(s: &str) -> String {
    DEFAULT_CAPS.lower_first(s)
}

pub fn without_numbers(s: &str) -> String {
    DEFAULT_CAPS.without_numbers(s)
}
