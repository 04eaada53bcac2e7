//! Unicode-aware case conversion for identifiers and free text.
//!
//! ```
//! assert_eq!(caps::to_camel("some_json_value"), "SomeJSONValue");
//! assert_eq!(caps::to_snake("MarshalJSON"), "marshal_json");
//! assert_eq!(caps::to_title("serveHttp"), "Serve HTTP");
//! ```
//!
//! - [`tokenizer`] -- Splits input into word tokens
//! - [`converter`] -- Acronym matching and output rendering (`Convert`, `StdConverter`)
//! - [`replacements`] -- `Replacement` pairs and the default acronym table
//! - [`caps`] -- The configurable `Caps` facade and free functions

pub mod caps;
pub mod converter;
pub mod replacements;
pub mod tokenizer;

pub use crate::caps::{
    Caps, CapsConfig, default_caps, lower_first, to_camel, to_delimited, to_dot_notation,
    to_kebab, to_lower_camel, to_screaming_dot_notation, to_screaming_kebab, to_screaming_snake,
    to_snake, to_title, upper_first, without_numbers,
};
pub use caps_core::{CaseMapper, Caser, NumberRules, ParseError, ReplaceStyle, Style, Token};
pub use caps_index::{AcronymIndex, ReplacementEntry};
pub use converter::{Convert, ConvertRequest, StdConverter};
pub use replacements::{DEFAULT_REPLACEMENTS, Replacement, default_replacements};
pub use tokenizer::{DEFAULT_DELIMITERS, Tokenizer};
