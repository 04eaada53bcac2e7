//! Shared types for caps case conversion.
//!
//! - [`character`] -- Rune classification and the `CaseMapper` strategy
//! - [`token`] -- The `Token` rune sequence
//! - [`symbols`] -- Delimiter and allowed-symbol sets
//! - [`number`] -- Numeric-literal classification and override rules
//! - [`enums`] -- Output `Style`, `ReplaceStyle`, and `ParseError`

pub mod character;
pub mod enums;
pub mod number;
pub mod symbols;
pub mod token;

pub use character::{CaseMapper, Caser, RuneClass};
pub use enums::{ParseError, ReplaceStyle, Style};
pub use number::{NumberRule, NumberRules, is_number};
pub use symbols::SymbolSet;
pub use token::Token;
