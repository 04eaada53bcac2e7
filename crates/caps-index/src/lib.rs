//! Acronym index for caps case conversion.
//!
//! Known acronyms ("Http"/"HTTP", "Json"/"JSON", ...) are stored in two
//! arena-backed tries sharing one entry table: a forward trie keyed by each
//! spelling, and a reverse trie keyed by each spelling read backwards. The
//! converter walks the forward trie token by token with a [`MatchCursor`],
//! which lets spelled-out letters ("J", "S", "O", "N") complete an entry.
//!
//! - [`entry`] -- `ReplacementEntry` and its lowercase keys
//! - [`trie`] -- Arena trie with pruning removal
//! - [`cursor`] -- `MatchCursor` walk state
//! - [`index`] -- `AcronymIndex`

pub mod cursor;
pub mod entry;
pub mod index;
pub mod trie;

pub use cursor::{Direction, MatchCursor};
pub use entry::ReplacementEntry;
pub use index::AcronymIndex;
