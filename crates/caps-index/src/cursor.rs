// Match cursor: trie-walk progress across consecutive tokens

use caps_core::Token;

use crate::entry::ReplacementEntry;
use crate::trie::{NodeId, ROOT};

/// Which trie a cursor walks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Forward,
    Reverse,
}

/// Progress of a token-by-token walk through one of the index's tries.
///
/// A cursor is created by [`AcronymIndex::forward_cursor`] or
/// [`AcronymIndex::reverse_cursor`] and advanced with the matching
/// `match_*` method. `last_match` is the deepest entry reached so far;
/// `partial_matches` are the tokens consumed since then that have not (yet)
/// completed an entry.
///
/// [`AcronymIndex::forward_cursor`]: crate::AcronymIndex::forward_cursor
/// [`AcronymIndex::reverse_cursor`]: crate::AcronymIndex::reverse_cursor
#[derive(Debug, Clone)]
pub struct MatchCursor<'a> {
    pub(crate) direction: Direction,
    pub(crate) node: NodeId,
    pub(crate) last_match: Option<&'a ReplacementEntry>,
    pub(crate) partial_matches: Vec<Token>,
}

impl<'a> MatchCursor<'a> {
    pub(crate) fn new(direction: Direction) -> Self {
        Self {
            direction,
            node: ROOT,
            last_match: None,
            partial_matches: Vec::new(),
        }
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn last_match(&self) -> Option<&'a ReplacementEntry> {
        self.last_match
    }

    pub fn partial_matches(&self) -> &[Token] {
        &self.partial_matches
    }

    /// Whether the cursor has moved away from the root.
    pub fn is_active(&self) -> bool {
        self.node != ROOT || self.last_match.is_some() || !self.partial_matches.is_empty()
    }

    /// Return to the root, dropping the match state.
    pub fn reset(&mut self) {
        self.node = ROOT;
        self.last_match = None;
        self.partial_matches.clear();
    }

    /// Take the match state and reset the cursor.
    pub fn take(&mut self) -> (Option<&'a ReplacementEntry>, Vec<Token>) {
        let last = self.last_match.take();
        let partials = std::mem::take(&mut self.partial_matches);
        self.node = ROOT;
        (last, partials)
    }
}
