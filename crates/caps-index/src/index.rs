// AcronymIndex: forward and reverse tries over one entry table

use caps_core::{CaseMapper, Caser, Token};

use crate::cursor::{Direction, MatchCursor};
use crate::entry::ReplacementEntry;
use crate::trie::{EntryId, Trie};

#[derive(Debug, Clone)]
struct Slot {
    entry: ReplacementEntry,
    keys: Vec<Vec<char>>,
    /// Insertion sequence number; slots are reused so ids do not keep order.
    seq: u64,
}

/// Index of known acronyms, searchable by spelling in both reading
/// directions.
///
/// Every entry is reachable through the lowercase form of its screaming
/// spelling and, when it lowercases differently, of its camel spelling.
/// Tries are keyed by lowercase runes; lookups lowercase their input through
/// the index's case mapper, so all lookups are case-insensitive.
///
/// At most one entry owns a given lowercase spelling. Adding an entry that
/// collides with an existing one evicts the existing entry entirely.
#[derive(Debug, Clone)]
pub struct AcronymIndex<M = Caser> {
    mapper: M,
    entries: Vec<Option<Slot>>,
    free: Vec<EntryId>,
    live: usize,
    next_seq: u64,
    forward: Trie,
    reverse: Trie,
}

impl<M: CaseMapper + Default> Default for AcronymIndex<M> {
    fn default() -> Self {
        Self::with_mapper(M::default(), std::iter::empty::<(&str, &str)>())
    }
}

impl AcronymIndex<Caser> {
    /// Build an index from `(camel, screaming)` pairs using Unicode case
    /// mapping.
    pub fn new<I, A, B>(entries: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        Self::with_mapper(Caser::Unicode, entries)
    }
}

impl<M: CaseMapper> AcronymIndex<M> {
    /// Build an index from `(camel, screaming)` pairs with a specific case
    /// mapper. Later pairs evict earlier ones that share a spelling.
    pub fn with_mapper<I, A, B>(mapper: M, entries: I) -> Self
    where
        I: IntoIterator<Item = (A, B)>,
        A: AsRef<str>,
        B: AsRef<str>,
    {
        let mut index = Self {
            mapper,
            entries: Vec::new(),
            free: Vec::new(),
            live: 0,
            next_seq: 0,
            forward: Trie::new(),
            reverse: Trie::new(),
        };
        for (camel, screaming) in entries {
            index.add(camel.as_ref(), screaming.as_ref());
        }
        index
    }

    pub fn mapper(&self) -> &M {
        &self.mapper
    }

    /// Add an acronym. Returns `true` if an existing entry was evicted.
    ///
    /// Empty spellings are ignored and return `false`.
    pub fn add(&mut self, camel: &str, screaming: &str) -> bool {
        if camel.is_empty() || screaming.is_empty() {
            log::debug!("ignoring replacement with empty spelling: {camel:?} / {screaming:?}");
            return false;
        }

        let entry = ReplacementEntry::new(&self.mapper, camel, screaming);
        let keys = entry.keys(&self.mapper);

        let mut replaced = false;
        for key in &keys {
            while let Some(id) = self.owner_of(key) {
                let Some(old) = self.remove_entry(id) else {
                    break;
                };
                log::debug!(
                    "replacement {}/{} evicts {}/{}",
                    camel,
                    screaming,
                    old.camel,
                    old.screaming
                );
                replaced = true;
            }
        }

        let id = match self.free.pop() {
            Some(id) => id,
            None => {
                self.entries.push(None);
                self.entries.len() - 1
            }
        };
        for key in &keys {
            self.forward.insert(key.iter().copied(), id);
            self.reverse.insert(key.iter().rev().copied(), id);
        }
        self.entries[id] = Some(Slot {
            entry,
            keys,
            seq: self.next_seq,
        });
        self.next_seq += 1;
        self.live += 1;
        log::trace!("indexed replacement {camel}/{screaming}");
        replaced
    }

    /// Remove the entry owning `key` (any of its spellings, any case).
    /// Returns `false` if no entry owns `key`.
    pub fn delete(&mut self, key: &str) -> bool {
        let lower: Vec<char> = key.chars().map(|c| self.mapper.to_lower(c)).collect();
        if lower.is_empty() {
            return false;
        }
        match self.owner_of(&lower) {
            Some(id) => {
                let removed = self.remove_entry(id);
                if let Some(old) = &removed {
                    log::debug!("deleted replacement {}/{}", old.camel, old.screaming);
                }
                removed.is_some()
            }
            None => false,
        }
    }

    /// Exact lookup of a spelling in reading order.
    pub fn get_forward(&self, token: &[char]) -> Option<&ReplacementEntry> {
        if token.is_empty() {
            return None;
        }
        let id = self
            .forward
            .get(token.iter().map(|&c| self.mapper.to_lower(c)))?;
        self.entry(id)
    }

    /// Exact lookup through the reverse trie. `token` is given in reading
    /// order and is reversed here.
    pub fn get_reverse(&self, token: &[char]) -> Option<&ReplacementEntry> {
        if token.is_empty() {
            return None;
        }
        let id = self
            .reverse
            .get(token.iter().rev().map(|&c| self.mapper.to_lower(c)))?;
        self.entry(id)
    }

    /// Whether some entry owns `key`.
    pub fn contains(&self, key: &str) -> bool {
        let chars: Vec<char> = key.chars().collect();
        self.get_forward(&chars).is_some()
    }

    /// Live entries in insertion order.
    pub fn values(&self) -> impl Iterator<Item = &ReplacementEntry> {
        let mut slots: Vec<&Slot> = self.entries.iter().flatten().collect();
        slots.sort_unstable_by_key(|slot| slot.seq);
        slots.into_iter().map(|slot| &slot.entry)
    }

    pub fn len(&self) -> usize {
        self.live
    }

    pub fn is_empty(&self) -> bool {
        self.live == 0
    }

    pub fn forward_cursor(&self) -> MatchCursor<'_> {
        MatchCursor::new(Direction::Forward)
    }

    pub fn reverse_cursor(&self) -> MatchCursor<'_> {
        MatchCursor::new(Direction::Reverse)
    }

    /// Advance a forward cursor by one token.
    ///
    /// If every rune of `token` continues the walk, the cursor moves and
    /// `true` is returned: the destination's entry becomes the last match
    /// (clearing partial matches) or, if the node holds no entry, `token` is
    /// recorded as a partial match. Otherwise the cursor is left untouched
    /// and `false` is returned. The empty token never matches.
    pub fn match_forward<'a>(&'a self, cursor: &mut MatchCursor<'a>, token: &Token) -> bool {
        debug_assert_eq!(cursor.direction, Direction::Forward);
        let runes = token.iter().map(|&c| self.mapper.to_lower(c));
        self.advance(&self.forward, cursor, token, runes)
    }

    /// Advance a reverse cursor by one token. Tokens are fed last to first
    /// and each token's runes are walked from its last rune.
    pub fn match_reverse<'a>(&'a self, cursor: &mut MatchCursor<'a>, token: &Token) -> bool {
        debug_assert_eq!(cursor.direction, Direction::Reverse);
        let runes = token.iter().rev().map(|&c| self.mapper.to_lower(c));
        self.advance(&self.reverse, cursor, token, runes)
    }

    fn advance<'a, I>(
        &'a self,
        trie: &Trie,
        cursor: &mut MatchCursor<'a>,
        token: &Token,
        runes: I,
    ) -> bool
    where
        I: Iterator<Item = char>,
    {
        if token.is_empty() {
            return false;
        }
        let Some(node) = trie.walk(cursor.node, runes) else {
            return false;
        };
        cursor.node = node;
        match trie.value(node).and_then(|id| self.entry(id)) {
            Some(entry) => {
                cursor.last_match = Some(entry);
                cursor.partial_matches.clear();
            }
            None => cursor.partial_matches.push(token.clone()),
        }
        true
    }

    fn entry(&self, id: EntryId) -> Option<&ReplacementEntry> {
        self.entries.get(id)?.as_ref().map(|slot| &slot.entry)
    }

    fn owner_of(&self, lower: &[char]) -> Option<EntryId> {
        self.forward
            .get(lower.iter().copied())
            .or_else(|| self.reverse.get(lower.iter().rev().copied()))
    }

    fn remove_entry(&mut self, id: EntryId) -> Option<ReplacementEntry> {
        let slot = self.entries.get_mut(id)?.take()?;
        for key in &slot.keys {
            self.forward.remove(key.iter().copied(), id);
            self.reverse.remove(key.iter().rev().copied(), id);
        }
        self.free.push(id);
        self.live -= 1;
        Some(slot.entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chars(s: &str) -> Vec<char> {
        s.chars().collect()
    }

    fn tok(s: &str) -> Token {
        Token::from(s)
    }

    fn sample() -> AcronymIndex {
        AcronymIndex::new([
            ("Json", "JSON"),
            ("Jsonp", "JSONP"),
            ("Js", "JS"),
            ("Utf8", "UTF8"),
            ("Id", "ID"),
            ("Uid", "UID"),
            ("Uuid", "UUID"),
        ])
    }

    /// Every lowercase spelling must be owned by exactly one live entry.
    fn assert_unique_ownership(index: &AcronymIndex) {
        let mut seen: Vec<Vec<char>> = Vec::new();
        for entry in index.values() {
            for key in entry.keys(index.mapper()) {
                assert!(!seen.contains(&key), "spelling {key:?} owned twice");
                let owner = index.get_forward(&key).unwrap();
                assert_eq!(owner, entry);
                seen.push(key);
            }
        }
    }

    // -- add / get --

    #[test]
    fn get_is_case_insensitive() {
        let index = sample();
        assert_eq!(index.get_forward(&chars("json")).unwrap().screaming, "JSON");
        assert_eq!(index.get_forward(&chars("JsOn")).unwrap().camel, "Json");
        assert!(index.get_forward(&chars("jso")).is_none());
        assert!(index.get_forward(&[]).is_none());
    }

    #[test]
    fn get_reverse_takes_reading_order() {
        let index = sample();
        assert_eq!(index.get_reverse(&chars("UTF8")).unwrap().camel, "Utf8");
        assert!(index.get_reverse(&chars("8FTU")).is_none());
        assert!(index.get_reverse(&[]).is_none());
    }

    #[test]
    fn add_replaces_colliding_entries() {
        let mut index: AcronymIndex = AcronymIndex::default();
        assert!(!index.add("Abcd", "ABCD"));
        assert!(index.contains("abcd"));

        assert!(index.add("Abcd", "ABCD2"));
        assert!(index.contains("abcd2"));
        assert!(index.contains("ABCD"));
        assert_eq!(index.len(), 1);

        assert!(index.add("Abcd2", "ABCD2"));
        assert_eq!(index.get_forward(&chars("abcd2")).unwrap().camel, "Abcd2");
        assert!(!index.contains("abcd"));
        assert_eq!(index.len(), 1);
        assert_unique_ownership(&index);
    }

    #[test]
    fn add_ignores_empty_spellings() {
        let mut index: AcronymIndex = AcronymIndex::default();
        assert!(!index.add("", "X"));
        assert!(!index.add("X", ""));
        assert!(index.is_empty());
    }

    #[test]
    fn uniqueness_after_many_adds() {
        let mut index = sample();
        index.add("JSON", "Json");
        index.add("Uid", "UID2");
        index.add("Uid2", "UID");
        index.add("Ip", "IP");
        assert_unique_ownership(&index);
    }

    #[test]
    fn values_in_insertion_order() {
        let index = AcronymIndex::new([
            ("Cat", "CAT"),
            ("Dog", "DOG"),
            ("Wolf", "WOLF"),
            ("Dogfish", "DOGFISH"),
        ]);
        let camels: Vec<&str> = index.values().map(|e| e.camel.as_str()).collect();
        assert_eq!(camels, ["Cat", "Dog", "Wolf", "Dogfish"]);
    }

    #[test]
    fn freed_entry_slots_are_reused() {
        let mut index = AcronymIndex::new([("Json", "JSON"), ("Http", "HTTP")]);
        for _ in 0..10 {
            index.delete("http");
            index.add("Http", "HTTP");
        }
        index.add("Http", "HTTP");
        assert_eq!(index.entries.len(), 2);
        assert_eq!(index.len(), 2);

        assert!(index.delete("json"));
        index.add("Xml", "XML");
        assert_eq!(index.entries.len(), 2);
        assert_eq!(index.get_forward(&chars("xml")).unwrap().screaming, "XML");
        let camels: Vec<&str> = index.values().map(|e| e.camel.as_str()).collect();
        assert_eq!(camels, ["Http", "Xml"]);
        assert_unique_ownership(&index);
    }

    // -- delete --

    #[test]
    fn delete_removes_entry() {
        let mut index = AcronymIndex::new([("Jsonp", "JSONP"), ("Json", "JSON"), ("Js", "JS")]);
        assert!(!index.delete("json_doesnotexist"));
        assert!(!index.delete(""));

        for key in ["Js", "Json", "Jsonp"] {
            assert!(index.contains(key));
        }
        for key in ["Js", "Json", "Jsonp"] {
            assert!(index.delete(key));
            assert!(!index.contains(key));
        }
        assert!(index.is_empty());
        assert_eq!(index.forward.node_count(), 1);
        assert_eq!(index.reverse.node_count(), 1);
    }

    #[test]
    fn delete_removes_every_spelling() {
        let mut index = AcronymIndex::new([("Abcd", "ABCD2")]);
        assert!(index.delete("ABCD"));
        assert!(!index.contains("abcd2"));
        assert!(index.get_reverse(&chars("abcd2")).is_none());
    }

    #[test]
    fn delete_keeps_prefix_entries() {
        let mut index = AcronymIndex::new([("Json", "JSON"), ("Jsonp", "JSONP")]);
        assert!(index.delete("jsonp"));
        assert!(index.contains("json"));
    }

    // -- cursors --

    #[test]
    fn match_forward_tracks_partials() {
        let index = AcronymIndex::new([("Abcd", "ABCD")]);
        let mut cursor = index.forward_cursor();

        assert!(!index.match_forward(&mut cursor, &Token::default()));
        assert!(index.match_forward(&mut cursor, &tok("abc")));
        assert!(cursor.last_match().is_none());
        assert_eq!(cursor.partial_matches(), &[tok("abc")]);

        assert!(index.match_forward(&mut cursor, &tok("D")));
        assert_eq!(cursor.last_match().unwrap().lower, "abcd");
        assert!(cursor.partial_matches().is_empty());

        assert!(!index.match_forward(&mut cursor, &tok("z")));
        assert_eq!(cursor.last_match().unwrap().lower, "abcd");
    }

    #[test]
    fn match_forward_spelled_out_letters() {
        let index = sample();
        let mut cursor = index.forward_cursor();
        for letter in ["J", "S"] {
            assert!(index.match_forward(&mut cursor, &tok(letter)));
        }
        assert_eq!(cursor.last_match().unwrap().screaming, "JS");
        for letter in ["O", "N"] {
            assert!(index.match_forward(&mut cursor, &tok(letter)));
        }
        assert_eq!(cursor.last_match().unwrap().screaming, "JSON");
        assert!(!index.match_forward(&mut cursor, &tok("X")));
        assert!(index.match_forward(&mut cursor, &tok("P")));
        assert_eq!(cursor.last_match().unwrap().screaming, "JSONP");
    }

    #[test]
    fn failed_multi_rune_token_leaves_cursor() {
        let index = sample();
        let mut cursor = index.forward_cursor();
        assert!(index.match_forward(&mut cursor, &tok("U")));
        assert!(!index.match_forward(&mut cursor, &tok("Ix")));
        assert_eq!(cursor.partial_matches(), &[tok("U")]);
        assert!(index.match_forward(&mut cursor, &tok("ID")));
        assert_eq!(cursor.last_match().unwrap().screaming, "UID");
    }

    #[test]
    fn match_reverse_walks_backwards() {
        let index = sample();
        let mut cursor = index.reverse_cursor();
        assert!(index.match_reverse(&mut cursor, &tok("8")));
        assert!(index.match_reverse(&mut cursor, &tok("F")));
        assert_eq!(cursor.partial_matches().len(), 2);
        assert!(index.match_reverse(&mut cursor, &tok("UT")));
        assert_eq!(cursor.last_match().unwrap().camel, "Utf8");
    }

    #[test]
    fn forward_walk_ignores_reverse_only_paths() {
        let index = AcronymIndex::new([("Id", "ID"), ("Pid", "PID")]);
        let mut cursor = index.forward_cursor();
        // "di" exists only in the reverse trie
        assert!(!index.match_forward(&mut cursor, &tok("DI")));
        assert!(index.match_forward(&mut cursor, &tok("P")));
        assert!(index.match_forward(&mut cursor, &tok("I")));
        assert!(index.match_forward(&mut cursor, &tok("D")));
        assert_eq!(cursor.last_match().unwrap().camel, "Pid");
    }

    #[test]
    fn turkish_mapper() {
        let index = AcronymIndex::with_mapper(Caser::Turkish, [("Id", "ID")]);
        assert!(index.get_forward(&chars("ID")).is_some());
        assert!(index.get_forward(&chars("\u{0131}d")).is_some());
        assert!(index.get_forward(&chars("id")).is_none());
    }
}
