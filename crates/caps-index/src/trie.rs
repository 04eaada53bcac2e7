// Arena-backed rune trie
//
// Nodes live in a flat Vec and refer to their children by index. Removed
// nodes go on a free list and are reused by later inserts.

use hashbrown::HashMap;

/// Index of a node within a [`Trie`] arena.
pub type NodeId = usize;

/// Index of an entry within the owning index's entry table.
pub type EntryId = usize;

/// The root node is always at index 0 and is never freed.
pub const ROOT: NodeId = 0;

#[derive(Debug, Clone, Default)]
struct Node {
    value: Option<EntryId>,
    children: HashMap<char, NodeId>,
}

impl Node {
    fn is_vacant(&self) -> bool {
        self.value.is_none() && self.children.is_empty()
    }
}

#[derive(Debug, Clone)]
pub struct Trie {
    nodes: Vec<Node>,
    free: Vec<NodeId>,
}

impl Default for Trie {
    fn default() -> Self {
        Self::new()
    }
}

impl Trie {
    pub fn new() -> Self {
        Self {
            nodes: vec![Node::default()],
            free: Vec::new(),
        }
    }

    /// Child of `node` along rune `c`.
    #[inline]
    pub fn child(&self, node: NodeId, c: char) -> Option<NodeId> {
        self.nodes.get(node)?.children.get(&c).copied()
    }

    /// Value stored at `node`.
    #[inline]
    pub fn value(&self, node: NodeId) -> Option<EntryId> {
        self.nodes.get(node)?.value
    }

    /// Follow `key` from `from`. Returns `None` as soon as a rune has no child.
    pub fn walk<I>(&self, from: NodeId, key: I) -> Option<NodeId>
    where
        I: IntoIterator<Item = char>,
    {
        key.into_iter().try_fold(from, |node, c| self.child(node, c))
    }

    /// Value stored at the end of `key`, starting at the root.
    pub fn get<I>(&self, key: I) -> Option<EntryId>
    where
        I: IntoIterator<Item = char>,
    {
        self.walk(ROOT, key).and_then(|node| self.value(node))
    }

    /// Store `id` at the end of `key`, creating nodes as needed. Returns the
    /// previous value at that node.
    pub fn insert<I>(&mut self, key: I, id: EntryId) -> Option<EntryId>
    where
        I: IntoIterator<Item = char>,
    {
        let mut node = ROOT;
        for c in key {
            node = match self.child(node, c) {
                Some(next) => next,
                None => {
                    let next = self.alloc();
                    self.nodes[node].children.insert(c, next);
                    next
                }
            };
        }
        self.nodes[node].value.replace(id)
    }

    /// Clear the value at the end of `key` if it equals `id`, then prune
    /// nodes left with neither value nor children. Returns whether the value
    /// was cleared.
    pub fn remove<I>(&mut self, key: I, id: EntryId) -> bool
    where
        I: IntoIterator<Item = char>,
    {
        let mut path: Vec<(NodeId, char)> = Vec::new();
        let mut node = ROOT;
        for c in key {
            match self.child(node, c) {
                Some(next) => {
                    path.push((node, c));
                    node = next;
                }
                None => return false,
            }
        }
        if self.nodes[node].value != Some(id) {
            return false;
        }
        self.nodes[node].value = None;

        while let Some((parent, c)) = path.pop() {
            if !self.nodes[node].is_vacant() {
                break;
            }
            self.nodes[parent].children.remove(&c);
            self.release(node);
            node = parent;
        }
        true
    }

    /// Number of live nodes, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len() - self.free.len()
    }

    fn alloc(&mut self) -> NodeId {
        match self.free.pop() {
            Some(id) => id,
            None => {
                self.nodes.push(Node::default());
                self.nodes.len() - 1
            }
        }
    }

    fn release(&mut self, node: NodeId) {
        self.nodes[node] = Node::default();
        self.free.push(node);
    }
}
