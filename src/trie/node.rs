//! Trie vertices.

use ahash::AHashMap;

/// Handle of a node inside a [`Trie`](crate::trie::Trie) arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// The root node of every trie.
    pub const ROOT: NodeId = NodeId(0);

    /// Position of the node in the arena.
    pub fn index(self) -> usize {
        self.0
    }
}

/// A single trie vertex.
///
/// The root has no label. `payload` is `Some` iff an inserted word
/// terminates at this node.
#[derive(Debug, Clone)]
pub struct Node<P> {
    label: Option<char>,
    payload: Option<P>,
    children: AHashMap<char, NodeId>,
}

impl<P> Node<P> {
    pub(crate) fn root() -> Self {
        Node {
            label: None,
            payload: None,
            children: AHashMap::new(),
        }
    }

    pub(crate) fn new(label: char) -> Self {
        Node {
            label: Some(label),
            payload: None,
            children: AHashMap::new(),
        }
    }

    /// The character on the edge leading to this node.
    pub fn label(&self) -> Option<char> {
        self.label
    }

    /// The payload of the word ending here, if any.
    pub fn payload(&self) -> Option<&P> {
        self.payload.as_ref()
    }

    /// Whether an inserted word ends at this node.
    pub fn is_terminal(&self) -> bool {
        self.payload.is_some()
    }

    /// Follow the edge labelled `ch`.
    pub fn child(&self, ch: char) -> Option<NodeId> {
        self.children.get(&ch).copied()
    }

    /// Outgoing edges in unspecified order.
    pub fn children(&self) -> impl Iterator<Item = (char, NodeId)> + '_ {
        self.children.iter().map(|(&ch, &id)| (ch, id))
    }

    /// Outgoing edges ordered by label.
    pub fn sorted_children(&self) -> Vec<(char, NodeId)> {
        let mut children: Vec<(char, NodeId)> = self.children().collect();
        children.sort_unstable_by_key(|&(ch, _)| ch);
        children
    }

    pub fn child_count(&self) -> usize {
        self.children.len()
    }

    pub(crate) fn add_child(&mut self, ch: char, id: NodeId) {
        self.children.insert(ch, id);
    }

    /// Replace the payload, returning the previous one.
    pub(crate) fn set_payload(&mut self, payload: P) -> Option<P> {
        self.payload.replace(payload)
    }
}
