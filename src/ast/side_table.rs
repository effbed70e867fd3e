use std::collections::HashMap;

use super::ast::{Node, NodeId};

/// Per-node data kept outside the tree.
///
/// Passes never write into nodes; they attach results here instead.
#[derive(Debug, Clone)]
pub struct SideTable<T> {
    entries: HashMap<NodeId, T>,
}

impl<T> Default for SideTable<T> {
    fn default() -> Self {
        SideTable {
            entries: HashMap::new(),
        }
    }
}

impl<T> SideTable<T> {
    pub fn new() -> Self {
        SideTable::default()
    }

    /// Returns the previous annotation, if any.
    pub fn insert(&mut self, node: &Node, value: T) -> Option<T> {
        self.entries.insert(node.id(), value)
    }

    pub fn get(&self, node: &Node) -> Option<&T> {
        self.entries.get(&node.id())
    }

    pub fn get_by_id(&self, id: NodeId) -> Option<&T> {
        self.entries.get(&id)
    }

    pub fn get_mut(&mut self, node: &Node) -> Option<&mut T> {
        self.entries.get_mut(&node.id())
    }

    pub fn remove(&mut self, node: &Node) -> Option<T> {
        self.entries.remove(&node.id())
    }

    pub fn contains(&self, node: &Node) -> bool {
        self.entries.contains_key(&node.id())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&NodeId, &T)> {
        self.entries.iter()
    }
}

/// Child -> parent links for one tree, built in a single pass.
#[derive(Debug, Clone, Default)]
pub struct ParentMap {
    parents: SideTable<NodeId>,
}

impl ParentMap {
    pub fn build(root: &Node) -> Self {
        let mut map = ParentMap::default();
        map.record(root);
        map
    }

    pub fn build_all<'a>(roots: impl IntoIterator<Item = &'a Node>) -> Self {
        let mut map = ParentMap::default();
        for root in roots {
            map.record(root);
        }
        map
    }

    fn record(&mut self, node: &Node) {
        for child in node.children() {
            self.parents.insert(child, node.id());
            self.record(child);
        }
    }

    /// Parent of `node`, or `None` for a root.
    pub fn parent_of(&self, node: &Node) -> Option<NodeId> {
        self.parents.get(node).copied()
    }

    pub fn len(&self) -> usize {
        self.parents.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parents.is_empty()
    }
}
