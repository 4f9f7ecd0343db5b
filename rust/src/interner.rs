//! Task ID interning for arena-indexed graph traversal.
//!
//! Maps borrowed task ID strings to dense integer node IDs so the dependency
//! graph can be stored as plain vectors indexed by node.

use rustc_hash::FxHashMap;

/// Interned node ID (u32 for compact storage and fast hashing).
pub type NodeId = u32;

/// Interner mapping task IDs to node IDs in first-occurrence order.
#[derive(Debug, Clone)]
pub struct TaskIdInterner<'a> {
    to_node: FxHashMap<&'a str, NodeId>,
    from_node: Vec<&'a str>,
}

impl<'a> TaskIdInterner<'a> {
    /// Create a new interner with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            to_node: FxHashMap::with_capacity_and_hasher(capacity, Default::default()),
            from_node: Vec::with_capacity(capacity),
        }
    }

    /// Intern an ID, returning its node. Repeated IDs return the first node.
    pub fn intern(&mut self, id: &'a str) -> NodeId {
        if let Some(&node) = self.to_node.get(id) {
            return node;
        }
        let node = self.from_node.len() as NodeId;
        self.from_node.push(id);
        self.to_node.insert(id, node);
        node
    }

    /// Get the node for an ID, if it was interned.
    #[inline]
    pub fn get(&self, id: &str) -> Option<NodeId> {
        self.to_node.get(id).copied()
    }

    /// Get the ID for a node.
    #[inline]
    pub fn resolve(&self, node: NodeId) -> &'a str {
        self.from_node[node as usize]
    }

    /// Number of distinct IDs.
    pub fn len(&self) -> usize {
        self.from_node.len()
    }

    /// Check if empty.
    pub fn is_empty(&self) -> bool {
        self.from_node.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_intern_and_resolve() {
        let mut interner = TaskIdInterner::with_capacity(4);

        let a = interner.intern("write_tests");
        let b = interner.intern("fix_login");
        let again = interner.intern("write_tests");

        assert_eq!(a, again);
        assert_eq!((a, b), (0, 1)); // first-occurrence order
        assert_eq!(interner.resolve(b), "fix_login");
        assert_eq!(interner.get("fix_login"), Some(b));
        assert_eq!(interner.get("nonexistent"), None);
        assert_eq!(interner.len(), 2);
    }

    #[test]
    fn test_empty_id_is_a_valid_key() {
        let mut interner = TaskIdInterner::with_capacity(1);
        let node = interner.intern("");
        assert_eq!(interner.get(""), Some(node));
        assert!(!interner.is_empty());
    }
}
