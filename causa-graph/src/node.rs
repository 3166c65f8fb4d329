//! A variable in the causal graph and its role-tagged adjacency list.

use serde::Serialize;

use causa_core::models::{EdgeRole, NodeId};

/// One entry of a node's adjacency list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Adjacency {
    pub neighbor: NodeId,
    /// Role of `neighbor` seen from the owning node.
    pub role: EdgeRole,
}

/// A graph variable.
///
/// Equality is identity: two nodes are equal iff their ids match.
/// The adjacency list can only grow through [`crate::CausalGraph`], which keeps
/// both sides of every edge in sync.
#[derive(Debug, Clone, Serialize)]
pub struct Node {
    id: NodeId,
    name: String,
    adjacency: Vec<Adjacency>,
}

impl Node {
    pub(crate) fn new(name: impl Into<String>) -> Self {
        Self {
            id: NodeId::next(),
            name: name.into(),
            adjacency: Vec::new(),
        }
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Neighbours in insertion order.
    pub fn adjacency(&self) -> &[Adjacency] {
        &self.adjacency
    }

    pub fn degree(&self) -> usize {
        self.adjacency.len()
    }

    /// True iff `other` appears in this node's adjacency list.
    pub fn already_adjacent_to(&self, other: NodeId) -> bool {
        self.adjacency.iter().any(|a| a.neighbor == other)
    }

    /// Role of `other` seen from this node, if adjacent.
    pub fn role_of(&self, other: NodeId) -> Option<EdgeRole> {
        self.adjacency
            .iter()
            .find(|a| a.neighbor == other)
            .map(|a| a.role)
    }

    pub fn has_child(&self, other: NodeId) -> bool {
        self.role_of(other) == Some(EdgeRole::Child)
    }

    pub fn has_parent(&self, other: NodeId) -> bool {
        self.role_of(other) == Some(EdgeRole::Parent)
    }

    pub fn get_children(&self) -> Vec<NodeId> {
        self.neighbors_with_role(EdgeRole::Child).collect()
    }

    pub fn get_parents(&self) -> Vec<NodeId> {
        self.neighbors_with_role(EdgeRole::Parent).collect()
    }

    pub fn neighbors(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency.iter().map(|a| a.neighbor)
    }

    pub(crate) fn neighbors_with_role(&self, role: EdgeRole) -> impl Iterator<Item = NodeId> + '_ {
        self.adjacency
            .iter()
            .filter(move |a| a.role == role)
            .map(|a| a.neighbor)
    }

    /// Append `neighbor` unless already present. Returns whether it was appended.
    pub(crate) fn push_adjacent(&mut self, neighbor: NodeId, role: EdgeRole) -> bool {
        if self.already_adjacent_to(neighbor) {
            return false;
        }
        self.adjacency.push(Adjacency { neighbor, role });
        true
    }
}

impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for Node {}

impl std::hash::Hash for Node {
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

impl std::fmt::Display for Node {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_adjacent_is_idempotent() {
        let mut a = Node::new("a");
        let b = NodeId::next();
        assert!(a.push_adjacent(b, EdgeRole::Child));
        assert!(!a.push_adjacent(b, EdgeRole::Parent));
        assert_eq!(a.degree(), 1);
        assert_eq!(a.role_of(b), Some(EdgeRole::Child));
    }

    #[test]
    fn equal_names_are_distinct_nodes() {
        let a1 = Node::new("a");
        let a2 = Node::new("a");
        assert_ne!(a1, a2);
        assert_eq!(a1, a1.clone());
    }
}
