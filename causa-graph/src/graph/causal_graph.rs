//! Arena owning every node of one reasoning session.

use std::collections::HashMap;

use tracing::debug;

use causa_core::errors::{CausaResult, CausalError};
use causa_core::models::{EdgeRole, EdgeType, NodeId};

use crate::node::Node;

/// A causal graph: nodes in insertion order plus an id → slot index.
///
/// Edge insertion goes through [`CausalGraph::add_child`],
/// [`CausalGraph::add_parent`] and [`CausalGraph::add_undirected`] only, which
/// record the edge on both endpoints.
#[derive(Debug, Clone, Default)]
pub struct CausalGraph {
    nodes: Vec<Node>,
    node_index: HashMap<NodeId, usize>,
}

impl CausalGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a variable. Names need not be unique.
    pub fn add_node(&mut self, name: impl Into<String>) -> NodeId {
        let node = Node::new(name);
        let id = node.id();
        self.node_index.insert(id, self.nodes.len());
        self.nodes.push(node);
        id
    }

    /// Record `parent -> child`. Returns whether an edge was inserted.
    pub fn add_child(&mut self, parent: NodeId, child: NodeId) -> CausaResult<bool> {
        self.insert_edge(parent, child, EdgeRole::Child)
    }

    /// Record `parent -> child`, from the child's side.
    pub fn add_parent(&mut self, child: NodeId, parent: NodeId) -> CausaResult<bool> {
        self.insert_edge(child, parent, EdgeRole::Parent)
    }

    /// Record `a - b`.
    pub fn add_undirected(&mut self, a: NodeId, b: NodeId) -> CausaResult<bool> {
        self.insert_edge(a, b, EdgeRole::Undirected)
    }

    fn insert_edge(&mut self, from: NodeId, to: NodeId, role: EdgeRole) -> CausaResult<bool> {
        let from_slot = self.slot(from)?;
        let to_slot = self.slot(to)?;

        if from_slot == to_slot {
            debug!(node = %self.nodes[from_slot], "ignoring self edge");
            return Ok(false);
        }
        if self.nodes[from_slot].already_adjacent_to(to) {
            debug!(
                from = %self.nodes[from_slot],
                to = %self.nodes[to_slot],
                %role,
                "nodes already adjacent; edge not added"
            );
            return Ok(false);
        }

        self.nodes[from_slot].push_adjacent(to, role);
        self.nodes[to_slot].push_adjacent(from, role.inverse());
        Ok(true)
    }

    pub(super) fn slot(&self, id: NodeId) -> CausaResult<usize> {
        self.node_index.get(&id).copied().ok_or_else(|| {
            CausalError::NodeNotFound {
                node: id.to_string(),
                scope: "graph".to_string(),
            }
            .into()
        })
    }

    pub fn node(&self, id: NodeId) -> CausaResult<&Node> {
        Ok(&self.nodes[self.slot(id)?])
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node_index.contains_key(&id)
    }

    /// First node with the given name, in insertion order.
    pub fn node_by_name(&self, name: &str) -> Option<NodeId> {
        self.nodes.iter().find(|n| n.name() == name).map(Node::id)
    }

    /// Display name for `id`, or the id itself if unknown.
    pub fn name_of(&self, id: NodeId) -> String {
        match self.node(id) {
            Ok(node) => node.name().to_string(),
            Err(_) => id.to_string(),
        }
    }

    pub fn nodes(&self) -> impl Iterator<Item = &Node> {
        self.nodes.iter()
    }

    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes.iter().map(Node::id)
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of edges, counting each mirrored pair once.
    pub fn edge_count(&self) -> usize {
        self.nodes.iter().map(Node::degree).sum::<usize>() / 2
    }

    pub fn get_children(&self, id: NodeId) -> CausaResult<Vec<NodeId>> {
        Ok(self.node(id)?.get_children())
    }

    pub fn get_parents(&self, id: NodeId) -> CausaResult<Vec<NodeId>> {
        Ok(self.node(id)?.get_parents())
    }

    pub fn has_child(&self, parent: NodeId, child: NodeId) -> CausaResult<bool> {
        Ok(self.node(parent)?.has_child(child))
    }

    /// Direction of the edge between two mutually adjacent nodes, read `node1 ? node2`.
    pub fn edge_type(&self, node1: NodeId, node2: NodeId) -> CausaResult<EdgeType> {
        let first = self.node(node1)?;
        let second = self.node(node2)?;

        match (first.role_of(node2), second.already_adjacent_to(node1)) {
            (Some(role), true) => Ok(role.into()),
            _ => Err(CausalError::NotAdjacent {
                from: first.name().to_string(),
                to: second.name().to_string(),
            }
            .into()),
        }
    }

    /// Every directed edge as `(parent, child)`, in node then adjacency order.
    pub fn directed_edges(&self) -> impl Iterator<Item = (NodeId, NodeId)> + '_ {
        self.nodes.iter().flat_map(|node| {
            node.neighbors_with_role(EdgeRole::Child)
                .map(move |child| (node.id(), child))
        })
    }
}
