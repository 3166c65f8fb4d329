//! Paths: simple walks over a [`CausalGraph`].
//!
//! A path stores only its own copy of the node id sequence. Edge directions
//! are read from the graph every time they are needed; the shared borrow of
//! the graph keeps it from changing while the path is alive.

mod blocking;
mod classify;

use std::cmp::Ordering;
use std::collections::HashSet;
use std::hash::{Hash, Hasher};

use causa_core::errors::{CausaResult, CausalError};
use causa_core::models::{EdgeType, NodeId};

use crate::graph::CausalGraph;

/// A simple walk through a causal graph.
#[derive(Clone)]
pub struct Path<'g> {
    graph: &'g CausalGraph,
    nodes: Vec<NodeId>,
}

impl<'g> Path<'g> {
    /// Build a path from consecutive-adjacent nodes.
    ///
    /// Fails if `nodes` is empty or repeats a node, if a node is not in
    /// `graph`, or if two consecutive nodes are not adjacent.
    pub fn new(graph: &'g CausalGraph, nodes: &[NodeId]) -> CausaResult<Self> {
        if nodes.is_empty() {
            return Err(CausalError::InvalidArgument {
                reason: "a path needs at least one node".to_string(),
            }
            .into());
        }
        let mut seen = HashSet::with_capacity(nodes.len());
        for &id in nodes {
            graph.node(id)?;
            if !seen.insert(id) {
                return Err(CausalError::InvalidArgument {
                    reason: format!("node {} appears twice in the path", graph.name_of(id)),
                }
                .into());
            }
        }
        for pair in nodes.windows(2) {
            graph.edge_type(pair[0], pair[1])?;
        }
        Ok(Self::from_walk(graph, nodes.to_vec()))
    }

    /// Wrap a walk already known to be simple and adjacent.
    pub(crate) fn from_walk(graph: &'g CausalGraph, nodes: Vec<NodeId>) -> Self {
        Self { graph, nodes }
    }

    pub fn graph(&self) -> &'g CausalGraph {
        self.graph
    }

    pub fn nodes(&self) -> &[NodeId] {
        &self.nodes
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Always false: a path holds at least one node.
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    pub fn first(&self) -> NodeId {
        self.nodes[0]
    }

    pub fn last(&self) -> NodeId {
        self.nodes[self.nodes.len() - 1]
    }

    /// `node1 <edge type> node2`, for any two mutually adjacent nodes of the graph.
    pub fn edge_type(&self, node1: NodeId, node2: NodeId) -> CausaResult<EdgeType> {
        self.graph.edge_type(node1, node2)
    }

    /// Direction of every consecutive edge, in path order.
    pub fn edge_types(&self) -> CausaResult<Vec<EdgeType>> {
        self.nodes
            .windows(2)
            .map(|pair| self.edge_type(pair[0], pair[1]))
            .collect()
    }

    fn position(&self, node: NodeId) -> Option<usize> {
        self.nodes.iter().position(|&n| n == node)
    }

    /// Index of `node` in the path.
    pub fn location_in_path(&self, node: NodeId) -> CausaResult<usize> {
        self.position(node).ok_or_else(|| {
            CausalError::NodeNotFound {
                node: self.graph.name_of(node),
                scope: "path".to_string(),
            }
            .into()
        })
    }

    pub fn contains(&self, node: NodeId) -> bool {
        self.position(node).is_some()
    }

    /// True iff every node in `nodes` is on the path.
    pub fn is_node_in_path(&self, nodes: &[NodeId]) -> bool {
        nodes.iter().all(|&n| self.contains(n))
    }

    /// True iff at least one node in `nodes` is on the path.
    pub fn contains_any(&self, nodes: &[NodeId]) -> bool {
        nodes.iter().any(|&n| self.contains(n))
    }

    /// The same walk in the opposite direction.
    pub fn reverse(&self) -> Self {
        let mut nodes = self.nodes.clone();
        nodes.reverse();
        Self::from_walk(self.graph, nodes)
    }

    /// The inclusive slice between `node1` and `node2`, in this path's order
    /// regardless of argument order.
    pub fn get_subpath(&self, node1: NodeId, node2: NodeId) -> CausaResult<Path<'g>> {
        let a = self.location_in_path(node1)?;
        let b = self.location_in_path(node2)?;
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
        Ok(Self::from_walk(self.graph, self.nodes[lo..=hi].to_vec()))
    }

    /// Node names in path order.
    pub fn names(&self) -> Vec<String> {
        self.nodes.iter().map(|&n| self.graph.name_of(n)).collect()
    }
}

impl PartialEq for Path<'_> {
    /// Reverse-invariant: a walk equals its mirror image.
    fn eq(&self, other: &Self) -> bool {
        self.nodes.len() == other.nodes.len()
            && (self.nodes == other.nodes || self.nodes.iter().eq(other.nodes.iter().rev()))
    }
}

impl Eq for Path<'_> {}

impl Hash for Path<'_> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        // Hash whichever orientation sorts first so mirrored paths collide.
        self.nodes.len().hash(state);
        if self.nodes.iter().cmp(self.nodes.iter().rev()) == Ordering::Greater {
            self.nodes.iter().rev().for_each(|id| id.hash(state));
        } else {
            self.nodes.iter().for_each(|id| id.hash(state));
        }
    }
}

impl std::fmt::Display for Path<'_> {
    /// `n1->n2<-n3-n4`
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (i, &id) in self.nodes.iter().enumerate() {
            f.write_str(&self.graph.name_of(id))?;
            if let Some(&next) = self.nodes.get(i + 1) {
                let relation = self.edge_type(id, next).map_err(|_| std::fmt::Error)?;
                f.write_str(relation.symbol())?;
            }
        }
        Ok(())
    }
}

impl std::fmt::Debug for Path<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Path").field(&self.names()).finish()
    }
}
