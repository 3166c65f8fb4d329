//! Colliders and path blocking.

use tracing::trace;

use causa_core::errors::{CausaResult, CausalError};
use causa_core::models::{EdgeRole, EdgeType, NodeId};

use super::Path;

impl Path<'_> {
    /// True iff `node` is an interior node with both path edges pointing
    /// into it: `predecessor -> node <- successor`.
    pub fn is_collider(&self, node: NodeId) -> CausaResult<bool> {
        let idx = self.location_in_path(node)?;
        self.is_collider_at(idx)
    }

    fn is_collider_at(&self, idx: usize) -> CausaResult<bool> {
        if idx == 0 || idx + 1 >= self.nodes.len() {
            return Ok(false);
        }
        let node = self.nodes[idx];
        Ok(self.edge_type(self.nodes[idx - 1], node)? == EdgeType::Right
            && self.edge_type(node, self.nodes[idx + 1])? == EdgeType::Left)
    }

    /// Every collider on the path, in path order.
    pub fn colliders(&self) -> CausaResult<Vec<NodeId>> {
        let mut found = Vec::new();
        for idx in 1..self.nodes.len().saturating_sub(1) {
            if self.is_collider_at(idx)? {
                found.push(self.nodes[idx]);
            }
        }
        Ok(found)
    }

    pub fn has_collider(&self) -> CausaResult<bool> {
        for idx in 1..self.nodes.len().saturating_sub(1) {
            if self.is_collider_at(idx)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    /// True iff both nodes are on the path and no collider lies between them.
    pub fn is_unblocked(&self, node1: NodeId, node2: NodeId) -> CausaResult<bool> {
        if !self.is_node_in_path(&[node1, node2]) {
            return Ok(false);
        }
        Ok(!self.get_subpath(node1, node2)?.has_collider()?)
    }

    /// Whether the stretch between `node1` and `node2` stays open after
    /// conditioning on `conditioned_on`.
    ///
    /// - a conditioned node on the stretch that is not a collider blocks it,
    ///   endpoints included;
    /// - with no collider, the stretch is open;
    /// - otherwise it is open iff some collider is opened, either because it
    ///   is conditioned on itself or because one of its children in the full
    ///   graph is. A collider that is conditioned on together with one of its
    ///   children is simply opened; neither membership blocks.
    pub fn is_conditionally_unblocked(
        &self,
        node1: NodeId,
        node2: NodeId,
        conditioned_on: &[NodeId],
    ) -> CausaResult<bool> {
        if conditioned_on.is_empty() {
            return Err(CausalError::InvalidArgument {
                reason: "Must condition on at least 1 variable.".to_string(),
            }
            .into());
        }

        let subpath = self.get_subpath(node1, node2)?;
        let colliders = subpath.colliders()?;

        if let Some(&blocker) = conditioned_on
            .iter()
            .find(|&&c| subpath.contains(c) && !colliders.contains(&c))
        {
            trace!(path = %subpath, blocker = %self.graph.name_of(blocker), "blocked by conditioned node");
            return Ok(false);
        }

        if colliders.is_empty() {
            return Ok(true);
        }

        for &collider in &colliders {
            if conditioned_on.contains(&collider) {
                trace!(path = %subpath, collider = %self.graph.name_of(collider), "collider conditioned on");
                return Ok(true);
            }
            let node = self.graph.node(collider)?;
            if node
                .neighbors_with_role(EdgeRole::Child)
                .any(|child| conditioned_on.contains(&child))
            {
                trace!(path = %subpath, collider = %node, "collider opened by a conditioned child");
                return Ok(true);
            }
        }

        trace!(path = %subpath, "every collider stays closed");
        Ok(false)
    }
}
