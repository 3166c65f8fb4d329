use causa_core::errors::CausaResult;
use causa_core::models::NodeId;

use super::require_conditioning;
use crate::graph::CausalGraph;

impl CausalGraph {
    /// True iff at least one path between the nodes has no collider.
    /// d-connected nodes may be statistically dependent.
    pub fn is_d_connected(&self, node1: NodeId, node2: NodeId) -> CausaResult<bool> {
        for path in self.get_paths(node1, node2)? {
            if path.is_unblocked(node1, node2)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn is_d_separated(&self, node1: NodeId, node2: NodeId) -> CausaResult<bool> {
        Ok(!self.is_d_connected(node1, node2)?)
    }

    /// True iff at least one path stays unblocked given `conditioned_on`.
    pub fn is_conditionally_d_connected(
        &self,
        node1: NodeId,
        node2: NodeId,
        conditioned_on: &[NodeId],
    ) -> CausaResult<bool> {
        require_conditioning(conditioned_on)?;
        for path in self.get_paths(node1, node2)? {
            if path.is_conditionally_unblocked(node1, node2, conditioned_on)? {
                return Ok(true);
            }
        }
        Ok(false)
    }

    pub fn is_conditionally_d_separated(
        &self,
        node1: NodeId,
        node2: NodeId,
        conditioned_on: &[NodeId],
    ) -> CausaResult<bool> {
        Ok(!self.is_conditionally_d_connected(node1, node2, conditioned_on)?)
    }
}
