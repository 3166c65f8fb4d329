//! Path kinds used by the identification criteria.

use causa_core::errors::CausaResult;
use causa_core::models::{EdgeType, NodeId};

use super::Path;

impl Path<'_> {
    /// True iff both nodes are on the path and the first step from
    /// `treatment` toward `outcome` is an arrow into `treatment`.
    pub fn is_backdoor_path(&self, treatment: NodeId, outcome: NodeId) -> CausaResult<bool> {
        let (Some(t), Some(o)) = (self.position(treatment), self.position(outcome)) else {
            return Ok(false);
        };
        if t == o {
            return Ok(false);
        }
        let next = if o > t { t + 1 } else { t - 1 };
        Ok(self.edge_type(treatment, self.nodes[next])? == EdgeType::Left)
    }

    /// True iff both nodes are on the path and every edge walking from
    /// `node1` to `node2` points forward (`->`).
    pub fn is_directed_path(&self, node1: NodeId, node2: NodeId) -> CausaResult<bool> {
        let (Some(from), Some(to)) = (self.position(node1), self.position(node2)) else {
            return Ok(false);
        };
        let steps: Vec<(usize, usize)> = if from <= to {
            (from..to).map(|i| (i, i + 1)).collect()
        } else {
            (to + 1..=from).rev().map(|i| (i, i - 1)).collect()
        };
        for (a, b) in steps {
            if self.edge_type(self.nodes[a], self.nodes[b])? != EdgeType::Right {
                return Ok(false);
            }
        }
        Ok(true)
    }
}
