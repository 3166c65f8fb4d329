use tracing::debug;

use causa_core::errors::CausaResult;
use causa_core::models::NodeId;

use super::{require_conditioning, require_endpoints_free};
use crate::graph::CausalGraph;
use crate::path::Path;

impl CausalGraph {
    /// Backdoor paths between `treatment` and `outcome`.
    pub fn get_backdoor_paths(&self, treatment: NodeId, outcome: NodeId) -> CausaResult<Vec<Path<'_>>> {
        let mut backdoor = Vec::new();
        for path in self.get_paths(treatment, outcome)? {
            if path.is_backdoor_path(treatment, outcome)? {
                backdoor.push(path);
            }
        }
        Ok(backdoor)
    }

    /// Whether adjusting for `conditioned_on` identifies the effect of
    /// `treatment` on `outcome`:
    ///
    /// 1. no conditioned node is a child of `treatment`;
    /// 2. every backdoor path is blocked given `conditioned_on`.
    ///
    /// Holds vacuously when there are no backdoor paths, but only for a
    /// non-empty `conditioned_on`: an empty set is rejected with
    /// `InvalidArgument`. To ask whether no adjustment is needed at all, check
    /// that [`CausalGraph::get_backdoor_paths`] is empty.
    ///
    /// `conditioned_on` may not contain `treatment` or `outcome`
    /// (`InvalidArgument`).
    pub fn is_backdoor_criterion_satisfied(
        &self,
        treatment: NodeId,
        outcome: NodeId,
        conditioned_on: &[NodeId],
    ) -> CausaResult<bool> {
        require_conditioning(conditioned_on)?;
        require_endpoints_free(self, treatment, outcome, conditioned_on)?;

        let treatment_node = self.node(treatment)?;
        if let Some(&child) = conditioned_on.iter().find(|&&c| treatment_node.has_child(c)) {
            debug!(child = %self.name_of(child), "conditioning set holds a child of the treatment");
            return Ok(false);
        }

        let backdoor = self.get_backdoor_paths(treatment, outcome)?;
        for path in &backdoor {
            if path.is_conditionally_unblocked(treatment, outcome, conditioned_on)? {
                debug!(%path, "backdoor path left open");
                return Ok(false);
            }
        }
        debug!(backdoor_paths = backdoor.len(), "backdoor criterion satisfied");
        Ok(true)
    }
}
