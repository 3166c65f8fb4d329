use tracing::debug;

use causa_core::errors::CausaResult;
use causa_core::models::NodeId;

use super::{require_conditioning, require_endpoints_free};
use crate::graph::CausalGraph;

impl CausalGraph {
    /// Whether the mediators in `conditioned_on` satisfy the frontdoor
    /// criterion for `treatment` on `outcome`:
    ///
    /// 1. every directed path from `treatment` to `outcome` passes through a
    ///    conditioned node;
    /// 2. no conditioned node is reachable from `treatment` over an unblocked
    ///    backdoor path;
    /// 3. every backdoor path from a conditioned node to `outcome` is blocked
    ///    once `treatment` is conditioned on.
    ///
    /// `conditioned_on` must be non-empty and may not contain `treatment` or
    /// `outcome` (`InvalidArgument`).
    ///
    /// Experimental: this has not been checked against the wider literature
    /// beyond the textbook cases in the tests.
    pub fn is_frontdoor_criterion_satisfied(
        &self,
        treatment: NodeId,
        outcome: NodeId,
        conditioned_on: &[NodeId],
    ) -> CausaResult<bool> {
        require_conditioning(conditioned_on)?;
        require_endpoints_free(self, treatment, outcome, conditioned_on)?;

        for path in self.get_paths(treatment, outcome)? {
            if path.is_directed_path(treatment, outcome)? && !path.contains_any(conditioned_on) {
                debug!(%path, "directed path avoids every mediator");
                return Ok(false);
            }
        }

        for &mediator in conditioned_on {
            for path in self.get_paths(treatment, mediator)? {
                if path.is_backdoor_path(treatment, mediator)? && path.is_unblocked(treatment, mediator)? {
                    debug!(%path, "treatment confounded with mediator");
                    return Ok(false);
                }
            }
        }

        for &mediator in conditioned_on {
            for path in self.get_paths(mediator, outcome)? {
                if path.is_backdoor_path(mediator, outcome)?
                    && path.is_conditionally_unblocked(mediator, outcome, &[treatment])?
                {
                    debug!(%path, "mediator confounded with outcome");
                    return Ok(false);
                }
            }
        }

        Ok(true)
    }
}
