//! Search over candidate adjustment sets.

use std::collections::HashSet;

use tracing::debug;

use causa_core::config::AdjustmentConfig;
use causa_core::errors::CausaResult;
use causa_core::models::NodeId;

use crate::combinatorics::get_combinations_up_to;
use crate::graph::CausalGraph;

impl CausalGraph {
    /// Every non-empty subset of `candidates` satisfying the backdoor criterion.
    ///
    /// `treatment` and `outcome` are never candidates. With
    /// `exclude_descendants`, neither is any descendant of `treatment`.
    pub fn find_backdoor_adjustment_sets(
        &self,
        treatment: NodeId,
        outcome: NodeId,
        candidates: &[NodeId],
        config: &AdjustmentConfig,
    ) -> CausaResult<Vec<Vec<NodeId>>> {
        let excluded: HashSet<NodeId> = if config.exclude_descendants {
            self.descendants(treatment)?.into_iter().collect()
        } else {
            HashSet::new()
        };

        let mut pool = Vec::with_capacity(candidates.len());
        for &candidate in candidates {
            self.node(candidate)?;
            if candidate != treatment
                && candidate != outcome
                && !excluded.contains(&candidate)
                && !pool.contains(&candidate)
            {
                pool.push(candidate);
            }
        }

        let mut sets = Vec::new();
        for set in get_combinations_up_to(&pool, config.max_set_size) {
            if self.is_backdoor_criterion_satisfied(treatment, outcome, &set)? {
                sets.push(set);
            }
        }
        debug!(candidates = pool.len(), found = sets.len(), "adjustment search finished");
        Ok(sets)
    }

    /// The satisfying sets with no satisfying strict subset.
    pub fn find_minimal_backdoor_adjustment_sets(
        &self,
        treatment: NodeId,
        outcome: NodeId,
        candidates: &[NodeId],
        config: &AdjustmentConfig,
    ) -> CausaResult<Vec<Vec<NodeId>>> {
        let sets = self.find_backdoor_adjustment_sets(treatment, outcome, candidates, config)?;
        let minimal = sets
            .iter()
            .filter(|set| {
                !sets.iter().any(|other| {
                    other.len() < set.len() && other.iter().all(|n| set.contains(n))
                })
            })
            .cloned()
            .collect();
        Ok(minimal)
    }
}
