//! IdentificationEngine: configured entry point for every graph query.

use tracing::instrument;

use causa_core::config::CausaConfig;
use causa_core::errors::CausaResult;
use causa_core::models::NodeId;
use causa_core::tracing_setup;

use crate::graph::CausalGraph;
use crate::path::Path;

/// Runs path, d-separation and identification queries against a borrowed graph.
#[derive(Debug, Clone, Default)]
pub struct IdentificationEngine {
    config: CausaConfig,
}

impl IdentificationEngine {
    /// Create an engine. Installs the tracing subscriber if the config asks for it.
    pub fn new(config: CausaConfig) -> Self {
        tracing_setup::init_from_config(&config.observability);
        Self { config }
    }

    pub fn config(&self) -> &CausaConfig {
        &self.config
    }

    // --- Paths ---

    #[instrument(skip(self, graph))]
    pub fn get_paths<'g>(
        &self,
        graph: &'g CausalGraph,
        start: NodeId,
        end: NodeId,
    ) -> CausaResult<Vec<Path<'g>>> {
        graph.get_paths(start, end)
    }

    // --- d-separation ---

    #[instrument(skip(self, graph))]
    pub fn is_d_connected(&self, graph: &CausalGraph, node1: NodeId, node2: NodeId) -> CausaResult<bool> {
        graph.is_d_connected(node1, node2)
    }

    #[instrument(skip(self, graph))]
    pub fn is_conditionally_d_connected(
        &self,
        graph: &CausalGraph,
        node1: NodeId,
        node2: NodeId,
        conditioned_on: &[NodeId],
    ) -> CausaResult<bool> {
        graph.is_conditionally_d_connected(node1, node2, conditioned_on)
    }

    // --- Identification ---

    #[instrument(skip(self, graph))]
    pub fn is_backdoor_criterion_satisfied(
        &self,
        graph: &CausalGraph,
        treatment: NodeId,
        outcome: NodeId,
        conditioned_on: &[NodeId],
    ) -> CausaResult<bool> {
        graph.is_backdoor_criterion_satisfied(treatment, outcome, conditioned_on)
    }

    #[instrument(skip(self, graph))]
    pub fn is_frontdoor_criterion_satisfied(
        &self,
        graph: &CausalGraph,
        treatment: NodeId,
        outcome: NodeId,
        conditioned_on: &[NodeId],
    ) -> CausaResult<bool> {
        graph.is_frontdoor_criterion_satisfied(treatment, outcome, conditioned_on)
    }

    // --- Adjustment search ---

    #[instrument(skip(self, graph))]
    pub fn find_adjustment_sets(
        &self,
        graph: &CausalGraph,
        treatment: NodeId,
        outcome: NodeId,
        candidates: &[NodeId],
    ) -> CausaResult<Vec<Vec<NodeId>>> {
        graph.find_backdoor_adjustment_sets(treatment, outcome, candidates, &self.config.adjustment)
    }

    #[instrument(skip(self, graph))]
    pub fn find_minimal_adjustment_sets(
        &self,
        graph: &CausalGraph,
        treatment: NodeId,
        outcome: NodeId,
        candidates: &[NodeId],
    ) -> CausaResult<Vec<Vec<NodeId>>> {
        graph.find_minimal_backdoor_adjustment_sets(
            treatment,
            outcome,
            candidates,
            &self.config.adjustment,
        )
    }
}
