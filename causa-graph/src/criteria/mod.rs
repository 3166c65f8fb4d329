//! Graph-level verdicts built from path queries.
//!
//! Every function here enumerates paths afresh; nothing is cached between
//! calls.

mod adjustment;
mod backdoor;
mod d_separation;
mod frontdoor;

use causa_core::errors::{CausaResult, CausalError};
use causa_core::models::NodeId;

use crate::graph::CausalGraph;

fn require_conditioning(conditioned_on: &[NodeId]) -> CausaResult<()> {
    if conditioned_on.is_empty() {
        return Err(CausalError::InvalidArgument {
            reason: "Must condition on at least 1 variable.".to_string(),
        }
        .into());
    }
    Ok(())
}

/// Treatment and outcome cannot be adjusted for: conditioning on an endpoint
/// closes every path through it.
fn require_endpoints_free(
    graph: &CausalGraph,
    treatment: NodeId,
    outcome: NodeId,
    conditioned_on: &[NodeId],
) -> CausaResult<()> {
    if let Some(&endpoint) = conditioned_on
        .iter()
        .find(|&&c| c == treatment || c == outcome)
    {
        return Err(CausalError::InvalidArgument {
            reason: format!(
                "cannot condition on {}, an endpoint of the query",
                graph.name_of(endpoint)
            ),
        }
        .into());
    }
    Ok(())
}
