//! The node arena, its data description, and structural analysis.

pub mod analysis;
pub mod causal_graph;
mod spec;

pub use analysis::DirectedView;
pub use causal_graph::CausalGraph;
