//! # causa-graph
//!
//! The d-separation engine. Enumerates every simple path between two
//! variables of a causal graph, decides which paths are blocked under a
//! conditioning set, and derives the backdoor and frontdoor criteria.

pub mod combinatorics;
mod criteria;
pub mod engine;
mod enumeration;
pub mod graph;
pub mod node;
pub mod path;

pub use combinatorics::{get_combinations, get_combinations_up_to};
pub use engine::IdentificationEngine;
pub use graph::CausalGraph;
pub use node::{Adjacency, Node};
pub use path::Path;
