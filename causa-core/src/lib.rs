//! # causa-core
//!
//! Foundation crate for causa.
//! Defines node identity, edge roles, graph descriptions, errors, config,
//! and tracing setup. Every other crate in the workspace depends on this.

pub mod config;
pub mod errors;
pub mod models;
pub mod tracing_setup;

// Re-export the most commonly used types at the crate root.
pub use config::CausaConfig;
pub use errors::{CausaError, CausaResult, CausalError};
pub use models::{EdgeRole, EdgeSpec, EdgeType, GraphSpec, NodeId};
