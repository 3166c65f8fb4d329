//! Data description of a causal graph, for fixtures and graphs authored as JSON/TOML.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use super::edge::EdgeRole;
use crate::errors::{CausaResult, CausalError};

/// One edge. `role` is the role of `to`, seen from `from`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EdgeSpec {
    pub from: String,
    pub to: String,
    #[serde(default = "default_role")]
    pub role: String,
}

fn default_role() -> String {
    EdgeRole::Child.as_str().to_string()
}

impl EdgeSpec {
    /// Shorthand for `from -> to`.
    pub fn directed(from: &str, to: &str) -> Self {
        Self {
            from: from.to_string(),
            to: to.to_string(),
            role: default_role(),
        }
    }

    pub fn parsed_role(&self) -> CausaResult<EdgeRole> {
        EdgeRole::from_str_name(&self.role)
    }
}

/// A graph described by unique node names and role-tagged edges.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphSpec {
    pub nodes: Vec<String>,
    #[serde(default)]
    pub edges: Vec<EdgeSpec>,
}

impl GraphSpec {
    pub fn from_json(input: &str) -> CausaResult<Self> {
        let spec: Self = serde_json::from_str(input)?;
        spec.validate()?;
        Ok(spec)
    }

    /// Names must be unique, edges must reference declared names and carry known roles.
    pub fn validate(&self) -> CausaResult<()> {
        let mut seen = HashSet::with_capacity(self.nodes.len());
        for name in &self.nodes {
            if !seen.insert(name.as_str()) {
                return Err(CausalError::InvalidArgument {
                    reason: format!("duplicate node name {name}"),
                }
                .into());
            }
        }
        for edge in &self.edges {
            for end in [&edge.from, &edge.to] {
                if !seen.contains(end.as_str()) {
                    return Err(CausalError::NodeNotFound {
                        node: end.clone(),
                        scope: "graph description".to_string(),
                    }
                    .into());
                }
            }
            edge.parsed_role()?;
        }
        Ok(())
    }
}
