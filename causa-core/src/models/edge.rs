//! Edge roles (stored on nodes) and edge types (observed along paths).

use serde::{Deserialize, Serialize};

use crate::errors::{CausaResult, CausalError};

/// Role of a neighbour, seen from the node that lists it.
///
/// `Child` on node A for neighbour B means `A -> B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeRole {
    Parent,
    Child,
    Undirected,
}

impl EdgeRole {
    pub const ALL: [EdgeRole; 3] = [Self::Parent, Self::Child, Self::Undirected];

    /// The role the neighbour records for the owning node.
    pub fn inverse(self) -> Self {
        match self {
            Self::Parent => Self::Child,
            Self::Child => Self::Parent,
            Self::Undirected => Self::Undirected,
        }
    }

    /// Parse from string (matching the serde rename).
    pub fn from_str_name(s: &str) -> CausaResult<Self> {
        match s {
            "parent" => Ok(Self::Parent),
            "child" => Ok(Self::Child),
            "undirected" => Ok(Self::Undirected),
            other => Err(CausalError::UnsupportedRelation {
                relation: other.to_string(),
            }
            .into()),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Parent => "parent",
            Self::Child => "child",
            Self::Undirected => "undirected",
        }
    }
}

impl std::fmt::Display for EdgeRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Direction of the edge between two adjacent nodes, read left to right.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EdgeType {
    /// `node1 -> node2`: node2 is a child of node1.
    Right,
    /// `node1 <- node2`: node2 is a parent of node1.
    Left,
    /// `node1 - node2`.
    Undirected,
}

impl EdgeType {
    pub fn symbol(&self) -> &'static str {
        match self {
            Self::Right => "->",
            Self::Left => "<-",
            Self::Undirected => "-",
        }
    }

    /// The same edge read right to left.
    pub fn reversed(self) -> Self {
        match self {
            Self::Right => Self::Left,
            Self::Left => Self::Right,
            Self::Undirected => Self::Undirected,
        }
    }
}

impl From<EdgeRole> for EdgeType {
    fn from(role: EdgeRole) -> Self {
        match role {
            EdgeRole::Child => Self::Right,
            EdgeRole::Parent => Self::Left,
            EdgeRole::Undirected => Self::Undirected,
        }
    }
}

impl std::fmt::Display for EdgeType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.symbol())
    }
}
