/// Path and graph query errors.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CausalError {
    #[error("nodes {from} and {to} are not adjacent")]
    NotAdjacent { from: String, to: String },

    #[error("node {node} cannot be found in the {scope}")]
    NodeNotFound { node: String, scope: String },

    #[error("invalid argument: {reason}")]
    InvalidArgument { reason: String },

    #[error("unsupported node relation: {relation}")]
    UnsupportedRelation { relation: String },
}
