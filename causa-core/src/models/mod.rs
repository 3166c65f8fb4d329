pub mod edge;
pub mod graph_spec;
pub mod node_id;

pub use edge::{EdgeRole, EdgeType};
pub use graph_spec::{EdgeSpec, GraphSpec};
pub use node_id::NodeId;
