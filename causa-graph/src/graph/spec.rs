//! Conversion between [`CausalGraph`] and its data description.

use causa_core::errors::CausaResult;
use causa_core::models::{EdgeRole, EdgeSpec, GraphSpec};

use super::causal_graph::CausalGraph;

impl CausalGraph {
    /// Build a graph from a validated description. Names become node names.
    pub fn from_spec(spec: &GraphSpec) -> CausaResult<Self> {
        spec.validate()?;

        let mut graph = CausalGraph::new();
        for name in &spec.nodes {
            graph.add_node(name.as_str());
        }
        for edge in &spec.edges {
            // validate() guarantees both names resolve.
            let (Some(from), Some(to)) = (graph.node_by_name(&edge.from), graph.node_by_name(&edge.to))
            else {
                continue;
            };
            match edge.parsed_role()? {
                EdgeRole::Child => graph.add_child(from, to)?,
                EdgeRole::Parent => graph.add_parent(from, to)?,
                EdgeRole::Undirected => graph.add_undirected(from, to)?,
            };
        }
        Ok(graph)
    }

    /// Describe this graph. Each edge is emitted once, from the endpoint added first.
    pub fn to_spec(&self) -> GraphSpec {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (slot, node) in self.nodes().enumerate() {
            for adjacency in node.adjacency() {
                let Ok(neighbor_slot) = self.slot(adjacency.neighbor) else {
                    continue;
                };
                if neighbor_slot < slot {
                    continue;
                }
                edges.push(EdgeSpec {
                    from: node.name().to_string(),
                    to: self.name_of(adjacency.neighbor),
                    role: adjacency.role.as_str().to_string(),
                });
            }
        }
        GraphSpec {
            nodes: self.nodes().map(|n| n.name().to_string()).collect(),
            edges,
        }
    }
}
