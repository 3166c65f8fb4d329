//! Structural queries over the directed part of the graph, via petgraph.
//! Undirected edges are ignored here.

use std::collections::HashMap;

use petgraph::algo::tarjan_scc;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::{Dfs, Reversed};

use causa_core::errors::CausaResult;
use causa_core::models::NodeId;

use super::causal_graph::CausalGraph;

/// Directed edges of a [`CausalGraph`] as a petgraph `DiGraph` (parent → child).
pub struct DirectedView {
    pub graph: DiGraph<NodeId, ()>,
    pub index: HashMap<NodeId, NodeIndex>,
}

impl DirectedView {
    pub fn new(source: &CausalGraph) -> Self {
        let mut graph = DiGraph::with_capacity(source.len(), source.edge_count());
        let mut index = HashMap::with_capacity(source.len());
        for id in source.node_ids() {
            index.insert(id, graph.add_node(id));
        }
        for (parent, child) in source.directed_edges() {
            if let (Some(&p), Some(&c)) = (index.get(&parent), index.get(&child)) {
                graph.add_edge(p, c, ());
            }
        }
        Self { graph, index }
    }

    fn reachable_from(&self, start: NodeIndex, backwards: bool) -> Vec<NodeId> {
        let mut found = Vec::new();
        if backwards {
            let reversed = Reversed(&self.graph);
            let mut dfs = Dfs::new(reversed, start);
            while let Some(idx) = dfs.next(reversed) {
                if idx != start {
                    found.push(self.graph[idx]);
                }
            }
        } else {
            let mut dfs = Dfs::new(&self.graph, start);
            while let Some(idx) = dfs.next(&self.graph) {
                if idx != start {
                    found.push(self.graph[idx]);
                }
            }
        }
        found
    }
}

impl CausalGraph {
    /// Nodes reachable from `id` along directed edges, excluding `id`.
    pub fn descendants(&self, id: NodeId) -> CausaResult<Vec<NodeId>> {
        self.node(id)?;
        let view = DirectedView::new(self);
        Ok(view.reachable_from(view.index[&id], false))
    }

    /// Nodes that reach `id` along directed edges, excluding `id`.
    pub fn ancestors(&self, id: NodeId) -> CausaResult<Vec<NodeId>> {
        self.node(id)?;
        let view = DirectedView::new(self);
        Ok(view.reachable_from(view.index[&id], true))
    }

    /// Directed cycles: strongly connected components with more than one node.
    pub fn find_cycles(&self) -> Vec<Vec<NodeId>> {
        let view = DirectedView::new(self);
        tarjan_scc(&view.graph)
            .into_iter()
            .filter(|scc| scc.len() > 1)
            .map(|scc| scc.into_iter().map(|idx| view.graph[idx]).collect())
            .collect()
    }

    pub fn is_acyclic(&self) -> bool {
        self.find_cycles().is_empty()
    }
}
