//! Exhaustive simple-path enumeration.
//!
//! Traversal follows adjacency regardless of edge direction; direction only
//! matters later, when a [`Path`] is classified. A node already on the walk
//! being extended is never revisited, so the search terminates on cyclic
//! graphs and every walk it yields is simple.

use std::collections::HashSet;

use tracing::debug;

use causa_core::errors::CausaResult;
use causa_core::models::NodeId;

use crate::graph::CausalGraph;
use crate::path::Path;

impl CausalGraph {
    /// Every simple path between `start` and `end`, in adjacency-list
    /// discovery order. Empty when `start == end`.
    pub fn get_paths(&self, start: NodeId, end: NodeId) -> CausaResult<Vec<Path<'_>>> {
        self.node(start)?;
        self.node(end)?;
        if start == end {
            return Ok(Vec::new());
        }

        let mut walk = vec![start];
        let mut on_walk = HashSet::from([start]);
        let mut found = Vec::new();
        self.extend_walk(end, &mut walk, &mut on_walk, &mut found)?;

        debug!(
            start = %self.name_of(start),
            end = %self.name_of(end),
            paths = found.len(),
            "enumerated paths"
        );
        Ok(found
            .into_iter()
            .map(|nodes| Path::from_walk(self, nodes))
            .collect())
    }

    /// Extend `walk` by every neighbour of its tip not already on it.
    /// `walk` and `on_walk` are restored before returning.
    fn extend_walk(
        &self,
        target: NodeId,
        walk: &mut Vec<NodeId>,
        on_walk: &mut HashSet<NodeId>,
        found: &mut Vec<Vec<NodeId>>,
    ) -> CausaResult<()> {
        let Some(&tip) = walk.last() else {
            return Ok(());
        };

        for neighbor in self.node(tip)?.neighbors() {
            if on_walk.contains(&neighbor) {
                continue;
            }
            walk.push(neighbor);
            if neighbor == target {
                found.push(walk.clone());
            } else {
                on_walk.insert(neighbor);
                self.extend_walk(target, walk, on_walk, found)?;
                on_walk.remove(&neighbor);
            }
            walk.pop();
        }
        Ok(())
    }
}
