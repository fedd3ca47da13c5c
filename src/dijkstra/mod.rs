// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

mod error;
mod queue;
mod scan;

pub use error::SolveError;
pub use queue::find_path_with_queue;
pub use scan::find_path;

/// Cheapest path found between two [Nodes](crate::Node).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path {
    /// Node ids, starting with the source and ending with the destination.
    pub nodes: Vec<usize>,

    /// Sum of [Edge](crate::Edge) weights along the path, in meters.
    pub cost: u64,
}

impl Path {
    /// Number of nodes on the path, excluding the source and destination.
    pub fn stops(&self) -> usize {
        self.nodes.len().saturating_sub(2)
    }
}

/// Walks the `prev` links back from `to`. Returns `None` if the chain
/// doesn't end at `from`, that is if `to` was never reached.
fn reconstruct_path(prev: &[Option<usize>], from: usize, to: usize, cost: u64) -> Option<Path> {
    let mut nodes = vec![to];
    let mut last = to;

    while let Some(nd) = prev[last] {
        nodes.push(nd);
        last = nd;
    }

    nodes.reverse();
    if nodes[0] == from {
        Some(Path { nodes, cost })
    } else {
        None
    }
}

fn check_reference(g: &crate::Graph, id: usize) -> Result<(), SolveError> {
    if g.contains(id) {
        Ok(())
    } else {
        Err(SolveError::InvalidReference(id))
    }
}
