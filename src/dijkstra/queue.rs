// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::BinaryHeap;

use super::{check_reference, reconstruct_path, Path, SolveError};
use crate::{Edge, Graph};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct QueueItem {
    at: usize,
    cost: u64,
}

impl PartialOrd for QueueItem {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for QueueItem {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        // NOTE: We revert the order of comparison,
        // as lower costs (and then lower ids) are considered better ("higher"),
        // and Rust's BinaryHeap is a max-heap.
        other
            .cost
            .cmp(&self.cost)
            .then_with(|| other.at.cmp(&self.at))
    }
}

/// Same as [find_path](crate::find_path), but keeps the frontier in a binary heap,
/// which scales better on larger graphs.
///
/// Nodes are expanded in exactly the same order (by cost, then by id),
/// so both functions always return the same result.
pub fn find_path_with_queue(
    g: &Graph,
    from_id: usize,
    to_id: usize,
) -> Result<Option<Path>, SolveError> {
    check_reference(g, from_id)?;
    check_reference(g, to_id)?;

    let n = g.len();
    let mut queue: BinaryHeap<QueueItem> = BinaryHeap::default();
    let mut known_costs: Vec<u64> = vec![u64::MAX; n];
    let mut came_from: Vec<Option<usize>> = vec![None; n];
    let mut visited: Vec<bool> = vec![false; n];

    known_costs[from_id] = 0;
    queue.push(QueueItem { at: from_id, cost: 0 });

    while let Some(item) = queue.pop() {
        // We might keep multiple items in the queue for the same node.
        if visited[item.at] || item.cost > known_costs[item.at] {
            continue;
        }

        visited[item.at] = true;
        if item.at == to_id {
            break;
        }

        for &Edge { to: neighbor_id, weight } in g.get_edges(item.at) {
            let neighbor_cost = item.cost + weight as u64;
            if neighbor_cost < known_costs[neighbor_id] {
                known_costs[neighbor_id] = neighbor_cost;
                came_from[neighbor_id] = Some(item.at);
                queue.push(QueueItem {
                    at: neighbor_id,
                    cost: neighbor_cost,
                });
            }
        }
    }

    Ok(reconstruct_path(&came_from, from_id, to_id, known_costs[to_id]))
}
