// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::{check_reference, reconstruct_path, Path, SolveError};
use crate::{Edge, Graph};

/// Uses [Dijkstra's algorithm](https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm)
/// to find the cheapest path between two nodes in the provided graph.
///
/// Instead of a priority queue, every iteration scans all nodes for the unvisited one
/// with the lowest known cost. This runs in O(n²), which is perfectly adequate
/// for graphs of a few hundred nodes. Ties are resolved in favor of lower node ids,
/// so the result is deterministic.
///
/// Returns `Ok(None)` if there is no path between the two nodes.
pub fn find_path(g: &Graph, from_id: usize, to_id: usize) -> Result<Option<Path>, SolveError> {
    check_reference(g, from_id)?;
    check_reference(g, to_id)?;

    let n = g.len();
    let mut known_costs: Vec<u64> = vec![u64::MAX; n];
    let mut came_from: Vec<Option<usize>> = vec![None; n];
    let mut visited: Vec<bool> = vec![false; n];
    known_costs[from_id] = 0;

    loop {
        // Find the cheapest unvisited node; strict comparison keeps the lowest id on ties
        let mut current: Option<usize> = None;
        let mut current_cost = u64::MAX;
        for (id, &cost) in known_costs.iter().enumerate() {
            if !visited[id] && cost < current_cost {
                current = Some(id);
                current_cost = cost;
            }
        }

        let Some(at) = current else {
            break;
        };

        visited[at] = true;
        if at == to_id {
            break;
        }

        for &Edge { to: neighbor_id, weight } in g.get_edges(at) {
            let neighbor_cost = current_cost + weight as u64;
            if neighbor_cost < known_costs[neighbor_id] {
                known_costs[neighbor_id] = neighbor_cost;
                came_from[neighbor_id] = Some(at);
            }
        }
    }

    Ok(reconstruct_path(&came_from, from_id, to_id, known_costs[to_id]))
}
