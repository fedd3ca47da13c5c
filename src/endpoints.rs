// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{earth_distance, meters, Coordinate, Graph};

/// Ids of the synthetic source and destination [Nodes](crate::Node).
///
/// Both are appended right after the nodes loaded from the geodata source:
/// the source gets id `n` and the destination gets id `n + 1`, where `n` is the
/// number of loaded nodes. Attaching endpoints and solving must agree on these ids,
/// hence both go through this type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoints {
    pub source: usize,
    pub destination: usize,
}

impl Endpoints {
    /// Returns the endpoint ids for a graph with `fixed_nodes` loaded nodes.
    pub const fn after(fixed_nodes: usize) -> Self {
        Self {
            source: fixed_nodes,
            destination: fixed_nodes + 1,
        }
    }
}

/// Appends a synthetic [Node](crate::Node) at `position` and connects it
/// (in both directions) to its `k` nearest existing nodes. If the graph has
/// fewer than `k` nodes, the new node is connected to all of them.
///
/// Ties in distance are resolved in favor of lower node ids.
///
/// Returns the id of the new node.
pub fn attach_endpoint(g: &mut Graph, position: Coordinate, k: usize) -> usize {
    let mut candidates = g
        .iter()
        .map(|n| (n.id, earth_distance(position, n.position)))
        .collect::<Vec<_>>();

    // sort_by is stable, and candidates are already in id order
    candidates.sort_by(|(_, a), (_, b)| a.total_cmp(b));

    let id = g.add_node(position);
    for &(neighbor, distance) in candidates.iter().take(k) {
        g.connect(id, neighbor, meters(distance));
    }
    id
}

/// Attaches the source and then the destination to a graph consisting
/// only of loaded (fixed) nodes. See [attach_endpoint].
///
/// The destination is attached after the source, so the source is one of its
/// candidate neighbors.
pub fn attach_endpoints(
    g: &mut Graph,
    source: Coordinate,
    destination: Coordinate,
    k: usize,
) -> Endpoints {
    let endpoints = Endpoints::after(g.len());

    let source_id = attach_endpoint(g, source, k);
    debug_assert_eq!(source_id, endpoints.source);

    let destination_id = attach_endpoint(g, destination, k);
    debug_assert_eq!(destination_id, endpoints.destination);

    endpoints
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line(n: usize) -> Graph {
        // ~100 m apart on the equator
        Graph::from_positions((0..n).map(|i| Coordinate::new(0.0, i as f64 * 0.0009)))
    }

    #[test]
    fn endpoint_ids_follow_fixed_nodes() {
        assert_eq!(
            Endpoints::after(5),
            Endpoints {
                source: 5,
                destination: 6
            }
        );

        let mut g = line(5);
        let endpoints = attach_endpoints(
            &mut g,
            Coordinate::new(0.0, -0.0005),
            Coordinate::new(0.0, 0.0041),
            3,
        );

        assert_eq!(endpoints, Endpoints::after(5));
        assert_eq!(g.len(), 7);
        assert_eq!(g.get_node(5).unwrap().position, Coordinate::new(0.0, -0.0005));
        assert_eq!(g.get_node(6).unwrap().position, Coordinate::new(0.0, 0.0041));
    }

    #[test]
    fn connects_to_k_nearest() {
        let mut g = line(6);
        let id = attach_endpoint(&mut g, Coordinate::new(0.0, 0.0019), 3);

        assert_eq!(id, 6);
        let mut neighbors = g.get_edges(id).iter().map(|e| e.to).collect::<Vec<_>>();
        neighbors.sort();
        assert_eq!(neighbors, vec![1, 2, 3]);

        for &n in &neighbors {
            assert_eq!(g.get_edge(n, id), g.get_edge(id, n));
        }
        let expected = earth_distance(Coordinate::new(0.0, 0.0019), Coordinate::new(0.0, 0.0018));
        assert_eq!(g.get_edge(id, 2), Some(meters(expected)));
    }

    #[test]
    fn never_more_than_k_edges() {
        for k in 0..5 {
            let mut g = line(10);
            let before = g.edge_count();
            let id = attach_endpoint(&mut g, Coordinate::new(0.0001, 0.004), k);

            assert_eq!(g.get_edges(id).len(), k);
            assert_eq!(g.edge_count() - before, 2 * k);
        }
    }

    #[test]
    fn fewer_nodes_than_k() {
        let mut g = line(2);
        let id = attach_endpoint(&mut g, Coordinate::new(0.0, 0.0), 3);

        assert_eq!(g.get_edges(id).len(), 2);
        assert_eq!(g.get_edge(id, 0), Some(0));
    }

    #[test]
    fn empty_graph() {
        let mut g = Graph::new();
        let id = attach_endpoint(&mut g, Coordinate::new(0.0, 0.0), 3);

        assert_eq!(id, 0);
        assert!(g.get_edges(id).is_empty());
    }

    #[test]
    fn destination_may_attach_to_source() {
        let mut g = line(3);
        let endpoints = attach_endpoints(
            &mut g,
            Coordinate::new(0.001, 0.0),
            Coordinate::new(0.0011, 0.0),
            1,
        );

        assert_eq!(g.get_edges(endpoints.destination).len(), 1);
        assert!(g.get_edge(endpoints.destination, endpoints.source).is_some());
    }

    #[test]
    fn ties_prefer_lower_ids() {
        let mut g = Graph::from_positions([
            Coordinate::new(0.0, 0.001),
            Coordinate::new(0.0, -0.001),
            Coordinate::new(0.001, 0.0),
        ]);
        let id = attach_endpoint(&mut g, Coordinate::new(0.0, 0.0), 1);

        assert_eq!(g.get_edges(id).len(), 1);
        assert_eq!(g.get_edges(id)[0].to, 0);
    }
}
