// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{earth_distance, meters, Coordinate, Graph};

/// Builds a proximity graph over the provided positions.
///
/// Every position becomes a [Node](crate::Node) (ids follow the slice order),
/// and every two nodes no further than `max_distance_km` apart are connected
/// with a pair of [Edges](crate::Edge) weighted by their distance in meters.
///
/// All pairs are compared, which is fine for the few hundred signals
/// usually found in a single query region.
pub fn build_proximity_graph(positions: &[Coordinate], max_distance_km: f64) -> Graph {
    let mut g = Graph::from_positions(positions.iter().copied());

    for (i, &a) in positions.iter().enumerate() {
        for (j, &b) in positions.iter().enumerate().skip(i + 1) {
            let distance = earth_distance(a, b);
            if distance <= max_distance_km {
                g.connect(i, j, meters(distance));
            }
        }
    }

    g
}
