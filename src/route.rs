// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{
    attach_endpoints, bounding_box, build_proximity_graph, find_path, find_path_with_queue,
    Algorithm, BoundingBox, Coordinate, Endpoints, Options, Path, RouteStats, SolveError,
};

/// Reasons why [plan_route] may not produce a route.
///
/// All variants except [RouteError::InvalidNodeReference] and [RouteError::InvalidOption]
/// are expected outcomes for sparse regions - users should try different coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum RouteError {
    #[error("no traffic signals in the region")]
    EmptyRegion,

    #[error("no two traffic signals are close enough to be connected")]
    DisconnectedGraph,

    #[error("no path between the source and the destination")]
    NoPathFound,

    #[error(transparent)]
    InvalidNodeReference(#[from] SolveError),

    #[error("invalid option: {0}")]
    InvalidOption(&'static str),
}

/// A route found by [plan_route].
#[derive(Debug, Clone, PartialEq)]
pub struct RoutePlan {
    /// Ids of the synthetic source and destination nodes.
    pub endpoints: Endpoints,

    /// Node ids and the cost (in meters) of the cheapest path.
    pub path: Path,

    /// Positions of all nodes on the path, starting with the source
    /// and ending with the destination.
    pub coordinates: Vec<Coordinate>,

    pub stats: RouteStats,
}

/// Returns the region from which traffic signals should be fetched
/// for a route between `source` and `destination`.
pub fn query_region(source: Coordinate, destination: Coordinate, options: &Options) -> BoundingBox {
    bounding_box(source, destination, options.bbox_padding_deg)
}

/// Finds a route from `source` to `destination` through the provided traffic `signals`.
///
/// The signals become nodes `0..signals.len()` of a proximity graph
/// (see [build_proximity_graph]), the source and destination are attached to
/// their nearest nodes (see [attach_endpoints]), and the cheapest path between
/// them is estimated with [RouteStats::estimate].
pub fn plan_route(
    signals: &[Coordinate],
    source: Coordinate,
    destination: Coordinate,
    options: &Options,
) -> Result<RoutePlan, RouteError> {
    options.validate()?;

    if signals.is_empty() {
        return Err(RouteError::EmptyRegion);
    }

    let mut g = build_proximity_graph(signals, options.proximity_threshold_km);
    if g.edge_count() == 0 {
        return Err(RouteError::DisconnectedGraph);
    }

    let endpoints = attach_endpoints(&mut g, source, destination, options.endpoint_attach_count);

    let path = match options.algorithm {
        Algorithm::Scan => find_path(&g, endpoints.source, endpoints.destination)?,
        Algorithm::Queue => find_path_with_queue(&g, endpoints.source, endpoints.destination)?,
    }
    .ok_or(RouteError::NoPathFound)?;

    let coordinates = path
        .nodes
        .iter()
        .map(|&id| {
            g.get_node(id)
                .map(|n| n.position)
                .ok_or(SolveError::InvalidReference(id))
        })
        .collect::<Result<Vec<_>, _>>()?;
    let stats = RouteStats::estimate(&coordinates, &options.travel_model());

    Ok(RoutePlan {
        endpoints,
        path,
        coordinates,
        stats,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::DEFAULT_OPTIONS;

    /// Signals every ~100 m along the equator, from 0° to `(n - 1) * 0.0009`°.
    fn line(n: usize) -> Vec<Coordinate> {
        (0..n).map(|i| Coordinate::new(0.0, i as f64 * 0.0009)).collect()
    }

    #[test]
    fn route_along_line() {
        let signals = line(10);
        let source = Coordinate::new(0.0002, -0.0003);
        let destination = Coordinate::new(-0.0002, 0.0084);

        let plan = plan_route(&signals, source, destination, &DEFAULT_OPTIONS).unwrap();

        assert_eq!(plan.endpoints, Endpoints::after(10));
        assert_eq!(plan.path.nodes.first(), Some(&10));
        assert_eq!(plan.path.nodes.last(), Some(&11));
        assert_eq!(plan.coordinates.first(), Some(&source));
        assert_eq!(plan.coordinates.last(), Some(&destination));
        assert_eq!(plan.coordinates.len(), plan.path.nodes.len());

        // Source attaches to 0, 1, 2 and destination to 9, 8, 7 -
        // jumping straight to 2 and from 7 is cheaper than hopping through 0-1 and 8-9
        assert_eq!(plan.path.nodes, vec![10, 2, 3, 4, 5, 6, 7, 11]);
        assert_eq!(plan.path.cost, 970);
        assert_eq!(plan.stats.distance_km, 0.97);
        assert_eq!(plan.stats.time_minutes, 4); // 1.455 min + 6 * 0.5 min
    }

    #[test]
    fn algorithms_agree() {
        let signals = line(10);
        let source = Coordinate::new(0.0002, -0.0003);
        let destination = Coordinate::new(-0.0002, 0.0084);
        let queue_options = Options {
            algorithm: Algorithm::Queue,
            ..DEFAULT_OPTIONS
        };

        assert_eq!(
            plan_route(&signals, source, destination, &DEFAULT_OPTIONS),
            plan_route(&signals, source, destination, &queue_options),
        );
    }

    #[test]
    fn direct_hop_between_endpoints() {
        // Both endpoints sit next to signal 0, and closer to each other than to it
        let signals = line(5);
        let source = Coordinate::new(0.0, 0.0001);
        let destination = Coordinate::new(0.0, 0.0002);

        let plan = plan_route(&signals, source, destination, &DEFAULT_OPTIONS).unwrap();
        assert_eq!(plan.path.nodes, vec![5, 6]);
        assert_eq!(plan.stats.time_minutes, 0);
    }

    #[test]
    fn empty_region() {
        assert_eq!(
            plan_route(
                &[],
                Coordinate::new(0.0, 0.0),
                Coordinate::new(0.0, 0.001),
                &DEFAULT_OPTIONS
            ),
            Err(RouteError::EmptyRegion)
        );
    }

    #[test]
    fn disconnected_graph() {
        let signals = [Coordinate::new(0.0, 0.0), Coordinate::new(0.0, 0.01)];
        assert_eq!(
            plan_route(
                &signals,
                Coordinate::new(0.0, 0.0),
                Coordinate::new(0.0, 0.01),
                &DEFAULT_OPTIONS
            ),
            Err(RouteError::DisconnectedGraph)
        );
    }

    #[test]
    fn no_path_between_clusters() {
        // Two clusters of 3 signals, ~1 km apart
        let mut signals = line(3);
        signals.extend((0..3).map(|i| Coordinate::new(0.0, 0.01 + i as f64 * 0.0009)));

        assert_eq!(
            plan_route(
                &signals,
                Coordinate::new(0.0, -0.0001),
                Coordinate::new(0.0, 0.0129),
                &DEFAULT_OPTIONS
            ),
            Err(RouteError::NoPathFound)
        );

        // A wider threshold bridges the gap
        let wide = Options {
            proximity_threshold_km: 1.0,
            ..DEFAULT_OPTIONS
        };
        assert!(plan_route(
            &signals,
            Coordinate::new(0.0, -0.0001),
            Coordinate::new(0.0, 0.0129),
            &wide
        )
        .is_ok());
    }

    #[test]
    fn invalid_options_are_rejected_first() {
        let options = Options {
            endpoint_attach_count: 0,
            ..DEFAULT_OPTIONS
        };
        assert_eq!(
            plan_route(
                &[],
                Coordinate::new(0.0, 0.0),
                Coordinate::new(0.0, 0.001),
                &options
            ),
            Err(RouteError::InvalidOption("endpoint_attach_count"))
        );
    }

    #[test]
    fn region_is_padded() {
        let region = query_region(
            Coordinate::new(1.0, 2.0),
            Coordinate::new(1.5, 1.0),
            &DEFAULT_OPTIONS,
        );
        assert!((region.min_lat - 0.998).abs() < 1e-9);
        assert!((region.min_lon - 0.998).abs() < 1e-9);
        assert!((region.max_lat - 1.502).abs() < 1e-9);
        assert!((region.max_lon - 2.002).abs() < 1e-9);
    }
}
