// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Shortest routes over proximity graphs of traffic signal locations.
//!
//! Traffic signals (usually fetched from [OpenStreetMap](https://www.openstreetmap.org/)
//! through the [Overpass API](https://wiki.openstreetmap.org/wiki/Overpass_API)) are
//! turned into a synthetic graph, where every two signals closer than a threshold
//! are connected. The start and end positions are then attached to their nearest
//! signals, and Dijkstra's algorithm finds the cheapest path between them.
//!
//! # Example
//!
//! ```no_run
//! use signalroute::{Coordinate, Options};
//!
//! let options = Options::default();
//! let source = Coordinate::new(40.7128, -74.0060);
//! let destination = Coordinate::new(40.7158, -74.0020);
//!
//! let region = signalroute::query_region(source, destination, &options);
//! println!("{}", signalroute::osm::overpass_query(&region));
//!
//! let signals = signalroute::osm::read_signals_from_file(
//!     &signalroute::osm::Options::default(),
//!     "path/to/overpass.json",
//! )
//! .expect("failed to load traffic signals");
//!
//! let positions: Vec<Coordinate> = signals.iter().map(|s| s.position).collect();
//! let plan = signalroute::plan_route(&positions, source, destination, &options)
//!     .expect("failed to find route");
//!
//! println!("{} km, {} min", plan.stats.distance_km, plan.stats.time_minutes);
//! ```

mod bbox;
mod dijkstra;
mod distance;
mod endpoints;
mod graph;
mod options;
pub mod osm;
mod proximity;
mod route;
mod stats;

pub use bbox::{bounding_box, BoundingBox};
pub use dijkstra::{find_path, find_path_with_queue, Path, SolveError};
pub use distance::{earth_distance, meters};
pub use endpoints::{attach_endpoint, attach_endpoints, Endpoints};
pub use graph::Graph;
pub use options::{Algorithm, Options, TravelModel, DEFAULT_OPTIONS};
pub use proximity::build_proximity_graph;
pub use route::{plan_route, query_region, RouteError, RoutePlan};
pub use stats::RouteStats;

/// A position on Earth, in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Coordinate {
    pub lat: f64,
    pub lon: f64,
}

impl Coordinate {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Represents an element of the [Graph].
///
/// Ids are dense indices into the graph: nodes loaded from the geodata source
/// come first (`0..n`, in load order), followed by the synthetic source and
/// destination nodes (see [Endpoints]).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Node {
    pub id: usize,
    pub position: Coordinate,
}

/// Represents an outgoing (one-way) connection from a specific [Node].
///
/// `weight` is the great-circle distance between both nodes, in whole meters.
/// Every edge created by this crate has a reverse twin with the same weight.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Edge {
    pub to: usize,
    pub weight: u32,
}
