// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::Coordinate;

/// Represents an [OSM node](https://wiki.openstreetmap.org/wiki/Node)
/// with its tags, as found in the input data.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeElement {
    pub id: i64,
    pub position: Coordinate,
    pub tags: HashMap<String, String>,
}

/// Traffic signal loaded from the geodata source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Signal {
    /// Id of the [OSM node](https://wiki.openstreetmap.org/wiki/Node) representing the signal.
    pub osm_id: i64,
    pub position: Coordinate,
}
