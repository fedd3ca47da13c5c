// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use super::TRAFFIC_SIGNALS_TAG;
use crate::BoundingBox;

/// Builds an [Overpass QL](https://wiki.openstreetmap.org/wiki/Overpass_API/Overpass_QL) query
/// returning all traffic signals within the bounding box, in the JSON format.
pub fn overpass_query(bbox: &BoundingBox) -> String {
    overpass_query_for_tag(bbox, TRAFFIC_SIGNALS_TAG)
}

/// Builds an [Overpass QL](https://wiki.openstreetmap.org/wiki/Overpass_API/Overpass_QL) query
/// returning all nodes with a specific tag within the bounding box, in the JSON format.
pub fn overpass_query_for_tag(bbox: &BoundingBox, (key, value): (&str, &str)) -> String {
    format!(
        "[out:json];node[{}={}]({});out;",
        key,
        value,
        bbox.to_overpass()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signals_query() {
        let bbox = BoundingBox {
            min_lat: 40.71,
            min_lon: -74.01,
            max_lat: 40.72,
            max_lon: -74.0,
        };
        assert_eq!(
            overpass_query(&bbox),
            "[out:json];node[highway=traffic_signals](40.71,-74.01,40.72,-74);out;"
        );
    }

    #[test]
    fn custom_tag_query() {
        let bbox = BoundingBox {
            min_lat: 1.0,
            min_lon: 2.0,
            max_lat: 3.0,
            max_lon: 4.0,
        };
        assert_eq!(
            overpass_query_for_tag(&bbox, ("railway", "level_crossing")),
            "[out:json];node[railway=level_crossing](1,2,3,4);out;"
        );
    }
}
