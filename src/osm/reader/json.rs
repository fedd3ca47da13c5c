// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::io;

use serde::Deserialize;

use super::model::NodeElement;
use crate::Coordinate;

/// Top-level object of an [Overpass JSON](https://wiki.openstreetmap.org/wiki/OSM_JSON) response.
#[derive(Debug, Deserialize)]
struct OverpassResponse {
    elements: Vec<OverpassElement>,
}

#[derive(Debug, Deserialize)]
struct OverpassElement {
    #[serde(rename = "type")]
    type_: String,
    id: i64,
    lat: Option<f64>,
    lon: Option<f64>,
    #[serde(default)]
    tags: HashMap<String, String>,
}

impl OverpassElement {
    fn into_node(self) -> Option<NodeElement> {
        if self.type_ != "node" {
            return None;
        }

        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) if lat.is_finite() && lon.is_finite() => Some(NodeElement {
                id: self.id,
                position: Coordinate::new(lat, lon),
                tags: self.tags,
            }),
            _ => {
                log::warn!("skipping node {} without a valid position", self.id);
                None
            }
        }
    }
}

pub fn elements_from_io<R: io::Read>(
    reader: R,
) -> Result<impl Iterator<Item = NodeElement>, serde_json::Error> {
    let response: OverpassResponse = serde_json::from_reader(reader)?;
    Ok(nodes(response))
}

pub fn elements_from_buffer(
    b: &[u8],
) -> Result<impl Iterator<Item = NodeElement>, serde_json::Error> {
    let response: OverpassResponse = serde_json::from_slice(b)?;
    Ok(nodes(response))
}

fn nodes(response: OverpassResponse) -> impl Iterator<Item = NodeElement> {
    response
        .elements
        .into_iter()
        .filter_map(OverpassElement::into_node)
}

#[cfg(test)]
mod tests {
    use super::*;

    const SIGNALS_JSON: &[u8] = include_bytes!("test_fixtures/signals.json");

    #[test]
    fn parse_from_buf() -> Result<(), serde_json::Error> {
        let nodes = elements_from_buffer(SIGNALS_JSON)?.collect::<Vec<_>>();

        assert_eq!(
            nodes.iter().map(|n| n.id).collect::<Vec<_>>(),
            vec![1001, 1002, 2001, 2002, 1003, 1004]
        );
        assert_eq!(nodes[0].position, Coordinate::new(40.7127, -74.0059));
        assert_eq!(nodes[0].tags.get("highway").map(String::as_str), Some("traffic_signals"));
        assert!(nodes[2].tags.is_empty());
        assert_eq!(nodes[4].tags.get("name").map(String::as_str), Some("Broadway & Chambers"));
        Ok(())
    }

    #[test]
    fn parse_from_io() -> Result<(), serde_json::Error> {
        let from_io = elements_from_io(SIGNALS_JSON)?.collect::<Vec<_>>();
        let from_buf = elements_from_buffer(SIGNALS_JSON)?.collect::<Vec<_>>();
        assert_eq!(from_io, from_buf);
        Ok(())
    }

    #[test]
    fn empty_response() -> Result<(), serde_json::Error> {
        assert_eq!(elements_from_buffer(br#"{"elements": []}"#)?.count(), 0);
        Ok(())
    }

    #[test]
    fn missing_elements() {
        assert!(elements_from_buffer(br#"{"remark": "runtime error"}"#).is_err());
    }
}
