// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::collections::HashMap;
use std::io;
use std::str::from_utf8;

use super::model::NodeElement;
use crate::Coordinate;

pub fn elements_from_io<R: io::BufRead>(
    reader: R,
) -> impl Iterator<Item = Result<NodeElement, quick_xml::Error>> {
    Reader::from_io(reader)
}

pub fn elements_from_buffer(
    b: &[u8],
) -> impl Iterator<Item = Result<NodeElement, quick_xml::Error>> + '_ {
    Reader::from_buffer(b)
}

/// Parser is a trait for objects which can parse XML.
///
/// This trait only exists to fix the mismatch of
/// [quick_xml::Reader::read_event] when working on buffered data
/// and [quick_xml::Reader::read_event_into] when working on IO.
trait Parser {
    fn read_event<'a>(&'a mut self) -> Result<quick_xml::events::Event<'a>, quick_xml::Error>;
}

/// IoParser implements [Parser] over an [std::io::BufRead].
struct IoParser<R: io::BufRead>(quick_xml::Reader<R>, Vec<u8>);

impl<R: io::BufRead> IoParser<R> {
    #[inline]
    fn new(reader: R) -> Self {
        Self(quick_xml::Reader::from_reader(reader), Vec::default())
    }
}

impl<R: io::BufRead> Parser for IoParser<R> {
    #[inline]
    fn read_event<'a>(&'a mut self) -> Result<quick_xml::events::Event<'a>, quick_xml::Error> {
        self.1.clear();
        self.0.read_event_into(&mut self.1)
    }
}

/// BufParser implements [Parser] over a slice of bytes (`&[u8]`).
struct BufParser<'a>(quick_xml::Reader<&'a [u8]>);

impl<'a> BufParser<'a> {
    #[inline]
    fn new(data: &'a [u8]) -> Self {
        Self(quick_xml::Reader::from_reader(data))
    }
}

impl<'a> Parser for BufParser<'a> {
    #[inline]
    fn read_event<'b>(&'b mut self) -> Result<quick_xml::events::Event<'b>, quick_xml::Error> {
        self.0.read_event()
    }
}

/// Reader reads [nodes](NodeElement) from an [OSM XML](https://wiki.openstreetmap.org/wiki/OSM_XML)
/// file (which is also what the Overpass API returns with `[out:xml]`).
/// Ways and relations are skipped.
struct Reader<P: Parser> {
    parser: P,
    eof: bool,
}

impl<P: Parser> Reader<P> {
    #[inline]
    fn new(parser: P) -> Self {
        Self { parser, eof: false }
    }
}

impl<P: Parser> Iterator for Reader<P> {
    type Item = Result<NodeElement, quick_xml::Error>;

    fn next(&mut self) -> Option<Self::Item> {
        let mut n: Option<NodeElement> = None;

        while !self.eof {
            let event = match self.parser.read_event() {
                Ok(e) => e,
                Err(e) => {
                    self.eof = true;
                    return Some(Err(e));
                }
            };

            match event {
                quick_xml::events::Event::Empty(start) => match start.local_name().as_ref() {
                    b"node" => {
                        if let Some(node) = parse_node(start) {
                            return Some(Ok(node));
                        }
                    }
                    b"tag" => {
                        if let Some(ref mut node) = n {
                            if let Some((k, v)) = parse_tag(start) {
                                node.tags.insert(k, v);
                            }
                        }
                    }
                    _ => {}
                },

                quick_xml::events::Event::Start(start) => {
                    if start.local_name().as_ref() == b"node" {
                        n = parse_node(start);
                    }
                }

                quick_xml::events::Event::End(end) => {
                    if end.local_name().as_ref() == b"node" {
                        if let Some(node) = n.take() {
                            return Some(Ok(node));
                        }
                    }
                }

                quick_xml::events::Event::Eof => {
                    self.eof = true;
                }

                _ => {}
            }
        }

        n.map(Ok)
    }
}

impl<'a> Reader<BufParser<'a>> {
    #[inline]
    fn from_buffer(data: &'a [u8]) -> Self {
        Self::new(BufParser::new(data))
    }
}

impl<R: io::BufRead> Reader<IoParser<R>> {
    #[inline]
    fn from_io(reader: R) -> Self {
        Self::new(IoParser::new(reader))
    }
}

fn parse_node(start: quick_xml::events::BytesStart<'_>) -> Option<NodeElement> {
    let mut id: i64 = 0;
    let mut lat = f64::NAN;
    let mut lon = f64::NAN;

    for attr in start.attributes() {
        let attr = match attr {
            Ok(attr) => attr,
            Err(e) => {
                log::warn!("skipping node with malformed attributes: {}", e);
                return None;
            }
        };

        let value = from_utf8(&attr.value).ok();
        match attr.key.as_ref() {
            b"id" => id = value.and_then(|v| v.parse().ok()).unwrap_or(0),
            b"lat" => lat = value.and_then(|v| v.parse().ok()).unwrap_or(f64::NAN),
            b"lon" => lon = value.and_then(|v| v.parse().ok()).unwrap_or(f64::NAN),
            _ => {}
        }
    }

    if id != 0 && lat.is_finite() && lon.is_finite() {
        Some(NodeElement {
            id,
            position: Coordinate::new(lat, lon),
            tags: HashMap::default(),
        })
    } else {
        log::warn!("skipping node {} without a valid id or position", id);
        None
    }
}

fn parse_tag(start: quick_xml::events::BytesStart<'_>) -> Option<(String, String)> {
    let mut k = None;
    let mut v = None;

    for attr in start.attributes() {
        let attr = attr.ok()?;
        match attr.key.as_ref() {
            b"k" => k = attr.unescape_value().ok().map(|s| s.into_owned()),
            b"v" => v = attr.unescape_value().ok().map(|s| s.into_owned()),
            _ => {}
        }
    }

    k.map(|k| (k, v.unwrap_or_default()))
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! tags {
        {} => { HashMap::default() };
        {$( $k:literal : $v:literal ),+} => {
            HashMap::from_iter([ $( ($k.to_string(), $v.to_string()) ),+ ])
        };
    }

    const SIGNALS_XML: &[u8] = include_bytes!("test_fixtures/signals.osm");

    fn get_expected_nodes() -> Vec<NodeElement> {
        vec![
            NodeElement {
                id: 1001,
                position: Coordinate::new(40.7127, -74.0059),
                tags: tags! {"highway": "traffic_signals", "traffic_signals": "signal"},
            },
            NodeElement {
                id: 1002,
                position: Coordinate::new(40.7135, -74.0049),
                tags: tags! {"highway": "traffic_signals"},
            },
            NodeElement {
                id: 2001,
                position: Coordinate::new(40.7138, -74.0045),
                tags: tags! {},
            },
            NodeElement {
                id: 2002,
                position: Coordinate::new(40.7140, -74.0042),
                tags: tags! {"highway": "crossing", "crossing": "traffic_signals"},
            },
            NodeElement {
                id: 1003,
                position: Coordinate::new(40.7146, -74.0037),
                tags: tags! {"highway": "traffic_signals", "name": "Broadway & Chambers"},
            },
            NodeElement {
                id: 1004,
                position: Coordinate::new(40.7155, -74.0024),
                tags: tags! {"highway": "traffic_signals"},
            },
        ]
    }

    #[test]
    fn parse_from_buf() -> Result<(), quick_xml::Error> {
        let nodes = elements_from_buffer(SIGNALS_XML).collect::<Result<Vec<_>, _>>()?;
        assert_eq!(nodes, get_expected_nodes());
        Ok(())
    }

    #[test]
    fn parse_from_io() -> Result<(), quick_xml::Error> {
        let nodes = elements_from_io(SIGNALS_XML).collect::<Result<Vec<_>, _>>()?;
        assert_eq!(nodes, get_expected_nodes());
        Ok(())
    }

    #[test]
    fn malformed_document() {
        let result = elements_from_buffer(b"<osm><node id=\"1\" lat=\"1\" lon=\"2\"></way></osm>")
            .collect::<Result<Vec<_>, _>>();
        assert!(result.is_err());
    }
}
