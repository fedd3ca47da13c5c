// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use std::fs::File;
use std::io::{self, BufRead};
use std::path::Path;

use collector::SignalCollector;

use crate::BoundingBox;

mod collector;
mod json;
mod model;
mod xml;

pub use model::Signal;

/// Tag which marks traffic signals in OpenStreetMap:
/// [highway=traffic_signals](https://wiki.openstreetmap.org/wiki/Tag:highway%3Dtraffic_signals).
pub const TRAFFIC_SIGNALS_TAG: (&str, &str) = ("highway", "traffic_signals");

/// Format of the input geodata file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FileFormat {
    /// Unknown format - guess the format based on the content
    #[default]
    Unknown,

    /// Force uncompressed [OSM XML](https://wiki.openstreetmap.org/wiki/OSM_XML)
    Xml,

    /// Force [OSM XML](https://wiki.openstreetmap.org/wiki/OSM_XML)
    /// with [gzip](https://en.wikipedia.org/wiki/Gzip) compression
    XmlGz,

    /// Force [OSM XML](https://wiki.openstreetmap.org/wiki/OSM_XML)
    /// with [bzip2](https://en.wikipedia.org/wiki/Bzip2) compression
    XmlBz2,

    /// Force uncompressed [Overpass JSON](https://wiki.openstreetmap.org/wiki/OSM_JSON)
    Json,

    /// Force [Overpass JSON](https://wiki.openstreetmap.org/wiki/OSM_JSON)
    /// with [gzip](https://en.wikipedia.org/wiki/Gzip) compression
    JsonGz,

    /// Force [Overpass JSON](https://wiki.openstreetmap.org/wiki/OSM_JSON)
    /// with [bzip2](https://en.wikipedia.org/wiki/Bzip2) compression
    JsonBz2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Compression {
    None,
    Gzip,
    Bzip2,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Syntax {
    Xml,
    Json,
}

impl FileFormat {
    fn split(self) -> Option<(Compression, Syntax)> {
        match self {
            Self::Unknown => None,
            Self::Xml => Some((Compression::None, Syntax::Xml)),
            Self::XmlGz => Some((Compression::Gzip, Syntax::Xml)),
            Self::XmlBz2 => Some((Compression::Bzip2, Syntax::Xml)),
            Self::Json => Some((Compression::None, Syntax::Json)),
            Self::JsonGz => Some((Compression::Gzip, Syntax::Json)),
            Self::JsonBz2 => Some((Compression::Bzip2, Syntax::Json)),
        }
    }
}

/// Additional controls for picking traffic signals out of the geodata.
#[derive(Debug, Clone, Copy)]
pub struct Options<'a> {
    /// Format of the input data.
    pub file_format: FileFormat,

    /// Only nodes with this tag (key and value) are loaded.
    /// If `None`, all nodes are loaded.
    pub tag: Option<(&'a str, &'a str)>,

    /// Only nodes within this bounding box are loaded.
    /// If `None`, nodes are loaded regardless of their position.
    pub bbox: Option<BoundingBox>,
}

impl Default for Options<'_> {
    fn default() -> Self {
        Self {
            file_format: FileFormat::Unknown,
            tag: Some(TRAFFIC_SIGNALS_TAG),
            bbox: None,
        }
    }
}

/// Error which can occur when loading traffic signals.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("io: {0}")]
    Io(#[from] io::Error),

    #[error("xml: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("json: {0}")]
    Json(#[from] serde_json::Error),

    #[error("unrecognized file format - expected OSM XML or Overpass JSON")]
    UnrecognizedFormat,
}

/// Loads traffic signals from a reader as per the provided [Options].
///
/// Signals are returned in the order they appear in the input - the same order
/// in which they become [Nodes](crate::Node) of the graph.
///
/// The provided stream will be automatically wrapped in a buffered reader when needed.
pub fn read_signals_from_io<R: io::Read>(options: &Options, reader: R) -> Result<Vec<Signal>, Error> {
    let mut b = io::BufReader::new(reader);
    let (compression, syntax) = match options.file_format.split() {
        Some((compression, syntax)) => (compression, Some(syntax)),
        None => (detect_compression(&mut b)?, None),
    };

    match compression {
        Compression::None => read_decompressed(options, b, syntax),
        Compression::Gzip => {
            let d = flate2::read::MultiGzDecoder::new(b);
            read_decompressed(options, io::BufReader::new(d), syntax)
        }
        Compression::Bzip2 => {
            let d = bzip2::read::MultiBzDecoder::new(b);
            read_decompressed(options, io::BufReader::new(d), syntax)
        }
    }
}

/// Loads traffic signals from a file at the provided path as per the provided [Options].
pub fn read_signals_from_file<P: AsRef<Path>>(options: &Options, path: P) -> Result<Vec<Signal>, Error> {
    let f = File::open(path)?;
    read_signals_from_io(options, f)
}

/// Loads traffic signals from a static buffer as per the provided [Options].
pub fn read_signals_from_buffer(options: &Options, data: &[u8]) -> Result<Vec<Signal>, Error> {
    let mut c = SignalCollector::new(options);

    // Fast paths are available for uncompressed in-memory data
    match options.file_format {
        FileFormat::Xml => {
            for n in xml::elements_from_buffer(data) {
                c.add(n?);
            }
        }

        FileFormat::Json => {
            for n in json::elements_from_buffer(data)? {
                c.add(n);
            }
        }

        _ => {
            // Wrap the buffer in a cursor and use the IO path
            let cursor = io::Cursor::new(data);
            return read_signals_from_io(options, cursor);
        }
    }

    Ok(c.finish())
}

fn read_decompressed<R: BufRead>(
    options: &Options,
    mut reader: R,
    syntax: Option<Syntax>,
) -> Result<Vec<Signal>, Error> {
    let syntax = match syntax {
        Some(syntax) => syntax,
        None => detect_syntax(&mut reader)?,
    };

    let mut c = SignalCollector::new(options);
    match syntax {
        Syntax::Xml => {
            for n in xml::elements_from_io(reader) {
                c.add(n?);
            }
        }

        Syntax::Json => {
            for n in json::elements_from_io(reader)? {
                c.add(n);
            }
        }
    }

    Ok(c.finish())
}

/// Guesses the compression from the magic bytes at the start of the stream.
/// Nothing is consumed from the reader.
fn detect_compression<R: BufRead>(reader: &mut R) -> io::Result<Compression> {
    let prefix = reader.fill_buf()?;
    if prefix.starts_with(&[0x1F, 0x8B]) {
        Ok(Compression::Gzip)
    } else if prefix.starts_with(b"BZh") {
        Ok(Compression::Bzip2)
    } else {
        Ok(Compression::None)
    }
}

/// Guesses the syntax from the first non-whitespace character of the stream.
/// Leading whitespace is consumed from the reader.
fn detect_syntax<R: BufRead>(reader: &mut R) -> Result<Syntax, Error> {
    loop {
        let buf = reader.fill_buf()?;
        if buf.is_empty() {
            return Err(Error::UnrecognizedFormat);
        }

        match buf.iter().position(|b| !b.is_ascii_whitespace()) {
            Some(i) => {
                let first = buf[i];
                reader.consume(i);
                return match first {
                    b'<' => Ok(Syntax::Xml),
                    b'{' => Ok(Syntax::Json),
                    _ => Err(Error::UnrecognizedFormat),
                };
            }

            None => {
                let n = buf.len();
                reader.consume(n);
            }
        }
    }
}
