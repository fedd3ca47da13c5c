// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

//! Loading traffic signals from [OpenStreetMap](https://www.openstreetmap.org/) data.
//!
//! Fetching the data is left to the caller - [overpass_query] builds the
//! [Overpass API](https://wiki.openstreetmap.org/wiki/Overpass_API) query for a region,
//! and the response (or any OSM XML extract) can be then loaded with one of the
//! `read_signals_from_*` functions.

mod query;
mod reader;

pub use query::{overpass_query, overpass_query_for_tag};
pub use reader::{
    read_signals_from_buffer, read_signals_from_file, read_signals_from_io, Error, FileFormat,
    Options, Signal, TRAFFIC_SIGNALS_TAG,
};
