// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::RouteError;

/// Which shortest-path implementation [plan_route](crate::plan_route) should use.
/// Both always produce the same paths.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Algorithm {
    /// [find_path](crate::find_path) - array scan, O(n²).
    #[default]
    Scan,

    /// [find_path_with_queue](crate::find_path_with_queue) - binary heap, O((n + m) log n).
    Queue,
}

/// Tunable parameters of [plan_route](crate::plan_route).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Options {
    /// Two signals no further apart than this (in kilometers) are connected.
    pub proximity_threshold_km: f64,

    /// Number of nearest nodes the source and destination are connected to.
    pub endpoint_attach_count: usize,

    /// Margin (in degrees) added around the source and destination
    /// when computing the region to fetch signals from.
    pub bbox_padding_deg: f64,

    /// Assumed travel speed, in km/h.
    pub average_speed_kmh: f64,

    /// Time lost at every intermediate signal on the route, in minutes.
    pub stop_penalty_minutes: f64,

    /// Shortest-path implementation.
    pub algorithm: Algorithm,
}

/// Default [Options].
pub const DEFAULT_OPTIONS: Options = Options {
    proximity_threshold_km: 0.15,
    endpoint_attach_count: 3,
    bbox_padding_deg: 0.002,
    average_speed_kmh: 40.0,
    stop_penalty_minutes: 0.5,
    algorithm: Algorithm::Scan,
};

impl Default for Options {
    fn default() -> Self {
        DEFAULT_OPTIONS
    }
}

impl Options {
    /// Checks that all parameters are usable, returning [RouteError::InvalidOption]
    /// naming the first offending one otherwise.
    pub fn validate(&self) -> Result<(), RouteError> {
        if !(self.proximity_threshold_km.is_finite() && self.proximity_threshold_km >= 0.0) {
            return Err(RouteError::InvalidOption("proximity_threshold_km"));
        }
        if self.endpoint_attach_count == 0 {
            return Err(RouteError::InvalidOption("endpoint_attach_count"));
        }
        if !(self.bbox_padding_deg.is_finite() && self.bbox_padding_deg >= 0.0) {
            return Err(RouteError::InvalidOption("bbox_padding_deg"));
        }
        if !(self.average_speed_kmh.is_finite() && self.average_speed_kmh > 0.0) {
            return Err(RouteError::InvalidOption("average_speed_kmh"));
        }
        if !(self.stop_penalty_minutes.is_finite() && self.stop_penalty_minutes >= 0.0) {
            return Err(RouteError::InvalidOption("stop_penalty_minutes"));
        }
        Ok(())
    }

    /// Returns the parameters used to estimate travel time.
    pub fn travel_model(&self) -> TravelModel {
        TravelModel {
            average_speed_kmh: self.average_speed_kmh,
            stop_penalty_minutes: self.stop_penalty_minutes,
        }
    }
}

/// Parameters of [RouteStats](crate::RouteStats) estimation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TravelModel {
    pub average_speed_kmh: f64,
    pub stop_penalty_minutes: f64,
}

impl Default for TravelModel {
    fn default() -> Self {
        DEFAULT_OPTIONS.travel_model()
    }
}
