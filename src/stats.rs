// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::{earth_distance, Coordinate, TravelModel};

/// Human-facing summary of a route.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct RouteStats {
    /// Great-circle length of the route, in kilometers, rounded to 2 decimal places.
    pub distance_km: f64,

    /// Estimated travel time, in whole minutes.
    pub time_minutes: u32,
}

impl RouteStats {
    /// Estimates the length and travel time of a route passing through
    /// the provided positions.
    ///
    /// The distance is recomputed from the positions, and thus may differ slightly
    /// from the path cost (which is a sum of rounded edge weights).
    /// Travel time assumes a constant speed, plus a penalty for every
    /// position other than the first and the last one.
    pub fn estimate(route: &[Coordinate], model: &TravelModel) -> Self {
        let total: f64 = route
            .windows(2)
            .map(|pair| earth_distance(pair[0], pair[1]))
            .sum();
        let distance_km = (total * 100.0).round() / 100.0;

        let stops = route.len().saturating_sub(2);
        let penalty = stops as f64 * model.stop_penalty_minutes;
        let time_minutes = (distance_km * 60.0 / model.average_speed_kmh + penalty).round() as u32;

        Self {
            distance_km,
            time_minutes,
        }
    }
}
