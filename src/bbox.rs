// (c) Copyright 2025 Mikołaj Kuranowski
// SPDX-License-Identifier: MIT

use crate::Coordinate;

/// A rectangular region, in degrees.
///
/// No clamping is performed - padded boxes around points close to the poles
/// or the antimeridian may extend beyond ±90°/±180°.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl BoundingBox {
    /// Checks whether the position lies within the box (edges included).
    pub fn contains(&self, c: Coordinate) -> bool {
        c.lat >= self.min_lat && c.lat <= self.max_lat && c.lon >= self.min_lon && c.lon <= self.max_lon
    }

    /// Formats the box as a `south,west,north,east` tuple,
    /// as expected by the [Overpass QL bbox filter](https://wiki.openstreetmap.org/wiki/Overpass_API/Overpass_QL#Bounding_box).
    pub fn to_overpass(&self) -> String {
        format!(
            "{},{},{},{}",
            self.min_lat, self.min_lon, self.max_lat, self.max_lon
        )
    }
}

/// Computes the smallest box containing both positions, grown by `padding` degrees
/// in every direction.
pub fn bounding_box(a: Coordinate, b: Coordinate, padding: f64) -> BoundingBox {
    BoundingBox {
        min_lat: a.lat.min(b.lat) - padding,
        min_lon: a.lon.min(b.lon) - padding,
        max_lat: a.lat.max(b.lat) + padding,
        max_lon: a.lon.max(b.lon) + padding,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    macro_rules! assert_almost_eq {
        ($a:expr, $b:expr) => {
            assert!(
                (($a - $b).abs() < 1e-9),
                "assertion failed: {} ≈ {}",
                $a,
                $b
            )
        };
    }

    #[test]
    fn padded_box() {
        let bbox = bounding_box(
            Coordinate::new(40.7158, -74.0020),
            Coordinate::new(40.7128, -74.0060),
            0.002,
        );

        assert_almost_eq!(bbox.min_lat, 40.7108);
        assert_almost_eq!(bbox.min_lon, -74.0080);
        assert_almost_eq!(bbox.max_lat, 40.7178);
        assert_almost_eq!(bbox.max_lon, -74.0000);
    }

    #[test]
    fn box_is_independent_of_argument_order() {
        let a = Coordinate::new(10.0, 20.0);
        let b = Coordinate::new(-5.0, 25.0);
        assert_eq!(bounding_box(a, b, 0.5), bounding_box(b, a, 0.5));
    }

    #[test]
    fn box_is_not_clamped() {
        let bbox = bounding_box(Coordinate::new(89.9, 179.9), Coordinate::new(89.95, 179.95), 0.5);
        assert!(bbox.max_lat > 90.0);
        assert!(bbox.max_lon > 180.0);
    }

    #[test]
    fn box_contains_endpoints() {
        let a = Coordinate::new(1.0, 1.0);
        let b = Coordinate::new(2.0, 3.0);
        let bbox = bounding_box(a, b, 0.0);

        assert!(bbox.contains(a));
        assert!(bbox.contains(b));
        assert!(bbox.contains(Coordinate::new(1.5, 2.0)));
        assert!(!bbox.contains(Coordinate::new(0.9, 2.0)));
        assert!(!bbox.contains(Coordinate::new(1.5, 3.1)));
    }

    #[test]
    fn overpass_format() {
        let bbox = BoundingBox {
            min_lat: 1.5,
            min_lon: -2.25,
            max_lat: 3.0,
            max_lon: 4.125,
        };
        assert_eq!(bbox.to_overpass(), "1.5,-2.25,3,4.125");
    }
}
