use geo::{Coord, Point};
use serde::{Deserialize, Serialize};

/// A geographic coordinate expressed as latitude then longitude, in degrees.
///
/// The planner works in lat/lon order while `geo` geometries store
/// `x = longitude, y = latitude`; the conversions below are the only place
/// the two orders meet.
///
/// # Examples
///
/// ```
/// use georanges_types::point::LatLon;
/// use geo::Point;
///
/// let nyc = LatLon::new(40.7128, -74.0060);
/// let point: Point = nyc.into();
/// assert_eq!(point.x(), -74.0060);
/// assert_eq!(point.y(), 40.7128);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

impl LatLon {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }

    /// Convert to a `geo::Coord` (`x = lon`, `y = lat`).
    pub fn to_coord(&self) -> Coord<f64> {
        Coord {
            x: self.lon,
            y: self.lat,
        }
    }

    /// Returns true if both components differ from `other` by at most `tolerance`.
    pub fn approx_eq(&self, other: &LatLon, tolerance: f64) -> bool {
        (self.lat - other.lat).abs() <= tolerance && (self.lon - other.lon).abs() <= tolerance
    }
}

impl From<LatLon> for Point<f64> {
    fn from(value: LatLon) -> Self {
        Point::new(value.lon, value.lat)
    }
}

impl From<Point<f64>> for LatLon {
    fn from(value: Point<f64>) -> Self {
        LatLon::new(value.y(), value.x())
    }
}

impl From<Coord<f64>> for LatLon {
    fn from(value: Coord<f64>) -> Self {
        LatLon::new(value.y, value.x)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_conversion_swaps_axes() {
        let coord = LatLon::new(10.5, -20.25);
        let point: Point = coord.into();
        assert_eq!(point.x(), -20.25);
        assert_eq!(point.y(), 10.5);
        assert_eq!(LatLon::from(point), coord);
    }

    #[test]
    fn test_approx_eq() {
        let a = LatLon::new(1.0, 2.0);
        let b = LatLon::new(1.000001, 1.999999);
        assert!(a.approx_eq(&b, 1e-5));
        assert!(!a.approx_eq(&b, 1e-7));
    }
}
