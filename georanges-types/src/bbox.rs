use crate::point::LatLon;
use geo::Rect;
use serde::{Deserialize, Serialize};

/// An axis-aligned minimum bounding rectangle in latitude/longitude terms.
///
/// This is a wrapper around `geo::Rect` (`x = lon`, `y = lat`) that names
/// its bounds the way the range planner reads them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Envelope {
    /// The underlying geometric rectangle
    pub rect: Rect,
}

impl Envelope {
    /// Create an envelope from two corners.
    ///
    /// # Examples
    ///
    /// ```
    /// use georanges_types::bbox::Envelope;
    ///
    /// let envelope = Envelope::new(40.7, -74.0, 40.8, -73.9);
    /// assert_eq!(envelope.min_lat(), 40.7);
    /// assert_eq!(envelope.max_lon(), -73.9);
    /// ```
    pub fn new(min_lat: f64, min_lon: f64, max_lat: f64, max_lon: f64) -> Self {
        Self {
            rect: Rect::new(
                geo::coord! { x: min_lon, y: min_lat },
                geo::coord! { x: max_lon, y: max_lat },
            ),
        }
    }

    pub fn from_rect(rect: Rect) -> Self {
        Self { rect }
    }

    pub fn min_lat(&self) -> f64 {
        self.rect.min().y
    }

    pub fn max_lat(&self) -> f64 {
        self.rect.max().y
    }

    pub fn min_lon(&self) -> f64 {
        self.rect.min().x
    }

    pub fn max_lon(&self) -> f64 {
        self.rect.max().x
    }

    /// South-west corner.
    pub fn min_corner(&self) -> LatLon {
        LatLon::from(self.rect.min())
    }

    /// North-east corner.
    pub fn max_corner(&self) -> LatLon {
        LatLon::from(self.rect.max())
    }

    /// Closed-interval overlap test; envelopes that only touch intersect.
    pub fn intersects(&self, other: &Envelope) -> bool {
        !(self.max_lon() < other.min_lon()
            || self.min_lon() > other.max_lon()
            || self.max_lat() < other.min_lat()
            || self.min_lat() > other.max_lat())
    }

    /// Smallest envelope covering both inputs.
    pub fn merge(&self, other: &Envelope) -> Envelope {
        Envelope::new(
            self.min_lat().min(other.min_lat()),
            self.min_lon().min(other.min_lon()),
            self.max_lat().max(other.max_lat()),
            self.max_lon().max(other.max_lon()),
        )
    }
}

impl From<Rect> for Envelope {
    fn from(rect: Rect) -> Self {
        Self::from_rect(rect)
    }
}
