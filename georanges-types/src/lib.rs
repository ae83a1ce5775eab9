//! # georanges-types
//!
//! Core value types shared by the georanges range planner.
//!
//! - **Coordinates**: `LatLon`
//! - **Ranges**: `PositionRange` (integer positions), `IndexRange` (index strings)
//! - **Envelopes**: `Envelope`, an axis-aligned bounding box in lat/lon terms
//!
//! All types are serializable with Serde and built on top of the `geo` crate's
//! geometric primitives.
//!
//! ## Examples
//!
//! ```rust
//! use georanges_types::bbox::Envelope;
//! use georanges_types::point::LatLon;
//! use georanges_types::range::PositionRange;
//!
//! let manhattan = Envelope::new(40.6829, -74.0479, 40.8820, -73.9067);
//! assert_eq!(manhattan.min_corner(), LatLon::new(40.6829, -74.0479));
//!
//! let range = PositionRange::new(100, 200);
//! assert_eq!(range.width(), 100);
//! ```

pub mod bbox;
pub mod point;
pub mod range;
