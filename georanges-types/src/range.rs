use serde::{Deserialize, Serialize};
use std::fmt;

/// A half-open interval `[begin, end)` over index positions.
///
/// Positions are the integer values of the 16 index digits, so ordering a
/// set of ranges by `begin` is the same as ordering their index strings.
///
/// # Examples
///
/// ```
/// use georanges_types::range::PositionRange;
///
/// let range = PositionRange::new(10, 20);
/// assert_eq!(range.width(), 10);
/// assert!(range.contains(15));
/// assert!(!range.contains(20));
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct PositionRange {
    pub begin: u64,
    pub end: u64,
}

impl PositionRange {
    pub fn new(begin: u64, end: u64) -> Self {
        Self { begin, end }
    }

    /// A range covering exactly one grid cell.
    pub fn cell(position: u64) -> Self {
        Self::new(position, position + 1)
    }

    /// Number of positions covered. Zero for empty or inverted ranges.
    pub fn width(&self) -> u64 {
        self.end.saturating_sub(self.begin)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.begin
    }

    pub fn contains(&self, position: u64) -> bool {
        position >= self.begin && position < self.end
    }

    /// True if `other` starts exactly where this range ends.
    pub fn is_followed_by(&self, other: &PositionRange) -> bool {
        self.end == other.begin
    }

    pub fn overlaps(&self, other: &PositionRange) -> bool {
        self.begin < other.end && other.begin < self.end
    }
}

impl fmt::Display for PositionRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {})", self.begin, self.end)
    }
}

/// A scan range expressed as a pair of index strings.
///
/// Both bounds use the 18-character display form (16 digits with `..` after
/// the sixth). Scanners compare them byte-for-byte.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct IndexRange {
    pub start: String,
    pub end: String,
}

impl IndexRange {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }
}

impl fmt::Display for IndexRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.start, self.end)
    }
}
