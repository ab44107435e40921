//! Validated break-point sets.

use serde::{Deserialize, Serialize};

use crate::bucketize::bucket_index;
use crate::error::{BinError, BinResult};

/// A non-decreasing, NaN-free sequence of break points.
///
/// `n` break points induce `n + 1` buckets. Bucket `k` (1-based) covers
/// `(breaks[k-2], breaks[k-1]]`; the first bucket is unbounded below and the
/// last is unbounded above. Repeated break points are allowed and produce
/// empty buckets.
///
/// # Example
///
/// ```rust
/// use binwise::Breaks;
///
/// let breaks = Breaks::new(vec![1.0, 2.0, 3.0]).unwrap();
/// assert_eq!(breaks.bucket_count(), 4);
/// assert_eq!(breaks.bucket_of(2.0), 2);
/// assert_eq!(breaks.bounds(1), Some((f64::NEG_INFINITY, 1.0)));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f64>", into = "Vec<f64>")]
pub struct Breaks {
    points: Vec<f64>,
}

impl Breaks {
    /// Creates a break-point set from already sorted points.
    ///
    /// # Errors
    ///
    /// Returns [`BinError::NanBreak`] for a NaN point and
    /// [`BinError::UnsortedBreaks`] for the first decreasing pair.
    pub fn new(points: Vec<f64>) -> BinResult<Self> {
        if let Some(index) = points.iter().position(|p| p.is_nan()) {
            return Err(BinError::nan_break(index));
        }
        if let Some(i) = points.windows(2).position(|w| w[1] < w[0]) {
            return Err(BinError::unsorted_breaks(i + 1, points[i], points[i + 1]));
        }
        Ok(Self { points })
    }

    /// Creates a break-point set from points in any order.
    ///
    /// # Errors
    ///
    /// Returns [`BinError::NanBreak`] if any point is NaN.
    pub fn from_unsorted(mut points: Vec<f64>) -> BinResult<Self> {
        if let Some(index) = points.iter().position(|p| p.is_nan()) {
            return Err(BinError::nan_break(index));
        }
        points.sort_by(f64::total_cmp);
        Ok(Self { points })
    }

    /// Returns the number of break points.
    #[must_use]
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Returns true if there are no break points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// Returns the number of buckets (`len() + 1`).
    #[must_use]
    pub fn bucket_count(&self) -> usize {
        self.points.len() + 1
    }

    /// Returns the break points as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[f64] {
        &self.points
    }

    /// Returns the 1-based bucket containing `value`.
    #[must_use]
    pub fn bucket_of(&self, value: f64) -> usize {
        bucket_index(value, &self.points)
    }

    /// Returns the `(lower, upper]` bounds of a 1-based bucket.
    ///
    /// Returns `None` for bucket 0 or buckets past `bucket_count()`.
    #[must_use]
    pub fn bounds(&self, bucket: usize) -> Option<(f64, f64)> {
        if bucket == 0 || bucket > self.bucket_count() {
            return None;
        }
        let lower = if bucket == 1 {
            f64::NEG_INFINITY
        } else {
            self.points[bucket - 2]
        };
        let upper = self
            .points
            .get(bucket - 1)
            .copied()
            .unwrap_or(f64::INFINITY);
        Some((lower, upper))
    }
}

impl TryFrom<Vec<f64>> for Breaks {
    type Error = BinError;

    fn try_from(points: Vec<f64>) -> BinResult<Self> {
        Self::new(points)
    }
}

impl From<Breaks> for Vec<f64> {
    fn from(breaks: Breaks) -> Self {
        breaks.points
    }
}

impl AsRef<[f64]> for Breaks {
    fn as_ref(&self) -> &[f64] {
        &self.points
    }
}
