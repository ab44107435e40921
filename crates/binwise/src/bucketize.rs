//! Bucket index computation over raw slices.
//!
//! Two algorithms are provided:
//!
//! - [`bucketize`]: merge-style scan with a single forward-only cursor over
//!   the break points. O(nv + nb), but only correct when `values` is
//!   non-decreasing.
//! - [`bucketize_sorted_search`]: independent binary search per value.
//!   O(nv log nb), correct for any value order.
//!
//! Bucket `k` (1-based) covers `(breaks[k-2], breaks[k-1]]`, with the first
//! bucket unbounded below and bucket `nb + 1` unbounded above. A value equal
//! to a break point falls into the lower bucket.
//!
//! # Choosing an Algorithm
//!
//! | Algorithm | Cost | Unsorted values | NaN value |
//! |-----------|------|-----------------|-----------|
//! | Merge scan | O(nv + nb) | Wrong for out-of-order elements | Keeps current bucket |
//! | Binary search | O(nv log nb) | Correct | Bucket 1 |
//!
//! Neither function validates `breaks`; use [`Breaks`](crate::Breaks) for
//! a checked break-point set.
//!
//! # Example
//!
//! ```rust
//! use binwise::bucketize::bucketize;
//!
//! let buckets = bucketize(&[0.5, 1.5, 2.5, 3.5], &[1.0, 2.0, 3.0]);
//! assert_eq!(buckets, vec![1, 2, 3, 4]);
//! ```

use crate::error::{BinError, BinResult};

/// Assigns each value to the 1-based bucket induced by `breaks`.
///
/// The break cursor persists across values and never rewinds. This makes the
/// scan linear, but assumes `values` is non-decreasing: a smaller value that
/// follows a larger one keeps the larger value's bucket.
///
/// ```rust
/// use binwise::bucketize::bucketize;
///
/// // Out-of-order input: the second value does not rewind the cursor.
/// assert_eq!(bucketize(&[3.5, 1.0], &[1.0, 2.0, 3.0]), vec![4, 4]);
/// ```
///
/// `breaks` must be non-decreasing; this is not checked. Never panics.
#[must_use]
pub fn bucketize(values: &[f64], breaks: &[f64]) -> Vec<usize> {
    let mut out = vec![1; values.len()];
    merge_scan(values, breaks, &mut out);
    out
}

/// Like [`bucketize`], writing into a caller-provided buffer.
///
/// # Errors
///
/// Returns [`BinError::LengthMismatch`] if `out` and `values` differ in length.
/// The buffer is left untouched in that case.
pub fn bucketize_into(values: &[f64], breaks: &[f64], out: &mut [usize]) -> BinResult<()> {
    if out.len() != values.len() {
        return Err(BinError::length_mismatch(values.len(), out.len()));
    }
    merge_scan(values, breaks, out);
    Ok(())
}

/// Assigns each value to its bucket by binary search.
///
/// Each result is `1 + (number of breaks strictly less than the value)`, so
/// values may arrive in any order. For non-decreasing input this agrees with
/// [`bucketize`] element for element.
///
/// ```rust
/// use binwise::bucketize::bucketize_sorted_search;
///
/// assert_eq!(bucketize_sorted_search(&[3.5, 1.0], &[1.0, 2.0, 3.0]), vec![4, 1]);
/// ```
#[must_use]
pub fn bucketize_sorted_search(values: &[f64], breaks: &[f64]) -> Vec<usize> {
    values.iter().map(|&v| bucket_index(v, breaks)).collect()
}

/// Returns the 1-based bucket for a single value.
///
/// NaN compares false against every break and lands in bucket 1.
#[must_use]
pub fn bucket_index(value: f64, breaks: &[f64]) -> usize {
    breaks.partition_point(|&b| b < value) + 1
}

/// Returns true if `xs` is non-decreasing and contains no NaN.
///
/// This is the precondition [`bucketize`] relies on for `values`, and the
/// one both algorithms rely on for `breaks`.
#[must_use]
pub fn is_non_decreasing(xs: &[f64]) -> bool {
    if xs.iter().any(|x| x.is_nan()) {
        return false;
    }
    xs.windows(2).all(|w| w[0] <= w[1])
}

fn merge_scan(values: &[f64], breaks: &[f64], out: &mut [usize]) {
    log::trace!(
        "merge-scan bucketize: {} values over {} breaks",
        values.len(),
        breaks.len()
    );

    if breaks.is_empty() {
        out.fill(1);
        return;
    }

    let nb = breaks.len();
    let mut cursor = 0;
    for (slot, &v) in out.iter_mut().zip(values) {
        while cursor < nb && v > breaks[cursor] {
            cursor += 1;
        }
        *slot = cursor + 1;
    }
}
