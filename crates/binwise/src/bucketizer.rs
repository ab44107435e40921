//! Strategy-driven bucketizer over a validated break-point set.

use crate::breaks::Breaks;
use crate::bucketize::{bucketize, is_non_decreasing};
use crate::config::{BucketizeConfig, ScanStrategy};
use crate::parallel::maybe_parallel_map;

/// Assigns values to the buckets of a fixed [`Breaks`] set.
///
/// The lookup algorithm is chosen by [`BucketizeConfig::strategy`]. The
/// default, [`ScanStrategy::MergeScan`], reproduces [`bucketize`] exactly,
/// including its assumption that values arrive in non-decreasing order.
///
/// # Example
///
/// ```rust
/// use binwise::{Breaks, BucketizeConfig, Bucketizer, ScanStrategy};
///
/// let breaks = Breaks::new(vec![1.0, 2.0, 3.0]).unwrap();
/// let bucketizer = Bucketizer::new(breaks)
///     .with_config(BucketizeConfig::new().with_strategy(ScanStrategy::Auto));
///
/// assert_eq!(bucketizer.bucketize(&[3.5, 1.0]), vec![4, 1]);
/// assert_eq!(bucketizer.counts(&[0.5, 0.7, 3.5]), vec![2, 0, 0, 1]);
/// ```
#[derive(Debug, Clone, Default)]
pub struct Bucketizer {
    breaks: Breaks,
    config: BucketizeConfig,
}

impl Bucketizer {
    /// Creates a bucketizer with the default configuration.
    #[must_use]
    pub fn new(breaks: Breaks) -> Self {
        Self {
            breaks,
            config: BucketizeConfig::default(),
        }
    }

    /// Replaces the configuration.
    #[must_use]
    pub fn with_config(mut self, config: BucketizeConfig) -> Self {
        self.config = config;
        self
    }

    /// Returns the break points.
    #[must_use]
    pub fn breaks(&self) -> &Breaks {
        &self.breaks
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &BucketizeConfig {
        &self.config
    }

    /// Returns the 1-based bucket of every value, in input order.
    #[must_use]
    pub fn bucketize(&self, values: &[f64]) -> Vec<usize> {
        match self.config.strategy {
            ScanStrategy::MergeScan => bucketize(values, self.breaks.as_slice()),
            ScanStrategy::BinarySearch => self.search_each(values),
            ScanStrategy::Auto => {
                if is_non_decreasing(values) {
                    bucketize(values, self.breaks.as_slice())
                } else {
                    log::debug!(
                        "values not non-decreasing, falling back to {} over {} values",
                        ScanStrategy::BinarySearch,
                        values.len()
                    );
                    self.search_each(values)
                }
            }
        }
    }

    /// Returns how many values fall into each bucket.
    ///
    /// The result has `breaks().bucket_count()` entries, indexed from bucket 1
    /// at position 0, and sums to `values.len()`.
    #[must_use]
    pub fn counts(&self, values: &[f64]) -> Vec<usize> {
        let mut counts = vec![0; self.breaks.bucket_count()];
        for bucket in self.bucketize(values) {
            counts[bucket - 1] += 1;
        }
        counts
    }

    fn search_each(&self, values: &[f64]) -> Vec<usize> {
        maybe_parallel_map(values, &self.config, |&v| self.breaks.bucket_of(v))
    }
}
