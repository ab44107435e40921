//! Configuration for bucketization.

use serde::{Deserialize, Serialize};

/// Default minimum value count before binary search is run in parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 10_000;

/// Algorithm used to locate each value's bucket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScanStrategy {
    /// Single forward-only cursor. Linear, but assumes non-decreasing values.
    #[default]
    MergeScan,
    /// Independent binary search per value. Correct for any order.
    BinarySearch,
    /// Merge scan when the values are non-decreasing, binary search otherwise.
    Auto,
}

impl ScanStrategy {
    /// Returns the name of the strategy.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::MergeScan => "merge-scan",
            Self::BinarySearch => "binary-search",
            Self::Auto => "auto",
        }
    }
}

impl std::fmt::Display for ScanStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Configuration for a [`Bucketizer`](crate::Bucketizer).
///
/// Controls the lookup strategy and when binary search is parallelised.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BucketizeConfig {
    /// Lookup strategy.
    pub strategy: ScanStrategy,

    /// Enable parallel processing (requires 'parallel' feature).
    pub parallel: bool,

    /// Minimum value count to trigger parallel processing.
    /// Below this threshold, sequential is faster due to thread overhead.
    pub parallel_threshold: usize,
}

impl Default for BucketizeConfig {
    fn default() -> Self {
        Self {
            strategy: ScanStrategy::MergeScan,
            parallel: true,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }
}

impl BucketizeConfig {
    /// Creates a new config with default settings.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a config that always uses sequential processing.
    #[must_use]
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }

    /// Sets the lookup strategy.
    #[must_use]
    pub fn with_strategy(mut self, strategy: ScanStrategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Sets whether to use parallel processing.
    #[must_use]
    pub fn with_parallel(mut self, enabled: bool) -> Self {
        self.parallel = enabled;
        self
    }

    /// Sets the threshold for parallel processing.
    #[must_use]
    pub fn with_threshold(mut self, threshold: usize) -> Self {
        self.parallel_threshold = threshold;
        self
    }

    /// Returns true if parallel processing should be used for the given count.
    #[must_use]
    pub fn should_parallelize(&self, count: usize) -> bool {
        cfg!(feature = "parallel") && self.parallel && count >= self.parallel_threshold
    }
}
