//! # Binwise
//!
//! Step-function bucketization: map each value of a sequence to the 1-based
//! bucket it falls into, given sorted break points.
//!
//! This crate provides:
//!
//! - **Merge scan**: [`bucketize()`], a linear scan with one forward-only
//!   cursor, for values already in non-decreasing order
//! - **Binary search**: [`bucketize_sorted_search`], independent lookup per
//!   value for arbitrary order
//! - **Break points**: [`Breaks`], a validated break-point set with bucket
//!   bounds
//! - **Bucketizer**: [`Bucketizer`], config-driven strategy selection and
//!   per-bucket counts
//!
//! ## Buckets
//!
//! `n` break points induce `n + 1` buckets. Bucket `k` covers
//! `(breaks[k-2], breaks[k-1]]`: upper bounds are inclusive, so a value equal
//! to a break point falls into the lower bucket. With no break points every
//! value is in bucket 1.
//!
//! ## Quick Start
//!
//! ```rust
//! use binwise::prelude::*;
//!
//! let buckets = bucketize(&[0.5, 1.5, 2.5, 3.5], &[1.0, 2.0, 3.0]);
//! assert_eq!(buckets, vec![1, 2, 3, 4]);
//! ```
//!
//! ## Feature Flags
//!
//! - `parallel`: Enable rayon-based parallel binary search for large inputs

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::doc_markdown)]

pub mod breaks;
pub mod bucketize;
pub mod bucketizer;
pub mod config;
pub mod error;
mod parallel;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use crate::breaks::Breaks;
    pub use crate::bucketize::{
        bucket_index, bucketize, bucketize_into, bucketize_sorted_search, is_non_decreasing,
    };
    pub use crate::bucketizer::Bucketizer;
    pub use crate::config::{BucketizeConfig, ScanStrategy};
    pub use crate::error::{BinError, BinResult};
}

pub use breaks::Breaks;
pub use bucketize::{bucketize, bucketize_sorted_search};
pub use bucketizer::Bucketizer;
pub use config::{BucketizeConfig, ScanStrategy};
pub use error::{BinError, BinResult};
