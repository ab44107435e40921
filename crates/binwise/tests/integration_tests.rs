//! Integration tests for the public bucketization API.

use binwise::prelude::*;

const BREAKS: [f64; 3] = [1.0, 2.0, 3.0];

// =============================================================================
// REFERENCE SCENARIOS
// =============================================================================

#[test]
fn test_one_value_per_bucket() {
    assert_eq!(bucketize(&[0.5, 1.5, 2.5, 3.5], &BREAKS), vec![1, 2, 3, 4]);
}

#[test]
fn test_no_values() {
    assert_eq!(bucketize(&[], &BREAKS), Vec::<usize>::new());
}

#[test]
fn test_no_breaks() {
    assert_eq!(bucketize(&[5.0, 10.0], &[]), vec![1, 1]);
}

#[test]
fn test_value_on_break_point() {
    assert_eq!(bucketize(&[2.0], &BREAKS), vec![2]);
}

#[test]
fn test_unsorted_values_keep_advanced_cursor() {
    assert_eq!(bucketize(&[3.0, 1.0], &BREAKS), vec![3, 3]);
    assert_eq!(bucketize(&[3.5, 1.0], &BREAKS), vec![4, 4]);

    // Per-value search gives the order-independent answer.
    assert_eq!(bucketize_sorted_search(&[3.0, 1.0], &BREAKS), vec![3, 1]);
    assert_eq!(bucketize_sorted_search(&[3.5, 1.0], &BREAKS), vec![4, 1]);
}

// =============================================================================
// END-TO-END
// =============================================================================

#[test]
fn test_maturity_ladder() {
    // Standard maturity boundaries in years
    let breaks = Breaks::new(vec![1.0, 3.0, 5.0, 7.0, 10.0, 20.0, 30.0]).unwrap();
    let maturities = [0.25, 1.0, 2.0, 4.5, 6.0, 10.0, 12.0, 25.0, 30.0, 40.0];

    let bucketizer = Bucketizer::new(breaks);
    let buckets = bucketizer.bucketize(&maturities);
    assert_eq!(buckets, vec![1, 1, 2, 3, 4, 5, 6, 7, 7, 8]);

    let counts = bucketizer.counts(&maturities);
    assert_eq!(counts, vec![2, 1, 1, 1, 1, 1, 2, 1]);
}

#[test]
fn test_auto_strategy_detects_unsorted_input() {
    let breaks = Breaks::from_unsorted(vec![3.0, 1.0, 2.0]).unwrap();
    let config = BucketizeConfig::sequential().with_strategy(ScanStrategy::Auto);
    let bucketizer = Bucketizer::new(breaks).with_config(config);

    assert_eq!(bucketizer.bucketize(&[2.5, 0.5, 3.5, 1.5]), vec![3, 1, 4, 2]);
    assert_eq!(bucketizer.bucketize(&[0.5, 1.5, 2.5, 3.5]), vec![1, 2, 3, 4]);
}

#[test]
fn test_large_input_binary_search() {
    let breaks = Breaks::new((1..100).map(f64::from).collect()).unwrap();
    let config = BucketizeConfig::new()
        .with_strategy(ScanStrategy::BinarySearch)
        .with_threshold(1_000);
    let bucketizer = Bucketizer::new(breaks).with_config(config);

    // Descending input, above the parallel threshold
    let values: Vec<f64> = (0..20_000).rev().map(|i| f64::from(i) / 200.0).collect();
    let buckets = bucketizer.bucketize(&values);

    let expected = bucketize_sorted_search(&values, bucketizer.breaks().as_slice());
    assert_eq!(buckets, expected);
    assert_eq!(buckets[0], 100);
    assert_eq!(*buckets.last().unwrap(), 1);
}

#[test]
fn test_bucketize_into_reuses_buffer() {
    let mut out = vec![0; 4];
    bucketize_into(&[0.5, 1.5, 2.5, 3.5], &BREAKS, &mut out).unwrap();
    assert_eq!(out, vec![1, 2, 3, 4]);

    bucketize_into(&[3.0, 3.0, 3.0, 3.0], &BREAKS, &mut out).unwrap();
    assert_eq!(out, vec![3, 3, 3, 3]);

    let err = bucketize_into(&[1.0], &BREAKS, &mut out).unwrap_err();
    assert!(matches!(
        err,
        BinError::LengthMismatch {
            expected: 1,
            actual: 4
        }
    ));
}

#[test]
fn test_validated_breaks_reject_bad_input() {
    assert!(matches!(
        Breaks::new(vec![2.0, 1.0]),
        Err(BinError::UnsortedBreaks { index: 1, .. })
    ));
    assert!(matches!(
        Breaks::try_from(vec![f64::NAN]),
        Err(BinError::NanBreak { index: 0 })
    ));
    assert!(is_non_decreasing(Breaks::new(vec![1.0, 1.0]).unwrap().as_ref()));
}
