//! Conditional parallel iteration.
//!
//! Uses rayon when the `parallel` feature is enabled and the configuration
//! allows it for the input size.

use crate::config::BucketizeConfig;

/// Maps a function over items, conditionally using parallel iteration.
///
/// Uses parallel iteration when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
/// - The collection size reaches `config.parallel_threshold`
///
/// Output order always matches input order.
#[allow(unused_variables)]
pub(crate) fn maybe_parallel_map<T, U, F>(items: &[T], config: &BucketizeConfig, f: F) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            log::debug!("parallel map over {} items", items.len());
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sequential_map() {
        let config = BucketizeConfig::sequential();
        let items = vec![1, 2, 3];
        let results: Vec<i32> = maybe_parallel_map(&items, &config, |x| x * 2);
        assert_eq!(results, vec![2, 4, 6]);
    }

    #[test]
    fn test_preserves_order_above_threshold() {
        let config = BucketizeConfig::new().with_threshold(4);
        let items: Vec<usize> = (0..1_000).collect();
        let results = maybe_parallel_map(&items, &config, |x| x + 1);
        assert_eq!(results, (1..=1_000).collect::<Vec<_>>());
    }
}
