//! Parallel processing utilities for report computation.
//!
//! Provides conditional parallel iteration based on configuration
//! and collection size. Uses rayon when the `parallel` feature is enabled.

use crate::types::ReportConfig;

/// Maps a function over items, conditionally using parallel iteration.
///
/// `workload` is the size that decides whether parallelism pays off
/// (typically the holding count, not the number of items). Uses parallel
/// iteration when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
/// - `workload` reaches `config.parallel_threshold`
///
/// Output order always matches input order.
#[allow(unused_variables)]
pub fn maybe_parallel_map<T, U, F>(
    items: &[T],
    workload: usize,
    config: &ReportConfig,
    f: F,
) -> Vec<U>
where
    T: Sync,
    U: Send,
    F: Fn(&T) -> U + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(workload) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_maybe_parallel_map_sequential() {
        let config = ReportConfig::sequential();
        let items = vec![1, 2, 3, 4, 5];
        let results: Vec<i32> = maybe_parallel_map(&items, items.len(), &config, |x| x * 2);
        assert_eq!(results, vec![2, 4, 6, 8, 10]);
    }

    #[test]
    fn test_maybe_parallel_map_preserves_order() {
        let config = ReportConfig::default().with_threshold(1);
        let items: Vec<usize> = (0..1_000).collect();
        let results = maybe_parallel_map(&items, 10_000, &config, |x| x + 1);
        assert_eq!(results, (1..=1_000).collect::<Vec<_>>());
    }
}
