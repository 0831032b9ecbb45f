//! Conditional parallel iteration for weighting batches.
//!
//! Uses rayon when the `parallel` feature is enabled and the batch is large
//! enough; otherwise falls back to a sequential iterator. Output order always
//! matches input order.

use crate::config::WeightingConfig;

/// Maps a fallible function over items, stopping at the first error.
///
/// Uses parallel iteration when:
/// - The `parallel` feature is enabled
/// - `config.parallel` is true
/// - The collection size reaches `config.parallel_threshold`
///
/// `f` receives items at the slice lifetime `'a`, so results may borrow them.
///
/// In parallel mode the error returned is one of the failing items' errors,
/// not necessarily the first by index.
#[allow(unused_variables)]
pub fn maybe_parallel_try_map<'a, T, U, E, F>(
    items: &'a [T],
    config: &WeightingConfig,
    f: F,
) -> Result<Vec<U>, E>
where
    T: Sync,
    U: Send,
    E: Send,
    F: Fn(&'a T) -> Result<U, E> + Sync + Send,
{
    #[cfg(feature = "parallel")]
    {
        use rayon::prelude::*;
        if config.should_parallelize(items.len()) {
            return items.par_iter().map(f).collect();
        }
    }

    items.iter().map(f).collect()
}
