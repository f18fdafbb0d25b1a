//! Execution strategy selection for scenario generation and evaluation.

#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(not(feature = "parallel"))]
use crate::error::ConformanceError;
use crate::error::Result;

/// Indicates how a [`crate::ConformanceSuite`] schedules independent work
/// items (random-trial generation and per-scenario evaluation).
///
/// Every work item owns its graph and its random stream, so results are
/// identical under every strategy; only throughput differs.
///
/// # Examples
/// ```
/// use irodori_core::ExecutionStrategy;
///
/// let strategy = ExecutionStrategy::default();
/// assert_eq!(strategy, ExecutionStrategy::Auto);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum ExecutionStrategy {
    /// Run in parallel when the `parallel` feature is enabled, sequentially
    /// otherwise.
    #[default]
    Auto,
    /// Run every work item on the calling thread, in order.
    Sequential,
    /// Fan work items out over the rayon thread pool.
    Parallel,
}

impl ExecutionStrategy {
    /// Fails when the strategy cannot be honoured by this build.
    pub(super) fn ensure_available(self) -> Result<Self> {
        match self {
            #[cfg(not(feature = "parallel"))]
            Self::Parallel => Err(ConformanceError::BackendUnavailable { requested: self }),
            _ => Ok(self),
        }
    }

    #[cfg_attr(not(feature = "parallel"), expect(dead_code, reason = "parallel feature disabled"))]
    fn runs_in_parallel(self) -> bool {
        match self {
            Self::Sequential => false,
            Self::Auto | Self::Parallel => cfg!(feature = "parallel"),
        }
    }

    /// Maps `f` over `items`, preserving input order in the output.
    pub(super) fn map_ordered<'a, I, T, F>(self, items: &'a [I], f: F) -> Vec<T>
    where
        I: Sync,
        T: Send,
        F: Fn(&'a I) -> T + Sync + Send,
    {
        #[cfg(feature = "parallel")]
        if self.runs_in_parallel() {
            return items.par_iter().map(f).collect();
        }
        items.iter().map(f).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_ordered_preserves_order_for_every_strategy() {
        let items: Vec<u32> = (0..64).collect();
        for strategy in [
            ExecutionStrategy::Auto,
            ExecutionStrategy::Sequential,
            ExecutionStrategy::Parallel,
        ] {
            let Ok(strategy) = strategy.ensure_available() else {
                continue;
            };
            let doubled = strategy.map_ordered(&items, |item| item * 2);
            assert_eq!(doubled, items.iter().map(|item| item * 2).collect::<Vec<_>>());
        }
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn parallel_is_available_with_feature() {
        assert_eq!(
            ExecutionStrategy::Parallel.ensure_available(),
            Ok(ExecutionStrategy::Parallel)
        );
    }

    #[cfg(not(feature = "parallel"))]
    #[test]
    fn parallel_is_unavailable_without_feature() {
        let err = ExecutionStrategy::Parallel
            .ensure_available()
            .expect_err("parallel backend is compiled out");
        assert_eq!(
            err,
            ConformanceError::BackendUnavailable {
                requested: ExecutionStrategy::Parallel,
            }
        );
    }
}
