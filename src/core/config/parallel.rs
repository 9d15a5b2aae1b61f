//! Shared parallel processing configuration types.

use crate::core::constants::DEFAULT_PAGE_PARALLEL_THRESHOLD;
use serde::{Deserialize, Serialize};

/// Configuration for parallel processing behavior across a multi-page
/// document.
///
/// Pages are independent (each owns its raster copy and block list), so the
/// document orchestrator may fan them out across the rayon thread pool. Small
/// documents stay sequential: the fan-out overhead outweighs the
/// sub-millisecond per-page geometric work.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParallelPolicy {
    /// Maximum number of threads to use for parallel processing.
    /// If None, rayon will use the default thread pool size (typically the
    /// number of CPU cores).
    #[serde(default)]
    pub max_threads: Option<usize>,

    /// Documents with at most this many pages are processed sequentially.
    #[serde(default = "ParallelPolicy::default_page_threshold")]
    pub page_threshold: usize,
}

impl ParallelPolicy {
    /// Create a new ParallelPolicy with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the maximum number of threads.
    pub fn with_max_threads(mut self, max_threads: Option<usize>) -> Self {
        self.max_threads = max_threads;
        self
    }

    /// Set the sequential-processing page threshold.
    pub fn with_page_threshold(mut self, threshold: usize) -> Self {
        self.page_threshold = threshold;
        self
    }

    /// Install the global rayon thread pool with the configured number of
    /// threads.
    ///
    /// Call once at application startup, before any parallel processing. If
    /// `max_threads` is None this does nothing and rayon keeps its default
    /// pool size.
    ///
    /// # Returns
    ///
    /// - `Ok(true)` if the thread pool was configured
    /// - `Ok(false)` if `max_threads` is None (no configuration needed)
    /// - `Err` if the thread pool has already been initialized
    pub fn install_global_thread_pool(&self) -> Result<bool, rayon::ThreadPoolBuildError> {
        if let Some(num_threads) = self.max_threads {
            rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build_global()?;
            Ok(true)
        } else {
            Ok(false)
        }
    }

    /// Returns true when `page_count` pages should be fanned out in parallel.
    pub fn should_parallelize(&self, page_count: usize) -> bool {
        page_count > self.page_threshold
    }

    fn default_page_threshold() -> usize {
        DEFAULT_PAGE_PARALLEL_THRESHOLD
    }
}

impl Default for ParallelPolicy {
    fn default() -> Self {
        Self {
            max_threads: None,
            page_threshold: Self::default_page_threshold(),
        }
    }
}
