//! Resource sizing checks
//!
//! Sizes are in bytes; `-1` ([`UNSET`]) means the option was not given and
//! every rule that depends on it is skipped.

use llap_meta::MIB;

/// Sentinel for a sizing option that was not supplied.
pub const UNSET: i64 = -1;

fn is_set(value: i64) -> bool {
    value != UNSET
}

/// A sizing rule was violated. Messages carry the offending values so the
/// operator can correct the invocation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BudgetError {
    #[error("Invalid {option}: {value}; sizes and counts must not be negative")]
    NegativeValue { option: &'static str, value: i64 },

    #[error(
        "Cache has to be smaller than the container sizing (cache={cache} bytes, container={container} bytes)"
    )]
    CacheExceedsContainer { cache: i64, container: i64 },

    #[error(
        "Working memory has to be smaller than the container sizing (xmx={heap} bytes, container={container} bytes)"
    )]
    HeapExceedsContainer { heap: i64, container: i64 },

    #[error(
        "Working memory + cache has to be smaller than the container sizing (xmx={heap} + cache={cache} bytes, container={container} bytes)"
    )]
    HeapPlusCacheExceedsContainer { heap: i64, cache: i64, container: i64 },

    #[error("Container size should be greater than minimum allocation({min_mb}m), got {container_mb}m")]
    BelowMinimumAllocation { container_mb: i64, min_mb: i64 },
}

/// The sizing requested for one daemon instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceBudget {
    pub container_bytes: i64,
    pub cache_bytes: i64,
    pub heap_bytes: i64,
    pub executors: i64,
    /// Whether the cache is allocated off-heap, outside the working memory.
    pub direct_allocator: bool,
}

impl Default for ResourceBudget {
    fn default() -> Self {
        Self {
            container_bytes: UNSET,
            cache_bytes: UNSET,
            heap_bytes: UNSET,
            executors: UNSET,
            direct_allocator: llap_meta::vars::IO_ALLOCATOR_DIRECT_DEFAULT,
        }
    }
}

impl ResourceBudget {
    /// Check the budget against itself and the cluster's minimum allocation.
    ///
    /// Pass [`UNSET`] as `min_allocation_mb` when the cluster does not report
    /// one.
    pub fn validate(&self, min_allocation_mb: i64) -> Result<(), BudgetError> {
        for (option, value) in [
            ("container size", self.container_bytes),
            ("cache size", self.cache_bytes),
            ("working memory", self.heap_bytes),
            ("executor count", self.executors),
        ] {
            if value < 0 && is_set(value) {
                return Err(BudgetError::NegativeValue { option, value });
            }
        }

        let container = self.container_bytes;
        if !is_set(container) {
            return Ok(());
        }

        if is_set(self.cache_bytes) && self.cache_bytes >= container {
            return Err(BudgetError::CacheExceedsContainer {
                cache: self.cache_bytes,
                container,
            });
        }

        if is_set(self.heap_bytes) && self.heap_bytes >= container {
            return Err(BudgetError::HeapExceedsContainer {
                heap: self.heap_bytes,
                container,
            });
        }

        if self.direct_allocator
            && is_set(self.heap_bytes)
            && is_set(self.cache_bytes)
            && self.heap_bytes.saturating_add(self.cache_bytes) >= container
        {
            return Err(BudgetError::HeapPlusCacheExceedsContainer {
                heap: self.heap_bytes,
                cache: self.cache_bytes,
                container,
            });
        }

        let container_mb = self.container_mb();
        if container_mb < min_allocation_mb {
            return Err(BudgetError::BelowMinimumAllocation {
                container_mb,
                min_mb: min_allocation_mb,
            });
        }

        Ok(())
    }

    /// Container size in the cluster's allocation unit, or [`UNSET`].
    pub fn container_mb(&self) -> i64 {
        to_mb(self.container_bytes)
    }

    /// Working memory in megabytes, or [`UNSET`].
    pub fn heap_mb(&self) -> i64 {
        to_mb(self.heap_bytes)
    }
}

fn to_mb(bytes: i64) -> i64 {
    if is_set(bytes) { bytes / MIB } else { UNSET }
}
