// SPDX-License-Identifier: MPL-2.0
//! Frame cache performance counters.

/// Statistics about cache performance.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CacheStats {
    /// Number of frames currently in cache.
    pub frame_count: usize,

    /// Total bytes currently used by cached frames.
    pub resident_bytes: usize,

    /// Number of lookups that found a frame.
    pub hits: u64,

    /// Number of lookups that found nothing.
    pub misses: u64,

    /// Number of frames added under a new frame number.
    pub insertions: u64,

    /// Number of frames that overwrote an existing frame number.
    pub replacements: u64,

    /// Number of frames evicted to honor the byte budget.
    pub evictions: u64,

    /// Number of frames removed explicitly.
    pub removals: u64,
}

impl CacheStats {
    /// Returns the cache hit rate as a percentage (0.0 - 100.0).
    // Allow cast_precision_loss: hit/miss counts are unlikely to exceed
    // the f64 mantissa (2^52).
    #[allow(clippy::cast_precision_loss)]
    #[must_use]
    pub fn hit_rate(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            (self.hits as f64 / total as f64) * 100.0
        }
    }
}
