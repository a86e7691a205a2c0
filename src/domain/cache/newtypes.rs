// SPDX-License-Identifier: MPL-2.0
//! Frame cache newtypes.
//!
//! This module provides type-safe wrappers for frame cache values,
//! ensuring they are always within valid ranges.

/// Number of bytes in one megabyte (MiB), as used by cache sizing.
pub const BYTES_PER_MB: usize = 1024 * 1024;

// =============================================================================
// ByteBudget
// =============================================================================

/// Upper bound on the bytes a frame cache may keep resident.
///
/// A budget of zero means "unbounded": the cache never evicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ByteBudget(usize);

impl ByteBudget {
    /// Creates a budget of exactly `bytes` bytes.
    #[must_use]
    pub fn new(bytes: usize) -> Self {
        Self(bytes)
    }

    /// Creates a budget that never triggers eviction.
    #[must_use]
    pub fn unbounded() -> Self {
        Self(0)
    }

    /// Creates a budget from a size in megabytes, saturating on overflow.
    #[must_use]
    pub fn from_megabytes(megabytes: u32) -> Self {
        Self((megabytes as usize).saturating_mul(BYTES_PER_MB))
    }

    /// Returns the budget in bytes.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }

    /// Returns true if this budget disables eviction.
    #[must_use]
    pub fn is_unbounded(self) -> bool {
        self.0 == 0
    }

    /// Returns true if `resident` bytes exceed this budget.
    #[must_use]
    pub fn is_exceeded_by(self, resident: usize) -> bool {
        !self.is_unbounded() && resident > self.0
    }
}

impl From<FrameCacheMb> for ByteBudget {
    fn from(size: FrameCacheMb) -> Self {
        Self::from_megabytes(size.value())
    }
}

// =============================================================================
// FrameCacheMb
// =============================================================================

/// Frame cache size bounds in megabytes (0 to 16384, where 0 = unbounded).
pub mod frame_cache_mb_bounds {
    /// Minimum cache size (0 disables the byte limit).
    pub const MIN: u32 = 0;
    /// Maximum cache size (16 GiB).
    pub const MAX: u32 = 16_384;
    /// Default cache size.
    pub const DEFAULT: u32 = 64;
}

/// Frame cache size in megabytes.
///
/// This newtype enforces validity at the type level, ensuring the value
/// is always within the valid range (0–16384 MB).
///
/// # Example
///
/// ```
/// use frame_cache::domain::cache::FrameCacheMb;
///
/// let size = FrameCacheMb::new(128);
/// assert_eq!(size.value(), 128);
///
/// // Values outside range are clamped
/// let too_high = FrameCacheMb::new(100_000);
/// assert_eq!(too_high.value(), 16_384);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameCacheMb(u32);

impl FrameCacheMb {
    /// Creates a new cache size, clamping to valid range.
    #[must_use]
    pub fn new(value: u32) -> Self {
        Self(value.clamp(frame_cache_mb_bounds::MIN, frame_cache_mb_bounds::MAX))
    }

    /// Returns the value as u32.
    #[must_use]
    pub fn value(self) -> u32 {
        self.0
    }

    /// Returns true if this size disables the byte limit.
    #[must_use]
    pub fn is_unbounded(self) -> bool {
        self.0 == 0
    }

    /// Returns true if this is the maximum value.
    #[must_use]
    pub fn is_max(self) -> bool {
        self.0 >= frame_cache_mb_bounds::MAX
    }
}

impl Default for FrameCacheMb {
    fn default() -> Self {
        Self(frame_cache_mb_bounds::DEFAULT)
    }
}

// =============================================================================
// EventLogCapacity
// =============================================================================

/// Event log capacity bounds (16 to 10000 events).
pub mod event_log_capacity_bounds {
    /// Minimum event log capacity.
    pub const MIN: usize = 16;
    /// Maximum event log capacity.
    pub const MAX: usize = 10_000;
    /// Default event log capacity.
    pub const DEFAULT: usize = 256;
}

/// Capacity of the cache event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EventLogCapacity(usize);

impl EventLogCapacity {
    /// Creates a new capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(
            event_log_capacity_bounds::MIN,
            event_log_capacity_bounds::MAX,
        ))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for EventLogCapacity {
    fn default() -> Self {
        Self(event_log_capacity_bounds::DEFAULT)
    }
}
