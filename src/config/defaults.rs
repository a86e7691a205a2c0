// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the crate. Constants are organized by category.
//!
//! # Categories
//!
//! - **Frame Cache**: Byte budget for decoded frames
//! - **Event Log**: Capacity of the optional cache event log

// ==========================================================================
// Frame Cache Defaults
// ==========================================================================

/// Default frame cache size in megabytes.
/// Holds ~8 frames at 1080p RGBA or ~64 frames at 480p.
pub const DEFAULT_FRAME_CACHE_MB: u32 = 64;

/// Minimum frame cache size in megabytes (0 disables the byte limit).
pub const MIN_FRAME_CACHE_MB: u32 = 0;

/// Maximum frame cache size in megabytes.
pub const MAX_FRAME_CACHE_MB: u32 = 16_384;

// ==========================================================================
// Event Log Defaults
// ==========================================================================

/// Default number of cache events kept when the log is enabled.
pub const DEFAULT_EVENT_LOG_CAPACITY: usize = 256;

/// Minimum event log capacity.
pub const MIN_EVENT_LOG_CAPACITY: usize = 16;

/// Maximum event log capacity.
pub const MAX_EVENT_LOG_CAPACITY: usize = 10_000;
