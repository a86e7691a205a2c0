// SPDX-License-Identifier: MPL-2.0
//! Frame cache domain types.
//!
//! This module provides pure domain types for the frame cache:
//! - [`ByteBudget`]: Upper bound on resident frame bytes (zero = unbounded)
//! - [`FrameCacheMb`]: User-facing cache size in megabytes
//! - [`EventLogCapacity`]: Capacity of the cache event log

mod newtypes;

pub use newtypes::{
    event_log_capacity_bounds, frame_cache_mb_bounds, ByteBudget, EventLogCapacity, FrameCacheMb,
    BYTES_PER_MB,
};
