// SPDX-License-Identifier: MPL-2.0
//! In-memory frame cache.
//!
//! Readers decode frames at a cost of tens to hundreds of milliseconds each;
//! this module keeps recently produced frames around so scrubbing, looping
//! and re-rendering can reuse them within a fixed memory budget.

mod frame_cache;
mod invariants;
mod recency;
mod stats;

pub use frame_cache::FrameCache;
pub use invariants::InvariantViolation;
pub use stats::CacheStats;
