// SPDX-License-Identifier: MPL-2.0
//! `frame_cache` keeps recently decoded video frames in memory.
//!
//! Decoding a compressed frame and converting it to RGBA is expensive, so
//! readers park finished frames in a [`FrameCache`] keyed by frame number.
//! The cache evicts least recently used frames once their combined size
//! exceeds a byte budget, and hands frames out as shared `Arc` handles that
//! outlive eviction.
//!
//! ```
//! use std::sync::Arc;
//! use frame_cache::{FrameCache, RgbaFrame};
//!
//! // 1 MiB budget, each frame is 256 KiB
//! let cache = FrameCache::with_max_bytes(1024 * 1024);
//! for n in 1..=5 {
//!     cache.add(Arc::new(RgbaFrame::blank(n, 256, 256).unwrap()));
//! }
//!
//! assert_eq!(cache.count(), 4);
//! assert!(cache.get_frame(1).is_none());
//! assert_eq!(cache.smallest_frame().unwrap().number(), 2);
//! ```

#![doc(html_root_url = "https://docs.rs/frame_cache/0.1.0")]

pub mod cache;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod frame;

#[cfg(test)]
mod test_utils;

pub use cache::{CacheStats, FrameCache, InvariantViolation};
pub use domain::cache::ByteBudget;
pub use error::{Error, Result};
pub use frame::{Frame, FrameNumber, RgbaFrame};
