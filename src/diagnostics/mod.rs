// SPDX-License-Identifier: MPL-2.0
//! Diagnostics for frame cache activity.
//!
//! A cache can optionally keep a memory-bounded log of what happened to its
//! frames (insertions, replacements, evictions, removals). The log helps
//! explain playback stutter after the fact: a burst of evictions right
//! before a seek usually means the budget is too small for the clip.
//!
//! # Architecture
//!
//! - [`EventLog`]: Bounded, oldest-first log of recent events
//! - [`CacheEvent`]: Timestamped record of one cache mutation
//! - [`CacheEventKind`]: What happened, serializable for export

mod event_log;
mod events;

pub use event_log::EventLog;
pub use events::{CacheEvent, CacheEventKind};
