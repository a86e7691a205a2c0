// SPDX-License-Identifier: MPL-2.0
//! Cache event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::frame::FrameNumber;

/// A cache mutation captured with the moment it happened.
#[derive(Debug, Clone)]
pub struct CacheEvent {
    /// When the event occurred (monotonic clock for duration calculations)
    pub timestamp: Instant,
    /// The type and data of the event
    pub kind: CacheEventKind,
}

impl CacheEvent {
    /// Creates a new cache event with the current timestamp.
    #[must_use]
    pub fn new(kind: CacheEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }
}

/// The type and associated data for a cache event.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CacheEventKind {
    /// A frame number entered the cache for the first time.
    Inserted { frame: FrameNumber, bytes: usize },

    /// A cached frame was overwritten by a newer handle.
    Replaced {
        frame: FrameNumber,
        old_bytes: usize,
        new_bytes: usize,
    },

    /// The eviction controller dropped a least recently used frame.
    Evicted { frame: FrameNumber, bytes: usize },

    /// A frame was removed explicitly.
    Removed { frame: FrameNumber, bytes: usize },

    /// Every frame was dropped at once.
    Cleared { frames: usize, bytes: usize },

    /// The byte budget was replaced.
    BudgetChanged { old_max_bytes: usize, new_max_bytes: usize },
}

impl CacheEventKind {
    /// Returns the frame number this event concerns, if it concerns one.
    #[must_use]
    pub fn frame(&self) -> Option<FrameNumber> {
        match self {
            Self::Inserted { frame, .. }
            | Self::Replaced { frame, .. }
            | Self::Evicted { frame, .. }
            | Self::Removed { frame, .. } => Some(*frame),
            Self::Cleared { .. } | Self::BudgetChanged { .. } => None,
        }
    }

    /// Returns true if this event records an eviction.
    #[must_use]
    pub fn is_eviction(&self) -> bool {
        matches!(self, Self::Evicted { .. })
    }
}
