// SPDX-License-Identifier: MPL-2.0
//! Structural consistency violations reported by
//! [`FrameCache::check_invariants`](super::FrameCache::check_invariants).

use std::fmt;

use crate::frame::FrameNumber;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InvariantViolation {
    /// Index and recency list hold different numbers of frames.
    LengthMismatch { indexed: usize, recency: usize },

    /// A frame number is indexed but missing from the recency list.
    MissingFromRecency(FrameNumber),

    /// A frame number appears more than once in the recency list.
    DuplicateInRecency(FrameNumber),

    /// The running byte total drifted from the sum of cached frame sizes.
    ResidentBytesDrift { tracked: usize, actual: usize },

    /// More than one frame is cached and their bytes exceed the budget.
    OverBudget {
        resident: usize,
        max_bytes: usize,
        frames: usize,
    },
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InvariantViolation::LengthMismatch { indexed, recency } => write!(
                f,
                "Index holds {} frames but recency list holds {}",
                indexed, recency
            ),
            InvariantViolation::MissingFromRecency(n) => {
                write!(f, "Frame {} is indexed but not in the recency list", n)
            }
            InvariantViolation::DuplicateInRecency(n) => {
                write!(f, "Frame {} appears twice in the recency list", n)
            }
            InvariantViolation::ResidentBytesDrift { tracked, actual } => write!(
                f,
                "Tracked {} resident bytes, frames actually hold {}",
                tracked, actual
            ),
            InvariantViolation::OverBudget {
                resident,
                max_bytes,
                frames,
            } => write!(
                f,
                "{} frames hold {} bytes, over the {} byte budget",
                frames, resident, max_bytes
            ),
        }
    }
}

impl std::error::Error for InvariantViolation {}
