// SPDX-License-Identifier: MPL-2.0
//! Frame values consumed by the cache.
//!
//! The cache only needs two facts about a frame: where it sits on the
//! timeline and how much memory its image payload occupies. Anything that
//! can answer both implements [`Frame`]. [`RgbaFrame`] is a ready-made
//! implementation for decoded RGBA images.

use crate::error::{FrameError, Result};
use std::sync::Arc;

/// Position of a frame on the source timeline.
///
/// Frame numbers start at 1 and increase in timeline order, though a cache
/// may hold a sparse subset of them.
pub type FrameNumber = i64;

/// A decoded frame that can be held by a [`FrameCache`](crate::FrameCache).
///
/// Both accessors must be cheap and free of side effects: the cache calls
/// them while holding its lock.
pub trait Frame: Send + Sync {
    /// Returns this frame's timeline position.
    fn frame_number(&self) -> FrameNumber;

    /// Returns the in-memory footprint of the image payload in bytes.
    fn size_in_bytes(&self) -> usize;
}

/// Number of bytes per RGBA pixel.
const RGBA_BYTES_PER_PIXEL: usize = 4;

/// A decoded, color-converted video frame ready for display.
#[derive(Debug, Clone)]
pub struct RgbaFrame {
    /// Timeline position.
    number: FrameNumber,

    /// RGBA pixel data (width × height × 4 bytes).
    rgba_data: Arc<Vec<u8>>,

    /// Frame width in pixels.
    width: u32,

    /// Frame height in pixels.
    height: u32,
}

impl RgbaFrame {
    /// Wraps an existing RGBA pixel buffer.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the buffer length is
    /// not exactly `width * height * 4`.
    pub fn from_pixels(
        number: FrameNumber,
        width: u32,
        height: u32,
        rgba_data: Vec<u8>,
    ) -> Result<Self> {
        let expected = Self::expected_len(width, height)?;
        if rgba_data.len() != expected {
            return Err(FrameError::PixelBufferMismatch {
                expected,
                actual: rgba_data.len(),
            }
            .into());
        }

        Ok(Self {
            number,
            rgba_data: Arc::new(rgba_data),
            width,
            height,
        })
    }

    /// Creates a fully transparent frame of the given dimensions.
    ///
    /// # Errors
    ///
    /// Returns an error if either dimension is zero or the size overflows.
    pub fn blank(number: FrameNumber, width: u32, height: u32) -> Result<Self> {
        let len = Self::expected_len(width, height)?;
        Self::from_pixels(number, width, height, vec![0u8; len])
    }

    fn expected_len(width: u32, height: u32) -> std::result::Result<usize, FrameError> {
        if width == 0 || height == 0 {
            return Err(FrameError::ZeroDimensions);
        }
        (width as usize)
            .checked_mul(height as usize)
            .and_then(|pixels| pixels.checked_mul(RGBA_BYTES_PER_PIXEL))
            .ok_or(FrameError::TooLarge)
    }

    /// Returns the frame number.
    #[must_use]
    pub fn number(&self) -> FrameNumber {
        self.number
    }

    /// Returns the frame width in pixels.
    #[must_use]
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the frame height in pixels.
    #[must_use]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Returns the raw RGBA bytes.
    #[must_use]
    pub fn rgba_data(&self) -> &[u8] {
        &self.rgba_data
    }
}

impl Frame for RgbaFrame {
    fn frame_number(&self) -> FrameNumber {
        self.number
    }

    fn size_in_bytes(&self) -> usize {
        self.rgba_data.len()
    }
}
