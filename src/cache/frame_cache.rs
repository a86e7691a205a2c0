// SPDX-License-Identifier: MPL-2.0
//! Byte-budgeted LRU cache for decoded video frames.
//!
//! # Design
//!
//! - **Two structures**: a key-ordered index (frame number → handle) and a
//!   separate recency list. The index answers lookups and "smallest cached
//!   frame" queries; the recency list decides what to evict.
//! - **Memory-bounded**: eviction trims least recently used frames until the
//!   resident bytes fit the budget. A budget of zero disables eviction. A
//!   single frame larger than the budget is kept.
//! - **Explicit promotion**: only `add` and `move_to_front` count as a use.
//!   Lookups never reorder the recency list, so speculative lookups during a
//!   sequential scan do not protect stale frames.
//! - **Shared handles**: frames are held as `Arc`s. Eviction drops the
//!   cache's reference only; handles already given out stay valid.
//! - **Thread-safe**: every operation runs under one cache-wide mutex.
//!
//! # Usage
//!
//! ```
//! use std::sync::Arc;
//! use frame_cache::{FrameCache, RgbaFrame};
//!
//! let cache = FrameCache::with_max_bytes(64 * 1024 * 1024);
//! cache.add(Arc::new(RgbaFrame::blank(1, 640, 360).unwrap()));
//!
//! if let Some(frame) = cache.get_frame(1) {
//!     assert_eq!(frame.width(), 640);
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, trace};

use super::invariants::InvariantViolation;
use super::recency::RecencyList;
use super::stats::CacheStats;
use crate::config::Config;
use crate::diagnostics::{CacheEvent, CacheEventKind, EventLog};
use crate::domain::cache::{ByteBudget, EventLogCapacity};
use crate::frame::{Frame, FrameNumber};

/// Cached frame handle with its size captured at insertion.
struct CacheEntry<F> {
    frame: Arc<F>,
    size_bytes: usize,
}

impl<F: Frame> CacheEntry<F> {
    fn new(frame: Arc<F>) -> Self {
        let size_bytes = frame.size_in_bytes();
        Self { frame, size_bytes }
    }
}

/// Everything guarded by the cache lock.
struct CacheState<F> {
    frames: BTreeMap<FrameNumber, CacheEntry<F>>,
    recency: RecencyList,
    budget: ByteBudget,
    resident_bytes: usize,
    stats: CacheStats,
    events: Option<EventLog>,
}

impl<F: Frame> CacheState<F> {
    fn new(budget: ByteBudget) -> Self {
        Self {
            frames: BTreeMap::new(),
            recency: RecencyList::new(),
            budget,
            resident_bytes: 0,
            stats: CacheStats::default(),
            events: None,
        }
    }

    fn record(&mut self, kind: CacheEventKind) {
        if let Some(events) = self.events.as_mut() {
            events.record(kind);
        }
    }

    fn insert(&mut self, frame: Arc<F>) {
        let number = frame.frame_number();
        let entry = CacheEntry::new(frame);
        let size_bytes = entry.size_bytes;

        // Recency first: an indexed frame must never lack a recency slot.
        self.recency.touch(number);
        match self.frames.insert(number, entry) {
            Some(previous) => {
                self.resident_bytes = self.resident_bytes.saturating_sub(previous.size_bytes);
                self.stats.replacements += 1;
                trace!(
                    frame = number,
                    old_bytes = previous.size_bytes,
                    new_bytes = size_bytes,
                    "replaced cached frame"
                );
                self.record(CacheEventKind::Replaced {
                    frame: number,
                    old_bytes: previous.size_bytes,
                    new_bytes: size_bytes,
                });
            }
            None => {
                self.stats.insertions += 1;
                trace!(frame = number, bytes = size_bytes, "cached frame");
                self.record(CacheEventKind::Inserted {
                    frame: number,
                    bytes: size_bytes,
                });
            }
        }
        self.resident_bytes = self.resident_bytes.saturating_add(size_bytes);

        self.clean_up();
    }

    fn lookup(&mut self, found: Option<Arc<F>>) -> Option<Arc<F>> {
        if found.is_some() {
            self.stats.hits += 1;
        } else {
            self.stats.misses += 1;
        }
        found
    }

    fn remove(&mut self, number: FrameNumber) {
        let Some(entry) = self.frames.remove(&number) else {
            return;
        };
        self.recency.remove(number);
        self.resident_bytes = self.resident_bytes.saturating_sub(entry.size_bytes);
        self.stats.removals += 1;
        trace!(frame = number, bytes = entry.size_bytes, "removed cached frame");
        self.record(CacheEventKind::Removed {
            frame: number,
            bytes: entry.size_bytes,
        });
    }

    fn clear(&mut self) {
        let frames = self.frames.len();
        let bytes = self.resident_bytes;

        self.frames.clear();
        self.recency.clear();
        self.resident_bytes = 0;

        if frames > 0 {
            debug!(frames, bytes, "cleared frame cache");
            self.record(CacheEventKind::Cleared { frames, bytes });
        }
    }

    fn set_budget(&mut self, budget: ByteBudget) {
        let old = self.budget;
        self.budget = budget;
        if old != budget {
            debug!(
                old_max_bytes = old.value(),
                new_max_bytes = budget.value(),
                "frame cache budget changed"
            );
            self.record(CacheEventKind::BudgetChanged {
                old_max_bytes: old.value(),
                new_max_bytes: budget.value(),
            });
        }
        self.clean_up();
    }

    /// Evicts least recently used frames until the budget holds or one
    /// frame is left.
    fn clean_up(&mut self) {
        if self.budget.is_unbounded() {
            return;
        }

        let mut evicted = 0usize;
        let mut freed_bytes = 0usize;

        while self.budget.is_exceeded_by(self.resident_bytes) && self.recency.len() > 1 {
            let Some(number) = self.recency.pop_back() else {
                break;
            };
            if let Some(entry) = self.frames.remove(&number) {
                self.resident_bytes = self.resident_bytes.saturating_sub(entry.size_bytes);
                freed_bytes = freed_bytes.saturating_add(entry.size_bytes);
                evicted += 1;
                self.stats.evictions += 1;
                self.record(CacheEventKind::Evicted {
                    frame: number,
                    bytes: entry.size_bytes,
                });
            }
        }

        if evicted > 0 {
            debug!(
                evicted,
                freed_bytes,
                resident_bytes = self.resident_bytes,
                max_bytes = self.budget.value(),
                "evicted least recently used frames"
            );
        }
    }

    fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if self.frames.len() != self.recency.len() {
            return Err(InvariantViolation::LengthMismatch {
                indexed: self.frames.len(),
                recency: self.recency.len(),
            });
        }

        let mut seen = BTreeSet::new();
        for number in self.recency.iter() {
            if !seen.insert(number) {
                return Err(InvariantViolation::DuplicateInRecency(number));
            }
        }

        if let Some(&number) = self.frames.keys().find(|n| !self.recency.contains(**n)) {
            return Err(InvariantViolation::MissingFromRecency(number));
        }

        let actual = self
            .frames
            .values()
            .fold(0usize, |sum, entry| sum.saturating_add(entry.size_bytes));
        if actual != self.resident_bytes {
            return Err(InvariantViolation::ResidentBytesDrift {
                tracked: self.resident_bytes,
                actual,
            });
        }

        if self.budget.is_exceeded_by(self.resident_bytes) && self.frames.len() > 1 {
            return Err(InvariantViolation::OverBudget {
                resident: self.resident_bytes,
                max_bytes: self.budget.value(),
                frames: self.frames.len(),
            });
        }

        Ok(())
    }
}

/// LRU cache of decoded frames bounded by a byte budget.
///
/// All methods take `&self`; share the cache between decoder and renderer
/// threads by wrapping it in an `Arc`.
pub struct FrameCache<F> {
    state: Mutex<CacheState<F>>,
}

impl<F: Frame> FrameCache<F> {
    /// Creates an unbounded cache (no eviction).
    #[must_use]
    pub fn new() -> Self {
        Self::with_budget(ByteBudget::unbounded())
    }

    /// Creates a cache that evicts once more than `max_bytes` are resident.
    ///
    /// Zero means unbounded.
    #[must_use]
    pub fn with_max_bytes(max_bytes: usize) -> Self {
        Self::with_budget(ByteBudget::new(max_bytes))
    }

    /// Creates a cache with the given byte budget.
    #[must_use]
    pub fn with_budget(budget: ByteBudget) -> Self {
        Self {
            state: Mutex::new(CacheState::new(budget)),
        }
    }

    /// Creates a cache sized and instrumented from user configuration.
    #[must_use]
    pub fn from_config(config: &Config) -> Self {
        let cache = Self::with_budget(config.byte_budget());
        match config.event_log() {
            Some(capacity) => cache.with_event_log(capacity),
            None => cache,
        }
    }

    /// Enables the event log, keeping the most recent `capacity` events.
    #[must_use]
    pub fn with_event_log(mut self, capacity: EventLogCapacity) -> Self {
        self.state.get_mut().events = Some(EventLog::new(capacity));
        self
    }

    /// Caches `frame` as the most recently used entry.
    ///
    /// A frame whose number is already cached replaces the older handle.
    /// Least recently used frames are then evicted until the budget holds.
    pub fn add(&self, frame: Arc<F>) {
        self.state.lock().insert(frame);
    }

    /// Returns the cached frame with this number, if any.
    ///
    /// Does not change the eviction order; call [`Self::move_to_front`] to
    /// mark a frame as used.
    #[must_use]
    pub fn get_frame(&self, number: FrameNumber) -> Option<Arc<F>> {
        let mut state = self.state.lock();
        let found = state.frames.get(&number).map(|e| Arc::clone(&e.frame));
        state.lookup(found)
    }

    /// Returns the cached frame with the highest number not above `number`.
    ///
    /// Readers use this after a seek to find the closest frame they can
    /// resume from. Does not change the eviction order.
    #[must_use]
    pub fn frame_at_or_before(&self, number: FrameNumber) -> Option<Arc<F>> {
        let mut state = self.state.lock();
        let found = state
            .frames
            .range(..=number)
            .next_back()
            .map(|(_, e)| Arc::clone(&e.frame));
        state.lookup(found)
    }

    /// Returns the cached frame with the lowest frame number.
    #[must_use]
    pub fn smallest_frame(&self) -> Option<Arc<F>> {
        self.state
            .lock()
            .frames
            .first_key_value()
            .map(|(_, e)| Arc::clone(&e.frame))
    }

    /// Marks a cached frame as most recently used. No-op if absent.
    pub fn move_to_front(&self, number: FrameNumber) {
        self.state.lock().recency.promote(number);
    }

    /// Drops a frame from the cache. No-op if absent.
    pub fn remove(&self, number: FrameNumber) {
        self.state.lock().remove(number);
    }

    /// Drops every cached frame.
    pub fn clear(&self) {
        self.state.lock().clear();
    }

    /// Returns the number of cached frames.
    #[must_use]
    pub fn count(&self) -> usize {
        self.state.lock().frames.len()
    }

    /// Returns whether the cache holds no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.state.lock().frames.is_empty()
    }

    /// Checks whether a frame is cached, without counting a lookup.
    #[must_use]
    pub fn contains(&self, number: FrameNumber) -> bool {
        self.state.lock().frames.contains_key(&number)
    }

    /// Returns the configured byte budget (0 = unbounded).
    ///
    /// This is the limit, not the current usage; see [`Self::resident_bytes`].
    #[must_use]
    pub fn max_bytes(&self) -> usize {
        self.state.lock().budget.value()
    }

    /// Returns the configured byte budget.
    #[must_use]
    pub fn budget(&self) -> ByteBudget {
        self.state.lock().budget
    }

    /// Replaces the byte budget, evicting immediately if it shrank.
    pub fn set_max_bytes(&self, max_bytes: usize) {
        self.state.lock().set_budget(ByteBudget::new(max_bytes));
    }

    /// Returns the bytes currently held by cached frames.
    #[must_use]
    pub fn resident_bytes(&self) -> usize {
        self.state.lock().resident_bytes
    }

    /// Returns the cached frame numbers in ascending order.
    #[must_use]
    pub fn frame_numbers(&self) -> Vec<FrameNumber> {
        self.state.lock().frames.keys().copied().collect()
    }

    /// Returns the cached frame numbers from most to least recently used.
    #[must_use]
    pub fn recency_order(&self) -> Vec<FrameNumber> {
        self.state.lock().recency.iter().collect()
    }

    /// Returns the current cache statistics.
    #[must_use]
    pub fn stats(&self) -> CacheStats {
        let state = self.state.lock();
        CacheStats {
            frame_count: state.frames.len(),
            resident_bytes: state.resident_bytes,
            ..state.stats
        }
    }

    /// Zeroes the hit, miss and mutation counters.
    pub fn reset_stats(&self) {
        self.state.lock().stats = CacheStats::default();
    }

    /// Returns the logged events, oldest first.
    ///
    /// Empty unless the cache was built with an event log.
    #[must_use]
    pub fn recent_events(&self) -> Vec<CacheEvent> {
        self.state
            .lock()
            .events
            .as_ref()
            .map(EventLog::snapshot)
            .unwrap_or_default()
    }

    /// Verifies the internal structures agree with each other.
    ///
    /// # Errors
    ///
    /// Returns the first inconsistency found.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        self.state.lock().check_invariants()
    }
}

impl<F: Frame> Default for FrameCache<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F> fmt::Debug for FrameCache<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.state.lock();
        f.debug_struct("FrameCache")
            .field("frame_count", &state.frames.len())
            .field("resident_bytes", &state.resident_bytes)
            .field("max_bytes", &state.budget.value())
            .field("logged_events", &state.events.as_ref().map(EventLog::len))
            .field("stats", &state.stats)
            .finish()
    }
}
