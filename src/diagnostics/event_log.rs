// SPDX-License-Identifier: MPL-2.0
//! Bounded log of recent cache events.

use std::collections::VecDeque;

use super::events::{CacheEvent, CacheEventKind};
use crate::domain::cache::EventLogCapacity;

/// Keeps the last `capacity` cache events, dropping the oldest on overflow.
#[derive(Debug, Clone)]
pub struct EventLog {
    events: VecDeque<CacheEvent>,
    capacity: usize,
}

impl EventLog {
    #[must_use]
    pub fn new(capacity: EventLogCapacity) -> Self {
        let capacity = capacity.value();
        Self {
            events: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Stamps `kind` with the current instant and appends it.
    pub fn record(&mut self, kind: CacheEventKind) {
        if self.events.len() >= self.capacity {
            self.events.pop_front();
        }
        self.events.push_back(CacheEvent::new(kind));
    }

    /// Number of events currently held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.events.len()
    }

    /// Copies the held events out, oldest first.
    #[must_use]
    pub fn snapshot(&self) -> Vec<CacheEvent> {
        self.events.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::cache::event_log_capacity_bounds;

    fn evicted(frame: i64) -> CacheEventKind {
        CacheEventKind::Evicted { frame, bytes: 64 }
    }

    #[test]
    fn record_keeps_chronological_order() {
        let mut log = EventLog::new(EventLogCapacity::default());
        log.record(evicted(1));
        log.record(evicted(2));

        let frames: Vec<_> = log.snapshot().iter().filter_map(|e| e.kind.frame()).collect();
        assert_eq!(frames, vec![1, 2]);
        assert!(log.snapshot()[0].timestamp <= log.snapshot()[1].timestamp);
    }

    #[test]
    fn overflow_drops_oldest_events() {
        let capacity = event_log_capacity_bounds::MIN;
        let mut log = EventLog::new(EventLogCapacity::new(capacity));
        for frame in 0..(capacity as i64 + 3) {
            log.record(evicted(frame));
        }

        assert_eq!(log.len(), capacity);
        assert_eq!(log.snapshot().first().and_then(|e| e.kind.frame()), Some(3));
    }

    #[test]
    fn new_log_is_empty() {
        let log = EventLog::new(EventLogCapacity::default());
        assert_eq!(log.len(), 0);
        assert!(log.snapshot().is_empty());
    }
}
