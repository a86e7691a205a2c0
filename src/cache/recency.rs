// SPDX-License-Identifier: MPL-2.0
//! Recency ordering of cached frame numbers.
//!
//! Front is the most recently touched frame, back is the next eviction
//! candidate. Backed by an unbounded [`LruCache`] used purely as an ordered
//! set, so promotion and removal are O(1) instead of a linear scan.

use lru::LruCache;

use crate::frame::FrameNumber;

pub(crate) struct RecencyList {
    order: LruCache<FrameNumber, ()>,
}

impl RecencyList {
    pub(crate) fn new() -> Self {
        Self {
            order: LruCache::unbounded(),
        }
    }

    /// Puts `number` at the front, inserting it if needed.
    pub(crate) fn touch(&mut self, number: FrameNumber) {
        self.order.put(number, ());
    }

    /// Moves `number` to the front. Absent numbers are left absent.
    pub(crate) fn promote(&mut self, number: FrameNumber) {
        self.order.promote(&number);
    }

    pub(crate) fn remove(&mut self, number: FrameNumber) {
        self.order.pop(&number);
    }

    /// Pops the least recently touched frame number.
    pub(crate) fn pop_back(&mut self) -> Option<FrameNumber> {
        self.order.pop_lru().map(|(number, ())| number)
    }

    pub(crate) fn contains(&self, number: FrameNumber) -> bool {
        self.order.contains(&number)
    }

    pub(crate) fn len(&self) -> usize {
        self.order.len()
    }

    pub(crate) fn clear(&mut self) {
        self.order.clear();
    }

    /// Iterates from most to least recently touched.
    pub(crate) fn iter(&self) -> impl Iterator<Item = FrameNumber> + '_ {
        self.order.iter().map(|(number, ())| *number)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn order(list: &RecencyList) -> Vec<FrameNumber> {
        list.iter().collect()
    }

    #[test]
    fn touch_puts_newest_in_front() {
        let mut list = RecencyList::new();
        list.touch(1);
        list.touch(2);
        list.touch(3);
        assert_eq!(order(&list), vec![3, 2, 1]);
    }

    #[test]
    fn touching_existing_number_does_not_duplicate() {
        let mut list = RecencyList::new();
        list.touch(1);
        list.touch(2);
        list.touch(1);
        assert_eq!(order(&list), vec![1, 2]);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn promote_only_moves_present_numbers() {
        let mut list = RecencyList::new();
        list.touch(1);
        list.touch(2);
        list.promote(1);
        list.promote(9);
        assert_eq!(order(&list), vec![1, 2]);
        assert!(!list.contains(9));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn pop_back_returns_least_recent() {
        let mut list = RecencyList::new();
        list.touch(5);
        list.touch(6);
        list.touch(7);
        assert_eq!(list.pop_back(), Some(5));
        assert_eq!(list.pop_back(), Some(6));
        assert_eq!(order(&list), vec![7]);
    }

    #[test]
    fn remove_and_clear() {
        let mut list = RecencyList::new();
        list.touch(1);
        list.touch(2);
        list.remove(1);
        list.remove(1);
        assert_eq!(order(&list), vec![2]);
        list.clear();
        assert_eq!(list.len(), 0);
        assert_eq!(list.pop_back(), None);
    }
}
