use std::{cmp::Reverse, collections::BinaryHeap};

use crate::error::MazeError;

/// An item tagged with its insertion age. Smaller ages are popped first.
///
/// Ordering compares the age, then the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct AgeEntry<T> {
    pub age: i64,
    pub item: T,
}

impl<T> AgeEntry<T> {
    pub fn new(age: i64, item: T) -> Self {
        AgeEntry { age, item }
    }
}

/// Min-heap keyed by [`AgeEntry::age`].
///
/// `push` and `pop_min` are O(log n). `remove` rebuilds the heap without the
/// entry and is therefore O(n).
#[derive(Debug, Clone)]
pub struct AgeHeap<T> {
    entries: BinaryHeap<Reverse<AgeEntry<T>>>,
}

impl<T: Ord> Default for AgeHeap<T> {
    fn default() -> Self {
        AgeHeap {
            entries: BinaryHeap::new(),
        }
    }
}

impl<T: Ord + Clone> AgeHeap<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Entry stored at `index` of the underlying heap array, which is not sorted.
    pub fn get(&self, index: usize) -> Option<&AgeEntry<T>> {
        self.entries.as_slice().get(index).map(|Reverse(entry)| entry)
    }

    pub fn push(&mut self, entry: AgeEntry<T>) {
        self.entries.push(Reverse(entry));
    }

    pub fn pop_min(&mut self) -> Result<AgeEntry<T>, MazeError> {
        self.entries
            .pop()
            .map(|Reverse(entry)| entry)
            .ok_or(MazeError::EmptyContainer)
    }

    /// Removes a previously pushed entry.
    pub fn remove(&mut self, entry: &AgeEntry<T>) -> Result<AgeEntry<T>, MazeError> {
        let before = self.entries.len();
        self.entries.retain(|Reverse(e)| e != entry);
        if self.entries.len() == before {
            return Err(MazeError::NotFound);
        }
        Ok(entry.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn drain(heap: &mut AgeHeap<char>) -> Vec<i64> {
        let mut ages = Vec::new();
        while let Ok(entry) = heap.pop_min() {
            ages.push(entry.age);
        }
        ages
    }

    #[test]
    fn test_pop_in_age_order() {
        let mut heap = AgeHeap::new();
        for (age, item) in [(5, 'a'), (3, 'b'), (9, 'c'), (1, 'd'), (7, 'e')] {
            heap.push(AgeEntry::new(age, item));
        }
        assert_eq!(heap.pop_min().map(|e| e.item), Ok('d'));
        assert_eq!(drain(&mut heap), vec![3, 5, 7, 9]);
    }

    #[test]
    fn test_pop_empty() {
        let mut heap: AgeHeap<char> = AgeHeap::new();
        assert_eq!(heap.pop_min(), Err(MazeError::EmptyContainer));
    }

    #[test]
    fn test_remove_arbitrary_keeps_heap_order() {
        let mut heap = AgeHeap::new();
        for age in [10, 4, 8, 2, 6, 9, 1, 7] {
            heap.push(AgeEntry::new(age, 'x'));
        }
        assert_eq!(heap.remove(&AgeEntry::new(4, 'x')).map(|e| e.age), Ok(4));
        assert_eq!(heap.remove(&AgeEntry::new(10, 'x')).map(|e| e.age), Ok(10));
        assert_eq!(heap.len(), 6);
        assert_eq!(drain(&mut heap), vec![1, 2, 6, 7, 8, 9]);
    }

    #[test]
    fn test_remove_missing() {
        let mut heap = AgeHeap::new();
        heap.push(AgeEntry::new(3, 'a'));
        assert_eq!(heap.remove(&AgeEntry::new(3, 'b')), Err(MazeError::NotFound));
        assert_eq!(heap.len(), 1);
    }

    #[test]
    fn test_get_covers_every_entry() {
        let mut heap = AgeHeap::new();
        for age in [3, 1, 2] {
            heap.push(AgeEntry::new(age, 'x'));
        }
        assert_eq!(heap.get(0).map(|e| e.age), Some(1));
        let mut ages = (0..heap.len())
            .filter_map(|i| heap.get(i).map(|e| e.age))
            .collect::<Vec<_>>();
        ages.sort();
        assert_eq!(ages, vec![1, 2, 3]);
        assert!(heap.get(3).is_none());
    }
}
