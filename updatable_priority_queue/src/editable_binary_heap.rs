use std::cmp::Ordering;
use std::fmt::Debug;

use crate::mediator::MediatorIndex;

/// Slot in the heap array.
/// Kept distinct from `MediatorIndex` so they cannot be mixed up.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct HeapIndex(usize);

impl HeapIndex {
    #[inline(always)]
    pub(crate) fn as_usize(self) -> usize {
        self.0
    }
}

/// Ordering key of a heap entry.
///
/// Field order matters: derived `Ord` compares `primary` first
/// and falls back to `secondary` only when primaries are equal.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct PriorityPair<TPriority> {
    pub(crate) primary: TPriority,
    pub(crate) secondary: TPriority,
}

impl<TPriority> PriorityPair<TPriority> {
    #[inline(always)]
    pub(crate) fn new(primary: TPriority, secondary: TPriority) -> Self {
        Self { primary, secondary }
    }
}

pub(crate) struct HeapEntry<TPriority> {
    outer_pos: MediatorIndex,
    priority: PriorityPair<TPriority>,
}

/// Array-backed binary min-heap.
///
/// Every entry points back to its slot in the outer index (`MediatorIndex`)
/// and every move of an entry is reported through `change_handler`
/// so the outer index can keep `HeapIndex` of each key current.
pub(crate) struct BinaryHeap<TPriority>
where
    TPriority: Ord,
{
    data: Vec<HeapEntry<TPriority>>,
}

impl<TPriority: Ord> BinaryHeap<TPriority> {
    #[inline(always)]
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
        }
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.data.reserve(additional);
    }

    /// Puts outer position and priority in heap.
    /// Calls change_handler for every moved entry, including the new one.
    #[inline(always)]
    pub(crate) fn push<TChangeHandler: std::ops::FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        outer_pos: MediatorIndex,
        priority: PriorityPair<TPriority>,
        change_handler: TChangeHandler,
    ) {
        self.data.push(HeapEntry {
            outer_pos,
            priority,
        });
        self.heapify_up(HeapIndex(self.data.len() - 1), change_handler);
    }

    /// Returns outer position of the entry with the smallest priority.
    #[inline(always)]
    pub(crate) fn most_prioritized_idx(&self) -> Option<(MediatorIndex, HeapIndex)> {
        self.data.first().map(|x| (x.outer_pos, HeapIndex(0)))
    }

    /// Returns outer position of the entry in the last array slot.
    /// It is a leaf but not necessary the biggest one.
    #[inline(always)]
    pub(crate) fn tail_idx(&self) -> Option<(MediatorIndex, HeapIndex)> {
        let last = self.data.len().checked_sub(1)?;
        Some((self.data[last].outer_pos, HeapIndex(last)))
    }

    #[inline(always)]
    pub(crate) fn peek(&self) -> Option<(MediatorIndex, &PriorityPair<TPriority>)> {
        self.look_into(HeapIndex(0))
    }

    /// Removes item at position and returns it
    /// Time complexity - O(log n) swaps and change_handler calls
    pub(crate) fn remove<TChangeHandler: std::ops::FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        change_handler: TChangeHandler,
    ) -> Option<(MediatorIndex, PriorityPair<TPriority>)> {
        if self.len() <= position {
            return None;
        }
        let last = self.data.len() - 1;
        if position.0 != last {
            self.swap_items(position.0, last);
        }
        let removed = self.data.pop()?;
        if position.0 < self.data.len() {
            self.fix(position, change_handler);
        }
        Some((removed.outer_pos, removed.priority))
    }

    #[inline(always)]
    pub(crate) fn look_into(
        &self,
        position: HeapIndex,
    ) -> Option<(MediatorIndex, &PriorityPair<TPriority>)> {
        let entry = self.data.get(position.0)?;
        Some((entry.outer_pos, &entry.priority))
    }

    /// Replaces primary priority of entry and restores heap order.
    /// Secondary priority stays untouched.
    /// Returns old primary priority.
    pub(crate) fn change_priority<TChangeHandler: std::ops::FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        updated: TPriority,
        change_handler: TChangeHandler,
    ) -> TPriority {
        if position >= self.len() {
            panic!("Out of index during changing priority");
        }

        let old = std::mem::replace(&mut self.data[position.0].priority.primary, updated);
        if old != self.data[position.0].priority.primary {
            self.fix(position, change_handler);
        }
        old
    }

    /// Changes outer index of element and return old one.
    /// Needed when outer index compacts itself by moving its last item.
    pub(crate) fn change_outer_pos(
        &mut self,
        outer_pos: MediatorIndex,
        position: HeapIndex,
    ) -> MediatorIndex {
        if position >= self.len() {
            panic!("Out of index during changing outer pos");
        }

        std::mem::replace(&mut self.data[position.0].outer_pos, outer_pos)
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> HeapIndex {
        HeapIndex(self.data.len())
    }

    #[inline(always)]
    pub(crate) fn usize_len(&self) -> usize {
        self.data.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.data.clear()
    }

    /// Unordered iteration over entries in storage order
    pub(crate) fn iter(
        &self,
    ) -> impl Iterator<Item = (MediatorIndex, &PriorityPair<TPriority>)> + '_ {
        self.data.iter().map(|x| (x.outer_pos, &x.priority))
    }

    /// Restores heap order around position after its key changed in either direction.
    fn fix<TChangeHandler: std::ops::FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        change_handler: TChangeHandler,
    ) {
        let pos = position.0;
        let goes_up = pos > 0
            && self.data[pos].priority.cmp(&self.data[(pos - 1) / 2].priority) == Ordering::Less;
        if goes_up {
            self.heapify_up(position, change_handler);
        } else {
            self.heapify_down(position, change_handler);
        }
    }

    fn heapify_up<TChangeHandler: std::ops::FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) {
        debug_assert!(position.0 < self.data.len(), "Out of index in heapify_up");
        let mut position = position.0;
        while position > 0 {
            let parent_pos = (position - 1) / 2;
            if self.data[position].priority < self.data[parent_pos].priority {
                self.swap_items(parent_pos, position);
                change_handler(self.data[position].outer_pos, HeapIndex(position));
                position = parent_pos;
            } else {
                break;
            }
        }
        change_handler(self.data[position].outer_pos, HeapIndex(position));
    }

    fn heapify_down<TChangeHandler: std::ops::FnMut(MediatorIndex, HeapIndex)>(
        &mut self,
        position: HeapIndex,
        mut change_handler: TChangeHandler,
    ) {
        debug_assert!(position.0 < self.data.len(), "Out of index in heapify_down");
        let mut position = position.0;
        loop {
            let min_child_idx = {
                let child1 = position * 2 + 1;
                let child2 = child1 + 1;
                if child1 >= self.data.len() {
                    break;
                }
                if child2 >= self.data.len()
                    || self.data[child1].priority <= self.data[child2].priority
                {
                    child1
                } else {
                    child2
                }
            };

            if self.data[min_child_idx].priority < self.data[position].priority {
                self.swap_items(position, min_child_idx);
                change_handler(self.data[position].outer_pos, HeapIndex(position));
                position = min_child_idx;
            } else {
                break;
            }
        }
        change_handler(self.data[position].outer_pos, HeapIndex(position));
    }

    #[inline(always)]
    fn swap_items(&mut self, pos1: usize, pos2: usize) {
        debug_assert!(pos1 < self.data.len(), "Out of index in first pos in swap");
        debug_assert!(pos2 < self.data.len(), "Out of index in second pos in swap");
        self.data.swap(pos1, pos2);
    }
}

// Default implementations

impl<TPriority: Clone> Clone for HeapEntry<TPriority> {
    fn clone(&self) -> Self {
        Self {
            outer_pos: self.outer_pos,
            priority: self.priority.clone(),
        }
    }
}

impl<TPriority: Debug> Debug for HeapEntry<TPriority> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(
            f,
            "{{outer_pos: {:?}, priority: {:?}}}",
            &self.outer_pos, &self.priority
        )
    }
}

impl<TPriority: Clone + Ord> Clone for BinaryHeap<TPriority> {
    fn clone(&self) -> Self {
        Self {
            data: self.data.clone(),
        }
    }
}

impl<TPriority: Debug + Ord> Debug for BinaryHeap<TPriority> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        self.data.fmt(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn is_valid_heap<TP: Ord>(heap: &BinaryHeap<TP>) -> bool {
        for (i, current) in heap.data.iter().enumerate().skip(1) {
            let parent = &heap.data[(i - 1) / 2];
            if current.priority < parent.priority {
                return false;
            }
        }
        true
    }

    fn pair(primary: i32) -> PriorityPair<i32> {
        PriorityPair::new(primary, 0)
    }

    fn heap_of(items: &[i32]) -> BinaryHeap<i32> {
        let mut heap = BinaryHeap::with_capacity(items.len());
        for (i, &x) in items.iter().enumerate() {
            heap.push(MediatorIndex(i), pair(x), |_, _| {});
        }
        heap
    }

    #[test]
    fn test_heap_fill() {
        let items = [
            70, 50, 0, 1, 2, 4, 6, 7, 9, 72, 4, 4, 87, 78, 72, 6, 7, 9, 2, -50, -72, -50, -42, -1,
            -3, -13,
        ];
        let mut minimum = std::i32::MAX;
        let mut heap = BinaryHeap::<i32>::with_capacity(0);
        assert!(heap.peek().is_none());
        assert!(is_valid_heap(&heap), "Heap state is invalid");
        for (i, &x) in items.iter().enumerate() {
            if x < minimum {
                minimum = x;
            }
            heap.push(MediatorIndex(i), pair(x), |_, _| {});
            assert!(
                is_valid_heap(&heap),
                "Heap state is invalid after pushing {}",
                x
            );
            let (_, heap_min) = heap.peek().unwrap();
            assert_eq!(minimum, heap_min.primary)
        }
    }

    #[test]
    fn test_change_logger() {
        let items = [
            2, 3, 21, 22, 25, 29, 36, 90, 89, 88, 87, 83, 48, 50, 52, 69, 65, 55, 73, 75, 76, -53,
            78, 81, -45, -41, 91, -34, -33, -31, -27, -22, -19, -8, -5, -3,
        ];
        let mut last_positions = HashMap::<MediatorIndex, HeapIndex>::new();
        let mut heap = BinaryHeap::<i32>::with_capacity(items.len());

        let check_positions = |heap: &BinaryHeap<i32>, last: &HashMap<MediatorIndex, HeapIndex>| {
            assert_eq!(last.len(), heap.usize_len());
            for (&outer, &position) in last.iter() {
                let (found, priority) = heap.look_into(position).unwrap();
                assert_eq!(found, outer);
                assert_eq!(items[outer.0], priority.primary);
            }
        };

        for (i, &x) in items.iter().enumerate() {
            heap.push(MediatorIndex(i), pair(x), |outer, position| {
                last_positions.insert(outer, position);
            });
            check_positions(&heap, &last_positions);
        }

        while let Some((outer, _)) = heap.most_prioritized_idx() {
            last_positions.remove(&outer);
            let (removed, _) = heap
                .remove(HeapIndex(0), |outer, position| {
                    last_positions.insert(outer, position);
                })
                .unwrap();
            assert_eq!(removed, outer);
            check_positions(&heap, &last_positions);
        }
    }

    #[test]
    fn test_pop_order() {
        let items = [
            -16, 5, 11, -1, -34, -42, -5, -6, 25, -35, 11, 35, -2, 40, 42, 40, -45, -48, 48, -38,
            -28, -33, -31, 34, -18, 25, 16, -33, -11, -6, -35, -38, 35, -41, -38, 31, -38, -23, 26,
            44, 38, 11, -49, 30, 7, 13, 12, -4, -11, -24, -49, 26, 42, 46, -25, -22, -6, -42, 28,
            45, -47, 8, 8, 21, 49, -12, -5, -33, -37, 24, -3, -26, 6, -13, 16, -40, -14, -39, -26,
        ];

        let mut heap = heap_of(&items);
        assert!(is_valid_heap(&heap), "Heap is invalid before pops");

        let mut sorted_items = items;
        sorted_items.sort_unstable();
        for &x in sorted_items.iter() {
            let (outer, priority) = heap.remove(HeapIndex(0), |_, _| {}).unwrap();
            assert_eq!(priority.primary, x);
            assert_eq!(items[outer.0], x);
            assert!(is_valid_heap(&heap), "Heap is invalid after {}", x);
        }

        assert!(heap.remove(HeapIndex(0), |_, _| {}).is_none());
        assert!(heap.is_empty());
    }

    #[test]
    fn test_secondary_breaks_ties() {
        let mut heap = BinaryHeap::with_capacity(3);
        heap.push(MediatorIndex(0), PriorityPair::new(4, 3), |_, _| {});
        heap.push(MediatorIndex(1), PriorityPair::new(4, 2), |_, _| {});
        heap.push(MediatorIndex(2), PriorityPair::new(5, -10), |_, _| {});

        let popped: Vec<_> = std::iter::from_fn(|| heap.remove(HeapIndex(0), |_, _| {}))
            .map(|(outer, _)| outer.0)
            .collect();
        assert_eq!(popped, [1, 0, 2]);
    }

    #[test]
    fn test_change_priority() {
        let mut heap = heap_of(&[0, 1, 2, 3, 4]);
        assert!(is_valid_heap(&heap), "Invalid before change");
        assert_eq!(heap.change_priority(HeapIndex(3), 10, |_, _| {}), 3);
        assert!(is_valid_heap(&heap), "Invalid after raising");
        assert_eq!(heap.change_priority(HeapIndex(2), -10, |_, _| {}), 2);
        assert!(is_valid_heap(&heap), "Invalid after lowering");
        assert_eq!(heap.peek().unwrap().1.primary, -10);
    }

    #[test]
    fn test_change_priority_keeps_secondary() {
        let mut heap = BinaryHeap::with_capacity(2);
        heap.push(MediatorIndex(0), PriorityPair::new(1, 7), |_, _| {});
        heap.push(MediatorIndex(1), PriorityPair::new(2, 3), |_, _| {});
        heap.change_priority(HeapIndex(1), 0, |_, _| {});
        assert_eq!(heap.peek(), Some((MediatorIndex(1), &PriorityPair::new(0, 3))));
    }

    #[test]
    fn test_remove_sifts_up() {
        // Array layout is exactly the push order because it is already a heap
        let mut heap = heap_of(&[0, 10, 1, 11, 12, 2, 3]);
        assert!(is_valid_heap(&heap));
        // Last item (3) lands under parent 10 and has to go up
        let (outer, priority) = heap.remove(HeapIndex(4), |_, _| {}).unwrap();
        assert_eq!((outer, priority.primary), (MediatorIndex(4), 12));
        assert!(is_valid_heap(&heap), "Heap is invalid after removal");
        assert_eq!(heap.usize_len(), 6);
    }

    #[test]
    fn test_remove_tail() {
        let mut heap = heap_of(&[1, 2, 9, 3]);
        let (outer, position) = heap.tail_idx().unwrap();
        assert_eq!(position.as_usize(), 3);
        let mut moved = 0;
        let (removed, priority) = heap.remove(position, |_, _| moved += 1).unwrap();
        assert_eq!(removed, outer);
        assert_eq!(priority.primary, 3);
        assert_eq!(moved, 0, "Removing the tail moves nothing");
        assert!(is_valid_heap(&heap));
        assert!(heap.remove(HeapIndex(10), |_, _| {}).is_none());
    }

    #[test]
    fn test_clear() {
        let mut heap = heap_of(&[0, 1, 2, 3, 4]);
        assert!(!heap.is_empty(), "Heap must be non empty");
        heap.clear();
        assert!(heap.is_empty(), "Heap must be empty");
        assert!(heap.tail_idx().is_none());
        assert!(heap.most_prioritized_idx().is_none());
    }

    #[test]
    fn test_change_outer_pos() {
        let mut heap = heap_of(&[0, 1, 2, 3, 4]);
        assert_eq!(heap.look_into(HeapIndex(0)), Some((MediatorIndex(0), &pair(0))));
        assert_eq!(
            heap.change_outer_pos(MediatorIndex(10), HeapIndex(0)),
            MediatorIndex(0)
        );
        assert_eq!(
            heap.look_into(HeapIndex(0)),
            Some((MediatorIndex(10), &pair(0)))
        );
    }
}
