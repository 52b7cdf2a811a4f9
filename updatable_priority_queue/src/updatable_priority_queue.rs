use std::borrow::Borrow;
use std::collections::hash_map::RandomState;
use std::fmt::{Debug, Display};
use std::hash::{BuildHasher, Hash};
use std::num::NonZeroUsize;

use log::{debug, trace};

use crate::cleanup::{Cleanup, NoCleanup};
use crate::editable_binary_heap::{BinaryHeap, PriorityPair};
use crate::mediator::{Mediator, MediatorEntry, MediatorIndex};

/// A min-priority queue that supports changing priority of queued keys.
///
/// Smaller `TPriority` values will be popped first.
/// Every key has a primary priority and a secondary one;
/// the secondary priority decides only between keys with equal primary priorities.
///
/// Keys are unique: inserting a key which is already in queue is ignored.
///
/// The queue can be bounded by `max_size`. When an insert makes the queue
/// longer than the bound, the entry in the last slot of the heap array is evicted
/// and handed to the queue's [`Cleanup`]. That entry is a leaf of the heap,
/// so it never is the minimum of a queue with two or more entries,
/// but it is not guaranteed to be the maximum either.
///
/// It is logic error if priority values changes other way than by [`update_priority`] method.
/// It is logic error if key values changes somehow while in queue.
/// This changes normally possible only through `Cell`, `RefCell`, global state, IO, or unsafe code.
///
/// [`Cleanup`]: trait.Cleanup.html
/// [`update_priority`]: struct.UpdatablePriorityQueue.html#method.update_priority
///
/// # Examples
///
/// ## Main example
/// ```
/// use updatable_priority_queue::UpdatablePriorityQueue;
///
/// let mut queue = UpdatablePriorityQueue::new();
///
/// // Currently queue is empty
/// assert_eq!(queue.peek(), None);
///
/// queue.insert("Second", 4, 0);
/// queue.insert("Third", 5, 0);
/// queue.insert("First", 3, 0);
/// queue.insert("Fourth", 6, 0);
/// queue.insert("Fifth", 7, 0);
///
/// // Peek returns references to the least pair.
/// assert_eq!(queue.peek(), Some((&"First", &3)));
/// assert_eq!(queue.len(), 5);
///
/// assert_eq!(queue.pop(), Ok("First"));
/// // We can change priority of item by key:
/// queue.update_priority(&"Fifth", 1);
/// assert_eq!(queue.get_priority(&"Fifth"), Some(&1));
/// assert_eq!(queue.pop(), Ok("Fifth"));
/// // We can also increase priority!
/// queue.update_priority(&"Second", 10);
/// assert_eq!(queue.pop(), Ok("Third"));
/// assert_eq!(queue.pop(), Ok("Fourth"));
/// assert_eq!(queue.pop(), Ok("Second"));
/// // Now queue is empty
/// assert!(queue.pop().is_err());
/// ```
///
/// ## Float priorities
///
/// `f64` does not implement `Ord`, so wrap it, for example with `ordered_float`:
///
/// ```
/// use ordered_float::OrderedFloat;
/// use updatable_priority_queue::UpdatablePriorityQueue;
///
/// let mut queue = UpdatablePriorityQueue::new();
/// queue.insert('a', OrderedFloat(2.5), OrderedFloat(0.0));
/// queue.insert('b', OrderedFloat(-1.0), OrderedFloat(0.0));
/// queue.insert('c', OrderedFloat(2.5), OrderedFloat(-3.0));
/// assert_eq!(queue.pop(), Ok('b'));
/// assert_eq!(queue.pop(), Ok('c'));
/// assert_eq!(queue.pop(), Ok('a'));
/// ```
#[derive(Clone)]
pub struct UpdatablePriorityQueue<TKey, TPriority, C = NoCleanup, S = RandomState>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
    heap: BinaryHeap<TPriority>,
    key_to_pos: Mediator<TKey, S>,
    max_size: Option<NonZeroUsize>,
    cleanup: C,
}

impl<TKey: Hash + Eq, TPriority: Ord> UpdatablePriorityQueue<TKey, TPriority> {
    /// Creates an empty unbounded queue
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let mut queue = UpdatablePriorityQueue::new();
    /// queue.insert("Key", 4, 0);
    /// ```
    #[inline]
    pub fn new() -> Self {
        Self::with_capacity_and_hasher(0, RandomState::default())
    }

    /// Creates an empty unbounded queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let mut queue = UpdatablePriorityQueue::with_capacity(10);
    /// queue.insert("Key", 4, 0);
    /// ```
    #[inline]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_hasher(capacity, RandomState::default())
    }

    /// Creates an empty queue that never holds more than `max_size` elements.
    /// Evicted elements are dropped.
    ///
    /// `max_size == 0` makes the queue unbounded.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let mut queue = UpdatablePriorityQueue::with_max_size(2);
    /// queue.insert("A", 1, 0);
    /// queue.insert("B", 2, 0);
    /// queue.insert("C", 3, 0);
    /// assert_eq!(queue.len(), 2);
    /// assert_eq!(queue.max_size(), Some(2));
    /// ```
    #[inline]
    pub fn with_max_size(max_size: usize) -> Self {
        Self::with_max_size_cleanup_and_hasher(max_size, NoCleanup, RandomState::default())
    }
}

impl<TKey, TPriority, C> UpdatablePriorityQueue<TKey, TPriority, C>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    C: Cleanup<TKey>,
{
    /// Creates an empty queue that never holds more than `max_size` elements
    /// and passes every evicted key to `cleanup`.
    ///
    /// `max_size == 0` makes the queue unbounded, so `cleanup` is never called.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let mut cleaned = 0;
    /// let mut queue =
    ///     UpdatablePriorityQueue::with_max_size_and_cleanup(1, |_: &str| cleaned += 1);
    /// queue.insert("A", 1, 0);
    /// queue.insert("B", 2, 0);
    /// assert_eq!(queue.len(), 1);
    /// drop(queue);
    /// assert_eq!(cleaned, 1);
    /// ```
    #[inline]
    pub fn with_max_size_and_cleanup(max_size: usize, cleanup: C) -> Self {
        Self::with_max_size_cleanup_and_hasher(max_size, cleanup, RandomState::default())
    }
}

impl<TKey, TPriority, S> UpdatablePriorityQueue<TKey, TPriority, NoCleanup, S>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
    /// Creates an empty unbounded queue with specific Hasher
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// use std::collections::hash_map::RandomState;
    /// let mut queue = UpdatablePriorityQueue::with_hasher(RandomState::default());
    /// queue.insert("Key", 4, 0);
    /// ```
    #[inline]
    pub fn with_hasher(hasher: S) -> Self {
        Self::with_capacity_and_hasher(0, hasher)
    }

    /// Creates an empty unbounded queue with allocated memory enough
    /// to keep `capacity` elements without reallocation.
    /// Also useful when Hasher cannot be defaulted.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// use std::collections::hash_map::RandomState;
    /// let mut queue =
    ///     UpdatablePriorityQueue::with_capacity_and_hasher(10, RandomState::default());
    /// queue.insert("Key", 4, 0);
    /// ```
    #[inline]
    pub fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            heap: BinaryHeap::with_capacity(capacity),
            key_to_pos: Mediator::with_capacity_and_hasher(capacity, hasher),
            max_size: None,
            cleanup: NoCleanup,
        }
    }
}

impl<TKey, TPriority, C, S> UpdatablePriorityQueue<TKey, TPriority, C, S>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    C: Cleanup<TKey>,
    S: BuildHasher,
{
    /// Most general constructor: bound, cleanup and hasher.
    ///
    /// `max_size == 0` makes the queue unbounded.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::{NoCleanup, UpdatablePriorityQueue};
    /// use std::collections::hash_map::RandomState;
    /// let mut queue = UpdatablePriorityQueue::with_max_size_cleanup_and_hasher(
    ///     3,
    ///     NoCleanup,
    ///     RandomState::default(),
    /// );
    /// queue.insert("Key", 4, 0);
    /// ```
    pub fn with_max_size_cleanup_and_hasher(max_size: usize, cleanup: C, hasher: S) -> Self {
        let max_size = NonZeroUsize::new(max_size);
        if max_size.is_none() {
            debug!("max_size of 0 requested, queue is unbounded");
        }
        Self {
            heap: BinaryHeap::with_capacity(0),
            key_to_pos: Mediator::with_capacity_and_hasher(0, hasher),
            max_size,
            cleanup,
        }
    }

    /// Adds new key to queue with its primary and secondary priorities.
    /// Returns `false` and changes nothing if the key is already in queue.
    ///
    /// If the queue is bounded and becomes longer than its `max_size`,
    /// the entry in the last heap slot is removed and passed to the cleanup
    /// before this method returns. It may be the entry just inserted.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let mut queue = UpdatablePriorityQueue::new();
    /// assert!(queue.insert("B", 4, 0));
    /// // Duplicate is ignored, first priority stays
    /// assert!(!queue.insert("B", 2, 0));
    /// assert_eq!(queue.len(), 1);
    /// assert_eq!(queue.get_priority(&"B"), Some(&4));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Average complexity is ***O(log n)***
    ///
    /// The worst case is when reallocation appears.
    /// In this case complexity of single call is ***O(n)***.
    pub fn insert(
        &mut self,
        key: TKey,
        priority: TPriority,
        secondary_priority: TPriority,
    ) -> bool {
        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let key_to_pos = &mut self.key_to_pos;
        let heap = &mut self.heap;

        let outer_pos = match key_to_pos.entry(key) {
            MediatorEntry::Occupied => return false,
            // Real heap position is written by change handler below
            MediatorEntry::Vacant(entry) => entry.insert(heap.len()),
        };
        heap.push(
            outer_pos,
            PriorityPair::new(priority, secondary_priority),
            |index, heap_idx| *key_to_pos.get_index_mut(index) = heap_idx,
        );

        self.evict_overflow();
        true
    }

    // Keeps bounded queue within its max_size
    fn evict_overflow(&mut self) {
        let max_size = match self.max_size {
            Some(max_size) => max_size.get(),
            None => return,
        };
        if self.len() <= max_size {
            return;
        }
        let (tail, heap_idx) = self
            .heap
            .tail_idx()
            .expect("Overflowed queue cannot be empty");
        let (key, _) = self.remove_internal(tail);
        trace!(
            "evicted entry from heap slot {} to keep queue within max_size {}",
            heap_idx.as_usize(),
            max_size
        );
        self.cleanup.clean(key);
    }
}

impl<TKey, TPriority, C, S> UpdatablePriorityQueue<TKey, TPriority, C, S>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
    /// Reserves space for at least `additional` new elements.
    ///
    /// ### Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    ///
    /// ### Examples
    ///
    /// Basic usage:
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let mut queue = UpdatablePriorityQueue::new();
    /// queue.reserve(100);
    /// queue.insert(4, 4, 0);
    /// ```
    #[inline]
    pub fn reserve(&mut self, additional: usize) {
        self.heap.reserve(additional);
        self.key_to_pos.reserve(additional);
    }

    /// Remove and return key with the minimal priority.
    /// Fails with [`EmptyQueueError`] if there is nothing to pop.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::{EmptyQueueError, UpdatablePriorityQueue};
    /// let mut queue: UpdatablePriorityQueue<i32, i32> = (0..3).rev().map(|x| (x, x, 0)).collect();
    /// assert_eq!(queue.pop(), Ok(0));
    /// assert_eq!(queue.pop(), Ok(1));
    /// assert_eq!(queue.pop(), Ok(2));
    /// assert_eq!(queue.pop(), Err(EmptyQueueError));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Cost of pop is always ***O(log n)***
    ///
    /// [`EmptyQueueError`]: struct.EmptyQueueError.html
    #[inline]
    pub fn pop(&mut self) -> Result<TKey, EmptyQueueError> {
        let (key, _, _) = self.pop_with_priority()?;
        Ok(key)
    }

    /// Same as [`pop`] but also returns primary and secondary priorities of popped key.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let mut queue = UpdatablePriorityQueue::new();
    /// queue.insert("B", 4, 3);
    /// queue.insert("C", 4, 2);
    /// assert_eq!(queue.pop_with_priority(), Ok(("C", 4, 2)));
    /// assert_eq!(queue.pop_with_priority(), Ok(("B", 4, 3)));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Cost of pop is always ***O(log n)***
    ///
    /// [`pop`]: struct.UpdatablePriorityQueue.html#method.pop
    pub fn pop_with_priority(&mut self) -> Result<(TKey, TPriority, TPriority), EmptyQueueError> {
        let (to_remove, _) = self.heap.most_prioritized_idx().ok_or(EmptyQueueError)?;
        let (key, PriorityPair { primary, secondary }) = self.remove_internal(to_remove);
        Ok((key, primary, secondary))
    }

    /// Get reference to the key with the minimal priority and to its primary priority.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let queue: UpdatablePriorityQueue<i32, i32> = (0..5).map(|x| (x, x, 0)).collect();
    /// assert_eq!(queue.peek(), Some((&0, &0)));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    pub fn peek(&self) -> Option<(&TKey, &TPriority)> {
        let (first_idx, priority) = self.heap.peek()?;
        let (key, _) = self.key_to_pos.get_index(first_idx);
        Some((key, &priority.primary))
    }

    /// Get reference to the primary priority by key.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let queue: UpdatablePriorityQueue<&str, i32> =
    ///     [("first", 0, 5), ("second", 1, 6)].iter().cloned().collect();
    /// assert_eq!(queue.get_priority(&"second"), Some(&1));
    /// assert_eq!(queue.get_priority(&"third"), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(1)*** in average (limited by hash map key lookup).
    pub fn get_priority<Q>(&self, key: &Q) -> Option<&TPriority>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_priority_pair(key).map(|pair| &pair.primary)
    }

    /// Get reference to the secondary (tie-break) priority by key.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let queue: UpdatablePriorityQueue<&str, i32> =
    ///     [("first", 0, 5), ("second", 1, 6)].iter().cloned().collect();
    /// assert_eq!(queue.get_secondary_priority(&"second"), Some(&6));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(1)*** in average (limited by hash map key lookup).
    pub fn get_secondary_priority<Q>(&self, key: &Q) -> Option<&TPriority>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get_priority_pair(key).map(|pair| &pair.secondary)
    }

    /// Returns true if key is in queue.
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let mut queue = UpdatablePriorityQueue::new();
    /// queue.insert(String::from("key"), 1, 0);
    /// assert!(queue.contains("key"));
    /// assert!(!queue.contains("other"));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(1)*** in average (limited by hash map key lookup).
    #[inline]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.key_to_pos.contains(key)
    }

    /// Set new primary priority for existing key and reorder the queue.
    /// Secondary priority is kept.
    ///
    /// Returns old primary priority, or `None` if the key is not in queue.
    /// Missing keys are not inserted.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let mut queue: UpdatablePriorityQueue<&str, i32> =
    ///     [("first", 0, 0), ("second", 1, 0), ("third", 2, 0)].iter().cloned().collect();
    /// assert_eq!(queue.update_priority(&"third", -5), Some(2));
    /// assert_eq!(queue.get_priority(&"third"), Some(&-5));
    /// assert_eq!(queue.pop(), Ok("third"));
    /// assert_eq!(queue.update_priority(&"Missing", 5), None);
    /// assert_eq!(queue.len(), 2);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// In best case ***O(1)***, in average costs ***O(log n)***.
    pub fn update_priority<Q>(&mut self, key: &Q, priority: TPriority) -> Option<TPriority>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let heap_idx = self.key_to_pos.get(key)?;

        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let heap = &mut self.heap;
        let key_to_pos = &mut self.key_to_pos;

        Some(heap.change_priority(heap_idx, priority, |index, heap_idx| {
            *key_to_pos.get_index_mut(index) = heap_idx
        }))
    }

    /// Get the number of elements in queue.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let queue: UpdatablePriorityQueue<i32, i32> = (0..5).map(|x| (x, x, 0)).collect();
    /// assert_eq!(queue.len(), 5);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn len(&self) -> usize {
        debug_assert_eq!(self.key_to_pos.len(), self.heap.usize_len());
        self.key_to_pos.len()
    }

    /// Returns true if queue is empty.
    ///
    /// ```
    /// let mut queue = updatable_priority_queue::UpdatablePriorityQueue::new();
    /// assert!(queue.is_empty());
    /// queue.insert(0, 5, 0);
    /// assert!(!queue.is_empty());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(1)***
    #[inline]
    pub fn is_empty(&self) -> bool {
        debug_assert_eq!(self.heap.is_empty(), self.key_to_pos.is_empty());
        self.key_to_pos.is_empty()
    }

    /// Returns the bound of queue, `None` for unbounded queues.
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// assert_eq!(UpdatablePriorityQueue::<i32, i32>::new().max_size(), None);
    /// assert_eq!(UpdatablePriorityQueue::<i32, i32>::with_max_size(0).max_size(), None);
    /// assert_eq!(UpdatablePriorityQueue::<i32, i32>::with_max_size(8).max_size(), Some(8));
    /// ```
    #[inline]
    pub fn max_size(&self) -> Option<usize> {
        self.max_size.map(NonZeroUsize::get)
    }

    /// Make the queue empty.
    /// Removed keys are dropped, cleanup is not called for them.
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let mut queue: UpdatablePriorityQueue<i32, i32> = (0..5).map(|x| (x, x, 0)).collect();
    /// assert!(!queue.is_empty());
    /// queue.clear();
    /// assert!(queue.is_empty());
    /// ```
    ///
    /// ### Time complexity
    ///
    /// Always ***O(n)***
    #[inline]
    pub fn clear(&mut self) {
        self.heap.clear();
        self.key_to_pos.clear();
    }

    fn get_priority_pair<Q>(&self, key: &Q) -> Option<&PriorityPair<TPriority>>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let heap_idx = self.key_to_pos.get(key)?;
        Some(
            self.heap
                .look_into(heap_idx)
                .expect("Must contain if key_to_pos contain")
                .1,
        )
    }

    // Removes entry from by index of map
    fn remove_internal(&mut self, position: MediatorIndex) -> (TKey, PriorityPair<TPriority>) {
        // Borrow checker treats borrowing a field as borrowing whole structure
        // so we need to get references to fields to borrow them individually.
        let key_to_pos = &mut self.key_to_pos;
        let heap = &mut self.heap;

        let (_, heap_to_rem) = key_to_pos.get_index(position);

        let (removed_idx, priority) = heap
            .remove(heap_to_rem, |index, heap_idx| {
                *key_to_pos.get_index_mut(index) = heap_idx
            })
            .expect("Checked by key_to_pos");
        debug_assert_eq!(position, removed_idx);

        // Mediator moves its last key into the vacated index
        let (removed_key, _) = key_to_pos.swap_remove_index(position);
        if MediatorIndex(key_to_pos.len()) != removed_idx {
            let (_, heap_idx_of_moved) = key_to_pos.get_index(removed_idx);
            heap.change_outer_pos(removed_idx, heap_idx_of_moved);
        }

        (removed_key, priority)
    }
}

impl<TKey, TPriority, C, S> Debug for UpdatablePriorityQueue<TKey, TPriority, C, S>
where
    TKey: Hash + Eq + Debug,
    TPriority: Ord + Debug,
    S: BuildHasher,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "[")?;
        for (index, priority) in self.heap.iter() {
            let (key, _) = self.key_to_pos.get_index(index);
            write!(f, "{:?}", (key, &priority.primary, &priority.secondary))?;
        }
        write!(f, "]")
    }
}

impl<TKey, TPriority, S> Default for UpdatablePriorityQueue<TKey, TPriority, NoCleanup, S>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher + Default,
{
    #[inline]
    fn default() -> Self {
        Self::with_capacity_and_hasher(0, S::default())
    }
}

impl<TKey, TPriority, S> FromIterator<(TKey, TPriority, TPriority)>
    for UpdatablePriorityQueue<TKey, TPriority, NoCleanup, S>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher + Default,
{
    /// Allows building unbounded queue from iterator using `collect()`.
    /// Items are `(key, priority, secondary_priority)`.
    /// Like with [`insert`], the first occurrence of a key wins.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let mut queue: UpdatablePriorityQueue<&str, i32> =
    /// [("first", 0, 0), ("second", 1, 0), ("third", 2, 0), ("first", 10, 0)]
    ///                             .iter().cloned().collect();
    /// assert_eq!(queue.len(), 3);
    /// assert_eq!(queue.pop(), Ok("first"));
    /// assert_eq!(queue.pop(), Ok("second"));
    /// assert_eq!(queue.pop(), Ok("third"));
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)*** in average.
    ///
    /// [`insert`]: struct.UpdatablePriorityQueue.html#method.insert
    fn from_iter<T: IntoIterator<Item = (TKey, TPriority, TPriority)>>(iter: T) -> Self {
        let mut queue = Self::default();
        queue.extend(iter);
        queue
    }
}

impl<TKey, TPriority, C, S> Extend<(TKey, TPriority, TPriority)>
    for UpdatablePriorityQueue<TKey, TPriority, C, S>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    C: Cleanup<TKey>,
    S: BuildHasher,
{
    /// Inserts every `(key, priority, secondary_priority)` of iterator.
    /// Bound and cleanup apply as with [`insert`].
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let mut queue = UpdatablePriorityQueue::with_max_size(3);
    /// queue.extend((0..10).map(|x| (x, x, 0)));
    /// assert_eq!(queue.len(), 3);
    /// assert_eq!(queue.pop(), Ok(0));
    /// ```
    ///
    /// [`insert`]: struct.UpdatablePriorityQueue.html#method.insert
    fn extend<T: IntoIterator<Item = (TKey, TPriority, TPriority)>>(&mut self, iter: T) {
        let iter = iter.into_iter();
        let (lower, _) = iter.size_hint();
        let reserve = match self.max_size() {
            Some(max_size) => lower.min(max_size.saturating_sub(self.len())),
            None => lower,
        };
        self.reserve(reserve);
        for (key, priority, secondary_priority) in iter {
            self.insert(key, priority, secondary_priority);
        }
    }
}

impl<TKey, TPriority, C, S> IntoIterator for UpdatablePriorityQueue<TKey, TPriority, C, S>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
    type Item = (TKey, TPriority, TPriority);
    type IntoIter = UpdatablePriorityQueueIterator<TKey, TPriority, C, S>;

    /// Make iterator that return items in ascending order of priorities.
    ///
    /// ### Examples
    ///
    ///
    /// ```
    /// use updatable_priority_queue::UpdatablePriorityQueue;
    /// let mut queue: UpdatablePriorityQueue<&str, i32> =
    ///     [("first", 2, 0), ("second", 1, 1), ("third", 1, 0)]
    ///                             .iter().cloned().collect();
    /// let mut iterator = queue.into_iter();
    /// assert_eq!(iterator.next(), Some(("third", 1, 0)));
    /// assert_eq!(iterator.next(), Some(("second", 1, 1)));
    /// assert_eq!(iterator.next(), Some(("first", 2, 0)));
    /// assert_eq!(iterator.next(), None);
    /// ```
    ///
    /// ### Time complexity
    ///
    /// ***O(n log n)*** for iteration.
    fn into_iter(self) -> Self::IntoIter {
        Self::IntoIter { queue: self }
    }
}

/// This is consuming iterator that returns elements in increasing order
/// of `(priority, secondary_priority)`.
///
/// ### Time complexity
/// Overall complexity of iteration is ***O(n log n)***
pub struct UpdatablePriorityQueueIterator<TKey, TPriority, C = NoCleanup, S = RandomState>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
    queue: UpdatablePriorityQueue<TKey, TPriority, C, S>,
}

impl<TKey, TPriority, C, S> Iterator for UpdatablePriorityQueueIterator<TKey, TPriority, C, S>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
    type Item = (TKey, TPriority, TPriority);

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.queue.pop_with_priority().ok()
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.queue.len(), Some(self.queue.len()))
    }

    #[inline]
    fn count(self) -> usize
    where
        Self: Sized,
    {
        self.queue.len()
    }
}

impl<TKey, TPriority, C, S> ExactSizeIterator
    for UpdatablePriorityQueueIterator<TKey, TPriority, C, S>
where
    TKey: Hash + Eq,
    TPriority: Ord,
    S: BuildHasher,
{
}

/// This is error type for [`pop`] method of [`UpdatablePriorityQueue`].
/// It means that queue has no elements.
///
/// [`UpdatablePriorityQueue`]: struct.UpdatablePriorityQueue.html
/// [`pop`]: struct.UpdatablePriorityQueue.html#method.pop
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Default, Hash)]
pub struct EmptyQueueError;

impl Display for EmptyQueueError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        write!(f, "Tried to pop from empty UpdatablePriorityQueue")
    }
}

impl std::error::Error for EmptyQueueError {}
