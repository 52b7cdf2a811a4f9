/// Receives keys that a bounded [`UpdatablePriorityQueue`] drops on overflow.
///
/// The queue calls [`clean`] exactly once per evicted key,
/// before the [`insert`] that caused the overflow returns.
/// The evicted key is moved into the call, so the receiver decides its fate.
///
/// Any `FnMut(TKey)` closure is a `Cleanup`.
///
/// ```
/// use updatable_priority_queue::UpdatablePriorityQueue;
///
/// let mut evicted = Vec::new();
/// let mut queue =
///     UpdatablePriorityQueue::with_max_size_and_cleanup(1, |key: u32| evicted.push(key));
/// queue.insert(10, 1, 0);
/// queue.insert(20, 2, 0);
/// assert_eq!(queue.len(), 1);
/// drop(queue);
/// assert_eq!(evicted, [20]);
/// ```
///
/// [`UpdatablePriorityQueue`]: struct.UpdatablePriorityQueue.html
/// [`clean`]: trait.Cleanup.html#tymethod.clean
/// [`insert`]: struct.UpdatablePriorityQueue.html#method.insert
pub trait Cleanup<TKey> {
    /// Releases whatever is tied to evicted key.
    fn clean(&mut self, key: TKey);
}

impl<TKey, F> Cleanup<TKey> for F
where
    F: FnMut(TKey),
{
    #[inline]
    fn clean(&mut self, key: TKey) {
        self(key)
    }
}

/// Default cleanup of queues: evicted keys are simply dropped.
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Default, Hash)]
pub struct NoCleanup;

impl<TKey> Cleanup<TKey> for NoCleanup {
    #[inline]
    fn clean(&mut self, _key: TKey) {}
}

/// Element types that know how to release their own resources.
///
/// Use with [`CleanElement`] to make a bounded queue call it on eviction.
///
/// ```
/// use std::sync::atomic::{AtomicUsize, Ordering};
/// use updatable_priority_queue::{Clean, CleanElement, UpdatablePriorityQueue};
///
/// static RELEASED: AtomicUsize = AtomicUsize::new(0);
///
/// #[derive(Debug, Hash, PartialEq, Eq)]
/// struct Job(&'static str);
///
/// impl Clean for Job {
///     fn clean(self) {
///         RELEASED.fetch_add(1, Ordering::SeqCst);
///     }
/// }
///
/// let mut queue = UpdatablePriorityQueue::with_max_size_and_cleanup(2, CleanElement);
/// queue.insert(Job("build"), 1, 0);
/// queue.insert(Job("test"), 2, 0);
/// queue.insert(Job("deploy"), 3, 0);
/// assert_eq!(queue.len(), 2);
/// assert_eq!(RELEASED.load(Ordering::SeqCst), 1);
/// ```
///
/// [`CleanElement`]: struct.CleanElement.html
pub trait Clean {
    /// Called with the element evicted from queue.
    fn clean(self);
}

/// Cleanup that calls [`Clean::clean`] on every evicted key.
///
/// [`Clean::clean`]: trait.Clean.html#tymethod.clean
#[derive(Debug, PartialEq, Eq, PartialOrd, Ord, Copy, Clone, Default, Hash)]
pub struct CleanElement;

impl<TKey: Clean> Cleanup<TKey> for CleanElement {
    #[inline]
    fn clean(&mut self, key: TKey) {
        Clean::clean(key)
    }
}
