use crate::editable_binary_heap::HeapIndex;
use indexmap::map::{IndexMap, VacantEntry as IMVacantEntry};
use std::borrow::Borrow;
use std::hash::{BuildHasher, Hash};

/// Wrapper around possible outer vec index
/// Used to avoid mux up with heap index
/// And to make sure that `Mediator` indexed only with MediatorIndex
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Debug, Hash)]
pub(crate) struct MediatorIndex(pub(crate) usize);

/// Identity index of the queue: key to current heap slot.
///
/// This is wrapper over indexmap that uses `MediatorIndex` as index.
/// Heap entries refer to keys by `MediatorIndex` so moving an entry
/// inside the heap never needs a hash lookup.
/// Also it centralized checking for panics
#[derive(Clone, Debug)]
pub(crate) struct Mediator<TKey: Hash + Eq, S: BuildHasher> {
    map: IndexMap<TKey, HeapIndex, S>,
}

pub(crate) struct VacantEntry<'a, TKey: 'a + Hash + Eq>(IMVacantEntry<'a, TKey, HeapIndex>);

pub(crate) enum MediatorEntry<'a, TKey: 'a + Hash + Eq> {
    Vacant(VacantEntry<'a, TKey>),
    Occupied,
}

impl<TKey, S> Mediator<TKey, S>
where
    TKey: Hash + Eq,
    S: BuildHasher,
{
    #[inline(always)]
    pub(crate) fn with_capacity_and_hasher(capacity: usize, hasher: S) -> Self {
        Self {
            map: IndexMap::with_capacity_and_hasher(capacity, hasher),
        }
    }

    #[inline(always)]
    pub(crate) fn reserve(&mut self, additional: usize) {
        self.map.reserve(additional)
    }

    #[inline(always)]
    pub(crate) fn len(&self) -> usize {
        self.map.len()
    }

    #[inline(always)]
    pub(crate) fn is_empty(&self) -> bool {
        self.map.is_empty()
    }

    #[inline(always)]
    pub(crate) fn clear(&mut self) {
        self.map.clear()
    }

    #[inline(always)]
    pub(crate) fn get_index(&self, MediatorIndex(position): MediatorIndex) -> (&TKey, HeapIndex) {
        self.map
            .get_index(position)
            .map(|(k, &i)| (k, i))
            .expect("All mediator indexes must be valid")
    }

    #[inline(always)]
    pub(crate) fn entry(&mut self, key: TKey) -> MediatorEntry<TKey> {
        match self.map.entry(key) {
            indexmap::map::Entry::Occupied(_) => MediatorEntry::Occupied,
            indexmap::map::Entry::Vacant(v) => MediatorEntry::Vacant(VacantEntry(v)),
        }
    }

    #[inline(always)]
    pub(crate) fn get<Q>(&self, key: &Q) -> Option<HeapIndex>
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.get(key).copied()
    }

    #[inline(always)]
    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        TKey: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.map.contains_key(key)
    }

    #[inline(always)]
    pub(crate) fn swap_remove_index(
        &mut self,
        MediatorIndex(index): MediatorIndex,
    ) -> (TKey, HeapIndex) {
        self.map
            .swap_remove_index(index)
            .expect("All mediator indexes must be valid")
    }

    #[inline(always)]
    pub(crate) fn get_index_mut(&mut self, MediatorIndex(index): MediatorIndex) -> &mut HeapIndex {
        self.map
            .get_index_mut(index)
            .expect("All mediator indexes must be valid")
            .1
    }

    #[cfg(test)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (MediatorIndex, &TKey, HeapIndex)> {
        self.map
            .iter()
            .enumerate()
            .map(|(i, (k, &h))| (MediatorIndex(i), k, h))
    }
}

impl<'a, TKey: 'a + Hash + Eq> VacantEntry<'a, TKey> {
    /// Associates key with heap slot and returns its index in mediator.
    #[inline(always)]
    pub(crate) fn insert(self, value: HeapIndex) -> MediatorIndex {
        let index = MediatorIndex(self.0.index());
        self.0.insert(value);
        index
    }
}
