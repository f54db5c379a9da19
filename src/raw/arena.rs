use alloc::vec::Vec;

use super::handle::Handle;

/// Flat owner of every node in one map.
///
/// Slots are only vacated by [`Arena::take`] while a map is being drained; nothing is ever freed
/// one at a time while the map is live, so a handle stays valid until [`Arena::clear`] or drop.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Option<T>>,
    vacant: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            vacant: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            vacant: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    #[cfg(test)]
    pub(crate) const fn len(&self) -> usize {
        self.slots.len() - self.vacant
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        // Strict less-than keeps the last index representable as a `Handle`.
        assert!(
            self.slots.len() < Handle::MAX,
            "`Arena::alloc()` - arena is at maximum capacity ({})",
            Handle::MAX
        );
        self.slots.push(Some(element));
        Handle::from_index(self.slots.len() - 1)
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        self.slots[handle.to_index()].as_ref().expect("`Arena::get()` - `handle` is invalid!")
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        self.slots[handle.to_index()].as_mut().expect("`Arena::get_mut()` - `handle` is invalid!")
    }

    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let element = self.slots[handle.to_index()].take().expect("`Arena::take()` - `handle` is invalid!");
        self.vacant += 1;
        element
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.vacant = 0;
    }
}
