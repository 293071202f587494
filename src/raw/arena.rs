use alloc::vec::Vec;

use super::handle::Handle;

#[derive(Clone)]
enum Slot<T> {
    Occupied(T),
    // Vacant slots form a singly linked free list.
    Vacant(Option<Handle>),
}

/// Slot storage owning every element; handles are plain indices into it.
#[derive(Clone)]
pub(crate) struct Arena<T> {
    slots: Vec<Slot<T>>,
    next_free: Option<Handle>,
    len: usize,
}

impl<T> Arena<T> {
    pub(crate) const fn new() -> Self {
        Self {
            slots: Vec::new(),
            next_free: None,
            len: 0,
        }
    }

    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            next_free: None,
            len: 0,
        }
    }

    pub(crate) fn capacity(&self) -> usize {
        self.slots.capacity()
    }

    /// Number of occupied slots.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn alloc(&mut self, element: T) -> Handle {
        let handle = if let Some(handle) = self.next_free {
            let slot = &mut self.slots[handle.slot()];
            let Slot::Vacant(next) = *slot else {
                unreachable!("`Arena::alloc()` - free list points at an occupied slot!");
            };
            self.next_free = next;
            *slot = Slot::Occupied(element);
            handle
        } else {
            assert!(
                self.slots.len() <= Handle::MAX,
                "`Arena::alloc()` - arena is at maximum capacity ({})",
                Handle::MAX + 1
            );
            self.slots.push(Slot::Occupied(element));
            Handle::new(self.slots.len() - 1)
        };
        self.len += 1;
        handle
    }

    #[inline]
    pub(crate) fn get(&self, handle: Handle) -> &T {
        match &self.slots[handle.slot()] {
            Slot::Occupied(element) => element,
            Slot::Vacant(_) => panic!("`Arena::get()` - `handle` is invalid!"),
        }
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, handle: Handle) -> &mut T {
        match &mut self.slots[handle.slot()] {
            Slot::Occupied(element) => element,
            Slot::Vacant(_) => panic!("`Arena::get_mut()` - `handle` is invalid!"),
        }
    }

    /// Moves the element out and recycles its slot.
    pub(crate) fn take(&mut self, handle: Handle) -> T {
        let slot = core::mem::replace(&mut self.slots[handle.slot()], Slot::Vacant(self.next_free));
        match slot {
            Slot::Occupied(element) => {
                self.next_free = Some(handle);
                self.len -= 1;
                element
            }
            Slot::Vacant(next) => {
                self.slots[handle.slot()] = Slot::Vacant(next);
                panic!("`Arena::take()` - `handle` is invalid!")
            }
        }
    }

    pub(crate) fn clear(&mut self) {
        self.slots.clear();
        self.next_free = None;
        self.len = 0;
    }
}
