//! Contiguous backing buffers.
//!
//! A [`Buffer`] is a fixed-size block of slots tagged with the
//! [`BufferId`] of its allocation. It never grows in place: growth
//! replaces the slots wholesale and mints a new ID, which is what lets
//! cursors notice the reallocation.

use elastic_core::BufferId;

/// A single contiguous block of `capacity` slots.
///
/// Every slot always holds a value. Fresh slots are `T::default()`;
/// slots past the vector's live range keep whatever was last moved
/// there. The owning vector tracks how many leading slots are live.
pub struct Buffer<T> {
    /// Identity of this allocation.
    id: BufferId,
    /// Backing storage. Allocated to full capacity at creation.
    slots: Box<[T]>,
}

impl<T: Default> Buffer<T> {
    /// Allocate a buffer of `capacity` default-valued slots.
    pub fn new(capacity: usize) -> Self {
        let mut slots = Vec::with_capacity(capacity);
        slots.resize_with(capacity, T::default);
        Self {
            id: BufferId::next(),
            slots: slots.into_boxed_slice(),
        }
    }

    /// Replace the storage with a new allocation of `capacity` slots.
    ///
    /// The first `live` values move over in order, the rest of the new
    /// buffer is default-filled, and the old storage is dropped. The
    /// buffer gets a fresh ID.
    ///
    /// # Panics
    ///
    /// Panics if `live` exceeds `capacity`.
    pub fn reallocate(&mut self, live: usize, capacity: usize) {
        assert!(
            live <= capacity,
            "cannot move {live} live slots into a buffer of {capacity}"
        );
        let old = std::mem::take(&mut self.slots);
        let mut slots = Vec::with_capacity(capacity);
        slots.extend(old.into_vec().into_iter().take(live));
        slots.resize_with(capacity, T::default);
        self.slots = slots.into_boxed_slice();
        self.id = BufferId::next();
    }
}

impl<T> Buffer<T> {
    /// Identity of the current allocation.
    pub fn id(&self) -> BufferId {
        self.id
    }

    /// Total capacity in slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// All slots, live or not.
    pub fn slots(&self) -> &[T] {
        &self.slots
    }

    /// All slots, mutably.
    pub fn slots_mut(&mut self) -> &mut [T] {
        &mut self.slots
    }

    /// Open a gap at `index` by moving `[index, end)` one slot right.
    ///
    /// The value previously at `end` lands at `index`, ready to be
    /// overwritten.
    ///
    /// # Panics
    ///
    /// Panics if `index > end` or `end >= capacity`.
    pub fn shift_right(&mut self, index: usize, end: usize) {
        self.slots[index..=end].rotate_right(1);
    }

    /// Close the slot at `index` by moving `(index, end)` one slot left.
    ///
    /// The value previously at `index` lands at `end - 1`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= end` or `end > capacity`.
    pub fn shift_left(&mut self, index: usize, end: usize) {
        self.slots[index..end].rotate_left(1);
    }
}

impl<T: Clone> Clone for Buffer<T> {
    fn clone(&self) -> Self {
        Self {
            id: BufferId::next(),
            slots: self.slots.clone(),
        }
    }
}
