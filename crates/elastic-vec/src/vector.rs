//! The growable vector.
//!
//! [`ElasticVec`] owns one [`Buffer`] and tracks how many of its leading
//! slots are live. When a push or insert finds the buffer full, the
//! growth policy picks the next capacity and the buffer is reallocated
//! wholesale.

use std::fmt;
use std::ops::{Index, IndexMut};

use elastic_core::{BufferId, Doubling, GrowthPolicy, VecError};
use tracing::{debug, warn};

use crate::buffer::Buffer;
use crate::config::VecConfig;
use crate::cursor::Cursor;
use crate::iter::Iter;

/// Dynamically-resizable sequence with a pluggable growth policy.
///
/// Slots `[0, len)` are live; `[len, capacity)` are spare and may hold
/// stale values left behind by [`remove`](Self::remove) or
/// [`clear`](Self::clear). Capacity only ever changes through growth.
pub struct ElasticVec<T, P = Doubling> {
    buffer: Buffer<T>,
    len: usize,
    policy: P,
    strict_growth: bool,
    growth_count: u64,
}

impl<T: Default> ElasticVec<T, Doubling> {
    /// Create an empty vector with capacity 10 and the doubling policy.
    pub fn new() -> Self {
        Self::with_policy(Doubling)
    }

    /// Create a vector of `len` default-valued elements.
    ///
    /// Capacity is 10, or twice `len` when `len` exceeds 10.
    pub fn with_len(len: usize) -> Self {
        Self::with_len_and_policy(len, Doubling)
    }

    /// Create a vector by pushing each value in order.
    pub fn from_values<I>(values: I) -> Result<Self, VecError>
    where
        I: IntoIterator<Item = T>,
    {
        Self::from_values_with_policy(values, Doubling)
    }
}

impl<T: Default, P: GrowthPolicy> ElasticVec<T, P> {
    /// Create an empty vector with capacity 10 and the given policy.
    pub fn with_policy(policy: P) -> Self {
        let config = VecConfig::new();
        Self::from_parts(Buffer::new(config.initial_capacity), 0, policy, &config)
    }

    /// Create an empty vector from an explicit configuration.
    pub fn with_config(config: VecConfig, policy: P) -> Result<Self, VecError> {
        config.validate()?;
        Ok(Self::from_parts(
            Buffer::new(config.initial_capacity),
            0,
            policy,
            &config,
        ))
    }

    /// Create a vector of `len` default-valued elements.
    ///
    /// When `len` exceeds the default capacity the policy is applied once
    /// to `len` to size the buffer. The buffer is never smaller than
    /// `len`, whatever the policy returns.
    pub fn with_len_and_policy(len: usize, policy: P) -> Self {
        let config = VecConfig::new();
        let capacity = if len > config.initial_capacity {
            let sized = policy.next_capacity(len).max(len);
            debug!(len, capacity = sized, "sizing initial buffer from growth policy");
            sized
        } else {
            config.initial_capacity
        };
        Self::from_parts(Buffer::new(capacity), len, policy, &config)
    }

    /// Create a vector with the given policy by pushing each value in order.
    pub fn from_values_with_policy<I>(values: I, policy: P) -> Result<Self, VecError>
    where
        I: IntoIterator<Item = T>,
    {
        let mut vec = Self::with_policy(policy);
        for value in values {
            vec.push(value)?;
        }
        Ok(vec)
    }

    /// Append `value` after the last live element.
    ///
    /// Grows the buffer first when it is full. Fails only when the
    /// growth policy stalls under strict growth.
    pub fn push(&mut self, value: T) -> Result<(), VecError> {
        if self.len == self.buffer.capacity() {
            self.grow()?;
        }
        self.buffer.slots_mut()[self.len] = value;
        self.len += 1;
        Ok(())
    }

    /// Insert `value` at `index`, shifting later elements right.
    ///
    /// `index == len` is legal and behaves like [`push`](Self::push).
    pub fn insert(&mut self, index: usize, value: T) -> Result<(), VecError> {
        if index > self.len {
            return Err(VecError::OutOfRange {
                index,
                len: self.len,
            });
        }
        if self.len == self.buffer.capacity() {
            self.grow()?;
        }
        self.buffer.shift_right(index, self.len);
        self.buffer.slots_mut()[index] = value;
        self.len += 1;
        Ok(())
    }

    /// Remove and return the element at `index`, shifting later elements left.
    ///
    /// The vacated trailing slot keeps its allocation but does not keep a
    /// stale copy: the removed value is moved out to be returned, leaving
    /// `T::default()` behind. This differs from [`clear`](Self::clear),
    /// which leaves every old value in place. Neither is observable
    /// through the live range.
    pub fn remove(&mut self, index: usize) -> Result<T, VecError> {
        if index >= self.len {
            return Err(VecError::OutOfRange {
                index,
                len: self.len,
            });
        }
        self.buffer.shift_left(index, self.len);
        self.len -= 1;
        Ok(std::mem::take(&mut self.buffer.slots_mut()[self.len]))
    }

    fn grow(&mut self) -> Result<(), VecError> {
        let current = self.buffer.capacity();
        let proposed = self.policy.next_capacity(current);
        let capacity = if proposed > current {
            proposed
        } else if self.strict_growth {
            return Err(VecError::GrowthStalled { current, proposed });
        } else {
            warn!(current, proposed, "growth policy stalled, growing by one slot");
            current
                .checked_add(1)
                .ok_or(VecError::GrowthStalled { current, proposed })?
        };

        let old = self.buffer.id();
        self.buffer.reallocate(self.len, capacity);
        self.growth_count += 1;
        debug!(
            from = current,
            to = capacity,
            %old,
            new = %self.buffer.id(),
            "buffer grown"
        );
        Ok(())
    }
}

impl<T, P> ElasticVec<T, P> {
    fn from_parts(buffer: Buffer<T>, len: usize, policy: P, config: &VecConfig) -> Self {
        Self {
            buffer,
            len,
            policy,
            strict_growth: config.strict_growth,
            growth_count: 0,
        }
    }

    /// Shared reference to the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T, VecError> {
        self.check_index(index)?;
        Ok(&self.buffer.slots()[index])
    }

    /// Mutable reference to the element at `index`.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T, VecError> {
        self.check_index(index)?;
        Ok(&mut self.buffer.slots_mut()[index])
    }

    /// Drop every element from the live range.
    ///
    /// Capacity and buffer contents are untouched; later pushes overwrite
    /// the stale values in place.
    pub fn clear(&mut self) {
        self.len = 0;
    }

    /// Number of live elements.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether there are no live elements.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Number of allocated slots.
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    /// Number of growth events since construction.
    pub fn growth_count(&self) -> u64 {
        self.growth_count
    }

    /// Identity of the current buffer. Changes on every growth event.
    pub fn buffer_id(&self) -> BufferId {
        self.buffer.id()
    }

    /// The growth policy in use.
    pub fn policy(&self) -> &P {
        &self.policy
    }

    /// The live elements.
    pub fn as_slice(&self) -> &[T] {
        &self.buffer.slots()[..self.len]
    }

    /// The live elements, mutably.
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        let len = self.len;
        &mut self.buffer.slots_mut()[..len]
    }

    /// Cursor at the first element.
    pub fn begin(&self) -> Cursor {
        Cursor::new(0, self.buffer.id())
    }

    /// Cursor one past the last live element.
    ///
    /// Only meaningful as a loop sentinel; resolving it fails.
    pub fn end(&self) -> Cursor {
        Cursor::new(self.len, self.buffer.id())
    }

    /// Element under `cursor`.
    ///
    /// Fails with [`VecError::DetachedCursor`] for a cursor with no
    /// buffer, [`VecError::StaleCursor`] if the buffer has been
    /// reallocated since the cursor was made (or it came from another
    /// vector), and [`VecError::OutOfRange`] if the position is outside
    /// the live range.
    pub fn resolve(&self, cursor: &Cursor) -> Result<&T, VecError> {
        let index = self.check_cursor(cursor)?;
        Ok(&self.buffer.slots()[index])
    }

    /// Mutable element under `cursor`. Same checks as [`resolve`](Self::resolve).
    pub fn resolve_mut(&mut self, cursor: &Cursor) -> Result<&mut T, VecError> {
        let index = self.check_cursor(cursor)?;
        Ok(&mut self.buffer.slots_mut()[index])
    }

    /// Borrowing iterator over the live elements.
    pub fn iter(&self) -> Iter<'_, T> {
        Iter::new(self.as_slice(), self.begin(), self.end())
    }

    fn check_index(&self, index: usize) -> Result<(), VecError> {
        if index >= self.len {
            return Err(VecError::OutOfRange {
                index,
                len: self.len,
            });
        }
        Ok(())
    }

    fn check_cursor(&self, cursor: &Cursor) -> Result<usize, VecError> {
        let id = cursor.buffer().ok_or(VecError::DetachedCursor)?;
        if id != self.buffer.id() {
            return Err(VecError::StaleCursor {
                cursor: id,
                current: self.buffer.id(),
            });
        }
        self.check_index(cursor.position())?;
        Ok(cursor.position())
    }
}

impl<T: Default> Default for ElasticVec<T, Doubling> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone, P: Clone> Clone for ElasticVec<T, P> {
    fn clone(&self) -> Self {
        Self {
            buffer: self.buffer.clone(),
            len: self.len,
            policy: self.policy.clone(),
            strict_growth: self.strict_growth,
            growth_count: self.growth_count,
        }
    }
}

impl<T: fmt::Debug, P> fmt::Debug for ElasticVec<T, P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl<T: PartialEq, P, Q> PartialEq<ElasticVec<T, Q>> for ElasticVec<T, P> {
    fn eq(&self, other: &ElasticVec<T, Q>) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl<T: Eq, P> Eq for ElasticVec<T, P> {}

impl<T, P> Index<usize> for ElasticVec<T, P> {
    type Output = T;

    /// # Panics
    ///
    /// Panics if `index >= len`. Use [`ElasticVec::get`] to handle the error.
    fn index(&self, index: usize) -> &T {
        match self.get(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<T, P> IndexMut<usize> for ElasticVec<T, P> {
    /// # Panics
    ///
    /// Panics if `index >= len`. Use [`ElasticVec::get_mut`] to handle the error.
    fn index_mut(&mut self, index: usize) -> &mut T {
        match self.get_mut(index) {
            Ok(value) => value,
            Err(err) => panic!("{err}"),
        }
    }
}

impl<'a, T, P> IntoIterator for &'a ElasticVec<T, P> {
    type Item = &'a T;
    type IntoIter = Iter<'a, T>;

    fn into_iter(self) -> Iter<'a, T> {
        self.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use elastic_test_utils::{ConstantPolicy, CountingPolicy};
    use proptest::prelude::*;

    fn filled(n: u32) -> ElasticVec<u32> {
        ElasticVec::from_values(0..n).unwrap()
    }

    #[test]
    fn new_vector_is_empty_with_capacity_ten() {
        let v: ElasticVec<u32> = ElasticVec::new();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), 10);
        assert!(v.is_empty());
    }

    #[test]
    fn eleventh_push_doubles_capacity() {
        let mut v = filled(10);
        assert_eq!((v.len(), v.capacity()), (10, 10));
        v.push(99).unwrap();
        assert_eq!((v.len(), v.capacity()), (11, 20));
        assert_eq!(*v.get(10).unwrap(), 99);
        assert_eq!(v.growth_count(), 1);
    }

    #[test]
    fn doubling_capacity_sequence() {
        let mut v: ElasticVec<u32> = ElasticVec::new();
        let mut caps = vec![v.capacity()];
        for i in 0..80 {
            v.push(i).unwrap();
            if *caps.last().unwrap() != v.capacity() {
                caps.push(v.capacity());
            }
        }
        assert_eq!(caps, vec![10, 20, 40, 80]);
    }

    #[test]
    fn with_len_small_keeps_default_capacity() {
        let v: ElasticVec<u32> = ElasticVec::with_len(4);
        assert_eq!(v.len(), 4);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.as_slice(), &[0, 0, 0, 0]);
    }

    #[test]
    fn with_len_large_applies_policy_once() {
        let v: ElasticVec<u32> = ElasticVec::with_len(15);
        assert_eq!(v.len(), 15);
        assert_eq!(v.capacity(), 30);
        assert_eq!(v.growth_count(), 0);
    }

    #[test]
    fn with_len_never_undersizes_buffer() {
        let v: ElasticVec<u32, _> = ElasticVec::with_len_and_policy(20, |_: usize| 5);
        assert_eq!(v.len(), 20);
        assert_eq!(v.capacity(), 20);
    }

    #[test]
    fn literal_list_insert_then_remove() {
        let mut v = ElasticVec::from_values([1, 2, 3]).unwrap();
        v.insert(1, 9).unwrap();
        assert_eq!(v.as_slice(), &[1, 9, 2, 3]);
        assert_eq!(v.remove(0).unwrap(), 1);
        assert_eq!(v.as_slice(), &[9, 2, 3]);
    }

    #[test]
    fn insert_at_len_matches_push() {
        let mut a = filled(5);
        let mut b = filled(5);
        a.insert(5, 42).unwrap();
        b.push(42).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn insert_into_full_buffer_grows() {
        let mut v = filled(10);
        v.insert(0, 100).unwrap();
        assert_eq!(v.capacity(), 20);
        assert_eq!(v.len(), 11);
        assert_eq!(v[0], 100);
        assert_eq!(v[10], 9);
    }

    #[test]
    fn out_of_range_bounds() {
        let mut v = filled(3);
        assert_eq!(v.get(3), Err(VecError::OutOfRange { index: 3, len: 3 }));
        assert!(matches!(v.get_mut(3), Err(VecError::OutOfRange { .. })));
        assert_eq!(
            v.insert(4, 0),
            Err(VecError::OutOfRange { index: 4, len: 3 })
        );
        assert_eq!(v.remove(3), Err(VecError::OutOfRange { index: 3, len: 3 }));
        assert_eq!(v.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn get_mut_writes_through() {
        let mut v = filled(3);
        *v.get_mut(1).unwrap() = 50;
        v[2] = 60;
        assert_eq!(v.as_slice(), &[0, 50, 60]);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn index_past_len_panics() {
        let v = filled(2);
        let _ = v[2];
    }

    #[test]
    fn clear_keeps_capacity_and_reuses_slots() {
        let mut v = filled(25);
        let cap = v.capacity();
        let id = v.buffer_id();
        v.clear();
        assert_eq!(v.len(), 0);
        assert_eq!(v.capacity(), cap);
        assert!(v.get(0).is_err());
        v.push(7).unwrap();
        assert_eq!(v.as_slice(), &[7]);
        assert_eq!(v.buffer_id(), id);
    }

    #[test]
    fn remove_resets_vacated_slot() {
        let mut v = ElasticVec::from_values([4u32, 5, 6]).unwrap();
        assert_eq!(v.remove(0).unwrap(), 4);
        assert_eq!(v.buffer.slots()[..3], [5, 6, 0]);
        v.clear();
        // clear leaves old values behind.
        assert_eq!(v.buffer.slots()[..2], [5, 6]);
    }

    #[test]
    fn remove_leaves_capacity_alone() {
        let mut v = filled(20);
        for _ in 0..20 {
            v.remove(0).unwrap();
        }
        assert!(v.is_empty());
        assert_eq!(v.capacity(), 20);
    }

    #[test]
    fn policy_only_called_when_full() {
        let policy = CountingPolicy::new(Doubling);
        let mut v = ElasticVec::with_policy(policy.clone());
        for i in 0..10u32 {
            v.push(i).unwrap();
        }
        assert_eq!(policy.calls(), 0);
        v.insert(3, 77).unwrap();
        assert_eq!(policy.calls(), 1);
        for i in 0..9 {
            v.push(i).unwrap();
        }
        assert_eq!(policy.calls(), 1);
        v.push(0).unwrap();
        assert_eq!(policy.calls(), 2);
    }

    #[test]
    fn rejected_insert_on_full_buffer_skips_policy() {
        let mut v =
            ElasticVec::from_values_with_policy(0..10u32, CountingPolicy::new(Doubling)).unwrap();
        assert_eq!(v.len(), v.capacity());
        assert_eq!(
            v.insert(11, 0),
            Err(VecError::OutOfRange { index: 11, len: 10 })
        );
        assert_eq!(v.policy().calls(), 0);
        assert_eq!(v.capacity(), 10);
        assert_eq!(v.growth_count(), 0);
    }

    #[test]
    fn custom_closure_policy() {
        let mut v = ElasticVec::with_policy(|c: usize| c + 5);
        for i in 0..11u32 {
            v.push(i).unwrap();
        }
        assert_eq!(v.capacity(), 15);
    }

    #[test]
    fn stalled_policy_is_reported() {
        let mut v = ElasticVec::with_policy(ConstantPolicy(10));
        for i in 0..10u32 {
            v.push(i).unwrap();
        }
        assert_eq!(
            v.push(10),
            Err(VecError::GrowthStalled {
                current: 10,
                proposed: 10
            })
        );
        assert_eq!(
            v.insert(0, 10),
            Err(VecError::GrowthStalled {
                current: 10,
                proposed: 10
            })
        );
        assert_eq!(v.len(), 10);
        assert_eq!(v.as_slice(), &[0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn lenient_config_grows_by_one_on_stall() {
        let config = VecConfig {
            strict_growth: false,
            ..VecConfig::new()
        };
        let mut v = ElasticVec::with_config(config, ConstantPolicy(3)).unwrap();
        for i in 0..12u32 {
            v.push(i).unwrap();
        }
        assert_eq!(v.capacity(), 12);
        assert_eq!(v.len(), 12);
    }

    #[test]
    fn config_sets_initial_capacity() {
        let config = VecConfig {
            initial_capacity: 2,
            ..VecConfig::new()
        };
        let mut v = ElasticVec::with_config(config, Doubling).unwrap();
        assert_eq!(v.capacity(), 2);
        for i in 0..3u32 {
            v.push(i).unwrap();
        }
        assert_eq!(v.capacity(), 4);
    }

    #[test]
    fn invalid_config_rejected() {
        let config = VecConfig {
            initial_capacity: 0,
            ..VecConfig::new()
        };
        let result: Result<ElasticVec<u32>, _> = ElasticVec::with_config(config, Doubling);
        assert!(matches!(result, Err(VecError::InvalidConfig { .. })));
    }

    #[test]
    fn clone_is_independent_with_new_buffer() {
        let mut a = filled(3);
        let b = a.clone();
        assert_ne!(a.buffer_id(), b.buffer_id());
        a[0] = 100;
        assert_eq!(b.as_slice(), &[0, 1, 2]);
    }

    #[test]
    fn debug_lists_live_elements() {
        let mut v = filled(4);
        v.remove(3).unwrap();
        assert_eq!(format!("{v:?}"), "[0, 1, 2]");
    }

    #[test]
    fn cursor_resolution_checks() {
        let mut v = filled(3);
        let begin = v.begin();
        assert_eq!(*v.resolve(&begin).unwrap(), 0);
        assert_eq!(
            v.resolve(&v.end()),
            Err(VecError::OutOfRange { index: 3, len: 3 })
        );
        assert_eq!(v.resolve(&Cursor::default()), Err(VecError::DetachedCursor));

        *v.resolve_mut(&begin).unwrap() = 5;
        assert_eq!(v[0], 5);
    }

    #[test]
    fn growth_makes_old_cursors_stale() {
        let mut v = filled(10);
        let before = v.begin();
        v.push(10).unwrap();
        assert_eq!(
            v.resolve(&before),
            Err(VecError::StaleCursor {
                cursor: before.buffer().unwrap(),
                current: v.buffer_id(),
            })
        );
        assert_eq!(*v.resolve(&v.begin()).unwrap(), 0);
    }

    #[test]
    fn cursor_from_other_vector_is_stale() {
        let a = filled(3);
        let b = filled(3);
        assert!(matches!(
            b.resolve(&a.begin()),
            Err(VecError::StaleCursor { .. })
        ));
    }

    proptest! {
        #[test]
        fn insert_then_remove_restores(
            values in prop::collection::vec(any::<u32>(), 0..40),
            at in any::<prop::sample::Index>(),
            value in any::<u32>(),
        ) {
            let mut v = ElasticVec::from_values(values.clone()).unwrap();
            let i = at.index(values.len() + 1);
            v.insert(i, value).unwrap();
            prop_assert_eq!(v.len(), values.len() + 1);
            prop_assert_eq!(*v.get(i).unwrap(), value);
            prop_assert_eq!(v.remove(i).unwrap(), value);
            prop_assert_eq!(v.as_slice(), values.as_slice());
        }

        #[test]
        fn remove_preserves_order(
            values in prop::collection::vec(any::<u32>(), 1..40),
            at in any::<prop::sample::Index>(),
        ) {
            let mut v = ElasticVec::from_values(values.clone()).unwrap();
            let i = at.index(values.len());
            let mut expected = values.clone();
            let removed = expected.remove(i);
            prop_assert_eq!(v.remove(i).unwrap(), removed);
            prop_assert_eq!(v.as_slice(), expected.as_slice());
        }

        #[test]
        fn push_increments_len_and_keeps_invariant(n in 0usize..200) {
            let mut v: ElasticVec<usize> = ElasticVec::new();
            for i in 0..n {
                let before = v.len();
                v.push(i).unwrap();
                prop_assert_eq!(v.len(), before + 1);
                prop_assert!(v.len() <= v.capacity());
            }
        }
    }
}
