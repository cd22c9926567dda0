//! Borrowing iteration over the live range.

use std::iter::FusedIterator;

use crate::cursor::Cursor;

/// Double-ended iterator over an [`ElasticVec`](crate::ElasticVec).
///
/// Walks a `begin`/`end` cursor pair toward each other over the live
/// slots, stopping when the two compare equal. The borrow on the vector
/// keeps both cursors valid for the iterator's lifetime.
pub struct Iter<'a, T> {
    live: &'a [T],
    front: Cursor,
    back: Cursor,
}

impl<'a, T> Iter<'a, T> {
    pub(crate) fn new(live: &'a [T], front: Cursor, back: Cursor) -> Self {
        Self { live, front, back }
    }
}

impl<'a, T> Iterator for Iter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.front == self.back {
            return None;
        }
        let index = self.front.post_advance().position();
        self.live.get(index)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.back.position() - self.front.position();
        (remaining, Some(remaining))
    }
}

impl<T> DoubleEndedIterator for Iter<'_, T> {
    fn next_back(&mut self) -> Option<Self::Item> {
        if self.front == self.back {
            return None;
        }
        let index = self.back.retreat().position();
        self.live.get(index)
    }
}

impl<T> ExactSizeIterator for Iter<'_, T> {}

impl<T> FusedIterator for Iter<'_, T> {}

impl<T> Clone for Iter<'_, T> {
    fn clone(&self) -> Self {
        Self {
            live: self.live,
            front: self.front,
            back: self.back,
        }
    }
}
