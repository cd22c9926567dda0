//! Bidirectional cursors over a vector's buffer.
//!
//! A [`Cursor`] is a logical position plus the [`BufferId`] of the buffer
//! it was created against. It borrows nothing, so it can be held across
//! mutations of its vector; resolving it checks the buffer ID in O(1)
//! and reports a reallocated buffer as [`VecError::StaleCursor`].

use std::fmt;

use elastic_core::{BufferId, VecError};

use crate::vector::ElasticVec;

/// Position-plus-buffer handle for walking an [`ElasticVec`].
///
/// Movement is unchecked: stepping before 0 or past the end wraps the
/// position and is only caught when the cursor is resolved. Equality
/// compares positions alone, so a cursor from one vector equals any
/// other cursor at the same index. Use [`Cursor::same_buffer`] when
/// identity matters.
#[derive(Clone, Copy, Debug, Default)]
pub struct Cursor {
    position: usize,
    /// `None` for default-constructed and moved-from cursors.
    buffer: Option<BufferId>,
}

impl Cursor {
    pub(crate) fn new(position: usize, buffer: BufferId) -> Self {
        Self {
            position,
            buffer: Some(buffer),
        }
    }

    /// Zero-based logical index.
    pub fn position(&self) -> usize {
        self.position
    }

    /// The buffer this cursor was created against.
    pub fn buffer(&self) -> Option<BufferId> {
        self.buffer
    }

    /// Whether this cursor refers to no buffer at all.
    pub fn is_detached(&self) -> bool {
        self.buffer.is_none()
    }

    /// Whether both cursors were created against the same buffer.
    pub fn same_buffer(&self, other: &Cursor) -> bool {
        self.buffer.is_some() && self.buffer == other.buffer
    }

    /// Step forward and return the moved cursor.
    pub fn advance(&mut self) -> Cursor {
        self.position = self.position.wrapping_add(1);
        *self
    }

    /// Step forward and return the cursor as it was before the step.
    pub fn post_advance(&mut self) -> Cursor {
        let prev = *self;
        self.position = self.position.wrapping_add(1);
        prev
    }

    /// Step backward and return the moved cursor.
    pub fn retreat(&mut self) -> Cursor {
        self.position = self.position.wrapping_sub(1);
        *self
    }

    /// Step backward and return the cursor as it was before the step.
    pub fn post_retreat(&mut self) -> Cursor {
        let prev = *self;
        self.position = self.position.wrapping_sub(1);
        prev
    }

    /// Move out of this cursor, leaving it detached at position 0.
    pub fn take(&mut self) -> Cursor {
        std::mem::take(self)
    }

    /// Resolve against `vec`. Shorthand for [`ElasticVec::resolve`].
    pub fn get<'a, T, P>(&self, vec: &'a ElasticVec<T, P>) -> Result<&'a T, VecError> {
        vec.resolve(self)
    }
}

impl PartialEq for Cursor {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}

impl Eq for Cursor {}

impl fmt::Display for Cursor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.buffer {
            Some(id) => write!(f, "Cursor(pos={}, buf={})", self.position, id),
            None => write!(f, "Cursor(pos={}, detached)", self.position),
        }
    }
}
