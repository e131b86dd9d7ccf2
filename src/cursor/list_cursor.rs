use std::fmt;

use tracing::trace;

use super::CursorError;

/// Direction of the most recent successful traversal step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Motion {
    Forward,
    Backward,
}

impl fmt::Display for Motion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Forward => f.write_str("forward"),
            Self::Backward => f.write_str("backward"),
        }
    }
}

/// A bidirectional cursor over a `Vec`.
///
/// The position is a gap index in `0..=len`: position `p` sits between
/// element `p - 1` and element `p`. [`next`](Self::next) returns the element
/// after the gap and moves right, [`previous`](Self::previous) moves left and
/// returns the element it crossed. The element crossed most recently is the
/// one [`set`](Self::set) and [`remove`](Self::remove) act on.
///
/// The cursor holds the sequence's only mutable borrow, so nothing else can
/// reshape the sequence while the cursor is alive.
#[derive(Debug)]
pub struct ListCursor<'a, T> {
    items: &'a mut Vec<T>,
    position: usize,
    last: Option<Motion>,
}

impl<'a, T> ListCursor<'a, T> {
    /// Create a cursor before the first element.
    pub const fn new(items: &'a mut Vec<T>) -> Self {
        Self {
            items,
            position: 0,
            last: None,
        }
    }

    /// Create a cursor after the last element.
    pub fn at_end(items: &'a mut Vec<T>) -> Self {
        let position = items.len();
        Self {
            items,
            position,
            last: None,
        }
    }

    /// Create a cursor at an arbitrary gap.
    ///
    /// Returns `None` if `position` is greater than the sequence length.
    pub fn at(items: &'a mut Vec<T>, position: usize) -> Option<Self> {
        if position > items.len() {
            return None;
        }
        Some(Self {
            items,
            position,
            last: None,
        })
    }

    /// The current gap index.
    pub const fn position(&self) -> usize {
        self.position
    }

    /// Index of the element [`next`](Self::next) would return.
    pub const fn next_index(&self) -> usize {
        self.position
    }

    /// Index of the element [`previous`](Self::previous) would return.
    pub const fn previous_index(&self) -> Option<usize> {
        self.position.checked_sub(1)
    }

    /// Direction of the last step that `set` or `remove` would act on.
    pub const fn last_motion(&self) -> Option<Motion> {
        self.last
    }

    /// Length of the underlying sequence.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Whether the underlying sequence is empty.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Read-only view of the whole sequence in storage order.
    pub fn as_slice(&self) -> &[T] {
        self.items.as_slice()
    }

    /// Whether an element exists after the cursor.
    pub fn has_next(&self) -> bool {
        self.position < self.items.len()
    }

    /// Whether an element exists before the cursor.
    pub const fn has_previous(&self) -> bool {
        self.position > 0
    }

    /// The element after the cursor, without moving.
    pub fn peek_next(&self) -> Option<&T> {
        self.items.get(self.position)
    }

    /// The element before the cursor, without moving.
    pub fn peek_previous(&self) -> Option<&T> {
        self.previous_index().and_then(|index| self.items.get(index))
    }

    /// Return the element after the cursor and step past it.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::OutOfBounds`] if the cursor is at the end.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> Result<&T, CursorError> {
        if !self.has_next() {
            return Err(self.out_of_bounds(Motion::Forward));
        }
        let index = self.position;
        self.position += 1;
        self.last = Some(Motion::Forward);
        trace!(index, "cursor.next");
        Ok(&self.items[index])
    }

    /// Step back over the element before the cursor and return it.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::OutOfBounds`] if the cursor is at the start.
    pub fn previous(&mut self) -> Result<&T, CursorError> {
        if !self.has_previous() {
            return Err(self.out_of_bounds(Motion::Backward));
        }
        self.position -= 1;
        self.last = Some(Motion::Backward);
        trace!(index = self.position, "cursor.previous");
        Ok(&self.items[self.position])
    }

    /// Replace the element most recently returned by `next` or `previous`.
    ///
    /// The cursor does not move, and repeated calls keep targeting the same
    /// element. Returns the value that was replaced.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::IllegalState`] if no element has been returned
    /// since the cursor was created or since the last `insert`/`remove`.
    pub fn set(&mut self, value: T) -> Result<T, CursorError> {
        let index = self.last_returned_index()?;
        trace!(index, "cursor.set");
        Ok(std::mem::replace(&mut self.items[index], value))
    }

    /// Remove the element most recently returned by `next` or `previous`.
    ///
    /// The cursor stays in the same gap relative to the surviving elements.
    ///
    /// # Errors
    ///
    /// Returns [`CursorError::IllegalState`] under the same conditions as
    /// [`set`](Self::set).
    pub fn remove(&mut self) -> Result<T, CursorError> {
        let index = self.last_returned_index()?;
        let removed = self.items.remove(index);
        if self.last == Some(Motion::Forward) {
            self.position -= 1;
        }
        self.last = None;
        trace!(index, "cursor.remove");
        Ok(removed)
    }

    /// Insert an element into the gap and step past it.
    ///
    /// A following `next` is unaffected; a following `previous` returns the
    /// inserted element.
    pub fn insert(&mut self, value: T) {
        self.items.insert(self.position, value);
        trace!(index = self.position, "cursor.insert");
        self.position += 1;
        self.last = None;
    }

    /// Release the cursor and hand back the sequence borrow.
    pub fn into_inner(self) -> &'a mut Vec<T> {
        self.items
    }

    fn last_returned_index(&self) -> Result<usize, CursorError> {
        match self.last {
            Some(Motion::Forward) => Ok(self.position - 1),
            Some(Motion::Backward) => Ok(self.position),
            None => Err(CursorError::IllegalState),
        }
    }

    fn out_of_bounds(&self, motion: Motion) -> CursorError {
        CursorError::OutOfBounds {
            motion,
            position: self.position,
            len: self.items.len(),
        }
    }
}
