use thiserror::Error;

use super::Motion;

/// Precondition violations reported by [`super::ListCursor`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CursorError {
    /// A traversal was requested with no element left in that direction.
    #[error("cannot move {motion} from position {position} in a sequence of length {len}")]
    OutOfBounds {
        motion: Motion,
        position: usize,
        len: usize,
    },

    /// `set` or `remove` was called with no element to act on.
    #[error("no element has been visited since the cursor was created or last modified")]
    IllegalState,
}
