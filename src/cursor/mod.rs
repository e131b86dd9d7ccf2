//! Bidirectional cursors over ordered sequences.
//!
//! A [`ListCursor`] sits in the gap between two elements of a `Vec` and can
//! walk in either direction, replacing, removing, or inserting elements as it
//! goes without being invalidated.

mod error;
mod list_cursor;

pub use error::CursorError;
pub use list_cursor::{ListCursor, Motion};
