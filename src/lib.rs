// Only allow lints that are either transitive-dependency noise or
// genuinely opinionated style choices that don't indicate real issues.
#![allow(
    // Transitive dependency version mismatches we can't control
    clippy::multiple_crate_versions,
    // module_name_repetitions is pure style preference (e.g. cursor::CursorError)
    clippy::module_name_repetitions
)]

//! # Gradewalk
//!
//! A walkthrough of bidirectional list cursors.
//!
//! Gradewalk builds a list of grades and walks it with:
//! - A forward-only pass that prints the list
//! - A cursor pass that marks every grade in place
//! - A second forward-only print of the marked list
//! - A backward pass over the same cursor, from the end to the start
//!
//! ## Modules
//!
//! - [`cursor`]: The bidirectional, mutating list cursor
//! - [`walkthrough`]: The three-line grade walkthrough
//! - [`config`]: Built-in grades, mark, and log level

pub mod config;
pub mod cursor;
pub mod walkthrough;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::cursor::{CursorError, ListCursor, Motion};
    pub use crate::walkthrough::Walkthrough;
}
