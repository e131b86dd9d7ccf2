//! The grade list walkthrough.
//!
//! Prints a list of grades, marks every grade in place through a
//! [`ListCursor`], prints the list again, then walks the same cursor back to
//! the start. Output is three lines, one per pass.

use std::fmt;
use std::io::Write;

use anyhow::{Context, Result};
use tracing::debug;

use crate::config::{DEFAULT_GRADES, GRADE_SUFFIX};
use crate::cursor::ListCursor;

/// Settings for one walkthrough run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Walkthrough {
    grades: Vec<String>,
    suffix: String,
}

impl Walkthrough {
    /// Create a walkthrough over the default grades.
    pub fn new() -> Self {
        Self {
            grades: DEFAULT_GRADES.into_iter().map(String::from).collect(),
            suffix: GRADE_SUFFIX.to_string(),
        }
    }

    /// Use a different starting list.
    #[must_use]
    pub fn with_grades<I, S>(mut self, grades: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.grades = grades.into_iter().map(Into::into).collect();
        self
    }

    /// Use a different mark for the mutating pass.
    #[must_use]
    pub fn with_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.suffix = suffix.into();
        self
    }

    /// Run all passes, writing one line per printed pass to `out`.
    ///
    /// Returns the list as it stands after mutation.
    ///
    /// # Errors
    ///
    /// Returns an error if writing to `out` fails.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<Vec<String>> {
        let mut grades = self.grades.clone();

        debug!(count = grades.len(), "printing grades");
        writeln!(out, "{}", format_line(&grades)).context("Failed to write grades")?;

        let mut cursor = ListCursor::new(&mut grades);
        while cursor.has_next() {
            let marked = format!("{}{}", cursor.next()?, self.suffix);
            cursor.set(marked)?;
        }

        debug!(suffix = %self.suffix, "printing marked grades");
        writeln!(out, "{}", format_line(cursor.as_slice()))
            .context("Failed to write marked grades")?;

        // The forward pass left the cursor at the end.
        let mut backward = Vec::with_capacity(cursor.len());
        while cursor.has_previous() {
            backward.push(cursor.previous()?.clone());
        }

        debug!(position = cursor.position(), "printing grades backward");
        writeln!(out, "{}", format_line(&backward))
            .context("Failed to write grades backward")?;

        Ok(grades)
    }
}

impl Default for Walkthrough {
    fn default() -> Self {
        Self::new()
    }
}

/// Format items as one output line, each followed by a single space.
pub fn format_line<I>(items: I) -> String
where
    I: IntoIterator,
    I::Item: fmt::Display,
{
    items.into_iter().fold(String::new(), |mut line, item| {
        line.push_str(&item.to_string());
        line.push(' ');
        line
    })
}
