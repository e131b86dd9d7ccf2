//! Built-in values for the walkthrough and its logging.

use tracing::Level;

/// Grades the walkthrough starts from, in storage order.
pub const DEFAULT_GRADES: [&str; 6] = ["A", "B", "C", "D", "E", "F"];

/// Appended to every grade on the mutating pass.
pub const GRADE_SUFFIX: &str = "+";

/// Minimum level logged to stderr unless `RUST_LOG` asks for more.
pub const DEFAULT_LOG_LEVEL: Level = Level::WARN;
