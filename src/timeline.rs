//! Deadline-ordered timeline of existing tasks
//!
//! Tasks are read from a JSON file, sorted by deadline, and alternated
//! between the left and right side of a centre rule.

mod layout;
mod reader;
pub mod timeline_render;

pub use layout::{Side, Timeline, TimelineEntry, parse_deadline};
pub use reader::{Task, TaskReader};
