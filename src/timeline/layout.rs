use chrono::{DateTime, NaiveDate, NaiveDateTime};

use super::reader::Task;

/// Which side of the centre rule an entry sits on
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Left,
    Right,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimelineEntry {
    pub task: Task,
    pub side: Side,
    /// None when the deadline could not be parsed
    pub due: Option<NaiveDateTime>,
}

/// Tasks sorted by deadline, alternating sides
#[derive(Debug, Clone, Default)]
pub struct Timeline {
    entries: Vec<TimelineEntry>,
    scroll: u16,
}

impl Timeline {
    /// Sort `tasks` by deadline, earliest first
    ///
    /// The sort is stable. Tasks whose deadline does not parse keep their
    /// relative order and go after every dated task.
    pub fn new(tasks: Vec<Task>) -> Self {
        let mut dated: Vec<(Option<NaiveDateTime>, Task)> = tasks
            .into_iter()
            .map(|task| {
                let due = parse_deadline(&task.deadline);
                if due.is_none() {
                    log::warn!("Unrecognised deadline {:?} for {:?}", task.deadline, task.title);
                }
                (due, task)
            })
            .collect();
        dated.sort_by_key(|(due, _)| (due.is_none(), *due));

        let entries = dated
            .into_iter()
            .enumerate()
            .map(|(index, (due, task))| TimelineEntry {
                task,
                side: if index % 2 == 0 { Side::Left } else { Side::Right },
                due,
            })
            .collect();

        Self { entries, scroll: 0 }
    }

    pub fn entries(&self) -> &[TimelineEntry] {
        &self.entries
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn scroll(&self) -> u16 {
        self.scroll
    }

    pub fn scroll_down(&mut self, lines: u16, max: u16) {
        self.scroll = self.scroll.saturating_add(lines).min(max);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }
}

/// Parse the deadline formats the task server emits
pub fn parse_deadline(raw: &str) -> Option<NaiveDateTime> {
    let raw = raw.trim();

    if let Ok(date) = NaiveDate::parse_from_str(raw, "%Y-%m-%d") {
        return date.and_hms_opt(0, 0, 0);
    }
    for format in ["%Y-%m-%dT%H:%M:%S", "%Y-%m-%d %H:%M:%S", "%Y-%m-%dT%H:%M"] {
        if let Ok(datetime) = NaiveDateTime::parse_from_str(raw, format) {
            return Some(datetime);
        }
    }
    DateTime::parse_from_rfc3339(raw)
        .ok()
        .map(|datetime| datetime.naive_utc())
}

#[cfg(test)]
#[path = "layout_tests.rs"]
mod layout_tests;
