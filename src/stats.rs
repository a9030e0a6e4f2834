use std::fs;
use std::io::Write;
use std::path::Path;

use chrono::{Duration, Local, NaiveDate, NaiveDateTime};
use serde::Deserialize;

use crate::config;
use crate::issue::Issue;

pub const NO_ESTIMATE: &str = "Who knows, velocity can not be calculated yet";

/// One row of the throughput history: how many tickets were open and done
/// at a given check time.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct StatsSnapshot {
    pub checked_at: String,
    pub todo_count: u32,
    pub done_count: u32,
}

impl StatsSnapshot {
    /// Count the currently loaded issues into a snapshot stamped with the
    /// local wall clock.
    pub fn of_issues(issues: &[Issue]) -> Self {
        let checked_at = Local::now()
            .naive_local()
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string();
        Self::of_issues_at(issues, checked_at)
    }

    pub fn of_issues_at(issues: &[Issue], checked_at: String) -> Self {
        let todo_count = issues.iter().filter(|i| i.status.is_open()).count() as u32;
        let done_count = issues.len() as u32 - todo_count;
        Self {
            checked_at,
            todo_count,
            done_count,
        }
    }

    fn history_line(&self) -> String {
        format!(
            "{};{};{}\n",
            self.checked_at, self.todo_count, self.done_count
        )
    }
}

/// Derived throughput numbers shown in the panel header.
#[derive(Clone, Debug, PartialEq, Deserialize)]
pub struct VelocityStats {
    pub done_per_day: f64,
    pub estimated_done_date: String,
}

/// Parse a `checked_at;todo;done` history file body.
pub fn parse_history(text: &str) -> Result<Vec<StatsSnapshot>, String> {
    let mut history = Vec::new();
    for (line_no, line) in text.lines().enumerate() {
        if line.is_empty() {
            continue;
        }
        let mut fields = line.split(';');
        let (checked_at, todo, done) = match (fields.next(), fields.next(), fields.next()) {
            (Some(a), Some(b), Some(c)) if fields.next().is_none() => (a, b, c),
            _ => return Err(format!("history line {}: expected 3 fields", line_no + 1)),
        };
        let todo_count = todo
            .parse()
            .map_err(|e| format!("history line {}: bad todo count: {e}", line_no + 1))?;
        let done_count = done
            .parse()
            .map_err(|e| format!("history line {}: bad done count: {e}", line_no + 1))?;
        history.push(StatsSnapshot {
            checked_at: checked_at.to_string(),
            todo_count,
            done_count,
        });
    }
    Ok(history)
}

/// Load the history file. A file that does not exist yet reads as empty
/// history (the visualizer may run before any snapshot was recorded).
pub fn load_history(path: &str) -> Result<Vec<StatsSnapshot>, String> {
    if !Path::new(path).exists() {
        return Ok(Vec::new());
    }
    let text = fs::read_to_string(path).map_err(|e| format!("read {path}: {e}"))?;
    parse_history(&text)
}

/// Append one snapshot line, creating the file if needed.
pub fn append_snapshot(path: &str, snapshot: &StatsSnapshot) -> Result<(), String> {
    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(|e| format!("open {path}: {e}"))?;
    file.write_all(snapshot.history_line().as_bytes())
        .map_err(|e| format!("write {path}: {e}"))
}

/// Compute the throughput estimate from the first and last history rows.
///
/// Velocity is done-count growth per calendar day. Only a positive velocity
/// yields a projected date: the remaining todo count divided by the daily
/// rate, added to the last check date.
pub fn velocity_from_history(history: &[StatsSnapshot]) -> Result<VelocityStats, String> {
    let (first, last) = match (history.first(), history.last()) {
        (Some(first), Some(last)) => (first, last),
        _ => return Err("stats history is empty".to_string()),
    };

    let first_date = parse_check_date(&first.checked_at)?;
    let last_date = parse_check_date(&last.checked_at)?;
    let days_between = (last_date - first_date).num_days();

    let done_per_day = if days_between != 0 {
        (last.done_count as f64 - first.done_count as f64) / days_between as f64
    } else {
        0.0
    };

    let estimated_done_date = if done_per_day > 0.0 {
        let days_until_done = (last.todo_count as f64 / done_per_day) as i64;
        (last_date + Duration::days(days_until_done)).to_string()
    } else {
        NO_ESTIMATE.to_string()
    };

    Ok(VelocityStats {
        done_per_day,
        estimated_done_date,
    })
}

fn parse_check_date(raw: &str) -> Result<NaiveDate, String> {
    if let Ok(dt) = raw.parse::<NaiveDateTime>() {
        return Ok(dt.date());
    }
    raw.parse::<NaiveDate>()
        .map_err(|e| format!("bad checked_at {raw:?}: {e}"))
}

/// Pick the rows shown in the panel: everything while the history is short,
/// then the first snapshot followed by the most recent tail.
pub fn display_rows(history: &[StatsSnapshot]) -> Vec<&StatsSnapshot> {
    let shown = config::HISTORY_HEAD_ROWS + config::HISTORY_TAIL_ROWS;
    if history.len() <= shown {
        return history.iter().collect();
    }
    history[..config::HISTORY_HEAD_ROWS]
        .iter()
        .chain(history[history.len() - config::HISTORY_TAIL_ROWS..].iter())
        .collect()
}
