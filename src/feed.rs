use std::fs;

use serde::Deserialize;

use crate::issue::Issue;
use crate::stats::{StatsSnapshot, VelocityStats};

/// The pre-fetched payload the upstream crawler writes: issue list plus the
/// throughput history it had accumulated at crawl time.
#[derive(Debug, Deserialize)]
pub struct IssueFeed {
    #[serde(default)]
    pub stats: Vec<StatsSnapshot>,
    #[serde(default, rename = "velocityStats")]
    pub velocity_stats: Option<VelocityStats>,
    pub issues: Vec<Issue>,
}

/// Parse a feed document. Older crawler builds wrote the payload as a JS
/// assignment (`const issues={...};`) for direct inclusion in a page; the
/// wrapper is stripped before JSON parsing.
pub fn parse_feed(text: &str) -> Result<IssueFeed, String> {
    let body = strip_js_wrapper(text);
    serde_json::from_str(body).map_err(|e| format!("malformed feed: {e}"))
}

pub fn load_feed(path: &str) -> Result<IssueFeed, String> {
    let text = fs::read_to_string(path).map_err(|e| format!("read {path}: {e}"))?;
    parse_feed(&text)
}

fn strip_js_wrapper(text: &str) -> &str {
    let trimmed = text.trim();
    let body = match trimmed.strip_prefix("const issues") {
        Some(rest) => rest.trim_start().strip_prefix('=').unwrap_or(trimmed),
        None => trimmed,
    };
    body.trim().trim_end_matches(';').trim_end()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::{IssueStatus, IssueType, Priority};

    const FEED: &str = r#"{
        "stats": [
            {"checked_at": "2024-03-01T09:00:00", "todo_count": 2, "done_count": 1}
        ],
        "velocityStats": {"done_per_day": 0.5, "estimated_done_date": "2024-03-09"},
        "issues": [
            {"id": "PAY-1", "status": "To Do", "type": "Feature", "priority": "High"},
            {"id": "PAY-2", "status": "Done", "type": "Bug", "priority": "Low"}
        ]
    }"#;

    #[test]
    fn plain_json_feed_parses() {
        let feed = parse_feed(FEED).unwrap();
        assert_eq!(feed.issues.len(), 2);
        assert_eq!(feed.stats.len(), 1);
        assert_eq!(
            feed.velocity_stats.as_ref().unwrap().estimated_done_date,
            "2024-03-09"
        );
        assert_eq!(
            feed.issues[0],
            Issue {
                id: "PAY-1".to_string(),
                status: IssueStatus::ToDo,
                kind: IssueType::Feature,
                priority: Priority::High,
            }
        );
    }

    #[test]
    fn js_assignment_wrapper_is_stripped() {
        let wrapped = format!("const issues={FEED};");
        let feed = parse_feed(&wrapped).unwrap();
        assert_eq!(feed.issues.len(), 2);

        let spaced = format!("const issues = {FEED}");
        assert_eq!(parse_feed(&spaced).unwrap().issues.len(), 2);
    }

    #[test]
    fn stats_and_velocity_are_optional() {
        let feed = parse_feed(r#"{"issues": []}"#).unwrap();
        assert!(feed.stats.is_empty());
        assert!(feed.velocity_stats.is_none());
        assert!(feed.issues.is_empty());
    }

    #[test]
    fn missing_issues_is_an_error() {
        assert!(parse_feed(r#"{"stats": []}"#).is_err());
    }
}
