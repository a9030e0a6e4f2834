use macroquad::prelude::*;

use crate::config;
use crate::issue::{Issue, IssueStatus, IssueType, Priority};

/// Bugs render smaller than features and epics.
pub fn radius_for(kind: IssueType) -> f32 {
    match kind {
        IssueType::Bug => config::BUG_RADIUS,
        IssueType::Feature | IssueType::Epic => config::TICKET_RADIUS,
    }
}

/// Fill color for a ticket circle. Open tickets are colored by how urgent
/// they are; once work starts the status takes over.
pub fn fill_color(issue: &Issue) -> Color {
    match issue.status {
        IssueStatus::ToDo => priority_color(issue.priority),
        IssueStatus::InProgress => Color::from_hex(0x90ee90), // lightgreen
        IssueStatus::Done => Color::from_hex(0x008000),       // green
    }
}

pub fn priority_color(priority: Priority) -> Color {
    match priority {
        Priority::Low => Color::from_hex(0xfdc500),
        Priority::Medium => Color::from_hex(0xfd8c00),
        Priority::High => Color::from_hex(0xdc0000),
        Priority::Critical => Color::from_hex(0x780000),
    }
}

pub fn stroke_color() -> Color {
    BLACK
}

pub fn wall_color() -> Color {
    Color::from_hex(0x0000ff) // blue
}

#[cfg(test)]
mod tests {
    use super::*;

    fn issue(status: IssueStatus, kind: IssueType, priority: Priority) -> Issue {
        Issue {
            id: "T-1".to_string(),
            status,
            kind,
            priority,
        }
    }

    #[test]
    fn bugs_are_small_everything_else_is_large() {
        assert_eq!(radius_for(IssueType::Bug), 10.0);
        assert_eq!(radius_for(IssueType::Feature), 15.0);
        assert_eq!(radius_for(IssueType::Epic), 15.0);
    }

    #[test]
    fn open_tickets_take_their_priority_color() {
        let critical = issue(IssueStatus::ToDo, IssueType::Feature, Priority::Critical);
        assert_eq!(fill_color(&critical), Color::from_hex(0x780000));
        let low = issue(IssueStatus::ToDo, IssueType::Bug, Priority::Low);
        assert_eq!(fill_color(&low), Color::from_hex(0xfdc500));
    }

    #[test]
    fn started_tickets_take_their_status_color() {
        let in_progress = issue(IssueStatus::InProgress, IssueType::Bug, Priority::Critical);
        assert_eq!(fill_color(&in_progress), Color::from_hex(0x90ee90));
        let done = issue(IssueStatus::Done, IssueType::Epic, Priority::High);
        assert_eq!(fill_color(&done), Color::from_hex(0x008000));
    }
}
