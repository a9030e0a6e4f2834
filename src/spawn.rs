use std::collections::VecDeque;

use crate::config;
use crate::issue::{Issue, IssueStatus};
use crate::pool::PoolId;

/// One pending drop: which issue falls into which pool, and when.
#[derive(Clone, Debug, PartialEq)]
pub struct DropEvent {
    pub at_ms: f64,
    pub issue: Issue,
    pub pool: PoolId,
}

/// Time-ordered queue of ticket drops, built once from the issue list.
///
/// To Do and Done tickets cascade into their pools 25ms apart starting at
/// 100ms; In Progress tickets join the To Do pool once its batch would have
/// finished, so the pool visibly fills with not-started work first.
pub struct DropSchedule {
    events: VecDeque<DropEvent>,
}

impl DropSchedule {
    pub fn build(issues: &[Issue]) -> Self {
        let by_status = |status: IssueStatus| issues.iter().filter(move |i| i.status == status);

        let todo_len = by_status(IssueStatus::ToDo).count();
        let todo_done_at =
            config::FIRST_DROP_DELAY_MS + todo_len as f64 * config::DROP_INTERVAL_MS;

        let mut events: Vec<DropEvent> = Vec::with_capacity(issues.len());
        for (index, issue) in by_status(IssueStatus::ToDo).enumerate() {
            events.push(DropEvent {
                at_ms: config::FIRST_DROP_DELAY_MS + index as f64 * config::DROP_INTERVAL_MS,
                issue: issue.clone(),
                pool: PoolId::Todo,
            });
        }
        for (index, issue) in by_status(IssueStatus::InProgress).enumerate() {
            events.push(DropEvent {
                at_ms: todo_done_at + index as f64 * config::DROP_INTERVAL_MS,
                issue: issue.clone(),
                pool: PoolId::Todo,
            });
        }
        for (index, issue) in by_status(IssueStatus::Done).enumerate() {
            events.push(DropEvent {
                at_ms: config::FIRST_DROP_DELAY_MS + index as f64 * config::DROP_INTERVAL_MS,
                issue: issue.clone(),
                pool: PoolId::Done,
            });
        }

        // Stable: equal due times keep build order (To Do before Done).
        events.sort_by(|a, b| a.at_ms.total_cmp(&b.at_ms));

        Self {
            events: events.into(),
        }
    }

    /// Pop every event due at or before `now_ms`, oldest first.
    pub fn drain_due(&mut self, now_ms: f64) -> Vec<DropEvent> {
        let mut due = Vec::new();
        while self
            .events
            .front()
            .is_some_and(|event| event.at_ms <= now_ms)
        {
            if let Some(event) = self.events.pop_front() {
                due.push(event);
            }
        }
        due
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }
}
