use serde::de::{Deserialize, Deserializer};

/// One ticket as delivered by the crawler feed. Received, displayed,
/// discarded; there is no lifecycle beyond that.
#[derive(Clone, Debug, PartialEq, Eq, serde::Deserialize)]
pub struct Issue {
    pub id: String,
    pub status: IssueStatus,
    #[serde(rename = "type")]
    pub kind: IssueType,
    #[serde(default = "default_priority")]
    pub priority: Priority,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueStatus {
    ToDo,
    InProgress,
    Done,
}

/// Tracker statuses that count as development-complete even though the
/// tracker's own category still calls them "In Progress".
const DONE_STATUSES: [&str; 6] = [
    "READY FOR PRODUCTION RELEASE",
    "READY FOR PRODUCTION DEPLOYMENT",
    "READY FOR QA",
    "READY FOR UAT",
    "IN QA",
    "DONE",
];

impl IssueStatus {
    /// Normalize a raw tracker status into one of the three buckets.
    /// Feeds usually carry the three category names, but raw workflow
    /// statuses show up in hand-rolled exports; anything unrecognized is
    /// treated as not-started work.
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "To Do" => Self::ToDo,
            "In Progress" => Self::InProgress,
            "Done" => Self::Done,
            _ if is_development_done(raw) => Self::Done,
            _ => Self::ToDo,
        }
    }

    /// Whether the issue still counts toward the remaining-work total.
    pub fn is_open(self) -> bool {
        matches!(self, Self::ToDo | Self::InProgress)
    }
}

fn is_development_done(raw: &str) -> bool {
    let upper = raw.to_ascii_uppercase();
    DONE_STATUSES.contains(&upper.as_str())
}

impl<'de> Deserialize<'de> for IssueStatus {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&raw))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum IssueType {
    Feature,
    Bug,
    Epic,
}

impl IssueType {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "Bug" => Self::Bug,
            "Epic" => Self::Epic,
            _ => Self::Feature,
        }
    }
}

impl<'de> Deserialize<'de> for IssueType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&raw))
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Priority {
    Low,
    Medium,
    High,
    Critical,
}

impl Priority {
    pub fn from_raw(raw: &str) -> Self {
        match raw {
            "Low" => Self::Low,
            "High" => Self::High,
            "Critical" => Self::Critical,
            _ => Self::Medium,
        }
    }
}

impl<'de> Deserialize<'de> for Priority {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let raw = String::deserialize(deserializer)?;
        Ok(Self::from_raw(&raw))
    }
}

fn default_priority() -> Priority {
    Priority::Medium
}
