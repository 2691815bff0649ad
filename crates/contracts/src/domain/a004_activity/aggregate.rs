use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::filter::{HasStatus, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ActivityKind {
    CandidateAdded,
    InterviewScheduled,
    StatusChanged,
    OfferSent,
    CandidateJoined,
}

impl ActivityKind {
    pub fn code(&self) -> &'static str {
        match self {
            ActivityKind::CandidateAdded => "candidate_added",
            ActivityKind::InterviewScheduled => "interview_scheduled",
            ActivityKind::StatusChanged => "status_changed",
            ActivityKind::OfferSent => "offer_sent",
            ActivityKind::CandidateJoined => "candidate_joined",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            ActivityKind::CandidateAdded => "user-plus",
            ActivityKind::InterviewScheduled => "calendar",
            ActivityKind::StatusChanged => "users",
            ActivityKind::OfferSent => "briefcase",
            ActivityKind::CandidateJoined => "check",
        }
    }
}

/// Событие в ленте активности дашборда
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Activity {
    pub id: String,
    #[serde(rename = "type")]
    pub kind: ActivityKind,
    pub title: String,
    pub description: String,
    pub user_id: String,
    pub user_name: String,
    pub timestamp: DateTime<Utc>,
}

impl Searchable for Activity {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.title.as_str(),
            self.description.as_str(),
            self.user_name.as_str(),
        ]
    }
}

/// The activity kind code doubles as its status for the status select.
impl HasStatus for Activity {
    fn status_label(&self) -> &str {
        self.kind.code()
    }
}

/// Most recent first, at most `limit` entries.
pub fn recent(activities: &[Activity], limit: usize) -> Vec<&Activity> {
    let mut sorted: Vec<&Activity> = activities.iter().collect();
    sorted.sort_by(|a, b| b.timestamp.cmp(&a.timestamp));
    sorted.truncate(limit);
    sorted
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activity(id: &str, ts: &str) -> Activity {
        Activity {
            id: id.into(),
            kind: ActivityKind::OfferSent,
            title: "Offer sent".into(),
            description: "Offer letter sent".into(),
            user_id: "2".into(),
            user_name: "Sarah Wilson".into(),
            timestamp: DateTime::parse_from_rfc3339(ts).unwrap().with_timezone(&Utc),
        }
    }

    #[test]
    fn test_kind_serde_matches_code() {
        let kind: ActivityKind = serde_json::from_str("\"interview_scheduled\"").unwrap();
        assert_eq!(kind, ActivityKind::InterviewScheduled);
        assert_eq!(kind.code(), "interview_scheduled");
    }

    #[test]
    fn test_recent_orders_newest_first() {
        let data = vec![
            activity("a1", "2024-02-10T10:00:00Z"),
            activity("a2", "2024-02-12T10:00:00Z"),
            activity("a3", "2024-02-11T10:00:00Z"),
        ];
        let ids: Vec<&str> = recent(&data, 2).iter().map(|a| a.id.as_str()).collect();
        assert_eq!(ids, vec!["a2", "a3"]);
        assert_eq!(recent(&data, 10).len(), 3);
    }
}
