use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::shared::filter::{HasStatus, Searchable};

/// Highest interview round a candidate can go through.
pub const MAX_INTERVIEW_LEVEL: u8 = 4;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum InterviewStatus {
    Pending,
    Scheduled,
    Completed,
    Passed,
    Failed,
}

impl InterviewStatus {
    pub fn label(&self) -> &'static str {
        match self {
            InterviewStatus::Pending => "Pending",
            InterviewStatus::Scheduled => "Scheduled",
            InterviewStatus::Completed => "Completed",
            InterviewStatus::Passed => "Passed",
            InterviewStatus::Failed => "Failed",
        }
    }

    pub fn is_done(&self) -> bool {
        matches!(self, InterviewStatus::Completed | InterviewStatus::Passed)
    }
}

/// Один раунд собеседования кандидата
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InterviewLevel {
    pub candidate_id: String,
    pub level: u8,
    #[serde(default)]
    pub date: Option<NaiveDate>,
    pub status: InterviewStatus,
    #[serde(default)]
    pub interviewer: Option<String>,
    #[serde(default)]
    pub feedback: Option<String>,
    #[serde(default)]
    pub scheduled_time: Option<String>,
}

impl InterviewLevel {
    /// Unique key inside the collection: candidate id plus round number.
    pub fn key(&self) -> String {
        format!("{}#{}", self.candidate_id, self.level)
    }
}

impl Searchable for InterviewLevel {
    fn search_fields(&self) -> Vec<&str> {
        [self.interviewer.as_deref(), self.feedback.as_deref()]
            .into_iter()
            .flatten()
            .collect()
    }
}

impl HasStatus for InterviewLevel {
    fn status_label(&self) -> &str {
        self.status.label()
    }
}

/// Rounds 1..=4 for one candidate. Missing rounds are filled in as Pending so
/// the timeline always has four steps.
pub fn timeline_for(levels: &[InterviewLevel], candidate_id: &str) -> Vec<InterviewLevel> {
    (1..=MAX_INTERVIEW_LEVEL)
        .map(|level| {
            levels
                .iter()
                .find(|l| l.candidate_id == candidate_id && l.level == level)
                .cloned()
                .unwrap_or_else(|| InterviewLevel {
                    candidate_id: candidate_id.to_string(),
                    level,
                    date: None,
                    status: InterviewStatus::Pending,
                    interviewer: None,
                    feedback: None,
                    scheduled_time: None,
                })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(candidate: &str, level: u8, status: InterviewStatus, interviewer: Option<&str>) -> InterviewLevel {
        InterviewLevel {
            candidate_id: candidate.into(),
            level,
            date: None,
            status,
            interviewer: interviewer.map(Into::into),
            feedback: None,
            scheduled_time: None,
        }
    }

    #[test]
    fn test_timeline_pads_missing_rounds() {
        let data = vec![
            level("1", 2, InterviewStatus::Scheduled, Some("Raj Patel")),
            level("1", 1, InterviewStatus::Passed, Some("Anita Desai")),
            level("2", 1, InterviewStatus::Failed, None),
        ];
        let timeline = timeline_for(&data, "1");
        assert_eq!(timeline.len(), 4);
        assert_eq!(timeline[0].status, InterviewStatus::Passed);
        assert_eq!(timeline[1].status, InterviewStatus::Scheduled);
        assert_eq!(timeline[2].status, InterviewStatus::Pending);
        assert_eq!(timeline[3].level, 4);

        let empty = timeline_for(&data, "missing");
        assert!(empty.iter().all(|l| l.status == InterviewStatus::Pending));
    }

    #[test]
    fn test_optional_fields_are_searched_when_present() {
        let data = vec![
            level("1", 1, InterviewStatus::Passed, Some("Anita Desai")),
            level("1", 2, InterviewStatus::Pending, None),
        ];
        assert!(data[0].matches_query("desai"));
        assert!(!data[1].matches_query("desai"));
        assert!(data.iter().all(|l| l.matches_query("")));
    }
}
