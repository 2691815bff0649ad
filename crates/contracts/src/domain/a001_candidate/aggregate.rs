use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::filter::{HasStatus, Searchable};

// ============================================================================
// Status
// ============================================================================

/// Этап кандидата в воронке найма
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CandidateStatus {
    New,
    Screening,
    #[serde(rename = "Interview Level 1")]
    InterviewLevel1,
    #[serde(rename = "Interview Level 2")]
    InterviewLevel2,
    #[serde(rename = "Interview Level 3")]
    InterviewLevel3,
    #[serde(rename = "Interview Level 4")]
    InterviewLevel4,
    Offered,
    Joined,
    Rejected,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl CandidateStatus {
    pub fn label(&self) -> &'static str {
        match self {
            CandidateStatus::New => "New",
            CandidateStatus::Screening => "Screening",
            CandidateStatus::InterviewLevel1 => "Interview Level 1",
            CandidateStatus::InterviewLevel2 => "Interview Level 2",
            CandidateStatus::InterviewLevel3 => "Interview Level 3",
            CandidateStatus::InterviewLevel4 => "Interview Level 4",
            CandidateStatus::Offered => "Offered",
            CandidateStatus::Joined => "Joined",
            CandidateStatus::Rejected => "Rejected",
            CandidateStatus::OnHold => "On Hold",
        }
    }

    /// Status select order.
    pub fn all() -> Vec<CandidateStatus> {
        vec![
            CandidateStatus::New,
            CandidateStatus::Screening,
            CandidateStatus::InterviewLevel1,
            CandidateStatus::InterviewLevel2,
            CandidateStatus::InterviewLevel3,
            CandidateStatus::InterviewLevel4,
            CandidateStatus::Offered,
            CandidateStatus::Joined,
            CandidateStatus::Rejected,
            CandidateStatus::OnHold,
        ]
    }

    pub fn is_interview(&self) -> bool {
        matches!(
            self,
            CandidateStatus::InterviewLevel1
                | CandidateStatus::InterviewLevel2
                | CandidateStatus::InterviewLevel3
                | CandidateStatus::InterviewLevel4
        )
    }

    /// Bucket used by the dashboard distribution chart: the four interview
    /// levels collapse into one "Interview" bar.
    pub fn pipeline_stage(&self) -> &'static str {
        if self.is_interview() {
            "Interview"
        } else {
            self.label()
        }
    }
}

// ============================================================================
// Record
// ============================================================================

/// Кандидат. Имена клиента и рекрутера хранятся копией, без join.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Candidate {
    pub id: String,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub position: String,
    pub client_id: String,
    pub client_name: String,
    pub status: CandidateStatus,
    pub assigned_recruiter_id: String,
    pub assigned_recruiter_name: String,
    #[serde(rename = "currentCTC")]
    pub current_ctc: String,
    #[serde(rename = "expectedCTC")]
    pub expected_ctc: String,
    pub notice_period: String,
    pub experience: String,
    pub skills: Vec<String>,
    pub education: String,
    pub location: String,
    #[serde(default)]
    pub next_interview_date: Option<NaiveDate>,
    #[serde(default)]
    pub join_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Searchable for Candidate {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.position.as_str(),
            self.client_name.as_str(),
        ]
    }
}

impl HasStatus for Candidate {
    fn status_label(&self) -> &str {
        self.status.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::{filter_records, StatusFilter};

    fn candidate(id: &str, name: &str, status: CandidateStatus) -> Candidate {
        let ts = DateTime::parse_from_rfc3339("2024-01-10T09:00:00Z")
            .unwrap()
            .with_timezone(&Utc);
        Candidate {
            id: id.into(),
            name: name.into(),
            email: format!("{}@mail.com", name.to_lowercase().replace(' ', ".")),
            phone: "+91 98000 00000".into(),
            position: "Senior Developer".into(),
            client_id: "c1".into(),
            client_name: "TechCorp Solutions".into(),
            status,
            assigned_recruiter_id: "4".into(),
            assigned_recruiter_name: "Michael Brown".into(),
            current_ctc: "18 LPA".into(),
            expected_ctc: "24 LPA".into(),
            notice_period: "30 days".into(),
            experience: "6 years".into(),
            skills: vec!["Rust".into()],
            education: "B.Tech".into(),
            location: "Pune".into(),
            next_interview_date: None,
            join_date: None,
            created_at: ts,
            updated_at: ts,
        }
    }

    #[test]
    fn test_status_labels_match_serde() {
        for status in CandidateStatus::all() {
            let json = serde_json::to_string(&status).unwrap();
            assert_eq!(json, format!("\"{}\"", status.label()));
        }
    }

    #[test]
    fn test_pipeline_stage_groups_interviews() {
        assert_eq!(CandidateStatus::InterviewLevel3.pipeline_stage(), "Interview");
        assert_eq!(CandidateStatus::Offered.pipeline_stage(), "Offered");
    }

    #[test]
    fn test_candidate_scenario() {
        let data = vec![
            candidate("1", "Alex Kumar", CandidateStatus::New),
            candidate("2", "Priya Sharma", CandidateStatus::Joined),
        ];

        let found = filter_records(&data, "priya", &StatusFilter::All);
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Priya Sharma");

        let found = filter_records(&data, "", &StatusFilter::parse("Joined"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].name, "Priya Sharma");

        assert!(filter_records(&data, "zzz", &StatusFilter::All).is_empty());
    }

    #[test]
    fn test_candidate_searches_client_and_position() {
        let mut other = candidate("3", "Rahul Mehta", CandidateStatus::Screening);
        other.client_name = "FinServe Bank".into();
        other.position = "Data Analyst".into();
        let data = vec![candidate("1", "Alex Kumar", CandidateStatus::New), other];

        assert_eq!(filter_records(&data, "finserve", &StatusFilter::All)[0].id, "3");
        assert_eq!(filter_records(&data, "ANALYST", &StatusFilter::All)[0].id, "3");
        assert_eq!(filter_records(&data, "alex.kumar@", &StatusFilter::All)[0].id, "1");
        // location is not a search field
        assert!(filter_records(&data, "pune", &StatusFilter::All).is_empty());
    }

    #[test]
    fn test_interview_status_filter_uses_full_label() {
        let data = vec![candidate("1", "Alex Kumar", CandidateStatus::InterviewLevel2)];
        assert_eq!(filter_records(&data, "", &StatusFilter::parse("Interview Level 2")).len(), 1);
        assert!(filter_records(&data, "", &StatusFilter::parse("Interview")).is_empty());
    }
}
