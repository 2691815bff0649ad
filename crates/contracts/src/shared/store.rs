//! In-memory record store built from the bundled demo fixtures.
//!
//! Every collection is parsed once; pages borrow slices from the store and
//! never mutate it.

use serde::Deserialize;
use thiserror::Error;

use crate::dashboards::d400_dashboard_stats::DashboardStats;
use crate::dashboards::d401_reports::ReportSeries;
use crate::domain::a001_candidate::Candidate;
use crate::domain::a002_client::Client;
use crate::domain::a003_position::Position;
use crate::domain::a004_activity::Activity;
use crate::domain::a005_comment::Comment;
use crate::domain::a006_interview_level::{timeline_for, InterviewLevel};
use crate::system::users::User;

const USERS_JSON: &str = include_str!("fixtures/users.json");
const CANDIDATES_JSON: &str = include_str!("fixtures/candidates.json");
const CLIENTS_JSON: &str = include_str!("fixtures/clients.json");
const POSITIONS_JSON: &str = include_str!("fixtures/positions.json");
const ACTIVITIES_JSON: &str = include_str!("fixtures/activities.json");
const COMMENTS_JSON: &str = include_str!("fixtures/comments.json");
const INTERVIEW_LEVELS_JSON: &str = include_str!("fixtures/interview_levels.json");
const DASHBOARD_JSON: &str = include_str!("fixtures/dashboard.json");

#[derive(Debug, Error)]
pub enum FixtureError {
    #[error("fixture '{collection}' is malformed: {source}")]
    Malformed {
        collection: &'static str,
        #[source]
        source: serde_json::Error,
    },
    #[error("fixture '{collection}' has duplicate id '{id}'")]
    DuplicateId { collection: &'static str, id: String },
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct DashboardFixture {
    stats: DashboardStats,
    reports: ReportSeries,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RecordStore {
    pub users: Vec<User>,
    pub candidates: Vec<Candidate>,
    pub clients: Vec<Client>,
    pub positions: Vec<Position>,
    pub activities: Vec<Activity>,
    pub comments: Vec<Comment>,
    pub interview_levels: Vec<InterviewLevel>,
    pub dashboard_stats: DashboardStats,
    pub reports: ReportSeries,
}

fn parse<T: for<'de> Deserialize<'de>>(
    collection: &'static str,
    raw: &str,
) -> Result<T, FixtureError> {
    serde_json::from_str(raw).map_err(|source| FixtureError::Malformed { collection, source })
}

fn ensure_unique<'a>(
    collection: &'static str,
    ids: impl Iterator<Item = &'a str>,
) -> Result<(), FixtureError> {
    let mut seen = std::collections::HashSet::new();
    for id in ids {
        if !seen.insert(id) {
            return Err(FixtureError::DuplicateId {
                collection,
                id: id.to_string(),
            });
        }
    }
    Ok(())
}

impl RecordStore {
    /// Parses the fixtures compiled into the crate.
    pub fn load_embedded() -> Result<Self, FixtureError> {
        let dashboard: DashboardFixture = parse("dashboard", DASHBOARD_JSON)?;

        let store = Self {
            users: parse("users", USERS_JSON)?,
            candidates: parse("candidates", CANDIDATES_JSON)?,
            clients: parse("clients", CLIENTS_JSON)?,
            positions: parse("positions", POSITIONS_JSON)?,
            activities: parse("activities", ACTIVITIES_JSON)?,
            comments: parse("comments", COMMENTS_JSON)?,
            interview_levels: parse("interview_levels", INTERVIEW_LEVELS_JSON)?,
            dashboard_stats: dashboard.stats,
            reports: dashboard.reports,
        };
        store.validate()?;
        Ok(store)
    }

    fn validate(&self) -> Result<(), FixtureError> {
        ensure_unique("users", self.users.iter().map(|r| r.id.as_str()))?;
        ensure_unique("candidates", self.candidates.iter().map(|r| r.id.as_str()))?;
        ensure_unique("clients", self.clients.iter().map(|r| r.id.as_str()))?;
        ensure_unique("positions", self.positions.iter().map(|r| r.id.as_str()))?;
        ensure_unique("activities", self.activities.iter().map(|r| r.id.as_str()))?;
        ensure_unique("comments", self.comments.iter().map(|r| r.id.as_str()))?;
        let keys: Vec<String> = self.interview_levels.iter().map(InterviewLevel::key).collect();
        ensure_unique("interview_levels", keys.iter().map(String::as_str))
    }

    pub fn candidate_by_id(&self, id: &str) -> Option<&Candidate> {
        self.candidates.iter().find(|c| c.id == id)
    }

    pub fn client_by_id(&self, id: &str) -> Option<&Client> {
        self.clients.iter().find(|c| c.id == id)
    }

    pub fn user_by_id(&self, id: &str) -> Option<&User> {
        self.users.iter().find(|u| u.id == id)
    }

    pub fn positions_for_client(&self, client_id: &str) -> Vec<&Position> {
        self.positions.iter().filter(|p| p.client_id == client_id).collect()
    }

    /// Comments on a candidate, oldest first.
    pub fn comments_for(&self, candidate_id: &str) -> Vec<&Comment> {
        let mut found: Vec<&Comment> = self
            .comments
            .iter()
            .filter(|c| c.candidate_id == candidate_id)
            .collect();
        found.sort_by_key(|c| c.created_at);
        found
    }

    /// Full interview timeline, missing rounds padded as pending.
    pub fn interview_levels_for(&self, candidate_id: &str) -> Vec<InterviewLevel> {
        timeline_for(&self.interview_levels, candidate_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dashboards::d400_dashboard_stats::status_distribution;
    use crate::domain::a006_interview_level::{InterviewStatus, MAX_INTERVIEW_LEVEL};
    use crate::system::auth::Role;

    #[test]
    fn test_load_embedded() {
        let store = RecordStore::load_embedded().unwrap();
        assert!(!store.users.is_empty());
        assert!(!store.candidates.is_empty());
        assert!(!store.clients.is_empty());
        assert!(!store.positions.is_empty());
        assert!(!store.activities.is_empty());
        assert_eq!(store.reports.monthly.len(), 6);
        assert_eq!(store.reports.recruiter_performance.len(), 4);
        assert!(store.dashboard_stats.total_candidates > 0);
    }

    #[test]
    fn test_every_role_has_a_demo_account() {
        let store = RecordStore::load_embedded().unwrap();
        for role in Role::ALL {
            assert!(store.users.iter().any(|u| u.role == role), "{role} missing");
        }
    }

    #[test]
    fn test_lookups() {
        let store = RecordStore::load_embedded().unwrap();
        let alex = store.candidate_by_id("1").unwrap();
        assert_eq!(alex.name, "Alex Kumar");
        assert!(store.client_by_id(&alex.client_id).is_some());
        assert!(store.user_by_id(&alex.assigned_recruiter_id).is_some());
        assert!(store.candidate_by_id("999").is_none());
        assert!(!store.positions_for_client("c1").is_empty());
    }

    #[test]
    fn test_comments_sorted_oldest_first() {
        let store = RecordStore::load_embedded().unwrap();
        let comments = store.comments_for("1");
        assert_eq!(comments.len(), 2);
        assert!(comments[0].created_at <= comments[1].created_at);
        assert!(store.comments_for("999").is_empty());
    }

    #[test]
    fn test_interview_timeline_padded() {
        let store = RecordStore::load_embedded().unwrap();
        let timeline = store.interview_levels_for("1");
        assert_eq!(timeline.len(), MAX_INTERVIEW_LEVEL as usize);
        assert_eq!(timeline[0].status, InterviewStatus::Passed);
        assert_eq!(timeline[1].status, InterviewStatus::Scheduled);
        assert_eq!(timeline[3].status, InterviewStatus::Pending);
    }

    #[test]
    fn test_distribution_covers_all_candidates() {
        let store = RecordStore::load_embedded().unwrap();
        let total: usize = status_distribution(&store.candidates)
            .iter()
            .map(|s| s.count)
            .sum();
        assert_eq!(total, store.candidates.len());
    }

    #[test]
    fn test_malformed_fixture_names_collection() {
        let err = parse::<Vec<User>>("users", "[{").unwrap_err();
        assert!(err.to_string().contains("'users'"));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let err = ensure_unique("clients", ["c1", "c2", "c1"].into_iter()).unwrap_err();
        assert!(matches!(err, FixtureError::DuplicateId { id, .. } if id == "c1"));
    }
}
