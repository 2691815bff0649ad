use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::filter::{HasStatus, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PositionStatus {
    Open,
    Closed,
    #[serde(rename = "On Hold")]
    OnHold,
}

impl PositionStatus {
    pub fn label(&self) -> &'static str {
        match self {
            PositionStatus::Open => "Open",
            PositionStatus::Closed => "Closed",
            PositionStatus::OnHold => "On Hold",
        }
    }

    pub fn all() -> Vec<PositionStatus> {
        vec![PositionStatus::Open, PositionStatus::Closed, PositionStatus::OnHold]
    }
}

/// Открытая вакансия клиента
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Position {
    pub id: String,
    pub title: String,
    pub client_id: String,
    pub client_name: String,
    pub description: String,
    pub required_skills: Vec<String>,
    pub experience: String,
    pub budget: String,
    pub openings: u32,
    pub filled: u32,
    pub status: PositionStatus,
    pub created_at: DateTime<Utc>,
}

impl Position {
    pub fn remaining(&self) -> u32 {
        self.openings.saturating_sub(self.filled)
    }

    /// Filled share in whole percent, 0 when there are no openings.
    pub fn fill_percent(&self) -> u32 {
        if self.openings == 0 {
            return 0;
        }
        (self.filled.min(self.openings) * 100) / self.openings
    }
}

impl Searchable for Position {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.client_name.as_str()]
    }
}

impl HasStatus for Position {
    fn status_label(&self) -> &str {
        self.status.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::{filter_records, StatusFilter};

    fn position(id: &str, title: &str, client: &str, openings: u32, filled: u32) -> Position {
        Position {
            id: id.into(),
            title: title.into(),
            client_id: "c1".into(),
            client_name: client.into(),
            description: "Build things".into(),
            required_skills: vec!["React".into()],
            experience: "3-5 years".into(),
            budget: "15-20 LPA".into(),
            openings,
            filled,
            status: PositionStatus::Open,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_fill_percent() {
        assert_eq!(position("p1", "Dev", "A", 4, 1).fill_percent(), 25);
        assert_eq!(position("p1", "Dev", "A", 0, 0).fill_percent(), 0);
        assert_eq!(position("p1", "Dev", "A", 2, 5).fill_percent(), 100);
        assert_eq!(position("p1", "Dev", "A", 2, 5).remaining(), 0);
    }

    #[test]
    fn test_position_search() {
        let data = vec![
            position("p1", "Senior React Developer", "TechCorp Solutions", 3, 1),
            position("p2", "Data Analyst", "FinServe Bank", 2, 0),
        ];
        assert_eq!(filter_records(&data, "react", &StatusFilter::All)[0].id, "p1");
        assert_eq!(filter_records(&data, "bank", &StatusFilter::All)[0].id, "p2");
        // description is not searched
        assert!(filter_records(&data, "build", &StatusFilter::All).is_empty());
        assert!(filter_records(&data, "", &StatusFilter::parse("Closed")).is_empty());
    }
}
