use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::filter::{HasStatus, Searchable};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ClientStatus {
    Active,
    Inactive,
}

impl ClientStatus {
    pub fn label(&self) -> &'static str {
        match self {
            ClientStatus::Active => "Active",
            ClientStatus::Inactive => "Inactive",
        }
    }

    pub fn all() -> Vec<ClientStatus> {
        vec![ClientStatus::Active, ClientStatus::Inactive]
    }
}

/// Компания-заказчик
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub industry: String,
    pub location: String,
    pub contact_person: String,
    pub contact_email: String,
    pub contact_phone: String,
    pub open_positions: u32,
    pub active_contracts: u32,
    pub status: ClientStatus,
    pub created_at: DateTime<Utc>,
}

impl Searchable for Client {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.industry.as_str(),
            self.location.as_str(),
        ]
    }
}

impl HasStatus for Client {
    fn status_label(&self) -> &str {
        self.status.label()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::{filter_records, StatusFilter};

    fn client(id: &str, name: &str, industry: &str, location: &str, status: ClientStatus) -> Client {
        Client {
            id: id.into(),
            name: name.into(),
            industry: industry.into(),
            location: location.into(),
            contact_person: "Contact".into(),
            contact_email: "hr@example.com".into(),
            contact_phone: "+91 90000 00000".into(),
            open_positions: 1,
            active_contracts: 1,
            status,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_client_search_fields() {
        let data = vec![
            client("c1", "TechCorp Solutions", "Information Technology", "Bangalore", ClientStatus::Active),
            client("c2", "HealthPlus", "Healthcare", "Mumbai", ClientStatus::Inactive),
        ];

        assert_eq!(filter_records(&data, "health", &StatusFilter::All).len(), 1);
        assert_eq!(filter_records(&data, "BANGALORE", &StatusFilter::All)[0].id, "c1");
        assert_eq!(filter_records(&data, "technology", &StatusFilter::All)[0].id, "c1");
        // contact fields are not searched
        assert!(filter_records(&data, "hr@example", &StatusFilter::All).is_empty());
        assert_eq!(filter_records(&data, "", &StatusFilter::parse("Inactive"))[0].id, "c2");
    }
}
