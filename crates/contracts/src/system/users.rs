use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::shared::filter::{HasStatus, Searchable};
use crate::system::auth::{AccountStatus, Identity, Role};

/// Team member record as listed on the Team page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    #[serde(default)]
    pub avatar: Option<String>,
    pub status: AccountStatus,
    pub created_at: DateTime<Utc>,
}

impl User {
    pub fn to_identity(&self) -> Identity {
        Identity {
            id: self.id.clone(),
            name: self.name.clone(),
            email: self.email.clone(),
            role: self.role,
            status: self.status,
        }
    }
}

impl Searchable for User {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.email.as_str(), self.role.code()]
    }
}

impl HasStatus for User {
    fn status_label(&self) -> &str {
        self.status.label()
    }
}

/// Head count per role, in [`Role::ALL`] order.
pub fn count_by_role(users: &[User]) -> Vec<(Role, usize)> {
    Role::ALL
        .into_iter()
        .map(|role| (role, users.iter().filter(|u| u.role == role).count()))
        .collect()
}

pub fn members_with_role(users: &[User], role: Role) -> Vec<&User> {
    users.iter().filter(|u| u.role == role).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::filter::{filter_records, StatusFilter};

    fn user(id: &str, name: &str, role: Role, status: AccountStatus) -> User {
        User {
            id: id.into(),
            name: name.into(),
            email: format!("{}@recruithub.com", name.split(' ').next().unwrap_or("x").to_lowercase()),
            role,
            avatar: None,
            status,
            created_at: Utc::now(),
        }
    }

    fn team() -> Vec<User> {
        vec![
            user("1", "John Smith", Role::Admin, AccountStatus::Active),
            user("2", "Sarah Wilson", Role::Bdm, AccountStatus::Active),
            user("4", "Michael Brown", Role::Recruiter, AccountStatus::Active),
            user("5", "Lisa Davis", Role::Recruiter, AccountStatus::Inactive),
        ]
    }

    #[test]
    fn test_search_by_role_code() {
        let data = team();
        // every email contains "recruithub", so only the role code can match
        let found = filter_records(&data, "ecruiter", &StatusFilter::All);
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|u| u.role == Role::Recruiter));
        assert_eq!(filter_records(&data, "recruit", &StatusFilter::All).len(), data.len());
        let found = filter_records(&data, "bdm", &StatusFilter::All);
        assert_eq!(found[0].name, "Sarah Wilson");
        let found = filter_records(&data, "recruiter", &StatusFilter::parse("Inactive"));
        assert_eq!(found.len(), 1);
        assert_eq!(found[0].id, "5");
    }

    #[test]
    fn test_count_by_role() {
        let counts = count_by_role(&team());
        assert_eq!(
            counts,
            vec![(Role::Admin, 1), (Role::Bdm, 1), (Role::Am, 0), (Role::Recruiter, 2)]
        );
        assert_eq!(members_with_role(&team(), Role::Recruiter).len(), 2);
    }

    #[test]
    fn test_to_identity_copies_fields() {
        let u = &team()[1];
        let identity = u.to_identity();
        assert_eq!(identity.id, "2");
        assert_eq!(identity.role, Role::Bdm);
        assert_eq!(identity.email, u.email);
    }
}
