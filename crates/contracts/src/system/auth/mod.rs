use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Роль пользователя. Закрытый набор: от него зависит видимое меню.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    Admin,
    #[serde(rename = "BDM")]
    Bdm,
    #[serde(rename = "AM")]
    Am,
    Recruiter,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Admin, Role::Bdm, Role::Am, Role::Recruiter];

    pub fn code(&self) -> &'static str {
        match self {
            Role::Admin => "Admin",
            Role::Bdm => "BDM",
            Role::Am => "AM",
            Role::Recruiter => "Recruiter",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Role::Admin => "Administrator",
            Role::Bdm => "Business Development Manager",
            Role::Am => "Assistant Manager",
            Role::Recruiter => "Recruiter",
        }
    }

    /// Exact, case-sensitive parse of a role code.
    pub fn from_code(code: &str) -> Option<Self> {
        Role::ALL.into_iter().find(|role| role.code() == code)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AccountStatus {
    Active,
    Inactive,
}

impl AccountStatus {
    pub fn label(&self) -> &'static str {
        match self {
            AccountStatus::Active => "Active",
            AccountStatus::Inactive => "Inactive",
        }
    }

    pub fn all() -> Vec<AccountStatus> {
        vec![AccountStatus::Active, AccountStatus::Inactive]
    }
}

/// The signed-in person as the session sees them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    pub id: String,
    pub name: String,
    pub email: String,
    pub role: Role,
    pub status: AccountStatus,
}

impl Identity {
    /// "Priya Sharma" -> "PS"
    pub fn initials(&self) -> String {
        self.name
            .split_whitespace()
            .filter_map(|part| part.chars().next())
            .flat_map(|c| c.to_uppercase())
            .collect()
    }
}

/// Demo login form. The password is accepted and ignored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
    pub role: Role,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoginError {
    #[error("email is required")]
    MissingEmail,
    #[error("no team member with email '{0}'")]
    UnknownAccount(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn identity(name: &str) -> Identity {
        Identity {
            id: "1".into(),
            name: name.into(),
            email: "x@example.com".into(),
            role: Role::Admin,
            status: AccountStatus::Active,
        }
    }

    #[test]
    fn test_role_codes_roundtrip() {
        for role in Role::ALL {
            assert_eq!(Role::from_code(role.code()), Some(role));
        }
        assert_eq!(Role::from_code("admin"), None);
        assert_eq!(Role::from_code("Manager"), None);
    }

    #[test]
    fn test_role_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Role::Bdm).unwrap(), "\"BDM\"");
        let role: Role = serde_json::from_str("\"AM\"").unwrap();
        assert_eq!(role, Role::Am);
    }

    #[test]
    fn test_initials() {
        assert_eq!(identity("Priya Sharma").initials(), "PS");
        assert_eq!(identity("alex").initials(), "A");
        assert_eq!(identity("").initials(), "");
    }
}
