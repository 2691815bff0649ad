//! Session context: who is signed in and under which role.
//!
//! There is no credential check anywhere. `login` trusts its argument and the
//! role switch exists for demos.

use serde::{Deserialize, Serialize};

use crate::system::auth::{Identity, LoginError, LoginRequest, Role};
use crate::system::users::User;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionContext {
    current: Option<Identity>,
}

impl SessionContext {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn login(&mut self, identity: Identity) {
        self.current = Some(identity);
    }

    pub fn logout(&mut self) {
        self.current = None;
    }

    /// Replaces the role of the current identity. No-op when signed out.
    pub fn switch_role(&mut self, role: Role) {
        if let Some(identity) = self.current.as_mut() {
            identity.role = role;
        }
    }

    pub fn current_identity(&self) -> Option<&Identity> {
        self.current.as_ref()
    }

    pub fn current_role(&self) -> Option<Role> {
        self.current.as_ref().map(|identity| identity.role)
    }

    pub fn is_authenticated(&self) -> bool {
        self.current.is_some()
    }
}

/// Resolves a demo login against the team list. Only presence of the email is
/// checked; the requested role overrides the one stored on the record.
pub fn resolve_login(users: &[User], request: &LoginRequest) -> Result<Identity, LoginError> {
    let email = request.email.trim();
    if email.is_empty() {
        return Err(LoginError::MissingEmail);
    }

    let user = users
        .iter()
        .find(|u| u.email.eq_ignore_ascii_case(email))
        .ok_or_else(|| LoginError::UnknownAccount(email.to_string()))?;

    let mut identity = user.to_identity();
    identity.role = request.role;
    Ok(identity)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::system::auth::AccountStatus;
    use chrono::Utc;

    fn identity() -> Identity {
        Identity {
            id: "3".into(),
            name: "Emily Johnson".into(),
            email: "emily@recruithub.com".into(),
            role: Role::Am,
            status: AccountStatus::Active,
        }
    }

    #[test]
    fn test_starts_signed_out() {
        let session = SessionContext::new();
        assert!(session.current_identity().is_none());
        assert!(!session.is_authenticated());
        assert_eq!(session.current_role(), None);
    }

    #[test]
    fn test_login_then_logout() {
        let mut session = SessionContext::new();
        session.login(identity());
        assert_eq!(session.current_identity(), Some(&identity()));

        session.logout();
        assert!(session.current_identity().is_none());
    }

    #[test]
    fn test_login_replaces_previous_identity() {
        let mut session = SessionContext::new();
        session.login(identity());
        let mut other = identity();
        other.id = "9".into();
        session.login(other.clone());
        assert_eq!(session.current_identity(), Some(&other));
    }

    #[test]
    fn test_switch_role_keeps_everything_else() {
        let mut session = SessionContext::new();
        session.login(identity());
        session.switch_role(Role::Recruiter);

        let current = session.current_identity().unwrap();
        assert_eq!(current.role, Role::Recruiter);
        assert_eq!(current.id, "3");
        assert_eq!(current.name, "Emily Johnson");
        assert_eq!(current.email, "emily@recruithub.com");
        assert_eq!(current.status, AccountStatus::Active);
    }

    #[test]
    fn test_switch_role_without_identity_is_noop() {
        let mut session = SessionContext::new();
        session.switch_role(Role::Admin);
        assert!(session.current_identity().is_none());
        assert_eq!(session, SessionContext::new());
    }

    #[test]
    fn test_resolve_login() {
        let users = vec![User {
            id: "3".into(),
            name: "Emily Johnson".into(),
            email: "emily@recruithub.com".into(),
            role: Role::Am,
            avatar: None,
            status: AccountStatus::Active,
            created_at: Utc::now(),
        }];

        let request = LoginRequest {
            email: "  Emily@RecruitHub.com ".into(),
            password: String::new(),
            role: Role::Bdm,
        };
        let identity = resolve_login(&users, &request).unwrap();
        assert_eq!(identity.id, "3");
        assert_eq!(identity.role, Role::Bdm);

        let request = LoginRequest {
            email: "nobody@recruithub.com".into(),
            password: "secret".into(),
            role: Role::Admin,
        };
        assert_eq!(
            resolve_login(&users, &request),
            Err(LoginError::UnknownAccount("nobody@recruithub.com".into()))
        );

        let request = LoginRequest {
            email: "   ".into(),
            password: String::new(),
            role: Role::Admin,
        };
        assert_eq!(resolve_login(&users, &request), Err(LoginError::MissingEmail));
    }
}
