//! Role-access policy and route resolution.
//!
//! Menu order is the declaration order of [`Destination::ALL`]. The
//! permitted-role table is an exhaustive `match`, so adding a destination
//! without deciding who may see it does not compile.

use serde::{Deserialize, Serialize};

use crate::system::auth::Role;
use crate::system::session::SessionContext;

pub const LOGIN_PATH: &str = "/";
pub const HOME_PATH: &str = "/dashboard";

const EVERYONE: &[Role] = &[Role::Admin, Role::Bdm, Role::Am, Role::Recruiter];
const MANAGERS: &[Role] = &[Role::Admin, Role::Bdm, Role::Am];
const LEADERSHIP: &[Role] = &[Role::Admin, Role::Bdm];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Destination {
    Dashboard,
    Candidates,
    Clients,
    Positions,
    Team,
    Reports,
}

impl Destination {
    pub const ALL: [Destination; 6] = [
        Destination::Dashboard,
        Destination::Candidates,
        Destination::Clients,
        Destination::Positions,
        Destination::Team,
        Destination::Reports,
    ];

    pub fn path(&self) -> &'static str {
        match self {
            Destination::Dashboard => "/dashboard",
            Destination::Candidates => "/candidates",
            Destination::Clients => "/clients",
            Destination::Positions => "/positions",
            Destination::Team => "/team",
            Destination::Reports => "/reports",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Destination::Dashboard => "Dashboard",
            Destination::Candidates => "Candidates",
            Destination::Clients => "Clients",
            Destination::Positions => "Positions",
            Destination::Team => "Team",
            Destination::Reports => "Reports",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            Destination::Dashboard => "layout-dashboard",
            Destination::Candidates => "users",
            Destination::Clients => "building",
            Destination::Positions => "briefcase",
            Destination::Team => "user-cog",
            Destination::Reports => "bar-chart",
        }
    }

    pub fn permitted_roles(&self) -> &'static [Role] {
        match self {
            Destination::Dashboard | Destination::Candidates | Destination::Clients => EVERYONE,
            Destination::Positions | Destination::Team => MANAGERS,
            Destination::Reports => LEADERSHIP,
        }
    }

    pub fn permits(&self, role: Role) -> bool {
        self.permitted_roles().contains(&role)
    }

    pub fn descriptor(&self) -> NavigationDestination {
        NavigationDestination {
            destination: *self,
            path: self.path(),
            label: self.label(),
            icon: self.icon(),
            roles: self.permitted_roles(),
        }
    }
}

/// Menu entry as the sidebar renders it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavigationDestination {
    pub destination: Destination,
    pub path: &'static str,
    pub label: &'static str,
    pub icon: &'static str,
    pub roles: &'static [Role],
}

/// Menu entries the role may see, in menu order.
pub fn visible_destinations(role: Role) -> Vec<NavigationDestination> {
    Destination::ALL
        .iter()
        .filter(|destination| destination.permits(role))
        .map(Destination::descriptor)
        .collect()
}

/// Same as [`visible_destinations`] for a raw role code; unknown codes see
/// nothing.
pub fn visible_destinations_for_code(code: &str) -> Vec<NavigationDestination> {
    Role::from_code(code)
        .map(visible_destinations)
        .unwrap_or_default()
}

// ============================================================================
// Routes
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum AppRoute {
    Login,
    Dashboard,
    Candidates,
    CandidateDetail(String),
    Clients,
    Positions,
    Team,
    Reports,
}

impl AppRoute {
    /// Parses a location path. Trailing slashes are ignored; query strings and
    /// fragments are not expected here.
    pub fn parse(path: &str) -> Option<AppRoute> {
        let trimmed = path.trim_end_matches('/');
        let segments: Vec<&str> = trimmed.split('/').skip(1).collect();

        match segments.as_slice() {
            [] => Some(AppRoute::Login),
            ["dashboard"] => Some(AppRoute::Dashboard),
            ["candidates"] => Some(AppRoute::Candidates),
            ["candidates", id] if !id.is_empty() => Some(AppRoute::CandidateDetail(id.to_string())),
            ["clients"] => Some(AppRoute::Clients),
            ["positions"] => Some(AppRoute::Positions),
            ["team"] => Some(AppRoute::Team),
            ["reports"] => Some(AppRoute::Reports),
            _ => None,
        }
    }

    pub fn path(&self) -> String {
        match self {
            AppRoute::Login => LOGIN_PATH.to_string(),
            AppRoute::CandidateDetail(id) => format!("/candidates/{id}"),
            other => other
                .destination()
                .map(|d| d.path().to_string())
                .unwrap_or_else(|| LOGIN_PATH.to_string()),
        }
    }

    /// Menu destination guarding this route. `None` for the public login page.
    pub fn destination(&self) -> Option<Destination> {
        match self {
            AppRoute::Login => None,
            AppRoute::Dashboard => Some(Destination::Dashboard),
            AppRoute::Candidates | AppRoute::CandidateDetail(_) => Some(Destination::Candidates),
            AppRoute::Clients => Some(Destination::Clients),
            AppRoute::Positions => Some(Destination::Positions),
            AppRoute::Team => Some(Destination::Team),
            AppRoute::Reports => Some(Destination::Reports),
        }
    }
}

/// Outcome of navigating to a path with a given session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteDecision {
    Render(AppRoute),
    Redirect(&'static str),
    /// Signed in, but the role may not see this destination.
    Forbidden(Destination),
}

pub fn resolve_route(path: &str, session: &SessionContext) -> RouteDecision {
    match AppRoute::parse(path) {
        None => RouteDecision::Redirect(LOGIN_PATH),
        Some(route) => authorize(route, session),
    }
}

/// Guard for an already-parsed route.
pub fn authorize(route: AppRoute, session: &SessionContext) -> RouteDecision {
    let role = session.current_role();
    match (route.destination(), role) {
        (None, None) => RouteDecision::Render(route),
        (None, Some(_)) => RouteDecision::Redirect(HOME_PATH),
        (Some(_), None) => RouteDecision::Redirect(LOGIN_PATH),
        (Some(destination), Some(role)) if destination.permits(role) => RouteDecision::Render(route),
        (Some(destination), Some(_)) => RouteDecision::Forbidden(destination),
    }
}
