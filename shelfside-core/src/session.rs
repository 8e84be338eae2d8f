//! Session context and the two hard-coded roles
//!
//! The core never reads session state from the environment; callers
//! resolve a role (however they store it) and pass a [`Session`] by
//! reference into every role-scoped operation.

use crate::store::Scope;

/// The acting role, parsed from the external session signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    User,
    Admin,
}

impl Role {
    /// The persisted collection this role mutates and lists by default.
    /// The shared collection stays visible to both roles as a search and
    /// recommendation source.
    pub fn scope(&self) -> Scope {
        match self {
            Role::User => Scope::Personal,
            Role::Admin => Scope::Shared,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Admin => "admin",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "user" => Ok(Role::User),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Explicit session context handed into the catalog.
#[derive(Debug, Clone, Copy)]
pub struct Session {
    pub role: Role,
}

impl Session {
    pub fn new(role: Role) -> Self {
        Self { role }
    }
}

/// The two fixed credential pairs. There is no real authentication in
/// this system; these select a role and nothing more.
const CREDENTIALS: &[(&str, &str, Role)] = &[
    ("user123", "vit1", Role::User),
    ("user789", "vit2", Role::Admin),
];

/// Check a username/password pair against the fixed table.
pub fn authenticate(username: &str, password: &str) -> Option<Role> {
    CREDENTIALS
        .iter()
        .find(|(u, p, _)| *u == username.trim() && *p == password.trim())
        .map(|(_, _, role)| *role)
}
