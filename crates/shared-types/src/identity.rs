//! # Identity Types
//!
//! The authorization role, the display profile and the persisted session
//! record.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Wire value of the administrator role.
pub const ADMIN_ROLE: &str = "admin";

/// Header value sent when no role is known.
pub const UNDEFINED_ROLE: &str = "undefined";

/// Authorization level of the signed-in operator.
///
/// Only [`Role::Admin`] grants access to the console. Any other value the
/// backend returns is preserved verbatim in [`Role::Other`] so it can be
/// echoed back in the `role` header.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum Role {
    /// Full console access.
    Admin,
    /// Any non-admin role (e.g. `"editor"`).
    Other(String),
}

impl Role {
    /// Parse a wire role. Only the exact value `admin` is the admin role;
    /// every other spelling is kept as-is.
    pub fn parse(value: &str) -> Self {
        if value == ADMIN_ROLE {
            Role::Admin
        } else {
            Role::Other(value.to_string())
        }
    }

    /// Wire representation.
    pub fn as_str(&self) -> &str {
        match self {
            Role::Admin => ADMIN_ROLE,
            Role::Other(value) => value,
        }
    }

    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }
}

impl From<String> for Role {
    fn from(value: String) -> Self {
        Role::parse(&value)
    }
}

impl From<&str> for Role {
    fn from(value: &str) -> Self {
        Role::parse(value)
    }
}

impl From<Role> for String {
    fn from(role: Role) -> Self {
        match role {
            Role::Admin => ADMIN_ROLE.to_string(),
            Role::Other(value) => value,
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Informational display profile. Plays no part in access control.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    pub display_name: String,
    pub email: String,
    pub avatar_url: String,
}

impl Profile {
    pub fn new(
        display_name: impl Into<String>,
        email: impl Into<String>,
        avatar_url: impl Into<String>,
    ) -> Self {
        Self {
            display_name: display_name.into(),
            email: email.into(),
            avatar_url: avatar_url.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.display_name.is_empty() && self.email.is_empty() && self.avatar_url.is_empty()
    }
}

/// The subset of session state mirrored to the persistence substrate.
///
/// Serialized as `{token, role, displayName, email, avatarUrl}`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PersistedSession {
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub role: Option<Role>,
    #[serde(default)]
    pub display_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub avatar_url: String,
}

impl PersistedSession {
    /// Split the flat record back into its profile part.
    pub fn profile(&self) -> Profile {
        Profile {
            display_name: self.display_name.clone(),
            email: self.email.clone(),
            avatar_url: self.avatar_url.clone(),
        }
    }
}
