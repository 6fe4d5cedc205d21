//! The session state value.

use shared_types::{PersistedSession, Profile, Role};

/// Identity held by the process.
///
/// A `token` of `None` means unauthenticated. The `role` and
/// `profile` may still carry stale values in that case and must be ignored
/// by access decisions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub token: Option<String>,
    pub role: Option<Role>,
    pub profile: Profile,
}

impl SessionState {
    pub fn new(token: impl Into<String>, role: Role, profile: Profile) -> Self {
        Self {
            token: normalize_token(Some(token.into())),
            role: Some(role),
            profile,
        }
    }

    /// True only when a non-empty token is present.
    pub fn is_authenticated(&self) -> bool {
        self.token.is_some()
    }

    /// Role of an authenticated session. `None` when unauthenticated.
    pub fn effective_role(&self) -> Option<&Role> {
        if self.is_authenticated() {
            self.role.as_ref()
        } else {
            None
        }
    }

    /// The subset mirrored to storage.
    pub fn to_persisted(&self) -> PersistedSession {
        PersistedSession {
            token: self.token.clone(),
            role: self.role.clone(),
            display_name: self.profile.display_name.clone(),
            email: self.profile.email.clone(),
            avatar_url: self.profile.avatar_url.clone(),
        }
    }

    /// Rebuild state from a stored record. Empty tokens become `None`.
    pub fn from_persisted(record: PersistedSession) -> Self {
        let profile = record.profile();
        Self {
            token: normalize_token(record.token),
            role: record.role,
            profile,
        }
    }
}

fn normalize_token(token: Option<String>) -> Option<String> {
    token.filter(|t| !t.trim().is_empty())
}
