//! The pure guard decision.

use serde::{Deserialize, Serialize};
use shared_types::Role;

use super::config::GuardConfig;

/// Which rule of the decision table fired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GuardRule {
    /// 1: unauthenticated visitor inside the auth area.
    AuthAreaOpen,
    /// 2: unauthenticated visitor outside the auth area.
    LoginRequired,
    /// 3: signed in, but not an admin.
    AdminOnly,
    /// 4: signed-in admin heading for the login screen.
    AlreadySignedIn,
    /// 5: signed-in admin anywhere else.
    Admitted,
}

impl GuardRule {
    pub fn number(self) -> u8 {
        match self {
            GuardRule::AuthAreaOpen => 1,
            GuardRule::LoginRequired => 2,
            GuardRule::AdminOnly => 3,
            GuardRule::AlreadySignedIn => 4,
            GuardRule::Admitted => 5,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum GuardDecision {
    Allow { rule: GuardRule },
    Redirect { to: String, rule: GuardRule },
}

impl GuardDecision {
    pub fn is_allowed(&self) -> bool {
        matches!(self, GuardDecision::Allow { .. })
    }

    pub fn redirect_target(&self) -> Option<&str> {
        match self {
            GuardDecision::Redirect { to, .. } => Some(to),
            GuardDecision::Allow { .. } => None,
        }
    }

    pub fn rule(&self) -> GuardRule {
        match self {
            GuardDecision::Allow { rule } | GuardDecision::Redirect { rule, .. } => *rule,
        }
    }
}

/// Evaluate the decision table.
///
/// `role` is only consulted when `authenticated` is true; a stale role on an
/// unauthenticated session has no effect. Any role other than
/// [`Role::Admin`] is treated as non-admin.
pub fn decide(
    authenticated: bool,
    role: Option<&Role>,
    in_auth_area: bool,
    config: &GuardConfig,
) -> GuardDecision {
    if !authenticated {
        return if in_auth_area {
            GuardDecision::Allow {
                rule: GuardRule::AuthAreaOpen,
            }
        } else {
            GuardDecision::Redirect {
                to: config.auth_entry_path.clone(),
                rule: GuardRule::LoginRequired,
            }
        };
    }

    if !role.is_some_and(Role::is_admin) {
        return GuardDecision::Redirect {
            to: config.auth_entry_path.clone(),
            rule: GuardRule::AdminOnly,
        };
    }

    if in_auth_area {
        return GuardDecision::Redirect {
            to: config.root_path.clone(),
            rule: GuardRule::AlreadySignedIn,
        };
    }

    GuardDecision::Allow {
        rule: GuardRule::Admitted,
    }
}
