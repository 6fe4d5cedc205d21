//! # Route Guard Service
//!
//! Binds the pure decision to the live session.

use std::sync::Arc;
use tc_01_session::SessionContext;
use tracing::debug;

use crate::domain::config::GuardConfig;
use crate::domain::decision::{decide, GuardDecision};
use crate::domain::route::RouteTarget;

pub struct RouteGuard {
    session: Arc<SessionContext>,
    config: GuardConfig,
}

impl RouteGuard {
    pub fn new(session: Arc<SessionContext>, config: GuardConfig) -> Self {
        Self { session, config }
    }

    pub fn config(&self) -> &GuardConfig {
        &self.config
    }

    /// Evaluate a navigation attempt against one session snapshot.
    pub fn check(&self, target: &RouteTarget) -> GuardDecision {
        let snapshot = self.session.snapshot();
        let in_auth_area = target.in_auth_area(&self.config.auth_area_prefix);

        let decision = match decide(
            snapshot.is_authenticated(),
            snapshot.effective_role(),
            in_auth_area,
            &self.config,
        ) {
            GuardDecision::Redirect { to, rule } if to == target.path => {
                GuardDecision::Allow { rule }
            }
            other => other,
        };

        debug!(
            route = %target.name,
            path = %target.path,
            authenticated = snapshot.is_authenticated(),
            in_auth_area,
            rule = decision.rule().number(),
            redirect = ?decision.redirect_target(),
            "Route guard decision"
        );
        decision
    }
}

impl std::fmt::Debug for RouteGuard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RouteGuard")
            .field("config", &self.config)
            .finish()
    }
}
