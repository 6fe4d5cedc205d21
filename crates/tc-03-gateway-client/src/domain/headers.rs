//! Identity headers attached by the pre-request hook.

use shared_types::UNDEFINED_ROLE;
use tc_01_session::SessionState;

pub const ACCEPT: &str = "Accept";
pub const AUTHORIZATION: &str = "Authorization";
pub const ROLE: &str = "role";
pub const CONTENT_TYPE: &str = "Content-Type";

pub const APPLICATION_JSON: &str = "application/json";

/// Headers for one dispatch, built from a single session snapshot.
///
/// Token and role are sent as stored, even when the session is
/// unauthenticated; the server decides what a blank bearer means.
pub fn identity_headers(state: &SessionState) -> Vec<(String, String)> {
    let token = state.token.as_deref().unwrap_or_default();
    let role = state
        .role
        .as_ref()
        .map(|r| r.as_str())
        .unwrap_or(UNDEFINED_ROLE);

    vec![
        (ACCEPT.to_string(), APPLICATION_JSON.to_string()),
        (AUTHORIZATION.to_string(), format!("Bearer {token}")),
        (ROLE.to_string(), role.to_string()),
    ]
}
