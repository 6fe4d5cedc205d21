//! Authentication: login (key `admin`) and logout (key `logout`).

use shared_types::{Credentials, LoginResponse};
use tc_01_session::SessionContext;
use tc_03_gateway_client::{GatewayError, Method, Payload, QueryDescriptor};
use tracing::{info, warn};

use crate::domain::keys::{ADMIN, LOGOUT};
use crate::service::QueryClient;

pub const LOGIN_PATH: &str = "/auth/login";
pub const LOGOUT_PATH: &str = "/auth/logout";

/// `POST /auth/login` with the credentials as JSON.
pub fn login_descriptor(credentials: &Credentials) -> Result<QueryDescriptor, GatewayError> {
    let payload =
        Payload::json(credentials).map_err(|e| GatewayError::Decode(format!("credentials: {e}")))?;
    Ok(QueryDescriptor::write(Method::Post, LOGIN_PATH, ADMIN, Some(payload)))
}

/// `POST /auth/logout`
pub fn logout_descriptor() -> QueryDescriptor {
    QueryDescriptor::write(Method::Post, LOGOUT_PATH, LOGOUT, None)
}

/// Sign in and install the returned identity in the session.
///
/// The session is only touched when the response decodes. A non-admin
/// account is still installed; the route guard keeps it out.
pub async fn login(
    client: &QueryClient,
    session: &SessionContext,
    credentials: &Credentials,
) -> Result<LoginResponse, GatewayError> {
    let response: LoginResponse = client
        .mutation(login_descriptor(credentials)?)
        .execute()
        .await?;

    let admin = &response.data.admin;
    session.set_session(
        response.data.access_token.clone(),
        admin.role.clone(),
        admin.profile(),
    );
    info!(email = %admin.email, role = %admin.role, "Signed in");
    Ok(response)
}

/// Tell the server, then clear the local session regardless of the
/// server's answer.
pub async fn logout(client: &QueryClient, session: &SessionContext) -> Result<(), GatewayError> {
    let result = client
        .mutation::<serde_json::Value>(logout_descriptor())
        .execute()
        .await
        .map(|_| ());
    if let Err(err) = &result {
        warn!(error = %err, "Server logout failed, clearing local session anyway");
    }
    session.logout();
    result
}
