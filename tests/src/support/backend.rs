//! # Mock Catalogue Backend
//!
//! A small axum server that behaves like the catalogue REST service for the
//! routes the console uses. It records every request it sees.
//!
//! Accounts: any email with password `secret`. Emails starting with
//! `editor` get the `editor` role; everyone else is `admin`. Data routes
//! require the admin token.

use axum::extract::{Multipart, Path, Query, Request, State};
use axum::http::{HeaderMap, StatusCode};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post, put};
use axum::{Json, Router};
use parking_lot::Mutex;
use serde::Deserialize;
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;
use tracing::debug;

pub const PASSWORD: &str = "secret";
pub const ADMIN_TOKEN: &str = "jwt-admin";
pub const EDITOR_TOKEN: &str = "jwt-editor";

/// One request as the backend saw it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeenRequest {
    pub method: String,
    pub path_and_query: String,
    pub authorization: Option<String>,
    pub role: Option<String>,
    pub accept: Option<String>,
    pub content_type: Option<String>,
}

/// A multipart upload as received.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Upload {
    pub text_fields: Vec<(String, String)>,
    pub files: Vec<(String, String, usize)>,
}

#[derive(Default)]
pub struct BackendState {
    seen: Mutex<Vec<SeenRequest>>,
    trips: Mutex<Vec<Value>>,
    users: Mutex<Vec<Value>>,
    uploads: Mutex<Vec<Upload>>,
    next_id: Mutex<u64>,
}

impl BackendState {
    fn seeded() -> Self {
        let state = Self::default();
        {
            let mut trips = state.trips.lock();
            for n in 1..=5 {
                trips.push(trip_record(&format!("t{n}"), &format!("Trip {n}")));
            }
            *state.next_id.lock() = 6;
        }
        state.users.lock().extend([
            json!({"id": "u1", "fullName": "Sam", "email": "sam@example.com", "isBlocked": false, "profileImage": ""}),
            json!({"id": "u2", "fullName": "Noor", "email": "noor@example.com", "isBlocked": true, "profileImage": ""}),
        ]);
        state
    }

    pub fn seen(&self) -> Vec<SeenRequest> {
        self.seen.lock().clone()
    }

    pub fn seen_matching(&self, method: &str, path_prefix: &str) -> Vec<SeenRequest> {
        self.seen
            .lock()
            .iter()
            .filter(|r| r.method == method && r.path_and_query.starts_with(path_prefix))
            .cloned()
            .collect()
    }

    pub fn trip_count(&self) -> usize {
        self.trips.lock().len()
    }

    pub fn uploads(&self) -> Vec<Upload> {
        self.uploads.lock().clone()
    }

    pub fn user_blocked(&self, id: &str) -> Option<bool> {
        self.users
            .lock()
            .iter()
            .find(|u| u["id"] == id)
            .and_then(|u| u["isBlocked"].as_bool())
    }
}

fn trip_record(id: &str, name: &str) -> Value {
    json!({
        "id": id,
        "price": 100.0,
        "isAdvertisement": false,
        "lat": 0.0,
        "lng": 0.0,
        "tripType": "local",
        "status": "active",
        "images": [],
        "startDate": "2025-01-01",
        "endDate": "2025-01-05",
        "location": "Muscat",
        "rating": 4.0,
        "name": {"en": name, "ar": name},
        "description": {"en": "", "ar": ""}
    })
}

/// Running backend. Aborted on drop.
pub struct MockBackend {
    pub addr: SocketAddr,
    pub state: Arc<BackendState>,
    task: JoinHandle<()>,
}

impl MockBackend {
    pub async fn spawn() -> Self {
        let state = Arc::new(BackendState::seeded());
        let app = router(state.clone());
        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("bind test backend");
        let addr = listener.local_addr().expect("local addr");
        let task = tokio::spawn(async move {
            let _ = axum::serve(listener, app).await;
        });
        debug!(%addr, "Mock backend listening");
        Self { addr, state, task }
    }

    /// Base URL the gateway should be pointed at.
    pub fn base_url(&self) -> String {
        format!("http://{}/api", self.addr)
    }
}

impl Drop for MockBackend {
    fn drop(&mut self) {
        self.task.abort();
    }
}

type Shared = Arc<BackendState>;

fn router(state: Shared) -> Router {
    let api = Router::new()
        .route("/auth/login", post(login))
        .route("/auth/logout", post(logout))
        .route("/trip", get(list_trips).post(create_trip))
        .route("/trip/:id", axum::routing::delete(delete_trip))
        .route("/countries", post(upload_country))
        .route("/admin/users", get(list_users))
        .route("/admin/users/block/:id", put(toggle_block))
        .route("/admin/dashboard", get(dashboard))
        .route("/broken", get(broken));

    Router::new()
        .nest("/api", api)
        .layer(middleware::from_fn_with_state(state.clone(), record))
        .with_state(state)
}

async fn record(State(state): State<Shared>, request: Request, next: Next) -> Response {
    let seen = {
        let header = |name: &str| {
            request
                .headers()
                .get(name)
                .and_then(|v| v.to_str().ok())
                .map(str::to_string)
        };
        let seen = SeenRequest {
            method: request.method().to_string(),
            path_and_query: request
                .uri()
                .path_and_query()
                .map(|p| p.to_string())
                .unwrap_or_default(),
            authorization: header("authorization"),
            role: header("role"),
            accept: header("accept"),
            content_type: header("content-type"),
        };
        seen
    };
    state.seen.lock().push(seen);
    next.run(request).await
}

fn error(status: StatusCode, message: &str) -> Response {
    (
        status,
        Json(json!({"message": message, "statusCode": status.as_u16()})),
    )
        .into_response()
}

fn require_admin(headers: &HeaderMap) -> Result<(), Response> {
    let bearer = headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .unwrap_or_default();
    if bearer == format!("Bearer {ADMIN_TOKEN}") {
        Ok(())
    } else {
        Err(error(StatusCode::UNAUTHORIZED, "Unauthorized"))
    }
}

#[derive(Deserialize)]
struct LoginBody {
    email: String,
    password: String,
}

async fn login(Json(body): Json<LoginBody>) -> Response {
    if body.password != PASSWORD {
        return error(StatusCode::UNAUTHORIZED, "Invalid credentials");
    }
    let (role, token) = if body.email.starts_with("editor") {
        ("editor", EDITOR_TOKEN)
    } else {
        ("admin", ADMIN_TOKEN)
    };
    Json(json!({
        "data": {
            "admin": {"role": role, "email": body.email, "fullName": "Ops Lead", "_id": "a1"},
            "accessToken": token
        }
    }))
    .into_response()
}

async fn logout() -> Json<Value> {
    Json(json!({"success": true, "message": "Logged out"}))
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<u32>,
    limit: Option<u32>,
}

fn page_of(items: &[Value], query: &PageQuery) -> Value {
    let page = query.page.unwrap_or(1).max(1);
    let limit = query.limit.unwrap_or(10).max(1);
    let start = ((page - 1) * limit) as usize;
    let data: Vec<Value> = items
        .iter()
        .skip(start)
        .take(limit as usize)
        .cloned()
        .collect();
    let total = items.len() as u32;
    json!({
        "success": true,
        "message": "ok",
        "data": {
            "data": data,
            "pagination": {
                "total": total,
                "page": page,
                "limit": limit,
                "totalPages": total.div_ceil(limit)
            }
        }
    })
}

async fn list_trips(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Response {
    if let Err(denied) = require_admin(&headers) {
        return denied;
    }
    Json(page_of(&state.trips.lock(), &query)).into_response()
}

async fn create_trip(
    State(state): State<Shared>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Response {
    if let Err(denied) = require_admin(&headers) {
        return denied;
    }
    let Some(name) = body["name"]["en"].as_str() else {
        return error(StatusCode::BAD_REQUEST, "name.en is required");
    };
    let id = {
        let mut next = state.next_id.lock();
        let id = format!("t{}", *next);
        *next += 1;
        id
    };
    let record = trip_record(&id, name);
    state.trips.lock().push(record.clone());
    (
        StatusCode::CREATED,
        Json(json!({"success": true, "data": record})),
    )
        .into_response()
}

async fn delete_trip(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(denied) = require_admin(&headers) {
        return denied;
    }
    let mut trips = state.trips.lock();
    let before = trips.len();
    trips.retain(|t| t["id"] != id.as_str());
    if trips.len() == before {
        return error(StatusCode::NOT_FOUND, "Trip not found");
    }
    Json(json!({"success": true})).into_response()
}

async fn upload_country(
    State(state): State<Shared>,
    headers: HeaderMap,
    mut multipart: Multipart,
) -> Response {
    if let Err(denied) = require_admin(&headers) {
        return denied;
    }
    let mut upload = Upload::default();
    loop {
        match multipart.next_field().await {
            Ok(Some(field)) => {
                let name = field.name().unwrap_or_default().to_string();
                match field.file_name().map(str::to_string) {
                    Some(file_name) => {
                        let size = field.bytes().await.map(|b| b.len()).unwrap_or(0);
                        upload.files.push((name, file_name, size));
                    }
                    None => {
                        let text = field.text().await.unwrap_or_default();
                        upload.text_fields.push((name, text));
                    }
                }
            }
            Ok(None) => break,
            Err(_) => return error(StatusCode::BAD_REQUEST, "Malformed form"),
        }
    }
    state.uploads.lock().push(upload);
    (StatusCode::CREATED, Json(json!({"success": true}))).into_response()
}

async fn list_users(
    State(state): State<Shared>,
    headers: HeaderMap,
    Query(query): Query<PageQuery>,
) -> Response {
    if let Err(denied) = require_admin(&headers) {
        return denied;
    }
    Json(page_of(&state.users.lock(), &query)).into_response()
}

async fn toggle_block(
    State(state): State<Shared>,
    headers: HeaderMap,
    Path(id): Path<String>,
) -> Response {
    if let Err(denied) = require_admin(&headers) {
        return denied;
    }
    let mut users = state.users.lock();
    match users.iter_mut().find(|u| u["id"] == id.as_str()) {
        Some(user) => {
            let blocked = user["isBlocked"].as_bool().unwrap_or(false);
            user["isBlocked"] = json!(!blocked);
            Json(json!({"success": true, "isBlocked": !blocked})).into_response()
        }
        None => error(StatusCode::NOT_FOUND, "User not found"),
    }
}

async fn dashboard(State(state): State<Shared>, headers: HeaderMap) -> Response {
    if let Err(denied) = require_admin(&headers) {
        return denied;
    }
    Json(json!({
        "trips": state.trips.lock().len(),
        "users": state.users.lock().len()
    }))
    .into_response()
}

async fn broken() -> Response {
    (StatusCode::BAD_GATEWAY, "<html>upstream exploded</html>").into_response()
}
