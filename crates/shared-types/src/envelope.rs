//! # Response Envelopes
//!
//! Wrappers the catalogue service puts around every payload.
//!
//! ```text
//! {
//!   "success": true,
//!   "message": "ok",
//!   "data": {
//!     "data": [ ... ],
//!     "pagination": { "total", "page", "limit", "totalPages" }
//!   }
//! }
//! ```

use serde::{Deserialize, Serialize};

use crate::identity::{Profile, Role};

/// Pagination metadata attached to every list response.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub total: u64,
    pub page: u32,
    pub limit: u32,
    pub total_pages: u32,
}

/// One page of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListPage<T> {
    pub data: Vec<T>,
    pub pagination: PageInfo,
}

/// Envelope of every list read.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ListEnvelope<T> {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub message: String,
    pub data: ListPage<T>,
}

impl<T> ListEnvelope<T> {
    pub fn items(&self) -> &[T] {
        &self.data.data
    }

    pub fn pagination(&self) -> PageInfo {
        self.data.pagination
    }
}

/// Credentials posted to `/auth/login`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub password: String,
}

impl Credentials {
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            password: password.into(),
        }
    }
}

/// The administrator account returned on login.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminAccount {
    pub role: Role,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub full_name: String,
    #[serde(default, alias = "_id")]
    pub id: String,
}

impl AdminAccount {
    /// Display profile derived from the account. The service sends no avatar.
    pub fn profile(&self) -> Profile {
        Profile::new(self.full_name.clone(), self.email.clone(), String::new())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginData {
    pub admin: AdminAccount,
    pub access_token: String,
}

/// Response of `/auth/login`: `{data: {admin, accessToken}}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoginResponse {
    pub data: LoginData,
}
