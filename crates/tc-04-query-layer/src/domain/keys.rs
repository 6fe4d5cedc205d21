//! Canonical cache keys. Reads and writes of one family share a key.

pub const ADMIN: &str = "admin";
pub const LOGOUT: &str = "logout";
pub const COMPANY: &str = "company";
pub const COUNTRY: &str = "country";
pub const TRIP: &str = "trip";
pub const USER: &str = "user";
pub const DASHBOARD: &str = "dashboard";
