//! # Catalogue Records
//!
//! Resource records served by the catalogue REST service.
//!
//! ## Families
//!
//! - **Trips**: [`Trip`], [`TripDetails`]
//! - **Companies**: [`Company`], [`CompanyDetails`]
//! - **Countries**: [`Country`], [`CountryDetails`]
//! - **Users**: [`User`]
//!
//! Each `*Details` struct is the record without its server-assigned id and
//! doubles as the JSON payload for create/update calls.

use serde::{Deserialize, Serialize};

/// Text available in both console languages.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct LocalizedText {
    pub en: String,
    pub ar: String,
}

impl LocalizedText {
    pub fn new(en: impl Into<String>, ar: impl Into<String>) -> Self {
        Self {
            en: en.into(),
            ar: ar.into(),
        }
    }
}

// =============================================================================
// TRIPS
// =============================================================================

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripType {
    International,
    #[default]
    Local,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TripStatus {
    #[default]
    Active,
    Inactive,
}

/// Trip fields without the id.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TripDetails {
    pub price: f64,
    #[serde(default)]
    pub is_advertisement: bool,
    pub lat: f64,
    pub lng: f64,
    pub trip_type: TripType,
    pub status: TripStatus,
    #[serde(default)]
    pub images: Vec<String>,
    pub start_date: String,
    pub end_date: String,
    #[serde(default)]
    pub company_name: Option<LocalizedText>,
    #[serde(default)]
    pub company_rating: Option<f64>,
    #[serde(default)]
    pub country_name: Option<LocalizedText>,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub rating: f64,
    pub name: LocalizedText,
    pub description: LocalizedText,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trip {
    pub id: String,
    #[serde(flatten)]
    pub details: TripDetails,
}

// =============================================================================
// COMPANIES
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CompanyContact {
    #[serde(default)]
    pub whatsapp: String,
    #[serde(default)]
    pub facebook: String,
    #[serde(default)]
    pub website: String,
    #[serde(default)]
    pub instagram: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct CompanyDetails {
    pub name: LocalizedText,
    #[serde(default)]
    pub rating: f64,
    #[serde(default)]
    pub contact: CompanyContact,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Company {
    pub id: String,
    #[serde(flatten)]
    pub details: CompanyDetails,
}

// =============================================================================
// COUNTRIES
// =============================================================================

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CountryDetails {
    pub name: LocalizedText,
    #[serde(default)]
    pub trip_type: String,
    #[serde(default)]
    pub images: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Country {
    pub id: String,
    #[serde(flatten)]
    pub details: CountryDetails,
}

// =============================================================================
// USERS
// =============================================================================

/// A console end-user as listed by `/admin/users`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: String,
    pub full_name: String,
    pub email: String,
    #[serde(default)]
    pub is_blocked: bool,
    #[serde(default)]
    pub profile_image: String,
}
