//! Where the session file lives.

use anyhow::{Context, Result};
use directories::ProjectDirs;
use std::path::PathBuf;

const APP_QUALIFIER: &str = "com";
const APP_ORG: &str = "trip-console";
const APP_NAME: &str = "tc-admin";
const SESSION_FILENAME: &str = "session.json";

/// Default session file under the platform data directory.
pub fn default_session_path() -> Option<PathBuf> {
    ProjectDirs::from(APP_QUALIFIER, APP_ORG, APP_NAME)
        .map(|dirs| dirs.data_dir().join(SESSION_FILENAME))
}

/// The explicit path if given, otherwise the platform default.
pub fn resolve_session_path(explicit: Option<PathBuf>) -> Result<PathBuf> {
    match explicit {
        Some(path) => Ok(path),
        None => default_session_path()
            .context("could not determine a data directory; pass --session-file"),
    }
}
