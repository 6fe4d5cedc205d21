//! Command-line surface.

use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Trip console operator CLI
#[derive(Parser, Debug)]
#[command(name = "tc-admin", version)]
#[command(about = "Manage trips, companies, countries and users from the terminal")]
pub struct Cli {
    /// API base URL (defaults to the development backend)
    #[arg(long, env = "TC_API_BASE_URL", global = true)]
    pub base_url: Option<String>,

    /// Session file (defaults to the platform data directory)
    #[arg(long, env = "TC_SESSION_FILE", global = true)]
    pub session_file: Option<PathBuf>,

    /// Log at debug level
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Emit logs as JSON lines
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Sign in and store the session
    Login {
        #[arg(long)]
        email: String,
        #[arg(long, env = "TC_ADMIN_PASSWORD", hide_env_values = true)]
        password: String,
    },
    /// Sign out and clear the stored session
    Logout,
    /// Show the stored identity
    Whoami,
    /// Ask the route guard about a navigation
    Route {
        /// Symbolic route name, e.g. `auth` or `trips`
        name: String,
        /// Route path, e.g. `/trips`
        path: String,
    },
    /// Trip catalogue
    #[command(subcommand)]
    Trips(CatalogueCommand),
    /// Companies
    #[command(subcommand)]
    Companies(CatalogueCommand),
    /// Countries
    #[command(subcommand)]
    Countries(CatalogueCommand),
    /// Console users
    #[command(subcommand)]
    Users(UserCommand),
    /// Dashboard overview
    Dashboard,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum CatalogueCommand {
    /// List one page
    List(PageArgs),
    /// Delete a record
    Delete { id: String },
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum UserCommand {
    /// List one page
    List(PageArgs),
    /// Toggle the blocked flag of a user
    Block { id: String },
}

#[derive(Args, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageArgs {
    #[arg(long, default_value_t = 1)]
    pub page: u32,
    /// Page size (server default when omitted)
    #[arg(long)]
    pub limit: Option<u32>,
}
