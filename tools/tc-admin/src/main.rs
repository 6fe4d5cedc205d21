//! tc-admin: operator CLI for the trip console backend.

use clap::Parser;

use tc_admin::cli::Cli;
use tc_telemetry::{init_logging, TelemetryConfig};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut telemetry = TelemetryConfig::from_env();
    if cli.verbose {
        telemetry = telemetry.with_log_level("debug");
    }
    if cli.json_logs {
        telemetry.json_logs = true;
    }
    let _logging = init_logging(&telemetry)?;

    tc_admin::run(cli).await
}
