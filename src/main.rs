use std::process::ExitCode;

use anyhow::Context;
use lighter_e2e::{Runner, config, telemetry};

#[actix::main]
async fn main() -> anyhow::Result<ExitCode> {
    let config = config::load().context("Failed to load configuration")?;

    telemetry::init(&config.observability);

    ::tracing::info!(
        auth = %config.services.auth_url,
        profile = %config.services.profile_url,
        users = config.fixtures.users.len(),
        "Starting end-to-end checks"
    );

    let run = Runner::new(&config).run().await;

    for failure in run.report.failures() {
        ::tracing::error!("error: {failure}");
    }

    if run.report.passed() {
        ::tracing::info!("All checks passed");
    } else {
        ::tracing::error!(failures = run.report.len(), "Checks failed");
    }

    Ok(ExitCode::from(run.report.exit_status()))
}
