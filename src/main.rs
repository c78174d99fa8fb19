// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use anyhow::Result;
use tracing::info;
use tracing_subscriber::EnvFilter;

use kube_smoke::config::Config;
use kube_smoke::constants::DEFAULT_LOG_FILTER;
use kube_smoke::error::SmokeTestError;
use kube_smoke::kubernetes::{create_client, Deadline};
use kube_smoke::smoke::Reporter;

#[tokio::main]
async fn main() -> Result<()> {
    // Logs go to stderr, readiness lines to stdout
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_LOG_FILTER)),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::from_env()?;
    info!(
        "Configuration loaded: kubeconfig={}, timeout={}s",
        config.kubeconfig_path.display(),
        config.timeout.as_secs()
    );

    let client = create_client(&config).await?;
    let deadline = Deadline::after(config.timeout);
    let mut reporter = Reporter::new(client, deadline, std::io::stdout());

    let report = tokio::select! {
        report = reporter.run() => report?,
        _ = tokio::signal::ctrl_c() => return Err(SmokeTestError::Cancelled.into()),
    };

    info!("Smoke test finished ({:?}): {}", report.outcome, report.summary);
    Ok(())
}
