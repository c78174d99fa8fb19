// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Cluster client creation from a kubeconfig file

use crate::config::Config;
use crate::error::{Result, SmokeTestError};
use kube::config::{KubeConfigOptions, Kubeconfig};
use kube::{Client, Config as KConfig};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Create a Kubernetes client from the configured kubeconfig file.
///
/// Reachability is not checked here; an unreachable API server shows up on
/// the first request.
#[instrument(skip(config), fields(kubeconfig = %config.kubeconfig_path.display()))]
pub async fn create_client(config: &Config) -> Result<Client> {
    let mut client_config = load_client_config(&config.kubeconfig_path).await?;

    client_config.connect_timeout = Some(config.timeout);
    client_config.read_timeout = Some(config.timeout);

    info!("Connecting to cluster at {}", client_config.cluster_url);

    Client::try_from(client_config)
        .map_err(|e| SmokeTestError::Kubeconfig(format!("Failed to create client: {}", e)))
}

/// Read a kubeconfig file and resolve its current context
async fn load_client_config(path: &Path) -> Result<KConfig> {
    debug!("Reading kubeconfig from {}", path.display());

    let kubeconfig = Kubeconfig::read_from(path).map_err(|e| {
        SmokeTestError::Kubeconfig(format!("Failed to read {}: {}", path.display(), e))
    })?;

    KConfig::from_custom_kubeconfig(kubeconfig, &KubeConfigOptions::default())
        .await
        .map_err(|e| SmokeTestError::Kubeconfig(format!("Failed to create config: {}", e)))
}
