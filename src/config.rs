// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use crate::constants::{env as vars, DEFAULT_KUBECONFIG_PATH, DEFAULT_TIMEOUT_SECS};
use crate::error::{Result, SmokeTestError};
use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Smoke test configuration loaded from environment variables
#[derive(Debug, Clone)]
pub struct Config {
    /// Kubeconfig file used to build the cluster client
    pub kubeconfig_path: PathBuf,
    /// Upper bound for the whole run, every API call included
    pub timeout: Duration,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        let kubeconfig_path =
            resolve_kubeconfig_path(env::var(vars::KUBECONFIG).ok(), env::var(vars::HOME).ok())?;
        let timeout = parse_timeout(env::var(vars::TIMEOUT_SECS).ok())?;

        Ok(Config {
            kubeconfig_path,
            timeout,
        })
    }
}

/// Pick the kubeconfig path: KUBECONFIG when set and non-empty, else $HOME/.kube/config
pub fn resolve_kubeconfig_path(
    kubeconfig: Option<String>,
    home: Option<String>,
) -> Result<PathBuf> {
    if let Some(path) = kubeconfig.filter(|p| !p.is_empty()) {
        return Ok(PathBuf::from(path));
    }

    match home.filter(|h| !h.is_empty()) {
        Some(home) => Ok(PathBuf::from(home).join(DEFAULT_KUBECONFIG_PATH)),
        None => Err(SmokeTestError::Config(format!(
            "neither {} nor {} is set",
            vars::KUBECONFIG,
            vars::HOME
        ))),
    }
}

fn parse_timeout(raw: Option<String>) -> Result<Duration> {
    let Some(raw) = raw.filter(|r| !r.trim().is_empty()) else {
        return Ok(Duration::from_secs(DEFAULT_TIMEOUT_SECS));
    };

    match raw.trim().parse::<u64>() {
        Ok(secs) if secs > 0 => Ok(Duration::from_secs(secs)),
        _ => Err(SmokeTestError::Config(format!(
            "{} must be a positive number of seconds, got '{}'",
            vars::TIMEOUT_SECS,
            raw
        ))),
    }
}
