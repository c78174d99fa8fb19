// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SmokeTestError {
    #[error("Kubernetes API error: {0}")]
    Kube(#[from] kube::Error),

    #[error("Failed to load kubeconfig: {0}")]
    Kubeconfig(String),

    #[error("Invalid configuration: {0}")]
    Config(String),

    #[error("Deadline exceeded while {0}")]
    DeadlineExceeded(String),

    #[error("Smoke test cancelled")]
    Cancelled,

    #[error("Failed to write report: {0}")]
    Output(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SmokeTestError>;
