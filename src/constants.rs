// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

/// Environment variables read at startup
pub mod env {
    /// Path to the kubeconfig file
    pub const KUBECONFIG: &str = "KUBECONFIG";
    /// Home directory used for the default kubeconfig location
    pub const HOME: &str = "HOME";
    /// Overall deadline for the smoke test, in seconds
    pub const TIMEOUT_SECS: &str = "SMOKETEST_TIMEOUT_SECS";
}

/// Kubeconfig location relative to the home directory
pub const DEFAULT_KUBECONFIG_PATH: &str = ".kube/config";

/// Deadline applied when SMOKETEST_TIMEOUT_SECS is not set
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Log filter used when RUST_LOG is not set
pub const DEFAULT_LOG_FILTER: &str = "info";
