// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read-only views of cluster resources.

pub mod readiness;

pub use readiness::{DeploymentReadiness, EndpointsReadiness, ReadyState, ServiceReadiness};
