// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Endpoints, Service};
use kube::ResourceExt;
use std::fmt;

/// Outcome of a single readiness check
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Ready,
    NotReady,
}

impl ReadyState {
    pub fn is_ready(self) -> bool {
        self == ReadyState::Ready
    }
}

impl From<bool> for ReadyState {
    fn from(ready: bool) -> Self {
        if ready {
            ReadyState::Ready
        } else {
            ReadyState::NotReady
        }
    }
}

impl fmt::Display for ReadyState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadyState::Ready => f.write_str("ready"),
            ReadyState::NotReady => f.write_str("not ready"),
        }
    }
}

/// Replica counts of a deployment at the time it was listed
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeploymentReadiness {
    pub name: String,
    pub ready_replicas: i32,
    /// `None` when the deployment carries no `spec.replicas`
    pub desired_replicas: Option<i32>,
}

impl DeploymentReadiness {
    pub fn from_deployment(deployment: &Deployment) -> Self {
        Self {
            name: deployment.name_any(),
            // The API server omits zero-valued status counters
            ready_replicas: deployment
                .status
                .as_ref()
                .and_then(|s| s.ready_replicas)
                .unwrap_or(0),
            desired_replicas: deployment.spec.as_ref().and_then(|s| s.replicas),
        }
    }

    /// Ready when every desired replica is ready. An unknown desired count is never ready.
    pub fn state(&self) -> ReadyState {
        self.desired_replicas
            .is_some_and(|desired| desired == self.ready_replicas)
            .into()
    }
}

/// Whether a service has been assigned a cluster-internal address
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServiceReadiness {
    pub name: String,
    pub namespace: String,
    pub cluster_ip_assigned: bool,
}

impl ServiceReadiness {
    pub fn from_service(service: &Service) -> Self {
        Self {
            name: service.name_any(),
            namespace: service.namespace().unwrap_or_default(),
            cluster_ip_assigned: service
                .spec
                .as_ref()
                .and_then(|s| s.cluster_ip.as_deref())
                .is_some_and(|ip| !ip.is_empty()),
        }
    }

    pub fn state(&self) -> ReadyState {
        self.cluster_ip_assigned.into()
    }
}

/// Number of endpoint subsets currently backing a service
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EndpointsReadiness {
    pub service: String,
    pub subsets: usize,
}

impl EndpointsReadiness {
    pub fn from_endpoints(service: &str, endpoints: &Endpoints) -> Self {
        Self {
            service: service.to_string(),
            subsets: endpoints.subsets.as_ref().map_or(0, Vec::len),
        }
    }

    pub fn state(&self) -> ReadyState {
        (self.subsets > 0).into()
    }
}
