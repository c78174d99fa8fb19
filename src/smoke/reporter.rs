// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Sequential readiness report: pods, deployments, services, endpoints.

use crate::error::{Result, SmokeTestError};
use crate::kubernetes::Deadline;
use crate::smoke::checks::{count_pods, get_endpoints, list_deployments, list_services};
use crate::types::{DeploymentReadiness, EndpointsReadiness, ServiceReadiness};
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::Service;
use kube::Client;
use std::fmt;
use std::io::Write;
use tracing::{debug, info, instrument, warn};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// Every check ran
    Completed,
    /// The cluster has no deployments; services were not checked
    NoDeployments,
    /// The cluster has no services; endpoints were not checked
    NoServices,
}

/// Counters collected while reporting
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Summary {
    pub pods: usize,
    pub deployments: usize,
    pub deployments_ready: usize,
    pub services: usize,
    pub services_ready: usize,
    pub endpoints_ready: usize,
    /// Services whose Endpoints lookup failed
    pub endpoints_skipped: usize,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} pods, {}/{} deployments ready, {}/{} services ready, {}/{} endpoints ready",
            self.pods,
            self.deployments_ready,
            self.deployments,
            self.services_ready,
            self.services,
            self.endpoints_ready,
            self.services.saturating_sub(self.endpoints_skipped),
        )?;
        if self.endpoints_skipped > 0 {
            write!(f, ", {} endpoint lookups failed", self.endpoints_skipped)?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub outcome: Outcome,
    pub summary: Summary,
}

/// Runs the checks in order and writes one line per result to `out`.
pub struct Reporter<W> {
    client: Client,
    deadline: Deadline,
    out: W,
}

impl<W: Write> Reporter<W> {
    pub fn new(client: Client, deadline: Deadline, out: W) -> Self {
        Self {
            client,
            deadline,
            out,
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Run all checks. Empty deployment or service lists end the run early
    /// without an error; only an Endpoints lookup failure is skipped.
    #[instrument(skip(self))]
    pub async fn run(&mut self) -> Result<Report> {
        let mut summary = Summary {
            pods: count_pods(&self.client, &self.deadline).await?,
            ..Default::default()
        };
        writeln!(self.out, "There are {} pods in the cluster", summary.pods)?;

        let deployments = list_deployments(&self.client, &self.deadline).await?;
        if deployments.is_empty() {
            info!("No deployments found");
            return Ok(Report {
                outcome: Outcome::NoDeployments,
                summary,
            });
        }
        for deployment in &deployments {
            self.report_deployment(deployment, &mut summary)?;
        }

        let services = list_services(&self.client, &self.deadline).await?;
        if services.is_empty() {
            info!("No services found");
            return Ok(Report {
                outcome: Outcome::NoServices,
                summary,
            });
        }
        for service in &services {
            self.report_service(service, &mut summary).await?;
        }
        debug!("Checks done with {:?} left before the deadline", self.deadline.remaining());

        Ok(Report {
            outcome: Outcome::Completed,
            summary,
        })
    }

    fn report_deployment(&mut self, deployment: &Deployment, summary: &mut Summary) -> Result<()> {
        let view = DeploymentReadiness::from_deployment(deployment);
        if view.desired_replicas.is_none() {
            warn!(
                "Deployment {} has no desired replica count, treating it as not ready",
                view.name
            );
        }

        let state = view.state();
        summary.deployments += 1;
        if state.is_ready() {
            summary.deployments_ready += 1;
        }
        writeln!(self.out, "Deployment {} is {}", view.name, state)?;
        Ok(())
    }

    async fn report_service(&mut self, service: &Service, summary: &mut Summary) -> Result<()> {
        let view = ServiceReadiness::from_service(service);
        let state = view.state();
        summary.services += 1;
        if state.is_ready() {
            summary.services_ready += 1;
        }
        writeln!(self.out, "Service {} is {}", view.name, state)?;

        let endpoints =
            match get_endpoints(&self.client, &self.deadline, &view.namespace, &view.name).await {
                Ok(endpoints) => endpoints,
                Err(e @ SmokeTestError::DeadlineExceeded(_)) => return Err(e),
                Err(e) => {
                    warn!("Failed to get endpoints for service {}: {}", view.name, e);
                    summary.endpoints_skipped += 1;
                    return Ok(());
                }
            };

        let endpoints_view = EndpointsReadiness::from_endpoints(&view.name, &endpoints);
        let state = endpoints_view.state();
        if state.is_ready() {
            summary.endpoints_ready += 1;
        }
        writeln!(
            self.out,
            "Endpoints of service {} are {}",
            endpoints_view.service, state
        )?;
        Ok(())
    }
}
