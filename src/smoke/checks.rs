// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Read-only list/get calls against the API server

use crate::error::Result;
use crate::kubernetes::Deadline;
use k8s_openapi::api::apps::v1::Deployment;
use k8s_openapi::api::core::v1::{Endpoints, Pod, Service};
use kube::{api::ListParams, Api, Client};
use tracing::{debug, instrument};

/// Count pods across all namespaces
#[instrument(skip(client, deadline))]
pub async fn count_pods(client: &Client, deadline: &Deadline) -> Result<usize> {
    let pods: Api<Pod> = Api::all(client.clone());
    let pod_list = deadline
        .bound("listing pods", pods.list(&ListParams::default()))
        .await??;

    Ok(pod_list.items.len())
}

/// List deployments across all namespaces
#[instrument(skip(client, deadline))]
pub async fn list_deployments(client: &Client, deadline: &Deadline) -> Result<Vec<Deployment>> {
    let deployments: Api<Deployment> = Api::all(client.clone());
    let deployment_list = deadline
        .bound("listing deployments", deployments.list(&ListParams::default()))
        .await??;

    debug!("Listed {} deployments", deployment_list.items.len());
    Ok(deployment_list.items)
}

/// List services across all namespaces
#[instrument(skip(client, deadline))]
pub async fn list_services(client: &Client, deadline: &Deadline) -> Result<Vec<Service>> {
    let services: Api<Service> = Api::all(client.clone());
    let service_list = deadline
        .bound("listing services", services.list(&ListParams::default()))
        .await??;

    debug!("Listed {} services", service_list.items.len());
    Ok(service_list.items)
}

/// Get the Endpoints object backing a service
#[instrument(skip(client, deadline))]
pub async fn get_endpoints(
    client: &Client,
    deadline: &Deadline,
    namespace: &str,
    name: &str,
) -> Result<Endpoints> {
    let endpoints: Api<Endpoints> = Api::namespaced(client.clone(), namespace);
    let operation = format!("getting endpoints {}/{}", namespace, name);

    let found = deadline.bound(&operation, endpoints.get(name)).await??;

    Ok(found)
}
