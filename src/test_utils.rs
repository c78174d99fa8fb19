// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use http::{Request, Response};
use kube::client::Body;
use kube::Client;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::io::Write;
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use tower::Service;
use tracing_subscriber::fmt::MakeWriter;

pub const PODS_PATH: &str = "/api/v1/pods";
pub const DEPLOYMENTS_PATH: &str = "/apis/apps/v1/deployments";
pub const SERVICES_PATH: &str = "/api/v1/services";

/// Path of a namespaced Endpoints object
pub fn endpoints_path(namespace: &str, name: &str) -> String {
    format!("/api/v1/namespaces/{}/endpoints/{}", namespace, name)
}

#[derive(Clone)]
enum Reply {
    Json(u16, String),
    Hang,
}

/// A mock API server that answers GET requests by exact path and remembers
/// every path it was asked for.
#[derive(Clone)]
pub struct MockService {
    replies: Arc<Mutex<HashMap<String, Reply>>>,
    requests: Arc<Mutex<Vec<String>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            replies: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Answer GET requests for `path` with a JSON body
    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(path.to_string(), Reply::Json(status, body.to_string()));
        self
    }

    /// Never answer GET requests for `path`
    pub fn hang_on_get(self, path: &str) -> Self {
        self.replies
            .lock()
            .unwrap()
            .insert(path.to_string(), Reply::Hang);
        self
    }

    /// Paths requested so far, in order
    pub fn requested_paths(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }

    /// Build a kube Client backed by this mock. Keep a clone of the mock to
    /// inspect requests afterwards.
    pub fn client(&self) -> Client {
        Client::new(self.clone(), "default")
    }
}

impl Default for MockService {
    fn default() -> Self {
        Self::new()
    }
}

impl Service<Request<Body>> for MockService {
    type Response = Response<Body>;
    type Error = tower::BoxError;
    type Future = std::pin::Pin<
        Box<dyn std::future::Future<Output = Result<Self::Response, Self::Error>> + Send>,
    >;

    fn poll_ready(&mut self, _cx: &mut Context<'_>) -> Poll<Result<(), Self::Error>> {
        Poll::Ready(Ok(()))
    }

    fn call(&mut self, req: Request<Body>) -> Self::Future {
        let path = req.uri().path().to_string();
        self.requests.lock().unwrap().push(path.clone());

        let reply = if req.method() == http::Method::GET {
            self.replies.lock().unwrap().get(&path).cloned()
        } else {
            None
        };

        Box::pin(async move {
            let (status, body) = match reply {
                Some(Reply::Json(status, body)) => (status, body),
                Some(Reply::Hang) => std::future::pending().await,
                None => (404, not_found_json("path", &path)),
            };
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))
                .unwrap())
        })
    }
}

/// Wrap items into a list response
pub fn list_json(api_version: &str, kind: &str, items: Vec<Value>) -> String {
    json!({
        "apiVersion": api_version,
        "kind": kind,
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

pub fn pod_json(name: &str, namespace: &str) -> Value {
    json!({
        "apiVersion": "v1",
        "kind": "Pod",
        "metadata": { "name": name, "namespace": namespace }
    })
}

/// A list of `count` pods spread over the default namespace
pub fn pod_list_json(count: usize) -> String {
    let pods = (0..count)
        .map(|i| pod_json(&format!("pod-{}", i), "default"))
        .collect();
    list_json("v1", "PodList", pods)
}

pub fn deployment_json(
    name: &str,
    namespace: &str,
    desired: Option<i32>,
    ready: Option<i32>,
) -> Value {
    let mut spec = json!({
        "selector": { "matchLabels": { "app": name } },
        "template": { "metadata": { "labels": { "app": name } } }
    });
    if let Some(desired) = desired {
        spec["replicas"] = json!(desired);
    }
    let mut status = json!({});
    if let Some(ready) = ready {
        status["readyReplicas"] = json!(ready);
    }

    json!({
        "apiVersion": "apps/v1",
        "kind": "Deployment",
        "metadata": { "name": name, "namespace": namespace },
        "spec": spec,
        "status": status
    })
}

pub fn service_json(name: &str, namespace: &str, cluster_ip: Option<&str>) -> Value {
    let mut spec = json!({ "type": "ClusterIP" });
    if let Some(ip) = cluster_ip {
        spec["clusterIP"] = json!(ip);
    }

    json!({
        "apiVersion": "v1",
        "kind": "Service",
        "metadata": { "name": name, "namespace": namespace },
        "spec": spec
    })
}

/// An Endpoints object with `subsets` subsets of one address each
pub fn endpoints_json(name: &str, namespace: &str, subsets: usize) -> String {
    let subsets: Vec<Value> = (0..subsets)
        .map(|i| json!({ "addresses": [{ "ip": format!("10.244.0.{}", i + 2) }] }))
        .collect();

    json!({
        "apiVersion": "v1",
        "kind": "Endpoints",
        "metadata": { "name": name, "namespace": namespace },
        "subsets": subsets
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    json!({
        "kind": "Status",
        "apiVersion": "v1",
        "metadata": {},
        "status": "Failure",
        "message": format!("{} \"{}\" not found", resource, name),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}

/// Create a 403 forbidden response for a cluster-wide list
pub fn forbidden_json(resource: &str) -> String {
    json!({
        "kind": "Status",
        "apiVersion": "v1",
        "metadata": {},
        "status": "Failure",
        "message": format!("{} is forbidden: cannot list resource \"{}\" at the cluster scope", resource, resource),
        "reason": "Forbidden",
        "code": 403
    })
    .to_string()
}

/// Collects formatted log lines emitted on the current thread
#[derive(Clone, Default)]
pub struct LogCapture {
    buf: Arc<Mutex<Vec<u8>>>,
}

impl LogCapture {
    /// Route this thread's tracing output here until the guard is dropped
    pub fn install(&self) -> tracing::subscriber::DefaultGuard {
        let subscriber = tracing_subscriber::fmt()
            .with_writer(self.clone())
            .with_ansi(false)
            .with_max_level(tracing::Level::DEBUG)
            .finish();
        tracing::subscriber::set_default(subscriber)
    }

    pub fn contents(&self) -> String {
        String::from_utf8_lossy(&self.buf.lock().unwrap()).into_owned()
    }
}

impl Write for LogCapture {
    fn write(&mut self, bytes: &[u8]) -> std::io::Result<usize> {
        self.buf.lock().unwrap().extend_from_slice(bytes);
        Ok(bytes.len())
    }

    fn flush(&mut self) -> std::io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for LogCapture {
    type Writer = LogCapture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}
