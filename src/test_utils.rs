// Copyright 2026, Jeroen van Erp <jeroen@geeko.me>
// SPDX-License-Identifier: Apache-2.0

//! Test utilities for mocking Kubernetes API responses.

use bytes::Bytes;
use http::{Request, Response};
use http_body_util::BodyExt;
use kube::client::Body;
use kube::Client;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::task::{Context, Poll};
use std::time::Duration;
use tokio::time::Instant;
use tower::Service;

/// A request seen by the mock API server
#[derive(Clone, Debug)]
pub struct RecordedRequest {
    pub method: String,
    pub path: String,
    pub body: String,
    /// When the request arrived
    pub at: Instant,
}

/// A mock HTTP service that returns predefined responses based on method and path,
/// and records every request it receives.
#[derive(Clone)]
pub struct MockService {
    responses: Arc<Mutex<HashMap<(String, String), (u16, String)>>>,
    delays: Arc<Mutex<HashMap<(String, String), VecDeque<Duration>>>>,
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockService {
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            delays: Arc::new(Mutex::new(HashMap::new())),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Add a response for requests with `method` matching the exact path
    pub fn on(self, method: &str, path: &str, status: u16, body: &str) -> Self {
        self.responses.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            (status, body.to_string()),
        );
        self
    }

    /// Hold back the responses to the next requests on this route, one delay per request
    pub fn with_delays(self, method: &str, path: &str, delays: &[Duration]) -> Self {
        self.delays.lock().unwrap().insert(
            (method.to_string(), path.to_string()),
            delays.iter().copied().collect(),
        );
        self
    }

    pub fn on_get(self, path: &str, status: u16, body: &str) -> Self {
        self.on("GET", path, status, body)
    }

    pub fn on_post(self, path: &str, status: u16, body: &str) -> Self {
        self.on("POST", path, status, body)
    }

    pub fn on_patch(self, path: &str, status: u16, body: &str) -> Self {
        self.on("PATCH", path, status, body)
    }

    pub fn on_delete(self, path: &str, status: u16, body: &str) -> Self {
        self.on("DELETE", path, status, body)
    }

    /// Build a kube Client from this mock service.
    /// The service stays usable for inspecting recorded requests.
    pub fn client(&self) -> Client {
        Client::new(self.clone(), "default")
    }

    /// All requests received so far
    pub fn requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Requests received so far with the given method
    pub fn requests_with(&self, method: &str) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| r.method == method)
            .collect()
    }

    /// Requests that change state on the server
    pub fn writes(&self) -> Vec<RecordedRequest> {
        self.requests()
            .into_iter()
            .filter(|r| matches!(r.method.as_str(), "POST" | "PUT" | "PATCH" | "DELETE"))
            .collect()
    }

    fn find_response(&self, method: &str, path: &str) -> Option<(u16, String)> {
        self.responses
            .lock()
            .unwrap()
            .get(&(method.to_string(), path.to_string()))
            .cloned()
    }

    fn next_delay(&self, method: &str, path: &str) -> Option<Duration> {
        self.delays
            .lock()
            .unwrap()
            .get_mut(&(method.to_string(), path.to_string()))
            .and_then(|d| d.pop_front())
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
        let method = req.method().to_string();
        let path = req.uri().path().to_string();
        let response = self.find_response(&method, &path);
        let delay = self.next_delay(&method, &path);
        let requests = self.requests.clone();
        let at = Instant::now();

        Box::pin(async move {
            let body: Bytes = req.into_body().collect().await?.to_bytes();
            requests.lock().unwrap().push(RecordedRequest {
                method,
                path,
                body: String::from_utf8_lossy(&body).into_owned(),
                at,
            });

            if let Some(delay) = delay {
                tokio::time::sleep(delay).await;
            }

            let (status, body) = response.unwrap_or_else(|| {
                // Default 404 for unmatched requests
                (404, not_found_json("resource", "unknown"))
            });
            Ok(Response::builder()
                .status(status)
                .header("content-type", "application/json")
                .body(Body::from(body.into_bytes()))?)
        })
    }
}

/// Path of a namespaced GitStar
pub fn gitstar_path(namespace: &str, name: &str) -> String {
    format!("/apis/app.gitstar.io/v1/namespaces/{}/gitstars/{}", namespace, name)
}

/// Path of a namespaced CronJob, or the collection when `name` is empty
pub fn cronjob_path(namespace: &str, name: &str) -> String {
    if name.is_empty() {
        format!("/apis/batch/v1/namespaces/{}/cronjobs", namespace)
    } else {
        format!("/apis/batch/v1/namespaces/{}/cronjobs/{}", namespace, name)
    }
}

/// Create a mock GitStar JSON response
pub fn gitstar_json(namespace: &str, name: &str, repo_name: &str, star_number: Option<i64>) -> String {
    let mut object = serde_json::json!({
        "apiVersion": "app.gitstar.io/v1",
        "kind": "GitStar",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "gitstar-uid"
        },
        "spec": {
            "repoDomain": "github.com",
            "repoName": repo_name
        }
    });
    if let Some(stars) = star_number {
        object["status"] = serde_json::json!({
            "starNumber": stars,
            "updatedAt": "2024-01-01T00:00:00Z",
            "failedReason": ""
        });
    }
    object.to_string()
}

/// Point a GitStar JSON fixture at another repository host
pub fn with_repo_domain(gitstar: &str, repo_domain: &str) -> String {
    let mut object: serde_json::Value = serde_json::from_str(gitstar).unwrap();
    object["spec"]["repoDomain"] = serde_json::json!(repo_domain);
    object.to_string()
}

/// Create a mock GitStar list JSON response
pub fn gitstar_list_json(items: &[String]) -> String {
    let items: Vec<serde_json::Value> = items
        .iter()
        .map(|i| serde_json::from_str(i).unwrap())
        .collect();
    serde_json::json!({
        "apiVersion": "app.gitstar.io/v1",
        "kind": "GitStarList",
        "metadata": { "resourceVersion": "1" },
        "items": items
    })
    .to_string()
}

/// Create a mock CronJob JSON response
pub fn cronjob_json(namespace: &str, name: &str) -> String {
    serde_json::json!({
        "apiVersion": "batch/v1",
        "kind": "CronJob",
        "metadata": {
            "name": name,
            "namespace": namespace,
            "uid": "cronjob-uid"
        }
    })
    .to_string()
}

/// Create a mock ConfigMap JSON response
pub fn configmap_json(namespace: &str, name: &str, data: &[(&str, &str)]) -> String {
    let data: serde_json::Map<String, serde_json::Value> = data
        .iter()
        .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
        .collect();
    serde_json::json!({
        "apiVersion": "v1",
        "kind": "ConfigMap",
        "metadata": {
            "name": name,
            "namespace": namespace
        },
        "data": data
    })
    .to_string()
}

/// Create a successful delete Status response
pub fn deleted_json() -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "metadata": {},
        "status": "Success",
        "code": 200
    })
    .to_string()
}

/// Create a 404 not found response
pub fn not_found_json(resource: &str, name: &str) -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": format!("{} \"{}\" not found", resource, name),
        "reason": "NotFound",
        "code": 404
    })
    .to_string()
}

/// Create a 500 internal error response
pub fn server_error_json() -> String {
    serde_json::json!({
        "kind": "Status",
        "apiVersion": "v1",
        "status": "Failure",
        "message": "etcdserver: request timed out",
        "reason": "InternalError",
        "code": 500
    })
    .to_string()
}
