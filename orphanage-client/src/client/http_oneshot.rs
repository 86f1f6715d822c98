// orphanage-client/src/client/http_oneshot.rs
// Oneshot HTTP client - in-memory calls against an axum Router
//
// Requires the "in-process" feature

use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use http::Request;
use serde::de::DeserializeOwned;
use tower::ServiceExt;

use crate::error::error_from_status;
use crate::{ClientError, ClientResult};

use super::http::HttpClient;

/// Oneshot HTTP client (in-memory)
///
/// Drives a Router through Tower's `oneshot`, so a view can be mounted
/// against an in-process backend without a socket.
///
/// # Example
///
/// ```ignore
/// use axum::Router;
/// use orphanage_client::OneshotHttpClient;
///
/// let router: Router = build_app();
/// let client = OneshotHttpClient::new(router);
/// let record: Orphanage = client.get("orphanages/1").await?;
/// ```
#[derive(Debug, Clone)]
pub struct OneshotHttpClient {
    router: Router,
}

impl OneshotHttpClient {
    pub fn new(router: Router) -> Self {
        Self { router }
    }

    fn build_request(path: &str) -> ClientResult<Request<Body>> {
        let uri = format!("/{}", path.trim_start_matches('/'));
        Request::builder()
            .method(http::Method::GET)
            .uri(uri)
            .header(http::header::ACCEPT, "application/json")
            .body(Body::empty())
            .map_err(|e| ClientError::Internal(format!("Failed to build request: {}", e)))
    }
}

#[async_trait]
impl HttpClient for OneshotHttpClient {
    async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
        let request = Self::build_request(path)?;

        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .map_err(|e| ClientError::Internal(format!("Oneshot call failed: {}", e)))?;

        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .map_err(|e| ClientError::Internal(format!("Failed to read body: {}", e)))?;

        if !status.is_success() {
            let text = String::from_utf8_lossy(&body_bytes).to_string();
            return Err(error_from_status(status.as_u16(), text));
        }

        Ok(serde_json::from_slice(&body_bytes)?)
    }
}
