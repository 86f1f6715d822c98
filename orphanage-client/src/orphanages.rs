//! Orphanages API
//!
//! [`OrphanageSource`] is the single capability the detail view depends
//! on. [`OrphanageApi`] implements it over any [`HttpClient`].

use std::sync::Arc;

use async_trait::async_trait;
use shared::{Orphanage, OrphanageId};

use crate::ClientResult;
use crate::client::HttpClient;

/// Data-access collaborator for orphanage records
#[async_trait]
pub trait OrphanageSource: Send + Sync {
    /// Fetch one record by id (`GET orphanages/{id}`)
    async fn fetch_by_id(&self, id: &OrphanageId) -> ClientResult<Orphanage>;
}

#[async_trait]
impl<S: OrphanageSource + ?Sized> OrphanageSource for Arc<S> {
    async fn fetch_by_id(&self, id: &OrphanageId) -> ClientResult<Orphanage> {
        (**self).fetch_by_id(id).await
    }
}

/// Orphanages API over an HTTP transport
#[derive(Debug, Clone)]
pub struct OrphanageApi<C> {
    http: C,
}

impl<C: HttpClient> OrphanageApi<C> {
    pub fn new(http: C) -> Self {
        Self { http }
    }

    pub fn http(&self) -> &C {
        &self.http
    }
}

#[async_trait]
impl<C: HttpClient> OrphanageSource for OrphanageApi<C> {
    async fn fetch_by_id(&self, id: &OrphanageId) -> ClientResult<Orphanage> {
        self.http.get(&id.api_path()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ClientError;
    use serde::de::DeserializeOwned;
    use std::sync::Mutex;

    /// Records requested paths and answers with a canned body
    struct RecordingClient {
        paths: Mutex<Vec<String>>,
        body: serde_json::Value,
    }

    #[async_trait]
    impl HttpClient for RecordingClient {
        async fn get<T: DeserializeOwned>(&self, path: &str) -> ClientResult<T> {
            self.paths.lock().unwrap().push(path.to_string());
            serde_json::from_value(self.body.clone()).map_err(ClientError::from)
        }
    }

    #[tokio::test]
    async fn test_fetch_by_id_requests_orphanage_path() {
        let client = RecordingClient {
            paths: Mutex::new(Vec::new()),
            body: serde_json::json!({
                "name": "Lar",
                "latitude": 1.0,
                "longitude": 2.0,
                "about": "",
                "instructions": "",
                "opening_hours": "8h",
                "open_on_weekends": true,
                "images": []
            }),
        };
        let api = OrphanageApi::new(client);
        let id = OrphanageId::parse("12").unwrap();

        let record = api.fetch_by_id(&id).await.unwrap();

        assert_eq!(record.name, "Lar");
        assert_eq!(*api.http().paths.lock().unwrap(), vec!["orphanages/12".to_string()]);
    }
}
