//! Test fixtures

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use orphanage_client::{ClientError, ClientResult, OrphanageSource};
use shared::{Orphanage, OrphanageId, OrphanageImage};

pub fn sample_orphanage() -> Orphanage {
    Orphanage {
        id: Some(1),
        name: "Lar das meninas".into(),
        latitude: -27.2092052,
        longitude: -49.6401092,
        about: "Presta assistência a crianças de 06 a 15 anos.".into(),
        instructions: "Venha como se sentir a vontade.".into(),
        opening_hours: "Das 8h às 18h".into(),
        open_on_weekends: true,
        images: vec![
            OrphanageImage { id: 1, path: "a".into() },
            OrphanageImage { id: 2, path: "b".into() },
        ],
    }
}

/// In-memory source; unknown ids answer `NotFound`
#[derive(Default)]
pub struct FakeSource {
    records: HashMap<String, Orphanage>,
    requests: Mutex<Vec<String>>,
}

impl FakeSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, id: &str, record: Orphanage) -> Self {
        self.records.insert(id.to_string(), record);
        self
    }

    /// Ids requested so far, in order
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

#[async_trait]
impl OrphanageSource for FakeSource {
    async fn fetch_by_id(&self, id: &OrphanageId) -> ClientResult<Orphanage> {
        self.requests.lock().unwrap().push(id.to_string());
        self.records
            .get(id.as_str())
            .cloned()
            .ok_or_else(|| ClientError::NotFound(id.to_string()))
    }
}
