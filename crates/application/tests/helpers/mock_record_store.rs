#![allow(dead_code)]

use async_trait::async_trait;
use flipdns_application::ports::RecordStore;
use flipdns_domain::{DomainError, StoredRecord};
use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;

#[derive(Clone, Default)]
pub struct MockRecordStore {
    records: Arc<RwLock<HashMap<String, StoredRecord>>>,
    errors: Arc<RwLock<HashMap<String, DomainError>>>,
    delay: Arc<RwLock<Option<Duration>>>,
    lookups: Arc<AtomicU64>,
}

impl MockRecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn insert(&self, domain: &str, address: &str, ttl: u32) {
        self.records
            .write()
            .await
            .insert(domain.to_ascii_lowercase(), StoredRecord::new(address, ttl));
    }

    pub async fn set_error(&self, domain: &str, error: DomainError) {
        self.errors
            .write()
            .await
            .insert(domain.to_ascii_lowercase(), error);
    }

    /// Every lookup sleeps this long before answering.
    pub async fn set_delay(&self, delay: Duration) {
        *self.delay.write().await = Some(delay);
    }

    pub fn lookup_count(&self) -> u64 {
        self.lookups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RecordStore for MockRecordStore {
    async fn lookup(&self, domain: &str) -> Result<Option<StoredRecord>, DomainError> {
        self.lookups.fetch_add(1, Ordering::SeqCst);

        let delay = *self.delay.read().await;
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        let key = domain.to_ascii_lowercase();
        if let Some(err) = self.errors.read().await.get(&key).cloned() {
            return Err(err);
        }

        Ok(self.records.read().await.get(&key).cloned())
    }
}
