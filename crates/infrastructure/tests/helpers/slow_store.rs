#![allow(dead_code)]

use async_trait::async_trait;
use flipdns_application::ports::RecordStore;
use flipdns_domain::{DomainError, StoredRecord};
use std::time::Duration;

/// Answers every name with the same record after a fixed delay.
pub struct SlowRecordStore {
    delay: Duration,
    record: StoredRecord,
}

impl SlowRecordStore {
    pub fn new(delay: Duration) -> Self {
        Self {
            delay,
            record: StoredRecord::new("10.9.8.7", 42),
        }
    }
}

#[async_trait]
impl RecordStore for SlowRecordStore {
    async fn lookup(&self, domain: &str) -> Result<Option<StoredRecord>, DomainError> {
        tokio::time::sleep(self.delay).await;
        if domain.starts_with("missing") {
            return Ok(None);
        }
        Ok(Some(self.record.clone()))
    }
}
