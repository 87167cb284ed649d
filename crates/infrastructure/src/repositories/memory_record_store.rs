use async_trait::async_trait;
use flipdns_application::ports::RecordStore;
use flipdns_domain::wire::parse_ipv4;
use flipdns_domain::{DomainError, LocalRecord, StoredRecord};
use rustc_hash::FxHashMap;
use tracing::warn;

/// Read-only store built from the static records in the configuration.
#[derive(Debug, Default)]
pub struct InMemoryRecordStore {
    records: FxHashMap<Box<str>, StoredRecord>,
}

impl InMemoryRecordStore {
    pub fn new(records: &[LocalRecord]) -> Self {
        let mut map = FxHashMap::default();
        map.reserve(records.len());

        for record in records {
            if parse_ipv4(&record.ip).is_err() {
                // kept anyway; answering it fails the query instead
                warn!(domain = %record.domain, ip = %record.ip, "Static record has an invalid IPv4 address");
            }
            map.insert(record.normalized_domain().into_boxed_str(), record.to_stored());
        }

        Self { records: map }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[async_trait]
impl RecordStore for InMemoryRecordStore {
    async fn lookup(&self, domain: &str) -> Result<Option<StoredRecord>, DomainError> {
        let key = domain.trim_end_matches('.').to_ascii_lowercase();
        Ok(self.records.get(key.as_str()).cloned())
    }
}
