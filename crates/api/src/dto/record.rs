use flipdns_domain::StoredRecord;
use serde::Serialize;

#[derive(Serialize, Debug, Clone)]
pub struct RecordResponse {
    pub domain: String,
    pub address: String,
    pub ttl: u32,
}

impl RecordResponse {
    pub fn from_stored(domain: String, record: StoredRecord) -> Self {
        Self {
            domain,
            address: record.address.to_string(),
            ttl: record.ttl,
        }
    }
}
