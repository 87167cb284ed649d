use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// A record as held by a record store.
///
/// `address` is kept as text because stores hand it back the way it was
/// written; it is only turned into wire octets, and validated, when an
/// answer is built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub ttl: u32,
    pub address: Arc<str>,
}

impl StoredRecord {
    pub fn new(address: impl Into<Arc<str>>, ttl: u32) -> Self {
        Self {
            ttl,
            address: address.into(),
        }
    }
}
