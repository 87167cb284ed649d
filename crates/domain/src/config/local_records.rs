use serde::{Deserialize, Serialize};

use crate::StoredRecord;

/// A static A record declared in the configuration file.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LocalRecord {
    pub domain: String,

    pub ip: String,

    #[serde(default)]
    pub ttl: Option<u32>,
}

impl LocalRecord {
    pub fn new(domain: impl Into<String>, ip: impl Into<String>, ttl: Option<u32>) -> Self {
        Self {
            domain: domain.into(),
            ip: ip.into(),
            ttl,
        }
    }

    /// Lookup key: lower-cased, without a trailing dot.
    pub fn normalized_domain(&self) -> String {
        self.domain.trim_end_matches('.').to_ascii_lowercase()
    }

    pub fn ttl_or_default(&self) -> u32 {
        self.ttl.unwrap_or(300)
    }

    pub fn to_stored(&self) -> StoredRecord {
        StoredRecord::new(self.ip.as_str(), self.ttl_or_default())
    }
}
