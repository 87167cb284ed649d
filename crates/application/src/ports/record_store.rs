use async_trait::async_trait;
use flipdns_domain::{DomainError, StoredRecord};

/// Domain → record lookup backing the resolver.
///
/// Implementations are shared across every in-flight query and must tolerate
/// concurrent calls. Lookups are case-insensitive.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// `Ok(None)` when nothing is stored for `domain`.
    async fn lookup(&self, domain: &str) -> Result<Option<StoredRecord>, DomainError>;
}
