use crate::bootstrap;
use flipdns_application::ports::RecordStore;
use flipdns_domain::Config;
use flipdns_infrastructure::repositories::{InMemoryRecordStore, SqliteRecordStore};
use std::sync::Arc;
use tracing::info;

/// SQLite-backed when a database path is configured, in-memory otherwise.
/// Static records from the configuration are served either way.
pub async fn build_record_store(config: &Config) -> anyhow::Result<Arc<dyn RecordStore>> {
    if !config.database.is_enabled() {
        let store = InMemoryRecordStore::new(&config.records);
        info!(records = store.len(), "Using in-memory record store");
        return Ok(Arc::new(store));
    }

    let pool = bootstrap::init_database(&config.database).await?;
    let store = SqliteRecordStore::new(pool);
    let seeded = store.seed(&config.records).await?;
    let total = store.count().await?;
    info!(seeded, total, "Using SQLite record store");

    Ok(Arc::new(store))
}
