use async_trait::async_trait;
use flipdns_application::ports::RecordStore;
use flipdns_domain::{DomainError, LocalRecord, StoredRecord};
use sqlx::SqlitePool;
use tracing::{error, instrument};

type RecordRow = (String, i64);

/// Record store persisted in the `records` table.
pub struct SqliteRecordStore {
    pool: SqlitePool,
}

impl SqliteRecordStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    fn normalize(domain: &str) -> String {
        domain.trim_end_matches('.').to_ascii_lowercase()
    }

    fn row_to_record(domain: &str, row: RecordRow) -> Result<StoredRecord, DomainError> {
        let (record_data, ttl) = row;
        let ttl = u32::try_from(ttl).map_err(|_| {
            DomainError::DatabaseError(format!("TTL {} out of range for {}", ttl, domain))
        })?;
        Ok(StoredRecord::new(record_data, ttl))
    }

    #[instrument(skip(self, record))]
    pub async fn upsert(&self, domain: &str, record: &StoredRecord) -> Result<(), DomainError> {
        sqlx::query(
            "INSERT INTO records (domain, record_data, ttl) VALUES (?, ?, ?)
             ON CONFLICT(domain) DO UPDATE SET record_data = excluded.record_data, ttl = excluded.ttl",
        )
        .bind(Self::normalize(domain))
        .bind(record.address.as_ref())
        .bind(i64::from(record.ttl))
        .execute(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to upsert record");
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(())
    }

    /// Writes every static record from the configuration, overwriting stored
    /// values for the same domain.
    pub async fn seed(&self, records: &[LocalRecord]) -> Result<usize, DomainError> {
        for record in records {
            self.upsert(&record.domain, &record.to_stored()).await?;
        }
        Ok(records.len())
    }

    pub async fn count(&self) -> Result<u64, DomainError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM records")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| DomainError::DatabaseError(e.to_string()))?;

        Ok(count.max(0) as u64)
    }
}

#[async_trait]
impl RecordStore for SqliteRecordStore {
    #[instrument(skip(self))]
    async fn lookup(&self, domain: &str) -> Result<Option<StoredRecord>, DomainError> {
        let row = sqlx::query_as::<_, RecordRow>(
            "SELECT record_data, ttl FROM records WHERE domain = ?",
        )
        .bind(Self::normalize(domain))
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| {
            error!(error = %e, "Failed to look up record");
            DomainError::DatabaseError(e.to_string())
        })?;

        row.map(|row| Self::row_to_record(domain, row)).transpose()
    }
}
