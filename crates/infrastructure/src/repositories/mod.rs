pub mod memory_record_store;
pub mod sqlite_record_store;

pub use memory_record_store::InMemoryRecordStore;
pub use sqlite_record_store::SqliteRecordStore;
