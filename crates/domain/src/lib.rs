//! flipdns domain layer: wire codec, records, configuration and errors.
pub mod config;
pub mod dns_record;
pub mod errors;
pub mod wire;

pub use config::{CliOverrides, Config, ConfigError, LocalRecord};
pub use dns_record::StoredRecord;
pub use errors::DomainError;
pub use wire::{Question, ResourceRecord, ResponseCode, WireError, CLASS_IN, TYPE_A};
