pub mod database;
pub mod errors;
pub mod local_records;
pub mod logging;
pub mod root;
pub mod server;

pub use database::DatabaseConfig;
pub use errors::ConfigError;
pub use local_records::LocalRecord;
pub use logging::{LogFormat, LoggingConfig};
pub use root::{CliOverrides, Config};
pub use server::ServerConfig;
