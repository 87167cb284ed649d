pub mod health;
pub mod record;

pub use health::HealthResponse;
pub use record::RecordResponse;
