pub mod health;
pub mod records;
pub mod stats;

pub use health::health_check;
pub use records::get_record;
pub use stats::get_stats;
