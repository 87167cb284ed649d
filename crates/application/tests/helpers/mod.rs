pub mod mock_record_store;
pub mod packets;

pub use mock_record_store::*;
pub use packets::*;
