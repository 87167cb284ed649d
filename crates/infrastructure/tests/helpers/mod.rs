pub mod packets;
pub mod sinks;
pub mod slow_store;

pub use packets::*;
pub use sinks::*;
pub use slow_store::*;
