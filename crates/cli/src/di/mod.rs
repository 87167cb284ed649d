mod dns;
mod stores;

pub use dns::DnsServices;
pub use stores::build_record_store;
