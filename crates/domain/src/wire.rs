//! DNS message codec: header, question and answer sections.
//!
//! Pure functions only. Nothing here performs I/O or logs.
mod cursor;
mod errors;
pub mod header;
pub mod message;
pub mod name;
pub mod question;
pub mod record;
mod response_code;

pub use cursor::Cursor;
pub use errors::WireError;
pub use header::{split_header, Header, HeaderFlags, FLAGS_LEN, HEADER_LEN};
pub use message::{build_response, response_header, serialize, WireItem};
pub use name::{decode_domain, encode_name, validate_label, validate_name, MAX_LABEL_LEN};
pub use question::{decode_questions, Question};
pub use record::{parse_ipv4, ResourceRecord};
pub use response_code::ResponseCode;

/// Host address record type.
pub const TYPE_A: u16 = 1;
/// The Internet class.
pub const CLASS_IN: u16 = 1;
/// Largest message handled over UDP without EDNS0.
pub const MAX_UDP_PAYLOAD: usize = 512;
