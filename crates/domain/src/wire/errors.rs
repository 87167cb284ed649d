use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum WireError {
    #[error("Invalid DNS header length: must be 12 bytes, got {0}")]
    InvalidHeaderLength(usize),

    #[error("Invalid DNS flags length: must be 2 bytes, got {0}")]
    InvalidFlagsLength(usize),

    #[error("Buffer too short")]
    BufferTooShort,

    #[error("Invalid QNAME: label length runs past the encoded name")]
    InvalidQName,

    #[error("Invalid QNAME: no domain name could be parsed")]
    EmptyQName,

    #[error("Invalid DNS label")]
    InvalidLabel,

    #[error("Invalid IPv4 address for A record: {0}")]
    InvalidAddress(String),

    #[error("Too many records in {section} section: {count}")]
    TooManyRecords { section: &'static str, count: usize },
}
