use bytes::{BufMut, BytesMut};
use std::sync::Arc;

use super::cursor::Cursor;
use super::name::{decode_domain, encode_name, validate_name};
use super::WireError;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Question {
    /// Encoded QNAME exactly as received, echoed back in responses.
    pub name: Vec<u8>,
    /// Dotted form of `name`, used for lookups.
    pub domain: Arc<str>,
    pub qtype: u16,
    pub qclass: u16,
}

impl Question {
    pub fn new(domain: &str, qtype: u16, qclass: u16) -> Result<Self, WireError> {
        let name = encode_name(domain)?;
        let domain = decode_domain(&name)?;
        Ok(Self {
            name,
            domain: domain.into(),
            qtype,
            qclass,
        })
    }

    pub fn encoded_len(&self) -> usize {
        self.name.len() + 4
    }

    pub fn encode_into(&self, out: &mut BytesMut) {
        out.put_slice(&self.name);
        out.put_u16(self.qtype);
        out.put_u16(self.qclass);
    }
}

/// Parses `count` question entries from the bytes following the header.
///
/// Exactly `count` entries are read; anything after the last one (additional
/// records, OPT) is ignored.
pub fn decode_questions(buf: &[u8], count: u16) -> Result<Vec<Question>, WireError> {
    if count == 0 || buf.is_empty() {
        return Err(WireError::BufferTooShort);
    }

    let mut cursor = Cursor::new(buf);
    let mut questions = Vec::with_capacity(count as usize);

    for _ in 0..count {
        let name = cursor.take_through_zero().ok_or(WireError::BufferTooShort)?;
        let domain = decode_domain(name)?;
        validate_name(name)?;

        let qtype = cursor.read_u16().ok_or(WireError::BufferTooShort)?;
        let qclass = cursor.read_u16().ok_or(WireError::BufferTooShort)?;

        questions.push(Question {
            name: name.to_vec(),
            domain: domain.into(),
            qtype,
            qclass,
        });
    }

    Ok(questions)
}
