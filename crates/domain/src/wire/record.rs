use bytes::{BufMut, BytesMut};

use super::name::validate_name;
use super::{WireError, CLASS_IN, TYPE_A};

/// An answer-section resource record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceRecord {
    /// Encoded owner name.
    pub name: Vec<u8>,
    pub rtype: u16,
    pub class: u16,
    pub ttl: u32,
    pub rdata: Vec<u8>,
}

impl ResourceRecord {
    /// Builds an `IN A` record for `owner`.
    ///
    /// The owner name is re-validated and `address` must be a dotted quad.
    pub fn a_record(owner: &[u8], address: &str, ttl: u32) -> Result<Self, WireError> {
        validate_name(owner)?;
        let octets = parse_ipv4(address)?;

        Ok(Self {
            name: owner.to_vec(),
            rtype: TYPE_A,
            class: CLASS_IN,
            ttl,
            rdata: octets.to_vec(),
        })
    }

    pub fn rdlength(&self) -> u16 {
        self.rdata.len() as u16
    }

    pub fn encoded_len(&self) -> usize {
        self.name.len() + 10 + self.rdata.len()
    }

    pub fn encode_into(&self, out: &mut BytesMut) {
        out.put_slice(&self.name);
        out.put_u16(self.rtype);
        out.put_u16(self.class);
        out.put_u32(self.ttl);
        out.put_u16(self.rdlength());
        out.put_slice(&self.rdata);
    }
}

/// Parses exactly four dot-separated decimal octets (0–255).
pub fn parse_ipv4(address: &str) -> Result<[u8; 4], WireError> {
    let invalid = || WireError::InvalidAddress(address.to_string());

    let mut octets = [0u8; 4];
    let mut parts = address.split('.');

    for octet in octets.iter_mut() {
        let part = parts.next().ok_or_else(invalid)?;
        if part.is_empty() || part.len() > 3 || !part.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid());
        }
        *octet = part.parse::<u8>().map_err(|_| invalid())?;
    }

    if parts.next().is_some() {
        return Err(invalid());
    }

    Ok(octets)
}
