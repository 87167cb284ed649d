use bytes::{BufMut, BytesMut};

use super::cursor::Cursor;
use super::WireError;

pub const HEADER_LEN: usize = 12;
pub const FLAGS_LEN: usize = 2;

const QR_SHIFT: u16 = 15;
const OPCODE_SHIFT: u16 = 11;
const AA_SHIFT: u16 = 10;
const TC_SHIFT: u16 = 9;
const RD_SHIFT: u16 = 8;
const RA_SHIFT: u16 = 7;
const Z_SHIFT: u16 = 4;

/// The 16-bit flag word of a DNS header, unpacked.
///
/// Wire layout, most significant bit first:
/// `QR(1) OPCODE(4) AA(1) TC(1) RD(1) RA(1) Z(3) RCODE(4)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderFlags {
    pub is_response: bool,
    pub opcode: u8,
    pub authoritative_answer: bool,
    pub truncated: bool,
    pub recursion_desired: bool,
    pub recursion_available: bool,
    pub reserved: u8,
    pub response_code: u8,
}

impl HeaderFlags {
    pub fn decode(buf: &[u8]) -> Result<Self, WireError> {
        if buf.len() != FLAGS_LEN {
            return Err(WireError::InvalidFlagsLength(buf.len()));
        }
        Ok(Self::from_word(u16::from_be_bytes([buf[0], buf[1]])))
    }

    pub fn from_word(word: u16) -> Self {
        let bit = |shift: u16| (word >> shift) & 1 == 1;
        Self {
            is_response: bit(QR_SHIFT),
            opcode: ((word >> OPCODE_SHIFT) & 0x0F) as u8,
            authoritative_answer: bit(AA_SHIFT),
            truncated: bit(TC_SHIFT),
            recursion_desired: bit(RD_SHIFT),
            recursion_available: bit(RA_SHIFT),
            reserved: ((word >> Z_SHIFT) & 0x07) as u8,
            response_code: (word & 0x0F) as u8,
        }
    }

    pub fn to_word(&self) -> u16 {
        (self.is_response as u16) << QR_SHIFT
            | (self.opcode as u16 & 0x0F) << OPCODE_SHIFT
            | (self.authoritative_answer as u16) << AA_SHIFT
            | (self.truncated as u16) << TC_SHIFT
            | (self.recursion_desired as u16) << RD_SHIFT
            | (self.recursion_available as u16) << RA_SHIFT
            | (self.reserved as u16 & 0x07) << Z_SHIFT
            | (self.response_code as u16 & 0x0F)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Header {
    /// Opaque correlation token, echoed verbatim into the response.
    pub id: u16,
    pub flags: HeaderFlags,
    pub question_count: u16,
    pub answer_count: u16,
    pub authority_count: u16,
    pub additional_count: u16,
}

impl Header {
    pub fn decode(buf: &[u8]) -> Result<Self, WireError> {
        if buf.len() != HEADER_LEN {
            return Err(WireError::InvalidHeaderLength(buf.len()));
        }

        let mut cursor = Cursor::new(buf);
        let id = cursor.read_u16().ok_or(WireError::BufferTooShort)?;
        let flags = HeaderFlags::decode(cursor.take(FLAGS_LEN).ok_or(WireError::BufferTooShort)?)?;
        let question_count = cursor.read_u16().ok_or(WireError::BufferTooShort)?;
        let answer_count = cursor.read_u16().ok_or(WireError::BufferTooShort)?;
        let authority_count = cursor.read_u16().ok_or(WireError::BufferTooShort)?;
        let additional_count = cursor.read_u16().ok_or(WireError::BufferTooShort)?;

        Ok(Self {
            id,
            flags,
            question_count,
            answer_count,
            authority_count,
            additional_count,
        })
    }

    /// Best-effort header for a packet whose header could not be decoded.
    ///
    /// Keeps the id and flag word when enough bytes arrived; every count is
    /// zero.
    pub fn salvage(packet: &[u8]) -> Self {
        let id = match packet {
            [hi, lo, ..] => u16::from_be_bytes([*hi, *lo]),
            _ => 0,
        };
        let flags = match packet {
            [_, _, hi, lo, ..] => HeaderFlags::from_word(u16::from_be_bytes([*hi, *lo])),
            _ => HeaderFlags::default(),
        };
        Self {
            id,
            flags,
            ..Self::default()
        }
    }

    pub fn encode_into(&self, out: &mut BytesMut) {
        out.put_u16(self.id);
        out.put_u16(self.flags.to_word());
        out.put_u16(self.question_count);
        out.put_u16(self.answer_count);
        out.put_u16(self.authority_count);
        out.put_u16(self.additional_count);
    }

    pub fn encode(&self) -> Vec<u8> {
        let mut out = BytesMut::with_capacity(HEADER_LEN);
        self.encode_into(&mut out);
        out.to_vec()
    }
}

/// Splits a packet into its header bytes and the remainder.
///
/// Packets shorter than a header come back whole so that
/// [`Header::decode`] reports the real length.
pub fn split_header(packet: &[u8]) -> (&[u8], &[u8]) {
    if packet.len() >= HEADER_LEN {
        packet.split_at(HEADER_LEN)
    } else {
        (packet, &[])
    }
}
