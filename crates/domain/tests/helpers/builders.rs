#![allow(dead_code)]
use flipdns_domain::wire::{encode_name, Header, HeaderFlags, CLASS_IN, TYPE_A};

/// Builds raw query packets for codec tests.
pub struct QueryPacketBuilder {
    id: u16,
    flags: HeaderFlags,
    question_count: Option<u16>,
    body: Vec<u8>,
    questions: u16,
}

impl QueryPacketBuilder {
    pub fn new() -> Self {
        Self {
            id: 0x1234,
            flags: HeaderFlags {
                recursion_desired: true,
                ..HeaderFlags::default()
            },
            question_count: None,
            body: Vec::new(),
            questions: 0,
        }
    }

    pub fn id(mut self, id: u16) -> Self {
        self.id = id;
        self
    }

    pub fn flags(mut self, flags: HeaderFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Overrides QDCOUNT regardless of how many questions were added.
    pub fn question_count(mut self, count: u16) -> Self {
        self.question_count = Some(count);
        self
    }

    pub fn question(self, domain: &str) -> Self {
        self.question_with(domain, TYPE_A, CLASS_IN)
    }

    pub fn question_with(mut self, domain: &str, qtype: u16, qclass: u16) -> Self {
        let name = encode_name(domain).unwrap();
        self.body.extend_from_slice(&name);
        self.body.extend_from_slice(&qtype.to_be_bytes());
        self.body.extend_from_slice(&qclass.to_be_bytes());
        self.questions += 1;
        self
    }

    /// Appends raw bytes after the questions.
    pub fn raw(mut self, bytes: &[u8]) -> Self {
        self.body.extend_from_slice(bytes);
        self
    }

    pub fn build(self) -> Vec<u8> {
        let header = Header {
            id: self.id,
            flags: self.flags,
            question_count: self.question_count.unwrap_or(self.questions),
            ..Header::default()
        };
        let mut packet = header.encode();
        packet.extend_from_slice(&self.body);
        packet
    }
}

impl Default for QueryPacketBuilder {
    fn default() -> Self {
        Self::new()
    }
}
