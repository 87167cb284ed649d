#![allow(dead_code)]

use flipdns_domain::wire::{encode_name, split_header, Header, HeaderFlags, CLASS_IN, TYPE_A};

/// Encodes a recursion-desired A query for `domains`.
pub fn query_packet(id: u16, domains: &[&str]) -> Vec<u8> {
    let header = Header {
        id,
        flags: HeaderFlags {
            recursion_desired: true,
            ..HeaderFlags::default()
        },
        question_count: domains.len() as u16,
        ..Header::default()
    };

    let mut packet = header.encode();
    for domain in domains {
        packet.extend_from_slice(&encode_name(domain).unwrap());
        packet.extend_from_slice(&TYPE_A.to_be_bytes());
        packet.extend_from_slice(&CLASS_IN.to_be_bytes());
    }
    packet
}

pub fn response_header(bytes: &[u8]) -> Header {
    Header::decode(split_header(bytes).0).unwrap()
}

/// Splits the answer section of a response into (ttl, rdata) pairs.
///
/// Assumes the question section mirrors `query`.
pub fn answers(query: &[u8], response: &[u8]) -> Vec<(u32, Vec<u8>)> {
    let count = response_header(response).answer_count as usize;
    let mut rest = &response[query.len()..];
    let mut out = Vec::with_capacity(count);

    for _ in 0..count {
        let name_end = rest.iter().position(|&b| b == 0).unwrap() + 1;
        let fixed = &rest[name_end..name_end + 10];
        let ttl = u32::from_be_bytes([fixed[4], fixed[5], fixed[6], fixed[7]]);
        let rdlength = u16::from_be_bytes([fixed[8], fixed[9]]) as usize;
        let rdata = rest[name_end + 10..name_end + 10 + rdlength].to_vec();
        out.push((ttl, rdata));
        rest = &rest[name_end + 10 + rdlength..];
    }

    out
}
