#![allow(dead_code)]

use flipdns_domain::wire::{encode_name, split_header, Header, HeaderFlags, CLASS_IN, TYPE_A};

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
