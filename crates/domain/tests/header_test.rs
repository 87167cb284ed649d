use flipdns_domain::wire::{split_header, Header, HeaderFlags, WireError, HEADER_LEN};

#[test]
fn test_header_roundtrip_every_flag_word() {
    for word in 0..=u16::MAX {
        let header = Header {
            id: word.rotate_left(7),
            flags: HeaderFlags::from_word(word),
            question_count: 1,
            answer_count: word,
            authority_count: 0,
            additional_count: u16::MAX - word,
        };

        let encoded = header.encode();
        assert_eq!(encoded.len(), HEADER_LEN);
        assert_eq!(&encoded[2..4], &word.to_be_bytes());
        assert_eq!(Header::decode(&encoded).unwrap(), header);
    }
}

#[test]
fn test_flags_bit_layout() {
    let flags = HeaderFlags::from_word(0b1_0010_1_0_1_1_010_0011);

    assert!(flags.is_response);
    assert_eq!(flags.opcode, 0b0010);
    assert!(flags.authoritative_answer);
    assert!(!flags.truncated);
    assert!(flags.recursion_desired);
    assert!(flags.recursion_available);
    assert_eq!(flags.reserved, 0b010);
    assert_eq!(flags.response_code, 0b0011);
}

#[test]
fn test_flags_to_word_masks_oversized_fields() {
    let flags = HeaderFlags {
        opcode: 0xFF,
        reserved: 0xFF,
        response_code: 0xFF,
        ..HeaderFlags::default()
    };

    assert_eq!(flags.to_word(), 0b0_1111_0_0_0_0_111_1111);
}

#[test]
fn test_header_fields_are_big_endian() {
    let buf = [0xAB, 0xCD, 0x01, 0x00, 0x00, 0x02, 0x00, 0x03, 0x00, 0x04, 0x01, 0x05];
    let header = Header::decode(&buf).unwrap();

    assert_eq!(header.id, 0xABCD);
    assert!(header.flags.recursion_desired);
    assert_eq!(header.question_count, 2);
    assert_eq!(header.answer_count, 3);
    assert_eq!(header.authority_count, 4);
    assert_eq!(header.additional_count, 0x0105);
}

#[test]
fn test_header_rejects_wrong_length() {
    assert_eq!(
        Header::decode(&[0u8; 11]),
        Err(WireError::InvalidHeaderLength(11))
    );
    assert_eq!(
        Header::decode(&[0u8; 13]),
        Err(WireError::InvalidHeaderLength(13))
    );
    assert_eq!(Header::decode(&[]), Err(WireError::InvalidHeaderLength(0)));
}

#[test]
fn test_flags_reject_wrong_length() {
    assert_eq!(
        HeaderFlags::decode(&[0x01]),
        Err(WireError::InvalidFlagsLength(1))
    );
    assert_eq!(
        HeaderFlags::decode(&[0x01, 0x00, 0x00]),
        Err(WireError::InvalidFlagsLength(3))
    );
    assert!(HeaderFlags::decode(&[0x01, 0x00]).unwrap().recursion_desired);
}

#[test]
fn test_salvage_keeps_id_and_flags() {
    let header = Header::salvage(&[0xBE, 0xEF, 0x01, 0x00, 0x00]);
    assert_eq!(header.id, 0xBEEF);
    assert!(header.flags.recursion_desired);
    assert_eq!(header.question_count, 0);

    let header = Header::salvage(&[0xBE]);
    assert_eq!(header, Header::default());
}

#[test]
fn test_split_header() {
    let packet = [7u8; 20];
    let (head, rest) = split_header(&packet);
    assert_eq!(head.len(), HEADER_LEN);
    assert_eq!(rest.len(), 8);

    let (head, rest) = split_header(&packet[..5]);
    assert_eq!(head.len(), 5);
    assert!(rest.is_empty());
}
