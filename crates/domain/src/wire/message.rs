use bytes::{Bytes, BytesMut};

use super::header::{Header, HeaderFlags, HEADER_LEN};
use super::question::Question;
use super::record::ResourceRecord;
use super::{ResponseCode, WireError};

/// One piece of a serialized message.
#[derive(Debug, Clone, Copy)]
pub enum WireItem<'a> {
    Header(&'a Header),
    Question(&'a Question),
    Answer(&'a ResourceRecord),
}

impl WireItem<'_> {
    pub fn encoded_len(&self) -> usize {
        match self {
            WireItem::Header(_) => HEADER_LEN,
            WireItem::Question(q) => q.encoded_len(),
            WireItem::Answer(rr) => rr.encoded_len(),
        }
    }

    pub fn encode_into(&self, out: &mut BytesMut) {
        match self {
            WireItem::Header(h) => h.encode_into(out),
            WireItem::Question(q) => q.encode_into(out),
            WireItem::Answer(rr) => rr.encode_into(out),
        }
    }
}

/// Concatenates the encodings of `items` in order, with no separators.
pub fn serialize(items: &[WireItem<'_>]) -> Bytes {
    let capacity = items.iter().map(WireItem::encoded_len).sum();
    let mut out = BytesMut::with_capacity(capacity);
    for item in items {
        item.encode_into(&mut out);
    }
    out.freeze()
}

/// Derives the response header for `query`.
pub fn response_header(
    query: &Header,
    response_code: ResponseCode,
    question_count: u16,
    answer_count: u16,
) -> Header {
    Header {
        id: query.id,
        flags: HeaderFlags {
            is_response: true,
            opcode: query.flags.opcode,
            authoritative_answer: true,
            truncated: false,
            recursion_desired: query.flags.recursion_desired,
            recursion_available: false,
            reserved: 0,
            response_code: response_code.as_u8(),
        },
        question_count,
        answer_count,
        authority_count: 0,
        additional_count: 0,
    }
}

/// Assembles a complete response packet: header, echoed questions, answers.
///
/// This is the only response path; success and every error differ just in
/// `response_code` and whether `answers` is empty.
pub fn build_response(
    query: &Header,
    questions: &[Question],
    answers: &[ResourceRecord],
    response_code: ResponseCode,
) -> Result<Bytes, WireError> {
    let question_count = section_count("question", questions.len())?;
    let answer_count = section_count("answer", answers.len())?;
    let header = response_header(query, response_code, question_count, answer_count);

    let mut items = Vec::with_capacity(1 + questions.len() + answers.len());
    items.push(WireItem::Header(&header));
    items.extend(questions.iter().map(WireItem::Question));
    items.extend(answers.iter().map(WireItem::Answer));

    Ok(serialize(&items))
}

fn section_count(section: &'static str, count: usize) -> Result<u16, WireError> {
    u16::try_from(count).map_err(|_| WireError::TooManyRecords { section, count })
}
