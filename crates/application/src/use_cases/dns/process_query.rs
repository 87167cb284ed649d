use super::ResolveQuestionsUseCase;
use bytes::Bytes;
use flipdns_domain::wire::{
    build_response, decode_questions, response_header, serialize, split_header, Header, WireItem,
};
use flipdns_domain::{DomainError, Question, ResourceRecord, ResponseCode, WireError};
use tracing::{debug, warn};

/// Outcome of processing one datagram: the bytes to send back and what they say.
#[derive(Debug, Clone)]
pub struct ProcessedQuery {
    pub id: u16,
    pub response_code: ResponseCode,
    pub answer_count: usize,
    pub bytes: Bytes,
}

/// Drives a query through decode, resolve and build.
///
/// Every failure up to and including response assembly becomes a response
/// code here, so a caller always gets bytes to send.
pub struct ProcessQueryUseCase {
    resolver: ResolveQuestionsUseCase,
}

impl ProcessQueryUseCase {
    pub fn new(resolver: ResolveQuestionsUseCase) -> Self {
        Self { resolver }
    }

    pub async fn execute(&self, packet: &[u8]) -> ProcessedQuery {
        let (header, questions) = match parse(packet) {
            Ok(parsed) => parsed,
            Err((header, e)) => {
                debug!(error = %e, bytes = packet.len(), id = header.id, "Malformed query");
                return respond(&header, &[], &[], ResponseCode::FormatError);
            }
        };

        match self.resolver.execute(&questions).await {
            Ok(answers) => respond(&header, &questions, &answers, ResponseCode::NoError),
            Err(e) => {
                let response_code = resolution_failure_code(&e);
                if e.is_not_found() {
                    debug!(error = %e, id = header.id, "No record for query");
                } else {
                    warn!(error = %e, id = header.id, "Query resolution failed");
                }
                respond(&header, &questions, &[], response_code)
            }
        }
    }
}

/// Response code for a failed resolution.
pub fn resolution_failure_code(error: &DomainError) -> ResponseCode {
    if error.is_not_found() {
        ResponseCode::NameError
    } else {
        ResponseCode::ServerFail
    }
}

type ParseFailure = (Header, WireError);

fn parse(packet: &[u8]) -> Result<(Header, Vec<Question>), ParseFailure> {
    let (head, body) = split_header(packet);
    let header = Header::decode(head).map_err(|e| (Header::salvage(packet), e))?;
    let questions = decode_questions(body, header.question_count).map_err(|e| (header, e))?;
    Ok((header, questions))
}

fn respond(
    header: &Header,
    questions: &[Question],
    answers: &[ResourceRecord],
    response_code: ResponseCode,
) -> ProcessedQuery {
    match build_response(header, questions, answers, response_code) {
        Ok(bytes) => ProcessedQuery {
            id: header.id,
            response_code,
            answer_count: answers.len(),
            bytes,
        },
        Err(e) => {
            warn!(error = %e, id = header.id, "Response assembly failed");
            let fallback = response_header(header, ResponseCode::ServerFail, 0, 0);
            ProcessedQuery {
                id: header.id,
                response_code: ResponseCode::ServerFail,
                answer_count: 0,
                bytes: serialize(&[WireItem::Header(&fallback)]),
            }
        }
    }
}
