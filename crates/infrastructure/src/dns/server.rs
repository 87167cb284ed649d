use bytes::Bytes;
use flipdns_application::services::QueryMetrics;
use flipdns_application::use_cases::ProcessQueryUseCase;
use std::net::SocketAddr;
use std::sync::Arc;
use tracing::debug;

/// Turns one received datagram into the response to send back.
#[derive(Clone)]
pub struct DnsServerHandler {
    processor: Arc<ProcessQueryUseCase>,
    metrics: Arc<QueryMetrics>,
}

impl DnsServerHandler {
    pub fn new(processor: Arc<ProcessQueryUseCase>, metrics: Arc<QueryMetrics>) -> Self {
        Self { processor, metrics }
    }

    pub fn metrics(&self) -> &Arc<QueryMetrics> {
        &self.metrics
    }

    pub async fn handle_datagram(&self, packet: &[u8], peer: SocketAddr) -> Bytes {
        let processed = self.processor.execute(packet).await;
        self.metrics.record(processed.response_code);

        debug!(
            addr = %peer,
            id = processed.id,
            rcode = %processed.response_code,
            answers = processed.answer_count,
            bytes = processed.bytes.len(),
            "Query answered"
        );

        processed.bytes
    }
}
