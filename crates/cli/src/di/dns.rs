use flipdns_application::ports::RecordStore;
use flipdns_application::services::QueryMetrics;
use flipdns_application::use_cases::{ProcessQueryUseCase, ResolveQuestionsUseCase};
use flipdns_domain::Config;
use flipdns_infrastructure::dns::DnsServerHandler;
use std::sync::Arc;
use tracing::info;

pub struct DnsServices {
    pub handler: DnsServerHandler,
    pub metrics: Arc<QueryMetrics>,
}

impl DnsServices {
    pub fn new(config: &Config, store: Arc<dyn RecordStore>) -> Self {
        let lookup_timeout = config.server.lookup_timeout();
        info!(lookup_timeout_ms = config.server.lookup_timeout_ms, "Initializing DNS services");

        let resolver = ResolveQuestionsUseCase::new(store).with_lookup_timeout(lookup_timeout);
        let processor = Arc::new(ProcessQueryUseCase::new(resolver));
        let metrics = Arc::new(QueryMetrics::new());

        Self {
            handler: DnsServerHandler::new(processor, metrics.clone()),
            metrics,
        }
    }
}
