use flipdns_application::ports::RecordStore;
use flipdns_application::services::QueryMetrics;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn RecordStore>,
    pub metrics: Arc<QueryMetrics>,
}
