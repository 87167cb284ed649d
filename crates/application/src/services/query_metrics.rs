use flipdns_domain::ResponseCode;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Per-outcome query counters, updated from every dispatch task.
#[derive(Debug, Default)]
pub struct QueryMetrics {
    total: AtomicU64,
    no_error: AtomicU64,
    format_error: AtomicU64,
    server_fail: AtomicU64,
    name_error: AtomicU64,
    dropped: AtomicU64,
    send_failures: AtomicU64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QueryMetricsSnapshot {
    pub total: u64,
    pub no_error: u64,
    pub format_error: u64,
    pub server_fail: u64,
    pub name_error: u64,
    pub dropped: u64,
    pub send_failures: u64,
}

impl QueryMetrics {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&self, response_code: ResponseCode) {
        self.total.fetch_add(1, Ordering::Relaxed);
        let counter = match response_code {
            ResponseCode::NoError => &self.no_error,
            ResponseCode::FormatError => &self.format_error,
            ResponseCode::ServerFail => &self.server_fail,
            ResponseCode::NameError => &self.name_error,
        };
        counter.fetch_add(1, Ordering::Relaxed);
    }

    /// A datagram discarded before processing because the in-flight limit was hit.
    pub fn record_dropped(&self) {
        self.dropped.fetch_add(1, Ordering::Relaxed);
    }

    pub fn record_send_failure(&self) {
        self.send_failures.fetch_add(1, Ordering::Relaxed);
    }

    pub fn snapshot(&self) -> QueryMetricsSnapshot {
        QueryMetricsSnapshot {
            total: self.total.load(Ordering::Relaxed),
            no_error: self.no_error.load(Ordering::Relaxed),
            format_error: self.format_error.load(Ordering::Relaxed),
            server_fail: self.server_fail.load(Ordering::Relaxed),
            name_error: self.name_error.load(Ordering::Relaxed),
            dropped: self.dropped.load(Ordering::Relaxed),
            send_failures: self.send_failures.load(Ordering::Relaxed),
        }
    }
}
