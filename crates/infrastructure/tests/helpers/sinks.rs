#![allow(dead_code)]

use async_trait::async_trait;
use flipdns_infrastructure::dns::DatagramSink;
use std::io;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicU64, Ordering};

/// Sink whose every send fails, counting the attempts.
#[derive(Default)]
pub struct FailingSink {
    attempts: AtomicU64,
}

impl FailingSink {
    pub fn attempts(&self) -> u64 {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DatagramSink for FailingSink {
    async fn send_datagram(&self, _buf: &[u8], _peer: SocketAddr) -> io::Result<usize> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(io::Error::new(io::ErrorKind::ConnectionRefused, "peer unreachable"))
    }
}
