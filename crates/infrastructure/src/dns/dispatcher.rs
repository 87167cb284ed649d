use super::DnsServerHandler;
use async_trait::async_trait;
use flipdns_application::services::QueryMetrics;
use flipdns_domain::wire::MAX_UDP_PAYLOAD;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::UdpSocket;
use tokio::sync::Semaphore;
use tracing::{debug, error, info, warn};

const RECV_BACKOFF_BASE: Duration = Duration::from_millis(10);
const RECV_BACKOFF_MAX: Duration = Duration::from_secs(1);

/// Write half of the DNS socket as seen by a dispatch task.
#[async_trait]
pub trait DatagramSink: Send + Sync {
    async fn send_datagram(&self, buf: &[u8], peer: SocketAddr) -> io::Result<usize>;
}

#[async_trait]
impl DatagramSink for UdpSocket {
    async fn send_datagram(&self, buf: &[u8], peer: SocketAddr) -> io::Result<usize> {
        self.send_to(buf, peer).await
    }
}

/// Owns the DNS socket: one receive loop, one spawned task per datagram.
pub struct UdpDispatcher {
    socket: Arc<UdpSocket>,
    handler: DnsServerHandler,
    in_flight: Option<Arc<Semaphore>>,
}

impl UdpDispatcher {
    pub fn new(socket: UdpSocket, handler: DnsServerHandler) -> Self {
        Self {
            socket: Arc::new(socket),
            handler,
            in_flight: None,
        }
    }

    /// Caps the number of queries processed at once. Datagrams arriving while
    /// the cap is reached are dropped.
    pub fn with_in_flight_limit(mut self, limit: Option<usize>) -> Self {
        self.in_flight = limit.map(|n| Arc::new(Semaphore::new(n)));
        self
    }

    pub fn local_addr(&self) -> io::Result<SocketAddr> {
        self.socket.local_addr()
    }

    /// Serves until the task is cancelled.
    pub async fn run(self) {
        if let Ok(addr) = self.socket.local_addr() {
            info!(addr = %addr, "DNS server listening");
        }

        let mut recv_buf = [0u8; MAX_UDP_PAYLOAD];
        let mut consecutive_errors: u32 = 0;

        loop {
            let (n, peer) = match self.socket.recv_from(&mut recv_buf).await {
                Ok(received) => {
                    consecutive_errors = 0;
                    received
                }
                Err(e) => {
                    consecutive_errors = consecutive_errors.saturating_add(1);
                    let backoff = recv_backoff(consecutive_errors);
                    error!(error = %e, consecutive_errors, backoff_ms = backoff.as_millis() as u64, "UDP recv error");
                    tokio::time::sleep(backoff).await;
                    continue;
                }
            };

            debug!(bytes = n, addr = %peer, "Datagram received");

            let permit = match &self.in_flight {
                Some(semaphore) => match Arc::clone(semaphore).try_acquire_owned() {
                    Ok(permit) => Some(permit),
                    Err(_) => {
                        warn!(addr = %peer, "In-flight limit reached, dropping query");
                        self.handler.metrics().record_dropped();
                        continue;
                    }
                },
                None => None,
            };

            let packet = recv_buf[..n].to_vec();
            let socket = Arc::clone(&self.socket);
            let handler = self.handler.clone();

            tokio::spawn(async move {
                let _permit = permit;
                let response = handler.handle_datagram(&packet, peer).await;
                send_response(&*socket, handler.metrics(), &response, peer).await;
            });
        }
    }
}

/// Pause before the next read after `consecutive_errors` failed reads in a
/// row. Doubles from 10ms and stops growing at one second.
fn recv_backoff(consecutive_errors: u32) -> Duration {
    let exponent = consecutive_errors.saturating_sub(1).min(16);
    RECV_BACKOFF_BASE
        .saturating_mul(1u32 << exponent)
        .min(RECV_BACKOFF_MAX)
}

/// One send attempt; a failure is logged and counted, never retried.
pub async fn send_response<S>(sink: &S, metrics: &QueryMetrics, response: &[u8], peer: SocketAddr)
where
    S: DatagramSink + ?Sized,
{
    match sink.send_datagram(response, peer).await {
        Ok(sent) => debug!(bytes = sent, addr = %peer, "Response sent"),
        Err(e) => {
            metrics.record_send_failure();
            warn!(error = %e, addr = %peer, "Failed to send response");
        }
    }
}
