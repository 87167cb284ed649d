use flipdns_domain::Config;
use flipdns_infrastructure::dns::{create_udp_socket, DnsServerHandler, UdpDispatcher};
use std::net::SocketAddr;
use tracing::info;

pub fn bind_dns_server(config: &Config, handler: DnsServerHandler) -> anyhow::Result<UdpDispatcher> {
    let socket_addr: SocketAddr = config.server.dns_addr().parse()?;
    let in_flight = config.server.in_flight_limit();

    info!(bind_address = %socket_addr, max_in_flight = ?in_flight, "Starting DNS server");

    let socket = create_udp_socket(socket_addr)
        .map_err(|e| anyhow::anyhow!("failed to bind DNS socket {}: {}", socket_addr, e))?;

    Ok(UdpDispatcher::new(socket, handler).with_in_flight_limit(in_flight))
}
