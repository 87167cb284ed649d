pub mod dispatcher;
pub mod server;
pub mod socket;

pub use dispatcher::{send_response, DatagramSink, UdpDispatcher};
pub use server::DnsServerHandler;
pub use socket::create_udp_socket;
