//! Node status client
//!
//! Sends one NBSTAT query to a numeric IPv4 target and decodes the reply.

use crate::error::{Error, Result};
use crate::protocol::constants::NBNS_PORT;
use crate::protocol::messages::{decode_response, NodeStatusRequest};
use crate::status::NodeStatus;
use crate::transport::{NbnsTransport, UdpTransport};
use std::io;
use std::net::{Ipv4Addr, SocketAddr};
use std::time::Duration;
use tracing::{debug, info, warn};

/// Response window used when none or an out-of-range one is given
pub const DEFAULT_TIMEOUT_MS: u64 = 3000;

/// Longest response window accepted
pub const MAX_TIMEOUT_MS: u64 = 10000;

/// Node status client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Destination port on the target
    pub port: u16,
    /// How long to wait for the response datagram
    pub timeout: Duration,
    /// Local address the UDP socket binds to
    pub bind_addr: SocketAddr,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            port: NBNS_PORT,
            timeout: Duration::from_millis(DEFAULT_TIMEOUT_MS),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 0)),
        }
    }
}

impl ClientConfig {
    /// Set the response window in milliseconds.
    ///
    /// Values of zero or less, or above ten seconds, fall back to the
    /// three second default.
    pub fn with_timeout_ms(mut self, timeout_ms: i64) -> Self {
        self.timeout = Duration::from_millis(clamp_timeout_ms(timeout_ms));
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_bind_addr(mut self, bind_addr: SocketAddr) -> Self {
        self.bind_addr = bind_addr;
        self
    }
}

pub fn clamp_timeout_ms(timeout_ms: i64) -> u64 {
    if timeout_ms <= 0 || timeout_ms > MAX_TIMEOUT_MS as i64 {
        DEFAULT_TIMEOUT_MS
    } else {
        timeout_ms as u64
    }
}

/// Transaction id for outgoing queries, derived from the process id
pub fn transaction_id() -> u16 {
    std::process::id() as u16
}

/// Parse a numeric IPv4 target; host names are not resolved
pub fn resolve_target(target: &str, port: u16) -> Result<SocketAddr> {
    let ip: Ipv4Addr = target.trim().parse().map_err(|_| {
        Error::Io(io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("'{}' is not a numeric IPv4 address", target),
        ))
    })?;
    Ok(SocketAddr::from((ip, port)))
}

/// Client issuing node status queries over a datagram transport
pub struct NodeStatusClient<T: NbnsTransport = UdpTransport> {
    config: ClientConfig,
    transport: T,
}

impl NodeStatusClient<UdpTransport> {
    pub fn new() -> Self {
        Self::with_config(ClientConfig::default())
    }

    pub fn with_config(config: ClientConfig) -> Self {
        let transport = UdpTransport::new(config.bind_addr);
        Self { config, transport }
    }
}

impl Default for NodeStatusClient<UdpTransport> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: NbnsTransport> NodeStatusClient<T> {
    pub fn with_transport(config: ClientConfig, transport: T) -> Self {
        Self { config, transport }
    }

    pub fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Query the name table of `target`
    pub async fn query(&mut self, target: &str) -> Result<NodeStatus> {
        let peer = resolve_target(target, self.config.port)?;
        self.query_addr(peer).await
    }

    /// Query the name table of the host at `peer`
    pub async fn query_addr(&mut self, peer: SocketAddr) -> Result<NodeStatus> {
        info!("Querying node status of {}", peer);

        let request = NodeStatusRequest::new(transaction_id());
        let datagram = request.encode();

        self.transport.connect(peer).await?;
        let exchange = self.exchange(datagram).await;
        self.transport.close().await?;
        let response = exchange?;

        let decoded = decode_response(&response)?;
        if decoded.header.flags.truncated() {
            warn!("{} set the truncation flag; name table may be partial", peer);
        }
        if decoded.header.transaction_id != request.header.transaction_id {
            debug!(
                "transaction id 0x{:04x} does not echo 0x{:04x}",
                decoded.header.transaction_id, request.header.transaction_id
            );
        }

        let status = NodeStatus::from_response(peer, decoded);
        info!("{} reported {} names, MAC {}", peer, status.len(), status.mac());
        Ok(status)
    }

    async fn exchange(&mut self, datagram: bytes::Bytes) -> Result<bytes::BytesMut> {
        self.transport.send(datagram).await?;
        debug!("waiting up to {:?} for response", self.config.timeout);
        self.transport.receive(self.config.timeout).await
    }
}
