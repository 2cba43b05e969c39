//! Transport layer for the name service
//!
//! The codec in [`crate::protocol`] never touches a socket. This module moves
//! encoded datagrams between the client and a peer over tokio UDP.

use crate::error::Result;
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use std::net::SocketAddr;
use std::time::Duration;

pub mod udp;

pub use udp::UdpTransport;

/// Datagram transport for name service exchanges
#[async_trait]
pub trait NbnsTransport: Send + Sync {
    /// Bind the local socket and connect it to `peer`; only datagrams from
    /// `peer` are received afterwards
    async fn connect(&mut self, peer: SocketAddr) -> Result<()>;

    /// Send one datagram to the peer
    async fn send(&mut self, data: Bytes) -> Result<()>;

    /// Wait up to `timeout` for one datagram from the peer
    async fn receive(&mut self, timeout: Duration) -> Result<BytesMut>;

    fn is_connected(&self) -> bool;

    /// Release the socket
    async fn close(&mut self) -> Result<()>;

    fn local_addr(&self) -> Result<SocketAddr>;

    fn peer_addr(&self) -> Result<SocketAddr>;
}
