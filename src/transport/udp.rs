//! UDP transport for the name service

use super::NbnsTransport;
use crate::error::{Error, Result};
use async_trait::async_trait;
use bytes::{Bytes, BytesMut};
use std::net::SocketAddr;
use std::time::Duration;
use tokio::net::UdpSocket;
use tracing::debug;

/// Receive buffer size; larger than any legal datagram so oversize replies
/// reach the decoder intact and are rejected there
pub const RECV_BUFFER_SIZE: usize = 1024;

/// UDP transport bound to a local address
pub struct UdpTransport {
    bind_addr: SocketAddr,
    socket: Option<UdpSocket>,
    peer_addr: Option<SocketAddr>,
}

impl UdpTransport {
    pub fn new(bind_addr: SocketAddr) -> Self {
        Self {
            bind_addr,
            socket: None,
            peer_addr: None,
        }
    }

    fn socket(&self) -> Result<&UdpSocket> {
        self.socket.as_ref().ok_or_else(not_connected)
    }
}

fn not_connected() -> Error {
    Error::InvalidArgument("UDP transport is not connected".to_string())
}

#[async_trait]
impl NbnsTransport for UdpTransport {
    async fn connect(&mut self, peer: SocketAddr) -> Result<()> {
        if self.socket.is_none() {
            let socket = UdpSocket::bind(self.bind_addr).await.map_err(|e| {
                Error::TransportUnavailable(format!("bind {}: {}", self.bind_addr, e))
            })?;
            debug!("bound UDP socket on {:?}", socket.local_addr().ok());
            self.socket = Some(socket);
        }
        self.peer_addr = None;
        // The kernel drops datagrams from any other source once connected
        self.socket()?.connect(peer).await?;
        self.peer_addr = Some(peer);
        Ok(())
    }

    async fn send(&mut self, data: Bytes) -> Result<()> {
        let peer = self.peer_addr()?;
        let sent = self.socket()?.send(&data).await?;
        if sent != data.len() {
            return Err(Error::Io(std::io::Error::new(
                std::io::ErrorKind::WriteZero,
                format!("sent {} of {} bytes", sent, data.len()),
            )));
        }
        debug!("sent {} bytes to {}", sent, peer);
        Ok(())
    }

    async fn receive(&mut self, timeout: Duration) -> Result<BytesMut> {
        let peer = self.peer_addr()?;
        let socket = self.socket()?;
        let mut buf = BytesMut::zeroed(RECV_BUFFER_SIZE);

        let n = tokio::time::timeout(timeout, socket.recv(&mut buf))
            .await
            .map_err(|_| Error::Timeout(timeout.as_millis() as u64))??;

        buf.truncate(n);
        debug!("received {} bytes from {}", n, peer);
        Ok(buf)
    }

    fn is_connected(&self) -> bool {
        self.socket.is_some() && self.peer_addr.is_some()
    }

    async fn close(&mut self) -> Result<()> {
        self.socket = None;
        self.peer_addr = None;
        Ok(())
    }

    fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.socket()?.local_addr()?)
    }

    fn peer_addr(&self) -> Result<SocketAddr> {
        self.peer_addr.ok_or_else(not_connected)
    }
}
