//! Loopback name service peer
//!
//! Listens on an ephemeral UDP port on localhost, validates the incoming
//! node status request and answers according to its configured behavior.

use crate::error::{Error, Result};
use crate::netbios::{decode_wire_name, NETBIOS_NAME_LEN};
use crate::protocol::messages::{
    NbnsMessage, NodeName, NodeStatusRequest, NodeStatusResponse, Statistics,
};
use bytes::Bytes;
use std::net::SocketAddr;
use tokio::net::UdpSocket;
use tokio::task::JoinHandle;

/// How the responder answers a request
#[derive(Debug, Clone)]
pub enum ResponderBehavior {
    /// Reply with a well-formed name table echoing the transaction id
    NameTable {
        names: Vec<NodeName>,
        statistics: Statistics,
    },
    /// Reply with these bytes verbatim
    Raw(Bytes),
    /// Read the request and never answer
    Silent,
    /// Stay silent and send a well-formed name table from another socket
    ForgedSource { names: Vec<NodeName> },
}

/// A spawned loopback peer
pub struct Responder {
    addr: SocketAddr,
    task: JoinHandle<Result<NodeStatusRequest>>,
}

impl Responder {
    /// Bind to localhost and serve exactly one request
    pub async fn spawn(behavior: ResponderBehavior) -> Result<Self> {
        let socket = UdpSocket::bind("127.0.0.1:0").await?;
        let addr = socket.local_addr()?;

        let task = tokio::spawn(async move {
            let mut buf = [0u8; 1024];
            let (n, from) = socket.recv_from(&mut buf).await?;
            let request = NodeStatusRequest::parse(&buf[..n])?;

            let name = decode_wire_name(&request.question.name)?;
            let mut wildcard = [0u8; NETBIOS_NAME_LEN];
            wildcard[0] = b'*';
            if name != wildcard {
                return Err(Error::Protocol("Query is not for the wildcard name".into()));
            }

            let reply = match behavior {
                ResponderBehavior::NameTable { names, statistics } => {
                    NodeStatusResponse::new(request.header.transaction_id, names, statistics)?
                        .serialize()?
                }
                ResponderBehavior::Raw(bytes) => bytes,
                ResponderBehavior::Silent => return Ok(request),
                ResponderBehavior::ForgedSource { names } => {
                    let reply = NodeStatusResponse::new(
                        request.header.transaction_id,
                        names,
                        Statistics::default(),
                    )?
                    .serialize()?;
                    let intruder = UdpSocket::bind("127.0.0.1:0").await?;
                    intruder.send_to(&reply, from).await?;
                    return Ok(request);
                }
            };
            socket.send_to(&reply, from).await?;
            Ok(request)
        });

        Ok(Self { addr, task })
    }

    pub fn addr(&self) -> SocketAddr {
        self.addr
    }

    /// Wait for the served request
    pub async fn finish(self) -> Result<NodeStatusRequest> {
        self.task
            .await
            .map_err(|e| Error::Protocol(format!("responder task failed: {}", e)))?
    }
}
