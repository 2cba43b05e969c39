//! Decoded node status of a remote host

use crate::error::Result;
use crate::protocol::messages::{decode_response, NodeName, NodeStatusResponse, Statistics};
use std::fmt;
use std::net::SocketAddr;

/// Adapter hardware address
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MacAddress(pub [u8; 6]);

impl MacAddress {
    pub fn octets(&self) -> [u8; 6] {
        self.0
    }
}

impl fmt::Display for MacAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, octet) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("-")?;
            }
            write!(f, "{:02X}", octet)?;
        }
        Ok(())
    }
}

/// Name table and MAC address reported by a peer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStatus {
    peer: SocketAddr,
    mac: MacAddress,
    names: Vec<NodeName>,
    statistics: Statistics,
}

impl NodeStatus {
    pub fn from_response(peer: SocketAddr, response: NodeStatusResponse) -> Self {
        Self {
            peer,
            mac: MacAddress(response.mac_address()),
            names: response.names,
            statistics: response.statistics,
        }
    }

    /// Decode a raw response datagram received from `peer`
    pub fn decode(peer: SocketAddr, datagram: &[u8]) -> Result<Self> {
        Ok(Self::from_response(peer, decode_response(datagram)?))
    }

    pub fn peer(&self) -> SocketAddr {
        self.peer
    }

    pub fn mac(&self) -> MacAddress {
        self.mac
    }

    /// Entries in the order the peer sent them
    pub fn names(&self) -> &[NodeName] {
        &self.names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn statistics(&self) -> &Statistics {
        &self.statistics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::messages::{NameFlags, NbnsMessage, OwnerNodeType};

    #[test]
    fn test_mac_display() {
        let mac = MacAddress([0x00, 0x0c, 0x29, 0xab, 0x01, 0xff]);
        assert_eq!(mac.to_string(), "00-0C-29-AB-01-FF");
    }

    #[test]
    fn test_decode_node_status() {
        let names = vec![
            NodeName::new(b"WS01", 0x00, NameFlags::active(false, OwnerNodeType::Hybrid)).unwrap(),
            NodeName::new(b"WORKGROUP", 0x00, NameFlags::active(true, OwnerNodeType::Hybrid))
                .unwrap(),
        ];
        let datagram = NodeStatusResponse::new(
            9,
            names.clone(),
            Statistics::with_unit_id([1, 2, 3, 4, 5, 6]),
        )
        .unwrap()
        .serialize()
        .unwrap();

        let peer: SocketAddr = "192.0.2.10:137".parse().unwrap();
        let status = NodeStatus::decode(peer, &datagram).unwrap();

        assert_eq!(status.peer(), peer);
        assert_eq!(status.len(), 2);
        assert!(!status.is_empty());
        assert_eq!(status.names(), names.as_slice());
        assert_eq!(status.mac().octets(), [1, 2, 3, 4, 5, 6]);
        assert_eq!(status.statistics().unit_id, [1, 2, 3, 4, 5, 6]);
    }

    #[test]
    fn test_decode_failure_propagates() {
        let peer: SocketAddr = "192.0.2.10:137".parse().unwrap();
        assert!(NodeStatus::decode(peer, &[0u8; 10]).is_err());
    }
}
