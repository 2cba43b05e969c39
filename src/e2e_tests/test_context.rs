//! Test context for end-to-end testing
//!
//! Pairs a loopback responder with a client pointed at it.

use super::responder::{Responder, ResponderBehavior};
use crate::client::{ClientConfig, NodeStatusClient};
use crate::error::Result;
use crate::protocol::messages::{NameFlags, NodeName, OwnerNodeType, Statistics};
use std::net::SocketAddr;

pub const TEST_MAC: [u8; 6] = [0x00, 0x15, 0x5D, 0x01, 0x02, 0x03];

/// Client and responder wired together over localhost
pub struct TestContext {
    pub client: NodeStatusClient,
    pub responder: Responder,
}

impl TestContext {
    pub async fn new(behavior: ResponderBehavior) -> Result<Self> {
        Self::with_timeout_ms(behavior, 2000).await
    }

    pub async fn with_timeout_ms(behavior: ResponderBehavior, timeout_ms: i64) -> Result<Self> {
        let _ = env_logger::builder().is_test(true).try_init();

        let responder = Responder::spawn(behavior).await?;
        let config = ClientConfig::default()
            .with_port(responder.addr().port())
            .with_bind_addr(SocketAddr::from(([127, 0, 0, 1], 0)))
            .with_timeout_ms(timeout_ms);

        Ok(Self {
            client: NodeStatusClient::with_config(config),
            responder,
        })
    }

    pub fn target(&self) -> String {
        self.responder.addr().ip().to_string()
    }
}

/// Name table of a typical workstation in a workgroup
pub fn workstation_names() -> Vec<NodeName> {
    let unique = NameFlags::active(false, OwnerNodeType::Hybrid);
    let group = NameFlags::active(true, OwnerNodeType::Hybrid);
    vec![
        NodeName::new(b"DESKTOP-7Q2", 0x00, unique).unwrap(),
        NodeName::new(b"WORKGROUP", 0x00, group).unwrap(),
        NodeName::new(b"DESKTOP-7Q2", 0x20, unique).unwrap(),
        NodeName::new(b"WORKGROUP", 0x1E, group).unwrap(),
    ]
}

pub fn name_table(names: Vec<NodeName>) -> ResponderBehavior {
    ResponderBehavior::NameTable {
        names,
        statistics: Statistics::with_unit_id(TEST_MAC),
    }
}
