//! NetBIOS Node Status in Rust
//!
//! A sans-io codec for the RFC 1001/1002 NBSTAT exchange: build the 50-byte
//! wildcard query, decode the peer's name table and adapter MAC address.
//! A tokio UDP client sits on top behind the `client` feature.

#![allow(missing_docs)]
#![forbid(unsafe_code)]

pub mod error;
pub mod netbios;
pub mod protocol;
pub mod report;
pub mod status;

#[cfg(feature = "client")]
pub mod transport;

#[cfg(feature = "client")]
pub mod client;

#[cfg(all(test, feature = "client"))]
pub mod e2e_tests;

pub use error::{describe, Error, ErrorKind, Result};
pub use protocol::messages::{decode_response, encode_request, NodeStatusRequest, NodeStatusResponse};
pub use status::{MacAddress, NodeStatus};
