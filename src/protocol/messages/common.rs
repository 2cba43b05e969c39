//! Common traits for name service messages

use crate::error::Result;
use bytes::Bytes;

/// Trait for name service messages that can be parsed from and serialized to bytes
pub trait NbnsMessage: Sized {
    /// Parse message from bytes
    fn parse(buf: &[u8]) -> Result<Self>;

    /// Serialize message to bytes
    fn serialize(&self) -> Result<Bytes>;

    /// Get the size of the message when serialized
    fn size(&self) -> usize;
}
