//! Node status request and response (RFC 1002, sections 4.2.17 and 4.2.18)

use super::common::NbnsMessage;
use super::names::NodeName;
use super::question::{Question, ResourceRecord};
use super::statistics::Statistics;
use crate::error::{Error, Result};
use crate::netbios::wildcard_wire_name;
use crate::protocol::constants::{
    rr_type, MAX_DATAGRAM_SIZE, NODE_NAME_SIZE, REQUEST_SIZE, RESPONSE_PREFIX_SIZE,
    STATISTICS_SIZE,
};
use crate::protocol::header::NbnsHeader;
use crate::protocol::wire::WireReader;
use bytes::{Bytes, BytesMut};
use tracing::{debug, error};

/// Exact datagram length of a response carrying `num_names` entries
pub fn expected_response_len(num_names: u8) -> usize {
    RESPONSE_PREFIX_SIZE + NODE_NAME_SIZE * num_names as usize + STATISTICS_SIZE
}

/// Node status request (50 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeStatusRequest {
    pub header: NbnsHeader,
    pub question: Question,
}

impl NodeStatusRequest {
    pub const SIZE: usize = REQUEST_SIZE;

    /// Wildcard node status query
    pub fn new(transaction_id: u16) -> Self {
        Self {
            header: NbnsHeader::query(transaction_id),
            question: Question::node_status(),
        }
    }

    /// Encode into the fixed 50-byte request layout
    pub fn encode(&self) -> Bytes {
        let mut buf = BytesMut::with_capacity(Self::SIZE);
        self.header.write_to(&mut buf);
        self.question.write_to(&mut buf);
        buf.freeze()
    }
}

impl NbnsMessage for NodeStatusRequest {
    fn parse(buf: &[u8]) -> Result<Self> {
        if buf.len() != Self::SIZE {
            return Err(Error::Protocol(format!(
                "Node status request must be {} bytes, got {}",
                Self::SIZE,
                buf.len()
            )));
        }

        let mut reader = WireReader::new(buf);
        let header = NbnsHeader::read(&mut reader)?;
        let question = Question::read(&mut reader)?;

        if header.flags.is_response() || header.qdcount != 1 {
            return Err(Error::Protocol("Not a single-question query".into()));
        }
        if question.q_type != rr_type::NBSTAT {
            return Err(Error::UnexpectedRecordType(question.q_type));
        }

        Ok(Self { header, question })
    }

    fn serialize(&self) -> Result<Bytes> {
        Ok(self.encode())
    }

    fn size(&self) -> usize {
        Self::SIZE
    }
}

/// Node status response
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NodeStatusResponse {
    pub header: NbnsHeader,
    pub record: ResourceRecord,
    pub names: Vec<NodeName>,
    pub statistics: Statistics,
}

impl NodeStatusResponse {
    /// Response to `transaction_id` with a consistent RDLENGTH
    pub fn new(transaction_id: u16, names: Vec<NodeName>, statistics: Statistics) -> Result<Self> {
        let num_names = u8::try_from(names.len()).map_err(|_| {
            Error::InvalidArgument(format!(
                "{} names do not fit the one-byte name count",
                names.len()
            ))
        })?;
        let rdlength = 1 + NODE_NAME_SIZE * num_names as usize + STATISTICS_SIZE;

        Ok(Self {
            header: NbnsHeader::response(transaction_id),
            // At most 1 + 18 * 255 + 46 bytes, well inside u16
            record: ResourceRecord::node_status(rdlength as u16),
            names,
            statistics,
        })
    }

    pub fn mac_address(&self) -> [u8; 6] {
        self.statistics.unit_id
    }
}

impl NbnsMessage for NodeStatusResponse {
    fn parse(buf: &[u8]) -> Result<Self> {
        decode_response(buf)
    }

    fn serialize(&self) -> Result<Bytes> {
        let num_names = u8::try_from(self.names.len()).map_err(|_| {
            Error::InvalidArgument(format!(
                "{} names do not fit the one-byte name count",
                self.names.len()
            ))
        })?;

        let mut buf = BytesMut::with_capacity(self.size());
        self.header.write_to(&mut buf);
        self.record.write_to(&wildcard_wire_name(), &mut buf);
        buf.extend_from_slice(&[num_names]);
        for name in &self.names {
            name.write_to(&mut buf);
        }
        self.statistics.write_to(&mut buf);

        Ok(buf.freeze())
    }

    fn size(&self) -> usize {
        RESPONSE_PREFIX_SIZE + NODE_NAME_SIZE * self.names.len() + STATISTICS_SIZE
    }
}

/// Encode a node status request
pub fn encode_request(request: &NodeStatusRequest) -> Bytes {
    request.encode()
}

/// Validate and decode an untrusted node status response datagram
pub fn decode_response(buf: &[u8]) -> Result<NodeStatusResponse> {
    if buf.len() > MAX_DATAGRAM_SIZE {
        debug!("rejecting {}-byte datagram: over {} bytes", buf.len(), MAX_DATAGRAM_SIZE);
        return Err(Error::DatagramTooLarge {
            len: buf.len(),
            max: MAX_DATAGRAM_SIZE,
        });
    }
    if buf.len() < RESPONSE_PREFIX_SIZE {
        debug!("rejecting {}-byte datagram: shorter than fixed prefix", buf.len());
        return Err(Error::BufferTooSmall {
            need: RESPONSE_PREFIX_SIZE,
            have: buf.len(),
        });
    }

    let mut reader = WireReader::new(buf);
    let header = NbnsHeader::read(&mut reader)?;

    let record_type = ResourceRecord::read_type(&mut reader)?;
    if record_type != rr_type::NBSTAT {
        debug!("rejecting response with record type 0x{:04x}", record_type);
        return Err(Error::UnexpectedRecordType(record_type));
    }
    let record = ResourceRecord::read_rest(&mut reader, record_type)?;

    let num_names = reader.read_u8()?;

    // The name count is peer controlled; bound it against the datagram before looping
    let expected = reader.position() + NODE_NAME_SIZE * num_names as usize + STATISTICS_SIZE;
    if expected != buf.len() {
        debug!(
            "rejecting response: {} names need {} bytes, got {}",
            num_names,
            expected,
            buf.len()
        );
        return Err(Error::LengthMismatch {
            num_names,
            expected,
            actual: buf.len(),
        });
    }

    let mut names = Vec::new();
    names
        .try_reserve_exact(num_names as usize)
        .map_err(|e| Error::OutOfMemory(format!("{} name entries: {}", num_names, e)))?;
    for _ in 0..num_names {
        names.push(NodeName::read(&mut reader)?);
    }

    let statistics = Statistics::read(&mut reader)?;

    let consumed = reader.position();
    if consumed != buf.len() {
        error!(
            "node status decoder consumed {} of {} validated bytes",
            consumed,
            buf.len()
        );
        return Err(Error::InternalInconsistency {
            consumed,
            length: buf.len(),
        });
    }

    debug!(
        "decoded node status response: id=0x{:04x}, {} names",
        header.transaction_id, num_names
    );

    Ok(NodeStatusResponse {
        header,
        record,
        names,
        statistics,
    })
}
