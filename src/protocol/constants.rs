//! Protocol constants for the NetBIOS Name Service

use std::convert::TryFrom;

/// Default NetBIOS name service port (netbios-ns)
pub const NBNS_PORT: u16 = 137;

/// Largest datagram this protocol assumes
pub const MAX_DATAGRAM_SIZE: usize = 576;

/// Name service header size
pub const HEADER_SIZE: usize = 12;

/// Encoded name as it appears on the wire: length byte, 32 encoded bytes, scope terminator
pub const WIRE_NAME_SIZE: usize = 34;

/// Question section size
pub const QUESTION_SIZE: usize = WIRE_NAME_SIZE + 4;

/// Resource record size up to and including RDLENGTH
pub const RESOURCE_RECORD_SIZE: usize = WIRE_NAME_SIZE + 10;

/// Size of one node name entry in a status response
pub const NODE_NAME_SIZE: usize = 18;

/// Size of the statistics block in a status response
pub const STATISTICS_SIZE: usize = 46;

/// Node status request size
pub const REQUEST_SIZE: usize = HEADER_SIZE + QUESTION_SIZE;

/// Bytes preceding the first node name entry (header, record, name count)
pub const RESPONSE_PREFIX_SIZE: usize = HEADER_SIZE + RESOURCE_RECORD_SIZE + 1;

/// Question and record types
pub mod rr_type {
    /// IP address RR
    pub const A: u16 = 0x0001;
    /// Name server RR
    pub const NS: u16 = 0x0002;
    /// NULL RR
    pub const NULL: u16 = 0x000A;
    /// General name service RR / name query
    pub const NB: u16 = 0x0020;
    /// Node status RR / node status request
    pub const NBSTAT: u16 = 0x0021;
}

/// Internet class
pub const CLASS_IN: u16 = 0x0001;

/// Name service operation codes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum Opcode {
    Query = 0x0,
    Registration = 0x5,
    Release = 0x6,
    Wack = 0x7,
    Refresh = 0x8,
}

impl TryFrom<u8> for Opcode {
    type Error = crate::error::Error;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x0 => Ok(Opcode::Query),
            0x5 => Ok(Opcode::Registration),
            0x6 => Ok(Opcode::Release),
            0x7 => Ok(Opcode::Wack),
            0x8 => Ok(Opcode::Refresh),
            _ => Err(crate::error::Error::Protocol(format!(
                "Invalid name service opcode: 0x{:x}",
                value
            ))),
        }
    }
}
