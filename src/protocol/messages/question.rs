//! Question and resource record sections

use crate::error::Result;
use crate::netbios::{wildcard_wire_name, NETBIOS_WIRE_NAME_LEN};
use crate::protocol::constants::{rr_type, CLASS_IN, QUESTION_SIZE, RESOURCE_RECORD_SIZE};
use crate::protocol::wire::WireReader;
use bytes::BufMut;

/// Question section (38 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub name: [u8; NETBIOS_WIRE_NAME_LEN],
    pub q_type: u16,
    pub q_class: u16,
}

impl Question {
    pub const SIZE: usize = QUESTION_SIZE;

    /// Node status question for the wildcard name
    pub fn node_status() -> Self {
        Self {
            name: wildcard_wire_name(),
            q_type: rr_type::NBSTAT,
            q_class: CLASS_IN,
        }
    }

    pub fn read(reader: &mut WireReader<'_>) -> Result<Self> {
        Ok(Self {
            name: reader.read_array()?,
            q_type: reader.read_u16()?,
            q_class: reader.read_u16()?,
        })
    }

    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.name);
        buf.put_u16(self.q_type);
        buf.put_u16(self.q_class);
    }
}

/// Resource record fields following the record name
///
/// The record name carries nothing a node status reader needs, so it is
/// skipped on decode and supplied separately on encode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResourceRecord {
    pub rr_type: u16,
    pub rr_class: u16,
    pub ttl: u32,
    pub rdlength: u16,
}

impl ResourceRecord {
    /// Size including the 34-byte record name
    pub const SIZE: usize = RESOURCE_RECORD_SIZE;

    pub fn node_status(rdlength: u16) -> Self {
        Self {
            rr_type: rr_type::NBSTAT,
            rr_class: CLASS_IN,
            ttl: 0,
            rdlength,
        }
    }

    /// Skip the record name and read the record type only
    pub fn read_type(reader: &mut WireReader<'_>) -> Result<u16> {
        reader.skip(NETBIOS_WIRE_NAME_LEN)?;
        reader.read_u16()
    }

    /// Read the fields following the record type
    pub fn read_rest(reader: &mut WireReader<'_>, rr_type: u16) -> Result<Self> {
        Ok(Self {
            rr_type,
            rr_class: reader.read_u16()?,
            ttl: reader.read_u32()?,
            rdlength: reader.read_u16()?,
        })
    }

    pub fn write_to<B: BufMut>(&self, name: &[u8; NETBIOS_WIRE_NAME_LEN], buf: &mut B) {
        buf.put_slice(name);
        buf.put_u16(self.rr_type);
        buf.put_u16(self.rr_class);
        buf.put_u32(self.ttl);
        buf.put_u16(self.rdlength);
    }
}
