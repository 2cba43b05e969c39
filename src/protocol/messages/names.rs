//! Node name entries of a node status response (RFC 1002, section 4.2.18)

use crate::error::Result;
use crate::protocol::constants::NODE_NAME_SIZE;
use crate::protocol::wire::WireReader;
use bytes::BufMut;
use std::convert::TryFrom;

const GROUP_BIT: u16 = 0x8000;
const ONT_MASK: u16 = 0x6000;
const ONT_SHIFT: u16 = 13;
const DEREGISTER_BIT: u16 = 0x1000;
const CONFLICT_BIT: u16 = 0x0800;
const ACTIVE_BIT: u16 = 0x0400;
const PERMANENT_BIT: u16 = 0x0200;
const RESERVED_MASK: u16 = 0x01FF;

/// Owner node type of a registered name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum OwnerNodeType {
    Broadcast = 0b00,
    PointToPoint = 0b01,
    Mixed = 0b10,
    /// Reserved by RFC 1002, used for hybrid nodes by later stacks
    Hybrid = 0b11,
}

impl From<u8> for OwnerNodeType {
    fn from(value: u8) -> Self {
        match value & 0b11 {
            0b00 => OwnerNodeType::Broadcast,
            0b01 => OwnerNodeType::PointToPoint,
            0b10 => OwnerNodeType::Mixed,
            _ => OwnerNodeType::Hybrid,
        }
    }
}

impl OwnerNodeType {
    /// Single-letter tag used by name table listings
    pub fn letter(self) -> char {
        match self {
            OwnerNodeType::Broadcast => 'B',
            OwnerNodeType::PointToPoint => 'P',
            OwnerNodeType::Mixed => 'M',
            OwnerNodeType::Hybrid => 'H',
        }
    }
}

/// NAME_FLAGS word of a node name entry
///
/// Layout, MSB first: G ONT(2) DRG CNF ACT PRM reserved(9).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct NameFlags(u16);

impl NameFlags {
    pub fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    /// Flags of an active name owned by a node of type `ont`
    pub fn active(group: bool, ont: OwnerNodeType) -> Self {
        let mut bits = ACTIVE_BIT | ((ont as u16) << ONT_SHIFT);
        if group {
            bits |= GROUP_BIT;
        }
        Self(bits)
    }

    /// Name is a group name rather than a unique name
    pub fn is_group(self) -> bool {
        self.0 & GROUP_BIT != 0
    }

    pub fn owner_node_type(self) -> OwnerNodeType {
        OwnerNodeType::from(((self.0 & ONT_MASK) >> ONT_SHIFT) as u8)
    }

    /// Name is in the process of being deleted
    pub fn is_deregistering(self) -> bool {
        self.0 & DEREGISTER_BIT != 0
    }

    /// Name on this node is in conflict
    pub fn is_conflict(self) -> bool {
        self.0 & CONFLICT_BIT != 0
    }

    /// Set on every entry by a conformant peer
    pub fn is_active(self) -> bool {
        self.0 & ACTIVE_BIT != 0
    }

    /// Entry is the permanent node name
    pub fn is_permanent(self) -> bool {
        self.0 & PERMANENT_BIT != 0
    }

    /// Reserved bits; informational only, not enforced
    pub fn reserved(self) -> u16 {
        self.0 & RESERVED_MASK
    }
}

/// One entry of the remote name table (18 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NodeName {
    /// First fifteen bytes of the name, as received
    pub name: [u8; 15],
    pub suffix: u8,
    pub flags: NameFlags,
}

impl NodeName {
    pub const SIZE: usize = NODE_NAME_SIZE;

    /// Build an entry from a name of at most fifteen bytes, padded with spaces
    pub fn new(name: &[u8], suffix: u8, flags: NameFlags) -> Result<Self> {
        if name.len() > 15 {
            return Err(crate::error::Error::InvalidNetBiosName(format!(
                "Name of {} bytes exceeds maximum length 15",
                name.len()
            )));
        }
        let mut padded = [b' '; 15];
        padded[..name.len()].copy_from_slice(name);
        Ok(Self {
            name: padded,
            suffix,
            flags,
        })
    }

    pub fn read(reader: &mut WireReader<'_>) -> Result<Self> {
        Ok(Self {
            name: reader.read_array()?,
            suffix: reader.read_u8()?,
            flags: NameFlags::from_bits(reader.read_u16()?),
        })
    }

    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.name);
        buf.put_u8(self.suffix);
        buf.put_u16(self.flags.bits());
    }

    /// Name with non-printable bytes replaced by '.'
    pub fn printable_name(&self) -> String {
        self.name
            .iter()
            .map(|&b| if (0x20..=0x79).contains(&b) { b as char } else { '.' })
            .collect()
    }
}

impl TryFrom<&[u8]> for NodeName {
    type Error = crate::error::Error;

    fn try_from(buf: &[u8]) -> Result<Self> {
        let mut reader = WireReader::new(buf);
        Self::read(&mut reader)
    }
}
