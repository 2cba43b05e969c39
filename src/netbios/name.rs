//! NetBIOS name encoding and decoding
//!
//! NetBIOS names are 16 bytes and travel in the RFC 1001 "first-level encoding",
//! where each byte becomes two characters in the range 'A'..='P'.

use crate::error::{Error, Result};
use std::convert::TryFrom;

/// NetBIOS name length after padding
pub const NETBIOS_NAME_LEN: usize = 16;

/// NetBIOS encoded name length (after encoding, each byte becomes 2 bytes)
pub const NETBIOS_ENCODED_NAME_LEN: usize = 32;

/// Encoded name plus its length byte and the empty scope terminator
pub const NETBIOS_WIRE_NAME_LEN: usize = NETBIOS_ENCODED_NAME_LEN + 2;

/// Name used by node status requests
pub const WILDCARD_NAME: &[u8] = b"*";

/// Well-known suffixes (16th byte of a name)
#[repr(u8)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NetBiosNameType {
    /// Workstation service, or domain name when group
    Workstation = 0x00,
    /// Master browser (group `__MSBROWSE__`)
    MsBrowse = 0x01,
    /// Messenger service
    Messenger = 0x03,
    /// RAS server service
    RasServer = 0x06,
    /// Domain master browser
    DomainMasterBrowser = 0x1B,
    /// Domain controllers
    DomainController = 0x1C,
    /// Master browser
    MasterBrowser = 0x1D,
    /// Browser service elections
    BrowserElections = 0x1E,
    /// File server service
    FileServer = 0x20,
}

impl TryFrom<u8> for NetBiosNameType {
    type Error = u8;

    fn try_from(value: u8) -> std::result::Result<Self, Self::Error> {
        match value {
            0x00 => Ok(NetBiosNameType::Workstation),
            0x01 => Ok(NetBiosNameType::MsBrowse),
            0x03 => Ok(NetBiosNameType::Messenger),
            0x06 => Ok(NetBiosNameType::RasServer),
            0x1B => Ok(NetBiosNameType::DomainMasterBrowser),
            0x1C => Ok(NetBiosNameType::DomainController),
            0x1D => Ok(NetBiosNameType::MasterBrowser),
            0x1E => Ok(NetBiosNameType::BrowserElections),
            0x20 => Ok(NetBiosNameType::FileServer),
            other => Err(other),
        }
    }
}

/// Describe the service a name table entry registers
pub fn service_name(group: bool, suffix: u8) -> &'static str {
    let name = match (NetBiosNameType::try_from(suffix), group) {
        (Ok(NetBiosNameType::Workstation), false) => Some("Workstation Service"),
        (Ok(NetBiosNameType::Workstation), true) => Some("Browser Client"),
        (Ok(NetBiosNameType::MsBrowse), true) => Some("Master Browser"),
        (Ok(NetBiosNameType::Messenger), false) => Some("Messenger Service"),
        (Ok(NetBiosNameType::RasServer), false) => Some("RAS Server Service"),
        (Ok(NetBiosNameType::DomainMasterBrowser), false) => Some("Domain Master Browser"),
        (Ok(NetBiosNameType::DomainController), true) => Some("Domain Controllers"),
        (Ok(NetBiosNameType::MasterBrowser), false) => Some("Master Browser"),
        (Ok(NetBiosNameType::BrowserElections), true) => Some("Browser Service Elections"),
        (Ok(NetBiosNameType::FileServer), false) => Some("Default Name"),
        _ => None,
    };
    name.unwrap_or("Unknown")
}

/// Encode a NetBIOS name using the RFC 1001 algorithm
///
/// `raw` is right-padded to 16 bytes with `padding`. Each byte is split into
/// two 4-bit values and added to 'A' (0x41), so '*' (0x2A) becomes "CK".
pub fn encode_name(raw: &[u8], padding: u8) -> Result<[u8; NETBIOS_ENCODED_NAME_LEN]> {
    if raw.len() > NETBIOS_NAME_LEN {
        return Err(Error::InvalidNetBiosName(format!(
            "Name of {} bytes exceeds maximum length {}",
            raw.len(),
            NETBIOS_NAME_LEN
        )));
    }

    let mut padded = [padding; NETBIOS_NAME_LEN];
    padded[..raw.len()].copy_from_slice(raw);

    Ok(encode_padded(&padded))
}

fn encode_padded(padded: &[u8; NETBIOS_NAME_LEN]) -> [u8; NETBIOS_ENCODED_NAME_LEN] {
    let mut encoded = [0u8; NETBIOS_ENCODED_NAME_LEN];
    for (i, &byte) in padded.iter().enumerate() {
        encoded[i * 2] = b'A' + ((byte >> 4) & 0x0F);
        encoded[i * 2 + 1] = b'A' + (byte & 0x0F);
    }
    encoded
}

fn wire_form(encoded: &[u8; NETBIOS_ENCODED_NAME_LEN]) -> [u8; NETBIOS_WIRE_NAME_LEN] {
    let mut wire = [0u8; NETBIOS_WIRE_NAME_LEN];
    wire[0] = NETBIOS_ENCODED_NAME_LEN as u8;
    wire[1..=NETBIOS_ENCODED_NAME_LEN].copy_from_slice(encoded);
    wire[NETBIOS_WIRE_NAME_LEN - 1] = 0x00;
    wire
}

/// Decode a first-level encoded name back to its 16 raw bytes
pub fn decode_name(encoded: &[u8]) -> Result<[u8; NETBIOS_NAME_LEN]> {
    if encoded.len() != NETBIOS_ENCODED_NAME_LEN {
        return Err(Error::InvalidNetBiosName(format!(
            "Encoded name length {} != {}",
            encoded.len(),
            NETBIOS_ENCODED_NAME_LEN
        )));
    }

    let mut decoded = [0u8; NETBIOS_NAME_LEN];
    for (i, pair) in encoded.chunks_exact(2).enumerate() {
        let (high, low) = (pair[0], pair[1]);
        if !(b'A'..=b'P').contains(&high) || !(b'A'..=b'P').contains(&low) {
            return Err(Error::InvalidNetBiosName(format!(
                "Invalid encoded characters at position {}",
                i
            )));
        }
        decoded[i] = ((high - b'A') << 4) | (low - b'A');
    }

    Ok(decoded)
}

/// Encode a name in its on-wire form: length byte, encoded name, empty scope
pub fn encode_wire_name(raw: &[u8], padding: u8) -> Result<[u8; NETBIOS_WIRE_NAME_LEN]> {
    Ok(wire_form(&encode_name(raw, padding)?))
}

/// Decode an on-wire name, ignoring any scope other than the empty one
pub fn decode_wire_name(wire: &[u8]) -> Result<[u8; NETBIOS_NAME_LEN]> {
    if wire.len() != NETBIOS_WIRE_NAME_LEN || wire[0] as usize != NETBIOS_ENCODED_NAME_LEN {
        return Err(Error::InvalidNetBiosName(
            "Wire name must be a 32-byte label with empty scope".into(),
        ));
    }
    if wire[NETBIOS_WIRE_NAME_LEN - 1] != 0x00 {
        return Err(Error::InvalidNetBiosName("Scoped names are not supported".into()));
    }
    decode_name(&wire[1..=NETBIOS_ENCODED_NAME_LEN])
}

/// The wildcard `*` name a node status request asks for, NUL padded
pub fn wildcard_wire_name() -> [u8; NETBIOS_WIRE_NAME_LEN] {
    let mut raw = [0u8; NETBIOS_NAME_LEN];
    raw[..WILDCARD_NAME.len()].copy_from_slice(WILDCARD_NAME);
    wire_form(&encode_padded(&raw))
}
