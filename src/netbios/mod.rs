//! NetBIOS naming as defined in RFC 1001/1002
//!
//! Only the pieces the name service needs live here: first-level name encoding
//! and the suffix table used to describe registered names.

pub mod name;

pub use name::{
    decode_name, decode_wire_name, encode_name, encode_wire_name, service_name,
    wildcard_wire_name, NetBiosNameType, NETBIOS_ENCODED_NAME_LEN, NETBIOS_NAME_LEN,
    NETBIOS_WIRE_NAME_LEN, WILDCARD_NAME,
};
