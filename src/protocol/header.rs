//! Name service packet header

use super::constants::HEADER_SIZE;
use super::wire::WireReader;
use crate::error::Result;
use bitflags::bitflags;
use bytes::BufMut;

const RESPONSE_BIT: u16 = 0x8000;
const OPCODE_MASK: u16 = 0x7800;
const OPCODE_SHIFT: u16 = 11;
const NM_FLAGS_MASK: u16 = 0x07F0;
const RCODE_MASK: u16 = 0x000F;

bitflags! {
    /// NM_FLAGS bits, in their position inside the 16-bit flags word
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct NmFlags: u16 {
        const AUTHORITATIVE_ANSWER = 0x0400;
        const TRUNCATION           = 0x0200;
        const RECURSION_DESIRED    = 0x0100;
        const RECURSION_AVAILABLE  = 0x0080;
        const RESERVED_1           = 0x0040;
        const RESERVED_2           = 0x0020;
        const BROADCAST            = 0x0010;
    }
}

/// The packed OPCODE / NM_FLAGS / RCODE word
///
/// Layout, MSB first: R(1) OPCODE(4) AA TC RD RA 0 0 B RCODE(4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HeaderFlags(u16);

impl HeaderFlags {
    pub fn from_bits(bits: u16) -> Self {
        Self(bits)
    }

    pub fn bits(self) -> u16 {
        self.0
    }

    pub fn with_response(mut self, response: bool) -> Self {
        self.0 = (self.0 & !RESPONSE_BIT) | if response { RESPONSE_BIT } else { 0 };
        self
    }

    /// Opcodes wider than 4 bits are masked
    pub fn with_opcode(mut self, opcode: u8) -> Self {
        self.0 = (self.0 & !OPCODE_MASK) | ((u16::from(opcode) << OPCODE_SHIFT) & OPCODE_MASK);
        self
    }

    pub fn with_nm_flags(mut self, flags: NmFlags) -> Self {
        self.0 = (self.0 & !NM_FLAGS_MASK) | flags.bits();
        self
    }

    pub fn with_rcode(mut self, rcode: u8) -> Self {
        self.0 = (self.0 & !RCODE_MASK) | (u16::from(rcode) & RCODE_MASK);
        self
    }

    pub fn is_response(self) -> bool {
        self.0 & RESPONSE_BIT != 0
    }

    pub fn opcode(self) -> u8 {
        ((self.0 & OPCODE_MASK) >> OPCODE_SHIFT) as u8
    }

    pub fn nm_flags(self) -> NmFlags {
        NmFlags::from_bits_truncate(self.0 & NM_FLAGS_MASK)
    }

    pub fn rcode(self) -> u8 {
        (self.0 & RCODE_MASK) as u8
    }

    pub fn authoritative_answer(self) -> bool {
        self.nm_flags().contains(NmFlags::AUTHORITATIVE_ANSWER)
    }

    pub fn truncated(self) -> bool {
        self.nm_flags().contains(NmFlags::TRUNCATION)
    }

    pub fn recursion_desired(self) -> bool {
        self.nm_flags().contains(NmFlags::RECURSION_DESIRED)
    }

    pub fn recursion_available(self) -> bool {
        self.nm_flags().contains(NmFlags::RECURSION_AVAILABLE)
    }

    pub fn broadcast(self) -> bool {
        self.nm_flags().contains(NmFlags::BROADCAST)
    }
}

/// Name service header (12 bytes)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NbnsHeader {
    pub transaction_id: u16,
    pub flags: HeaderFlags,
    pub qdcount: u16,
    pub ancount: u16,
    pub nscount: u16,
    pub arcount: u16,
}

impl NbnsHeader {
    pub const SIZE: usize = HEADER_SIZE;

    /// Header for a single-question query
    pub fn query(transaction_id: u16) -> Self {
        Self {
            transaction_id,
            flags: HeaderFlags::default(),
            qdcount: 1,
            ancount: 0,
            nscount: 0,
            arcount: 0,
        }
    }

    /// Header for a single-answer response to `transaction_id`
    pub fn response(transaction_id: u16) -> Self {
        Self {
            transaction_id,
            flags: HeaderFlags::default()
                .with_response(true)
                .with_nm_flags(NmFlags::AUTHORITATIVE_ANSWER),
            qdcount: 0,
            ancount: 1,
            nscount: 0,
            arcount: 0,
        }
    }

    pub fn read(reader: &mut WireReader<'_>) -> Result<Self> {
        Ok(Self {
            transaction_id: reader.read_u16()?,
            flags: HeaderFlags::from_bits(reader.read_u16()?),
            qdcount: reader.read_u16()?,
            ancount: reader.read_u16()?,
            nscount: reader.read_u16()?,
            arcount: reader.read_u16()?,
        })
    }

    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_u16(self.transaction_id);
        buf.put_u16(self.flags.bits());
        buf.put_u16(self.qdcount);
        buf.put_u16(self.ancount);
        buf.put_u16(self.nscount);
        buf.put_u16(self.arcount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recursion_desired_word() {
        let flags = HeaderFlags::default()
            .with_opcode(0)
            .with_nm_flags(NmFlags::RECURSION_DESIRED);
        assert_eq!(flags.bits(), 0x0100);

        let parsed = HeaderFlags::from_bits(0x0100);
        assert!(parsed.recursion_desired());
        assert!(!parsed.is_response());
        assert_eq!(parsed.opcode(), 0);
        assert!(!parsed.authoritative_answer());
        assert!(!parsed.truncated());
        assert!(!parsed.recursion_available());
        assert!(!parsed.broadcast());
        assert_eq!(parsed.rcode(), 0);
    }

    #[test]
    fn test_flag_positions() {
        assert_eq!(HeaderFlags::default().with_response(true).bits(), 0x8000);
        assert_eq!(HeaderFlags::default().with_opcode(0x5).bits(), 0x2800);
        assert_eq!(HeaderFlags::default().with_opcode(0xF).bits(), 0x7800);
        assert_eq!(HeaderFlags::default().with_rcode(0x3).bits(), 0x0003);
        assert_eq!(
            HeaderFlags::default().with_nm_flags(NmFlags::BROADCAST).bits(),
            0x0010
        );
    }

    #[test]
    fn test_flags_decode_all_fields() {
        let flags = HeaderFlags::from_bits(0xAB93);
        assert!(flags.is_response());
        assert_eq!(flags.opcode(), 0x5);
        assert!(flags.truncated());
        assert!(flags.recursion_desired());
        assert!(flags.recursion_available());
        assert!(flags.broadcast());
        assert!(!flags.authoritative_answer());
        assert_eq!(flags.rcode(), 0x3);
    }

    #[test]
    fn test_opcode_is_masked() {
        let flags = HeaderFlags::default().with_opcode(0x1F).with_rcode(0xFF);
        assert_eq!(flags.opcode(), 0xF);
        assert_eq!(flags.rcode(), 0xF);
        assert!(!flags.is_response());
    }

    #[test]
    fn test_query_header_bytes() {
        let header = NbnsHeader::query(0x1234);
        let mut buf = Vec::new();
        header.write_to(&mut buf);
        assert_eq!(
            buf,
            [0x12, 0x34, 0x00, 0x00, 0x00, 0x01, 0x00, 0x00, 0x00, 0x00, 0x00, 0x00]
        );

        let mut reader = WireReader::new(&buf);
        assert_eq!(NbnsHeader::read(&mut reader).unwrap(), header);
    }
}
