//! Statistics block of a node status response

use crate::error::Result;
use crate::protocol::constants::STATISTICS_SIZE;
use crate::protocol::wire::WireReader;
use bytes::BufMut;

/// Adapter statistics (46 bytes)
///
/// Modern stacks only fill `unit_id`, which carries the adapter MAC address.
/// The remaining counters are decoded for completeness.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Statistics {
    pub unit_id: [u8; 6],
    pub jumpers: u8,
    pub test_result: u8,
    pub version_number: u16,
    pub period_of_statistics: u16,
    pub number_of_crcs: u16,
    pub number_alignment_errors: u16,
    pub number_of_collisions: u16,
    pub number_send_aborts: u16,
    pub number_good_sends: u32,
    pub number_good_receives: u32,
    pub number_retransmits: u16,
    pub number_no_resource_conditions: u16,
    pub number_free_command_blocks: u16,
    pub total_number_command_blocks: u16,
    pub max_total_number_command_blocks: u16,
    pub number_pending_sessions: u16,
    pub max_number_pending_sessions: u16,
    pub max_total_sessions_possible: u16,
    pub session_data_packet_size: u16,
}

impl Statistics {
    pub const SIZE: usize = STATISTICS_SIZE;

    /// Statistics with only the unit id set
    pub fn with_unit_id(unit_id: [u8; 6]) -> Self {
        Self {
            unit_id,
            ..Self::default()
        }
    }

    pub fn read(reader: &mut WireReader<'_>) -> Result<Self> {
        Ok(Self {
            unit_id: reader.read_array()?,
            jumpers: reader.read_u8()?,
            test_result: reader.read_u8()?,
            version_number: reader.read_u16()?,
            period_of_statistics: reader.read_u16()?,
            number_of_crcs: reader.read_u16()?,
            number_alignment_errors: reader.read_u16()?,
            number_of_collisions: reader.read_u16()?,
            number_send_aborts: reader.read_u16()?,
            number_good_sends: reader.read_u32()?,
            number_good_receives: reader.read_u32()?,
            number_retransmits: reader.read_u16()?,
            number_no_resource_conditions: reader.read_u16()?,
            number_free_command_blocks: reader.read_u16()?,
            total_number_command_blocks: reader.read_u16()?,
            max_total_number_command_blocks: reader.read_u16()?,
            number_pending_sessions: reader.read_u16()?,
            max_number_pending_sessions: reader.read_u16()?,
            max_total_sessions_possible: reader.read_u16()?,
            session_data_packet_size: reader.read_u16()?,
        })
    }

    pub fn write_to<B: BufMut>(&self, buf: &mut B) {
        buf.put_slice(&self.unit_id);
        buf.put_u8(self.jumpers);
        buf.put_u8(self.test_result);
        buf.put_u16(self.version_number);
        buf.put_u16(self.period_of_statistics);
        buf.put_u16(self.number_of_crcs);
        buf.put_u16(self.number_alignment_errors);
        buf.put_u16(self.number_of_collisions);
        buf.put_u16(self.number_send_aborts);
        buf.put_u32(self.number_good_sends);
        buf.put_u32(self.number_good_receives);
        buf.put_u16(self.number_retransmits);
        buf.put_u16(self.number_no_resource_conditions);
        buf.put_u16(self.number_free_command_blocks);
        buf.put_u16(self.total_number_command_blocks);
        buf.put_u16(self.max_total_number_command_blocks);
        buf.put_u16(self.number_pending_sessions);
        buf.put_u16(self.max_number_pending_sessions);
        buf.put_u16(self.max_total_sessions_possible);
        buf.put_u16(self.session_data_packet_size);
    }
}
