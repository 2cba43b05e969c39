//! Bounds-checked big-endian reader over a received datagram

use crate::error::{Error, Result};
use byteorder::{BigEndian, ReadBytesExt};
use std::io::{self, Cursor, Read};

/// Cursor that advances by field width and fails closed at the end of the buffer
pub struct WireReader<'a> {
    cursor: Cursor<&'a [u8]>,
}

impl<'a> WireReader<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self {
            cursor: Cursor::new(buf),
        }
    }

    /// Bytes consumed so far
    pub fn position(&self) -> usize {
        self.cursor.position() as usize
    }

    /// Total length of the underlying buffer
    pub fn len(&self) -> usize {
        self.cursor.get_ref().len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn remaining(&self) -> usize {
        self.len().saturating_sub(self.position())
    }

    pub fn read_u8(&mut self) -> Result<u8> {
        self.ensure(1)?;
        self.cursor.read_u8().map_err(|e| self.short_read(e, 1))
    }

    pub fn read_u16(&mut self) -> Result<u16> {
        self.ensure(2)?;
        self.cursor
            .read_u16::<BigEndian>()
            .map_err(|e| self.short_read(e, 2))
    }

    pub fn read_u32(&mut self) -> Result<u32> {
        self.ensure(4)?;
        self.cursor
            .read_u32::<BigEndian>()
            .map_err(|e| self.short_read(e, 4))
    }

    pub fn read_array<const N: usize>(&mut self) -> Result<[u8; N]> {
        self.ensure(N)?;
        let mut out = [0u8; N];
        self.cursor
            .read_exact(&mut out)
            .map_err(|e| self.short_read(e, N))?;
        Ok(out)
    }

    pub fn skip(&mut self, count: usize) -> Result<()> {
        self.ensure(count)?;
        self.cursor.set_position((self.position() + count) as u64);
        Ok(())
    }

    fn ensure(&self, width: usize) -> Result<()> {
        if self.remaining() < width {
            return Err(Error::BufferTooSmall {
                need: self.position() + width,
                have: self.len(),
            });
        }
        Ok(())
    }

    fn short_read(&self, _err: io::Error, width: usize) -> Error {
        Error::BufferTooSmall {
            need: self.position() + width,
            have: self.len(),
        }
    }
}
