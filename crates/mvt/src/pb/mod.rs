//! Bounds-checked Protocol Buffers primitives over an in-memory buffer.
//!
//! [`PbReader`] is a cursor with an explicit end bound. Reading a
//! length-delimited field yields another `PbReader` limited to that field's
//! bytes, which is how nested messages are kept inside their parent.

pub mod varint;

use crate::error::DecodeError;

/// Wire types recognised by the reader.
///
/// The deprecated group types (3, 4) and the unused codes (6, 7) are rejected.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum WireType {
    Varint,
    Fixed64,
    LengthDelimited,
    Fixed32,
}

impl WireType {
    pub fn from_code(code: u64) -> Option<WireType> {
        match code {
            0 => Some(WireType::Varint),
            1 => Some(WireType::Fixed64),
            2 => Some(WireType::LengthDelimited),
            5 => Some(WireType::Fixed32),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            WireType::Varint => "varint",
            WireType::Fixed64 => "fixed64",
            WireType::LengthDelimited => "length-delimited",
            WireType::Fixed32 => "fixed32",
        }
    }
}

/// Read cursor over `data[pos..end]`.
///
/// `data` is always the complete input buffer, so `pos` is an absolute offset
/// usable in error reports at any nesting depth.
#[derive(Copy, Clone, Debug)]
pub struct PbReader<'a> {
    data: &'a [u8],
    pos: usize,
    end: usize,
}

impl<'a> PbReader<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self {
            data,
            pos: 0,
            end: data.len(),
        }
    }

    /// Absolute offset of the cursor.
    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn has_remaining(&self) -> bool {
        self.pos < self.end
    }

    fn remaining(&self) -> usize {
        self.end - self.pos
    }

    /// Unread bytes up to the end bound.
    pub fn as_bytes(&self) -> &'a [u8] {
        &self.data[self.pos..self.end]
    }

    pub fn read_varint(&mut self) -> Result<u64, DecodeError> {
        match varint::decode_varint(self.as_bytes()) {
            Some((value, len)) => {
                self.pos += len;
                Ok(value)
            }
            None => Err(DecodeError::TruncatedVarint { offset: self.pos }),
        }
    }

    /// Read a field tag, returning the field number and wire type.
    pub fn read_tag(&mut self) -> Result<(u64, WireType), DecodeError> {
        let offset = self.pos;
        let tag = self.read_varint()?;
        let code = tag & 0x07;
        match WireType::from_code(code) {
            Some(wire_type) => Ok((tag >> 3, wire_type)),
            None => Err(DecodeError::UnknownWireType {
                offset,
                code: code as u8,
            }),
        }
    }

    /// Read a length prefix and return a reader bounded to the bytes it
    /// covers. `self` advances past them.
    pub fn read_length_delimited(&mut self) -> Result<PbReader<'a>, DecodeError> {
        let len = self.read_varint()?;
        let start = self.advance(len)?;
        Ok(PbReader {
            data: self.data,
            pos: start,
            end: self.pos,
        })
    }

    pub fn skip_field(&mut self, wire_type: WireType) -> Result<(), DecodeError> {
        match wire_type {
            WireType::Varint => {
                self.read_varint()?;
            }
            WireType::Fixed64 => {
                self.advance(8)?;
            }
            WireType::LengthDelimited => {
                self.read_length_delimited()?;
            }
            WireType::Fixed32 => {
                self.advance(4)?;
            }
        }
        Ok(())
    }

    /// Move the cursor forward `len` bytes, returning the old position.
    fn advance(&mut self, len: u64) -> Result<usize, DecodeError> {
        let remaining = self.remaining();
        match usize::try_from(len) {
            Ok(len) if len <= remaining => {
                let start = self.pos;
                self.pos += len;
                Ok(start)
            }
            _ => Err(DecodeError::TruncatedMessage {
                offset: self.pos,
                needed: len,
                remaining,
            }),
        }
    }
}
