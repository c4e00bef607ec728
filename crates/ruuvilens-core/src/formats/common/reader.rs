use crate::formats::error::DecodeError;

/// Bounds-checked access to a payload byte sequence. Both supported data
/// formats encode multi-byte fields big-endian, so one reader serves both.
pub struct PayloadReader<'a> {
    payload: &'a [u8],
}

impl<'a> PayloadReader<'a> {
    pub fn new(payload: &'a [u8]) -> Self {
        Self { payload }
    }

    pub fn require_len(&self, needed: usize) -> Result<(), DecodeError> {
        if self.payload.len() < needed {
            return Err(DecodeError::TooShort {
                needed,
                actual: self.payload.len(),
            });
        }
        Ok(())
    }

    pub fn read_u8(&self, offset: usize) -> Result<u8, DecodeError> {
        self.payload
            .get(offset)
            .copied()
            .ok_or(DecodeError::TooShort {
                needed: offset + 1,
                actual: self.payload.len(),
            })
    }

    pub fn read_u16_be(&self, range: std::ops::Range<usize>) -> Result<u16, DecodeError> {
        let bytes = self.read_slice(range)?;
        if bytes.len() != 2 {
            return Err(DecodeError::TooShort {
                needed: 2,
                actual: bytes.len(),
            });
        }
        Ok(u16::from_be_bytes([bytes[0], bytes[1]]))
    }

    pub fn read_i16_be(&self, range: std::ops::Range<usize>) -> Result<i16, DecodeError> {
        Ok(self.read_u16_be(range)? as i16)
    }

    pub fn read_slice(&self, range: std::ops::Range<usize>) -> Result<&'a [u8], DecodeError> {
        self.payload
            .get(range.clone())
            .ok_or(DecodeError::TooShort {
                needed: range.end,
                actual: self.payload.len(),
            })
    }
}
