use super::error::FramingError;

/// Reads the fields written by `ByteWriter`, never panicking on bad input.
pub struct ByteReader<'a> {
    buffer: &'a [u8],
    position: usize,
}

impl<'a> ByteReader<'a> {
    pub fn new(buffer: &'a [u8]) -> Self {
        Self {
            buffer,
            position: 0,
        }
    }

    pub fn remaining(&self) -> usize {
        self.buffer.len() - self.position
    }

    pub fn read_i32(&mut self) -> Result<i32, FramingError> {
        let bytes = self.take(4)?;
        Ok(i32::from_le_bytes([bytes[0], bytes[1], bytes[2], bytes[3]]))
    }

    /// A non-negative `i32` count or length.
    pub fn read_length(&mut self) -> Result<usize, FramingError> {
        let length = self.read_i32()?;
        if length < 0 {
            return Err(FramingError::NegativeLength { length });
        }
        Ok(length as usize)
    }

    pub fn read_string(&mut self) -> Result<String, FramingError> {
        let length = self.read_7bit_length()?;
        let bytes = self.take(length)?;
        String::from_utf8(bytes.to_vec()).map_err(|_| FramingError::InvalidUtf8 { length })
    }

    pub fn read_bytes(&mut self) -> Result<&'a [u8], FramingError> {
        let length = self.read_length()?;
        self.take(length)
    }

    /// Fails if any bytes are left unread.
    pub fn finish(&self) -> Result<(), FramingError> {
        match self.remaining() {
            0 => Ok(()),
            remaining => Err(FramingError::TrailingBytes { remaining }),
        }
    }

    fn take(&mut self, needed: usize) -> Result<&'a [u8], FramingError> {
        let remaining = self.remaining();
        if needed > remaining {
            return Err(FramingError::UnexpectedEnd { needed, remaining });
        }
        let start = self.position;
        self.position += needed;
        Ok(&self.buffer[start..self.position])
    }

    fn read_7bit_length(&mut self) -> Result<usize, FramingError> {
        let mut value: u32 = 0;
        for shift in (0..35).step_by(7) {
            let byte = self.take(1)?[0];
            value |= u32::from(byte & 0x7F) << shift;
            if byte & 0x80 == 0 {
                return Ok(value as usize);
            }
        }
        Err(FramingError::LengthPrefixOverflow)
    }
}
