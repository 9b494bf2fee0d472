/// Appends little-endian, length-prefixed fields to a growable buffer.
///
/// Layout conventions:
/// - `i32`: 4 bytes little-endian
/// - string: 7-bit variable length prefix (low groups first, high bit set
///   while more bytes follow), then UTF-8 bytes
/// - byte array: `i32` length, then the bytes
pub struct ByteWriter {
    buffer: Vec<u8>,
}

impl ByteWriter {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn write_i32(&mut self, value: i32) {
        self.buffer.extend_from_slice(&value.to_le_bytes());
    }

    pub fn write_string(&mut self, value: &str) {
        self.write_7bit_length(value.len());
        self.buffer.extend_from_slice(value.as_bytes());
    }

    pub fn write_bytes(&mut self, value: &[u8]) {
        // lengths beyond i32::MAX never reach here: blobs are capped far below
        self.write_i32(value.len() as i32);
        self.buffer.extend_from_slice(value);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn to_bytes(self) -> Vec<u8> {
        self.buffer
    }

    fn write_7bit_length(&mut self, length: usize) {
        let mut value = length as u32;
        while value >= 0x80 {
            self.buffer.push((value as u8) | 0x80);
            value >>= 7;
        }
        self.buffer.push(value as u8);
    }
}

impl Default for ByteWriter {
    fn default() -> Self {
        Self::new()
    }
}
