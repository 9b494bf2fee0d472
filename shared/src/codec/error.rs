use thiserror::Error;

/// Errors that can occur while compressing a blob
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EncoderError {
    /// Failed to create compressor with the specified configuration
    #[error("Failed to create compressor with compression level {level}")]
    CompressorCreationFailed {
        level: i32,
    },

    /// Failed to create compressor with dictionary
    #[error("Failed to create compressor with dictionary (compression level {level})")]
    CompressorWithDictionaryFailed {
        level: i32,
    },

    /// Compression operation failed
    #[error("Failed to compress payload of {payload_size} bytes")]
    CompressionFailed {
        payload_size: usize,
    },
}

/// Errors that can occur while decompressing a blob
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecoderError {
    /// Failed to create decompressor with dictionary
    #[error("Failed to create decompressor with dictionary")]
    DecompressorWithDictionaryFailed,

    /// Decompression operation failed (SECURITY: potentially malicious payload)
    #[error("Failed to decompress payload of {payload_size} bytes (possible malformed or malicious data)")]
    DecompressionFailed {
        payload_size: usize,
    },

    /// Decompressed data exceeds the size limit
    #[error("Decompressed payload exceeds the limit of {limit} bytes")]
    PayloadTooLarge {
        limit: usize,
    },
}

/// Errors that can occur while reading length-prefixed binary framing
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FramingError {
    /// The buffer ended before a field was complete
    #[error("Unexpected end of data: needed {needed} bytes, {remaining} remaining")]
    UnexpectedEnd {
        needed: usize,
        remaining: usize,
    },

    /// A count or length prefix is negative
    #[error("Negative length prefix {length}")]
    NegativeLength {
        length: i32,
    },

    /// A 7-bit encoded string length runs past five bytes
    #[error("String length prefix is longer than 5 bytes")]
    LengthPrefixOverflow,

    /// A string field is not valid UTF-8
    #[error("String field of {length} bytes is not valid UTF-8")]
    InvalidUtf8 {
        length: usize,
    },

    /// Bytes remain after the last expected field
    #[error("{remaining} unexpected trailing bytes")]
    TrailingBytes {
        remaining: usize,
    },
}

/// A blob or package that cannot be unpacked
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlobError {
    /// Decompression failed
    #[error("Decoder error: {0}")]
    Decoder(#[from] DecoderError),

    /// The decompressed frame is malformed
    #[error("Framing error: {0}")]
    Framing(#[from] FramingError),
}
