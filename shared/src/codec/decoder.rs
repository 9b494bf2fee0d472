cfg_if! {
    if #[cfg(feature = "zstd_support")]
    {
        use std::io::Read;

        use zstd::stream::read::Decoder as StreamDecoder;

        use super::compression_config::CompressionMode;
        use super::error::DecoderError;
        use super::MAX_BLOB_SIZE;

        pub struct Decoder {
            dictionary: Option<Vec<u8>>,
        }

        impl Decoder {
            pub fn new(compression_mode: &CompressionMode) -> Self {
                let dictionary = match compression_mode {
                    CompressionMode::Default(_) => None,
                    CompressionMode::Dictionary(_, dictionary) => Some(dictionary.clone()),
                };
                Self { dictionary }
            }

            /// Try to decode a payload, returning error on decompression failure
            ///
            /// SECURITY: Blobs arrive from disk and from the network. Any malformed
            /// or oversized payload returns an error instead of panicking or
            /// allocating without bound.
            pub fn try_decode(&mut self, payload: &[u8]) -> Result<Vec<u8>, DecoderError> {
                let failed = || DecoderError::DecompressionFailed {
                    payload_size: payload.len(),
                };

                let stream = match &self.dictionary {
                    None => StreamDecoder::with_buffer(payload).map_err(|_| failed())?,
                    Some(dictionary) => StreamDecoder::with_dictionary(payload, dictionary)
                        .map_err(|_| DecoderError::DecompressorWithDictionaryFailed)?,
                };

                let mut result = Vec::new();
                stream
                    .take(MAX_BLOB_SIZE as u64 + 1)
                    .read_to_end(&mut result)
                    .map_err(|_| failed())?;
                if result.len() > MAX_BLOB_SIZE {
                    return Err(DecoderError::PayloadTooLarge {
                        limit: MAX_BLOB_SIZE,
                    });
                }
                Ok(result)
            }
        }
    }
    else
    {
        use super::compression_config::CompressionMode;
        use super::error::DecoderError;
        use super::MAX_BLOB_SIZE;

        pub struct Decoder;

        impl Decoder {
            pub fn new(_: &CompressionMode) -> Self {
                Self
            }

            pub fn try_decode(&mut self, payload: &[u8]) -> Result<Vec<u8>, DecoderError> {
                if payload.len() > MAX_BLOB_SIZE {
                    return Err(DecoderError::PayloadTooLarge {
                        limit: MAX_BLOB_SIZE,
                    });
                }
                Ok(payload.to_vec())
            }
        }
    }
}
