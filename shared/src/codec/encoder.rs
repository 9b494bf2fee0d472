cfg_if! {
    if #[cfg(feature = "zstd_support")]
    {
        use zstd::bulk::Compressor;

        use super::compression_config::CompressionMode;
        use super::error::EncoderError;

        pub struct Encoder {
            compressor: Compressor<'static>,
        }

        impl Encoder {
            /// Try to create a new Encoder with the specified compression mode
            pub fn try_new(compression_mode: &CompressionMode) -> Result<Self, EncoderError> {
                let compressor = match compression_mode {
                    CompressionMode::Default(compression_level) => Compressor::new(*compression_level)
                        .map_err(|_| EncoderError::CompressorCreationFailed {
                            level: *compression_level,
                        })?,
                    CompressionMode::Dictionary(compression_level, dictionary) => {
                        Compressor::with_dictionary(*compression_level, dictionary).map_err(|_| {
                            EncoderError::CompressorWithDictionaryFailed {
                                level: *compression_level,
                            }
                        })?
                    }
                };

                Ok(Self { compressor })
            }

            /// Try to encode a payload, returning error on compression failure
            pub fn try_encode(&mut self, payload: &[u8]) -> Result<Vec<u8>, EncoderError> {
                self.compressor
                    .compress(payload)
                    .map_err(|_| EncoderError::CompressionFailed {
                        payload_size: payload.len(),
                    })
            }
        }
    }
    else
    {
        use super::compression_config::CompressionMode;
        use super::error::EncoderError;

        pub struct Encoder;

        impl Encoder {
            pub fn try_new(_: &CompressionMode) -> Result<Self, EncoderError> {
                Ok(Self)
            }

            pub fn try_encode(&mut self, payload: &[u8]) -> Result<Vec<u8>, EncoderError> {
                Ok(payload.to_vec())
            }
        }
    }
}
