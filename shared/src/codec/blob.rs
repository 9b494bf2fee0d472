use log::debug;

use crate::{
    document::{parse_lines, BlueprintLocation, Format, SerializeOptions},
    error::LocationError,
};

use super::{
    byte_reader::ByteReader, byte_writer::ByteWriter, compression_config::CompressionConfig,
    decoder::Decoder, encoder::Encoder, error::BlobError,
};

/// Converts documents to and from compressed blobs.
///
/// Holds a compressor and decompressor so a batch of documents reuses one
/// context.
pub struct BlobCodec {
    encoder: Encoder,
    decoder: Decoder,
    serialize_options: SerializeOptions,
}

impl BlobCodec {
    pub fn try_new(config: &CompressionConfig) -> Result<Self, LocationError> {
        Ok(Self {
            encoder: Encoder::try_new(&config.mode)?,
            decoder: Decoder::new(&config.mode),
            serialize_options: SerializeOptions::default(),
        })
    }

    /// Use `options` when serializing documents. Blobs are always read back
    /// as `.bplocation` text, so only `location_config` is honoured.
    pub fn with_serialize_options(mut self, options: SerializeOptions) -> Self {
        self.serialize_options = SerializeOptions {
            format: Format::BlueprintLocation,
            ..options
        };
        self
    }

    /// Serialize, frame and compress `doc`. `None` when the document has no
    /// pieces.
    pub fn encode(&mut self, doc: &BlueprintLocation) -> Result<Option<Vec<u8>>, LocationError> {
        let Some(lines) = doc.to_lines_with(&self.serialize_options) else {
            return Ok(None);
        };

        let mut writer = ByteWriter::new();
        writer.write_i32(lines.len() as i32);
        for line in &lines {
            writer.write_string(line);
        }
        let compressed = self.encoder.try_encode(&writer.to_bytes())?;
        debug!(
            "Encoded {} as blob: {} lines, {} bytes",
            doc.id(),
            lines.len(),
            compressed.len()
        );
        Ok(Some(compressed))
    }

    /// Decompress and unframe `bytes`, then parse the lines as the document
    /// `id`.
    ///
    /// SECURITY: `bytes` may come from the network; the line count is never
    /// trusted for preallocation.
    pub fn decode(&mut self, id: &str, bytes: &[u8]) -> Result<BlueprintLocation, LocationError> {
        let lines = self.decode_lines(bytes)?;
        Ok(parse_lines(id, &lines, Format::BlueprintLocation)?)
    }

    fn decode_lines(&mut self, bytes: &[u8]) -> Result<Vec<String>, BlobError> {
        let frame = self.decoder.try_decode(bytes)?;
        let mut reader = ByteReader::new(&frame);
        let count = reader.read_length()?;
        let mut lines = Vec::with_capacity(count.min(reader.remaining()));
        for _ in 0..count {
            lines.push(reader.read_string()?);
        }
        reader.finish()?;
        Ok(lines)
    }
}

/// Encode with the default compression config.
pub fn encode_blob(doc: &BlueprintLocation) -> Result<Option<Vec<u8>>, LocationError> {
    BlobCodec::try_new(&CompressionConfig::default())?.encode(doc)
}

/// Decode with the default compression config.
pub fn decode_blob(id: &str, bytes: &[u8]) -> Result<BlueprintLocation, LocationError> {
    BlobCodec::try_new(&CompressionConfig::default())?.decode(id, bytes)
}
