//! Binary forms of a blueprint location.
//!
//! ```text
//! blob:    compress( i32 line_count, line_count x string )
//! package: string id, byte-array blob
//! bulk:    i32 count, count x byte-array package
//! ```
//!
//! Strings carry a 7-bit variable length prefix; byte arrays and counts are
//! little-endian i32.

mod blob;
mod bulk;
mod byte_reader;
mod byte_writer;
mod compression_config;
mod decoder;
mod encoder;
mod error;
mod package;

/// Upper bound on a decompressed blob, in bytes.
pub const MAX_BLOB_SIZE: usize = 16 * 1024 * 1024;

pub use blob::{decode_blob, encode_blob, BlobCodec};
pub use bulk::{decode_bulk, encode_bulk};
pub use byte_reader::ByteReader;
pub use byte_writer::ByteWriter;
pub use compression_config::{CompressionConfig, CompressionMode};
pub use decoder::Decoder;
pub use encoder::Encoder;
pub use error::{BlobError, DecoderError, EncoderError, FramingError};
pub use package::{decode_package, encode_package};
