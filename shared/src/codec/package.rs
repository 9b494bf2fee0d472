use crate::{document::BlueprintLocation, error::LocationError};

use super::{blob::BlobCodec, byte_reader::ByteReader, byte_writer::ByteWriter, error::BlobError};

/// Frame `doc` for transmission: its id, then its blob. `None` when the
/// document has no pieces.
pub fn encode_package(
    codec: &mut BlobCodec,
    doc: &BlueprintLocation,
) -> Result<Option<Vec<u8>>, LocationError> {
    let Some(blob) = codec.encode(doc)? else {
        return Ok(None);
    };
    let mut writer = ByteWriter::new();
    writer.write_string(doc.id());
    writer.write_bytes(&blob);
    Ok(Some(writer.to_bytes()))
}

/// Read a package produced by `encode_package`. The document takes the id
/// carried in the package.
pub fn decode_package(
    codec: &mut BlobCodec,
    package: &[u8],
) -> Result<BlueprintLocation, LocationError> {
    let mut reader = ByteReader::new(package);
    let id = reader.read_string().map_err(BlobError::from)?;
    let blob = reader.read_bytes().map_err(BlobError::from)?;
    reader.finish().map_err(BlobError::from)?;
    codec.decode(&id, blob)
}
