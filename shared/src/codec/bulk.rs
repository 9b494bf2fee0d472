use log::{debug, info};

use crate::{document::BlueprintLocation, error::LocationError};

use super::{
    blob::BlobCodec,
    byte_reader::ByteReader,
    byte_writer::ByteWriter,
    error::BlobError,
    package::{decode_package, encode_package},
};

/// Frame every document as one initial-sync payload: a count, then each
/// package as a byte array. Documents without pieces are left out and not
/// counted.
pub fn encode_bulk<'a, I>(codec: &mut BlobCodec, docs: I) -> Result<Vec<u8>, LocationError>
where
    I: IntoIterator<Item = &'a BlueprintLocation>,
{
    let mut packages = Vec::new();
    for doc in docs {
        match encode_package(codec, doc)? {
            Some(package) => packages.push(package),
            None => debug!("Skipping {} in sync: no pieces", doc.id()),
        }
    }

    let mut writer = ByteWriter::new();
    writer.write_i32(packages.len() as i32);
    for package in &packages {
        writer.write_bytes(package);
    }
    info!(
        "Encoded {} blueprint locations for sync ({} bytes)",
        packages.len(),
        writer.len()
    );
    Ok(writer.to_bytes())
}

/// Decode an initial-sync payload in order. The payload is a single
/// message, so any corrupt package fails all of it.
pub fn decode_bulk(
    codec: &mut BlobCodec,
    payload: &[u8],
) -> Result<Vec<BlueprintLocation>, LocationError> {
    let mut reader = ByteReader::new(payload);
    let count = reader.read_length().map_err(BlobError::from)?;
    let mut docs = Vec::with_capacity(count.min(reader.remaining()));
    for _ in 0..count {
        let package = reader.read_bytes().map_err(BlobError::from)?;
        docs.push(decode_package(codec, package)?);
    }
    reader.finish().map_err(BlobError::from)?;
    Ok(docs)
}
