//! # Blueprint Location Shared
//! Codecs, terrain stamping and the location catalog shared between
//! bplocation-server & bplocation-client crates.

#![deny(trivial_numeric_casts, unstable_features, unused_import_braces)]

#[macro_use]
extern crate cfg_if;

mod catalog;
mod codec;
mod document;
mod entry;
mod error;
mod numeric;
mod prefab;
mod terrain;
mod transform;
mod types;

pub use catalog::{load_all, LoadReport, LocationCatalog, LocationSource, SourceDocument};
pub use codec::{
    decode_blob, decode_bulk, decode_package, encode_blob, encode_bulk, encode_package,
    BlobCodec, BlobError, ByteReader, ByteWriter, CompressionConfig, CompressionMode, Decoder,
    DecoderError, Encoder, EncoderError, FramingError, MAX_BLOB_SIZE,
};
pub use document::{
    parse_lines, serialize_lines, Biome, BlueprintLocation, DocumentError, Format, GroupName,
    LocationConfig, LocationConfigOutput, SerializeOptions, Section,
};
pub use entry::{
    EntryError, EntryKind, LineEntry, PieceEntry, SnapPointEntry, TerrainModEntry,
    FIELD_SEPARATOR,
};
pub use error::LocationError;
pub use numeric::{format_bool, format_float, parse_bool, parse_float, parse_int};
pub use prefab::{build_location, ContainerHandle, LocationInstance, PrefabHost};
pub use terrain::{
    level_weight, modifier_query, stamp_location, stamp_modifier, GridSizeError, HeightmapGrid,
    PaintType, StampReport, TerrainAccess, TerrainError, TerrainOp, TerrainQuery, TerrainShape,
};
pub use transform::{
    format_quat, format_vec3, parse_quat, parse_vec3, yaw_degrees, yaw_rotation, Pose,
    COMPONENT_SEPARATOR,
};
pub use types::HostType;

pub use glam::{Quat, Vec2, Vec3};
