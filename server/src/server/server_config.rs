use std::{default::Default, path::PathBuf};

use bplocation_shared::CompressionConfig;

/// Contains Config properties which will be used by the Server
#[derive(Clone)]
pub struct ServerConfig {
    /// Directory holding one sub-directory of `*.bplocation` files per world
    pub locations_directory: PathBuf,
    /// Prepended to every loaded id, so blueprint locations never collide
    /// with the host's own location names
    pub id_prefix: String,
    /// Compression of the blobs sent to clients
    pub compression: CompressionConfig,
}

impl ServerConfig {
    pub const DEFAULT_ID_PREFIX: &'static str = "bplocation:";
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            locations_directory: PathBuf::from("BlueprintLocations"),
            id_prefix: Self::DEFAULT_ID_PREFIX.to_string(),
            compression: CompressionConfig::default(),
        }
    }
}
