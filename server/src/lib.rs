//! # Blueprint Location Server
//! The authoritative side: loads blueprint locations for a world from disk,
//! builds the initial sync payload sent to every client, and stamps terrain
//! when a location spawns.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use bplocation_shared::{
        BlueprintLocation, CompressionConfig, CompressionMode, ContainerHandle, HostType,
        LoadReport, LocationCatalog, LocationError, LocationSource, Pose, PrefabHost,
        StampReport, TerrainAccess,
    };
}

mod directory_source;
mod server;

pub use directory_source::{load_file, DirectorySource};
pub use server::{LocationServer, ServerConfig};
