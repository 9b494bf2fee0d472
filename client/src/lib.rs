//! # Blueprint Location Client
//! Receives the server's blueprint locations once per connection and answers
//! the host's spawn hooks on a non-authoritative peer.

#![deny(
    trivial_casts,
    trivial_numeric_casts,
    unstable_features,
    unused_import_braces
)]

pub mod shared {
    pub use bplocation_shared::{
        BlueprintLocation, CompressionConfig, CompressionMode, ContainerHandle, HostType,
        LocationCatalog, LocationError, Pose, PrefabHost, StampReport, TerrainAccess,
    };
}

mod client;

pub use client::{ClientConfig, LocationClient};
