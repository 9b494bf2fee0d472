use log::info;

use bplocation_shared::{
    load_all, BlobCodec, ContainerHandle, HostType, LoadReport, LocationCatalog, LocationError,
    LocationSource, Pose, PrefabHost, StampReport, TerrainAccess,
};

use crate::DirectorySource;

use super::ServerConfig;

/// Owns the authoritative catalog of a running world.
pub struct LocationServer {
    config: ServerConfig,
    codec: BlobCodec,
    catalog: LocationCatalog,
}

impl LocationServer {
    pub fn new(config: ServerConfig) -> Result<Self, LocationError> {
        let codec = BlobCodec::try_new(&config.compression)?;
        Ok(Self {
            config,
            codec,
            catalog: LocationCatalog::new(),
        })
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    /// Replace the catalog with the blueprint locations of `world_name`,
    /// read from the configured locations directory.
    pub fn load_world<H: PrefabHost + ?Sized>(
        &mut self,
        world_name: &str,
        host: &mut H,
    ) -> LoadReport {
        let mut source = DirectorySource::new(&self.config.locations_directory, world_name);
        self.load_from(&mut source, host)
    }

    /// Replace the catalog with every document of `source`, ids prefixed
    /// with the configured prefix.
    ///
    /// `host` releases containers built from the previous catalog.
    pub fn load_from<S: LocationSource + ?Sized, H: PrefabHost + ?Sized>(
        &mut self,
        source: &mut S,
        host: &mut H,
    ) -> LoadReport {
        let (catalog, report) = load_all(source, &self.config.id_prefix);
        self.catalog.destroy_all(host);
        self.catalog = catalog;
        report
    }

    /// Payload sent once to each client after it connects.
    pub fn initial_sync_payload(&mut self) -> Result<Vec<u8>, LocationError> {
        let payload = self.catalog.to_bulk(&mut self.codec)?;
        info!("Sending {} blueprint locations to client", self.catalog.len());
        Ok(payload)
    }

    pub fn should_suppress_default_spawn(&self, name: &str) -> bool {
        self.catalog.should_suppress_default_spawn(name)
    }

    pub fn create_location<H: PrefabHost + ?Sized>(
        &mut self,
        id: &str,
        host: &mut H,
    ) -> Result<ContainerHandle, LocationError> {
        self.catalog.create_location(id, host)
    }

    /// Stamp terrain for a location that just spawned. The server is always
    /// the authority.
    pub fn after_spawn<T: TerrainAccess + ?Sized>(
        &self,
        name: &str,
        pose: &Pose,
        terrain: &mut T,
    ) -> Option<StampReport> {
        self.catalog.after_spawn(name, pose, HostType::Server, terrain)
    }

    /// Release every container and unload every document.
    pub fn shutdown<H: PrefabHost + ?Sized>(&mut self, host: &mut H) {
        self.catalog.destroy_all(host);
        self.catalog.clear();
        info!("Unloaded blueprint locations");
    }
}
