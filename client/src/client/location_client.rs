use log::{info, warn};

use bplocation_shared::{
    BlobCodec, ContainerHandle, HostType, LocationCatalog, LocationError, Pose, PrefabHost,
    StampReport, TerrainAccess,
};

use super::ClientConfig;

/// The blueprint locations a client learned from its server.
pub struct LocationClient {
    codec: BlobCodec,
    catalog: LocationCatalog,
}

impl LocationClient {
    pub fn new(config: ClientConfig) -> Result<Self, LocationError> {
        Ok(Self {
            codec: BlobCodec::try_new(&config.compression)?,
            catalog: LocationCatalog::new(),
        })
    }

    pub fn catalog(&self) -> &LocationCatalog {
        &self.catalog
    }

    /// Replace the catalog wholesale with the server's initial sync. On a
    /// corrupt payload the current catalog is kept.
    ///
    /// `host` releases containers built from the previous catalog.
    pub fn receive_initial_sync<H: PrefabHost + ?Sized>(
        &mut self,
        payload: &[u8],
        host: &mut H,
    ) -> Result<usize, LocationError> {
        let catalog = match LocationCatalog::from_bulk(&mut self.codec, payload) {
            Ok(catalog) => catalog,
            Err(error) => {
                warn!("Ignoring blueprint location sync: {}", error);
                return Err(error);
            }
        };
        self.catalog.destroy_all(host);
        self.catalog = catalog;
        info!("Received {} blueprint locations from server", self.catalog.len());
        Ok(self.catalog.len())
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

    /// Terrain arrives from the server, so this never stamps; it always
    /// returns `None` and leaves `terrain` untouched.
    pub fn after_spawn<T: TerrainAccess + ?Sized>(
        &self,
        name: &str,
        pose: &Pose,
        terrain: &mut T,
    ) -> Option<StampReport> {
        self.catalog.after_spawn(name, pose, HostType::Client, terrain)
    }

    /// Release every container and forget every document, e.g. on
    /// disconnect.
    pub fn shutdown<H: PrefabHost + ?Sized>(&mut self, host: &mut H) {
        self.catalog.destroy_all(host);
        self.catalog.clear();
    }
}
