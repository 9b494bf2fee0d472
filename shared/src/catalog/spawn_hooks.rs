use log::debug;

use crate::{
    terrain::{stamp_location, StampReport, TerrainAccess},
    transform::Pose,
    types::HostType,
};

use super::LocationCatalog;

impl LocationCatalog {
    /// Called by the host before it spawns a location named `name` its own
    /// way. Known blueprint locations are built from the catalog instead, so
    /// the default spawn is suppressed.
    pub fn should_suppress_default_spawn(&self, name: &str) -> bool {
        self.contains(name)
    }

    /// Called by the host after a location named `name` spawned at `pose`.
    /// Stamps the location's terrain modifiers on the authority.
    ///
    /// `None` when `name` is not a blueprint location or when `host_type` is
    /// not the authority; `terrain` is untouched in both cases.
    pub fn after_spawn<T: TerrainAccess + ?Sized>(
        &self,
        name: &str,
        pose: &Pose,
        host_type: HostType,
        terrain: &mut T,
    ) -> Option<StampReport> {
        let location = self.get(name)?;
        if location.terrain_mods().is_empty() {
            return None;
        }
        let report = stamp_location(location.terrain_mods(), pose, host_type, terrain)?;
        debug!(
            "Stamped terrain of {}: {} modifiers, {} vertices",
            name, report.modifiers_applied, report.vertices_touched
        );
        Some(report)
    }
}
