//! Instantiating a blueprint location in the host scene.
//!
//! The host owns prefabs, containers and the scene graph. A location becomes a
//! container holding its snap points and one instance per piece whose prefab
//! the host knows.

use std::collections::HashMap;

use glam::{Quat, Vec3};
use log::{debug, warn};

use crate::{document::BlueprintLocation, error::LocationError};

/// Opaque handle to a host object that holds an instantiated location.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct ContainerHandle(pub u64);

/// Scene operations the host provides for instantiation.
pub trait PrefabHost {
    /// A resolved prefab, cheap to clone.
    type Prefab: Clone;

    /// Create an empty, inactive container for `location`.
    fn create_container(&mut self, location: &BlueprintLocation) -> ContainerHandle;

    /// Resolve a piece name to a prefab. `None` when the host has no prefab
    /// with that name.
    fn lookup_prefab(&self, name: &str) -> Option<Self::Prefab>;

    /// Place one instance of `prefab` inside `container`, in container-local
    /// space.
    fn instantiate(
        &mut self,
        container: ContainerHandle,
        prefab: &Self::Prefab,
        position: Vec3,
        rotation: Quat,
        scale: Vec3,
    );

    /// Add an attachment marker inside `container`.
    fn add_snap_point(&mut self, container: ContainerHandle, position: Vec3);

    /// Release a container and everything in it.
    fn destroy_container(&mut self, container: ContainerHandle);
}

/// Outcome of building one location container.
#[derive(Debug, PartialEq)]
pub struct LocationInstance {
    pub container: ContainerHandle,
    /// Pieces instantiated
    pub spawned: usize,
    /// Pieces skipped because their prefab is unknown
    pub skipped: usize,
    /// One `MissingPrefab` per distinct unknown piece name
    pub missing_prefabs: Vec<LocationError>,
}

/// Build a fresh container for `location`: snap points first, then every
/// piece whose prefab resolves.
///
/// Each distinct piece name is looked up once, in first-occurrence order.
/// Pieces with an unknown prefab are skipped; the rest of the location still
/// builds.
pub fn build_location<H: PrefabHost + ?Sized>(
    location: &BlueprintLocation,
    host: &mut H,
) -> LocationInstance {
    let container = host.create_container(location);

    for snap_point in location.snap_points() {
        host.add_snap_point(container, snap_point.position());
    }

    let mut prefabs: HashMap<&str, Option<H::Prefab>> = HashMap::new();
    let mut missing_prefabs = Vec::new();
    for piece in location.piece_entries() {
        if prefabs.contains_key(piece.name()) {
            continue;
        }
        let prefab = host.lookup_prefab(piece.name());
        if prefab.is_none() {
            let error = LocationError::MissingPrefab {
                prefab: piece.name().to_string(),
                location: location.id().to_string(),
            };
            warn!("{}", error);
            missing_prefabs.push(error);
        }
        prefabs.insert(piece.name(), prefab);
    }

    let mut spawned = 0;
    let mut skipped = 0;
    for piece in location.piece_entries() {
        match prefabs.get(piece.name()) {
            Some(Some(prefab)) => {
                host.instantiate(container, prefab, piece.position(), piece.rotation(), piece.scale());
                spawned += 1;
            }
            _ => skipped += 1,
        }
    }

    debug!(
        "Built location {}: {} pieces, {} skipped, {} snap points",
        location.id(),
        spawned,
        skipped,
        location.snap_points().len()
    );

    LocationInstance {
        container,
        spawned,
        skipped,
        missing_prefabs,
    }
}
