use std::collections::HashMap;

use log::{info, warn};

use crate::{
    codec::{decode_bulk, encode_bulk, BlobCodec},
    document::BlueprintLocation,
    error::LocationError,
    prefab::{build_location, ContainerHandle, PrefabHost},
};

/// Loaded blueprint locations keyed by id, in insertion order, plus the
/// containers instantiated for them.
#[derive(Default)]
pub struct LocationCatalog {
    locations: Vec<BlueprintLocation>,
    index: HashMap<String, usize>,
    containers: HashMap<String, ContainerHandle>,
}

impl LocationCatalog {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a catalog from documents in order. When two share an id the
    /// first is kept and the later one is logged and dropped.
    pub fn from_documents<I>(documents: I) -> Self
    where
        I: IntoIterator<Item = BlueprintLocation>,
    {
        let mut catalog = Self::new();
        for document in documents {
            if let Err(error) = catalog.insert(document) {
                warn!("{}, keeping the first", error);
            }
        }
        catalog
    }

    /// Add a document. A document whose id is already present is rejected
    /// and the existing one kept.
    pub fn insert(&mut self, location: BlueprintLocation) -> Result<(), LocationError> {
        if self.index.contains_key(location.id()) {
            return Err(LocationError::DuplicateIdentifier {
                id: location.id().to_string(),
            });
        }
        self.index
            .insert(location.id().to_string(), self.locations.len());
        self.locations.push(location);
        Ok(())
    }

    pub fn get(&self, id: &str) -> Option<&BlueprintLocation> {
        self.index.get(id).map(|index| &self.locations[*index])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Remove a document. A container still cached for it is forgotten, not
    /// destroyed; call `destroy_location` first to release it.
    pub fn remove(&mut self, id: &str) -> Option<BlueprintLocation> {
        let index = self.index.remove(id)?;
        let location = self.locations.remove(index);
        for position in self.index.values_mut() {
            if *position > index {
                *position -= 1;
            }
        }
        if self.containers.remove(id).is_some() {
            warn!("Removed location {} while its container is still alive", id);
        }
        Some(location)
    }

    /// Drop every document. Like `remove`, live containers are forgotten.
    pub fn clear(&mut self) {
        if !self.containers.is_empty() {
            warn!(
                "Clearing catalog with {} containers still alive",
                self.containers.len()
            );
        }
        self.locations.clear();
        self.index.clear();
        self.containers.clear();
    }

    pub fn len(&self) -> usize {
        self.locations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.locations.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &BlueprintLocation> {
        self.locations.iter()
    }

    pub fn ids(&self) -> impl Iterator<Item = &str> {
        self.locations.iter().map(|location| location.id())
    }

    /// Container for `id`, built on first call and cached afterwards. Later
    /// calls return the cached handle without touching `host`.
    pub fn create_location<H: PrefabHost + ?Sized>(
        &mut self,
        id: &str,
        host: &mut H,
    ) -> Result<ContainerHandle, LocationError> {
        if let Some(container) = self.containers.get(id) {
            return Ok(*container);
        }
        let location = self.get(id).ok_or_else(|| LocationError::UnknownLocation {
            id: id.to_string(),
        })?;
        let instance = build_location(location, host);
        self.containers.insert(id.to_string(), instance.container);
        Ok(instance.container)
    }

    /// Cached container for `id`, if one was created.
    pub fn container(&self, id: &str) -> Option<ContainerHandle> {
        self.containers.get(id).copied()
    }

    /// Release the cached container for `id`. Returns whether there was one.
    pub fn destroy_location<H: PrefabHost + ?Sized>(&mut self, id: &str, host: &mut H) -> bool {
        match self.containers.remove(id) {
            Some(container) => {
                host.destroy_container(container);
                true
            }
            None => false,
        }
    }

    /// Release every cached container, in catalog order. Returns how many
    /// were released.
    pub fn destroy_all<H: PrefabHost + ?Sized>(&mut self, host: &mut H) -> usize {
        let mut destroyed = 0;
        for location in &self.locations {
            if let Some(container) = self.containers.remove(location.id()) {
                host.destroy_container(container);
                destroyed += 1;
            }
        }
        if destroyed > 0 {
            info!("Destroyed {} location containers", destroyed);
        }
        destroyed
    }

    /// Encode every document with pieces as one initial-sync payload.
    pub fn to_bulk(&self, codec: &mut BlobCodec) -> Result<Vec<u8>, LocationError> {
        encode_bulk(codec, self.iter())
    }

    /// Decode an initial-sync payload into a fresh catalog. Duplicate ids
    /// keep the first.
    pub fn from_bulk(codec: &mut BlobCodec, payload: &[u8]) -> Result<Self, LocationError> {
        Ok(Self::from_documents(decode_bulk(codec, payload)?))
    }
}
