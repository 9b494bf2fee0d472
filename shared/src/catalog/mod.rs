//! The explicit, host-owned set of loaded blueprint locations.
//!
//! Loading, syncing and teardown all go through a `LocationCatalog` passed to
//! them by reference. Spawn hooks live here as well: the host asks the catalog
//! before and after spawning a location.

mod load;
mod location_catalog;
mod spawn_hooks;

pub use load::{load_all, LoadReport, LocationSource, SourceDocument};
pub use location_catalog::LocationCatalog;
