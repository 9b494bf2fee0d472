use log::{debug, info, warn};

use crate::{document::BlueprintLocation, error::LocationError};

use super::LocationCatalog;

/// One candidate document from a `LocationSource`.
pub struct SourceDocument {
    /// Where the document came from, for logs (e.g. a file path)
    pub origin: String,
    pub result: Result<BlueprintLocation, LocationError>,
}

/// Somewhere blueprint locations are loaded from: a directory on disk, an
/// archive, memory.
pub trait LocationSource {
    /// Every candidate document, in a stable order. Failures to read or parse
    /// a single document are reported per document.
    fn documents(&mut self) -> Vec<SourceDocument>;
}

/// What `load_all` did.
#[derive(Debug, Default, PartialEq)]
pub struct LoadReport {
    /// Ids added to the catalog, in order
    pub loaded: Vec<String>,
    /// Origins that were skipped, with the reason
    pub skipped: Vec<(String, LocationError)>,
}

/// Load every document of `source` into a new catalog.
///
/// `id_prefix` (e.g. `bplocation:`) is prepended to every id. A document
/// that fails to load, or whose id is already taken, is logged and skipped;
/// the rest of the batch still loads.
pub fn load_all<S: LocationSource + ?Sized>(
    source: &mut S,
    id_prefix: &str,
) -> (LocationCatalog, LoadReport) {
    let mut catalog = LocationCatalog::new();
    let mut report = LoadReport::default();

    for SourceDocument { origin, result } in source.documents() {
        let outcome = result.and_then(|location| {
            let location = location.with_id_prefix(id_prefix);
            let id = location.id().to_string();
            catalog.insert(location).map(|_| id)
        });
        match outcome {
            Ok(id) => {
                debug!("Loaded blueprint location {} from {}", id, origin);
                report.loaded.push(id);
            }
            Err(error) => {
                warn!("Skipping blueprint location {}: {}", origin, error);
                report.skipped.push((origin, error));
            }
        }
    }

    info!(
        "Loaded {} blueprint locations ({} skipped)",
        report.loaded.len(),
        report.skipped.len()
    );
    (catalog, report)
}
