use thiserror::Error;

use crate::{
    codec::{BlobError, EncoderError},
    document::DocumentError,
    terrain::TerrainError,
};

/// Top-level error for loading, syncing and instantiating blueprint locations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocationError {
    /// Unknown file extension or format tag at a load entry point
    #[error("Format {extension:?} not recognized. Expected .bplocation or .blueprint")]
    UnrecognizedFormat {
        extension: String,
    },

    /// A line of the document does not match its section's layout
    #[error("Malformed document: {0}")]
    MalformedEntry(DocumentError),

    /// A blob or package could not be decompressed or unframed
    #[error("Corrupt blob: {0}")]
    CorruptBlob(#[from] BlobError),

    /// A blob could not be compressed
    #[error("Compression failed: {0}")]
    Compression(#[from] EncoderError),

    /// A piece references a prefab the host does not know
    #[error("Prefab {prefab:?} for location {location:?} does not exist")]
    MissingPrefab {
        prefab: String,
        location: String,
    },

    /// A terrain modifier names an unknown paint type
    #[error("{0}")]
    InvalidPaintType(#[from] TerrainError),

    /// Two documents resolve to the same id within one catalog
    #[error("Location {id:?} already exists")]
    DuplicateIdentifier {
        id: String,
    },

    /// The id is not in the catalog
    #[error("Location {id:?} is not loaded")]
    UnknownLocation {
        id: String,
    },

    /// Reading a location source failed
    #[error("Failed to read {path}: {message}")]
    Io {
        path: String,
        message: String,
    },
}

impl From<DocumentError> for LocationError {
    fn from(error: DocumentError) -> Self {
        match error {
            DocumentError::UnrecognizedFormat { extension } => {
                LocationError::UnrecognizedFormat { extension }
            }
            other => LocationError::MalformedEntry(other),
        }
    }
}
