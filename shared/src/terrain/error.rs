use thiserror::Error;

/// Errors that can occur while stamping a terrain modifier
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TerrainError {
    /// The modifier names a paint type the terrain system does not know
    #[error("Invalid paint type {paint:?}. Expected one of Dirt, Cultivate, Paved, Reset")]
    InvalidPaintType {
        paint: String,
    },
}

/// An explicit base heightmap does not cover a square grid of the given width
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Base heightmap has {found} heights, expected {expected}")]
pub struct GridSizeError {
    pub expected: usize,
    pub found: usize,
}
