//! Terrain stamping for blueprint locations.
//!
//! When the authority places a location, each of its terrain modifiers is
//! posed relative to the location, selects a circle or square of terrain
//! vertices, resets them to the base heightmap, levels them toward the
//! modifier's height and optionally paints them. The terrain itself belongs to
//! the host and is reached through `TerrainAccess`.

pub mod access;
pub mod error;
pub mod heightmap_grid;
pub mod paint;
pub mod shape;
pub mod stamp;

pub use access::{TerrainAccess, TerrainOp};
pub use error::{GridSizeError, TerrainError};
pub use heightmap_grid::{level_weight, HeightmapGrid};
pub use paint::PaintType;
pub use shape::{TerrainQuery, TerrainShape};
pub use stamp::{modifier_query, stamp_location, stamp_modifier, StampReport};
