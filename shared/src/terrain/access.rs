use glam::Vec3;

use super::{PaintType, TerrainQuery};

/// A mutation applied to a set of terrain vertices.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TerrainOp {
    /// Restore the unmodified base heightmap (and ground paint)
    Reset,
    /// Pull heights toward `center.y`, fully inside the flat core and blending
    /// out toward `radius` according to `smooth`
    Level {
        center: Vec3,
        radius: f32,
        smooth: f32,
    },
    /// Paint the ground
    Paint(PaintType),
}

/// The host's terrain system, as seen by the terrain stamp.
///
/// Implementations own the single-writer discipline of the terrain data; the
/// stamp only ever calls `mutate` on the authoritative host.
pub trait TerrainAccess {
    /// Indices of every terrain vertex inside `query`. Never blocked by
    /// objects standing on the terrain.
    fn query_indices(&self, query: &TerrainQuery) -> Vec<usize>;

    /// Apply `op` to the given vertices.
    fn mutate(&mut self, indices: &[usize], op: &TerrainOp);
}
