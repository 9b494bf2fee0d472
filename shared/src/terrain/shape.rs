use glam::{Quat, Vec3};

/// Footprint of a terrain modifier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TerrainShape {
    Circle,
    Square,
}

impl TerrainShape {
    /// Case-insensitive; anything other than `circle` or `square` is `None`.
    pub fn parse(shape: &str) -> Option<Self> {
        let trimmed = shape.trim();
        if trimmed.eq_ignore_ascii_case("circle") {
            Some(TerrainShape::Circle)
        } else if trimmed.eq_ignore_ascii_case("square") {
            Some(TerrainShape::Square)
        } else {
            None
        }
    }
}

/// A region of terrain on the horizontal (XZ) plane. Height is ignored.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TerrainQuery {
    /// Disc of the given diameter around `center`
    Circle { center: Vec3, diameter: f32 },
    /// Square of side `size` around `center`, rotated by `yaw` radians about
    /// the up axis
    Square { center: Vec3, size: f32, yaw: f32 },
}

impl TerrainQuery {
    pub fn center(&self) -> Vec3 {
        match self {
            TerrainQuery::Circle { center, .. } | TerrainQuery::Square { center, .. } => *center,
        }
    }

    /// Whether `point` falls inside the region (edges inclusive).
    pub fn contains(&self, point: Vec3) -> bool {
        match *self {
            TerrainQuery::Circle { center, diameter } => {
                let dx = point.x - center.x;
                let dz = point.z - center.z;
                let radius = diameter * 0.5;
                dx * dx + dz * dz <= radius * radius
            }
            TerrainQuery::Square { center, size, yaw } => {
                let offset = Vec3::new(point.x - center.x, 0.0, point.z - center.z);
                let local = Quat::from_rotation_y(-yaw) * offset;
                let half = size * 0.5 + f32::EPSILON * size.abs().max(1.0);
                local.x.abs() <= half && local.z.abs() <= half
            }
        }
    }
}
