use glam::{Vec2, Vec3};

use super::{GridSizeError, PaintType, TerrainAccess, TerrainOp, TerrainQuery};

/// Blend weight of a level operation at horizontal `distance` from its center.
///
/// Vertices inside `radius * (1 - smooth)` are pulled fully to the target;
/// beyond that the weight falls linearly to zero at `radius`. A non-positive
/// `smooth` levels everything selected completely.
pub fn level_weight(distance: f32, radius: f32, smooth: f32) -> f32 {
    if smooth <= 0.0 || radius <= 0.0 {
        return 1.0;
    }
    let smooth = smooth.min(1.0);
    let normalized = distance / radius;
    1.0 - ((normalized - (1.0 - smooth)) / smooth).clamp(0.0, 1.0)
}

/// An in-memory square grid of terrain vertices.
///
/// Vertex `(x, z)` has index `z * width + x` and sits at
/// `origin + (x, z) * spacing` on the horizontal plane.
#[derive(Clone, Debug)]
pub struct HeightmapGrid {
    origin: Vec2,
    spacing: f32,
    width: usize,
    base_heights: Vec<f32>,
    heights: Vec<f32>,
    paint: Vec<Option<PaintType>>,
}

impl HeightmapGrid {
    /// A `width` x `width` grid whose base heightmap is flat at `base_height`.
    pub fn flat(origin: Vec2, spacing: f32, width: usize, base_height: f32) -> Self {
        Self::build(origin, spacing, width, vec![base_height; width * width])
    }

    /// A grid over an explicit base heightmap (row-major, `width` per row).
    /// Fails unless there are exactly `width * width` heights.
    pub fn from_base_heights(
        origin: Vec2,
        spacing: f32,
        width: usize,
        base_heights: Vec<f32>,
    ) -> Result<Self, GridSizeError> {
        let expected = width * width;
        if base_heights.len() != expected {
            return Err(GridSizeError {
                expected,
                found: base_heights.len(),
            });
        }
        Ok(Self::build(origin, spacing, width, base_heights))
    }

    fn build(origin: Vec2, spacing: f32, width: usize, base_heights: Vec<f32>) -> Self {
        Self {
            origin,
            spacing,
            width,
            heights: base_heights.clone(),
            paint: vec![None; base_heights.len()],
            base_heights,
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn len(&self) -> usize {
        self.heights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    pub fn index_of(&self, x: usize, z: usize) -> usize {
        z * self.width + x
    }

    /// World position of a vertex at its current height.
    pub fn vertex_position(&self, index: usize) -> Vec3 {
        let x = (index % self.width) as f32;
        let z = (index / self.width) as f32;
        Vec3::new(
            self.origin.x + x * self.spacing,
            self.heights[index],
            self.origin.y + z * self.spacing,
        )
    }

    pub fn height(&self, index: usize) -> f32 {
        self.heights[index]
    }

    pub fn base_height(&self, index: usize) -> f32 {
        self.base_heights[index]
    }

    pub fn paint(&self, index: usize) -> Option<PaintType> {
        self.paint[index]
    }

    /// Directly edit a vertex height, as a player digging would.
    pub fn set_height(&mut self, index: usize, height: f32) {
        self.heights[index] = height;
    }
}

impl TerrainAccess for HeightmapGrid {
    fn query_indices(&self, query: &TerrainQuery) -> Vec<usize> {
        (0..self.heights.len())
            .filter(|&index| query.contains(self.vertex_position(index)))
            .collect()
    }

    fn mutate(&mut self, indices: &[usize], op: &TerrainOp) {
        for &index in indices {
            if index >= self.heights.len() {
                continue;
            }
            match *op {
                TerrainOp::Reset => {
                    self.heights[index] = self.base_heights[index];
                    self.paint[index] = None;
                }
                TerrainOp::Level {
                    center,
                    radius,
                    smooth,
                } => {
                    let position = self.vertex_position(index);
                    let distance = Vec2::new(position.x - center.x, position.z - center.z).length();
                    let weight = level_weight(distance, radius, smooth);
                    let current = self.heights[index];
                    self.heights[index] = current + (center.y - current) * weight;
                }
                TerrainOp::Paint(PaintType::Reset) => self.paint[index] = None,
                TerrainOp::Paint(paint) => self.paint[index] = Some(paint),
            }
        }
    }
}
