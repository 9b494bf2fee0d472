use std::fmt;

use super::TerrainError;

/// Ground paint a terrain modifier can apply.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PaintType {
    Dirt,
    Cultivate,
    Paved,
    /// Removes any paint, restoring the biome's ground texture
    Reset,
}

impl PaintType {
    pub const ALL: [PaintType; 4] = [
        PaintType::Dirt,
        PaintType::Cultivate,
        PaintType::Paved,
        PaintType::Reset,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            PaintType::Dirt => "Dirt",
            PaintType::Cultivate => "Cultivate",
            PaintType::Paved => "Paved",
            PaintType::Reset => "Reset",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn parse(name: &str) -> Result<Self, TerrainError> {
        let trimmed = name.trim();
        Self::ALL
            .into_iter()
            .find(|paint| paint.name().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| TerrainError::InvalidPaintType {
                paint: name.to_string(),
            })
    }
}

impl fmt::Display for PaintType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
