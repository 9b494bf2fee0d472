use glam::{Quat, Vec3};

use crate::{
    numeric::{format_float, parse_float},
    terrain::TerrainShape,
    transform::{format_vec3, parse_vec3, yaw_rotation},
};

use super::{check_text, EntryError, EntryKind, LineEntry, TextField, FIELD_SEPARATOR};

const FIELD_COUNT: usize = 6;

/// A declarative terrain edit: `shape|px,py,pz|yaw|radius|smooth|paint`.
///
/// `shape` and `paint` are kept as written, minus surrounding whitespace.
/// Shapes other than circle/square are legal in the file and simply stamp
/// nothing. `rotation` is a yaw offset in degrees. An empty `paint` means no
/// paint step.
#[derive(Clone, Debug)]
pub struct TerrainModEntry {
    shape: String,
    position: Vec3,
    rotation: f32,
    radius: f32,
    smooth: f32,
    paint: String,
    line: String,
}

impl TerrainModEntry {
    pub fn new(
        shape: impl Into<String>,
        position: Vec3,
        rotation: f32,
        radius: f32,
        smooth: f32,
        paint: impl Into<String>,
    ) -> Result<Self, EntryError> {
        let mut entry = Self {
            shape: shape.into().trim().to_string(),
            position,
            rotation,
            radius,
            smooth,
            paint: paint.into().trim().to_string(),
            line: String::new(),
        };
        entry.check_text()?;
        entry.line = entry.encode();
        Ok(entry)
    }

    pub fn shape(&self) -> &str {
        &self.shape
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    /// Yaw offset in degrees.
    pub fn rotation(&self) -> f32 {
        self.rotation
    }

    pub fn radius(&self) -> f32 {
        self.radius
    }

    pub fn smooth(&self) -> f32 {
        self.smooth
    }

    pub fn paint(&self) -> &str {
        &self.paint
    }

    /// The recognised shape, if any (case-insensitive).
    pub fn terrain_shape(&self) -> Option<TerrainShape> {
        TerrainShape::parse(&self.shape)
    }

    /// Local rotation offset relative to the location's pose.
    pub fn rotation_offset(&self) -> Quat {
        yaw_rotation(self.rotation)
    }

    pub fn has_paint(&self) -> bool {
        !self.paint.is_empty()
    }

    fn check_text(&self) -> Result<(), EntryError> {
        check_text(Self::KIND, "shape", &self.shape, TextField::Leading)?;
        check_text(Self::KIND, "paint", &self.paint, TextField::Inner)
    }
}

impl LineEntry for TerrainModEntry {
    const KIND: EntryKind = EntryKind::TerrainModifier;

    fn decode(line: &str) -> Result<Self, EntryError> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).collect();
        if fields.len() != FIELD_COUNT {
            return Err(EntryError::WrongFieldCount {
                kind: Self::KIND,
                expected: "6",
                found: fields.len(),
                line: line.to_string(),
            });
        }

        let invalid = |field: &'static str| EntryError::InvalidField {
            kind: Self::KIND,
            field,
            line: line.to_string(),
        };
        let position = parse_vec3(fields[1]).ok_or_else(|| invalid("position"))?;
        let rotation = parse_float(fields[2]).ok_or_else(|| invalid("rotation"))?;
        let radius = parse_float(fields[3]).ok_or_else(|| invalid("radius"))?;
        let smooth = parse_float(fields[4]).ok_or_else(|| invalid("smooth"))?;

        let entry = Self {
            shape: fields[0].trim().to_string(),
            position,
            rotation,
            radius,
            smooth,
            paint: fields[5].trim().to_string(),
            line: line.to_string(),
        };
        entry.check_text()?;
        Ok(entry)
    }

    fn encode(&self) -> String {
        format!(
            "{}{sep}{}{sep}{}{sep}{}{sep}{}{sep}{}",
            self.shape,
            format_vec3(self.position),
            format_float(self.rotation),
            format_float(self.radius),
            format_float(self.smooth),
            self.paint,
            sep = FIELD_SEPARATOR
        )
    }

    fn line(&self) -> &str {
        &self.line
    }
}

impl PartialEq for TerrainModEntry {
    fn eq(&self, other: &Self) -> bool {
        self.shape == other.shape
            && self.position == other.position
            && self.rotation == other.rotation
            && self.radius == other.radius
            && self.smooth == other.smooth
            && self.paint == other.paint
    }
}
