use glam::Vec3;

use crate::transform::{format_vec3, parse_vec3};

use super::{EntryError, EntryKind, LineEntry, FIELD_SEPARATOR};

/// A marker position with no prefab: `px,py,pz`.
#[derive(Clone, Debug)]
pub struct SnapPointEntry {
    position: Vec3,
    line: String,
}

impl SnapPointEntry {
    pub fn new(position: Vec3) -> Self {
        let line = format_vec3(position);
        Self { position, line }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }
}

impl LineEntry for SnapPointEntry {
    const KIND: EntryKind = EntryKind::SnapPoint;

    fn decode(line: &str) -> Result<Self, EntryError> {
        let found = line.split(FIELD_SEPARATOR).count();
        if found != 1 {
            return Err(EntryError::WrongFieldCount {
                kind: Self::KIND,
                expected: "1",
                found,
                line: line.to_string(),
            });
        }
        let position = parse_vec3(line).ok_or_else(|| EntryError::InvalidField {
            kind: Self::KIND,
            field: "position",
            line: line.to_string(),
        })?;
        Ok(Self {
            position,
            line: line.to_string(),
        })
    }

    fn encode(&self) -> String {
        format_vec3(self.position)
    }

    fn line(&self) -> &str {
        &self.line
    }
}

impl PartialEq for SnapPointEntry {
    fn eq(&self, other: &Self) -> bool {
        self.position == other.position
    }
}
