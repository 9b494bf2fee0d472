use glam::{Quat, Vec3};

use crate::transform::{format_quat, format_vec3, parse_quat, parse_vec3};

use super::{check_text, EntryError, EntryKind, LineEntry, TextField, FIELD_SEPARATOR};

/// One placed building piece: `name|px,py,pz|rx,ry,rz,rw|sx,sy,sz[|extra]`.
///
/// `name` is the prefab key the host resolves at instantiation time. The
/// optional trailing `extra` field carries format-specific data verbatim and
/// may itself contain separators.
#[derive(Clone, Debug)]
pub struct PieceEntry {
    name: String,
    position: Vec3,
    rotation: Quat,
    scale: Vec3,
    extra: Option<String>,
    line: String,
}

impl PieceEntry {
    pub fn new(
        name: impl Into<String>,
        position: Vec3,
        rotation: Quat,
        scale: Vec3,
    ) -> Result<Self, EntryError> {
        Self::with_extra(name, position, rotation, scale, None)
    }

    /// Fails when `name` is blank, starts with `#` or holds a separator or
    /// line break, or when `extra` holds a line break.
    pub fn with_extra(
        name: impl Into<String>,
        position: Vec3,
        rotation: Quat,
        scale: Vec3,
        extra: Option<String>,
    ) -> Result<Self, EntryError> {
        let mut entry = Self {
            name: name.into(),
            position,
            rotation,
            scale,
            extra,
            line: String::new(),
        };
        entry.line = entry.encode();
        entry.check_text(&entry.line)?;
        Ok(entry)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn rotation(&self) -> Quat {
        self.rotation
    }

    pub fn scale(&self) -> Vec3 {
        self.scale
    }

    pub fn extra(&self) -> Option<&str> {
        self.extra.as_deref()
    }

    fn check_text(&self, line: &str) -> Result<(), EntryError> {
        if self.name.trim().is_empty() {
            return Err(EntryError::EmptyName {
                line: line.to_string(),
            });
        }
        check_text(Self::KIND, "name", &self.name, TextField::Leading)?;
        if let Some(extra) = &self.extra {
            check_text(Self::KIND, "extra", extra, TextField::Trailing)?;
        }
        Ok(())
    }
}

impl LineEntry for PieceEntry {
    const KIND: EntryKind = EntryKind::Piece;

    fn decode(line: &str) -> Result<Self, EntryError> {
        let fields: Vec<&str> = line.splitn(5, FIELD_SEPARATOR).collect();
        if fields.len() < 4 {
            return Err(EntryError::WrongFieldCount {
                kind: Self::KIND,
                expected: "4 or 5",
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
        let rotation = parse_quat(fields[2]).ok_or_else(|| invalid("rotation"))?;
        let scale = parse_vec3(fields[3]).ok_or_else(|| invalid("scale"))?;
        let extra = fields.get(4).map(|extra| extra.to_string());

        let entry = Self {
            name: fields[0].to_string(),
            position,
            rotation,
            scale,
            extra,
            line: line.to_string(),
        };
        entry.check_text(line)?;
        Ok(entry)
    }

    fn encode(&self) -> String {
        let mut out = format!(
            "{}{sep}{}{sep}{}{sep}{}",
            self.name,
            format_vec3(self.position),
            format_quat(self.rotation),
            format_vec3(self.scale),
            sep = FIELD_SEPARATOR
        );
        if let Some(extra) = &self.extra {
            out.push(FIELD_SEPARATOR);
            out.push_str(extra);
        }
        out
    }

    fn line(&self) -> &str {
        &self.line
    }
}

impl PartialEq for PieceEntry {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.position == other.position
            && self.rotation == other.rotation
            && self.scale == other.scale
            && self.extra == other.extra
    }
}
