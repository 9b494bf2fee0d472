//! Single-line codecs for the three kinds of blueprint entries.
//!
//! Each entry keeps the exact text it was decoded from (or encoded to) so that
//! re-serialising an untouched document reproduces its lines byte for byte.
//! Fields are only reachable through accessors, so the retained text always
//! matches them. Equality compares the decoded fields only.

use std::fmt;

use crate::document::format::COMMENT_MARKER;

pub mod error;
pub mod piece_entry;
pub mod snap_point_entry;
pub mod terrain_mod_entry;

pub use error::EntryError;
pub use piece_entry::PieceEntry;
pub use snap_point_entry::SnapPointEntry;
pub use terrain_mod_entry::TerrainModEntry;

/// Separator between the fields of an entry line.
pub const FIELD_SEPARATOR: char = '|';

/// Where a free-text field sits in its line, which decides what it may hold.
#[derive(Clone, Copy, PartialEq, Eq)]
pub(crate) enum TextField {
    /// First field: may not contain a separator or start a comment
    Leading,
    /// Middle field: may not contain a separator
    Inner,
    /// Trailing field that swallows the rest of the line
    Trailing,
}

/// Check that `value` can be written into a line and read back unchanged.
pub(crate) fn check_text(
    kind: EntryKind,
    field: &'static str,
    value: &str,
    position: TextField,
) -> Result<(), EntryError> {
    let reason = if value.contains(|c| c == '\n' || c == '\r') {
        Some("contains a line break")
    } else if position != TextField::Trailing && value.contains(FIELD_SEPARATOR) {
        Some("contains the field separator")
    } else if position == TextField::Leading && value.starts_with(COMMENT_MARKER) {
        Some("starts with the comment marker")
    } else {
        None
    };
    match reason {
        Some(reason) => Err(EntryError::UnstorableText {
            kind,
            field,
            value: value.to_string(),
            reason,
        }),
        None => Ok(()),
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntryKind {
    Piece,
    SnapPoint,
    TerrainModifier,
}

impl fmt::Display for EntryKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            EntryKind::Piece => "Piece",
            EntryKind::SnapPoint => "SnapPoint",
            EntryKind::TerrainModifier => "TerrainModifier",
        };
        f.write_str(name)
    }
}

/// A record stored as one line of a blueprint document.
pub trait LineEntry: Sized {
    const KIND: EntryKind;

    /// Decode a line. Fails when the field count or any field value is wrong.
    fn decode(line: &str) -> Result<Self, EntryError>;

    /// Render the fields into canonical line text.
    fn encode(&self) -> String;

    /// The text this entry was decoded from, or its canonical encoding when
    /// it was built in code.
    fn line(&self) -> &str;
}
