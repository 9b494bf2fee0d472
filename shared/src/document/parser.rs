use log::debug;

use crate::entry::{LineEntry, PieceEntry, SnapPointEntry, TerrainModEntry};

use super::{
    format::{COMMENT_MARKER, HEADER_CREATOR, HEADER_DESCRIPTION, HEADER_NAME},
    BlueprintLocation, DocumentError, Format, LocationConfig, Section,
};

/// Editors on some platforms prefix UTF-8 text with this.
const BYTE_ORDER_MARK: char = '\u{FEFF}';

/// Build a document from text lines.
///
/// Metadata headers apply in any section. A recognised section header
/// switches the current section; any other `#` line is a comment. Data lines
/// go to the current section's decoder, starting in `Pieces`. The first bad
/// data line fails the whole document. A byte order mark at the start of the
/// first line is dropped.
pub fn parse_lines<I, S>(id: &str, lines: I, format: Format) -> Result<BlueprintLocation, DocumentError>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut name = String::new();
    let mut creator = String::new();
    let mut description = String::new();
    let mut pieces = Vec::new();
    let mut snap_points = Vec::new();
    let mut terrain_mods = Vec::new();
    let mut location_config = LocationConfig::default();

    let mut section = Section::Pieces;

    for (index, line) in lines.into_iter().enumerate() {
        let line = line.as_ref();
        let line = match index {
            0 => line.strip_prefix(BYTE_ORDER_MARK).unwrap_or(line),
            _ => line,
        };
        if line.trim().is_empty() {
            continue;
        }
        if let Some(value) = line.strip_prefix(HEADER_NAME) {
            name = value.to_string();
            continue;
        }
        if let Some(value) = line.strip_prefix(HEADER_CREATOR) {
            creator = value.to_string();
            continue;
        }
        if let Some(value) = line.strip_prefix(HEADER_DESCRIPTION) {
            description = decode_description(value)?;
            continue;
        }
        if let Some(next) = format.section_for_header(line) {
            section = next;
            continue;
        }
        if line.starts_with(COMMENT_MARKER) {
            continue;
        }

        match section {
            Section::Pieces => pieces.push(PieceEntry::decode(line)?),
            Section::SnapPoints => snap_points.push(SnapPointEntry::decode(line)?),
            Section::Terrain => terrain_mods.push(TerrainModEntry::decode(line)?),
            Section::Location => location_config.apply_line(line)?,
        }
    }

    debug!(
        "Parsed blueprint {}: {} pieces, {} snap points, {} terrain mods",
        id,
        pieces.len(),
        snap_points.len(),
        terrain_mods.len()
    );

    Ok(BlueprintLocation::new(id)
        .with_name(name)
        .with_creator(creator)
        .with_description(description)
        .with_pieces(pieces)
        .with_snap_points(snap_points)
        .with_terrain_mods(terrain_mods)
        .with_location_config(location_config))
}

/// Quoted descriptions are JSON string literals; anything else is taken as is.
fn decode_description(value: &str) -> Result<String, DocumentError> {
    if !value.starts_with('"') {
        return Ok(value.to_string());
    }
    serde_json::from_str::<String>(value).map_err(|_| DocumentError::InvalidDescription {
        value: value.to_string(),
    })
}
