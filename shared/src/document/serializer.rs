use log::debug;

use crate::entry::LineEntry;

use super::{
    format::{HEADER_CREATOR, HEADER_DESCRIPTION, HEADER_NAME},
    BlueprintLocation, Format, Section,
};

/// Whether `#Location` options are written out or kept runtime-only.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub enum LocationConfigOutput {
    #[default]
    Persist,
    Omit,
}

/// Controls the text produced by `serialize_lines`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    pub format: Format,
    pub location_config: LocationConfigOutput,
}

/// Render a document as text lines in the fixed order Name, Creator,
/// Description, SnapPoints, Terrain, Location, Pieces. Optional sections are
/// left out when empty.
///
/// Returns `None` for a document without pieces: such a document has no
/// serialized form.
pub fn serialize_lines(doc: &BlueprintLocation, options: &SerializeOptions) -> Option<Vec<String>> {
    if !doc.has_pieces() {
        return None;
    }
    let format = options.format;

    let mut lines = vec![
        format!("{}{}", HEADER_NAME, doc.name()),
        format!("{}{}", HEADER_CREATOR, doc.creator()),
        format!("{}{}", HEADER_DESCRIPTION, encode_description(doc.description())),
    ];

    if !doc.snap_points().is_empty() {
        if format.supports(Section::SnapPoints) {
            lines.push(Section::SnapPoints.header().to_string());
            lines.extend(doc.snap_points().iter().map(|entry| entry.line().to_string()));
        } else {
            debug!("Dropping snap points of {}: not supported by {:?}", doc.id(), format);
        }
    }

    if !doc.terrain_mods().is_empty() {
        if format.supports(Section::Terrain) {
            lines.push(Section::Terrain.header().to_string());
            lines.extend(doc.terrain_mods().iter().map(|entry| entry.line().to_string()));
        } else {
            debug!("Dropping terrain mods of {}: not supported by {:?}", doc.id(), format);
        }
    }

    let config = doc.location_config();
    if options.location_config == LocationConfigOutput::Persist
        && format.supports(Section::Location)
        && !config.is_empty()
    {
        lines.push(Section::Location.header().to_string());
        lines.extend(config.to_lines());
    }

    lines.push(Section::Pieces.header().to_string());
    lines.extend(doc.piece_entries().iter().map(|entry| entry.line().to_string()));

    Some(lines)
}

fn encode_description(description: &str) -> String {
    serde_json::Value::String(description.to_string()).to_string()
}
