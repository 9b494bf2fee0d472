use std::path::Path;

use super::DocumentError;

pub const HEADER_NAME: &str = "#Name:";
pub const HEADER_CREATOR: &str = "#Creator:";
pub const HEADER_DESCRIPTION: &str = "#Description:";
pub const HEADER_SNAP_POINTS: &str = "#SnapPoints";
pub const HEADER_TERRAIN: &str = "#Terrain";
pub const HEADER_LOCATION: &str = "#Location";
pub const HEADER_PIECES: &str = "#Pieces";

/// Any line starting with this is a header or a comment, never data.
pub const COMMENT_MARKER: char = '#';

/// The body sections a document can switch between.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Section {
    Pieces,
    SnapPoints,
    Terrain,
    Location,
}

impl Section {
    pub fn header(&self) -> &'static str {
        match self {
            Section::Pieces => HEADER_PIECES,
            Section::SnapPoints => HEADER_SNAP_POINTS,
            Section::Terrain => HEADER_TERRAIN,
            Section::Location => HEADER_LOCATION,
        }
    }
}

/// Blueprint text format variant. Decides which section headers are legal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Default)]
pub enum Format {
    /// `.blueprint`: metadata and pieces only
    Blueprint,
    /// `.bplocation`: metadata, snap points, terrain, location options, pieces
    #[default]
    BlueprintLocation,
}

impl Format {
    pub fn extension(&self) -> &'static str {
        match self {
            Format::Blueprint => "blueprint",
            Format::BlueprintLocation => "bplocation",
        }
    }

    /// Case-insensitive, with or without the leading dot.
    pub fn from_extension(extension: &str) -> Result<Self, DocumentError> {
        let bare = extension.strip_prefix('.').unwrap_or(extension);
        [Format::Blueprint, Format::BlueprintLocation]
            .into_iter()
            .find(|format| format.extension().eq_ignore_ascii_case(bare))
            .ok_or_else(|| DocumentError::UnrecognizedFormat {
                extension: extension.to_string(),
            })
    }

    /// Format and document id (the file stem) of a blueprint file path.
    pub fn from_path(path: &Path) -> Result<(Self, String), DocumentError> {
        let extension = path
            .extension()
            .map(|ext| ext.to_string_lossy().into_owned())
            .unwrap_or_default();
        let format = Self::from_extension(&extension)?;
        let id = path
            .file_stem()
            .map(|stem| stem.to_string_lossy().into_owned())
            .unwrap_or_default();
        Ok((format, id))
    }

    pub fn supports(&self, section: Section) -> bool {
        match self {
            Format::Blueprint => section == Section::Pieces,
            Format::BlueprintLocation => true,
        }
    }

    /// The section a line switches to, if it is a section header this format
    /// recognises.
    pub fn section_for_header(&self, line: &str) -> Option<Section> {
        [
            Section::SnapPoints,
            Section::Terrain,
            Section::Location,
            Section::Pieces,
        ]
        .into_iter()
        .find(|section| line == section.header() && self.supports(*section))
    }
}
