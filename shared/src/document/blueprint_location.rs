use crate::entry::{PieceEntry, SnapPointEntry, TerrainModEntry};

use super::{
    parser::parse_lines,
    serializer::{serialize_lines, SerializeOptions},
    DocumentError, Format, LocationConfig,
};

/// A blueprint usable as a spawnable world location.
///
/// Built once per load and never edited in place afterwards; a re-sync
/// replaces the whole document.
#[derive(Clone, Debug, PartialEq)]
pub struct BlueprintLocation {
    id: String,
    name: String,
    creator: String,
    description: String,
    piece_entries: Vec<PieceEntry>,
    snap_points: Vec<SnapPointEntry>,
    terrain_mods: Vec<TerrainModEntry>,
    location_config: LocationConfig,
}

impl BlueprintLocation {
    /// An empty document whose name defaults to its id.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        Self {
            name: id.clone(),
            id,
            creator: String::new(),
            description: String::new(),
            piece_entries: Vec::new(),
            snap_points: Vec::new(),
            terrain_mods: Vec::new(),
            location_config: LocationConfig::default(),
        }
    }

    /// Parse a document from its text lines.
    pub fn from_lines<I, S>(id: &str, lines: I, format: Format) -> Result<Self, DocumentError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        parse_lines(id, lines, format)
    }

    /// Text lines of this document in `.bplocation` format, or `None` when it
    /// has no pieces.
    pub fn to_lines(&self) -> Option<Vec<String>> {
        serialize_lines(self, &SerializeOptions::default())
    }

    pub fn to_lines_with(&self, options: &SerializeOptions) -> Option<Vec<String>> {
        serialize_lines(self, options)
    }

    /// Set the name; an empty name falls back to the id.
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        if self.name.is_empty() {
            self.name = self.id.clone();
        }
        self
    }

    pub fn with_creator(mut self, creator: impl Into<String>) -> Self {
        self.creator = creator.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_pieces(mut self, pieces: Vec<PieceEntry>) -> Self {
        self.piece_entries = pieces;
        self
    }

    pub fn with_snap_points(mut self, snap_points: Vec<SnapPointEntry>) -> Self {
        self.snap_points = snap_points;
        self
    }

    pub fn with_terrain_mods(mut self, terrain_mods: Vec<TerrainModEntry>) -> Self {
        self.terrain_mods = terrain_mods;
        self
    }

    pub fn with_location_config(mut self, config: LocationConfig) -> Self {
        self.location_config = config;
        self
    }

    /// Prefix the id (e.g. `bplocation:`). A name that was defaulted from the
    /// id keeps the unprefixed value.
    pub fn with_id_prefix(mut self, prefix: &str) -> Self {
        self.id = format!("{}{}", prefix, self.id);
        self
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn creator(&self) -> &str {
        &self.creator
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn piece_entries(&self) -> &[PieceEntry] {
        &self.piece_entries
    }

    pub fn snap_points(&self) -> &[SnapPointEntry] {
        &self.snap_points
    }

    pub fn terrain_mods(&self) -> &[TerrainModEntry] {
        &self.terrain_mods
    }

    pub fn location_config(&self) -> &LocationConfig {
        &self.location_config
    }

    pub fn has_pieces(&self) -> bool {
        !self.piece_entries.is_empty()
    }
}
