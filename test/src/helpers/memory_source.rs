use std::path::Path;

use bplocation_shared::{parse_lines, Format, LocationError, LocationSource, SourceDocument};

/// In-memory stand-in for a directory of blueprint files: `(file name,
/// contents)` pairs, read in the order given.
#[derive(Default)]
pub struct MemorySource {
    files: Vec<(String, String)>,
}

impl MemorySource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_file(mut self, file_name: &str, contents: &str) -> Self {
        self.files.push((file_name.to_string(), contents.to_string()));
        self
    }
}

impl LocationSource for MemorySource {
    fn documents(&mut self) -> Vec<SourceDocument> {
        self.files
            .iter()
            .map(|(file_name, contents)| {
                let result = Format::from_path(Path::new(file_name))
                    .map_err(LocationError::from)
                    .and_then(|(format, id)| {
                        parse_lines(&id, contents.lines(), format).map_err(LocationError::from)
                    });
                SourceDocument {
                    origin: file_name.clone(),
                    result,
                }
            })
            .collect()
    }
}
