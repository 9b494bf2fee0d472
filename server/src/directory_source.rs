use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use log::{debug, info};

use bplocation_shared::{
    parse_lines, BlueprintLocation, Format, LocationError, LocationSource, SourceDocument,
};

/// Blueprint location files of one world:
/// `<locations_directory>/<world_name>/*.bplocation`.
pub struct DirectorySource {
    locations_directory: PathBuf,
    world_directory: PathBuf,
}

impl DirectorySource {
    pub fn new(locations_directory: impl Into<PathBuf>, world_name: &str) -> Self {
        let locations_directory = locations_directory.into();
        let world_directory = locations_directory.join(world_name);
        Self {
            locations_directory,
            world_directory,
        }
    }

    pub fn world_directory(&self) -> &Path {
        &self.world_directory
    }

    /// `*.bplocation` files of the world directory, sorted by file name.
    fn location_files(&self) -> Result<Vec<PathBuf>, LocationError> {
        fs::create_dir_all(&self.locations_directory)
            .map_err(|error| io_error(&self.locations_directory, error))?;

        let entries = match fs::read_dir(&self.world_directory) {
            Ok(entries) => entries,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                debug!(
                    "No blueprint locations for world: {} does not exist",
                    self.world_directory.display()
                );
                return Ok(Vec::new());
            }
            Err(error) => return Err(io_error(&self.world_directory, error)),
        };

        let extension = Format::BlueprintLocation.extension();
        let mut files = Vec::new();
        for entry in entries {
            let path = entry
                .map_err(|error| io_error(&self.world_directory, error))?
                .path();
            let matches = path
                .extension()
                .is_some_and(|ext| ext.to_string_lossy().eq_ignore_ascii_case(extension));
            if matches && path.is_file() {
                files.push(path);
            }
        }
        files.sort_by(|a, b| a.file_name().cmp(&b.file_name()));
        Ok(files)
    }
}

impl LocationSource for DirectorySource {
    fn documents(&mut self) -> Vec<SourceDocument> {
        let files = match self.location_files() {
            Ok(files) => files,
            Err(error) => {
                return vec![SourceDocument {
                    origin: self.world_directory.display().to_string(),
                    result: Err(error),
                }]
            }
        };
        info!(
            "Found {} blueprint location files in {}",
            files.len(),
            self.world_directory.display()
        );
        files
            .into_iter()
            .map(|path| SourceDocument {
                origin: path.display().to_string(),
                result: load_file(&path),
            })
            .collect()
    }
}

/// Read and parse one blueprint file. The format comes from the file
/// extension and the id from the file stem.
pub fn load_file(path: &Path) -> Result<BlueprintLocation, LocationError> {
    let (format, id) = Format::from_path(path)?;
    let text = fs::read_to_string(path).map_err(|error| io_error(path, error))?;
    debug!("Reading {} ({} lines)", path.display(), text.lines().count());
    Ok(parse_lines(&id, text.lines(), format)?)
}

fn io_error(path: &Path, error: std::io::Error) -> LocationError {
    LocationError::Io {
        path: path.display().to_string(),
        message: error.to_string(),
    }
}
