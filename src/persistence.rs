use crate::catalog::Catalog;
use crate::core::types::Settings;
use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

/// Everything the engine owns besides the static dictionary, in the shape
/// it is written to disk.
#[derive(Clone, Serialize, Deserialize)]
pub struct Snapshot {
    pub catalog: Catalog,
    pub settings: Settings,
}

/// Writes the snapshot next to its destination and renames it into place,
/// so a crash mid-write never leaves a torn file behind.
pub fn save_to_disk(snapshot: &Snapshot, path: &Path) -> Result<()> {
    let parent_dir = path.parent().unwrap_or_else(|| Path::new("."));
    fs::create_dir_all(parent_dir)?;

    let temp_file = NamedTempFile::new_in(parent_dir)?;
    let writer = BufWriter::new(&temp_file);
    bincode::serialize_into(writer, snapshot)?;

    temp_file.persist(path).map_err(|e| e.error)?;
    debug!(path = %path.display(), "snapshot saved");
    Ok(())
}

pub fn load_from_disk(path: &Path) -> Result<Snapshot> {
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let snapshot = bincode::deserialize_from(reader)?;
    debug!(path = %path.display(), "snapshot loaded");
    Ok(snapshot)
}
