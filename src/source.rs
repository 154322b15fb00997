use std::fs::File;
use std::io::Read;
use std::path::Path;

use tracing::info;

use crate::error::{PlaylistError, Result};
use crate::models::SongRecord;

/// Read every song row from a CSV sheet with a header row
pub fn read_song_records<R: Read>(reader: R) -> Result<Vec<SongRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::Headers)
        .from_reader(reader);

    let records = reader
        .deserialize::<SongRecord>()
        .collect::<std::result::Result<Vec<_>, csv::Error>>()?;
    Ok(records)
}

/// Open the sheet at `path`, read it fully and close it
pub fn load_song_records(path: &Path) -> Result<Vec<SongRecord>> {
    let file = File::open(path).map_err(|source| PlaylistError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let records = read_song_records(file)?;
    info!("Read {} rows from {}", records.len(), path.display());
    Ok(records)
}
