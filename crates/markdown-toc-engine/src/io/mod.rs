use crate::models::{Heading, TocNode};
use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a JSON array of heading records
pub fn read_headings<R: Read>(reader: R) -> Result<Vec<Heading>, IoError> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read a JSON array of heading records from a file
pub fn read_headings_from_path(path: &Path) -> Result<Vec<Heading>, IoError> {
    if !path.exists() {
        return Err(IoError::NotFound(path.to_path_buf()));
    }
    let file = File::open(path)?;
    read_headings(BufReader::new(file))
}

/// Write a ToC forest as JSON, followed by a newline
pub fn write_toc<W: Write>(
    mut writer: W,
    forest: &[TocNode],
    pretty: bool,
) -> Result<(), IoError> {
    if pretty {
        serde_json::to_writer_pretty(&mut writer, forest)?;
    } else {
        serde_json::to_writer(&mut writer, forest)?;
    }
    writeln!(writer)?;
    writer.flush()?;
    Ok(())
}
