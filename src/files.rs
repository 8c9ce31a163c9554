//! Reading input and writing composed documents.

use std::fs;
use std::io::Write;
use std::path::Path;
use tempfile::NamedTempFile;
use tracing::debug;

use crate::document::Document;
use crate::error::{Error, Result};

/// Prefix of temporary preview files.
const TEMP_PREFIX: &str = "mdp";

/// Suffix of temporary preview files, so viewers recognise them as HTML.
const TEMP_SUFFIX: &str = ".html";

/// Reads a file in full.
///
/// # Errors
///
/// Returns [`Error::Read`] with the path on any I/O failure.
pub fn read_file(path: impl AsRef<Path>) -> Result<Vec<u8>> {
    let path = path.as_ref();
    let bytes = fs::read(path).map_err(|source| Error::Read {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), bytes = bytes.len(), "read input");
    Ok(bytes)
}

/// Writes a document to the given path, replacing any existing file.
///
/// # Errors
///
/// Returns [`Error::Write`] with the path on any I/O failure.
pub fn write_file(path: impl AsRef<Path>, document: &Document) -> Result<()> {
    let path = path.as_ref();
    fs::write(path, document.as_bytes()).map_err(|source| Error::Write {
        path: path.to_path_buf(),
        source,
    })?;
    debug!(path = %path.display(), "wrote document");
    Ok(())
}

/// Writes a document to a fresh `mdp*.html` file in the system temp directory.
///
/// The file is deleted when the returned handle is dropped unless the caller
/// keeps it.
///
/// # Errors
///
/// Returns [`Error::Write`] if the file cannot be created or written.
pub fn write_temp(document: &Document) -> Result<NamedTempFile> {
    let mut file = tempfile::Builder::new()
        .prefix(TEMP_PREFIX)
        .suffix(TEMP_SUFFIX)
        .tempfile()
        .map_err(|source| Error::Write {
            path: std::env::temp_dir(),
            source,
        })?;

    let written = file
        .write_all(document.as_bytes())
        .and_then(|()| file.flush());
    written.map_err(|source| Error::Write {
        path: file.path().to_path_buf(),
        source,
    })?;

    debug!(path = %file.path().display(), "wrote temporary document");
    Ok(file)
}
