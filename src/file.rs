//! Config file discovery and parsing.
//!
//! Search directories are checked in registration order for
//! `{dir}/{file_name}`; the first file that can be read wins. A directory
//! without the file is silently skipped, so listing a search path is a
//! suggestion, not a requirement. Only actual I/O errors (permissions, etc.)
//! are propagated.

use std::path::{Path, PathBuf};

use toml::Table;

use crate::error::EnvfigError;

/// Find and read the first `{dir}/{file_name}` across `dirs`.
///
/// Returns the winning path and its contents, or [`EnvfigError::FileNotFound`]
/// when no directory has the file.
pub fn read_first_match(dirs: &[PathBuf], file_name: &str) -> Result<(PathBuf, String), EnvfigError> {
    for dir in dirs {
        let path = dir.join(file_name);
        match std::fs::read_to_string(&path) {
            Ok(content) => return Ok((path, content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => continue,
            Err(e) => return Err(EnvfigError::Io { path, source: e }),
        }
    }
    Err(EnvfigError::FileNotFound {
        name: file_name.to_string(),
    })
}

/// Parse file contents as a TOML table.
pub fn parse_table(path: &Path, content: &str) -> Result<Table, EnvfigError> {
    toml::from_str(content).map_err(|e| EnvfigError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}
