use crate::format::format;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

#[derive(Debug, thiserror::Error)]
pub enum IoError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to read {path}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to replace {path} with formatted copy: {source}")]
    Persist {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// How the formatted document replaces the original.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WriteMode {
    /// Truncate the file and write it in one go. A failure part way through
    /// can leave the file truncated.
    #[default]
    InPlace,
    /// Write a sibling temporary file and rename it over the original.
    Atomic,
}

/// Outcome of formatting a single file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormatReport {
    pub path: PathBuf,
    pub changed: bool,
    pub lines_in: usize,
    pub lines_out: usize,
}

/// Read a markdown file as UTF-8.
pub fn read_file(path: &Path) -> Result<String, IoError> {
    fs::read_to_string(path).map_err(|source| match source.kind() {
        ErrorKind::NotFound => IoError::NotFound(path.to_path_buf()),
        _ => IoError::Read {
            path: path.to_path_buf(),
            source,
        },
    })
}

/// Replace the contents of `path` with `content`.
pub fn write_file(path: &Path, content: &str, mode: WriteMode) -> Result<(), IoError> {
    match mode {
        WriteMode::InPlace => fs::write(path, content).map_err(|source| IoError::Write {
            path: path.to_path_buf(),
            source,
        }),
        WriteMode::Atomic => write_atomic(path, content),
    }
}

fn write_atomic(path: &Path, content: &str) -> Result<(), IoError> {
    let write_err = |source: std::io::Error| IoError::Write {
        path: path.to_path_buf(),
        source,
    };

    // Same directory so the rename never crosses filesystems
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = tempfile::NamedTempFile::new_in(dir).map_err(write_err)?;
    tmp.write_all(content.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;

    if let Ok(metadata) = fs::metadata(path) {
        tmp.as_file()
            .set_permissions(metadata.permissions())
            .map_err(write_err)?;
    }

    tmp.persist(path).map_err(|e| IoError::Persist {
        path: path.to_path_buf(),
        source: e.error,
    })?;
    Ok(())
}

/// Read, format and rewrite a single file.
///
/// The file is always rewritten, even when formatting changed nothing.
pub fn format_file(path: &Path, mode: WriteMode) -> Result<FormatReport, IoError> {
    let original = read_file(path)?;
    let formatted = format(&original);
    let changed = formatted != original;

    if changed {
        log::info!("Reformatted {}", path.display());
    } else {
        log::info!("{} already formatted", path.display());
    }

    write_file(path, &formatted, mode)?;

    Ok(FormatReport {
        path: path.to_path_buf(),
        changed,
        lines_in: original.split('\n').count(),
        lines_out: formatted.split('\n').count(),
    })
}
