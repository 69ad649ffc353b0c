//! Gzip output with write-then-rename.

use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};

use flate2::Compression;
use flate2::write::GzEncoder;

use super::ExportError;

pub fn gzip(data: &[u8]) -> std::io::Result<Vec<u8>> {
    let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
    encoder.write_all(data)?;
    encoder.finish()
}

fn partial_path(path: &Path) -> PathBuf {
    let mut name = path.file_name().map(|n| n.to_os_string()).unwrap_or_default();
    name.push(".partial");
    path.with_file_name(name)
}

/// Write `bytes` to a sibling `.partial` file, then rename it into place.
pub fn write_atomic(path: &Path, bytes: &[u8]) -> Result<(), ExportError> {
    let staging = partial_path(path);
    fs::write(&staging, bytes).map_err(|source| ExportError::WriteFile {
        path: staging.clone(),
        source,
    })?;
    fs::rename(&staging, path).map_err(|source| {
        let _ = fs::remove_file(&staging);
        ExportError::WriteFile {
            path: path.to_path_buf(),
            source,
        }
    })
}

/// Compress `lines` (newline-terminated) into `path`.
pub fn write_gzip_lines(path: &Path, lines: &[String]) -> Result<(), ExportError> {
    let mut text = String::with_capacity(lines.iter().map(|l| l.len() + 1).sum());
    for line in lines {
        text.push_str(line);
        text.push('\n');
    }
    let compressed = gzip(text.as_bytes()).map_err(|source| ExportError::Compress {
        path: path.to_path_buf(),
        source,
    })?;
    write_atomic(path, &compressed)
}

pub fn ensure_dir(path: &Path) -> Result<(), ExportError> {
    fs::create_dir_all(path).map_err(|source| ExportError::CreateDir {
        path: path.to_path_buf(),
        source,
    })
}
