use std::fs::File;
use std::path::Path;

use anyhow::{Context, Result};
use bzip2::read::BzDecoder;
use flate2::read::GzDecoder;
use log::debug;
use once_cell::sync::Lazy;
use regex::Regex;
use tar::Archive;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ArchiveError {
    #[error("unsupported archive format: {0} (expected .tar, .tar.gz, .tgz or .tar.bz2)")]
    UnsupportedArchive(String),
}

static ARCHIVE_SUFFIX_REGEX: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\.(tar\.gz|tar\.bz2|tgz|tar)$").unwrap());

/// Whether a file name looks like a supported source archive.
pub fn is_archive(name: &str) -> bool {
    ARCHIVE_SUFFIX_REGEX.is_match(name)
}

/// Archive file name with its tar suffix stripped; this is the directory
/// name the archive conventionally unpacks into.
pub fn source_dir_name(name: &str) -> Result<String, ArchiveError> {
    match ARCHIVE_SUFFIX_REGEX.find(name) {
        Some(m) => Ok(name[..m.start()].to_string()),
        None => Err(ArchiveError::UnsupportedArchive(name.to_string())),
    }
}

/// Unpacks a source archive into `dest`.
pub fn extract(archive: &Path, dest: &Path) -> Result<()> {
    let name = archive
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or_default();
    debug!("unpacking {} into {}", name, dest.display());

    let file = File::open(archive)
        .with_context(|| format!("failed to open archive {}", archive.display()))?;

    let unpacked = if name.ends_with(".tar.gz") || name.ends_with(".tgz") {
        Archive::new(GzDecoder::new(file)).unpack(dest)
    } else if name.ends_with(".tar.bz2") {
        Archive::new(BzDecoder::new(file)).unpack(dest)
    } else if name.ends_with(".tar") {
        Archive::new(file).unpack(dest)
    } else {
        return Err(ArchiveError::UnsupportedArchive(name.to_string()).into());
    };
    unpacked.with_context(|| format!("failed to unpack {}", archive.display()))?;

    Ok(())
}
