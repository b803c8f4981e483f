//! Archive traversal and media classification.
//!
//! Walks an exported archive and collects every file that could carry a
//! sidecar: anything that is not itself a sidecar and not hidden.
//!
//! ```text
//! Takeout/
//! ├── .DS_Store                    # hidden, skipped
//! ├── Photos from 2019/
//! │   ├── IMG_0001.heic            # media (image)
//! │   ├── IMG_0001.heic.json       # sidecar, skipped
//! │   ├── IMG_0001.mov             # media (video, live-photo motion part)
//! │   └── notes.txt                # media (other) - still gets a sidecar lookup
//! └── .thumbnails/                 # hidden directory, still descended
//!     └── IMG_0002.jpg             # media (image)
//! ```
//!
//! Only file names are filtered; directories are always descended. The
//! result is sorted by file name within each directory so repeated runs
//! visit files in the same order.

use crate::config::{Config, FormatConfig};
use std::path::{Path, PathBuf};
use thiserror::Error;
use walkdir::WalkDir;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("Not a directory: {0}")]
    NotADirectory(PathBuf),
    #[error("Walk error: {0}")]
    Walk(#[from] walkdir::Error),
}

/// Media category, decided by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MediaKind {
    Video,
    Image,
    Other,
}

impl MediaKind {
    /// Classify a file by its extension.
    ///
    /// A configured extension matches itself and its uppercase form only:
    /// `mov` and `MOV` are videos, `Mov` is not.
    pub fn classify(path: &Path, formats: &FormatConfig) -> Self {
        let Some(ext) = path.extension().and_then(|e| e.to_str()) else {
            return MediaKind::Other;
        };
        if matches_format(ext, &formats.video) {
            MediaKind::Video
        } else if matches_format(ext, &formats.image) {
            MediaKind::Image
        } else {
            MediaKind::Other
        }
    }
}

fn matches_format(ext: &str, formats: &[String]) -> bool {
    formats
        .iter()
        .any(|f| ext == f || ext == f.to_uppercase())
}

/// A file in the archive that may have a sidecar.
#[derive(Debug, Clone, PartialEq)]
pub struct MediaFile {
    pub path: PathBuf,
    pub kind: MediaKind,
}

impl MediaFile {
    pub fn new(path: PathBuf, formats: &FormatConfig) -> Self {
        let kind = MediaKind::classify(&path, formats);
        Self { path, kind }
    }

    /// Full file name including extension, lossily decoded.
    pub fn file_name(&self) -> String {
        self.path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    }
}

/// Resolve the archive root to an absolute path.
///
/// The root must exist and be a directory.
pub fn resolve_root(path: &Path) -> Result<PathBuf, ScanError> {
    match path.canonicalize() {
        Ok(abs) if abs.is_dir() => Ok(abs),
        _ => Err(ScanError::NotADirectory(path.to_path_buf())),
    }
}

/// Collect every media file under `root`, recursively.
///
/// Skips files with the metadata extension (compared exactly) and files whose
/// name starts with `.`. Symlinked directories are descended while
/// `scan.follow_symlinks` is set (the default); a symlink loop is then a walk
/// error. With it unset, a symlinked directory is skipped entirely.
pub fn media_files(root: &Path, config: &Config) -> Result<Vec<MediaFile>, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::NotADirectory(root.to_path_buf()));
    }

    let mut media = Vec::new();
    let walker = WalkDir::new(root)
        .follow_links(config.scan.follow_symlinks)
        .sort_by_file_name();

    for entry in walker {
        let entry = entry?;
        // An unfollowed symlink to a directory reports a symlink file type.
        if entry.file_type().is_dir() || entry.path().is_dir() {
            continue;
        }
        if is_hidden(entry.path()) || is_metadata(entry.path(), &config.scan.metadata_extension) {
            continue;
        }
        media.push(MediaFile::new(entry.into_path(), &config.formats));
    }

    Ok(media)
}

fn is_hidden(path: &Path) -> bool {
    path.file_name()
        .map(|n| n.to_string_lossy().starts_with('.'))
        .unwrap_or(false)
}

fn is_metadata(path: &Path, metadata_extension: &str) -> bool {
    path.extension()
        .map(|e| e == metadata_extension)
        .unwrap_or(false)
}
