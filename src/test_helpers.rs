//! Shared test utilities: throwaway archive trees on disk.
//!
//! ```ignore
//! use crate::test_helpers::*;
//!
//! let tmp = archive(&["2019/IMG_0001.heic", "2019/IMG_0001.heic.json"]);
//! let media = media_at(&tmp, "2019/IMG_0001.heic");
//! assert!(tmp.path().join("2019/IMG_0001.heic.json").exists());
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

use crate::config::FormatConfig;
use crate::scan::MediaFile;

/// Create a temp directory populated with the given relative file paths.
///
/// Parent directories are created as needed. Each file's content is its own
/// relative path, so copies can be traced back to their source.
pub fn archive(files: &[&str]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for rel in files {
        touch(tmp.path(), rel);
    }
    tmp
}

/// Create one file under `root`, with its relative path as content.
pub fn touch(root: &Path, rel: &str) -> PathBuf {
    let path = root.join(rel);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, rel).unwrap();
    path
}

/// A [`MediaFile`] for a file inside the archive, classified with stock formats.
pub fn media_at(tmp: &TempDir, rel: &str) -> MediaFile {
    MediaFile::new(tmp.path().join(rel), &FormatConfig::default())
}

/// Sorted relative paths of every file in the archive.
pub fn list_files(tmp: &TempDir) -> Vec<String> {
    let mut out = Vec::new();
    collect(tmp.path(), tmp.path(), &mut out);
    out.sort();
    out
}

fn collect(root: &Path, dir: &Path, out: &mut Vec<String>) {
    for entry in fs::read_dir(dir).unwrap() {
        let path = entry.unwrap().path();
        if path.is_dir() {
            collect(root, &path, out);
        } else {
            let rel = path.strip_prefix(root).unwrap();
            out.push(rel.to_string_lossy().replace('\\', "/"));
        }
    }
}

/// Read a file in the archive as a string.
pub fn read(tmp: &TempDir, rel: &str) -> String {
    fs::read_to_string(tmp.path().join(rel)).unwrap()
}
