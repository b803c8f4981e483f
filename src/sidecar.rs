//! Sidecar resolution and the normalization pass.
//!
//! For each media file the candidates from [`naming::candidate_names`] are
//! tried in order; the first `<candidate>.json` that exists next to the media
//! file is its sidecar. The pass then makes sure a copy of that sidecar sits at
//! the *canonical* path, `<media file name>.json`, which is where exiftool's
//! `-tagsfromfile "%d/%F.json"` looks for it.
//!
//! Sidecars are copied, never moved or deleted: the truncated original stays
//! in place so the tree can be re-processed.

use crate::config::Config;
use crate::naming;
use crate::scan::MediaFile;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;
use tracing::{debug, warn};

#[derive(Error, Debug)]
pub enum SidecarError {
    #[error("Failed to copy {} -> {}: {source}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}

/// What the pass did for one media file.
#[derive(Debug, Clone, PartialEq)]
pub enum Resolution {
    /// No candidate sidecar exists.
    Unmatched,
    /// The resolved sidecar already has the canonical name.
    Canonical { sidecar: PathBuf },
    /// The canonical copy already exists with identical content.
    UpToDate { from: PathBuf, to: PathBuf },
    /// The resolved sidecar was copied to the canonical path.
    Copied { from: PathBuf, to: PathBuf },
}

/// Totals for one normalization pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RunSummary {
    pub media_found: usize,
    pub canonical: usize,
    pub up_to_date: usize,
    pub copied: usize,
    pub unmatched: Vec<PathBuf>,
}

impl RunSummary {
    pub fn matched(&self) -> usize {
        self.canonical + self.up_to_date + self.copied
    }

    fn record(&mut self, media: &MediaFile, resolution: &Resolution) {
        self.media_found += 1;
        match resolution {
            Resolution::Unmatched => self.unmatched.push(media.path.clone()),
            Resolution::Canonical { .. } => self.canonical += 1,
            Resolution::UpToDate { .. } => self.up_to_date += 1,
            Resolution::Copied { .. } => self.copied += 1,
        }
    }
}

/// Path of a sidecar called `<base_name>.<ext>` next to the media file.
fn sidecar_path(media: &MediaFile, base_name: &str, ext: &str) -> PathBuf {
    media.path.with_file_name(format!("{base_name}.{ext}"))
}

/// Where the downstream tool expects the sidecar: `<media file name>.json`.
pub fn canonical_path(media: &MediaFile, config: &Config) -> PathBuf {
    sidecar_path(media, &media.file_name(), &config.scan.metadata_extension)
}

/// Find the sidecar for `media`: the first candidate that exists as a file.
pub fn resolve(media: &MediaFile, config: &Config) -> Option<PathBuf> {
    naming::candidate_names(
        &media.file_name(),
        media.kind,
        &config.naming,
        &config.formats,
    )
    .into_iter()
    .map(|name| sidecar_path(media, &name, &config.scan.metadata_extension))
    .find(|candidate| candidate.is_file())
}

/// Resolve one media file and bring its canonical sidecar into place.
pub fn normalize_one(media: &MediaFile, config: &Config) -> Result<Resolution, SidecarError> {
    let Some(sidecar) = resolve(media, config) else {
        warn!("Couldn't find corresponding JSON of {}", media.path.display());
        return Ok(Resolution::Unmatched);
    };

    let canonical = canonical_path(media, config);
    if sidecar.file_name() == canonical.file_name() {
        return Ok(Resolution::Canonical { sidecar });
    }

    if same_content(&sidecar, &canonical) {
        return Ok(Resolution::UpToDate {
            from: sidecar,
            to: canonical,
        });
    }

    debug!("copying {} -> {}", sidecar.display(), canonical.display());
    fs::copy(&sidecar, &canonical).map_err(|source| SidecarError::Copy {
        from: sidecar.clone(),
        to: canonical.clone(),
        source,
    })?;

    Ok(Resolution::Copied {
        from: sidecar,
        to: canonical,
    })
}

/// Run [`normalize_one`] over every media file, stopping at the first copy
/// failure.
pub fn normalize(media_files: &[MediaFile], config: &Config) -> Result<RunSummary, SidecarError> {
    let mut summary = RunSummary::default();
    for media in media_files {
        let resolution = normalize_one(media, config)?;
        summary.record(media, &resolution);
    }
    Ok(summary)
}

/// True when `copy` exists and holds the same bytes as `original`.
///
/// Read errors count as "different" so the copy is attempted and any real
/// I/O problem surfaces from `fs::copy`.
fn same_content(original: &Path, copy: &Path) -> bool {
    let (Ok(original_meta), Ok(copy_meta)) = (fs::metadata(original), fs::metadata(copy)) else {
        return false;
    };
    if !copy_meta.is_file() || original_meta.len() != copy_meta.len() {
        return false;
    }
    match (fs::read(original), fs::read(copy)) {
        (Ok(a), Ok(b)) => a == b,
        _ => false,
    }
}
