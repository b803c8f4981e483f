//! # Sidecar Match
//!
//! Reconciles exported photos and videos with their JSON metadata sidecars
//! when the exporter has mangled the sidecar names.
//!
//! A photo export writes one `<name>.json` per media file, but `<name>` is
//! not reliably the media file's name: long names are cut to 46 characters,
//! copy numbers like `(1)` migrate to the end, edited copies point at the
//! original's sidecar, and the video half of a live photo shares the still
//! image's sidecar. Downstream tools (exiftool's `-tagsfromfile "%d/%F.json"`)
//! only look for `<media file name>.json`, so most metadata goes unused.
//!
//! This crate guesses the sidecar each media file was given, then copies it to
//! the name the downstream tool expects.
//!
//! # Pipeline
//!
//! ```text
//! 1. Scan       root/  →  [MediaFile]          (walk, skip sidecars + dot-files)
//! 2. Resolve    MediaFile → candidate names → first existing <candidate>.json
//! 3. Normalize  copy resolved sidecar → <media file name>.json
//! ```
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Walks the archive, classifies media as video, image or other |
//! | [`naming`] | Ordered candidate sidecar names for one media file name |
//! | [`sidecar`] | Resolves each media file's sidecar and copies it to the canonical name |
//! | [`config`] | Name limit, edited marker and extension sets; TOML overrides |
//! | [`output`] | Run summary and the follow-up exiftool command |
//! | [`logging`] | `tracing` subscriber with the `[LEVEL] (time) : message` format |
//!
//! # Design Decisions
//!
//! ## Copy, Never Move
//!
//! The truncated sidecar is left where the exporter put it. Copying keeps the
//! archive re-processable: a second run resolves the same sidecars and finds
//! nothing left to do.
//!
//! ## First Match Wins
//!
//! Candidates are tried in a fixed order and the first existing file is used.
//! When two candidates exist (an edited copy with its own sidecar next to the
//! original's, say) there is no content-based tie-break; the order encodes
//! which guess is more specific.
//!
//! ## Single Pass, Single Thread
//!
//! The work is a directory listing and a few `stat` calls per file. Any I/O
//! error aborts the run; an unmatched media file only logs a warning.

pub mod config;
pub mod logging;
pub mod naming;
pub mod output;
pub mod scan;
pub mod sidecar;

#[cfg(test)]
pub(crate) mod test_helpers;
