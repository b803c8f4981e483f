//! Text shown to the user at the end of a run.
//!
//! ```text
//! [INFO] (2024-03-02 10:14:05,118) : found 1204 media files
//! [WARNING] (2024-03-02 10:14:05,301) : Couldn't find corresponding JSON of /t/2019/IMG_9999.jpg
//! [INFO] (2024-03-02 10:14:05,410) : 1203 of 1204 media files have a sidecar (1012 already canonical, 0 up to date, 191 copied), 1 unmatched
//! [INFO] (2024-03-02 10:14:05,410) : now you can run: exiftool -r -d %s -tagsfromfile ...
//! ```
//!
//! The formatting lives here rather than in `main` so it can be tested
//! without installing a subscriber.

use crate::sidecar::RunSummary;
use std::path::Path;

/// exiftool arguments that copy the sidecar fields into each media file.
///
/// `%d/%F.json` is the canonical sidecar path the normalization pass fills in.
const EXIFTOOL_ARGS: &[&str] = &[
    "-r",
    "-d",
    "%s",
    "-tagsfromfile",
    "\"%d/%F.json\"",
    "\"-GPSAltitude<GeoDataAltitude\"",
    "\"-GPSLatitude<GeoDataLatitude\"",
    "\"-GPSLatitudeRef<GeoDataLatitude\"",
    "\"-GPSLongitude<GeoDataLongitude\"",
    "\"-GPSLongitudeRef<GeoDataLongitude\"",
    "\"-Keywords<Tags\"",
    "\"-Subject<Tags\"",
    "\"-Caption-Abstract<Description\"",
    "\"-ImageDescription<Description\"",
    "\"-DateTimeOriginal<PhotoTakenTimeTimestamp\"",
    "-ext",
    "\"*\"",
    "-overwrite_original",
    "-progress",
    "--ext",
    "json",
];

/// The follow-up exiftool invocation for an archive rooted at `root`.
pub fn exiftool_command(root: &Path) -> String {
    format!("exiftool {} \"{}\"", EXIFTOOL_ARGS.join(" "), root.display())
}

/// One-line totals for a finished pass.
pub fn format_summary(summary: &RunSummary) -> String {
    format!(
        "{} of {} media files have a sidecar ({} already canonical, {} up to date, {} copied), {} unmatched",
        summary.matched(),
        summary.media_found,
        summary.canonical,
        summary.up_to_date,
        summary.copied,
        summary.unmatched.len(),
    )
}
