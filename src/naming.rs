//! Candidate sidecar names for a media file.
//!
//! The exporter writes one `<name>.json` sidecar per media file, but the
//! `<name>` part is not always the media file's name. Four behaviors have
//! been observed, and each one becomes a candidate, in this order:
//!
//! | # | Behavior | Media file | Sidecar base name |
//! |---|----------|------------|-------------------|
//! | 1 | Truncation to 46 chars | `Screenshot_2019-07-14-21-33-08-123_com.android.chrome.jpg` | `Screenshot_2019-07-14-21-33-08-123_com.android` |
//! | 2 | Edited copies share the original's sidecar | `IMG_0001-edited.jpg` | `IMG_0001.jpg` |
//! | 3 | Copy number moves to the end | `IMG_0001(2).jpg` | `IMG_0001.jpg(2)` |
//! | 4 | Live-photo video uses the still's sidecar | `IMG_0001.MOV` | `IMG_0001.HEIC` |
//!
//! Every candidate is truncated to the configured prefix length before the
//! sidecar extension is appended. The one exception is the copy-number token
//! of rule 3, which the exporter appends after truncating.
//!
//! Order matters: the first candidate that exists on disk wins, and nothing
//! disambiguates between two existing candidates.

use crate::config::{FormatConfig, NamingConfig};
use crate::scan::MediaKind;
use regex::Regex;
use std::sync::LazyLock;

/// A name with exactly one parenthesized group, which is a number: `IMG(2).jpg`.
static COPY_NUMBER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^()]*(\(\d+\))[^()]*$").expect("copy-number pattern is valid")
});

/// Truncate `name` to at most `max` characters, never splitting a character.
pub fn truncate(name: &str, max: usize) -> &str {
    match name.char_indices().nth(max) {
        Some((idx, _)) => &name[..idx],
        None => name,
    }
}

/// The `(N)` token of a duplicate-numbered name, if the name has exactly one
/// parenthesized group and it is numeric.
pub fn copy_number_token(name: &str) -> Option<&str> {
    COPY_NUMBER
        .captures(name)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str())
}

/// Build the ordered, duplicate-free list of candidate sidecar base names
/// for the media file called `file_name`.
///
/// The returned names carry no sidecar extension.
pub fn candidate_names(
    file_name: &str,
    kind: MediaKind,
    naming: &NamingConfig,
    formats: &FormatConfig,
) -> Vec<String> {
    let max = naming.max_name_len;
    let mut candidates = Candidates::default();

    candidates.push(truncate(file_name, max).to_string());
    let unedited = file_name.replace(&naming.edited_marker, "");
    candidates.push(truncate(&unedited, max).to_string());

    if let Some(token) = copy_number_token(file_name) {
        let without = file_name.replace(token, "");
        candidates.push(format!("{}{}", truncate(&without, max), token));
    }

    if kind == MediaKind::Video {
        let stem = file_stem(file_name);
        for ext in pairing_extensions(formats) {
            let still = format!("{stem}.{ext}");
            candidates.push(truncate(&still, max).to_string());
        }
    }

    candidates.0
}

/// Image extensions a live-photo video may be paired with: every configured
/// image extension in order, then the same list uppercased.
pub fn pairing_extensions(formats: &FormatConfig) -> Vec<String> {
    formats
        .image
        .iter()
        .cloned()
        .chain(formats.image.iter().map(|ext| ext.to_uppercase()))
        .collect()
}

fn file_stem(file_name: &str) -> &str {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem,
        _ => file_name,
    }
}

/// Insertion-ordered set of names. A repeated candidate can never match where
/// its first occurrence failed, so dropping it keeps the try-order intact.
#[derive(Default)]
struct Candidates(Vec<String>);

impl Candidates {
    fn push(&mut self, name: String) {
        if !self.0.contains(&name) {
            self.0.push(name);
        }
    }
}
