//! Media record resolution.
//!
//! Media records arrive from the API in two shapes: flat (`{ url, filename }`)
//! and nested under a `media` object (`{ media: { fileUrl, fileName } }`).
//! Each field is resolved by probing an ordered list of accessors and taking
//! the first non-empty string.

use serde_json::Value;

/// Key path into a loosely typed record, probed from the root.
type Accessor = &'static [&'static str];

const URL_ACCESSORS: &[Accessor] = &[
    &["url"],
    &["fileUrl"],
    &["media", "url"],
    &["media", "fileUrl"],
];

const FILENAME_ACCESSORS: &[Accessor] = &[
    &["filename"],
    &["fileName"],
    &["originalName"],
    &["media", "filename"],
    &["media", "fileName"],
    &["media", "originalName"],
];

const SIZE_ACCESSORS: &[Accessor] = &[
    &["size"],
    &["fileSize"],
    &["media", "size"],
    &["media", "fileSize"],
];

fn probe<'a>(record: &'a Value, path: Accessor) -> Option<&'a Value> {
    path.iter().try_fold(record, |value, key| value.get(*key))
}

fn first_match<'a>(record: &'a Value, accessors: &[Accessor]) -> Option<&'a str> {
    accessors
        .iter()
        .filter_map(|path| probe(record, *path)?.as_str())
        .find(|s| !s.is_empty())
}

/// Resolves the canonical URL of a media record.
///
/// Tries `url`, `fileUrl`, `media.url`, then `media.fileUrl`. Returns an
/// empty string when none is present; callers must treat that as
/// unresolvable.
///
/// # Examples
///
/// ```
/// use postview::resolve_media_url;
/// use serde_json::json;
///
/// assert_eq!(resolve_media_url(&json!({ "media": { "fileUrl": "/a.png" } })), "/a.png");
/// assert_eq!(resolve_media_url(&json!({ "id": 7 })), "");
/// ```
pub fn resolve_media_url(record: &Value) -> String {
    first_match(record, URL_ACCESSORS)
        .unwrap_or_default()
        .to_string()
}

/// Resolves the display filename of a media record, case preserved.
pub fn resolve_media_filename(record: &Value) -> String {
    first_match(record, FILENAME_ACCESSORS)
        .unwrap_or_default()
        .to_string()
}

/// Resolves the byte size of a media record when the API reports one.
pub fn resolve_media_size(record: &Value) -> Option<u64> {
    SIZE_ACCESSORS
        .iter()
        .find_map(|path| probe(record, *path)?.as_u64())
}

/// Media attachment eligible to fill a placeholder.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaRef {
    url: String,
    filename: String,
}

impl MediaRef {
    /// Builds a candidate from a raw record.
    ///
    /// Returns None when the record has no resolvable URL.
    pub fn from_record(record: &Value) -> Option<Self> {
        let url = resolve_media_url(record);
        if url.is_empty() {
            return None;
        }

        Some(Self {
            url,
            filename: resolve_media_filename(record).to_lowercase(),
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Checks whether a lowercased, trimmed label names this media.
    ///
    /// Matches the full filename or the filename without its last
    /// extension, so `cover` names `cover.jpg`.
    pub fn matches_label(&self, label: &str) -> bool {
        if label.is_empty() || self.filename.is_empty() {
            return false;
        }
        if self.filename == label {
            return true;
        }
        match self.filename.rsplit_once('.') {
            Some((stem, _)) => !stem.is_empty() && stem == label,
            None => false,
        }
    }
}

/// Resolves every record into a candidate, dropping unresolvable ones.
pub fn candidates(records: &[Value]) -> Vec<MediaRef> {
    records.iter().filter_map(MediaRef::from_record).collect()
}
