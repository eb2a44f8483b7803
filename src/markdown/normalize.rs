//! Markdown content normalization against uploaded media.
//!
//! Post bodies written in the admin editor often reference attachments
//! through placeholder links (`![cover](undefined)`), forget the leading
//! `!` of image syntax, or carry unescaped spaces in URLs. Normalization
//! repairs these so the renderer sees well formed image and link tokens.

use regex::{Captures, Regex};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::LazyLock;
use tracing::debug;

use crate::filetype::is_image_url;
use crate::media::{MediaRef, candidates};

/// Image or link token whose target is empty, `undefined`, or `null`.
static PLACEHOLDER: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?\[)([^\]]*)\]\((undefined|null)?\)")
        .expect("PLACEHOLDER: hardcoded regex is valid")
});

/// Link token whose label begins with a stray `!`: `[!alt](url)`.
static BANGED_LABEL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[!([^\]]*)\]\(([^)]*)\)").expect("BANGED_LABEL: hardcoded regex is valid")
});

/// Any image or link token.
static TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(!?)\[([^\]]*)\]\(([^)]*)\)").expect("TOKEN: hardcoded regex is valid")
});

/// Link token without regard to a preceding `!`.
static LINK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\[([^\]]*)\]\(([^)]*)\)").expect("LINK: hardcoded regex is valid")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("WHITESPACE: hardcoded regex is valid"));

/// Normalizes markdown content against raw media records.
///
/// Runs four rewrites in order, each on the previous output:
/// 1. Fill placeholder targets with media URLs
/// 2. Re-anchor `[!alt](url)` as `![alt](url)`
/// 3. Trim URLs and encode inner whitespace as `%20`
/// 4. Promote links to image files into image tokens
///
/// Records without a resolvable URL are ignored. Tokens that match no
/// pattern pass through verbatim. The function is total and never fails.
///
/// # Arguments
///
/// * `content`: Raw markdown from the post body
/// * `media`: Media records attached to the post, in API order
///
/// # Returns
///
/// Normalized markdown; empty input is returned as is
///
/// # Examples
///
/// ```
/// use postview::normalize_content;
/// use serde_json::json;
///
/// let media = vec![json!({ "url": "https://cdn.example.com/a.png", "filename": "cover.png" })];
/// let out = normalize_content("![Cover](undefined)\n\n[x](photo.png)", &media);
/// assert_eq!(out, "![Cover](https://cdn.example.com/a.png)\n\n![x](photo.png)");
/// ```
pub fn normalize_content(content: &str, media: &[Value]) -> String {
    if content.is_empty() {
        return String::new();
    }

    let candidates = candidates(media);
    normalize_with_candidates(content, &candidates)
}

/// Normalizes markdown content against already resolved candidates.
///
/// See [`normalize_content`] for the rewrite stages.
pub fn normalize_with_candidates(content: &str, candidates: &[MediaRef]) -> String {
    if content.is_empty() {
        return String::new();
    }

    let filled = if candidates.is_empty() {
        content.to_string()
    } else {
        fill_placeholders(content, candidates)
    };

    let anchored = anchor_banged_labels(&filled);
    let encoded = encode_url_whitespace(&anchored);
    promote_image_links(&encoded)
}

/// Points placeholder tokens at candidate URLs.
///
/// A candidate whose filename names the label wins; otherwise the first
/// candidate not yet used in this call. Each URL is used at most once, so
/// placeholders beyond the candidate count stay untouched.
fn fill_placeholders(content: &str, candidates: &[MediaRef]) -> String {
    let mut used: HashSet<&str> = HashSet::new();

    PLACEHOLDER
        .replace_all(content, |caps: &Captures<'_>| {
            let prefix = &caps[1];
            let label = &caps[2];
            let key = label.trim().to_lowercase();

            let chosen = candidates
                .iter()
                .find(|c| !used.contains(c.url()) && c.matches_label(&key))
                .or_else(|| candidates.iter().find(|c| !used.contains(c.url())));

            match chosen {
                Some(candidate) => {
                    debug!(label = %label, url = candidate.url(), "filled media placeholder");
                    used.insert(candidate.url());
                    format!("{}{}]({})", prefix, label, candidate.url())
                }
                None => {
                    debug!(label = %label, "no media left for placeholder");
                    caps[0].to_string()
                }
            }
        })
        .into_owned()
}

/// Rewrites `[!alt](url)` into `![alt](url)` unless already an image.
fn anchor_banged_labels(content: &str) -> String {
    BANGED_LABEL
        .replace_all(content, |caps: &Captures<'_>| {
            let whole = caps.get(0).map_or(0, |m| m.start());
            if preceded_by_bang(content, whole) {
                return caps[0].to_string();
            }
            format!("![{}]({})", &caps[1], &caps[2])
        })
        .into_owned()
}

/// Trims token URLs and replaces inner whitespace runs with `%20`.
fn encode_url_whitespace(content: &str) -> String {
    TOKEN
        .replace_all(content, |caps: &Captures<'_>| {
            let url = WHITESPACE.replace_all(caps[3].trim(), "%20");
            format!("{}[{}]({})", &caps[1], &caps[2], url)
        })
        .into_owned()
}

/// Prefixes `!` to plain links whose label or URL names an image file.
fn promote_image_links(content: &str) -> String {
    LINK.replace_all(content, |caps: &Captures<'_>| {
        let start = caps.get(0).map_or(0, |m| m.start());
        let label = caps[1].trim();
        let url = &caps[2];

        if preceded_by_bang(content, start) || !(is_image_url(label) || is_image_url(url)) {
            return caps[0].to_string();
        }

        debug!(url = %url, "promoted link to image");
        format!("!{}", &caps[0])
    })
    .into_owned()
}

fn preceded_by_bang(haystack: &str, offset: usize) -> bool {
    haystack[..offset].ends_with('!')
}
