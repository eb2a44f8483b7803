//! Content blocks and positional attachment pairing.
//!
//! The post page splits normalized content on blank lines and pairs the
//! block at index `i` with the attachment at index `i`. Pairing is purely
//! positional: nothing links a paragraph to "its" media other than order,
//! so content and uploads must have been produced in the same sequence.

use regex::Regex;
use serde_json::Value;
use std::collections::HashSet;
use std::sync::LazyLock;

use crate::filetype::{ImageFormat, image_format};
use crate::media::{resolve_media_filename, resolve_media_size, resolve_media_url};

/// One or more blank lines (whitespace only lines count as blank).
static BLANK_LINES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("BLANK_LINES: hardcoded regex is valid"));

/// Paragraph-like run of markdown delimited by blank lines.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentBlock<'a> {
    /// Position among non-empty blocks, starting at zero
    pub index: usize,
    /// Raw markdown of the block
    pub text: &'a str,
}

/// Splits markdown into content blocks on blank-line boundaries.
///
/// Whitespace-only pieces are dropped, so leading and trailing blank lines
/// never produce empty blocks.
///
/// # Examples
///
/// ```
/// use postview::split_blocks;
///
/// let blocks = split_blocks("intro\n\n\nbody\nmore\n  \nend");
/// let texts: Vec<_> = blocks.iter().map(|b| b.text).collect();
/// assert_eq!(texts, ["intro", "body\nmore", "end"]);
/// ```
pub fn split_blocks(content: &str) -> Vec<ContentBlock<'_>> {
    BLANK_LINES
        .split(content)
        .filter(|piece| !piece.trim().is_empty())
        .enumerate()
        .map(|(index, text)| ContentBlock { index, text })
        .collect()
}

/// Media attachment displayed alongside post content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Attachment {
    url: String,
    name: String,
    size: Option<u64>,
    format: Option<ImageFormat>,
}

impl Attachment {
    /// Builds an attachment from a raw media record.
    ///
    /// Returns None when the record has no resolvable URL. Only the URL
    /// decides whether the attachment is an image; the upload filename is
    /// used for display.
    pub fn from_record(record: &Value) -> Option<Self> {
        let url = resolve_media_url(record);
        if url.is_empty() {
            return None;
        }

        let filename = resolve_media_filename(record);
        let format = image_format(&url);
        let name = if filename.is_empty() {
            name_from_url(&url)
        } else {
            filename
        };

        Some(Self {
            size: resolve_media_size(record),
            url,
            name,
            format,
        })
    }

    pub fn url(&self) -> &str {
        &self.url
    }

    /// Display name: upload filename, else last URL path segment.
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn size(&self) -> Option<u64> {
        self.size
    }

    pub fn format(&self) -> Option<ImageFormat> {
        self.format
    }

    pub fn is_image(&self) -> bool {
        self.format.is_some()
    }
}

fn name_from_url(url: &str) -> String {
    let path = url.split(['?', '#']).next().unwrap_or(url);
    path.trim_end_matches('/')
        .rsplit('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .unwrap_or(url)
        .to_string()
}

/// Resolves attachments, dropping unresolvable and duplicate URLs.
///
/// Order of first appearance is preserved.
pub fn collect_attachments(records: &[Value]) -> Vec<Attachment> {
    let mut seen = HashSet::new();
    records
        .iter()
        .filter_map(Attachment::from_record)
        .filter(|attachment| seen.insert(attachment.url.clone()))
        .collect()
}

/// Content block with the attachment sharing its index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockPair<'a> {
    pub block: ContentBlock<'a>,
    pub attachment: Option<&'a Attachment>,
}

/// Positional pairing of content blocks and attachments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Interleaved<'a> {
    /// One entry per content block, in document order
    pub pairs: Vec<BlockPair<'a>>,
    /// Attachments past the last block index
    pub trailing: &'a [Attachment],
}

/// Pairs block `i` with attachment `i`.
///
/// Blocks beyond the attachment count get no attachment. Attachments beyond
/// the block count are returned as the trailing list.
///
/// # Arguments
///
/// * `blocks`: Content blocks from [`split_blocks`]
/// * `attachments`: Deduplicated attachments from [`collect_attachments`]
pub fn interleave<'a>(
    blocks: &[ContentBlock<'a>],
    attachments: &'a [Attachment],
) -> Interleaved<'a> {
    let pairs = blocks
        .iter()
        .map(|block| BlockPair {
            block: *block,
            attachment: attachments.get(block.index),
        })
        .collect();

    let trailing = attachments.get(blocks.len()..).unwrap_or(&[]);

    Interleaved { pairs, trailing }
}
