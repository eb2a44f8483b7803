//! Static page generator for CMS posts with media attachments.

mod assets;
pub mod avatar;
mod blocks;
pub mod components;
mod config;
mod filetype;
mod logging;
mod markdown;
mod media;
pub mod pages;
mod post;
mod util;

pub use assets::{STYLESHEET_NAMES, write_css_assets};
pub use blocks::{
    Attachment, BlockPair, ContentBlock, Interleaved, collect_attachments, interleave,
    split_blocks,
};
pub use config::Config;
pub use filetype::{ImageFormat, image_format, is_image_url};
pub use logging::init_logging;
pub use markdown::{ElementOverrides, MarkdownRenderer, normalize_content, normalize_with_candidates};
pub use media::{
    MediaRef, candidates, resolve_media_filename, resolve_media_size, resolve_media_url,
};
pub use post::{Post, PostId};
pub use util::{format_date, format_file_size};
