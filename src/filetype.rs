//! Media type classification for attachment rendering.
//!
//! Decides whether a URL or filename points at an image. Classification is
//! purely textual: the path must end in a known image extension, optionally
//! followed by a query string. No bytes are fetched or inspected.

use regex::Regex;
use std::sync::LazyLock;

/// Image extension at the end of a URL, with optional query string.
static IMAGE_EXTENSION: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\.(png|jpe?g|gif|webp|svg|bmp|avif)(\?.*)?$")
        .expect("IMAGE_EXTENSION: hardcoded regex is valid")
});

/// Supported image formats for inline display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageFormat {
    /// Portable Network Graphics with transparency
    Png,
    /// JPEG compressed image (no transparency)
    Jpeg,
    /// Graphics Interchange Format with animation support
    Gif,
    /// Scalable Vector Graphics (XML based)
    Svg,
    /// WebP format with transparency and animation
    Webp,
    /// Bitmap image (uncompressed)
    Bmp,
    /// AV1 Image File Format
    Avif,
}

impl ImageFormat {
    /// MIME type for link type hints
    pub fn mime_type(&self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
            Self::Gif => "image/gif",
            Self::Svg => "image/svg+xml",
            Self::Webp => "image/webp",
            Self::Bmp => "image/bmp",
            Self::Avif => "image/avif",
        }
    }

    /// File extension without dot
    pub fn extension(&self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpg",
            Self::Gif => "gif",
            Self::Svg => "svg",
            Self::Webp => "webp",
            Self::Bmp => "bmp",
            Self::Avif => "avif",
        }
    }

    fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "png" => Some(Self::Png),
            "jpg" | "jpeg" => Some(Self::Jpeg),
            "gif" => Some(Self::Gif),
            "svg" => Some(Self::Svg),
            "webp" => Some(Self::Webp),
            "bmp" => Some(Self::Bmp),
            "avif" => Some(Self::Avif),
            _ => None,
        }
    }
}

/// Detects image format from the tail of a URL or filename.
///
/// Matching is case insensitive and tolerates a trailing query string
/// (`photo.PNG?w=300`). Fragments are not stripped, so `photo.png#top`
/// is not recognized.
///
/// # Arguments
///
/// * `url`: Absolute URL, relative path, or bare filename
///
/// # Returns
///
/// Image format when the extension is recognized, None otherwise
///
/// # Examples
///
/// ```
/// use postview::{ImageFormat, image_format};
///
/// assert_eq!(image_format("https://cdn.example.com/a.webp?v=2"), Some(ImageFormat::Webp));
/// assert_eq!(image_format("report.pdf"), None);
/// ```
pub fn image_format(url: &str) -> Option<ImageFormat> {
    let caps = IMAGE_EXTENSION.captures(url)?;
    ImageFormat::from_extension(caps.get(1)?.as_str())
}

/// Checks whether a URL points at a recognized image file.
pub fn is_image_url(url: &str) -> bool {
    IMAGE_EXTENSION.is_match(url)
}
