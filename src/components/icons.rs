//! Attachment icon rendering

use maud::{Markup, html};
use std::path::Path;

/// Renders attachment icon based on its display name
///
/// Generates Phosphor icon HTML with a CSS modifier class so download rows
/// are visually grouped by kind (documents, archives, audio, video).
///
/// # Arguments
///
/// * `name`: Attachment filename or URL path segment
///
/// # Returns
///
/// Icon markup with appropriate Phosphor icon class and color modifier
pub fn attachment_icon(name: &str) -> Markup {
    let (icon_class, icon_modifier) = icon_classes(name);

    html! {
        span class="icon-box" {
            @if let Some(modifier) = icon_modifier {
                i class=(format!("{} {}", icon_class, modifier)) {}
            } @else {
                i class=(icon_class) {}
            }
        }
    }
}

/// Returns Phosphor icon classes for an attachment
///
/// Matches on the lowercased extension. Unknown and missing extensions get
/// the generic file icon without modifier.
///
/// # Arguments
///
/// * `name`: Attachment filename or URL path segment
///
/// # Returns
///
/// Phosphor icon class name and optional CSS modifier class for color styling
pub fn icon_classes(name: &str) -> (&'static str, Option<&'static str>) {
    let lower = name.to_lowercase();
    let Some(ext) = Path::new(&lower).extension().and_then(|e| e.to_str()) else {
        return ("ph ph-file", None);
    };

    match ext {
        "png" | "jpg" | "jpeg" | "gif" | "webp" | "svg" | "bmp" | "avif" => {
            ("ph ph-file-image", Some("icon-image"))
        }
        "pdf" => ("ph ph-file-pdf", Some("icon-pdf")),
        "doc" | "docx" | "odt" | "rtf" | "txt" | "md" => ("ph ph-file-text", Some("icon-doc")),
        "xls" | "xlsx" | "ods" | "csv" => ("ph ph-file-xls", Some("icon-sheet")),
        "zip" | "gz" | "tgz" | "rar" | "7z" | "tar" => ("ph ph-file-zip", Some("icon-archive")),
        "mp3" | "wav" | "ogg" | "flac" | "m4a" => ("ph ph-file-audio", Some("icon-audio")),
        "mp4" | "mov" | "webm" | "mkv" | "avi" => ("ph ph-file-video", Some("icon-video")),
        _ => ("ph ph-file", None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_icon_classes_documents() {
        // Arrange & Act & Assert
        let (icon, modifier) = icon_classes("Report.PDF");
        assert_eq!(icon, "ph ph-file-pdf", "PDF should use pdf icon");
        assert_eq!(modifier, Some("icon-pdf"));

        let (icon, _) = icon_classes("notes.docx");
        assert_eq!(icon, "ph ph-file-text");
    }

    #[test]
    fn test_icon_classes_media() {
        assert_eq!(icon_classes("clip.mp4").1, Some("icon-video"));
        assert_eq!(icon_classes("song.flac").1, Some("icon-audio"));
        assert_eq!(icon_classes("cover.avif").0, "ph ph-file-image");
    }

    #[test]
    fn test_icon_classes_archives() {
        let (icon, modifier) = icon_classes("backup.tar.gz");
        assert_eq!(icon, "ph ph-file-zip", "Last extension decides");
        assert_eq!(modifier, Some("icon-archive"));
    }

    #[test]
    fn test_icon_classes_generic() {
        assert_eq!(icon_classes("unknown.xyz"), ("ph ph-file", None));
        assert_eq!(icon_classes("LICENSE"), ("ph ph-file", None));
        assert_eq!(icon_classes(""), ("ph ph-file", None));
    }

    #[test]
    fn test_attachment_icon_markup() {
        let html = attachment_icon("a.pdf").into_string();
        assert_eq!(
            html,
            r#"<span class="icon-box"><i class="ph ph-file-pdf icon-pdf"></i></span>"#
        );
    }
}
