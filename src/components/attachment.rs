//! Attachment rendering components

use maud::{Markup, html};

use super::icons::attachment_icon;
use crate::blocks::Attachment;
use crate::util::format_file_size;

/// Renders a single attachment beside its content block
///
/// Images render inline as a figure captioned with the attachment name.
/// Everything else renders as a download row.
pub fn attachment(item: &Attachment) -> Markup {
    if item.is_image() {
        image_figure(item)
    } else {
        download_row(item)
    }
}

/// Renders an image attachment as a figure
pub fn image_figure(item: &Attachment) -> Markup {
    html! {
        figure class="post-figure" data-format=[item.format().map(|f| f.extension())] {
            a href=(item.url()) type=[item.format().map(|f| f.mime_type())] target="_blank" rel="noopener noreferrer" {
                img class="post-image" src=(item.url()) alt=(item.name()) loading="lazy";
            }
            figcaption { (item.name()) }
        }
    }
}

/// Renders a non-image attachment as a download row
///
/// Shows icon, name, and human readable size when the API reported one.
pub fn download_row(item: &Attachment) -> Markup {
    html! {
        a class="download-row" href=(item.url()) download {
            (attachment_icon(item.name()))
            span class="download-name" { (item.name()) }
            @if let Some(size) = item.size() {
                span class="download-size" { (format_file_size(size)) }
            }
        }
    }
}

/// Renders attachments that had no content block to pair with
///
/// Images are grouped into a gallery grid, the rest into a download list.
/// Returns empty markup when there is nothing left over.
pub fn trailing_attachments(items: &[Attachment]) -> Markup {
    if items.is_empty() {
        return html! {};
    }

    let (images, files): (Vec<&Attachment>, Vec<&Attachment>) =
        items.iter().partition(|item| item.is_image());

    html! {
        section class="post-attachments" {
            h2 class="attachments-title" {
                i class="ph ph-paperclip" {}
                " Attachments"
            }
            @if !images.is_empty() {
                div class="media-gallery" {
                    @for item in &images {
                        (image_figure(item))
                    }
                }
            }
            @if !files.is_empty() {
                div class="download-list" {
                    @for item in &files {
                        (download_row(item))
                    }
                }
            }
        }
    }
}
