//! Post metadata components

use maud::{Markup, html};

use crate::avatar;
use crate::util::format_date;

/// Header metadata for a single post
#[derive(Debug, Clone, Copy, Default)]
pub struct PostMeta<'a> {
    pub title: &'a str,
    pub author: Option<&'a str>,
    pub created_at: Option<&'a str>,
    pub tags: &'a [&'a str],
    pub categories: &'a [&'a str],
}

/// Renders post header with title, byline, and taxonomy
///
/// The byline (avatar, author, date) is omitted entirely when neither author
/// nor date is known. Categories render before tags.
///
/// # Arguments
///
/// * `meta`: Post header metadata
///
/// # Returns
///
/// Post header markup
pub fn post_header(meta: PostMeta<'_>) -> Markup {
    html! {
        header class="post-header" {
            h1 class="post-title" {
                @if meta.title.is_empty() {
                    "Untitled post"
                } @else {
                    (meta.title)
                }
            }
            @if meta.author.is_some() || meta.created_at.is_some() {
                div class="post-byline" {
                    @if let Some(author) = meta.author {
                        (avatar::render(author, 28))
                        span class="post-author" { (author) }
                    }
                    @if let Some(date) = meta.created_at {
                        time class="post-date" datetime=(date) { (format_date(date)) }
                    }
                }
            }
            @if !meta.categories.is_empty() || !meta.tags.is_empty() {
                div class="post-taxonomy" {
                    @for category in meta.categories {
                        span class="badge badge-category" {
                            i class="ph ph-folder" {}
                            " " (category)
                        }
                    }
                    @for tag in meta.tags {
                        span class="badge badge-tag" { "#" (tag) }
                    }
                }
            }
        }
    }
}
