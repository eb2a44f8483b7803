//! Single post page generation

use anyhow::{Context, Result};
use maud::{Markup, PreEscaped, html};
use tracing::debug;

use crate::blocks::{Interleaved, collect_attachments, interleave, split_blocks};
use crate::components::attachment::{attachment, trailing_attachments};
use crate::components::layout::page_wrapper;
use crate::components::metadata::{PostMeta, post_header};
use crate::markdown::{ElementOverrides, MarkdownRenderer, normalize_content};
use crate::post::Post;

/// Stylesheets linked from the post page, relative to the output directory.
const STYLESHEETS: &[&str] = &["assets/post.css", "assets/markdown.css"];

/// Generates HTML page for a single post
///
/// Normalizes the post body against its media list, splits it into content
/// blocks, pairs each block with the attachment at the same index, and
/// renders each block as markdown. Attachments left over after the last
/// block render as a trailing gallery and download list.
///
/// # Arguments
///
/// * `post`: Post loaded from the API
/// * `site_name`: Site name for the document title and footer
///
/// # Returns
///
/// HTML markup ready for writing to disk
///
/// # Errors
///
/// Returns error if a content block fails to render
///
/// # Examples
///
/// ```
/// use postview::{Post, pages::post::generate};
///
/// let post = Post::from_json(r#"{ "title": "Hi", "content": "[x](a.png)" }"#)?;
/// let html = generate(&post, "Blog")?.into_string();
/// assert!(html.contains(r#"src="a.png""#));
/// # Ok::<(), anyhow::Error>(())
/// ```
pub fn generate(post: &Post, site_name: &str) -> Result<Markup> {
    let normalized = normalize_content(post.content(), post.media());
    let blocks = split_blocks(&normalized);
    let attachments = collect_attachments(post.media());
    let layout = interleave(&blocks, &attachments);

    debug!(
        blocks = blocks.len(),
        attachments = attachments.len(),
        trailing = layout.trailing.len(),
        "interleaved post content"
    );

    let renderer = MarkdownRenderer::with_overrides(ElementOverrides::default());
    let rendered_blocks = layout
        .pairs
        .iter()
        .map(|pair| {
            renderer.render(pair.block.text).with_context(|| {
                format!("Failed to render content block {}", pair.block.index + 1)
            })
        })
        .collect::<Result<Vec<String>>>()?;

    let tags = post.tags();
    let categories = post.categories();
    let meta = PostMeta {
        title: post.title(),
        author: post.author(),
        created_at: post.created_at(),
        tags: &tags,
        categories: &categories,
    };

    Ok(post_page_markup(
        meta,
        site_name,
        &layout,
        &rendered_blocks,
    ))
}

/// Renders post page HTML structure
fn post_page_markup(
    meta: PostMeta<'_>,
    site_name: &str,
    layout: &Interleaved<'_>,
    rendered_blocks: &[String],
) -> Markup {
    page_wrapper(
        meta.title,
        site_name,
        STYLESHEETS,
        html! {
            article class="post-card" {
                (post_header(meta))
                @if layout.pairs.is_empty() {
                    p class="empty-state" { "This post has no content yet." }
                } @else {
                    div class="post-body markdown-body" {
                        @for (pair, rendered) in layout.pairs.iter().zip(rendered_blocks) {
                            section class="content-block" id=(format!("block-{}", pair.block.index + 1)) {
                                (PreEscaped(rendered))
                                @if let Some(item) = pair.attachment {
                                    (attachment(item))
                                }
                            }
                        }
                    }
                }
                (trailing_attachments(layout.trailing))
            }
        },
    )
}
