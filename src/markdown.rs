//! Markdown normalization and rendering for post bodies.
//!
//! Post content is first normalized against the post's media list (filling
//! placeholder targets, repairing image syntax) and then rendered with
//! comrak using GFM extensions, syntect highlighting, and element overrides
//! for images and links.

mod normalize;
mod overrides;
mod renderer;

pub use normalize::{normalize_content, normalize_with_candidates};
pub use overrides::ElementOverrides;
pub use renderer::MarkdownRenderer;
