//! Reusable HTML components for page generation
//!
//! Maud component functions for the post page: document layout, footer,
//! post header metadata, attachment icons, and attachment rendering.

pub mod attachment;
pub mod footer;
pub mod icons;
pub mod layout;
pub mod metadata;
