//! Shared test utilities for integration tests.
//!
//! Provides helpers for writing post JSON fixtures into temporary
//! directories.

use anyhow::Result;
use serde_json::{Value, json};
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

/// Writes a post JSON file into a fresh temporary directory.
///
/// # Returns
///
/// Temporary directory (kept alive by the caller) and path to the post file
///
/// # Errors
///
/// Returns error if directory creation or file write fails
pub fn write_post(post: &Value) -> Result<(TempDir, PathBuf)> {
    let dir = TempDir::new()?;
    let path = dir.path().join("post.json");
    fs::write(&path, serde_json::to_string_pretty(post)?)?;
    Ok((dir, path))
}

/// Post with placeholders, a promotable link, and more media than blocks.
pub fn sample_post() -> Value {
    json!({
        "id": 7,
        "title": "Field Notes",
        "content": "Intro with ![Cover](undefined)\n\nSee [diagram](plans/site map.png)\n\n[spec sheet](https://example.com/sheet)",
        "media": [
            { "url": "https://cdn.example.com/cover.jpg", "filename": "Cover.JPG", "size": 2048 },
            { "media": { "fileUrl": "https://cdn.example.com/notes.pdf", "originalName": "notes.pdf", "fileSize": 1572864 } },
            { "url": "https://cdn.example.com/site.png", "filename": "site.png" },
            { "url": "https://cdn.example.com/extra.webp", "filename": "extra.webp" },
            { "url": "https://cdn.example.com/data.zip", "filename": "data.zip" }
        ],
        "author": { "displayName": "Rui Costa" },
        "createdAt": "2024-05-01T10:00:00Z",
        "tags": [{ "name": "survey" }],
        "categories": ["Fieldwork"]
    })
}
