//! Formatting helpers for post pages

/// Formats byte count as human readable file size
///
/// Converts byte count to appropriate unit (bytes, KB, MB, GB) with two
/// decimal places above bytes. Uses binary prefixes.
///
/// # Arguments
///
/// * `bytes`: File size in bytes
///
/// # Returns
///
/// Formatted string like "512 bytes", "1.50 KB", or "2.00 MB"
pub fn format_file_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} bytes", bytes)
    }
}

/// Shortens an API timestamp to its calendar date
///
/// ISO 8601 values (`2024-05-01T10:00:00Z`) keep only the date part. Anything
/// that does not look like one is returned trimmed but otherwise untouched.
pub fn format_date(timestamp: &str) -> String {
    let trimmed = timestamp.trim();
    match trimmed.split_once('T') {
        Some((date, _)) if looks_like_date(date) => date.to_string(),
        _ => trimmed.to_string(),
    }
}

fn looks_like_date(s: &str) -> bool {
    let bytes = s.as_bytes();
    bytes.len() == 10
        && bytes[4] == b'-'
        && bytes[7] == b'-'
        && bytes
            .iter()
            .enumerate()
            .all(|(i, b)| i == 4 || i == 7 || b.is_ascii_digit())
}
