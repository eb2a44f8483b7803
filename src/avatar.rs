//! Avatar generation for post authors
//!
//! Initials on a soft pastel disc. Color is derived from a hash of the name,
//! so the same author always gets the same avatar.

use maud::{Markup, PreEscaped, html};

const COLORS: &[&str] = &[
    "#dc8a78", "#ea76cb", "#f5c2e7", "#eba0ac", // pinks
    "#ca9ee6", "#cba6f7", "#b4befe", "#c4a7e7", // purples
    "#8caaee", "#85c1dc", "#89dceb", "#74c7ec", // blues
    "#81c8be", "#94e2d5", "#a6d189", "#c6d57e", // teals and greens
    "#e5c890", "#ef9f76", "#fab387", "#f9e2af", // peaches
];

fn hash(s: &str) -> u64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    s.trim()
        .bytes()
        .fold(OFFSET, |h, b| (h ^ b as u64).wrapping_mul(PRIME))
}

/// Up to two uppercase initials from the first and last words of a name.
///
/// Email addresses contribute only their local part. Names without any
/// alphanumeric character yield `?`.
pub fn initials(name: &str) -> String {
    let local = name.split('@').next().unwrap_or(name);
    let words: Vec<&str> = local
        .split(|c: char| !c.is_alphanumeric())
        .filter(|w| !w.is_empty())
        .collect();

    let first = words.first().and_then(|w| w.chars().next());
    let last = if words.len() > 1 {
        words.last().and_then(|w| w.chars().next())
    } else {
        None
    };

    let letters: String = first
        .into_iter()
        .chain(last)
        .flat_map(char::to_uppercase)
        .collect();

    if letters.is_empty() {
        "?".to_string()
    } else {
        letters
    }
}

/// Generate SVG avatar from name
pub fn generate_svg(name: &str, size: u32) -> String {
    let bg = COLORS[(hash(name) % COLORS.len() as u64) as usize];
    let text = initials(name);

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 100 100" role="img" aria-label="{text}"><circle cx="50" cy="50" r="50" fill="{bg}"/><text x="50" y="50" dy="0.35em" text-anchor="middle" font-family="system-ui, sans-serif" font-size="40" font-weight="600" fill="#ffffff">{text}</text></svg>"##
    )
}

/// Create inline SVG avatar element
pub fn render(name: &str, size: u32) -> Markup {
    html! { span class="avatar" { (PreEscaped(generate_svg(name, size))) } }
}
