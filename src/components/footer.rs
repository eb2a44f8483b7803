//! Page footer component

use maud::{Markup, html};

/// Renders the shared page footer with generator attribution
pub fn footer(site_name: &str) -> Markup {
    html! {
        footer class="page-footer" {
            p {
                (site_name)
                " · generated by "
                a href="https://crates.io/crates/postview" target="_blank" rel="noopener noreferrer" { "Postview" }
            }
        }
    }
}
