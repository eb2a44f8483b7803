//! Element overrides applied to rendered markdown.

/// Attribute overrides for images and links in rendered HTML.
///
/// Images become lazily loaded and styled as post media. Links to absolute
/// URLs open in a new tab without leaking the opener. Relative links and
/// anchors are left alone.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementOverrides {
    image_class: String,
}

impl ElementOverrides {
    /// Creates overrides with the given CSS class for images.
    ///
    /// # Arguments
    ///
    /// * `image_class`: Class attribute added to every `<img>`
    pub fn new(image_class: impl Into<String>) -> Self {
        Self {
            image_class: image_class.into(),
        }
    }

    /// Returns extra attributes for an opening tag, if any.
    ///
    /// # Arguments
    ///
    /// * `is_image`: Whether tag is `<img>` (otherwise `<a>`)
    /// * `target`: Value of `src` or `href`
    ///
    /// # Returns
    ///
    /// Attribute string starting with a space, empty when nothing applies
    pub fn attributes(&self, is_image: bool, target: &str) -> String {
        let mut attrs = String::new();

        if is_image {
            attrs.push_str(" loading=\"lazy\"");
            if !self.image_class.is_empty() {
                attrs.push_str(" class=\"");
                attrs.push_str(&self.image_class);
                attrs.push('"');
            }
        } else if is_external(target) {
            attrs.push_str(" target=\"_blank\" rel=\"noopener noreferrer\"");
        }

        attrs
    }

    /// Rewrites `<a>` and `<img>` opening tags in HTML.
    ///
    /// Tags already carrying a `class` (images) or `target` (links) attribute
    /// are copied unchanged so author supplied HTML wins.
    ///
    /// # Arguments
    ///
    /// * `html`: HTML from markdown conversion
    ///
    /// # Returns
    ///
    /// HTML with override attributes inserted after the tag name
    pub fn apply(&self, html: &str) -> String {
        let mut result = String::with_capacity(html.len());
        let mut pos = 0;

        while pos < html.len() {
            let link_pos = html[pos..].find("<a ");
            let img_pos = html[pos..].find("<img ");

            let (tag_start, is_image) = match (link_pos, img_pos) {
                (Some(l), Some(i)) if l < i => (pos + l, false),
                (Some(l), None) => (pos + l, false),
                (None, Some(i)) => (pos + i, true),
                (Some(_), Some(i)) => (pos + i, true),
                (None, None) => {
                    result.push_str(&html[pos..]);
                    break;
                }
            };

            result.push_str(&html[pos..tag_start]);

            let name_end = tag_start + if is_image { "<img".len() } else { "<a".len() };
            let tag_end = match html[tag_start..].find('>') {
                Some(p) => tag_start + p,
                None => {
                    result.push_str(&html[tag_start..]);
                    break;
                }
            };

            let tag = &html[tag_start..tag_end];
            let (attr, guard) = if is_image {
                ("src=\"", " class=")
            } else {
                ("href=\"", " target=")
            };

            result.push_str(&html[tag_start..name_end]);
            if !tag.contains(guard) {
                let target = attribute_value(tag, attr).unwrap_or("");
                result.push_str(&self.attributes(is_image, target));
            }

            pos = name_end;
        }

        result
    }
}

impl Default for ElementOverrides {
    fn default() -> Self {
        Self::new("post-image")
    }
}

fn attribute_value<'a>(tag: &'a str, attr: &str) -> Option<&'a str> {
    let start = tag.find(attr)? + attr.len();
    let end = tag[start..].find('"')? + start;
    Some(&tag[start..end])
}

fn is_external(href: &str) -> bool {
    href.starts_with("http://") || href.starts_with("https://")
}
