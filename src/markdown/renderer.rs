//! Markdown rendering with GitHub Flavored Markdown support.

use anyhow::{Context, Result};
use comrak::Options;
use maud::Escaper;
use regex::{Captures, Regex};
use std::fmt::Write;
use std::sync::LazyLock;
use syntect::html::{ClassStyle, ClassedHTMLGenerator};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

use super::ElementOverrides;

/// Fenced code block with a language class, as emitted by comrak.
static CODE_BLOCK: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"(?s)(<code class="language-([^"]+)">)(.*?)</code>"#)
        .expect("CODE_BLOCK: hardcoded regex is valid")
});

/// Entities comrak escapes in code text.
static ENTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"&(amp|lt|gt|quot|#39);").expect("ENTITY: hardcoded regex is valid")
});

/// Post body renderer: comrak GFM, optional image/link overrides, then
/// class-based syntect highlighting of fenced code.
pub struct MarkdownRenderer<'a> {
    options: Options<'a>,
    syntax_set: SyntaxSet,
    overrides: Option<ElementOverrides>,
}

impl<'a> MarkdownRenderer<'a> {
    /// Creates a renderer without element overrides.
    ///
    /// Raw HTML in post bodies is passed through.
    pub fn new() -> Self {
        let mut options = Options::default();

        options.extension.strikethrough = true;
        options.extension.table = true;
        options.extension.autolink = true;
        options.extension.tasklist = true;
        options.extension.footnotes = true;
        options.extension.description_lists = true;
        options.parse.smart = true;
        options.render.unsafe_ = true;

        let syntax_set = SyntaxSet::load_defaults_newlines();

        Self {
            options,
            syntax_set,
            overrides: None,
        }
    }

    /// Creates renderer that rewrites images and links after rendering.
    ///
    /// # Arguments
    ///
    /// * `overrides`: Attribute overrides for `<img>` and `<a>` tags
    pub fn with_overrides(overrides: ElementOverrides) -> Self {
        let mut renderer = Self::new();
        renderer.overrides = Some(overrides);
        renderer
    }

    /// Renders one content block to HTML.
    ///
    /// Overrides run before highlighting so markup inside code, which comrak
    /// has already escaped, is never rewritten.
    ///
    /// # Errors
    ///
    /// Returns error if a fenced code block fails to highlight
    pub fn render(&self, content: &str) -> Result<String> {
        let mut html = comrak::markdown_to_html(content, &self.options);

        if let Some(overrides) = &self.overrides {
            html = overrides.apply(&html);
        }

        self.highlight_code_blocks(&html)
    }

    /// Replaces the body of each `language-*` code block with syntect output.
    ///
    /// Comrak emits the code entity-escaped. The body is decoded, highlighted
    /// with `hljs-` prefixed classes, and spliced back between the original
    /// tags. Blocks without a language class are left as comrak wrote them.
    fn highlight_code_blocks(&self, html: &str) -> Result<String> {
        let mut result = String::with_capacity(html.len());
        let mut copied = 0;

        for caps in CODE_BLOCK.captures_iter(html) {
            let (Some(open), Some(language), Some(body)) = (caps.get(1), caps.get(2), caps.get(3))
            else {
                continue;
            };

            let highlighted = self
                .highlight_code(&decode_entities(body.as_str()), language.as_str())
                .with_context(|| format!("Failed to highlight {} code block", language.as_str()))?;

            result.push_str(&html[copied..open.end()]);
            result.push_str(&highlighted);
            copied = body.end();
        }

        result.push_str(&html[copied..]);
        Ok(result)
    }

    /// Highlights source with class-based spans, or escapes it when the
    /// language is unknown.
    fn highlight_code(&self, code: &str, language: &str) -> Result<String> {
        if code.is_empty() {
            return Ok(String::new());
        }

        let Some(syntax) = self
            .syntax_set
            .find_syntax_by_token(language)
            .or_else(|| self.syntax_set.find_syntax_by_extension(language))
        else {
            let mut escaped = String::with_capacity(code.len());
            Escaper::new(&mut escaped)
                .write_str(code)
                .context("Failed to escape code block")?;
            return Ok(escaped);
        };

        let mut generator = ClassedHTMLGenerator::new_with_class_style(
            syntax,
            &self.syntax_set,
            ClassStyle::SpacedPrefixed { prefix: "hljs-" },
        );

        LinesWithEndings::from(code).try_for_each(|line| {
            generator
                .parse_html_for_line_which_includes_newline(line)
                .context("Failed to parse line for syntax highlighting")
        })?;

        Ok(generator.finalize())
    }
}

/// Reverses the entity escaping comrak applies inside code blocks.
fn decode_entities(escaped: &str) -> String {
    ENTITY
        .replace_all(escaped, |caps: &Captures<'_>| match &caps[1] {
            "amp" => "&",
            "lt" => "<",
            "gt" => ">",
            "quot" => "\"",
            _ => "'",
        })
        .into_owned()
}

impl<'a> Default for MarkdownRenderer<'a> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_basic_markdown() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "# Launch notes\n\nThis is **bold** text.";

        // Act
        let html = renderer.render(markdown).expect("Should render markdown");

        // Assert
        assert!(html.contains("<h1>"), "Should contain h1 tag");
        assert!(html.contains("Launch notes"), "Should contain heading text");
        assert!(html.contains("<strong>bold</strong>"), "Should contain strong tag");
    }

    #[test]
    fn test_render_gfm_tables() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "| Plan | Price |\n|------|-------|\n| Pro  | 10    |\n";

        // Act
        let html = renderer.render(markdown).expect("Should render table");

        // Assert
        assert!(html.contains("<table>"), "Should contain table tag");
        assert!(html.contains("<th>"), "Should contain table header");
        assert!(html.contains("<td>"), "Should contain table cell");
    }

    #[test]
    fn test_render_image_token() {
        // Arrange
        let renderer = MarkdownRenderer::new();

        // Act
        let html = renderer
            .render("![Cover](https://cdn.example.com/cover.png)")
            .expect("Should render image");

        // Assert
        assert!(
            html.contains(r#"<img src="https://cdn.example.com/cover.png" alt="Cover" />"#),
            "Should render img without overrides: {}",
            html
        );
    }

    #[test]
    fn test_render_with_overrides() {
        // Arrange
        let renderer = MarkdownRenderer::with_overrides(ElementOverrides::default());
        let markdown = "![Cover](/cover.png)\n\n[Docs](https://example.com/docs) and [next](/posts/2)";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(
            html.contains(r#"<img loading="lazy" class="post-image" src="/cover.png""#),
            "Image should be lazy with class: {}",
            html
        );
        assert!(
            html.contains(
                r#"<a target="_blank" rel="noopener noreferrer" href="https://example.com/docs">"#
            ),
            "External link should open new tab: {}",
            html
        );
        assert!(
            html.contains(r#"<a href="/posts/2">"#),
            "Relative link should stay: {}",
            html
        );
    }

    #[test]
    fn test_render_code_blocks() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "```rust\nfn main() {\n    println!(\"hello\");\n}\n```\n";

        // Act
        let html = renderer.render(markdown).expect("Should render code block");

        // Assert
        assert!(html.contains("<pre>"), "Should contain pre tag: {}", html);
        assert!(
            html.contains("<code class=\"language-rust\">"),
            "Should keep language class: {}",
            html
        );
        assert!(
            html.contains("<span class=\"hljs-"),
            "Should contain highlighting spans: {}",
            html
        );
        assert!(html.contains("println!"), "Should contain macro name");
    }

    #[test]
    fn test_code_block_links_not_overridden() {
        // Arrange
        let renderer = MarkdownRenderer::with_overrides(ElementOverrides::default());
        let markdown = "```html\n<img src=\"x.png\">\n```\n";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(
            !html.contains("loading=\"lazy\""),
            "Escaped markup in code must not be rewritten: {}",
            html
        );
    }

    #[test]
    fn test_highlight_code_blocks_unknown_language() {
        let renderer = MarkdownRenderer::new();
        let markdown = "```unknownlang\nsome code\n```\n";

        let html = renderer.render(markdown).expect("Should render");

        assert!(html.contains("some code"), "Should contain plain text");
        assert!(
            html.contains("<code class=\"language-unknownlang\">"),
            "Should preserve language class"
        );
    }

    #[test]
    fn test_highlight_code_with_special_chars() {
        let renderer = MarkdownRenderer::new();
        let markdown = "```javascript\nconst x = \"<b>bold</b>\";\n```\n";

        let html = renderer.render(markdown).expect("Should render");

        assert!(html.contains("const"), "Should contain code");
        assert!(
            !html.contains("<b>bold</b>"),
            "Markup inside code must stay escaped: {}",
            html
        );
    }

    #[test]
    fn test_decode_entities() {
        assert_eq!(
            decode_entities("a &lt;b&gt; &amp;&amp; &quot;c&quot; &#39;d&#39; &nbsp;"),
            "a <b> && \"c\" 'd' &nbsp;"
        );
    }

    #[test]
    fn test_multiple_code_blocks_and_plain_fence() {
        // Arrange
        let renderer = MarkdownRenderer::new();
        let markdown = "```\nplain <tag>\n```\n\ntext\n\n```rust\nlet a = 1;\n```\n\n```python\nx = 2\n```\n";

        // Act
        let html = renderer.render(markdown).expect("Should render");

        // Assert
        assert!(html.contains("plain &lt;tag&gt;"), "Unlabelled fence untouched: {}", html);
        assert!(html.contains("<code class=\"language-rust\">"));
        assert!(html.contains("<code class=\"language-python\">"));
        assert_eq!(html.matches("</code>").count(), 3);
        assert!(html.contains("text"));
    }

    #[test]
    fn test_render_html_passthrough() {
        let renderer = MarkdownRenderer::new();
        let markdown = "<video src=\"/clip.mp4\" controls></video>\n\nCaption.";

        let html = renderer.render(markdown).expect("Should render HTML");

        assert!(
            html.contains("<video src=\"/clip.mp4\" controls>"),
            "Trusted raw HTML should pass through: {}",
            html
        );
    }

    #[test]
    fn test_render_empty_markdown() {
        let renderer = MarkdownRenderer::default();
        let html = renderer.render("").expect("Empty markdown should render");
        assert!(html.trim().is_empty());
    }
}
