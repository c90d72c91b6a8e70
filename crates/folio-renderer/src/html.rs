//! HTML backend for note display.

use std::fmt::Write;

use crate::backend::RenderBackend;
use crate::escape::escape_html;
use crate::image::ImageRef;
use crate::resolve::ImageResolver;

/// HTML render backend.
///
/// Produces semantic HTML5 with:
/// - `<pre><code>` for code blocks
/// - `<blockquote>` for blockquotes
/// - `<img>` for images, with sources resolved against the note layout
#[derive(Debug, Clone, Default)]
pub struct HtmlBackend {
    resolver: ImageResolver,
}

impl HtmlBackend {
    /// Backend resolving image references through `resolver`.
    pub fn new(resolver: ImageResolver) -> Self {
        Self { resolver }
    }
}

impl RenderBackend for HtmlBackend {
    /// Emit a self-closing `<img>` tag.
    ///
    /// `alt` and `title` are escaped; `src` is not, because it is a URL
    /// produced by the resolver (or an absolute reference preserved
    /// byte-for-byte), not author text. An empty title drops the attribute
    /// entirely.
    fn image(&self, image: &ImageRef, out: &mut String) {
        let src = self.resolver.resolve(&image.source);
        let title_attr = if image.title.is_empty() {
            String::new()
        } else {
            format!(r#" title="{}""#, escape_html(&image.title))
        };
        write!(
            out,
            r#"<img src="{src}" alt="{}"{title_attr} />"#,
            escape_html(&image.alt)
        )
        .unwrap();
    }

    fn code_block(&self, lang: Option<&str>, content: &str, out: &mut String) {
        if let Some(lang) = lang {
            write!(
                out,
                r#"<pre><code class="language-{}">{}</code></pre>"#,
                escape_html(lang),
                escape_html(content)
            )
            .unwrap();
        } else {
            write!(out, "<pre><code>{}</code></pre>", escape_html(content)).unwrap();
        }
    }

    fn blockquote_start(&self, out: &mut String) {
        out.push_str("<blockquote>");
    }

    fn blockquote_end(&self, out: &mut String) {
        out.push_str("</blockquote>");
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::image::ImageRecord;

    fn hook(image: &ImageRef) -> String {
        let mut out = String::new();
        HtmlBackend::default().image(image, &mut out);
        out
    }

    #[test]
    fn test_image_without_title() {
        assert_eq!(
            hook(&ImageRef::from_parts("photo.png", "", "cat")),
            r#"<img src="note/assets/photo.png" alt="cat" />"#
        );
    }

    #[test]
    fn test_image_title_is_escaped() {
        assert_eq!(
            hook(&ImageRef::from_parts(
                "https://x.com/a.png",
                r#"A title "q""#,
                ""
            )),
            r#"<img src="https://x.com/a.png" alt="" title="A title &quot;q&quot;" />"#
        );
    }

    #[test]
    fn test_image_alt_is_escaped() {
        assert_eq!(
            hook(&ImageRef::from_parts("a.png", "", r#"<cat> & "dog""#)),
            r#"<img src="note/assets/a.png" alt="&lt;cat&gt; &amp; &quot;dog&quot;" />"#
        );
    }

    #[test]
    fn test_image_src_is_not_escaped() {
        // Query separators in an absolute URL survive unescaped.
        assert_eq!(
            hook(&ImageRef::from_parts("https://x.com/a.png?w=1&h=2", "", "")),
            r#"<img src="https://x.com/a.png?w=1&h=2" alt="" />"#
        );
    }

    #[test]
    fn test_image_empty_reference() {
        assert_eq!(
            hook(&ImageRef::default()),
            r#"<img src="" alt="" />"#
        );
    }

    #[test]
    fn test_record_convention_output_matches_positional() {
        let record: ImageRecord = serde_json::from_value(serde_json::json!({
            "url": "b.png",
            "alt": "dog",
        }))
        .unwrap();
        assert_eq!(
            hook(&ImageRef::from_record(record)),
            hook(&ImageRef::from_parts("b.png", "", "dog"))
        );
    }

    #[test]
    fn test_code_block_with_language() {
        let mut out = String::new();
        HtmlBackend::default().code_block(Some("rust"), "fn main() {}", &mut out);
        assert_eq!(
            out,
            r#"<pre><code class="language-rust">fn main() {}</code></pre>"#
        );
    }

    #[test]
    fn test_code_block_escapes_content() {
        let mut out = String::new();
        HtmlBackend::default().code_block(None, "<script>", &mut out);
        assert_eq!(out, "<pre><code>&lt;script&gt;</code></pre>");
    }
}
