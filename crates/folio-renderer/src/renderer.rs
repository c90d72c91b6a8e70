//! Generic markdown renderer over a pluggable backend.

use std::fmt::Write;

use pulldown_cmark::{CodeBlockKind, Event, Options, Parser, Tag, TagEnd};

use crate::backend::RenderBackend;
use crate::escape::escape_html;
use crate::image::ImageRef;
use crate::state::{CodeBlockState, ImageState, TableState};

/// Markdown renderer parameterized by a render backend.
///
/// The renderer walks the pulldown-cmark event stream and writes HTML,
/// delegating images, code blocks and blockquotes to the backend. Image
/// references are normalized to an [`ImageRef`] before the backend sees
/// them: the destination and title come from the image tag, the alt text
/// is collected from the tag's inner events.
pub struct MarkdownRenderer<B: RenderBackend> {
    output: String,
    code: CodeBlockState,
    table: TableState,
    image: ImageState,
    pending_image: Option<(String, String)>,
    gfm: bool,
    backend: B,
}

impl<B: RenderBackend> MarkdownRenderer<B> {
    /// Renderer writing through the given backend.
    pub fn new(backend: B) -> Self {
        Self {
            output: String::new(),
            code: CodeBlockState::default(),
            table: TableState::default(),
            image: ImageState::default(),
            pending_image: None,
            gfm: false,
            backend,
        }
    }

    /// Enable GitHub Flavored Markdown extensions:
    /// - Tables
    /// - Strikethrough (`~~text~~`)
    /// - Task lists (`- [ ] item`)
    #[must_use]
    pub fn with_gfm(mut self, enabled: bool) -> Self {
        self.gfm = enabled;
        self
    }

    /// Get parser options based on GFM configuration.
    #[must_use]
    pub fn parser_options(&self) -> Options {
        if self.gfm {
            Options::ENABLE_TABLES | Options::ENABLE_STRIKETHROUGH | Options::ENABLE_TASKLISTS
        } else {
            Options::empty()
        }
    }

    /// Create a configured parser for the given markdown text.
    #[must_use]
    pub fn create_parser<'a>(&self, markdown: &'a str) -> Parser<'a> {
        Parser::new_ext(markdown, self.parser_options())
    }

    /// Render markdown text directly using configured parser options.
    pub fn render_markdown(&mut self, markdown: &str) -> String {
        self.render(self.create_parser(markdown))
    }

    /// Render a stream of markdown events to HTML.
    ///
    /// The renderer is reusable; each call starts from empty output.
    pub fn render<'a, I>(&mut self, events: I) -> String
    where
        I: Iterator<Item = Event<'a>>,
    {
        for event in events {
            self.process_event(event);
        }
        std::mem::take(&mut self.output)
    }

    fn process_event(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start_tag(tag),
            Event::End(tag) => self.end_tag(tag),
            Event::Text(text) => self.text(&text),
            Event::Code(code) => self.inline_code(&code),
            Event::Html(html) | Event::InlineHtml(html) => self.raw_html(&html),
            Event::SoftBreak => self.soft_break(),
            Event::HardBreak => self.backend.hard_break(&mut self.output),
            Event::Rule => self.backend.horizontal_rule(&mut self.output),
            Event::TaskListMarker(checked) => {
                self.backend.task_list_marker(checked, &mut self.output);
            }
            Event::FootnoteReference(_) | Event::InlineMath(_) | Event::DisplayMath(_) => {
                // Not supported
            }
        }
    }

    #[allow(clippy::too_many_lines)]
    fn start_tag(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {
                if !self.code.is_active() {
                    self.output.push_str("<p>");
                }
            }
            Tag::Heading { level, .. } => {
                write!(self.output, "<{level}>").unwrap();
            }
            Tag::BlockQuote(_) => {
                self.backend.blockquote_start(&mut self.output);
            }
            Tag::CodeBlock(kind) => {
                self.code.start(fence_language(&kind));
            }
            Tag::List(start) => match start {
                Some(1) => self.output.push_str("<ol>"),
                Some(n) => write!(self.output, r#"<ol start="{n}">"#).unwrap(),
                None => self.output.push_str("<ul>"),
            },
            Tag::Item => {
                self.output.push_str("<li>");
            }
            Tag::FootnoteDefinition(_) | Tag::HtmlBlock | Tag::MetadataBlock(_) => {}
            Tag::DefinitionList => {
                self.output.push_str("<dl>");
            }
            Tag::DefinitionListTitle => {
                self.output.push_str("<dt>");
            }
            Tag::DefinitionListDefinition => {
                self.output.push_str("<dd>");
            }
            Tag::Table(alignments) => {
                self.table.start(alignments);
                self.output.push_str("<table>");
            }
            Tag::TableHead => {
                self.table.start_head();
                self.output.push_str("<thead><tr>");
            }
            Tag::TableRow => {
                self.table.start_row();
                self.output.push_str("<tr>");
            }
            Tag::TableCell => {
                let tag = if self.table.is_in_head() { "th" } else { "td" };
                let align = self.table.alignment_style();
                write!(self.output, "<{tag}{align}>").unwrap();
            }
            Tag::Emphasis => self.output.push_str("<em>"),
            Tag::Strong => self.output.push_str("<strong>"),
            Tag::Strikethrough => self.output.push_str("<s>"),
            Tag::Link { dest_url, .. } => {
                write!(self.output, r#"<a href="{}">"#, escape_html(&dest_url)).unwrap();
            }
            Tag::Image {
                dest_url, title, ..
            } => {
                // Alt text arrives as inner events; render on the end tag.
                self.image.start();
                self.pending_image = Some((dest_url.to_string(), title.to_string()));
            }
            Tag::Superscript => self.output.push_str("<sup>"),
            Tag::Subscript => self.output.push_str("<sub>"),
        }
    }

    fn end_tag(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                if !self.code.is_active() {
                    self.output.push_str("</p>");
                }
            }
            TagEnd::Heading(level) => {
                write!(self.output, "</{level}>").unwrap();
            }
            TagEnd::BlockQuote(_) => {
                self.backend.blockquote_end(&mut self.output);
            }
            TagEnd::CodeBlock => {
                let (lang, content) = self.code.finish();
                self.backend
                    .code_block(lang.as_deref(), &content, &mut self.output);
            }
            TagEnd::List(ordered) => {
                self.output
                    .push_str(if ordered { "</ol>" } else { "</ul>" });
            }
            TagEnd::Item => {
                self.output.push_str("</li>");
            }
            TagEnd::FootnoteDefinition | TagEnd::HtmlBlock | TagEnd::MetadataBlock(_) => {}
            TagEnd::Image => {
                let alt = self.image.end();
                if let Some((src, title)) = self.pending_image.take() {
                    let image = ImageRef::from_parts(&src, &title, &alt);
                    self.backend.image(&image, &mut self.output);
                }
            }
            TagEnd::DefinitionList => {
                self.output.push_str("</dl>");
            }
            TagEnd::DefinitionListTitle => {
                self.output.push_str("</dt>");
            }
            TagEnd::DefinitionListDefinition => {
                self.output.push_str("</dd>");
            }
            TagEnd::Table => {
                self.output.push_str("</tbody></table>");
            }
            TagEnd::TableHead => {
                self.output.push_str("</tr></thead><tbody>");
                self.table.end_head();
            }
            TagEnd::TableRow => {
                self.output.push_str("</tr>");
            }
            TagEnd::TableCell => {
                self.output.push_str(if self.table.is_in_head() {
                    "</th>"
                } else {
                    "</td>"
                });
                self.table.next_cell();
            }
            TagEnd::Emphasis => self.output.push_str("</em>"),
            TagEnd::Strong => self.output.push_str("</strong>"),
            TagEnd::Strikethrough => self.output.push_str("</s>"),
            TagEnd::Link => self.output.push_str("</a>"),
            TagEnd::Superscript => self.output.push_str("</sup>"),
            TagEnd::Subscript => self.output.push_str("</sub>"),
        }
    }

    fn text(&mut self, text: &str) {
        if self.code.is_active() {
            self.code.push_str(text);
        } else if self.image.is_active() {
            self.image.push_str(text);
        } else {
            self.output.push_str(&escape_html(text));
        }
    }

    fn inline_code(&mut self, code: &str) {
        if self.image.is_active() {
            self.image.push_str(code);
        } else {
            write!(self.output, "<code>{}</code>", escape_html(code)).unwrap();
        }
    }

    fn raw_html(&mut self, html: &str) {
        self.output.push_str(html);
    }

    fn soft_break(&mut self) {
        if self.code.is_active() {
            self.code.push_str("\n");
        } else if self.image.is_active() {
            self.image.push_str(" ");
        } else {
            self.output.push('\n');
        }
    }
}

impl<B: RenderBackend + Default> Default for MarkdownRenderer<B> {
    fn default() -> Self {
        Self::new(B::default())
    }
}

/// Language token from a code fence info string, if any.
fn fence_language(kind: &CodeBlockKind<'_>) -> Option<String> {
    match kind {
        CodeBlockKind::Fenced(info) if !info.is_empty() => {
            info.split_whitespace().next().map(str::to_owned)
        }
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::HtmlBackend;

    fn render_html(markdown: &str) -> String {
        MarkdownRenderer::<HtmlBackend>::default().render_markdown(markdown)
    }

    fn render_gfm(markdown: &str) -> String {
        MarkdownRenderer::<HtmlBackend>::default()
            .with_gfm(true)
            .render_markdown(markdown)
    }

    #[test]
    fn test_basic_paragraph() {
        assert_eq!(render_html("Hello, world!"), "<p>Hello, world!</p>");
    }

    #[test]
    fn test_headings() {
        assert_eq!(render_html("# Top"), "<h1>Top</h1>");
        assert_eq!(render_html("### Deep"), "<h3>Deep</h3>");
    }

    #[test]
    fn test_emphasis_and_strong() {
        assert_eq!(
            render_html("*it* **bold**"),
            "<p><em>it</em> <strong>bold</strong></p>"
        );
    }

    #[test]
    fn test_text_is_escaped() {
        assert_eq!(render_html("a < b & c"), "<p>a &lt; b &amp; c</p>");
    }

    #[test]
    fn test_inline_code_is_escaped() {
        assert_eq!(
            render_html("`<script>`"),
            "<p><code>&lt;script&gt;</code></p>"
        );
    }

    #[test]
    fn test_code_block_with_language() {
        let html = render_html("```rust\nfn main() {}\n```");
        assert!(html.contains(r#"class="language-rust""#));
        assert!(html.contains("fn main() {}"));
    }

    #[test]
    fn test_fence_info_extra_tokens_ignored() {
        let html = render_html("```rust ignore\nlet x = 1;\n```");
        assert!(html.contains(r#"class="language-rust""#));
    }

    #[test]
    fn test_blockquote() {
        assert_eq!(
            render_html("> Stay curious"),
            "<blockquote><p>Stay curious</p></blockquote>"
        );
    }

    #[test]
    fn test_unordered_list() {
        assert_eq!(
            render_html("- a\n- b"),
            "<ul><li>a</li><li>b</li></ul>"
        );
    }

    #[test]
    fn test_ordered_list_with_start() {
        assert_eq!(
            render_html("3. three\n4. four"),
            r#"<ol start="3"><li>three</li><li>four</li></ol>"#
        );
    }

    #[test]
    fn test_task_list() {
        assert_eq!(
            render_gfm("- [x] done\n- [ ] todo"),
            "<ul><li><input type=\"checkbox\" disabled checked /> done</li>\
             <li><input type=\"checkbox\" disabled /> todo</li></ul>"
        );
    }

    #[test]
    fn test_strikethrough() {
        assert_eq!(render_gfm("~~gone~~"), "<p><s>gone</s></p>");
    }

    #[test]
    fn test_gfm_off_leaves_tildes() {
        assert_eq!(render_html("~~gone~~"), "<p>~~gone~~</p>");
    }

    #[test]
    fn test_table_with_alignment() {
        let html = render_gfm("| a | b |\n|:--|--:|\n| 1 | 2 |");
        assert_eq!(
            html,
            "<table><thead><tr>\
             <th style=\"text-align: left\">a</th>\
             <th style=\"text-align: right\">b</th>\
             </tr></thead><tbody><tr>\
             <td style=\"text-align: left\">1</td>\
             <td style=\"text-align: right\">2</td>\
             </tr></tbody></table>"
        );
    }

    #[test]
    fn test_link_href_is_escaped() {
        assert_eq!(
            render_html("[q](page?a=1&b=2)"),
            r#"<p><a href="page?a=1&amp;b=2">q</a></p>"#
        );
    }

    #[test]
    fn test_image_relative_source() {
        assert_eq!(
            render_html("![cat](photo.png)"),
            r#"<p><img src="note/assets/photo.png" alt="cat" /></p>"#
        );
    }

    #[test]
    fn test_image_absolute_source_untouched() {
        assert_eq!(
            render_html("![](https://x.com/a.png)"),
            r#"<p><img src="https://x.com/a.png" alt="" /></p>"#
        );
    }

    #[test]
    fn test_image_with_title() {
        assert_eq!(
            render_html(r#"![cat](photo.png "a \"nice\" cat")"#),
            r#"<p><img src="note/assets/photo.png" alt="cat" title="a &quot;nice&quot; cat" /></p>"#
        );
    }

    #[test]
    fn test_image_alt_from_styled_text() {
        let html = render_html("![*em* alt](x.png)");
        assert!(html.contains(r#"alt="em alt""#));
        assert!(html.contains(r#"src="note/assets/x.png""#));
    }

    #[test]
    fn test_raw_html_passthrough() {
        let html = render_html("<div class=\"x\">hi</div>");
        assert!(html.contains("<div class=\"x\">hi</div>"));
    }

    #[test]
    fn test_soft_break() {
        assert_eq!(render_html("a\nb"), "<p>a\nb</p>");
    }

    #[test]
    fn test_hard_break() {
        assert_eq!(render_html("a  \nb"), "<p>a<br />\nb</p>");
    }

    #[test]
    fn test_horizontal_rule() {
        assert_eq!(render_html("---"), "<hr />\n");
    }

    #[test]
    fn test_renderer_is_reusable() {
        let mut renderer = MarkdownRenderer::<HtmlBackend>::default();
        let first = renderer.render_markdown("first");
        let second = renderer.render_markdown("second");
        assert_eq!(first, "<p>first</p>");
        assert_eq!(second, "<p>second</p>");
    }

    #[test]
    fn test_parser_options_follow_gfm() {
        let renderer = MarkdownRenderer::<HtmlBackend>::default();
        assert_eq!(renderer.parser_options(), Options::empty());

        let renderer = renderer.with_gfm(true);
        assert!(renderer.parser_options().contains(Options::ENABLE_TABLES));
        assert!(
            renderer
                .parser_options()
                .contains(Options::ENABLE_TASKLISTS)
        );
    }
}
