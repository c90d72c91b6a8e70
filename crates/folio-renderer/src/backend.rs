//! Render backend trait.

use crate::image::ImageRef;

/// Backend for format-specific rendering decisions.
///
/// The generic renderer walks the event stream and handles document
/// structure; the backend decides how images, code blocks and blockquotes
/// are written. The image hook is the seam that matters: it receives every
/// image reference the parser finds, already normalized to an
/// [`ImageRef`], and appends whatever markup it wants emitted in place.
pub trait RenderBackend {
    /// Called once per image occurrence, with inputs normalized from
    /// either calling convention. Must not fail, whatever the reference
    /// looks like; a bad image never aborts the rest of the document.
    fn image(&self, image: &ImageRef, out: &mut String);

    /// Render a fenced or indented code block.
    fn code_block(&self, lang: Option<&str>, content: &str, out: &mut String);

    fn blockquote_start(&self, out: &mut String);

    fn blockquote_end(&self, out: &mut String);

    fn hard_break(&self, out: &mut String) {
        out.push_str("<br />\n");
    }

    fn horizontal_rule(&self, out: &mut String) {
        out.push_str("<hr />\n");
    }

    fn task_list_marker(&self, checked: bool, out: &mut String) {
        if checked {
            out.push_str(r#"<input type="checkbox" disabled checked /> "#);
        } else {
            out.push_str(r#"<input type="checkbox" disabled /> "#);
        }
    }
}
