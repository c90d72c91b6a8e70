//! Trait-based markdown renderer with the note image pipeline.
//!
//! This crate provides a generic [`MarkdownRenderer`] that produces HTML
//! through the [`RenderBackend`] trait. The backend owns the interesting
//! seam: an image hook called once per image reference, fed an
//! [`ImageRef`] normalized from either calling convention (positional
//! parser values or a structured record with aliased field names).
//!
//! [`HtmlBackend`] is the note-display backend: it resolves image sources
//! against the note directory layout via [`ImageResolver`] and escapes
//! alt/title text via [`escape_html`]. The resolver is plain construction
//! state; there is no global registration anywhere.
//!
//! # Example
//!
//! ```
//! use folio_renderer::{HtmlBackend, MarkdownRenderer};
//!
//! let mut renderer = MarkdownRenderer::<HtmlBackend>::default();
//! let html = renderer.render_markdown("![cat](photo.png)");
//! assert_eq!(html, r#"<p><img src="note/assets/photo.png" alt="cat" /></p>"#);
//! ```

mod backend;
mod escape;
mod html;
mod image;
mod renderer;
mod resolve;
mod state;

pub use backend::RenderBackend;
pub use escape::escape_html;
pub use html::HtmlBackend;
pub use image::{ImageRecord, ImageRef};
pub use renderer::MarkdownRenderer;
pub use resolve::{DEFAULT_NOTE_ROOT, ImageResolver};
