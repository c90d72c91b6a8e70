//! Normalized image references for the render hook.
//!
//! The image hook can be driven two ways: positionally, as the markdown
//! parser does (destination, title, collected alt text), or with a
//! structured record whose field names vary by caller. Both shapes funnel
//! through [`ImageRef`] before any rendering logic runs.

use serde::Deserialize;

/// The three logical fields of an image reference.
///
/// Construction never fails: absent fields become empty strings. Malformed
/// references flow through unchanged and are dealt with (or passed along)
/// by the resolver.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImageRef {
    /// Raw source text, exactly as the author wrote it.
    pub source: String,
    /// Optional hover title; empty means absent.
    pub title: String,
    /// Alt text; empty means absent.
    pub alt: String,
}

impl ImageRef {
    /// Positional convention: `(source, title, alt)`.
    pub fn from_parts(source: &str, title: &str, alt: &str) -> Self {
        Self {
            source: source.to_owned(),
            title: title.to_owned(),
            alt: alt.to_owned(),
        }
    }

    /// Record convention: a structured value with aliased field names,
    /// normalized per the precedence rules on [`ImageRecord`].
    pub fn from_record(record: ImageRecord) -> Self {
        let ImageRecord {
            href,
            url,
            src,
            title,
            text,
            alt,
        } = record;
        Self {
            source: href.or(url).or(src).unwrap_or_default(),
            title: title.unwrap_or_default(),
            alt: text.or(alt).unwrap_or_default(),
        }
    }
}

impl From<ImageRecord> for ImageRef {
    fn from(record: ImageRecord) -> Self {
        Self::from_record(record)
    }
}

/// Structured image reference as an external caller supplies it.
///
/// The source may arrive under `href`, `url` or `src` (first present wins,
/// in that order); alt text under `text` or `alt` (`text` wins). Unknown
/// fields are ignored and every field may be absent or null.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ImageRecord {
    pub href: Option<String>,
    pub url: Option<String>,
    pub src: Option<String>,
    pub title: Option<String>,
    pub text: Option<String>,
    pub alt: Option<String>,
}
