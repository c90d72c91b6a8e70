//! Image source resolution against the note directory layout.

/// Default URL prefix for the note directory.
pub const DEFAULT_NOTE_ROOT: &str = "note/";

/// Directory name for image files under the note root.
const ASSETS_SEGMENT: &str = "assets/";

/// Rewrites relative image references to the note asset convention.
///
/// Notes are authored with image links that assume an `assets/` directory
/// under the note root, either spelled out (`assets/cat.png`) or implied
/// (`cat.png`); both forms resolve to the same location. Absolute
/// references (scheme URLs, protocol-relative, `data:`, root-relative,
/// `blob:`) are never rewritten.
#[derive(Debug, Clone)]
pub struct ImageResolver {
    note_dir: String,
    assets_dir: String,
}

impl Default for ImageResolver {
    fn default() -> Self {
        Self::new(DEFAULT_NOTE_ROOT)
    }
}

impl ImageResolver {
    /// Create a resolver rooted at `note_root`, a URL prefix rather than a
    /// filesystem path. A missing trailing slash is added.
    pub fn new(note_root: impl Into<String>) -> Self {
        let mut note_dir = note_root.into();
        if !note_dir.is_empty() && !note_dir.ends_with('/') {
            note_dir.push('/');
        }
        let assets_dir = format!("{note_dir}{ASSETS_SEGMENT}");
        Self {
            note_dir,
            assets_dir,
        }
    }

    /// Resolve a raw image reference to the URL to emit.
    ///
    /// Empty or whitespace-only input resolves to the empty string; that is
    /// a pass-through for malformed references, not an error. Absolute
    /// references come back trimmed but otherwise byte-for-byte. Relative
    /// references lose any leading `./` segments and gain the note-root
    /// prefix: a path already under `assets/` keeps its spelling, anything
    /// else is assumed to live in the assets directory.
    #[must_use]
    pub fn resolve(&self, raw: &str) -> String {
        let mut src = raw.trim();
        if src.is_empty() {
            return String::new();
        }
        if is_absolute_url(src) {
            return src.to_owned();
        }
        while let Some(rest) = src.strip_prefix("./") {
            src = rest.trim_start_matches('/');
        }
        if src.starts_with(ASSETS_SEGMENT) {
            format!("{}{src}", self.note_dir)
        } else {
            format!("{}{src}", self.assets_dir)
        }
    }
}

/// Classify a trimmed reference as absolute.
///
/// The scheme test accepts any run of ASCII letters before `://`, so
/// unusual schemes such as `javascript:` pass through unrewritten as well;
/// link hygiene belongs upstream of the renderer. `data:` is matched
/// case-insensitively, `blob:` exactly.
fn is_absolute_url(src: &str) -> bool {
    has_scheme_or_protocol_prefix(src)
        || starts_with_ignore_ascii_case(src, "data:")
        || src.starts_with('/')
        || src.starts_with("blob:")
}

/// `//host/...` or `scheme://...` with an ASCII-alphabetic scheme.
fn has_scheme_or_protocol_prefix(src: &str) -> bool {
    if src.starts_with("//") {
        return true;
    }
    match src.split_once(':') {
        Some((scheme, rest)) => {
            !scheme.is_empty()
                && scheme.bytes().all(|b| b.is_ascii_alphabetic())
                && rest.starts_with("//")
        }
        None => false,
    }
}

fn starts_with_ignore_ascii_case(src: &str, prefix: &str) -> bool {
    src.as_bytes()
        .get(..prefix.len())
        .is_some_and(|head| head.eq_ignore_ascii_case(prefix.as_bytes()))
}
