//! Document identity for the auto-fold engine.
//!
//! Hosts address documents with resource locators of varying shapes: file
//! URIs, plain paths, or virtual scheme strings for synthetic buffers. The
//! engine only needs a stable set-membership key, so every identity is
//! collapsed into [`DocumentKey`], an opaque canonical string. Conversions
//! are explicit constructors; there is deliberately no blanket
//! `From<impl ToString>` so accidental stringification at the host boundary
//! fails to compile instead of producing mismatched keys.

use url::Url;

/// Opaque canonical key for one open document.
///
/// Two distinct documents never share a key, and the same document reopened
/// later reuses the same key. Equality and hashing are byte-wise over the
/// canonical string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DocumentKey(String);

impl DocumentKey {
    /// Build a key from a raw identity string supplied by the host.
    pub fn from_raw(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    /// Build a key from a document URL.
    pub fn from_url(url: &Url) -> Self {
        Self(url.as_str().to_string())
    }

    /// The canonical string form of the key.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether the key starts with the given prefix.
    ///
    /// Ignore rules for synthetic documents are expressed as key prefixes
    /// (`untitled:`, `output:`), so this is the only pattern test the
    /// tracker needs.
    pub(crate) fn has_prefix(&self, prefix: &str) -> bool {
        self.0.starts_with(prefix)
    }

    /// Short label for log output: the trailing path segment, or the whole
    /// key when it has no path structure.
    pub fn label(&self) -> &str {
        self.0
            .rsplit('/')
            .next()
            .filter(|s| !s.is_empty())
            .unwrap_or(&self.0)
    }
}

impl std::fmt::Display for DocumentKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Everything the engine needs to know about a document when it becomes
/// active.
#[derive(Debug, Clone)]
pub struct DocumentDescriptor {
    /// Canonical identity of the document.
    pub key: DocumentKey,
    /// Host language identifier (`"rust"`, `"typescript"`), if known.
    pub language_id: Option<String>,
    /// Total line count, used only for logging.
    pub line_count: Option<u32>,
}

impl DocumentDescriptor {
    pub fn new(key: DocumentKey) -> Self {
        Self {
            key,
            language_id: None,
            line_count: None,
        }
    }

    pub fn with_language(mut self, language_id: impl Into<String>) -> Self {
        self.language_id = Some(language_id.into());
        self
    }

    pub fn with_line_count(mut self, line_count: u32) -> Self {
        self.line_count = Some(line_count);
        self
    }
}
