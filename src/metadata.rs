use serde::Serialize;

// ── MetadataEntry ────────────────────────────────────────────────────────────

/// One entry of the document information (`/Info`) dictionary.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MetadataEntry {
    /// The PDF name of the entry without its leading slash (e.g. `"Title"`).
    pub key: String,

    /// The entry value rendered as display text.
    pub value: String,
}

impl MetadataEntry {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

// ── DocumentMetadata ─────────────────────────────────────────────────────────

/// The metadata entries of a document, in `/Info` dictionary order.
///
/// Returned by [`crate::PdfCleaner::metadata`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct DocumentMetadata {
    entries: Vec<MetadataEntry>,
}

impl DocumentMetadata {
    pub fn new(entries: Vec<MetadataEntry>) -> Self {
        Self { entries }
    }

    /// Number of entries, including those with an empty value.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MetadataEntry> {
        self.entries.iter()
    }

    /// Returns the value stored under `key` (exact, case-sensitive match).
    ///
    /// ```
    /// # use cleanpdf::{DocumentMetadata, MetadataEntry};
    /// let meta = DocumentMetadata::new(vec![MetadataEntry::new("Author", "J. Doe")]);
    /// assert_eq!(meta.get("Author"), Some("J. Doe"));
    /// assert_eq!(meta.get("author"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|e| e.key == key)
            .map(|e| e.value.as_str())
    }

    /// Entry keys in document order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(|e| e.key.as_str())
    }

    /// Number of entries that carry a non-empty value.
    pub fn non_empty_count(&self) -> usize {
        self.entries.iter().filter(|e| !e.value.is_empty()).count()
    }
}

impl<'a> IntoIterator for &'a DocumentMetadata {
    type Item = &'a MetadataEntry;
    type IntoIter = std::slice::Iter<'a, MetadataEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

// ── XmpInfo ──────────────────────────────────────────────────────────────────

/// Summary of the catalog's `/Metadata` XMP stream.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct XmpInfo {
    /// Decompressed length of the XMP packet in bytes.
    pub length: usize,
}
