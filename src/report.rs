use crate::{DocumentMetadata, Result, XmpInfo};
use serde::Serialize;
use std::fmt::Write as _;
use std::path::Path;
use tracing::info;

// ── MetadataReport ───────────────────────────────────────────────────────────

/// The metadata of one document, ready to be shown or persisted.
///
/// Returned by [`crate::PdfCleaner::report`].
#[derive(Debug, Clone, Serialize)]
pub struct MetadataReport {
    /// Display name of the inspected file.
    pub file: String,

    /// `/Info` entries in document order.
    pub entries: DocumentMetadata,

    /// XMP stream summary, when the catalog carries one.
    pub xmp: Option<XmpInfo>,
}

impl MetadataReport {
    pub fn new(file: impl Into<String>, entries: DocumentMetadata, xmp: Option<XmpInfo>) -> Self {
        Self {
            file: file.into(),
            entries,
            xmp,
        }
    }

    /// Human-readable report, one `Key : Value` line per entry.
    ///
    /// ```
    /// # use cleanpdf::{DocumentMetadata, MetadataEntry, MetadataReport};
    /// let meta = DocumentMetadata::new(vec![MetadataEntry::new("Title", "Minutes")]);
    /// let report = MetadataReport::new("minutes.pdf", meta, None);
    /// assert_eq!(report.render(), "Found 1 items in metadata.\nTitle : Minutes\n");
    /// ```
    pub fn render(&self) -> String {
        let mut out = String::new();

        if self.entries.is_empty() {
            let _ = writeln!(out, "No metadata found in {}", self.file);
        } else {
            let _ = writeln!(out, "Found {} items in metadata.", self.entries.len());
            for entry in &self.entries {
                let _ = writeln!(out, "{} : {}", entry.key, entry.value);
            }
        }

        if let Some(xmp) = &self.xmp {
            let _ = writeln!(out, "XMP metadata stream present ({} bytes)", xmp.length);
        }

        out
    }

    /// Text-file form: one `Key,Value` line per entry.
    pub fn to_text(&self) -> String {
        self.entries
            .iter()
            .map(|e| format!("{},{}\n", e.key, e.value))
            .collect()
    }

    /// Pretty-printed JSON form.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Write [`to_text`](Self::to_text) to `path` as UTF-8, replacing any
    /// existing file.
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        std::fs::write(path, self.to_text())?;
        info!(path = %path.display(), entries = self.entries.len(), "metadata report saved");
        Ok(())
    }
}
