use crate::info_reader::InfoReader;
use crate::validator::PdfValidator;
use crate::wiper::{MetadataWiper, WipeSummary};
use crate::{CleanError, CleanerConfig, DocumentMetadata, MetadataReport, Result, XmpInfo};
use lopdf::Document;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

// ── PdfCleaner ───────────────────────────────────────────────────────────────

/// Entry point for reading, reporting, and wiping PDF metadata.
///
/// # Creating a cleaner
///
/// ```no_run
/// use cleanpdf::{CleanerConfig, PdfCleaner, WipeMode};
///
/// // From a file path
/// let c = PdfCleaner::from_path("contract.pdf").unwrap();
///
/// // From an in-memory buffer
/// let bytes = std::fs::read("contract.pdf").unwrap();
/// let c = PdfCleaner::from_bytes(&bytes).unwrap();
///
/// // With custom configuration
/// let cfg = CleanerConfig {
///     wipe_mode: WipeMode::Remove,
///     strip_xmp: false,
/// };
/// let c = PdfCleaner::with_config("contract.pdf", cfg).unwrap();
/// ```
pub struct PdfCleaner {
    document: Document,
    config: CleanerConfig,
    source: Option<PathBuf>,
}

impl PdfCleaner {
    // ── Constructors ──────────────────────────────────────────────────────────

    /// Load a PDF from the file system.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::with_config(path, CleanerConfig::default())
    }

    /// Load a PDF from an in-memory byte slice.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        Ok(Self {
            document: Document::load_mem(data)?,
            config: CleanerConfig::default(),
            source: None,
        })
    }

    /// Load a PDF from the file system with a custom [`CleanerConfig`].
    pub fn with_config<P: AsRef<Path>>(path: P, config: CleanerConfig) -> Result<Self> {
        let path = path.as_ref();
        debug!(path = %path.display(), "loading PDF");
        Ok(Self {
            document: Document::load(path)?,
            config,
            source: Some(path.to_path_buf()),
        })
    }

    /// Replace the active configuration.
    pub fn set_config(&mut self, config: CleanerConfig) {
        self.config = config;
    }

    // ── Validation ────────────────────────────────────────────────────────────

    /// Returns `Ok(true)` when the loaded document has a catalog, at least one
    /// page, and a non-empty trailer.
    pub fn is_pdf(&self) -> Result<bool> {
        PdfValidator::new(&self.document).validate_pdf_structure()
    }

    /// Returns `true` when the document is or was encrypted, including files
    /// lopdf decrypted on load because the user password is empty.
    /// Encrypted documents can be inspected but not cleaned.
    pub fn is_encrypted(&self) -> bool {
        PdfValidator::new(&self.document).is_encrypted()
    }

    // ── Inspection ────────────────────────────────────────────────────────────

    /// The document information entries, in dictionary order. Empty when the
    /// document has no `/Info` dictionary.
    pub fn metadata(&self) -> DocumentMetadata {
        InfoReader::new(&self.document).read()
    }

    /// Summary of the catalog's XMP `/Metadata` stream, if present.
    pub fn xmp_info(&self) -> Option<XmpInfo> {
        InfoReader::new(&self.document).xmp()
    }

    /// Build a [`MetadataReport`] labelled with `file`.
    pub fn report(&self, file: impl Into<String>) -> MetadataReport {
        MetadataReport::new(file, self.metadata(), self.xmp_info())
    }

    /// Persist the `Key,Value` text report to `path`.
    ///
    /// Fails with [`CleanError::OutputIsInput`] when `path` is the file the
    /// cleaner was loaded from.
    pub fn save_report<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if self.is_source(path) {
            return Err(CleanError::OutputIsInput(path.to_path_buf()));
        }

        let label = self
            .source
            .as_deref()
            .map(crate::output::display_name)
            .unwrap_or_default();
        self.report(label).save(path)
    }

    // ── Cleaning ──────────────────────────────────────────────────────────────

    /// Write a copy of the document with wiped metadata to `path`.
    ///
    /// The loaded document and the source file are left untouched. Fails
    /// with [`CleanError::OutputIsInput`] when `path` is the file the cleaner
    /// was loaded from, and with [`CleanError::Encrypted`] for encrypted
    /// documents.
    ///
    /// # Example
    ///
    /// ```no_run
    /// use cleanpdf::{output, PdfCleaner};
    ///
    /// let cleaner = PdfCleaner::from_path("contract.pdf").unwrap();
    /// let summary = cleaner.clean_to_path(output::clean_path("contract.pdf")).unwrap();
    /// println!("cleared {} keys", summary.cleared_keys.len());
    /// ```
    pub fn clean_to_path<P: AsRef<Path>>(&self, path: P) -> Result<WipeSummary> {
        let path = path.as_ref();
        if self.is_source(path) {
            return Err(CleanError::OutputIsInput(path.to_path_buf()));
        }

        let mut document = self.wiped_copy()?;
        let summary = MetadataWiper::new(&self.config).wipe(&mut document)?;
        document.save(path)?;

        info!(path = %path.display(), "clean PDF written");
        Ok(summary)
    }

    /// Same as [`clean_to_path`](Self::clean_to_path) but returns the
    /// serialized document instead of writing it.
    pub fn clean_to_bytes(&self) -> Result<(Vec<u8>, WipeSummary)> {
        let mut document = self.wiped_copy()?;
        let summary = MetadataWiper::new(&self.config).wipe(&mut document)?;

        let mut buffer = Vec::new();
        document.save_to(&mut buffer)?;
        Ok((buffer, summary))
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Returns a reference to the underlying [`lopdf::Document`].
    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Returns a reference to the active [`CleanerConfig`].
    pub fn config(&self) -> &CleanerConfig {
        &self.config
    }

    // ── Private ───────────────────────────────────────────────────────────────

    fn wiped_copy(&self) -> Result<Document> {
        PdfValidator::new(&self.document).ensure_writable()?;
        Ok(self.document.clone())
    }

    fn is_source(&self, path: &Path) -> bool {
        let Some(source) = &self.source else {
            return false;
        };
        if source == path {
            return true;
        }
        match (source.canonicalize(), path.canonicalize()) {
            (Ok(a), Ok(b)) => a == b,
            _ => false,
        }
    }
}
