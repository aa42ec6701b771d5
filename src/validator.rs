use crate::{CleanError, Result};
use lopdf::Document;

// ── PdfValidator ──────────────────────────────────────────────────────────────
//
// This is an internal type.  Callers use PdfCleaner, which delegates here.

pub(crate) struct PdfValidator<'a> {
    document: &'a Document,
}

impl<'a> PdfValidator<'a> {
    pub(crate) fn new(document: &'a Document) -> Self {
        Self { document }
    }

    /// Returns `Ok(true)` when the parsed document looks structurally valid.
    /// lopdf has already parsed the cross-reference table and object graph;
    /// here we just assert the mandatory elements are present.
    pub(crate) fn validate_pdf_structure(&self) -> Result<bool> {
        self.document
            .catalog()
            .map_err(|e| CleanError::InvalidPdf(format!("missing or invalid catalog: {e}")))?;

        if self.document.get_pages().is_empty() {
            return Err(CleanError::InvalidPdf("document has no pages".into()));
        }

        if self.document.trailer.is_empty() {
            return Err(CleanError::InvalidPdf("missing trailer dictionary".into()));
        }

        Ok(true)
    }

    /// `true` when the trailer declares an `/Encrypt` dictionary, or when
    /// lopdf decrypted the file on load (empty user password) and dropped it.
    pub(crate) fn is_encrypted(&self) -> bool {
        self.document.trailer.has(b"Encrypt") || self.document.was_encrypted()
    }

    /// Fails with [`CleanError::Encrypted`] for documents we will not rewrite.
    pub(crate) fn ensure_writable(&self) -> Result<()> {
        if self.is_encrypted() {
            return Err(CleanError::Encrypted);
        }
        Ok(())
    }
}
