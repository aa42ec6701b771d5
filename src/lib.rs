//! # cleanpdf
//!
//! A Rust library for inspecting, storing, and wiping the document metadata of
//! PDF files.
//!
//! ## What this crate does
//!
//! 1. **Read metadata** — resolves the trailer `/Info` dictionary and renders
//!    every entry as a `key : value` pair.
//! 2. **Report** — formats the entries as a human-readable report and can
//!    persist them as a `<name>-metadata.txt` file next to the input.
//! 3. **Wipe** — rewrites the document with blanked (or removed) `/Info`
//!    entries and, by default, without its XMP metadata stream. The result is
//!    saved as a new `<name>-clean.pdf`; the input is never touched.
//!
//! ## Quick example
//!
//! ```no_run
//! use cleanpdf::{output, PdfCleaner};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let cleaner = PdfCleaner::from_path("report.pdf")?;
//!
//! let metadata = cleaner.metadata();
//! println!("Found {} items in metadata.", metadata.len());
//! for entry in metadata.iter() {
//!     println!("{} : {}", entry.key, entry.value);
//! }
//!
//! cleaner.clean_to_path(output::clean_path("report.pdf"))?;
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;
use thiserror::Error;

mod cleaner;
mod info_reader;
mod metadata;
pub mod output;
mod pdf_utils;
mod report;
mod validator;
mod wiper;

pub use cleaner::PdfCleaner;
pub use metadata::{DocumentMetadata, MetadataEntry, XmpInfo};
pub use report::MetadataReport;
pub use wiper::{WipeSummary, DEFAULT_BLANK_KEYS};

// ── Configuration ────────────────────────────────────────────────────────────

/// How the `/Info` dictionary is rewritten by [`PdfCleaner::clean_to_path`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum WipeMode {
    /// Keep every existing key but set its value to an empty string. A
    /// document without entries receives [`DEFAULT_BLANK_KEYS`], all empty.
    #[default]
    Blank,

    /// Drop the `/Info` dictionary from the trailer altogether.
    Remove,
}

/// Runtime configuration for [`PdfCleaner`].
#[derive(Debug, Clone)]
pub struct CleanerConfig {
    /// Strategy used for the `/Info` dictionary.
    pub wipe_mode: WipeMode,

    /// When `true`, the catalog's `/Metadata` XMP stream is detached and
    /// deleted while cleaning.
    pub strip_xmp: bool,
}

impl Default for CleanerConfig {
    fn default() -> Self {
        Self {
            wipe_mode: WipeMode::Blank,
            strip_xmp: true,
        }
    }
}

// ── Error type ───────────────────────────────────────────────────────────────

/// Every error that this crate can produce.
#[derive(Error, Debug)]
pub enum CleanError {
    /// A filesystem I/O error occurred (e.g. when loading or saving a file).
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// The input bytes do not form a structurally valid PDF document.
    #[error("Invalid PDF: {0}")]
    InvalidPdf(String),

    /// The document is encrypted; rewriting it is not supported.
    #[error("PDF is encrypted; metadata cannot be wiped")]
    Encrypted,

    /// The requested output path is the input file itself.
    #[error("refusing to overwrite the input file '{}'", .0.display())]
    OutputIsInput(PathBuf),

    /// The underlying lopdf parser returned an error.
    #[error("PDF parse error: {0}")]
    ParseError(#[from] lopdf::Error),

    /// The JSON report could not be serialized.
    #[error("Report serialization failed: {0}")]
    Report(#[from] serde_json::Error),
}

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, CleanError>;
