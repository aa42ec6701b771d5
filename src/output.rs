//! Naming of the files written next to the input PDF.

use std::path::{Path, PathBuf};

/// `<dir>/<stem>-clean.<ext>`, falling back to `.pdf` when the input has no
/// extension.
///
/// ```
/// use std::path::Path;
/// assert_eq!(
///     cleanpdf::output::clean_path("/tmp/q3 report.pdf"),
///     Path::new("/tmp/q3 report-clean.pdf"),
/// );
/// ```
pub fn clean_path<P: AsRef<Path>>(input: P) -> PathBuf {
    let input = input.as_ref();
    let ext = input
        .extension()
        .map(|e| e.to_string_lossy().into_owned())
        .unwrap_or_else(|| "pdf".into());
    sibling(input, &format!("-clean.{ext}"))
}

/// `<dir>/<stem>-metadata.txt`.
pub fn metadata_path<P: AsRef<Path>>(input: P) -> PathBuf {
    sibling(input.as_ref(), "-metadata.txt")
}

fn sibling(input: &Path, suffix: &str) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    input.with_file_name(format!("{stem}{suffix}"))
}

/// Display name of `path`: its final component, or the whole path when it
/// has none.
pub fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
