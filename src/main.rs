//! CLI tool for viewing, storing, and wiping PDF metadata.
//!
//! Two modes, each working on a single file:
//! - `analyze` shows the metadata and offers to store it as a text file;
//! - `clean` shows the metadata and offers to write a wiped `-clean` copy.

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use cleanpdf::{output, CleanerConfig, MetadataReport, PdfCleaner, WipeMode};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};
use std::process;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cleanpdf", author, version, about = "View, store, and wipe metadata from PDF files")]
struct Cli {
    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    quiet: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Show the metadata of a PDF and optionally store it as text
    Analyze {
        /// PDF file to inspect
        pdf: PathBuf,

        /// Store the metadata without asking
        #[arg(short, long, conflicts_with = "no_save")]
        yes: bool,

        /// Only show the metadata, never store it
        #[arg(long)]
        no_save: bool,

        /// Print the report as JSON instead of text
        #[arg(long)]
        json: bool,

        /// Where to store the metadata (default: <name>-metadata.txt)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Write a copy of a PDF with its metadata wiped
    Clean {
        /// PDF file to clean
        pdf: PathBuf,

        /// Write the clean copy without asking
        #[arg(short, long)]
        yes: bool,

        /// How to wipe the document information dictionary
        #[arg(long, value_enum, default_value_t = ModeArg::Blank)]
        mode: ModeArg,

        /// Leave the XMP metadata stream in place
        #[arg(long)]
        keep_xmp: bool,

        /// Where to write the clean copy (default: <name>-clean.pdf)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ModeArg {
    /// Keep every key with an empty value
    Blank,
    /// Remove the information dictionary
    Remove,
}

impl From<ModeArg> for WipeMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Blank => WipeMode::Blank,
            ModeArg::Remove => WipeMode::Remove,
        }
    }
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose, cli.quiet);

    let result = match cli.command {
        Command::Analyze {
            pdf,
            yes,
            no_save,
            json,
            output,
        } => run_analyze(&pdf, yes, no_save, json, output),
        Command::Clean {
            pdf,
            yes,
            mode,
            keep_xmp,
            output,
        } => {
            let config = CleanerConfig {
                wipe_mode: mode.into(),
                strip_xmp: !keep_xmp,
            };
            run_clean(&pdf, yes, config, output)
        }
    };

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn init_logging(verbose: u8, quiet: bool) {
    let level = match (quiet, verbose) {
        (true, _) => "error",
        (false, 0) => "warn",
        (false, 1) => "debug",
        (false, _) => "trace",
    };

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("cleanpdf={level}")));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(io::stderr)
        .compact()
        .init();
}

fn run_analyze(
    pdf: &Path,
    yes: bool,
    no_save: bool,
    json: bool,
    output: Option<PathBuf>,
) -> Result<()> {
    let cleaner = PdfCleaner::from_path(pdf)
        .with_context(|| format!("failed to read PDF '{}'", pdf.display()))?;
    let report = cleaner.report(output::display_name(pdf));

    if json {
        println!("{}", report.to_json()?);
    } else {
        print!("{}", report.render());
    }

    if !offers_to_store(&report, no_save, json, yes) {
        return Ok(());
    }

    let target = output.unwrap_or_else(|| output::metadata_path(pdf));
    if !yes && !confirm("Proceed to store metadata?")? {
        println!("Metadata shown but not saved.");
        return Ok(());
    }

    cleaner
        .save_report(&target)
        .with_context(|| format!("failed to write '{}'", target.display()))?;

    let status = format!("Metadata saved as {}", target.display());
    if json {
        eprintln!("{status}");
    } else {
        println!("{status}");
    }
    Ok(())
}

fn run_clean(pdf: &Path, yes: bool, config: CleanerConfig, output: Option<PathBuf>) -> Result<()> {
    let cleaner = PdfCleaner::with_config(pdf, config)
        .with_context(|| format!("failed to read PDF '{}'", pdf.display()))?;
    let report = cleaner.report(output::display_name(pdf));
    let target = output.unwrap_or_else(|| output::clean_path(pdf));

    print!("{}", clean_summary(&report));
    println!("File will be saved as: {}", output::display_name(&target));

    if !yes && !confirm("Proceed to wipe metadata?")? {
        println!("Operation canceled. No clean file created.");
        return Ok(());
    }

    let summary = cleaner
        .clean_to_path(&target)
        .with_context(|| format!("failed to clean '{}'", pdf.display()))?;
    debug!(?summary, "clean finished");

    println!("File cleaned and saved as: {}", target.display());
    Ok(())
}

/// Whether `analyze` goes on to store the report. JSON on stdout stays
/// machine-readable, so `--json` only stores with `--yes` and never prompts.
fn offers_to_store(report: &MetadataReport, no_save: bool, json: bool, yes: bool) -> bool {
    !(report.entries.is_empty() || no_save || (json && !yes))
}

/// What `clean` shows before asking for confirmation.
fn clean_summary(report: &MetadataReport) -> String {
    if !report.entries.is_empty() {
        return report.render();
    }

    let mut out = String::from("No metadata found in this PDF.\n");
    if let Some(xmp) = &report.xmp {
        out.push_str(&format!("XMP metadata stream present ({} bytes)\n", xmp.length));
    }
    out
}

/// Ask a yes/no question on stdin. Anything but `y`/`yes` counts as no.
fn confirm(question: &str) -> Result<bool> {
    print!("{question} [y/N] ");
    io::stdout().flush()?;

    let mut answer = String::new();
    io::stdin().lock().read_line(&mut answer)?;
    Ok(is_yes(&answer))
}

fn is_yes(answer: &str) -> bool {
    matches!(answer.trim().to_ascii_lowercase().as_str(), "y" | "yes")
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;
    use cleanpdf::{DocumentMetadata, MetadataEntry, XmpInfo};

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn clean_defaults_to_blank_mode_with_xmp_stripping() {
        let cli = Cli::try_parse_from(["cleanpdf", "clean", "in.pdf"]).unwrap();
        match cli.command {
            Command::Clean { mode, keep_xmp, yes, .. } => {
                assert_eq!(WipeMode::from(mode), WipeMode::Blank);
                assert!(!keep_xmp);
                assert!(!yes);
            }
            other => panic!("unexpected command {other:?}"),
        }
    }

    #[test]
    fn analyze_rejects_yes_with_no_save() {
        assert!(Cli::try_parse_from(["cleanpdf", "analyze", "in.pdf", "--yes", "--no-save"]).is_err());
    }

    fn report(entries: Vec<MetadataEntry>, xmp: Option<XmpInfo>) -> MetadataReport {
        MetadataReport::new("in.pdf", DocumentMetadata::new(entries), xmp)
    }

    #[test]
    fn json_stores_only_with_yes() {
        let r = report(vec![MetadataEntry::new("Title", "T")], None);
        assert!(!offers_to_store(&r, false, true, false));
        assert!(offers_to_store(&r, false, true, true));
        assert!(offers_to_store(&r, false, false, false));
        assert!(!offers_to_store(&r, true, false, false));
    }

    #[test]
    fn nothing_to_store_without_entries() {
        let r = report(Vec::new(), Some(XmpInfo { length: 10 }));
        assert!(!offers_to_store(&r, false, false, true));
    }

    #[test]
    fn clean_summary_mentions_xmp_without_info() {
        let r = report(Vec::new(), Some(XmpInfo { length: 64 }));
        assert_eq!(
            clean_summary(&r),
            "No metadata found in this PDF.\nXMP metadata stream present (64 bytes)\n"
        );
    }

    #[test]
    fn clean_summary_without_any_metadata() {
        assert_eq!(clean_summary(&report(Vec::new(), None)), "No metadata found in this PDF.\n");
    }

    #[test]
    fn clean_summary_lists_entries() {
        let r = report(vec![MetadataEntry::new("Author", "Kim")], None);
        assert_eq!(clean_summary(&r), "Found 1 items in metadata.\nAuthor : Kim\n");
    }

    #[test]
    fn yes_answers() {
        assert!(is_yes("y\n"));
        assert!(is_yes(" YES "));
        assert!(!is_yes("\n"));
        assert!(!is_yes("nope"));
    }
}
