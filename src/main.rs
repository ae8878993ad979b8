//! CLI for the structural masking engine
//!
//! Masks a file, a directory tree, or stdin and prints the result as
//! plain text or JSON.

use anyhow::{Context, Result};
use clap::Parser as ClapParser;
use code_masker::{Language, MaskOutput, Masker, WhitespaceMode};
use colored::Colorize;
use serde::Serialize;
use std::io::Read;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;
use walkdir::WalkDir;

/// Source file extensions handled in directory mode.
const SOURCE_EXTENSIONS: &[&str] = &[
    "c", "h", "cpp", "cc", "cxx", "hpp", "java", "js", "jsx", "mjs", "ts", "tsx",
];

#[derive(ClapParser, Debug)]
#[command(
    name = "code-masker",
    about = "Strips comments and masks identifiers in source code",
    long_about = "Produces a canonicalized variant of source code with comments removed, \
                  literals preserved, and identifiers replaced by FUNC_k/VAR_k aliases, \
                  plus the original-to-alias mapping table."
)]
struct Args {
    /// File or directory to mask; stdin when omitted
    path: Option<PathBuf>,

    /// Language tag (c, cpp, java, js, ...); inferred from the file
    /// extension when omitted
    #[arg(short, long)]
    language: Option<String>,

    /// Whitespace handling mode
    #[arg(short, long, value_enum, default_value_t = WhitespaceMode::Normalize)]
    whitespace: WhitespaceMode,

    /// Output format
    #[arg(short, long, value_enum, default_value = "human")]
    format: OutputFormat,

    /// Print the alias table after the masked code (human format)
    #[arg(short, long)]
    aliases: bool,

    /// Write output to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(clap::ValueEnum, Clone, Copy, Debug)]
enum OutputFormat {
    Human,
    Json,
}

#[derive(Serialize)]
struct FileReport {
    path: String,
    #[serde(flatten)]
    output: MaskOutput,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    let reports = match &args.path {
        None => vec![mask_stdin(&args)?],
        Some(path) if path.is_file() => vec![mask_path(path, &args)?],
        Some(path) if path.is_dir() => mask_directory(path, &args)?,
        Some(path) => {
            eprintln!("{}: {} is not a file or directory", "error".red(), path.display());
            std::process::exit(1);
        }
    };

    let rendered = render(&reports, &args)?;
    match &args.output {
        Some(path) => std::fs::write(path, rendered)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => print!("{rendered}"),
    }

    Ok(())
}

fn init_logging(verbose: bool) {
    let level = if verbose {
        tracing::Level::DEBUG
    } else {
        tracing::Level::WARN
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn mask_stdin(args: &Args) -> Result<FileReport> {
    let mut source = String::new();
    std::io::stdin()
        .read_to_string(&mut source)
        .context("failed to read stdin")?;
    let tag = args.language.as_deref().unwrap_or("cpp");
    let output = Masker::for_tag(tag).mask(&source, args.whitespace)?;
    Ok(FileReport {
        path: "<stdin>".to_string(),
        output,
    })
}

fn mask_path(path: &Path, args: &Args) -> Result<FileReport> {
    let source = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let language = language_for(path, args);
    let output = Masker::new(language)
        .mask(&source, args.whitespace)
        .with_context(|| format!("failed to mask {}", path.display()))?;
    Ok(FileReport {
        path: path.display().to_string(),
        output,
    })
}

fn mask_directory(root: &Path, args: &Args) -> Result<Vec<FileReport>> {
    let mut reports = Vec::new();
    for entry in WalkDir::new(root).into_iter().filter_map(|e| e.ok()) {
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        let known = path
            .extension()
            .and_then(|e| e.to_str())
            .map(|e| SOURCE_EXTENSIONS.contains(&e))
            .unwrap_or(false);
        if known {
            reports.push(mask_path(path, args)?);
        }
    }
    Ok(reports)
}

/// Explicit `--language` wins; otherwise the file extension decides,
/// with the engine's C-family fallback for anything unrecognized.
fn language_for(path: &Path, args: &Args) -> Language {
    if let Some(tag) = &args.language {
        return Language::from_tag(tag);
    }
    let ext = path.extension().and_then(|e| e.to_str()).unwrap_or("");
    Language::from_tag(ext)
}

fn render(reports: &[FileReport], args: &Args) -> Result<String> {
    match args.format {
        OutputFormat::Json => {
            let rendered = if reports.len() == 1 {
                serde_json::to_string_pretty(&reports[0].output)?
            } else {
                serde_json::to_string_pretty(reports)?
            };
            Ok(rendered + "\n")
        }
        OutputFormat::Human => {
            let mut out = String::new();
            for report in reports {
                if reports.len() > 1 {
                    out.push_str(&format!("{}\n", report.path.as_str().bold()));
                }
                out.push_str(&report.output.masked);
                out.push('\n');
                if args.aliases && !report.output.aliases.is_empty() {
                    out.push_str(&format!("{}\n", "aliases:".dimmed()));
                    out.push_str(&report.output.aliases.to_string());
                }
            }
            Ok(out)
        }
    }
}
