//! MHD CLI - Command-line tool for inspecting MHD game-data databases.
//!
//! This is the main entry point for the mhd command-line application.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use rayon::prelude::*;
use tracing::{debug, info, warn};
use tracing_subscriber::EnvFilter;

use mhd::prelude::*;

/// MHD - Mids' Hero Designer database inspection tool
#[derive(Parser)]
#[command(name = "mhd")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report the layout and database kind of each file
    Detect {
        /// Files to classify
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Parse files and print a summary of each
    Inspect {
        /// Database kind (main, enhancement, recipe, salvage); guessed from the header if omitted
        #[arg(short, long, env = "MHD_KIND")]
        kind: Option<DatabaseKind>,

        /// Files to parse
        #[arg(required = true)]
        files: Vec<PathBuf>,
    },

    /// Parse a file and write it as JSON
    Dump {
        /// Database kind (main, enhancement, recipe, salvage); guessed from the header if omitted
        #[arg(short, long, env = "MHD_KIND")]
        kind: Option<DatabaseKind>,

        /// Input file
        input: PathBuf,

        /// Output JSON file (stdout if omitted)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Pretty-print the JSON
        #[arg(short, long)]
        pretty: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Detect { files } => cmd_detect(&files),
        Commands::Inspect { kind, files } => cmd_inspect(kind, &files),
        Commands::Dump {
            kind,
            input,
            output,
            pretty,
        } => cmd_dump(kind, &input, output.as_deref(), pretty),
    }
}

fn init_logging(verbose: u8) {
    let default = match verbose {
        0 => "mhd=info,mhd_container=info",
        1 => "mhd=debug,mhd_container=debug,mhd_text=debug",
        _ => "trace",
    };
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();
}

fn cmd_detect(files: &[PathBuf]) -> Result<()> {
    let results: Vec<_> = files
        .par_iter()
        .map(|path| (path, detect_file(path)))
        .collect();

    let mut failed = 0;
    for (path, result) in results {
        match result {
            Ok((format, Some(kind))) => println!("{}: {format}, {kind} database", path.display()),
            Ok((format, None)) => println!("{}: {format}", path.display()),
            Err(e) => {
                eprintln!("{}: {e:#}", path.display());
                failed += 1;
            }
        }
    }

    finish(files.len(), failed)
}

fn detect_file(path: &Path) -> Result<(FormatKind, Option<DatabaseKind>)> {
    let data = fs::read(path).context("Failed to read input file")?;
    let format = detect(&data)?;
    let kind = match format {
        FormatKind::Binary => DatabaseKind::sniff(&data),
        _ => None,
    };
    Ok((format, kind))
}

fn cmd_inspect(kind: Option<DatabaseKind>, files: &[PathBuf]) -> Result<()> {
    let start = Instant::now();
    let results: Vec<_> = files
        .par_iter()
        .map(|path| (path, load_path(kind, path)))
        .collect();

    let mut failed = 0;
    for (path, result) in results {
        match result {
            Ok(document) => print_summary(path, &document),
            Err(e) => {
                // Context chain includes the offset and "while decoding" trail
                eprintln!("{}: {e:#}", path.display());
                failed += 1;
            }
        }
    }

    info!(files = files.len(), elapsed = ?start.elapsed(), "inspection finished");
    finish(files.len(), failed)
}

fn print_summary(path: &Path, document: &Document) {
    println!("{}", path.display());
    match document.kind() {
        Some(kind) => println!("  kind:     {kind}"),
        None => println!("  format:   {}", document.format()),
    }
    if let Some(header) = document.header() {
        println!("  header:   {header}");
    }
    if let Some(version) = document.version() {
        println!("  version:  {}", if version.is_empty() { "(empty)" } else { version });
    }
    match document.date() {
        Some(DatabaseDate::Ticks { datetime, .. }) => println!("  date:     {datetime}"),
        Some(DatabaseDate::Literal(value)) => println!("  date:     {value}"),
        None => {}
    }
    if let Document::Main(db) = document {
        println!("  issue:    {} ({})", db.issue(), db.page_vol_text());
    }
    for (name, count) in document.record_counts() {
        println!("  {name:<18}{count:>8}");
    }
    if document.trailing_bytes() > 0 {
        println!("  trailing: {} bytes ignored", document.trailing_bytes());
    }
}

fn cmd_dump(
    kind: Option<DatabaseKind>,
    input: &Path,
    output: Option<&Path>,
    pretty: bool,
) -> Result<()> {
    let document = load_path(kind, input)?;

    let json = if pretty {
        serde_json::to_string_pretty(&document)
    } else {
        serde_json::to_string(&document)
    }
    .context("Failed to serialize document")?;

    match output {
        Some(path) => {
            fs::write(path, json).context("Failed to write output file")?;
            info!(path = %path.display(), "wrote JSON");
        }
        None => println!("{json}"),
    }

    Ok(())
}

/// Read a file and decode it, guessing the kind from the header when unset.
fn load_path(kind: Option<DatabaseKind>, path: &Path) -> Result<Document> {
    let data = fs::read(path).context("Failed to read input file")?;

    let kind = match kind.or_else(|| DatabaseKind::sniff(&data)) {
        Some(kind) => kind,
        None => {
            debug!(path = %path.display(), "no known header, assuming main database");
            DatabaseKind::Main
        }
    };

    let document = mhd::load(kind, &data)
        .with_context(|| format!("Failed to parse {kind} database"))?;
    Ok(document)
}

fn finish(total: usize, failed: usize) -> Result<()> {
    if failed > 0 {
        warn!(failed, total, "some files could not be processed");
        anyhow::bail!("{failed} of {total} files failed");
    }
    Ok(())
}
