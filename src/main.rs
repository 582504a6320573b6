//! headline: Rewrite HTML so heading levels follow section nesting.
#![allow(clippy::multiple_crate_versions)]

use clap::Parser;
use headline::formats::{html::HtmlFormat, Format};
use headline::{config, input};
use std::io;
use std::path::PathBuf;
use tracing::{error, info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "headline")]
#[command(about = "Automatic heading levels for nested HTML sections", long_about = None)]
struct Args {
    /// Files or directories to process
    #[arg(value_name = "PATH")]
    paths: Vec<PathBuf>,

    /// File extensions to match
    #[arg(long, short = 'e', value_name = "EXT")]
    ext: Vec<String>,

    /// Configuration file (defaults to ./headline.toml)
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Rewrite documents in place instead of printing them
    #[arg(long, conflicts_with = "outline")]
    write: bool,

    /// Print the resolved outline as JSON instead of the rewritten document
    #[arg(long)]
    outline: bool,

    /// Log at debug level
    #[arg(long, short = 'v')]
    verbose: bool,

    /// Emit logs as JSON
    #[arg(long)]
    json_logs: bool,
}

fn setup_tracing(args: &Args) {
    let level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };
    let filter = EnvFilter::from_default_env().add_directive(level.into());

    if args.json_logs {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .json()
            .init();
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(io::stderr)
            .compact()
            .init();
    }
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    setup_tracing(&args);

    let mut cfg = match &args.config {
        Some(path) => config::Config::load_from(path),
        None => config::Config::load(),
    };

    // Override config with command line args
    if !args.ext.is_empty() {
        cfg.file_extensions.clone_from(&args.ext);
    }

    let documents = input::find_documents(args.paths.clone(), &cfg.file_extensions)?;
    if documents.is_empty() {
        eprintln!("No matching files found");
        return Ok(());
    }

    let format = HtmlFormat;
    let markers = cfg.markers();
    let mut failures = 0usize;

    for path in &documents {
        let rendered = match input::render_file(path, &format, &markers) {
            Ok(rendered) => rendered,
            Err(e) => {
                error!(path = %path.display(), error = %e, "failed to render outline");
                failures += 1;
                continue;
            }
        };
        info!(path = %path.display(), headings = rendered.entries.len(), format = format.name(), "rendered outline");

        if args.outline {
            let json = serde_json::to_string_pretty(&rendered.entries).map_err(io::Error::other)?;
            println!("{json}");
        } else if args.write {
            if let Err(e) = std::fs::write(path, &rendered.output) {
                error!(path = %path.display(), error = %e, "failed to write document");
                failures += 1;
                continue;
            }
        } else {
            print!("{}", rendered.output);
        }
    }

    if failures > 0 {
        return Err(io::Error::other(format!(
            "{failures} of {} documents failed",
            documents.len()
        )));
    }
    Ok(())
}
