//! secdoc command-line entry point
//!
//! Scans a source tree for `@security-control` and `@requirement` comment
//! blocks and writes them to a JSON report.

use anyhow::Result;
use clap::{ArgAction, Parser};
use std::path::PathBuf;

use secdoc::commands::{run_scan, ReportDestination};
use secdoc::utils::{init_logging, load_env, settings_from_env};
use secdoc::Language;

#[derive(Parser, Debug)]
#[command(
    name = "secdoc",
    version,
    about = "Extract security-control and requirement annotations from source comments"
)]
struct Cli {
    /// Directory (or single source file) to scan
    source_dir: PathBuf,

    /// Report path (default: $SECDOC_OUTPUT, else security-report.json)
    output_file: Option<PathBuf>,

    /// Languages to scan, comma separated or repeated (default: $SECDOC_LANGS, else go)
    #[arg(long = "lang", value_delimiter = ',')]
    languages: Vec<Language>,

    /// Print the report to stdout instead of writing a file
    #[arg(long)]
    stdout: bool,

    /// More log output (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long, conflicts_with = "verbose")]
    quiet: bool,
}

impl Cli {
    fn verbosity(&self) -> i8 {
        if self.quiet {
            -1
        } else {
            self.verbose.min(2) as i8
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let mut settings = settings_from_env()?.with_languages(cli.languages);
    if let Some(output) = cli.output_file {
        settings = settings.with_output_path(output);
    }
    settings.to_stdout = cli.stdout;

    match run_scan(&cli.source_dir, &settings)? {
        ReportDestination::File(path) => tracing::debug!(path = %path.display(), "report persisted"),
        ReportDestination::Stdout => tracing::debug!("report printed to stdout"),
    }

    Ok(())
}

fn main() {
    let cli = Cli::parse();

    // Optional .env in the working directory
    load_env().ok();
    init_logging(cli.verbosity());

    if let Err(e) = run(cli) {
        eprintln!("[secdoc] Error: {:#}", e);
        std::process::exit(1);
    }
}
