mod constants;
mod error;
mod format;
mod model;
mod report;
mod scanner;

use anyhow::{Context, Result};
use clap::Parser;
use clap::error::ErrorKind;
use error::Error;
use log::debug;
use scanner::lister::FsLister;
use scanner::{ScanOptions, TreeScanner};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

#[derive(Parser)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Directory whose immediate subdirectories are measured
    path: PathBuf,

    /// Also total files that sit directly in PATH as their own entry
    #[arg(long)]
    include_root_files: bool,

    /// Report unreadable subdirectories instead of aborting
    #[arg(long)]
    keep_going: bool,

    /// Log scan progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn parse_cli() -> std::result::Result<Cli, Error> {
    Cli::try_parse().map_err(|err| match err.kind() {
        ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => err.exit(),
        _ => Error::Usage(err.render().to_string()),
    })
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn run(cli: &Cli) -> Result<()> {
    let options = ScanOptions {
        include_root_files: cli.include_root_files,
        keep_going: cli.keep_going,
    };
    debug!("scanning {} with {options:?}", cli.path.display());

    let result = TreeScanner::new(FsLister, options).scan_root(&cli.path)?;
    debug!(
        "{} subdirectories under {}",
        result.totals.len(),
        result.root_path.display()
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    report::render(&result, &mut out).context("failed to write report")?;
    out.flush().context("failed to flush report")?;
    Ok(())
}

fn main() -> ExitCode {
    let cli = match parse_cli() {
        Ok(cli) => cli,
        Err(err) => {
            eprint!("{err}");
            return ExitCode::from(err.exit_code());
        }
    };
    init_logging(cli.verbose);

    match run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<Error>().map_or(3, Error::exit_code);
            ExitCode::from(code)
        }
    }
}
