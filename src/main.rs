//! shtags CLI entry point

use std::fs;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use shtags::indexing::{collect_files, scan_files_parallel};
use shtags::{render, Cli, Config, ShtagsError};

fn main() -> ExitCode {
    let cli = Cli::parse_args();
    init_tracing(&cli);

    match run(&cli) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            ExitCode::from(e.exit_code())
        }
    }
}

fn init_tracing(cli: &Cli) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(cli.log_filter()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(std::io::stderr().is_terminal())
        .with_target(false)
        .init();
}

/// Scan, write output, and return the exit code for per-file failures
fn run(cli: &Cli) -> shtags::Result<u8> {
    // 1. Load configuration
    let config = Config::load(cli.config.as_deref())?;
    if let Some(source) = &config.source {
        debug!(path = %source.display(), "using configuration");
    }

    // 2. Expand the command line into a file list
    let files = expand_paths(cli, &config)?;
    info!(files = files.len(), "scanning");

    // 3. Scan in parallel
    let result = scan_files_parallel(&files, &config);
    info!(
        files = result.files.len(),
        tags = result.tag_count(),
        errors = result.errors.len(),
        "scan complete"
    );

    // 4. Render and write
    let output = render(&result.files, cli.format, !cli.unsorted)?;
    match &cli.output {
        Some(path) => fs::write(path, output).map_err(|e| ShtagsError::Output {
            message: format!("{}: {}", path.display(), e),
        })?,
        None => print!("{}", output),
    }

    // 5. Report files that could not be scanned
    for err in &result.errors {
        eprintln!("Error: {}", err.message);
    }

    Ok(result.errors.first().map_or(0, |e| e.exit_code))
}

fn expand_paths(cli: &Cli, config: &Config) -> shtags::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    // Missing files are reported per file by the scan, like unroutable ones.
    for path in &cli.paths {
        if path.is_dir() {
            if !cli.recursive {
                return Err(ShtagsError::IsDirectory {
                    path: path.display().to_string(),
                });
            }
            files.extend(collect_files(path, cli.max_depth, config));
        } else {
            files.push(path.clone());
        }
    }

    Ok(files)
}
