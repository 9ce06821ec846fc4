//! csvdiff - Row-level diff for CSV snapshots

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use anyhow::{bail, Context, Result};
use clap::{Parser, ValueEnum};

use csvdiff::config::{Config, SummaryFormat, DEFAULT_STATUS_COLUMN};
use csvdiff::output::{render_summary_to_stdout, to_csv_bytes, to_zip_bytes, SummaryEntry};
use csvdiff::parser::{Input, LoaderFactory};
use csvdiff::DiffEngine;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CliSummaryFormat {
    Terminal,
    Json,
    None,
}

impl From<CliSummaryFormat> for SummaryFormat {
    fn from(f: CliSummaryFormat) -> Self {
        match f {
            CliSummaryFormat::Terminal => SummaryFormat::Terminal,
            CliSummaryFormat::Json => SummaryFormat::Json,
            CliSummaryFormat::None => SummaryFormat::None,
        }
    }
}

/// Report rows added to and removed from a CSV file, or from every
/// header-matched CSV file of a ZIP archive
#[derive(Parser, Debug)]
#[command(name = "csvdiff")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Old/current data (CSV file or ZIP archive of CSV files)
    old_file: PathBuf,

    /// New data, of the same kind as the old data
    new_file: PathBuf,

    /// Where to write the changes (CSV for CSV inputs, ZIP for archives)
    #[arg(short, long)]
    output: PathBuf,

    /// Output additional information while running
    #[arg(short, long)]
    verbose: bool,

    /// Name of the column holding each row's status
    #[arg(long, default_value = DEFAULT_STATUS_COLUMN)]
    status_column: String,

    /// Summary printed after the diff
    #[arg(long, value_enum, default_value = "terminal")]
    summary: CliSummaryFormat,

    /// Compare archive tables in parallel
    #[arg(long)]
    parallel: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    env_logger::Builder::new()
        .filter_level(if cli.verbose {
            log::LevelFilter::Info
        } else {
            log::LevelFilter::Warn
        })
        .parse_default_env()
        .init();

    match run(cli) {
        Ok(has_changes) => {
            if has_changes {
                ExitCode::from(1) // Differences found
            } else {
                ExitCode::SUCCESS // No differences
            }
        }
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn run(cli: Cli) -> Result<bool> {
    let config = Config::new()
        .with_verbose(cli.verbose)
        .with_status_column(cli.status_column)
        .with_parallel(cli.parallel)
        .with_summary_format(cli.summary.into());

    let factory = LoaderFactory::new();

    let old_input = factory
        .load(&cli.old_file, &config)
        .with_context(|| format!("Failed to load old file: {}", cli.old_file.display()))?;

    let new_input = factory
        .load(&cli.new_file, &config)
        .with_context(|| format!("Failed to load new file: {}", cli.new_file.display()))?;

    log::info!("Finished loading files.");

    let engine = DiffEngine::new(config.clone());

    match (old_input, new_input) {
        (Input::Table(old_table), Input::Table(new_table)) => {
            let result = engine.diff(&old_table, &new_table).with_context(|| {
                format!(
                    "Cannot compare {} with {}",
                    cli.old_file.display(),
                    cli.new_file.display()
                )
            })?;

            write_output(&cli.output, &to_csv_bytes(&result)?)?;

            let name = display_name(&cli.new_file);
            render_summary_to_stdout(
                &[SummaryEntry {
                    name: &name,
                    result: &result,
                }],
                config.summary_format,
            )?;

            Ok(result.has_changes())
        }
        (Input::Archive(old_archive), Input::Archive(new_archive)) => {
            let results = engine
                .diff_archives(&old_archive, &new_archive)
                .with_context(|| {
                    format!(
                        "Cannot compare archive {} with {}",
                        cli.old_file.display(),
                        cli.new_file.display()
                    )
                })?;

            write_output(&cli.output, &to_zip_bytes(&results)?)?;

            let entries: Vec<SummaryEntry<'_>> = results
                .iter()
                .map(|(name, result)| SummaryEntry {
                    name: name.as_str(),
                    result,
                })
                .collect();
            render_summary_to_stdout(&entries, config.summary_format)?;

            Ok(results.values().any(|r| r.has_changes()))
        }
        (old_input, new_input) => bail!(
            "Input file types do not match: {} is a {} but {} is a {}",
            cli.old_file.display(),
            old_input.kind(),
            cli.new_file.display(),
            new_input.kind()
        ),
    }
}

fn write_output(path: &Path, bytes: &[u8]) -> Result<()> {
    std::fs::write(path, bytes)
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    log::info!("Wrote {}", path.display());
    Ok(())
}

fn display_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}
