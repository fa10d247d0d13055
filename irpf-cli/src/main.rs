use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use irpf_core::Period;
use irpf_data::SalaryLoader;
use tracing::info;

use irpf_cli::app::{evaluate_input, load_rules};
use irpf_cli::export::write_results;
use irpf_cli::logging::{LogConfig, init_logging};
use irpf_cli::report::{ResultReport, RulesSummary};

// ─── CLI definition ──────────────────────────────────────────────────────────

/// Income tax simulator for the proposed exemption and discount rules.
///
/// Compares the tax due under the current monthly withholding table with
/// the tax due under the proposal and reports the monthly gain.
#[derive(Debug, Parser)]
#[command(name = "irpf", version, about)]
struct Cli {
    /// Log level or filter directive (overrides RUST_LOG).
    #[arg(long, global = true)]
    log_level: Option<String>,

    /// Append log records to this file.
    #[arg(long, global = true)]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Simulate a single salary.
    Calc {
        /// Gross salary in pt-BR format, e.g. `7.000,00`.
        #[arg(allow_hyphen_values = true)]
        salary: String,

        /// Treat the salary as an annual figure.
        #[arg(long)]
        annual: bool,

        /// TOML file with the proposal rules.
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Print the proposal rules in use.
    Rules {
        /// TOML file with the proposal rules.
        #[arg(long)]
        rules: Option<PathBuf>,
    },

    /// Simulate every salary in a CSV file and write the results as CSV.
    Batch {
        /// CSV with a `salary` column and an optional `period` column.
        file: PathBuf,

        /// TOML file with the proposal rules.
        #[arg(long)]
        rules: Option<PathBuf>,

        /// Output file; stdout when omitted.
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

// ─── entry point ─────────────────────────────────────────────────────────────

fn main() -> Result<()> {
    let cli = Cli::parse();

    init_logging(&LogConfig {
        level: cli.log_level,
        file: cli.log_file,
    })?;

    match cli.command {
        Command::Calc {
            salary,
            annual,
            rules,
        } => {
            let rules = load_rules(rules.as_deref())?;
            let period = if annual {
                Period::Annual
            } else {
                Period::Monthly
            };

            let result = evaluate_input(&salary, period, &rules);
            print!("{}", ResultReport::new(&result, &rules));
        }
        Command::Rules { rules } => {
            let rules = load_rules(rules.as_deref())?;
            print!("{}", RulesSummary(&rules));
        }
        Command::Batch {
            file,
            rules,
            output,
        } => {
            let rules = load_rules(rules.as_deref())?;
            let records = SalaryLoader::load_from_file(&file)
                .with_context(|| format!("Failed to parse CSV: {}", file.display()))?;

            let writer: Box<dyn Write> = match &output {
                Some(path) => Box::new(
                    File::create(path)
                        .with_context(|| format!("Failed to create: {}", path.display()))?,
                ),
                None => Box::new(io::stdout().lock()),
            };

            let written =
                write_results(&records, &rules, writer).context("Failed to write results")?;
            info!(rows = written, "batch complete");
        }
    }

    Ok(())
}
