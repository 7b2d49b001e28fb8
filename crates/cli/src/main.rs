//! Staffroom - command-line demonstrations of the staffroom domain.

use std::io::Read;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod commands;
mod config;

use config::{CliConfig, OutputFormat};
use staffroom_domain::Salary;

#[derive(Parser, Debug)]
#[command(name = "staffroom", about = "Teacher records, staff roles, and subjects")]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format for teacher records (overrides STAFFROOM_FORMAT)
    #[arg(long, value_enum, global = true)]
    format: Option<OutputFormat>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Build sample teacher records and mutate their non-identity fields
    Teachers,
    /// Build teacher records through the factory
    Factory,
    /// Validate a teacher document given as JSON (`-` reads stdin)
    Validate { json: String },
    /// Create an employee for each salary
    Employee {
        #[arg(required = true)]
        salaries: Vec<Salary>,
    },
    /// Teach a class for each subject
    TeachClass {
        #[arg(required = true)]
        subjects: Vec<String>,
    },
    /// Run every demonstration in sequence
    Demo,
}

fn init_logging(config: &CliConfig) {
    // RUST_LOG wins over STAFFROOM_LOG / --verbose
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| config.log_filter.as_str().into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn read_json_arg(json: String) -> anyhow::Result<String> {
    if json != "-" {
        return Ok(json);
    }
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .context("reading teacher document from stdin")?;
    Ok(input)
}

fn run(cli: Cli, config: &CliConfig, out: &mut impl std::io::Write) -> anyhow::Result<()> {
    match cli.command {
        Command::Teachers => commands::teachers(out, config.format),
        Command::Factory => commands::factory(out, config.format),
        Command::Validate { json } => commands::validate(out, &read_json_arg(json)?),
        Command::Employee { salaries } => commands::employees(out, &salaries),
        Command::TeachClass { subjects } => commands::teach_classes(out, &subjects),
        Command::Demo => commands::demo(out, config.format),
    }
}

fn main() -> anyhow::Result<()> {
    // A missing .env file is fine
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = CliConfig::from_env().with_overrides(cli.verbose, cli.format);
    init_logging(&config);

    tracing::debug!(command = ?cli.command, format = ?config.format, "Starting staffroom");

    let stdout = std::io::stdout();
    run(cli, &config, &mut stdout.lock())
}
