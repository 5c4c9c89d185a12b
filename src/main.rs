use anyhow::Result;
use clap::{Parser, Subcommand};
use dotenv::dotenv;
use oradiff::commands::{self, DiffFormat};
use oradiff::config;
use oradiff::constants::CONFIG_FILENAME;
use std::path::PathBuf;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[arg(long, default_value = CONFIG_FILENAME, global = true)]
    config_file: String,

    /// Enable verbose output (info level)
    #[arg(long, short = 'v', global = true)]
    verbose: bool,

    /// Suppress all non-essential output (error level only)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug output (debug level)
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Arguments for oradiff diff
#[derive(Parser, Debug)]
pub struct DiffArgs {
    /// Snapshot of the schema to migrate from (`null` for an empty schema)
    pub from: String,

    /// Snapshot of the schema to migrate to (`null` for an empty schema)
    pub to: String,

    /// Export one file per change into this directory instead of printing
    #[arg(long)]
    pub output_dir: Option<PathBuf>,

    /// Output format when printing
    #[arg(long, value_enum, default_value = "sql")]
    pub format: DiffFormat,

    #[command(flatten)]
    pub diff_flags: config::DiffFlagsArgs,

    #[command(flatten)]
    pub substitution_args: config::SubstitutionArgs,

    #[command(flatten)]
    pub export_args: config::ExportArgs,

    #[command(flatten)]
    pub object_filter_args: config::ObjectFilterArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Compare two schema snapshots and generate the DDL between them
    Diff(DiffArgs),
}

fn main() -> Result<()> {
    dotenv().ok();
    let cli = Cli::parse();
    initialize_logging(&cli);
    run_main(cli)
}

fn initialize_logging(cli: &Cli) {
    let level = if cli.debug {
        "debug"
    } else if cli.verbose {
        "info"
    } else if cli.quiet {
        "error"
    } else {
        "warn" // default level
    };

    let filter = if std::env::var("RUST_LOG").is_ok() {
        EnvFilter::from_default_env()
    } else {
        EnvFilter::new(level)
    };

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn run_main(cli: Cli) -> Result<()> {
    let (file_config, root_dir) = config::load_config(&cli.config_file)?;

    match cli.command {
        Commands::Diff(args) => {
            let cli_config = config::ConfigInput {
                diff: Some(args.diff_flags.into()),
                equivalences_file: args.substitution_args.equivalences_file.clone(),
                substitutions: Some(args.substitution_args.into()),
                export: Some(args.export_args.into()),
                objects: Some(args.object_filter_args.into()),
            };

            let config = config::ConfigBuilder::new()
                .with_file(file_config)
                .with_cli_args(cli_config)
                .resolve()?;

            commands::cmd_diff(
                &config,
                &root_dir,
                commands::DiffArgs {
                    from: args.from,
                    to: args.to,
                    output_dir: args.output_dir,
                    format: args.format,
                },
            )
        }
    }
}
