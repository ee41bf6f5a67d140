//! `colschema` - infer column types from delimited text

use std::path::PathBuf;

use clap::{ArgAction, Args, Parser, Subcommand};
use column_schema_cli::commands::infer::{InferArgs, handle_infer};
use column_schema_cli::input::parse_delimiter;
use column_schema_cli::output::OutputFormat;
use column_schema_core::HeaderMismatchPolicy;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "colschema", version, about = "Infer column schemas from delimited text")]
struct Cli {
    /// Increase log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Infer a schema from a delimited file
    Infer(InferCommand),
}

#[derive(Args)]
struct InferCommand {
    /// Input file, or `-` for stdin
    input: String,

    /// Field delimiter (`\t` or `tab` for a tab)
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    delimiter: char,

    /// Treat the first line as data and name columns `_c0`, `_c1`, ...
    #[arg(long)]
    no_header: bool,

    /// Token to treat as an empty field (repeatable)
    #[arg(long = "null-value", value_name = "TOKEN")]
    null_values: Vec<String>,

    /// Trim whitespace around fields before detection
    #[arg(long)]
    trim: bool,

    /// Max rows to read, 0 for all
    #[arg(long, default_value_t = 0)]
    sample_size: usize,

    /// Rows per parallel chunk
    #[arg(long, default_value_t = 1024)]
    partition_size: usize,

    /// Run a single sequential fold
    #[arg(long)]
    sequential: bool,

    /// How to pair a header and inferred columns of different widths
    /// (truncate, reject, fill)
    #[arg(long, default_value = "truncate")]
    header_mismatch: HeaderMismatchPolicy,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = OutputFormat::Table)]
    format: OutputFormat,

    /// Output file path (stdout if not provided)
    #[arg(short, long)]
    output: Option<PathBuf>,
}

impl From<InferCommand> for InferArgs {
    fn from(cmd: InferCommand) -> Self {
        InferArgs {
            input: cmd.input,
            delimiter: cmd.delimiter,
            has_header: !cmd.no_header,
            null_values: cmd.null_values,
            trim: cmd.trim,
            sample_size: cmd.sample_size,
            partition_size: cmd.partition_size,
            sequential: cmd.sequential,
            header_mismatch: cmd.header_mismatch,
            format: cmd.format,
            output: cmd.output,
        }
    }
}

fn init_tracing(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| default_level.into()),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Infer(cmd) => handle_infer(&cmd.into())?,
    }

    Ok(())
}
