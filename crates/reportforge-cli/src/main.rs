mod config;
mod handler;
mod logging;

use std::io::Read;
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use std::time::Instant;

use clap::{Args, Parser, Subcommand, ValueEnum};
use reportforge_core::{Error as CoreError, FieldNode, resolve_schema, schema_document_json_schema};
use reportforge_generate::{GenerationEngine, OutputError, OutputFormat, write_batch};
use thiserror::Error;
use uuid::Uuid;

use config::{ConfigError, LogFormat, Settings, load_settings, write_bytes_atomic};
use handler::{GenerateResponse, handle_generate};
use logging::{DEFAULT_LOG_LEVEL, init_logging};

#[derive(Debug, Error)]
enum CliError {
    #[error("{0}")]
    Core(#[from] CoreError),
    #[error("{0}")]
    Rejected(String),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
    #[error("output error: {0}")]
    Output(#[from] OutputError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid schema document: {0}")]
    Json(#[from] serde_json::Error),
    #[error("logging error: {0}")]
    Logging(String),
}

#[derive(Parser, Debug)]
#[command(name = "reportforge", version, about = "Generate fake records from a field schema")]
struct Cli {
    /// Settings file (defaults to ./reportforge.toml when present).
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,
    /// Log filter, overridden by RUST_LOG.
    #[arg(long, global = true, value_name = "LEVEL")]
    log_level: Option<String>,
    /// Log output format.
    #[arg(long, global = true, value_enum)]
    log_format: Option<LogFormat>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate a batch of records.
    Generate(GenerateArgs),
    /// Check a schema document without generating.
    Validate(ValidateArgs),
    /// Print the JSON Schema of a schema document.
    Schema,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Schema document path, or `-` for stdin.
    #[arg(long, value_name = "FILE")]
    schema: PathBuf,
    /// Number of records to generate.
    #[arg(long, allow_negative_numbers = true)]
    count: Option<i64>,
    /// Write output to this file instead of stdout.
    #[arg(long, value_name = "FILE")]
    out: Option<PathBuf>,
    /// Seed for the random source.
    #[arg(long)]
    seed: Option<u64>,
    /// Reject counts above this limit.
    #[arg(long)]
    max_records: Option<u64>,
    /// Output layout.
    #[arg(long, value_enum, default_value_t = FormatArg::Json)]
    format: FormatArg,
    /// Emit single-line JSON.
    #[arg(long, default_value_t = false)]
    compact: bool,
}

#[derive(Args, Debug)]
struct ValidateArgs {
    /// Schema document path, or `-` for stdin.
    #[arg(long, value_name = "FILE")]
    schema: PathBuf,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FormatArg {
    Json,
    Ndjson,
}

impl From<FormatArg> for OutputFormat {
    fn from(value: FormatArg) -> Self {
        match value {
            FormatArg::Json => OutputFormat::Json,
            FormatArg::Ndjson => OutputFormat::Ndjson,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), CliError> {
    let settings = load_settings(cli.config.as_deref())?;
    let level = cli
        .log_level
        .as_deref()
        .or(settings.log_level.as_deref())
        .unwrap_or(DEFAULT_LOG_LEVEL);
    let format = cli.log_format.unwrap_or(settings.log_format);
    init_logging(level, format).map_err(CliError::Logging)?;

    match cli.command {
        Command::Generate(args) => run_generate(args, &settings),
        Command::Validate(args) => run_validate(args),
        Command::Schema => run_schema(),
    }
}

fn run_generate(args: GenerateArgs, settings: &Settings) -> Result<(), CliError> {
    let run_id = Uuid::new_v4().to_string();
    let timer = Instant::now();
    let count = settings.record_count(args.count);
    let options = settings.generate_options(args.max_records, args.seed);

    tracing::info!(event = "run_started", run_id = %run_id, count, seed = ?options.seed);

    let schema = read_schema(&args.schema)?;
    let mut engine = GenerationEngine::new(options);
    let batch = match handle_generate(&mut engine, count, &schema) {
        GenerateResponse::Ok(batch) => batch,
        GenerateResponse::BadRequest(message) => return Err(CliError::Rejected(message)),
    };

    let format = OutputFormat::from(args.format);
    let pretty = !args.compact;
    let bytes_written = match &args.out {
        Some(path) => {
            let mut buffer = Vec::new();
            let bytes = write_batch(&mut buffer, &batch, format, pretty)?;
            write_bytes_atomic(path, &buffer)?;
            tracing::info!(event = "output_written", path = %path.display());
            bytes
        }
        None => write_batch(std::io::stdout().lock(), &batch, format, pretty)?,
    };

    tracing::info!(
        event = "run_finished",
        run_id = %run_id,
        records = batch.len(),
        bytes_written,
        duration_ms = timer.elapsed().as_millis() as u64
    );

    Ok(())
}

fn run_validate(args: ValidateArgs) -> Result<(), CliError> {
    let schema = read_schema(&args.schema)?;
    let resolved = resolve_schema(&schema)?;
    println!("schema is valid ({} fields)", resolved.len());
    Ok(())
}

fn run_schema() -> Result<(), CliError> {
    let schema = schema_document_json_schema();
    println!("{}", serde_json::to_string_pretty(&schema)?);
    Ok(())
}

fn read_schema(path: &Path) -> Result<Vec<FieldNode>, CliError> {
    let content = if path.as_os_str() == "-" {
        let mut content = String::new();
        std::io::stdin().read_to_string(&mut content)?;
        content
    } else {
        std::fs::read_to_string(path)?
    };
    Ok(serde_json::from_str(&content)?)
}
