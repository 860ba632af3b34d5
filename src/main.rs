use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use storecli::api::client::StoreClient;
use storecli::{command, dispatch};
use tracing::Level;
use tracing_subscriber::fmt::writer::MakeWriterExt;

/// Command-line client for the Fake Store product catalog API
#[derive(Parser, Debug)]
#[command(name = "storecli", version, about, long_about = None)]
struct Args {
    /// Log level for debugging
    #[arg(long, value_enum, default_value = "off")]
    log_level: LogLevel,

    /// Raw command: <METHOD> <RESOURCE> [PARAMS...]
    #[arg(trailing_var_arg = true)]
    command: Vec<String>,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_tracing_level(self) -> Option<Level> {
        match self {
            LogLevel::Off => None,
            LogLevel::Error => Some(Level::ERROR),
            LogLevel::Warn => Some(Level::WARN),
            LogLevel::Info => Some(Level::INFO),
            LogLevel::Debug => Some(Level::DEBUG),
            LogLevel::Trace => Some(Level::TRACE),
        }
    }
}

fn setup_logging(level: LogLevel) -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let tracing_level = level.to_tracing_level()?;

    let log_path = get_log_path();

    if let Some(parent) = log_path.parent() {
        let _ = std::fs::create_dir_all(parent);
    }

    let Ok(file) = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)
    else {
        return None;
    };

    let (non_blocking, guard) = tracing_appender::non_blocking(file);

    tracing_subscriber::fmt()
        .with_max_level(tracing_level)
        .with_writer(non_blocking.with_max_level(tracing_level))
        .with_ansi(false)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::info!("storecli started with log level: {:?}", level);
    tracing::info!("Log file: {:?}", log_path);

    Some(guard)
}

fn get_log_path() -> PathBuf {
    if let Some(config_dir) = dirs::config_dir() {
        return config_dir.join("storecli").join("storecli.log");
    }
    if let Some(home) = dirs::home_dir() {
        return home.join(".storecli").join("storecli.log");
    }
    PathBuf::from("storecli.log")
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    let _log_guard = setup_logging(args.log_level);

    // All outcomes print and exit 0; errors are surfaced on stderr only.
    if let Err(err) = run(&args.command).await {
        eprintln!("Operation failed: {err:#}");
    }

    Ok(())
}

async fn run(tokens: &[String]) -> Result<()> {
    let command = command::parse(tokens);
    tracing::debug!("parsed command: {:?}", command);

    let client = StoreClient::new()?;
    dispatch::execute(command, &client).await
}
