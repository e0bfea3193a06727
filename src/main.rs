use std::fs::{self, File, OpenOptions};
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use chatdeck::config::StorageBackend;
use chatdeck::{
    util, Action, AppStateStore, Config, KeyValueStore, MemoryStore, SessionDefaults, UiStore,
};
use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "chatdeck", version, about = "Session UI state store for the chat client")]
struct Cli {
    /// Data directory (defaults to ~/.chatdeck)
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Keep state in memory instead of the SQLite database
    #[arg(long)]
    memory: bool,

    /// Initial viewport width
    #[arg(long, requires = "height")]
    width: Option<u32>,

    /// Initial viewport height
    #[arg(long, requires = "width")]
    height: Option<u32>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Dispatch JSON-lines actions from FILE (or stdin) and print the final state
    Apply { file: Option<PathBuf> },
    /// Print the initial state
    Show,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    util::init_data_dir(cli.data_dir);

    // Initialize logging to file (<data_dir>/logs/chatdeck.log)
    let log_path = util::log_file_path();
    if let Some(logs_dir) = log_path.parent() {
        fs::create_dir_all(logs_dir)?;
    }

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&log_path)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::WARN.into()),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let mut config = Config::load();
    if cli.memory {
        config = config.with_storage(StorageBackend::Memory);
    }
    if let (Some(width), Some(height)) = (cli.width, cli.height) {
        config = config.with_viewport(width, height);
    }

    let mut store = UiStore::new(open_storage(&config)?, SessionDefaults::from_config(&config));

    match cli.command {
        Command::Show => {}
        Command::Apply { file } => match file {
            Some(path) => {
                let file = File::open(&path)
                    .with_context(|| format!("failed to open {}", path.display()))?;
                apply_lines(&mut store, BufReader::new(file))?;
            }
            None => apply_lines(&mut store, io::stdin().lock())?,
        },
    }

    let snapshot = store.snapshot();
    println!("{}", serde_json::to_string_pretty(snapshot.as_ref())?);
    Ok(())
}

fn open_storage(config: &Config) -> Result<Arc<dyn KeyValueStore>> {
    match config.storage {
        StorageBackend::Memory => Ok(Arc::new(MemoryStore::new())),
        StorageBackend::Sqlite => {
            let store = AppStateStore::open(util::database_path())
                .context("failed to open state database")?;
            Ok(Arc::new(store))
        }
    }
}

/// Dispatch one action per non-empty line; bad lines are reported and skipped
fn apply_lines(store: &mut UiStore, reader: impl BufRead) -> Result<()> {
    for (index, line) in reader.lines().enumerate() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match serde_json::from_str::<Action>(line) {
            Ok(action) => store.dispatch(action),
            Err(e) => {
                tracing::warn!(line = index + 1, error = %e, "Skipping invalid action");
                eprintln!("line {}: invalid action: {e}", index + 1);
            }
        }
    }
    Ok(())
}
