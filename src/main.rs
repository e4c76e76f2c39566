use std::fs::{self, OpenOptions};
use std::path::PathBuf;

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};

use draftstore::{util, Config, Database, DraftKey, DraftKind, DraftRecordStore};

#[derive(Parser)]
#[command(
    name = "draftstore",
    version,
    about = "Inspect and manage locally persisted portal drafts"
)]
struct Cli {
    /// Override the data directory (default ~/.draftstore)
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// List stored drafts, most recently saved first
    List {
        /// Only drafts for this user id ("anon" for the anonymous scope)
        #[arg(long)]
        user: Option<String>,
        /// Only drafts of this kind (program, investment, project, application)
        #[arg(long)]
        kind: Option<DraftKind>,
    },
    /// Print the stored JSON for a draft key
    Show {
        /// Full draft key, e.g. "programDraft:u42"
        key: String,
    },
    /// Remove the stored draft for a key
    Clear {
        /// Full draft key, e.g. "applicationDraft:u42:prog-1"
        key: String,
    },
    /// Remove all stored drafts
    Purge {
        /// Confirm removal without prompting
        #[arg(long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    util::init_data_dir(cli.data_dir.clone());
    let config = Config::load();

    // Initialize logging to file (~/.draftstore/logs/draftstore.log)
    fs::create_dir_all(util::logs_dir())?;

    let log_file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(util::log_file_path())?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env().add_directive(
                config
                    .log_filter
                    .parse::<tracing_subscriber::filter::Directive>()
                    .unwrap_or_else(|_| tracing::Level::WARN.into()),
            ),
        )
        .with_writer(log_file)
        .with_ansi(false) // Disable ANSI colors in log file
        .init();

    let db =
        Database::open(config.database_path()).context("failed to open the draft database")?;
    let records = DraftRecordStore::new(db.connection());

    match cli.command {
        Command::List { user, kind } => list(&records, user.as_deref(), kind),
        Command::Show { key } => show(&records, &key),
        Command::Clear { key } => clear(&records, &key),
        Command::Purge { yes } => purge(&records, yes),
    }
}

fn list(records: &DraftRecordStore, user: Option<&str>, kind: Option<DraftKind>) -> Result<()> {
    let rows = match kind {
        Some(kind) => records.list_prefix(&format!("{}:", kind.prefix()))?,
        None => records.list()?,
    };

    let rows: Vec<_> = match user {
        Some(user) => rows
            .into_iter()
            .filter(|r| r.key.split(':').nth(1) == Some(user))
            .collect(),
        None => rows,
    };

    if rows.is_empty() {
        println!("No stored drafts.");
        return Ok(());
    }

    for record in rows {
        println!(
            "{}  {}",
            record.updated_at.format("%Y-%m-%d %H:%M:%S"),
            record.key
        );
    }
    Ok(())
}

fn show(records: &DraftRecordStore, key: &str) -> Result<()> {
    let key: DraftKey = key.parse()?;
    match records.get(key.as_str())? {
        Some(value) => {
            // Pretty-print when the stored text is valid JSON, raw otherwise
            match serde_json::from_str::<serde_json::Value>(&value) {
                Ok(json) => println!("{}", serde_json::to_string_pretty(&json)?),
                Err(_) => println!("{}", value),
            }
            Ok(())
        }
        None => bail!("no draft stored for {}", key),
    }
}

fn clear(records: &DraftRecordStore, key: &str) -> Result<()> {
    let key: DraftKey = key.parse()?;
    records.delete(key.as_str())?;
    println!("Cleared {}", key);
    Ok(())
}

fn purge(records: &DraftRecordStore, yes: bool) -> Result<()> {
    let count = records.list()?.len();
    if count == 0 {
        println!("No stored drafts.");
        return Ok(());
    }
    if !yes {
        bail!(
            "this would remove {} stored draft(s); pass --yes to confirm",
            count
        );
    }
    records.delete_all()?;
    println!("Removed {} draft(s)", count);
    Ok(())
}
