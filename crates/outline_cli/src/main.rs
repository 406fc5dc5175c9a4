//! Command-line driver for the outline core.
//!
//! # Responsibility
//! - Run one editor command per invocation against the local store.
//! - Load before and save after every mutating command.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use outline_core::db::open_db;
use outline_core::{
    init_logging, IndentDelta, Outline, OutlineConfig, OutlineService, RowId,
    SqliteSnapshotRepository,
};
use std::path::PathBuf;
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "outline")]
#[command(about = "Edit a nested outline of standards stored in local SQLite storage")]
#[command(version)]
struct Cli {
    /// SQLite storage file
    #[arg(long)]
    db: Option<PathBuf>,

    /// Key the outline is saved under
    #[arg(long)]
    key: Option<String>,

    /// Directory for rolling log files (logging is off when omitted)
    #[arg(long)]
    log_dir: Option<PathBuf>,

    /// trace|debug|info|warn|error
    #[arg(long)]
    log_level: Option<String>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Print the stored outline
    Show,
    /// Append a row at the last row's level
    Add {
        /// Initial text
        text: Option<String>,
    },
    /// Replace the text of a row
    Edit {
        /// Row position or id
        row: String,
        text: String,
    },
    /// Indent a row one level
    Indent { row: String },
    /// Outdent a row one level
    Outdent { row: String },
    /// Delete a row and everything nested under it
    Delete { row: String },
    /// Move the row at FROM to position TO
    Move { from: usize, to: usize },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = build_config(&cli)?;

    if let Some(log_dir) = &config.log_dir {
        init_logging(&config.log_level, log_dir).context("failed to initialize logging")?;
    }

    let conn = open_db(&config.db_path)
        .with_context(|| format!("failed to open {}", config.db_path.display()))?;
    let repo = SqliteSnapshotRepository::try_new(&conn)?;
    let mut service = OutlineService::with_storage_key(&repo, config.storage_key.as_str());
    service.load()?;

    let command = cli.command.unwrap_or(Commands::Show);
    let mutated = match command {
        Commands::Show => false,
        Commands::Add { text } => {
            service.add_row_with_text(text.unwrap_or_default());
            true
        }
        Commands::Edit { row, text } => {
            if let Some(id) = resolve_row(&service.outline(), &row) {
                service.edit_text(id, text);
            }
            true
        }
        Commands::Indent { row } => {
            if let Some(id) = resolve_row(&service.outline(), &row) {
                service.indent(id, IndentDelta::Indent);
            }
            true
        }
        Commands::Outdent { row } => {
            if let Some(id) = resolve_row(&service.outline(), &row) {
                service.indent(id, IndentDelta::Outdent);
            }
            true
        }
        Commands::Delete { row } => {
            if let Some(id) = resolve_row(&service.outline(), &row) {
                service.delete_row(id);
            }
            true
        }
        Commands::Move { from, to } => {
            service.move_row(from, to)?;
            true
        }
    };

    if mutated {
        service.save()?;
    }
    print!("{}", render(&service.outline()));
    Ok(())
}

fn build_config(cli: &Cli) -> Result<OutlineConfig> {
    let mut config = OutlineConfig::default();
    if let Some(db) = &cli.db {
        config = config.with_db_path(db);
    }
    if let Some(key) = &cli.key {
        config = config.with_storage_key(key);
    }
    if let Some(level) = &cli.log_level {
        config = config.with_log_level(level);
    }
    if let Some(log_dir) = &cli.log_dir {
        let log_dir = if log_dir.is_absolute() {
            log_dir.clone()
        } else {
            std::env::current_dir()
                .context("failed to resolve current directory")?
                .join(log_dir)
        };
        config = config.with_log_dir(log_dir);
    }
    Ok(config)
}

/// Accepts a row position as printed by `show`, or a full row id.
fn resolve_row(outline: &Outline, arg: &str) -> Option<RowId> {
    if let Ok(index) = arg.parse::<usize>() {
        return outline.get(index).map(|row| row.id);
    }
    Uuid::parse_str(arg).ok()
}

/// Levels past this still print their number but get no extra padding.
const MAX_RENDER_DEPTH: u32 = 16;

fn render(outline: &Outline) -> String {
    if outline.is_empty() {
        return "(empty outline)\n".to_string();
    }
    outline
        .iter()
        .enumerate()
        .map(|(index, row)| {
            format!(
                "{index:>3}  {}{}  L{}  [{}]\n",
                "  ".repeat(row.indent_level.min(MAX_RENDER_DEPTH) as usize),
                row.text,
                row.indent_level,
                row.id
            )
        })
        .collect()
}
