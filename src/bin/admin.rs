//! CLI administration tool for clicks-and-views.
//!
//! Works directly against the database, without going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Count recorded events
//! cargo run --bin admin -- stats
//!
//! # Record a click (prompts for the URL if --url is omitted)
//! cargo run --bin admin -- record click --url https://example.com
//!
//! # List views for a URL after a date
//! cargo run --bin admin -- list view --url https://example.com --after 2024-04-01
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; see [`clicks_and_views::config`].

use clicks_and_views::application::services::EventService;
use clicks_and_views::config::{self, Config};
use clicks_and_views::domain::entities::{EventKind, NewEvent};
use clicks_and_views::domain::repositories::EventFilter;
use clicks_and_views::infrastructure::database;
use clicks_and_views::infrastructure::persistence::SqliteEventRepository;
use clicks_and_views::utils::timestamp::{format_timestamp, parse_timestamp};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::SqlitePool;
use std::sync::Arc;

/// CLI tool for managing clicks-and-views.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show event counts
    Stats,

    /// Record a single event
    Record {
        /// Event kind: click or view
        kind: EventKind,

        /// URL to record (prompted for if omitted)
        #[arg(short, long)]
        url: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List events with the same filters as the HTTP API
    List {
        /// Event kind: click or view
        kind: EventKind,

        /// Exact URL match
        #[arg(short, long)]
        url: Option<String>,

        /// Only events created strictly after this instant
        #[arg(long, value_parser = parse_bound)]
        after: Option<chrono::DateTime<chrono::Utc>>,

        /// Only events created strictly before this instant
        #[arg(long, value_parser = parse_bound)]
        before: Option<chrono::DateTime<chrono::Utc>>,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

fn parse_bound(raw: &str) -> Result<chrono::DateTime<chrono::Utc>, String> {
    parse_timestamp(raw).map_err(|e| e.to_string())
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config: Config = config::load_from_env()?;
    let pool = database::connect(&config).await?;
    database::migrate(&pool).await?;

    let result = match cli.command {
        Commands::Stats => handle_stats(&pool).await,
        Commands::Record { kind, url, yes } => record_event(&pool, kind, url, yes).await,
        Commands::List {
            kind,
            url,
            after,
            before,
        } => {
            let filter = EventFilter::new()
                .with_url(url)
                .with_after(after)
                .with_before(before);
            list_events(&pool, kind, filter).await
        }
        Commands::Db { action } => handle_db_action(action, &pool).await,
    };

    pool.close().await;
    result
}

fn service(pool: &SqlitePool, kind: EventKind) -> EventService<SqliteEventRepository> {
    EventService::new(Arc::new(SqliteEventRepository::new(
        Arc::new(pool.clone()),
        kind,
    )))
}

/// Displays the number of recorded events per kind.
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    for kind in EventKind::ALL {
        let count = service(pool, kind)
            .count()
            .await
            .map_err(|e| anyhow::anyhow!("Failed to count {}s: {}", kind, e))?;

        println!(
            "  {:<8} {}",
            format!("{}s:", kind.label()),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Records one event with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for the URL (or use provided)
/// 2. Confirm (unless `--yes` flag)
/// 3. Store and print the assigned id and timestamp
async fn record_event(
    pool: &SqlitePool,
    kind: EventKind,
    url: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    println!(
        "{}",
        format!("📝 Record {}", kind.label()).bright_blue().bold()
    );
    println!();

    let url = match url {
        Some(u) => u,
        None => Input::new().with_prompt("URL").interact_text()?,
    };

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!("Record a {} for {}?", kind.label(), url))
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let event = service(pool, kind)
        .record(NewEvent::new(url))
        .await
        .map_err(|e| anyhow::anyhow!("Failed to record {}: {}", kind, e))?;

    println!();
    println!("{}", "✅ Recorded".green().bold());
    println!("  ID:      {}", event.id.to_string().bright_white());
    println!("  URL:     {}", event.url.cyan());
    println!(
        "  Created: {}",
        format_timestamp(&event.created_at).bright_black()
    );
    println!();

    Ok(())
}

/// Lists events of one kind as a table.
///
/// # Output Format
///
/// ```text
/// 📋 Clicks
///
///   ID     Created              URL
///   ──────────────────────────────────────────────────────────────────────────
///   1      2024-01-02 00:00:00  https://example.com
/// ```
async fn list_events(pool: &SqlitePool, kind: EventKind, filter: EventFilter) -> Result<()> {
    println!(
        "{}",
        format!("📋 {}", kind.table()).bright_blue().bold()
    );
    println!();

    let events = service(pool, kind)
        .filter(filter)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list {}s: {}", kind, e))?;

    if events.is_empty() {
        println!("{}", "  No events found".yellow());
        println!();
        return Ok(());
    }

    println!(
        "  {:<6} {:<20} {}",
        "ID".bright_white().bold(),
        "Created".bright_white().bold(),
        "URL".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for event in &events {
        println!(
            "  {:<6} {:<20} {}",
            event.id.to_string().bright_black(),
            format_timestamp(&event.created_at),
            event.url.cyan()
        );
    }

    println!();
    println!(
        "  Total: {}",
        events.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1")
                .execute(pool)
                .await
                .context("Database connection failed")?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;

            println!("  SQLite: {}", version.bright_white());
            println!();
        }
    }

    Ok(())
}
