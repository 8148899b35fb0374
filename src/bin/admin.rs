//! CLI administration tool for shorty.
//!
//! Talks to MongoDB directly with the same configuration as the server, so
//! shortlinks can be inspected and cleaned up without going through HTTP.
//!
//! # Usage
//!
//! ```bash
//! # List all shortlinks
//! cargo run --bin admin -- links list
//!
//! # Show one shortlink
//! cargo run --bin admin -- links show docs
//!
//! # Delete a shortlink
//! cargo run --bin admin -- links delete docs
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Remove every shortlink
//! cargo run --bin admin -- db purge --yes
//! ```

use shorty::config::{self, Config, mask_connection_string};
use shorty::domain::error::StoreError;
use shorty::domain::repositories::ShortlinkRepository;
use shorty::infrastructure::persistence::MongoShortlinkRepository;
use shorty::utils::validation::{INVALID_SHORT_MESSAGE, is_valid_short};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::Confirm;

/// CLI tool for managing shorty.
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
    /// Manage shortlinks
    Links {
        #[command(subcommand)]
        action: LinksAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Shortlink subcommands.
#[derive(Subcommand)]
enum LinksAction {
    /// List all shortlinks
    List,

    /// Show a single shortlink
    Show {
        /// Short key
        short: String,
    },

    /// Delete a shortlink
    Delete {
        /// Short key
        short: String,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show collection statistics
    Stats,

    /// Delete every shortlink
    Purge {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = config::load_from_env().context("Invalid configuration")?;

    let store = MongoShortlinkRepository::connect(
        &config.mongo_url,
        &config.database,
        &config.collection,
        config.store_timeout(),
    )
    .await
    .context("Failed to connect to MongoDB")?;

    let result = match cli.command {
        Commands::Links { action } => handle_links_action(action, &store).await,
        Commands::Db { action } => handle_db_action(action, &store, &config).await,
    };

    store.disconnect().await;
    result
}

/// Dispatches shortlink commands.
async fn handle_links_action(action: LinksAction, store: &MongoShortlinkRepository) -> Result<()> {
    match action {
        LinksAction::List => list_links(store).await,
        LinksAction::Show { short } => show_link(store, &short).await,
        LinksAction::Delete { short, yes } => delete_link(store, &short, yes).await,
    }
}

/// Lists all shortlinks.
///
/// # Output Format
///
/// ```text
/// 📋 Shortlinks
///
///   Short                Hits     Updated            Target
///   ──────────────────────────────────────────────────────────────────
///   docs                 12       2025-01-15 10:30   https://example.com/docs
/// ```
async fn list_links(store: &MongoShortlinkRepository) -> Result<()> {
    println!("{}", "📋 Shortlinks".bright_blue().bold());
    println!();

    let links = store
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list shortlinks: {}", e))?;

    if links.is_empty() {
        println!("{}", "  No shortlinks found".yellow());
        return Ok(());
    }

    println!(
        "  {:<20} {:<8} {:<18} {}",
        "Short".bright_white().bold(),
        "Hits".bright_white().bold(),
        "Updated".bright_white().bold(),
        "Target".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for link in &links {
        println!(
            "  {:<20} {:<8} {:<18} {}",
            link.short.cyan(),
            link.access_count.to_string().bright_green(),
            link.updated_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            link.long
        );
    }

    println!();
    println!("  Total: {}", links.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Prints every field of one shortlink.
async fn show_link(store: &MongoShortlinkRepository, short: &str) -> Result<()> {
    ensure_valid_short(short)?;

    let link = match store.find_by_short(short).await {
        Ok(link) => link,
        Err(StoreError::NotFound) => {
            println!("{}", format!("❌ No shortlink named '{short}'").red());
            return Ok(());
        }
        Err(e) => return Err(anyhow::anyhow!("Database error: {}", e)),
    };

    println!("{}", "🔗 Shortlink".bright_blue().bold());
    println!();
    println!("  Short:       {}", link.short.cyan());
    println!("  Target:      {}", link.long);
    println!("  Description: {}", link.description);
    println!(
        "  Hits:        {}",
        link.access_count.to_string().bright_green().bold()
    );
    println!("  Created:     {}", link.created_at.to_rfc3339());
    println!("  Updated:     {}", link.updated_at.to_rfc3339());
    println!("  ID:          {}", link.id.bright_black());
    println!();

    Ok(())
}

/// Deletes one shortlink after confirmation.
async fn delete_link(store: &MongoShortlinkRepository, short: &str, skip_confirm: bool) -> Result<()> {
    ensure_valid_short(short)?;

    println!("{}", "🗑️  Delete Shortlink".bright_blue().bold());
    println!();
    println!("  Short: {}", short.cyan());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete this shortlink?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = store
        .delete(short)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to delete shortlink: {}", e))?;

    if deleted == 0 {
        println!("{}", "⚠️  Nothing to delete".yellow());
    } else {
        println!("{}", "✅ Shortlink deleted".green().bold());
    }
    println!();

    Ok(())
}

fn ensure_valid_short(short: &str) -> Result<()> {
    if !is_valid_short(short) {
        anyhow::bail!("{}", INVALID_SHORT_MESSAGE);
    }
    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(
    action: DbAction,
    store: &MongoShortlinkRepository,
    config: &Config,
) -> Result<()> {
    match action {
        DbAction::Check => check_connection(store, config).await,
        DbAction::Stats => show_stats(store, config).await,
        DbAction::Purge { yes } => purge(store, config, yes).await,
    }
}

/// Pings the server.
async fn check_connection(store: &MongoShortlinkRepository, config: &Config) -> Result<()> {
    println!("{}", "🔍 Checking database connection...".bright_blue());
    println!();

    store
        .ping()
        .await
        .map_err(|e| anyhow::anyhow!("Ping failed: {}", e))?;

    println!("{}", "✅ Database connection OK".green().bold());
    println!("  Server:     {}", mask_connection_string(&config.mongo_url));
    println!("  Database:   {}", config.database.cyan());
    println!("  Collection: {}", config.collection.cyan());
    println!();

    Ok(())
}

/// Displays collection statistics.
///
/// Shows:
/// - Total number of shortlinks
/// - Total number of redirects served
async fn show_stats(store: &MongoShortlinkRepository, config: &Config) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let count = store
        .count()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to count shortlinks: {}", e))?;

    let hits: i64 = store
        .list_all()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list shortlinks: {}", e))?
        .iter()
        .map(|link| link.access_count)
        .sum();

    println!(
        "  Collection: {}.{}",
        config.database.cyan(),
        config.collection.cyan()
    );
    println!(
        "  Shortlinks: {}",
        count.to_string().bright_green().bold()
    );
    println!("  Redirects:  {}", hits.to_string().bright_green().bold());
    println!();

    Ok(())
}

/// Deletes every shortlink after confirmation.
async fn purge(store: &MongoShortlinkRepository, config: &Config, skip_confirm: bool) -> Result<()> {
    println!("{}", "🧹 Purge Shortlinks".bright_blue().bold());
    println!();
    println!(
        "  This removes every shortlink from {}.{}",
        config.database.cyan(),
        config.collection.cyan()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Delete ALL shortlinks?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let deleted = store
        .purge()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to purge shortlinks: {}", e))?;

    println!(
        "{}",
        format!("✅ Removed {deleted} shortlinks").green().bold()
    );
    println!();

    Ok(())
}
