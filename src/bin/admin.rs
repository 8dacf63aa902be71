//! CLI diagnostics tool for link-redirect.
//!
//! An operator tool run beside the service; the redirect service itself
//! takes no command-line input.
//!
//! Read-only: it inspects the link store and shows how a slug would
//! resolve, without touching click counters. Creating or editing links
//! belongs to the external management surface.
//!
//! # Usage
//!
//! ```bash
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Show link and click counts
//! cargo run --bin admin -- db info
//!
//! # Show how a slug resolves
//! cargo run --bin admin -- link show "Tool"
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `DEFAULT_REDIRECT_URL` (optional): default destination shown by `link show`

use link_redirect::domain::destination::{DestinationSource, select_destination};
use link_redirect::domain::repositories::LinkRepository;
use link_redirect::domain::slug::Slug;
use link_redirect::infrastructure::persistence::PgLinkRepository;
use link_redirect::utils::mask::mask_connection_string;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for inspecting link-redirect data.
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
    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Inspect links
    Link {
        #[command(subcommand)]
        action: LinkAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show link and click counts
    Info,
}

/// Link inspection subcommands.
#[derive(Subcommand)]
enum LinkAction {
    /// Show the record a slug resolves to and its chosen destination
    Show {
        /// Raw slug, sanitized the same way as incoming requests
        slug: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Db { action } => handle_db_action(action, &pool, &database_url).await?,
        Commands::Link { action } => handle_link_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches database commands.
async fn handle_db_action(action: DbAction, pool: &PgPool, database_url: &str) -> Result<()> {
    match action {
        DbAction::Check => {
            let repo = PgLinkRepository::new(Arc::new(pool.clone()));
            repo.ping()
                .await
                .map_err(|e| anyhow::anyhow!("Database check failed: {}", e))?;

            println!("{}", "✅ Database connection OK".green().bold());
            println!("  {}", mask_connection_string(database_url).dimmed());
        }
        DbAction::Info => {
            let (total, active, clicks): (i64, i64, i64) = sqlx::query_as(
                r#"
                SELECT
                    COUNT(*),
                    COUNT(*) FILTER (WHERE active),
                    COALESCE(SUM(clicks), 0)::BIGINT
                FROM links
                "#,
            )
            .fetch_one(pool)
            .await
            .context("Failed to query link statistics")?;

            println!("{}", "📊 Link store".bright_blue().bold());
            println!();
            println!("  Links:        {}", total.to_string().cyan());
            println!("  Active links: {}", active.to_string().green());
            println!("  Inactive:     {}", (total - active).to_string().yellow());
            println!("  Total clicks: {}", clicks.to_string().bright_white().bold());
        }
    }

    Ok(())
}

/// Dispatches link inspection commands.
async fn handle_link_action(action: LinkAction, pool: &PgPool) -> Result<()> {
    match action {
        LinkAction::Show { slug } => show_link(pool, &slug).await,
    }
}

/// Prints the record matching `raw_slug` and the destination it would get.
///
/// Click counters are left untouched.
async fn show_link(pool: &PgPool, raw_slug: &str) -> Result<()> {
    let slug = match Slug::parse(raw_slug) {
        Ok(slug) => slug,
        Err(e) => {
            println!("{} {}", "❌ Rejected:".red().bold(), e);
            println!("  Requests for this slug get the default redirect.");
            return Ok(());
        }
    };

    let repo = PgLinkRepository::new(Arc::new(pool.clone()));
    let record = repo
        .find_active_by_slug(&slug)
        .await
        .map_err(|e| anyhow::anyhow!("Lookup failed: {}", e))?;

    let Some(record) = record else {
        println!(
            "{} no active link for {}",
            "🔍 Not found:".yellow().bold(),
            slug.as_str().cyan()
        );
        println!("  Requests for this slug get the default redirect.");
        return Ok(());
    };

    let default_url = std::env::var("DEFAULT_REDIRECT_URL")
        .unwrap_or_else(|_| "https://cogiflow.ai".to_string());
    let destination = select_destination(
        record.redirect_url.as_deref(),
        record.fallback_url.as_deref(),
        default_url.trim(),
    );

    let source = match destination.source {
        DestinationSource::Primary => "primary".green(),
        DestinationSource::Fallback => "fallback".yellow(),
        DestinationSource::Default => "default".red(),
    };

    println!("{}", "🔗 Link".bright_blue().bold());
    println!();
    println!("  ID:           {}", record.id);
    println!("  Slug:         {}", record.slug.cyan());
    println!(
        "  Redirect URL: {}",
        record.redirect_url.as_deref().unwrap_or("-")
    );
    println!(
        "  Fallback URL: {}",
        record.fallback_url.as_deref().unwrap_or("-")
    );
    println!("  Clicks:       {}", record.clicks);
    println!(
        "  Created:      {}",
        record.created_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    println!();
    println!(
        "  Resolves to:  {} ({})",
        destination.url.bright_white().bold(),
        source
    );

    Ok(())
}
