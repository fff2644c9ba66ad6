//! CLI administration tool for the HBnB API.
//!
//! Works directly on the configured storage backend, without going through
//! the HTTP API. Places have no HTTP surface, so this is how they are seeded.
//!
//! # Usage
//!
//! ```bash
//! # Object counts
//! cargo run --bin admin -- stats
//!
//! # Create a place owned by an existing user
//! cargo run --bin admin -- place create --name "Loft" --user-id <user-id>
//!
//! # List places
//! cargo run --bin admin -- place list
//!
//! # Check that storage is reachable
//! cargo run --bin admin -- storage check
//!
//! # Delete every review
//! cargo run --bin admin -- purge reviews -y
//! ```
//!
//! # Environment Variables
//!
//! Same as the server: `STORAGE_TYPE`, `STORAGE_FILE`, `DATABASE_URL`.

use hbnb_api::application::services::{PlaceService, StatsService};
use hbnb_api::config;
use hbnb_api::domain::entities::{NewPlace, ObjectKind};
use hbnb_api::domain::repositories::Storage;
use hbnb_api::infrastructure::persistence;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;

/// CLI tool for managing HBnB storage.
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
    /// Show object counts
    Stats,

    /// Manage places
    Place {
        #[command(subcommand)]
        action: PlaceAction,
    },

    /// Storage operations
    Storage {
        #[command(subcommand)]
        action: StorageAction,
    },

    /// Delete every object of a class
    Purge {
        /// Class or collection name (e.g. `Review` or `reviews`)
        kind: ObjectKind,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

#[derive(Subcommand)]
enum PlaceAction {
    /// Create a new place
    Create {
        /// Place name (prompted if omitted)
        #[arg(short, long)]
        name: Option<String>,

        /// Id of the owning user
        #[arg(short, long)]
        user_id: String,

        #[arg(short, long, default_value = "")]
        city_id: String,
    },

    /// List all places
    List,
}

#[derive(Subcommand)]
enum StorageAction {
    /// Check that the storage backend is reachable
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = config::load_from_env()?;
    let storage = persistence::connect(&config)
        .await
        .context("Failed to open storage")?;

    match cli.command {
        Commands::Stats => handle_stats(storage).await?,
        Commands::Place { action } => handle_place_action(action, storage).await?,
        Commands::Storage { action } => handle_storage_action(action, storage).await?,
        Commands::Purge { kind, yes } => purge(storage, kind, yes).await?,
    }

    Ok(())
}

async fn handle_stats(storage: Arc<dyn Storage>) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let counts = StatsService::new(storage).counts().await?;

    println!(
        "  Amenities: {}",
        counts.amenities.to_string().bright_white().bold()
    );
    println!(
        "  Places:    {}",
        counts.places.to_string().bright_white().bold()
    );
    println!(
        "  Reviews:   {}",
        counts.reviews.to_string().bright_white().bold()
    );
    println!(
        "  Users:     {}",
        counts.users.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn handle_place_action(action: PlaceAction, storage: Arc<dyn Storage>) -> Result<()> {
    let service = PlaceService::new(storage);

    match action {
        PlaceAction::Create {
            name,
            user_id,
            city_id,
        } => create_place(&service, name, user_id, city_id).await?,
        PlaceAction::List => list_places(&service).await?,
    }

    Ok(())
}

/// Creates a place after checking that its owner exists.
async fn create_place(
    service: &PlaceService<dyn Storage>,
    name: Option<String>,
    user_id: String,
    city_id: String,
) -> Result<()> {
    println!("{}", "🏠 Create Place".bright_blue().bold());
    println!();

    let name = match name {
        Some(n) => n,
        None => Input::new().with_prompt("Place name").interact_text()?,
    };

    let place = service
        .create_place(NewPlace {
            name,
            user_id,
            city_id,
            ..NewPlace::default()
        })
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create place: {}", e))?;

    println!("{}", "✅ Place created successfully!".green().bold());
    println!();
    println!("  Id:    {}", place.id.bright_yellow());
    println!("  Name:  {}", place.name.cyan());
    println!("  Owner: {}", place.user_id.bright_black());
    println!();

    Ok(())
}

/// Lists places, oldest first.
///
/// # Output Format
///
/// ```text
/// 📋 Places
///
///   Id                                     Name                 Created
///   ─────────────────────────────────────────────────────────────────────────
///   1c9e…                                  Loft                 2024-01-15 10:30
/// ```
async fn list_places(service: &PlaceService<dyn Storage>) -> Result<()> {
    println!("{}", "📋 Places".bright_blue().bold());
    println!();

    let places = service.list_places().await?;

    if places.is_empty() {
        println!("{}", "  No places found".yellow());
        println!();
        println!(
            "  Create one with: {} admin place create",
            "cargo run --bin".bright_cyan()
        );
        return Ok(());
    }

    println!(
        "  {:<38} {:<20} {:<16}",
        "Id".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(75).bright_black());

    for place in &places {
        println!(
            "  {:<38} {:<20} {}",
            place.id.bright_black(),
            place.name.cyan(),
            place
                .created_at
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        places.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn handle_storage_action(action: StorageAction, storage: Arc<dyn Storage>) -> Result<()> {
    match action {
        StorageAction::Check => {
            println!("{}", "🔍 Checking storage...".bright_blue().bold());

            match StatsService::new(storage).check_storage().await {
                Ok(()) => println!("{}", "✅ Storage is reachable".green().bold()),
                Err(e) => {
                    println!("{}", "❌ Storage check failed".red().bold());
                    return Err(e.into());
                }
            }
        }
    }

    Ok(())
}

/// Deletes every object of `kind` and saves once.
///
/// Requires confirmation (default: No) unless `-y` is given.
async fn purge(storage: Arc<dyn Storage>, kind: ObjectKind, skip_confirm: bool) -> Result<()> {
    println!("{}", format!("🗑  Purge {}", kind.collection()).bright_blue().bold());
    println!();

    let objects = storage.all(kind).await?;
    if objects.is_empty() {
        println!("{}", format!("  No {} stored", kind.collection()).yellow());
        return Ok(());
    }

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt(format!(
                "Delete {} {}?",
                objects.len(),
                kind.collection()
            ))
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    for object in objects.values() {
        storage.delete(object).await?;
    }
    storage.save().await?;

    println!(
        "{}",
        format!("✅ Deleted {} {}", objects.len(), kind.collection())
            .green()
            .bold()
    );
    println!();

    Ok(())
}
