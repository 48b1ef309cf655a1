//! CLI administration tool for the courier portal.
//!
//! Generates the admin credentials the server reads from the environment,
//! inspects shipments and runs database diagnostics without going through
//! the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Hash the admin password for ADMIN_PASSWORD_HASH
//! cargo run --bin admin -- password hash
//!
//! # Generate a SESSION_SECRET
//! cargo run --bin admin -- secret generate
//!
//! # List shipments / show one with its events
//! cargo run --bin admin -- shipment list
//! cargo run --bin admin -- shipment show FR123456789
//!
//! # Shipment counts per status
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` or `DB_*` components: required for shipment, stats and db commands

use courier_portal::application::services::ShipmentService;
use courier_portal::config::Config;
use courier_portal::infrastructure::persistence::PgShipmentRepository;
use courier_portal::utils::status;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Password};
use sqlx::PgPool;
use std::sync::Arc;

const SECRET_LEN: usize = 48;

/// CLI tool for managing the courier portal.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Admin password helpers
    Password {
        #[command(subcommand)]
        action: PasswordAction,
    },

    /// Session secret helpers
    Secret {
        #[command(subcommand)]
        action: SecretAction,
    },

    /// Inspect shipments
    Shipment {
        #[command(subcommand)]
        action: ShipmentAction,
    },

    /// Show shipment counts per status
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

#[derive(Subcommand)]
enum PasswordAction {
    /// Print a bcrypt hash for ADMIN_PASSWORD_HASH
    Hash {
        /// Password to hash (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
}

#[derive(Subcommand)]
enum SecretAction {
    /// Print a random value for SESSION_SECRET
    Generate,
}

#[derive(Subcommand)]
enum ShipmentAction {
    /// List all shipments, newest first
    List,

    /// Show one shipment with its event history
    Show {
        /// Tracking number
        tracking_number: String,
    },
}

#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Commands::Password {
            action: PasswordAction::Hash { password },
        } => hash_password(password).await?,
        Commands::Secret {
            action: SecretAction::Generate,
        } => println!("{}", generate_secret()),
        Commands::Shipment { action } => {
            let pool = connect().await?;
            handle_shipment_action(action, pool).await?;
        }
        Commands::Stats => handle_stats(connect().await?).await?,
        Commands::Db { action } => handle_db_action(action, &connect().await?).await?,
    }

    Ok(())
}

async fn connect() -> Result<PgPool> {
    let database_url = Config::load_database_url()?;

    PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")
}

fn shipment_service(pool: PgPool) -> ShipmentService {
    ShipmentService::new(Arc::new(PgShipmentRepository::new(Arc::new(pool))))
}

/// Hashes the admin password with bcrypt.
///
/// Only the hash is printed to stdout, so the output can be captured
/// directly into an environment variable.
async fn hash_password(password: Option<String>) -> Result<()> {
    let password = match password {
        Some(p) => p,
        None => Password::new()
            .with_prompt("Admin password")
            .with_confirmation("Repeat password", "Passwords do not match")
            .interact()?,
    };

    if password.len() < 8 {
        let proceed = Confirm::new()
            .with_prompt("Password is shorter than 8 characters. Continue?")
            .default(false)
            .interact()?;
        if !proceed {
            eprintln!("{}", "Cancelled".red());
            return Ok(());
        }
    }

    let hash = tokio::task::spawn_blocking(move || bcrypt::hash(password, bcrypt::DEFAULT_COST))
        .await?
        .context("Failed to hash password")?;

    eprintln!("{}", "Set this as ADMIN_PASSWORD_HASH:".bright_white());
    println!("{hash}");

    Ok(())
}

/// Generates a random alphanumeric secret, long enough for HS256 keys.
fn generate_secret() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";

    let mut rng = rand::rng();

    (0..SECRET_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}

async fn handle_shipment_action(action: ShipmentAction, pool: PgPool) -> Result<()> {
    let service = shipment_service(pool);

    match action {
        ShipmentAction::List => list_shipments(&service).await,
        ShipmentAction::Show { tracking_number } => {
            show_shipment(&service, &tracking_number).await
        }
    }
}

/// Lists shipments as a table.
///
/// ```text
///   Tracking             Sender               Receiver             Status             Created
///   ───────────────────────────────────────────────────────────────────────────────────────────────
///   FR123456789          Alice                Bob                  IN TRANSIT         2025-01-15 10:30
/// ```
async fn list_shipments(service: &ShipmentService) -> Result<()> {
    println!("{}", "Shipments".bright_blue().bold());
    println!();

    let shipments = service.get_all_shipments().await;

    if shipments.is_empty() {
        println!("{}", "  No shipments found".yellow());
        return Ok(());
    }

    println!(
        "  {:<20} {:<20} {:<20} {:<18} {}",
        "Tracking".bright_white().bold(),
        "Sender".bright_white().bold(),
        "Receiver".bright_white().bold(),
        "Status".bright_white().bold(),
        "Created".bright_white().bold()
    );
    println!("  {}", "─".repeat(95).bright_black());

    for s in &shipments {
        println!(
            "  {:<20} {:<20} {:<20} {:<18} {}",
            s.tracking_number.cyan(),
            s.sender.name,
            s.receiver.name,
            status::display(&s.status),
            s.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black()
        );
    }

    println!();
    println!(
        "  Total: {}",
        shipments.len().to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

async fn show_shipment(service: &ShipmentService, tracking_number: &str) -> Result<()> {
    let shipment = service
        .get_shipment(tracking_number.trim())
        .await
        .context("Shipment not found")?;

    println!(
        "{} {}",
        "Shipment".bright_blue().bold(),
        shipment.tracking_number.cyan().bold()
    );
    println!();
    println!("  Status:    {}", status::display(&shipment.status).bright_white());
    println!("  Service:   {}", shipment.service_type);
    println!("  Weight:    {}", shipment.weight);
    println!("  Sent:      {}", shipment.date_sent);
    println!("  ETA:       {}", shipment.estimated_delivery);
    println!(
        "  Sender:    {} ({})",
        shipment.sender.name, shipment.sender.address
    );
    println!(
        "  Receiver:  {} ({})",
        shipment.receiver.name, shipment.receiver.address
    );
    println!();
    println!("{}", "  Events".bright_white().bold());
    println!("  {}", "─".repeat(75).bright_black());

    for event in &shipment.events {
        println!(
            "  {}  {:<18} {:<22} {}",
            event
                .timestamp
                .format("%Y-%m-%d %H:%M")
                .to_string()
                .bright_black(),
            status::display(&event.status),
            event.location.cyan(),
            event.description
        );
    }
    println!();

    Ok(())
}

/// Displays shipment counts per status.
async fn handle_stats(pool: PgPool) -> Result<()> {
    println!("{}", "Statistics".bright_blue().bold());
    println!();

    let counts = shipment_service(pool).status_counts().await;
    let total: i64 = counts.iter().map(|c| c.count).sum();

    for c in &counts {
        println!(
            "  {:<20} {}",
            status::display(&c.status),
            c.count.to_string().bright_green().bold()
        );
    }
    println!("  {}", "─".repeat(30).bright_black());
    println!(
        "  {:<20} {}",
        "TOTAL",
        total.to_string().bright_white().bold()
    );
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;
            let shipments: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shipments")
                .fetch_one(pool)
                .await?;
            let events: i64 = sqlx::query_scalar("SELECT COUNT(*) FROM shipment_events")
                .fetch_one(pool)
                .await?;

            println!("  PostgreSQL: {}", version.bright_white());
            println!("  Shipments:  {}", shipments.to_string().bright_white());
            println!("  Events:     {}", events.to_string().bright_white());
            println!();
        }
    }

    Ok(())
}
