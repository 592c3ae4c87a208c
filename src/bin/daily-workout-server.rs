// ABOUTME: Daily workout server binary: loads configuration, opens the store and serves the API
// ABOUTME: Also grants or revokes the admin role on a user's profile from the command line
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2025 Pierre Fitness Intelligence

//! # Daily Workout Server Binary
//!
//! ```bash
//! # Serve the API (default command)
//! daily-workout-server --http-port 8081
//!
//! # Give a user access to the admin listing
//! daily-workout-server grant-admin --user-id 5f0c...
//!
//! # Take it away again
//! daily-workout-server revoke-admin --user-id 5f0c...
//! ```

use anyhow::{Context, Result};
use chrono::Utc;
use clap::{Parser, Subcommand};
use daily_workout_server::{
    config::{DatabaseUrl, ServerConfig},
    database::Database,
    llm::{LlmProvider, OpenAiCompatibleConfig, OpenAiCompatibleProvider},
    logging,
    models::{Profile, ProfileRole},
    server::{self, ServerResources},
};
use std::sync::Arc;
use tracing::{error, info};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "daily-workout-server")]
#[command(about = "Daily Workout Server - one AI-generated workout per user per day")]
struct Args {
    #[command(subcommand)]
    command: Option<Command>,

    /// Override HTTP port
    #[arg(long, global = true)]
    http_port: Option<u16>,

    /// Override database URL
    #[arg(long, global = true)]
    database_url: Option<String>,
}

#[derive(Subcommand)]
enum Command {
    /// Serve the HTTP API (default)
    Serve,
    /// Set a user's profile role to admin, creating the profile if needed
    GrantAdmin {
        /// User id from the identity provider
        #[arg(long)]
        user_id: Uuid,

        /// Display name stored on a newly created profile
        #[arg(long)]
        display_name: Option<String>,
    },
    /// Set a user's profile role back to user
    RevokeAdmin {
        /// User id from the identity provider
        #[arg(long)]
        user_id: Uuid,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();
    logging::init_from_env()?;

    let mut config = ServerConfig::from_env()?;
    if let Some(http_port) = args.http_port {
        config.http_port = http_port;
    }
    if let Some(database_url) = args.database_url.as_deref() {
        config.database.url = DatabaseUrl::parse_url(database_url);
    }
    config.validate()?;

    let database = Database::new(&config.database.url)
        .await
        .context("Failed to open database")?;

    match args.command.unwrap_or(Command::Serve) {
        Command::Serve => run_server(config, database).await,
        Command::GrantAdmin {
            user_id,
            display_name,
        } => set_role(&database, user_id, display_name, ProfileRole::Admin).await,
        Command::RevokeAdmin { user_id } => {
            set_role(&database, user_id, None, ProfileRole::User).await
        }
    }
}

async fn run_server(config: ServerConfig, database: Database) -> Result<()> {
    info!("Starting Daily Workout Server");
    info!("{}", config.summary());

    let provider = OpenAiCompatibleProvider::new(OpenAiCompatibleConfig::from(&config.llm))
        .context("Failed to create completion provider")?;
    let llm: Arc<dyn LlmProvider> = Arc::new(provider);
    let resources = Arc::new(ServerResources::new(Arc::new(config), database, llm));

    if let Err(e) = server::serve(resources).await {
        error!("Server error: {e:#}");
        return Err(e);
    }
    Ok(())
}

async fn set_role(
    database: &Database,
    user_id: Uuid,
    display_name: Option<String>,
    role: ProfileRole,
) -> Result<()> {
    let existing = database.get_profile(user_id).await?;
    let profile = match existing {
        Some(profile) => Profile {
            role,
            display_name: display_name.or(profile.display_name),
            ..profile
        },
        None => Profile {
            id: user_id,
            display_name,
            role,
            created_at: Utc::now(),
        },
    };

    database.upsert_profile(&profile).await?;
    info!(user.id = %user_id, role = role.as_str(), "Profile role updated");
    println!("Profile {user_id} now has role '{}'", role.as_str());
    Ok(())
}
