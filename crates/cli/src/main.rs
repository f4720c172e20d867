//! FoodieHub CLI - Menu inspection and seeding tools.
//!
//! # Usage
//!
//! ```bash
//! # List every menu item with a per-category summary
//! foodiehub menu list
//!
//! # Load the sample menu into an empty menu API
//! foodiehub menu seed --api-url http://localhost:8000
//! ```
//!
//! # Commands
//!
//! - `menu list` - Show all menu items
//! - `menu seed` - Add the sample dishes

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use url::Url;

mod commands;

#[derive(Parser)]
#[command(name = "foodiehub")]
#[command(author, version, about = "FoodieHub CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Inspect or seed the menu API
    Menu {
        #[command(subcommand)]
        action: MenuAction,
    },
}

#[derive(Subcommand)]
enum MenuAction {
    /// List all menu items
    List {
        /// Base URL of the menu API
        #[arg(long, env = "MENU_API_BASE_URL", default_value = "http://localhost:8000")]
        api_url: Url,
    },
    /// Add the sample menu if the API has no items
    Seed {
        /// Base URL of the menu API
        #[arg(long, env = "MENU_API_BASE_URL", default_value = "http://localhost:8000")]
        api_url: Url,
    },
}

#[tokio::main]
async fn main() {
    // Load .env before clap reads MENU_API_BASE_URL
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), commands::CommandError> {
    match cli.command {
        Commands::Menu { action } => match action {
            MenuAction::List { api_url } => commands::menu::list(&api_url).await?,
            MenuAction::Seed { api_url } => {
                commands::menu::seed(&api_url).await?;
            }
        },
    }
    Ok(())
}
