//! Clinic front desk - Application entry point
//!
//! CLI-based entry point that dispatches to the server and client commands.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use frontdesk::{
    cli::{Cli, Commands},
    client::SessionStore,
    commands,
    config::Config,
};

#[tokio::main]
async fn main() {
    // .env may carry FRONTDESK_API_URL for the client commands
    dotenvy::dotenv().ok();

    // Parse CLI arguments
    let cli = Cli::parse();

    // Initialize tracing (verbose mode sets debug level)
    init_tracing(cli.verbose);

    let api_url = cli.api_url.as_str();
    let session = SessionStore::default_location();

    // Execute command
    let result = match cli.command {
        Commands::Serve(args) => commands::serve::execute(args, load_config()).await,
        Commands::Migrate(args) => commands::migrate::execute(args, load_config()).await,
        Commands::Signup(args) => commands::client::signup(args, api_url).await,
        Commands::Login(args) => commands::client::login(args, api_url, &session).await,
        Commands::Logout => commands::client::logout(&session).await,
        Commands::Dashboard(args) => commands::client::dashboard(args, api_url, &session).await,
        Commands::Queue(args) => commands::client::queue(args, api_url, &session).await,
        Commands::Appointments(args) => {
            commands::client::appointments(args, api_url, &session).await
        }
        Commands::Doctors => commands::client::doctors(api_url, &session).await,
    };

    // Handle errors
    if let Err(e) = result {
        tracing::error!("Command failed: {}", e);
        std::process::exit(1);
    }
}

/// Server-side configuration; client commands never need it
fn load_config() -> Config {
    let config = Config::from_env();
    tracing::debug!(?config, "Configuration loaded");
    config
}

/// Initialize tracing subscriber
fn init_tracing(verbose: bool) {
    let filter = if verbose {
        "debug".to_string()
    } else {
        std::env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string())
    };

    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(tracing_subscriber::EnvFilter::new(filter))
        .init();
}
