use anyhow::Result;
use clap::Parser;
use interview_api::{start_web_server, ConfigManager};
use std::path::PathBuf;
use tracing::info;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug)]
#[command(name = "voxhire", about = "Job application and mock interview API server")]
struct Args {
    /// Port to listen on
    #[arg(long, env = "ROCKET_PORT", default_value_t = 8000)]
    port: u16,

    /// SQLite database file (defaults to the environment base directory)
    #[arg(long)]
    database_path: Option<PathBuf>,

    /// Directory for uploaded resumes and audio answers
    #[arg(long)]
    uploads_dir: Option<PathBuf>,

    /// Shared secret for employer-only endpoints
    #[arg(long, env = "EMPLOYER_API_KEY")]
    employer_api_key: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging first
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::try_from_default_env()
                .unwrap_or(EnvFilter::new("interview_api=info,voxhire=info,rocket=warn")),
        )
        .init();

    let args = Args::parse();

    // Load configuration using unified ConfigManager
    let config = ConfigManager::load()?;
    config.ensure_directories().await?;

    let database_path = args
        .database_path
        .unwrap_or(config.environment.database_path);
    let uploads_dir = args.uploads_dir.unwrap_or(config.environment.uploads_path);

    info!("Starting Voxhire Job Application / Interview API Server");
    info!(
        "Environment: {}",
        std::env::var("ENVIRONMENT").unwrap_or_else(|_| "local".to_string())
    );

    start_web_server(args.port, database_path, uploads_dir, args.employer_api_key).await
}
