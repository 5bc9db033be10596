use anyhow::{Context, Result};
use clap::Parser;
use infrastructure::{ServerConfig, connect_pool, run_migrations};
use tracing::info;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use pesaje_server::{api, setup_app_state};

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Directory holding the optional `server` config file
    #[arg(long, default_value = "config")]
    config_dir: String,

    /// Bind address (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides config)
    #[arg(long)]
    port: Option<u16>,

    /// Verbose logging
    #[arg(long)]
    debug: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    // 0. Load configuration (fatal if DATABASE_URL is missing)
    dotenv::dotenv().ok();
    let config = ServerConfig::load(&args.config_dir)
        .context("Invalid server configuration")?
        .with_overrides(args.host, args.port, args.debug);

    // Initialize tracing
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.log_filter()));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("⚖️ Pesaje Server Starting...");

    // 1. Connect to Database
    let pool = connect_pool(&config).await?;

    // 1.1 Run Migrations
    if config.run_migrations {
        run_migrations(&pool).await?;
    }

    // 2. Start API Server
    let addr = config.bind_address();
    let state = setup_app_state(pool, config).await;
    let app = api::create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;
    info!("🚀 API Listening on http://{}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
