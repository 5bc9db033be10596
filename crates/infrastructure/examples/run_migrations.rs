use infrastructure::{ServerConfig, connect_pool, run_migrations};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env
    dotenv::dotenv().ok();

    let config = ServerConfig::load("config")?;
    let pool = connect_pool(&config).await?;

    run_migrations(&pool).await?;
    println!("✅ registros_peso is up to date.");

    Ok(())
}
