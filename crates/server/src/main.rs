//! Textvault server binary.
//!
//! Loads `.env` if present, builds the configuration from file and
//! environment sources, and runs the HTTP server until shutdown.

use server::ServerConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Optional .env file; absence is not an error
    dotenvy::dotenv().ok();

    let config = ServerConfig::load()?;
    server::start_server(config).await?;

    Ok(())
}
