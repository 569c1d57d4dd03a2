use shop_app::Demo;
use shop_core::config::Config;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env for ESTIMATED_DELIVERY_DAYS / DEFAULT_SHIPPING_FEE_CENTS when present.
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt()
        .with_env_filter(std::env::var("RUST_LOG").unwrap_or_else(|_| "debug".to_string()))
        .init();

    let config = Config::from_env()?;
    Demo::new(config).run().await?;
    Ok(())
}
