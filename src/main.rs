use anyhow::Result;
use tracing_subscriber::EnvFilter;
use url_encoder::config::{self, Config};
use url_encoder::server;

#[tokio::main]
async fn main() -> Result<()> {
    let _ = dotenvy::dotenv();

    let config = config::load_from_env()?;
    init_tracing(&config)?;
    config.print_summary();

    server::run(config).await
}

fn init_tracing(config: &Config) -> Result<()> {
    let filter = EnvFilter::try_new(&config.log_level)?;
    let builder = tracing_subscriber::fmt().with_env_filter(filter);

    if config.is_json_logging() {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
