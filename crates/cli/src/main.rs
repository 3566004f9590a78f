use std::path::Path;

use clap::Parser;
use coldvault_cli::{Cli, DEFAULT_DB_PATH};
use coldvault_glacier::GlacierClient;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let default_filter = if cli.debug {
        "coldvault_cli=debug,coldvault_db=debug,coldvault_glacier=debug,coldvault_core=debug"
    } else {
        "coldvault_cli=info,coldvault_db=info,coldvault_glacier=info,coldvault_core=info"
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_filter.into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let db_path =
        std::env::var("COLDVAULT_DB").unwrap_or_else(|_| DEFAULT_DB_PATH.to_string());
    let pool = coldvault_db::connect(Path::new(&db_path)).await?;

    let service = GlacierClient::from_env().await;

    coldvault_cli::run_action(&cli, &pool, &service).await
}
