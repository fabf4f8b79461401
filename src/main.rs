//! Catalog engine - line-oriented JSON query runner
//!
//! Reads one JSON request per line on stdin and writes one JSON response
//! per line on stdout. Logs go to stderr.

use std::sync::Arc;

use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use catalog_engine::{
    api,
    config::{AppConfig, LoggingConfig},
    repository::{CatalogSeed, InMemoryCatalog, Repository},
    services::Services,
    AppState,
};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let config = AppConfig::load()?;
    init_tracing(&config.logging);

    tracing::info!("Starting catalog engine v{}", env!("CARGO_PKG_VERSION"));

    let seed = match config.seed.path.as_deref().filter(|p| !p.is_empty()) {
        Some(path) => CatalogSeed::from_file(path).await?,
        None => {
            tracing::warn!("No seed file configured, starting with an empty catalog");
            CatalogSeed::default()
        }
    };
    let repository: Repository = Arc::new(InMemoryCatalog::from_seed(seed));

    let state = AppState {
        services: Arc::new(Services::new(repository, config.catalog.clone())),
        config: Arc::new(config),
    };
    tracing::debug!("Catalog settings: {:?}", state.config.catalog);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut stdout = tokio::io::stdout();
    let mut handled = 0usize;

    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let response = api::handle(&state.services, line).await;
        stdout.write_all(response.to_string().as_bytes()).await?;
        stdout.write_all(b"\n").await?;
        stdout.flush().await?;
        handled += 1;
    }

    tracing::info!("Input closed after {} request(s)", handled);
    Ok(())
}

/// Install the global subscriber. `RUST_LOG` overrides the configured level.
fn init_tracing(logging: &LoggingConfig) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| format!("catalog_engine={}", logging.level).into());

    let registry = tracing_subscriber::registry().with(filter);
    if logging.format == "json" {
        registry
            .with(tracing_subscriber::fmt::layer().json().with_writer(std::io::stderr))
            .init();
    } else {
        registry
            .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
            .init();
    }
}
