//! Dr.Debug Server
//!
//! Runs the chat backend as a standalone HTTP server.

use anyhow::Result;
use clap::Parser;
use std::path::Path;
use std::sync::Arc;
use tracing::info;

use drdebug::config::ModelsConfig;
use drdebug::llm::{FallbackCredentials, ProviderFactory};
use drdebug::modes::ModeCatalog;
use drdebug::server::{self, AppState};

#[derive(Parser, Debug)]
#[command(name = "drdebug-server")]
#[command(about = "Dr.Debug AI debugging assistant backend")]
struct Args {
    /// Server port
    #[arg(short, long, default_value = "8000", env = "DRDEBUG_PORT")]
    port: u16,

    /// Server host
    #[arg(long, default_value = "0.0.0.0", env = "DRDEBUG_HOST")]
    host: String,

    /// Path to the models.json configuration
    #[arg(long, default_value = "config/models.json", env = "DRDEBUG_MODELS_CONFIG")]
    models_config: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("drdebug=debug".parse()?)
                .add_directive("info".parse()?),
        )
        .init();

    let args = Args::parse();

    info!("Starting Dr.Debug server");
    info!("  Models config: {}", args.models_config);

    let models = ModelsConfig::load(Path::new(&args.models_config));
    let fallback = FallbackCredentials::from_env();

    let state = Arc::new(AppState {
        catalog: ModeCatalog::new(),
        models,
        factory: Arc::new(ProviderFactory::new(fallback)),
    });

    server::run(state, &args.host, args.port).await
}
