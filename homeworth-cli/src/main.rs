//! Homeworth CLI — serves a trained house-price model over HTTP.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

use homeworth_core::model::ModelStore;
use homeworth_core::server::AppContext;
use homeworth_core::service::PredictionService;

#[derive(Parser, Debug)]
#[command(name = "homeworth", version, about = "House-price prediction server")]
struct Cli {
    /// Path to the model artifact (overrides config)
    #[arg(short, long)]
    model: Option<PathBuf>,

    /// Host to bind (overrides config)
    #[arg(long)]
    host: Option<String>,

    /// Port to listen on (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Only log errors
    #[arg(short, long)]
    quiet: bool,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(clap::Subcommand, Debug)]
enum Command {
    /// Load the model artifact and print its feature schema
    Check,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    // Set up tracing: human-readable stderr + JSON file logging
    let filter = match cli.verbose {
        0 if cli.quiet => "error",
        0 => "info",
        1 => "debug",
        _ => "trace",
    };

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_filter(EnvFilter::new(filter));

    let log_dir = directories::ProjectDirs::from("dev", "homeworth", "homeworth")
        .map(|d| d.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("."));
    let _ = std::fs::create_dir_all(&log_dir);
    let file_appender = tracing_appender::rolling::daily(&log_dir, "homeworth.log");
    let (non_blocking, _guard) = tracing_appender::non_blocking(file_appender);
    let json_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_writer(non_blocking)
        .with_filter(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(json_layer)
        .init();

    // Load configuration, then apply CLI overrides
    let workspace = std::env::current_dir().ok();
    let mut config = homeworth_core::config::load_config(workspace.as_deref(), None)
        .map_err(|e| anyhow::anyhow!("Configuration error: {e}"))?;
    if let Some(model) = cli.model {
        config.model.path = model;
    }
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }

    if let Some(Command::Check) = cli.command {
        return check_artifact(&config.model.path);
    }

    // A bad artifact degrades to the unloaded sentinel; the server still
    // starts and reports the condition on every request.
    let store = ModelStore::load_or_unloaded(&config.model.path);
    if !store.is_loaded() {
        tracing::warn!(
            path = %config.model.path.display(),
            "starting without a model; /predict will return 500 until one is provided"
        );
    }

    let ctx = Arc::new(AppContext::new(PredictionService::new(store)));
    homeworth_core::server::run(ctx, &config.server).await?;
    Ok(())
}

fn check_artifact(path: &Path) -> anyhow::Result<()> {
    let store = ModelStore::load(path)?;
    println!("model artifact: {}", path.display());
    println!("features ({}):", store.feature_names().len());
    for name in store.feature_names() {
        println!("  {name}");
    }
    Ok(())
}
