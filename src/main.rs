use clap::Parser;
use mixtail_api::{ExplainerConfig, RestApi, SimilarityExplainer};
use mixtail_catalog::load_catalog;
use mixtail_core::Recommender;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{info, Level};
use tracing_subscriber::FmtSubscriber;

/// An in-memory cocktail recommendation engine
#[derive(Parser, Debug)]
#[command(name = "mixtail")]
#[command(about = "An in-memory cocktail recommendation engine", long_about = None)]
struct Args {
    /// Path to the cocktails CSV export
    #[arg(short, long, default_value = "./cocktails.csv")]
    catalog: PathBuf,

    /// HTTP API port
    #[arg(long, default_value_t = 8000)]
    http_port: u16,

    /// Base URL of the chat-completions service backing similarity search
    #[arg(long, default_value = mixtail_api::DEFAULT_BASE_URL)]
    openai_base_url: String,

    /// Model the similarity explainer asks for
    #[arg(long, default_value = mixtail_api::DEFAULT_MODEL)]
    openai_model: String,

    /// Log level
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let log_level = match args.log_level.as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    let subscriber = FmtSubscriber::builder()
        .with_max_level(log_level)
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting mixtail v{}", env!("CARGO_PKG_VERSION"));
    info!("Catalog: {:?}", args.catalog);
    info!("HTTP API port: {}", args.http_port);

    let catalog = load_catalog(&args.catalog)?;
    info!("Catalog loaded: {} recipes", catalog.len());

    let engine = Arc::new(Recommender::new(catalog)?);
    info!("Engine built: {} distinct ingredients", engine.ingredients().len());

    let explainer = match std::env::var("OPENAI_API_KEY") {
        Ok(key) if !key.is_empty() => {
            info!("Similarity explainer enabled (model {})", args.openai_model);
            let config = ExplainerConfig::new(key)
                .base_url(args.openai_base_url)
                .model(args.openai_model);
            Some(Arc::new(SimilarityExplainer::new(config)))
        }
        _ => {
            info!("OPENAI_API_KEY not set; similarity search disabled");
            None
        }
    };

    let engine_http = engine.clone();
    let http_port = args.http_port;
    let http_handle = std::thread::spawn(move || {
        info!("Starting HTTP server on port {}", http_port);
        let sys = actix_web::rt::System::new();
        sys.block_on(async {
            if let Err(e) = RestApi::start(engine_http, explainer, http_port).await {
                eprintln!("HTTP server error: {}", e);
            }
        })
    });

    info!("mixtail started successfully");
    info!("HTTP API: http://localhost:{}/", args.http_port);

    tokio::select! {
        _ = tokio::signal::ctrl_c() => {
            info!("Shutdown signal received");
        }
        _ = tokio::task::spawn_blocking(move || {
            http_handle.join().ok();
        }) => {
            info!("HTTP server stopped");
        }
    }

    info!("Shutting down...");
    Ok(())
}
