use std::net::SocketAddr;
use clap::Parser;
use tokio::net::TcpListener;
use tracing::{info, warn};
use assistant_gateway::{config::Config, routes::create_router, utils::init_logger, AppState};

#[derive(Debug, Parser)]
#[command(name = "assistant-gateway", version, about = "HTTP gateway for the browser assistant")]
struct Cli {
    /// Bind host (overrides HOST)
    #[arg(long)]
    host: Option<String>,

    /// Bind port (overrides PORT)
    #[arg(long)]
    port: Option<u16>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger();

    // Load configuration
    let mut config = Config::from_env()?;
    if let Some(host) = cli.host {
        config.server.host = host;
    }
    if let Some(port) = cli.port {
        config.server.port = port;
    }
    info!("Configuration loaded: {:?}", config.server);
    info!("Inference: {:?}", config.inference);
    if !config.inference.is_configured() {
        warn!("HF_TOKEN is not set; generation endpoints will answer with a configuration error");
    }

    // Create shared state
    let state = AppState::from_config(config.clone())?;

    // Create router
    let app = create_router(state);

    // Start server
    let listener = TcpListener::bind((config.server.host.as_str(), config.server.port)).await?;
    let addr: SocketAddr = listener.local_addr()?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .await
        .map_err(|e| anyhow::anyhow!("Server error: {}", e))?;

    Ok(())
}
