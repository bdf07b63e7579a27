use clap::Parser;
use skirmish::{gateway, init_logging, SessionRegistry};
use std::sync::Arc;
use tokio::net::TcpListener;

#[derive(Parser)]
#[command(author, version, about = "Authoritative server for a two-player 5x5 skirmish", long_about = None)]
struct Cli {
    /// Address to listen on.
    #[arg(long, default_value = "0.0.0.0:8080")]
    bind: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let registry = Arc::new(SessionRegistry::new());
    let app = gateway::router(registry);

    let listener = TcpListener::bind(&cli.bind).await?;
    log::info!("listening on {}", listener.local_addr()?);
    axum::serve(listener, app).await?;
    Ok(())
}
