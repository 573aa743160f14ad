use std::io;
use std::net::IpAddr;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use pattern_server::{router, PatternStore, DEFAULT_PORT};
use tokio::net::TcpListener;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(
    name = "pattern-server",
    about = "Local editor server for diagram pattern files."
)]
struct Args {
    /// Port to listen on.
    #[arg(long, env = "PORT", default_value_t = DEFAULT_PORT)]
    port: u16,

    /// Address to bind.
    #[arg(long, default_value = "127.0.0.1")]
    host: IpAddr,

    /// Directory holding the pattern files and the editor's static assets.
    #[arg(long, env = "PATTERN_DATA_DIR", default_value = ".")]
    data_dir: PathBuf,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("info,tower_http=debug"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let data_dir = args
        .data_dir
        .canonicalize()
        .with_context(|| format!("data directory {:?} is not accessible", args.data_dir))?;

    let listener = TcpListener::bind((args.host, args.port))
        .await
        .with_context(|| format!("could not bind {}:{}", args.host, args.port))?;

    tracing::info!(
        data_dir = %data_dir.display(),
        "pattern editor running at http://localhost:{}",
        args.port
    );
    tracing::info!("press Ctrl+C to stop");

    axum::serve(listener, router(PatternStore::new(data_dir)))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::error!(%err, "could not listen for Ctrl+C");
    }
}
