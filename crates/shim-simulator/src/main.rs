use std::net::SocketAddr;

use anyhow::Context;
use clap::Parser;
use ikura_shim_simulator::{cli::Cli, logging::initialize_logging, start_server, SimulatedDa};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    initialize_logging()?;
    let cli = Cli::parse();

    let da = SimulatedDa::new().with_wait_attempts(cli.wait_attempts);
    let addr = SocketAddr::new(cli.address, cli.port);
    let (_, handle) = start_server(addr, da)
        .await
        .with_context(|| format!("Failed to start the shim on {addr}"))?;

    tokio::select! {
        _ = handle.clone().stopped() => {}
        res = tokio::signal::ctrl_c() => {
            res.context("Failed to listen for Ctrl-C")?;
            tracing::info!("Shutting down");
            handle.stop()?;
            handle.stopped().await;
        }
    }
    Ok(())
}
