use std::net::SocketAddr;

use jsonrpsee::server::{Server, ServerHandle};
use tracing::info;

use crate::{dock::rollkit_methods, SimulatedDa};

/// Starts a JSON-RPC server (HTTP and WebSocket) serving the Rollkit dock from `da`.
///
/// Returns the address the server is bound to, which differs from `addr` when binding to port 0.
pub async fn start_server(
    addr: SocketAddr,
    da: SimulatedDa,
) -> std::io::Result<(SocketAddr, ServerHandle)> {
    let server = Server::builder().build(addr).await?;
    let local_addr = server.local_addr()?;
    let handle = server.start(rollkit_methods(da));
    info!(%local_addr, "Listening for rollup node requests");
    Ok((local_addr, handle))
}

#[cfg(test)]
mod tests {
    use ikura_shim_rollkit_rpc::{Blob, RollkitRpcClient};
    use jsonrpsee::http_client::HttpClientBuilder;

    use super::*;

    #[tokio::test(flavor = "multi_thread")]
    async fn serves_the_rollkit_dock() -> anyhow::Result<()> {
        let da = SimulatedDa::new().with_wait_attempts(0);
        let (addr, handle) = start_server("127.0.0.1:0".parse()?, da).await?;
        let client = HttpClientBuilder::default().build(format!("http://{addr}"))?;

        let blobs = vec![Blob::new(vec![1, 2]), Blob::new(vec![3])];
        let height = client.submit("0102".to_string(), blobs.clone()).await?;
        assert_eq!(height, 1);
        assert_eq!(client.retrieve("0102".to_string(), height).await?, blobs);

        let err = client
            .retrieve(String::new(), height)
            .await
            .unwrap_err()
            .to_string();
        assert!(err.contains("namespace must not be empty"), "{err}");

        let err = client
            .retrieve("0102".to_string(), 42)
            .await
            .unwrap_err()
            .to_string();
        assert!(err.contains("Block at height 42 is not available"), "{err}");

        handle.stop()?;
        Ok(())
    }
}
