use ikura_shim_rollkit_rpc::{
    parse_namespace, Blob, Namespace, RollkitRpcServer, RpcResult, ShimRpcError,
};
use jsonrpsee::Methods;
use tracing::{debug, info, warn};

use crate::{SimulatedDa, SimulatorError};

/// Returns the Rollkit dock methods backed by `da`, ready to be served.
pub fn rollkit_methods(da: SimulatedDa) -> Methods {
    debug!("enabling rollkit adapter dock");
    RollkitDock::new(da).into_rpc().into()
}

/// Serves the Rollkit dock from a [`SimulatedDa`].
pub struct RollkitDock {
    da: SimulatedDa,
}

impl RollkitDock {
    pub fn new(da: SimulatedDa) -> Self {
        Self { da }
    }
}

#[async_trait::async_trait]
impl RollkitRpcServer for RollkitDock {
    async fn retrieve(&self, namespace: String, height: u64) -> RpcResult<Vec<Blob>> {
        info!(%namespace, height, "retrieving blobs");
        let namespace = namespace_param(&namespace)?;
        let blobs = self
            .da
            .retrieve(namespace, height)
            .await
            .map_err(|e| match e {
                SimulatorError::BlockNotAvailable { height, .. } => {
                    ShimRpcError::BlockNotAvailable { height }
                }
            })?;
        Ok(blobs.into_iter().map(Blob::new).collect())
    }

    async fn submit(&self, namespace: String, blobs: Vec<Blob>) -> RpcResult<u64> {
        info!(%namespace, blobs = blobs.len(), "submitting blobs");
        let namespace = namespace_param(&namespace)?;
        let height = self
            .da
            .submit(namespace, blobs.into_iter().map(|blob| blob.data).collect())
            .await;
        Ok(height)
    }
}

fn namespace_param(namespace: &str) -> RpcResult<Namespace> {
    parse_namespace(namespace).map_err(|e| {
        warn!(namespace, error = %e, "rejected namespace");
        ShimRpcError::InvalidNamespace(e)
    })
}
