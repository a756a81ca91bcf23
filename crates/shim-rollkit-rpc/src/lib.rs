//! The API the ikura shim exposes to Rollkit rollup nodes (the "Rollkit dock").
//!
//! Both sides live here: rollup nodes use the generated [`RollkitRpcClient`] and shims implement
//! [`RollkitRpcServer`].

mod blob;
mod namespace;

pub use blob::Blob;
use jsonrpsee::{
    proc_macros::rpc,
    types::{ErrorCode, ErrorObject},
};
pub use namespace::{parse_namespace, Namespace, NamespaceError, NAMESPACE_SIZE};

/// JSON-RPC error code returned when a block at the requested height does not exist (yet).
pub const BLOCK_NOT_AVAILABLE_CODE: i32 = -32001;

/// Errors that can occur when processing Rollkit dock requests.
#[derive(Debug, Clone, thiserror::Error)]
pub enum ShimRpcError {
    /// The namespace parameter could not be parsed.
    #[error("Invalid namespace: {0}")]
    InvalidNamespace(#[from] NamespaceError),
    /// There is no block at the requested height.
    #[error("Block at height {height} is not available")]
    BlockNotAvailable { height: u64 },
    /// The blobs could not be submitted to the DA layer.
    #[error("Internal Error: failed to submit blobs: {0}")]
    Submission(String),
}

impl From<ShimRpcError> for ErrorObject<'_> {
    fn from(value: ShimRpcError) -> Self {
        let code = match value {
            ShimRpcError::InvalidNamespace(_) => ErrorCode::InvalidParams.code(),
            ShimRpcError::BlockNotAvailable { .. } => BLOCK_NOT_AVAILABLE_CODE,
            ShimRpcError::Submission(_) => ErrorCode::InternalError.code(),
        };
        Self::owned(code, value.to_string(), None::<()>)
    }
}

/// Result type for Rollkit dock methods.
pub type RpcResult<T = ()> = Result<T, ShimRpcError>;

/// The Rollkit dock.
///
/// Namespaces are hex strings and parameters are positional, as sent by Rollkit's Go client.
#[rpc(client, server)]
pub trait RollkitRpc {
    /// Retrieves the blobs at the given height from the data availability layer at the given
    /// namespace.
    #[method(name = "Rollkit.Retrieve")]
    async fn retrieve(&self, namespace: String, height: u64) -> RpcResult<Vec<Blob>>;

    /// Submits the given blobs to the data availability layer at the given namespace.
    /// Returns the height of the block that contains the blobs.
    #[method(name = "Rollkit.Submit")]
    async fn submit(&self, namespace: String, blobs: Vec<Blob>) -> RpcResult<u64>;
}
