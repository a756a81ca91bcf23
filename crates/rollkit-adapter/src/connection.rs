//! Transport between the adapter and the ikura shim.

use async_trait::async_trait;
use ikura_shim_rollkit_rpc::{Blob, RollkitRpcClient};
use jsonrpsee::{
    core::ClientError,
    http_client::{HttpClient, HttpClientBuilder},
    ws_client::{WsClient, WsClientBuilder},
};
use tracing::debug;

/// Opens connections to a shim.
#[async_trait]
pub trait ShimConnector: Send + Sync + 'static {
    type Connection: ShimConnection;
    type Error: std::error::Error + Send + Sync + 'static;

    async fn connect(&self, base_url: &str) -> Result<Self::Connection, Self::Error>;
}

/// An open connection to a shim serving the Rollkit dock.
#[async_trait]
pub trait ShimConnection: Send + Sync + 'static {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Submits `blobs` under `namespace` and returns the height of the DA block including them.
    async fn submit(&self, namespace: &str, blobs: Vec<Blob>) -> Result<u64, Self::Error>;

    /// Returns the blobs under `namespace` at `height`.
    async fn retrieve(&self, namespace: &str, height: u64) -> Result<Vec<Blob>, Self::Error>;
}

#[derive(Debug, thiserror::Error)]
pub enum ConnectError {
    #[error("unsupported shim URL '{0}': expected an http(s):// or ws(s):// URL")]
    UnsupportedScheme(String),
    #[error(transparent)]
    Client(#[from] ClientError),
}

/// Connects to the shim over JSON-RPC, choosing the transport from the URL scheme.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRpcConnector;

#[async_trait]
impl ShimConnector for JsonRpcConnector {
    type Connection = RpcConnection;
    type Error = ConnectError;

    async fn connect(&self, base_url: &str) -> Result<RpcConnection, ConnectError> {
        let connection = match scheme(base_url) {
            Some("http" | "https") => {
                RpcConnection::Http(HttpClientBuilder::default().build(base_url)?)
            }
            Some("ws" | "wss") => {
                RpcConnection::Ws(WsClientBuilder::default().build(base_url).await?)
            }
            _ => return Err(ConnectError::UnsupportedScheme(base_url.to_string())),
        };
        debug!(base_url, transport = connection.transport(), "Connected to ikura shim");
        Ok(connection)
    }
}

fn scheme(url: &str) -> Option<&str> {
    url.split_once("://").map(|(scheme, _)| scheme)
}

/// A JSON-RPC client of the Rollkit dock.
pub enum RpcConnection {
    Http(HttpClient),
    Ws(WsClient),
}

impl RpcConnection {
    fn transport(&self) -> &'static str {
        match self {
            Self::Http(_) => "http",
            Self::Ws(_) => "ws",
        }
    }
}

#[async_trait]
impl ShimConnection for RpcConnection {
    type Error = ClientError;

    async fn submit(&self, namespace: &str, blobs: Vec<Blob>) -> Result<u64, ClientError> {
        let namespace = namespace.to_string();
        match self {
            Self::Http(client) => client.submit(namespace, blobs).await,
            Self::Ws(client) => client.submit(namespace, blobs).await,
        }
    }

    async fn retrieve(&self, namespace: &str, height: u64) -> Result<Vec<Blob>, ClientError> {
        let namespace = namespace.to_string();
        match self {
            Self::Http(client) => client.retrieve(namespace, height).await,
            Self::Ws(client) => client.retrieve(namespace, height).await,
        }
    }
}
