//! Rollkit data availability layer client that publishes blocks through an ikura shim.
//!
//! The client is registered under [`DA_LAYER_NAME`] and configured with a JSON [`IkuraConfig`]:
//!
//! ```no_run
//! # async fn run() -> anyhow::Result<()> {
//! use std::sync::Arc;
//!
//! use ikura_rollkit_adapter::IkuraDaClient;
//! use rollkit_da::{
//!     Block, BlockRetriever, DataAvailabilityLayerClient, InMemoryDatastore, NamespaceId,
//! };
//!
//! let mut client = IkuraDaClient::new();
//! client.init(
//!     NamespaceId::default(),
//!     br#"{"base_url":"http://localhost:10995","namespace":"0102030405060708"}"#,
//!     Arc::new(InMemoryDatastore::new()),
//! )?;
//! client.start().await?;
//! let submitted = client.submit_blocks(&[Block::new(1, vec![])]).await;
//! let retrieved = client.retrieve_blocks(submitted.base.da_height).await;
//! assert_eq!(retrieved.blocks.len(), 1);
//! client.stop().await?;
//! # Ok(())
//! # }
//! ```

mod client;
mod config;
mod connection;

pub use client::{IkuraClientError, IkuraDaClient};
pub use config::IkuraConfig;
pub use connection::{
    ConnectError, JsonRpcConnector, RpcConnection, ShimConnection, ShimConnector,
};
use rollkit_da::{Block, BoxedDaClient, Registry, RegistryError};

/// Name of the ikura DA layer, as passed to the node's `--da.layer` flag.
pub const DA_LAYER_NAME: &str = "ikura";

/// Makes the ikura client available in `registry` under [`DA_LAYER_NAME`].
pub fn register(registry: &mut Registry<Block>) -> Result<(), RegistryError> {
    registry.register(DA_LAYER_NAME, new_boxed_client)
}

fn new_boxed_client() -> BoxedDaClient<Block> {
    Box::new(IkuraDaClient::new())
}
