//! Interfaces implemented by data availability layer clients.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::{BlockCodec, Datastore, ResultRetrieveBlocks, ResultSubmitBlocks};

/// The namespace the rollup node was configured with.
///
/// Clients are free to ignore it in favour of a namespace from their own configuration.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct NamespaceId(pub [u8; 8]);

impl fmt::Debug for NamespaceId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NamespaceId(")?;
        for byte in self.0 {
            write!(f, "{byte:02x}")?;
        }
        write!(f, ")")
    }
}

/// The local side of a connection to a data availability layer.
///
/// The node drives a client through `init`, `start` and eventually `stop`. Block
/// submission is only meaningful between `start` and `stop`.
#[async_trait]
pub trait DataAvailabilityLayerClient: Send + Sync {
    /// The block type this client publishes.
    type Block: BlockCodec;

    /// Loads the client configuration. `config` is the raw, client specific payload the node
    /// operator supplied and may be empty.
    fn init(
        &mut self,
        namespace_id: NamespaceId,
        config: &[u8],
        kv_store: Arc<dyn Datastore>,
    ) -> anyhow::Result<()>;

    /// Connects to the DA layer.
    async fn start(&mut self) -> anyhow::Result<()>;

    /// Disconnects from the DA layer.
    async fn stop(&mut self) -> anyhow::Result<()>;

    /// Publishes `blocks` to the DA layer as a single batch.
    async fn submit_blocks(&self, blocks: &[Self::Block]) -> ResultSubmitBlocks;
}

/// A [`DataAvailabilityLayerClient`] that can also read blocks back.
#[async_trait]
pub trait BlockRetriever: DataAvailabilityLayerClient {
    /// Fetches every block published at `da_height`.
    async fn retrieve_blocks(&self, da_height: u64) -> ResultRetrieveBlocks<Self::Block>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn namespace_id_debug_is_hex() {
        let id = NamespaceId([0, 1, 2, 3, 0xa, 0xb, 0xc, 0xff]);
        assert_eq!(format!("{id:?}"), "NamespaceId(000102030a0b0cff)");
    }
}
