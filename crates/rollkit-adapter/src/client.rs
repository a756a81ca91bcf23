use std::marker::PhantomData;
use std::sync::Arc;

use async_trait::async_trait;
use ikura_shim_rollkit_rpc::Blob;
use rollkit_da::{
    Block, BlockCodec, BlockRetriever, CodecError, DataAvailabilityLayerClient, Datastore,
    NamespaceId, ResultRetrieveBlocks, ResultSubmitBlocks,
};
use tracing::{debug, info, instrument, warn};

use crate::{IkuraConfig, JsonRpcConnector, ShimConnection, ShimConnector};

#[derive(Debug, thiserror::Error)]
pub enum IkuraClientError {
    /// The configuration payload is not a valid [`IkuraConfig`].
    #[error("failed to parse ikura config: {0}")]
    Config(#[from] serde_json::Error),
    #[error("failed to connect to ikura shim at '{base_url}': {source}")]
    Connect {
        base_url: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },
    #[error("cannot {operation} ikura client: client is {state}")]
    InvalidState {
        operation: &'static str,
        state: &'static str,
    },
}

/// Failure of a single submit or retrieve call, reported through the result message.
#[derive(Debug, thiserror::Error)]
enum CallError<E: std::error::Error + 'static> {
    #[error("ikura client is not started")]
    NotStarted,
    #[error(transparent)]
    Codec(#[from] CodecError),
    #[error(transparent)]
    Remote(E),
}

type ConnectionError<C> = <<C as ShimConnector>::Connection as ShimConnection>::Error;

enum State<Conn> {
    Uninitialized,
    Initialized,
    Started(Conn),
    Stopped,
}

impl<Conn> State<Conn> {
    fn name(&self) -> &'static str {
        match self {
            State::Uninitialized => "uninitialized",
            State::Initialized => "initialized",
            State::Started(_) => "started",
            State::Stopped => "stopped",
        }
    }
}

/// Rollkit DA layer client that publishes blocks through an ikura shim.
///
/// Lifecycle is `init` (repeatable) -> `start` -> `stop`. A stopped client cannot be started
/// again. Submit and retrieve share the one connection opened by `start`.
pub struct IkuraDaClient<B = Block, C: ShimConnector = JsonRpcConnector> {
    connector: C,
    config: IkuraConfig,
    state: State<C::Connection>,
    _block: PhantomData<fn() -> B>,
}

impl IkuraDaClient {
    /// Creates a client talking JSON-RPC to the shim.
    pub fn new() -> Self {
        Self::with_connector(JsonRpcConnector)
    }
}

impl Default for IkuraDaClient {
    fn default() -> Self {
        Self::new()
    }
}

impl<B: BlockCodec, C: ShimConnector> IkuraDaClient<B, C> {
    pub fn with_connector(connector: C) -> Self {
        Self {
            connector,
            config: IkuraConfig::default(),
            state: State::Uninitialized,
            _block: PhantomData,
        }
    }

    /// The configuration loaded by the last successful `init`.
    pub fn config(&self) -> &IkuraConfig {
        &self.config
    }

    pub fn is_started(&self) -> bool {
        matches!(self.state, State::Started(_))
    }

    fn invalid_state(&self, operation: &'static str) -> IkuraClientError {
        IkuraClientError::InvalidState {
            operation,
            state: self.state.name(),
        }
    }

    fn connection(&self) -> Result<&C::Connection, CallError<ConnectionError<C>>> {
        match &self.state {
            State::Started(connection) => Ok(connection),
            _ => Err(CallError::NotStarted),
        }
    }

    async fn submit_blocks_inner(
        &self,
        blocks: &[B],
    ) -> Result<u64, CallError<ConnectionError<C>>> {
        let connection = self.connection()?;
        let blobs = blocks
            .iter()
            .map(|block| block.marshal_binary().map(Blob::new))
            .collect::<Result<Vec<_>, _>>()?;
        connection
            .submit(&self.config.namespace, blobs)
            .await
            .map_err(CallError::Remote)
    }

    async fn retrieve_blocks_inner(
        &self,
        da_height: u64,
    ) -> Result<Vec<B>, CallError<ConnectionError<C>>> {
        let connection = self.connection()?;
        let blobs = connection
            .retrieve(&self.config.namespace, da_height)
            .await
            .map_err(CallError::Remote)?;
        debug!(da_height, blobs = blobs.len(), "Decoding retrieved blobs");
        blobs
            .iter()
            .map(|blob| B::unmarshal_binary(&blob.data).map_err(CallError::from))
            .collect()
    }
}

#[async_trait]
impl<B: BlockCodec, C: ShimConnector> DataAvailabilityLayerClient for IkuraDaClient<B, C> {
    type Block = B;

    fn init(
        &mut self,
        namespace_id: NamespaceId,
        config: &[u8],
        _kv_store: Arc<dyn Datastore>,
    ) -> anyhow::Result<()> {
        if !matches!(self.state, State::Uninitialized | State::Initialized) {
            return Err(self.invalid_state("init").into());
        }
        if !config.is_empty() {
            info!(
                config = %String::from_utf8_lossy(config),
                "Initializing Ikura Data Availability Layer Client"
            );
            self.config = IkuraConfig::from_json(config).map_err(IkuraClientError::from)?;
        }
        debug!(
            ?namespace_id,
            namespace = %self.config.namespace,
            "Using the configured namespace instead of the node namespace id"
        );
        self.state = State::Initialized;
        Ok(())
    }

    async fn start(&mut self) -> anyhow::Result<()> {
        if !matches!(self.state, State::Initialized) {
            return Err(self.invalid_state("start").into());
        }
        info!(
            base_url = %self.config.base_url,
            "Starting Ikura Data Availability Layer Client"
        );
        let connection = self
            .connector
            .connect(&self.config.base_url)
            .await
            .map_err(|source| IkuraClientError::Connect {
                base_url: self.config.base_url.clone(),
                source: Box::new(source),
            })?;
        self.state = State::Started(connection);
        Ok(())
    }

    async fn stop(&mut self) -> anyhow::Result<()> {
        match std::mem::replace(&mut self.state, State::Stopped) {
            State::Started(connection) => {
                info!("Stopping Ikura Data Availability Layer Client");
                drop(connection);
                Ok(())
            }
            State::Stopped => {
                debug!("Ikura Data Availability Layer Client is already stopped");
                Ok(())
            }
            previous => {
                self.state = previous;
                Err(self.invalid_state("stop").into())
            }
        }
    }

    #[instrument(level = "debug", skip_all, fields(blocks = blocks.len()))]
    async fn submit_blocks(&self, blocks: &[B]) -> ResultSubmitBlocks {
        info!("Submitting blocks to Ikura Data Availability Layer");
        match self.submit_blocks_inner(blocks).await {
            Ok(da_height) => {
                debug!(da_height, "Blocks submitted");
                ResultSubmitBlocks::success(da_height)
            }
            Err(e) => {
                warn!(error = %e, "Failed to submit blocks");
                ResultSubmitBlocks::error(e)
            }
        }
    }
}

#[async_trait]
impl<B: BlockCodec, C: ShimConnector> BlockRetriever for IkuraDaClient<B, C> {
    #[instrument(level = "debug", skip(self))]
    async fn retrieve_blocks(&self, da_height: u64) -> ResultRetrieveBlocks<B> {
        match self.retrieve_blocks_inner(da_height).await {
            Ok(blocks) => {
                debug!(blocks = blocks.len(), "Blocks retrieved");
                ResultRetrieveBlocks::success(da_height, blocks)
            }
            Err(e) => {
                warn!(error = %e, "Failed to retrieve blocks");
                ResultRetrieveBlocks::error(e)
            }
        }
    }
}
