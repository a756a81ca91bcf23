use std::sync::Arc;
use std::time::{Duration, Instant};

use ikura_shim_rollkit_rpc::Namespace;
use tokio::sync::RwLock;
use tokio::time;
use tracing::{debug, info};

/// Pause between two checks for a block that has not been produced yet.
pub const WAIT_ATTEMPT_PAUSE: Duration = Duration::from_millis(10);

/// Default number of checks for a not yet produced block before giving up.
pub const DEFAULT_WAIT_ATTEMPTS: u64 = 100;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SimulatorError {
    #[error("No block at height={height} has been produced in {waited:?}")]
    BlockNotAvailable { height: u64, waited: Duration },
}

#[derive(Debug, Default)]
struct SimulatedBlock {
    blobs: Vec<(Namespace, Vec<u8>)>,
}

/// An in-memory DA chain.
///
/// Height 0 is an empty genesis block. Every call to [`SimulatedDa::submit`] seals exactly one
/// new block. Blocks are kept in memory indefinitely and are final as soon as they are sealed.
#[derive(Clone, Debug)]
pub struct SimulatedDa {
    blocks: Arc<RwLock<Vec<SimulatedBlock>>>,
    /// How many times a read for a future height checks again before giving up.
    /// Wait time between attempts is defined by [`WAIT_ATTEMPT_PAUSE`].
    wait_attempts: u64,
}

impl Default for SimulatedDa {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulatedDa {
    /// Creates a chain holding only the genesis block.
    pub fn new() -> Self {
        Self {
            blocks: Arc::new(RwLock::new(vec![SimulatedBlock::default()])),
            wait_attempts: DEFAULT_WAIT_ATTEMPTS,
        }
    }

    /// Sets the number of wait attempts before giving up on waiting for a block.
    pub fn with_wait_attempts(mut self, wait_attempts: u64) -> Self {
        self.wait_attempts = wait_attempts;
        self
    }

    /// Height of the most recently sealed block.
    pub async fn head_height(&self) -> u64 {
        self.blocks.read().await.len() as u64 - 1
    }

    /// Seals a new block containing `blobs` under `namespace` and returns its height.
    pub async fn submit(&self, namespace: Namespace, blobs: Vec<Vec<u8>>) -> u64 {
        let blob_count = blobs.len();
        let mut blocks = self.blocks.write().await;
        blocks.push(SimulatedBlock {
            blobs: blobs.into_iter().map(|data| (namespace, data)).collect(),
        });
        let height = blocks.len() as u64 - 1;
        info!(height, %namespace, blobs = blob_count, "Sealed simulated block");
        height
    }

    /// Returns the blobs under `namespace` at `height`, in submission order.
    pub async fn retrieve(
        &self,
        namespace: Namespace,
        height: u64,
    ) -> Result<Vec<Vec<u8>>, SimulatorError> {
        self.wait_for_height(height).await?;

        let blocks = self.blocks.read().await;
        let blobs: Vec<Vec<u8>> = blocks
            .get(height as usize)
            .map(|block| {
                block
                    .blobs
                    .iter()
                    .filter(|(ns, _)| *ns == namespace)
                    .map(|(_, data)| data.clone())
                    .collect()
            })
            .unwrap_or_default();
        debug!(height, %namespace, blobs = blobs.len(), "Read simulated block");
        Ok(blobs)
    }

    async fn wait_for_height(&self, height: u64) -> Result<(), SimulatorError> {
        let start = Instant::now();
        for attempt in 0..=self.wait_attempts {
            if self.head_height().await >= height {
                return Ok(());
            }
            if attempt < self.wait_attempts {
                time::sleep(WAIT_ATTEMPT_PAUSE).await;
            }
        }
        Err(SimulatorError::BlockNotAvailable {
            height,
            waited: start.elapsed(),
        })
    }
}

#[cfg(test)]
mod tests {
    use ikura_shim_rollkit_rpc::parse_namespace;

    use super::*;

    fn ns(hex: &str) -> Namespace {
        parse_namespace(hex).unwrap()
    }

    #[tokio::test]
    async fn heights_start_after_genesis() {
        let da = SimulatedDa::new();
        assert_eq!(da.head_height().await, 0);
        assert_eq!(da.submit(ns("01"), vec![vec![1]]).await, 1);
        assert_eq!(da.submit(ns("01"), vec![]).await, 2);
        assert_eq!(da.head_height().await, 2);
    }

    #[tokio::test]
    async fn retrieve_filters_by_namespace_and_keeps_order() -> anyhow::Result<()> {
        let da = SimulatedDa::new().with_wait_attempts(0);
        let height = da
            .submit(ns("aa"), vec![vec![1], vec![2], vec![3]])
            .await;

        assert_eq!(
            da.retrieve(ns("aa"), height).await?,
            vec![vec![1], vec![2], vec![3]]
        );
        assert!(da.retrieve(ns("bb"), height).await?.is_empty());
        assert!(da.retrieve(ns("aa"), 0).await?.is_empty());
        Ok(())
    }

    #[tokio::test]
    async fn future_height_fails_after_waiting() {
        let da = SimulatedDa::new().with_wait_attempts(2);
        let err = da.retrieve(ns("aa"), 5).await.unwrap_err();
        let SimulatorError::BlockNotAvailable { height, waited } = err;
        assert_eq!(height, 5);
        assert!(waited >= WAIT_ATTEMPT_PAUSE * 2);
    }

    #[tokio::test(flavor = "multi_thread")]
    async fn waiting_read_sees_block_sealed_later() -> anyhow::Result<()> {
        let da = SimulatedDa::new();
        let reader = {
            let da = da.clone();
            tokio::spawn(async move { da.retrieve(ns("aa"), 1).await })
        };
        time::sleep(WAIT_ATTEMPT_PAUSE * 3).await;
        da.submit(ns("aa"), vec![vec![7]]).await;

        assert_eq!(reader.await??, vec![vec![7]]);
        Ok(())
    }
}
