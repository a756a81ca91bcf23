//! Lookup of DA layer clients by name, as selected with the node's `--da.layer` flag.

use std::collections::HashMap;

use crate::{Block, BlockCodec, BlockRetriever};

/// A boxed DA layer client for blocks of type `B`.
pub type BoxedDaClient<B = Block> = Box<dyn BlockRetriever<Block = B>>;

/// Builds a fresh, uninitialized client.
pub type DaClientConstructor<B = Block> = fn() -> BoxedDaClient<B>;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RegistryError {
    #[error("DA layer name must not be empty")]
    EmptyName,
    #[error("DA layer '{0}' is already registered")]
    AlreadyRegistered(String),
}

/// The set of DA layer clients known to a node.
pub struct Registry<B: BlockCodec = Block> {
    constructors: HashMap<String, DaClientConstructor<B>>,
}

impl<B: BlockCodec> Default for Registry<B> {
    fn default() -> Self {
        Self {
            constructors: HashMap::new(),
        }
    }
}

impl<B: BlockCodec> Registry<B> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the client built by `constructor` available under `name`.
    pub fn register(
        &mut self,
        name: &str,
        constructor: DaClientConstructor<B>,
    ) -> Result<(), RegistryError> {
        if name.is_empty() {
            return Err(RegistryError::EmptyName);
        }
        if self.constructors.contains_key(name) {
            return Err(RegistryError::AlreadyRegistered(name.to_string()));
        }
        self.constructors.insert(name.to_string(), constructor);
        Ok(())
    }

    /// Builds a new client registered under `name`, if any.
    pub fn get(&self, name: &str) -> Option<BoxedDaClient<B>> {
        self.constructors.get(name).map(|constructor| constructor())
    }

    /// Names of all registered DA layers, sorted.
    pub fn registered(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.constructors.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use async_trait::async_trait;

    use super::*;
    use crate::{
        DataAvailabilityLayerClient, Datastore, NamespaceId, ResultRetrieveBlocks,
        ResultSubmitBlocks,
    };

    #[derive(Default)]
    struct NullClient {
        started: bool,
    }

    #[async_trait]
    impl DataAvailabilityLayerClient for NullClient {
        type Block = Block;

        fn init(
            &mut self,
            _namespace_id: NamespaceId,
            _config: &[u8],
            _kv_store: Arc<dyn Datastore>,
        ) -> anyhow::Result<()> {
            Ok(())
        }

        async fn start(&mut self) -> anyhow::Result<()> {
            self.started = true;
            Ok(())
        }

        async fn stop(&mut self) -> anyhow::Result<()> {
            Ok(())
        }

        async fn submit_blocks(&self, _blocks: &[Block]) -> ResultSubmitBlocks {
            if self.started {
                ResultSubmitBlocks::success(1)
            } else {
                ResultSubmitBlocks::error("not started")
            }
        }
    }

    #[async_trait]
    impl BlockRetriever for NullClient {
        async fn retrieve_blocks(&self, da_height: u64) -> ResultRetrieveBlocks<Block> {
            ResultRetrieveBlocks::success(da_height, Vec::new())
        }
    }

    fn null_client() -> BoxedDaClient {
        Box::new(NullClient::default())
    }

    #[test]
    fn rejects_empty_and_duplicate_names() {
        let mut registry = Registry::new();
        assert_eq!(
            registry.register("", null_client),
            Err(RegistryError::EmptyName)
        );
        registry.register("null", null_client).unwrap();
        assert_eq!(
            registry.register("null", null_client),
            Err(RegistryError::AlreadyRegistered("null".to_string()))
        );
        assert!(registry.get("missing").is_none());
    }

    #[test]
    fn lists_names_sorted() {
        let mut registry = Registry::new();
        registry.register("zeta", null_client).unwrap();
        registry.register("alpha", null_client).unwrap();
        assert_eq!(registry.registered(), vec!["alpha", "zeta"]);
    }

    #[tokio::test]
    async fn every_lookup_builds_an_independent_client() {
        let mut registry = Registry::new();
        registry.register("null", null_client).unwrap();

        let mut first = registry.get("null").unwrap();
        let second = registry.get("null").unwrap();
        first.start().await.unwrap();

        assert!(first.submit_blocks(&[]).await.base.is_success());
        assert!(!second.submit_blocks(&[]).await.base.is_success());
        assert_eq!(second.retrieve_blocks(3).await.base.da_height, 3);
    }
}
