//! Rollkit block layout and its binary encoding.

use borsh::{BorshDeserialize, BorshSerialize};
use serde::{Deserialize, Serialize};

/// A 32-byte hash as it appears in block headers.
pub type Hash = [u8; 32];

/// A raw rollup transaction.
pub type Tx = Vec<u8>;

/// Errors produced while converting blocks to and from their binary form.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    /// Failed to serialize a block: {0}
    #[error("failed to marshal block: {0}")]
    Marshal(#[source] std::io::Error),
    /// Failed to deserialize a block: {0}
    #[error("failed to unmarshal block: {0}")]
    Unmarshal(#[source] std::io::Error),
}

/// The binary encode/decode contract every block type handed to a DA client must satisfy.
///
/// Implementations must round-trip: `unmarshal_binary(&b.marshal_binary()?)? == b`.
pub trait BlockCodec: Sized + Send + Sync + 'static {
    /// Serializes the block into bytes.
    fn marshal_binary(&self) -> Result<Vec<u8>, CodecError>;

    /// Deserializes a block from bytes. The whole input must be consumed.
    fn unmarshal_binary(bytes: &[u8]) -> Result<Self, CodecError>;
}

/// Protocol versions a block was produced with.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Serialize,
    Deserialize,
    BorshSerialize,
    BorshDeserialize,
)]
#[cfg_attr(feature = "arbitrary", derive(proptest_derive::Arbitrary))]
pub struct Version {
    pub block: u64,
    pub app: u64,
}

/// Block header.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
#[cfg_attr(feature = "arbitrary", derive(proptest_derive::Arbitrary))]
pub struct Header {
    pub version: Version,
    pub height: u64,
    /// Unix timestamp in nanoseconds.
    pub time: u64,
    pub chain_id: String,

    /// Hash of the previous block header.
    pub last_header_hash: Hash,
    pub last_commit_hash: Hash,
    /// Hash of the block [`Data`].
    pub data_hash: Hash,
    pub consensus_hash: Hash,
    /// State root after executing the previous block.
    pub app_hash: Hash,
    pub last_results_hash: Hash,

    pub proposer_address: Vec<u8>,
    pub aggregators_hash: Hash,
}

/// Block body.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
#[cfg_attr(feature = "arbitrary", derive(proptest_derive::Arbitrary))]
pub struct Data {
    pub txs: Vec<Tx>,
    pub intermediate_state_roots: Vec<Vec<u8>>,
    pub evidence: Vec<Vec<u8>>,
}

/// Aggregator signatures over the previous block.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
#[cfg_attr(feature = "arbitrary", derive(proptest_derive::Arbitrary))]
pub struct Commit {
    pub height: u64,
    pub header_hash: Hash,
    pub signatures: Vec<Vec<u8>>,
}

/// A rollup block as produced by the aggregator and published to the DA layer.
#[derive(
    Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, BorshSerialize, BorshDeserialize,
)]
#[cfg_attr(feature = "arbitrary", derive(proptest_derive::Arbitrary))]
pub struct Block {
    pub header: Header,
    pub data: Data,
    pub last_commit: Commit,
}

impl Block {
    /// Creates a block at `height` carrying `txs`, with every other field left at its default.
    pub fn new(height: u64, txs: Vec<Tx>) -> Self {
        Self {
            header: Header {
                height,
                ..Default::default()
            },
            data: Data {
                txs,
                ..Default::default()
            },
            last_commit: Commit::default(),
        }
    }

    /// The rollup height of this block.
    pub fn height(&self) -> u64 {
        self.header.height
    }
}

impl BlockCodec for Block {
    fn marshal_binary(&self) -> Result<Vec<u8>, CodecError> {
        borsh::to_vec(self).map_err(CodecError::Marshal)
    }

    fn unmarshal_binary(bytes: &[u8]) -> Result<Self, CodecError> {
        borsh::from_slice(bytes).map_err(CodecError::Unmarshal)
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    fn sample_block() -> Block {
        let mut block = Block::new(7, vec![vec![1, 2, 3], vec![]]);
        block.header.chain_id = "gm".to_string();
        block.header.app_hash = [9; 32];
        block.header.proposer_address = vec![0xaa; 20];
        block.last_commit.signatures = vec![vec![0x55; 64]];
        block
    }

    proptest! {
        #[test]
        fn marshal_then_unmarshal_is_identity(block in any::<Block>()) {
            let bytes = block.marshal_binary().unwrap();
            prop_assert_eq!(Block::unmarshal_binary(&bytes).unwrap(), block);
        }
    }

    #[test]
    fn truncated_bytes_fail_to_unmarshal() {
        let bytes = sample_block().marshal_binary().unwrap();
        let err = Block::unmarshal_binary(&bytes[..bytes.len() - 1]).unwrap_err();
        assert!(matches!(err, CodecError::Unmarshal(_)));
    }

    #[test]
    fn trailing_bytes_fail_to_unmarshal() {
        let mut bytes = sample_block().marshal_binary().unwrap();
        bytes.push(0);
        assert!(Block::unmarshal_binary(&bytes).is_err());
    }

    #[test]
    fn garbage_fails_to_unmarshal() {
        let err = Block::unmarshal_binary(b"definitely not a block").unwrap_err();
        assert!(err.to_string().starts_with("failed to unmarshal block"));
    }

    #[test]
    fn height_comes_from_header() {
        assert_eq!(sample_block().height(), 7);
    }
}
