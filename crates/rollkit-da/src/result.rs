use std::fmt::Display;

use serde::{Deserialize, Serialize};

/// Outcome of a DA layer operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum StatusCode {
    Success,
    Error,
}

/// Fields shared by the results of every DA layer operation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BaseResult {
    pub code: StatusCode,
    /// Human readable failure description. Empty on success.
    pub message: String,
    /// The DA layer height the operation refers to. Always zero on error.
    pub da_height: u64,
}

impl BaseResult {
    pub fn success(da_height: u64) -> Self {
        Self {
            code: StatusCode::Success,
            message: String::new(),
            da_height,
        }
    }

    pub fn error(message: impl Display) -> Self {
        Self {
            code: StatusCode::Error,
            message: message.to_string(),
            da_height: 0,
        }
    }

    pub fn is_success(&self) -> bool {
        self.code == StatusCode::Success
    }
}

/// Result of [`crate::DataAvailabilityLayerClient::submit_blocks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultSubmitBlocks {
    pub base: BaseResult,
}

impl ResultSubmitBlocks {
    /// The blocks were included at `da_height`.
    pub fn success(da_height: u64) -> Self {
        Self {
            base: BaseResult::success(da_height),
        }
    }

    pub fn error(message: impl Display) -> Self {
        Self {
            base: BaseResult::error(message),
        }
    }
}

/// Result of [`crate::BlockRetriever::retrieve_blocks`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResultRetrieveBlocks<B> {
    pub base: BaseResult,
    /// Decoded blocks, in the order the DA layer returned them. Empty on error.
    pub blocks: Vec<B>,
}

impl<B> ResultRetrieveBlocks<B> {
    pub fn success(da_height: u64, blocks: Vec<B>) -> Self {
        Self {
            base: BaseResult::success(da_height),
            blocks,
        }
    }

    pub fn error(message: impl Display) -> Self {
        Self {
            base: BaseResult::error(message),
            blocks: Vec::new(),
        }
    }
}
