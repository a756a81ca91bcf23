//! The pieces of the Rollkit rollup framework a data availability layer client plugs into:
//! the block type and its binary encoding, the client traits, operation results and the
//! registry used to select a DA layer by name.

mod block;
mod client;
mod registry;
mod result;
mod store;

pub use block::*;
pub use client::*;
pub use registry::*;
pub use result::*;
pub use store::*;
