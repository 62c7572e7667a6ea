//! A batched Ethereum JSON RPC client for chain indexing.
//!
//! Documentation for the node APIs can be found here:
//! <https://ethereum.github.io/execution-apis/>

pub mod client;
pub mod http;
pub mod jsonrpc;
pub mod quantity;
pub mod request;
pub mod transport;
pub mod types;
pub mod variant;

mod debug;
mod serialization;

pub use self::client::{Blocks, Client, Error, NextState, Receipts};
