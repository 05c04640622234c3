#![warn(missing_docs)]

//! Ethereum wire types
//!
//! The primitive types and hex codec shared by the JSON-RPC client crates.
//! Fixed-size primitives are re-exported from `alloy-primitives`.

mod block_spec;
/// Codec for the hex wire encodings used by JSON-RPC
pub mod codec;
/// Types for filter-based RPC methods
pub mod filter;
/// Types for Ethereum logs
pub mod log;
/// Helper utilities for serde
pub mod serde;

pub use alloy_primitives::{hex, Address, Bloom, Bytes, B256, B64, U256, U64};

pub use self::{
    block_spec::{BlockSpec, BlockTag},
    codec::CodecError,
};
